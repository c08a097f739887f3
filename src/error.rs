//! Error types for domain validation.
//!
//! This module provides the `ValidationError` enum, the single error kind
//! raised when an input fails a domain invariant check. Errors surface to
//! the immediate caller and are never recovered internally.

use crate::owner::OwnerId;
use crate::pet::{PetId, PetType};

/// Error type for domain validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name empty or whitespace-only after trimming
    EmptyName { field: &'static str },
    /// Pet type string not in the allowed set
    InvalidPetType { given: String },
    /// Owner id not registered in the store
    UnknownOwner { id: OwnerId },
    /// Pet id not registered in the store
    UnknownPet { id: PetId },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyName { field } => {
                write!(f, "{} must be a non-empty string", field)
            }
            ValidationError::InvalidPetType { given } => {
                write!(f, "Invalid pet_type: {:?}. Allowed: ", given)?;
                for (i, pet_type) in PetType::ALL.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", pet_type)?;
                }
                Ok(())
            }
            ValidationError::UnknownOwner { id } => {
                write!(f, "Owner {} is not registered in this store", id)
            }
            ValidationError::UnknownPet { id } => {
                write!(f, "Pet {} is not registered in this store", id)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_message() {
        let err = ValidationError::EmptyName {
            field: "Owner.name",
        };
        assert_eq!(err.to_string(), "Owner.name must be a non-empty string");
    }

    #[test]
    fn test_invalid_pet_type_lists_allowed_set() {
        let err = ValidationError::InvalidPetType {
            given: "fish".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid pet_type: \"fish\". Allowed: dog, cat, rodent, bird, reptile, exotic"
        );
    }
}
