//! Pet entity and the closed pet-type classification.
//!
//! A `Pet` carries a validated name, a [`PetType`] drawn from a fixed set,
//! and an optional owner reference. The reference is a plain [`OwnerId`]
//! (the `belongs_to` side of the relationship); whether it resolves to a
//! registered owner is the store's concern, not the entity's.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::owner::OwnerId;

/// Classification of a pet
///
/// The set is closed. String input enters through [`FromStr`] and matching
/// is exact and case-sensitive: `"dog"` parses, `"Dog"` and `"fish"` do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
    Rodent,
    Bird,
    Reptile,
    Exotic,
}

impl PetType {
    /// All allowed types, in declaration order
    pub const ALL: [PetType; 6] = [
        PetType::Dog,
        PetType::Cat,
        PetType::Rodent,
        PetType::Bird,
        PetType::Reptile,
        PetType::Exotic,
    ];

    /// Lowercase name of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
            PetType::Rodent => "rodent",
            PetType::Bird => "bird",
            PetType::Reptile => "reptile",
            PetType::Exotic => "exotic",
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PetType::ALL
            .iter()
            .copied()
            .find(|pet_type| pet_type.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidPetType {
                given: s.to_string(),
            })
    }
}

/// Opaque identity handle for a [`Pet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(Uuid);

impl PetId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An animal with a name, a classification, and an optional owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    id: PetId,
    name: String,
    pet_type: PetType,
    owner: Option<OwnerId>,
}

impl Pet {
    /// Create a new pet
    ///
    /// # Arguments
    ///
    /// * `name` - Must be non-empty after trimming; stored verbatim.
    /// * `pet_type` - The classification; already a member of the closed set
    ///   by construction (parse untyped input via [`PetType::from_str`]).
    /// * `owner` - Optional owner reference, carried as given. Existence of
    ///   the owner is checked at registration time by
    ///   [`PetStore::insert_pet`](crate::store::PetStore::insert_pet).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is empty or
    /// whitespace-only.
    pub fn new(
        name: &str,
        pet_type: PetType,
        owner: Option<OwnerId>,
    ) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName { field: "Pet.name" });
        }
        Ok(Self {
            id: PetId::generate(),
            name: name.to_string(),
            pet_type,
            owner,
        })
    }

    pub fn id(&self) -> PetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pet_type(&self) -> PetType {
        self.pet_type
    }

    /// Current owner reference, or `None` while unowned
    pub fn owner(&self) -> Option<OwnerId> {
        self.owner
    }

    // Association changes go through PetStore::assign_owner, which validates
    // the id against the registry first.
    pub(crate) fn set_owner(&mut self, owner: OwnerId) {
        self.owner = Some(owner);
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.owner {
            Some(owner) => write!(
                f,
                "Pet(name: {:?}, type: {}, owner: {})",
                self.name, self.pet_type, owner
            ),
            None => write!(
                f,
                "Pet(name: {:?}, type: {}, owner: none)",
                self.name, self.pet_type
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_type_parses_every_member() {
        for pet_type in PetType::ALL {
            assert_eq!(pet_type.as_str().parse::<PetType>().unwrap(), pet_type);
        }
    }

    #[test]
    fn test_pet_type_rejects_unknown_strings() {
        // Case-sensitive, exact: no normalization of any kind
        for bad in ["fish", "Dog", "DOG", " dog", "dog ", ""] {
            let err = bad.parse::<PetType>().unwrap_err();
            assert_eq!(
                err,
                ValidationError::InvalidPetType {
                    given: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn test_pet_type_display_matches_as_str() {
        assert_eq!(PetType::Dog.to_string(), "dog");
        assert_eq!(PetType::Exotic.to_string(), "exotic");
    }

    #[test]
    fn test_pet_new_rejects_blank_names() {
        for name in ["", "  ", "\t\n"] {
            let err = Pet::new(name, PetType::Cat, None).unwrap_err();
            assert_eq!(err, ValidationError::EmptyName { field: "Pet.name" });
        }
    }

    #[test]
    fn test_pet_new_defaults_to_unowned() {
        let pet = Pet::new("Rex", PetType::Dog, None).unwrap();
        assert_eq!(pet.owner(), None);
    }

    #[test]
    fn test_pet_display_unowned() {
        let pet = Pet::new("Rex", PetType::Dog, None).unwrap();
        assert_eq!(pet.to_string(), "Pet(name: \"Rex\", type: dog, owner: none)");
    }
}
