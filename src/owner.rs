//! Owner entity.
//!
//! An `Owner` is a person who may hold zero or more pets. Owners do not keep
//! a collection of their pets; they discover them by querying the
//! [`PetStore`](crate::store::PetStore) registry, the way a `has_many`
//! relationship resolves through a foreign key.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::pet::Pet;
use crate::store::PetStore;

/// Opaque identity handle for an [`Owner`]
///
/// Ids are random UUIDs: two owners sharing a display name never compare
/// equal, and a handle minted by one store never aliases an owner held in
/// another. Ownership matching is always id equality, never name equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(Uuid);

impl OwnerId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pet-owning entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    id: OwnerId,
    name: String,
}

impl Owner {
    /// Create a new owner
    ///
    /// # Arguments
    ///
    /// * `name` - Display name; must be non-empty after trimming surrounding
    ///   whitespace. Stored verbatim (the trim is a check, not a rewrite).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is empty or
    /// whitespace-only.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName {
                field: "Owner.name",
            });
        }
        Ok(Self {
            id: OwnerId::generate(),
            name: name.to_string(),
        })
    }

    pub fn id(&self) -> OwnerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All pets owned by this owner, in registry insertion order
    ///
    /// Convenience over [`PetStore::pets_of`]; linear in the total number of
    /// registered pets.
    pub fn pets<'a>(&self, store: &'a PetStore) -> Vec<&'a Pet> {
        store.pets_of(self.id)
    }

    /// This owner's pets sorted ascending by name
    ///
    /// Convenience over [`PetStore::sorted_pets_of`].
    pub fn sorted_pets<'a>(&self, store: &'a PetStore) -> Vec<&'a Pet> {
        store.sorted_pets_of(self.id)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Owner(name: {:?})", self.name)
    }
}
