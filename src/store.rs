//! The pet registry and association operations.
//!
//! `PetStore` is the explicit registry every pet is inserted into. It stands
//! in for the process-wide list a persistent system would keep in a table:
//! owners and pets live here, pets reference owners by id, and the
//! `has_many` / `belongs_to` queries resolve as linear scans over those ids.
//!
//! The pet side of the registry is append-only: there is no removal
//! operation, only [`PetStore::clear`] for whole-store teardown between
//! tests.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::owner::{Owner, OwnerId};
use crate::pet::{Pet, PetId, PetType};

/// Registry of all owners and pets, and the home of every mutation
///
/// Construct one per logical process (or per test) and route all entity
/// creation through it. All queries are linear scans; the domain is not
/// indexed, matching its O(total pets) contract.
///
/// Single-threaded by design: wrap the store in a mutex before sharing it
/// across threads.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PetStore {
    owners: Vec<Owner>,
    pets: Vec<Pet>,
}

impl PetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register a new owner
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank; nothing
    /// is registered on failure.
    pub fn insert_owner(&mut self, name: &str) -> Result<OwnerId, ValidationError> {
        let owner = Owner::new(name)?;
        let id = owner.id();
        log::debug!("registered owner {} (name: {:?})", id, owner.name());
        self.owners.push(owner);
        Ok(id)
    }

    /// Validate and register a new pet
    ///
    /// All validation runs before the registry append: on failure the store
    /// is untouched and no half-initialized pet exists anywhere. Pets enter
    /// the registry in construction order and are never removed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] for a blank name, or
    /// [`ValidationError::UnknownOwner`] when `owner` is given but not
    /// registered in this store.
    pub fn insert_pet(
        &mut self,
        name: &str,
        pet_type: PetType,
        owner: Option<OwnerId>,
    ) -> Result<PetId, ValidationError> {
        let pet = Pet::new(name, pet_type, owner)?;
        if let Some(owner_id) = owner {
            self.require_owner(owner_id)?;
        }
        let id = pet.id();
        log::debug!(
            "registered pet {} (name: {:?}, type: {}, owner: {:?})",
            id,
            pet.name(),
            pet.pet_type(),
            owner,
        );
        self.pets.push(pet);
        Ok(id)
    }

    /// String-typed variant of [`PetStore::insert_pet`]
    ///
    /// Parses `pet_type` through [`PetType::from_str`](std::str::FromStr)
    /// first, so untyped input fails with the allowed set in the message.
    pub fn insert_pet_from_str(
        &mut self,
        name: &str,
        pet_type: &str,
        owner: Option<OwnerId>,
    ) -> Result<PetId, ValidationError> {
        let pet_type = pet_type.parse::<PetType>()?;
        self.insert_pet(name, pet_type, owner)
    }

    /// Look up an owner by id
    pub fn owner(&self, id: OwnerId) -> Option<&Owner> {
        self.owners.iter().find(|owner| owner.id() == id)
    }

    /// Look up a pet by id
    pub fn pet(&self, id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id() == id)
    }

    /// Point a pet's owner reference at `owner`
    ///
    /// Idempotent when `owner` is already the current owner; reassignment to
    /// a different owner is always allowed. No operation returns a pet to
    /// the unowned state.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownOwner`] or
    /// [`ValidationError::UnknownPet`] when either id is not registered
    /// here; the pet is untouched on failure.
    pub fn assign_owner(&mut self, pet: PetId, owner: OwnerId) -> Result<(), ValidationError> {
        self.require_owner(owner)?;
        let slot = self
            .pets
            .iter_mut()
            .find(|candidate| candidate.id() == pet)
            .ok_or(ValidationError::UnknownPet { id: pet })?;
        slot.set_owner(owner);
        log::debug!("pet {} now owned by {}", pet, owner);
        Ok(())
    }

    /// Owner-side attach: give `owner` the pet `pet`
    ///
    /// Checks the pet handle, then delegates to
    /// [`PetStore::assign_owner`]. Mutates the pet, not the owner.
    pub fn add_pet(&mut self, owner: OwnerId, pet: PetId) -> Result<(), ValidationError> {
        if self.pet(pet).is_none() {
            return Err(ValidationError::UnknownPet { id: pet });
        }
        self.assign_owner(pet, owner)
    }

    /// All pets whose owner reference is `owner`, in registry order
    ///
    /// An id that was never registered simply matches nothing.
    pub fn pets_of(&self, owner: OwnerId) -> Vec<&Pet> {
        self.pets
            .iter()
            .filter(|pet| pet.owner() == Some(owner))
            .collect()
    }

    /// [`PetStore::pets_of`] sorted ascending by pet name
    ///
    /// Code-point ordering; equal names keep their registry order (the sort
    /// is stable).
    pub fn sorted_pets_of(&self, owner: OwnerId) -> Vec<&Pet> {
        let mut pets = self.pets_of(owner);
        pets.sort_by(|a, b| a.name().cmp(b.name()));
        pets
    }

    /// Diagnostic line for a pet with its owner's name resolved
    ///
    /// Returns `None` for an unregistered id. Unowned pets render their
    /// owner as `none`.
    pub fn describe_pet(&self, id: PetId) -> Option<String> {
        let pet = self.pet(id)?;
        let owner_name = pet
            .owner()
            .and_then(|owner_id| self.owner(owner_id))
            .map(Owner::name);
        Some(match owner_name {
            Some(name) => format!(
                "Pet(name: {:?}, type: {}, owner: {:?})",
                pet.name(),
                pet.pet_type(),
                name
            ),
            None => format!(
                "Pet(name: {:?}, type: {}, owner: none)",
                pet.name(),
                pet.pet_type()
            ),
        })
    }

    pub fn owner_count(&self) -> usize {
        self.owners.len()
    }

    pub fn pet_count(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty() && self.pets.is_empty()
    }

    /// Iterate all registered pets in insertion order
    pub fn iter_pets(&self) -> impl Iterator<Item = &Pet> {
        self.pets.iter()
    }

    /// Iterate all registered owners in insertion order
    pub fn iter_owners(&self) -> impl Iterator<Item = &Owner> {
        self.owners.iter()
    }

    /// Drop every owner and pet
    ///
    /// The teardown operation for test isolation; the domain itself has no
    /// entity removal.
    pub fn clear(&mut self) {
        log::debug!(
            "clearing store ({} owner(s), {} pet(s))",
            self.owners.len(),
            self.pets.len()
        );
        self.owners.clear();
        self.pets.clear();
    }

    fn require_owner(&self, id: OwnerId) -> Result<(), ValidationError> {
        if self.owner(id).is_some() {
            Ok(())
        } else {
            Err(ValidationError::UnknownOwner { id })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_owner_and_lookup() {
        let mut store = PetStore::new();
        let alice = store.insert_owner("Alice").unwrap();

        assert_eq!(store.owner(alice).unwrap().name(), "Alice");
        assert_eq!(store.owner_count(), 1);
    }

    #[test]
    fn test_insert_pet_with_unknown_owner_registers_nothing() {
        let mut other = PetStore::new();
        let stray_id = other.insert_owner("Bob").unwrap();

        let mut store = PetStore::new();
        let err = store
            .insert_pet("Rex", PetType::Dog, Some(stray_id))
            .unwrap_err();

        assert_eq!(err, ValidationError::UnknownOwner { id: stray_id });
        // Failed validation must not append to the registry
        assert_eq!(store.pet_count(), 0);
    }

    #[test]
    fn test_blank_pet_name_registers_nothing() {
        let mut store = PetStore::new();
        let err = store.insert_pet("  ", PetType::Cat, None).unwrap_err();

        assert_eq!(err, ValidationError::EmptyName { field: "Pet.name" });
        assert_eq!(store.pet_count(), 0);
    }

    #[test]
    fn test_assign_owner_is_idempotent() {
        let mut store = PetStore::new();
        let alice = store.insert_owner("Alice").unwrap();
        let rex = store.insert_pet("Rex", PetType::Dog, Some(alice)).unwrap();

        store.assign_owner(rex, alice).unwrap();
        assert_eq!(store.pet(rex).unwrap().owner(), Some(alice));
        assert_eq!(store.pets_of(alice).len(), 1);
    }

    #[test]
    fn test_clear_empties_the_store() {
        let mut store = PetStore::new();
        let alice = store.insert_owner("Alice").unwrap();
        store.insert_pet("Rex", PetType::Dog, Some(alice)).unwrap();

        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.owner_count(), 0);
        assert_eq!(store.pet_count(), 0);
        assert!(store.owner(alice).is_none());
    }
}
