//! # Petstore
//!
//! In-memory owner/pet domain model.
//!
//! Two entity kinds, [`Owner`] and [`Pet`], are registered into a
//! [`PetStore`]. The store plays the role a database would in a persistent
//! system: a pet references its owner by [`OwnerId`] (a foreign key, not a
//! lifetime-extending handle), and owner-side queries scan the registry.
//!
//! ```
//! use petstore::{PetStore, PetType};
//!
//! let mut store = PetStore::new();
//! let alice = store.insert_owner("Alice")?;
//! let rex = store.insert_pet("Rex", PetType::Dog, Some(alice))?;
//!
//! let pets = store.pets_of(alice);
//! assert_eq!(pets.len(), 1);
//! assert_eq!(pets[0].id(), rex);
//! # Ok::<(), petstore::ValidationError>(())
//! ```

pub mod error;
pub mod owner;
pub mod pet;
pub mod store;

pub use error::ValidationError;
pub use owner::{Owner, OwnerId};
pub use pet::{Pet, PetId, PetType};
pub use store::PetStore;
