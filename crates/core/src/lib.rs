//! `stockroom-core`: identifiers, errors and the entity/value-object
//! vocabulary shared by the product and inventory crates.
//!
//! No I/O lives here.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, MovementId, ProductId};
pub use value_object::ValueObject;
