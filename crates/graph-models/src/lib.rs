//! Typed Microsoft Graph beta models over the OData serialization layer.
//!
//! Records mirror remote resource schemas: every property is independently
//! optional, "inheritance" is explicit composition on an [`Entity`] base,
//! unknown wire fields ride along in each record's additional-data map, and
//! polymorphic families decode through a single discriminator table (see
//! [`enrollment::DepEnrollmentProfile`]).

mod collection_response;
mod entity;
pub mod enrollment;
pub mod synchronization;
pub mod teamwork;

pub use collection_response::CollectionResponse;
pub use entity::Entity;
