//! Abstract parse-node / serialization-writer layer for OData wire payloads.
//!
//! A [`ParseNode`] supplies typed getters over one node of a decoded payload
//! and a [`SerializationWriter`] the mirror-image setters; [`Parsable`] and
//! [`Serializable`] are the seams a typed record implements against them.
//! The decode driver ([`parse_object`]) routes every wire field the record
//! does not claim into its [`AdditionalData`] map, so unknown fields survive
//! a decode-then-encode round trip.
//!
//! The one concrete backing is JSON ([`json`]); the traits keep the record
//! layer independent of it.

mod error;
pub mod json;
mod parsable;
mod parse_node;
mod writer;

pub use error::{EnumParseError, SerializationError};
pub use json::{
    from_json_slice, from_json_value, to_json_value, to_json_vec, JsonParseNode,
    JsonSerializationWriter,
};
pub use parsable::{AdditionalData, Parsable, Serializable};
pub use parse_node::{fill_object, parse_object, ParseNode};
pub use writer::SerializationWriter;
