//! Discriminator-driven decode for the DEP enrollment-profile family.

use odata_serialization::{
    parse_object, ParseNode, Serializable, SerializationError, SerializationWriter,
};

use super::{DepEnrollmentBaseProfile, DepIosEnrollmentProfile, DepMacOsEnrollmentProfile};

/// The DEP profile family as a sealed union, tagged by `@odata.type`.
#[derive(Debug, Clone, PartialEq)]
pub enum DepEnrollmentProfile {
    Base(DepEnrollmentBaseProfile),
    Ios(DepIosEnrollmentProfile),
    MacOs(DepMacOsEnrollmentProfile),
}

#[derive(Debug, Clone, Copy)]
enum Tag {
    Ios,
    MacOs,
}

/// Every subtype the family can materialize, in one place.
const DISPATCH: &[(&str, Tag)] = &[
    (DepIosEnrollmentProfile::ODATA_TYPE, Tag::Ios),
    (DepMacOsEnrollmentProfile::ODATA_TYPE, Tag::MacOs),
];

impl DepEnrollmentProfile {
    /// Peeks the node's `@odata.type` and materializes the matching subtype.
    ///
    /// A missing or unrecognized discriminator yields the base variant.
    pub fn from_parse_node<N: ParseNode>(node: &N) -> Result<Self, SerializationError> {
        let discriminator = match node.get_child_node("@odata.type")? {
            Some(child) => child.get_string_value()?,
            None => None,
        };
        let tag = discriminator
            .as_deref()
            .and_then(|d| DISPATCH.iter().find(|(name, _)| *name == d))
            .map(|(_, tag)| *tag);
        Ok(match tag {
            Some(Tag::Ios) => Self::Ios(parse_object(node)?),
            Some(Tag::MacOs) => Self::MacOs(parse_object(node)?),
            None => Self::Base(parse_object(node)?),
        })
    }

    /// The shared DEP base fields, whichever variant this is.
    pub fn as_dep_base(&self) -> &DepEnrollmentBaseProfile {
        match self {
            Self::Base(p) => p,
            Self::Ios(p) => &p.dep_enrollment_base_profile,
            Self::MacOs(p) => &p.dep_enrollment_base_profile,
        }
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.as_dep_base()
            .enrollment_profile
            .entity
            .odata_type
            .as_deref()
    }
}

impl Serializable for DepEnrollmentProfile {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        match self {
            Self::Base(p) => p.serialize(writer),
            Self::Ios(p) => p.serialize(writer),
            Self::MacOs(p) => p.serialize(writer),
        }
    }
}
