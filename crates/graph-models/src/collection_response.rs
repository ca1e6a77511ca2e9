//! Pagination envelope for collection endpoints.

use odata_serialization::{
    AdditionalData, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

/// One page of a collection, with its paging metadata.
///
/// Element order and count are preserved through a round trip. Following
/// `@odata.nextLink` is the caller's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionResponse<T> {
    /// Total count of items across pages, when requested.
    pub odata_count: Option<i64>,
    /// Link to the next page, absent on the last page.
    pub odata_next_link: Option<String>,
    /// The page's items.
    pub value: Option<Vec<T>>,
    pub additional_data: AdditionalData,
}

impl<T> CollectionResponse<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Default for CollectionResponse<T> {
    fn default() -> Self {
        Self {
            odata_count: None,
            odata_next_link: None,
            value: None,
            additional_data: AdditionalData::new(),
        }
    }
}

impl<T: Serializable> Serializable for CollectionResponse<T> {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        writer.write_i64_value("@odata.count", self.odata_count)?;
        writer.write_string_value("@odata.nextLink", self.odata_next_link.as_deref())?;
        writer.write_collection_of_object_values("value", self.value.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }
}

impl<T: Parsable> Parsable for CollectionResponse<T> {
    fn new_record() -> Self {
        Self::new()
    }

    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match name {
            "@odata.count" => self.odata_count = node.get_i64_value()?,
            "@odata.nextLink" => self.odata_next_link = node.get_string_value()?,
            "value" => self.value = node.get_collection_of_object_values()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}
