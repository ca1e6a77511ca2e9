//! Management certificate record attached to DEP iOS profiles.

use odata_serialization::{
    AdditionalData, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

/// Certificate with thumbprint, used by Apple Configurator enrollment.
///
/// Not an entity type; carries its own discriminator and open map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagementCertificateWithThumbprint {
    /// The certificate content, PEM.
    pub certificate: Option<String>,
    /// The certificate's thumbprint.
    pub thumbprint: Option<String>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl ManagementCertificateWithThumbprint {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Serializable for ManagementCertificateWithThumbprint {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        writer.write_string_value("certificate", self.certificate.as_deref())?;
        writer.write_string_value("thumbprint", self.thumbprint.as_deref())?;
        writer.write_string_value("@odata.type", self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }
}

impl Parsable for ManagementCertificateWithThumbprint {
    fn new_record() -> Self {
        Self::new()
    }

    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match name {
            "certificate" => self.certificate = node.get_string_value()?,
            "thumbprint" => self.thumbprint = node.get_string_value()?,
            "@odata.type" => self.odata_type = node.get_string_value()?,
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
