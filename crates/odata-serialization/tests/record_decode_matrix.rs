use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use odata_serialization::{
    fill_object, from_json_slice, from_json_value, to_json_value, AdditionalData, JsonParseNode,
    Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct Endpoint {
    url: Option<String>,
    port: Option<i32>,
    additional_data: AdditionalData,
}

impl Serializable for Endpoint {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        writer.write_string_value("url", self.url.as_deref())?;
        writer.write_i32_value("port", self.port)?;
        writer.write_additional_data(&self.additional_data)
    }
}

impl Parsable for Endpoint {
    fn new_record() -> Self {
        Self::default()
    }

    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match name {
            "url" => self.url = node.get_string_value()?,
            "port" => self.port = node.get_i32_value()?,
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

#[derive(Debug, Clone, Default, PartialEq)]
struct Probe {
    name: Option<String>,
    enabled: Option<bool>,
    count: Option<i64>,
    ratio: Option<f64>,
    seen: Option<DateTime<Utc>>,
    payload: Option<Vec<u8>>,
    tags: Option<Vec<String>>,
    endpoints: Option<Vec<Endpoint>>,
    primary: Option<Endpoint>,
    additional_data: AdditionalData,
}

impl Serializable for Probe {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_bool_value("enabled", self.enabled)?;
        writer.write_i64_value("count", self.count)?;
        writer.write_f64_value("ratio", self.ratio)?;
        writer.write_datetime_value("seen", self.seen.as_ref())?;
        writer.write_bytes_value("payload", self.payload.as_deref())?;
        writer.write_collection_of_string_values("tags", self.tags.as_deref())?;
        writer.write_collection_of_object_values("endpoints", self.endpoints.as_deref())?;
        writer.write_object_value("primary", self.primary.as_ref())?;
        writer.write_additional_data(&self.additional_data)
    }
}

impl Parsable for Probe {
    fn new_record() -> Self {
        Self::default()
    }

    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match name {
            "name" => self.name = node.get_string_value()?,
            "enabled" => self.enabled = node.get_bool_value()?,
            "count" => self.count = node.get_i64_value()?,
            "ratio" => self.ratio = node.get_f64_value()?,
            "seen" => self.seen = node.get_datetime_value()?,
            "payload" => self.payload = node.get_bytes_value()?,
            "tags" => self.tags = node.get_collection_of_string_values()?,
            "endpoints" => self.endpoints = node.get_collection_of_object_values()?,
            "primary" => self.primary = node.get_object_value()?,
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

#[test]
fn full_record_roundtrip() {
    let probe = Probe {
        name: Some("edge-1".into()),
        enabled: Some(true),
        count: Some(42),
        ratio: Some(0.5),
        seen: Some(Utc.with_ymd_and_hms(2014, 1, 1, 0, 0, 0).unwrap()),
        payload: Some(b"hello".to_vec()),
        tags: Some(vec!["a".into(), "b".into()]),
        endpoints: Some(vec![
            Endpoint {
                url: Some("https://one".into()),
                port: Some(443),
                ..Default::default()
            },
            Endpoint {
                url: Some("https://two".into()),
                ..Default::default()
            },
        ]),
        primary: Some(Endpoint {
            url: Some("https://primary".into()),
            port: Some(8080),
            ..Default::default()
        }),
        ..Default::default()
    };

    let value = to_json_value(&probe).unwrap();
    let back: Probe = from_json_value(&value).unwrap();
    assert_eq!(back, probe);
}

#[test]
fn absent_and_null_fields_stay_unset() {
    let value = json!({"name": null, "count": 7});
    let probe: Probe = from_json_value(&value).unwrap();
    assert_eq!(probe.name, None);
    assert_eq!(probe.enabled, None);
    assert_eq!(probe.count, Some(7));
    assert!(probe.additional_data.is_empty());
}

#[test]
fn unknown_fields_land_in_additional_data_and_roundtrip() {
    let value = json!({
        "name": "edge-2",
        "@odata.context": "https://graph.example/$metadata#probes",
        "custom": {"nested": [1, 2, 3]}
    });
    let probe: Probe = from_json_value(&value).unwrap();
    assert_eq!(probe.additional_data.len(), 2);
    assert_eq!(
        probe.additional_data["@odata.context"],
        json!("https://graph.example/$metadata#probes")
    );

    let out = to_json_value(&probe).unwrap();
    assert_eq!(out, value);
}

#[test]
fn first_field_error_aborts_the_record() {
    let value = json!({"name": "ok", "count": "not a number"});
    let err = from_json_value::<Probe>(&value).unwrap_err();
    assert_eq!(err.to_string(), "expected i64 value, found string");

    // A bad element inside a nested collection propagates the same way.
    let value = json!({"endpoints": [{"url": "ok"}, {"port": true}]});
    assert!(from_json_value::<Probe>(&value).is_err());
}

#[test]
fn collection_order_is_preserved() {
    let value = json!({"tags": ["z", "a", "m"]});
    let probe: Probe = from_json_value(&value).unwrap();
    assert_eq!(
        probe.tags,
        Some(vec!["z".to_string(), "a".to_string(), "m".to_string()])
    );
}

#[test]
fn null_elements_in_string_collections_are_skipped() {
    let value = json!({"tags": ["a", null, "b"]});
    let probe: Probe = from_json_value(&value).unwrap();
    assert_eq!(probe.tags, Some(vec!["a".to_string(), "b".to_string()]));

    // A non-string, non-null element is still an error.
    let value = json!({"tags": ["a", 3]});
    assert!(from_json_value::<Probe>(&value).is_err());
}

#[test]
fn byte_entry_points_roundtrip() {
    let probe = Probe {
        name: Some("bytes".into()),
        ..Default::default()
    };
    let bytes = odata_serialization::to_json_vec(&probe).unwrap();
    let back: Probe = from_json_slice(&bytes).unwrap();
    assert_eq!(back, probe);

    assert!(from_json_slice::<Probe>(b"{ not json").is_err());
}

#[test]
fn fill_object_merges_into_an_existing_record() {
    let mut probe = Probe {
        name: Some("pre-set".into()),
        enabled: Some(true),
        ..Default::default()
    };

    let value = json!({"name": "from-wire", "count": 9, "extra": "x"});
    fill_object(&mut probe, &JsonParseNode::new(&value)).unwrap();

    // Wire fields overwrite, untouched fields survive, unknowns accumulate.
    assert_eq!(probe.name.as_deref(), Some("from-wire"));
    assert_eq!(probe.enabled, Some(true));
    assert_eq!(probe.count, Some(9));
    assert_eq!(probe.additional_data["extra"], json!("x"));
}

#[test]
fn decoding_a_non_object_fails() {
    let value = json!([1, 2, 3]);
    let err = from_json_value::<Probe>(&value).unwrap_err();
    assert_eq!(err.to_string(), "expected object value, found array");
}
