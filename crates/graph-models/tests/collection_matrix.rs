use odata_serialization::{from_json_value, to_json_value, JsonParseNode, ParseNode};
use serde_json::json;

use graph_models::enrollment::DepEnrollmentProfile;
use graph_models::teamwork::TeamworkDevice;
use graph_models::CollectionResponse;

#[test]
fn collection_preserves_order_and_count() {
    let payload = json!({
        "@odata.count": 3,
        "@odata.nextLink": "https://graph.example/beta/teamwork/devices?$skiptoken=abc",
        "value": [
            {"id": "dev-3", "notes": "third"},
            {"id": "dev-1", "notes": "first"},
            {"id": "dev-2", "notes": "second"}
        ]
    });
    let page: CollectionResponse<TeamworkDevice> = from_json_value(&payload).unwrap();
    assert_eq!(page.odata_count, Some(3));
    assert!(page.odata_next_link.is_some());

    let ids: Vec<&str> = page
        .value
        .as_ref()
        .unwrap()
        .iter()
        .map(|d| d.entity.id.as_deref().unwrap())
        .collect();
    assert_eq!(ids, vec!["dev-3", "dev-1", "dev-2"]);

    let out = to_json_value(&page).unwrap();
    let back: CollectionResponse<TeamworkDevice> = from_json_value(&out).unwrap();
    assert_eq!(back, page);
}

#[test]
fn empty_page_roundtrips() {
    let payload = json!({"value": []});
    let page: CollectionResponse<TeamworkDevice> = from_json_value(&payload).unwrap();
    assert_eq!(page.value, Some(vec![]));
    assert_eq!(page.odata_count, None);
    assert_eq!(page.odata_next_link, None);
}

#[test]
fn collection_level_unknowns_ride_along() {
    let payload = json!({
        "@odata.context": "https://graph.example/beta/$metadata#devices",
        "value": [{"id": "dev-1"}]
    });
    let page: CollectionResponse<TeamworkDevice> = from_json_value(&payload).unwrap();
    assert_eq!(
        page.additional_data["@odata.context"],
        json!("https://graph.example/beta/$metadata#devices")
    );
    assert_eq!(to_json_value(&page).unwrap(), payload);
}

#[test]
fn polymorphic_elements_decode_through_the_family_factory() {
    let payload = json!([
        {"@odata.type": "#microsoft.graph.depIOSEnrollmentProfile", "enableSharedIPad": true},
        {"@odata.type": "#microsoft.graph.depMacOSEnrollmentProfile"},
        {"displayName": "untyped"}
    ]);
    let node = JsonParseNode::new(&payload);
    let profiles = node
        .get_collection_of_object_values_with(DepEnrollmentProfile::from_parse_node)
        .unwrap()
        .unwrap();

    assert_eq!(profiles.len(), 3);
    assert!(matches!(profiles[0], DepEnrollmentProfile::Ios(_)));
    assert!(matches!(profiles[1], DepEnrollmentProfile::MacOs(_)));
    assert!(matches!(profiles[2], DepEnrollmentProfile::Base(_)));
}
