use odata_serialization::{to_json_value, JsonParseNode};
use serde_json::json;

use graph_models::enrollment::{
    DepEnrollmentBaseProfile, DepEnrollmentProfile, DepIosEnrollmentProfile,
    DepMacOsEnrollmentProfile,
};

#[test]
fn known_discriminator_yields_the_subtype() {
    let payload = json!({
        "@odata.type": "#microsoft.graph.depMacOSEnrollmentProfile",
        "displayName": "Mac fleet",
        "fileVaultDisabled": true
    });
    let profile = DepEnrollmentProfile::from_parse_node(&JsonParseNode::new(&payload)).unwrap();
    match profile {
        DepEnrollmentProfile::MacOs(p) => {
            assert_eq!(
                p.dep_enrollment_base_profile
                    .enrollment_profile
                    .display_name
                    .as_deref(),
                Some("Mac fleet")
            );
            assert_eq!(p.file_vault_disabled, Some(true));
        }
        other => panic!("expected MacOs variant, got {other:?}"),
    }

    let payload = json!({
        "@odata.type": "#microsoft.graph.depIOSEnrollmentProfile",
        "iTunesPairingMode": "allow"
    });
    let profile = DepEnrollmentProfile::from_parse_node(&JsonParseNode::new(&payload)).unwrap();
    assert!(matches!(profile, DepEnrollmentProfile::Ios(_)));
}

#[test]
fn missing_discriminator_yields_the_base_type() {
    let payload = json!({"displayName": "untagged"});
    let profile = DepEnrollmentProfile::from_parse_node(&JsonParseNode::new(&payload)).unwrap();
    match &profile {
        DepEnrollmentProfile::Base(p) => {
            assert_eq!(p.enrollment_profile.display_name.as_deref(), Some("untagged"));
            // The freshly constructed base keeps its own default tag.
            assert_eq!(profile.odata_type(), Some(DepEnrollmentBaseProfile::ODATA_TYPE));
        }
        other => panic!("expected Base variant, got {other:?}"),
    }
}

#[test]
fn unrecognized_discriminator_yields_the_base_type() {
    let payload = json!({
        "@odata.type": "#microsoft.graph.depVisionOSEnrollmentProfile",
        "supportDepartment": "IT"
    });
    let profile = DepEnrollmentProfile::from_parse_node(&JsonParseNode::new(&payload)).unwrap();
    match profile {
        DepEnrollmentProfile::Base(p) => {
            assert_eq!(p.support_department.as_deref(), Some("IT"));
            // The wire tag wins over the construction-time default.
            assert_eq!(
                p.enrollment_profile.entity.odata_type.as_deref(),
                Some("#microsoft.graph.depVisionOSEnrollmentProfile")
            );
        }
        other => panic!("expected Base variant, got {other:?}"),
    }
}

#[test]
fn construction_sets_the_fixed_discriminator() {
    assert_eq!(
        DepEnrollmentBaseProfile::new()
            .enrollment_profile
            .entity
            .odata_type
            .as_deref(),
        Some("#microsoft.graph.depEnrollmentBaseProfile")
    );
    assert_eq!(
        DepIosEnrollmentProfile::new()
            .dep_enrollment_base_profile
            .enrollment_profile
            .entity
            .odata_type
            .as_deref(),
        Some("#microsoft.graph.depIOSEnrollmentProfile")
    );
    assert_eq!(
        DepMacOsEnrollmentProfile::new()
            .dep_enrollment_base_profile
            .enrollment_profile
            .entity
            .odata_type
            .as_deref(),
        Some("#microsoft.graph.depMacOSEnrollmentProfile")
    );
}

#[test]
fn union_roundtrips_through_its_own_tag() {
    let mut ios = DepIosEnrollmentProfile::new();
    ios.enable_shared_ipad = Some(true);
    ios.shared_ipad_maximum_user_count = Some(12);

    let value = to_json_value(&DepEnrollmentProfile::Ios(ios.clone())).unwrap();
    let back = DepEnrollmentProfile::from_parse_node(&JsonParseNode::new(&value)).unwrap();
    assert_eq!(back, DepEnrollmentProfile::Ios(ios));
}
