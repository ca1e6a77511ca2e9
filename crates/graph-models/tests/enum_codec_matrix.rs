use graph_models::enrollment::ITunesPairingMode;
use graph_models::synchronization::{
    SynchronizationStatusCode, SynchronizationTaskExecutionResult,
};
use graph_models::teamwork::{
    TeamworkDeviceActivityState, TeamworkDeviceHealthStatus, TeamworkDeviceType,
    TeamworkUserIdentityType,
};

#[test]
fn closed_enums_roundtrip_every_variant() {
    for v in [
        ITunesPairingMode::Disallow,
        ITunesPairingMode::Allow,
        ITunesPairingMode::RequiresSetup,
    ] {
        assert_eq!(v.as_str().parse::<ITunesPairingMode>().unwrap(), v);
    }
    for v in [
        SynchronizationStatusCode::NotConfigured,
        SynchronizationStatusCode::NotRun,
        SynchronizationStatusCode::Active,
        SynchronizationStatusCode::Paused,
        SynchronizationStatusCode::Quarantine,
    ] {
        assert_eq!(v.as_str().parse::<SynchronizationStatusCode>().unwrap(), v);
    }
    for v in [
        SynchronizationTaskExecutionResult::Succeeded,
        SynchronizationTaskExecutionResult::Failed,
        SynchronizationTaskExecutionResult::EntryLevelErrors,
    ] {
        assert_eq!(
            v.as_str()
                .parse::<SynchronizationTaskExecutionResult>()
                .unwrap(),
            v
        );
    }
}

#[test]
fn closed_enums_reject_unrecognized_strings() {
    let err = "pairAtWill".parse::<ITunesPairingMode>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown ITunesPairingMode value: pairAtWill");

    let err = "active".parse::<SynchronizationStatusCode>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown SynchronizationStatusCode value: active"
    );
}

#[test]
fn evolvable_enums_roundtrip_every_variant() {
    for v in [
        TeamworkDeviceActivityState::Unknown,
        TeamworkDeviceActivityState::Busy,
        TeamworkDeviceActivityState::Idle,
        TeamworkDeviceActivityState::Unavailable,
    ] {
        assert_eq!(
            v.as_str().parse::<TeamworkDeviceActivityState>().unwrap(),
            v
        );
    }
    for v in [
        TeamworkDeviceHealthStatus::Unknown,
        TeamworkDeviceHealthStatus::Offline,
        TeamworkDeviceHealthStatus::Critical,
        TeamworkDeviceHealthStatus::NonUrgent,
        TeamworkDeviceHealthStatus::Healthy,
    ] {
        assert_eq!(v.as_str().parse::<TeamworkDeviceHealthStatus>().unwrap(), v);
    }
    for v in [
        TeamworkDeviceType::TeamsRoom,
        TeamworkDeviceType::SurfaceHub,
        TeamworkDeviceType::Sip,
    ] {
        assert_eq!(v.as_str().parse::<TeamworkDeviceType>().unwrap(), v);
    }
    for v in [
        TeamworkUserIdentityType::AadUser,
        TeamworkUserIdentityType::AnonymousGuest,
        TeamworkUserIdentityType::EmailUser,
    ] {
        assert_eq!(v.as_str().parse::<TeamworkUserIdentityType>().unwrap(), v);
    }
}

#[test]
fn evolvable_enums_preserve_unrecognized_strings() {
    let v: TeamworkDeviceActivityState = "meditating".parse().unwrap();
    assert_eq!(
        v,
        TeamworkDeviceActivityState::Unrecognized("meditating".into())
    );
    // The original wire string comes back out on encode.
    assert_eq!(v.to_string(), "meditating");

    let v: TeamworkDeviceType = "holoLens".parse().unwrap();
    assert_eq!(v.as_str(), "holoLens");
}
