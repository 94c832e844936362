use regex::Regex;

use super::SessionId;

fn uuid_v4_pattern() -> Regex {
    return Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .unwrap();
}

#[test]
fn it_generates_uuid_v4_shaped_ids() {
    let pattern = uuid_v4_pattern();
    for _ in 0..200 {
        let id = SessionId::generate();
        assert!(pattern.is_match(id.as_str()), "{id} is not UUID v4 shaped");
        assert!(SessionId::is_valid(id.as_str()));
    }
}

#[test]
fn it_generates_unique_ids() {
    assert_ne!(SessionId::generate(), SessionId::generate());
}

#[test]
fn it_validates_shape() {
    assert!(SessionId::is_valid("0f8e2a4c-1b3d-4e5f-9a7b-0123456789ab"));
    assert!(SessionId::is_valid("00000000-0000-4000-b000-000000000000"));

    // Version nibble.
    assert!(!SessionId::is_valid("0f8e2a4c-1b3d-3e5f-9a7b-0123456789ab"));
    // Variant nibble.
    assert!(!SessionId::is_valid("0f8e2a4c-1b3d-4e5f-c a7b-0123456789ab"));
    assert!(!SessionId::is_valid("0f8e2a4c-1b3d-4e5f-ca7b-0123456789ab"));
    // Uppercase hex.
    assert!(!SessionId::is_valid("0F8E2A4C-1B3D-4E5F-9A7B-0123456789AB"));
    // Group lengths.
    assert!(!SessionId::is_valid("0f8e2a4c-1b3d-4e5f-9a7b-0123456789a"));
    assert!(!SessionId::is_valid("0f8e2a4c1b3d4e5f9a7b0123456789ab"));
    assert!(!SessionId::is_valid(""));
}

#[test]
fn it_serializes_as_a_plain_string() {
    let id = SessionId::new("0f8e2a4c-1b3d-4e5f-9a7b-0123456789ab");
    let res = serde_json::to_string(&id).unwrap();
    assert_eq!(res, r#""0f8e2a4c-1b3d-4e5f-9a7b-0123456789ab""#);
}
