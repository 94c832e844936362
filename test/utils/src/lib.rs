/// A webhook response covering every reply shape a Rasa server can send back,
/// including one element that matches no rendering strategy.
pub fn replies_fixture() -> &'static str {
    return r#"
[
    {"recipient_id": "abc", "text": "Here's a picture of a cat."},
    {"recipient_id": "abc", "image": "https://example.com/cat.png"},
    {
        "recipient_id": "abc",
        "text": "Would you like another?",
        "buttons": [
            {"title": "Yes", "payload": "/affirm"},
            {"title": "No", "payload": "/deny"}
        ]
    },
    {"recipient_id": "abc", "custom": {"unsupported": true}}
]
"#
    .trim();
}
