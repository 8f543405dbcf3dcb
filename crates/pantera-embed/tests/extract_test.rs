//! Identifier extraction across every supported address shape.

use pantera_embed::{extract_identifier, EmbedFrame};

const PANTHER: &str = "6ZSIwUwbITM";

#[test]
fn recognizes_all_supported_shapes() {
    let inputs = [
        "https://youtu.be/6ZSIwUwbITM",
        "https://www.youtube.com/watch?v=6ZSIwUwbITM",
        "https://www.youtube.com/embed/6ZSIwUwbITM",
        "6ZSIwUwbITM",
    ];
    for input in inputs {
        let id = extract_identifier(input).unwrap_or_else(|| panic!("no id for {input}"));
        assert_eq!(id.as_str(), PANTHER, "input: {input}");
    }
}

#[test]
fn query_and_path_suffixes_are_trimmed() {
    for input in [
        "https://youtu.be/6ZSIwUwbITM?si=share",
        "https://www.youtube.com/watch?v=6ZSIwUwbITM&list=PL1",
        "https://youtube.com/embed/6ZSIwUwbITM/",
        "http://m.youtube.com/watch?v=6ZSIwUwbITM",
    ] {
        assert_eq!(
            extract_identifier(input).map(|id| id.to_string()).as_deref(),
            Some(PANTHER),
            "input: {input}"
        );
    }
}

#[test]
fn rejects_unrecognized_addresses() {
    for input in [
        "not a url",
        "",
        "https://vimeo.com/123456",
        "https://www.youtube.com/",
        "6ZSIwUwbITM-too-long",
    ] {
        assert!(extract_identifier(input).is_none(), "input: {input}");
    }
}

#[cfg(feature = "serde")]
#[test]
fn frame_serializes_for_javascript_hosts() {
    let id = extract_identifier(PANTHER).unwrap();
    let frame = EmbedFrame::builder(&id).title("La Pantera Rosa").build();
    let json = serde_json::to_value(&frame).unwrap();
    assert_eq!(json["title"], "La Pantera Rosa");
    assert_eq!(json["allow_fullscreen"], true);
    assert_eq!(json["allow"].as_array().unwrap().len(), 6);
}
