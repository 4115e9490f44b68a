//! Unit tests for response body parsing.

use taglens::parse;

// ============================================================================
// Upload responses
// ============================================================================

#[test]
fn upload_id_extracted() {
    let body = r#"{"result": {"upload_id": "abc123"}}"#;
    let id = parse::upload_id(body).unwrap().unwrap();
    assert_eq!(id.as_str(), "abc123");
}

#[test]
fn upload_id_missing_field_is_none() {
    let body = r#"{"result": {}}"#;
    assert!(parse::upload_id(body).unwrap().is_none());
}

#[test]
fn upload_id_missing_result_is_none() {
    let body = r#"{"status": {"type": "success"}}"#;
    assert!(parse::upload_id(body).unwrap().is_none());
}

#[test]
fn upload_id_non_json_is_error() {
    assert!(parse::upload_id("<html>busy</html>").is_err());
}

// ============================================================================
// Tags responses
// ============================================================================

#[test]
fn tags_parsed_in_service_order() {
    let body = r#"{"result": {"tags": [{"tag": {"en": "cat"}}, {"tag": {"en": "dog"}}]}}"#;
    assert_eq!(parse::tags(body).unwrap(), vec!["cat", "dog"]);
}

#[test]
fn tags_skip_entries_without_language_key() {
    let body = r#"{"result": {"tags": [
        {"tag": {"en": "cat"}},
        {"tag": {"de": "hund"}},
        {"tag": {"en": "dog"}}
    ]}}"#;
    assert_eq!(parse::tags(body).unwrap(), vec!["cat", "dog"]);
}

#[test]
fn tags_skip_malformed_entries() {
    // One entry's tag is not a language map at all
    let body = r#"{"result": {"tags": [
        {"tag": "bare string"},
        {"tag": {"en": "dog"}},
        {"unrelated": true}
    ]}}"#;
    assert_eq!(parse::tags(body).unwrap(), vec!["dog"]);
}

#[test]
fn tags_keep_duplicates() {
    let body = r#"{"result": {"tags": [{"tag": {"en": "cat"}}, {"tag": {"en": "cat"}}]}}"#;
    assert_eq!(parse::tags(body).unwrap(), vec!["cat", "cat"]);
}

#[test]
fn tags_missing_result_is_empty() {
    assert!(parse::tags(r#"{"status": "ok"}"#).unwrap().is_empty());
}

#[test]
fn tags_missing_list_is_empty() {
    assert!(parse::tags(r#"{"result": {}}"#).unwrap().is_empty());
}

#[test]
fn tags_non_json_is_error() {
    assert!(parse::tags("not json").is_err());
}

// ============================================================================
// Colors responses
// ============================================================================

fn colors_body(entries: &str) -> String {
    format!(r#"{{"result": {{"colors": {{"image_colors": [{entries}]}}}}}}"#)
}

#[test]
fn colors_parsed_with_all_fields() {
    let body = colors_body(r#"{"r": 128, "g": 64, "b": 32, "closest_palette_color": "chestnut"}"#);
    let colors = parse::colors(&body).unwrap();
    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0].red, 128);
    assert_eq!(colors[0].green, 64);
    assert_eq!(colors[0].blue, 32);
    assert_eq!(colors[0].color_name, "chestnut");
}

#[test]
fn colors_entry_missing_palette_name_is_dropped() {
    let body = colors_body(
        r#"{"r": 1, "g": 2, "b": 3, "closest_palette_color": "black"},
           {"r": 4, "g": 5, "b": 6}"#,
    );
    let colors = parse::colors(&body).unwrap();
    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0].color_name, "black");
}

#[test]
fn colors_entry_missing_component_is_dropped() {
    let body = colors_body(r#"{"g": 5, "b": 6, "closest_palette_color": "teal"}"#);
    assert!(parse::colors(&body).unwrap().is_empty());
}

#[test]
fn colors_entry_out_of_range_component_is_dropped() {
    let body = colors_body(r#"{"r": 300, "g": 5, "b": 6, "closest_palette_color": "teal"}"#);
    assert!(parse::colors(&body).unwrap().is_empty());
}

#[test]
fn colors_entry_with_string_components_is_dropped() {
    let body = colors_body(r#"{"r": "12", "g": "5", "b": "6", "closest_palette_color": "teal"}"#);
    assert!(parse::colors(&body).unwrap().is_empty());
}

#[test]
fn colors_missing_result_is_empty() {
    assert!(parse::colors(r#"{"status": "ok"}"#).unwrap().is_empty());
}

#[test]
fn colors_missing_nested_payload_is_empty() {
    assert!(parse::colors(r#"{"result": {}}"#).unwrap().is_empty());
    assert!(
        parse::colors(r#"{"result": {"colors": {}}}"#)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn colors_non_json_is_error() {
    assert!(parse::colors("{broken").is_err());
}
