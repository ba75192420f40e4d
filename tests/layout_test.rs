//! Integration tests for layout collection and stylesheet output.

use std::io::Cursor;

use paperback::error::Error;
use paperback::render::stylesheet;
use paperback::{LayoutInput, LayoutParams, LayoutPrompter, PageTemplate, Typography};

fn prompt(answers: &str, preset: LayoutInput) -> paperback::Result<LayoutParams> {
    let mut transcript = Vec::new();
    LayoutPrompter::new(Cursor::new(answers.as_bytes()), &mut transcript).collect(&preset)
}

#[test]
fn test_all_defaults() {
    let params = prompt("\n\n\n\n\n\n", LayoutInput::new()).unwrap();

    assert_eq!(params.trim_width, 6.0);
    assert_eq!(params.trim_height, 9.0);
    assert!(!params.bleed);
    assert_eq!(params.inside_gutter, 0.375);
    assert_eq!(params.outside_margin, 0.25);
    assert_eq!(params.font_size, 11.0);
}

#[test]
fn test_bleed_with_empty_margin() {
    let params = prompt("\n\ntrue\n\n\n\n", LayoutInput::new()).unwrap();
    assert!(params.bleed);
    assert_eq!(params.outside_margin, 0.375);
}

#[test]
fn test_unrecognized_bleed_answer_means_no_bleed() {
    let params = prompt("\n\nmaybe\n\n\n\n", LayoutInput::new()).unwrap();
    assert!(!params.bleed);
    assert_eq!(params.outside_margin, 0.25);
}

#[test]
fn test_prompt_order() {
    let mut transcript = Vec::new();
    LayoutPrompter::new(Cursor::new(&b"\n\n\n\n\n\n"[..]), &mut transcript)
        .collect(&LayoutInput::new())
        .unwrap();
    let transcript = String::from_utf8(transcript).unwrap();

    let order = [
        "Trim Size Width",
        "Trim Size Height",
        "Enable Bleed",
        "Inside gutter",
        "Outside margin",
        "Font Size",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|label| transcript.find(label).expect(label))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_complete_preset_asks_nothing() {
    let preset = LayoutInput::new()
        .with_trim_width(5.0)
        .with_trim_height(8.0)
        .with_bleed(false)
        .with_inside_gutter(0.5)
        .with_outside_margin(0.5)
        .with_font_size(10.0);
    assert!(preset.is_complete());

    let mut transcript = Vec::new();
    let params = LayoutPrompter::new(Cursor::new(&b""[..]), &mut transcript)
        .collect(&preset)
        .unwrap();

    assert!(transcript.is_empty());
    assert_eq!(params.trim_width, 5.0);
}

#[test]
fn test_bad_number_is_rejected() {
    let result = prompt("6\nnine\n", LayoutInput::new());
    assert!(matches!(result, Err(Error::InvalidLayout(_))));
}

#[test]
fn test_margins_leaving_no_content_are_rejected() {
    let result = prompt("4\n\n\n2\n2\n\n", LayoutInput::new());
    assert!(matches!(result, Err(Error::InvalidLayout(_))));

    let result = prompt("\n4\n\n\n2\n\n", LayoutInput::new());
    assert!(matches!(result, Err(Error::InvalidLayout(_))));
}

#[test]
fn test_layout_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");
    std::fs::write(&path, r#"{"trim_width": 5, "trim_height": 8, "font_size": 12}"#).unwrap();

    let from_file = LayoutInput::from_path(&path).unwrap();
    let params = from_file
        .merge(LayoutInput::new().with_font_size(10.5))
        .resolve()
        .unwrap();

    assert_eq!(params.trim_width, 5.0);
    assert_eq!(params.trim_height, 8.0);
    assert_eq!(params.font_size, 10.5);
}

#[test]
fn test_layout_values_reach_the_stylesheet() {
    let params = prompt("5.5\n8.5\n\n0.5\n0.3\n12\n", LayoutInput::new()).unwrap();
    let css = stylesheet(PageTemplate::Body, &params, &Typography::default());

    assert!(css.contains("size: 5.5in 8.5in; margin: 0.3in;"));
    assert!(css.contains("@page :right { margin-left: 0.5in; }"));
    assert!(css.contains("@page :left { margin-right: 0.5in; }"));
    assert!(css.contains("font-size: 12pt;"));
}
