//! Writing tuned values back into scene files.

use serde_json::Value;
use tempfile::NamedTempFile;
use typetune_cli::apply::apply_report;
use typetune_cli::scene::Scene;
use typetune_core::{CalcParams, TextItem, TuneReport};
use typetune_model::{BgMode, CurrentValues, LetterSpacingValue, LineHeightValue, TextUpdate};

const SCENE: &str = r#"{
  "id": "page",
  "name": "Landing",
  "textStyles": {
    "S:title": { "name": "Title", "lineHeight": "auto", "letterSpacing": "0px" },
    "S:body": { "name": "Body", "lineHeight": "auto", "letterSpacing": "0px" }
  },
  "children": [
    {
      "id": "hero",
      "fills": [
        { "type": "SOLID", "color": { "r": 0.05, "g": 0.05, "b": 0.08 } },
        { "type": "PATTERN", "sourceNodeId": "4:2" }
      ],
      "children": [
        {
          "id": "title",
          "text": {
            "fontFamily": "Inter",
            "fontStyle": "Bold",
            "fontSize": 48,
            "textStyleId": "S:title",
            "characters": "Welcome"
          }
        }
      ]
    },
    {
      "id": "content",
      "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1 } }],
      "children": [
        {
          "id": "intro",
          "text": {
            "fontFamily": "Inter",
            "fontSize": 16,
            "textStyleId": "S:body",
            "lineHeight": "24px",
            "letterSpacing": "-0.06px"
          }
        },
        {
          "id": "para",
          "text": { "fontFamily": "Inter", "fontSize": 16, "textStyleId": "S:body" }
        },
        {
          "id": "note",
          "text": {
            "fontFamily": "Georgia",
            "fontSize": 18,
            "lineHeight": "28px",
            "letterSpacing": 0
          }
        },
        { "id": "mixed", "text": { "fontSize": 16 } }
      ]
    }
  ]
}"#;

fn load() -> (Scene, TuneReport) {
    let scene = Scene::from_json(SCENE).expect("parse scene");
    let report = TuneReport::new(&scene.text_items(BgMode::Auto), &CalcParams::new());
    (scene, report)
}

fn saved_document(scene: &Scene) -> (NamedTempFile, Value) {
    let file = NamedTempFile::new().expect("temp file");
    scene.save(file.path()).expect("save scene");
    let text = std::fs::read_to_string(file.path()).expect("read saved scene");
    let document = serde_json::from_str(&text).expect("saved scene is JSON");
    (file, document)
}

#[test]
fn writes_only_groups_that_need_change() {
    let (mut scene, report) = load();
    assert_eq!(report.summary(), "1 already well-tuned, 2 to update");

    let outcome = apply_report(&mut scene, &report, false);
    let ids: Vec<&str> = outcome.layers.iter().map(|change| change.id.as_str()).collect();
    assert_eq!(ids, ["title", "intro", "para"]);
    assert!(outcome.styles.is_empty());
    assert!(outcome.skipped.is_empty());

    let para = &outcome.layers[2];
    assert_eq!(para.before.line_height, LineHeightValue::Auto);
    assert_eq!(para.after.line_height, LineHeightValue::Percent(150.0));
    assert_eq!(para.after.letter_spacing, LetterSpacingValue::Pixels(-0.06));
    assert_eq!(para.text_style_id.as_deref(), Some("S:body"));
}

#[test]
fn rerunning_on_the_written_scene_finds_nothing_to_update() {
    let (mut scene, report) = load();
    apply_report(&mut scene, &report, true);
    let (file, _) = saved_document(&scene);

    let mut reloaded = Scene::load(file.path()).expect("reload scene");
    let items = reloaded.text_items(BgMode::Auto);
    assert_eq!(items.len(), 4);
    let again = TuneReport::new(&items, &CalcParams::new());
    assert_eq!(again.needs_change(), 0);
    assert_eq!(again.summary(), "3 already well-tuned, 0 to update");

    let second = apply_report(&mut reloaded, &again, true);
    assert!(second.layers.is_empty());
    assert!(second.styles.is_empty());
}

#[test]
fn save_keeps_fields_outside_the_scene_model() {
    let (mut scene, report) = load();
    apply_report(&mut scene, &report, false);
    let (_file, document) = saved_document(&scene);

    assert_eq!(document["name"], "Landing");
    let hero = &document["children"][0];
    assert_eq!(hero["fills"][1]["type"], "PATTERN");
    assert_eq!(hero["children"][0]["text"]["characters"], "Welcome");
    let title_line_height = hero["children"][0]["text"]["lineHeight"].as_str();
    assert!(title_line_height.is_some_and(|value| value.ends_with('%')));

    let content = &document["children"][1]["children"];
    assert_eq!(content[1]["text"]["lineHeight"], "150%");
    assert_eq!(content[1]["text"]["letterSpacing"], "-0.06px");
    assert_eq!(content[2]["text"]["lineHeight"], "28px");
    assert_eq!(content[3]["text"].get("lineHeight"), None);
    assert_eq!(document["textStyles"]["S:body"]["lineHeight"], "auto");
}

#[test]
fn shared_styles_follow_the_first_written_layer() {
    let (mut scene, report) = load();
    let outcome = apply_report(&mut scene, &report, true);
    assert_eq!(outcome.styles, ["S:title", "S:body"]);

    let (_file, document) = saved_document(&scene);
    let body = &document["textStyles"]["S:body"];
    assert_eq!(body["name"], "Body");
    assert_eq!(body["lineHeight"], "150%");
    assert_eq!(body["letterSpacing"], "-0.06px");
    assert_ne!(document["textStyles"]["S:title"]["lineHeight"], "auto");
}

#[test]
fn members_that_cannot_be_written_are_skipped() {
    let (mut scene, _) = load();
    let mut items = scene.text_items(BgMode::Auto);
    let ghost = TextItem::new("ghost", items[2].input.clone(), CurrentValues::default());
    items.insert(2, ghost);
    let report = TuneReport::new(&items, &CalcParams::new());

    let outcome = apply_report(&mut scene, &report, false);
    assert_eq!(outcome.skipped, ["ghost"]);
    let ids: Vec<&str> = outcome.layers.iter().map(|change| change.id.as_str()).collect();
    assert_eq!(ids, ["title", "intro", "para"]);
}

#[test]
fn apply_rejects_unknown_and_non_text_nodes() {
    let (mut scene, _) = load();
    let update = TextUpdate {
        line_height_percent: 140.0,
        letter_spacing_px: 0.0,
    };

    let err = scene.apply("nowhere", update).unwrap_err();
    assert_eq!(err.to_string(), "no node nowhere");
    let err = scene.apply("hero", update).unwrap_err();
    assert_eq!(err.to_string(), "node hero is not a text layer");
    let err = scene
        .apply_style("S:missing", CurrentValues::from(update))
        .unwrap_err();
    assert_eq!(err.to_string(), "no text style S:missing");

    let change = scene.apply("note", update).expect("apply to note");
    assert_eq!(change.before.line_height, LineHeightValue::Pixels(28.0));
    let note = scene
        .text_items(BgMode::Auto)
        .into_iter()
        .find(|item| item.id == "note")
        .expect("note item");
    assert_eq!(note.current, CurrentValues::from(update));
}

#[test]
fn save_reports_path_on_error() {
    let (scene, _) = load();
    let dir = tempfile::tempdir().expect("temp dir");
    let err = scene.save(dir.path()).unwrap_err();
    assert!(err.to_string().starts_with("write scene"), "{err}");
}
