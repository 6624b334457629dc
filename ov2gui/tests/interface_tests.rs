use ov2gui::sprite::SimpleSprite;
use ov2gui::widget::{Button, Window};
use ov2gui::{
    ClickSound, DocumentKind, Interface, LoadType, Orientation, ParseError, SpriteKind,
    SyntaxErrorKind, Vec2i, WidgetKind,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn parse(text: &str) -> Interface {
    let mut interface = Interface::new();
    interface.parse_text("test", text).expect("parse");
    interface
}

fn parse_err(text: &str) -> ParseError {
    Interface::new()
        .parse_text("test", text)
        .expect_err("should fail")
}

fn syntax_kind(err: &ParseError) -> &SyntaxErrorKind {
    &err.as_syntax().expect("syntax error").kind
}

#[test]
fn test_simple_sprite_scenario() {
    let interface = parse(
        r#"spriteTypes = { spriteType = { name = "icon_x" texturefile = "gfx/x.dds" noofframes = 4 } }"#,
    );
    assert_eq!(interface.sprites.len(), 1);
    let sprite = interface.sprite("icon_x").expect("icon_x");
    assert_eq!(
        sprite.kind,
        SpriteKind::Simple(SimpleSprite {
            texture_file: Some("gfx/x.dds".to_string()),
            effect_file: None,
            no_of_frames: 4,
            always_transparent: false,
            transparency_check: false,
            no_refcount: false,
            click_sound: ClickSound::Click,
            load_type: LoadType::Ingame,
        })
    );
}

#[test]
fn test_window_with_button_scenario() {
    let interface = parse(
        r#"guiTypes = { windowType = { name = "w1" size = { x=10 y=20 } guiButtonType = { name = "b1" position = { x=1 y=2 } } } }"#,
    );
    assert_eq!(interface.widgets.len(), 1);
    let window = interface.widget("w1").expect("w1");
    assert!(matches!(window.kind, WidgetKind::Window(_)));
    assert_eq!(window.size, Vec2i::new(10, 20));
    assert_eq!(window.children().len(), 1);

    let button = &window.children()[0];
    assert_eq!(button.name.as_deref(), Some("b1"));
    assert_eq!(button.position, Vec2i::new(1, 2));
    assert_eq!(button.kind, WidgetKind::Button(Button::default()));
}

#[test]
fn test_node_count_matches_entries_in_order() {
    let interface = parse(
        r#"guiTypes = {
            iconType = { name = "one" }
            textBoxType = { name = "two" }
            checkboxType = { name = "three" }
            editBoxType = { name = "four" }
        }"#,
    );
    let names: Vec<_> = interface
        .widgets
        .iter()
        .map(|w| w.name.as_deref().unwrap())
        .collect();
    assert_eq!(names, ["one", "two", "three", "four"]);
}

#[test]
fn test_type_and_property_names_are_case_insensitive() {
    let lower = parse(r#"spritetypes = { spritetype = { name = "A" texturefile = "Gfx/A.dds" } }"#);
    let mixed = parse(r#"SpriteTypes = { SpriteType = { Name = "A" TextureFile = "Gfx/A.dds" } }"#);
    let upper = parse(r#"SPRITETYPES = { SPRITETYPE = { NAME = "A" TEXTUREFILE = "Gfx/A.dds" } }"#);
    assert_eq!(lower.sprites, mixed.sprites);
    assert_eq!(lower.sprites, upper.sprites);
    // Values keep their case.
    let SpriteKind::Simple(simple) = &upper.sprites[0].kind else {
        panic!("expected simple sprite");
    };
    assert_eq!(simple.texture_file.as_deref(), Some("Gfx/A.dds"));
    assert!(upper.sprite("a").is_none());
}

#[test]
fn test_whitespace_and_comments_are_transparent() {
    let compact = parse(
        r#"guiTypes={windowType={name="w" position={x=1 y=-2} moveable=yes iconType={name="i" frame=3}}}"#,
    );
    let spread = parse(
        "# leading comment\n\
         guiTypes\t=\n{ # comment after brace\n\
           windowType =   {\r\n\
             name = \"w\" ;\n\
             position = { x = 1\n# between components\n y = -2 }\n\
             moveable\n=\nyes\n\
             iconType = { name = \"i\" # trailing\n frame = 3 }\n\
           }\n\
         }\n# trailing comment",
    );
    assert_eq!(compact.widgets, spread.widgets);
}

#[test]
fn test_parsing_is_idempotent() {
    let text = r#"
        spriteTypes = {
            spriteType = { name = "GFX_a" texturefile = "a.dds" }
            progressbartype = { name = "GFX_bar" color = { 1 0 0 } size = { x = 5 y = 6 } }
            maskedShieldType = { name = "GFX_shield" texturefile1 = "s1.dds" texturefile2 = "s2.dds" flipv = yes }
        }
    "#;
    assert_eq!(parse(text).sprites, parse(text).sprites);
}

#[test]
fn test_boolean_literal_equivalence() {
    let numeric = parse(r#"guiTypes = { windowType = { name = "w" moveable = 1 fullscreen = 0 } }"#);
    let words = parse(r#"guiTypes = { windowType = { name = "w" moveable = yes fullscreen = no } }"#);
    assert_eq!(numeric.widgets, words.widgets);
    let WidgetKind::Window(window) = &words.widgets[0].kind else {
        panic!("expected window");
    };
    assert!(window.moveable);
    assert!(!window.full_screen);
}

#[test]
fn test_known_window_property_is_not_a_child() {
    let interface = parse(
        r#"guiTypes = { windowType = { name = "w" fullscreen = yes orientation = "CENTER" dontRender = "" } }"#,
    );
    let window = &interface.widgets[0];
    assert!(window.children().is_empty());
    assert_eq!(
        window.kind,
        WidgetKind::Window(Window {
            full_screen: true,
            orientation: Orientation::Center,
            dont_render: Some(String::new()),
            ..Window::default()
        })
    );
}

#[test]
fn test_unknown_property_is_fatal() {
    let err = parse_err("spriteTypes = { spritetype = { bogusfield = 1 } }");
    assert_eq!(
        syntax_kind(&err),
        &SyntaxErrorKind::UnknownProperty {
            property: "bogusfield".to_string(),
            owner: "spriteType"
        }
    );
    assert_eq!(
        err.to_string(),
        "Syntax error in test:1:44: Unknown property 'bogusfield' for spriteType."
    );
}

#[test]
fn test_unterminated_block_is_fatal() {
    let err = parse_err(r#"guiTypes = { windowType = { name = "w" iconType = { name = "i" } "#);
    assert!(matches!(
        syntax_kind(&err),
        SyntaxErrorKind::UnexpectedEof { .. }
    ));
}

#[test]
fn test_unknown_child_type_in_window_is_fatal() {
    let err = parse_err(r#"guiTypes = { windowType = { name = "w" frobType = { } } }"#);
    assert_eq!(
        syntax_kind(&err),
        &SyntaxErrorKind::UnknownType {
            type_name: "frobType".to_string(),
            dialect: "gui"
        }
    );
}

#[test]
fn test_misspelled_orientation_is_a_warning() {
    let interface = parse(
        r#"guiTypes = { iconType = { name = "i" orientation = "upperl_left" } }"#,
    );
    let WidgetKind::Icon(icon) = &interface.widgets[0].kind else {
        panic!("expected icon");
    };
    assert_eq!(icon.orientation, Orientation::LowerLeft);
    assert_eq!(interface.warnings.len(), 1);
    assert!(
        interface.warnings[0]
            .message
            .contains("misspelled orientation")
    );
}

#[test]
fn test_empty_and_comment_only_documents() {
    let mut interface = Interface::new();
    assert_eq!(interface.parse_text("empty", "").unwrap(), DocumentKind::Empty);
    assert_eq!(
        interface.parse_text("comments", "# nothing\n   # here\n").unwrap(),
        DocumentKind::Empty
    );
    assert!(interface.is_empty());
    assert!(interface.warnings.is_empty());
}

#[test]
fn test_unknown_document_keyword_is_skipped() {
    let mut interface = Interface::new();
    let kind = interface
        .parse_text("objects.gfx", "objectTypes = { animatedmap = { name = \"x\" } }")
        .unwrap();
    assert_eq!(kind, DocumentKind::Ignored("objectTypes".to_string()));
    assert!(interface.is_empty());
    assert_eq!(interface.warnings.len(), 1);
}

#[test]
fn test_first_match_wins() {
    let interface = parse(
        r#"spriteTypes = {
            spriteType = { name = "dup" noofframes = 1 }
            spriteType = { name = "dup" noofframes = 2 }
        }"#,
    );
    let SpriteKind::Simple(simple) = &interface.sprite("dup").unwrap().kind else {
        panic!("expected simple sprite");
    };
    assert_eq!(simple.no_of_frames, 1);
}

#[test]
fn test_find_widget_searches_nested_children() {
    let interface = parse(
        r#"guiTypes = {
            windowType = {
                name = "outer"
                scrollbarType = {
                    name = "bar"
                    guiButtonType = { name = "deep" }
                }
            }
            iconType = { name = "deep" }
        }"#,
    );
    assert!(interface.widget("deep").is_some_and(|w| w.type_name() == "iconType"));
    assert_eq!(
        interface.find_widget("deep").map(|w| w.type_name()),
        Some("guiButtonType")
    );
    assert!(interface.widget("bar").is_none());
    assert!(interface.find_widget("bar").is_some());
    assert_eq!(interface.widget_node_count(), 4);
}

#[test]
fn test_parse_file_decodes_windows_1252() {
    let mut file = NamedTempFile::new().expect("TempFile");
    file.write_all(b"guiTypes = { textBoxType = { name = \"t\" text = \"Caf\xE9\" } }")
        .expect("Write");

    let mut interface = Interface::new();
    let kind = interface.parse_file(file.path()).unwrap();
    assert_eq!(kind, DocumentKind::Widgets(1));
    let WidgetKind::TextBox(text_box) = &interface.widgets[0].kind else {
        panic!("expected text box");
    };
    assert_eq!(text_box.text.as_deref(), Some("Café"));
}

#[test]
fn test_parse_file_honours_utf8_bom() {
    let mut file = NamedTempFile::new().expect("TempFile");
    file.write_all("\u{feff}spriteTypes = { spriteType = { name = \"a\" } }".as_bytes())
        .expect("Write");

    let mut interface = Interface::new();
    let kind = interface.parse_file(file.path()).unwrap();
    assert_eq!(kind, DocumentKind::Sprites(1));
    assert!(interface.sprite("a").is_some());
    assert!(interface.warnings.is_empty());
}

#[test]
fn test_serializes_with_type_tags() {
    let interface = parse(
        r#"guiTypes = { windowType = { name = "w" iconType = { name = "i" } } }"#,
    );
    let json = serde_json::to_value(&interface).unwrap();
    assert_eq!(json["widgets"][0]["type"], "windowType");
    assert_eq!(json["widgets"][0]["name"], "w");
    assert_eq!(json["widgets"][0]["children"][0]["type"], "iconType");
    assert_eq!(json["widgets"][0]["orientation"], "LOWER_LEFT");
    assert!(json.get("warnings").is_none());
}
