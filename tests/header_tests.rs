use keylabels::error::KeyLabelError;
use keylabels::header::{load_from_file, parse, render_layout};
use keylabels::layouts::KnownLayout;
use keylabels::verifier::audit;
use regex::Regex;
use std::fs;
use strum::IntoEnumIterator;

#[test]
fn test_render_corne_header() {
    let text = render_layout(KnownLayout::CorneChocPro);

    assert!(text.starts_with("/*\n * Copyright (c) 2020 The ZMK Contributors\n"));
    assert!(text.contains("#pragma once"));
    assert!(text.contains("/* Corne Choc Pro 42-key layout - based on actual matrix transform"));
    assert!(text.contains("#define LT5  0\n"));
    assert!(text.contains("#define RT0  7\n"));
    assert!(text.contains("#define RT3 10\n"));
    assert!(text.contains("#define RH2 52\n"));
    assert!(text.contains("/* Row 3 - Thumbs */"));
    assert!(text.contains(
        "#define KEYS_L LT0 LT1 LT2 LT3 LT4 LM0 LM1 LM2 LM3 LM4 LB0 LB1 LB2 LB3 LB4  // Left-hand keys.\n"
    ));
    assert!(text.contains(
        "#define KEYS_R RT0 RT1 RT2 RT3 RT4 RM0 RM1 RM2 RM3 RM4 RB0 RB1 RB2 RB3 RB4  // Right-hand keys.\n"
    ));
    assert!(text.contains("#define THUMBS LH2 LH1 LH0 RH0 RH1 RH2\n"));
}

#[test]
fn test_diagram_follows_table() {
    let text = render_layout(KnownLayout::CorneChocPro);
    assert!(text.contains(" * │  0   1   2   3   4   5 │  7   8   9  10  11  12 │  (Row 0)\n"));
    assert!(text.contains(" * │ 28  29  30  31  32  33 │ 35  36  37  38  39  40 │  (Row 2)\n"));
    assert!(text.contains(
        " * ╰───────────┮ 45  46  47 │ 50  51  52 ╭───────────╯  (Row 3 - thumbs)\n"
    ));
    assert!(text.contains(" *             ╰────────────┴────────────╯\n"));

    let xk = render_layout(KnownLayout::Xk42);
    assert!(xk.contains(" * │ 12  13  14  15  16  17 │ 18  19  20  21  22  23 │  (Row 1)\n"));
}

#[test]
fn test_one_define_per_label() {
    let define = Regex::new(r"(?m)^#define [LR][TMBH][0-5] [ \d]\d$").unwrap();
    for layout in KnownLayout::iter() {
        let text = render_layout(layout);
        assert_eq!(define.find_iter(&text).count(), 42, "{}", layout);
    }
}

#[test]
fn test_rendered_header_reads_back() {
    for layout in KnownLayout::iter() {
        let parsed = parse(&render_layout(layout)).expect("rendered header must parse");
        let mut table = parsed.table("rendered");
        assert!(audit(&table).is_empty());

        table.name = layout.display_name().to_string();
        assert_eq!(table, layout.table());
    }
}

#[test]
fn test_parse_handwritten_header() {
    let text = r#"
#ifndef KEY_LABELS_H
#define KEY_LABELS_H
/* a block
   comment #define LT5 99 */
#define LT5  0 // trailing
#define LT4  1 /* inline */
#define LT0  5
#include <dt-bindings/zmk/keys.h>
#define EDGE LT5 LT4  // outer keys
#endif
"#;
    let parsed = parse(text).unwrap();
    assert_eq!(
        parsed.defines,
        vec![
            ("LT5".to_string(), 0),
            ("LT4".to_string(), 1),
            ("LT0".to_string(), 5)
        ]
    );
    assert_eq!(parsed.groups["EDGE"], vec![0, 1]);
    assert_eq!(parsed.get("LT0"), Some(5));

    // Missing groupings and labels surface in the audit, not the parser.
    let issues = audit(&parsed.table("partial"));
    assert!(!issues.is_empty());
}

#[test]
fn test_parse_errors_carry_line_numbers() {
    match parse("#define LT5 0\n#define LT4 300\n") {
        Err(KeyLabelError::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected parse error, got {:?}", other),
    }

    match parse("#define LT5 0\n\n#define KEYS_L LT5 LT4\n") {
        Err(KeyLabelError::Parse { line, message }) => {
            assert_eq!(line, 3);
            assert!(message.contains("LT4"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }

    assert!(matches!(
        parse("#define LT5 0\n#define LT5 1\n"),
        Err(KeyLabelError::Parse { line: 2, .. })
    ));
    assert!(matches!(
        parse("#define LT5 0\n/* never closed\n"),
        Err(KeyLabelError::Parse { .. })
    ));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("xk42.h");
    fs::write(&path, render_layout(KnownLayout::Xk42)).unwrap();

    let parsed = load_from_file(&path).unwrap();
    assert_eq!(parsed.get("RT0"), Some(6));
    assert_eq!(parsed.groups["THUMBS"], vec![36, 37, 38, 39, 40, 41]);

    let missing = dir.path().join("nope.h");
    assert!(matches!(load_from_file(missing), Err(KeyLabelError::Io(_))));
}

#[test]
fn test_shipped_headers_are_current() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config/key-labels");
    for layout in KnownLayout::iter() {
        let path = dir.join(format!("{}.h", layout.header_stem()));
        let shipped = fs::read_to_string(&path).unwrap();
        assert_eq!(
            shipped,
            render_layout(layout),
            "{} is stale; regenerate with `keylabels header --layout {} -o config/key-labels`",
            path.display(),
            layout
        );
    }
}
