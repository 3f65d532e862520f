use marker_sheet_core::config::SheetConfig;
use marker_sheet_core::error::{RenderError, SheetError};
use marker_sheet_core::export::to_json;
use marker_sheet_core::layout::LayoutRegistry;
use marker_sheet_core::model::PaperSize;
use marker_sheet_core::sheet::build_sheet;
use marker_sheet_core::surface::MM_TO_PT;

fn find(haystack: &[u8], needle: &[u8], from: usize) -> usize {
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| i + from)
        .expect("needle present in pdf")
}

/// Inflated operators of the page content stream, one per line.
fn content_lines(pdf: &[u8]) -> Vec<String> {
    let start = find(pdf, b"stream\n", 0) + b"stream\n".len();
    let end = find(pdf, b"\nendstream", start);
    let raw = miniz_oxide::inflate::decompress_to_vec_zlib(&pdf[start..end]).unwrap();
    String::from_utf8_lossy(&raw)
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

#[test]
fn builds_a_pdf_for_a_single_code() {
    let out = build_sheet(&[7], &SheetConfig::default(), &LayoutRegistry::with_defaults()).unwrap();
    assert!(out.pdf.starts_with(b"%PDF-"));
    assert_eq!(out.layout.assignments.len(), 1);
    assert_eq!(out.layout.paper, PaperSize::A4);
}

#[test]
fn content_stream_scales_to_millimetres() {
    let out = build_sheet(&[5], &SheetConfig::default(), &LayoutRegistry::with_defaults()).unwrap();
    let lines = content_lines(&out.pdf);

    assert_eq!(lines.first().map(String::as_str), Some("q"));
    let cm: Vec<f64> = lines[1]
        .strip_suffix(" cm")
        .expect("transform follows save state")
        .split_whitespace()
        .map(|t| t.parse().unwrap())
        .collect();
    assert_eq!(cm.len(), 6);
    assert!((cm[0] - MM_TO_PT).abs() < 1e-5);
    assert!((cm[3] + MM_TO_PT).abs() < 1e-5);
    assert_eq!((cm[1], cm[2], cm[4]), (0.0, 0.0, 0.0));
    assert!((cm[5] - 297.0 * MM_TO_PT).abs() < 1e-2);

    // Outline at the centred offset, in millimetres.
    assert!(lines.iter().any(|l| l == "55 98.5 100 100 re"));
    assert!(lines.iter().any(|l| l == "ET"));
    assert_eq!(lines.last().map(String::as_str), Some("Q"));
    // No operator is glued to the next one.
    assert!(lines.iter().all(|l| !l.contains("cm0") && !l.contains("ETQ")));
}

#[test]
fn builds_a_four_up_letter_sheet_without_text() {
    let cfg = SheetConfig::builder()
        .paper(PaperSize::Letter)
        .four_up(true)
        .marker_width_mm(90.0)
        .show_text(false)
        .outline(false)
        .build();
    let out = build_sheet(&[1, 2, 3, 4], &cfg, &LayoutRegistry::with_defaults()).unwrap();
    assert!(out.pdf.starts_with(b"%PDF-"));
    let codes: Vec<i64> = out.layout.codes().collect();
    assert_eq!(codes, vec![1, 2, 3, 4]);
}

#[test]
fn unencodable_code_fails_the_whole_sheet() {
    let cfg = SheetConfig::builder().four_up(true).marker_width_mm(50.0).build();
    let err = build_sheet(&[1, -2], &cfg, &LayoutRegistry::with_defaults()).unwrap_err();
    match err {
        SheetError::Render(RenderError::CodeOutOfRange { code, .. }) => assert_eq!(code, -2),
        other => panic!("expected CodeOutOfRange, got {other:?}"),
    }
}

#[test]
fn invalid_config_is_rejected_before_layout() {
    let cfg = SheetConfig::builder().output_prefix("  ").build();
    let err = build_sheet(&[1], &cfg, &LayoutRegistry::with_defaults()).unwrap_err();
    assert!(matches!(err, SheetError::InvalidConfig(_)));
}

#[test]
fn json_export_lists_markers_in_order() {
    let cfg = SheetConfig::builder().four_up(true).marker_width_mm(50.0).build();
    let out = build_sheet(&[9], &cfg, &LayoutRegistry::with_defaults()).unwrap();
    let v = to_json(&out.layout);
    assert_eq!(v["paper"], "A4");
    assert_eq!(v["mode"], 4);
    assert_eq!(v["page"]["w"], 210.0);
    let markers = v["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 4);
    assert!(markers.iter().all(|m| m["code"] == 9 && m["w"] == 50.0));
    assert_eq!(markers[1]["x"], 105.0);
    assert_eq!(markers[2]["y"], 148.5);
}
