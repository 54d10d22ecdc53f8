use textpage::layout::{paginate, wrap, Measure, PaginationConfig};
use textpage::{pagesize, Font, Pt, TextPageError};

// DejaVu Sans Mono: 2048 units per em, every glyph advances 1233 units
static DEJAVU_SANS_MONO: &[u8] = include_bytes!("fonts/DejaVuSansMono.ttf");

fn dejavu() -> Font {
    Font::load(DEJAVU_SANS_MONO.to_vec()).expect("font parses")
}

fn approx_eq(a: Pt, b: Pt) -> bool {
    (a.0 - b.0).abs() < 1e-3
}

#[test]
fn names_are_read_from_the_face() {
    let font = dejavu();
    assert_eq!(font.family().as_deref(), Some("DejaVu Sans Mono"));
    assert!(font.name().is_some());
}

#[test]
fn vertical_metrics_scale_with_size() {
    let font = dejavu();
    assert!(font.ascent(Pt(10.0)) > Pt(0.0));
    assert!(font.descent(Pt(10.0)) < Pt(0.0));
    assert!(font.line_height(Pt(10.0)) >= font.ascent(Pt(10.0)) - font.descent(Pt(10.0)));
    assert!(approx_eq(
        font.line_height(Pt(20.0)),
        font.line_height(Pt(10.0)) * 2.0
    ));
}

#[test]
fn widths_come_from_glyph_advances() {
    let font = dejavu();
    let metrics = font.metrics(Pt(10.0));
    let width = metrics.measure("abcd").expect("latin glyphs exist");
    assert!(approx_eq(width, Pt(4.0 * 10.0 * 1233.0 / 2048.0)));
    assert!(approx_eq(width, font.width_of_text("wxyz", Pt(10.0)).expect("latin")));
    assert_eq!(metrics.measure("").expect("empty"), Pt(0.0));
}

#[test]
fn missing_glyph_is_a_measure_error() {
    let font = dejavu();
    let error = font
        .metrics(Pt(10.0))
        .measure("a\u{10FFFD}")
        .expect_err("private use glyph is missing");
    assert!(error.0.contains("no glyph"));
}

#[test]
fn font_metrics_drive_wrapping() {
    let font = dejavu();
    let metrics = font.metrics(Pt(10.0));
    let advance = metrics.measure("a").expect("latin");
    // room for "aaa bbb" (7 glyphs) but not "aaa bbb c" (9)
    let fragments = wrap("aaa bbb c", advance * 8.0, &metrics).expect("measurable");
    assert_eq!(fragments, vec!["aaa bbb", "c"]);
}

#[test]
fn paginate_reports_missing_glyphs() {
    let font = dejavu();
    let config = PaginationConfig::new(pagesize::A4, Pt(50.0), Pt(12.0));
    let result = paginate("fine\nnot \u{10FFFD} fine", &config, &font.metrics(Pt(12.0)));
    match result {
        Err(TextPageError::MeasurementFailure { source, .. }) => {
            assert!(source.0.contains("no glyph"))
        }
        other => panic!("expected a measurement failure, got {other:?}"),
    }
}
