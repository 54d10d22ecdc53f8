//! Writes paginated text out as a PDF.
//!
//! Each [Page] becomes one PDF page of the configured size, with its lines
//! drawn in the standard Courier face at the configured font size. Courier is
//! one of the fourteen base fonts every PDF reader provides, so nothing is
//! embedded; lay out with [crate::layout::Monospace::courier] to get line
//! widths that match what is drawn.
//!
//! ```
//! use textpage::layout::{paginate, Monospace, PaginationConfig};
//! use textpage::export::{render_pdf, Info};
//! use textpage::{pagesize, Pt};
//!
//! let config = PaginationConfig::new(pagesize::A4, Pt(50.0), Pt(12.0));
//! let pages = paginate("Hello, PDF!", &config, &Monospace::courier(config.font_size)).unwrap();
//! let pdf = render_pdf(&pages, &config, Some(&Info::new().title("Greeting"))).unwrap();
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

mod info;
mod refs;

pub use info::Info;

use crate::colour::{colours, Colour};
use crate::error::Result;
use crate::layout::{Page, PaginationConfig, PhysicalLine};
use crate::units::Pt;
use pdf_writer::{Finish, Name, Pdf, Ref};
use refs::{ObjectReferences, RefType};
use std::io::Write;

const FONT_RESOURCE: &str = "F1";
const BASE_FONT: &[u8] = b"Courier";
const TEXT_COLOUR: Colour = colours::BLACK;

/// Render `pages` to an in-memory PDF document
pub fn render_pdf(
    pages: &[Page],
    config: &PaginationConfig,
    info: Option<&Info>,
) -> Result<Vec<u8>> {
    config.validate()?;

    let mut refs = ObjectReferences::new();
    let catalog_id = refs.gen(RefType::Catalog);
    let page_tree_id = refs.gen(RefType::PageTree);
    let font_id = refs.gen(RefType::Font);

    let mut writer = Pdf::new();
    if let Some(info) = info {
        info.write(&mut refs, &mut writer);
    }

    let page_refs: Vec<Ref> = (0..pages.len())
        .map(|i| refs.gen(RefType::Page(i)))
        .collect();
    writer
        .pages(page_tree_id)
        .count(page_refs.len() as i32)
        .kids(page_refs);

    writer
        .type1_font(font_id)
        .base_font(Name(BASE_FONT))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    for (page_index, page) in pages.iter().enumerate() {
        write_page(&mut refs, page_index, page, config.font_size, &mut writer)?;
    }

    writer.catalog(catalog_id).pages(page_tree_id);

    tracing::debug!(pages = pages.len(), "rendered pdf");
    Ok(writer.finish())
}

/// Render `pages` as a PDF into `w`. The whole document is built in memory first.
pub fn write_pdf<W: Write>(
    pages: &[Page],
    config: &PaginationConfig,
    info: Option<&Info>,
    mut w: W,
) -> Result<()> {
    let pdf = render_pdf(pages, config, info)?;
    w.write_all(&pdf)?;
    Ok(())
}

fn write_page(
    refs: &mut ObjectReferences,
    page_index: usize,
    page: &Page,
    font_size: Pt,
    writer: &mut Pdf,
) -> Result<()> {
    let id = refs.get_or_gen(RefType::Page(page_index));
    let page_tree_id = refs.get_or_gen(RefType::PageTree);
    let font_id = refs.get_or_gen(RefType::Font);
    let content_id = refs.gen(RefType::ContentForPage(page_index));

    let mut pdf_page = writer.page(id);
    pdf_page.media_box(page.media_box.into());
    pdf_page.art_box(page.content_box.into());
    pdf_page.parent(page_tree_id);
    pdf_page.contents(content_id);
    pdf_page
        .resources()
        .fonts()
        .pair(Name(FONT_RESOURCE.as_bytes()), font_id);
    pdf_page.finish();

    let rendered = render_lines(&page.lines, font_size)?;
    writer.stream(content_id, rendered.as_slice());
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_lines(lines: &[PhysicalLine], font_size: Pt) -> std::io::Result<Vec<u8>> {
    let mut content: Vec<u8> = Vec::default();
    if lines.is_empty() {
        return Ok(content);
    }

    write!(&mut content, "q\n")?;
    TEXT_COLOUR.write_fill(&mut content)?;
    write!(&mut content, "BT\n")?;
    write!(&mut content, "/{} {} Tf\n", FONT_RESOURCE, font_size.0)?;
    for line in lines {
        let (x, y) = line.coords;
        write!(&mut content, "1 0 0 1 {} {} Tm\n", x.0, y.0)?;
        write!(&mut content, "<")?;
        for byte in win_ansi(&line.text) {
            write!(&mut content, "{byte:02x}")?;
        }
        write!(&mut content, "> Tj\n")?;
    }
    write!(&mut content, "ET\n")?;
    write!(&mut content, "Q\n")?;

    Ok(content)
}

/// The characters WinAnsi places in 0x80..=0x9f, where Latin-1 has control
/// codes. `None` marks the five unassigned slots.
#[rustfmt::skip]
const WIN_ANSI_HIGH: [Option<char>; 32] = [
    Some('€'), None, Some('‚'), Some('ƒ'), Some('„'), Some('…'), Some('†'), Some('‡'),
    Some('ˆ'), Some('‰'), Some('Š'), Some('‹'), Some('Œ'), None, Some('Ž'), None,
    None, Some('‘'), Some('’'), Some('“'), Some('”'), Some('•'), Some('–'), Some('—'),
    Some('˜'), Some('™'), Some('š'), Some('›'), Some('œ'), None, Some('ž'), Some('Ÿ'),
];

/// Encode text for a WinAnsi base font. Printable ASCII and Latin-1 map to
/// themselves, the Windows-1252 extras (`€`, curly quotes, dashes, ...) to
/// their slots in 0x80..=0x9f; anything else becomes `?`.
fn win_ansi(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.chars().map(|ch| match ch as u32 {
        code @ (0x20..=0x7e | 0xa0..=0xff) => code as u8,
        _ => WIN_ANSI_HIGH
            .iter()
            .position(|&slot| slot == Some(ch))
            .map_or(b'?', |index| 0x80 + index as u8),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{paginate, Monospace};
    use crate::pagesize;

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack
            .windows(needle.len())
            .any(|window| window == needle.as_bytes())
    }

    #[test]
    fn latin1_passes_through_and_the_rest_is_replaced() {
        let bytes: Vec<u8> = win_ansi("Aé\u{7f}\u{81}ħ").collect();
        assert_eq!(bytes, vec![b'A', 0xe9, b'?', b'?', b'?']);
    }

    #[test]
    fn windows_1252_extras_use_their_slots() {
        let bytes: Vec<u8> = win_ansi("€ ‘a’ “b” – — ™ Ÿ").collect();
        assert_eq!(
            bytes,
            vec![
                0x80, b' ', 0x91, b'a', 0x92, b' ', 0x93, b'b', 0x94, b' ', 0x96, b' ', 0x97,
                b' ', 0x99, b' ', 0x9f
            ]
        );
    }

    #[test]
    fn lines_are_drawn_at_their_coordinates() {
        let lines = vec![PhysicalLine {
            text: "Hi".to_string(),
            coords: (Pt(50.0), Pt(700.5)),
        }];
        let content = render_lines(&lines, Pt(12.0)).expect("writes to memory");
        assert_eq!(
            String::from_utf8_lossy(&content),
            "q\n0 g\nBT\n/F1 12 Tf\n1 0 0 1 50 700.5 Tm\n<4869> Tj\nET\nQ\n"
        );
        assert!(render_lines(&[], Pt(12.0)).expect("empty").is_empty());
    }

    #[test]
    fn one_pdf_page_per_page() {
        let config = PaginationConfig::new(pagesize::A5, Pt(40.0), Pt(12.0));
        let text = lipsum::lipsum(1500);
        let pages = paginate(&text, &config, &Monospace::courier(config.font_size))
            .expect("valid config");
        assert!(pages.len() > 1);

        let pdf = render_pdf(&pages, &config, Some(&Info::new().title("Lorem")))
            .expect("renders");
        assert!(pdf.starts_with(b"%PDF"));
        assert!(contains(&pdf, "/Courier"));
        assert!(contains(&pdf, &format!("/Count {}", pages.len())));
        assert!(contains(&pdf, "(Lorem)"));
    }

    #[test]
    fn empty_document_still_renders() {
        let config = PaginationConfig::new(pagesize::A4, Pt(50.0), Pt(12.0));
        let pages = paginate("", &config, &Monospace::courier(config.font_size))
            .expect("valid config");
        let mut out = Vec::new();
        write_pdf(&pages, &config, None, &mut out).expect("renders");
        assert!(out.starts_with(b"%PDF"));
        assert!(contains(&out, "/Count 1"));
    }
}
