use super::text::{normalise, wrap};
use super::{Measure, Memoized};
use crate::error::{Result, TextPageError};
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;

/// Page geometry and line spacing used by [paginate]. Every value is supplied
/// by the caller; [PaginationConfig::new] only derives the conventional
/// spacing from the font size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PaginationConfig {
    pub page_width: Pt,
    pub page_height: Pt,
    /// The same margin is applied to all four sides
    pub margin: Pt,
    pub font_size: Pt,
    /// Distance between the baselines of consecutive physical lines
    pub leading: Pt,
    /// Extra space after every logical line
    pub paragraph_gap: Pt,
}

impl PaginationConfig {
    /// Leading is 1.5× the font size, the paragraph gap half the leading
    pub fn new(page_size: PageSize, margin: Pt, font_size: Pt) -> PaginationConfig {
        let leading = font_size * 1.5;
        PaginationConfig {
            page_width: page_size.0,
            page_height: page_size.1,
            margin,
            font_size,
            leading,
            paragraph_gap: leading * 0.5,
        }
    }

    /// Check that the geometry leaves room for content
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("page width", self.page_width),
            ("page height", self.page_height),
            ("margin", self.margin),
            ("font size", self.font_size),
            ("leading", self.leading),
        ];
        for (name, value) in positive {
            if !value.is_positive() {
                return Err(TextPageError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if !self.paragraph_gap.0.is_finite() || self.paragraph_gap < Pt(0.0) {
            return Err(TextPageError::InvalidConfig(format!(
                "paragraph gap must not be negative, got {}",
                self.paragraph_gap
            )));
        }
        if self.margin * 2.0 >= self.page_width || self.margin * 2.0 >= self.page_height {
            return Err(TextPageError::InvalidConfig(format!(
                "margin {} leaves no content area on a {} × {} page",
                self.margin, self.page_width, self.page_height
            )));
        }
        Ok(())
    }

    pub fn media_box(&self) -> Rect {
        Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: self.page_width,
            y2: self.page_height,
        }
    }

    /// Where content can live, i.e. within the margins
    pub fn content_box(&self) -> Rect {
        Rect {
            x1: self.margin,
            y1: self.margin,
            x2: self.page_width - self.margin,
            y2: self.page_height - self.margin,
        }
    }

    /// Baseline of the first line on every page: the top-left corner of the content box
    pub fn baseline_start(&self) -> (Pt, Pt) {
        let content = self.content_box();
        (content.x1, content.y2)
    }
}

/// One wrapped line, placed on a page. `coords` is the start of its baseline;
/// y grows upwards from the bottom of the page, as in PDF.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicalLine {
    pub text: String,
    pub coords: (Pt, Pt),
}

impl PhysicalLine {
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split(' ')
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    /// 1-based position of the page in the document
    pub number: usize,
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out lines, top to bottom
    pub lines: Vec<PhysicalLine>,
}

impl Page {
    pub fn new(number: usize, config: &PaginationConfig) -> Page {
        Page {
            number,
            media_box: config.media_box(),
            content_box: config.content_box(),
            lines: Vec::new(),
        }
    }

    pub fn add_line(&mut self, line: PhysicalLine) {
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Lays `text` out on as many pages as it needs.
///
/// The text is split into logical lines on `\n` and each is [wrap]ped to the
/// content width. Lines are placed top-down from [PaginationConfig::baseline_start],
/// `leading` apart, with an extra `paragraph_gap` after every logical line
/// (blank ones included). A line whose baseline would fall below the bottom
/// margin starts a new page instead.
///
/// Every fragment produced by wrapping ends up on exactly one page, in order.
/// Empty text yields a single empty page, and every other page holds at least
/// one line.
///
/// ```
/// use textpage::{layout::{paginate, Monospace, PaginationConfig}, pagesize, Pt};
///
/// let config = PaginationConfig::new(pagesize::A4, Pt(50.0), Pt(12.0));
/// let pages = paginate("Hello\n\nworld", &config, &Monospace::courier(Pt(12.0))).unwrap();
/// assert_eq!(pages.len(), 1);
/// assert_eq!(pages[0].lines.len(), 2);
/// assert_eq!(pages[0].lines[0].coords, config.baseline_start());
/// ```
pub fn paginate<M: Measure + ?Sized>(
    text: &str,
    config: &PaginationConfig,
    measure: &M,
) -> Result<Vec<Page>> {
    config.validate()?;

    let text = normalise(text);
    let measure = Memoized::new(measure);
    let width = config.content_box().width();
    let (start_x, start_y) = config.baseline_start();

    let mut pages: Vec<Page> = Vec::new();
    let mut page = Page::new(1, config);
    let mut y = start_y;
    let mut line_count = 0usize;

    for logical in text.split('\n') {
        for fragment in wrap(logical, width, &measure)? {
            if y < config.margin {
                // blank lines alone can exhaust a page; don't emit it empty
                if !page.is_empty() {
                    tracing::trace!(page = page.number, lines = page.lines.len(), "page full");
                    let next = Page::new(page.number + 1, config);
                    pages.push(std::mem::replace(&mut page, next));
                }
                y = start_y;
            }

            page.add_line(PhysicalLine {
                text: fragment,
                coords: (start_x, y),
            });
            line_count += 1;
            y -= config.leading;
        }

        y -= config.paragraph_gap;
    }

    pages.push(page);

    tracing::debug!(
        pages = pages.len(),
        lines = line_count,
        content_width = width.0,
        "paginated text"
    );

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeasureError;
    use crate::layout::Monospace;

    /// 100 × 100 page, 10 margin, lines 10 apart with a gap of 5 after each logical line
    fn small() -> PaginationConfig {
        PaginationConfig {
            page_width: Pt(100.0),
            page_height: Pt(100.0),
            margin: Pt(10.0),
            font_size: Pt(10.0),
            leading: Pt(10.0),
            paragraph_gap: Pt(5.0),
        }
    }

    fn unit() -> Monospace {
        Monospace::new(Pt(1.0))
    }

    #[test]
    fn derived_spacing() {
        let config = PaginationConfig::new((Pt(200.0), Pt(300.0)), Pt(20.0), Pt(12.0));
        assert_eq!(config.leading, Pt(18.0));
        assert_eq!(config.paragraph_gap, Pt(9.0));
        assert_eq!(config.baseline_start(), (Pt(20.0), Pt(280.0)));
        assert_eq!(config.content_box().width(), Pt(160.0));
    }

    #[test]
    fn rejects_unusable_geometry() {
        let mut config = small();
        config.margin = Pt(50.0);
        assert!(matches!(
            config.validate(),
            Err(TextPageError::InvalidConfig(_))
        ));

        let mut config = small();
        config.page_width = Pt(-1.0);
        assert!(matches!(
            paginate("x", &config, &unit()),
            Err(TextPageError::InvalidConfig(_))
        ));

        let mut config = small();
        config.margin = Pt(0.0);
        assert!(config.validate().is_err());

        let mut config = small();
        config.leading = Pt(f32::INFINITY);
        assert!(config.validate().is_err());

        let mut config = small();
        config.paragraph_gap = Pt(-1.0);
        assert!(config.validate().is_err());

        assert!(small().validate().is_ok());
    }

    #[test]
    fn empty_text_is_one_empty_page() {
        let pages = paginate("", &small(), &unit()).expect("valid config");
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
        assert_eq!(pages[0].number, 1);
    }

    #[test]
    fn blank_lines_advance_without_emitting_lines() {
        let pages = paginate("a\n\nb", &small(), &unit()).expect("valid config");
        let ys: Vec<Pt> = pages[0].lines.iter().map(|l| l.coords.1).collect();
        // a at 90, gap to 75, blank line gap to 70, b at 70
        assert_eq!(ys, vec![Pt(90.0), Pt(70.0)]);
    }

    #[test]
    fn paragraph_gap_is_per_logical_line_not_per_fragment() {
        // content width is 80, so each 50-wide word is its own fragment
        let word = "w".repeat(50);
        let text = format!("{word} {word}\n{word}");
        let pages = paginate(&text, &small(), &unit()).expect("valid config");
        let ys: Vec<Pt> = pages[0].lines.iter().map(|l| l.coords.1).collect();
        assert_eq!(ys, vec![Pt(90.0), Pt(80.0), Pt(65.0)]);
    }

    #[test]
    fn overflow_starts_a_new_page() {
        // one logical line of 12 fragments: baselines 90, 80, ... 10 fit (9 lines)
        let text = vec!["x".repeat(50); 12].join(" ");
        let pages = paginate(&text, &small(), &unit()).expect("valid config");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines.len(), 9);
        assert_eq!(pages[1].lines.len(), 3);
        assert_eq!(pages[1].number, 2);
        assert_eq!(pages[1].lines[0].coords, (Pt(10.0), Pt(90.0)));
        for page in &pages {
            for line in &page.lines {
                assert!(page.content_box.contains_y(line.coords.1));
            }
        }
    }

    #[test]
    fn leading_blank_lines_do_not_emit_empty_pages() {
        let text = format!("{}word", "\n".repeat(40));
        let pages = paginate(&text, &small(), &unit()).expect("valid config");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines.len(), 1);
        assert_eq!(pages[0].lines[0].coords.1, Pt(90.0));
    }

    #[test]
    fn carriage_returns_and_tabs_are_normalised() {
        let pages = paginate("a\r\nb\tc", &small(), &unit()).expect("valid config");
        let texts: Vec<&str> = pages[0].lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b c"]);
    }

    #[test]
    fn measurement_failures_are_reported() {
        fn broken(_: &str) -> std::result::Result<Pt, MeasureError> {
            Err(MeasureError::new("metrics unavailable"))
        }
        assert!(matches!(
            paginate("hello", &small(), &broken),
            Err(TextPageError::MeasurementFailure { .. })
        ));
        // nothing to measure, nothing to fail
        assert!(paginate("\n\n", &small(), &broken).is_ok());
    }
}
