//! Keyword, string, comment and number highlighting for source text.
//!
//! [highlight] scans a snapshot of the text in four passes, in a fixed order,
//! each pass re-tagging whatever it matches:
//!
//! 1. keywords of the selected [Language], on word boundaries
//! 2. `"…"` strings, then `'…'` strings, never crossing a newline
//! 3. `// …` line comments, then `/* … */` block comments
//! 4. numbers such as `42` or `3.14`, on word boundaries
//!
//! The last pass to touch a byte decides its [Category], so a keyword inside a
//! string is a string and a string inside a comment is a comment. Each kind
//! of quote and comment is swept over the whole text on its own, so a `/*`
//! on a `//` line still opens a block comment. The result is
//! a list of [StyleSpan]s sorted by start offset with no two spans overlapping.
//! The highlighter keeps no state between calls, so hosts should clear any
//! decorations from the previous call before applying the new spans.
//!
//! ```
//! use textpage::highlight::{highlight, Category, Language};
//!
//! let text = "int x = 42; // answer";
//! let spans = highlight(text, Language::Java);
//! let tagged: Vec<(&str, Category)> = spans.iter().map(|s| (s.text(text), s.category)).collect();
//! assert_eq!(
//!     tagged,
//!     vec![
//!         ("int", Category::Keyword),
//!         ("42", Category::Number),
//!         ("// answer", Category::Comment),
//!     ]
//! );
//! ```

mod language;
mod theme;

pub use language::*;
pub use theme::*;

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// What a highlighted range of text is
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    String,
    Comment,
    Number,
}

/// A tagged, half-open byte range into the text it was computed from. Both
/// ends always fall on `char` boundaries.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StyleSpan {
    pub start: usize,
    pub end: usize,
    pub category: Category,
}

impl StyleSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The highlighted text. `text` must be the snapshot the span was computed from.
    pub fn text<'t>(&self, text: &'t str) -> &'t str {
        &text[self.range()]
    }
}

/// The language-independent patterns, in pass order after keywords
struct Patterns {
    double_quoted: Regex,
    single_quoted: Regex,
    line_comments: Regex,
    block_comments: Regex,
    numbers: Regex,
}

impl Patterns {
    fn build() -> Result<Patterns, regex::Error> {
        Ok(Patterns {
            // an unterminated quote runs to the end of its line
            double_quoted: Regex::new(r#"(?m)"[^"\n]*(?:"|$)"#)?,
            single_quoted: Regex::new(r"(?m)'[^'\n]*(?:'|$)")?,
            line_comments: Regex::new(r"//[^\n]*")?,
            // an unterminated block comment runs to the end of the text
            block_comments: Regex::new(r"(?s)/\*.*?(?:\*/|\z)")?,
            numbers: Regex::new(r"\b[0-9]+\.?[0-9]*\b")?,
        })
    }
}

static PATTERNS: LazyLock<Option<Patterns>> = LazyLock::new(|| {
    Patterns::build()
        .map_err(|error| tracing::warn!(%error, "highlight patterns failed to compile"))
        .ok()
});

fn keyword_pattern(keywords: &KeywordSet) -> Option<Regex> {
    if keywords.is_empty() {
        return None;
    }
    let alternatives: Vec<String> = keywords.iter().map(regex::escape).collect();
    Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|")))
        .map_err(|error| tracing::warn!(%error, "keyword pattern failed to compile"))
        .ok()
}

static JAVA_KEYWORDS: LazyLock<Option<Regex>> =
    LazyLock::new(|| keyword_pattern(Language::Java.keywords()));
static PYTHON_KEYWORDS: LazyLock<Option<Regex>> =
    LazyLock::new(|| keyword_pattern(Language::Python.keywords()));
static JAVASCRIPT_KEYWORDS: LazyLock<Option<Regex>> =
    LazyLock::new(|| keyword_pattern(Language::JavaScript.keywords()));

fn keywords_for(language: Language) -> Option<&'static Regex> {
    match language {
        Language::Java => JAVA_KEYWORDS.as_ref(),
        Language::Python => PYTHON_KEYWORDS.as_ref(),
        Language::JavaScript => JAVASCRIPT_KEYWORDS.as_ref(),
        Language::PlainText => None,
    }
}

/// Classify the keywords, strings, comments and numbers in `text`.
///
/// Never fails: text without matches, or a pattern table that could not be
/// built, produces no spans. Calling this twice with the same arguments gives
/// the same spans.
pub fn highlight(text: &str, language: Language) -> Vec<StyleSpan> {
    let Some(patterns) = PATTERNS.as_ref() else {
        return Vec::new();
    };

    let passes = [
        (Category::Keyword, keywords_for(language)),
        (Category::String, Some(&patterns.double_quoted)),
        (Category::String, Some(&patterns.single_quoted)),
        (Category::Comment, Some(&patterns.line_comments)),
        (Category::Comment, Some(&patterns.block_comments)),
        (Category::Number, Some(&patterns.numbers)),
    ];

    // one slot per byte; each pass overwrites what it matches
    let mut paint: Vec<Option<Category>> = vec![None; text.len()];
    for (category, pattern) in passes {
        let Some(pattern) = pattern else {
            continue;
        };
        for m in pattern.find_iter(text) {
            paint[m.range()].fill(Some(category));
        }
    }

    collect_spans(&paint)
}

/// Collapse runs of equally-tagged bytes into spans
fn collect_spans(paint: &[Option<Category>]) -> Vec<StyleSpan> {
    let mut spans = Vec::new();
    let mut run: Option<(usize, Category)> = None;

    for (i, &tag) in paint.iter().enumerate() {
        if let (Some((_, current)), Some(next)) = (run, tag) {
            if current == next {
                continue;
            }
        }
        if let Some((start, category)) = run.take() {
            spans.push(StyleSpan {
                start,
                end: i,
                category,
            });
        }
        run = tag.map(|category| (i, category));
    }

    if let Some((start, category)) = run {
        spans.push(StyleSpan {
            start,
            end: paint.len(),
            category,
        });
    }

    spans
}
