use super::Measure;
use crate::error::{Result, TextPageError};
use crate::units::Pt;

const TABSIZE: usize = 4;

/// Normalise line endings to `\n` and replace tabs with spaces, so that the
/// only line separator is `\n` and the only word separator is a space
pub fn normalise(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', &" ".repeat(TABSIZE))
}

/// Split a logical line into its words. Runs of spaces separate words and
/// never produce empty ones.
pub fn words(line: &str) -> impl Iterator<Item = &str> {
    line.split(' ').filter(|word| !word.is_empty())
}

/// Measure `text`, attributing any failure to the string being measured
pub fn width_of_text<M: Measure + ?Sized>(text: &str, measure: &M) -> Result<Pt> {
    measure
        .measure(text)
        .map_err(|source| TextPageError::MeasurementFailure {
            text: text.to_string(),
            source,
        })
}

/// Greedily wraps one logical line (which must not contain `\n`) into
/// fragments narrower than `max_width`.
///
/// Words are added to the current fragment for as long as the fragment stays
/// strictly narrower than `max_width`; the first word that would reach or pass
/// it starts a new fragment. Words are never split, so a word that is wider
/// than `max_width` on its own becomes a fragment of its own that overflows.
/// An empty or all-space line produces no fragments.
///
/// ```
/// use textpage::{layout::{wrap, Monospace}, Pt};
///
/// let fragments = wrap("a b c", Pt(3.5), &Monospace::new(Pt(1.0))).unwrap();
/// assert_eq!(fragments, vec!["a b", "c"]);
/// ```
pub fn wrap<M: Measure + ?Sized>(line: &str, max_width: Pt, measure: &M) -> Result<Vec<String>> {
    let mut fragments: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in words(line) {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if width_of_text(&candidate, measure)? < max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                fragments.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        fragments.push(current);
    }

    Ok(fragments)
}
