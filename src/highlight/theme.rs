use super::Category;
use crate::colour::Colour;

/// How a host should decorate one [Category]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpanStyle {
    pub colour: Colour,
    pub bold: bool,
    pub italic: bool,
}

impl SpanStyle {
    pub fn plain(colour: Colour) -> SpanStyle {
        SpanStyle {
            colour,
            bold: false,
            italic: false,
        }
    }
}

/// A style per category. The default is the editor palette: bold dark red
/// keywords, blue strings, italic green comments and navy numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub keyword: SpanStyle,
    pub string: SpanStyle,
    pub comment: SpanStyle,
    pub number: SpanStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            keyword: SpanStyle {
                bold: true,
                ..SpanStyle::plain(Colour::new_rgb_bytes(127, 0, 85))
            },
            string: SpanStyle::plain(Colour::new_rgb_bytes(42, 0, 255)),
            comment: SpanStyle {
                italic: true,
                ..SpanStyle::plain(Colour::new_rgb_bytes(63, 127, 95))
            },
            number: SpanStyle::plain(Colour::new_rgb_bytes(0, 0, 192)),
        }
    }
}

impl Theme {
    pub fn style(&self, category: Category) -> SpanStyle {
        match category {
            Category::Keyword => self.keyword,
            Category::String => self.string,
            Category::Comment => self.comment,
            Category::Number => self.number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette() {
        let theme = Theme::default();
        assert!(theme.style(Category::Keyword).bold);
        assert!(theme.style(Category::Comment).italic);
        assert!(!theme.style(Category::String).bold);
        assert_eq!(
            theme.style(Category::Number).colour.to_rgb_bytes(),
            (0, 0, 192)
        );
    }
}
