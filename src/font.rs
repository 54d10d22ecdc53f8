use crate::error::{MeasureError, TextPageError};
use crate::layout::Measure;
use crate::units::Pt;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// A parsed TrueType or OpenType font, used as a source of glyph metrics for layout.
///
/// The font is not embedded in exported PDFs; it only decides how wide lines
/// are, so it should match the face the host renders with.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, TextPageError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font { face })
    }

    /// The full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.name_record(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// The family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.name_record(owned_ttf_parser::name_id::FAMILY)
    }

    fn name_record(&self, id: u16) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the default line height of the font for the given size
    pub fn line_height(&self, size: Pt) -> Pt {
        let gap = self.scaling(size) * self.face.as_face_ref().line_gap() as f32;
        gap + self.ascent(size) - self.descent(size)
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    /// Calculate the width of `text` at `size`. Fails on the first character the font has no
    /// glyph for.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Result<Pt, MeasureError> {
        let scaling = self.scaling(size);
        text.chars()
            .map(|ch| -> Result<Pt, MeasureError> {
                let gid = self.glyph_id(ch).ok_or_else(|| {
                    MeasureError::new(format!("font has no glyph for {ch:?}"))
                })?;
                let advance = self
                    .face
                    .as_face_ref()
                    .glyph_hor_advance(GlyphId(gid))
                    .unwrap_or_default();
                Ok(scaling * advance as f32)
            })
            .sum()
    }

    /// A [Measure] for this font at the given size
    pub fn metrics(&self, size: Pt) -> FontMetrics<'_> {
        FontMetrics { font: self, size }
    }
}

/// Measures text with the glyph advances of a [Font] at a fixed size
pub struct FontMetrics<'f> {
    pub font: &'f Font,
    pub size: Pt,
}

impl Measure for FontMetrics<'_> {
    fn measure(&self, text: &str) -> Result<Pt, MeasureError> {
        self.font.width_of_text(text, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_not_a_font() {
        let result = Font::load(b"definitely not a font".to_vec());
        assert!(matches!(result, Err(TextPageError::FaceParsing(_))));
    }
}
