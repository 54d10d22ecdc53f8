use std::io::Write;

/// A colour, expressed in RGB or CMYK colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceCMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Approximate 8-bit RGB triple, for hosts that paint with byte colours
    pub fn to_rgb_bytes(&self) -> (u8, u8, u8) {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        match *self {
            Colour::RGB { r, g, b } => (byte(r), byte(g), byte(b)),
            Colour::CMYK { c, m, y, k } => (
                byte((1.0 - c) * (1.0 - k)),
                byte((1.0 - m) * (1.0 - k)),
                byte((1.0 - y) * (1.0 - k)),
            ),
            Colour::Grey { g } => (byte(g), byte(g), byte(g)),
        }
    }

    /// Write the non-stroking (fill) colour operator for this colour to a content stream
    #[allow(clippy::write_with_newline)]
    pub(crate) fn write_fill<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match *self {
            Colour::RGB { r, g, b } => write!(out, "{r} {g} {b} rg\n"),
            Colour::CMYK { c, m, y, k } => write!(out, "{c} {m} {y} {k} k\n"),
            Colour::Grey { g } => write!(out, "{g} g\n"),
        }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_colours_round_trip() {
        let c = Colour::new_rgb_bytes(127, 0, 85);
        assert_eq!(c.to_rgb_bytes(), (127, 0, 85));
        assert_eq!(colours::WHITE.to_rgb_bytes(), (255, 255, 255));
        assert_eq!(Colour::from((0.0f32, 0.0, 0.0)).to_rgb_bytes(), (0, 0, 0));
    }

    #[test]
    fn fill_operators() {
        let mut out = Vec::new();
        colours::BLACK.write_fill(&mut out).expect("can write");
        Colour::new_rgb(1.0, 0.5, 0.0)
            .write_fill(&mut out)
            .expect("can write");
        assert_eq!(String::from_utf8_lossy(&out), "0 g\n1 0.5 0 rg\n");
    }
}
