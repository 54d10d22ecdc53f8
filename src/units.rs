//! Length units used throughout layout. Everything is ultimately expressed in
//! PDF points ([Pt], 1/72 of an inch); [In] and [Mm] exist so page geometry
//! can be written the way it is usually specified.

use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use serde::Deserialize;
use std::ops::{Div, Mul, Neg};

/// A length in PDF points
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
    Deserialize,
)]
#[display("{_0}pt")]
#[serde(transparent)]
pub struct Pt(pub f32);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, From, Into)]
pub struct In(pub f32);

/// A length in millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, From, Into)]
pub struct Mm(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * 72.0)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Self {
        Pt(value.0 * 72.0 / 25.4)
    }
}

impl Pt {
    /// Whether the length is a usable, finite, strictly positive value
    pub fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

impl Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}
