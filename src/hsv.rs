use derive_more::{Display, From, Into};

/// A colour expressed as hue, saturation and value.
///
/// `h` is in degrees, `[0, 360)`. `s` ranges from 0.0 to 1.0. `v` keeps the
/// range of the RGB channels it was computed from, so an HSV triple taken
/// from a [Colour](crate::Colour) has `v` in `[0, 255]` rather than the
/// textbook `[0, 1]`. [Colour::from_hsv](crate::Colour::from_hsv) expects
/// the same convention, so the two convert back and forth without scaling.
#[derive(Copy, Clone, PartialEq, Debug, Default, Display, From, Into)]
#[display("hsv({h}, {s}, {v})")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue in degrees
    pub h: f64,
    /// Saturation, 0.0 to 1.0
    pub s: f64,
    /// Value, in the source colour's channel range
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Hsv {
        Hsv { h, s, v }
    }
}
