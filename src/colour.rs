use crate::Hsv;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A colour in the RGB colour space with an alpha channel.
///
/// r, g, and b range from 0.0 to 255.0 and are kept as floats; they are only
/// rounded when the colour is displayed. a ranges from 0.0 to 1.0.
///
/// Colours are plain values: the arithmetic operators clamp their result into
/// the valid ranges and always return a new colour.
///
/// ```
/// use recipe_palette::Colour;
///
/// let orange = Colour::new(255.0, 82.0, 82.0);
/// assert_eq!((orange + Colour::new(100.0, 0.0, 0.0)).red(), 255.0);
/// assert_eq!(orange.to_string(), "rgba(255, 82, 82, 1)");
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Colour {
    pub const MID: Colour = Colour::rgba(122.0, 122.0, 122.0, 0.5);
    pub const RED: Colour = Colour::new(255.0, 0.0, 0.0);
    pub const GREEN: Colour = Colour::new(0.0, 255.0, 0.0);
    pub const BLUE: Colour = Colour::new(0.0, 0.0, 255.0);
    pub const TRANSPARENT: Colour = Colour::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Colour = Colour::new(0.0, 0.0, 0.0);
    pub const WHITE: Colour = Colour::new(255.0, 255.0, 255.0);

    /// Create a new, fully opaque colour. r, g, and b range from 0.0 to 255.0
    pub const fn new(r: f64, g: f64, b: f64) -> Colour {
        Colour { r, g, b, a: 1.0 }
    }

    /// Create a new colour with an explicit alpha, which is stored as-is (an alpha
    /// of 0.0 gives a fully transparent colour)
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Colour {
        Colour { r, g, b, a }
    }

    /// Create a new colour where the alpha may not have been supplied. `None`
    /// means opaque; `Some(0.0)` is kept as a transparent colour.
    pub fn from_parts(r: f64, g: f64, b: f64, a: Option<f64>) -> Colour {
        Colour::rgba(r, g, b, a.unwrap_or(1.0))
    }

    pub fn red(&self) -> f64 {
        self.r
    }

    pub fn green(&self) -> f64 {
        self.g
    }

    pub fn blue(&self) -> f64 {
        self.b
    }

    pub fn alpha(&self) -> f64 {
        self.a
    }

    /// The euclidean length of the colour treated as an `(r, g, b, a)` vector.
    ///
    /// Alpha is not rescaled to the 0–255 range of the other channels, so it
    /// contributes almost nothing. [Colour::threshold] is calibrated against
    /// exactly this formula.
    pub fn magnitude(&self) -> f64 {
        (self.r * self.r + self.g * self.g + self.b * self.b + self.a * self.a).sqrt()
    }

    /// The magnitude of [Colour::MID]; colours above it count as bright
    pub fn threshold() -> f64 {
        Colour::MID.magnitude()
    }

    pub fn is_bright(&self) -> bool {
        self.magnitude() > Colour::threshold()
    }

    /// A text colour that stays legible on top of this colour: black on
    /// bright colours, white otherwise
    pub fn contrasting_text(&self) -> Colour {
        if self.is_bright() {
            Colour::BLACK
        } else {
            Colour::WHITE
        }
    }

    /// Convert to hue, saturation and value. Value keeps the 0–255 channel range.
    /// Greys have no defined hue and report a hue of 0.
    pub fn to_hsv(&self) -> Hsv {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let chroma = max - min;

        let sector = if chroma == 0.0 {
            0.0
        } else if max == self.b {
            (self.r - self.g) / chroma + 4.0
        } else if max == self.g {
            (self.b - self.r) / chroma + 2.0
        } else {
            ((self.g - self.b) / chroma).rem_euclid(6.0)
        };

        // rem_euclid can return 6.0 for a tiny negative term; that hue is 0
        let h = 60.0 * sector;
        let h = if h >= 360.0 { 0.0 } else { h };

        let v = max;
        let s = if v == 0.0 { 0.0 } else { chroma / v };
        Hsv::new(h, s, v)
    }

    /// Build a colour from hue (degrees), saturation (0–1) and value (0–255).
    ///
    /// Unlike the constructors there is no alpha default; the given alpha is used
    /// verbatim. A hue outside `[0, 360)` falls in no sector and produces the grey
    /// `(v - s·v)` on every channel.
    pub fn from_hsv(h: f64, s: f64, v: f64, alpha: f64) -> Colour {
        let c = s * v;
        let hd = h / 60.0;
        let x = c * (1.0 - ((hd % 2.0) - 1.0).abs());

        let (r1, g1, b1) = if (0.0..1.0).contains(&hd) {
            (c, x, 0.0)
        } else if (1.0..2.0).contains(&hd) {
            (x, c, 0.0)
        } else if (2.0..3.0).contains(&hd) {
            (0.0, c, x)
        } else if (3.0..4.0).contains(&hd) {
            (0.0, x, c)
        } else if (4.0..5.0).contains(&hd) {
            (x, 0.0, c)
        } else if (5.0..6.0).contains(&hd) {
            (c, 0.0, x)
        } else {
            (0.0, 0.0, 0.0)
        };

        let m = v - c;
        Colour::rgba(r1 + m, g1 + m, b1 + m, alpha)
    }

    /// The `rgba(..)` string older styling code expects, with alpha rounded to
    /// the nearest integer like the colour channels. This collapses every alpha
    /// to 0 or 1; prefer the [Display](fmt::Display) form, which keeps it
    /// fractional.
    pub fn to_rounded_rgba_string(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            round_half_up(self.r),
            round_half_up(self.g),
            round_half_up(self.b),
            round_half_up(self.a)
        )
    }
}

// comparisons written out so NaN passes through instead of being clamped away
fn clamp_max(value: f64, max: f64) -> f64 {
    if value > max {
        max
    } else {
        value
    }
}

fn clamp_min(value: f64, min: f64) -> f64 {
    if value < min {
        min
    } else {
        value
    }
}

/// Rounds .5 towards positive infinity. Compares the fractional part rather
/// than adding 0.5, which rounds 0.49999999999999994 up to 1.
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

impl Add for Colour {
    type Output = Colour;

    /// Per-channel sum, clamped to 255 for r/g/b and 1 for alpha
    fn add(self, rhs: Colour) -> Colour {
        Colour::rgba(
            clamp_max(self.r + rhs.r, 255.0),
            clamp_max(self.g + rhs.g, 255.0),
            clamp_max(self.b + rhs.b, 255.0),
            clamp_max(self.a + rhs.a, 1.0),
        )
    }
}

impl Sub for Colour {
    type Output = Colour;

    /// Per-channel difference, clamped to 0 for all four channels
    fn sub(self, rhs: Colour) -> Colour {
        Colour::rgba(
            clamp_min(self.r - rhs.r, 0.0),
            clamp_min(self.g - rhs.g, 0.0),
            clamp_min(self.b - rhs.b, 0.0),
            clamp_min(self.a - rhs.a, 0.0),
        )
    }
}

impl Mul<f64> for Colour {
    type Output = Colour;

    /// Scales every channel. r/g/b are rounded to whole numbers and clamped to 255;
    /// alpha is clamped to 1 but stays fractional.
    fn mul(self, rhs: f64) -> Colour {
        Colour::rgba(
            clamp_max(round_half_up(self.r * rhs), 255.0),
            clamp_max(round_half_up(self.g * rhs), 255.0),
            clamp_max(round_half_up(self.b * rhs), 255.0),
            clamp_max(self.a * rhs, 1.0),
        )
    }
}

/// Formats as `rgba(r, g, b, a)`. The colour channels are rounded to the nearest
/// integer; alpha is written unrounded.
impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            round_half_up(self.r),
            round_half_up(self.g),
            round_half_up(self.b),
            self.a
        )
    }
}

impl From<(f64, f64, f64)> for Colour {
    fn from(c: (f64, f64, f64)) -> Self {
        Colour::new(c.0, c.1, c.2)
    }
}

impl From<[f64; 3]> for Colour {
    fn from(c: [f64; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new(r, g, b)
    }
}

impl From<(f64, f64, f64, f64)> for Colour {
    fn from(c: (f64, f64, f64, f64)) -> Self {
        Colour::rgba(c.0, c.1, c.2, c.3)
    }
}

impl From<[f64; 4]> for Colour {
    fn from(c: [f64; 4]) -> Self {
        let [r, g, b, a] = c;
        Colour::rgba(r, g, b, a)
    }
}

impl From<Colour> for [f64; 4] {
    fn from(c: Colour) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn alpha_defaults_only_when_missing() {
        assert_eq!(Colour::new(1.0, 2.0, 3.0).alpha(), 1.0);
        assert_eq!(Colour::from_parts(1.0, 2.0, 3.0, None).alpha(), 1.0);
        assert_eq!(Colour::from_parts(1.0, 2.0, 3.0, Some(0.0)).alpha(), 0.0);
        assert_eq!(Colour::from_parts(1.0, 2.0, 3.0, Some(0.25)).alpha(), 0.25);
    }

    #[test]
    fn add_clamps_at_upper_bounds() {
        let sum = Colour::RED + Colour::new(100.0, 0.0, 0.0);
        assert_eq!(sum, Colour::RED);

        let sum = Colour::rgba(10.0, 20.0, 30.0, 0.75) + Colour::rgba(1.0, 2.0, 3.0, 0.75);
        assert_eq!(sum, Colour::rgba(11.0, 22.0, 33.0, 1.0));
    }

    #[test]
    fn subtract_clamps_at_zero() {
        let diff = Colour::rgba(10.0, 200.0, 0.0, 0.5) - Colour::rgba(20.0, 100.0, 5.0, 1.0);
        assert_eq!(diff, Colour::rgba(0.0, 100.0, 0.0, 0.0));
    }

    #[test]
    fn operands_are_left_untouched() {
        let a = Colour::new(200.0, 10.0, 10.0);
        let b = Colour::new(100.0, 10.0, 10.0);
        let _ = a + b;
        let _ = a - b;
        let _ = a * 3.0;
        assert_eq!(a, Colour::new(200.0, 10.0, 10.0));
        assert_eq!(b, Colour::new(100.0, 10.0, 10.0));
    }

    #[test]
    fn multiply_rounds_channels_but_not_alpha() {
        let scaled = Colour::rgba(10.0, 101.0, 200.0, 0.5) * 0.5;
        assert_eq!(scaled, Colour::rgba(5.0, 51.0, 100.0, 0.25));

        let scaled = Colour::rgba(200.0, 100.0, 10.0, 0.8) * 2.0;
        assert_eq!(scaled, Colour::rgba(255.0, 200.0, 20.0, 1.0));
    }

    #[test]
    fn magnitude_includes_alpha() {
        assert!(close(Colour::rgba(3.0, 4.0, 0.0, 0.0).magnitude(), 5.0));
        assert!(close(Colour::TRANSPARENT.magnitude(), 0.0));
        assert!(close(Colour::BLACK.magnitude(), 1.0));
    }

    #[test]
    fn threshold_splits_text_colours() {
        let expected = (3.0 * 122.0_f64 * 122.0 + 0.25).sqrt();
        assert!(close(Colour::threshold(), expected));
        assert_eq!(Colour::WHITE.contrasting_text(), Colour::BLACK);
        assert_eq!(Colour::BLACK.contrasting_text(), Colour::WHITE);
        assert!(!Colour::MID.is_bright());
    }

    #[test]
    fn red_to_hsv_keeps_channel_range() {
        assert_eq!(Colour::RED.to_hsv(), Hsv::new(0.0, 1.0, 255.0));
    }

    #[test]
    fn primary_hues() {
        assert_eq!(Colour::GREEN.to_hsv().h, 120.0);
        assert_eq!(Colour::BLUE.to_hsv().h, 240.0);
        assert_eq!(Colour::new(255.0, 0.0, 255.0).to_hsv().h, 300.0);
    }

    #[test]
    fn red_sector_hue_is_never_negative() {
        // blue above green with red on top lands just below 360
        let hsv = Colour::new(255.0, 0.0, 127.5).to_hsv();
        assert!(close(hsv.h, 330.0));
    }

    #[test]
    fn near_red_hue_wraps_to_zero() {
        let c = Colour::new(255.0, 0.0, 1e-15);
        let hsv = c.to_hsv();
        assert!(hsv.h < 360.0, "hue {} out of range", hsv.h);
        assert_eq!(hsv, Hsv::new(0.0, 1.0, 255.0));

        let back = Colour::from_hsv(hsv.h, hsv.s, hsv.v, 1.0);
        assert_eq!(back.to_string(), "rgba(255, 0, 0, 1)");
    }

    #[test]
    fn greys_have_zero_hue_and_saturation() {
        let hsv = Colour::new(80.0, 80.0, 80.0).to_hsv();
        assert_eq!(hsv, Hsv::new(0.0, 0.0, 80.0));
        assert_eq!(Colour::BLACK.to_hsv(), Hsv::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn from_hsv_uses_given_alpha() {
        assert_eq!(Colour::from_hsv(0.0, 1.0, 255.0, 0.0), Colour::rgba(255.0, 0.0, 0.0, 0.0));
        assert_eq!(Colour::from_hsv(240.0, 1.0, 255.0, 1.0), Colour::BLUE);
    }

    #[test]
    fn from_hsv_outside_sectors_is_grey() {
        let c = Colour::from_hsv(360.0, 0.5, 200.0, 1.0);
        assert_eq!(c, Colour::new(100.0, 100.0, 100.0));
    }

    #[test]
    fn displays_rgba() {
        assert_eq!(Colour::BLACK.to_string(), "rgba(0, 0, 0, 1)");
        assert_eq!(Colour::rgba(12.4, 12.5, 254.6, 0.5).to_string(), "rgba(12, 13, 255, 0.5)");
        assert_eq!(Colour::MID.to_rounded_rgba_string(), "rgba(122, 122, 122, 1)");
        assert_eq!(Colour::rgba(1.0, 2.0, 3.0, 0.4).to_rounded_rgba_string(), "rgba(1, 2, 3, 0)");
    }

    #[test]
    fn rounds_half_up_without_addition_error() {
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(254.4), 254.0);
        assert_eq!(Colour::new(0.49999999999999994, 0.0, 0.0).to_string(), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn nan_propagates() {
        let c = Colour::new(f64::NAN, 0.0, 0.0) + Colour::BLACK;
        assert!(c.r.is_nan());
        let c = Colour::new(f64::NAN, 0.0, 0.0) * 2.0;
        assert!(c.r.is_nan());
    }

    #[test]
    fn array_conversions() {
        let c: Colour = [1.0, 2.0, 3.0].into();
        assert_eq!(c, Colour::new(1.0, 2.0, 3.0));
        let c: Colour = (1.0, 2.0, 3.0, 0.0).into();
        let parts: [f64; 4] = c.into();
        assert_eq!(parts, [1.0, 2.0, 3.0, 0.0]);
    }
}
