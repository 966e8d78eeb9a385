//! Gradients between two colours, used to give each result card its own shade.

use crate::Colour;
use tracing::debug;

/// The two ends of the application's default gradient: a warm red-orange and a
/// cool blue.
pub const BASE: [Colour; 2] = [Colour::new(255.0, 82.0, 82.0), Colour::new(33.0, 150.0, 243.0)];

/// Which colour space a gradient is interpolated in
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Interpolation {
    /// Straight lines through red, green and blue
    Rgb,
    /// Hue, saturation and value stepped independently; gives brighter midpoints
    #[default]
    Hsv,
}

/// `n` colours stepping evenly per channel from `from` to `to`.
///
/// Every generated colour is opaque. `n == 0` gives nothing and `n == 1` gives
/// `from` unchanged (alpha included); `to` is only reached when `n >= 2`.
pub fn interpolate_rgb(from: Colour, to: Colour, n: usize) -> Vec<Colour> {
    match n {
        0 => Vec::new(),
        1 => vec![from],
        _ => {
            let steps = (n - 1) as f64;
            let dr = (to.r - from.r) / steps;
            let dg = (to.g - from.g) / steps;
            let db = (to.b - from.b) / steps;
            (0..n)
                .map(|i| {
                    let i = i as f64;
                    Colour::new(from.r + dr * i, from.g + dg * i, from.b + db * i)
                })
                .collect()
        }
    }
}

/// `n` colours stepping evenly through hue, saturation and value from `from` to
/// `to`. Same edge cases as [interpolate_rgb].
///
/// Hue is interpolated numerically and does not take the short way around the
/// colour wheel.
pub fn interpolate_hsv(from: Colour, to: Colour, n: usize) -> Vec<Colour> {
    match n {
        0 => Vec::new(),
        1 => vec![from],
        _ => {
            let a = from.to_hsv();
            let b = to.to_hsv();
            let steps = (n - 1) as f64;
            let dh = (b.h - a.h) / steps;
            let ds = (b.s - a.s) / steps;
            let dv = (b.v - a.v) / steps;
            (0..n)
                .map(|i| {
                    let i = i as f64;
                    Colour::from_hsv(a.h + dh * i, a.s + ds * i, a.v + dv * i, 1.0)
                })
                .collect()
        }
    }
}

/// `n` colours spanning the [BASE] gradient in HSV space
pub fn get_palette(n: usize) -> Vec<Colour> {
    interpolate_hsv(BASE[0], BASE[1], n)
}

/// An ordered set of gradient colours.
///
/// ```
/// use recipe_palette::Palette;
///
/// let palette = Palette::new(3);
/// let card_colours: Vec<_> = (0..7).map(|i| palette.cycle_colour(i)).collect();
/// assert_eq!(card_colours[3], card_colours[0]);
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    /// A palette of `n` colours along the default [BASE] gradient
    pub fn new(n: usize) -> Palette {
        Palette::between(BASE[0], BASE[1], n, Interpolation::Hsv)
    }

    /// A palette of `n` colours from `from` to `to`
    pub fn between(from: Colour, to: Colour, n: usize, space: Interpolation) -> Palette {
        let colours = match space {
            Interpolation::Rgb => interpolate_rgb(from, to, n),
            Interpolation::Hsv => interpolate_hsv(from, to, n),
        };
        debug!(%from, %to, n, ?space, "built palette");
        Palette { colours }
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    /// The colour for the `index`th item when there may be more items than
    /// colours; wraps around. An empty palette yields [Colour::WHITE], the
    /// plain card background.
    pub fn cycle_colour(&self, index: usize) -> Colour {
        if self.colours.is_empty() {
            return Colour::WHITE;
        }
        self.colours[index % self.colours.len()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Colour> {
        self.colours.iter()
    }

    pub fn as_slice(&self) -> &[Colour] {
        &self.colours
    }
}

impl From<Vec<Colour>> for Palette {
    fn from(colours: Vec<Colour>) -> Self {
        Palette { colours }
    }
}

impl From<Palette> for Vec<Colour> {
    fn from(palette: Palette) -> Self {
        palette.colours
    }
}

impl IntoIterator for Palette {
    type Item = Colour;
    type IntoIter = std::vec::IntoIter<Colour>;

    fn into_iter(self) -> Self::IntoIter {
        self.colours.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Colour;
    type IntoIter = std::slice::Iter<'a, Colour>;

    fn into_iter(self) -> Self::IntoIter {
        self.colours.iter()
    }
}
