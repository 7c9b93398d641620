use serde::{Deserialize, Serialize};

use crate::{error::{Error, Result}, style::Rgb};

/// Green to red ramp used for authority-level impact maps.
const IMPACT: &[Rgb] = &[
    Rgb::new(0x91, 0xcf, 0x60), // light green
    Rgb::new(0xfc, 0x8d, 0x59), // orange
    Rgb::new(0xd7, 0x30, 0x27), // red
];

/// Finer pale-green to burnt-orange ramp for dense urban maps.
const GREENS_TO_ORANGE: &[Rgb] = &[
    Rgb::new(0xe6, 0xf3, 0xe6), Rgb::new(0xc2, 0xe0, 0xc2), Rgb::new(0x9f, 0xce, 0x9f),
    Rgb::new(0x7c, 0xbc, 0x7c), Rgb::new(0xff, 0xcc, 0x80), Rgb::new(0xff, 0xb3, 0x66),
    Rgb::new(0xff, 0x94, 0x4d), Rgb::new(0xff, 0x77, 0x33), Rgb::new(0xff, 0x55, 0x00),
    Rgb::new(0xe6, 0x4d, 0x00), Rgb::new(0xcc, 0x44, 0x00),
];

/// Ten distinct colors for categorical maps, reused cyclically.
const CATEGORICAL: &[Rgb] = &[
    Rgb::new(0x1f, 0x77, 0xb4), Rgb::new(0xff, 0x7f, 0x0e), Rgb::new(0x2c, 0xa0, 0x2c),
    Rgb::new(0xd6, 0x27, 0x28), Rgb::new(0x94, 0x67, 0xbd), Rgb::new(0x8c, 0x56, 0x4b),
    Rgb::new(0xe3, 0x77, 0xc2), Rgb::new(0x7f, 0x7f, 0x7f), Rgb::new(0xbc, 0xbd, 0x22),
    Rgb::new(0x17, 0xbe, 0xcf),
];

/// An ordered, non-empty list of color stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rgb>", into = "Vec<Rgb>")]
pub struct Palette(Vec<Rgb>);

impl Palette {
    pub fn new(stops: Vec<Rgb>) -> Result<Self> {
        if stops.is_empty() { return Err(Error::InvalidPalette("palette has no colors".into())) }
        Ok(Self(stops))
    }

    /// Build from `#rrggbb` strings.
    pub fn from_hex<S: AsRef<str>>(stops: &[S]) -> Result<Self> {
        Self::new(stops.iter().map(|s| Rgb::from_hex(s.as_ref())).collect::<Result<_>>()?)
    }

    pub fn impact() -> Self { Self(IMPACT.to_vec()) }

    pub fn greens_to_orange() -> Self { Self(GREENS_TO_ORANGE.to_vec()) }

    pub fn categorical() -> Self { Self(CATEGORICAL.to_vec()) }

    #[inline] pub fn stops(&self) -> &[Rgb] { &self.0 }

    #[inline] pub fn len(&self) -> usize { self.0.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Color at position `t` in [0, 1], interpolating between evenly spaced stops.
    pub fn sample(&self, t: f64) -> Rgb {
        let stops = &self.0;
        if stops.len() == 1 || t.is_nan() { return stops[0] }

        let position = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
        let lower = (position.floor() as usize).min(stops.len() - 2);
        stops[lower].lerp(&stops[lower + 1], position - lower as f64)
    }

    /// Color for the `index`-th category, wrapping around.
    #[inline]
    pub fn cycle(&self, index: usize) -> Rgb { self.0[index % self.0.len()] }
}

impl Default for Palette {
    fn default() -> Self { Self::impact() }
}

impl TryFrom<Vec<Rgb>> for Palette {
    type Error = Error;

    fn try_from(stops: Vec<Rgb>) -> Result<Self> { Self::new(stops) }
}

impl From<Palette> for Vec<Rgb> {
    fn from(palette: Palette) -> Self { palette.0 }
}
