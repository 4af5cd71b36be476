//! Colors, palettes and the index sequences that pick from them
//!
//! A [`ColorPicker`] is a flat list of palette indices. Resolving it against a
//! [`ColorPalette`] produces a [`ColorSequence`], the ordered list of fill colors
//! a generator consumes one decision at a time.

use crate::io::error::{Result, invalid_argument};
use image::Rgba;
use rand::Rng;

/// RGB color with each channel in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    r: f64,
    g: f64,
    b: f64,
}

impl Rgb {
    /// Create a color, rejecting channels outside `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any channel is NaN or outside `[0, 1]`
    pub fn new(r: f64, g: f64, b: f64) -> Result<Self> {
        for channel in [r, g, b] {
            if !(0.0..=1.0).contains(&channel) {
                return Err(invalid_argument(
                    "color",
                    &format!("({r}, {g}, {b})"),
                    &"channels must lie in [0, 1]",
                ));
            }
        }
        Ok(Self { r, g, b })
    }

    /// Draw three independent uniform channels from `rng`, in R, G, B order
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let r = rng.random::<f64>();
        let g = rng.random::<f64>();
        let b = rng.random::<f64>();
        Self { r, g, b }
    }

    /// Red channel
    pub const fn r(self) -> f64 {
        self.r
    }

    /// Green channel
    pub const fn g(self) -> f64 {
        self.g
    }

    /// Blue channel
    pub const fn b(self) -> f64 {
        self.b
    }

    /// Opaque 8-bit RGBA pixel for this color
    pub fn to_rgba8(self) -> Rgba<u8> {
        Rgba([
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            u8::MAX,
        ])
    }
}

fn channel_to_u8(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * f64::from(u8::MAX)).round() as u8
}

/// Ordered, non-empty set of colors addressed by index
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    colors: Vec<Rgb>,
}

impl ColorPalette {
    /// Create a palette from a list of colors
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `colors` is empty
    pub fn new(colors: Vec<Rgb>) -> Result<Self> {
        if colors.is_empty() {
            return Err(invalid_argument(
                "palette",
                &"[]",
                &"palette must contain at least one color",
            ));
        }
        Ok(Self { colors })
    }

    /// Create a palette from raw `[r, g, b]` channel triples
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the list is empty or any channel is out of range
    pub fn from_channels(channels: &[[f64; 3]]) -> Result<Self> {
        let colors = channels
            .iter()
            .map(|&[r, g, b]| Rgb::new(r, g, b))
            .collect::<Result<Vec<_>>>()?;
        Self::new(colors)
    }

    /// Number of colors in the palette
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; palettes are never empty
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, if present
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// All colors in palette order
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

/// Sequence of palette indices consumed in order, one per color decision
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorPicker {
    indices: Vec<usize>,
}

impl ColorPicker {
    /// Wrap a list of palette indices
    pub const fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the picker has no entries
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Entries in consumption order
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Resolve every entry against `palette`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming the first entry that does not index into `palette`
    pub fn resolve(&self, palette: &ColorPalette) -> Result<ColorSequence> {
        let colors = self
            .indices
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                palette.get(index).ok_or_else(|| {
                    invalid_argument(
                        "color_picker",
                        &index,
                        &format!(
                            "entry {position} is out of range for a palette of {} colors",
                            palette.len()
                        ),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ColorSequence { colors })
    }
}

impl From<Vec<usize>> for ColorPicker {
    fn from(indices: Vec<usize>) -> Self {
        Self::new(indices)
    }
}

/// Picker entries resolved to colors, in consumption order
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSequence {
    colors: Vec<Rgb>,
}

impl ColorSequence {
    /// Resolve `picker` against `palette`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any picker entry is out of range
    pub fn new(palette: &ColorPalette, picker: &ColorPicker) -> Result<Self> {
        picker.resolve(palette)
    }

    /// Number of color decisions available
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no decisions are available
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors in consumption order
    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.colors.iter().copied()
    }
}

/// How rectangle tiles get their colors
#[derive(Debug, Clone, PartialEq)]
pub enum ColorMode {
    /// Independent uniform RGB color per tile
    Random,
    /// Palette colors chosen by a picker
    Palette(ColorSequence),
}

impl ColorMode {
    /// Palette mode from a palette and a picker
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any picker entry is out of range
    pub fn palette(palette: &ColorPalette, picker: &ColorPicker) -> Result<Self> {
        ColorSequence::new(palette, picker).map(Self::Palette)
    }

    /// Mode from an optional palette and picker, which must be given together
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if exactly one of the two is present, or if a
    /// picker entry is out of range
    pub fn from_parts(
        palette: Option<&ColorPalette>,
        picker: Option<&ColorPicker>,
    ) -> Result<Self> {
        match (palette, picker) {
            (None, None) => Ok(Self::Random),
            (Some(palette), Some(picker)) => Self::palette(palette, picker),
            (Some(_), None) => Err(invalid_argument(
                "color_picker",
                &"<absent>",
                &"a color palette requires a color picker",
            )),
            (None, Some(picker)) => Err(invalid_argument(
                "color_palette",
                &"<absent>",
                &format!(
                    "a color picker of {} entries requires a color palette",
                    picker.len()
                ),
            )),
        }
    }
}
