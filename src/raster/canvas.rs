//! Raster canvas and the fill operations the tiling generators draw with

use crate::generation::color::Rgb;
use crate::raster::triangle::{Point, triangle_path};
use image::{Rgba, RgbaImage};
use std::fmt;
use tiny_skia::{Color, FillRule, Paint, Pixmap, PremultipliedColorU8, Rect, Shader, Transform};

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl PixelRect {
    /// Create a rectangle
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Drawing target for tiling generators
///
/// Fills are solid and unstroked; later fills overwrite earlier ones.
pub trait Surface {
    /// Surface size as (width, height) in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Fill an axis-aligned rectangle, clipped to the surface
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb);

    /// Fill a triangle, clipped to the surface
    fn fill_triangle(&mut self, vertices: [Point; 3], color: Rgb);
}

/// In-memory RGBA raster backed by a `tiny-skia` pixmap, transparent until painted
///
/// Fills are aliased so tiles and triangles keep hard, seam-free edges. A
/// canvas with zero width or height holds no pixel storage.
#[derive(Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixmap: Option<Pixmap>,
}

impl Canvas {
    /// Create a fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixmap: Pixmap::new(width, height),
        }
    }

    /// Canvas width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`, if inside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.pixmap
            .as_ref()
            .and_then(|pixmap| pixmap.pixel(x, y))
            .map(to_rgba8)
    }

    /// Copy the canvas into a straight-alpha `image` buffer for encoding
    pub fn to_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.width, self.height);
        if let Some(ref pixmap) = self.pixmap {
            for (target, source) in image.pixels_mut().zip(pixmap.pixels()) {
                *target = to_rgba8(*source);
            }
        }
        image
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Canvas {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.pixmap.as_ref().map(Pixmap::data) == other.pixmap.as_ref().map(Pixmap::data)
    }
}

impl Surface for Canvas {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        let right = rect.x.saturating_add(rect.width).min(self.width);
        let bottom = rect.y.saturating_add(rect.height).min(self.height);
        if rect.x >= right || rect.y >= bottom {
            return;
        }

        let bounds = Rect::from_ltrb(rect.x as f32, rect.y as f32, right as f32, bottom as f32);
        if let (Some(pixmap), Some(bounds)) = (self.pixmap.as_mut(), bounds) {
            pixmap.fill_rect(bounds, &solid_paint(color), Transform::identity(), None);
        }
    }

    fn fill_triangle(&mut self, vertices: [Point; 3], color: Rgb) {
        if let (Some(pixmap), Some(path)) = (self.pixmap.as_mut(), triangle_path(vertices)) {
            pixmap.fill_path(
                &path,
                &solid_paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }
}

fn solid_paint(color: Rgb) -> Paint<'static> {
    let Rgba([r, g, b, a]) = color.to_rgba8();
    Paint {
        shader: Shader::SolidColor(Color::from_rgba8(r, g, b, a)),
        anti_alias: false,
        ..Paint::default()
    }
}

fn to_rgba8(pixel: PremultipliedColorU8) -> Rgba<u8> {
    let pixel = pixel.demultiply();
    Rgba([pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()])
}
