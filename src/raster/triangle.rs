//! Triangle outlines as closed `tiny-skia` paths
//!
//! Triangles are filled without anti-aliasing, so a pixel is painted when its
//! centre lies inside the outline. A centre exactly on a shared edge goes to
//! the triangle lying left of that edge, which means two triangles sharing an
//! edge never both paint, and never both skip, a pixel along it. Splitting an
//! `n` by `n` tile along its top-right to bottom-left diagonal therefore gives
//! the upper-left triangle `n(n+1)/2` pixels and the lower-right `n(n-1)/2`.

use tiny_skia::{Path, PathBuilder};

/// Point in canvas pixel space, y pointing down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

/// Build the closed outline `a -> b -> c -> a`
///
/// Returns `None` for triangles with zero or non-finite area, which cover no
/// pixels. Either winding order is accepted.
pub fn triangle_path(vertices: [Point; 3]) -> Option<Path> {
    let [a, b, c] = vertices;

    let doubled_area = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    if !doubled_area.is_normal() {
        return None;
    }

    let mut builder = PathBuilder::new();
    builder.move_to(a.x as f32, a.y as f32);
    builder.line_to(b.x as f32, b.y as f32);
    builder.line_to(c.x as f32, c.y as f32);
    builder.close();
    builder.finish()
}
