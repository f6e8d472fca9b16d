//! Clip rectangles

use serde::{Deserialize, Serialize};

use crate::render::SourceRect;

/// Axis-aligned clip rectangle in surface pixels
///
/// Edges are half-open: a pixel at `x` is visible when `left <= x < right`.
/// Construction swaps reversed edges, so `left <= right` and `top <= bottom`
/// always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ClipEdges")]
pub struct ClipRegion {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

/// Unnormalized edges as they appear in config files
#[derive(Deserialize)]
struct ClipEdges {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl From<ClipEdges> for ClipRegion {
    fn from(edges: ClipEdges) -> Self {
        Self::new(edges.left, edges.top, edges.right, edges.bottom)
    }
}

impl ClipRegion {
    /// Create a clip rectangle, swapping reversed edges
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        let (left, right) = if left > right { (right, left) } else { (left, right) };
        let (top, bottom) = if top > bottom { (bottom, top) } else { (top, bottom) };
        Self { left, top, right, bottom }
    }

    /// Like [`ClipRegion::new`], but all-zero edges mean "no clip"
    pub const fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Option<Self> {
        if left == 0 && top == 0 && right == 0 && bottom == 0 {
            None
        } else {
            Some(Self::new(left, top, right, bottom))
        }
    }

    /// Left edge
    pub const fn left(&self) -> i32 {
        self.left
    }

    /// Top edge
    pub const fn top(&self) -> i32 {
        self.top
    }

    /// Right edge (exclusive)
    pub const fn right(&self) -> i32 {
        self.right
    }

    /// Bottom edge (exclusive)
    pub const fn bottom(&self) -> i32 {
        self.bottom
    }

    /// Horizontal extent
    pub const fn width(&self) -> u32 {
        self.right.abs_diff(self.left)
    }

    /// Vertical extent
    pub const fn height(&self) -> u32 {
        self.bottom.abs_diff(self.top)
    }

    /// Whether nothing can be drawn inside
    pub const fn is_empty(&self) -> bool {
        self.left == self.right || self.top == self.bottom
    }

    /// Whether the pixel at `(x, y)` is visible
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Crop a blit of `src` placed at `(x, y)`
    ///
    /// Returns the shifted destination and the shrunken source, or `None`
    /// when nothing of it remains visible.
    pub fn crop(&self, x: i32, y: i32, src: SourceRect) -> Option<(i32, i32, SourceRect)> {
        let (left, top) = (i64::from(self.left), i64::from(self.top));
        let (right, bottom) = (i64::from(self.right), i64::from(self.bottom));

        let (mut x, mut y) = (i64::from(x), i64::from(y));
        let (mut src_x, mut src_y) = (i64::from(src.x), i64::from(src.y));
        let (mut width, mut height) = (i64::from(src.width), i64::from(src.height));

        if x < left {
            src_x += left - x;
            width -= left - x;
            x = left;
        }
        if y < top {
            src_y += top - y;
            height -= top - y;
            y = top;
        }
        if x + width > right {
            width = right - x;
        }
        if y + height > bottom {
            height = bottom - y;
        }

        if width <= 0 || height <= 0 {
            return None;
        }

        let cropped = SourceRect {
            x: u32::try_from(src_x).ok()?,
            y: u32::try_from(src_y).ok()?,
            width: u32::try_from(width).ok()?,
            height: u32::try_from(height).ok()?,
        };
        Some((i32::try_from(x).ok()?, i32::try_from(y).ok()?, cropped))
    }
}
