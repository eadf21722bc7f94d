//! Geometric value types: points, dimensions, crop boxes and pixel rects.
//!
//! All values are small `Copy` integers. Writes coming from fractional
//! arithmetic go through the `truncating` constructors, which drop the
//! fractional part toward zero.
//!
//! # Example
//!
//! ```
//! use zenfocus::{CropBox, Dimensions, Point};
//!
//! let b = CropBox::new(Point::new(10, 20), Dimensions::new(300, 150));
//! assert_eq!(b.top_right_corner(), Point::new(310, 20));
//! assert_eq!(b.bottom_left_corner(), Point::new(10, 170));
//! assert!(b.dimensions.is_landscape());
//! assert_eq!(b.dimensions.width_height_ratio(), 2.0);
//! ```

use num_traits::Float;

/// Drop the fractional part of a computed coordinate or extent.
///
/// Saturates at the `i64` bounds; NaN becomes 0.
#[inline]
pub(crate) fn truncate(v: f64) -> i64 {
    v as i64
}

/// Truncate a computed extent, keeping it at least one pixel.
#[inline]
pub(crate) fn extent(v: f64) -> i64 {
    truncate(v).max(1)
}

/// Round half away from zero.
#[inline]
pub(crate) fn round(v: f64) -> i64 {
    Float::round(v) as i64
}

/// Integer 2D coordinate. May be negative while a box is being computed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// `(0, 0)`.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Create a point from fractional coordinates, truncating toward zero.
    pub fn truncating(x: f64, y: f64) -> Self {
        Self {
            x: truncate(x),
            y: truncate(y),
        }
    }

    /// Point at a fractional position of `dimensions`.
    ///
    /// `(0.0, 0.0)` is the top-left corner, `(1.0, 1.0)` the bottom-right.
    /// Fractions are clamped to `0.0..=1.0` and the result is rounded.
    pub fn from_percent(dimensions: Dimensions, px: f32, py: f32) -> Self {
        let fx = px.clamp(0.0, 1.0) as f64;
        let fy = py.clamp(0.0, 1.0) as f64;
        Self {
            x: round(dimensions.width as f64 * fx),
            y: round(dimensions.height as f64 * fy),
        }
    }
}

/// Integer width × height pair.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: i64,
    pub height: i64,
}

impl Dimensions {
    /// Create new dimensions.
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Create dimensions from fractional extents, truncating toward zero.
    pub fn truncating(width: f64, height: f64) -> Self {
        Self {
            width: truncate(width),
            height: truncate(height),
        }
    }

    /// Both extents are strictly positive, so ratio queries are finite.
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub const fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    pub const fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    pub const fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// `width / height`. Non-finite when `height` is zero.
    pub fn width_height_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// `height / width`. Non-finite when `width` is zero.
    pub fn height_width_ratio(&self) -> f64 {
        self.height as f64 / self.width as f64
    }

    /// Width that keeps this aspect ratio at the given height, before truncation.
    ///
    /// Multiplies before dividing so exact ratios (1080 at 16:9) stay exact.
    pub fn width_for_height(&self, height: i64) -> f64 {
        height as f64 * self.width as f64 / self.height as f64
    }

    /// Height that keeps this aspect ratio at the given width, before truncation.
    pub fn height_for_width(&self, width: i64) -> f64 {
        width as f64 * self.height as f64 / self.width as f64
    }

    /// Whether both extents are no larger than `other`'s.
    pub const fn fits_within(&self, other: Dimensions) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

/// Crop region: a top-left corner plus dimensions.
///
/// The other three corners are derived on every call and returned by value,
/// so modifying a returned corner never moves the box. Derived coordinates
/// saturate at the `i64` bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CropBox {
    pub top_left_corner: Point,
    pub dimensions: Dimensions,
}

impl CropBox {
    pub const fn new(top_left_corner: Point, dimensions: Dimensions) -> Self {
        Self {
            top_left_corner,
            dimensions,
        }
    }

    /// Box of the given dimensions anchored at the origin.
    pub const fn from_dimensions(dimensions: Dimensions) -> Self {
        Self {
            top_left_corner: Point::ORIGIN,
            dimensions,
        }
    }

    pub const fn top_left_corner(&self) -> Point {
        self.top_left_corner
    }

    const fn right(&self) -> i64 {
        self.top_left_corner.x.saturating_add(self.dimensions.width)
    }

    const fn bottom(&self) -> i64 {
        self.top_left_corner.y.saturating_add(self.dimensions.height)
    }

    pub const fn top_right_corner(&self) -> Point {
        Point::new(self.right(), self.top_left_corner.y)
    }

    pub const fn bottom_right_corner(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub const fn bottom_left_corner(&self) -> Point {
        Point::new(self.top_left_corner.x, self.bottom())
    }

    /// Center of the box, rounded toward the top-left on odd extents.
    pub const fn center(&self) -> Point {
        Point::new(
            self.top_left_corner.x.saturating_add(self.dimensions.width / 2),
            self.top_left_corner.y.saturating_add(self.dimensions.height / 2),
        )
    }

    /// Whether `point` lies inside the box (right and bottom edges exclusive).
    pub const fn contains_point(&self, point: Point) -> bool {
        let br = self.bottom_right_corner();
        point.x >= self.top_left_corner.x
            && point.y >= self.top_left_corner.y
            && point.x < br.x
            && point.y < br.y
    }

    /// Whether the box lies entirely inside `(0, 0, bounds.width, bounds.height)`.
    pub const fn is_within(&self, bounds: Dimensions) -> bool {
        self.top_left_corner.x >= 0
            && self.top_left_corner.y >= 0
            && self.dimensions.width >= 0
            && self.dimensions.height >= 0
            && self.top_right_corner().x <= bounds.width
            && self.bottom_left_corner().y <= bounds.height
    }

    /// Convert to unsigned pixel coordinates.
    ///
    /// Returns `None` if any component is negative or exceeds `u32`.
    pub fn to_rect(&self) -> Option<Rect> {
        Some(Rect {
            x: u32::try_from(self.top_left_corner.x).ok()?,
            y: u32::try_from(self.top_left_corner.y).ok()?,
            width: u32::try_from(self.dimensions.width).ok()?,
            height: u32::try_from(self.dimensions.height).ok()?,
        })
    }
}

/// Axis-aligned rectangle in unsigned pixel coordinates, ready for a
/// pixel cropper.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether this rect covers the full source (no actual crop).
    pub fn is_full(&self, source_w: u32, source_h: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == source_w && self.height == source_h
    }
}

impl From<Rect> for CropBox {
    fn from(r: Rect) -> Self {
        CropBox::new(
            Point::new(r.x as i64, r.y as i64),
            Dimensions::new(r.width as i64, r.height as i64),
        )
    }
}
