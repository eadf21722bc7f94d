//! Maximal-retention strategy: grow the box toward the image borders.
//!
//! Starting from a box centered on the focal point, the box edge closest to
//! an image edge is aligned with it, growing the box while keeping the
//! desired aspect ratio. This repeats until at most one box edge is still
//! away from its image edge, or a pass no longer grows the box. A box that
//! still spans neither axis of the image then takes the largest size of the
//! desired ratio that fits. Finally the (now fixed-size) box is nudged back
//! toward the focal point as far as the remaining slack allows.
//!
//! Feeding the result back in as a seed returns it unchanged.
//!
//! ```text
//!     ┌──────────────────────┐        ┌──────────────────────┐
//!     │                      │        │┌──────────────┐      │
//!     │        ┌──┐          │   →    ││      ·       │      │
//!     │        │· │          │        ││              │      │
//!     │        └──┘          │        │└──────────────┘      │
//!     └──────────────────────┘        └──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use zenfocus::{CroppingStrategy, Dimensions, Point, ZoomOnFocalPoint};
//!
//! let b = ZoomOnFocalPoint
//!     .crop_box(
//!         Dimensions::new(16, 9),
//!         Dimensions::new(1920, 1080),
//!         Point::new(0, 0),
//!         None,
//!     )
//!     .unwrap();
//! assert_eq!(b.top_left_corner, Point::new(0, 0));
//! assert_eq!(b.dimensions, Dimensions::new(1920, 1080));
//! ```

use crate::center::{CenterOnFocalPoint, constrain_to_fit, move_into_bounds};
use crate::error::CropError;
use crate::geometry::{CropBox, Dimensions, Point, extent, truncate};
use crate::strategy::{CroppingStrategy, validate};

/// Zooms the box out as far as the image allows around the focal point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ZoomOnFocalPoint;

/// One edge of a box.
///
/// Declaration order is the tie-break order when two borders are equally
/// close to the image edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Border {
    Top,
    Right,
    Bottom,
    Left,
}

impl Border {
    /// All borders in tie-break order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    const fn index(self) -> usize {
        self as usize
    }
}

/// Distance from each box edge to the matching image edge.
///
/// Distances are unsigned: a box that overflows an edge by `n` pixels
/// reports `n`, not `-n`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BorderDistances {
    distances: [i64; 4],
}

impl BorderDistances {
    /// Measure `b` against an image of size `original`.
    pub fn measure(b: &CropBox, original: Dimensions) -> Self {
        let mut distances = [0; 4];
        distances[Border::Top.index()] = b.top_left_corner.y;
        distances[Border::Right.index()] = original.width.saturating_sub(b.top_right_corner().x);
        distances[Border::Bottom.index()] =
            original.height.saturating_sub(b.bottom_left_corner().y);
        distances[Border::Left.index()] = b.top_left_corner.x;
        for d in &mut distances {
            *d = d.saturating_abs();
        }
        Self { distances }
    }

    /// Distance for one border.
    pub const fn get(&self, border: Border) -> i64 {
        self.distances[border.index()]
    }

    /// Whether the box edge coincides with the image edge.
    pub const fn is_aligned(&self, border: Border) -> bool {
        self.get(border) == 0
    }

    /// The borders that are not yet aligned, with their distances.
    pub fn unaligned(&self) -> Unaligned {
        let mut slots = [None; 4];
        for border in Border::ALL {
            if !self.is_aligned(border) {
                slots[border.index()] = Some(self.get(border));
            }
        }
        Unaligned { slots }
    }
}

/// The candidate set of an alignment pass: unaligned borders only.
///
/// Two sets compare equal when the same borders are unaligned at the same
/// distances, which is how a pass that changed nothing is detected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unaligned {
    slots: [Option<i64>; 4],
}

impl Unaligned {
    /// Number of unaligned borders.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distance for `border`, or `None` if it is aligned.
    pub const fn get(&self, border: Border) -> Option<i64> {
        self.slots[border.index()]
    }

    /// The unaligned border closest to its image edge.
    ///
    /// On a tie the first border in [`Border::ALL`] order wins.
    pub fn closest(&self) -> Option<(Border, i64)> {
        let mut best: Option<(Border, i64)> = None;
        for border in Border::ALL {
            if let Some(d) = self.get(border)
                && best.is_none_or(|(_, best_d)| d < best_d)
            {
                best = Some((border, d));
            }
        }
        best
    }
}

impl CroppingStrategy for ZoomOnFocalPoint {
    fn crop_box(
        &self,
        desired: Dimensions,
        original: Dimensions,
        focal_point: Point,
        seed: Option<CropBox>,
    ) -> Result<CropBox, CropError> {
        validate(desired, original)?;
        let mut b = match seed {
            Some(seed) => pull_inside(seed, original),
            None => CenterOnFocalPoint.crop_box(desired, original, focal_point, None)?,
        };

        // A box spanning the image on one axis is already zoomed out as far
        // as it goes; only its position along the other axis may change.
        let passes = if spans_an_axis(&b, original) {
            0
        } else {
            let passes = align_borders(&mut b, original, desired);
            if !spans_an_axis(&b, original) {
                fit_largest(&mut b, original, desired);
            }
            passes
        };

        let slack = BorderDistances::measure(&b, original);
        recenter_on(&mut b, focal_point, slack);

        debug!(
            passes,
            x = b.top_left_corner.x,
            y = b.top_left_corner.y,
            width = b.dimensions.width,
            height = b.dimensions.height,
            "zoomed crop box"
        );
        Ok(b)
    }
}

/// Repeatedly align the closest unaligned border while more than one is left.
///
/// A pass is kept only if it grows the box on at least one axis without
/// shrinking the other, so `width + height` rises every pass and the loop
/// ends. Returns the number of passes kept.
fn align_borders(b: &mut CropBox, original: Dimensions, ratio: Dimensions) -> usize {
    let mut candidates = BorderDistances::measure(b, original).unaligned();
    let mut previous: Option<Unaligned> = None;
    let mut passes = 0;
    while candidates.len() > 1 && previous != Some(candidates) {
        let Some((border, distance)) = candidates.closest() else {
            break;
        };
        let before = *b;
        align_border(b, border, distance, original, ratio);
        if !grew(before.dimensions, b.dimensions) {
            *b = before;
            break;
        }
        trace!(
            pass = passes,
            border = ?border,
            distance,
            width = b.dimensions.width,
            height = b.dimensions.height,
            "aligned border"
        );
        previous = Some(candidates);
        candidates = BorderDistances::measure(b, original).unaligned();
        passes += 1;
    }
    passes
}

fn grew(before: Dimensions, after: Dimensions) -> bool {
    after.width >= before.width && after.height >= before.height && after != before
}

fn spans_an_axis(b: &CropBox, original: Dimensions) -> bool {
    b.dimensions.width == original.width || b.dimensions.height == original.height
}

/// Resize to the largest box of `ratio` that fits the image, then pull it
/// back inside.
fn fit_largest(b: &mut CropBox, original: Dimensions, ratio: Dimensions) {
    let d = &mut b.dimensions;
    if ratio.height_for_width(original.width) <= original.height as f64 {
        d.width = original.width;
        d.height = extent(ratio.height_for_width(original.width));
    } else {
        d.height = original.height;
        d.width = extent(ratio.width_for_height(original.height));
    }
    move_into_bounds(b, original);
}

/// Make a caller-supplied seed fit inside the image without re-centering it.
fn pull_inside(mut b: CropBox, original: Dimensions) -> CropBox {
    b.dimensions.width = b.dimensions.width.max(1);
    b.dimensions.height = b.dimensions.height.max(1);
    constrain_to_fit(&mut b, original);
    b.top_left_corner.x = b.top_left_corner.x.max(0);
    b.top_left_corner.y = b.top_left_corner.y.max(0);
    move_into_bounds(&mut b, original);
    b
}

/// Grow the box by `distance` toward `border`, aligning that edge with the
/// image edge and keeping the aspect ratio of `ratio`.
///
/// The perpendicular corner coordinate moves back by the same distance
/// (stopping at 0). If the growth pushed the opposite axis out of the image,
/// the box shrinks to the space left on that axis.
fn align_border(
    b: &mut CropBox,
    border: Border,
    distance: i64,
    original: Dimensions,
    ratio: Dimensions,
) {
    match border {
        Border::Top | Border::Bottom => {
            b.dimensions.height = (b.dimensions.height + distance).min(original.height);
            b.dimensions.width = extent(ratio.width_for_height(b.dimensions.height));

            b.top_left_corner.y = match border {
                Border::Top => 0,
                _ => (original.height - b.dimensions.height).max(0),
            };
            b.top_left_corner.x = (b.top_left_corner.x - distance).max(0);

            if b.top_right_corner().x > original.width {
                b.dimensions.width = original.width - b.top_left_corner.x;
                b.dimensions.height = extent(ratio.height_for_width(b.dimensions.width));
            }
        }
        Border::Right | Border::Left => {
            b.dimensions.width = (b.dimensions.width + distance).min(original.width);
            b.dimensions.height = extent(ratio.height_for_width(b.dimensions.width));

            b.top_left_corner.x = match border {
                Border::Left => 0,
                _ => (original.width - b.dimensions.width).max(0),
            };
            b.top_left_corner.y = (b.top_left_corner.y - distance).max(0);

            if b.bottom_left_corner().y > original.height {
                b.dimensions.height = original.height - b.top_left_corner.y;
                b.dimensions.width = extent(ratio.width_for_height(b.dimensions.height));
            }
        }
    }
}

/// Move the box toward the position that centers it on `focal_point`, but
/// no further than `slack` allows in the direction of travel.
fn recenter_on(b: &mut CropBox, focal_point: Point, slack: BorderDistances) {
    let ideal_x = focal_point.x as f64 - b.dimensions.width as f64 / 2.0;
    let ideal_y = focal_point.y as f64 - b.dimensions.height as f64 / 2.0;

    let x = b.top_left_corner.x as f64;
    let y = b.top_left_corner.y as f64;
    let offset_x = ideal_x - x;
    let offset_y = ideal_y - y;

    if offset_x > 0.0 {
        b.top_left_corner.x = truncate(x + offset_x.min(slack.get(Border::Right) as f64));
    } else if offset_x < 0.0 {
        b.top_left_corner.x = truncate(x - (-offset_x).min(slack.get(Border::Left) as f64));
    }

    if offset_y > 0.0 {
        b.top_left_corner.y = truncate(y + offset_y.min(slack.get(Border::Bottom) as f64));
    } else if offset_y < 0.0 {
        b.top_left_corner.y = truncate(y - (-offset_y).min(slack.get(Border::Top) as f64));
    }
}
