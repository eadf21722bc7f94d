//! Single-pass strategy: shrink to fit, center on the focal point, clamp.
//!
//! The box is never enlarged. If the focal point is too close to an image
//! edge for the box to be centered on it, staying inside the image wins over
//! centering.
//!
//! # Example
//!
//! ```
//! use zenfocus::{CenterOnFocalPoint, CroppingStrategy, Dimensions, Point};
//!
//! let b = CenterOnFocalPoint
//!     .crop_box(
//!         Dimensions::new(100, 100),
//!         Dimensions::new(200, 100),
//!         Point::new(100, 50),
//!         None,
//!     )
//!     .unwrap();
//! assert_eq!(b.top_left_corner, Point::new(50, 0));
//! assert_eq!(b.dimensions, Dimensions::new(100, 100));
//! ```

use crate::error::CropError;
use crate::geometry::{CropBox, Dimensions, Point, extent, round};
use crate::strategy::{CroppingStrategy, setup_box, validate};

/// Centers the box on the focal point without zooming.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CenterOnFocalPoint;

impl CroppingStrategy for CenterOnFocalPoint {
    fn crop_box(
        &self,
        desired: Dimensions,
        original: Dimensions,
        focal_point: Point,
        seed: Option<CropBox>,
    ) -> Result<CropBox, CropError> {
        validate(desired, original)?;
        let mut b = setup_box(desired, seed);

        constrain_to_fit(&mut b, original);
        center_on(&mut b, focal_point);
        move_into_bounds(&mut b, original);

        debug!(
            x = b.top_left_corner.x,
            y = b.top_left_corner.y,
            width = b.dimensions.width,
            height = b.dimensions.height,
            "centered crop box"
        );
        Ok(b)
    }
}

/// Shrink the box so neither extent exceeds `original`, keeping the box's
/// own aspect ratio.
///
/// Width is fixed first, then height. Shrinking the height can only reduce
/// the width again, so both fit afterwards. A re-derived extent never drops
/// below one pixel.
pub(crate) fn constrain_to_fit(b: &mut CropBox, original: Dimensions) {
    let ratio = b.dimensions;
    let d = &mut b.dimensions;
    if d.width > original.width {
        d.width = original.width;
        d.height = extent(ratio.height_for_width(d.width));
    }
    if d.height > original.height {
        d.height = original.height;
        d.width = extent(ratio.width_for_height(d.height));
    }
}

/// Move the top-left corner so the box is centered on `focal_point`,
/// stopping at 0. The far edges are left to [`move_into_bounds`].
fn center_on(b: &mut CropBox, focal_point: Point) {
    let half_w = b.dimensions.width as f64 / 2.0;
    let half_h = b.dimensions.height as f64 / 2.0;
    b.top_left_corner.x = round(focal_point.x as f64 - half_w).max(0);
    b.top_left_corner.y = round(focal_point.y as f64 - half_h).max(0);
}

/// Pull the box back left/up if its far edges stick out of `original`,
/// stopping at 0.
pub(crate) fn move_into_bounds(b: &mut CropBox, original: Dimensions) {
    if b.top_right_corner().x > original.width {
        b.top_left_corner.x = (original.width - b.dimensions.width).max(0);
    }
    if b.bottom_left_corner().y > original.height {
        b.top_left_corner.y = (original.height - b.dimensions.height).max(0);
    }
}
