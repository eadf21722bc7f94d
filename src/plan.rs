//! Crop planning: focal point resolution, strategy chaining, crop descriptor.
//!
//! ```
//! use zenfocus::{Pipeline, Rect};
//!
//! let plan = Pipeline::new(400, 300)
//!     .focal_point(300, 150)
//!     .center_on_focal_point()
//!     .zoom_on_focal_point()
//!     .plan(30, 30)
//!     .unwrap();
//!
//! assert_eq!(plan.rect(), Rect::new(100, 0, 300, 300));
//! assert!(plan.needs_crop());
//! assert!(plan.needs_resize());
//! ```

use alloc::vec::Vec;

use crate::error::CropError;
use crate::geometry::{CropBox, Dimensions, Point, Rect};
use crate::strategy::{Strategy, chain};

/// Where the crop should be centered.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum FocalPoint {
    /// Center of the original image.
    #[default]
    Center,
    /// Absolute pixel coordinates in the original image.
    Pixels(Point),
    /// Fraction of the original dimensions. `(0.0, 0.0)` = top-left,
    /// `(1.0, 1.0)` = bottom-right.
    Percent(f32, f32),
}

impl FocalPoint {
    /// Resolve to pixel coordinates for an image of size `original`.
    pub fn resolve(&self, original: Dimensions) -> Point {
        match *self {
            Self::Center => Point::from_percent(original, 0.5, 0.5),
            Self::Pixels(p) => p,
            Self::Percent(x, y) => Point::from_percent(original, x, y),
        }
    }
}

/// Builder for a crop computation over one original image.
///
/// Strategies run in the order they are added, each seeded with the previous
/// result. With no strategy added, [`Strategy::CenterOnFocalPoint`] runs.
#[derive(Clone, Debug, PartialEq)]
pub struct Pipeline {
    original: Dimensions,
    focal_point: FocalPoint,
    seed: Option<CropBox>,
    steps: Vec<Strategy>,
}

impl Pipeline {
    /// Start a pipeline for an original image of `original_w × original_h`.
    pub fn new(original_w: u32, original_h: u32) -> Self {
        Self {
            original: Dimensions::new(original_w as i64, original_h as i64),
            focal_point: FocalPoint::Center,
            seed: None,
            steps: Vec::new(),
        }
    }

    /// Focal point in absolute pixels.
    pub fn focal_point(mut self, x: i64, y: i64) -> Self {
        self.focal_point = FocalPoint::Pixels(Point::new(x, y));
        self
    }

    /// Focal point as a fraction of the original dimensions.
    pub fn focal_percent(mut self, x: f32, y: f32) -> Self {
        self.focal_point = FocalPoint::Percent(x, y);
        self
    }

    /// Set the focal point directly.
    pub fn focus(mut self, focal_point: FocalPoint) -> Self {
        self.focal_point = focal_point;
        self
    }

    /// Start from an existing box instead of a desired-size box at the origin.
    pub fn seed(mut self, seed: CropBox) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Append a strategy.
    pub fn then(mut self, strategy: Strategy) -> Self {
        self.steps.push(strategy);
        self
    }

    /// Append [`Strategy::CenterOnFocalPoint`].
    pub fn center_on_focal_point(self) -> Self {
        self.then(Strategy::CenterOnFocalPoint)
    }

    /// Append [`Strategy::ZoomOnFocalPoint`].
    pub fn zoom_on_focal_point(self) -> Self {
        self.then(Strategy::ZoomOnFocalPoint)
    }

    /// Strategies that [`plan()`](Self::plan) will run, in order.
    pub fn strategies(&self) -> &[Strategy] {
        if self.steps.is_empty() {
            &[Strategy::CenterOnFocalPoint]
        } else {
            &self.steps
        }
    }

    /// Compute the crop for an output of `desired_w × desired_h`.
    pub fn plan(&self, desired_w: u32, desired_h: u32) -> Result<CropPlan, CropError> {
        let desired = Dimensions::new(desired_w as i64, desired_h as i64);
        let focal_point = self.focal_point.resolve(self.original);
        let crop = chain(
            self.strategies(),
            desired,
            self.original,
            focal_point,
            self.seed,
        )?;
        Ok(CropPlan {
            original: self.original,
            desired,
            focal_point,
            crop,
        })
    }
}

/// Result of planning: where to crop, and what the crop will be scaled to.
///
/// Purely descriptive; resampling is up to the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CropPlan {
    /// Original image dimensions.
    pub original: Dimensions,
    /// Requested output dimensions.
    pub desired: Dimensions,
    /// Resolved focal point in original pixel coordinates.
    pub focal_point: Point,
    /// Region of the original to keep.
    pub crop: CropBox,
}

impl CropPlan {
    /// The crop region in unsigned pixel coordinates.
    pub fn rect(&self) -> Rect {
        let tl = self.crop.top_left_corner;
        let d = self.crop.dimensions;
        Rect::new(to_u32(tl.x), to_u32(tl.y), to_u32(d.width), to_u32(d.height))
    }

    /// Whether the crop excludes any part of the original.
    pub fn needs_crop(&self) -> bool {
        !self
            .rect()
            .is_full(to_u32(self.original.width), to_u32(self.original.height))
    }

    /// Whether the cropped region differs in size from the desired output.
    pub fn needs_resize(&self) -> bool {
        self.crop.dimensions != self.desired
    }

    /// Horizontal scale factor from the crop to the desired output.
    /// Above 1.0 means the crop has to be enlarged.
    pub fn scale(&self) -> f64 {
        self.desired.width as f64 / self.crop.dimensions.width as f64
    }
}

/// Crop boxes are contained in a `u32`-sized original, so this only clamps
/// values that cannot occur.
fn to_u32(v: i64) -> u32 {
    u32::try_from(v.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_focal_point_is_center() {
        let plan = Pipeline::new(400, 300).plan(100, 50).unwrap();
        assert_eq!(plan.focal_point, Point::new(200, 150));
        assert_eq!(plan.rect(), Rect::new(150, 125, 100, 50));
        assert!(plan.needs_crop());
        assert!(!plan.needs_resize());
        assert_eq!(plan.scale(), 1.0);
    }

    #[test]
    fn empty_chain_runs_center() {
        let p = Pipeline::new(400, 300);
        assert_eq!(p.strategies(), &[Strategy::CenterOnFocalPoint]);
        let p = p.zoom_on_focal_point();
        assert_eq!(p.strategies(), &[Strategy::ZoomOnFocalPoint]);
    }

    #[test]
    fn focal_percent_resolves() {
        let plan = Pipeline::new(200, 100)
            .focal_percent(0.5, 0.5)
            .plan(100, 100)
            .unwrap();
        assert_eq!(plan.focal_point, Point::new(100, 50));
        assert_eq!(plan.rect(), Rect::new(50, 0, 100, 100));
    }

    #[test]
    fn zoom_to_full_image_needs_no_crop() {
        let plan = Pipeline::new(1920, 1080)
            .focal_point(0, 0)
            .zoom_on_focal_point()
            .plan(16, 9)
            .unwrap();
        assert_eq!(plan.rect(), Rect::new(0, 0, 1920, 1080));
        assert!(!plan.needs_crop());
        assert!(plan.needs_resize());
        assert_eq!(plan.scale(), 16.0 / 1920.0);
    }

    #[test]
    fn seed_is_used() {
        let seed = CropBox::new(Point::new(10, 10), Dimensions::new(50, 50));
        let plan = Pipeline::new(400, 300)
            .seed(seed)
            .focal_point(35, 35)
            .plan(100, 100)
            .unwrap();
        assert_eq!(plan.crop, CropBox::new(Point::new(10, 10), Dimensions::new(50, 50)));
    }

    #[test]
    fn extreme_ratio_plans_a_visible_crop() {
        for strategy in Strategy::ALL {
            let plan = Pipeline::new(100, 100).then(strategy).plan(1000, 1).unwrap();
            assert_eq!(plan.crop.dimensions, Dimensions::new(100, 1));
            assert_eq!(plan.scale(), 10.0);
        }
    }

    #[test]
    fn zero_sizes_fail() {
        assert_eq!(
            Pipeline::new(0, 300).plan(10, 10),
            Err(CropError::InvalidOriginalDimensions {
                width: 0,
                height: 300
            })
        );
        assert_eq!(
            Pipeline::new(400, 300).plan(10, 0),
            Err(CropError::InvalidDesiredDimensions {
                width: 10,
                height: 0
            })
        );
    }
}
