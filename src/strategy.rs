//! Cropping strategies and the contract they share.
//!
//! A strategy turns `(desired, original, focal point, seed)` into a
//! [`CropBox`] that lies inside the original image. Both strategies take the
//! optional seed by value and return the computed box, so the output of one
//! can be handed to the next:
//!
//! ```
//! use zenfocus::{chain, Dimensions, Point, Strategy};
//!
//! let b = chain(
//!     &[Strategy::CenterOnFocalPoint, Strategy::ZoomOnFocalPoint],
//!     Dimensions::new(16, 9),
//!     Dimensions::new(1920, 1080),
//!     Point::new(0, 0),
//!     None,
//! )
//! .unwrap();
//! assert_eq!(b.dimensions, Dimensions::new(1920, 1080));
//! ```

use core::fmt;
use core::str::FromStr;

use crate::center::CenterOnFocalPoint;
use crate::error::CropError;
use crate::geometry::{CropBox, Dimensions, Point};
use crate::zoom::ZoomOnFocalPoint;

/// Computes a crop box for a desired output size around a focal point.
pub trait CroppingStrategy {
    /// Compute the crop box.
    ///
    /// `seed` is consumed and the computed box returned in its place. Without
    /// a seed the computation starts from a box of `desired` dimensions at
    /// the origin. Fails if `desired` or `original` has a non-positive extent.
    fn crop_box(
        &self,
        desired: Dimensions,
        original: Dimensions,
        focal_point: Point,
        seed: Option<CropBox>,
    ) -> Result<CropBox, CropError>;
}

/// The available cropping strategies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Shrink to fit, center on the focal point, clamp into the image.
    #[default]
    CenterOnFocalPoint,
    /// Grow toward the image borders keeping the aspect ratio, then re-center.
    ZoomOnFocalPoint,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 2] = [Self::CenterOnFocalPoint, Self::ZoomOnFocalPoint];

    /// Short name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::CenterOnFocalPoint => "center",
            Self::ZoomOnFocalPoint => "zoom",
        }
    }
}

impl CroppingStrategy for Strategy {
    fn crop_box(
        &self,
        desired: Dimensions,
        original: Dimensions,
        focal_point: Point,
        seed: Option<CropBox>,
    ) -> Result<CropBox, CropError> {
        match self {
            Self::CenterOnFocalPoint => {
                CenterOnFocalPoint.crop_box(desired, original, focal_point, seed)
            }
            Self::ZoomOnFocalPoint => ZoomOnFocalPoint.crop_box(desired, original, focal_point, seed),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized strategy name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownStrategy;

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected center|align|zoom")
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("center") || s.eq_ignore_ascii_case("align") {
            Ok(Self::CenterOnFocalPoint)
        } else if s.eq_ignore_ascii_case("zoom") {
            Ok(Self::ZoomOnFocalPoint)
        } else {
            Err(UnknownStrategy)
        }
    }
}

/// Apply `strategies` in order, feeding each result into the next as its seed.
///
/// An empty slice validates the inputs and returns the starting box.
pub fn chain(
    strategies: &[Strategy],
    desired: Dimensions,
    original: Dimensions,
    focal_point: Point,
    seed: Option<CropBox>,
) -> Result<CropBox, CropError> {
    validate(desired, original)?;
    let mut current = setup_box(desired, seed);
    for strategy in strategies {
        current = strategy.crop_box(desired, original, focal_point, Some(current))?;
    }
    Ok(current)
}

/// Reject dimensions whose ratio would not be finite.
pub(crate) fn validate(desired: Dimensions, original: Dimensions) -> Result<(), CropError> {
    if !desired.is_valid() {
        return Err(CropError::InvalidDesiredDimensions {
            width: desired.width,
            height: desired.height,
        });
    }
    if !original.is_valid() {
        return Err(CropError::InvalidOriginalDimensions {
            width: original.width,
            height: original.height,
        });
    }
    Ok(())
}

/// The seed if there is one, otherwise a `desired`-sized box at the origin.
///
/// Seed extents below one pixel are raised to one.
pub(crate) fn setup_box(desired: Dimensions, seed: Option<CropBox>) -> CropBox {
    match seed {
        Some(mut b) => {
            b.dimensions.width = b.dimensions.width.max(1);
            b.dimensions.height = b.dimensions.height.max(1);
            b
        }
        None => CropBox::from_dimensions(desired),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_desired_width_is_rejected() {
        for s in Strategy::ALL {
            let err = s
                .crop_box(
                    Dimensions::new(0, 100),
                    Dimensions::new(200, 100),
                    Point::new(10, 10),
                    None,
                )
                .unwrap_err();
            assert_eq!(
                err,
                CropError::InvalidDesiredDimensions {
                    width: 0,
                    height: 100
                }
            );
        }
    }

    #[test]
    fn zero_original_height_is_rejected() {
        for s in Strategy::ALL {
            let err = s
                .crop_box(
                    Dimensions::new(100, 100),
                    Dimensions::new(200, 0),
                    Point::new(10, 10),
                    None,
                )
                .unwrap_err();
            assert_eq!(
                err,
                CropError::InvalidOriginalDimensions {
                    width: 200,
                    height: 0
                }
            );
        }
    }

    #[test]
    fn desired_checked_before_original() {
        let err = chain(
            &[],
            Dimensions::new(-1, 5),
            Dimensions::new(0, 0),
            Point::ORIGIN,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, CropError::InvalidDesiredDimensions { .. }));
    }

    #[test]
    fn names_round_trip() {
        for s in Strategy::ALL {
            assert_eq!(s.name().parse::<Strategy>(), Ok(s));
        }
        assert_eq!("ALIGN".parse::<Strategy>(), Ok(Strategy::CenterOnFocalPoint));
        assert_eq!("scale".parse::<Strategy>(), Err(UnknownStrategy));
    }

    #[test]
    fn empty_chain_returns_seed() {
        let seed = CropBox::new(Point::new(3, 4), Dimensions::new(10, 10));
        let b = chain(
            &[],
            Dimensions::new(10, 10),
            Dimensions::new(100, 100),
            Point::ORIGIN,
            Some(seed),
        )
        .unwrap();
        assert_eq!(b, seed);
    }

    #[test]
    fn enum_dispatch_matches_unit_strategies() {
        let desired = Dimensions::new(40, 30);
        let original = Dimensions::new(400, 300);
        let focal = Point::new(123, 45);
        assert_eq!(
            Strategy::CenterOnFocalPoint.crop_box(desired, original, focal, None),
            CenterOnFocalPoint.crop_box(desired, original, focal, None)
        );
        assert_eq!(
            Strategy::ZoomOnFocalPoint.crop_box(desired, original, focal, None),
            ZoomOnFocalPoint.crop_box(desired, original, focal, None)
        );
    }
}
