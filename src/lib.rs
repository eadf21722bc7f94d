//! Focal-point aware crop box computation.
//!
//! Given an original image size, a desired output size and a focal point,
//! computes the region of the original to crop so the output keeps the
//! desired aspect ratio with the focal point as close to its center as the
//! image allows.
//!
//! Pure geometry, no pixel operations. `no_std` compatible.
//!
//! # Modules
//!
//! - [`geometry`] — Points, dimensions, crop boxes, pixel rects
//! - [`strategy`] — The [`CroppingStrategy`] contract, strategy selection and chaining
//! - [`center`] — [`CenterOnFocalPoint`]: shrink to fit, center, clamp
//! - [`zoom`] — [`ZoomOnFocalPoint`]: grow toward the image borders, re-center
//! - [`plan`] — Builder pipeline and crop descriptor (`alloc`)
//! - `query` — Query string instructions (`query` feature)
//! - `svg` — SVG visualization of a crop plan (`svg` feature)
//!
//! # Example
//!
//! ```
//! use zenfocus::{CenterOnFocalPoint, CroppingStrategy, Dimensions, Point};
//!
//! let b = CenterOnFocalPoint
//!     .crop_box(
//!         Dimensions::new(100, 50),
//!         Dimensions::new(50, 50),
//!         Point::new(25, 25),
//!         None,
//!     )
//!     .unwrap();
//!
//! // Shrunk to fit the 50×50 original, then centered on (25, 25).
//! assert_eq!(b.dimensions, Dimensions::new(50, 25));
//! assert_eq!(b.top_left_corner, Point::new(0, 13));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod macros;

pub mod center;
mod error;
pub mod geometry;
#[cfg(feature = "alloc")]
pub mod plan;
#[cfg(feature = "query")]
pub mod query;
pub mod strategy;
#[cfg(feature = "svg")]
pub mod svg;
pub mod zoom;

pub use center::CenterOnFocalPoint;
pub use error::CropError;
pub use geometry::{CropBox, Dimensions, Point, Rect};
#[cfg(feature = "alloc")]
pub use plan::{CropPlan, FocalPoint, Pipeline};
pub use strategy::{CroppingStrategy, Strategy, UnknownStrategy, chain};
pub use zoom::{Border, BorderDistances, ZoomOnFocalPoint};
