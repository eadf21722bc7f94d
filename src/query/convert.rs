//! Convert parsed [`Instructions`] into a [`Pipeline`] or a finished plan.

use crate::error::CropError;
use crate::geometry::Point;
use crate::plan::{CropPlan, FocalPoint, Pipeline};

use super::instructions::Instructions;

impl Instructions {
    /// Focal point described by these instructions.
    ///
    /// Pixel `focus` wins over `focus_percent`; with neither, the image center.
    pub fn focal_point(&self) -> FocalPoint {
        if let Some([x, y]) = self.focus {
            FocalPoint::Pixels(Point::truncating(x, y))
        } else if let Some([x, y]) = self.focus_percent {
            FocalPoint::Percent((x / 100.0) as f32, (y / 100.0) as f32)
        } else {
            FocalPoint::Center
        }
    }

    /// Build a [`Pipeline`] for an original image of `original_w × original_h`.
    pub fn to_pipeline(&self, original_w: u32, original_h: u32) -> Pipeline {
        let mut pipeline = Pipeline::new(original_w, original_h).focus(self.focal_point());
        if let Some(strategies) = &self.strategies {
            for &s in strategies {
                pipeline = pipeline.then(s);
            }
        }
        pipeline
    }

    /// Plan the crop directly.
    ///
    /// Fails with [`CropError::MissingDesiredDimensions`] unless both `w` and
    /// `h` were given.
    pub fn plan(&self, original_w: u32, original_h: u32) -> Result<CropPlan, CropError> {
        let (Some(w), Some(h)) = (self.w, self.h) else {
            return Err(CropError::MissingDesiredDimensions);
        };
        self.to_pipeline(original_w, original_h)
            .plan(w as u32, h as u32)
    }
}

#[cfg(test)]
mod tests {
    use crate::Rect;
    use crate::plan::FocalPoint;
    use crate::query::parse;
    use crate::strategy::Strategy;

    #[test]
    fn focus_pixels_beat_percent() {
        let inst = parse("focus=10,20&focus.percent=50,50").instructions;
        assert_eq!(
            inst.focal_point(),
            FocalPoint::Pixels(crate::Point::new(10, 20))
        );
    }

    #[test]
    fn no_focus_is_center() {
        let inst = parse("w=10&h=10").instructions;
        assert_eq!(inst.focal_point(), FocalPoint::Center);
    }

    #[test]
    fn pipeline_keeps_strategy_order() {
        let p = parse("strategy=zoom,center").instructions.to_pipeline(100, 100);
        assert_eq!(
            p.strategies(),
            &[Strategy::ZoomOnFocalPoint, Strategy::CenterOnFocalPoint]
        );
    }

    #[test]
    fn plan_requires_both_dimensions() {
        let inst = parse("w=100").instructions;
        assert_eq!(
            inst.plan(200, 100),
            Err(crate::CropError::MissingDesiredDimensions)
        );
    }

    #[test]
    fn plan_zoom_from_query() {
        let plan = parse("w=30&h=30&focus=300,150&strategy=zoom")
            .instructions
            .plan(400, 300)
            .unwrap();
        assert_eq!(plan.rect(), Rect::new(100, 0, 300, 300));
    }
}
