//! SVG visualization of a crop plan.
//!
//! Renders two annotated panels: the original image with the crop box and
//! focal point overlaid, then the output the crop is scaled to.
//!
//! # Example
//!
//! ```
//! use zenfocus::{Pipeline, svg::render_crop_svg};
//!
//! let plan = Pipeline::new(4000, 3000)
//!     .focal_percent(0.25, 0.5)
//!     .zoom_on_focal_point()
//!     .plan(800, 800)
//!     .unwrap();
//!
//! let svg = render_crop_svg(&plan);
//! assert!(svg.starts_with("<svg"));
//! ```

use core::fmt::Write as _;

use crate::geometry::{CropBox, Dimensions, Point};
use crate::plan::CropPlan;

/// Maximum pixel width for any panel in the SVG output.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height for any panel in the SVG output.
const MAX_PANEL_H: f64 = 200.0;
/// Vertical gap between panels.
const PANEL_GAP: f64 = 50.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top margin for first panel.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above each panel.
const LABEL_H: f64 = 22.0;
/// Half-length of the focal point crosshair arms, in SVG pixels.
const CROSSHAIR: f64 = 6.0;

/// One panel of the visualization.
struct Panel {
    label: String,
    /// The overall bounding box.
    outer: Dimensions,
    /// Highlighted region inside `outer`. None fills the whole panel.
    inner: Option<CropBox>,
    /// Marker position inside `outer`.
    focal_point: Option<Point>,
    annotation: String,
}

/// Render a complete SVG document for `plan`.
pub fn render_crop_svg(plan: &CropPlan) -> String {
    let crop = plan.crop;
    let tl = crop.top_left_corner;
    let d = crop.dimensions;
    let panels = [
        Panel {
            label: format!("Source  {}×{}", plan.original.width, plan.original.height),
            outer: plan.original,
            inner: Some(crop),
            focal_point: Some(plan.focal_point),
            annotation: format!(
                "crop {}×{} at ({}, {}), focus ({}, {})",
                d.width, d.height, tl.x, tl.y, plan.focal_point.x, plan.focal_point.y
            ),
        },
        Panel {
            label: format!("Output  {}×{}", plan.desired.width, plan.desired.height),
            outer: plan.desired,
            inner: None,
            focal_point: None,
            annotation: if plan.needs_resize() {
                format!("scale {:.3}", plan.scale())
            } else {
                String::new()
            },
        },
    ];
    render_panels(&panels)
}

/// Scale dimensions to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(size: Dimensions) -> (f64, f64, f64) {
    let w = size.width as f64;
    let h = size.height as f64;
    if w <= 0.0 || h <= 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

fn render_panels(panels: &[Panel]) -> String {
    let total_h = 2.0 * MARGIN_TOP
        + panels.len() as f64 * (LABEL_H + MAX_PANEL_H)
        + panels.len().saturating_sub(1) as f64 * PANEL_GAP;
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;

    let mut svg = String::with_capacity(4096);

    // Writing into a String cannot fail.
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    );
    svg.push('\n');

    // Style — light/dark mode via prefers-color-scheme
    svg.push_str(r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .outer { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .inner { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; fill-opacity: 0.8; }
  .focus { stroke: #d64545; stroke-width: 1.5; }
  .arrow { stroke: #666; stroke-width: 1.5; fill: none; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .outer { fill: #2d2d2d; stroke: #555; }
    .inner { fill: #3a72a4; stroke: #5a9fd4; }
    .focus { stroke: #ff7070; }
    .arrow { stroke: #888; }
  }
</style>
"##);

    let mut y = MARGIN_TOP;
    let center_x = total_w / 2.0;

    for (i, panel) in panels.iter().enumerate() {
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&panel.label)
        );
        y += LABEL_H;

        let (sw, sh, scale) = scale_to_fit(panel.outer);
        let panel_x = center_x - sw / 2.0;
        let panel_y = y;

        let _ = writeln!(
            svg,
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="outer" rx="2"/>"#,
            panel_x, panel_y, sw, sh
        );

        let (ix, iy, iw, ih) = match &panel.inner {
            Some(b) => (
                panel_x + b.top_left_corner.x as f64 * scale,
                panel_y + b.top_left_corner.y as f64 * scale,
                b.dimensions.width as f64 * scale,
                b.dimensions.height as f64 * scale,
            ),
            None => (panel_x, panel_y, sw, sh),
        };
        let _ = writeln!(
            svg,
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="inner" rx="1"/>"#,
            ix, iy, iw, ih
        );

        if let Some(p) = panel.focal_point {
            let fx = panel_x + p.x as f64 * scale;
            let fy = panel_y + p.y as f64 * scale;
            let _ = writeln!(
                svg,
                r#"<path d="M{:.1} {:.1}H{:.1}M{:.1} {:.1}V{:.1}" class="focus"/>"#,
                fx - CROSSHAIR,
                fy,
                fx + CROSSHAIR,
                fx,
                fy - CROSSHAIR,
                fy + CROSSHAIR
            );
        }

        if !panel.annotation.is_empty() {
            let _ = writeln!(
                svg,
                r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
                center_x,
                panel_y + sh + 14.0,
                escape_xml(&panel.annotation)
            );
        }

        y += MAX_PANEL_H;

        if i < panels.len() - 1 {
            let _ = writeln!(
                svg,
                r#"<line x1="{}" y1="{:.1}" x2="{}" y2="{:.1}" class="arrow"/>"#,
                center_x,
                y + 8.0,
                center_x,
                y + PANEL_GAP - 8.0
            );
            y += PANEL_GAP;
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
