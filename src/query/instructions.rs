//! Parsed representation of a crop query string.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::strategy::Strategy;

/// Parsed crop instructions.
///
/// Produced by [`crate::query::parse()`], consumed by
/// [`to_pipeline()`](Self::to_pipeline) and [`plan()`](Self::plan).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Instructions {
    /// Desired width (`w`, `width`).
    pub w: Option<i32>,
    /// Desired height (`h`, `height`).
    pub h: Option<i32>,
    /// Focal point in original pixels (`focus`). Takes precedence over
    /// `focus_percent`.
    pub focus: Option<[f64; 2]>,
    /// Focal point as `[x%, y%]`, 0–100 (`focus.percent`, `c.focus`).
    pub focus_percent: Option<[f64; 2]>,
    /// Strategy chain (`strategy`).
    pub strategies: Option<Vec<Strategy>>,
    /// Non-crop parameters preserved for downstream consumers.
    pub extras: BTreeMap<String, String>,
}

impl Default for Instructions {
    fn default() -> Self {
        Self::new()
    }
}

impl Instructions {
    /// Create empty instructions.
    pub fn new() -> Self {
        Self {
            w: None,
            h: None,
            focus: None,
            focus_percent: None,
            strategies: None,
            extras: BTreeMap::new(),
        }
    }

    /// Access non-crop parameters preserved during parsing.
    pub fn extras(&self) -> &BTreeMap<String, String> {
        &self.extras
    }
}
