//! Query string crop instructions.
//!
//! Parses URL query strings like `?w=300&h=200&focus=40,60&strategy=zoom`
//! and produces [`Pipeline`](crate::Pipeline) objects for crop planning.
//!
//! # Example
//!
//! ```
//! use zenfocus::{query, Rect};
//!
//! let result = query::parse("w=100&h=100&focus.percent=50,50&strategy=center");
//! assert!(result.warnings.is_empty());
//!
//! let plan = result.instructions.plan(200, 100).expect("valid plan");
//! assert_eq!(plan.rect(), Rect::new(50, 0, 100, 100));
//! ```
//!
//! # Recognized keys
//!
//! | key | value |
//! |-----|-------|
//! | `w`, `width` | desired width, positive integer |
//! | `h`, `height` | desired height, positive integer |
//! | `focus` | focal point `x,y` in original pixels |
//! | `focus.percent`, `c.focus` | focal point `x,y` in percent (0–100) |
//! | `strategy` | comma list of `center` / `align` / `zoom` |
//!
//! Output parameters (format, quality) are preserved in
//! [`Instructions::extras()`] without generating warnings. Only truly
//! unrecognized keys produce [`ParseWarning::KeyNotRecognized`].

mod convert;
pub mod instructions;
mod parse;

pub use instructions::Instructions;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of parsing a query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed crop instructions.
    pub instructions: Instructions,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized as either a crop or known output parameter.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (instructions, warnings) = parse::parse_query(query);
    ParseResult {
        instructions,
        warnings,
    }
}
