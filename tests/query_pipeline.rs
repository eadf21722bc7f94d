//! Query strings end to end: parse, plan, inspect the crop.

#![cfg(feature = "query")]

use zenfocus::query::{self, ParseWarning};
use zenfocus::{CropError, Point, Rect};

#[test]
fn center_crop_from_query() {
    let result = query::parse("?w=100&h=100");
    assert!(result.warnings.is_empty());
    let plan = result.instructions.plan(200, 100).unwrap();
    assert_eq!(plan.rect(), Rect::new(50, 0, 100, 100));
}

#[test]
fn percent_focus_resolves_against_original() {
    let plan = query::parse("width=100&height=100&c.focus=25,50")
        .instructions
        .plan(400, 100)
        .unwrap();
    assert_eq!(plan.focal_point, Point::new(100, 50));
    assert_eq!(plan.rect(), Rect::new(50, 0, 100, 100));
}

#[test]
fn zoom_strategy_grows_to_full_image() {
    let plan = query::parse("w=16&h=9&focus=0,0&strategy=zoom")
        .instructions
        .plan(1920, 1080)
        .unwrap();
    assert_eq!(plan.rect(), Rect::new(0, 0, 1920, 1080));
    assert!(!plan.needs_crop());
    assert!(plan.needs_resize());
}

#[test]
fn keys_are_case_insensitive_and_decoded() {
    let result = query::parse("W=100&H=50&Strategy=Center%2Czoom");
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    assert_eq!(result.instructions.w, Some(100));
    assert_eq!(result.instructions.h, Some(50));
    assert_eq!(
        result.instructions.strategies.as_deref(),
        Some(
            &[
                zenfocus::Strategy::CenterOnFocalPoint,
                zenfocus::Strategy::ZoomOnFocalPoint
            ][..]
        )
    );
}

#[test]
fn output_keys_pass_through_as_extras() {
    let result = query::parse("w=10&h=10&format=webp&quality=80");
    assert!(result.warnings.is_empty());
    let extras = result.instructions.extras();
    assert_eq!(extras.get("format").map(String::as_str), Some("webp"));
    assert_eq!(extras.get("quality").map(String::as_str), Some("80"));
}

#[test]
fn bad_values_warn_and_are_ignored() {
    let result = query::parse("w=-5&h=10&strategy=stretch&bogus=1");
    assert_eq!(result.instructions.w, None);
    assert_eq!(result.instructions.strategies, None);
    assert_eq!(result.warnings.len(), 3);
    assert!(matches!(
        result.warnings[0],
        ParseWarning::ValueInvalid { key: "w", .. }
    ));
    assert!(matches!(
        result.warnings[1],
        ParseWarning::ValueInvalid {
            key: "strategy",
            ..
        }
    ));
    assert_eq!(
        result.warnings[2],
        ParseWarning::KeyNotRecognized {
            key: "bogus".into(),
            value: "1".into()
        }
    );
    assert_eq!(
        result.instructions.plan(100, 100).unwrap_err(),
        CropError::MissingDesiredDimensions
    );
}

#[test]
fn duplicate_key_last_wins() {
    let result = query::parse("w=10&w=20&h=5");
    assert_eq!(result.instructions.w, Some(20));
    assert_eq!(
        result.warnings,
        vec![ParseWarning::DuplicateKey {
            key: "w".into(),
            value: "20".into()
        }]
    );
}
