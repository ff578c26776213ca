use approx::assert_relative_eq;
use proptest::prelude::*;
use wcag_colors::conformance::{ConformanceLevel, ElementType};
use wcag_colors::rgba::RgbaColor;

/// Truncate to two decimals, the way contrast ratios are usually quoted.
fn floor2(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}

fn gray(v: f64) -> RgbaColor {
    RgbaColor::opaque(v, v, v)
}

#[test]
fn test_white_luminance_is_one() {
    assert_relative_eq!(RgbaColor::WHITE.relative_luminance(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_black_luminance_is_zero() {
    assert_eq!(RgbaColor::BLACK.relative_luminance(), 0.0);
}

#[test]
fn test_luminance_weights_green_most() {
    let red = RgbaColor::opaque(255.0, 0.0, 0.0).relative_luminance();
    let green = RgbaColor::opaque(0.0, 255.0, 0.0).relative_luminance();
    let blue = RgbaColor::opaque(0.0, 0.0, 255.0).relative_luminance();

    assert_relative_eq!(red, 0.2126, epsilon = 1e-12);
    assert_relative_eq!(green, 0.7152, epsilon = 1e-12);
    assert_relative_eq!(blue, 0.0722, epsilon = 1e-12);
}

#[test]
fn test_luminance_ignores_alpha() {
    let opaque = RgbaColor::opaque(10.0, 120.0, 240.0);
    let clear = RgbaColor::new(10.0, 120.0, 240.0, 0.1);
    assert_eq!(opaque.relative_luminance(), clear.relative_luminance());
}

#[test]
fn test_same_color_ratio_is_one() {
    assert_eq!(
        RgbaColor::contrast_ratio(&RgbaColor::WHITE, &RgbaColor::WHITE),
        1.0
    );
    assert_eq!(RgbaColor::contrast_ratio(&gray(118.0), &gray(118.0)), 1.0);
}

#[test]
fn test_black_and_white_ratio_is_21() {
    assert_eq!(
        RgbaColor::contrast_ratio(&RgbaColor::WHITE, &RgbaColor::BLACK),
        21.0
    );
    assert_eq!(
        RgbaColor::contrast_ratio(&RgbaColor::BLACK, &RgbaColor::WHITE),
        21.0
    );
}

#[test]
fn test_gray_pair_ratio() {
    let ratio = RgbaColor::contrast_ratio(&gray(148.0), &gray(89.0));
    assert_eq!(floor2(ratio), 2.3);
}

#[test]
fn test_translucent_foreground_is_blended_first() {
    let semi_transparent = RgbaColor::new(0.5 * 255.0, 0.0, 255.0, 0.75);
    let ratio = RgbaColor::contrast_ratio(&semi_transparent, &RgbaColor::WHITE);
    assert_eq!(floor2(ratio), 4.51);

    // Without blending the same channels would give a much higher ratio
    let opaque = RgbaColor { alpha: 1.0, ..semi_transparent };
    assert!(RgbaColor::contrast_ratio(&opaque, &RgbaColor::WHITE) > 6.0);
}

#[test]
fn test_background_alpha_is_ignored() {
    let fg = gray(89.0);
    let opaque_bg = RgbaColor::WHITE;
    let clear_bg = RgbaColor::new(255.0, 255.0, 255.0, 0.0);

    assert_eq!(
        RgbaColor::contrast_ratio(&fg, &opaque_bg),
        RgbaColor::contrast_ratio(&fg, &clear_bg)
    );
}

#[test]
fn test_blended_semi_transparent_on_white() {
    let semi_transparent = RgbaColor::new(0.5 * 255.0, 0.0, 255.0, 0.75);
    let blended = semi_transparent.blended(semi_transparent.alpha, &RgbaColor::WHITE);

    assert_relative_eq!(blended.red, 0.625 * 255.0, epsilon = 1e-9);
    assert_relative_eq!(blended.green, 0.25 * 255.0, epsilon = 1e-9);
    assert_relative_eq!(blended.blue, 255.0, epsilon = 1e-9);
    assert_eq!(blended.alpha, 1.0);
}

#[test]
fn test_blended_extremes() {
    let red = RgbaColor::opaque(255.0, 0.0, 0.0);

    assert_eq!(red.blended(1.0, &RgbaColor::WHITE), red);
    assert_eq!(
        red.blended(0.0, &RgbaColor::BLACK),
        RgbaColor::BLACK
    );
}

#[test]
fn test_valid_color_combination() {
    // 118 gray on white is about 4.54:1
    let fg = gray(118.0);
    let bg = RgbaColor::WHITE;

    assert!(RgbaColor::is_valid_color_combination(
        &fg,
        ElementType::SmallFont,
        &bg,
        ConformanceLevel::AA
    ));
    assert!(RgbaColor::is_valid_color_combination(
        &fg,
        ElementType::SmallFont,
        &bg,
        ConformanceLevel::A
    ));
    assert!(!RgbaColor::is_valid_color_combination(
        &fg,
        ElementType::SmallFont,
        &bg,
        ConformanceLevel::AAA
    ));
    assert!(RgbaColor::is_valid_color_combination(
        &fg,
        ElementType::LargeFont,
        &bg,
        ConformanceLevel::AAA
    ));
}

#[test]
fn test_failed_is_always_satisfied() {
    assert!(RgbaColor::is_valid_color_combination(
        &RgbaColor::WHITE,
        ElementType::SmallFont,
        &RgbaColor::WHITE,
        ConformanceLevel::Failed
    ));
}

#[test]
fn test_black_white_helpers() {
    assert!(RgbaColor::WHITE.is_white());
    assert!(RgbaColor::BLACK.is_black());
    assert!(!RgbaColor::BLACK.is_white());
    assert!(!RgbaColor::new(0.0, 0.0, 0.0, 0.5).is_black());
}

fn arb_color() -> impl Strategy<Value = RgbaColor> {
    (0.0..=255.0f64, 0.0..=255.0f64, 0.0..=255.0f64, 0.0..=1.0f64)
        .prop_map(|(r, g, b, a)| RgbaColor::new(r, g, b, a))
}

fn arb_opaque_color() -> impl Strategy<Value = RgbaColor> {
    (0.0..=255.0f64, 0.0..=255.0f64, 0.0..=255.0f64)
        .prop_map(|(r, g, b)| RgbaColor::opaque(r, g, b))
}

proptest! {
    #[test]
    fn ratio_is_bounded(fg in arb_color(), bg in arb_color()) {
        let ratio = RgbaColor::contrast_ratio(&fg, &bg);
        prop_assert!(ratio >= 1.0);
        prop_assert!(ratio <= 21.0 + 1e-9);
    }

    #[test]
    fn ratio_with_itself_is_one(color in arb_opaque_color()) {
        prop_assert_eq!(RgbaColor::contrast_ratio(&color, &color), 1.0);
    }

    #[test]
    fn ratio_is_symmetric_for_opaque_colors(a in arb_opaque_color(), b in arb_opaque_color()) {
        prop_assert_eq!(RgbaColor::contrast_ratio(&a, &b), RgbaColor::contrast_ratio(&b, &a));
    }

    #[test]
    fn luminance_is_unit_range(color in arb_color()) {
        let l = color.relative_luminance();
        prop_assert!((0.0..=1.0).contains(&l));
    }

    #[test]
    fn blended_is_opaque(fg in arb_color(), bg in arb_opaque_color()) {
        prop_assert_eq!(fg.blended(fg.alpha, &bg).alpha, 1.0);
    }
}
