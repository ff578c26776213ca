//! WCAG 2.0 color contrast: relative luminance, contrast ratios, conformance
//! levels, and black/white or first-conforming color selection.
//!
//! ```
//! use wcag_colors::conformance::{ConformanceLevel, ElementType};
//! use wcag_colors::engine::ContrastEngine;
//! use wcag_colors::rgba::RgbaColor;
//!
//! let engine = ContrastEngine::default();
//! let gray = RgbaColor::opaque(118.0, 118.0, 118.0);
//!
//! assert_eq!(engine.pick_contrasting_color(&gray), RgbaColor::BLACK);
//! assert_eq!(
//!     engine.conformance(&gray, &RgbaColor::WHITE, ElementType::SmallFont),
//!     ConformanceLevel::AA
//! );
//! ```

pub mod cli;
pub mod config;
pub mod conformance;
pub mod convert;
pub mod engine;
pub mod logging;
pub mod report;
pub mod rgba;
