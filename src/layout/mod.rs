//! Print layout parameters.
//!
//! [`LayoutParams`] holds the six values that shape the printed page.
//! [`LayoutInput`] is the partially filled form of the same values, as
//! they arrive from a layout file, command-line flags or the interactive
//! prompter; [`LayoutInput::resolve`] applies the defaults and validates.

mod prompt;

pub use prompt::{parse_bleed, prompt_stdin, LayoutPrompter};

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default trim width in inches.
pub const DEFAULT_TRIM_WIDTH: f64 = 6.0;
/// Default trim height in inches.
pub const DEFAULT_TRIM_HEIGHT: f64 = 9.0;
/// Default inside (binding) margin in inches.
pub const DEFAULT_INSIDE_GUTTER: f64 = 0.375;
/// Default outside margin in inches when bleed is off.
pub const DEFAULT_OUTSIDE_MARGIN: f64 = 0.25;
/// Default outside margin in inches when bleed is on.
pub const BLEED_OUTSIDE_MARGIN: f64 = 0.375;
/// Default body font size in points.
pub const DEFAULT_FONT_SIZE: f64 = 11.0;

/// Resolved print layout for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Trim width in inches
    pub trim_width: f64,

    /// Trim height in inches
    pub trim_height: f64,

    /// Whether content may print to the page edge
    pub bleed: bool,

    /// Margin on the binding side in inches
    pub inside_gutter: f64,

    /// Margin on the other three sides in inches
    pub outside_margin: f64,

    /// Body font size in points
    pub font_size: f64,
}

impl LayoutParams {
    /// Outside margin used when none is given.
    pub fn default_outside_margin(bleed: bool) -> f64 {
        if bleed {
            BLEED_OUTSIDE_MARGIN
        } else {
            DEFAULT_OUTSIDE_MARGIN
        }
    }

    /// Width of the text block in inches.
    pub fn content_width(&self) -> f64 {
        self.trim_width - self.inside_gutter - self.outside_margin
    }

    /// Height of the text block in inches.
    pub fn content_height(&self) -> f64 {
        self.trim_height - 2.0 * self.outside_margin
    }

    /// Check that the parameters describe a printable page.
    pub fn validate(&self) -> Result<()> {
        check_positive("trim width", self.trim_width)?;
        check_positive("trim height", self.trim_height)?;
        check_positive("font size", self.font_size)?;
        check_non_negative("inside gutter", self.inside_gutter)?;
        check_non_negative("outside margin", self.outside_margin)?;

        if self.content_width() <= 0.0 {
            return Err(Error::InvalidLayout(format!(
                "gutter {}in and margin {}in leave no room on a {}in wide page",
                self.inside_gutter, self.outside_margin, self.trim_width
            )));
        }
        if self.content_height() <= 0.0 {
            return Err(Error::InvalidLayout(format!(
                "margin {}in leaves no room on a {}in tall page",
                self.outside_margin, self.trim_height
            )));
        }

        Ok(())
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            trim_width: DEFAULT_TRIM_WIDTH,
            trim_height: DEFAULT_TRIM_HEIGHT,
            bleed: false,
            inside_gutter: DEFAULT_INSIDE_GUTTER,
            outside_margin: DEFAULT_OUTSIDE_MARGIN,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidLayout(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidLayout(format!(
            "{} must not be negative, got {}",
            name, value
        )))
    }
}

/// Layout values that may still be missing.
///
/// Deserializes from JSON such as `{"trim_width": 5.5, "bleed": true}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutInput {
    /// Trim width in inches
    pub trim_width: Option<f64>,
    /// Trim height in inches
    pub trim_height: Option<f64>,
    /// Bleed flag
    pub bleed: Option<bool>,
    /// Inside gutter in inches
    pub inside_gutter: Option<f64>,
    /// Outside margin in inches
    pub outside_margin: Option<f64>,
    /// Font size in points
    pub font_size: Option<f64>,
}

impl LayoutInput {
    /// Create an empty input (every value defaulted).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON layout description.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidLayout(format!("layout file: {}", e)))
    }

    /// Read a JSON layout file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Set trim width.
    pub fn with_trim_width(mut self, inches: f64) -> Self {
        self.trim_width = Some(inches);
        self
    }

    /// Set trim height.
    pub fn with_trim_height(mut self, inches: f64) -> Self {
        self.trim_height = Some(inches);
        self
    }

    /// Set bleed.
    pub fn with_bleed(mut self, bleed: bool) -> Self {
        self.bleed = Some(bleed);
        self
    }

    /// Set inside gutter.
    pub fn with_inside_gutter(mut self, inches: f64) -> Self {
        self.inside_gutter = Some(inches);
        self
    }

    /// Set outside margin.
    pub fn with_outside_margin(mut self, inches: f64) -> Self {
        self.outside_margin = Some(inches);
        self
    }

    /// Set font size.
    pub fn with_font_size(mut self, points: f64) -> Self {
        self.font_size = Some(points);
        self
    }

    /// Overlay `other` on top of `self`; values set in `other` win.
    pub fn merge(self, other: LayoutInput) -> Self {
        Self {
            trim_width: other.trim_width.or(self.trim_width),
            trim_height: other.trim_height.or(self.trim_height),
            bleed: other.bleed.or(self.bleed),
            inside_gutter: other.inside_gutter.or(self.inside_gutter),
            outside_margin: other.outside_margin.or(self.outside_margin),
            font_size: other.font_size.or(self.font_size),
        }
    }

    /// Check if every value is present.
    pub fn is_complete(&self) -> bool {
        self.trim_width.is_some()
            && self.trim_height.is_some()
            && self.bleed.is_some()
            && self.inside_gutter.is_some()
            && self.outside_margin.is_some()
            && self.font_size.is_some()
    }

    /// Fill in defaults and validate.
    ///
    /// The outside-margin default follows the resolved bleed flag.
    pub fn resolve(&self) -> Result<LayoutParams> {
        let bleed = self.bleed.unwrap_or(false);
        let params = LayoutParams {
            trim_width: self.trim_width.unwrap_or(DEFAULT_TRIM_WIDTH),
            trim_height: self.trim_height.unwrap_or(DEFAULT_TRIM_HEIGHT),
            bleed,
            inside_gutter: self.inside_gutter.unwrap_or(DEFAULT_INSIDE_GUTTER),
            outside_margin: self
                .outside_margin
                .unwrap_or_else(|| LayoutParams::default_outside_margin(bleed)),
            font_size: self.font_size.unwrap_or(DEFAULT_FONT_SIZE),
        };
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = LayoutInput::new().resolve().unwrap();
        assert_eq!(params, LayoutParams::default());
        assert_eq!(params.trim_width, 6.0);
        assert_eq!(params.outside_margin, 0.25);
    }

    #[test]
    fn test_bleed_changes_margin_default() {
        let params = LayoutInput::new().with_bleed(true).resolve().unwrap();
        assert_eq!(params.outside_margin, 0.375);

        let params = LayoutInput::new()
            .with_bleed(true)
            .with_outside_margin(0.5)
            .resolve()
            .unwrap();
        assert_eq!(params.outside_margin, 0.5);
    }

    #[test]
    fn test_merge_prefers_overlay() {
        let file = LayoutInput::new().with_trim_width(5.0).with_font_size(10.0);
        let flags = LayoutInput::new().with_trim_width(5.5);
        let merged = file.merge(flags);

        assert_eq!(merged.trim_width, Some(5.5));
        assert_eq!(merged.font_size, Some(10.0));
        assert!(!merged.is_complete());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let cases = [
            LayoutInput::new().with_trim_width(0.0),
            LayoutInput::new().with_trim_height(-9.0),
            LayoutInput::new().with_font_size(f64::NAN),
            LayoutInput::new().with_inside_gutter(-0.1),
            LayoutInput::new().with_trim_width(0.5),
            LayoutInput::new().with_outside_margin(5.0),
        ];
        for input in cases {
            assert!(
                matches!(input.resolve(), Err(Error::InvalidLayout(_))),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_from_json() {
        let input = LayoutInput::from_json_str(r#"{"trim_width": 5.5, "bleed": true}"#).unwrap();
        assert_eq!(input.trim_width, Some(5.5));
        assert_eq!(input.bleed, Some(true));
        assert_eq!(input.font_size, None);

        let result = LayoutInput::from_json_str(r#"{"gutter": 1}"#);
        assert!(matches!(result, Err(Error::InvalidLayout(_))));
    }
}
