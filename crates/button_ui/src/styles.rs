//! Utility-class style sheet for the button primitive.

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ButtonConfig, ButtonShape, ButtonSize};

/// Style sheet schema understood by [`ButtonStyles::from_toml_str`].
pub const STYLES_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
/// Errors returned while loading a button style sheet.
pub enum StylesError {
    /// The TOML was malformed or named an unknown key.
    #[error("failed to parse button styles: {0}")]
    Parse(#[from] toml::de::Error),
    /// The sheet declares a schema this crate does not understand.
    #[error("button styles schema mismatch: expected {expected} found {found}")]
    SchemaMismatch {
        /// Supported schema version.
        expected: u32,
        /// Version declared by the sheet.
        found: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Classes per [`ButtonShape`].
pub struct ShapeClasses {
    /// Classes for [`ButtonShape::Pill`].
    pub pill: String,
    /// Classes for [`ButtonShape::Circle`].
    pub circle: String,
    /// Classes for [`ButtonShape::Square`].
    pub square: String,
}

impl Default for ShapeClasses {
    fn default() -> Self {
        Self {
            pill: "rounded-full".to_string(),
            circle: "rounded-full aspect-square !px-0".to_string(),
            square: "rounded-none".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Classes per [`ButtonSize`].
pub struct SizeClasses {
    /// Classes for [`ButtonSize::Small`].
    pub small: String,
    /// Classes for [`ButtonSize::Large`].
    pub large: String,
}

impl Default for SizeClasses {
    fn default() -> Self {
        Self {
            small: "h-8 px-3 text-sm".to_string(),
            large: "h-12 px-6 text-lg".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Mapping from button configuration to utility classes.
///
/// The button type never contributes classes; only shape, size, and the disabled state do.
pub struct ButtonStyles {
    /// Declared schema version, see [`STYLES_SCHEMA_VERSION`].
    pub schema_version: u32,
    /// Classes applied to every button.
    pub base: String,
    /// Classes appended while the button is disabled.
    pub disabled: String,
    /// Shape classes.
    pub shape: ShapeClasses,
    /// Size classes.
    pub size: SizeClasses,
}

impl Default for ButtonStyles {
    fn default() -> Self {
        Self {
            schema_version: STYLES_SCHEMA_VERSION,
            base: "inline-flex items-center justify-center gap-2 font-medium transition-colors select-none"
                .to_string(),
            disabled: "opacity-50 cursor-not-allowed pointer-events-none".to_string(),
            shape: ShapeClasses::default(),
            size: SizeClasses::default(),
        }
    }
}

impl ButtonStyles {
    /// Parses a TOML style sheet; absent tables and keys inherit [`ButtonStyles::default`].
    ///
    /// # Errors
    ///
    /// Returns [`StylesError::Parse`] for malformed TOML or unknown keys and
    /// [`StylesError::SchemaMismatch`] when `schema_version` is not supported.
    pub fn from_toml_str(raw: &str) -> Result<Self, StylesError> {
        let styles: Self = toml::from_str(raw)?;
        if styles.schema_version != STYLES_SCHEMA_VERSION {
            return Err(StylesError::SchemaMismatch {
                expected: STYLES_SCHEMA_VERSION,
                found: styles.schema_version,
            });
        }
        Ok(styles)
    }

    /// Loads a style sheet, falling back to the built-in one when it does not parse.
    pub fn load_or_default(raw: &str) -> Self {
        match Self::from_toml_str(raw) {
            Ok(styles) => styles,
            Err(err) => {
                logging::warn!("button styles load failed, using built-in sheet: {err}");
                Self::default()
            }
        }
    }

    /// Classes for a shape.
    pub fn shape_class(&self, shape: ButtonShape) -> &str {
        match shape {
            ButtonShape::Pill => &self.shape.pill,
            ButtonShape::Circle => &self.shape.circle,
            ButtonShape::Square => &self.shape.square,
        }
    }

    /// Classes for a size.
    pub fn size_class(&self, size: ButtonSize) -> &str {
        match size {
            ButtonSize::Small => &self.size.small,
            ButtonSize::Large => &self.size.large,
        }
    }

    /// Full class list for a configuration: base, shape, size, then disabled classes.
    pub fn class_for(&self, config: ButtonConfig, disabled: bool) -> String {
        let disabled = if disabled { self.disabled.as_str() } else { "" };
        [
            self.base.as_str(),
            self.shape_class(config.shape),
            self.size_class(config.size),
            disabled,
        ]
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ButtonType;
    use pretty_assertions::assert_eq;

    const SHIPPED_STYLES: &str = include_str!("../styles/button.toml");

    #[test]
    fn shipped_sheet_matches_builtin_styles() {
        let styles = ButtonStyles::from_toml_str(SHIPPED_STYLES).expect("shipped sheet parses");
        assert_eq!(styles, ButtonStyles::default());
    }

    #[test]
    fn class_for_orders_base_shape_size_disabled() {
        let styles = ButtonStyles::default();
        let config = ButtonConfig::new(ButtonShape::Square, ButtonSize::Large, ButtonType::Reset);
        assert_eq!(
            styles.class_for(config, false),
            "inline-flex items-center justify-center gap-2 font-medium transition-colors \
             select-none rounded-none h-12 px-6 text-lg"
        );
        assert!(styles
            .class_for(config, true)
            .ends_with("h-12 px-6 text-lg opacity-50 cursor-not-allowed pointer-events-none"));
    }

    #[test]
    fn button_type_does_not_change_classes() {
        let styles = ButtonStyles::default();
        for config in ButtonConfig::all() {
            let as_button = ButtonConfig {
                button_type: ButtonType::Button,
                ..config
            };
            assert_eq!(
                styles.class_for(config, false),
                styles.class_for(as_button, false)
            );
        }
    }

    #[test]
    fn partial_sheet_inherits_defaults() {
        let styles = ButtonStyles::from_toml_str(
            r#"
            schema_version = 1
            [shape]
            square = "rounded-sm"
            "#,
        )
        .unwrap();
        assert_eq!(styles.shape_class(ButtonShape::Square), "rounded-sm");
        assert_eq!(styles.shape_class(ButtonShape::Pill), "rounded-full");
        assert_eq!(styles.size, SizeClasses::default());
        assert_eq!(styles.base, ButtonStyles::default().base);
    }

    #[test]
    fn empty_parts_are_skipped() {
        let styles = ButtonStyles::from_toml_str(
            r#"
            base = ""
            [shape]
            square = "  "
            [size]
            small = "p-1"
            "#,
        )
        .unwrap();
        let config = ButtonConfig::new(ButtonShape::Square, ButtonSize::Small, ButtonType::Submit);
        assert_eq!(styles.class_for(config, false), "p-1");
    }

    #[test]
    fn unknown_shape_key_is_rejected() {
        let err = ButtonStyles::from_toml_str("[shape]\nhexagon = \"clip-hex\"\n").unwrap_err();
        assert!(matches!(err, StylesError::Parse(_)), "{err}");
    }

    #[test]
    fn unsupported_schema_is_rejected() {
        let err = ButtonStyles::from_toml_str("schema_version = 2\n").unwrap_err();
        assert!(matches!(
            err,
            StylesError::SchemaMismatch {
                expected: 1,
                found: 2
            }
        ));
    }

    #[test]
    fn load_or_default_falls_back_on_error() {
        assert_eq!(
            ButtonStyles::load_or_default("base = ["),
            ButtonStyles::default()
        );
    }
}
