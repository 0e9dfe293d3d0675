//! Closed vocabularies for button shape, size, and semantic type.
//!
//! Every value has a single lowercase token. The token is the serialized form, the `Display`
//! form, the accepted `FromStr` input, and the value emitted on `data-ui-*` attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Rejection of a string that names no value of a button attribute.
#[error("invalid button {attribute} `{value}`; expected one of: {expected}")]
pub struct ParseVariantError {
    /// Attribute being parsed (`shape`, `size`, or `type`).
    pub attribute: &'static str,
    /// Rejected input.
    pub value: String,
    /// Comma-separated accepted tokens.
    pub expected: String,
}

impl ParseVariantError {
    fn new(
        attribute: &'static str,
        value: &str,
        tokens: impl Iterator<Item = &'static str>,
    ) -> Self {
        Self {
            attribute,
            value: value.to_string(),
            expected: tokens.collect::<Vec<_>>().join(", "),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Corner treatment of a button.
pub enum ButtonShape {
    /// Fully rounded ends.
    Pill,
    /// Equal width and height, fully rounded.
    Circle,
    /// No rounding.
    Square,
}

impl Default for ButtonShape {
    fn default() -> Self {
        Self::Pill
    }
}

impl ButtonShape {
    /// Every shape in declaration order.
    pub const ALL: [Self; 3] = [Self::Pill, Self::Circle, Self::Square];

    /// Stable lowercase token for the shape.
    pub fn token(self) -> &'static str {
        match self {
            Self::Pill => "pill",
            Self::Circle => "circle",
            Self::Square => "square",
        }
    }
}

impl fmt::Display for ButtonShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ButtonShape {
    type Err = ParseVariantError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.token() == raw)
            .ok_or_else(|| {
                ParseVariantError::new("shape", raw, Self::ALL.into_iter().map(Self::token))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Dimensional scale of a button.
pub enum ButtonSize {
    /// Compact padding and font.
    Small,
    /// Expanded padding and font.
    Large,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Small
    }
}

impl ButtonSize {
    /// Every size in declaration order.
    pub const ALL: [Self; 2] = [Self::Small, Self::Large];

    /// Stable lowercase token for the size.
    pub fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ButtonSize {
    type Err = ParseVariantError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.token() == raw)
            .ok_or_else(|| {
                ParseVariantError::new("size", raw, Self::ALL.into_iter().map(Self::token))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Semantic form behavior of a button, mirroring the HTML `type` attribute.
pub enum ButtonType {
    /// No default form action.
    Button,
    /// Resets the enclosing form.
    Reset,
    /// Submits the enclosing form.
    Submit,
}

impl Default for ButtonType {
    fn default() -> Self {
        Self::Button
    }
}

impl ButtonType {
    /// Every type in declaration order.
    pub const ALL: [Self; 3] = [Self::Button, Self::Reset, Self::Submit];

    /// Stable lowercase token, also the HTML `type` attribute value.
    pub fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Reset => "reset",
            Self::Submit => "submit",
        }
    }
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ButtonType {
    type Err = ParseVariantError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.token() == raw)
            .ok_or_else(|| {
                ParseVariantError::new("type", raw, Self::ALL.into_iter().map(Self::token))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokens_cover_each_closed_set() {
        let shapes: Vec<_> = ButtonShape::ALL.iter().map(|v| v.token()).collect();
        let sizes: Vec<_> = ButtonSize::ALL.iter().map(|v| v.token()).collect();
        let types: Vec<_> = ButtonType::ALL.iter().map(|v| v.token()).collect();

        assert_eq!(shapes, vec!["pill", "circle", "square"]);
        assert_eq!(sizes, vec!["small", "large"]);
        assert_eq!(types, vec!["button", "reset", "submit"]);
    }

    #[test]
    fn every_token_parses_back_to_its_value() {
        for shape in ButtonShape::ALL {
            assert_eq!(shape.token().parse::<ButtonShape>(), Ok(shape));
            assert_eq!(shape.to_string(), shape.token());
        }
        for size in ButtonSize::ALL {
            assert_eq!(size.token().parse::<ButtonSize>(), Ok(size));
        }
        for kind in ButtonType::ALL {
            assert_eq!(kind.token().parse::<ButtonType>(), Ok(kind));
        }
    }

    #[test]
    fn literals_outside_the_sets_are_rejected() {
        for raw in ["hexagon", "Pill", "PILL", " pill", ""] {
            assert!(raw.parse::<ButtonShape>().is_err(), "shape `{raw}` accepted");
        }
        for raw in ["medium", "Small", "xl"] {
            assert!(raw.parse::<ButtonSize>().is_err(), "size `{raw}` accepted");
        }
        for raw in ["link", "Submit", "menu"] {
            assert!(raw.parse::<ButtonType>().is_err(), "type `{raw}` accepted");
        }
    }

    #[test]
    fn parse_error_names_the_accepted_set() {
        let err = "hexagon".parse::<ButtonShape>().unwrap_err();
        assert_eq!(err.attribute, "shape");
        assert_eq!(err.value, "hexagon");
        assert_eq!(
            err.to_string(),
            "invalid button shape `hexagon`; expected one of: pill, circle, square"
        );
    }

    #[test]
    fn serde_uses_lowercase_tokens() {
        assert_eq!(
            serde_json::to_string(&ButtonType::Submit).unwrap(),
            "\"submit\""
        );
        assert_eq!(
            serde_json::from_str::<ButtonShape>("\"circle\"").unwrap(),
            ButtonShape::Circle
        );
        assert!(serde_json::from_str::<ButtonShape>("\"hexagon\"").is_err());
    }
}
