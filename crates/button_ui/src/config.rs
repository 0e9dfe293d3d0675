//! The three-option configuration accepted by the button primitive.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ButtonShape, ButtonSize, ButtonType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Shape, size, and semantic type of a single button.
///
/// The three attributes are independent; every combination is valid. Serialized as
/// `{"shape": ..., "size": ..., "type": ...}` with missing keys taking their defaults.
pub struct ButtonConfig {
    /// Corner treatment.
    pub shape: ButtonShape,
    /// Dimensional scale.
    pub size: ButtonSize,
    /// HTML `type` behavior.
    #[serde(rename = "type")]
    pub button_type: ButtonType,
}

impl ButtonConfig {
    /// Builds a configuration from its three attributes.
    pub const fn new(shape: ButtonShape, size: ButtonSize, button_type: ButtonType) -> Self {
        Self {
            shape,
            size,
            button_type,
        }
    }

    /// Every valid configuration, shape-major, then size, then type.
    pub fn all() -> impl Iterator<Item = Self> {
        ButtonShape::ALL.into_iter().flat_map(|shape| {
            ButtonSize::ALL.into_iter().flat_map(move |size| {
                ButtonType::ALL
                    .into_iter()
                    .map(move |button_type| Self::new(shape, size, button_type))
            })
        })
    }
}

impl fmt::Display for ButtonConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.shape, self.size, self.button_type)
    }
}
