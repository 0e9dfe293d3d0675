//! Button primitive with a closed shape, size, and semantic-type contract.
//!
//! The crate owns the [`ButtonShape`], [`ButtonSize`], and [`ButtonType`] vocabularies, the
//! [`ButtonConfig`] a rendering operation accepts, the utility-class [`ButtonStyles`] sheet that
//! maps a configuration to classes, and the Leptos [`Button`] component that emits the stable
//! `data-ui-*` DOM contract.
//!
//! Values outside the vocabularies do not exist, so they are rejected at compile time:
//!
//! ```compile_fail
//! use button_ui::ButtonShape;
//!
//! let _ = ButtonShape::Hexagon;
//! ```
//!
//! String input goes through `FromStr` or serde and is rejected there:
//!
//! ```
//! use button_ui::{ButtonConfig, ButtonShape, ButtonSize, ButtonStyles, ButtonType};
//!
//! assert!("hexagon".parse::<ButtonShape>().is_err());
//!
//! let config = ButtonConfig::new(ButtonShape::Pill, ButtonSize::Small, ButtonType::Submit);
//! let class = ButtonStyles::default().class_for(config, false);
//! assert!(class.contains("rounded-full"));
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod components;
mod config;
mod styles;
mod variants;

pub use components::{provide_button_styles, use_button_styles, Button, ButtonGallery};
pub use config::ButtonConfig;
pub use styles::{ButtonStyles, ShapeClasses, SizeClasses, StylesError, STYLES_SCHEMA_VERSION};
pub use variants::{ButtonShape, ButtonSize, ButtonType, ParseVariantError};

/// Convenience imports for application crates rendering buttons.
pub mod prelude {
    pub use crate::{
        provide_button_styles, use_button_styles, Button, ButtonConfig, ButtonGallery,
        ButtonShape, ButtonSize, ButtonStyles, ButtonType,
    };
}
