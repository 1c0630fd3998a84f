//! gui-themes - GUI theme loader and lobby preferences for a game front-end
//!
//! Loads widget and window definitions from theme markup, picks the variant
//! that suits the current screen size, and exposes the lobby preferences.

pub mod config;
pub mod config_tree;
pub mod context;
pub mod error;
pub mod preferences;
pub mod registry;
pub mod resolution;
pub mod settings;
pub mod theme;
pub mod theme_registry;
pub mod tips;
pub mod widgets;
pub mod window_builder;

#[cfg(test)]
mod test_support;

pub use context::ToolkitContext;
pub use error::{GuiError, Result};
pub use resolution::{FixedScreen, ScreenSize, ScreenSizeProvider};
