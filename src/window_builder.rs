//! Window layout builders.
//!
//! A window builder holds the layout variants of one window type. The grid
//! of each variant is kept as a raw config tree; building live widgets from
//! it is the dialog layer's job.

use crate::config_tree::ConfigNode;
use crate::error::{GuiError, Result};
use crate::resolution::ResolutionBounds;

/// One size-bounded layout of a window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowResolution {
    pub window_width: u32,
    pub window_height: u32,

    /// Let the toolkit place the window instead of using x/y/width/height
    pub automatic_placement: bool,

    // Placement formulas, evaluated by the layout engine
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,

    pub vertical_placement: String,
    pub horizontal_placement: String,
    pub maximum_width: u32,
    pub maximum_height: u32,
    pub click_dismiss: bool,

    /// Id of the `window` control definition used to draw the frame
    pub definition: String,

    pub tooltip: Option<String>,
    pub helptip: Option<String>,

    pub grid: ConfigNode,
}

impl WindowResolution {
    pub fn read(cfg: &ConfigNode) -> Result<Self> {
        let grid = cfg
            .child("grid")
            .ok_or_else(|| GuiError::missing_key("resolution", "grid"))?;

        let text_or = |key: &str, default: &str| -> String {
            match cfg.str(key) {
                "" => default.to_string(),
                value => value.to_string(),
            }
        };
        let optional = |key: &str| cfg.attr(key).filter(|v| !v.is_empty()).map(str::to_string);

        Ok(Self {
            window_width: cfg.unsigned("window_width")?,
            window_height: cfg.unsigned("window_height")?,
            automatic_placement: cfg.flag("automatic_placement", true)?,
            x: text_or("x", "0"),
            y: text_or("y", "0"),
            width: text_or("width", "0"),
            height: text_or("height", "0"),
            vertical_placement: text_or("vertical_placement", "center"),
            horizontal_placement: text_or("horizontal_placement", "center"),
            maximum_width: cfg.unsigned("maximum_width")?,
            maximum_height: cfg.unsigned("maximum_height")?,
            click_dismiss: cfg.flag("click_dismiss", false)?,
            definition: text_or("definition", "default"),
            tooltip: optional("tooltip"),
            helptip: optional("helptip"),
            grid: grid.clone(),
        })
    }
}

impl ResolutionBounds for WindowResolution {
    fn window_width(&self) -> u32 {
        self.window_width
    }

    fn window_height(&self) -> u32 {
        self.window_height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowBuilder {
    pub id: String,
    pub description: String,
    pub resolutions: Vec<WindowResolution>,
}

impl WindowBuilder {
    pub fn read(cfg: &ConfigNode) -> Result<Self> {
        let id = cfg.str("id").to_string();
        if id.is_empty() {
            return Err(GuiError::missing_key("window", "id"));
        }

        tracing::debug!("Parsing window '{}'", id);

        let resolutions = cfg
            .child_range("resolution")
            .map(WindowResolution::read)
            .collect::<Result<Vec<_>>>()?;

        if resolutions.is_empty() {
            return Err(GuiError::NoResolution {
                section: "window".to_string(),
                id,
            });
        }

        Ok(Self {
            id,
            description: cfg.str("description").to_string(),
            resolutions,
        })
    }
}
