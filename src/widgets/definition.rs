//! Control definitions (rendering-agnostic)
//!
//! A control definition is the skin of one widget type: a set of
//! resolution variants, each carrying sizing hints and one draw section per
//! widget state. The draw sections are kept as raw config trees for the
//! canvas layer.

use crate::config_tree::ConfigNode;
use crate::error::{GuiError, Result};
use crate::resolution::ResolutionBounds;

/// Drawing instructions for one state of a widget (enabled, pressed, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct StateDefinition {
    /// State name without the `state_` prefix
    pub name: String,

    /// The `draw` section handed to the canvas
    pub draw: ConfigNode,
}

impl StateDefinition {
    pub fn read(name: &str, cfg: Option<&ConfigNode>) -> Result<Self> {
        let draw = cfg
            .and_then(|c| c.child("draw"))
            .ok_or(GuiError::MissingDraw)?;

        Ok(Self {
            name: name.to_string(),
            draw: draw.clone(),
        })
    }
}

/// One size-bounded variant of a control definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionDefinition {
    /// Largest window width this variant is meant for
    pub window_width: u32,

    /// Largest window height this variant is meant for
    pub window_height: u32,

    pub min_width: u32,
    pub min_height: u32,
    pub default_width: u32,
    pub default_height: u32,
    pub max_width: u32,
    pub max_height: u32,

    /// Extra space around the text, added to the text size
    pub text_extra_width: u32,
    pub text_extra_height: u32,
    pub text_font_size: u32,
    pub text_font_style: String,

    /// One entry per state of the widget family, in family order
    pub state: Vec<StateDefinition>,
}

impl ResolutionDefinition {
    pub fn read(cfg: &ConfigNode, states: &[&str]) -> Result<Self> {
        let state = states
            .iter()
            .map(|name| StateDefinition::read(name, cfg.child(&format!("state_{}", name))))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            window_width: cfg.unsigned("window_width")?,
            window_height: cfg.unsigned("window_height")?,
            min_width: cfg.unsigned("min_width")?,
            min_height: cfg.unsigned("min_height")?,
            default_width: cfg.unsigned("default_width")?,
            default_height: cfg.unsigned("default_height")?,
            max_width: cfg.unsigned("max_width")?,
            max_height: cfg.unsigned("max_height")?,
            text_extra_width: cfg.unsigned("text_extra_width")?,
            text_extra_height: cfg.unsigned("text_extra_height")?,
            text_font_size: cfg.unsigned("text_font_size")?,
            text_font_style: cfg.str("text_font_style").to_string(),
            state,
        })
    }

    /// Look up a state by name.
    pub fn state(&self, name: &str) -> Option<&StateDefinition> {
        self.state.iter().find(|s| s.name == name)
    }
}

impl ResolutionBounds for ResolutionDefinition {
    fn window_width(&self) -> u32 {
        self.window_width
    }

    fn window_height(&self) -> u32 {
        self.window_height
    }
}

/// A named skin for one widget type.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlDefinition {
    pub id: String,
    pub description: String,

    /// Ordered smallest-threshold first; the last entry is the fallback
    pub resolutions: Vec<ResolutionDefinition>,
}

impl ControlDefinition {
    pub fn read(cfg: &ConfigNode, states: &[&str]) -> Result<Self> {
        let id = cfg.str("id").to_string();
        let description = cfg.str("description").to_string();

        if id.is_empty() {
            return Err(GuiError::missing_key("control", "id"));
        }
        if description.is_empty() {
            return Err(GuiError::missing_key("control", "description"));
        }

        tracing::debug!("Parsing control '{}' ({})", id, cfg.name());

        let resolutions = cfg
            .child_range("resolution")
            .map(|r| ResolutionDefinition::read(r, states))
            .collect::<Result<Vec<_>>>()?;

        if resolutions.is_empty() {
            return Err(GuiError::NoResolution {
                section: cfg.name().to_string(),
                id,
            });
        }

        Ok(Self {
            id,
            description,
            resolutions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(name: &str) -> ConfigNode {
        ConfigNode::new(&format!("state_{}", name)).with_child(ConfigNode::new("draw"))
    }

    fn button_resolution(width: &str, height: &str) -> ConfigNode {
        ConfigNode::new("resolution")
            .with_attr("window_width", width)
            .with_attr("window_height", height)
            .with_attr("min_width", "40")
            .with_attr("text_font_size", "12")
            .with_child(state("enabled"))
            .with_child(state("pressed"))
    }

    #[test]
    fn test_read_control_definition() {
        let cfg = ConfigNode::new("button_definition")
            .with_attr("id", "default")
            .with_attr("description", "Default button")
            .with_child(button_resolution("800", "600"))
            .with_child(button_resolution("0", "0"));

        let def = ControlDefinition::read(&cfg, &["enabled", "pressed"]).unwrap();
        assert_eq!(def.id, "default");
        assert_eq!(def.resolutions.len(), 2);

        let first = &def.resolutions[0];
        assert_eq!(first.window_width, 800);
        assert_eq!(first.window_height, 600);
        assert_eq!(first.min_width, 40);
        assert_eq!(first.text_font_size, 12);
        assert_eq!(first.max_width, 0);
        assert!(first.state("pressed").is_some());
        assert!(first.state("focussed").is_none());
    }

    #[test]
    fn test_missing_id_fails() {
        let cfg = ConfigNode::new("button_definition").with_attr("description", "x");
        assert!(matches!(
            ControlDefinition::read(&cfg, &[]),
            Err(GuiError::MissingMandatoryKey { .. })
        ));
    }

    #[test]
    fn test_missing_resolution_fails() {
        let cfg = ConfigNode::new("label_definition")
            .with_attr("id", "default")
            .with_attr("description", "Default label");
        assert!(matches!(
            ControlDefinition::read(&cfg, &["enabled"]),
            Err(GuiError::NoResolution { .. })
        ));
    }

    #[test]
    fn test_state_without_draw_fails() {
        let cfg = ConfigNode::new("resolution").with_child(ConfigNode::new("state_enabled"));
        assert!(matches!(
            ResolutionDefinition::read(&cfg, &["enabled"]),
            Err(GuiError::MissingDraw)
        ));
    }

    #[test]
    fn test_missing_state_fails() {
        let cfg = ConfigNode::new("resolution").with_child(state("enabled"));
        assert!(matches!(
            ResolutionDefinition::read(&cfg, &["enabled", "disabled"]),
            Err(GuiError::MissingDraw)
        ));
    }
}
