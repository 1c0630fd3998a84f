//! Stock widget families
//!
//! Every family is a widget type id plus the list of states its
//! definitions must draw. Families are registered through the same
//! [`RegistrationTable`] API external widget modules use.

pub mod definition;

pub use definition::{ControlDefinition, ResolutionDefinition, StateDefinition};

use crate::config_tree::ConfigNode;
use crate::error::Result;
use crate::registry::{RegistrationTable, WidgetParser};
use crate::theme::ThemeDefinition;

/// Generic parser for a widget type whose definitions differ only in states.
#[derive(Debug, Clone, Copy)]
pub struct WidgetFamily {
    pub states: &'static [&'static str],
}

impl WidgetParser for WidgetFamily {
    fn parse(
        &self,
        gui: &mut ThemeDefinition,
        definition_type: &str,
        cfg: &ConfigNode,
        key: Option<&str>,
    ) -> Result<()> {
        let key = key
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}_definition", definition_type));

        let definitions = cfg
            .child_range(&key)
            .map(|c| ControlDefinition::read(c, self.states))
            .collect::<Result<Vec<_>>>()?;

        gui.load_widget_definitions(definition_type, definitions)
    }
}

pub const BUILTIN_FAMILIES: &[(&str, WidgetFamily)] = &[
    (
        "button",
        WidgetFamily {
            states: &["enabled", "disabled", "pressed", "focussed"],
        },
    ),
    ("image", WidgetFamily { states: &["enabled"] }),
    (
        "label",
        WidgetFamily {
            states: &["enabled", "disabled"],
        },
    ),
    ("panel", WidgetFamily { states: &["enabled"] }),
    ("spacer", WidgetFamily { states: &["enabled"] }),
    (
        "text_box",
        WidgetFamily {
            states: &["enabled", "disabled", "focussed"],
        },
    ),
    (
        "toggle_button",
        WidgetFamily {
            states: &[
                "enabled",
                "disabled",
                "focussed",
                "enabled_selected",
                "disabled_selected",
                "focussed_selected",
            ],
        },
    ),
    ("tooltip", WidgetFamily { states: &["enabled"] }),
    ("window", WidgetFamily { states: &["enabled"] }),
];

/// Register every stock widget family.
pub fn register_builtin_widgets(table: &mut RegistrationTable) {
    for (id, family) in BUILTIN_FAMILIES {
        table.register_widget(id, *family);
    }
}
