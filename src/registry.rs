//! Registration table for pluggable widget parsers and window types.
//!
//! Widget modules register here before any theme is loaded. Themes parsed
//! afterwards see every registration; registrations made later have no
//! effect on themes that were already parsed.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use crate::config_tree::ConfigNode;
use crate::error::Result;
use crate::theme::ThemeDefinition;

/// Parser for the definitions of one widget type.
///
/// Called once per theme with the full `gui` node. `key` overrides the
/// section name the parser looks for; `None` means `<type>_definition`.
pub trait WidgetParser: Send + Sync {
    fn parse(
        &self,
        gui: &mut ThemeDefinition,
        definition_type: &str,
        cfg: &ConfigNode,
        key: Option<&str>,
    ) -> Result<()>;
}

impl<F> WidgetParser for F
where
    F: Fn(&mut ThemeDefinition, &str, &ConfigNode, Option<&str>) -> Result<()> + Send + Sync,
{
    fn parse(
        &self,
        gui: &mut ThemeDefinition,
        definition_type: &str,
        cfg: &ConfigNode,
        key: Option<&str>,
    ) -> Result<()> {
        self(gui, definition_type, cfg, key)
    }
}

#[derive(Default)]
pub struct RegistrationTable {
    widgets: BTreeMap<String, Box<dyn WidgetParser>>,
    windows: Vec<String>,
}

impl fmt::Debug for RegistrationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationTable")
            .field("widgets", &self.widgets.keys().collect::<Vec<_>>())
            .field("windows", &self.windows)
            .finish()
    }
}

impl RegistrationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget parser. A second registration for the same id is
    /// ignored; returns whether this call inserted.
    pub fn register_widget<P>(&mut self, id: &str, parser: P) -> bool
    where
        P: WidgetParser + 'static,
    {
        match self.widgets.entry(id.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(Box::new(parser));
                tracing::debug!("Registered widget type '{}'", id);
                true
            }
            Entry::Occupied(_) => {
                tracing::warn!(
                    "Widget type '{}' is already registered, keeping the first parser",
                    id
                );
                false
            }
        }
    }

    /// Add a window type every default theme must define.
    pub fn register_window(&mut self, id: &str) {
        if !self.windows.iter().any(|w| w == id) {
            self.windows.push(id.to_string());
        }
    }

    /// Widget type ids in sorted order.
    pub fn widget_types(&self) -> impl Iterator<Item = &str> {
        self.widgets.keys().map(String::as_str)
    }

    pub fn widget_parsers(&self) -> impl Iterator<Item = (&str, &dyn WidgetParser)> {
        self.widgets
            .iter()
            .map(|(id, parser)| (id.as_str(), parser.as_ref()))
    }

    pub fn window_types(&self) -> &[String] {
        &self.windows
    }
}

/// Window types the stock dialogs need.
pub const BUILTIN_WINDOWS: &[&str] = &[
    "title_screen",
    "message",
    "language_selection",
    "mp_method_selection",
    "mp_login",
];

pub fn register_builtin_windows(table: &mut RegistrationTable) {
    for id in BUILTIN_WINDOWS {
        table.register_window(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut ThemeDefinition, _: &str, _: &ConfigNode, _: Option<&str>) -> Result<()> {
        Ok(())
    }

    #[test]
    fn test_duplicate_widget_keeps_first() {
        let mut table = RegistrationTable::new();
        assert!(table.register_widget("button", noop));
        assert!(!table.register_widget(
            "button",
            |_: &mut ThemeDefinition, _: &str, _: &ConfigNode, _: Option<&str>| -> Result<()> {
                panic!("second parser must not be kept")
            }
        ));

        let mut gui = ThemeDefinition::default();
        for (id, parser) in table.widget_parsers() {
            parser.parse(&mut gui, id, &ConfigNode::new("gui"), None).unwrap();
        }
    }

    #[test]
    fn test_register_window_dedupes() {
        let mut table = RegistrationTable::new();
        table.register_window("title_screen");
        table.register_window("message");
        table.register_window("title_screen");
        assert_eq!(table.window_types(), ["title_screen", "message"]);
    }

    #[test]
    fn test_widget_types_are_sorted() {
        let mut table = RegistrationTable::new();
        table.register_widget("text_box", noop);
        table.register_widget("button", noop);
        table.register_widget("label", noop);
        let ids: Vec<&str> = table.widget_types().collect();
        assert_eq!(ids, vec!["button", "label", "text_box"]);
    }

    #[test]
    fn test_builtin_windows() {
        let mut table = RegistrationTable::new();
        register_builtin_windows(&mut table);
        register_builtin_windows(&mut table);
        assert_eq!(table.window_types().len(), BUILTIN_WINDOWS.len());
    }
}
