use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::error::{GuiError, Result};
use crate::settings::ActiveSettings;
use crate::theme::{ThemeDefinition, DEFAULT_ID};

/// All parsed guis plus the active one.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    guis: BTreeMap<String, ThemeDefinition>,
    active: Option<String>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a gui; a second gui with the same id is dropped.
    pub fn insert(&mut self, gui: ThemeDefinition) {
        match self.guis.entry(gui.id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(gui);
            }
            Entry::Occupied(_) => {
                tracing::warn!("gui '{}' defined twice, keeping the first", gui.id);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&ThemeDefinition> {
        self.guis.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.guis.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemeDefinition> {
        self.guis.values()
    }

    pub fn len(&self) -> usize {
        self.guis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guis.is_empty()
    }

    /// Activate the `default` gui.
    pub fn activate_default(&mut self, active: &mut ActiveSettings) -> Result<()> {
        let gui = self.guis.get(DEFAULT_ID).ok_or(GuiError::NoDefaultTheme)?;
        gui.activate(active);
        self.active = Some(DEFAULT_ID.to_string());
        Ok(())
    }

    pub fn active(&self) -> Option<&ThemeDefinition> {
        self.active.as_deref().and_then(|id| self.guis.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_tree::ConfigNode;
    use crate::test_support::{self, control, window};

    fn gui(id: &str, double_click_time: u32) -> ThemeDefinition {
        let body = format!(
            r#"<settings double_click_time="{}"/>{}{}{}"#,
            double_click_time,
            control("button", "default", &[(0, 0)]),
            control("label", "default", &[(0, 0)]),
            window("message", &[(0, 0)]),
        );
        let root = ConfigNode::parse(&test_support::gui(id, &body)).unwrap();
        ThemeDefinition::parse(root.child("gui").unwrap(), &test_support::table()).unwrap()
    }

    #[test]
    fn test_activate_requires_default() {
        let mut registry = ThemeRegistry::new();
        registry.insert(gui("dark", 300));

        let mut active = ActiveSettings::default();
        assert!(matches!(
            registry.activate_default(&mut active),
            Err(GuiError::NoDefaultTheme)
        ));
        assert!(registry.active().is_none());
    }

    #[test]
    fn test_activate_default() {
        let mut registry = ThemeRegistry::new();
        registry.insert(gui("dark", 300));
        registry.insert(gui("default", 450));

        let mut active = ActiveSettings::default();
        registry.activate_default(&mut active).unwrap();
        assert_eq!(registry.active().unwrap().id, "default");
        assert_eq!(active.double_click_time, 450);
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["dark", "default"]);
    }

    #[test]
    fn test_duplicate_gui_keeps_first() {
        let mut registry = ThemeRegistry::new();
        registry.insert(gui("dark", 300));
        registry.insert(gui("dark", 900));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("dark").unwrap().settings().double_click_time, 300);
    }
}
