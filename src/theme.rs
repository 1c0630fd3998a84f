//! GUI definitions (themes)
//!
//! A gui is a named skin: the control definitions of every registered
//! widget type, the layouts of every window type and a block of scalar
//! settings. The gui with id `default` must exist and is the one that gets
//! activated; it must define every registered window type and, like every
//! other gui, a `default` definition for each widget type.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::config_tree::ConfigNode;
use crate::error::{GuiError, Result};
use crate::registry::RegistrationTable;
use crate::settings::{ActiveSettings, ThemeSettings};
use crate::tips::{self, Tip};
use crate::widgets::ControlDefinition;
use crate::window_builder::WindowBuilder;

pub const DEFAULT_ID: &str = "default";

/// widget type -> definition id -> definition
pub type ControlDefinitionMap = BTreeMap<String, BTreeMap<String, ControlDefinition>>;

#[derive(Debug, Clone, Default)]
pub struct ThemeDefinition {
    pub id: String,
    pub description: String,
    pub control_definition: ControlDefinitionMap,
    pub window_types: BTreeMap<String, WindowBuilder>,
    settings: ThemeSettings,
    tips: Vec<Tip>,
}

impl ThemeDefinition {
    /// Parse one `gui` node into a new definition.
    pub fn parse(cfg: &ConfigNode, table: &RegistrationTable) -> Result<Self> {
        let mut gui = Self::default();
        gui.read(cfg, table)?;
        Ok(gui)
    }

    /// Fill this definition from a `gui` node; returns the gui id.
    pub fn read(&mut self, cfg: &ConfigNode, table: &RegistrationTable) -> Result<&str> {
        self.id = cfg.str("id").to_string();
        self.description = cfg.str("description").to_string();

        if self.id.is_empty() {
            return Err(GuiError::missing_key("gui", "id"));
        }
        if self.description.is_empty() {
            return Err(GuiError::missing_key("gui", "description"));
        }

        tracing::debug!("Parsing gui '{}'", self.id);

        for (widget_type, parser) in table.widget_parsers() {
            parser.parse(self, widget_type, cfg, None)?;
        }

        for w in cfg.child_range("window") {
            let builder = WindowBuilder::read(w)?;
            match self.window_types.entry(builder.id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(builder);
                }
                Entry::Occupied(_) => {
                    tracing::warn!(
                        "gui '{}': window '{}' defined twice, keeping the first",
                        self.id,
                        builder.id
                    );
                }
            }
        }

        // The default gui is the fallback for every other gui, so it has to
        // know every window type.
        if self.id == DEFAULT_ID {
            if let Some(missing) = table
                .window_types()
                .iter()
                .find(|id| !self.window_types.contains_key(id.as_str()))
            {
                return Err(GuiError::WindowNotDefined(missing.clone()));
            }
        }

        self.settings = ThemeSettings::read(cfg.child("settings"))?;
        self.tips = tips::load(cfg);

        tracing::debug!(
            "gui '{}': {} widget types, {} windows, {} tips",
            self.id,
            self.control_definition.len(),
            self.window_types.len(),
            self.tips.len()
        );

        Ok(&self.id)
    }

    /// Copy this gui's settings into the process-wide snapshot.
    pub fn activate(&self, active: &mut ActiveSettings) {
        tracing::info!("Activating gui '{}'", self.id);
        active.apply(&self.settings, &self.tips);
    }

    /// Store the parsed definitions of one widget type.
    ///
    /// Definition ids must be unique per widget type; a duplicate is a
    /// parser bug. The type must end up with a `default` definition.
    pub fn load_widget_definitions(
        &mut self,
        definition_type: &str,
        definitions: Vec<ControlDefinition>,
    ) -> Result<()> {
        tracing::debug!("Load definition '{}'", definition_type);

        let map = self
            .control_definition
            .entry(definition_type.to_string())
            .or_default();

        for def in definitions {
            match map.entry(def.id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(def);
                }
                Entry::Occupied(existing) => {
                    debug_assert!(
                        false,
                        "duplicate '{}' definition '{}'",
                        definition_type,
                        existing.key()
                    );
                    tracing::error!(
                        "Duplicate '{}' definition '{}' ignored",
                        definition_type,
                        existing.key()
                    );
                }
            }
        }

        if !map.contains_key(DEFAULT_ID) {
            return Err(GuiError::MissingWidgetDefinition {
                definition_type: definition_type.to_string(),
                id: DEFAULT_ID.to_string(),
            });
        }

        Ok(())
    }

    /// Exact lookup, no fallback.
    pub fn control(&self, control_type: &str, definition: &str) -> Option<&ControlDefinition> {
        self.control_definition.get(control_type)?.get(definition)
    }

    /// Look up a definition, falling back to the type's `default` one.
    pub fn control_or_default(
        &self,
        control_type: &str,
        definition: &str,
    ) -> Result<&ControlDefinition> {
        let definitions = self
            .control_definition
            .get(control_type)
            .ok_or_else(|| GuiError::UnknownControlType(control_type.to_string()))?;

        if let Some(control) = definitions.get(definition) {
            return Ok(control);
        }

        tracing::info!(
            "Control: type '{}' definition '{}' not found, falling back to 'default'",
            control_type,
            definition
        );

        let fallback = definitions.get(DEFAULT_ID);
        debug_assert!(fallback.is_some(), "'{}' has no default definition", control_type);
        fallback.ok_or_else(|| GuiError::MissingWidgetDefinition {
            definition_type: control_type.to_string(),
            id: DEFAULT_ID.to_string(),
        })
    }

    pub fn window_builder(&self, id: &str) -> Option<&WindowBuilder> {
        self.window_types.get(id)
    }

    pub fn settings(&self) -> &ThemeSettings {
        &self.settings
    }

    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }
}
