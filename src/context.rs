//! Toolkit context: registrations, loaded guis and active settings.
//!
//! Built once at startup. Widget modules register their parsers and window
//! types, then `load_settings` parses the theme file and activates the
//! `default` gui. Afterwards the resolver methods hand out definitions for
//! the current screen size.

use std::path::Path;

use crate::config_tree::ConfigNode;
use crate::error::{GuiError, Result};
use crate::registry::{self, RegistrationTable, WidgetParser};
use crate::resolution::{select_resolution, ScreenSize, ScreenSizeProvider};
use crate::settings::ActiveSettings;
use crate::theme::ThemeDefinition;
use crate::theme_registry::ThemeRegistry;
use crate::widgets::{self, ResolutionDefinition};
use crate::window_builder::WindowResolution;

pub struct ToolkitContext {
    registration: RegistrationTable,
    themes: ThemeRegistry,
    settings: ActiveSettings,
    screen: Box<dyn ScreenSizeProvider>,
}

impl ToolkitContext {
    pub fn new(screen: impl ScreenSizeProvider + 'static) -> Self {
        Self {
            registration: RegistrationTable::new(),
            themes: ThemeRegistry::new(),
            settings: ActiveSettings::default(),
            screen: Box::new(screen),
        }
    }

    /// Context with the stock widget families and window types registered.
    pub fn with_builtins(screen: impl ScreenSizeProvider + 'static) -> Self {
        let mut ctx = Self::new(screen);
        widgets::register_builtin_widgets(&mut ctx.registration);
        registry::register_builtin_windows(&mut ctx.registration);
        ctx
    }

    pub fn register_widget<P>(&mut self, id: &str, parser: P) -> bool
    where
        P: WidgetParser + 'static,
    {
        self.registration.register_widget(id, parser)
    }

    pub fn register_window(&mut self, id: &str) {
        self.registration.register_window(id);
    }

    pub fn registration(&self) -> &RegistrationTable {
        &self.registration
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    pub fn settings(&self) -> &ActiveSettings {
        &self.settings
    }

    pub fn active_theme(&self) -> Option<&ThemeDefinition> {
        self.themes.active()
    }

    /// Record the game map area size.
    pub fn set_gamemap_size(&mut self, width: u32, height: u32) {
        self.settings.gamemap_width = width;
        self.settings.gamemap_height = height;
    }

    /// Refresh the cached screen size from the provider.
    pub fn update_screen_size(&mut self) -> ScreenSize {
        let size = self.screen.screen_size();
        if size != self.settings.screen_size() {
            tracing::debug!("Screen size is now {}x{}", size.width, size.height);
        }
        self.settings.set_screen_size(size);
        size
    }

    /// Load all guis from a theme file and activate `default`.
    ///
    /// An unreadable or malformed file is logged and treated as empty, which
    /// then fails on the missing default gui.
    pub fn load_settings(&mut self, path: &Path) -> Result<()> {
        tracing::info!("Setting: init gui from {:?}", path);
        self.update_screen_size();

        let cfg = ConfigNode::read_file(path).unwrap_or_else(|e| {
            tracing::error!("Setting: could not read file {:?}: {}", path, e);
            ConfigNode::default()
        });
        self.load_tree(&cfg)
    }

    /// Same as [`load_settings`](Self::load_settings) for an in-memory document.
    pub fn load_settings_from_str(&mut self, content: &str) -> Result<()> {
        tracing::info!("Setting: init gui");
        self.update_screen_size();

        let cfg = ConfigNode::parse(content).unwrap_or_else(|e| {
            tracing::error!("Setting: could not parse gui markup: {}", e);
            ConfigNode::default()
        });
        self.load_tree(&cfg)
    }

    fn load_tree(&mut self, cfg: &ConfigNode) -> Result<()> {
        let mut themes = ThemeRegistry::new();
        for g in cfg.child_range("gui") {
            themes.insert(ThemeDefinition::parse(g, &self.registration)?);
        }

        themes.activate_default(&mut self.settings)?;
        tracing::info!("Loaded {} gui(s): {:?}", themes.len(), themes.ids().collect::<Vec<_>>());
        self.themes = themes;
        Ok(())
    }

    /// Resolution of a control definition for the current screen size.
    ///
    /// An unknown definition id falls back to the type's `default`.
    pub fn get_control(
        &self,
        control_type: &str,
        definition: &str,
    ) -> Result<&ResolutionDefinition> {
        let gui = self.themes.active().ok_or(GuiError::NoActiveTheme)?;
        let control = gui.control_or_default(control_type, definition)?;

        select_resolution(&control.resolutions, self.settings.screen_size()).ok_or_else(|| {
            GuiError::NoResolution {
                section: control_type.to_string(),
                id: control.id.clone(),
            }
        })
    }

    /// Layout of a window type for the current screen size.
    ///
    /// Unknown window types fail with [`GuiError::InvalidWindowId`].
    pub fn get_window_builder(&mut self, window_type: &str) -> Result<&WindowResolution> {
        let screen = self.update_screen_size();

        let gui = self.themes.active().ok_or(GuiError::NoActiveTheme)?;
        let window = gui
            .window_builder(window_type)
            .ok_or_else(|| GuiError::InvalidWindowId(window_type.to_string()))?;

        select_resolution(&window.resolutions, screen).ok_or_else(|| GuiError::NoResolution {
            section: "window".to_string(),
            id: window.id.clone(),
        })
    }
}
