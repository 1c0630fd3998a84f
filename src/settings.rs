//! Scalar settings of the active gui, read by the rest of the toolkit.

use serde::Serialize;
use std::collections::HashSet;

use crate::config_tree::ConfigNode;
use crate::error::{GuiError, Result};
use crate::resolution::ScreenSize;
use crate::tips::{self, Tip};

/// The `settings` section of one gui.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeSettings {
    /// Delay before a popup shows when hovering, 0 shows directly
    pub popup_show_delay: u32,

    /// Time a popup stays visible, 0 keeps it until the mouse leaves
    pub popup_show_time: u32,

    pub help_show_time: u32,

    /// Maximum time between the clicks of a double click; mandatory
    pub double_click_time: u32,

    pub repeat_button_repeat_time: u32,

    pub sound_button_click: String,
    pub sound_toggle_button_click: String,
    pub sound_toggle_panel_click: String,
    pub sound_slider_adjust: String,
}

impl ThemeSettings {
    /// Read a `settings` section. A missing section reads as empty and
    /// therefore fails on `double_click_time`.
    pub fn read(cfg: Option<&ConfigNode>) -> Result<Self> {
        let empty = ConfigNode::new("settings");
        let cfg = cfg.unwrap_or(&empty);

        let settings = Self {
            popup_show_delay: cfg.unsigned("popup_show_delay")?,
            popup_show_time: cfg.unsigned("popup_show_time")?,
            help_show_time: cfg.unsigned("help_show_time")?,
            double_click_time: cfg.unsigned("double_click_time")?,
            repeat_button_repeat_time: cfg.unsigned("repeat_button_repeat_time")?,
            sound_button_click: cfg.str("sound_button_click").to_string(),
            sound_toggle_button_click: cfg.str("sound_toggle_button_click").to_string(),
            sound_toggle_panel_click: cfg.str("sound_toggle_panel_click").to_string(),
            sound_slider_adjust: cfg.str("sound_slider_adjust").to_string(),
        };

        if settings.double_click_time == 0 {
            return Err(GuiError::missing_key("settings", "double_click_time"));
        }

        Ok(settings)
    }
}

/// Flattened copy of the active gui's settings plus the screen size.
#[derive(Debug, Clone, Default)]
pub struct ActiveSettings {
    pub screen_width: u32,
    pub screen_height: u32,

    /// Size of the game map area, set by the game display
    pub gamemap_width: u32,
    pub gamemap_height: u32,

    pub popup_show_delay: u32,
    pub popup_show_time: u32,
    pub help_show_time: u32,
    pub double_click_time: u32,
    pub repeat_button_repeat_time: u32,

    pub sound_button_click: String,
    pub sound_toggle_button_click: String,
    pub sound_toggle_panel_click: String,
    pub sound_slider_adjust: String,

    pub tips: Vec<Tip>,
}

impl ActiveSettings {
    pub fn screen_size(&self) -> ScreenSize {
        ScreenSize::new(self.screen_width, self.screen_height)
    }

    pub fn set_screen_size(&mut self, size: ScreenSize) {
        self.screen_width = size.width;
        self.screen_height = size.height;
    }

    /// Copy a gui's settings and tips in.
    pub fn apply(&mut self, settings: &ThemeSettings, tips: &[Tip]) {
        self.popup_show_delay = settings.popup_show_delay;
        self.popup_show_time = settings.popup_show_time;
        self.help_show_time = settings.help_show_time;
        self.double_click_time = settings.double_click_time;
        self.repeat_button_repeat_time = settings.repeat_button_repeat_time;
        self.sound_button_click = settings.sound_button_click.clone();
        self.sound_toggle_button_click = settings.sound_toggle_button_click.clone();
        self.sound_toggle_panel_click = settings.sound_toggle_panel_click.clone();
        self.sound_slider_adjust = settings.sound_slider_adjust.clone();
        self.tips = tips.to_vec();
    }

    /// Tips the player may see, shuffled.
    pub fn get_tips(&self, encountered_units: &HashSet<String>) -> Vec<Tip> {
        tips::shuffle(&self.tips, encountered_units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_settings() {
        let cfg = ConfigNode::new("settings")
            .with_attr("popup_show_delay", "150")
            .with_attr("double_click_time", "500")
            .with_attr("sound_button_click", "button.wav");

        let settings = ThemeSettings::read(Some(&cfg)).unwrap();
        assert_eq!(settings.popup_show_delay, 150);
        assert_eq!(settings.popup_show_time, 0);
        assert_eq!(settings.double_click_time, 500);
        assert_eq!(settings.sound_button_click, "button.wav");
        assert_eq!(settings.sound_slider_adjust, "");
    }

    #[test]
    fn test_double_click_time_is_mandatory() {
        let cfg = ConfigNode::new("settings").with_attr("popup_show_delay", "150");
        match ThemeSettings::read(Some(&cfg)) {
            Err(GuiError::MissingMandatoryKey { section, key }) => {
                assert_eq!(section, "settings");
                assert_eq!(key, "double_click_time");
            }
            other => panic!("Expected missing key error, got {:?}", other),
        }

        let zero = ConfigNode::new("settings").with_attr("double_click_time", "0");
        assert!(ThemeSettings::read(Some(&zero)).is_err());
    }

    #[test]
    fn test_missing_settings_section_fails() {
        assert!(ThemeSettings::read(None).is_err());
    }

    #[test]
    fn test_apply_copies_scalars() {
        let settings = ThemeSettings {
            double_click_time: 400,
            repeat_button_repeat_time: 50,
            sound_toggle_panel_click: "toggle.ogg".to_string(),
            ..Default::default()
        };
        let mut active = ActiveSettings::default();
        active.set_screen_size(ScreenSize::new(1024, 768));
        active.apply(&settings, &[]);

        assert_eq!(active.double_click_time, 400);
        assert_eq!(active.repeat_button_repeat_time, 50);
        assert_eq!(active.sound_toggle_panel_click, "toggle.ogg");
        assert_eq!(active.screen_size(), ScreenSize::new(1024, 768));
    }
}
