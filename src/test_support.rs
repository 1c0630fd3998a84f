//! Markup builders shared by unit tests.

use crate::registry::RegistrationTable;
use crate::widgets::WidgetFamily;

/// Table with `button` and `label` families (single `enabled` state) and
/// the `message` window.
pub fn table() -> RegistrationTable {
    let mut table = RegistrationTable::new();
    table.register_widget("button", WidgetFamily { states: &["enabled"] });
    table.register_widget("label", WidgetFamily { states: &["enabled"] });
    table.register_window("message");
    table
}

fn resolutions(sizes: &[(u32, u32)], inner: &str) -> String {
    sizes
        .iter()
        .map(|(w, h)| {
            format!(
                r#"<resolution window_width="{w}" window_height="{h}" min_width="{w}">{inner}</resolution>"#
            )
        })
        .collect()
}

pub fn control(kind: &str, id: &str, sizes: &[(u32, u32)]) -> String {
    format!(
        r#"<{kind}_definition id="{id}" description="{id} {kind}">{}</{kind}_definition>"#,
        resolutions(sizes, "<state_enabled><draw/></state_enabled>")
    )
}

pub fn window(id: &str, sizes: &[(u32, u32)]) -> String {
    format!(
        r#"<window id="{id}" description="{id} window">{}</window>"#,
        resolutions(sizes, "<grid/>")
    )
}

pub const SETTINGS: &str = r#"<settings popup_show_delay="150" double_click_time="500" sound_button_click="button.wav"/>"#;

pub fn gui(id: &str, body: &str) -> String {
    format!(r#"<gui id="{id}" description="{id} gui">{body}</gui>"#)
}

/// A gui satisfying [`table`]: default button and label plus the message window.
pub fn complete_gui(id: &str) -> String {
    gui(
        id,
        &format!(
            "{}{}{}{}{}",
            SETTINGS,
            control("button", "default", &[(800, 600), (1920, 1080)]),
            control("button", "large", &[(0, 0)]),
            control("label", "default", &[(0, 0)]),
            window("message", &[(800, 600), (0, 0)]),
        ),
    )
}
