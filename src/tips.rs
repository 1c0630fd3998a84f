//! Tips of the day shown on the title screen.

use rand::seq::SliceRandom;
use serde::Serialize;
use std::collections::HashSet;

use crate::config_tree::ConfigNode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub text: String,
    pub source: String,

    /// Units the player must have met before the tip is shown; empty means always
    pub unit_filter: Vec<String>,
}

impl Tip {
    pub fn is_unlocked(&self, encountered_units: &HashSet<String>) -> bool {
        self.unit_filter.is_empty()
            || self
                .unit_filter
                .iter()
                .any(|unit| encountered_units.contains(unit))
    }
}

/// Read every `tip` child of a gui node.
pub fn load(cfg: &ConfigNode) -> Vec<Tip> {
    cfg.child_range("tip")
        .map(|tip| Tip {
            text: tip.str("text").to_string(),
            source: tip.str("source").to_string(),
            unit_filter: tip
                .str("encountered_units")
                .split(',')
                .map(str::trim)
                .filter(|unit| !unit.is_empty())
                .map(str::to_string)
                .collect(),
        })
        .collect()
}

/// Unlocked tips in random order.
pub fn shuffle(tips: &[Tip], encountered_units: &HashSet<String>) -> Vec<Tip> {
    let mut result: Vec<Tip> = tips
        .iter()
        .filter(|tip| tip.is_unlocked(encountered_units))
        .cloned()
        .collect();
    result.shuffle(&mut rand::rng());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gui_with_tips() -> ConfigNode {
        ConfigNode::new("gui")
            .with_child(
                ConfigNode::new("tip")
                    .with_attr("text", "Save often.")
                    .with_attr("source", "Anonymous"),
            )
            .with_child(
                ConfigNode::new("tip")
                    .with_attr("text", "Elves are at home in forests.")
                    .with_attr("encountered_units", "Elvish Fighter, Elvish Archer"),
            )
    }

    #[test]
    fn test_load_tips() {
        let tips = load(&gui_with_tips());
        assert_eq!(tips.len(), 2);
        assert_eq!(tips[0].source, "Anonymous");
        assert!(tips[0].unit_filter.is_empty());
        assert_eq!(tips[1].unit_filter, vec!["Elvish Fighter", "Elvish Archer"]);
    }

    #[test]
    fn test_shuffle_hides_locked_tips() {
        let tips = load(&gui_with_tips());

        let shown = shuffle(&tips, &HashSet::new());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].text, "Save often.");

        let encountered: HashSet<String> = ["Elvish Archer".to_string()].into_iter().collect();
        let shown = shuffle(&tips, &encountered);
        assert_eq!(shown.len(), 2);
    }
}
