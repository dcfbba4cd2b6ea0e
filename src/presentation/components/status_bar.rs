//! Status bar component
//!
//! Shows the latest status message, or key hints when there is none.

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, presentation::config::keybindings::Action};

const HINTS: [(Action, &str); 5] = [
    (Action::AddToCart, "add"),
    (Action::ToggleCart, "cart"),
    (Action::SwitchFocus, "focus"),
    (Action::Checkout, "checkout"),
    (Action::Quit, "quit"),
];

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let text = state
            .system
            .status_message()
            .cloned()
            .unwrap_or_else(|| Self::key_hints(state));

        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(text).style(state.config.config.styles.style("status")),
            area,
        );
    }

    pub fn key_hints(state: &AppState) -> String {
        let keybindings = &state.config.config.keybindings;
        HINTS
            .iter()
            .filter_map(|(action, label)| {
                keybindings
                    .key_for(*action)
                    .map(|key| format!("{key}: {label}"))
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::config::default_config;

    #[test]
    fn test_key_hints_from_default_bindings() {
        let state = AppState::new_with_config(default_config().expect("embedded config"));

        assert_eq!(
            StatusBarComponent::key_hints(&state),
            "a: add  c: cart  tab: focus  o: checkout  ctrl-d: quit"
        );
    }
}
