//! Alert component
//!
//! Centered blocking modal; drawn last so it covers everything else.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

const ALERT_WIDTH: u16 = 40;
const ALERT_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Default)]
pub struct AlertComponent;

impl AlertComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(alert) = &state.system.alert else {
            return;
        };

        let popup = Self::popup_area(area);
        let text = vec![
            Line::from(alert.message()),
            Line::default(),
            Line::from("[Enter] OK"),
        ];

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(state.config.config.styles.style("alert"))
                .block(Block::bordered().title(" Alert ")),
            popup,
        );
    }

    pub fn popup_area(area: Rect) -> Rect {
        let width = ALERT_WIDTH.min(area.width);
        let height = ALERT_HEIGHT.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_popup_area_centered() {
        assert_eq!(
            AlertComponent::popup_area(Rect::new(0, 0, 80, 24)),
            Rect::new(20, 9, 40, 5)
        );
    }

    #[test]
    fn test_popup_area_small_terminal() {
        assert_eq!(
            AlertComponent::popup_area(Rect::new(0, 0, 20, 3)),
            Rect::new(0, 0, 20, 3)
        );
    }
}
