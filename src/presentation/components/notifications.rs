//! Notifications component
//!
//! Transient toasts stacked in the top-right corner, oldest on top.

use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::core::state::AppState;

const TOAST_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Default)]
pub struct NotificationsComponent;

impl NotificationsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let style = state.config.config.styles.style("notification");

        for (index, notification) in state.system.notifications.iter().enumerate() {
            let Some(toast) = Self::toast_area(area, index, notification.text.width()) else {
                break;
            };
            frame.render_widget(Clear, toast);
            frame.render_widget(
                Paragraph::new(notification.text.as_str())
                    .style(style)
                    .block(Block::bordered()),
                toast,
            );
        }
    }

    /// Slot for the `index`-th toast, or None once the stack runs off the area
    pub fn toast_area(area: Rect, index: usize, text_width: usize) -> Option<Rect> {
        let width = u16::try_from(text_width + 4)
            .unwrap_or(u16::MAX)
            .min(area.width);
        let offset = u16::try_from(index).ok()?.checked_mul(TOAST_HEIGHT)?;
        let y = area.y.checked_add(1)?.checked_add(offset)?;
        if y + TOAST_HEIGHT > area.bottom() {
            return None;
        }
        let x = area.right().saturating_sub(width + 1).max(area.x);
        Some(Rect::new(x, y, width, TOAST_HEIGHT))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_toast_area_stacks_downwards() {
        let area = Rect::new(0, 0, 80, 24);

        assert_eq!(
            NotificationsComponent::toast_area(area, 0, 10),
            Some(Rect::new(65, 1, 14, 3))
        );
        assert_eq!(
            NotificationsComponent::toast_area(area, 1, 10),
            Some(Rect::new(65, 4, 14, 3))
        );
    }

    #[test]
    fn test_toast_area_overflow() {
        let area = Rect::new(0, 0, 80, 7);

        assert!(NotificationsComponent::toast_area(area, 1, 10).is_some());
        assert_eq!(NotificationsComponent::toast_area(area, 2, 10), None);
    }

    #[test]
    fn test_toast_area_clamped_to_width() {
        let area = Rect::new(0, 0, 10, 24);

        assert_eq!(
            NotificationsComponent::toast_area(area, 0, 30),
            Some(Rect::new(0, 1, 10, 3))
        );
    }
}
