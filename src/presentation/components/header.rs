//! Header component
//!
//! Storefront name with the cart item count badge.

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::widgets::header::HeaderWidget};

#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let header = HeaderWidget::new(state.storefront_name(), state.cart.cart.len())
            .styles(styles.style("header"), styles.style("badge"));
        frame.render_widget(header, area);
    }
}
