//! Catalog component
//!
//! Displays the scrollable list of products offered by the storefront.

use ratatui::{prelude::*, widgets::*};
use tui_widget_list::{ListBuilder, ListState, ListView};

use crate::{core::state::AppState, presentation::widgets::product_card::ProductCard};

/// Catalog component
///
/// Stateless: the selection lives in `CatalogState` and is copied into a
/// fresh `ListState` on every frame.
#[derive(Debug, Clone, Default)]
pub struct CatalogComponent;

impl CatalogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let focused = !state.ui.is_cart_focused();
        let border_style = if focused {
            styles.style("focused_border")
        } else {
            Style::default()
        };
        let block = Block::bordered()
            .title(" Products ")
            .border_style(border_style)
            .padding(Padding::horizontal(1));

        if state.catalog.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(
                Paragraph::new("No products available")
                    .style(styles.style("muted"))
                    .alignment(Alignment::Center),
                inner,
            );
            return;
        }

        let cards: Vec<ProductCard> = state
            .catalog
            .products
            .iter()
            .map(|product| {
                ProductCard::new(product.clone(), Self::in_cart(state, &product.name)).styles(
                    styles.style("selected"),
                    styles.style("price"),
                    styles.style("muted"),
                )
            })
            .collect();
        let item_count = cards.len();

        let builder = ListBuilder::new(move |context| {
            let mut card = cards[context.index].clone();
            card.highlight = focused && context.is_selected;
            let height = card.height();
            (card, height)
        });

        let mut list_state = ListState::default();
        list_state.select(state.catalog.selected);

        let list = ListView::new(builder, item_count).block(block);
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    /// Number of cart lines carrying `name`
    pub fn in_cart(state: &AppState, name: &str) -> usize {
        state
            .cart
            .cart
            .items()
            .iter()
            .filter(|item| item.name == name)
            .count()
    }
}
