//! Cart sidebar component
//!
//! Projects `Cart::render()` into the sidebar: the empty placeholder or one
//! line per item, followed by the formatted total.

use ratatui::{prelude::*, widgets::*};
use tui_widget_list::{ListBuilder, ListState, ListView};

use crate::{
    core::state::AppState,
    domain::cart::CartLines,
    presentation::{config::keybindings::Action, widgets::cart_line::CartLine},
};

pub const EMPTY_CART_TEXT: &str = "Your cart is empty";

#[derive(Debug, Clone, Default)]
pub struct CartSidebarComponent;

impl CartSidebarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let view = state.cart.cart.render();
        let focused = state.ui.is_cart_focused();
        let border_style = if focused {
            styles.style("focused_border")
        } else {
            Style::default()
        };

        let block = Block::bordered()
            .title(format!(" Your Cart ({}) ", view.count))
            .border_style(border_style)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let [lines_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(inner);

        match view.lines {
            CartLines::Empty => {
                let [_, placeholder_area, _] = Layout::vertical([
                    Constraint::Fill(1),
                    Constraint::Length(1),
                    Constraint::Fill(1),
                ])
                .areas(lines_area);
                frame.render_widget(
                    Paragraph::new(EMPTY_CART_TEXT)
                        .style(styles.style("muted"))
                        .alignment(Alignment::Center),
                    placeholder_area,
                );
            }
            CartLines::Items(lines) => {
                let item_count = lines.len();
                let cart_lines: Vec<CartLine> = lines
                    .into_iter()
                    .map(|line| {
                        CartLine::new(line).styles(
                            styles.style("selected"),
                            styles.style("price"),
                            styles.style("muted"),
                        )
                    })
                    .collect();

                let builder = ListBuilder::new(move |context| {
                    let mut line = cart_lines[context.index].clone();
                    line.highlight = focused && context.is_selected;
                    (line, CartLine::HEIGHT)
                });

                let mut list_state = ListState::default();
                list_state.select(state.cart.selected_position());

                frame.render_stateful_widget(
                    ListView::new(builder, item_count),
                    lines_area,
                    &mut list_state,
                );
            }
        }

        let total = Line::from(vec![
            Span::raw("Total: "),
            Span::styled(
                format!("{}{}", state.cart.cart.currency(), view.total_text),
                styles.style("price").bold(),
            ),
        ]);
        let hint = Line::styled(Self::hint(state), styles.style("muted"));
        frame.render_widget(Paragraph::new(vec![total, hint]), footer_area);
    }

    /// Key hints for the remove and checkout affordances
    pub fn hint(state: &AppState) -> String {
        let keybindings = &state.config.config.keybindings;
        [(Action::RemoveFromCart, "remove"), (Action::Checkout, "checkout")]
            .into_iter()
            .filter_map(|(action, label)| {
                keybindings
                    .key_for(action)
                    .map(|key| format!("[{key}] {label}"))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
