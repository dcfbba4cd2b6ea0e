use crate::{
    core::msg::cart::CartMsg,
    domain::{
        cart::{Cart, CartItem, CheckoutError},
        order::OrderLink,
    },
};

/// What a cart message did, for the coordinator to turn into notifications and commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOutcome {
    Added { name: String },
    Removed { item: CartItem },
    /// Nothing changed (e.g. removal at an unoccupied position)
    Unchanged,
    SelectionMoved,
    CheckoutBlocked(CheckoutError),
    CheckoutReady { url: String, message: String },
}

/// Cart-related state
#[derive(Debug, Clone, Default)]
pub struct CartState {
    pub cart: Cart,
    /// Highlighted line in the cart sidebar; always a currently occupied position
    pub selected: Option<usize>,
    pub order_link: OrderLink,
}

impl CartState {
    pub fn new(cart: Cart, order_link: OrderLink) -> Self {
        Self {
            cart,
            selected: None,
            order_link,
        }
    }

    /// Position targeted by the remove affordance
    pub fn selected_position(&self) -> Option<usize> {
        self.selected.filter(|&position| position < self.cart.len())
    }

    /// Cart-specific update function
    pub fn update(&mut self, msg: CartMsg) -> CartOutcome {
        match msg {
            CartMsg::Add(item) => {
                let name = item.name.clone();
                self.cart.add(item);
                if self.selected.is_none() {
                    self.selected = Some(0);
                }
                CartOutcome::Added { name }
            }

            CartMsg::Remove(position) => match self.cart.remove(position) {
                Some(item) => {
                    self.clamp_selection();
                    CartOutcome::Removed { item }
                }
                None => CartOutcome::Unchanged,
            },

            CartMsg::SelectNext => self.move_selection(|current, last| (current + 1).min(last)),
            CartMsg::SelectPrevious => {
                self.move_selection(|current, _| current.saturating_sub(1))
            }
            CartMsg::SelectFirst => self.move_selection(|_, _| 0),
            CartMsg::SelectLast => self.move_selection(|_, last| last),

            CartMsg::Checkout => match self.cart.compose_order_message() {
                Ok(summary) => CartOutcome::CheckoutReady {
                    url: self.order_link.url(&summary),
                    message: self.order_link.full_message(&summary),
                },
                Err(e) => CartOutcome::CheckoutBlocked(e),
            },
        }
    }

    fn move_selection(&mut self, step: impl Fn(usize, usize) -> usize) -> CartOutcome {
        if self.cart.is_empty() {
            return CartOutcome::Unchanged;
        }
        let last = self.cart.len() - 1;
        let next = match self.selected_position() {
            Some(current) => step(current, last),
            None => 0,
        };
        if self.selected == Some(next) {
            return CartOutcome::Unchanged;
        }
        self.selected = Some(next);
        CartOutcome::SelectionMoved
    }

    fn clamp_selection(&mut self) {
        self.selected = match (self.selected, self.cart.len()) {
            (_, 0) => None,
            (Some(position), len) if position >= len => Some(len - 1),
            (selected, _) => selected,
        };
    }
}
