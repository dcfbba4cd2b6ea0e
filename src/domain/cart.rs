//! Cart manager
//!
//! The cart is an ordered list of line items. Items have no identity beyond
//! their position, duplicates are separate lines, and the total is a cached
//! value refreshed after every mutation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::money::{format_amount, group_amount, Amount, DEFAULT_CURRENCY};

/// Errors raised while building a cart item from untyped UI attributes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("malformed price {value:?} for {name}")]
    MalformedPrice { name: String, value: String },
}

/// Errors raised by checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Your cart is empty!")]
    EmptyCart,
}

/// One selected product instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    /// Price in the smallest currency unit
    pub unit_price: u64,
    pub image_ref: String,
    /// Pre-formatted price text, shown verbatim and never derived from `unit_price`
    pub display_price: String,
}

impl CartItem {
    pub fn new(
        name: impl Into<String>,
        unit_price: u64,
        image_ref: impl Into<String>,
        display_price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit_price,
            image_ref: image_ref.into(),
            display_price: display_price.into(),
        }
    }

    /// Builds an item from textual attributes, coercing the price.
    ///
    /// A price that is not a non-negative integer is rejected instead of
    /// being carried into the total.
    pub fn from_attributes(
        name: &str,
        price: &str,
        image_ref: &str,
        display_price: &str,
    ) -> Result<Self, CartError> {
        let unit_price = price
            .trim()
            .parse::<u64>()
            .map_err(|_| CartError::MalformedPrice {
                name: name.to_string(),
                value: price.to_string(),
            })?;
        Ok(Self::new(name, unit_price, image_ref, display_price))
    }
}

/// A rendered cart line, tagged with the position it currently occupies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineView {
    pub position: usize,
    pub image_ref: String,
    pub name: String,
    pub display_price: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartLines {
    /// The "cart is empty" placeholder
    Empty,
    Items(Vec<LineView>),
}

/// Derived projection of the cart used by every renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub count: usize,
    pub total: Amount,
    /// Total with Indian digit grouping and no currency symbol
    pub total_text: String,
    pub lines: CartLines,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        matches!(self.lines, CartLines::Empty)
    }

    pub fn line(&self, position: usize) -> Option<&LineView> {
        match &self.lines {
            CartLines::Empty => None,
            CartLines::Items(lines) => lines.get(position),
        }
    }
}

/// Holds the selected items and their running total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
    total: Amount,
    currency: String,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::with_currency(DEFAULT_CURRENCY)
    }

    /// Creates an empty cart whose order summary uses `currency` as the total prefix
    pub fn with_currency(currency: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            currency: currency.into(),
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, position: usize) -> Option<&CartItem> {
        self.items.get(position)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exact sum of the unit prices of every item in the cart
    pub fn total(&self) -> Amount {
        self.total
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Appends an item. Always succeeds.
    pub fn add(&mut self, item: CartItem) {
        self.items.push(item);
        self.refresh_total();
    }

    /// Deletes the item at `position`, shifting later items down by one.
    ///
    /// Returns `None` and leaves the cart untouched when `position` is not occupied.
    pub fn remove(&mut self, position: usize) -> Option<CartItem> {
        if position >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(position);
        self.refresh_total();
        Some(removed)
    }

    fn refresh_total(&mut self) {
        self.total = self
            .items
            .iter()
            .map(|item| Amount::from(item.unit_price))
            .sum();
    }

    /// Projects the cart into a view with lines bound to their current positions.
    pub fn render(&self) -> CartView {
        let lines = if self.items.is_empty() {
            CartLines::Empty
        } else {
            CartLines::Items(
                self.items
                    .iter()
                    .enumerate()
                    .map(|(position, item)| LineView {
                        position,
                        image_ref: item.image_ref.clone(),
                        name: item.name.clone(),
                        display_price: item.display_price.clone(),
                    })
                    .collect(),
            )
        };

        CartView {
            count: self.items.len(),
            total: self.total,
            total_text: group_amount(self.total),
            lines,
        }
    }

    /// Builds the 1-indexed order summary followed by the formatted total.
    pub fn compose_order_message(&self) -> Result<String, CheckoutError> {
        if self.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let mut message = String::new();
        for (index, item) in self.items.iter().enumerate() {
            message.push_str(&format!(
                "{}. {} - {}\n",
                index + 1,
                item.name,
                item.display_price
            ));
        }
        message.push_str(&format!(
            "\nTotal: {}",
            format_amount(&self.currency, self.total)
        ));
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn necklace() -> CartItem {
        CartItem::new("Necklace", 1500, "img/necklace.jpg", "₹1,500")
    }

    fn ring() -> CartItem {
        CartItem::new("Ring", 2500, "img/ring.jpg", "₹2,500")
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
        assert_eq!(cart.currency(), "₹");
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut cart = Cart::new();
        cart.add(necklace());
        cart.add(ring());

        assert_eq!(cart.items(), &[necklace(), ring()]);
        assert_eq!(cart.total(), 4000);
    }

    #[test]
    fn test_duplicates_are_separate_lines() {
        let mut cart = Cart::new();
        cart.add(ring());
        cart.add(ring());

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 5000);
    }

    #[test]
    fn test_remove_shifts_later_items() {
        let mut cart = Cart::new();
        cart.add(necklace());
        cart.add(ring());

        let removed = cart.remove(0);

        assert_eq!(removed, Some(necklace()));
        assert_eq!(cart.items(), &[ring()]);
        assert_eq!(cart.total(), 2500);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add(necklace());
        let before = cart.clone();

        assert_eq!(cart.remove(1), None);
        assert_eq!(cart.remove(usize::MAX), None);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_render_empty_placeholder() {
        let view = Cart::new().render();
        assert!(view.is_empty());
        assert_eq!(view.lines, CartLines::Empty);
        assert_eq!(view.total_text, "0");
    }

    #[test]
    fn test_render_rebinds_positions_after_remove() {
        let mut cart = Cart::new();
        cart.add(necklace());
        cart.add(ring());
        cart.remove(0);

        let view = cart.render();
        let line = view.line(0).expect("ring should be rendered at position 0");
        assert_eq!(line.name, "Ring");
        assert_eq!(line.position, 0);
        assert_eq!(line.display_price, "₹2,500");
        assert!(view.line(1).is_none());
    }

    #[test]
    fn test_render_total_uses_indian_grouping() {
        let mut cart = Cart::new();
        cart.add(CartItem::new("Set", 123_456, "img/set.jpg", "₹1,23,456"));
        assert_eq!(cart.render().total_text, "1,23,456");
    }

    #[test]
    fn test_compose_order_message() {
        let mut cart = Cart::new();
        cart.add(necklace());
        cart.add(ring());

        assert_eq!(
            cart.compose_order_message(),
            Ok("1. Necklace - ₹1,500\n2. Ring - ₹2,500\n\nTotal: ₹4,000".to_string())
        );
    }

    #[test]
    fn test_compose_order_message_keeps_display_price_verbatim() {
        let mut cart = Cart::new();
        cart.add(CartItem::new("Anklet", 999, "img/anklet.jpg", "Rs 1,000 (sale)"));

        let message = cart.compose_order_message().expect("non-empty cart");
        assert!(message.starts_with("1. Anklet - Rs 1,000 (sale)\n"));
        assert!(message.ends_with("Total: ₹999"));
    }

    #[test]
    fn test_compose_order_message_empty_cart() {
        assert_eq!(
            Cart::new().compose_order_message(),
            Err(CheckoutError::EmptyCart)
        );
        assert_eq!(CheckoutError::EmptyCart.to_string(), "Your cart is empty!");
    }

    #[test]
    fn test_from_attributes() {
        let item = CartItem::from_attributes("Ring", " 2500 ", "img/ring.jpg", "₹2,500")
            .expect("valid price");
        assert_eq!(item, ring());

        let err = CartItem::from_attributes("Ring", "2,500", "img/ring.jpg", "₹2,500");
        assert_eq!(
            err,
            Err(CartError::MalformedPrice {
                name: "Ring".to_string(),
                value: "2,500".to_string(),
            })
        );
        assert!(CartItem::from_attributes("Ring", "-1", "", "").is_err());
    }

    #[test]
    fn test_total_stays_exact_beyond_u64() {
        let mut cart = Cart::new();
        cart.add(CartItem::new("Crown", u64::MAX, "img/crown.jpg", "priceless"));
        cart.add(CartItem::new("Ring", 5, "img/ring.jpg", "₹5"));

        assert_eq!(cart.total(), Amount::from(u64::MAX) + 5);
        assert_eq!(cart.render().total_text, group_amount(cart.total()));

        cart.remove(0);
        assert_eq!(cart.total(), 5);
    }
}
