use serde::{Deserialize, Serialize};

pub mod cart;
pub mod catalog;
pub mod system;
pub mod ui;

use cart::CartMsg;
use catalog::CatalogMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Product list navigation (delegated to CatalogState)
    Catalog(CatalogMsg),

    // Cart mutations and checkout (delegated to CartState)
    Cart(CartMsg),

    // Layout and focus (delegated to UiState)
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::cart::CartItem;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Cart(CartMsg::Checkout).is_frequent());
        assert!(!Msg::Ui(UiMsg::ToggleCart).is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::Cart(CartMsg::Remove(1)), Msg::Cart(CartMsg::Remove(1)));
        assert_ne!(Msg::Cart(CartMsg::Remove(1)), Msg::Cart(CartMsg::Remove(0)));
    }

    #[test]
    fn test_msg_serialization() {
        let msg = Msg::Cart(CartMsg::Add(CartItem::new(
            "Ring",
            2500,
            "img/ring.jpg",
            "₹2,500",
        )));
        let serialized = serde_json::to_string(&msg).expect("serialize");
        let deserialized: Msg = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(msg, deserialized);
    }
}
