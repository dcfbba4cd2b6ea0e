use crate::{
    domain::{cart::Cart, order::OrderLink},
    infrastructure::config::Config,
};

pub mod cart;
pub mod catalog;
pub mod system;
pub mod ui;

use cart::CartState;
use catalog::CatalogState;
use system::SystemState;
use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub catalog: CatalogState,
    pub cart: CartState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState from the loaded configuration
    ///
    /// The cart always starts empty; the catalog, currency, order link and
    /// notification delay come from the storefront settings.
    pub fn new_with_config(config: Config) -> Self {
        let storefront = &config.storefront;
        let cart = CartState::new(
            Cart::with_currency(storefront.currency.clone()),
            OrderLink::new(
                storefront.order_endpoint.clone(),
                storefront.greeting.clone(),
            ),
        );
        let system = SystemState::with_notification_ms(storefront.notification_ms);

        Self {
            catalog: CatalogState::new(config.catalog.clone()),
            cart,
            ui: UiState::default(),
            system,
            config: ConfigState { config },
        }
    }

    pub fn storefront_name(&self) -> &str {
        &self.config.config.storefront.name
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::catalog::Product;

    fn create_test_config() -> Config {
        let mut config = Config::default();
        config.storefront.currency = "Rs.".to_string();
        config.storefront.order_endpoint = "https://wa.me/911111111111".to_string();
        config.storefront.notification_ms = 500;
        config.catalog = vec![Product {
            name: "Ring".to_string(),
            price: 2500,
            image: "img/ring.jpg".to_string(),
            price_text: "₹2,500".to_string(),
            description: String::new(),
        }];
        config
    }

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert!(state.cart.cart.is_empty());
        assert!(state.catalog.products.is_empty());
        assert!(!state.ui.cart_open);
        assert!(!state.system.should_quit);
        assert!(state.system.alert.is_none());
    }

    #[test]
    fn test_app_state_new_with_config() {
        let state = AppState::new_with_config(create_test_config());

        assert!(state.cart.cart.is_empty());
        assert_eq!(state.cart.cart.currency(), "Rs.");
        assert_eq!(
            state.cart.order_link.endpoint,
            "https://wa.me/911111111111"
        );
        assert_eq!(state.catalog.products.len(), 1);
        assert_eq!(state.catalog.selected, Some(0));
        assert_eq!(state.system.notification_ms, 500);
    }
}
