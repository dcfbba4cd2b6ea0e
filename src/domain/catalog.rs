use serde::{Deserialize, Serialize};

use crate::domain::cart::CartItem;

/// A product offered by the storefront
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: u64,
    pub image: String,
    pub price_text: String,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Reads the product's attributes into a fresh cart line.
    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(
            self.name.clone(),
            self.price,
            self.image.clone(),
            self.price_text.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_to_cart_item_copies_attributes() {
        let product = Product {
            name: "Necklace".to_string(),
            price: 1500,
            image: "img/necklace.jpg".to_string(),
            price_text: "₹1,500".to_string(),
            description: "Gold plated".to_string(),
        };

        assert_eq!(
            product.to_cart_item(),
            CartItem::new("Necklace", 1500, "img/necklace.jpg", "₹1,500")
        );
    }

    #[test]
    fn test_deserialize_without_description() {
        let product: Product = json5::from_str(
            r#"{ name: "Ring", price: 2500, image: "img/ring.jpg", price_text: "₹2,500" }"#,
        )
        .expect("valid product");
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_deserialize_rejects_malformed_price() {
        let product: Result<Product, _> = json5::from_str(
            r#"{ name: "Ring", price: "abc", image: "img/ring.jpg", price_text: "₹2,500" }"#,
        );
        assert!(product.is_err());
    }
}
