//! Cart item types.
//!
//! Serialized field names follow the persisted wire format the mobile app
//! reads: `id, title, imageUrl, price, quantity`, with `price` as a JSON
//! number.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product reference plus the quantity held in the user's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog id; unique within a cart.
    pub id: ProductId,
    /// Product title at the time the item was added.
    pub title: String,
    /// Product image URL at the time the item was added.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Unit price at the time the item was added.
    pub price: Decimal,
    /// Always >= 1; the store never produces an entry at 0 or below.
    pub quantity: u32,
}

/// An item as handed to `add`, before a quantity exists for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    /// Catalog id of the product being added.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Product image URL.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Unit price.
    pub price: Decimal,
}

impl NewCartItem {
    /// First occurrence of this product in a cart.
    #[must_use]
    pub fn into_cart_item(self) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity: 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shirt() -> CartItem {
        CartItem {
            id: ProductId::new("1"),
            title: "Shirt".to_string(),
            image_url: "https://cdn.example.com/shirt.png".to_string(),
            price: Decimal::new(105, 1), // 10.5
            quantity: 2,
        }
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(shirt()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "1",
                "title": "Shirt",
                "imageUrl": "https://cdn.example.com/shirt.png",
                "price": 10.5,
                "quantity": 2,
            })
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let item = shirt();
        let raw = serde_json::to_string(&item).unwrap();
        let parsed: CartItem = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_deserialize_integer_price() {
        // Catalog payloads carry whole-number prices without a decimal point
        let item: CartItem = serde_json::from_value(json!({
            "id": "1",
            "title": "Shirt",
            "imageUrl": "u",
            "price": 10,
            "quantity": 1,
        }))
        .unwrap();
        assert_eq!(item.price, Decimal::new(10, 0));
    }

    #[test]
    fn test_into_cart_item_starts_at_quantity_one() {
        let new_item = NewCartItem {
            id: ProductId::new("1"),
            title: "Shirt".to_string(),
            image_url: "u".to_string(),
            price: Decimal::new(10, 0),
        };
        let item = new_item.into_cart_item();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.id, ProductId::new("1"));
    }
}
