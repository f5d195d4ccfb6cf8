use serde::{Deserialize, Serialize};

use crate::entities::CartLine;
use crate::store::backend::StorageBackend;
use crate::store::StoreError;

pub const CART_STORAGE_KEY: &str = "cart-storage";

const FREE_SHIPPING_THRESHOLD: f32 = 50.0;
const FLAT_SHIPPING: f32 = 5.99;
const TAX_RATE: f32 = 0.08;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Cart {
        Cart::default()
    }

    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    //same product in the same size and color merges into one line
    pub fn add(&mut self, line: CartLine) {
        if let Some(existing) = self.items.iter_mut().find(|item| {
            item.product_id == line.product_id && item.size == line.size && item.color == line.color
        }) {
            existing.quantity += line.quantity;
        } else {
            self.items.push(line);
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<CartLine> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    //quantity zero drops the line instead of keeping an empty entry
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn total_price(&self) -> f32 {
        self.items
            .iter()
            .map(|item| item.price * item.quantity as f32)
            .sum()
    }

    //shipping is free above the threshold, tax is flat-rate on the subtotal
    pub fn checkout_summary(&self) -> CheckoutSummary {
        let subtotal = self.total_price();
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            0.0
        } else {
            FLAT_SHIPPING
        };
        let tax = subtotal * TAX_RATE;
        CheckoutSummary {
            subtotal,
            shipping,
            tax,
            grand_total: subtotal + shipping + tax,
        }
    }

    pub async fn load(backend: &dyn StorageBackend, key: &str) -> Result<Cart, StoreError> {
        match backend.read(key).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Cart::new()),
        }
    }

    pub async fn save(&self, backend: &dyn StorageBackend, key: &str) -> Result<(), StoreError> {
        let snapshot = serde_json::to_string(self)?;
        backend.write(key, &snapshot).await?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub subtotal: f32,
    pub shipping: f32,
    pub tax: f32,
    pub grand_total: f32,
}
