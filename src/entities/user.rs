use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::order::{Address, Order};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub addresses: Vec<Address>,
    pub orders: Vec<Order>,
    pub wishlist: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    //wishlist keeps set semantics: adding an already wished product is a no-op
    pub fn add_to_wishlist(&mut self, product_id: &str) {
        if !self.wishlist.iter().any(|id| id == product_id) {
            self.wishlist.push(product_id.to_owned());
        }
    }

    pub fn remove_from_wishlist(&mut self, product_id: &str) {
        self.wishlist.retain(|id| id != product_id);
    }
}
