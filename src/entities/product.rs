use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub name_ar: String,
    pub description: String,
    pub description_ar: String,
    pub price: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
    pub images: Vec<String>,
    pub category: String,
    pub category_ar: String,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub rating: f32,
    pub review_count: u32,
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub brand: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    //discount is derived from the two prices, never taken from input
    pub fn refresh_discount(&mut self) {
        self.discount = match self.original_price {
            Some(original) if original > self.price => {
                Some(((original - self.price) / original * 100.0).round() as u32)
            }
            _ => None,
        };
    }

    pub fn on_sale(&self) -> bool {
        self.discount.unwrap_or(0) > 0
    }
}
