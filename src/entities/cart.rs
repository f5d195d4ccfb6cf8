use serde::{Deserialize, Serialize};

use crate::entities::product::Product;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub name_ar: String,
    pub price: f32,
    pub image: String,
    pub size: String,
    pub color: String,
    pub quantity: u32,
}

impl CartLine {
    //at most one line may exist per (product, size, color) triple
    pub fn line_id(product_id: &str, size: &str, color: &str) -> String {
        format!("{}-{}-{}", product_id, size, color)
    }

    pub fn from_product(product: &Product, size: &str, color: &str, quantity: u32) -> CartLine {
        CartLine {
            id: CartLine::line_id(&product.id, size, color),
            product_id: product.id.clone(),
            name: product.name.clone(),
            name_ar: product.name_ar.clone(),
            price: product.price,
            image: product.images.first().cloned().unwrap_or_default(),
            size: size.to_owned(),
            color: color.to_owned(),
            quantity,
        }
    }
}
