use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use validator::Validate;

use crate::entities::Product;
use crate::store::{DbClient, StoreError};

pub struct Products<'a> {
    pub(crate) db: &'a DbClient,
}

impl Products<'_> {
    pub async fn find_many(&self, query: ProductQuery) -> Result<Vec<Product>, StoreError> {
        let state = self.db.state.lock().await;
        let mut products = state.products.clone();
        drop(state);

        if let Some(category) = &query.category {
            products.retain(|product| &product.category == category);
        }
        if let Some(featured) = query.featured {
            products.retain(|product| product.featured == featured);
        }
        if let Some(needle) = &query.name_contains {
            let needle = needle.to_lowercase();
            products.retain(|product| product.name.to_lowercase().contains(&needle));
        }
        if let Some(order) = query.order_by {
            match order {
                ProductOrder::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
                ProductOrder::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
                ProductOrder::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
                ProductOrder::Newest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            }
        }
        if let Some(limit) = query.limit {
            products.truncate(limit);
        }
        Ok(products)
    }

    pub async fn find_unique(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let state = self.db.state.lock().await;
        Ok(state
            .products
            .iter()
            .find(|product| product.id == id)
            .cloned())
    }

    pub async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        draft.validate()?;

        let mut state = self.db.state.lock().await;
        let now = Utc::now();
        let mut product = Product {
            id: state.next_id(),
            name: draft.name,
            name_ar: draft.name_ar,
            description: draft.description,
            description_ar: draft.description_ar,
            price: draft.price,
            original_price: draft.original_price,
            discount: None,
            images: draft.images,
            category: draft.category,
            category_ar: draft.category_ar,
            sizes: draft.sizes,
            colors: draft.colors,
            rating: draft.rating,
            review_count: draft.review_count,
            in_stock: draft.in_stock,
            featured: draft.featured,
            tags: draft.tags,
            brand: draft.brand,
            created_at: now,
            updated_at: Some(now),
        };
        product.refresh_discount();

        state.products.push(product.clone());
        match self.db.commit(&state).await {
            Ok(()) => {
                info!(id = %product.id, name = %product.name, "created product");
                Ok(product)
            }
            Err(err) => {
                state.products.pop();
                error!(error = %err, "failed to persist new product");
                Err(err)
            }
        }
    }

    pub async fn update(&self, id: &str, patch: ProductPatch) -> Result<Product, StoreError> {
        patch.validate()?;

        let mut state = self.db.state.lock().await;
        let index = state
            .products
            .iter()
            .position(|product| product.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: "products",
                id: id.to_owned(),
            })?;
        let previous = state.products[index].clone();

        let product = &mut state.products[index];
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(name_ar) = patch.name_ar {
            product.name_ar = name_ar;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(description_ar) = patch.description_ar {
            product.description_ar = description_ar;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(original_price) = patch.original_price {
            product.original_price = Some(original_price);
        }
        if let Some(images) = patch.images {
            product.images = images;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(category_ar) = patch.category_ar {
            product.category_ar = category_ar;
        }
        if let Some(sizes) = patch.sizes {
            product.sizes = sizes;
        }
        if let Some(colors) = patch.colors {
            product.colors = colors;
        }
        if let Some(rating) = patch.rating {
            product.rating = rating;
        }
        if let Some(review_count) = patch.review_count {
            product.review_count = review_count;
        }
        if let Some(in_stock) = patch.in_stock {
            product.in_stock = in_stock;
        }
        if let Some(featured) = patch.featured {
            product.featured = featured;
        }
        if let Some(tags) = patch.tags {
            product.tags = tags;
        }
        if let Some(brand) = patch.brand {
            product.brand = brand;
        }
        product.refresh_discount();
        product.updated_at = Some(Utc::now());
        let updated = product.clone();

        match self.db.commit(&state).await {
            Ok(()) => {
                info!(id = %updated.id, "patched product");
                Ok(updated)
            }
            Err(err) => {
                state.products[index] = previous;
                error!(error = %err, "failed to persist product patch");
                Err(err)
            }
        }
    }

    pub async fn delete(&self, id: &str) -> Result<Product, StoreError> {
        let mut state = self.db.state.lock().await;
        let index = state
            .products
            .iter()
            .position(|product| product.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: "products",
                id: id.to_owned(),
            })?;
        let removed = state.products.remove(index);

        match self.db.commit(&state).await {
            Ok(()) => {
                info!(id = %removed.id, "deleted product");
                Ok(removed)
            }
            Err(err) => {
                state.products.insert(index, removed);
                error!(error = %err, "failed to persist product removal");
                Err(err)
            }
        }
    }
}

//Structs

#[derive(Clone, Debug, Default)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub name_contains: Option<String>,
    pub order_by: Option<ProductOrder>,
    pub limit: Option<usize>,
}

impl ProductQuery {
    pub fn category(mut self, category: impl Into<String>) -> ProductQuery {
        self.category = Some(category.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> ProductQuery {
        self.featured = Some(featured);
        self
    }

    pub fn name_contains(mut self, needle: impl Into<String>) -> ProductQuery {
        self.name_contains = Some(needle.into());
        self
    }

    pub fn order_by(mut self, order: ProductOrder) -> ProductQuery {
        self.order_by = Some(order);
        self
    }

    pub fn limit(mut self, limit: usize) -> ProductQuery {
        self.limit = Some(limit);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductOrder {
    PriceAsc,
    PriceDesc,
    Rating,
    Newest,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    #[validate(length(min = 1))]
    pub name: String,
    pub name_ar: String,
    pub description: String,
    pub description_ar: String,
    #[validate(range(min = 0.0))]
    pub price: f32,
    #[validate(range(min = 0.0))]
    pub original_price: Option<f32>,
    pub images: Vec<String>,
    pub category: String,
    pub category_ar: String,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f32,
    pub review_count: u32,
    pub in_stock: bool,
    pub featured: bool,
    pub tags: Vec<String>,
    pub brand: String,
}

//defaults mirror a blank admin product form
impl Default for ProductDraft {
    fn default() -> ProductDraft {
        ProductDraft {
            name: String::new(),
            name_ar: String::new(),
            description: String::new(),
            description_ar: String::new(),
            price: 0.0,
            original_price: None,
            images: vec![DEFAULT_PRODUCT_IMAGE.to_owned()],
            category: "men".to_owned(),
            category_ar: String::new(),
            sizes: vec!["S".to_owned(), "M".to_owned(), "L".to_owned()],
            colors: vec!["black".to_owned()],
            rating: 4.5,
            review_count: 0,
            in_stock: true,
            featured: false,
            tags: Vec::new(),
            brand: "NextGen".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f32>,
    #[validate(range(min = 0.0))]
    pub original_price: Option<f32>,
    pub images: Option<Vec<String>>,
    pub category: Option<String>,
    pub category_ar: Option<String>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f32>,
    pub review_count: Option<u32>,
    pub in_stock: Option<bool>,
    pub featured: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub brand: Option<String>,
}

static DEFAULT_PRODUCT_IMAGE: &str =
    "https://images.pexels.com/photos/8532616/pexels-photo-8532616.jpeg?auto=compress&cs=tinysrgb&w=800";
