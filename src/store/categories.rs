use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use validator::Validate;

use crate::entities::{slugify, Category};
use crate::store::{DbClient, DbState, StoreError};

pub struct Categories<'a> {
    pub(crate) db: &'a DbClient,
}

impl Categories<'_> {
    pub async fn find_many(&self, query: CategoryQuery) -> Result<Vec<Category>, StoreError> {
        let state = self.db.state.lock().await;
        let mut categories = state.categories.clone();
        drop(state);

        if let Some(slug) = &query.slug {
            categories.retain(|category| &category.slug == slug);
        }
        if let Some(order) = query.order_by {
            match order {
                CategoryOrder::Name => categories.sort_by(|a, b| a.name.cmp(&b.name)),
                CategoryOrder::ProductsCount => {
                    categories.sort_by(|a, b| b.products_count.cmp(&a.products_count))
                }
            }
        }
        if let Some(limit) = query.limit {
            categories.truncate(limit);
        }
        Ok(categories)
    }

    pub async fn find_unique(&self, id: &str) -> Result<Option<Category>, StoreError> {
        let state = self.db.state.lock().await;
        Ok(state
            .categories
            .iter()
            .find(|category| category.id == id)
            .cloned())
    }

    pub async fn create(&self, draft: CategoryDraft) -> Result<Category, StoreError> {
        draft.validate()?;

        let mut state = self.db.state.lock().await;
        let now = Utc::now();
        let category = Category {
            id: state.next_id(),
            slug: draft.slug.unwrap_or_else(|| slugify(&draft.name)),
            name: draft.name,
            name_ar: draft.name_ar,
            image: draft.image,
            products_count: draft.products_count,
            created_at: Some(now),
            updated_at: Some(now),
        };

        state.categories.push(category.clone());
        match self.db.commit(&state).await {
            Ok(()) => {
                info!(id = %category.id, slug = %category.slug, "created category");
                Ok(category)
            }
            Err(err) => {
                state.categories.pop();
                error!(error = %err, "failed to persist new category");
                Err(err)
            }
        }
    }

    pub async fn update(&self, id: &str, patch: CategoryPatch) -> Result<Category, StoreError> {
        patch.validate()?;

        let mut state = self.db.state.lock().await;
        let index = state
            .categories
            .iter()
            .position(|category| category.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: "categories",
                id: id.to_owned(),
            })?;
        let previous = state.categories[index].clone();

        let category = &mut state.categories[index];
        if let Some(name) = patch.name {
            category.name = name;
        }
        if let Some(name_ar) = patch.name_ar {
            category.name_ar = name_ar;
        }
        if let Some(slug) = patch.slug {
            category.slug = slug;
        }
        if let Some(image) = patch.image {
            category.image = image;
        }
        if let Some(products_count) = patch.products_count {
            category.products_count = products_count;
        }
        category.updated_at = Some(Utc::now());
        let updated = category.clone();

        match self.db.commit(&state).await {
            Ok(()) => {
                info!(id = %updated.id, "patched category");
                Ok(updated)
            }
            Err(err) => {
                state.categories[index] = previous;
                error!(error = %err, "failed to persist category patch");
                Err(err)
            }
        }
    }

    pub async fn delete(&self, id: &str) -> Result<Category, StoreError> {
        let mut state = self.db.state.lock().await;
        let index = state
            .categories
            .iter()
            .position(|category| category.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: "categories",
                id: id.to_owned(),
            })?;
        let removed = state.categories.remove(index);

        match self.db.commit(&state).await {
            Ok(()) => {
                info!(id = %removed.id, "deleted category");
                Ok(removed)
            }
            Err(err) => {
                state.categories.insert(index, removed);
                error!(error = %err, "failed to persist category removal");
                Err(err)
            }
        }
    }

    //recounts products per category slug and persists the new counts
    pub async fn refresh_product_counts(&self) -> Result<Vec<Category>, StoreError> {
        let mut state = self.db.state.lock().await;
        let previous = state.categories.clone();
        let now = Utc::now();
        let mut changed = false;

        let DbState {
            products,
            categories,
            ..
        } = &mut *state;
        for category in categories.iter_mut() {
            let count = products
                .iter()
                .filter(|product| product.category == category.slug)
                .count() as u32;
            if count != category.products_count {
                category.products_count = count;
                category.updated_at = Some(now);
                changed = true;
            }
        }
        if !changed {
            return Ok(state.categories.clone());
        }

        match self.db.commit(&state).await {
            Ok(()) => {
                info!("refreshed category product counts");
                Ok(state.categories.clone())
            }
            Err(err) => {
                state.categories = previous;
                error!(error = %err, "failed to persist category counts");
                Err(err)
            }
        }
    }
}

//Structs

#[derive(Clone, Debug, Default)]
pub struct CategoryQuery {
    pub slug: Option<String>,
    pub order_by: Option<CategoryOrder>,
    pub limit: Option<usize>,
}

impl CategoryQuery {
    pub fn slug(mut self, slug: impl Into<String>) -> CategoryQuery {
        self.slug = Some(slug.into());
        self
    }

    pub fn order_by(mut self, order: CategoryOrder) -> CategoryQuery {
        self.order_by = Some(order);
        self
    }

    pub fn limit(mut self, limit: usize) -> CategoryQuery {
        self.limit = Some(limit);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryOrder {
    Name,
    ProductsCount,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryDraft {
    #[validate(length(min = 1))]
    pub name: String,
    pub name_ar: String,
    //derived from the name when omitted
    #[validate(regex(path = *SLUG_REGEX))]
    pub slug: Option<String>,
    pub image: String,
    pub products_count: u32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryPatch {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub name_ar: Option<String>,
    #[validate(regex(path = *SLUG_REGEX))]
    pub slug: Option<String>,
    pub image: Option<String>,
    pub products_count: Option<u32>,
}

static SLUG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());
