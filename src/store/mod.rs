pub mod backend;
pub mod categories;
pub mod orders;
pub mod products;
pub mod seed;
pub mod users;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::info;

use crate::entities::{Category, Order, Product, User};
use backend::{StorageBackend, StorageError};
use categories::Categories;
use orders::Orders;
use products::Products;
use users::Users;

pub struct DbConfig {
    pub storage_key: String,
    pub seed_on_empty: bool,
}

impl Default for DbConfig {
    fn default() -> DbConfig {
        DbConfig {
            storage_key: "vitrina-db".to_owned(),
            seed_on_empty: true,
        }
    }
}

//the whole database is one JSON document under a single storage key
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct DbState {
    pub(crate) products: Vec<Product>,
    pub(crate) categories: Vec<Category>,
    pub(crate) orders: Vec<Order>,
    pub(crate) users: Vec<User>,
    #[serde(skip)]
    pub(crate) last_id: i64,
}

impl DbState {
    //wall-clock millis, bumped past the previous id when two writes
    //land inside the same millisecond
    pub(crate) fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last_id = if now > self.last_id {
            now
        } else {
            self.last_id + 1
        };
        self.last_id.to_string()
    }
}

pub struct DbClient {
    backend: Box<dyn StorageBackend>,
    key: String,
    pub(crate) state: Mutex<DbState>,
}

impl std::fmt::Debug for DbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbClient")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl DbClient {
    pub async fn open<B>(backend: B, config: DbConfig) -> Result<DbClient, StoreError>
    where
        B: StorageBackend + 'static,
    {
        let backend: Box<dyn StorageBackend> = Box::new(backend);
        let state = match backend.read(&config.storage_key).await? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => DbState::default(),
        };
        let db = DbClient {
            backend,
            key: config.storage_key,
            state: Mutex::new(state),
        };
        if config.seed_on_empty {
            db.seed().await?;
        }
        Ok(db)
    }

    //collection handles
    pub fn products(&self) -> Products<'_> {
        Products { db: self }
    }

    pub fn categories(&self) -> Categories<'_> {
        Categories { db: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { db: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { db: self }
    }

    //fills only the collections that are still empty, so reopening a
    //store that already holds data never overwrites it
    pub async fn seed(&self) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        let fill_products = state.products.is_empty();
        let fill_categories = state.categories.is_empty();
        let fill_orders = state.orders.is_empty();
        if fill_products {
            state.products = seed::sample_products();
        }
        if fill_categories {
            state.categories = seed::sample_categories();
        }
        if fill_orders {
            state.orders = seed::sample_orders();
        }
        if !(fill_products || fill_categories || fill_orders) {
            return Ok(());
        }
        if let Err(err) = self.commit(&state).await {
            if fill_products {
                state.products.clear();
            }
            if fill_categories {
                state.categories.clear();
            }
            if fill_orders {
                state.orders.clear();
            }
            return Err(err);
        }
        info!(
            products = state.products.len(),
            categories = state.categories.len(),
            orders = state.orders.len(),
            "seeded empty collections with sample data"
        );
        Ok(())
    }

    pub async fn stats(&self) -> AdminStats {
        let state = self.state.lock().await;
        AdminStats {
            total_products: state.products.len(),
            total_orders: state.orders.len(),
            total_customers: state.users.len(),
            total_revenue: state.orders.iter().map(|order| order.total).sum(),
        }
    }

    //serializes the full snapshot and writes it before the operation
    //resolves; callers restore their in-memory change when this fails
    pub(crate) async fn commit(&self, state: &DbState) -> Result<(), StoreError> {
        let snapshot = serde_json::to_string(state)?;
        self.backend.write(&self.key, &snapshot).await?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_products: usize,
    pub total_orders: usize,
    pub total_customers: usize,
    pub total_revenue: f32,
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no {collection} record with {id} id was found")]
    NotFound {
        collection: &'static str,
        id: String,
    },
    #[error("storage backend failure: {0}")]
    Storage(#[from] StorageError),
    #[error("invalid database snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("failed to validate: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
