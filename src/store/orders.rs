use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use validator::Validate;

use crate::cart::Cart;
use crate::entities::{Address, CartLine, Order, OrderStatus};
use crate::store::{DbClient, StoreError};

pub struct Orders<'a> {
    pub(crate) db: &'a DbClient,
}

impl Orders<'_> {
    pub async fn find_many(&self, query: OrderQuery) -> Result<Vec<Order>, StoreError> {
        let state = self.db.state.lock().await;
        let mut orders = state.orders.clone();
        drop(state);

        if let Some(user_id) = &query.user_id {
            orders.retain(|order| &order.user_id == user_id);
        }
        if let Some(status) = query.status {
            orders.retain(|order| order.status == status);
        }
        if let Some(order_by) = query.order_by {
            match order_by {
                OrderOrder::Newest => orders.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
                OrderOrder::Oldest => orders.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            }
        }
        if let Some(limit) = query.limit {
            orders.truncate(limit);
        }
        Ok(orders)
    }

    pub async fn find_unique(&self, id: &str) -> Result<Option<Order>, StoreError> {
        let state = self.db.state.lock().await;
        Ok(state.orders.iter().find(|order| order.id == id).cloned())
    }

    pub async fn create(&self, draft: OrderDraft) -> Result<Order, StoreError> {
        draft.validate()?;

        let mut state = self.db.state.lock().await;
        let now = Utc::now();
        let order = Order {
            id: state.next_id(),
            user_id: draft.user_id,
            items: draft.items,
            total: draft.total,
            status: draft.status,
            shipping_address: draft.shipping_address,
            payment_method: draft.payment_method,
            created_at: now,
            updated_at: now,
        };

        state.orders.push(order.clone());
        match self.db.commit(&state).await {
            Ok(()) => {
                info!(id = %order.id, total = order.total, "created order");
                Ok(order)
            }
            Err(err) => {
                state.orders.pop();
                error!(error = %err, "failed to persist new order");
                Err(err)
            }
        }
    }

    pub async fn update(&self, id: &str, patch: OrderPatch) -> Result<Order, StoreError> {
        let mut state = self.db.state.lock().await;
        let index = state
            .orders
            .iter()
            .position(|order| order.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: "orders",
                id: id.to_owned(),
            })?;
        let previous = state.orders[index].clone();

        let order = &mut state.orders[index];
        if let Some(status) = patch.status {
            order.status = status;
        }
        if let Some(shipping_address) = patch.shipping_address {
            order.shipping_address = shipping_address;
        }
        if let Some(payment_method) = patch.payment_method {
            order.payment_method = payment_method;
        }
        order.updated_at = Utc::now();
        let updated = order.clone();

        match self.db.commit(&state).await {
            Ok(()) => {
                info!(id = %updated.id, status = %updated.status, "patched order");
                Ok(updated)
            }
            Err(err) => {
                state.orders[index] = previous;
                error!(error = %err, "failed to persist order patch");
                Err(err)
            }
        }
    }

    pub async fn delete(&self, id: &str) -> Result<Order, StoreError> {
        let mut state = self.db.state.lock().await;
        let index = state
            .orders
            .iter()
            .position(|order| order.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: "orders",
                id: id.to_owned(),
            })?;
        let removed = state.orders.remove(index);

        match self.db.commit(&state).await {
            Ok(()) => {
                info!(id = %removed.id, "deleted order");
                Ok(removed)
            }
            Err(err) => {
                state.orders.insert(index, removed);
                error!(error = %err, "failed to persist order removal");
                Err(err)
            }
        }
    }
}

//Structs

#[derive(Clone, Debug, Default)]
pub struct OrderQuery {
    pub user_id: Option<String>,
    pub status: Option<OrderStatus>,
    pub order_by: Option<OrderOrder>,
    pub limit: Option<usize>,
}

impl OrderQuery {
    pub fn user_id(mut self, user_id: impl Into<String>) -> OrderQuery {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn status(mut self, status: OrderStatus) -> OrderQuery {
        self.status = Some(status);
        self
    }

    pub fn order_by(mut self, order: OrderOrder) -> OrderQuery {
        self.order_by = Some(order);
        self
    }

    pub fn limit(mut self, limit: usize) -> OrderQuery {
        self.limit = Some(limit);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderOrder {
    Newest,
    Oldest,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub user_id: String,
    #[validate(length(min = 1))]
    pub items: Vec<CartLine>,
    #[validate(range(min = 0.0))]
    pub total: f32,
    #[serde(default)]
    pub status: OrderStatus,
    pub shipping_address: Address,
    pub payment_method: String,
}

impl OrderDraft {
    //snapshots the cart lines and total at checkout time
    pub fn from_cart(
        user_id: impl Into<String>,
        cart: &Cart,
        shipping_address: Address,
        payment_method: impl Into<String>,
    ) -> OrderDraft {
        OrderDraft {
            user_id: user_id.into(),
            items: cart.items().to_vec(),
            total: cart.total_price(),
            status: OrderStatus::Pending,
            shipping_address,
            payment_method: payment_method.into(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderPatch {
    pub status: Option<OrderStatus>,
    pub shipping_address: Option<Address>,
    pub payment_method: Option<String>,
}
