use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use validator::Validate;

use crate::entities::{Address, User};
use crate::store::{DbClient, StoreError};

pub struct Users<'a> {
    pub(crate) db: &'a DbClient,
}

impl Users<'_> {
    pub async fn find_many(&self, query: UserQuery) -> Result<Vec<User>, StoreError> {
        let state = self.db.state.lock().await;
        let mut users = state.users.clone();
        drop(state);

        if let Some(email) = &query.email {
            users.retain(|user| &user.email == email);
        }
        if let Some(limit) = query.limit {
            users.truncate(limit);
        }
        Ok(users)
    }

    pub async fn find_unique(&self, id: &str) -> Result<Option<User>, StoreError> {
        let state = self.db.state.lock().await;
        Ok(state.users.iter().find(|user| user.id == id).cloned())
    }

    pub async fn create(&self, draft: UserDraft) -> Result<User, StoreError> {
        draft.validate()?;

        let mut state = self.db.state.lock().await;
        let now = Utc::now();
        let user = User {
            id: state.next_id(),
            email: draft.email,
            first_name: draft.first_name,
            last_name: draft.last_name,
            phone: draft.phone,
            avatar: draft.avatar,
            addresses: draft.addresses,
            orders: Vec::new(),
            wishlist: draft.wishlist,
            created_at: now,
            updated_at: Some(now),
        };

        state.users.push(user.clone());
        match self.db.commit(&state).await {
            Ok(()) => {
                info!(id = %user.id, email = %user.email, "created user");
                Ok(user)
            }
            Err(err) => {
                state.users.pop();
                error!(error = %err, "failed to persist new user");
                Err(err)
            }
        }
    }

    pub async fn update(&self, id: &str, patch: UserPatch) -> Result<User, StoreError> {
        patch.validate()?;

        let mut state = self.db.state.lock().await;
        let index = state
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: "users",
                id: id.to_owned(),
            })?;
        let previous = state.users[index].clone();

        let user = &mut state.users[index];
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(first_name) = patch.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            user.last_name = last_name;
        }
        if let Some(phone) = patch.phone {
            user.phone = Some(phone);
        }
        if let Some(avatar) = patch.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(addresses) = patch.addresses {
            user.addresses = addresses;
        }
        if let Some(wishlist) = patch.wishlist {
            user.wishlist = wishlist;
        }
        user.updated_at = Some(Utc::now());
        let updated = user.clone();

        match self.db.commit(&state).await {
            Ok(()) => {
                info!(id = %updated.id, "patched user");
                Ok(updated)
            }
            Err(err) => {
                state.users[index] = previous;
                error!(error = %err, "failed to persist user patch");
                Err(err)
            }
        }
    }

    pub async fn delete(&self, id: &str) -> Result<User, StoreError> {
        let mut state = self.db.state.lock().await;
        let index = state
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: "users",
                id: id.to_owned(),
            })?;
        let removed = state.users.remove(index);

        match self.db.commit(&state).await {
            Ok(()) => {
                info!(id = %removed.id, "deleted user");
                Ok(removed)
            }
            Err(err) => {
                state.users.insert(index, removed);
                error!(error = %err, "failed to persist user removal");
                Err(err)
            }
        }
    }

    pub async fn add_to_wishlist(&self, user_id: &str, product_id: &str) -> Result<User, StoreError> {
        let mut state = self.db.state.lock().await;
        let index = state
            .users
            .iter()
            .position(|user| user.id == user_id)
            .ok_or_else(|| StoreError::NotFound {
                collection: "users",
                id: user_id.to_owned(),
            })?;
        let previous = state.users[index].clone();

        let user = &mut state.users[index];
        user.add_to_wishlist(product_id);
        user.updated_at = Some(Utc::now());
        let updated = user.clone();

        match self.db.commit(&state).await {
            Ok(()) => {
                info!(user = %updated.id, product = %product_id, "added wishlist entry");
                Ok(updated)
            }
            Err(err) => {
                state.users[index] = previous;
                error!(error = %err, "failed to persist wishlist entry");
                Err(err)
            }
        }
    }

    pub async fn remove_from_wishlist(
        &self,
        user_id: &str,
        product_id: &str,
    ) -> Result<User, StoreError> {
        let mut state = self.db.state.lock().await;
        let index = state
            .users
            .iter()
            .position(|user| user.id == user_id)
            .ok_or_else(|| StoreError::NotFound {
                collection: "users",
                id: user_id.to_owned(),
            })?;
        let previous = state.users[index].clone();

        let user = &mut state.users[index];
        user.remove_from_wishlist(product_id);
        user.updated_at = Some(Utc::now());
        let updated = user.clone();

        match self.db.commit(&state).await {
            Ok(()) => {
                info!(user = %updated.id, product = %product_id, "removed wishlist entry");
                Ok(updated)
            }
            Err(err) => {
                state.users[index] = previous;
                error!(error = %err, "failed to persist wishlist removal");
                Err(err)
            }
        }
    }
}

//Structs

#[derive(Clone, Debug, Default)]
pub struct UserQuery {
    pub email: Option<String>,
    pub limit: Option<usize>,
}

impl UserQuery {
    pub fn email(mut self, email: impl Into<String>) -> UserQuery {
        self.email = Some(email.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> UserQuery {
        self.limit = Some(limit);
        self
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDraft {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub addresses: Vec<Address>,
    pub wishlist: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub addresses: Option<Vec<Address>>,
    pub wishlist: Option<Vec<String>>,
}
