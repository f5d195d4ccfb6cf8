//! Storefront logic layer: catalog querying, a cart, and a mock
//! persistence store backed by a key-value snapshot.

pub mod cart;
pub mod catalog;
pub mod entities;
pub mod store;

pub use cart::{Cart, CheckoutSummary, CART_STORAGE_KEY};
pub use catalog::{search_products, CatalogQuery, FilterOptions, SortKey};
pub use entities::{
    slugify, Address, AddressKind, CartLine, Category, Order, OrderStatus, Product, User,
};
pub use store::backend::{FileBackend, MemoryBackend, StorageBackend, StorageError};
pub use store::{AdminStats, DbClient, DbConfig, StoreError};
