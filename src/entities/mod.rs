pub mod cart;
pub mod category;
pub mod order;
pub mod product;
pub mod user;

pub use cart::CartLine;
pub use category::{slugify, Category};
pub use order::{Address, AddressKind, Order, OrderStatus};
pub use product::Product;
pub use user::User;
