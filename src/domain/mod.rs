//! Domain entities and validated value types shared by every layer.

pub mod item;
pub mod item_price;
pub mod types;
pub mod user;
pub mod user_item;
