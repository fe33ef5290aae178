//! Diesel row types and their conversions to domain entities.

pub mod config;
pub mod item;
pub mod item_price;
pub mod user;
pub mod user_item;
