use crate::db::{DbConnection, DbPool};
use crate::domain::item::{Item, NewItem};
use crate::domain::item_price::{ItemPrice, NewItemPrice};
use crate::domain::types::{ItemId, ItemUrl, UserEmail, UserId};
use crate::domain::user::{NewUser, User};
use crate::domain::user_item::{NewUserItem, UserItem};

pub mod errors;
pub mod item;
#[cfg(test)]
pub mod test;
pub mod user;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for user entities.
pub trait UserReader {
    /// Retrieve a user by its identifier.
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
    /// Retrieve a user by email address.
    fn get_user_by_email(&self, email: &UserEmail) -> RepositoryResult<Option<User>>;
    /// List the items a user follows, oldest follow first.
    fn list_user_items(&self, user_id: UserId) -> RepositoryResult<Vec<Item>>;
}

/// Write operations for users and their watchlists.
///
/// Nothing is checked for duplicates before inserting; only store-level
/// constraints can reject a row.
pub trait UserWriter {
    /// Persist a new user and return the stored row.
    fn create_user(&self, user: &NewUser) -> RepositoryResult<User>;
    /// Record that a user follows an item.
    fn follow_item(&self, user_item: &NewUserItem) -> RepositoryResult<UserItem>;
}

/// Read-only operations for items and their price history.
pub trait ItemReader {
    /// Retrieve an item by its identifier.
    fn get_item_by_id(&self, id: ItemId) -> RepositoryResult<Option<Item>>;
    /// Retrieve the first item stored under `url`.
    fn get_item_by_url(&self, url: &ItemUrl) -> RepositoryResult<Option<Item>>;
    /// Price history of an item, oldest observation first.
    fn list_item_prices(&self, item_id: ItemId) -> RepositoryResult<Vec<ItemPrice>>;
}

/// Write operations for items. Price history is append-only.
pub trait ItemWriter {
    /// Persist a new item and return the stored row.
    fn create_item(&self, item: &NewItem) -> RepositoryResult<Item>;
    /// Append a price observation to an item's history.
    fn create_item_price(&self, price: &NewItemPrice) -> RepositoryResult<ItemPrice>;
}
