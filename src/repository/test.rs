use std::sync::Mutex;

use crate::domain::item::{Item, NewItem};
use crate::domain::item_price::{ItemPrice, NewItemPrice};
use crate::domain::types::{ItemId, ItemPriceId, ItemUrl, UserEmail, UserId, UserItemId};
use crate::domain::user::{NewUser, User};
use crate::domain::user_item::{NewUserItem, UserItem};
use crate::repository::{
    ItemReader, ItemWriter, RepositoryError, RepositoryResult, UserReader, UserWriter,
};

#[derive(Default)]
struct State {
    users: Vec<User>,
    items: Vec<Item>,
    user_items: Vec<UserItem>,
    prices: Vec<ItemPrice>,
}

/// Simple in-memory repository used for unit tests.
///
/// Mirrors the SQLite store: unique emails, foreign keys on watchlist and
/// price rows, and no uniqueness on item urls.
#[derive(Default)]
pub struct TestRepository {
    state: Mutex<State>,
}

impl TestRepository {
    fn next_id(len: usize) -> i32 {
        len as i32 + 1
    }
}

impl UserReader for TestRepository {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    fn get_user_by_email(&self, email: &UserEmail) -> RepositoryResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| &u.email == email).cloned())
    }

    fn list_user_items(&self, user_id: UserId) -> RepositoryResult<Vec<Item>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .user_items
            .iter()
            .filter(|ui| ui.user_id == user_id)
            .filter_map(|ui| state.items.iter().find(|i| i.id == ui.item_id).cloned())
            .collect())
    }
}

impl UserWriter for TestRepository {
    fn create_user(&self, user: &NewUser) -> RepositoryResult<User> {
        let mut state = self.state.lock().unwrap();
        if state.users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::ConstraintViolation(
                "UniqueViolation: users.email".to_string(),
            ));
        }
        let stored = User {
            id: UserId::new(Self::next_id(state.users.len()))?,
            email: user.email.clone(),
            hashed_password: user.hashed_password.clone(),
            created_at: user.created_at,
        };
        state.users.push(stored.clone());
        Ok(stored)
    }

    fn follow_item(&self, user_item: &NewUserItem) -> RepositoryResult<UserItem> {
        let mut state = self.state.lock().unwrap();
        if !state.users.iter().any(|u| u.id == user_item.user_id)
            || !state.items.iter().any(|i| i.id == user_item.item_id)
        {
            return Err(RepositoryError::ConstraintViolation(
                "ForeignKeyViolation: user_items".to_string(),
            ));
        }
        let stored = UserItem {
            id: UserItemId::new(Self::next_id(state.user_items.len()))?,
            user_id: user_item.user_id,
            item_id: user_item.item_id,
            created_at: user_item.created_at,
        };
        state.user_items.push(stored.clone());
        Ok(stored)
    }
}

impl ItemReader for TestRepository {
    fn get_item_by_id(&self, id: ItemId) -> RepositoryResult<Option<Item>> {
        let state = self.state.lock().unwrap();
        Ok(state.items.iter().find(|i| i.id == id).cloned())
    }

    fn get_item_by_url(&self, url: &ItemUrl) -> RepositoryResult<Option<Item>> {
        let state = self.state.lock().unwrap();
        Ok(state.items.iter().find(|i| &i.url == url).cloned())
    }

    fn list_item_prices(&self, item_id: ItemId) -> RepositoryResult<Vec<ItemPrice>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .prices
            .iter()
            .filter(|p| p.item_id == item_id)
            .cloned()
            .collect())
    }
}

impl ItemWriter for TestRepository {
    fn create_item(&self, item: &NewItem) -> RepositoryResult<Item> {
        let mut state = self.state.lock().unwrap();
        let stored = Item {
            id: ItemId::new(Self::next_id(state.items.len()))?,
            title: item.title.clone(),
            rating: item.rating,
            price: item.price,
            url: item.url.clone(),
            image: item.image.clone(),
            created_at: item.created_at,
        };
        state.items.push(stored.clone());
        Ok(stored)
    }

    fn create_item_price(&self, price: &NewItemPrice) -> RepositoryResult<ItemPrice> {
        let mut state = self.state.lock().unwrap();
        if !state.items.iter().any(|i| i.id == price.item_id) {
            return Err(RepositoryError::ConstraintViolation(
                "ForeignKeyViolation: item_prices".to_string(),
            ));
        }
        let stored = ItemPrice {
            id: ItemPriceId::new(Self::next_id(state.prices.len()))?,
            item_id: price.item_id,
            price: price.price,
            created_at: price.created_at,
        };
        state.prices.push(stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::types::PriceAmount;

    #[test]
    fn dangling_references_are_constraint_violations() {
        let repo = TestRepository::default();
        let now = Utc::now().naive_utc();

        let follow = repo.follow_item(&NewUserItem {
            user_id: UserId::new(1).unwrap(),
            item_id: ItemId::new(1).unwrap(),
            created_at: now,
        });
        assert!(matches!(follow, Err(RepositoryError::ConstraintViolation(_))));

        let price = repo.create_item_price(&NewItemPrice {
            item_id: ItemId::new(7).unwrap(),
            price: PriceAmount::new(1.0).unwrap(),
            created_at: now,
        });
        assert!(matches!(price, Err(RepositoryError::ConstraintViolation(_))));
    }
}
