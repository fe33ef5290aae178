use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::item_price::{ItemPrice as DomainItemPrice, NewItemPrice as DomainNewItemPrice};
use crate::domain::types::{PriceAmount, TypeConstraintError};

/// Diesel model representing a row in the `item_prices` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::item_prices)]
pub struct ItemPrice {
    pub id: i32,
    pub item_id: i32,
    pub price: f64,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`ItemPrice`].
#[derive(Insertable)]
#[diesel(table_name = crate::schema::item_prices)]
pub struct NewItemPrice {
    pub item_id: i32,
    pub price: f64,
    pub created_at: NaiveDateTime,
}

impl TryFrom<ItemPrice> for DomainItemPrice {
    type Error = TypeConstraintError;

    fn try_from(price: ItemPrice) -> Result<Self, Self::Error> {
        Ok(Self {
            id: price.id.try_into()?,
            item_id: price.item_id.try_into()?,
            price: PriceAmount::new(price.price)?,
            created_at: price.created_at,
        })
    }
}

impl From<&DomainNewItemPrice> for NewItemPrice {
    fn from(price: &DomainNewItemPrice) -> Self {
        Self {
            item_id: price.item_id.get(),
            price: price.price.get(),
            created_at: price.created_at,
        }
    }
}
