use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::item::{Item as DomainItem, NewItem as DomainNewItem};
use crate::domain::types::{
    ImageUrl, ItemRating, ItemTitle, ItemUrl, PriceAmount, TypeConstraintError,
};

/// Diesel model representing a row in the `items` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::items)]
pub struct Item {
    pub id: i32,
    pub title: Option<String>,
    pub rating: Option<f64>,
    pub price: Option<f64>,
    pub url: String,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Item`].
#[derive(Insertable)]
#[diesel(table_name = crate::schema::items)]
pub struct NewItem<'a> {
    pub title: Option<&'a str>,
    pub rating: Option<f64>,
    pub price: Option<f64>,
    pub url: &'a str,
    pub image: Option<&'a str>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Item> for DomainItem {
    type Error = TypeConstraintError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        Ok(Self {
            id: item.id.try_into()?,
            title: item.title.map(ItemTitle::new).transpose()?,
            rating: item.rating.map(ItemRating::new).transpose()?,
            price: item.price.map(PriceAmount::new).transpose()?,
            url: ItemUrl::new(item.url)?,
            image: item.image.map(ImageUrl::new).transpose()?,
            created_at: item.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewItem> for NewItem<'a> {
    fn from(item: &'a DomainNewItem) -> Self {
        Self {
            title: item.title.as_ref().map(ItemTitle::as_str),
            rating: item.rating.map(ItemRating::get),
            price: item.price.map(PriceAmount::get),
            url: item.url.as_str(),
            image: item.image.as_ref().map(ImageUrl::as_str),
            created_at: item.created_at,
        }
    }
}
