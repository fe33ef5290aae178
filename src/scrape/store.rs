//! Scraper-side SQLite store.
//!
//! Every call opens its own connection and creates the tables it needs on
//! first use. Saving a product always inserts a new `products` row; nothing
//! is merged by url.

use chrono::{NaiveDateTime, Utc};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use log::info;
use serde::Serialize;

use crate::scrape::{ScrapeError, ScrapeResult, ScrapedProduct};

mod schema {
    diesel::table! {
        products (id) {
            id -> Integer,
            title -> Text,
            rating -> Text,
            url -> Text,
            image -> Text,
        }
    }

    diesel::table! {
        product_prices (id) {
            id -> Integer,
            product_id -> Integer,
            price -> Text,
            date -> Timestamp,
        }
    }

    diesel::joinable!(product_prices -> products (product_id));
    diesel::allow_tables_to_appear_in_same_query!(product_prices, products);
}

use schema::{product_prices, products};

const CREATE_PRODUCTS: &str = "CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    rating TEXT NOT NULL,
    url TEXT NOT NULL,
    image TEXT NOT NULL)";

const CREATE_PRODUCT_PRICES: &str = "CREATE TABLE IF NOT EXISTS product_prices (
    id INTEGER PRIMARY KEY,
    product_id INTEGER NOT NULL,
    price TEXT NOT NULL,
    date TEXT NOT NULL,
    FOREIGN KEY(product_id) REFERENCES products(id))";

/// A row of the `products` table.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = products)]
pub struct StoredProduct {
    pub id: i32,
    pub title: String,
    pub rating: String,
    pub url: String,
    pub image: String,
}

#[derive(Insertable)]
#[diesel(table_name = products)]
struct NewStoredProduct<'a> {
    title: &'a str,
    rating: &'a str,
    url: &'a str,
    image: &'a str,
}

impl<'a> From<&'a ScrapedProduct> for NewStoredProduct<'a> {
    fn from(product: &'a ScrapedProduct) -> Self {
        Self {
            title: &product.title,
            rating: &product.rating,
            url: &product.url,
            image: &product.image,
        }
    }
}

/// A row of the `product_prices` table: one timestamped observation.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = product_prices)]
pub struct StoredPrice {
    pub id: i32,
    pub product_id: i32,
    pub price: String,
    pub date: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = product_prices)]
struct NewStoredPrice<'a> {
    product_id: i32,
    price: &'a str,
    date: NaiveDateTime,
}

/// Handle on the scraper's SQLite file.
#[derive(Debug, Clone)]
pub struct ProductStore {
    database_path: String,
}

impl ProductStore {
    pub fn new(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    fn connect(&self) -> ScrapeResult<SqliteConnection> {
        Ok(SqliteConnection::establish(&self.database_path)?)
    }

    /// Insert `product` and append its current price.
    ///
    /// The two steps use separate connections and are not atomic together: if
    /// the price step fails the product row stays behind.
    pub fn save_product(&self, product: &ScrapedProduct) -> ScrapeResult<StoredPrice> {
        {
            let mut conn = self.connect()?;
            conn.batch_execute(CREATE_PRODUCTS)?;
            diesel::insert_into(products::table)
                .values(NewStoredProduct::from(product))
                .execute(&mut conn)?;
        }

        let price = self.save_product_price(product)?;

        info!("Saved product: {}", product.title);
        Ok(price)
    }

    /// Append a price observation for the first stored product with
    /// `product.url`, stamped with the current time.
    ///
    /// Fails with [`ScrapeError::Lookup`] when no such product row exists.
    pub fn save_product_price(&self, product: &ScrapedProduct) -> ScrapeResult<StoredPrice> {
        let mut conn = self.connect()?;
        conn.batch_execute(CREATE_PRODUCT_PRICES)?;

        let product_id = products::table
            .filter(products::url.eq(&product.url))
            .order(products::id.asc())
            .select(products::id)
            .first::<i32>(&mut conn)
            .optional()?
            .ok_or_else(|| ScrapeError::Lookup {
                url: product.url.clone(),
            })?;

        let price = diesel::insert_into(product_prices::table)
            .values(NewStoredPrice {
                product_id,
                price: &product.price,
                date: Utc::now().naive_utc(),
            })
            .returning(StoredPrice::as_returning())
            .get_result(&mut conn)?;

        Ok(price)
    }

    /// Every `products` row stored under `url`, oldest first.
    pub fn products_by_url(&self, url: &str) -> ScrapeResult<Vec<StoredProduct>> {
        let mut conn = self.connect()?;
        conn.batch_execute(CREATE_PRODUCTS)?;

        Ok(products::table
            .filter(products::url.eq(url))
            .order(products::id.asc())
            .select(StoredProduct::as_select())
            .load(&mut conn)?)
    }

    /// Price history recorded for `url`, oldest observation first.
    pub fn price_history(&self, url: &str) -> ScrapeResult<Vec<StoredPrice>> {
        let mut conn = self.connect()?;
        conn.batch_execute(CREATE_PRODUCTS)?;
        conn.batch_execute(CREATE_PRODUCT_PRICES)?;

        Ok(product_prices::table
            .inner_join(products::table)
            .filter(products::url.eq(url))
            .order((product_prices::date.asc(), product_prices::id.asc()))
            .select(StoredPrice::as_select())
            .load(&mut conn)?)
    }
}
