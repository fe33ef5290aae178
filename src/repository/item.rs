use diesel::prelude::*;

use crate::domain::item::{Item, NewItem};
use crate::domain::item_price::{ItemPrice, NewItemPrice};
use crate::domain::types::{ItemId, ItemUrl};
use crate::models::item::{Item as DbItem, NewItem as DbNewItem};
use crate::models::item_price::{ItemPrice as DbItemPrice, NewItemPrice as DbNewItemPrice};
use crate::repository::{DieselRepository, ItemReader, ItemWriter, RepositoryResult};

impl ItemReader for DieselRepository {
    fn get_item_by_id(&self, id: ItemId) -> RepositoryResult<Option<Item>> {
        use crate::schema::items;

        let mut conn = self.conn()?;

        let item = items::table
            .filter(items::id.eq(id.get()))
            .select(DbItem::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(item.map(TryInto::try_into).transpose()?)
    }

    fn get_item_by_url(&self, url: &ItemUrl) -> RepositoryResult<Option<Item>> {
        use crate::schema::items;

        let mut conn = self.conn()?;

        // Urls are not unique; the oldest row wins.
        let item = items::table
            .filter(items::url.eq(url.as_str()))
            .order(items::id.asc())
            .select(DbItem::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(item.map(TryInto::try_into).transpose()?)
    }

    fn list_item_prices(&self, item_id: ItemId) -> RepositoryResult<Vec<ItemPrice>> {
        use crate::schema::item_prices;

        let mut conn = self.conn()?;

        let results = item_prices::table
            .filter(item_prices::item_id.eq(item_id.get()))
            .order((item_prices::created_at.asc(), item_prices::id.asc()))
            .select(DbItemPrice::as_select())
            .load(&mut conn)?;

        let results = results
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<ItemPrice>, _>>()?;
        Ok(results)
    }
}

impl ItemWriter for DieselRepository {
    fn create_item(&self, item: &NewItem) -> RepositoryResult<Item> {
        use crate::schema::items;

        let mut conn = self.conn()?;
        let db_item: DbNewItem = item.into();

        let stored = diesel::insert_into(items::table)
            .values(&db_item)
            .returning(DbItem::as_returning())
            .get_result(&mut conn)?;

        Ok(stored.try_into()?)
    }

    fn create_item_price(&self, price: &NewItemPrice) -> RepositoryResult<ItemPrice> {
        use crate::schema::item_prices;

        let mut conn = self.conn()?;
        let db_price: DbNewItemPrice = price.into();

        let stored = diesel::insert_into(item_prices::table)
            .values(&db_price)
            .returning(DbItemPrice::as_returning())
            .get_result(&mut conn)?;

        Ok(stored.try_into()?)
    }
}
