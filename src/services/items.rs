use crate::domain::item::Item;
use crate::domain::types::{ItemId, ItemUrl};
use crate::dto::items::{ItemDto, ItemPriceDto};
use crate::forms::items::{CreateItemForm, RecordPriceForm};
use crate::repository::{ItemReader, ItemWriter};

use super::{ServiceError, ServiceResult, repository_failure};

/// Attach the price history to an item.
pub(crate) fn item_with_prices<R>(item: Item, repo: &R) -> ServiceResult<ItemDto>
where
    R: ItemReader,
{
    let prices = repo
        .list_item_prices(item.id)
        .map_err(|e| repository_failure("list item prices", e))?;
    Ok(ItemDto::new(item, prices))
}

/// Creates an item from its url.
///
/// No lookup happens beforehand, so posting the same url twice stores two
/// items with distinct ids.
pub fn create_item<R>(form: CreateItemForm, repo: &R) -> ServiceResult<ItemDto>
where
    R: ItemWriter,
{
    let new_item = form.into_new_item()?;

    let item = repo
        .create_item(&new_item)
        .map_err(|e| repository_failure("create item", e))?;

    Ok(ItemDto::new(item, vec![]))
}

pub fn get_item_by_id<R>(item_id: i32, repo: &R) -> ServiceResult<ItemDto>
where
    R: ItemReader,
{
    let item_id = ItemId::new(item_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_item_by_id(item_id) {
        Ok(Some(item)) => item_with_prices(item, repo),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(repository_failure("get item by id", e)),
    }
}

pub fn get_item_by_url<R>(url: &str, repo: &R) -> ServiceResult<ItemDto>
where
    R: ItemReader,
{
    let url = ItemUrl::new(url).map_err(|_| ServiceError::NotFound)?;

    match repo.get_item_by_url(&url) {
        Ok(Some(item)) => item_with_prices(item, repo),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(repository_failure("get item by url", e)),
    }
}

/// Appends a price observation to an existing item's history.
pub fn record_item_price<R>(
    item_id: i32,
    form: RecordPriceForm,
    repo: &R,
) -> ServiceResult<ItemPriceDto>
where
    R: ItemReader + ItemWriter,
{
    let item_id = ItemId::new(item_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_item_by_id(item_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => return Err(repository_failure("get item by id", e)),
    }

    let new_price = form.into_new_item_price(item_id)?;
    let price = repo
        .create_item_price(&new_price)
        .map_err(|e| repository_failure("record item price", e))?;

    Ok(price.into())
}
