use crate::domain::types::{UserEmail, UserId};
use crate::domain::user::User;
use crate::dto::users::{UserDto, UserItemDto};
use crate::forms::users::{CreateUserForm, FollowItemForm};
use crate::repository::{ItemReader, UserReader, UserWriter};

use super::items::item_with_prices;
use super::{ServiceError, ServiceResult, repository_failure};

fn user_with_items<R>(user: User, repo: &R) -> ServiceResult<UserDto>
where
    R: UserReader + ItemReader,
{
    let items = repo
        .list_user_items(user.id)
        .map_err(|e| repository_failure("list user items", e))?
        .into_iter()
        .map(|item| item_with_prices(item, repo))
        .collect::<ServiceResult<Vec<_>>>()?;
    Ok(UserDto::new(user, items))
}

/// Registers a user.
///
/// There is no pre-check for an existing email; the unique index on
/// `users.email` turns a duplicate into [`ServiceError::Conflict`].
pub fn create_user<R>(form: CreateUserForm, repo: &R) -> ServiceResult<UserDto>
where
    R: UserWriter,
{
    let new_user = form.into_new_user()?;

    let user = repo
        .create_user(&new_user)
        .map_err(|e| repository_failure("create user", e))?;

    Ok(UserDto::new(user, vec![]))
}

pub fn get_user_by_id<R>(user_id: i32, repo: &R) -> ServiceResult<UserDto>
where
    R: UserReader + ItemReader,
{
    let user_id = UserId::new(user_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_user_by_id(user_id) {
        Ok(Some(user)) => user_with_items(user, repo),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(repository_failure("get user by id", e)),
    }
}

pub fn get_user_by_email<R>(email: &str, repo: &R) -> ServiceResult<UserDto>
where
    R: UserReader + ItemReader,
{
    let email = UserEmail::new(email).map_err(|_| ServiceError::NotFound)?;

    match repo.get_user_by_email(&email) {
        Ok(Some(user)) => user_with_items(user, repo),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(repository_failure("get user by email", e)),
    }
}

/// Adds an item to a user's watchlist. Both sides must already exist.
pub fn follow_item<R>(user_id: i32, form: FollowItemForm, repo: &R) -> ServiceResult<UserItemDto>
where
    R: UserReader + UserWriter + ItemReader,
{
    let user_id = UserId::new(user_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_user_by_id(user_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => return Err(repository_failure("get user by id", e)),
    }

    let new_user_item = form.into_new_user_item(user_id)?;

    match repo.get_item_by_id(new_user_item.item_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => return Err(repository_failure("get item by id", e)),
    }

    let user_item = repo
        .follow_item(&new_user_item)
        .map_err(|e| repository_failure("follow item", e))?;

    Ok(user_item.into())
}
