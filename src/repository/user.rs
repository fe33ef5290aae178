use diesel::prelude::*;

use crate::domain::item::Item;
use crate::domain::types::{UserEmail, UserId};
use crate::domain::user::{NewUser, User};
use crate::domain::user_item::{NewUserItem, UserItem};
use crate::models::item::Item as DbItem;
use crate::models::user::{NewUser as DbNewUser, User as DbUser};
use crate::models::user_item::{NewUserItem as DbNewUserItem, UserItem as DbUserItem};
use crate::repository::{DieselRepository, RepositoryResult, UserReader, UserWriter};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let user = users::table
            .filter(users::id.eq(id.get()))
            .select(DbUser::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(user.map(TryInto::try_into).transpose()?)
    }

    fn get_user_by_email(&self, email: &UserEmail) -> RepositoryResult<Option<User>> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let user = users::table
            .filter(users::email.eq(email.as_str()))
            .select(DbUser::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(user.map(TryInto::try_into).transpose()?)
    }

    fn list_user_items(&self, user_id: UserId) -> RepositoryResult<Vec<Item>> {
        use crate::schema::{items, user_items};

        let mut conn = self.conn()?;

        let results = user_items::table
            .inner_join(items::table)
            .filter(user_items::user_id.eq(user_id.get()))
            .order(user_items::id.asc())
            .select(DbItem::as_select())
            .load(&mut conn)?;

        let results = results
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Item>, _>>()?;
        Ok(results)
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, user: &NewUser) -> RepositoryResult<User> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let db_user: DbNewUser = user.into();

        let stored = diesel::insert_into(users::table)
            .values(&db_user)
            .returning(DbUser::as_returning())
            .get_result(&mut conn)?;

        Ok(stored.try_into()?)
    }

    fn follow_item(&self, user_item: &NewUserItem) -> RepositoryResult<UserItem> {
        use crate::schema::user_items;

        let mut conn = self.conn()?;
        let db_user_item: DbNewUserItem = user_item.into();

        let stored = diesel::insert_into(user_items::table)
            .values(&db_user_item)
            .returning(DbUserItem::as_returning())
            .get_result(&mut conn)?;

        Ok(stored.try_into()?)
    }
}
