use chrono::Utc;
use pushkind_pricewatch::domain::item::NewItem;
use pushkind_pricewatch::domain::item_price::NewItemPrice;
use pushkind_pricewatch::domain::types::{
    ItemId, ItemUrl, PasswordHash, PriceAmount, UserEmail, UserId,
};
use pushkind_pricewatch::domain::user::NewUser;
use pushkind_pricewatch::domain::user_item::NewUserItem;
use pushkind_pricewatch::repository::{
    DieselRepository, ItemReader, ItemWriter, RepositoryError, UserReader, UserWriter,
};

mod common;

fn new_user(email: &str, password: &str) -> NewUser {
    NewUser {
        email: UserEmail::new(email).expect("valid email"),
        hashed_password: PasswordHash::new(password).expect("valid password"),
        created_at: Utc::now().naive_utc(),
    }
}

fn new_item(url: &str) -> NewItem {
    NewItem::from_url(
        ItemUrl::new(url).expect("valid url"),
        Utc::now().naive_utc(),
    )
}

#[test]
fn create_user_and_fetch_by_email() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_user(&new_user("a@b.com", "pw123"))
        .expect("should create user");

    let fetched = repo
        .get_user_by_email(&UserEmail::new("a@b.com").unwrap())
        .expect("lookup should succeed")
        .expect("user should exist");

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.email, "a@b.com");
    assert_eq!(fetched.hashed_password, "pw123");

    let by_id = repo
        .get_user_by_id(created.id)
        .expect("lookup should succeed");
    assert!(by_id.is_some());
}

#[test]
fn password_is_stored_byte_for_byte() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_user(&new_user("a@b.com", "  pw123 ")).unwrap();

    let fetched = repo
        .get_user_by_email(&UserEmail::new("a@b.com").unwrap())
        .unwrap()
        .expect("user should exist");
    assert_eq!(fetched.hashed_password.as_str(), "  pw123 ");
}

#[test]
fn unknown_user_is_none() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let missing = repo
        .get_user_by_email(&UserEmail::new("nobody@b.com").unwrap())
        .expect("lookup should succeed");
    assert!(missing.is_none());
    assert!(repo.get_user_by_id(UserId::new(42).unwrap()).unwrap().is_none());
}

#[test]
fn duplicate_email_is_a_constraint_violation() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_user(&new_user("a@b.com", "pw123")).unwrap();
    let err = repo
        .create_user(&new_user("a@b.com", "other"))
        .expect_err("second insert should fail");

    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
}

#[test]
fn duplicate_item_urls_create_distinct_rows() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let first = repo.create_item(&new_item("https://shop.test/dp/1")).unwrap();
    let second = repo.create_item(&new_item("https://shop.test/dp/1")).unwrap();

    assert_ne!(first.id, second.id);

    let found = repo
        .get_item_by_url(&ItemUrl::new("https://shop.test/dp/1").unwrap())
        .unwrap()
        .expect("item should exist");
    assert_eq!(found.id, first.id);
    assert!(found.title.is_none());
    assert!(found.price.is_none());
}

#[test]
fn price_history_is_ordered_oldest_first() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let item = repo.create_item(&new_item("https://shop.test/dp/2")).unwrap();

    let start = Utc::now().naive_utc();
    for (offset, price) in [(0, 19.99), (1, 17.49), (2, 21.0)] {
        repo.create_item_price(&NewItemPrice {
            item_id: item.id,
            price: PriceAmount::new(price).unwrap(),
            created_at: start + chrono::Duration::seconds(offset),
        })
        .expect("should append price");
    }

    let prices = repo.list_item_prices(item.id).unwrap();
    let values: Vec<f64> = prices.iter().map(|p| p.price.get()).collect();
    assert_eq!(values, vec![19.99, 17.49, 21.0]);
    assert!(prices.iter().all(|p| p.item_id == item.id));
}

#[test]
fn followed_items_are_listed_for_user() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let user = repo.create_user(&new_user("a@b.com", "pw123")).unwrap();
    let first = repo.create_item(&new_item("https://shop.test/dp/1")).unwrap();
    let second = repo.create_item(&new_item("https://shop.test/dp/2")).unwrap();

    for item_id in [first.id, second.id] {
        let link = repo
            .follow_item(&NewUserItem {
                user_id: user.id,
                item_id,
                created_at: Utc::now().naive_utc(),
            })
            .expect("should follow item");
        assert_eq!(link.user_id, user.id);
    }

    let items = repo.list_user_items(user.id).unwrap();
    let ids: Vec<ItemId> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn following_missing_item_violates_foreign_key() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let user = repo.create_user(&new_user("a@b.com", "pw123")).unwrap();

    let err = repo
        .follow_item(&NewUserItem {
            user_id: user.id,
            item_id: ItemId::new(999).unwrap(),
            created_at: Utc::now().naive_utc(),
        })
        .expect_err("dangling item id should be rejected");

    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
}
