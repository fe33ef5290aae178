//! Response shapes returned by the JSON API.

pub mod items;
pub mod users;
