//! Core library exports for the price watch service.
//!
//! Two independent subsystems share this crate. The `data` and `server`
//! features provide the users/items CRUD store and its JSON API; the
//! `scrape` feature fetches product pages, parses them and appends price
//! observations to a separate local SQLite file.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "scrape")]
pub mod scrape;

#[cfg(any(feature = "server", feature = "scrape"))]
pub mod settings;
