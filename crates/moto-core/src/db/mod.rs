//! Local persistence layer for Moto

mod connection;
mod migrations;
mod store;

pub use connection::Database;
pub use store::{FavouriteStore, SqliteFavouriteStore};
