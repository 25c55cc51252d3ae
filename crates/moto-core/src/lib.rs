//! moto-core - Core library for Moto
//!
//! This crate contains the motorcycle model, the local favourites store, the
//! remote catalogue client, and the reconciliation engine that merges both
//! into the list the frontends render.

pub mod db;
pub mod engine;
pub mod error;
pub mod models;
pub mod remote;
pub mod repository;
pub mod services;

pub use error::{Error, Result};
pub use models::{MotoKey, Motorcycle};
