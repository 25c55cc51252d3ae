//! Data models for Moto

mod motorcycle;

pub use motorcycle::{MotoKey, Motorcycle};
