pub mod common;
pub mod list;
pub mod random;
pub mod reset;
pub mod search;
pub mod status;
pub mod toggle;
