//! Service layer shared by Moto frontends

mod catalogue;

pub use catalogue::CatalogueService;
