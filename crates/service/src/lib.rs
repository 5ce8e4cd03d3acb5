//! Service layer providing the catalog's business operations on top of `models`.
//! - `ModelService` holds the generic create / update / soft-delete / lookup core.
//! - `SharedQueryService` serves every paginated listing.
//! - `NamedCatalogService` covers brands and categories; products, warehouses
//!   and users get their own service for their extra rules.

pub mod errors;
pub mod model_service;
pub mod pagination;
pub mod query_service;
pub mod validation;

pub mod catalog_service;
pub mod measurement_unit_service;
pub mod product_service;
pub mod user_service;
pub mod warehouse_service;

#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use model_service::ModelService;
pub use pagination::{ListParams, Pagination};
pub use query_service::{Listable, Page, SharedQueryService};
pub use validation::FieldErrors;
