pub mod audit;
pub mod db;
pub mod errors;

pub mod brand;
pub mod category;
pub mod measurement_unit;
pub mod product;
pub mod user;
pub mod warehouse;

pub use audit::SoftDeletable;
