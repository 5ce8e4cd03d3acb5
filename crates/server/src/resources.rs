//! Public JSON shapes. Audit columns and password hashes never leave the
//! server.
use models::{brand, category, measurement_unit, product, user, warehouse};
use serde::Serialize;
use service::Page;

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[derive(Debug, Serialize)]
pub struct Created {
    pub message: String,
    pub id: i32,
}

impl Created {
    pub fn new(message: impl Into<String>, id: i32) -> Self {
        Self { message: message.into(), id }
    }
}

/// Listing envelope: `{data, total, pages}`.
#[derive(Debug, Serialize)]
pub struct Listing<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub pages: u64,
}

impl<M, T: From<M>> From<Page<M>> for Listing<T> {
    fn from(page: Page<M>) -> Self {
        let page = page.map(T::from);
        Self { data: page.collection, total: page.total, pages: page.pages }
    }
}

#[derive(Debug, Serialize)]
pub struct BrandResource {
    pub id: i32,
    pub name: String,
}

impl From<brand::Model> for BrandResource {
    fn from(m: brand::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryResource {
    pub id: i32,
    pub name: String,
}

impl From<category::Model> for CategoryResource {
    fn from(m: category::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

#[derive(Debug, Serialize)]
pub struct MeasurementUnitResource {
    pub id: i32,
    pub name: String,
    pub symbol: String,
}

impl From<measurement_unit::Model> for MeasurementUnitResource {
    fn from(m: measurement_unit::Model) -> Self {
        Self { id: m.id, name: m.name, symbol: m.symbol }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResource {
    pub id: i32,
    pub brand_id: i32,
    pub category_id: i32,
    pub measurement_unit_id: i32,
    pub measurement_unit_name: String,
    pub name: String,
    pub barcode: Option<String>,
    pub barcode_path: Option<String>,
    pub sale_price: f64,
    pub purchase_price: f64,
    pub minimum_stock: f64,
}

impl From<product::Model> for ProductResource {
    fn from(m: product::Model) -> Self {
        Self {
            id: m.id,
            brand_id: m.brand_id,
            category_id: m.category_id,
            measurement_unit_id: m.measurement_unit_id,
            measurement_unit_name: m.measurement_unit_name,
            name: m.name,
            barcode: m.barcode,
            barcode_path: m.barcode_path,
            sale_price: m.sale_price,
            purchase_price: m.purchase_price,
            minimum_stock: m.minimum_stock,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WarehouseResource {
    pub id: i32,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub warehouse_type: warehouse::WarehouseType,
}

impl From<warehouse::Model> for WarehouseResource {
    fn from(m: warehouse::Model) -> Self {
        Self { id: m.id, name: m.name, location: m.location, warehouse_type: m.warehouse_type }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResource {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub name: String,
    pub surname: String,
    pub role_id: i32,
}

impl From<user::Model> for UserResource {
    fn from(m: user::Model) -> Self {
        Self { id: m.id, username: m.username, email: m.email, name: m.name, surname: m.surname, role_id: m.role_id }
    }
}
