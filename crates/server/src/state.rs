use configs::PaginationConfig;
use sea_orm::DatabaseConnection;
use service::{
    catalog_service::{BrandService, CategoryService},
    measurement_unit_service::MeasurementUnitService, product_service::ProductService, user_service::UserService,
    warehouse_service::WarehouseService, SharedQueryService,
};

/// Handles shared by every request: the pool plus one service per resource.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub brands: BrandService,
    pub categories: CategoryService,
    pub measurement_units: MeasurementUnitService,
    pub products: ProductService,
    pub warehouses: WarehouseService,
    pub users: UserService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, pagination: PaginationConfig) -> Self {
        let query = SharedQueryService::new(pagination);
        Self {
            db,
            brands: BrandService::new(query),
            categories: CategoryService::new(query),
            measurement_units: MeasurementUnitService::new(query),
            products: ProductService::new(query),
            warehouses: WarehouseService::new(query),
            users: UserService::new(query),
        }
    }
}
