use models::{brand, category, measurement_unit, product};
use sea_orm::{ActiveValue::Unchanged, ConnectionTrait, Set};
use serde::Deserialize;
use tracing::{info, instrument};
use validator::Validate;

use crate::errors::ServiceError;
use crate::model_service::ModelService;
use crate::pagination::ListParams;
use crate::query_service::{Listable, Page, SharedQueryService};
use crate::validation::{check, invalid_selection, taken, trimmed, upper, FieldErrors};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateProduct {
    #[validate(required(message = "The brand id field is required."))]
    pub brand_id: Option<i32>,
    #[validate(required(message = "The category id field is required."))]
    pub category_id: Option<i32>,
    #[validate(required(message = "The measurement unit id field is required."))]
    pub measurement_unit_id: Option<i32>,
    #[validate(
        required(message = "The name field is required."),
        length(min = 1, max = 120, message = "The name must be between 1 and 120 characters.")
    )]
    pub name: Option<String>,
    #[validate(length(max = 100, message = "The barcode may not be greater than 100 characters."))]
    pub barcode: Option<String>,
    pub barcode_path: Option<String>,
    #[validate(
        required(message = "The sale price field is required."),
        range(exclusive_min = 0.0, message = "The sale price must be greater than 0.")
    )]
    pub sale_price: Option<f64>,
    #[validate(
        required(message = "The purchase price field is required."),
        range(exclusive_min = 0.0, message = "The purchase price must be greater than 0.")
    )]
    pub purchase_price: Option<f64>,
    #[validate(
        required(message = "The minimum stock field is required."),
        range(exclusive_min = 0.0, message = "The minimum stock must be greater than 0.")
    )]
    pub minimum_stock: Option<f64>,
}

/// Partial patch; absent fields are left untouched. A blank `barcode` or
/// `barcode_path` clears the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProduct {
    pub brand_id: Option<i32>,
    pub category_id: Option<i32>,
    pub measurement_unit_id: Option<i32>,
    #[validate(length(min = 1, max = 120, message = "The name must be between 1 and 120 characters."))]
    pub name: Option<String>,
    #[validate(length(max = 100, message = "The barcode may not be greater than 100 characters."))]
    pub barcode: Option<String>,
    pub barcode_path: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "The sale price must be greater than 0."))]
    pub sale_price: Option<f64>,
    #[validate(range(exclusive_min = 0.0, message = "The purchase price must be greater than 0."))]
    pub purchase_price: Option<f64>,
    #[validate(range(exclusive_min = 0.0, message = "The minimum stock must be greater than 0."))]
    pub minimum_stock: Option<f64>,
}

impl Listable for product::Entity {
    fn sortable_columns() -> Vec<product::Column> {
        use product::Column::*;
        vec![Id, Name, Barcode, SalePrice, PurchasePrice, MinimumStock, BrandId, CategoryId, CreationTime]
    }

    fn searchable_columns() -> Vec<product::Column> {
        vec![product::Column::Name, product::Column::Barcode, product::Column::MeasurementUnitName]
    }
}

/// Foreign keys a create or update names.
struct References {
    brand_id: Option<i32>,
    category_id: Option<i32>,
    measurement_unit_id: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductService {
    model: ModelService<product::Entity>,
    brands: ModelService<brand::Entity>,
    categories: ModelService<category::Entity>,
    units: ModelService<measurement_unit::Entity>,
    query: SharedQueryService,
}

/// Blank optional text becomes `None`.
fn optional_text(value: Option<String>) -> Option<String> {
    trimmed(value).filter(|v| !v.is_empty())
}

impl ProductService {
    pub fn new(query: SharedQueryService) -> Self {
        Self { query, ..Self::default() }
    }

    /// Check that referenced parents are live; returns the unit so its name
    /// can be denormalized onto the product.
    async fn check_references<C: ConnectionTrait>(
        &self,
        db: &C,
        refs: &References,
        errors: &mut FieldErrors,
    ) -> Result<Option<measurement_unit::Model>, ServiceError> {
        if let Some(id) = refs.brand_id {
            if !self.brands.exists_live(db, brand::Column::Id, id, None).await? {
                errors.add("brand_id", invalid_selection("brand_id"));
            }
        }
        if let Some(id) = refs.category_id {
            if !self.categories.exists_live(db, category::Column::Id, id, None).await? {
                errors.add("category_id", invalid_selection("category_id"));
            }
        }
        let mut unit = None;
        if let Some(id) = refs.measurement_unit_id {
            unit = self.units.find_live(db, id).await?;
            if unit.is_none() {
                errors.add("measurement_unit_id", invalid_selection("measurement_unit_id"));
            }
        }
        Ok(unit)
    }

    async fn check_name<C: ConnectionTrait>(
        &self,
        db: &C,
        name: Option<&str>,
        except_id: Option<i32>,
        errors: &mut FieldErrors,
    ) -> Result<(), ServiceError> {
        if let Some(name) = name.filter(|_| !errors.contains("name")) {
            if self.model.exists_live(db, product::Column::Name, name, except_id).await? {
                errors.add("name", taken("name"));
            }
        }
        Ok(())
    }

    #[instrument(skip(self, db, input))]
    pub async fn create<C: ConnectionTrait>(
        &self,
        db: &C,
        mut input: CreateProduct,
        actor: Option<i32>,
    ) -> Result<product::Model, ServiceError> {
        input.name = upper(input.name);
        input.barcode = optional_text(input.barcode);
        input.barcode_path = optional_text(input.barcode_path);

        let mut errors = check(&input);
        let refs = References {
            brand_id: input.brand_id,
            category_id: input.category_id,
            measurement_unit_id: input.measurement_unit_id,
        };
        let unit = self.check_references(db, &refs, &mut errors).await?;
        self.check_name(db, input.name.as_deref(), None, &mut errors).await?;
        errors.into_result()?;

        let (
            Some(brand_id),
            Some(category_id),
            Some(unit),
            Some(name),
            Some(sale_price),
            Some(purchase_price),
            Some(minimum_stock),
        ) = (
            input.brand_id,
            input.category_id,
            unit,
            input.name,
            input.sale_price,
            input.purchase_price,
            input.minimum_stock,
        )
        else {
            return Err(ServiceError::Unexpected("validated product input is incomplete".into()));
        };

        let am = product::ActiveModel {
            brand_id: Set(brand_id),
            category_id: Set(category_id),
            measurement_unit_id: Set(unit.id),
            measurement_unit_name: Set(unit.name),
            name: Set(name),
            barcode: Set(input.barcode),
            barcode_path: Set(input.barcode_path),
            sale_price: Set(sale_price),
            purchase_price: Set(purchase_price),
            minimum_stock: Set(minimum_stock),
            ..Default::default()
        };
        let created = self.model.create(db, am, actor).await?;
        info!(id = created.id, name = %created.name, "product created");
        Ok(created)
    }

    #[instrument(skip(self, db, input))]
    pub async fn update<C: ConnectionTrait>(
        &self,
        db: &C,
        id: i32,
        mut input: UpdateProduct,
        actor: Option<i32>,
    ) -> Result<product::Model, ServiceError> {
        let existing = self.model.validate(db, id).await?;
        input.name = upper(input.name);
        input.barcode = trimmed(input.barcode);
        input.barcode_path = trimmed(input.barcode_path);

        let mut errors = check(&input);
        let refs = References {
            brand_id: input.brand_id,
            category_id: input.category_id,
            measurement_unit_id: input.measurement_unit_id,
        };
        let unit = self.check_references(db, &refs, &mut errors).await?;
        self.check_name(db, input.name.as_deref(), Some(existing.id), &mut errors).await?;
        errors.into_result()?;

        let mut am = product::ActiveModel { id: Unchanged(existing.id), ..Default::default() };
        if let Some(v) = input.brand_id {
            am.brand_id = Set(v);
        }
        if let Some(v) = input.category_id {
            am.category_id = Set(v);
        }
        if let Some(unit) = unit {
            am.measurement_unit_id = Set(unit.id);
            am.measurement_unit_name = Set(unit.name);
        }
        if let Some(v) = input.name {
            am.name = Set(v);
        }
        if let Some(v) = input.barcode {
            am.barcode = Set(Some(v).filter(|b| !b.is_empty()));
        }
        if let Some(v) = input.barcode_path {
            am.barcode_path = Set(Some(v).filter(|p| !p.is_empty()));
        }
        if let Some(v) = input.sale_price {
            am.sale_price = Set(v);
        }
        if let Some(v) = input.purchase_price {
            am.purchase_price = Set(v);
        }
        if let Some(v) = input.minimum_stock {
            am.minimum_stock = Set(v);
        }
        let updated = self.model.update(db, am, actor).await?;
        info!(id = updated.id, "product updated");
        Ok(updated)
    }

    #[instrument(skip(self, db))]
    pub async fn delete<C: ConnectionTrait>(
        &self,
        db: &C,
        id: i32,
        actor: Option<i32>,
    ) -> Result<product::Model, ServiceError> {
        let existing = self.model.validate(db, id).await?;
        let deleted = self.model.delete(db, existing, actor).await?;
        info!(id = deleted.id, "product deleted");
        Ok(deleted)
    }

    pub async fn find<C: ConnectionTrait>(&self, db: &C, id: i32) -> Result<product::Model, ServiceError> {
        self.model.validate(db, id).await
    }

    pub async fn list<C: ConnectionTrait>(
        &self,
        db: &C,
        params: &ListParams,
    ) -> Result<Page<product::Model>, ServiceError> {
        self.query.query::<product::Entity, _>(db, params, product::Column::Name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_service::{BrandService, CategoryService, CreateNamed};
    use crate::test_support::get_db;
    use sea_orm::DatabaseConnection;

    struct Fixture {
        db: DatabaseConnection,
        brand_id: i32,
        category_id: i32,
    }

    async fn fixture() -> anyhow::Result<Fixture> {
        let db = get_db().await?;
        let brand = BrandService::default().create(&db, CreateNamed { name: Some("acme".into()) }, None).await?;
        let category = CategoryService::default()
            .create(&db, CreateNamed { name: Some("tools".into()) }, None)
            .await?;
        Ok(Fixture { db, brand_id: brand.id, category_id: category.id })
    }

    fn input(f: &Fixture, name: &str) -> CreateProduct {
        CreateProduct {
            brand_id: Some(f.brand_id),
            category_id: Some(f.category_id),
            measurement_unit_id: Some(54),
            name: Some(name.into()),
            barcode: Some("7750001000011".into()),
            barcode_path: None,
            sale_price: Some(12.5),
            purchase_price: Some(9.9),
            minimum_stock: Some(5.0),
        }
    }

    fn field_error(err: ServiceError, field: &str) -> bool {
        matches!(err, ServiceError::Validation(ref e) if e.contains(field))
    }

    #[tokio::test]
    async fn create_copies_unit_name() -> anyhow::Result<()> {
        let f = fixture().await?;
        let p = ProductService::default().create(&f.db, input(&f, "hammer"), Some(1)).await?;
        assert_eq!(p.name, "HAMMER");
        assert_eq!(p.measurement_unit_name, "UNIDAD");
        assert_eq!(p.creator_user_id, Some(1));
        Ok(())
    }

    #[tokio::test]
    async fn missing_or_deleted_brand_is_rejected() -> anyhow::Result<()> {
        let f = fixture().await?;
        let svc = ProductService::default();

        let mut bad = input(&f, "hammer");
        bad.brand_id = Some(9_999);
        assert!(field_error(svc.create(&f.db, bad, None).await.unwrap_err(), "brand_id"));

        BrandService::default().delete(&f.db, f.brand_id, None).await?;
        let err = svc.create(&f.db, input(&f, "hammer"), None).await.unwrap_err();
        assert!(field_error(err, "brand_id"));
        Ok(())
    }

    #[tokio::test]
    async fn numeric_bounds_and_required_fields() -> anyhow::Result<()> {
        let f = fixture().await?;
        let svc = ProductService::default();

        let mut bad = input(&f, "hammer");
        bad.sale_price = Some(0.0);
        bad.minimum_stock = Some(-1.0);
        bad.barcode = Some("9".repeat(101));
        match svc.create(&f.db, bad, None).await.unwrap_err() {
            ServiceError::Validation(e) => {
                assert!(e.contains("sale_price"));
                assert!(e.contains("minimum_stock"));
                assert!(e.contains("barcode"));
                assert!(!e.contains("purchase_price"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = svc.create(&f.db, CreateProduct::default(), None).await.unwrap_err();
        for field in ["brand_id", "category_id", "measurement_unit_id", "name", "sale_price"] {
            assert!(matches!(&err, ServiceError::Validation(e) if e.contains(field)), "{field}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn partial_update_changes_only_supplied_fields() -> anyhow::Result<()> {
        let f = fixture().await?;
        let svc = ProductService::default();
        let p = svc.create(&f.db, input(&f, "hammer"), None).await?;

        let patch = UpdateProduct { sale_price: Some(20.0), measurement_unit_id: Some(23), ..Default::default() };
        let u = svc.update(&f.db, p.id, patch, Some(3)).await?;
        assert_eq!(u.sale_price, 20.0);
        assert_eq!(u.measurement_unit_name, "KILOGRAMO");
        assert_eq!(u.name, p.name);
        assert_eq!(u.purchase_price, p.purchase_price);
        assert_eq!(u.barcode, p.barcode);
        assert_eq!(u.brand_id, p.brand_id);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_product_name_until_soft_deleted() -> anyhow::Result<()> {
        let f = fixture().await?;
        let svc = ProductService::default();
        let p = svc.create(&f.db, input(&f, "hammer"), None).await?;
        assert!(field_error(svc.create(&f.db, input(&f, " Hammer"), None).await.unwrap_err(), "name"));
        svc.delete(&f.db, p.id, None).await?;
        svc.create(&f.db, input(&f, "hammer"), None).await?;
        Ok(())
    }
}
