//! Shared paginated listing with free-text search and dynamic sort, scoped
//! to live rows.
use configs::PaginationConfig;
use models::SoftDeletable;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{Condition, ConnectionTrait, IdenStatic, Iterable, PaginatorTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use crate::pagination::{ListParams, Pagination};

/// Columns a listing may sort on and search through.
pub trait Listable: SoftDeletable {
    fn sortable_columns() -> Vec<Self::Column> {
        <Self::Column as Iterable>::iter().collect()
    }

    fn searchable_columns() -> Vec<Self::Column>;
}

/// One page of a listing plus the size of the whole filtered set.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub collection: Vec<T>,
    pub total: u64,
    pub pages: u64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page { collection: self.collection.into_iter().map(f).collect(), total: self.total, pages: self.pages }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SharedQueryService {
    limits: PaginationConfig,
}

impl SharedQueryService {
    pub fn new(limits: PaginationConfig) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &PaginationConfig {
        &self.limits
    }

    /// List live rows of `E`. Unknown `sort_by` values fall back to
    /// `default_sort`; ties are broken by id ascending.
    #[instrument(skip(self, db, params, default_sort), fields(entity = E::LABEL))]
    pub async fn query<E, C>(
        &self,
        db: &C,
        params: &ListParams,
        default_sort: E::Column,
    ) -> Result<Page<E::Model>, ServiceError>
    where
        E: Listable,
        E::Model: Send + Sync,
        C: ConnectionTrait,
    {
        let window = Pagination::resolve(params, &self.limits);
        let mut select = E::live();

        if let Some(term) = params.search_term() {
            select = select.filter(search_condition::<E>(term));
        }

        let sort = params
            .sort_by
            .as_deref()
            .and_then(|name| E::sortable_columns().into_iter().find(|c| c.as_str() == name))
            .unwrap_or(default_sort);
        select = select.order_by(sort, params.order()).order_by_asc(E::id_column());

        let paginator = select.paginate(db, window.per_page);
        let counts = paginator.num_items_and_pages().await?;
        // Nothing past the last page; fetching there could overflow the offset.
        let collection = if window.page_index() < counts.number_of_pages {
            paginator.fetch_page(window.page_index()).await?
        } else {
            Vec::new()
        };
        debug!(page = window.page, per_page = window.per_page, total = counts.number_of_items, "listed");

        Ok(Page { collection, total: counts.number_of_items, pages: counts.number_of_pages })
    }
}

const LIKE_ESCAPE: char = '\\';

/// `%term%` with the term's own `%`, `_` and escape characters taken literally.
fn like_pattern(term: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}

/// Substring match on any searchable column, as typed or uppercased.
fn search_condition<E: Listable>(term: &str) -> Condition {
    let upper = term.to_uppercase();
    E::searchable_columns().into_iter().fold(Condition::any(), |cond, col| {
        let cond = cond.add(Expr::col((E::default(), col)).like(like_pattern(term)));
        if upper != term {
            cond.add(Expr::col((E::default(), col)).like(like_pattern(&upper)))
        } else {
            cond
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use crate::ModelService;
    use models::brand;
    use sea_orm::Set;

    async fn seed_brands(db: &sea_orm::DatabaseConnection, n: usize) -> anyhow::Result<()> {
        let svc = ModelService::<brand::Entity>::new();
        for i in 1..=n {
            svc.create(db, brand::ActiveModel { name: Set(format!("BRAND {i:02}")), ..Default::default() }, None)
                .await?;
        }
        Ok(())
    }

    fn params(page: u64, per_page: u64) -> ListParams {
        ListParams { page: Some(page), per_page: Some(per_page), ..Default::default() }
    }

    #[tokio::test]
    async fn paginates_25_rows_into_three_pages() -> anyhow::Result<()> {
        let db = get_db().await?;
        seed_brands(&db, 25).await?;
        let q = SharedQueryService::default();

        let sizes = [10, 10, 5, 0];
        for (i, expected) in sizes.iter().enumerate() {
            let page = q.query::<brand::Entity, _>(&db, &params(i as u64 + 1, 10), brand::Column::Id).await?;
            assert_eq!(page.collection.len(), *expected, "page {}", i + 1);
            assert_eq!(page.total, 25);
            assert_eq!(page.pages, 3);
        }
        Ok(())
    }

    #[tokio::test]
    async fn soft_deleted_rows_are_not_listed() -> anyhow::Result<()> {
        let db = get_db().await?;
        seed_brands(&db, 3).await?;
        let svc = ModelService::<brand::Entity>::new();
        let first = svc.validate(&db, 1).await?;
        svc.delete(&db, first, None).await?;

        let page = SharedQueryService::default()
            .query::<brand::Entity, _>(&db, &ListParams::default(), brand::Column::Id)
            .await?;
        assert_eq!(page.total, 2);
        assert!(page.collection.iter().all(|b| b.id != 1));
        Ok(())
    }

    #[tokio::test]
    async fn search_matches_lowercase_input_against_uppercase_names() -> anyhow::Result<()> {
        let db = get_db().await?;
        seed_brands(&db, 12).await?;
        let p = ListParams { search: Some("brand 1".into()), ..Default::default() };
        let page = SharedQueryService::default().query::<brand::Entity, _>(&db, &p, brand::Column::Id).await?;
        // BRAND 10, 11, 12
        assert_eq!(page.total, 3);
        Ok(())
    }

    #[tokio::test]
    async fn page_far_beyond_the_last_is_empty() -> anyhow::Result<()> {
        let db = get_db().await?;
        seed_brands(&db, 1).await?;
        let page = SharedQueryService::default()
            .query::<brand::Entity, _>(&db, &params((1 << 58) + 1, 64), brand::Column::Id)
            .await?;
        assert!(page.collection.is_empty());
        assert_eq!(page.total, 1);
        assert_eq!(page.pages, 1);
        Ok(())
    }

    #[tokio::test]
    async fn search_treats_like_wildcards_literally() -> anyhow::Result<()> {
        let db = get_db().await?;
        seed_brands(&db, 3).await?;
        let svc = ModelService::<brand::Entity>::new();
        svc.create(&db, brand::ActiveModel { name: Set("50% OFF".into()), ..Default::default() }, None).await?;
        let q = SharedQueryService::default();

        let search = |term: &str| ListParams { search: Some(term.into()), ..Default::default() };
        let percent = q.query::<brand::Entity, _>(&db, &search("%"), brand::Column::Id).await?;
        assert_eq!(percent.total, 1);
        assert_eq!(percent.collection[0].name, "50% OFF");

        let underscore = q.query::<brand::Entity, _>(&db, &search("D_0"), brand::Column::Id).await?;
        assert_eq!(underscore.total, 0);
        Ok(())
    }

    #[tokio::test]
    async fn sorts_by_known_column_and_ignores_unknown() -> anyhow::Result<()> {
        let db = get_db().await?;
        seed_brands(&db, 5).await?;
        let q = SharedQueryService::default();

        let desc = ListParams { sort_by: Some("name".into()), order: Some("desc".into()), ..Default::default() };
        let page = q.query::<brand::Entity, _>(&db, &desc, brand::Column::Id).await?;
        assert_eq!(page.collection[0].name, "BRAND 05");

        let bogus = ListParams { sort_by: Some("password; drop".into()), ..Default::default() };
        let page = q.query::<brand::Entity, _>(&db, &bogus, brand::Column::Id).await?;
        assert_eq!(page.collection[0].id, 1);
        Ok(())
    }
}
