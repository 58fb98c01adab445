//! Offset pagination over SeaORM select queries.
//!
//! Every call issues a count query on a stripped snapshot of the caller's
//! query, then a bounded fetch on the original, then one query per eager-loaded
//! relation. Nothing is cached between calls.

use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, QuerySelect, QueryTrait, Select};
use tracing::debug;

use super::ordering::{apply_order, OrderBy};
use super::record::{ModelOf, Record};
use crate::config::PagerConfig;
use crate::shared::{Metadata, Page, PaginateResult, Params, MAX_BOUND};

/// Snapshot of `query` suitable for counting: same filters and joins, but no
/// limit, offset or ordering left over from earlier use.
fn count_snapshot<E: EntityTrait>(query: &Select<E>) -> Select<E> {
    let mut snapshot = query.clone();
    QueryTrait::query(&mut snapshot)
        .reset_limit()
        .reset_offset()
        .clear_order_by();
    snapshot
}

#[derive(Debug, Clone, Default)]
pub struct Pager {
    config: PagerConfig,
}

impl Pager {
    pub fn new(config: PagerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Fetch one page of `R` from `query`, eager-loading each named relation.
    ///
    /// Relations are loaded for the fetched rows only; the count ignores them.
    pub async fn paginate<R, C>(
        &self,
        db: &C,
        query: Select<R::Entity>,
        params: &Params,
        preload: &[&str],
    ) -> PaginateResult<Page<R>>
    where
        R: Record,
        C: ConnectionTrait,
        ModelOf<R>: Sync,
    {
        let (models, metadata) = self.fetch_window(db, query, params).await?;

        let mut records: Vec<R> = models.into_iter().map(R::from_model).collect();
        for relation in preload {
            debug!("Preloading '{}' for {} records", relation, records.len());
            R::preload(&mut records, relation, db).await?;
        }

        Ok(Page::new(records, metadata))
    }

    /// Same as [`Pager::paginate`] for plain entity models.
    pub async fn paginate_models<E, C>(
        &self,
        db: &C,
        query: Select<E>,
        params: &Params,
    ) -> PaginateResult<Page<E::Model>>
    where
        E: EntityTrait,
        C: ConnectionTrait,
        E::Model: Sync,
    {
        let (models, metadata) = self.fetch_window(db, query, params).await?;
        Ok(Page::new(models, metadata))
    }

    async fn fetch_window<E, C>(
        &self,
        db: &C,
        query: Select<E>,
        params: &Params,
    ) -> PaginateResult<(Vec<E::Model>, Metadata)>
    where
        E: EntityTrait,
        C: ConnectionTrait,
        E::Model: Sync,
    {
        let page = params.normalized_page();
        let limit = params.normalized_limit(self.config.default_limit, self.config.max_limit);

        // Resolved before touching the database so a bad expression costs no query.
        let default_order = self
            .config
            .default_order_by
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let order = match params.order_expr().or(default_order) {
            Some(expr) => OrderBy::parse(expr)?.resolve::<E>()?,
            None => Vec::new(),
        };

        let total = count_snapshot(&query).count(db).await?;

        // Past-the-end pages still run the fetch; it just comes back empty.
        let offset = (page - 1).saturating_mul(limit).min(MAX_BOUND);
        let models = apply_order(query, order)
            .limit(limit)
            .offset(offset)
            .all(db)
            .await?;

        let metadata = Metadata::new(page, limit, total);
        let entity = E::default();
        debug!(
            table = entity.table_name(),
            page,
            limit,
            offset,
            total,
            fetched = models.len(),
            "Fetched page {}/{}",
            metadata.page,
            metadata.total_pages
        );

        Ok((models, metadata))
    }
}

/// Paginate with the default configuration.
pub async fn paginate<R, C>(
    db: &C,
    query: Select<R::Entity>,
    params: &Params,
    preload: &[&str],
) -> PaginateResult<Page<R>>
where
    R: Record,
    C: ConnectionTrait,
    ModelOf<R>: Sync,
{
    Pager::default().paginate(db, query, params, preload).await
}
