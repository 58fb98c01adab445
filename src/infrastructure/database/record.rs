//! Records the pager can materialize.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, EntityTrait};

use crate::shared::{PaginateError, PaginateResult};

/// Model type of a record's entity.
pub type ModelOf<R> = <<R as Record>::Entity as EntityTrait>::Model;

/// A caller-defined row shape backed by one SeaORM entity.
///
/// Implementors wrap the entity's `Model` and may carry related rows, filled
/// in by [`Record::preload`] when the relation is requested by name.
///
/// ```ignore
/// struct UserWithWallets {
///     user: user::Model,
///     wallets: Vec<wallet::Model>,
/// }
///
/// #[async_trait]
/// impl Record for UserWithWallets {
///     type Entity = user::Entity;
///
///     fn from_model(user: user::Model) -> Self {
///         Self { user, wallets: Vec::new() }
///     }
///
///     async fn preload<C>(records: &mut [Self], relation: &str, db: &C) -> PaginateResult<()>
///     where
///         C: ConnectionTrait,
///     {
///         match relation {
///             "wallets" => {
///                 let users: Vec<_> = records.iter().map(|r| r.user.clone()).collect();
///                 let wallets = users.load_many(wallet::Entity, db).await?;
///                 for (record, wallets) in records.iter_mut().zip(wallets) {
///                     record.wallets = wallets;
///                 }
///                 Ok(())
///             }
///             other => Err(PaginateError::unknown_relation::<Self>(other)),
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Record: Sized + Send {
    type Entity: EntityTrait;

    fn from_model(model: ModelOf<Self>) -> Self;

    /// Eager-load `relation` for every record of a fetched page.
    ///
    /// Records without related rows must be left with an empty relation. The
    /// default knows no relations.
    async fn preload<C>(_records: &mut [Self], relation: &str, _db: &C) -> PaginateResult<()>
    where
        C: ConnectionTrait,
    {
        Err(PaginateError::unknown_relation::<Self>(relation))
    }
}
