//! # sea-paginator
//!
//! Offset pagination for SeaORM select queries.
//!
//! A [`Pager`] takes a query already scoped to a table and filter, counts the
//! matching rows, fetches one bounded window of them and reports where that
//! window sits in the full result set.
//!
//! ## Layout
//!
//! - **shared**: request/response types ([`Params`], [`Metadata`], [`Page`]) and errors
//! - **infrastructure**: the SeaORM-backed pager, order expressions and the [`Record`] trait
//! - **config**: [`PagerConfig`]
//!
//! ```ignore
//! let params = Params::new(2, 10).order_by("id desc");
//! let page: Page<user::Model> = Pager::default()
//!     .paginate_models(&db, user::Entity::find(), &params)
//!     .await?;
//! println!("{} of {} users", page.len(), page.metadata.total_records);
//! ```

pub mod config;
pub mod infrastructure;
pub mod shared;

pub use config::PagerConfig;

pub use infrastructure::{paginate, Direction, ModelOf, OrderBy, OrderTerm, Pager, Record};

pub use shared::{Metadata, Page, PaginateError, PaginateResult, Params};
