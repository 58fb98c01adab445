//! Infrastructure layer - the SeaORM side of pagination

pub mod database;

pub use database::{paginate, Direction, ModelOf, OrderBy, OrderTerm, Pager, Record};
