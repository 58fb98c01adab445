pub mod ordering;
pub mod paginator;
pub mod record;

pub use ordering::{Direction, OrderBy, OrderTerm};
pub use paginator::{paginate, Pager};
pub use record::{ModelOf, Record};
