use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaginateError {
    /// The count, fetch or preload query failed in the database layer.
    #[error("Query error: {0}")]
    Query(#[from] sea_orm::DbErr),

    #[error("Unknown order column '{column}' for table {table}")]
    UnknownColumn { table: String, column: String },

    #[error("Invalid order expression: {0}")]
    InvalidOrder(String),

    #[error("Unknown relation '{relation}' for {record}")]
    UnknownRelation {
        record: &'static str,
        relation: String,
    },
}

impl PaginateError {
    pub fn unknown_relation<R>(relation: &str) -> Self {
        PaginateError::UnknownRelation {
            record: std::any::type_name::<R>(),
            relation: relation.to_string(),
        }
    }

    /// Whether the error came from the database rather than from the request.
    pub fn is_query(&self) -> bool {
        matches!(self, PaginateError::Query(_))
    }
}

pub type PaginateResult<T> = Result<T, PaginateError>;
