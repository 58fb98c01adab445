//! Order expressions such as `"id desc"` or `"name asc, id desc"`.
//!
//! Expressions are parsed into terms first and resolved against an entity's
//! columns second, so no caller text ever reaches the SQL builder verbatim.

use std::fmt;
use std::str::FromStr;

use sea_orm::sea_query::Order;
use sea_orm::{EntityTrait, IdenStatic, Iterable, QueryOrder, Select};

use crate::shared::{PaginateError, PaginateResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl From<Direction> for Order {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => Order::Asc,
            Direction::Desc => Order::Desc,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => write!(f, "asc"),
            Direction::Desc => write!(f, "desc"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTerm {
    pub column: String,
    pub direction: Direction,
}

/// A parsed, not yet resolved, order expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBy {
    terms: Vec<OrderTerm>,
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

fn parse_term(raw: &str) -> PaginateResult<OrderTerm> {
    let mut tokens = raw.split_whitespace();

    let column = match tokens.next() {
        Some(c) if is_identifier(c) => c.to_string(),
        Some(c) => {
            return Err(PaginateError::InvalidOrder(format!(
                "'{}' is not a column name",
                c
            )))
        }
        None => {
            return Err(PaginateError::InvalidOrder(
                "empty term in order expression".to_string(),
            ))
        }
    };

    let direction = match tokens.next() {
        None => Direction::Asc,
        Some(d) if d.eq_ignore_ascii_case("asc") => Direction::Asc,
        Some(d) if d.eq_ignore_ascii_case("desc") => Direction::Desc,
        Some(d) => {
            return Err(PaginateError::InvalidOrder(format!(
                "unknown direction '{}' for column '{}'",
                d, column
            )))
        }
    };

    if let Some(extra) = tokens.next() {
        return Err(PaginateError::InvalidOrder(format!(
            "unexpected '{}' after '{} {}'",
            extra, column, direction
        )));
    }

    Ok(OrderTerm { column, direction })
}

impl OrderBy {
    pub fn parse(expr: &str) -> PaginateResult<Self> {
        let terms = expr
            .split(',')
            .map(parse_term)
            .collect::<PaginateResult<Vec<_>>>()?;
        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[OrderTerm] {
        &self.terms
    }

    /// Map every term to a column of `E`.
    ///
    /// Column names match case-insensitively and may be qualified with the
    /// entity's own table name (`users.id`).
    pub fn resolve<E: EntityTrait>(&self) -> PaginateResult<Vec<(E::Column, Order)>> {
        let table = E::default().table_name().to_string();

        self.terms
            .iter()
            .map(|term| {
                let name = match term.column.split_once('.') {
                    Some((qualifier, name)) if qualifier.eq_ignore_ascii_case(&table) => name,
                    Some(_) => "",
                    None => term.column.as_str(),
                };

                E::Column::iter()
                    .find(|col| col.as_str().eq_ignore_ascii_case(name))
                    .map(|col| (col, term.direction.into()))
                    .ok_or_else(|| PaginateError::UnknownColumn {
                        table: table.clone(),
                        column: term.column.clone(),
                    })
            })
            .collect()
    }
}

impl FromStr for OrderBy {
    type Err = PaginateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderBy::parse(s)
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} {}", term.column, term.direction)?;
        }
        Ok(())
    }
}

/// Append resolved ordering after whatever ordering `query` already carries.
pub(crate) fn apply_order<E: EntityTrait>(
    mut query: Select<E>,
    columns: Vec<(E::Column, Order)>,
) -> Select<E> {
    for (col, order) in columns {
        query = query.order_by(col, order);
    }
    query
}
