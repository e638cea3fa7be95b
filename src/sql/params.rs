//! Typed values bound to the builder's placeholders.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::{Query, QueryAs};

/// A value for one `$n` placeholder, in placeholder order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindValue {
    Bool(bool),
    I64(i64),
    Text(Option<String>),
}

/// Bind `params` in order onto a row-mapping query.
pub fn bind_as<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    params: &[BindValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for p in params {
        query = match p {
            BindValue::Bool(b) => query.bind(*b),
            BindValue::I64(n) => query.bind(*n),
            BindValue::Text(s) => query.bind(s.clone()),
        };
    }
    query
}

/// Bind `params` in order onto a plain statement.
pub fn bind<'q>(mut query: Query<'q, Postgres, PgArguments>, params: &[BindValue]) -> Query<'q, Postgres, PgArguments> {
    for p in params {
        query = match p {
            BindValue::Bool(b) => query.bind(*b),
            BindValue::I64(n) => query.bind(*n),
            BindValue::Text(s) => query.bind(s.clone()),
        };
    }
    query
}
