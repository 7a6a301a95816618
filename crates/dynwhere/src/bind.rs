//! Driver Binding - forwards rewritten arguments to sqlx
//!
//! Covers the `?`-placeholder dialects, matching the positional markers the
//! rewriter emits. Arguments keep their template order, so they can be bound
//! one after another onto the query.

use serde_json::Value;

#[cfg(feature = "mysql")]
use sqlx::mysql::MySqlArguments;
#[cfg(feature = "sqlite")]
use sqlx::sqlite::SqliteArguments;
#[cfg(feature = "mysql")]
use sqlx::MySql;
#[cfg(feature = "sqlite")]
use sqlx::Sqlite;

/// Bind rewritten arguments onto a SQLite query in order.
///
/// Numbers bind as `i64` when they fit, `f64` otherwise; arrays and objects
/// are stored as JSON text since SQLite has no native JSON type.
#[cfg(feature = "sqlite")]
pub fn bind_sqlite<'q>(
    mut query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    args: &'q [Value],
) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
    for arg in args {
        query = match arg {
            Value::Null => query.bind(None::<String>),
            Value::Bool(b) => query.bind(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    query.bind(i)
                } else if let Some(f) = n.as_f64() {
                    query.bind(f)
                } else {
                    query.bind(n.to_string())
                }
            }
            Value::String(s) => query.bind(s.as_str()),
            other => query.bind(other.to_string()),
        };
    }
    query
}

/// Bind rewritten arguments onto a MySQL query in order.
#[cfg(feature = "mysql")]
pub fn bind_mysql<'q>(
    mut query: sqlx::query::Query<'q, MySql, MySqlArguments>,
    args: &'q [Value],
) -> sqlx::query::Query<'q, MySql, MySqlArguments> {
    for arg in args {
        query = match arg {
            Value::Null => query.bind(None::<String>),
            Value::Bool(b) => query.bind(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    query.bind(i)
                } else if let Some(f) = n.as_f64() {
                    query.bind(f)
                } else {
                    query.bind(n.to_string())
                }
            }
            Value::String(s) => query.bind(s.as_str()),
            other => query.bind(other.to_string()),
        };
    }
    query
}
