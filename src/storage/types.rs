//! SQL column codecs for model types
//!
//! The `amount` column is declared `DECIMAL`, so SQLite's numeric affinity may
//! hand values back as INTEGER, REAL or TEXT. Each is decoded into an exact
//! `Money`; REAL goes through its shortest round-trip text form so `0.1`
//! comes back as exactly `0.1`.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rust_decimal::Decimal;

use crate::models::Money;

impl ToSql for Money {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_exact_string()))
    }
}

impl FromSql for Money {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(i) => Ok(Money::new(Decimal::from(i))),
            ValueRef::Real(f) => parse_money(&f.to_string()),
            ValueRef::Text(bytes) => {
                let text =
                    std::str::from_utf8(bytes).map_err(|e| FromSqlError::Other(Box::new(e)))?;
                parse_money(text)
            }
            ValueRef::Null | ValueRef::Blob(_) => Err(FromSqlError::InvalidType),
        }
    }
}

fn parse_money(text: &str) -> FromSqlResult<Money> {
    Money::parse(text).map_err(|e| FromSqlError::Other(Box::new(e)))
}
