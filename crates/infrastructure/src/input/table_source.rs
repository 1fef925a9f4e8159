use async_trait::async_trait;
use nsfinder_application::ports::TargetSource;
use nsfinder_domain::{DomainError, DomainTarget};
use sqlx::{Row, SqlitePool};
use tracing::{error, info, instrument};

/// Targets from a SQLite table laid out as `(id, domain, crc, ...)`.
///
/// Columns are read by position, so the names do not matter.
pub struct SqliteTableTargetSource {
    pool: SqlitePool,
    table: String,
}

impl SqliteTableTargetSource {
    pub fn new(pool: SqlitePool, table: &str) -> Result<Self, DomainError> {
        if !is_identifier(table) {
            return Err(DomainError::InputError(format!(
                "'{}' is not a valid table name",
                table
            )));
        }
        Ok(Self {
            pool,
            table: table.to_string(),
        })
    }
}

pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[async_trait]
impl TargetSource for SqliteTableTargetSource {
    #[instrument(skip(self), fields(table = %self.table))]
    async fn load_targets(&self) -> Result<Vec<DomainTarget>, DomainError> {
        let sql = format!("SELECT * FROM \"{}\" ORDER BY 1", self.table);

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to read input table");
            DomainError::InputError(format!("cannot read table {}: {}", self.table, e))
        })?;

        let mut targets = Vec::with_capacity(rows.len());
        for row in rows {
            let domain: String = row.try_get(1).map_err(|e| {
                DomainError::InputError(format!("table {} has no domain column: {}", self.table, e))
            })?;
            if domain.trim().is_empty() {
                continue;
            }

            let mut target = DomainTarget::new(domain.trim());
            if let Some(crc) = row.try_get::<Option<i64>, _>(2).ok().flatten() {
                target = target.with_crc(crc);
            }
            targets.push(target);
        }

        info!(count = targets.len(), "Table targets loaded");
        Ok(targets)
    }

    fn describe(&self) -> String {
        format!("table {}", self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_rules() {
        assert!(is_identifier("tb_root_domain"));
        assert!(is_identifier("_t1"));
        assert!(!is_identifier("1table"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("roots; DROP TABLE url_search"));
        assert!(!is_identifier("a-b"));
    }
}
