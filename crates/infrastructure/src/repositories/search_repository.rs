use async_trait::async_trait;
use nsfinder_application::ports::SearchRepository;
use nsfinder_domain::{AddressRecord, DomainError, NameServerAddress};
use sqlx::SqlitePool;
use tracing::{error, instrument};

pub struct SqliteSearchRepository {
    pool: SqlitePool,
}

impl SqliteSearchRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SearchRepository for SqliteSearchRepository {
    #[instrument(skip(self))]
    async fn register_search(&self, domain: &str, crc: Option<i64>) -> Result<i64, DomainError> {
        let result = sqlx::query("INSERT INTO url_search (url, url_crc) VALUES (?, ?)")
            .bind(domain)
            .bind(crc)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to register search");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.last_insert_rowid())
    }

    #[instrument(skip(self, address), fields(name_server = %address.name_server, ip = %address.address.ip))]
    async fn record_name_server_address(
        &self,
        search_id: i64,
        address: &NameServerAddress,
    ) -> Result<(), DomainError> {
        let record = &address.address;

        sqlx::query(
            "INSERT INTO name_server (search_id, name_server, ip, country_code, ip_type)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(search_id)
        .bind(address.name_server.as_ref())
        .bind(record.ip.to_string())
        .bind(record.country_code.as_deref())
        .bind(record.family.as_code())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to store nameserver address");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    #[instrument(skip(self, address), fields(ip = %address.ip))]
    async fn record_domain_address(
        &self,
        search_id: i64,
        address: &AddressRecord,
    ) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO web_ip (search_id, ip, country_code) VALUES (?, ?, ?)")
            .bind(search_id)
            .bind(address.ip.to_string())
            .bind(address.country_code.as_deref())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to store domain address");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }
}
