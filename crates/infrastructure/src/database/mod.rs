use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS url_search (
        search_id   INTEGER PRIMARY KEY AUTOINCREMENT,
        url         TEXT    NOT NULL,
        url_crc     INTEGER,
        insert_time TEXT    NOT NULL DEFAULT (datetime('now'))
    )",
    "CREATE TABLE IF NOT EXISTS name_server (
        ns_id        INTEGER PRIMARY KEY AUTOINCREMENT,
        search_id    INTEGER NOT NULL REFERENCES url_search(search_id),
        name_server  TEXT    NOT NULL,
        ip           TEXT    NOT NULL,
        country_code TEXT,
        ip_type      INTEGER NOT NULL,
        insert_time  TEXT    NOT NULL DEFAULT (datetime('now'))
    )",
    "CREATE TABLE IF NOT EXISTS web_ip (
        web_ip_id    INTEGER PRIMARY KEY AUTOINCREMENT,
        search_id    INTEGER NOT NULL REFERENCES url_search(search_id),
        ip           TEXT    NOT NULL,
        country_code TEXT,
        insert_time  TEXT    NOT NULL DEFAULT (datetime('now'))
    )",
    "CREATE INDEX IF NOT EXISTS idx_name_server_search ON name_server(search_id)",
    "CREATE INDEX IF NOT EXISTS idx_web_ip_search ON web_ip(search_id)",
];

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    ensure_schema(&pool).await?;

    info!(url = %database_url, "Database ready");
    Ok(pool)
}

/// Creates the result tables when they do not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
