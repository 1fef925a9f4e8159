use nsfinder_application::ports::SearchRepository;
use nsfinder_domain::{AddressRecord, NameServerAddress};
use nsfinder_infrastructure::database::ensure_schema;
use nsfinder_infrastructure::repositories::SqliteSearchRepository;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    ensure_schema(&pool).await.unwrap();
    pool
}

#[tokio::test]
async fn test_register_search_returns_increasing_ids() {
    let pool = create_test_db().await;
    let repo = SqliteSearchRepository::new(pool.clone());

    let first = repo.register_search("example.com", Some(42)).await.unwrap();
    let second = repo.register_search("example.org", None).await.unwrap();

    assert!(second > first);

    let row: (String, Option<i64>) =
        sqlx::query_as("SELECT url, url_crc FROM url_search WHERE search_id = ?")
            .bind(first)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(row, ("example.com".to_string(), Some(42)));
}

#[tokio::test]
async fn test_name_server_address_stored_with_family_code() {
    let pool = create_test_db().await;
    let repo = SqliteSearchRepository::new(pool.clone());
    let search_id = repo.register_search("example.com", None).await.unwrap();

    let v4 = NameServerAddress::new(
        "ns1.example.com.",
        AddressRecord::new("192.0.2.1".parse().unwrap()).with_country("us"),
    );
    let v6 = NameServerAddress::new(
        "ns1.example.com.",
        AddressRecord::new("2001:db8::1".parse().unwrap()).with_geo_error("not found"),
    );
    repo.record_name_server_address(search_id, &v4).await.unwrap();
    repo.record_name_server_address(search_id, &v6).await.unwrap();

    let rows: Vec<(String, String, Option<String>, i64)> = sqlx::query_as(
        "SELECT name_server, ip, country_code, ip_type FROM name_server
         WHERE search_id = ? ORDER BY ns_id",
    )
    .bind(search_id)
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(
        rows,
        vec![
            (
                "ns1.example.com.".to_string(),
                "192.0.2.1".to_string(),
                Some("us".to_string()),
                4
            ),
            (
                "ns1.example.com.".to_string(),
                "2001:db8::1".to_string(),
                None,
                6
            ),
        ]
    );
}

#[tokio::test]
async fn test_domain_address_stored() {
    let pool = create_test_db().await;
    let repo = SqliteSearchRepository::new(pool.clone());
    let search_id = repo.register_search("example.com", None).await.unwrap();

    repo.record_domain_address(
        search_id,
        &AddressRecord::new("198.51.100.10".parse().unwrap()).with_country("de"),
    )
    .await
    .unwrap();

    let row: (i64, String, Option<String>) =
        sqlx::query_as("SELECT search_id, ip, country_code FROM web_ip")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(row, (search_id, "198.51.100.10".to_string(), Some("de".to_string())));
}

#[tokio::test]
async fn test_missing_schema_is_database_error() {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let repo = SqliteSearchRepository::new(pool);

    let result = repo.register_search("example.com", None).await;

    assert!(matches!(
        result,
        Err(nsfinder_domain::DomainError::DatabaseError(_))
    ));
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let pool = create_test_db().await;
    ensure_schema(&pool).await.unwrap();
}
