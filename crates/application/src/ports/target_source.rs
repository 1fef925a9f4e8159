use async_trait::async_trait;
use nsfinder_domain::{DomainError, DomainTarget};

#[async_trait]
pub trait TargetSource: Send + Sync {
    async fn load_targets(&self) -> Result<Vec<DomainTarget>, DomainError>;

    /// Short description for logs, e.g. the file path or table name.
    fn describe(&self) -> String;
}
