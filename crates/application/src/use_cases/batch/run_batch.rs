use crate::ports::{SearchRepository, TargetSource};
use crate::use_cases::FindNameServersUseCase;
use nsfinder_domain::{DomainError, DomainReport, DomainTarget};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// What happened to one batch entry.
#[derive(Debug)]
pub enum BatchOutcome {
    Resolved(DomainReport),
    Failed {
        target: DomainTarget,
        search_id: Option<i64>,
        error: DomainError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

/// Processes every target of a source strictly one after another.
///
/// A failing domain is reported and skipped. Only failures of the source
/// itself or of search registration stop the batch.
pub struct RunBatchUseCase {
    source: Arc<dyn TargetSource>,
    finder: Arc<FindNameServersUseCase>,
    repository: Option<Arc<dyn SearchRepository>>,
}

impl RunBatchUseCase {
    pub fn new(source: Arc<dyn TargetSource>, finder: Arc<FindNameServersUseCase>) -> Self {
        Self {
            source,
            finder,
            repository: None,
        }
    }

    pub fn with_repository(mut self, repository: Arc<dyn SearchRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub async fn execute<F>(&self, mut on_outcome: F) -> Result<BatchSummary, DomainError>
    where
        F: FnMut(&BatchOutcome),
    {
        let targets = self.source.load_targets().await?;
        let start = Instant::now();

        info!(source = %self.source.describe(), targets = targets.len(), "Start finding nameservers");

        let mut succeeded = 0;
        let mut failed = 0;

        for target in targets.iter() {
            let search_id = match &self.repository {
                Some(repo) => Some(repo.register_search(&target.domain, target.crc).await?),
                None => None,
            };

            let outcome = match self.finder.execute(target).await {
                Ok(mut report) => {
                    report.search_id = search_id;
                    if let (Some(repo), Some(id)) = (&self.repository, search_id) {
                        Self::persist(repo.as_ref(), id, &report).await;
                    }
                    succeeded += 1;
                    BatchOutcome::Resolved(report)
                }
                Err(error) => {
                    if error.aborts_delegation() {
                        warn!(domain = %target.domain, error = %error, "Delegation walk aborted, domain skipped");
                    } else {
                        warn!(domain = %target.domain, error = %error, "Domain skipped");
                    }
                    failed += 1;
                    BatchOutcome::Failed {
                        target: target.clone(),
                        search_id,
                        error,
                    }
                }
            };

            on_outcome(&outcome);
        }

        let elapsed = start.elapsed();
        info!(
            domains = targets.len(),
            succeeded,
            failed,
            elapsed = %format!("{:.2} sec", elapsed.as_secs_f64()),
            "Elapsed time for batch"
        );

        Ok(BatchSummary {
            total: targets.len(),
            succeeded,
            failed,
            elapsed,
        })
    }

    async fn persist(repo: &dyn SearchRepository, search_id: i64, report: &DomainReport) {
        for address in &report.name_server_addresses {
            if let Err(e) = repo.record_name_server_address(search_id, address).await {
                warn!(search_id, ip = %address.address.ip, error = %e, "Failed to store nameserver address");
            }
        }

        for address in &report.domain_addresses {
            if let Err(e) = repo.record_domain_address(search_id, address).await {
                warn!(search_id, ip = %address.ip, error = %e, "Failed to store domain address");
            }
        }
    }
}
