use async_trait::async_trait;
use nsfinder_application::ports::TargetSource;
use nsfinder_domain::{DomainError, DomainTarget};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Targets from a CSV file with the columns `domain, crc, candidate_ip`.
///
/// Only the first column is required. Rows with an empty domain are skipped.
pub struct CsvTargetSource {
    path: PathBuf,
    has_header: bool,
}

impl CsvTargetSource {
    pub fn new(path: impl Into<PathBuf>, has_header: bool) -> Self {
        Self {
            path: path.into(),
            has_header,
        }
    }

    pub fn parse(contents: &[u8], has_header: bool) -> Result<Vec<DomainTarget>, DomainError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(has_header)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(contents);

        let mut targets = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                DomainError::InputError(format!("malformed CSV row {}: {}", index + 1, e))
            })?;

            let domain = record.get(0).unwrap_or_default();
            if domain.is_empty() {
                debug!(row = index + 1, "Skipping row without domain");
                continue;
            }

            let mut target = DomainTarget::new(domain);

            if let Some(crc) = record.get(1).filter(|v| !v.is_empty()) {
                match crc.parse::<i64>() {
                    Ok(crc) => target = target.with_crc(crc),
                    Err(_) => warn!(row = index + 1, crc = %crc, "Ignoring non-numeric crc"),
                }
            }

            if let Some(candidate) = record.get(2).filter(|v| !v.is_empty()) {
                target = target.with_candidate(candidate);
            }

            targets.push(target);
        }

        Ok(targets)
    }
}

#[async_trait]
impl TargetSource for CsvTargetSource {
    async fn load_targets(&self) -> Result<Vec<DomainTarget>, DomainError> {
        let contents = tokio::fs::read(&self.path).await.map_err(|e| {
            DomainError::InputError(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        let targets = Self::parse(&contents, self.has_header)?;
        info!(path = %self.path.display(), count = targets.len(), "CSV targets loaded");
        Ok(targets)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
