use clap::ValueEnum;
use nsfinder_application::use_cases::{BatchOutcome, BatchSummary};
use nsfinder_domain::{AddressRecord, DomainReport};

const RULE: &str = "--------------------------------------------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn print_outcome(outcome: &BatchOutcome, format: OutputFormat) {
    match (outcome, format) {
        (BatchOutcome::Resolved(report), OutputFormat::Text) => print_text(report),
        (BatchOutcome::Resolved(report), OutputFormat::Json) => match serde_json::to_string(report) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::error!(error = %e, "Failed to serialize report"),
        },
        (BatchOutcome::Failed { target, error, .. }, OutputFormat::Text) => {
            println!("{}", RULE);
            println!("{}: {}", target.domain, error);
        }
        (BatchOutcome::Failed { target, error, search_id }, OutputFormat::Json) => {
            let line = serde_json::json!({
                "domain": target.domain.as_ref(),
                "search_id": search_id,
                "error": error.to_string(),
            });
            println!("{}", line);
        }
    }
}

pub fn print_summary(summary: &BatchSummary, format: OutputFormat) {
    if format == OutputFormat::Text {
        println!("{}", RULE);
        println!(
            "{} domains, {} resolved, {} failed in {:.2?}",
            summary.total, summary.succeeded, summary.failed, summary.elapsed
        );
    }
}

fn print_text(report: &DomainReport) {
    println!("{}", RULE);

    for step in &report.walk.steps {
        println!(
            "Finding nameservers for zone '{}' using parent nameserver '{}'",
            step.zone, step.server
        );
    }

    println!();
    println!("Nameserver list:");
    if let Some(name_servers) = report.name_servers() {
        for name in name_servers.iter() {
            println!("{}", name);
        }
    }

    println!();
    println!("IP addresses for nameservers:");
    for entry in &report.name_server_addresses {
        println!("{} {}", entry.address.ip, country(&entry.address));
    }

    println!();
    println!("IP addresses for {}:", report.domain);
    for address in &report.domain_addresses {
        println!("{} {}", address.ip, country(address));
    }

    if let Some(membership) = &report.membership {
        println!();
        println!("Candidate IP: {}", membership.candidate_ip);
        println!("IP belongs: {}", membership.verdict.as_code());
    }
}

fn country(address: &AddressRecord) -> &str {
    address.country_code.as_deref().unwrap_or("-")
}
