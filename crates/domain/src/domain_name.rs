use crate::DomainError;

const ROOT: &str = ".";

/// Appends the root label when it is missing.
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Splits a name into its labels, ignoring the root label.
pub fn split_labels(name: &str) -> Vec<&str> {
    name.split('.').filter(|label| !label.is_empty()).collect()
}

/// Turns a raw batch entry into a lowercase fully-qualified name.
///
/// Batch files frequently carry URLs instead of bare names, so a leading
/// `http://` or `https://` scheme and anything after the host are dropped.
pub fn normalize_target(raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    let without_scheme = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .unwrap_or(trimmed);

    let host = without_scheme
        .split(&['/', '?', '#'][..])
        .next()
        .unwrap_or_default()
        .trim_end_matches('.');

    if host.is_empty() {
        return Err(DomainError::InvalidDomainName(raw.to_string()));
    }

    if host.split('.').any(|label| label.is_empty()) || host.contains(char::is_whitespace) {
        return Err(DomainError::InvalidDomainName(raw.to_string()));
    }

    Ok(fqdn(&host.to_ascii_lowercase()))
}

pub fn is_root(name: &str) -> bool {
    name == ROOT
}
