use async_trait::async_trait;
use ferrous_dig_application::ports::ResolverConfigProvider;
use ferrous_dig_domain::DomainError;
use tokio::fs;
use tracing::debug;

/// Reads `nameserver` entries from a resolv.conf-format file
pub struct ResolvConfReader {
    path: String,
}

impl ResolvConfReader {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Default for ResolvConfReader {
    fn default() -> Self {
        Self::new("/etc/resolv.conf")
    }
}

/// Extracts nameserver addresses in file order.
///
/// Lines starting with `#` or `;` (after leading blanks) are comments. Only
/// the first argument of a `nameserver` line is used; other directives are
/// skipped.
pub fn parse_nameservers(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim_start)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with(';'))
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next()) {
                (Some("nameserver"), Some(address)) => Some(address.to_string()),
                _ => None,
            }
        })
        .collect()
}

#[async_trait]
impl ResolverConfigProvider for ResolvConfReader {
    async fn nameservers(&self) -> Result<Vec<String>, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::ConfigError(format!("Failed to read {}: {}", self.path, e))
        })?;

        let nameservers = parse_nameservers(&content);
        debug!(path = %self.path, nameservers = ?nameservers, "Resolver configuration read");
        Ok(nameservers)
    }
}
