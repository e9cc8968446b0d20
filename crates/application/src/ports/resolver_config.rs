use async_trait::async_trait;
use ferrous_dig_domain::DomainError;

/// Source of the system's configured nameservers.
#[async_trait]
pub trait ResolverConfigProvider: Send + Sync {
    /// Nameserver addresses in configuration order. May be empty.
    async fn nameservers(&self) -> Result<Vec<String>, DomainError>;
}
