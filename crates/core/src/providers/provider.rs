use crate::providers::FormatterRegistry;

/// A bundle of formatters, usually backed by one locale's data tables
pub trait Provider: Send + Sync {
    /// Provider name for identification and dependency checks
    fn name(&self) -> &'static str;

    /// Register this provider's formatters; later registrations override earlier ones
    fn register(&self, registry: &mut FormatterRegistry);

    /// Providers whose formatters this provider's templates reference
    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }

    /// Provider description
    fn description(&self) -> Option<&'static str> {
        None
    }
}

/// Provider metadata for introspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMetadata {
    pub name: String,
    pub description: Option<String>,
    pub dependencies: Vec<String>,
    /// Formatter names the provider registered
    pub formatters: Vec<String>,
}

impl ProviderMetadata {
    pub fn from_provider<P: Provider + ?Sized>(provider: &P, formatters: Vec<String>) -> Self {
        Self {
            name: provider.name().to_string(),
            description: provider.description().map(|s| s.to_string()),
            dependencies: provider
                .dependencies()
                .into_iter()
                .map(|s| s.to_string())
                .collect(),
            formatters,
        }
    }
}
