//! Formatter dispatch
//!
//! [`Generator`] owns the formatter registry, the shared random source and the
//! configuration. Formatters receive `&Generator` so they can dispatch nested
//! formatters by name and evaluate templates.

use crate::config::GeneratorConfig;
use crate::errors::FakerResult;
use crate::expander::Expander;
use crate::options::{random_element, OptionSet};
use crate::providers::{FormatterRegistry, Provider, ProviderMetadata};
use crate::random::{RandomSource, StdRandom};
use crate::template::Template;
use crate::value::FakeValue;
use std::sync::Arc;
use tracing::{debug, warn};

/// Name-based formatter dispatch consumed by the template engine
pub trait Resolve {
    /// Invoke a zero-argument formatter by exact name
    fn resolve(&self, name: &str) -> FakerResult<FakeValue>;

    /// Every formatter name that can be resolved
    fn formatter_names(&self) -> Vec<String>;
}

pub struct Generator {
    registry: FormatterRegistry,
    providers: Vec<ProviderMetadata>,
    rng: Arc<dyn RandomSource>,
    config: GeneratorConfig,
}

impl Generator {
    /// Create an empty generator; seeded when the config carries a seed
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = Arc::new(StdRandom::from_seed_option(config.seed));
        Self::with_random(config, rng)
    }

    pub fn with_random(config: GeneratorConfig, rng: Arc<dyn RandomSource>) -> Self {
        Self {
            registry: FormatterRegistry::new(),
            providers: Vec::new(),
            rng,
            config,
        }
    }

    /// Wrap an existing registry with default configuration
    pub fn with_registry(registry: FormatterRegistry) -> Self {
        let mut generator = Self::new(GeneratorConfig::default());
        generator.registry = registry;
        generator
    }

    pub fn add_provider<P: Provider + ?Sized>(&mut self, provider: &P) {
        let missing: Vec<&'static str> = provider
            .dependencies()
            .into_iter()
            .filter(|dep| !self.providers.iter().any(|p| p.name == *dep))
            .collect();
        if !missing.is_empty() {
            warn!(
                "Provider '{}' added before its dependencies: {}",
                provider.name(),
                missing.join(", ")
            );
        }

        let before: Vec<String> = self.registry.names();
        provider.register(&mut self.registry);
        let added: Vec<String> = self
            .registry
            .names()
            .into_iter()
            .filter(|name| !before.contains(name))
            .collect();

        debug!(
            "Registered provider '{}' ({} new formatters)",
            provider.name(),
            added.len()
        );
        self.providers
            .push(ProviderMetadata::from_provider(provider, added));
    }

    pub fn providers(&self) -> &[ProviderMetadata] {
        &self.providers
    }

    pub fn registry(&self) -> &FormatterRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut FormatterRegistry {
        &mut self.registry
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn locale(&self) -> &str {
        &self.config.locale
    }

    pub fn rng(&self) -> &dyn RandomSource {
        self.rng.as_ref()
    }

    /// Invoke a formatter by name
    pub fn format(&self, name: &str) -> FakerResult<FakeValue> {
        let formatter = self.registry.get(name)?;
        formatter(self)
    }

    /// Invoke a formatter by name and stringify the result
    pub fn format_string(&self, name: &str) -> FakerResult<String> {
        self.format(name).map(FakeValue::into_string)
    }

    /// Evaluate a `{{formatter}}` template against this generator's formatters
    pub fn parse(&self, template: &str) -> FakerResult<String> {
        Template::parse(template).render(|name| self.format_string(name))
    }

    pub fn expander(&self) -> Expander<'_> {
        Expander::new(self.rng()).with_letter_case(self.config.letter_case)
    }

    pub fn bothify(&self, pattern: &str) -> FakerResult<String> {
        self.expander().bothify(pattern)
    }

    pub fn numerify(&self, pattern: &str) -> FakerResult<String> {
        self.expander().numerify(pattern)
    }

    pub fn lexify(&self, pattern: &str) -> FakerResult<String> {
        self.expander().lexify(pattern)
    }

    pub fn asciify(&self, pattern: &str) -> FakerResult<String> {
        self.expander().asciify(pattern)
    }

    pub fn number_between(&self, min: i64, max: i64) -> FakerResult<i64> {
        self.rng.int_between(min, max)
    }

    pub fn random_element<'a, T>(&self, items: &'a [T]) -> FakerResult<&'a T> {
        random_element(self.rng(), items)
    }

    pub fn choose<T>(&self, options: &OptionSet<T>) -> FakerResult<&'static T> {
        options.choose(self.rng())
    }

    /// Run `name` `count` times
    pub fn format_many(&self, name: &str, count: usize) -> FakerResult<Vec<FakeValue>> {
        (0..count).map(|_| self.format(name)).collect()
    }
}

impl Resolve for Generator {
    fn resolve(&self, name: &str) -> FakerResult<FakeValue> {
        self.format(name)
    }

    fn formatter_names(&self) -> Vec<String> {
        self.registry.names()
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("config", &self.config)
            .field("providers", &self.providers)
            .field("formatters", &self.registry.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FakerError;
    use crate::random::ScriptedRandom;

    struct GreetingProvider;

    impl Provider for GreetingProvider {
        fn name(&self) -> &'static str {
            "greeting"
        }

        fn register(&self, registry: &mut FormatterRegistry) {
            registry.register_constant("firstName", "Ada");
            registry.register_constant("lastName", "Lovelace");
            registry.register("fullName", |g: &Generator| g.parse("{{firstName}} {{lastName}}"));
            registry.register("echo", |_: &Generator| Ok("{{firstName}}"));
            registry.register("broken", |g: &Generator| g.parse("{{nope}}"));
        }
    }

    struct DependentProvider;

    impl Provider for DependentProvider {
        fn name(&self) -> &'static str {
            "dependent"
        }

        fn register(&self, registry: &mut FormatterRegistry) {
            registry.register("code", |g: &Generator| g.numerify("###"));
        }

        fn dependencies(&self) -> Vec<&'static str> {
            vec!["greeting"]
        }
    }

    fn generator() -> Generator {
        let mut generator = Generator::new(GeneratorConfig::default().with_seed(7));
        generator.add_provider(&GreetingProvider);
        generator
    }

    #[test]
    fn test_recursive_dispatch() {
        let generator = generator();
        assert_eq!(generator.format_string("fullName").unwrap(), "Ada Lovelace");
        assert_eq!(
            generator.parse("{{lastName}}, {{firstName}}").unwrap(),
            "Lovelace, Ada"
        );
    }

    #[test]
    fn test_resolved_placeholder_text_is_verbatim() {
        let generator = generator();
        assert_eq!(generator.parse("[{{echo}}]").unwrap(), "[{{firstName}}]");
    }

    #[test]
    fn test_unknown_formatter_surfaces_from_nested_template() {
        let generator = generator();
        let error = generator.format("broken").unwrap_err();
        assert!(matches!(error, FakerError::UnknownFormatter { ref name } if name == "nope"));
        assert!(generator.parse("{{Firstname}}").unwrap_err().is_unknown_formatter());
    }

    #[test]
    fn test_provider_metadata() {
        let mut generator = generator();
        generator.add_provider(&DependentProvider);

        let providers = generator.providers();
        assert_eq!(providers.len(), 2);
        assert_eq!(providers[0].name, "greeting");
        assert_eq!(providers[0].formatters.len(), 5);
        assert_eq!(providers[1].dependencies, vec!["greeting"]);
        assert_eq!(providers[1].formatters, vec!["code"]);
        assert!(generator.formatter_names().contains(&"code".to_string()));
    }

    #[test]
    fn test_expanders_use_injected_source() {
        let rng = Arc::new(ScriptedRandom::new([4, 2, 0]));
        let generator = Generator::with_random(GeneratorConfig::default(), rng);
        assert_eq!(generator.bothify("#-#-?").unwrap(), "4-2-a");
    }

    #[test]
    fn test_number_between_and_elements() {
        let generator = generator();
        let n = generator.number_between(1, 3).unwrap();
        assert!((1..=3).contains(&n));
        assert!(generator.number_between(3, 1).unwrap_err().is_invalid_range());

        let picked = generator.random_element(&["x", "y"]).unwrap();
        assert!(["x", "y"].contains(picked));
        assert_eq!(generator.format_many("firstName", 3).unwrap().len(), 3);
    }

    #[test]
    fn test_generator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Generator>();
    }
}
