use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use forgery_core::{FakerResult, Generator, GeneratorConfig, RandomSource, StdRandom};
use forgery_providers::{lorem, register_locale, Locale};
use tracing::debug;

/// A [`Generator`] with every bundled provider registered for one locale.
///
/// Derefs to the generator, so `format`, `parse`, `bothify` and friends are
/// available directly.
#[derive(Debug)]
pub struct Faker {
    generator: Generator,
    locale: Locale,
}

macro_rules! formatter_methods {
    ($($(#[$meta:meta])* $method:ident => $formatter:literal;)*) => {
        $(
            $(#[$meta])*
            pub fn $method(&self) -> FakerResult<String> {
                self.generator.format_string($formatter)
            }
        )*
    };
}

impl Faker {
    /// Default configuration for `locale`, seeded from entropy
    pub fn new(locale: Locale) -> Self {
        let config = GeneratorConfig::default().with_locale(locale.code());
        let rng = Arc::new(StdRandom::from_seed_option(config.seed));
        Self::build(config, rng, locale)
    }

    /// Fails with `UnknownLocale` when the configured locale has no bundled data
    pub fn from_config(config: GeneratorConfig) -> FakerResult<Self> {
        let rng = Arc::new(StdRandom::from_seed_option(config.seed));
        Self::with_random(config, rng)
    }

    /// Use a caller-supplied random source, e.g. a [`forgery_core::ScriptedRandom`]
    pub fn with_random(config: GeneratorConfig, rng: Arc<dyn RandomSource>) -> FakerResult<Self> {
        config.validate()?;
        let locale: Locale = config.locale.parse()?;
        Ok(Self::build(config, rng, locale))
    }

    /// Configuration from `FORGERY_*` environment variables
    pub fn from_env() -> FakerResult<Self> {
        Self::from_config(GeneratorConfig::from_env()?)
    }

    fn build(config: GeneratorConfig, rng: Arc<dyn RandomSource>, locale: Locale) -> Self {
        debug!(
            locale = %locale,
            seeded = config.seed.is_some(),
            transliteration = %config.transliteration,
            "building faker"
        );
        let mut generator = Generator::with_random(config, rng);
        register_locale(&mut generator, locale);
        Self { generator, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    pub fn into_generator(self) -> Generator {
        self.generator
    }

    formatter_methods! {
        name => "name";
        first_name => "firstName";
        first_name_male => "firstNameMale";
        first_name_female => "firstNameFemale";
        last_name => "lastName";
        /// Italian locales only; `UnknownFormatter` elsewhere
        tax_id => "taxId";
        company => "company";
        company_suffix => "companySuffix";
        word => "word";
        sentence => "sentence";
        email => "email";
        safe_email => "safeEmail";
        free_email => "freeEmail";
        company_email => "companyEmail";
        free_email_domain => "freeEmailDomain";
        safe_email_domain => "safeEmailDomain";
        /// Transliterated, lowercase; `TransliterationExhausted` for unmapped scripts
        user_name => "userName";
        password => "password";
        domain_name => "domainName";
        domain_word => "domainWord";
        tld => "tld";
        url => "url";
        slug => "slug";
        ipv4 => "ipv4";
        local_ipv4 => "localIpv4";
        ipv6 => "ipv6";
        mac_address => "macAddress";
    }

    pub fn words(&self, count: usize) -> FakerResult<Vec<String>> {
        lorem::words(&self.generator, count)
    }
}

impl Default for Faker {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl Deref for Faker {
    type Target = Generator;

    fn deref(&self) -> &Generator {
        &self.generator
    }
}

impl DerefMut for Faker {
    fn deref_mut(&mut self) -> &mut Generator {
        &mut self.generator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgery_core::{FakerError, ScriptedRandom};

    #[test]
    fn test_new_registers_locale_providers() {
        let faker = Faker::new(Locale::ItIt);
        assert_eq!(faker.locale(), Locale::ItIt);
        assert_eq!(faker.config().locale, "it_IT");
        assert!(faker.registry().contains("taxId"));
        assert!(faker.tax_id().is_ok());
    }

    #[test]
    fn test_from_config_rejects_unknown_locale() {
        let error = Faker::from_config(GeneratorConfig::default().with_locale("xx_XX")).unwrap_err();
        assert!(matches!(error, FakerError::UnknownLocale { .. }));
    }

    #[test]
    fn test_from_config_validates() {
        let config = GeneratorConfig::default().with_password_length(10, 2);
        let error = Faker::from_config(config).unwrap_err();
        assert!(matches!(error, FakerError::Config(_)));
    }

    #[test]
    fn test_scripted_random_drives_formatters() {
        let rng = Arc::new(ScriptedRandom::new([0, 0]));
        let faker = Faker::with_random(GeneratorConfig::default(), rng).unwrap();
        assert_eq!(faker.last_name().unwrap(), "Smith");
        // exhausted script falls back to the lower bound
        assert_eq!(faker.mac_address().unwrap(), "00:00:00:00:00:00");
    }

    #[test]
    fn test_words_and_deref() {
        let mut faker = Faker::from_config(GeneratorConfig::default().with_seed(1)).unwrap();
        assert_eq!(faker.words(4).unwrap().len(), 4);

        faker.registry_mut().register_constant("lastName", "Doe");
        assert_eq!(faker.domain_word().unwrap(), "doe");
        assert_eq!(faker.parse("{{lastName}}!").unwrap(), "Doe!");
    }
}
