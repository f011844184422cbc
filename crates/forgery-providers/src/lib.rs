//! # forgery-providers
//!
//! Locale data tables and the providers built on them: person names,
//! companies, lorem filler and internet formatters.
//!
//! ```rust
//! use forgery_core::{Generator, GeneratorConfig};
//! use forgery_providers::{register_locale, Locale};
//!
//! let mut generator = Generator::new(GeneratorConfig::default().with_seed(42));
//! register_locale(&mut generator, Locale::EnUs);
//!
//! let email = generator.format_string("email").unwrap();
//! assert!(email.contains('@'));
//! ```

pub mod company;
pub mod data;
pub mod internet;
pub mod locale;
pub mod lorem;
pub mod person;

use std::sync::Arc;

use forgery_core::{Generator, Provider, TransliterationMode};
use forgery_text::Transliterator;
use tracing::info;

pub use company::CompanyProvider;
pub use data::LocaleData;
pub use internet::InternetProvider;
pub use locale::Locale;
pub use lorem::LoremProvider;
pub use person::PersonProvider;

/// Every bundled provider for `locale`, in dependency order
pub fn providers_for(locale: Locale, mode: TransliterationMode) -> Vec<Box<dyn Provider>> {
    let transliterator = Arc::new(Transliterator::new(mode));
    vec![
        Box::new(PersonProvider::new(locale)),
        Box::new(CompanyProvider::new(locale)),
        Box::new(LoremProvider),
        Box::new(InternetProvider::with_transliterator(locale, transliterator)),
    ]
}

/// Register every bundled provider for `locale`, honoring the generator's
/// transliteration mode
pub fn register_locale(generator: &mut Generator, locale: Locale) {
    let mode = generator.config().transliteration;
    for provider in providers_for(locale, mode) {
        generator.add_provider(provider.as_ref());
    }
    info!(
        locale = %locale,
        formatters = generator.registry().len(),
        "registered locale providers"
    );
}
