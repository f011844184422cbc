//! Person names and the Italian tax code

use forgery_core::{FormatterRegistry, Generator, Provider};

use crate::data::LocaleData;
use crate::locale::Locale;

/// Codice fiscale shape, uppercased after expansion
const TAX_ID_PATTERN: &str = "??????##?##?###?";

pub struct PersonProvider {
    data: &'static LocaleData,
}

impl PersonProvider {
    pub fn new(locale: Locale) -> Self {
        Self {
            data: locale.data(),
        }
    }
}

impl Provider for PersonProvider {
    fn name(&self) -> &'static str {
        "person"
    }

    fn register(&self, registry: &mut FormatterRegistry) {
        let data = self.data;

        registry.register("firstNameMale", move |g: &Generator| {
            g.random_element(data.first_names_male).copied()
        });
        registry.register("firstNameFemale", move |g: &Generator| {
            g.random_element(data.first_names_female).copied()
        });
        registry.register("firstName", move |g: &Generator| {
            let names = if g.rng().coin_flip()? {
                data.first_names_male
            } else {
                data.first_names_female
            };
            g.random_element(names).copied()
        });
        registry.register("lastName", move |g: &Generator| {
            g.random_element(data.last_names).copied()
        });
        registry.register("name", move |g: &Generator| {
            let format = g.choose(&data.name_formats)?;
            g.parse(format)
        });

        if data.tax_id {
            registry.register("taxId", |g: &Generator| {
                g.bothify(TAX_ID_PATTERN).map(|code| code.to_uppercase())
            });
        }
    }

    fn description(&self) -> Option<&'static str> {
        Some("First, last and full names")
    }
}
