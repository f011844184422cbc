use forgery_core::{FormatterRegistry, Generator, Provider};

use crate::data::LocaleData;
use crate::locale::Locale;

pub struct CompanyProvider {
    data: &'static LocaleData,
}

impl CompanyProvider {
    pub fn new(locale: Locale) -> Self {
        Self {
            data: locale.data(),
        }
    }
}

impl Provider for CompanyProvider {
    fn name(&self) -> &'static str {
        "company"
    }

    fn register(&self, registry: &mut FormatterRegistry) {
        let data = self.data;

        registry.register("companySuffix", move |g: &Generator| {
            g.random_element(data.company_suffixes).copied()
        });
        registry.register("company", move |g: &Generator| {
            let format = g.choose(&data.company_formats)?;
            g.parse(format)
        });
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["person"]
    }

    fn description(&self) -> Option<&'static str> {
        Some("Company names built from last names and legal suffixes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::PersonProvider;
    use forgery_core::GeneratorConfig;

    #[test]
    fn test_company_uses_person_last_names() {
        let mut generator = Generator::new(GeneratorConfig::default().with_seed(3));
        generator.add_provider(&PersonProvider::new(Locale::ItIt));
        generator.add_provider(&CompanyProvider::new(Locale::ItIt));

        let data = Locale::ItIt.data();
        for _ in 0..20 {
            let company = generator.format_string("company").unwrap();
            assert!(!company.contains("{{"));
            assert!(data.last_names.iter().any(|last| company.contains(last)));
        }
    }

    #[test]
    fn test_company_without_person_fails_loudly() {
        let mut generator = Generator::new(GeneratorConfig::default().with_seed(3));
        generator.add_provider(&CompanyProvider::new(Locale::EnUs));

        let error = generator.format("company").unwrap_err();
        assert!(error.is_unknown_formatter());
        assert!(generator.format("companySuffix").is_ok());
    }
}
