//! Internet formatters: emails, user names, domains, URLs and addresses
//!
//! User names and domain words are built from locale names, so they go
//! through the transliterator and fail with `TransliterationExhausted` when the
//! locale's script has no usable mapping.

use std::net::Ipv4Addr;
use std::sync::Arc;

use forgery_core::{
    FakerResult, FormatterRegistry, Generator, OptionSet, Provider, TransliterationMode,
};
use forgery_text::{collapse_dots, ensure_usable, trim_trailing_dots, Transliterator};

use crate::data::{LocaleData, SAFE_EMAIL_DOMAINS};
use crate::locale::Locale;
use crate::lorem;

const USER_NAME_FORMATS: OptionSet<&str> = OptionSet::uniform(
    "userNameFormats",
    &[
        "{{lastName}}.{{firstName}}",
        "{{firstName}}.{{lastName}}",
        "{{firstName}}##",
        "?{{lastName}}",
    ],
);

const EMAIL_FORMATS: OptionSet<&str> = OptionSet::uniform(
    "emailFormats",
    &["{{userName}}@{{domainName}}", "{{userName}}@{{freeEmailDomain}}"],
);

const URL_FORMATS: OptionSet<&str> = OptionSet::uniform(
    "urlFormats",
    &[
        "http://www.{{domainName}}/",
        "http://{{domainName}}/",
        "http://www.{{domainName}}/{{slug}}",
        "http://www.{{domainName}}/{{slug}}",
        "https://www.{{domainName}}/{{slug}}",
        "http://www.{{domainName}}/{{slug}}.html",
        "http://{{domainName}}/{{slug}}",
        "http://{{domainName}}/{{slug}}",
        "http://{{domainName}}/{{slug}}.html",
        "https://{{domainName}}/{{slug}}.html",
    ],
);

/// Private address blocks drawn from by `localIpv4`
const LOCAL_IP_BLOCKS: &[(Ipv4Addr, Ipv4Addr)] = &[
    (Ipv4Addr::new(10, 0, 0, 0), Ipv4Addr::new(10, 255, 255, 255)),
    (Ipv4Addr::new(192, 168, 0, 0), Ipv4Addr::new(192, 168, 255, 255)),
];

const SLUG_WORDS: usize = 6;

pub struct InternetProvider {
    locale: Locale,
    data: &'static LocaleData,
    transliterator: Arc<Transliterator>,
}

impl InternetProvider {
    pub fn new(locale: Locale, mode: TransliterationMode) -> Self {
        Self::with_transliterator(locale, Arc::new(Transliterator::new(mode)))
    }

    pub fn with_transliterator(locale: Locale, transliterator: Arc<Transliterator>) -> Self {
        Self {
            locale,
            data: locale.data(),
            transliterator,
        }
    }

    pub fn transliterator(&self) -> &Transliterator {
        &self.transliterator
    }
}

impl Provider for InternetProvider {
    fn name(&self) -> &'static str {
        "internet"
    }

    fn register(&self, registry: &mut FormatterRegistry) {
        let data = self.data;
        let locale = self.locale.code();

        registry.register("email", |g: &Generator| {
            let format = g.choose(&EMAIL_FORMATS)?;
            g.parse(format)
        });
        registry.register("safeEmail", |g: &Generator| {
            let domain = g.choose(&SAFE_EMAIL_DOMAINS)?;
            email_address(g, domain)
        });
        registry.register("freeEmail", move |g: &Generator| {
            let domain = g.choose(&data.free_email_domains)?;
            email_address(g, domain)
        });
        registry.register("companyEmail", |g: &Generator| {
            let domain = g.format_string("domainName")?;
            email_address(g, &domain)
        });
        registry.register("freeEmailDomain", move |g: &Generator| {
            g.choose(&data.free_email_domains).copied()
        });
        registry.register("safeEmailDomain", |g: &Generator| {
            g.choose(&SAFE_EMAIL_DOMAINS).copied()
        });

        let transliterator = Arc::clone(&self.transliterator);
        registry.register("userName", move |g: &Generator| {
            user_name(g, &transliterator, locale)
        });

        registry.register("password", |g: &Generator| {
            let config = g.config();
            let length = g.number_between(
                config.password_min_length as i64,
                config.password_max_length as i64,
            )?;
            g.asciify(&"*".repeat(length as usize))
        });

        registry.register("domainName", |g: &Generator| {
            Ok(format!(
                "{}.{}",
                g.format_string("domainWord")?,
                g.format_string("tld")?
            ))
        });

        let transliterator = Arc::clone(&self.transliterator);
        registry.register("domainWord", move |g: &Generator| {
            domain_word(g, &transliterator, locale)
        });

        registry.register("tld", move |g: &Generator| g.choose(&data.tlds).copied());
        registry.register("url", |g: &Generator| {
            let format = g.choose(&URL_FORMATS)?;
            g.parse(format)
        });
        registry.register("slug", |g: &Generator| slug(g, SLUG_WORDS, true));
        registry.register("ipv4", |g: &Generator| ipv4(g).map(|ip| ip.to_string()));
        registry.register("localIpv4", |g: &Generator| {
            local_ipv4(g).map(|ip| ip.to_string())
        });
        registry.register("ipv6", ipv6);
        registry.register("macAddress", mac_address);
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["person", "lorem"]
    }

    fn description(&self) -> Option<&'static str> {
        Some("Emails, user names, domains, URLs, IP and MAC addresses")
    }
}

/// `userName@domain` with every whitespace character removed
fn email_address(generator: &Generator, domain: &str) -> FakerResult<String> {
    let user_name = generator.format_string("userName")?;
    Ok(format!("{user_name}@{domain}")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect())
}

pub fn user_name(
    generator: &Generator,
    transliterator: &Transliterator,
    locale: &str,
) -> FakerResult<String> {
    let format = generator.choose(&USER_NAME_FORMATS)?;
    let user_name = generator.bothify(&generator.parse(format)?)?;
    let user_name = transliterator.transliterate(&user_name).to_lowercase();
    let user_name = ensure_usable(user_name, "userName", locale)?;

    Ok(trim_trailing_dots(&collapse_dots(&user_name)).to_string())
}

pub fn domain_word(
    generator: &Generator,
    transliterator: &Transliterator,
    locale: &str,
) -> FakerResult<String> {
    let last_name = generator.format_string("lastName")?;
    let word = transliterator.transliterate(&last_name).to_lowercase();
    let word = ensure_usable(word, "domainWord", locale)?;

    Ok(trim_trailing_dots(&word).to_string())
}

/// Dash-joined filler words; `variable` scales the count by 60% to 140%, plus one
pub fn slug(generator: &Generator, word_count: usize, variable: bool) -> FakerResult<String> {
    if word_count == 0 {
        return Ok(String::new());
    }
    let word_count = if variable {
        let percent = generator.number_between(60, 140)? as usize;
        word_count * percent / 100 + 1
    } else {
        word_count
    };
    Ok(lorem::words(generator, word_count)?.join("-"))
}

/// Address in `1.0.0.0..=127.255.255.255` or `128.0.0.0..=255.255.255.254`
pub fn ipv4(generator: &Generator) -> FakerResult<Ipv4Addr> {
    let address = if generator.rng().coin_flip()? {
        generator.number_between(0x8000_0000, 0xFFFF_FFFE)?
    } else {
        generator.number_between(0x0100_0000, 0x7FFF_FFFF)?
    };
    Ok(Ipv4Addr::from(address as u32))
}

pub fn local_ipv4(generator: &Generator) -> FakerResult<Ipv4Addr> {
    let (start, end) = generator.random_element(LOCAL_IP_BLOCKS)?;
    let address = generator.number_between(
        i64::from(u32::from(*start)),
        i64::from(u32::from(*end)),
    )?;
    Ok(Ipv4Addr::from(address as u32))
}

/// Eight colon-separated lower-case hex groups, leading zeros dropped
pub fn ipv6(generator: &Generator) -> FakerResult<String> {
    let groups = (0..8)
        .map(|_| generator.number_between(0, 0xFFFF).map(|group| format!("{group:x}")))
        .collect::<FakerResult<Vec<_>>>()?;
    Ok(groups.join(":"))
}

/// Six colon-separated upper-case hex pairs
pub fn mac_address(generator: &Generator) -> FakerResult<String> {
    let pairs = (0..6)
        .map(|_| generator.number_between(0, 0xFF).map(|pair| format!("{pair:02X}")))
        .collect::<FakerResult<Vec<_>>>()?;
    Ok(pairs.join(":"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lorem::LoremProvider;
    use crate::person::PersonProvider;
    use forgery_core::{GeneratorConfig, ScriptedRandom};

    fn generator_with(locale: Locale, rng: Arc<ScriptedRandom>) -> Generator {
        let mut generator = Generator::with_random(GeneratorConfig::default(), rng);
        generator.add_provider(&PersonProvider::new(locale));
        generator.add_provider(&LoremProvider);
        generator.add_provider(&InternetProvider::new(locale, TransliterationMode::Table));
        generator
    }

    #[test]
    fn test_ipv4_ranges() {
        // coin flip 1 selects the low block, whose lower bound is 1.0.0.0
        let generator = generator_with(Locale::EnUs, Arc::new(ScriptedRandom::new([1, 0])));
        assert_eq!(ipv4(&generator).unwrap(), Ipv4Addr::new(1, 0, 0, 0));

        let generator = generator_with(
            Locale::EnUs,
            Arc::new(ScriptedRandom::new([0, 0xFFFF_FFFF])),
        );
        assert_eq!(ipv4(&generator).unwrap(), Ipv4Addr::new(255, 255, 255, 254));
    }

    #[test]
    fn test_local_ipv4_blocks() {
        let generator = generator_with(
            Locale::EnUs,
            Arc::new(ScriptedRandom::new([1, i64::MAX])),
        );
        assert_eq!(local_ipv4(&generator).unwrap(), Ipv4Addr::new(192, 168, 255, 255));

        let generator = generator_with(Locale::EnUs, Arc::new(ScriptedRandom::new([0, 0])));
        assert_eq!(local_ipv4(&generator).unwrap(), Ipv4Addr::new(10, 0, 0, 0));
    }

    #[test]
    fn test_ipv6_and_mac_formatting() {
        let generator = generator_with(
            Locale::EnUs,
            Arc::new(ScriptedRandom::new([0xABCD, 0, 1, 0xFFFF, 0x10, 2, 3, 4])),
        );
        assert_eq!(ipv6(&generator).unwrap(), "abcd:0:1:ffff:10:2:3:4");

        let generator = generator_with(
            Locale::EnUs,
            Arc::new(ScriptedRandom::new([0, 0x0A, 0xFF, 0x10, 1, 0xBC])),
        );
        assert_eq!(mac_address(&generator).unwrap(), "00:0A:FF:10:01:BC");
    }

    #[test]
    fn test_slug_word_count() {
        let generator = generator_with(Locale::EnUs, Arc::new(ScriptedRandom::new([100])));
        // 6 * 100% + 1 words, then every exhausted draw picks the first word
        assert_eq!(
            slug(&generator, SLUG_WORDS, true).unwrap(),
            "alias-alias-alias-alias-alias-alias-alias"
        );
        assert_eq!(slug(&generator, 0, true).unwrap(), "");
        assert_eq!(slug(&generator, 2, false).unwrap(), "alias-alias");
    }

    #[test]
    fn test_user_name_collapses_and_trims_dots() {
        let mut generator = generator_with(Locale::EnUs, Arc::new(ScriptedRandom::new([0])));
        generator.registry_mut().register_constant("lastName", "Jr.");
        generator.registry_mut().register_constant("firstName", "Ann.");

        // "{{lastName}}.{{firstName}}" -> "Jr..Ann." -> "jr.ann"
        let transliterator = Transliterator::table();
        assert_eq!(
            user_name(&generator, &transliterator, "en_US").unwrap(),
            "jr.ann"
        );
    }

    #[test]
    fn test_user_name_exhausted_for_unmapped_script() {
        let generator = generator_with(Locale::ZhCn, Arc::new(ScriptedRandom::new([0])));
        let error = generator.format("userName").unwrap_err();
        assert!(error.is_transliteration_exhausted());
        assert!(error.to_string().contains("zh_CN"));

        let error = generator.format("domainWord").unwrap_err();
        assert!(error.is_transliteration_exhausted());
        assert!(error.to_string().contains("domainWord"));
    }

    #[test]
    fn test_domain_word_is_lowercase_ascii() {
        let generator = generator_with(Locale::RuRu, Arc::new(ScriptedRandom::new([0])));
        // first last name of the Russian table
        assert_eq!(generator.format_string("domainWord").unwrap(), "ivanov");
    }

    #[test]
    fn test_password_respects_configured_length() {
        let config = GeneratorConfig::default()
            .with_seed(9)
            .with_password_length(8, 10);
        let mut generator = Generator::new(config);
        generator.add_provider(&InternetProvider::new(Locale::EnUs, TransliterationMode::Table));

        for _ in 0..20 {
            let password = generator.format_string("password").unwrap();
            assert!((8..=10).contains(&password.len()));
            assert!(password.chars().all(|c| ('!'..='~').contains(&c)));
        }
    }
}
