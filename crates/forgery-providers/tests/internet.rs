use std::sync::Arc;

use forgery_core::{Generator, GeneratorConfig, ScriptedRandom, TransliterationMode};
use forgery_providers::{register_locale, Locale};
use regex::Regex;

const TABLE_LOCALES: [Locale; 7] = [
    Locale::EnUs,
    Locale::ItIt,
    Locale::ItCh,
    Locale::RuRu,
    Locale::ElGr,
    Locale::KaGe,
    Locale::HyAm,
];

fn generator(locale: Locale, seed: u64) -> Generator {
    let config = GeneratorConfig::default()
        .with_locale(locale.code())
        .with_seed(seed)
        .with_transliteration(TransliterationMode::Table);
    let mut generator = Generator::new(config);
    register_locale(&mut generator, locale);
    generator
}

/// Table-mode generator whose draws replay `script`, then return each range minimum
fn scripted(locale: Locale, script: &[i64]) -> Generator {
    let config = GeneratorConfig::default()
        .with_locale(locale.code())
        .with_transliteration(TransliterationMode::Table);
    let rng = Arc::new(ScriptedRandom::new(script.iter().copied()));
    let mut generator = Generator::with_random(config, rng);
    register_locale(&mut generator, locale);
    generator
}

#[test]
fn emails_are_ascii_for_every_mapped_locale() {
    let email = Regex::new(r"^[a-z0-9._]+@[a-z0-9-]+(\.[a-z0-9-]+)+$").unwrap();
    for locale in TABLE_LOCALES {
        let generator = generator(locale, 2024);
        for name in ["email", "safeEmail", "freeEmail", "companyEmail"] {
            for _ in 0..25 {
                let value = generator.format_string(name).unwrap();
                assert!(email.is_match(&value), "{locale} {name}: {value}");
            }
        }
    }
}

#[test]
fn user_names_never_have_dot_runs_or_trailing_dot() {
    for locale in TABLE_LOCALES {
        let generator = generator(locale, 7);
        for _ in 0..100 {
            let user_name = generator.format_string("userName").unwrap();
            assert!(!user_name.is_empty(), "{locale}");
            assert!(!user_name.contains(".."), "{locale}: {user_name}");
            assert!(!user_name.ends_with('.'), "{locale}: {user_name}");
            assert_eq!(user_name, user_name.to_lowercase());
        }
    }
}

#[test]
fn chinese_name_only_formats_fail_with_exhausted_transliteration() {
    // first draw picks the user-name format
    for format in [0, 1] {
        let error = scripted(Locale::ZhCn, &[format]).format("userName").unwrap_err();
        assert!(error.is_transliteration_exhausted(), "format {format}: {error}");
    }
    let error = scripted(Locale::ZhCn, &[0]).format("email").unwrap_err();
    assert!(error.is_transliteration_exhausted(), "{error}");

    let generator = generator(Locale::ZhCn, 1);
    for name in ["domainWord", "domainName", "url"] {
        let error = generator.format(name).unwrap_err();
        assert!(error.is_transliteration_exhausted(), "{name}: {error}");
    }
    // formatters that do not transliterate still work
    assert!(generator.format_string("name").is_ok());
    assert!(generator.format_string("ipv4").is_ok());
}

#[test]
fn chinese_wildcard_formats_keep_expanded_characters() {
    assert_eq!(scripted(Locale::ZhCn, &[2]).format_string("userName").unwrap(), "00");
    assert_eq!(scripted(Locale::ZhCn, &[3]).format_string("userName").unwrap(), "a");

    let short = Regex::new(r"^([0-9]{2}|[a-z])$").unwrap();
    let generator = generator(Locale::ZhCn, 5);
    let mut produced = 0;
    for _ in 0..200 {
        match generator.format_string("userName") {
            Ok(value) => {
                assert!(short.is_match(&value), "{value}");
                produced += 1;
            }
            Err(error) => assert!(error.is_transliteration_exhausted(), "{error}"),
        }
    }
    assert!(produced > 0 && produced < 200, "produced {produced}");
}

#[test]
fn italian_tax_id_shape() {
    let tax_id = Regex::new(r"^[a-zA-Z]{6}[0-9]{2}[a-zA-Z][0-9]{2}[a-zA-Z][0-9]{3}[a-zA-Z]$").unwrap();
    for locale in [Locale::ItIt, Locale::ItCh] {
        let generator = generator(locale, 99);
        for _ in 0..50 {
            let value = generator.format_string("taxId").unwrap();
            assert!(tax_id.is_match(&value), "{value}");
        }
    }
}

#[test]
fn urls_and_addresses_have_expected_shapes() {
    let generator = generator(Locale::EnUs, 5);
    let url = Regex::new(r"^https?://(www\.)?[a-z0-9-]+\.[a-z]+/([a-z-]+(\.html)?)?$").unwrap();
    let ipv6 = Regex::new(r"^[0-9a-f]{1,4}(:[0-9a-f]{1,4}){7}$").unwrap();
    let mac = Regex::new(r"^[0-9A-F]{2}(:[0-9A-F]{2}){5}$").unwrap();

    for _ in 0..50 {
        let value = generator.format_string("url").unwrap();
        assert!(url.is_match(&value), "{value}");

        let value = generator.format_string("ipv6").unwrap();
        assert!(ipv6.is_match(&value), "{value}");

        let value = generator.format_string("macAddress").unwrap();
        assert!(mac.is_match(&value), "{value}");

        let ip: std::net::Ipv4Addr = generator.format_string("ipv4").unwrap().parse().unwrap();
        assert_ne!(ip.octets()[0], 0);
        assert_ne!(ip, std::net::Ipv4Addr::BROADCAST);

        let local: std::net::Ipv4Addr =
            generator.format_string("localIpv4").unwrap().parse().unwrap();
        assert!(local.octets()[0] == 10 || local.octets()[..2] == [192, 168]);
    }
}

#[test]
fn same_seed_same_sequence() {
    let first = generator(Locale::ElGr, 314);
    let second = generator(Locale::ElGr, 314);
    for name in ["userName", "email", "url", "password", "ipv6", "company"] {
        assert_eq!(
            first.format_string(name).unwrap(),
            second.format_string(name).unwrap()
        );
    }
}
