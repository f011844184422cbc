//! Per-locale data tables

use forgery_core::OptionSet;

mod el_gr;
mod en_us;
mod hy_am;
mod it_ch;
mod it_it;
mod ka_ge;
mod ru_ru;
mod zh_cn;

pub use el_gr::EL_GR;
pub use en_us::EN_US;
pub use hy_am::HY_AM;
pub use it_ch::IT_CH;
pub use it_it::IT_IT;
pub use ka_ge::KA_GE;
pub use ru_ru::RU_RU;
pub use zh_cn::ZH_CN;

/// Read-only tables backing one locale's providers
#[derive(Debug)]
pub struct LocaleData {
    pub first_names_male: &'static [&'static str],
    pub first_names_female: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub name_formats: OptionSet<&'static str>,
    pub company_formats: OptionSet<&'static str>,
    pub company_suffixes: &'static [&'static str],
    pub free_email_domains: OptionSet<&'static str>,
    pub tlds: OptionSet<&'static str>,
    /// Registers `taxId` (Italian codice fiscale shape)
    pub tax_id: bool,
}

pub const DEFAULT_FREE_EMAIL_DOMAINS: OptionSet<&str> =
    OptionSet::uniform("freeEmailDomain", &["gmail.com", "yahoo.com", "hotmail.com"]);

pub const DEFAULT_TLDS: OptionSet<&str> = OptionSet::weighted(
    "tld",
    &[("com", 6), ("biz", 1), ("info", 1), ("net", 1), ("org", 1)],
);

pub const SAFE_EMAIL_DOMAINS: OptionSet<&str> =
    OptionSet::uniform("safeEmailDomain", &["example.com", "example.org", "example.net"]);

pub const DEFAULT_NAME_FORMATS: OptionSet<&str> = OptionSet::weighted(
    "nameFormats",
    &[
        ("{{firstNameMale}} {{lastName}}", 4),
        ("{{firstNameFemale}} {{lastName}}", 4),
        ("{{lastName}} {{firstName}}", 1),
    ],
);
