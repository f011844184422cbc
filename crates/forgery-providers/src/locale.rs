use std::fmt;
use std::str::FromStr;

use forgery_core::FakerError;

use crate::data::{self, LocaleData};

/// Locales with bundled data tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    EnUs,
    ItIt,
    ItCh,
    RuRu,
    ElGr,
    KaGe,
    HyAm,
    ZhCn,
}

impl Locale {
    pub const ALL: [Locale; 8] = [
        Locale::EnUs,
        Locale::ItIt,
        Locale::ItCh,
        Locale::RuRu,
        Locale::ElGr,
        Locale::KaGe,
        Locale::HyAm,
        Locale::ZhCn,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUs => "en_US",
            Locale::ItIt => "it_IT",
            Locale::ItCh => "it_CH",
            Locale::RuRu => "ru_RU",
            Locale::ElGr => "el_GR",
            Locale::KaGe => "ka_GE",
            Locale::HyAm => "hy_AM",
            Locale::ZhCn => "zh_CN",
        }
    }

    pub fn data(&self) -> &'static LocaleData {
        match self {
            Locale::EnUs => &data::EN_US,
            Locale::ItIt => &data::IT_IT,
            Locale::ItCh => &data::IT_CH,
            Locale::RuRu => &data::RU_RU,
            Locale::ElGr => &data::EL_GR,
            Locale::KaGe => &data::KA_GE,
            Locale::HyAm => &data::HY_AM,
            Locale::ZhCn => &data::ZH_CN,
        }
    }
}

impl FromStr for Locale {
    type Err = FakerError;

    /// Accepts `en_US` as well as `en-US`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == normalized)
            .ok_or_else(|| FakerError::unknown_locale(s))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_codes() {
        assert_eq!("it_IT".parse::<Locale>().unwrap(), Locale::ItIt);
        assert_eq!("hy-AM".parse::<Locale>().unwrap(), Locale::HyAm);
        assert_eq!(" zh_CN ".parse::<Locale>().unwrap(), Locale::ZhCn);

        let error = "xx_XX".parse::<Locale>().unwrap_err();
        assert!(matches!(error, FakerError::UnknownLocale { ref locale } if locale == "xx_XX"));
    }

    #[test]
    fn test_display_round_trips_every_locale() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn test_every_locale_has_data() {
        for locale in Locale::ALL {
            let data = locale.data();
            assert!(!data.first_names_male.is_empty(), "{locale}");
            assert!(!data.first_names_female.is_empty(), "{locale}");
            assert!(!data.last_names.is_empty(), "{locale}");
            assert!(!data.company_suffixes.is_empty(), "{locale}");
        }
        assert!(Locale::ItIt.data().tax_id);
        assert!(Locale::ItCh.data().tax_id);
        assert!(!Locale::EnUs.data().tax_id);
    }
}
