use super::it_it::{COMPANY_FORMATS, FIRST_NAMES_FEMALE, FIRST_NAMES_MALE};
use super::{LocaleData, DEFAULT_NAME_FORMATS};
use forgery_core::OptionSet;

pub static IT_CH: LocaleData = LocaleData {
    first_names_male: FIRST_NAMES_MALE,
    first_names_female: FIRST_NAMES_FEMALE,
    last_names: &[
        "Bernasconi", "Bianchi", "Bernardi", "Brenni", "Cattaneo", "Colombo", "Crivelli", "Ferrari",
        "Fontana", "Galli", "Gianella", "Guscetti", "Lepori", "Lurati", "Medici", "Pedrazzini",
        "Poretti", "Quadri", "Rossi", "Rusconi", "Soldati", "Tamò", "Vanoni", "Zanetti",
        "Zürcher", "Müller", "Keller", "Schmid", "Gähwiler",
    ],
    name_formats: DEFAULT_NAME_FORMATS,
    company_formats: COMPANY_FORMATS,
    company_suffixes: &["SA", "Sagl", "e figli", "AG", "GmbH"],
    free_email_domains: OptionSet::uniform(
        "freeEmailDomain",
        &["gmail.com", "hotmail.com", "yahoo.com", "bluewin.ch", "gmx.ch", "sunrise.ch"],
    ),
    tlds: OptionSet::weighted("tld", &[("com", 2), ("net", 1), ("org", 1), ("ch", 6)]),
    tax_id: true,
};
