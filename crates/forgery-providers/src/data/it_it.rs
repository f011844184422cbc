use super::{LocaleData, DEFAULT_NAME_FORMATS};
use forgery_core::OptionSet;

pub(super) const FIRST_NAMES_MALE: &[&str] = &[
    "Alessandro", "Andrea", "Antonio", "Carlo", "Davide", "Emanuele", "Fabrizio", "Federico",
    "Francesco", "Giacomo", "Giorgio", "Giovanni", "Giuseppe", "Lorenzo", "Luca", "Marco",
    "Matteo", "Nicolò", "Paolo", "Pietro", "Raffaele", "Riccardo", "Salvatore", "Simone",
];

pub(super) const FIRST_NAMES_FEMALE: &[&str] = &[
    "Alessandra", "Alice", "Anna", "Beatrice", "Chiara", "Elena", "Elisa", "Federica",
    "Francesca", "Giada", "Giulia", "Ilaria", "Laura", "Lucia", "Maria", "Martina", "Noemi",
    "Paola", "Rebecca", "Sara", "Silvia", "Sofia", "Valentina", "Viola",
];

pub(super) const LAST_NAMES: &[&str] = &[
    "Rossi", "Russo", "Ferrari", "Esposito", "Bianchi", "Romano", "Colombo", "Ricci", "Marino",
    "Greco", "Bruno", "Gallo", "Conti", "De Luca", "Mancini", "Costa", "Giordano", "Rizzo",
    "Lombardi", "Moretti", "D'Amico", "Barbieri", "Fontana", "Santoro", "Mariani", "Rinaldi",
    "Caruso", "Ferrara", "Galli", "Martini", "Leone", "Longo", "Gentile", "Martinelli", "Vitale",
    "Lombardo", "Serra", "Coppola", "De Santis", "D'Angelo", "Marchetti", "Parisi", "Villa",
    "Conte", "Ferraro", "Ferri", "Fabbri", "Bianco", "Marini", "Grasso", "Valentini", "Messina",
    "Sala", "De Angelis", "Gatti", "Pellegrini", "Palumbo", "Sanna", "Farina", "Rizzi", "Monti",
    "Cattaneo", "Morelli", "Amato", "Silvestri", "Mazza", "Testa", "Grassi", "Pellegrino",
    "Carbone", "Giuliani", "Benedetti", "Barone", "Rossetti", "Caputo", "Montanari", "Guerra",
    "Palmieri", "Bernardi", "Martino", "Fiore", "De Rosa", "Ferretti", "Bellini", "Basile",
    "Riva", "Donati", "Piras", "Vitali", "Battaglia", "Sartori", "Neri", "Costantini", "Milani",
    "Pagano", "Ruggiero", "Sorrentino", "D'Andrea", "Orlando", "Damico", "Negri",
];

pub(super) const COMPANY_FORMATS: OptionSet<&str> = OptionSet::uniform(
    "companyFormats",
    &[
        "{{lastName}} {{companySuffix}}",
        "{{lastName}}-{{lastName}} {{companySuffix}}",
        "{{lastName}}, {{lastName}} e {{lastName}} {{companySuffix}}",
    ],
);

pub(super) const COMPANY_SUFFIXES: &[&str] =
    &["SPA", "e figli", "Group", "s.r.l.", "s.n.c.", "s.a.s."];

pub static IT_IT: LocaleData = LocaleData {
    first_names_male: FIRST_NAMES_MALE,
    first_names_female: FIRST_NAMES_FEMALE,
    last_names: LAST_NAMES,
    name_formats: DEFAULT_NAME_FORMATS,
    company_formats: COMPANY_FORMATS,
    company_suffixes: COMPANY_SUFFIXES,
    free_email_domains: OptionSet::uniform(
        "freeEmailDomain",
        &["gmail.com", "yahoo.com", "email.it", "libero.it", "hotmail.com", "virgilio.it"],
    ),
    tlds: OptionSet::weighted(
        "tld",
        &[("com", 3), ("net", 1), ("org", 1), ("it", 4), ("eu", 1)],
    ),
    tax_id: true,
};
