use super::{LocaleData, DEFAULT_FREE_EMAIL_DOMAINS, DEFAULT_NAME_FORMATS, DEFAULT_TLDS};
use forgery_core::OptionSet;

pub static EN_US: LocaleData = LocaleData {
    first_names_male: &[
        "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
        "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Donald", "Steven",
        "Andrew", "Kenneth", "Joshua", "Kevin", "Brian", "George", "Timothy", "Ronald",
    ],
    first_names_female: &[
        "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica",
        "Sarah", "Karen", "Lisa", "Nancy", "Betty", "Margaret", "Sandra", "Ashley", "Kimberly",
        "Emily", "Donna", "Michelle", "Carol", "Amanda", "Dorothy", "Melissa", "Deborah",
    ],
    last_names: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
        "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas",
        "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris",
        "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "O'Connor", "McDonald",
    ],
    name_formats: DEFAULT_NAME_FORMATS,
    company_formats: OptionSet::uniform(
        "companyFormats",
        &[
            "{{lastName}} {{companySuffix}}",
            "{{lastName}}-{{lastName}}",
            "{{lastName}}, {{lastName}} and {{lastName}}",
        ],
    ),
    company_suffixes: &["Inc", "and Sons", "LLC", "Group", "PLC", "Ltd"],
    free_email_domains: DEFAULT_FREE_EMAIL_DOMAINS,
    tlds: DEFAULT_TLDS,
    tax_id: false,
};
