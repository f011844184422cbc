use super::{LocaleData, DEFAULT_NAME_FORMATS};
use forgery_core::OptionSet;

pub static EL_GR: LocaleData = LocaleData {
    first_names_male: &[
        "Αθανάσιος", "Αλέξανδρος", "Ανδρέας", "Αντώνης", "Βασίλειος", "Γεώργιος", "Δημήτριος",
        "Ευάγγελος", "Ηλίας", "Θεόδωρος", "Ιωάννης", "Κωνσταντίνος", "Λάμπρος", "Μιχαήλ",
        "Νικόλαος", "Παναγιώτης", "Σπυρίδων", "Σταύρος", "Χρήστος", "Φώτης",
    ],
    first_names_female: &[
        "Αγγελική", "Αικατερίνη", "Αναστασία", "Βασιλική", "Γεωργία", "Δέσποινα", "Ελένη",
        "Ευαγγελία", "Ειρήνη", "Ιωάννα", "Κωνσταντίνα", "Μαρία", "Νικολέτα", "Παρασκευή",
        "Σοφία", "Σταυρούλα", "Φωτεινή", "Χριστίνα",
    ],
    last_names: &[
        "Παπαδόπουλος", "Παπαγεωργίου", "Οικονόμου", "Γεωργίου", "Παπαδημητρίου", "Βασιλείου",
        "Νικολάου", "Καραγιάννης", "Ιωάννου", "Μακρής", "Δημητρίου", "Αθανασίου", "Παππάς",
        "Κωνσταντίνου", "Αντωνίου", "Χριστοδούλου", "Ζαχαρίου", "Λαμπρόπουλος", "Σταθόπουλος",
    ],
    name_formats: DEFAULT_NAME_FORMATS,
    company_formats: OptionSet::uniform(
        "companyFormats",
        &["{{lastName}} {{companySuffix}}", "{{lastName}}-{{lastName}}"],
    ),
    company_suffixes: &["Α.Ε.", "Ο.Ε.", "Ε.Ε.", "Ε.Π.Ε.", "Ι.Κ.Ε."],
    free_email_domains: OptionSet::uniform(
        "freeEmailDomain",
        &["hol.gr", "gmail.com", "hotmail.gr", "yahoo.gr", "otenet.gr"],
    ),
    tlds: OptionSet::weighted("tld", &[("com", 2), ("net", 1), ("org", 1), ("gr", 6)]),
    tax_id: false,
};
