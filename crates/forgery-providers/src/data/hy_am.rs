use super::{LocaleData, DEFAULT_NAME_FORMATS};
use forgery_core::OptionSet;

pub static HY_AM: LocaleData = LocaleData {
    first_names_male: &[
        "Արամ", "Արման", "Արթուր", "Գագիկ", "Գոռ", "Դավիթ", "Էդգար", "Հայկ", "Հովհաննես",
        "Տիգրան", "Նարեկ", "Սամվել", "Սուրեն", "Վարդան", "Ռուբեն", "Միքայել",
    ],
    first_names_female: &[
        "Անի", "Աննա", "Արմինե", "Գայանե", "Լուսինե", "Մարիամ", "Նարինե", "Սոնա", "Սյուզաննա",
        "Տաթևիկ", "Լիլիթ", "Հասմիկ", "Զառա", "Ռուզաննա", "Շուշան", "Նունե",
    ],
    last_names: &[
        "Հովհաննիսյան", "Հարությունյան", "Սարգսյան", "Խաչատրյան", "Գրիգորյան", "Պետրոսյան",
        "Ավետիսյան", "Կարապետյան", "Մկրտչյան", "Վարդանյան", "Գևորգյան", "Մանուկյան",
        "Պողոսյան", "Ղազարյան", "Եղիազարյան", "Չոբանյան", "Ջհանգիրյան", "Բաղդասարյան",
    ],
    name_formats: DEFAULT_NAME_FORMATS,
    company_formats: OptionSet::uniform("companyFormats", &["{{lastName}} {{companySuffix}}"]),
    company_suffixes: &["ՍՊԸ", "ՓԲԸ", "ԲԲԸ"],
    free_email_domains: OptionSet::uniform(
        "freeEmailDomain",
        &["gmail.com", "yahoo.com", "mail.ru", "yandex.ru", "mail.am"],
    ),
    tlds: OptionSet::weighted("tld", &[("com", 2), ("net", 1), ("org", 1), ("am", 6)]),
    tax_id: false,
};
