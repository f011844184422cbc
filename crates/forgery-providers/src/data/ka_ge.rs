use super::{LocaleData, DEFAULT_FREE_EMAIL_DOMAINS, DEFAULT_NAME_FORMATS};
use forgery_core::OptionSet;

pub static KA_GE: LocaleData = LocaleData {
    first_names_male: &[
        "გიორგი", "დავით", "ლევან", "ნიკოლოზ", "ალექსანდრე", "ირაკლი", "ლუკა", "დიმიტრი",
        "თორნიკე", "ზურაბ", "ვახტანგ", "მიხეილ", "ნიკა", "სანდრო", "ოთარ", "შოთა",
    ],
    first_names_female: &[
        "ნინო", "მარიამ", "ანა", "თამარ", "ელენე", "ეკატერინე", "სალომე", "ნათია", "ქეთევან",
        "ლიკა", "მაკა", "ნანა", "თეონა", "ხათუნა", "ცირა", "ჟუჟუნა",
    ],
    last_names: &[
        "ბერიძე", "კაპანაძე", "გელაშვილი", "მაისურაძე", "გიორგაძე", "ლომიძე", "წიკლაური",
        "ბოლქვაძე", "კვარაცხელია", "ნოზაძე", "ხუციშვილი", "შენგელია", "ჯაფარიძე", "ღლონტი",
        "ჩხეიძე", "ყიფიანი", "ფხაკაძე",
    ],
    name_formats: DEFAULT_NAME_FORMATS,
    company_formats: OptionSet::uniform("companyFormats", &["{{lastName}} {{companySuffix}}"]),
    company_suffixes: &["შპს", "სს", "კს"],
    free_email_domains: DEFAULT_FREE_EMAIL_DOMAINS,
    tlds: OptionSet::weighted("tld", &[("com", 2), ("net", 1), ("org", 1), ("ge", 6)]),
    tax_id: false,
};
