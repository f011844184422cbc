use super::{LocaleData, DEFAULT_NAME_FORMATS};
use forgery_core::OptionSet;

pub static RU_RU: LocaleData = LocaleData {
    first_names_male: &[
        "Александр", "Алексей", "Андрей", "Артём", "Борис", "Вадим", "Василий", "Виктор",
        "Владимир", "Геннадий", "Григорий", "Дмитрий", "Евгений", "Иван", "Игорь", "Кирилл",
        "Максим", "Михаил", "Никита", "Николай", "Олег", "Павел", "Сергей", "Юрий",
    ],
    first_names_female: &[
        "Александра", "Алёна", "Анастасия", "Анна", "Валентина", "Вера", "Галина", "Дарья",
        "Екатерина", "Елена", "Ирина", "Ксения", "Любовь", "Людмила", "Мария", "Наталья",
        "Нина", "Ольга", "Полина", "Светлана", "Софья", "Татьяна", "Юлия", "Яна",
    ],
    last_names: &[
        "Иванов", "Смирнов", "Кузнецов", "Попов", "Васильев", "Петров", "Соколов", "Михайлов",
        "Новиков", "Фёдоров", "Морозов", "Волков", "Алексеев", "Лебедев", "Семёнов", "Егоров",
        "Павлов", "Козлов", "Степанов", "Николаев", "Орлов", "Андреев", "Макаров", "Никитин",
        "Захаров", "Зайцев", "Соловьёв", "Борисов", "Яковлев", "Григорьев", "Щербаков",
    ],
    name_formats: OptionSet::uniform(
        "nameFormats",
        &["{{lastName}} {{firstName}}", "{{firstName}} {{lastName}}"],
    ),
    company_formats: OptionSet::uniform(
        "companyFormats",
        &["{{companySuffix}} {{lastName}}", "{{companySuffix}} {{lastName}} и {{lastName}}"],
    ),
    company_suffixes: &["ООО", "ЗАО", "ОАО", "ИП", "НПО", "МФО"],
    free_email_domains: OptionSet::uniform(
        "freeEmailDomain",
        &["yandex.ru", "ya.ru", "mail.ru", "gmail.com", "rambler.ru"],
    ),
    tlds: OptionSet::weighted("tld", &[("com", 2), ("net", 1), ("org", 1), ("ru", 6)]),
    tax_id: false,
};
