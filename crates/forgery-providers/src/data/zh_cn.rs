use super::LocaleData;
use forgery_core::OptionSet;

pub static ZH_CN: LocaleData = LocaleData {
    first_names_male: &[
        "伟", "强", "磊", "洋", "勇", "军", "杰", "涛", "超", "明", "刚", "平", "辉", "鹏", "华",
    ],
    first_names_female: &[
        "芳", "娜", "敏", "静", "秀英", "丽", "艳", "娟", "霞", "玲", "桂英", "丹", "萍", "红",
    ],
    last_names: &[
        "王", "李", "张", "刘", "陈", "杨", "黄", "赵", "吴", "周", "徐", "孙", "马", "朱", "胡",
        "郭", "何", "高", "林", "罗",
    ],
    name_formats: OptionSet::uniform("nameFormats", &["{{lastName}}{{firstName}}"]),
    company_formats: OptionSet::uniform(
        "companyFormats",
        &["{{lastName}}{{companySuffix}}"],
    ),
    company_suffixes: &["科技有限公司", "网络有限公司", "信息有限公司", "传媒有限公司"],
    free_email_domains: OptionSet::uniform(
        "freeEmailDomain",
        &["126.com", "163.com", "qq.com", "sina.com", "gmail.com"],
    ),
    tlds: OptionSet::weighted("tld", &[("com", 4), ("net", 1), ("org", 1), ("cn", 4)]),
    tax_id: false,
};
