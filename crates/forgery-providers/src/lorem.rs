//! Latin filler words

use forgery_core::{FakerResult, FormatterRegistry, Generator, Provider};

pub(crate) const WORDS: &[&str] = &[
    "alias", "consequatur", "aut", "perferendis", "sit", "voluptatem", "accusantium",
    "doloremque", "aperiam", "eaque", "ipsa", "quae", "ab", "illo", "inventore", "veritatis",
    "et", "quasi", "architecto", "beatae", "vitae", "dicta", "sunt", "explicabo", "aspernatur",
    "odit", "fugit", "sed", "quia", "consequuntur", "magni", "dolores", "eos", "qui",
    "ratione", "sequi", "nesciunt", "neque", "dolorem", "ipsum", "dolor", "amet",
    "consectetur", "adipisci", "velit", "non", "numquam", "eius", "modi", "tempora", "incidunt",
    "ut", "labore", "dolore", "magnam", "aliquam", "quaerat", "enim", "ad", "minima", "veniam",
    "quis", "nostrum", "exercitationem", "ullam", "corporis", "nemo", "ipsam", "voluptas",
    "suscipit", "laboriosam", "nisi", "aliquid", "ex", "ea", "commodi", "autem", "vel", "eum",
    "iure", "reprehenderit", "in", "voluptate", "esse", "quam", "nihil", "molestiae",
    "iusto", "odio", "dignissimos", "ducimus", "blanditiis", "praesentium", "laudantium",
    "totam", "rem", "voluptatum", "deleniti", "atque", "corrupti", "quos", "quas", "molestias",
    "excepturi", "sint", "occaecati", "cupiditate", "provident", "perspiciatis", "unde",
    "omnis", "iste", "natus", "error", "similique", "culpa", "officia", "deserunt", "mollitia",
    "animi", "id", "est", "laborum", "dolorum", "fuga", "harum", "quidem", "rerum", "facilis",
    "expedita", "distinctio", "nam", "libero", "tempore", "cum", "soluta", "nobis", "eligendi",
    "optio", "cumque", "impedit", "quo", "porro", "quisquam", "maxime", "placeat", "facere",
    "possimus", "assumenda", "repellendus", "temporibus", "quibusdam", "officiis", "debitis",
    "saepe", "eveniet", "voluptates", "repudiandae", "recusandae", "itaque", "earum", "hic",
    "tenetur", "a", "sapiente", "delectus", "reiciendis", "voluptatibus", "maiores", "doloribus",
    "asperiores", "repellat",
];

/// `count` words, each drawn through the registered `word` formatter
pub fn words(generator: &Generator, count: usize) -> FakerResult<Vec<String>> {
    (0..count).map(|_| generator.format_string("word")).collect()
}

/// Capitalized sentence of `word_count` words ending with a period
pub fn sentence(generator: &Generator, word_count: usize) -> FakerResult<String> {
    let mut sentence = words(generator, word_count)?.join(" ");
    if let Some(first) = sentence.get(..1).map(str::to_uppercase) {
        sentence.replace_range(..1, &first);
    }
    sentence.push('.');
    Ok(sentence)
}

pub struct LoremProvider;

impl Provider for LoremProvider {
    fn name(&self) -> &'static str {
        "lorem"
    }

    fn register(&self, registry: &mut FormatterRegistry) {
        registry.register("word", |g: &Generator| g.random_element(WORDS).copied());
        registry.register("sentence", |g: &Generator| {
            let word_count = g.number_between(4, 12)?;
            sentence(g, word_count as usize)
        });
    }

    fn description(&self) -> Option<&'static str> {
        Some("Lorem ipsum words and sentences")
    }
}
