use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The eight supported casing transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseVariant {
    Upper,
    Lower,
    Sentence,
    Title,
    Camel,
    Pascal,
    Snake,
    Kebab,
}

impl CaseVariant {
    pub const ALL: [CaseVariant; 8] = [
        CaseVariant::Upper,
        CaseVariant::Lower,
        CaseVariant::Sentence,
        CaseVariant::Title,
        CaseVariant::Camel,
        CaseVariant::Pascal,
        CaseVariant::Snake,
        CaseVariant::Kebab,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CaseVariant::Upper => "upper",
            CaseVariant::Lower => "lower",
            CaseVariant::Sentence => "sentence",
            CaseVariant::Title => "title",
            CaseVariant::Camel => "camel",
            CaseVariant::Pascal => "pascal",
            CaseVariant::Snake => "snake",
            CaseVariant::Kebab => "kebab",
        }
    }
}

impl std::str::FromStr for CaseVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_lowercase().as_str() {
            "upper" => Ok(CaseVariant::Upper),
            "lower" => Ok(CaseVariant::Lower),
            "sentence" => Ok(CaseVariant::Sentence),
            "title" => Ok(CaseVariant::Title),
            "camel" => Ok(CaseVariant::Camel),
            "pascal" => Ok(CaseVariant::Pascal),
            "snake" => Ok(CaseVariant::Snake),
            "kebab" => Ok(CaseVariant::Kebab),
            other => Err(Error::InvalidInput(format!(
                "unknown case variant: {other}. Valid variants: upper, lower, sentence, title, camel, pascal, snake, kebab"
            ))),
        }
    }
}

/// Apply a casing transformation. Empty input is the identity for every
/// variant.
pub fn transform(text: &str, variant: CaseVariant) -> String {
    match variant {
        CaseVariant::Upper => text.to_uppercase(),
        CaseVariant::Lower => text.to_lowercase(),
        CaseVariant::Sentence => sentence_case(text),
        CaseVariant::Title => title_case(text),
        CaseVariant::Camel => camel_case(text),
        CaseVariant::Pascal => pascal_case(text),
        CaseVariant::Snake => delimited_case(text, "_"),
        CaseVariant::Kebab => delimited_case(text, "-"),
    }
}

/// Split text into words, treating non-alphanumeric runs, lower-to-upper
/// transitions, acronym boundaries (`HTTPServer` -> `HTTP`, `Server`), and
/// digit-to-letter transitions as separators. Digits attach to the letters
/// that precede them (`foo123` stays one word).
pub fn split_words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            // current is non-empty, so chars[i - 1] is alphanumeric
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = ((prev.is_lowercase() || prev.is_numeric()) && c.is_uppercase())
                || (prev.is_numeric() && c.is_alphabetic())
                || (prev.is_uppercase() && c.is_uppercase() && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn sentence_case(text: &str) -> String {
    let re = Regex::new(r"(^\s*\w|[.!?]\s*\w)").unwrap();
    let lowered = text.to_lowercase();
    re.replace_all(&lowered, |caps: &regex::Captures| caps[0].to_uppercase())
        .into_owned()
}

fn title_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn camel_case(text: &str) -> String {
    let words = split_words(text);
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&capitalize_first(&word.to_lowercase()));
        }
    }
    out
}

fn pascal_case(text: &str) -> String {
    split_words(text)
        .iter()
        .map(|word| capitalize_first(&word.to_lowercase()))
        .collect()
}

fn delimited_case(text: &str, separator: &str) -> String {
    split_words(text)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_and_lower() {
        assert_eq!(transform("Hello World", CaseVariant::Upper), "HELLO WORLD");
        assert_eq!(transform("Hello World", CaseVariant::Lower), "hello world");
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(
            transform("hello world. goodbye world!", CaseVariant::Sentence),
            "Hello world. Goodbye world!"
        );
    }

    #[test]
    fn test_sentence_case_question_marks() {
        assert_eq!(
            transform("IS THIS IT? yes it is.", CaseVariant::Sentence),
            "Is this it? Yes it is."
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(
            transform("the quick brown fox", CaseVariant::Title),
            "The Quick Brown Fox"
        );
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(transform("hello world", CaseVariant::Camel), "helloWorld");
        assert_eq!(
            transform("Hello there, World", CaseVariant::Camel),
            "helloThereWorld"
        );
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(transform("hello world", CaseVariant::Pascal), "HelloWorld");
        assert_eq!(transform("foo-bar_baz", CaseVariant::Pascal), "FooBarBaz");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(transform("Hello World", CaseVariant::Snake), "hello_world");
        assert_eq!(transform("fooBarBaz", CaseVariant::Snake), "foo_bar_baz");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(transform("Hello World", CaseVariant::Kebab), "hello-world");
        assert_eq!(transform("fooBar123", CaseVariant::Kebab), "foo-bar123");
    }

    #[test]
    fn test_empty_input_is_identity() {
        for variant in CaseVariant::ALL {
            assert_eq!(transform("", variant), "");
        }
    }

    #[test]
    fn test_split_words_acronyms() {
        assert_eq!(split_words("HTTPServer"), vec!["HTTP", "Server"]);
        assert_eq!(split_words("parseHTMLBody"), vec!["parse", "HTML", "Body"]);
    }

    #[test]
    fn test_split_words_digits() {
        assert_eq!(split_words("foo123"), vec!["foo123"]);
        assert_eq!(split_words("123foo"), vec!["123", "foo"]);
        assert_eq!(split_words("a1B"), vec!["a1", "B"]);
    }

    #[test]
    fn test_split_words_separators() {
        assert_eq!(split_words("  hello   world "), vec!["hello", "world"]);
        assert_eq!(split_words("foo_bar-baz.qux"), vec!["foo", "bar", "baz", "qux"]);
        assert_eq!(split_words(""), Vec::<String>::new());
    }

    #[test]
    fn test_upper_lower_idempotent() {
        let upper = transform("Hello World", CaseVariant::Upper);
        assert_eq!(transform(&upper, CaseVariant::Upper), upper);

        let lower = transform("Hello World", CaseVariant::Lower);
        assert_eq!(transform(&lower, CaseVariant::Lower), lower);
    }

    #[test]
    fn test_word_variants_idempotent_on_own_output() {
        let inputs = ["Hello there World", "fooBar baz-qux", "HTTP server v2"];
        for input in inputs {
            for variant in [
                CaseVariant::Camel,
                CaseVariant::Pascal,
                CaseVariant::Snake,
                CaseVariant::Kebab,
            ] {
                let once = transform(input, variant);
                let twice = transform(&once, variant);
                assert_eq!(twice, once, "{} not idempotent on {input:?}", variant.label());
            }
        }
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("camel".parse::<CaseVariant>().unwrap(), CaseVariant::Camel);
        assert_eq!("KEBAB".parse::<CaseVariant>().unwrap(), CaseVariant::Kebab);
        assert!("studly".parse::<CaseVariant>().is_err());
    }
}
