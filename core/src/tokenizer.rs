use lazy_static::lazy_static;
use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

/// Separates the fields of a preprocessed record.
pub const FIELD_SEPARATOR: char = '|';

lazy_static! {
    static ref EXTRA_SPACE: Regex = Regex::new(r"\s+").expect("valid regex");
    static ref SPECIAL_CHARS: Regex = Regex::new(r#"[.?!:;(){}"\-\[\]$]+"#).expect("valid regex");
    // A comma run right after a digit is a thousands separator and survives.
    static ref COMMAS: Regex = Regex::new(r"(\d?),+").expect("valid regex");
}

/// Normalize one tab-separated record line and split it into fields:
/// lowercase, ASCII-fold accents, blank out punctuation and collapse spaces.
pub fn preprocess(line: &str) -> Vec<String> {
    let lowered = line.to_lowercase().replace('\t', "|");
    let folded = strip_accents(lowered.trim());
    let no_special = SPECIAL_CHARS.replace_all(&folded, " ");
    let no_commas = COMMAS.replace_all(&no_special, |caps: &Captures| {
        if caps[1].is_empty() { " ".to_string() } else { caps[0].to_string() }
    });
    let collapsed = EXTRA_SPACE.replace_all(&no_commas, " ");
    collapsed.split(FIELD_SEPARATOR).map(str::to_string).collect()
}

/// Decompose (NFD) and drop every non-ASCII code point.
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(char::is_ascii).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_fields_on_tabs() {
        let fields = preprocess("1277695\tGreuze\tAlys Eyre Macklin\n");
        assert_eq!(fields, vec!["1277695", "greuze", "alys eyre macklin"]);
    }

    #[test]
    fn strips_accents() {
        assert_eq!(strip_accents("café crème à la française"), "cafe creme a la francaise");
    }

    #[test]
    fn removes_punctuation() {
        let fields = preprocess("12\tWar and Peace: a (novel)!\tTolstoy, Leo");
        assert_eq!(fields[1], "war and peace a novel ");
        assert_eq!(fields[2], "tolstoy leo");
    }

    #[test]
    fn keeps_commas_after_digits() {
        let fields = preprocess("5\t1,000 leagues, again\tverne");
        assert_eq!(fields[1], "1,000 leagues again");
    }
}
