//! Registry of supported phrase languages.
//!
//! Wordlists come from the `bip39` crate (ten lists of 2048 words each).
//! The registry is static; the per-language word index maps are built once,
//! after the dependency table has been injected, using the injected
//! normalization forms so that lookup and storage agree on one canonical
//! spelling per word.

use std::collections::HashMap;

use once_cell::sync::OnceCell;

use crate::deps::{self, Dependencies, NormalizeFn};
use crate::error::{Result, SeedError};
use crate::gf::GF_SIZE;

/// Number of words in each language's list
pub const WORDLIST_SIZE: usize = GF_SIZE as usize;

/// Unicode normalization form used to match phrase words for a language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Canonical composition; used for languages written in precomposed forms
    Nfc,
    /// Compatibility decomposition; used where the canonical word forms are
    /// decomposed (Japanese kana)
    Nfkd,
}

/// A supported phrase language: display names, wordlist and matching rules
pub struct Language {
    id: usize,
    name: &'static str,
    name_en: &'static str,
    separator: &'static str,
    normalization: Normalization,
    wordlist: bip39::Language,
}

static LANGUAGES: [Language; 10] = [
    Language {
        id: 0,
        name: "English",
        name_en: "English",
        separator: " ",
        normalization: Normalization::Nfc,
        wordlist: bip39::Language::English,
    },
    Language {
        id: 1,
        name: "Español",
        name_en: "Spanish",
        separator: " ",
        normalization: Normalization::Nfc,
        wordlist: bip39::Language::Spanish,
    },
    Language {
        id: 2,
        name: "Français",
        name_en: "French",
        separator: " ",
        normalization: Normalization::Nfc,
        wordlist: bip39::Language::French,
    },
    Language {
        id: 3,
        name: "Italiano",
        name_en: "Italian",
        separator: " ",
        normalization: Normalization::Nfc,
        wordlist: bip39::Language::Italian,
    },
    Language {
        id: 4,
        name: "日本語",
        name_en: "Japanese",
        separator: "\u{3000}",
        normalization: Normalization::Nfkd,
        wordlist: bip39::Language::Japanese,
    },
    Language {
        id: 5,
        name: "한국어",
        name_en: "Korean",
        separator: " ",
        normalization: Normalization::Nfc,
        wordlist: bip39::Language::Korean,
    },
    Language {
        id: 6,
        name: "Čeština",
        name_en: "Czech",
        separator: " ",
        normalization: Normalization::Nfc,
        wordlist: bip39::Language::Czech,
    },
    Language {
        id: 7,
        name: "Português",
        name_en: "Portuguese",
        separator: " ",
        normalization: Normalization::Nfc,
        wordlist: bip39::Language::Portuguese,
    },
    Language {
        id: 8,
        name: "简体中文",
        name_en: "Chinese (Simplified)",
        separator: " ",
        normalization: Normalization::Nfc,
        wordlist: bip39::Language::SimplifiedChinese,
    },
    Language {
        id: 9,
        name: "繁體中文",
        name_en: "Chinese (Traditional)",
        separator: " ",
        normalization: Normalization::Nfc,
        wordlist: bip39::Language::TraditionalChinese,
    },
];

impl Language {
    /// Native display name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// English name
    pub fn name_en(&self) -> &'static str {
        self.name_en
    }

    /// Normalization form used to match words of this language
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// The ordered 2048-word list backing this language
    pub fn word_list(&self) -> &'static [&'static str; WORDLIST_SIZE] {
        self.wordlist.word_list()
    }

    /// Word at a symbol index, in the list's stored spelling
    pub(crate) fn word(&self, index: u16) -> &'static str {
        self.word_list()[index as usize]
    }

    /// Separator between words of an encoded phrase
    pub(crate) fn separator(&self) -> &'static str {
        self.separator
    }

    /// Look up the symbol index of a phrase word, normalizing it first.
    /// Returns `Ok(None)` when the word is not in this language's list.
    pub(crate) fn find_word(&self, word: &str) -> Result<Option<u16>> {
        let deps = deps::get()?;
        let normalized = (self.normalizer(deps))(word);
        Ok(index_maps()?[self.id].get(normalized.as_str()).copied())
    }

    fn normalizer(&self, deps: &Dependencies) -> NormalizeFn {
        match self.normalization {
            Normalization::Nfc => deps.nfc,
            Normalization::Nfkd => deps.nfkd,
        }
    }
}

impl std::fmt::Debug for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Language")
            .field("name", &self.name)
            .field("name_en", &self.name_en)
            .field("normalization", &self.normalization)
            .finish()
    }
}

/// All registered languages, in a fixed order
pub fn all() -> &'static [Language] {
    &LANGUAGES
}

/// Find a language by its display name or English name
pub fn lookup(name: &str) -> Result<&'static Language> {
    let deps = deps::get()?;
    let wanted = (deps.nfc)(name);
    all()
        .iter()
        .find(|lang| lang.name == wanted || lang.name_en == wanted)
        .ok_or_else(|| SeedError::UnsupportedLanguage(name.to_string()))
}

static INDEX_MAPS: OnceCell<Vec<HashMap<String, u16>>> = OnceCell::new();

/// Normalized word -> index map per language, built on first use
fn index_maps() -> Result<&'static Vec<HashMap<String, u16>>> {
    let deps = deps::get()?;
    Ok(INDEX_MAPS.get_or_init(|| {
        LANGUAGES
            .iter()
            .map(|lang| {
                let normalize = lang.normalizer(deps);
                lang.word_list()
                    .iter()
                    .enumerate()
                    .map(|(index, word)| (normalize(word), index as u16))
                    .collect()
            })
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = deps::inject(Dependencies::default());
    }

    #[test]
    fn registry_is_complete() {
        assert_eq!(all().len(), 10);
        for lang in all() {
            assert_eq!(lang.word_list().len(), WORDLIST_SIZE);
        }
    }

    #[test]
    fn lookup_by_either_name() {
        init();
        let by_en = lookup("Japanese").unwrap();
        let by_native = lookup("日本語").unwrap();
        assert_eq!(by_en.id, by_native.id);
        assert!(matches!(
            lookup("Klingon"),
            Err(SeedError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn find_word_resolves_indices() {
        init();
        let english = lookup("English").unwrap();
        assert_eq!(english.find_word("abandon").unwrap(), Some(0));
        assert_eq!(english.find_word("zoo").unwrap(), Some(2047));
        assert_eq!(english.find_word("notaword").unwrap(), None);
    }

    #[test]
    fn accented_words_match_either_unicode_form() {
        init();
        let spanish = lookup("Spanish").unwrap();
        let decomposed = "a\u{301}baco";
        let composed = "\u{e1}baco";
        let a = spanish.find_word(decomposed).unwrap();
        let b = spanish.find_word(composed).unwrap();
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn words_are_unique_after_normalization() {
        init();
        for (maps, lang) in index_maps().unwrap().iter().zip(all()) {
            assert_eq!(maps.len(), WORDLIST_SIZE, "{}", lang.name_en());
        }
    }
}
