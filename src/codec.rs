//! Encoding seeds to mnemonic phrases and back.
//!
//! A phrase is 16 words of 11 bits each: 15 data words followed by one
//! checksum word. Each data word carries 10 secret bits in its high bits and
//! one metadata bit (features and birthday, most significant first) in its
//! low bit. Decoding recovers the language from the phrase itself by trying
//! every registered wordlist and keeping the checksum-valid candidates.

use zeroize::Zeroize;

use crate::deps;
use crate::error::{Result, SeedError};
use crate::gf;
use crate::lang::{self, Language};
use crate::seed::{Seed, DATE_BITS, DATE_MASK, FEATURE_BITS, SECRET_SIZE};

/// Number of words in a phrase
pub const NUM_WORDS: usize = 16;

/// Data words per phrase; the last word is the checksum
pub(crate) const DATA_WORDS: usize = NUM_WORDS - 1;

/// Secret bits carried per data word
const SHARE_BITS: u32 = 10;

/// Encode a seed as a phrase in the given language.
///
/// Deterministic: the same seed content always yields the same phrase. An
/// encrypted seed encodes its masked secret; the encrypted flag travels in
/// the metadata bits so decoding reports it.
pub fn encode(seed: &Seed, language: &Language) -> Result<String> {
    deps::get()?;
    let mut symbols = [0u16; NUM_WORDS];
    pack(seed, &mut symbols[..DATA_WORDS]);
    symbols[DATA_WORDS] = gf::checksum(&symbols[..DATA_WORDS]);
    let phrase = symbols
        .iter()
        .map(|&symbol| language.word(symbol))
        .collect::<Vec<_>>()
        .join(language.separator());
    symbols.zeroize();
    Ok(phrase)
}

/// Outcome of trying every registered language against a phrase
enum Detection {
    None,
    Unique(&'static Language, [u16; NUM_WORDS]),
    Ambiguous(Vec<&'static Language>),
}

/// Decode a phrase, recovering both the seed and its language.
///
/// Never decrypts: an encrypted phrase yields a seed with the encrypted
/// flag set. A checksum tie between languages is reported as
/// [`SeedError::AmbiguousLanguage`], never silently broken.
pub fn decode(phrase: &str) -> Result<(Seed, &'static Language)> {
    deps::get()?;
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.len() != NUM_WORDS {
        return Err(SeedError::WordCount {
            expected: NUM_WORDS,
            actual: words.len(),
        });
    }

    // Candidate languages are those whose wordlist contains every word
    let mut candidates: Vec<(&'static Language, [u16; NUM_WORDS])> = Vec::new();
    let mut known = [false; NUM_WORDS];
    for language in lang::all() {
        let mut symbols = [0u16; NUM_WORDS];
        let mut complete = true;
        for (pos, word) in words.iter().enumerate() {
            let found = match language.find_word(word) {
                Ok(found) => found,
                Err(e) => {
                    symbols.zeroize();
                    wipe_candidates(&mut candidates);
                    return Err(e);
                }
            };
            match found {
                Some(index) => {
                    symbols[pos] = index;
                    known[pos] = true;
                }
                None => complete = false,
            }
        }
        if complete {
            candidates.push((language, symbols));
        }
        // the pushed copy lives in the candidate list; this one is done
        symbols.zeroize();
    }

    // a word unknown in every language means no candidate was complete
    if let Some(pos) = known.iter().position(|k| !k) {
        return Err(SeedError::UnknownWord(words[pos].to_string()));
    }

    let detection = detect(&candidates);
    wipe_candidates(&mut candidates);
    match detection {
        Detection::None => Err(SeedError::Checksum),
        Detection::Ambiguous(languages) => Err(SeedError::AmbiguousLanguage(
            languages
                .iter()
                .map(|language| language.name_en().to_string())
                .collect(),
        )),
        Detection::Unique(language, mut symbols) => {
            let seed = unpack(&symbols[..DATA_WORDS]);
            symbols.zeroize();
            Ok((seed, language))
        }
    }
}

/// Classify the checksum-valid candidates without consuming the list, so the
/// caller can wipe it on every path
fn detect(candidates: &[(&'static Language, [u16; NUM_WORDS])]) -> Detection {
    let valid: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, (_, symbols))| gf::checksum(&symbols[..DATA_WORDS]) == symbols[DATA_WORDS])
        .map(|(pos, _)| pos)
        .collect();
    match valid.as_slice() {
        [] => Detection::None,
        &[pos] => {
            let (language, symbols) = candidates[pos];
            Detection::Unique(language, symbols)
        }
        _ => Detection::Ambiguous(valid.iter().map(|&pos| candidates[pos].0).collect()),
    }
}

/// Zero the secret-bearing symbol arrays in place, so the candidate list's
/// heap buffer never reaches the allocator still holding packed secrets
fn wipe_candidates(candidates: &mut [(&'static Language, [u16; NUM_WORDS])]) {
    for (_, symbols) in candidates.iter_mut() {
        symbols.zeroize();
    }
}

/// Pack secret bits and metadata into the 15 data symbols
fn pack(seed: &Seed, symbols: &mut [u16]) {
    let secret = seed.secret();
    let extra = (u32::from(seed.raw_features()) << DATE_BITS) | u32::from(seed.raw_birthday());
    // one metadata bit per data word
    debug_assert_eq!(DATA_WORDS as u32, DATE_BITS + FEATURE_BITS);
    let mut bit = 0usize;
    for (pos, symbol) in symbols.iter_mut().enumerate() {
        let mut value = 0u16;
        for _ in 0..SHARE_BITS {
            value = (value << 1) | u16::from((secret[bit / 8] >> (7 - bit % 8)) & 1);
            bit += 1;
        }
        let extra_bit = (extra >> (DATA_WORDS - 1 - pos)) & 1;
        *symbol = (value << 1) | extra_bit as u16;
    }
}

/// Rebuild a seed from the 15 data symbols
fn unpack(symbols: &[u16]) -> Seed {
    let mut secret = [0u8; SECRET_SIZE];
    let mut extra = 0u32;
    let mut bit = 0usize;
    for &symbol in symbols {
        let value = symbol >> 1;
        for shift in (0..SHARE_BITS).rev() {
            secret[bit / 8] |= (((value >> shift) & 1) as u8) << (7 - bit % 8);
            bit += 1;
        }
        extra = (extra << 1) | u32::from(symbol & 1);
    }
    let features = (extra >> DATE_BITS) as u8;
    let birthday = (extra as u16) & DATE_MASK;
    Seed::from_parts(secret, birthday, features)
}
