//! Deterministic seed-to-mnemonic codec.
//!
//! A [`Seed`] holds 19 bytes of secret entropy plus a quantized creation
//! time and a small feature bitset. It encodes to a 16-word phrase in any of
//! ten languages, carrying a language-independent checksum so that decoding
//! can detect the language automatically and reject mistyped phrases. The
//! secret can be reversibly masked with a password before encoding, and
//! coin-specific keys of any length are stretched from it with PBKDF2.
//!
//! Platform facilities (randomness, key stretching, wiping, Unicode
//! normalization, the clock) are supplied through [`deps::inject`], which
//! must run once before anything else:
//!
//! ```no_run
//! use seedwords::{codec, deps, lang, Dependencies, Seed};
//!
//! # fn main() -> seedwords::Result<()> {
//! deps::inject(Dependencies::default())?;
//!
//! let seed = Seed::create(0)?;
//! let key = seed.derive_key(0, 32)?;
//! let phrase = codec::encode(&seed, lang::lookup("English")?)?;
//!
//! let (restored, detected) = codec::decode(&phrase)?;
//! assert_eq!(detected.name_en(), "English");
//! assert_eq!(*restored.derive_key(0, 32)?, *key);
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod deps;
pub mod error;
mod features;
mod gf;
pub mod lang;
pub mod seed;

pub use codec::{decode, encode, NUM_WORDS};
pub use deps::Dependencies;
pub use error::{Result, SeedError};
pub use features::enable_features;
pub use lang::{Language, Normalization, WORDLIST_SIZE};
pub use seed::{Seed, SECRET_SIZE};
