//! Process-wide table of injected platform dependencies.
//!
//! The codec never talks to the OS directly: randomness, key stretching,
//! secure wiping, Unicode normalization and the clock all go through this
//! table. It must be populated exactly once, before any seed or phrase
//! operation, and is read-only afterwards.

use once_cell::sync::OnceCell;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroize;

use crate::error::{Result, SeedError};

/// Fills a buffer with cryptographically secure random bytes
pub type RandBytesFn = fn(&mut [u8]) -> Result<()>;

/// PBKDF2-HMAC-SHA256: (password, salt, iterations, output)
pub type Pbkdf2Fn = fn(&[u8], &[u8], u32, &mut [u8]);

/// Overwrites a buffer in a way the optimizer may not elide
pub type MemZeroFn = fn(&mut [u8]);

/// Returns the Unicode-normalized form of a string
pub type NormalizeFn = fn(&str) -> String;

/// Returns the current unix time in seconds
pub type TimeFn = fn() -> Result<u64>;

/// Injected platform functions used by all seed and phrase operations
pub struct Dependencies {
    pub randbytes: RandBytesFn,
    pub pbkdf2_sha256: Pbkdf2Fn,
    pub memzero: MemZeroFn,
    pub nfc: NormalizeFn,
    pub nfkd: NormalizeFn,
    pub time: TimeFn,
}

static DEPENDENCIES: OnceCell<Dependencies> = OnceCell::new();

/// Populate the dependency table. Must happen-before every other call into
/// the crate; a second injection is rejected.
pub fn inject(deps: Dependencies) -> Result<()> {
    DEPENDENCIES
        .set(deps)
        .map_err(|_| SeedError::DependenciesAlreadyInjected)
}

pub(crate) fn get() -> Result<&'static Dependencies> {
    DEPENDENCIES.get().ok_or(SeedError::DependenciesNotInjected)
}

impl Default for Dependencies {
    fn default() -> Self {
        Self {
            randbytes: os_random_bytes,
            pbkdf2_sha256,
            memzero: wipe,
            nfc,
            nfkd,
            time: unix_time_now,
        }
    }
}

fn os_random_bytes(buf: &mut [u8]) -> Result<()> {
    use rand::RngCore;
    rand::rngs::OsRng
        .try_fill_bytes(buf)
        .map_err(|e| SeedError::RandomSourceFailure(e.to_string()))
}

fn pbkdf2_sha256(password: &[u8], salt: &[u8], iterations: u32, key: &mut [u8]) {
    pbkdf2::pbkdf2_hmac::<sha2::Sha256>(password, salt, iterations, key);
}

fn wipe(buf: &mut [u8]) {
    buf.zeroize();
}

fn nfc(text: &str) -> String {
    text.nfc().collect()
}

fn nfkd(text: &str) -> String {
    text.nfkd().collect()
}

fn unix_time_now() -> Result<u64> {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| SeedError::InvalidTime(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_normalization_forms() {
        // "é" composed vs decomposed
        let composed = "caf\u{e9}";
        let decomposed = "cafe\u{301}";
        assert_eq!(nfc(decomposed), composed);
        assert_eq!(nfkd(composed), decomposed);
    }

    #[test]
    fn default_kdf_is_deterministic() {
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        pbkdf2_sha256(b"password", b"salt", 10, &mut a);
        pbkdf2_sha256(b"password", b"salt", 10, &mut b);
        assert_eq!(a, b);
        pbkdf2_sha256(b"password", b"pepper", 10, &mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn wipe_clears_buffer() {
        let mut buf = [0xaau8; 8];
        wipe(&mut buf);
        assert_eq!(buf, [0u8; 8]);
    }
}
