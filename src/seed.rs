//! The in-memory seed: secret entropy plus creation metadata.

use zeroize::{ZeroizeOnDrop, Zeroizing};

use crate::deps;
use crate::error::{Result, SeedError};
use crate::features;

/// Size of the secret entropy in bytes
pub const SECRET_SIZE: usize = 19;

/// Number of secret bits carried by a phrase; the remaining bits of the last
/// byte are always zero
pub(crate) const SECRET_BITS: usize = 150;

/// Clears the unused low bits of the final secret byte
pub(crate) const CLEAR_MASK: u8 = !((1u8 << (SECRET_SIZE * 8 - SECRET_BITS)) - 1);

/// Width of the quantized birthday field
pub(crate) const DATE_BITS: u32 = 10;

pub(crate) const DATE_MASK: u16 = (1 << DATE_BITS) - 1;

/// Width of the feature bitset (user features + reserved + encrypted flag)
pub(crate) const FEATURE_BITS: u32 = 5;

/// Feature bit marking the secret as ciphertext
const ENCRYPTED_MASK: u8 = 1 << 4;

/// Feature bits available to callers
pub(crate) const USER_FEATURE_MASK: u8 = 0x07;

/// Birthday epoch: 2022-01-01 00:00 UTC
const EPOCH: u64 = 1640995200;

/// Birthday quantization step: 1/12 of the average Gregorian year
const TIME_STEP: u64 = 2629746;

/// PBKDF2 iteration count for both the entropy cipher and key derivation
const KDF_ITERATIONS: u32 = 10_000;

/// Domain-separation tag for the password mask salt
const MASK_SALT_TAG: &[u8] = b"seedwords mask";

/// Domain-separation tag for the key derivation salt
const KEY_SALT_TAG: &[u8] = b"seedwords key";

/// Secret entropy with its creation metadata. The secret is wiped on drop,
/// including seeds abandoned on error paths.
#[derive(Clone, ZeroizeOnDrop)]
pub struct Seed {
    secret: [u8; SECRET_SIZE],
    birthday: u16,
    features: u8,
}

impl Seed {
    /// Generate a new seed from the injected random source.
    ///
    /// `features` may only contain user feature bits that were switched on
    /// with [`crate::enable_features`].
    pub fn create(features: u8) -> Result<Self> {
        let deps = deps::get()?;
        if features & !USER_FEATURE_MASK != 0 || !features::is_enabled(features) {
            return Err(SeedError::UnsupportedFeatures(features));
        }
        let birthday = birthday_encode((deps.time)()?);
        let mut seed = Self {
            secret: [0u8; SECRET_SIZE],
            birthday,
            features,
        };
        // On failure the partially filled seed is dropped and wiped
        (deps.randbytes)(&mut seed.secret)?;
        seed.secret[SECRET_SIZE - 1] &= CLEAR_MASK;
        Ok(seed)
    }

    /// Creation time decoded back to unix seconds, at quantized precision
    pub fn birthday(&self) -> u64 {
        EPOCH + u64::from(self.birthday) * TIME_STEP
    }

    /// The caller-defined feature bits stored in this seed
    pub fn features(&self) -> u8 {
        self.features & USER_FEATURE_MASK
    }

    /// Test a user feature bit
    pub fn has_feature(&self, mask: u8) -> bool {
        self.features() & mask != 0
    }

    /// True iff the secret currently holds ciphertext
    pub fn is_encrypted(&self) -> bool {
        self.features & ENCRYPTED_MASK != 0
    }

    /// Apply the password mask to the secret and flip the encrypted flag.
    ///
    /// The mask is an XOR keystream stretched from the password with a fixed
    /// domain-separation salt, so applying the same password twice restores
    /// the plaintext. There is no authentication: unmasking with a wrong
    /// password yields a different secret without any error.
    pub fn crypt(&mut self, password: &str) -> Result<()> {
        let deps = deps::get()?;
        let mut salt = [0u8; 16];
        salt[..MASK_SALT_TAG.len()].copy_from_slice(MASK_SALT_TAG);
        salt[14] = 0xff;
        salt[15] = 0xff;
        let mut mask = [0u8; 32];
        (deps.pbkdf2_sha256)(password.as_bytes(), &salt, KDF_ITERATIONS, &mut mask);
        for (byte, m) in self.secret.iter_mut().zip(mask.iter()) {
            *byte ^= m;
        }
        self.secret[SECRET_SIZE - 1] &= CLEAR_MASK;
        self.features ^= ENCRYPTED_MASK;
        (deps.memzero)(&mut mask);
        Ok(())
    }

    /// Stretch the secret into a coin-specific key of the requested length.
    ///
    /// Pure: the same (secret, coin, length) always yields the same bytes,
    /// and different coins yield unrelated keys. Rejected with
    /// [`SeedError::SeedEncrypted`] while the secret is masked, since a key
    /// derived from ciphertext would be silently unrecoverable.
    pub fn derive_key(&self, coin: u32, key_size: usize) -> Result<Zeroizing<Vec<u8>>> {
        if self.is_encrypted() {
            return Err(SeedError::SeedEncrypted);
        }
        let deps = deps::get()?;
        let mut salt = [0u8; 32];
        salt[..KEY_SALT_TAG.len()].copy_from_slice(KEY_SALT_TAG);
        salt[13..16].fill(0xff); // reserved
        salt[16..20].copy_from_slice(&coin.to_le_bytes());
        let mut key = Zeroizing::new(vec![0u8; key_size]);
        (deps.pbkdf2_sha256)(&self.secret, &salt, KDF_ITERATIONS, key.as_mut_slice());
        Ok(key)
    }

    pub(crate) fn secret(&self) -> &[u8; SECRET_SIZE] {
        &self.secret
    }

    pub(crate) fn raw_birthday(&self) -> u16 {
        self.birthday
    }

    pub(crate) fn raw_features(&self) -> u8 {
        self.features
    }

    pub(crate) fn from_parts(secret: [u8; SECRET_SIZE], birthday: u16, features: u8) -> Self {
        Self {
            secret,
            birthday,
            features,
        }
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seed")
            .field("secret", &"[REDACTED]")
            .field("birthday", &self.birthday)
            .field("features", &self.features)
            .finish()
    }
}

/// Quantize a unix timestamp into the 10-bit birthday field, saturating at
/// both ends
fn birthday_encode(unix_time: u64) -> u16 {
    let steps = unix_time.saturating_sub(EPOCH) / TIME_STEP;
    steps.min(u64::from(DATE_MASK)) as u16
}
