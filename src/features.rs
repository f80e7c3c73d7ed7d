//! Process-wide gate for the optional user feature bits.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::seed::USER_FEATURE_MASK;

static ENABLED_FEATURES: AtomicU8 = AtomicU8::new(0);

/// Select which user feature bits [`crate::Seed::create`] may set. Intended
/// to be called once at startup, before seeds are created. Returns the
/// number of enabled feature bits.
pub fn enable_features(mask: u8) -> u32 {
    let enabled = mask & USER_FEATURE_MASK;
    ENABLED_FEATURES.store(enabled, Ordering::Relaxed);
    enabled.count_ones()
}

/// True iff every requested feature bit is currently enabled
pub(crate) fn is_enabled(features: u8) -> bool {
    features & USER_FEATURE_MASK & !ENABLED_FEATURES.load(Ordering::Relaxed) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deps::{self, Dependencies};
    use crate::error::SeedError;
    use crate::seed::Seed;

    // The enabled-feature mask is process-wide state, so all mutation of it
    // lives in this one test. Other tests only create seeds with features = 0,
    // which every mask accepts.
    #[test]
    fn feature_gate_controls_create() {
        let _ = deps::inject(Dependencies::default());

        assert_eq!(enable_features(0), 0);
        assert!(matches!(
            Seed::create(0b001),
            Err(SeedError::UnsupportedFeatures(_))
        ));

        assert_eq!(enable_features(0b011), 2);
        assert!(is_enabled(0b001));
        assert!(!is_enabled(0b100));

        let seed = Seed::create(0b001).unwrap();
        assert!(seed.has_feature(0b001));
        assert!(!seed.has_feature(0b010));

        // bits outside the user range are never accepted
        assert!(matches!(
            Seed::create(0b1000),
            Err(SeedError::UnsupportedFeatures(_))
        ));

        // excess bits in the mask are ignored
        assert_eq!(enable_features(0xff), 3);
    }
}
