use thiserror::Error;

/// Result type for seed and phrase operations
pub type Result<T> = std::result::Result<T, SeedError>;

/// Error types for seed creation, encoding and decoding
#[derive(Error, Debug)]
pub enum SeedError {
    /// An operation was attempted before the dependency table was injected
    #[error("dependencies have not been injected")]
    DependenciesNotInjected,

    /// The dependency table may only be populated once per process
    #[error("dependencies were already injected")]
    DependenciesAlreadyInjected,

    /// The injected random source failed to produce bytes
    #[error("random source failure: {0}")]
    RandomSourceFailure(String),

    /// The injected time source returned an unusable timestamp
    #[error("invalid time: {0}")]
    InvalidTime(String),

    /// Seed creation requested feature bits that are not enabled
    #[error("unsupported feature bits: {0:#07b}")]
    UnsupportedFeatures(u8),

    /// Encoding requested a language that is not registered
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The phrase does not contain the expected number of words
    #[error("invalid phrase length: expected {expected} words, got {actual}")]
    WordCount { expected: usize, actual: usize },

    /// A phrase word belongs to no supported language
    #[error("unknown word: {0:?}")]
    UnknownWord(String),

    /// No language yields a checksum-valid reconstruction of the phrase
    #[error("phrase checksum verification failed")]
    Checksum,

    /// More than one language yields a checksum-valid reconstruction
    #[error("phrase is valid in more than one language: {}", .0.join(", "))]
    AmbiguousLanguage(Vec<String>),

    /// The operation is not valid while the secret is encrypted
    #[error("operation requires a decrypted seed")]
    SeedEncrypted,
}
