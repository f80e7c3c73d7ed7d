use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Mnemonic seed phrase tools")]
pub struct Args {
    /// Command to execute
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub enum Command {
    /// Generate a new seed and print its mnemonic phrase
    Generate {
        /// Language to encode the phrase in (display or English name)
        #[clap(long, default_value = "English")]
        language: String,

        /// Optional password used to encrypt the seed before encoding
        #[clap(long)]
        password: Option<String>,

        /// Coin type used for key derivation
        #[clap(long, default_value_t = 0)]
        coin: u32,
    },
    /// Decode a mnemonic phrase and print the recovered seed details
    Decode {
        /// The mnemonic phrase
        phrase: String,

        /// Optional password to decrypt the recovered seed
        #[clap(long)]
        password: Option<String>,

        /// Coin type used for key derivation
        #[clap(long, default_value_t = 0)]
        coin: u32,
    },
    /// List the supported languages
    Languages,
}
