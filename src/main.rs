mod cli;

use clap::Parser;
use cli::{Args, Command};
use seedwords::{codec, deps, lang, Dependencies, Result, Seed};

fn main() {
    let args = Args::parse();

    if let Err(e) = deps::inject(Dependencies::default()) {
        println!("Error initializing: {}", e);
        return;
    }

    let outcome = match args.command {
        Command::Generate {
            language,
            password,
            coin,
        } => generate(&language, password.as_deref(), coin),
        Command::Decode {
            phrase,
            password,
            coin,
        } => decode(&phrase, password.as_deref(), coin),
        Command::Languages => languages(),
    };

    if let Err(e) = outcome {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}

fn generate(language: &str, password: Option<&str>, coin: u32) -> Result<()> {
    let language = lang::lookup(language)?;

    println!("Generating new seed...");
    let mut seed = Seed::create(0)?;

    let key = seed.derive_key(coin, 32)?;
    println!("Private key: {}", hex::encode(key.as_slice()));

    if let Some(password) = password {
        println!("Encrypting seed with password...");
        seed.crypt(password)?;
    }

    let phrase = codec::encode(&seed, language)?;
    println!("Mnemonic ({}): {}", language.name_en(), phrase);
    Ok(())
}

fn decode(phrase: &str, password: Option<&str>, coin: u32) -> Result<()> {
    let (mut seed, language) = codec::decode(phrase)?;
    println!("Detected language: {}", language.name_en());
    println!("Encrypted: {}", seed.is_encrypted());

    if seed.is_encrypted() {
        match password {
            Some(password) => {
                println!("Decrypting seed...");
                seed.crypt(password)?;
            }
            None => {
                println!("Seed is encrypted; pass --password to decrypt it");
                return Ok(());
            }
        }
    }

    let key = seed.derive_key(coin, 32)?;
    println!("Private key: {}", hex::encode(key.as_slice()));
    Ok(())
}

fn languages() -> Result<()> {
    for language in lang::all() {
        println!("{} ({})", language.name(), language.name_en());
    }
    Ok(())
}
