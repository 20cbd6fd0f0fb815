//! Command-line interface for the classical cipher suite.

#![forbid(unsafe_code)]

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use classic_registry::{
    ciphers, decode, decode_or_sentinel, encode, encode_with_rng, get_cipher, seeded_rng,
    CipherId, ParamDefault, Params,
};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEMO_TEXT: &str = "Meet me at the old bridge at nine";

/// Classical cipher CLI.
#[derive(Parser)]
#[command(
    name = "classic",
    version,
    author,
    about = "Encode and decode text with classical ciphers"
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List ciphers with their parameters and defaults.
    List {
        /// Print the schema as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Encode text.
    Enc {
        #[command(flatten)]
        payload: Payload,
        /// RNG seed for randomized ciphers.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Decode text.
    Dec {
        #[command(flatten)]
        payload: Payload,
        /// Fail instead of printing the decode-failure marker.
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Round-trip random text through every cipher (or one) with default parameters.
    Check {
        /// Restrict the check to one cipher.
        #[arg(long, value_name = "ID")]
        cipher: Option<CipherId>,
        /// Number of random samples per cipher.
        #[arg(long, default_value_t = 16)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encode and decode a sample sentence with every cipher.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Cipher selection, parameters and text source shared by `enc` and `dec`.
#[derive(Args)]
struct Payload {
    /// Cipher identifier, e.g. `vigenere` or `rail-fence`.
    #[arg(long, value_name = "ID")]
    cipher: CipherId,
    /// Parameter assignment; repeatable.
    #[arg(long = "param", value_name = "NAME=VALUE")]
    params: Vec<String>,
    /// Parameters as a JSON object, applied before `--param`.
    #[arg(long, value_name = "JSON")]
    params_json: Option<String>,
    /// Text to process.
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,
    /// Read text from a file instead of stdin.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
    /// Write the result to a file instead of stdout.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::List { json } => cmd_list(json),
        Commands::Enc { payload, seed } => cmd_enc(&payload, seed),
        Commands::Dec { payload, strict } => cmd_dec(&payload, strict),
        Commands::Check {
            cipher,
            samples,
            seed,
        } => cmd_check(cipher, samples, seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_list(json: bool) -> Result<()> {
    if json {
        let listing = serde_json::to_string_pretty(ciphers()).context("serialize cipher list")?;
        println!("{listing}");
        return Ok(());
    }
    for spec in ciphers() {
        println!("{:<22} {:<15} {}", spec.id, spec.family, spec.name);
        for param in spec.params {
            let default = match param.default {
                ParamDefault::Int(v) => v.to_string(),
                ParamDefault::Text(v) => format!("{v:?}"),
                ParamDefault::None => "none".to_owned(),
            };
            println!("    {:<10} default {:<12} {}", param.name, default, param.description);
        }
    }
    Ok(())
}

fn cmd_enc(payload: &Payload, seed: Option<u64>) -> Result<()> {
    let params = build_params(payload)?;
    let text = read_text(payload)?;
    let out = match seed {
        Some(seed) => {
            let mut rng = seeded_rng(Some(seed));
            encode_with_rng(payload.cipher, &text, &params, &mut rng)
        }
        None => encode(payload.cipher, &text, &params),
    }
    .with_context(|| format!("encode with {}", payload.cipher))?;
    write_text(payload, &out)
}

fn cmd_dec(payload: &Payload, strict: bool) -> Result<()> {
    let params = build_params(payload)?;
    let text = read_text(payload)?;
    let out = if strict {
        decode(payload.cipher, &text, &params)
    } else {
        decode_or_sentinel(payload.cipher, &text, &params)
    }
    .with_context(|| format!("decode with {}", payload.cipher))?;
    write_text(payload, &out)
}

fn cmd_check(cipher: Option<CipherId>, samples: usize, seed: Option<u64>) -> Result<()> {
    let ids = match cipher {
        Some(id) => vec![id],
        None => CipherId::ALL.to_vec(),
    };
    let mut rng = seeded_rng(seed);
    let params = Params::new();

    for id in ids {
        let mut cipher_rng = ChaCha20Rng::from_seed(derive_seed(&mut rng));
        for _ in 0..samples {
            let plain = random_text(&mut cipher_rng);
            let ct = encode_with_rng(id, &plain, &params, &mut cipher_rng)
                .with_context(|| format!("encode with {id}"))?;
            let back = decode(id, &ct, &params).with_context(|| format!("decode with {id}"))?;
            if back != plain {
                bail!("{id} round trip failed: {plain:?} -> {ct:?} -> {back:?}");
            }
        }
        tracing::info!(cipher = %id, samples, "round trips ok");
        println!("{id}: ok");
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let params = Params::new();
    println!("plaintext: {DEMO_TEXT}");
    for spec in ciphers() {
        let ct = encode_with_rng(spec.id, DEMO_TEXT, &params, &mut rng)
            .with_context(|| format!("encode with {}", spec.id))?;
        let back = decode_or_sentinel(spec.id, &ct, &params)
            .with_context(|| format!("decode with {}", spec.id))?;
        println!("{:<22} {ct}", spec.id);
        println!("{:<22} {back}", "");
    }
    Ok(())
}

fn build_params(payload: &Payload) -> Result<Params> {
    let mut params = match &payload.params_json {
        Some(json) => serde_json::from_str(json).context("parse --params-json")?,
        None => Params::new(),
    };
    for assignment in &payload.params {
        params
            .parse_assignment(assignment)
            .with_context(|| format!("parse --param {assignment}"))?;
    }
    for name in params.names() {
        if get_cipher(payload.cipher).param(name).is_none() {
            bail!("{} has no parameter `{name}`", payload.cipher);
        }
    }
    Ok(params)
}

fn read_text(payload: &Payload) -> Result<String> {
    if let Some(text) = &payload.text {
        return Ok(text.clone());
    }
    let text = match &payload.input {
        Some(path) => fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("read stdin")?;
            buf
        }
    };
    Ok(text.trim_end_matches(['\r', '\n']).to_owned())
}

fn write_text(payload: &Payload, text: &str) -> Result<()> {
    match &payload.output {
        Some(path) => fs::write(path, format!("{text}\n"))
            .with_context(|| format!("write {}", path.display())),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

/// Even-length uppercase text without `J`, `K` or `X` and without doubled
/// pairs, so every cipher round-trips it exactly.
fn random_text(rng: &mut impl Rng) -> String {
    const LETTERS: &[u8] = b"ABCDEFGHILMNOPQRSTUVWYZ";
    let pairs = rng.gen_range(1..=32);
    let mut out = String::with_capacity(pairs * 2);
    for _ in 0..pairs {
        let a = LETTERS[rng.gen_range(0..LETTERS.len())];
        let mut b = LETTERS[rng.gen_range(0..LETTERS.len())];
        while b == a {
            b = LETTERS[rng.gen_range(0..LETTERS.len())];
        }
        out.push(a as char);
        out.push(b as char);
    }
    out
}

fn derive_seed(rng: &mut impl RngCore) -> [u8; 32] {
    let mut seed_bytes = [0u8; 32];
    rng.fill_bytes(&mut seed_bytes);
    seed_bytes
}
