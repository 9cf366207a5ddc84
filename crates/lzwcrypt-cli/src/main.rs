//! Command-line interface for `lzwcrypt`.

#![forbid(unsafe_code)]

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use lzw_dict::Symbol;
use lzwcrypt::bitstream::{BitReader, BitWriter};
use lzwcrypt::{Aes128Key, Pipeline, PipelineConfig};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Adaptive-dictionary compression followed by AES-128 encryption.
#[derive(Parser)]
#[command(name = "lzwcrypt", version, author, about = "Compress, then encrypt, files")]
struct Cli {
    /// AES-128 key as 32 hex characters (overrides --config).
    #[arg(long, value_name = "HEX", global = true)]
    key_hex: Option<String>,
    /// JSON configuration file, e.g. `{"key_hex": "..."}`.
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress and encrypt a file.
    Compress {
        /// Input file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output path for the encrypted bitstream.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt and decompress a file produced by `compress`.
    Decompress {
        /// Encrypted bitstream.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output path for the recovered data.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Show the seed dictionary carried by an encrypted bitstream.
    Inspect {
        /// Encrypted bitstream.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Print a JSON report instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Round-trip random data through the pipeline.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Number of random bytes.
        #[arg(long, default_value_t = 4096)]
        len: usize,
    },
}

/// On-disk configuration.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    key_hex: Option<String>,
}

#[derive(Serialize)]
struct InspectReport {
    header_len: usize,
    payload_bits: usize,
    seeds: Vec<SeedEntry>,
}

#[derive(Serialize)]
struct SeedEntry {
    code: u32,
    symbol: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let configured = resolve_config(cli.key_hex.as_deref(), cli.config.as_deref())?;
    let config = configured.unwrap_or_default();
    match cli.command {
        Commands::Compress { input, output } => cmd_compress(&config, &input, &output),
        Commands::Decompress { input, output } => cmd_decompress(&config, &input, &output),
        Commands::Inspect { input, json } => cmd_inspect(&config, &input, json),
        Commands::Demo { seed, len } => cmd_demo(configured, seed, len),
    }
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("install log subscriber")?;
    Ok(())
}

/// Key from `--key-hex`, else from the config file; `None` when neither sets one.
fn resolve_config(key_hex: Option<&str>, path: Option<&Path>) -> Result<Option<PipelineConfig>> {
    if let Some(key_hex) = key_hex {
        return PipelineConfig::from_key_hex(key_hex)
            .map(Some)
            .context("parse --key-hex");
    }
    let file = match path {
        Some(path) => load_config_file(path)?,
        None => ConfigFile::default(),
    };
    match file.key_hex {
        Some(key_hex) => PipelineConfig::from_key_hex(&key_hex)
            .map(Some)
            .context("parse key_hex in config"),
        None => {
            debug!("no key configured");
            Ok(None)
        }
    }
}

fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))
}

fn cmd_compress(config: &PipelineConfig, input_path: &Path, output_path: &Path) -> Result<()> {
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let file =
        File::create(output_path).with_context(|| format!("create {}", output_path.display()))?;
    let mut writer = BitWriter::new(BufWriter::new(file));
    Pipeline::new(config)
        .compress_to(&data, &mut writer)
        .context("compress")?;
    writer
        .finish()
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(input = %input_path.display(), output = %output_path.display(), "compressed");
    Ok(())
}

fn cmd_decompress(config: &PipelineConfig, input_path: &Path, output_path: &Path) -> Result<()> {
    let file = File::open(input_path).with_context(|| format!("open {}", input_path.display()))?;
    let mut reader = BitReader::new(BufReader::new(file));
    let data = Pipeline::new(config)
        .decompress_from(&mut reader)
        .context("decompress")?;
    fs::write(output_path, &data).with_context(|| format!("write {}", output_path.display()))?;
    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        len = data.len(),
        "decompressed"
    );
    Ok(())
}

fn cmd_inspect(config: &PipelineConfig, input_path: &Path, json: bool) -> Result<()> {
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let inspection = Pipeline::new(config).inspect(&data).context("inspect")?;
    let report = InspectReport {
        header_len: inspection.header_len,
        payload_bits: inspection.payload_bits,
        seeds: inspection
            .dictionary
            .iter()
            .map(|(string, code)| SeedEntry {
                code,
                symbol: describe(string),
            })
            .collect(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &report).context("serialize report")?;
        writeln!(out)?;
    } else {
        writeln!(out, "header: {} bytes", report.header_len)?;
        writeln!(out, "payload: {} bits", report.payload_bits)?;
        writeln!(out, "seeds: {}", report.seeds.len())?;
        for seed in &report.seeds {
            writeln!(out, "{:>5}  {}", seed.code, seed.symbol)?;
        }
    }
    Ok(())
}

fn cmd_demo(configured: Option<PipelineConfig>, seed: Option<u64>, len: usize) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let config = match configured {
        Some(config) => config,
        None => {
            let mut key_bytes = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            PipelineConfig::new(Aes128Key::from(key_bytes))
        }
    };

    // Small alphabet so the dictionary has something to find.
    let alphabet = rng.gen_range(2u8..=16);
    let input: Vec<u8> = (0..len).map(|_| b'a' + rng.gen_range(0..alphabet)).collect();

    let pipeline = Pipeline::new(&config);
    let packed = pipeline.compress(&input).context("compress")?;
    let output = pipeline.decompress(&packed).context("decompress")?;

    println!("demo key: {}", hex::encode(config.key.0));
    println!("alphabet: {alphabet} symbols");
    println!("input: {} bytes", input.len());
    println!("encrypted: {} bytes", packed.len());
    println!("first block: {}", hex::encode(&packed[..packed.len().min(16)]));
    if output != input {
        bail!("demo roundtrip failed");
    }
    println!("roundtrip: ok");
    Ok(())
}

fn describe(string: &[Symbol]) -> String {
    string
        .iter()
        .map(|symbol| match symbol {
            Symbol::EndOfInput => "<end>".to_string(),
            Symbol::Byte(byte) if byte.is_ascii_graphic() => format!("{:?}", char::from(*byte)),
            Symbol::Byte(byte) => format!("0x{byte:02x}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
