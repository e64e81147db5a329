use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use spire_core::{ErrorPolicy, run_pass};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spire-cli")]
#[command(about = "Slay the Spire autosave (de|en)code – CLI tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory to scan instead of the current one
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Keep going after a per-file failure instead of aborting the pass
    #[arg(long)]
    continue_on_error: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a single opaque save file to plaintext
    Decode {
        /// Path to the obfuscated save file
        opaque: PathBuf,

        /// Path to write the decoded plaintext
        out_plain: PathBuf,
    },

    /// Encode a plaintext file into the opaque save form
    Encode {
        /// Path to the plaintext file
        plain: PathBuf,

        /// Path to write the obfuscated save file
        out_opaque: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Decode { opaque, out_plain }) => {
            cmd_decode(&opaque, &out_plain)?;
        }
        Some(Commands::Encode { plain, out_opaque }) => {
            cmd_encode(&plain, &out_opaque)?;
        }
        None => {
            cmd_pass(cli.dir, cli.continue_on_error)?;
        }
    }

    Ok(())
}

fn cmd_pass(dir: Option<PathBuf>, continue_on_error: bool) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };
    let policy = if continue_on_error {
        ErrorPolicy::Continue
    } else {
        ErrorPolicy::Abort
    };

    let summary = run_pass(&dir, policy)?;

    println!(
        "[ok] decoded {}  encoded {}  skipped {}  failed {}",
        summary.decoded, summary.encoded, summary.skipped, summary.failed
    );

    if summary.failed > 0 {
        bail!("{} file(s) failed", summary.failed);
    }

    Ok(())
}

fn cmd_decode(opaque_path: &PathBuf, out_plain_path: &PathBuf) -> Result<()> {
    // Read opaque save file
    let opaque = fs::read(opaque_path)
        .with_context(|| format!("Failed to read save file: {}", opaque_path.display()))?;

    println!("[info] len(opaque)={}", opaque.len());

    // Decode
    let plain = spire_core::decode(&opaque)
        .with_context(|| format!("Failed to decode: {}", opaque_path.display()))?;

    // Write decoded payload
    fs::write(out_plain_path, &plain)
        .with_context(|| format!("Failed to write plaintext file: {}", out_plain_path.display()))?;

    println!("[ok] wrote payload -> {}", out_plain_path.display());

    Ok(())
}

fn cmd_encode(plain_path: &PathBuf, out_opaque_path: &PathBuf) -> Result<()> {
    // Read plaintext payload
    let plain = fs::read(plain_path)
        .with_context(|| format!("Failed to read plaintext file: {}", plain_path.display()))?;

    // Encode
    let opaque = spire_core::encode(&plain);

    // Write opaque save file
    fs::write(out_opaque_path, &opaque)
        .with_context(|| format!("Failed to write save file: {}", out_opaque_path.display()))?;

    println!("[ok] wrote encoded save -> {}", out_opaque_path.display());

    Ok(())
}
