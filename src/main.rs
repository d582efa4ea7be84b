//! wavjson CLI
//!
//! Converts a WAV file into a JSON document next to it.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use wavjson_lib::{encode_file, init, Compression, Config, Error, DOCUMENT_EXTENSION};

#[derive(Parser)]
#[command(name = "wavjson")]
#[command(about = "Convert a WAV file into a lossless JSON document", long_about = None)]
#[command(after_help = compression_help())]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Input WAV file
    input: PathBuf,

    /// Payload compression: none, base64 or gzip_base64
    #[arg(default_value = "base64")]
    compression: String,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors exit with 1; --help and --version keep clap's handling
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    if let Err(e) = run(cli) {
        match e.downcast_ref::<Error>() {
            Some(Error::NotFound(_)) => eprintln!("Error: {}", e),
            _ => eprintln!("Error during conversion: {}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init(Config {
        verbose: cli.verbose,
        debug: cli.debug,
    })?;

    info!("wavjson v{}", wavjson_lib::VERSION);

    let compression: Compression = cli.compression.parse()?;
    let output = document_path(&cli.input);

    println!(
        "Converting {} to {}...",
        cli.input.display(),
        output.display()
    );

    let encoded = encode_file(&cli.input, &output, compression)?;
    println!("{}", encoded.report);

    Ok(())
}

fn compression_help() -> String {
    let mut help = String::from("Compression types:");
    for mode in Compression::ALL {
        help.push_str(&format!("\n  {:<11} - {}", mode.as_str(), mode.description()));
    }
    help
}

/// Same base name as the input, with the document extension
fn document_path(input: &Path) -> PathBuf {
    input.with_extension(DOCUMENT_EXTENSION)
}
