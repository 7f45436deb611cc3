mod native;
mod pipeline;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser; // clap crate for CLI argument parsing
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/*
The stop flags are checked in pipeline order: --lex wins over --parse, which
wins over --codegen. Every stage still runs first, so a failing program never
prints a partial dump.
*/

#[derive(Parser, Debug)]
#[command(name = "minic", version, about = "Translate a single-function C subset to C99 and build it", long_about = None)]
struct Args {
    /// Path to the source file
    input_path: PathBuf,

    /// Print the token sequence and stop
    #[arg(short, long)]
    lex: bool,

    /// Print the AST and stop
    #[arg(short, long)]
    parse: bool,

    /// Print the generated C99 source and stop
    #[arg(short, long)]
    codegen: bool,

    /// Path of the executable to produce (defaults to the input file stem)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Native C compiler used to build the generated source
    #[arg(long, env = "CC", default_value = "gcc")]
    cc: String,
}

fn main() -> anyhow::Result<()> {
    initialize_logging();

    let args = Args::parse();
    let input_file = args.input_path.as_path();

    let source = std::fs::read_to_string(input_file)
        .with_context(|| format!("failed to read {}", input_file.display()))?;

    let artifacts = pipeline::translate(&source)
        .with_context(|| format!("failed to translate {}", input_file.display()))?;
    info!(
        tokens = artifacts.tokens.len(),
        statements = artifacts.function.body.len(),
        "Translated source"
    );

    if args.lex {
        for token in &artifacts.tokens {
            println!("{}", token);
        }
        return Ok(());
    }

    if args.parse {
        println!("{:#?}", artifacts.function);
        return Ok(());
    }

    if args.codegen {
        print!("{}", artifacts.c_source);
        return Ok(());
    }

    let executable = args
        .output
        .clone()
        .unwrap_or_else(|| native::default_executable(input_file));
    build_executable(&artifacts.c_source, &args.cc, &executable)
}

fn build_executable(c_source: &str, compiler: &str, executable: &Path) -> anyhow::Result<()> {
    native::compile_c(c_source, compiler, executable)
        .with_context(|| format!("failed to build {}", executable.display()))?;
    info!(executable = %executable.display(), "Compiled executable");
    Ok(())
}

fn initialize_logging() {
    // Warnings only unless RUST_LOG says otherwise; stdout stays clean for dumps
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(env_filter))
        .init();
}
