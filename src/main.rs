use clap::Parser;
use clap::error::ErrorKind;
use cloc_tree::{Config, ConvertOptions, Origin, run};
use std::error::Error as _;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const VERSION: &str = const_str::concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    git_version::git_version!(args = ["--always", "--dirty=-modified"], fallback = "unknown"),
    ")"
);

/// Convert a cloc/wc line-count report into a JSON directory tree
#[derive(Parser, Debug, Clone)]
#[command(version = VERSION, about, long_about = None)]
pub struct Args {
    /// Which tool produced the report
    #[arg(long, value_enum, ignore_case = true, default_value_t = Origin::Wc)]
    pub origin: Origin,

    /// Report to read instead of `<BASE>.<ORIGIN>`
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// File to write instead of `<BASE>.json`
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, default_value = "false")]
    pub pretty: bool,

    /// Write zero-size files as leaves with `size: 0` instead of empty directories
    #[arg(long, default_value = "false")]
    pub keep_empty_files: bool,

    /// Base name of the report; reads `<BASE>.wc` and writes `<BASE>.json`
    #[arg()]
    pub base: PathBuf,
}

impl From<Args> for Config {
    fn from(args: Args) -> Config {
        let Args {
            origin,
            input,
            output,
            pretty,
            keep_empty_files,
            base,
        } = args;
        let mut config = Config::from_base(base, origin);
        if let Some(input) = input {
            config.input_path = input;
        }
        if let Some(output) = output {
            config.output_path = output;
        }
        config.pretty = pretty;
        config.options = ConvertOptions { keep_empty_files };
        config
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // clap reports usage errors with status 2; wrong arguments exit with 1 here.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprint!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(&Config::from(args)) {
        eprintln!("error: {e}");
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
