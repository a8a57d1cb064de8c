use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use icss::{
    compiler::compiler::compile, config::CompilerConfig,
    generator::generator::DEFAULT_INDENT, render_error,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "icss",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compiles ICSS stylesheets to plain CSS"
)]
struct Cli {
    /// Stylesheet to compile
    input: PathBuf,

    /// Write the generated CSS here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only report diagnostics, do not generate CSS
    #[arg(long)]
    check: bool,

    /// Spaces before each declaration
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    indent: usize,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let source = match fs::read_to_string(&cli.input) {
        Ok(source) => source,
        Err(e) => {
            error!(path = %cli.input.display(), "failed to read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let file_name = cli
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("stdin"));

    let config = CompilerConfig::default()
        .with_file_name(file_name)
        .with_check_only(cli.check)
        .with_indent(cli.indent);

    match compile(&source, &config) {
        Ok(Some(css)) => match &cli.output {
            Some(path) => {
                if let Err(e) = fs::write(path, css) {
                    error!(path = %path.display(), "failed to write output: {}", e);
                    return ExitCode::FAILURE;
                }
                info!(path = %path.display(), "wrote css");
                ExitCode::SUCCESS
            }
            None => {
                print!("{}", css);
                ExitCode::SUCCESS
            }
        },
        Ok(None) => {
            info!(file = %config.file_name, "no errors found");
            ExitCode::SUCCESS
        }
        Err(errors) => {
            for error in errors.iter() {
                eprintln!("{}", render_error(error, &source, &config.file_name));
            }
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        })
    });

    let formatter = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter)
        .init();
}
