use clap::{Parser, Subcommand};
use template_processor::{AppError, DocumentFormat, ProcessOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tproc")]
#[command(version)]
#[command(
    about = "Expand parameterized templates into concrete object sets",
    long_about = None
)]
struct Cli {
    /// Path to a config file (defaults to ./tproc.toml when present)
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve parameters, substitute macros and apply labels
    #[clap(visible_alias = "p")]
    Process {
        /// Template file, or '-' to read standard input
        template: String,
        /// Parameter value as NAME=VALUE (repeatable)
        #[arg(short = 'p', long = "param")]
        params: Vec<String>,
        /// Label added to every object as KEY=VALUE (repeatable)
        #[arg(short = 'l', long = "label")]
        labels: Vec<String>,
        /// Output format: json or yaml (defaults to the input format)
        #[arg(short, long)]
        output: Option<DocumentFormat>,
        /// Emit a List of the processed objects instead of the template
        #[arg(long)]
        list: bool,
        /// Seed for generated values
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the parameters a template declares
    #[clap(visible_alias = "params")]
    Parameters {
        /// Template file, or '-' to read standard input
        template: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result: Result<(), AppError> = match cli.command {
        Commands::Process { template, params, labels, output, list, seed } => {
            let options = ProcessOptions { template, params, labels, output, list, seed };
            template_processor::process(options, config).map(|outcome| {
                println!("{}", outcome.document.trim_end());
            })
        }
        Commands::Parameters { template } => template_processor::parameters(&template, config)
            .map(|parameters| print!("{}", template_processor::parameters_table(&parameters))),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
