use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use kickstart::installer::Presets;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Rename the TYPO3 extension skeleton", long_about = None)]
struct Cli {
    /// Log diagnostics to stderr (overridden by KICKSTART_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for the extension's identity and rewrite the skeleton
    Init {
        /// Skeleton directory
        #[arg(default_value = ".")]
        path: PathBuf,

        #[command(flatten)]
        answers: AnswerArgs,

        /// Do not ask anything: use options and defaults only
        #[arg(short = 'n', long)]
        no_interaction: bool,
    },

    /// Show whether the skeleton has been set up
    Status {
        /// Skeleton directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// Answers that skip their question
#[derive(Args)]
struct AnswerArgs {
    /// Extension key (snake_case)
    #[arg(long)]
    extension_key: Option<String>,

    /// Vendor key (kebab-case)
    #[arg(long)]
    vendor: Option<String>,

    /// Composer package name (vendor/name)
    #[arg(long)]
    package_name: Option<String>,

    /// Display title
    #[arg(long)]
    title: Option<String>,

    /// License label or menu index
    #[arg(long)]
    license: Option<String>,

    /// Description
    #[arg(long)]
    description: Option<String>,
}

impl From<AnswerArgs> for Presets {
    fn from(args: AnswerArgs) -> Self {
        Self {
            extension_key: args.extension_key,
            vendor: args.vendor,
            package_name: args.package_name,
            title: args.title,
            license: args.license,
            description: args.description,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    kickstart::logging::init(cli.verbose);

    match cli.command {
        Commands::Init {
            path,
            answers,
            no_interaction,
        } => {
            commands::init::execute(&path, answers.into(), no_interaction)?;
        }
        Commands::Status { path, json } => {
            commands::status::execute(&path, json)?;
        }
    }

    Ok(())
}
