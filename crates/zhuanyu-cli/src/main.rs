use anyhow::{Result, anyhow};
use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::io::{self, Write};
use std::path::Path;
use std::process;
use zhuanyu_config::Config;
use zhuanyu_engine::RecipeStore;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "zhuanyu-cli", version, about = "Zhuanyu CLI: manage plain-text recipe files")]
struct Cli {
    /// Recipes directory to use instead of the configured one
    #[arg(short = 'd', long = "dir", value_name = "PATH", global = true)]
    dir: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List recipe files with their titles and modification times
    List,
    /// Summarise the blocks of a recipe
    Show {
        /// Recipe file name, or a path containing '/'
        file: Option<String>,
        /// Print the decoded recipe as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the raw text of a recipe
    Cat {
        /// Recipe file name, or a path containing '/'
        file: Option<String>,
    },
    /// Create a recipe from the default template
    New {
        /// Recipe title; several words are joined with spaces
        title: Vec<String>,
    },
    /// Write the sample recipe if the directory holds no recipes
    Sample,
    /// Check whether a recipe survives decoding and re-encoding unchanged
    Validate {
        /// Recipe file name, or a path containing '/'
        file: Option<String>,
    },
}

fn usage_notes(default_dir: &Path) -> String {
    format!(
        "Notes:
  - Default recipe directory: {}
  - Use --dir to point at a different Recipes folder

Examples:
  zhuanyu-cli list
  zhuanyu-cli new \"Weeknight Stir-Fry\"
  zhuanyu-cli show sample-stir-fry.md
  zhuanyu-cli validate ~/Documents/Recipes/sample-stir-fry.md",
        default_dir.display()
    )
}

fn cli_command(default_dir: &Path) -> clap::Command {
    Cli::command().after_help(usage_notes(default_dir))
}

fn require_file(file: Option<String>) -> Result<String> {
    file.ok_or_else(|| anyhow!("Missing file argument"))
}

fn execute(command: Commands, store: &RecipeStore, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::List => commands::list(store, out),
        Commands::Show { file, json } => commands::show(store, &require_file(file)?, json, out),
        Commands::Cat { file } => commands::cat(store, &require_file(file)?, out),
        Commands::New { title } => commands::new_recipe(store, &title.join(" "), out),
        Commands::Sample => commands::sample(store, out),
        Commands::Validate { file } => commands::validate(store, &require_file(file)?, out),
    }
}

/// First line of a clap error without its `error: ` prefix
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

fn report_failure(command: &mut clap::Command, message: &str) -> i32 {
    eprintln!("Error: {message}");
    eprintln!("{}", command.render_help());
    1
}

fn run() -> i32 {
    let default_dir =
        Config::resolve_recipes_path(None).unwrap_or_else(|_| Config::default_recipes_path());
    let mut command = cli_command(&default_dir);

    let parsed = command
        .try_get_matches_from_mut(std::env::args_os())
        .and_then(|matches| Cli::from_arg_matches(&matches));
    let cli = match parsed {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return report_failure(&mut command, &clap_message(&e)),
    };

    let Some(subcommand) = cli.command else {
        println!("{}", command.render_help());
        return 0;
    };

    let recipes_dir = match Config::resolve_recipes_path(cli.dir.as_deref()) {
        Ok(dir) => dir,
        Err(e) => return report_failure(&mut command, &e.to_string()),
    };
    log::debug!("Using recipes directory {}", recipes_dir.display());

    let store = RecipeStore::new(recipes_dir);
    let mut stdout = io::stdout().lock();
    match execute(subcommand, &store, &mut stdout) {
        Ok(()) => 0,
        Err(e) => {
            log::debug!("Command failed: {e:?}");
            report_failure(&mut command, &format!("{e:#}"))
        }
    }
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    process::exit(run());
}
