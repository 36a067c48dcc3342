use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use readme_forge::cache::{JsonFileCache, MemoryCache, PersistenceCache};
use readme_forge::config::{self, Config};
use readme_forge::export::EXPORT_FILE_NAME;
use readme_forge::render;
use readme_forge::repl::{unescape, ReplCommand};
use readme_forge::theme::Theme;
use readme_forge::{FieldName, FieldStore, ForgeError, GitHubClient, Session};

#[derive(Parser)]
#[command(name = "readme-forge", version, about = "Generate a README.md from a repository's public metadata")]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Keep field values in memory only
    #[arg(long, global = true)]
    no_persist: bool,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fill every field from a repository URL
    Fetch { url: String },
    /// Set a single field
    Set { field: String, value: String },
    /// Print the rendered README
    Show {
        /// Print the raw markdown without styling
        #[arg(long)]
        raw: bool,
    },
    /// Write the README to disk
    Export {
        /// Target file or directory (defaults to ./README.md)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Reset all fields and erase the saved values
    Clear,
    /// List field names with their current values
    Fields,
}

type CliSession<C> = Session<GitHubClient, C>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(io::stderr)
        .init();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::get_config_path()?,
    };
    let config = Config::ensure_config_exists(&config_path)?;

    if !config.display.color_output {
        colored::control::set_override(false);
    }

    if cli.no_persist || !config.storage.persist {
        run(cli.command, &config, MemoryCache::new()).await
    } else {
        let cache = JsonFileCache::open(config.cache_path()?)?;
        tracing::debug!("Using field cache at {:?}", cache.path());
        run(cli.command, &config, cache).await
    }
}

async fn run<C: PersistenceCache>(command: Option<Command>, config: &Config, cache: C) -> Result<()> {
    let client = GitHubClient::new(&config.github)?;
    let mut session = Session::new(client, FieldStore::load(cache), config.defaults.clone());
    let theme = Theme::from_name(&config.display.theme);

    match command {
        Some(Command::Fetch { url }) => {
            if fetch(&mut session, &url, &theme).await {
                print_preview(&session, &theme);
            }
        }
        Some(Command::Set { field, value }) => {
            session.on_edit(&field, unescape(&value))?;
            println!("{} {}", "Updated".green(), field);
        }
        Some(Command::Show { raw }) => {
            if raw {
                print!("{}", session.rendered());
            } else {
                print_preview(&session, &theme);
            }
        }
        Some(Command::Export { output }) => {
            let target = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
            submit(&session, &target)?;
        }
        Some(Command::Clear) => {
            session.on_clear()?;
            println!("{}", "All fields cleared".green());
        }
        Some(Command::Fields) => print_fields(&session),
        None => interactive(&mut session, &theme).await?,
    }

    Ok(())
}

async fn interactive<C: PersistenceCache>(session: &mut CliSession<C>, theme: &Theme) -> Result<()> {
    println!("{}", "readme-forge - README generator".green().bold());
    println!("Type 'help' for commands, 'exit' to quit\n");
    print_preview(session, theme);

    loop {
        print!("\nreadme> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        match ReplCommand::parse(&line) {
            ReplCommand::Empty => continue,
            ReplCommand::Exit => break,
            ReplCommand::Help => print_help(),
            ReplCommand::Fetch(url) => {
                if fetch(session, url, theme).await {
                    print_preview(session, theme);
                }
            }
            ReplCommand::Set { field, value } => match session.on_edit(field, unescape(value)) {
                Ok(_) => print_preview(session, theme),
                Err(e) => eprintln!("{}: {}", "Error".red().bold(), e),
            },
            ReplCommand::Show => print_preview(session, theme),
            ReplCommand::Fields => print_fields(session),
            ReplCommand::Save(path) => {
                let target = PathBuf::from(path.unwrap_or(EXPORT_FILE_NAME));
                if let Err(e) = submit(session, &target) {
                    eprintln!("{}: {}", "Error".red().bold(), e);
                }
            }
            ReplCommand::Clear => {
                session.on_clear()?;
                println!("{}", "All fields cleared".green());
            }
            ReplCommand::Unknown(other) => eprintln!(
                "{}: unknown command '{}' (try 'help')",
                "Error".red().bold(),
                other
            ),
        }
    }

    Ok(())
}

/// Returns whether the fields were populated; failures are reported once and swallowed.
async fn fetch<C: PersistenceCache>(session: &mut CliSession<C>, url: &str, theme: &Theme) -> bool {
    match session.on_repository_url(url).await {
        Ok(_) => true,
        Err(ForgeError::NotFoundError(_)) => {
            eprintln!(
                "{}",
                theme
                    .notice
                    .apply("Couldn’t fetch repo—check the URL or try manual input!")
            );
            false
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            false
        }
    }
}

fn submit<C: PersistenceCache>(session: &CliSession<C>, target: &Path) -> Result<()> {
    let path = session.on_submit(target)?;
    println!("{} {}", "Saved".green().bold(), path.display());
    Ok(())
}

fn print_preview<C: PersistenceCache>(session: &CliSession<C>, theme: &Theme) {
    println!("{}", render::preview(&session.rendered(), theme));
}

fn print_fields<C: PersistenceCache>(session: &CliSession<C>) {
    for (field, value) in session.fields().iter() {
        let shown = if value.is_empty() {
            "(empty)".dimmed().to_string()
        } else {
            value.replace('\n', "\\n")
        };
        println!("{:<16} {}", field.as_str().blue(), shown);
    }
}

fn print_help() {
    println!("  fetch <url>            fill fields from a repository");
    println!("  set <field> <value>    edit a field (use \\n for line breaks)");
    println!("  show                   preview the README");
    println!("  fields                 list field values");
    println!("  save [path]            write {}", EXPORT_FILE_NAME);
    println!("  clear                  reset all fields");
    println!("  exit                   quit");
    let names: Vec<&str> = FieldName::ALL.iter().map(|f| f.as_str()).collect();
    println!("\nFields: {}", names.join(", "));
}
