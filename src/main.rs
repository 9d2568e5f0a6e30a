//! # gool
//!
//! A small CLI that finds the projects living under one root directory,
//! labels each with its technology stack and lists them.
//!
//! A project is any directory holding an IDE `.idea/` folder. Its stack
//! is guessed from marker files (`composer.json`, `package.json`,
//! `index.php`, `main.go`, `Cargo.toml`, `requirements.txt`). Results are
//! cached so that repeated listings skip the directory walk.
//!
//! ## Usage
//!
//! ```bash
//! # List projects (cached after the first run)
//! gool ls
//!
//! # Force a rescan, only Drupal 7 sites, sorted by name
//! gool ls --no-cache --type drupal7 --sort name
//!
//! # Create the config file, then set "ProjectsRootDir" in it
//! gool config init
//! ```

mod cli;

use std::process::exit;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Action, CacheCommand, Cli, ConfigCommand, LsArgs};
use colored::Colorize;
use gool::{
    cache::{CacheStore, PROJECTS_CACHE},
    catalog::CatalogBuilder,
    config::{FileConfig, file::CONFIG_TEMPLATE},
    filtering::{filter_projects, sort_projects},
    output::JsonOutput,
    project::Projects,
};

/// Entry point for the gool application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err:#}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// The `config` and `cache` actions never read the config file, so they keep
/// working when it is malformed. Every other action loads it first and
/// aborts on configuration problems.
///
/// # Errors
///
/// Returns configuration errors, cache management errors and stdout write
/// errors. Scan and cache problems during `ls` are warnings, not errors.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let file_config = if args.action.reads_config() {
        FileConfig::load()?
    } else {
        FileConfig::default()
    };

    match &args.action {
        Action::Ls(ls) => run_ls(&args, ls, &file_config),
        Action::Cd => {
            eprintln!("{}", "The cd action is not implemented yet.".yellow());
            Ok(())
        }
        Action::Config { command } => handle_config_command(command),
        Action::Cache { command } => handle_cache_command(command),
    }
}

/// Build (or load) the catalog and print it.
fn run_ls(args: &Cli, ls: &LsArgs, file_config: &FileConfig) -> Result<()> {
    let root = args.projects_root(file_config)?;
    let builder = CatalogBuilder::new(
        root,
        args.scan_options(file_config),
        CacheStore::open_default()?,
    )
    .with_quiet(ls.json());

    let catalog = builder.get_projects(ls.use_cache());

    let mut listed = filter_projects(catalog.projects.as_slice().to_vec(), ls.project_filter());
    sort_projects(&mut listed, &ls.sort_options());

    if ls.json() {
        let output = JsonOutput::from_catalog(&catalog, &listed);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    report_warnings(&catalog.warnings, args.verbose(file_config));

    let listed: Projects = listed.into();
    listed.print_listing()?;

    if ls.summary() {
        listed.print_summary();
    }

    Ok(())
}

/// Print warnings in full when verbose, otherwise a one-line hint.
fn report_warnings(warnings: &[String], verbose: bool) {
    if warnings.is_empty() {
        return;
    }

    if verbose {
        for warning in warnings {
            eprintln!("{}", warning.red());
        }
    } else {
        eprintln!(
            "{}",
            format!(
                "{} warning(s) while building the project list (use --verbose to show them)",
                warnings.len()
            )
            .yellow()
        );
    }
}

// ── Config subcommand ────────────────────────────────────────────────

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => {
            let Some(path) = FileConfig::config_path() else {
                bail!("Could not determine the config directory on this platform");
            };
            println!("{}", path.display());
        }
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the configuration file location and its parsed contents.
fn show_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if !path.exists() {
        println!(
            "Config file: {} (not found - run `gool config init`)",
            path.display()
        );
        return Ok(());
    }

    let config = FileConfig::load_from(&path)?;
    println!("Config file: {} (found)", path.display());
    println!();
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Write the empty config template if no config file exists yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    FileConfig::write_template(&path)?;

    println!("Config file written to: {}", path.display());
    println!("{}", CONFIG_TEMPLATE.trim_end().dimmed());
    Ok(())
}

// ── Cache subcommand ─────────────────────────────────────────────────

/// Dispatch a `cache` subcommand.
fn handle_cache_command(cmd: &CacheCommand) -> Result<()> {
    let store = CacheStore::open_default()?;

    match cmd {
        CacheCommand::Path => println!("{}", store.path_for(PROJECTS_CACHE).display()),
        CacheCommand::Clear => {
            if store.clear(PROJECTS_CACHE)? {
                println!("{}", "Project cache cleared.".green());
            } else {
                println!("No project cache to clear.");
            }
        }
    }
    Ok(())
}
