//! Rulekit CLI - rule and prompt compiler for AI coding assistants
//!
//! Usage: rulekit <COMMAND>
//!
//! Commands:
//!   compile  Compile a resource document for one or more targets
//!   targets  List registered targets

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use serde_json::json;

use rulekit::cli::{Cli, Commands};
use rulekit::config::{Config, CONFIG_FILE};
use rulekit::{loader, writer, CompileOptions, Engine, Kind};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            file,
            targets,
            out,
            flat,
            config,
        } => cmd_compile(&file, targets, out, flat, config, cli.json),
        Commands::Targets => cmd_targets(cli.json),
        Commands::Parse { file } => cmd_parse(&file, cli.json),
    }
}

fn cmd_compile(
    file: &Path,
    targets: Vec<String>,
    out: Option<PathBuf>,
    flat: bool,
    config_path: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let config = Config::load(&config_path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE)))?;

    let targets = if targets.is_empty() {
        config.defaults.targets.clone()
    } else {
        targets
    };
    let out = out.or(config.defaults.output);
    let flat = flat || config.defaults.flat;

    let resource = loader::load_file(file)?;
    let engine = Engine::new();
    let results = engine.compile(&resource, &CompileOptions { targets })?;

    match out {
        Some(root) => {
            let summary = writer::write_files(&results, &root, flat)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "written": summary.written,
                        "skipped": summary.skipped,
                    }))?
                );
            } else {
                let unicode = std::io::stdout().is_terminal();
                print!("{}", writer::render_summary(&summary, unicode));
            }
        }
        None => {
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print!("{}", writer::render_stdout(&results));
            }
        }
    }

    Ok(())
}

fn cmd_targets(json: bool) -> Result<()> {
    let engine = Engine::new();
    let names = engine.registry().names();

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        for name in names {
            println!("{name}");
        }
    }

    Ok(())
}

fn cmd_parse(file: &Path, json: bool) -> Result<()> {
    let resource = loader::load_file(file)?;

    let items = match &resource.kind {
        Kind::Rule(_) | Kind::Prompt(_) => 1,
        Kind::Ruleset(set) => set.rules.len(),
        Kind::Promptset(set) => set.prompts.len(),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "apiVersion": resource.api_version,
                "kind": resource.kind.tag(),
                "id": resource.id(),
                "items": items,
            }))?
        );
    } else {
        println!("{} {} ({} items)", resource.kind.tag(), resource.id(), items);
        println!("  apiVersion: {}", resource.api_version);
    }

    Ok(())
}
