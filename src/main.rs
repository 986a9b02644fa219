use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use pagedeck::api::{AddBlockInput, DeckApi, SectionRef};
use pagedeck::commands::OpResult;
use pagedeck::error::{DeckError, Result};
use pagedeck::model::Block;
use pagedeck::store::fs::FileStore;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::new(store_path(&cli)?);
    let json = cli.json;
    let mut api = DeckApi::new(store);

    match cli.command {
        Some(Commands::Add {
            text,
            section,
            page,
            mode,
        }) => {
            let section = match (section, page) {
                (Some(label), _) => label,
                (None, Some(n)) => pagedeck::model::page_label(n),
                (None, None) => String::new(),
            };
            let result = api.add_block(AddBlockInput {
                section,
                text,
                mode,
            })?;
            report(json, &result, |r| {
                if let Some(block) = &r.block {
                    println!("Block created: {} ({})", block.text, block.id);
                }
                print_listing(&r.listing);
            })
        }
        Some(Commands::AddSection) => {
            let result = api.add_section()?;
            report(json, &result, |r| {
                if let Some(block) = &r.block {
                    println!("Section created: {} (block {})", block.section, block.id);
                }
            })
        }
        Some(Commands::Update { id, text, mode }) => {
            let result = api.update_block(&id, &text, &mode)?;
            report(json, &result, |r| {
                if let Some(block) = &r.block {
                    println!("Block updated: {} ({})", block.text, block.id);
                }
            })
        }
        Some(Commands::Delete { id }) => {
            let result = api.delete_block(&id)?;
            report(json, &result, |r| {
                println!("Deleted {} block(s)", r.deleted);
                print_listing(&r.listing);
            })
        }
        Some(Commands::DeleteSection { label, page }) => {
            let section = match (label, page) {
                (Some(label), _) => SectionRef::Label(label),
                (None, Some(n)) => SectionRef::Page(n),
                (None, None) => {
                    return Err(DeckError::InvalidInput(
                        "a section label or --page is required".to_string(),
                    ))
                }
            };
            let result = api.delete_section(&section)?;
            report(json, &result, |r| {
                println!("Deleted {} block(s)", r.deleted);
                print_listing(&r.listing);
            })
        }
        Some(Commands::List) | None => {
            let result = api.list()?;
            report(json, &result, |r| print_listing(&r.listing))
        }
    }
}

fn store_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.store {
        return Ok(path.clone());
    }
    let dirs = ProjectDirs::from("com", "pagedeck", "pagedeck")
        .ok_or_else(|| DeckError::Store("could not determine data directory".to_string()))?;
    Ok(dirs.data_dir().join("blocks.json"))
}

fn report<F: FnOnce(&OpResult)>(json: bool, result: &OpResult, plain: F) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        plain(result);
    }
    Ok(())
}

fn print_listing(blocks: &[Block]) {
    if blocks.is_empty() {
        println!("No blocks.");
        return;
    }
    let mut current_section: Option<&str> = None;
    for block in blocks {
        if current_section != Some(block.section.as_str()) {
            println!("{}", block.section.bold());
            current_section = Some(block.section.as_str());
        }
        println!("  {}  [{}] {}", block.id, block.mode, block.text);
    }
}
