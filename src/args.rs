use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pagedeck")]
#[command(about = "Manage sectioned text blocks with dense page numbering", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the JSON block store (defaults to the user data directory)
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,

    /// Print results as JSON instead of the plain listing
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all blocks, grouped by page
    #[command(alias = "ls")]
    List,

    /// Add a block to a page
    #[command(alias = "a")]
    Add {
        /// Text of the block
        text: String,

        /// Section label (e.g. "Page 2"); defaults to Page 1
        #[arg(long, conflicts_with = "page")]
        section: Option<String>,

        /// Page number shorthand for --section
        #[arg(short, long)]
        page: Option<u64>,

        /// Text mode: base, bold, line, bold-italics-line
        #[arg(short, long, default_value = "base")]
        mode: String,
    },

    /// Append a new page with a template block
    AddSection,

    /// Update a block's text and mode
    #[command(alias = "up")]
    Update {
        /// Block id
        id: String,

        /// New text
        text: String,

        /// Text mode: base, bold, line, bold-italics-line
        #[arg(short, long, default_value = "base")]
        mode: String,
    },

    /// Delete a block by id
    #[command(alias = "rm")]
    Delete {
        /// Block id
        id: String,
    },

    /// Delete a whole page and renumber the rest
    DeleteSection {
        /// Section label (e.g. "Page 2")
        #[arg(conflicts_with = "page")]
        label: Option<String>,

        /// Page number shorthand for the label
        #[arg(short, long)]
        page: Option<u64>,
    },
}
