use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ck", about = concat!("[x] checkoff v", env!("CARGO_PKG_VERSION"), " - a checklist in a text file"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different checklist file (default: ~/todo.txt)
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<String>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List items, optionally filtered by a substring
    List(ListArgs),
    /// Add an unchecked item at the top
    Add(AddArgs),
    /// Check an item off
    Check(IndexArg),
    /// Mark an item as not done
    Uncheck(IndexArg),
    /// Flip an item's checked state
    Toggle(IndexArg),
    /// Replace an item's text (empty text deletes it)
    Edit(EditArgs),
    /// Delete an item
    Rm(IndexArg),
    /// Move an item to another position
    Mv(MvArgs),
    /// Re-sort checked items below unchecked ones and rewrite the file
    Sort,
    /// Delete all checked items
    Clear,
    /// Print the checklist file path
    Path,
}

// ---------------------------------------------------------------------------
// Args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Only show items containing this text
    pub query: Option<String>,
    /// Only checked items
    #[arg(long, conflicts_with = "unchecked")]
    pub checked: bool,
    /// Only unchecked items
    #[arg(long)]
    pub unchecked: bool,
    /// Match the query case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Item text (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct IndexArg {
    /// Item number as shown by `ck list` (1-based)
    pub index: usize,
}

#[derive(Args)]
pub struct EditArgs {
    /// Item number as shown by `ck list` (1-based)
    pub index: usize,
    /// New text; omit to delete the item
    #[arg(num_args = 0..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct MvArgs {
    /// Item number to move (1-based)
    pub index: usize,
    /// Destination number (1-based)
    pub to: usize,
}
