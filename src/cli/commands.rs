use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vs", about = concat!("[^] voidstack v", env!("CARGO_PKG_VERSION"), " - last in, first out"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different store file
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Push a task onto the top of the stack
    Push(PushArgs),
    /// Pop the top task off the stack
    Pop,
    /// Show the top task without removing it
    Peek,
    /// List the whole stack, top first
    List,
    /// Remove every task
    Clear,
}

#[derive(Args)]
pub struct PushArgs {
    /// Task text (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}
