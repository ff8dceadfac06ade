use clap::Parser;
use voidstack::cli::commands::Cli;
use voidstack::cli::handlers;
use voidstack::io::logging;

fn main() {
    logging::init();

    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = voidstack::tui::run(cli.store.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
