use clap::Parser;
use checkoff::cli::commands::Cli;
use checkoff::cli::handlers;
use checkoff::io::{config_io, logging};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => {
            // No subcommand → launch TUI
            logging::init_tui(cli.verbose);
            let config = config_io::load_config();
            let path = config_io::file_path(cli.file.as_deref(), &config);
            checkoff::tui::run(path, &config)
        }
        Some(_) => {
            logging::init_cli(cli.verbose);
            handlers::dispatch(cli)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
