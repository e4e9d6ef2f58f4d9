use clap::Parser;
use passkeep::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add { ref value } => passkeep::cli::commands::add::execute(&cli, value.as_deref()),
        Commands::Show => passkeep::cli::commands::show::execute(&cli),
        Commands::List => passkeep::cli::commands::list::execute(&cli),
    };

    if let Err(e) = result {
        passkeep::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
