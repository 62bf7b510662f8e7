use clap::{Parser, Subcommand};
use std::process;
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarise every built-in layout.
    List,
    /// Print one layout and its key groupings.
    Show(cmd::list::ShowArgs),
    /// Emit the ZMK key-labels header for a layout.
    Header(cmd::header::HeaderArgs),
    /// Audit the built-in layouts and, optionally, header files.
    Validate(cmd::validate::ValidateArgs),
    /// Build physical layouts from ergogen points.
    Generate(cmd::generate::GenerateArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::List => {
            cmd::list::run_list();
            Ok(())
        }
        Commands::Show(args) => {
            cmd::list::run_show(args);
            Ok(())
        }
        Commands::Header(args) => cmd::header::run(args),
        Commands::Validate(args) => cmd::validate::run(args),
        Commands::Generate(args) => cmd::generate::run(args),
    };

    if let Err(e) = result {
        eprintln!("\n❌ {}", e);
        process::exit(1);
    }
}
