use crate::inspect::{run_catalog_list, run_catalog_show, CatalogListArgs, CatalogShowArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use khoroush::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Khoroush Web",
    about = "Serve the Khoroush property website and inspect its listing catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Query the configured catalog source from the terminal
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List every record in a category in display order
    List(CatalogListArgs),
    /// Print a single record as JSON
    Show(CatalogShowArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog {
            command: CatalogCommand::List(args),
        } => run_catalog_list(args).await,
        Command::Catalog {
            command: CatalogCommand::Show(args),
        } => run_catalog_show(args).await,
    }
}
