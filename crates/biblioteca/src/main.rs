#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod alerts;
mod api;
mod books;
mod error;
mod loans;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Command-line client for the library-management API"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the library API
    #[clap(long, env = "BIBLIOTECA_API_URL", global = true)]
    api_url: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "BIBLIOTECA_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Book catalog operations (list, search, create, update, delete)
    Books(crate::books::App),

    /// Loan operations (list, create, return, eligible books)
    Loans(crate::loans::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Books(sub_app) => crate::books::run(sub_app, app.global).await,
        SubCommands::Loans(sub_app) => crate::loans::run(sub_app, app.global).await,
    }
}
