use serde::{Deserialize, Serialize};

use biblioteca_core::book::Book;

use crate::api::{self, ApiConfig};
use crate::prelude::{println, *};

/// Options for showing a single book
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct GetOptions {
    /// Book id
    pub id: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn get_book_data(config: &ApiConfig, id: u64) -> Result<Book, Error> {
    let client = api::create_client()?;
    let url = format!("{}/Books/{}", config.base(), id);

    api::get_json(&client, &url).await
}

pub async fn handler(options: GetOptions, global: crate::Global) -> Result<()> {
    let config = ApiConfig::resolve(&global);

    let book = match get_book_data(&config, options.id).await {
        Ok(book) => book,
        Err(err) => crate::alerts::abort(&err),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        super::display_book(&book);
    }

    Ok(())
}
