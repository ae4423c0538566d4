use serde::{Deserialize, Serialize};

use biblioteca_core::book::{Book, BookStats};

use crate::api::{self, ApiConfig};
use crate::prelude::{println, *};

/// Options for listing books
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct ListOptions {
    /// Server-side substring search over title, author and ISBN
    #[arg(short, long)]
    pub search: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Fetch the book list, using the server-side search when a term is given.
pub async fn list_books_data(
    config: &ApiConfig,
    search: Option<&str>,
) -> Result<Vec<Book>, Error> {
    let client = api::create_client()?;

    let url = match search {
        Some(term) => format!(
            "{}/Books/search?term={}",
            config.base(),
            urlencoding::encode(term)
        ),
        None => format!("{}/Books", config.base()),
    };

    api::get_json(&client, &url).await
}

pub async fn handler(options: ListOptions, global: crate::Global) -> Result<()> {
    let config = ApiConfig::resolve(&global);
    let search = options
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    if global.verbose {
        match search {
            Some(term) => println!("Buscando libros con \"{term}\"..."),
            None => println!("Cargando libros..."),
        }
    }

    let books = match list_books_data(&config, search).await {
        Ok(books) => books,
        Err(err) => crate::alerts::abort(&err),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    super::display_books(&books);

    // A search result is a partial set; its counters would mislead.
    if search.is_none() {
        super::display_stats(&BookStats::compute(&books));
    }

    Ok(())
}
