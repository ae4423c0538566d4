use serde::{Deserialize, Serialize};

use biblioteca_core::book::{Book, BookDraft, BookStats};

use crate::api::{self, ApiConfig};
use crate::prelude::{eprintln, println, *};

/// Options for registering a new book
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct CreateOptions {
    /// Title of the book
    #[arg(long)]
    pub title: String,

    /// Author of the book
    #[arg(long)]
    pub author: String,

    /// ISBN of the book
    #[arg(long)]
    pub isbn: String,

    /// Initial number of copies
    #[arg(long)]
    pub stock: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn create_book_data(config: &ApiConfig, draft: &BookDraft) -> Result<Book, Error> {
    let client = api::create_client()?;
    let url = format!("{}/Books", config.base());

    let response = client
        .post(&url)
        .json(draft)
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(api::decode_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| Error::Generic(format!("Respuesta inválida de la API: {e}")))
}

pub async fn handler(options: CreateOptions, global: crate::Global) -> Result<()> {
    let draft = BookDraft {
        title: options.title.trim().to_string(),
        author: options.author.trim().to_string(),
        isbn: options.isbn.trim().to_string(),
        stock: options.stock,
    };

    // Presence validation blocks the submission before any request.
    if let Err(err) = draft.validate() {
        crate::alerts::abort(&Error::Validation(err.to_string()));
    }

    let config = ApiConfig::resolve(&global);

    let book = match create_book_data(&config, &draft).await {
        Ok(book) => book,
        Err(err) => crate::alerts::abort(&err),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&book)?);
        return Ok(());
    }

    crate::alerts::show_success("Libro guardado correctamente");
    super::display_book(&book);
    refresh_stats(&config).await;

    Ok(())
}

/// Re-fetch the catalog and print the updated counters. A failure here
/// only costs the counters line; the mutation already succeeded.
pub async fn refresh_stats(config: &ApiConfig) {
    use colored::Colorize;

    match super::list::list_books_data(config, None).await {
        Ok(books) => super::display_stats(&BookStats::compute(&books)),
        Err(err) => eprintln!(
            "{}",
            format!("No se pudieron actualizar las estadísticas: {err}").bright_black()
        ),
    }
}
