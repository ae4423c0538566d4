use serde::{Deserialize, Serialize};

use biblioteca_core::book::{Book, BookDraft};

use crate::api::{self, ApiConfig};
use crate::prelude::{println, *};

/// Options for updating a book. The body shape is identical to create.
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct UpdateOptions {
    /// Book id
    pub id: u64,

    /// Title of the book
    #[arg(long)]
    pub title: String,

    /// Author of the book
    #[arg(long)]
    pub author: String,

    /// ISBN of the book
    #[arg(long)]
    pub isbn: String,

    /// Number of copies
    #[arg(long)]
    pub stock: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn update_book_data(
    config: &ApiConfig,
    id: u64,
    draft: &BookDraft,
) -> Result<Book, Error> {
    let client = api::create_client()?;
    let url = format!("{}/Books/{}", config.base(), id);

    let response = client
        .put(&url)
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

pub async fn handler(options: UpdateOptions, global: crate::Global) -> Result<()> {
    let draft = BookDraft {
        title: options.title.trim().to_string(),
        author: options.author.trim().to_string(),
        isbn: options.isbn.trim().to_string(),
        stock: options.stock,
    };

    if let Err(err) = draft.validate() {
        crate::alerts::abort(&Error::Validation(err.to_string()));
    }

    let config = ApiConfig::resolve(&global);

    let book = match update_book_data(&config, options.id, &draft).await {
        Ok(book) => book,
        Err(err) => crate::alerts::abort(&err),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&book)?);
        return Ok(());
    }

    crate::alerts::show_success("Libro guardado correctamente");
    super::display_book(&book);
    super::create::refresh_stats(&config).await;

    Ok(())
}
