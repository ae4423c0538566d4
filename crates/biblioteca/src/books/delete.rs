use serde::{Deserialize, Serialize};

use crate::api::{self, ApiConfig};
use crate::prelude::{println, *};

/// Options for deleting a book
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct DeleteOptions {
    /// Book id
    pub id: u64,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

pub async fn delete_book_data(config: &ApiConfig, id: u64) -> Result<(), Error> {
    let client = api::create_client()?;
    let url = format!("{}/Books/{}", config.base(), id);

    let response = client
        .delete(&url)
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(api::decode_error(response).await);
    }

    Ok(())
}

pub async fn handler(options: DeleteOptions, global: crate::Global) -> Result<()> {
    // Declining the prompt must leave the network untouched, so the
    // confirmation comes before any request.
    if !options.yes {
        let prompt = format!("¿Eliminar el libro {}? [s/N]", options.id);
        if !crate::alerts::confirm(&prompt) {
            println!("Operación cancelada.");
            return Ok(());
        }
    }

    let config = ApiConfig::resolve(&global);

    if let Err(err) = delete_book_data(&config, options.id).await {
        crate::alerts::abort(&err);
    }

    crate::alerts::show_success("Libro eliminado correctamente");
    super::create::refresh_stats(&config).await;

    Ok(())
}
