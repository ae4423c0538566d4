use serde::{Deserialize, Serialize};

use biblioteca_core::loan::Loan;

use crate::api::{self, ApiConfig};
use crate::prelude::{println, *};

/// Options for returning a loan
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct ReturnOptions {
    /// Loan id
    pub id: u64,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// PUT the return action. The response carries the loan with its return
/// date set; the transition is terminal and never reverses.
pub async fn return_loan_data(config: &ApiConfig, id: u64) -> Result<Loan, Error> {
    let client = api::create_client()?;
    let url = format!("{}/Loans/{}/return", config.base(), id);

    let response = client
        .put(&url)
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

pub async fn handler(options: ReturnOptions, global: crate::Global) -> Result<()> {
    // Declining must leave the network untouched.
    if !options.yes {
        let prompt = format!("¿Confirma la devolución del préstamo {}? [s/N]", options.id);
        if !crate::alerts::confirm(&prompt) {
            println!("Operación cancelada.");
            return Ok(());
        }
    }

    let config = ApiConfig::resolve(&global);

    let loan = match return_loan_data(&config, options.id).await {
        Ok(loan) => loan,
        Err(err) => crate::alerts::abort(&err),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&loan)?);
        return Ok(());
    }

    crate::alerts::show_success("Préstamo devuelto correctamente");
    super::display_loan(&loan);
    super::create::refresh_after_mutation(&config, loan.book_id).await;

    Ok(())
}
