use colored::Colorize;
use serde::{Deserialize, Serialize};

use biblioteca_core::book::Availability;
use biblioteca_core::loan::{Loan, LoanDraft, LoanStats};

use crate::api::{self, ApiConfig};
use crate::books::get::get_book_data;
use crate::prelude::{eprintln, println, *};

/// Options for registering a loan
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct CreateOptions {
    /// Id of the book to lend
    #[arg(long, default_value_t = 0)]
    pub book: u64,

    /// Name of the student taking the loan
    #[arg(long, default_value = "")]
    pub student: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn create_loan_data(config: &ApiConfig, draft: &LoanDraft) -> Result<Loan, Error> {
    let client = api::create_client()?;
    let url = format!("{}/Loans", config.base());

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
    let draft = LoanDraft {
        book_id: options.book,
        student_name: options.student.trim().to_string(),
    };

    // Both guards run before any network traffic.
    if let Err(err) = draft.validate() {
        crate::alerts::abort(&Error::Validation(err.to_string()));
    }

    let config = ApiConfig::resolve(&global);

    // Best-effort stock guard on a fresh snapshot. The snapshot can go
    // stale between this check and the POST; the server stays
    // authoritative either way.
    let book = match get_book_data(&config, draft.book_id).await {
        Ok(book) => book,
        Err(err) => crate::alerts::abort(&err),
    };

    match Availability::from_stock(book.stock) {
        Availability::OutOfStock => {
            crate::alerts::abort(&Error::OutOfStock(format!(
                "No hay stock disponible para \"{}\"",
                book.title
            )));
        }
        Availability::Low(n) => {
            println!("{}", format!("Stock bajo: {n}").yellow());
        }
        Availability::Available(_) => {}
    }

    let loan = match create_loan_data(&config, &draft).await {
        Ok(loan) => loan,
        Err(err) => crate::alerts::abort(&err),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&loan)?);
        return Ok(());
    }

    crate::alerts::show_success("Préstamo registrado correctamente");
    super::display_loan(&loan);
    refresh_after_mutation(&config, loan.book_id).await;

    Ok(())
}

/// Re-fetch the affected book and the loan counters after a successful
/// mutation. Failures here only cost the refreshed lines.
pub async fn refresh_after_mutation(config: &ApiConfig, book_id: u64) {
    match get_book_data(config, book_id).await {
        Ok(book) => println!("Stock restante de \"{}\": {}", book.title, book.stock),
        Err(err) => eprintln!(
            "{}",
            format!("No se pudo consultar el stock restante: {err}").bright_black()
        ),
    }

    match super::list::list_loans_data(config, false).await {
        Ok(loans) => super::display_stats(&LoanStats::compute(&loans)),
        Err(err) => eprintln!(
            "{}",
            format!("No se pudieron actualizar las estadísticas: {err}").bright_black()
        ),
    }
}
