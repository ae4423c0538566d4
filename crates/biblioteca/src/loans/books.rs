use colored::Colorize;
use serde::{Deserialize, Serialize};

use biblioteca_core::book::{Availability, Book};

use crate::api::{self, ApiConfig};
use crate::prelude::{println, *};

/// Options for listing books by loan eligibility
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct EligibleOptions {
    /// Only books with stock, served by the dedicated endpoint
    #[arg(long)]
    pub with_stock: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Fetch the catalog for the loan form. By default the full list comes
/// back and eligibility is derived per book from its stock; with
/// `with_stock` the server filters the ineligible books out itself.
pub async fn eligible_books_data(
    config: &ApiConfig,
    with_stock: bool,
) -> Result<Vec<Book>, Error> {
    let client = api::create_client()?;
    let url = books_url(config.base(), with_stock);

    api::get_json(&client, &url).await
}

fn books_url(base: &str, with_stock: bool) -> String {
    if with_stock {
        format!("{base}/Books/with-stock")
    } else {
        format!("{base}/Books")
    }
}

pub async fn handler(options: EligibleOptions, global: crate::Global) -> Result<()> {
    let config = ApiConfig::resolve(&global);

    let books = match eligible_books_data(&config, options.with_stock).await {
        Ok(books) => books,
        Err(err) => crate::alerts::abort(&err),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    if books.is_empty() {
        println!("{}", "No hay libros registrados".yellow());
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "ID".bold().cyan(),
        "Título".bold().cyan(),
        "Autor".bold().cyan(),
        "Disponibilidad".bold().cyan()
    ]);

    for book in &books {
        table.add_row(prettytable::row![
            book.id,
            book.title,
            book.author,
            availability_badge(Availability::from_stock(book.stock))
        ]);
    }

    table.printstd();

    let eligible = books
        .iter()
        .filter(|b| Availability::from_stock(b.stock).is_eligible())
        .count();

    if eligible == 0 {
        println!("\n{}", "No hay libros con stock".yellow().bold());
    } else {
        println!("\n{eligible} libro(s) disponibles para préstamo");
    }

    Ok(())
}

/// Availability column text, mirroring the original select-option badges.
fn availability_badge(availability: Availability) -> String {
    match availability {
        Availability::OutOfStock => "Sin stock".red().bold().to_string(),
        Availability::Low(n) => format!("Stock bajo: {n}").yellow().to_string(),
        Availability::Available(n) => format!("{n} disponibles").green().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_books_url_full_catalog() {
        assert_eq!(
            books_url("http://localhost:5004/api", false),
            "http://localhost:5004/api/Books"
        );
    }

    #[test]
    fn test_books_url_with_stock_endpoint() {
        assert_eq!(
            books_url("http://localhost:5004/api", true),
            "http://localhost:5004/api/Books/with-stock"
        );
    }

    #[test]
    fn test_badge_out_of_stock() {
        assert!(availability_badge(Availability::OutOfStock).contains("Sin stock"));
    }

    #[test]
    fn test_badge_low_stock_shows_count() {
        let badge = availability_badge(Availability::Low(2));

        assert!(badge.contains("Stock bajo"));
        assert!(badge.contains('2'));
    }

    #[test]
    fn test_badge_available_shows_count() {
        let badge = availability_badge(Availability::Available(11));

        assert!(badge.contains("11 disponibles"));
    }
}
