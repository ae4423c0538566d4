use colored::Colorize;

use biblioteca_core::book::{Book, BookStats};

use crate::prelude::{println, *};

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

/// Books module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "books")]
#[command(about = "Book catalog operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List books, optionally using the server-side search
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Show a single book
    #[clap(name = "get")]
    Get(get::GetOptions),

    /// Register a new book
    #[clap(name = "create")]
    Create(create::CreateOptions),

    /// Update an existing book (same fields as create)
    #[clap(name = "update")]
    Update(update::UpdateOptions),

    /// Delete a book, after confirmation
    #[clap(name = "delete")]
    Delete(delete::DeleteOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!(
            "API base: {}",
            crate::api::ApiConfig::resolve(&global).base_url
        );
        println!();
    }

    match app.command {
        Commands::List(options) => list::handler(options, global).await,
        Commands::Get(options) => get::handler(options, global).await,
        Commands::Create(options) => create::handler(options, global).await,
        Commands::Update(options) => update::handler(options, global).await,
        Commands::Delete(options) => delete::handler(options, global).await,
    }
}

/// Render a book list as the standard catalog table.
pub fn display_books(books: &[Book]) {
    if books.is_empty() {
        println!("{}", "No hay libros registrados".yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "ID".bold().cyan(),
        "Título".bold().cyan(),
        "Autor".bold().cyan(),
        "ISBN".bold().cyan(),
        "Stock".bold().cyan()
    ]);

    for book in books {
        table.add_row(prettytable::row![
            book.id,
            book.title,
            book.author,
            book.isbn,
            format_stock(book.stock)
        ]);
    }

    table.printstd();
}

/// Render a single book as a detail table.
pub fn display_book(book: &Book) {
    std::println!(
        "\n{} - {}\n",
        format!("#{}", book.id).bold().cyan(),
        book.title.bright_white()
    );

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Autor".bold().cyan(),
        book.author.clone()
    ]);
    table.add_row(prettytable::row!["ISBN".bold().cyan(), book.isbn.clone()]);
    table.add_row(prettytable::row![
        "Stock".bold().cyan(),
        format_stock(book.stock)
    ]);

    table.printstd();
}

/// Print the aggregate counters line for the full catalog.
pub fn display_stats(stats: &BookStats) {
    println!("\n{}", format_stats_line(stats));
}

fn format_stock(stock: u32) -> String {
    if stock == 0 {
        stock.to_string().red().to_string()
    } else {
        stock.to_string().green().to_string()
    }
}

/// Counters line: total / con stock / sin stock.
fn format_stats_line(stats: &BookStats) -> String {
    format!(
        "{}: {}  {}: {}  {}: {}",
        "Total".bold().cyan(),
        stats.total,
        "Con stock".bold().green(),
        stats.with_stock,
        "Sin stock".bold().red(),
        stats.without_stock
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stats_line_counts() {
        let stats = BookStats {
            total: 7,
            with_stock: 5,
            without_stock: 2,
        };

        let line = format_stats_line(&stats);

        assert!(line.contains("Total"));
        assert!(line.contains('7'));
        assert!(line.contains("Con stock"));
        assert!(line.contains('5'));
        assert!(line.contains("Sin stock"));
        assert!(line.contains('2'));
    }

    #[test]
    fn test_format_stock_keeps_value() {
        assert!(format_stock(0).contains('0'));
        assert!(format_stock(12).contains("12"));
    }
}
