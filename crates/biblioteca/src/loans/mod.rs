use colored::Colorize;

use biblioteca_core::loan::{format_date, format_return_date, Loan, LoanStats, LoanStatus};

use crate::prelude::{println, *};

pub mod books;
pub mod create;
pub mod list;
pub mod return_loan;

/// Loans module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "loans")]
#[command(about = "Loan operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List loans with their status and the aggregate counters
    #[clap(name = "list")]
    List(list::ListOptions),

    /// List books with their availability for a new loan
    #[clap(name = "books")]
    Books(books::EligibleOptions),

    /// Register a loan for a book with available stock
    #[clap(name = "create")]
    Create(create::CreateOptions),

    /// Mark a loan as returned, after confirmation
    #[clap(name = "return")]
    Return(return_loan::ReturnOptions),
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
        Commands::Books(options) => books::handler(options, global).await,
        Commands::Create(options) => create::handler(options, global).await,
        Commands::Return(options) => return_loan::handler(options, global).await,
    }
}

/// Render a loan list as the standard table.
pub fn display_loans(loans: &[&Loan]) {
    if loans.is_empty() {
        println!("{}", "No hay préstamos registrados".yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "ID".bold().cyan(),
        "Libro".bold().cyan(),
        "Estudiante".bold().cyan(),
        "Préstamo".bold().cyan(),
        "Devolución".bold().cyan(),
        "Estado".bold().cyan()
    ]);

    for loan in loans {
        table.add_row(prettytable::row![
            loan.id,
            loan.book_title,
            loan.student_name,
            format_date(loan.loan_date),
            format_return_date(loan.return_date),
            status_badge(loan.status())
        ]);
    }

    table.printstd();
}

/// Render a single loan as a detail table.
pub fn display_loan(loan: &Loan) {
    std::println!(
        "\n{} - {}\n",
        format!("#{}", loan.id).bold().cyan(),
        loan.book_title.bright_white()
    );

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Estudiante".bold().cyan(),
        loan.student_name.clone()
    ]);
    table.add_row(prettytable::row![
        "Préstamo".bold().cyan(),
        format_date(loan.loan_date)
    ]);
    table.add_row(prettytable::row![
        "Devolución".bold().cyan(),
        format_return_date(loan.return_date)
    ]);
    table.add_row(prettytable::row![
        "Estado".bold().cyan(),
        status_badge(loan.status())
    ]);

    table.printstd();
}

/// Print the aggregate counters line for a loan listing.
pub fn display_stats(stats: &LoanStats) {
    println!("\n{}", format_stats_line(stats));
}

/// Colored badge text for a loan's lifecycle state.
fn status_badge(status: LoanStatus) -> String {
    match status {
        LoanStatus::Active => status.label().green().bold().to_string(),
        LoanStatus::Returned => status.label().bright_black().to_string(),
    }
}

/// Counters line: total / devueltos / activos.
fn format_stats_line(stats: &LoanStats) -> String {
    format!(
        "{}: {}  {}: {}  {}: {}",
        "Total".bold().cyan(),
        stats.total,
        "Devueltos".bold().bright_black(),
        stats.returned,
        "Activos".bold().green(),
        stats.active
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badge_texts() {
        assert!(status_badge(LoanStatus::Active).contains("Activo"));
        assert!(status_badge(LoanStatus::Returned).contains("Devuelto"));
    }

    #[test]
    fn test_format_stats_line_counts() {
        let stats = LoanStats {
            total: 9,
            returned: 4,
            active: 5,
        };

        let line = format_stats_line(&stats);

        assert!(line.contains("Total"));
        assert!(line.contains('9'));
        assert!(line.contains("Devueltos"));
        assert!(line.contains('4'));
        assert!(line.contains("Activos"));
        assert!(line.contains('5'));
    }
}
