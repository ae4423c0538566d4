use serde::{Deserialize, Serialize};

use biblioteca_core::loan::{filter_loans, Loan, LoanStats};

use crate::api::{self, ApiConfig};
use crate::prelude::{println, *};

/// Options for listing loans
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct ListOptions {
    /// Only loans without a return date
    #[arg(long)]
    pub active: bool,

    /// Local filter over book title, student name and loan id
    #[arg(short, long)]
    pub search: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Fetch the loan list, using the active-only endpoint when asked.
pub async fn list_loans_data(config: &ApiConfig, active: bool) -> Result<Vec<Loan>, Error> {
    let client = api::create_client()?;

    let url = if active {
        format!("{}/Loans/active", config.base())
    } else {
        format!("{}/Loans", config.base())
    };

    api::get_json(&client, &url).await
}

pub async fn handler(options: ListOptions, global: crate::Global) -> Result<()> {
    let config = ApiConfig::resolve(&global);

    if global.verbose {
        println!("Cargando préstamos...");
    }

    let loans = match list_loans_data(&config, options.active).await {
        Ok(loans) => loans,
        Err(err) => crate::alerts::abort(&err),
    };

    let search = options
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let rows: Vec<&Loan> = match search {
        Some(term) => filter_loans(&loans, term),
        None => loans.iter().collect(),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    super::display_loans(&rows);

    // Counters always describe the full fetched set, not the filtered rows.
    super::display_stats(&LoanStats::compute(&loans));

    Ok(())
}
