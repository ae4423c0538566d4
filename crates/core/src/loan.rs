use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Loan record as returned by the API.
///
/// `book_title` is a denormalized snapshot taken at creation time, so the
/// row stays renderable even if the book is later edited or deleted.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: u64,
    pub book_id: u64,
    pub book_title: String,
    pub student_name: String,
    pub loan_date: DateTime<Utc>,
    #[serde(default)]
    pub return_date: Option<DateTime<Utc>>,
}

/// Lifecycle state derived from the presence of a return date.
///
/// The transition Active -> Returned happens exactly once, server-side,
/// and never reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoanStatus {
    Active,
    Returned,
}

impl LoanStatus {
    /// Badge text as the original UI displayed it.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Activo",
            Self::Returned => "Devuelto",
        }
    }
}

impl Loan {
    pub fn status(&self) -> LoanStatus {
        if self.return_date.is_some() {
            LoanStatus::Returned
        } else {
            LoanStatus::Active
        }
    }
}

/// Create-loan payload.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoanDraft {
    pub book_id: u64,
    pub student_name: String,
}

/// Client-side guards that block a create-loan submission before any
/// request is sent.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LoanValidationError {
    #[error("Debe seleccionar un libro")]
    NoBookSelected,

    #[error("Debe ingresar el nombre del estudiante")]
    EmptyStudentName,
}

impl LoanDraft {
    pub fn validate(&self) -> Result<(), LoanValidationError> {
        if self.book_id == 0 {
            return Err(LoanValidationError::NoBookSelected);
        }
        if self.student_name.trim().is_empty() {
            return Err(LoanValidationError::EmptyStudentName);
        }
        Ok(())
    }
}

/// Aggregate counters shown alongside every loan listing.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct LoanStats {
    pub total: usize,
    pub returned: usize,
    pub active: usize,
}

impl LoanStats {
    /// Compute the counters from a fetched loan list.
    ///
    /// `returned` counts loans with a return date; `active` is derived as
    /// `total - returned`.
    pub fn compute(loans: &[Loan]) -> Self {
        let returned = loans.iter().filter(|l| l.return_date.is_some()).count();
        Self {
            total: loans.len(),
            returned,
            active: loans.len() - returned,
        }
    }
}

/// Case-insensitive local filter over book title, student name and the
/// loan id rendered as text. Filtering never touches the stats, which keep
/// describing the full fetched set.
pub fn filter_loans<'a>(loans: &'a [Loan], term: &str) -> Vec<&'a Loan> {
    let needle = term.to_lowercase();
    loans
        .iter()
        .filter(|loan| {
            loan.book_title.to_lowercase().contains(&needle)
                || loan.student_name.to_lowercase().contains(&needle)
                || loan.id.to_string().contains(&needle)
        })
        .collect()
}

/// Format a timestamp the way the original es-ES UI did.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Return-date column: a dash while the loan is still active.
pub fn format_return_date(date: Option<DateTime<Utc>>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn loan(id: u64, title: &str, student: &str, returned: bool) -> Loan {
        Loan {
            id,
            book_id: id,
            book_title: title.to_string(),
            student_name: student.to_string(),
            loan_date: date(2024, 3, 1),
            return_date: returned.then(|| date(2024, 3, 15)),
        }
    }

    #[test]
    fn test_status_active_without_return_date() {
        let l = loan(1, "Rayuela", "Ana", false);

        assert_eq!(l.status(), LoanStatus::Active);
        assert_eq!(l.status().label(), "Activo");
    }

    #[test]
    fn test_status_returned_with_return_date() {
        let l = loan(1, "Rayuela", "Ana", true);

        assert_eq!(l.status(), LoanStatus::Returned);
        assert_eq!(l.status().label(), "Devuelto");
    }

    #[test]
    fn test_stats_active_is_total_minus_returned() {
        let loans = vec![
            loan(1, "Rayuela", "Ana", true),
            loan(2, "Ficciones", "Luis", false),
            loan(3, "Pedro Páramo", "Marta", false),
        ];

        let stats = LoanStats::compute(&loans);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.returned, 1);
        assert_eq!(stats.active, stats.total - stats.returned);
    }

    #[test]
    fn test_stats_empty_list() {
        let stats = LoanStats::compute(&[]);

        assert_eq!(stats.total, 0);
        assert_eq!(stats.returned, 0);
        assert_eq!(stats.active, 0);
    }

    #[test]
    fn test_draft_rejects_unselected_book() {
        let draft = LoanDraft {
            book_id: 0,
            student_name: "Ana".to_string(),
        };

        let err = draft.validate().unwrap_err();

        assert_eq!(err, LoanValidationError::NoBookSelected);
        assert_eq!(err.to_string(), "Debe seleccionar un libro");
    }

    #[test]
    fn test_draft_rejects_blank_student() {
        let draft = LoanDraft {
            book_id: 4,
            student_name: "   ".to_string(),
        };

        assert_eq!(
            draft.validate(),
            Err(LoanValidationError::EmptyStudentName)
        );
    }

    #[test]
    fn test_draft_valid() {
        let draft = LoanDraft {
            book_id: 4,
            student_name: "Ana Gómez".to_string(),
        };

        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_filter_matches_title_case_insensitive() {
        let loans = vec![
            loan(1, "Rayuela", "Ana", false),
            loan(2, "Ficciones", "Luis", false),
        ];

        let hits = filter_loans(&loans, "rayu");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn test_filter_matches_student_and_id() {
        let loans = vec![
            loan(31, "Rayuela", "Ana", false),
            loan(2, "Ficciones", "Luis", false),
        ];

        assert_eq!(filter_loans(&loans, "LUIS").len(), 1);
        assert_eq!(filter_loans(&loans, "31").len(), 1);
        assert!(filter_loans(&loans, "zzz").is_empty());
    }

    #[test]
    fn test_format_dates() {
        assert_eq!(format_date(date(2024, 3, 5)), "05/03/2024");
        assert_eq!(format_return_date(Some(date(2024, 12, 31))), "31/12/2024");
        assert_eq!(format_return_date(None), "-");
    }

    #[test]
    fn test_loan_deserializes_from_api_shape() {
        let json = r#"{
            "id": 9,
            "bookId": 3,
            "bookTitle": "Ficciones",
            "studentName": "Luis Pérez",
            "loanDate": "2024-03-01T12:00:00Z",
            "returnDate": null
        }"#;

        let parsed: Loan = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.id, 9);
        assert_eq!(parsed.book_id, 3);
        assert_eq!(parsed.book_title, "Ficciones");
        assert!(parsed.return_date.is_none());
        assert_eq!(parsed.status(), LoanStatus::Active);
    }

    #[test]
    fn test_loan_deserializes_without_return_field() {
        let json = r#"{
            "id": 9,
            "bookId": 3,
            "bookTitle": "Ficciones",
            "studentName": "Luis Pérez",
            "loanDate": "2024-03-01T12:00:00Z"
        }"#;

        let parsed: Loan = serde_json::from_str(json).unwrap();

        assert!(parsed.return_date.is_none());
    }
}
