use serde::{Deserialize, Serialize};

/// Book record as returned by the API.
///
/// `id` is server-assigned and immutable. `stock` is the only mutable
/// business quantity and only changes server-side, as a side effect of
/// creating or returning a loan.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub stock: u32,
}

/// Create/update payload for a book. Both operations take the same shape.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub stock: u32,
}

/// Presence validation failures for a [`BookDraft`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookValidationError {
    #[error("El título es obligatorio")]
    EmptyTitle,

    #[error("El autor es obligatorio")]
    EmptyAuthor,

    #[error("El ISBN es obligatorio")]
    EmptyIsbn,
}

impl BookDraft {
    /// Presence checks only; anything deeper is the server's call.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.title.trim().is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if self.author.trim().is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        if self.isbn.trim().is_empty() {
            return Err(BookValidationError::EmptyIsbn);
        }
        Ok(())
    }
}

/// Aggregate counters shown alongside the full catalog listing.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct BookStats {
    pub total: usize,
    pub with_stock: usize,
    pub without_stock: usize,
}

impl BookStats {
    /// Compute the counters from a fetched book list.
    ///
    /// Invariant: `with_stock + without_stock == total`.
    pub fn compute(books: &[Book]) -> Self {
        let with_stock = books.iter().filter(|b| b.stock > 0).count();
        Self {
            total: books.len(),
            with_stock,
            without_stock: books.len() - with_stock,
        }
    }
}

/// Stock classification used when offering a book for a new loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Zero units; the book is not eligible for a loan.
    OutOfStock,
    /// 1 to [`Availability::LOW_STOCK_THRESHOLD`] units left; eligible but
    /// worth a warning.
    Low(u32),
    Available(u32),
}

impl Availability {
    /// Remaining units at or below which the loan form shows a warning.
    pub const LOW_STOCK_THRESHOLD: u32 = 3;

    pub fn from_stock(stock: u32) -> Self {
        match stock {
            0 => Self::OutOfStock,
            n if n <= Self::LOW_STOCK_THRESHOLD => Self::Low(n),
            n => Self::Available(n),
        }
    }

    pub fn is_eligible(self) -> bool {
        !matches!(self, Self::OutOfStock)
    }
}
