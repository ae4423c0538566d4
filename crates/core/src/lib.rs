//! Core library for biblioteca
//!
//! This crate implements the **Functional Core** of the biblioteca
//! application: pure domain types and transformation functions with zero
//! I/O. The `biblioteca` binary crate (the Imperative Shell) handles HTTP
//! calls, terminal rendering, and prompts, and delegates every decision
//! that can be expressed as a pure function to this crate.
//!
//! All functions here are deterministic and side-effect free, which keeps
//! their tests down to plain fixture data with no mocking.
//!
//! # Module Organization
//!
//! - [`book`]: book records, the create/update draft, catalog stats, and
//!   stock-availability classification
//! - [`loan`]: loan records and lifecycle, the create-loan draft and its
//!   guards, loan stats, and local list filtering
//! - [`api_error`]: classification of the API's error-response bodies into
//!   the categories the UI distinguishes

pub mod api_error;
pub mod book;
pub mod loan;
