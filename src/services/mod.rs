//! Service layer for Virtuallet
//!
//! The service layer provides business logic on top of the storage layer:
//! monthly income catch-up and validation of manual bookings.

pub mod income;
pub mod transaction;

pub use income::IncomeService;
pub use transaction::TransactionService;
