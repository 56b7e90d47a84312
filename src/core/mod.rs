//! Core business logic - framework-agnostic payout, receipt, session, and
//! mentor operations.
//!
//! Everything here returns structured data and crate [`errors::Result`]
//! values; the HTTP layer in `api` is responsible for presentation.
//!
//! [`errors::Result`]: crate::errors::Result

/// Mentor roster lookups and creation
pub mod mentor;
/// Pure payout breakdown calculator and currency formatting
pub mod payout;
/// Receipt preview, generation, and store queries
pub mod receipt;
/// Session creation and payout-eligibility queries
pub mod session;
