//! Flash loan module
//!
//! Borrow
//! - checks using the instructions sysvar that a Repay ix ends the same tx
//! - transfers the loaned tokens from the protocol's ATA to the borrower's ATA
//!
//! Repay
//! - reads the amount loaned from the preceding Borrow ix
//! - transfers the loaned tokens + fees back to the protocol's ATA
//!
//! If Repay fails, the whole tx including Borrow is reverted.

mod borrow;
mod loan_accounts;
mod repay;

pub use loan_accounts::*;
