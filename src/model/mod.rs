//! Pure domain types used by the lessons.
//!
//! Each type keeps its fields private and enforces its invariants at the
//! boundary: a [`Person`] never holds a negative age, and a
//! [`BankAccount`] balance only moves through validated deposits and
//! withdrawals.

pub mod account;
pub mod money;
pub mod person;

pub use account::{AccountError, BankAccount};
pub use money::{Money, MoneyError};
pub use person::{Person, PersonError, PersonUpdate};
