//! The `BankAccount` type: encapsulation with real rules.
//!
//! The balance is private and only moves through [`BankAccount::deposit`]
//! and [`BankAccount::withdraw`], so the invariant "the balance never goes
//! negative" is enforced in one place. The account number is fixed at
//! [`BankAccount::open`] and has no setter.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::money::Money;

/// Errors that can occur during account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    /// The amount of a deposit or withdrawal must be strictly positive.
    #[error("amount must be greater than zero, got {0}")]
    NonPositiveAmount(Money),

    /// The withdrawal exceeds the current balance.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },
}

/// A bank account with a validated, never-negative balance.
///
/// # Example
/// ```
/// use oop_recipe::model::{BankAccount, Money};
///
/// let mut account = BankAccount::open("Acc12345", "Alex Chow", Money::from_dollars(500))?;
/// account.deposit(Money::from_dollars(250))?;
/// account.withdraw(Money::from_dollars(100))?;
/// assert_eq!(account.balance(), Money::from_dollars(650));
///
/// // Over-withdrawing fails and leaves the balance unchanged.
/// assert!(account.withdraw(Money::from_dollars(1000)).is_err());
/// assert_eq!(account.balance(), Money::from_dollars(650));
/// # Ok::<(), oop_recipe::model::AccountError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    account_number: String,
    holder_name: String,
    branch_name: String,
    balance: Money,
}

impl BankAccount {
    /// Opens an account with an initial deposit.
    ///
    /// The initial deposit goes through [`BankAccount::deposit`], so it is
    /// validated like any other transaction.
    ///
    /// # Errors
    /// Returns [`AccountError::NonPositiveAmount`] when `initial_deposit`
    /// is zero or negative.
    pub fn open(
        account_number: impl Into<String>,
        holder_name: impl Into<String>,
        initial_deposit: Money,
    ) -> Result<Self, AccountError> {
        let mut account = Self {
            account_number: account_number.into(),
            holder_name: holder_name.into(),
            branch_name: String::new(),
            balance: Money::ZERO,
        };
        account.deposit(initial_deposit)?;
        Ok(account)
    }

    /// The account number, fixed when the account was opened.
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn set_holder_name(&mut self, holder_name: impl Into<String>) {
        self.holder_name = holder_name.into();
    }

    pub fn branch_name(&self) -> &str {
        &self.branch_name
    }

    pub fn set_branch_name(&mut self, branch_name: impl Into<String>) {
        self.branch_name = branch_name.into();
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Adds a positive amount to the balance.
    ///
    /// # Errors
    /// Returns [`AccountError::NonPositiveAmount`] for zero or negative
    /// amounts; the balance is unchanged on error.
    pub fn deposit(&mut self, amount: Money) -> Result<Money, AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::NonPositiveAmount(amount));
        }
        self.balance += amount;
        Ok(self.balance)
    }

    /// Removes a positive amount from the balance.
    ///
    /// # Errors
    /// Returns [`AccountError::NonPositiveAmount`] for zero or negative
    /// amounts, and [`AccountError::InsufficientFunds`] when the amount
    /// exceeds the balance. The balance is unchanged on error.
    pub fn withdraw(&mut self, amount: Money) -> Result<Money, AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::NonPositiveAmount(amount));
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}

impl fmt::Display for BankAccount {
    /// The account summary, one field per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account Number: {}\nAccount Holder: {}\nBranch Name: {}\nBalance: {}",
            self.account_number, self.holder_name, self.branch_name, self.balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_test_account() -> BankAccount {
        BankAccount::open("Acc12345", "Alex Chow", Money::from_dollars(500))
            .expect("500 is a valid initial deposit")
    }

    #[test]
    fn open_rejects_non_positive_initial_deposit() {
        let result = BankAccount::open("Acc00000", "Nobody", Money::ZERO);
        assert_eq!(
            result,
            Err(AccountError::NonPositiveAmount(Money::ZERO))
        );
    }

    #[test]
    fn deposit_rejects_non_positive_amounts() {
        let mut account = open_test_account();
        let result = account.deposit(Money::from_dollars(-50));
        assert_eq!(
            result,
            Err(AccountError::NonPositiveAmount(Money::from_dollars(-50)))
        );
        assert_eq!(account.balance(), Money::from_dollars(500));
    }

    #[test]
    fn withdraw_leaves_balance_unchanged_when_amount_exceeds_it() {
        let mut account = open_test_account();
        let result = account.withdraw(Money::from_dollars(1000));
        assert_eq!(
            result,
            Err(AccountError::InsufficientFunds {
                requested: Money::from_dollars(1000),
                available: Money::from_dollars(500),
            })
        );
        assert_eq!(account.balance(), Money::from_dollars(500));
    }

    #[test]
    fn withdraw_can_empty_the_account_exactly() {
        let mut account = open_test_account();
        let balance = account
            .withdraw(Money::from_dollars(500))
            .expect("withdrawing the full balance is allowed");
        assert_eq!(balance, Money::ZERO);
    }

    #[test]
    fn successful_operations_return_the_new_balance() {
        let mut account = open_test_account();
        assert_eq!(
            account.deposit(Money::from_dollars(250)).unwrap(),
            Money::from_dollars(750)
        );
        assert_eq!(
            account.withdraw(Money::from_dollars(100)).unwrap(),
            Money::from_dollars(650)
        );
    }

    #[test]
    fn summary_shows_every_field() {
        let mut account = open_test_account();
        account.set_branch_name("Main Branch");
        let summary = account.to_string();
        assert!(summary.contains("Account Number: Acc12345"));
        assert!(summary.contains("Account Holder: Alex Chow"));
        assert!(summary.contains("Branch Name: Main Branch"));
        assert!(summary.contains("Balance: $500.00"));
    }
}
