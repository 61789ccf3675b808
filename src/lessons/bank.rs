//! Lesson `bank`: encapsulation with [`BankAccount`].
//!
//! The balance cannot be touched directly; every change goes through
//! `deposit` or `withdraw`, and the rejected operations below show the
//! validation doing its job.

use crate::console::Console;
use crate::model::{AccountError, BankAccount, Money};

use super::{Lesson, LessonError};

/// Opens two accounts and runs valid and invalid transactions on them.
pub struct BankLesson;

impl BankLesson {
    /// Prints either the success line with the new balance or the reason
    /// the operation was rejected. Rejections are part of the lesson, not
    /// failures of it.
    fn report(
        &self,
        console: &mut dyn Console,
        verb: &str,
        outcome: Result<Money, AccountError>,
    ) -> Result<(), LessonError> {
        match outcome {
            Ok(balance) => {
                console.write_line(&format!("{verb} successful. New balance: {balance}"))?;
            }
            Err(error) => {
                console.write_line(&format!("{verb} rejected: {error}"))?;
            }
        }
        Ok(())
    }
}

impl Lesson for BankLesson {
    fn name(&self) -> &'static str {
        "bank"
    }

    fn title(&self) -> &'static str {
        "Encapsulation with BankAccount"
    }

    fn run(&self, console: &mut dyn Console) -> Result<(), LessonError> {
        console.write_line("= Encapsulation Demo =")?;

        let mut account1 =
            match BankAccount::open("Acc12345", "Alex Chow", Money::from_dollars(500)) {
                Ok(account) => account,
                Err(error) => {
                    console.write_line(&format!("Could not open account: {error}"))?;
                    return Ok(());
                }
            };
        account1.set_branch_name("Main Branch");
        console.write_line(&account1.to_string())?;

        self.report(console, "Deposit", account1.deposit(Money::from_dollars(250)))?;
        self.report(console, "Withdrawal", account1.withdraw(Money::from_dollars(100)))?;
        // Exceeds the balance.
        self.report(console, "Withdrawal", account1.withdraw(Money::from_dollars(1000)))?;
        // Negative amount.
        self.report(console, "Deposit", account1.deposit(Money::from_dollars(-50)))?;

        console.write_line("Final Account Summary:")?;
        console.write_line(&account1.to_string())?;

        let mut account2 =
            match BankAccount::open("Acc56789", "Martin Smith", Money::from_dollars(1000)) {
                Ok(account) => account,
                Err(error) => {
                    console.write_line(&format!("Could not open account: {error}"))?;
                    return Ok(());
                }
            };
        account2.set_branch_name("Riverside Branch");
        self.report(console, "Withdrawal", account2.withdraw(Money::from_dollars(200)))?;
        self.report(console, "Deposit", account2.deposit(Money::from_dollars(300)))?;

        console.write_line("Second Account Summary:")?;
        console.write_line(&account2.to_string())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::mock::MockConsole;

    #[test]
    fn rejected_operations_are_reported_inline() {
        let mut console = MockConsole::new();
        BankLesson.run(&mut console).expect("lesson should finish");
        console.assert_printed(
            "Withdrawal rejected: insufficient funds: requested $1000.00, available $650.00",
        );
        console.assert_printed(
            "Deposit rejected: amount must be greater than zero, got -$50.00",
        );
    }

    #[test]
    fn final_summary_reflects_only_the_valid_transactions() {
        let mut console = MockConsole::new();
        BankLesson.run(&mut console).expect("lesson should finish");
        let final_summary = console
            .transcript()
            .split("Final Account Summary:\n")
            .nth(1)
            .expect("final summary should exist");
        // 500 + 250 - 100, with the two rejected operations ignored.
        assert!(final_summary.contains("Balance: $650.00"));
    }

    #[test]
    fn second_account_runs_its_own_transactions() {
        let mut console = MockConsole::new();
        BankLesson.run(&mut console).expect("lesson should finish");
        let second = console
            .transcript()
            .split("Second Account Summary:\n")
            .nth(1)
            .expect("second summary should exist");
        assert!(second.contains("Account Number: Acc56789"));
        assert!(second.contains("Balance: $1100.00"));
    }
}
