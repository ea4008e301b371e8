//! Transaction posting
//!
//! Posting validates the input, checks the authorization matrix, appends the
//! transaction and credits the budget actuals.

use chrono::{Local, NaiveDateTime};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetSection, Books, Money, Transaction, TransactionId, TransactionInput};
use crate::services::LedgerService;

/// Service for posting transactions
pub struct TransactionService<'a> {
    books: &'a mut Books,
}

impl<'a> TransactionService<'a> {
    pub fn new(books: &'a mut Books) -> Self {
        Self { books }
    }

    /// Post a transaction recorded now
    pub fn post(&mut self, input: TransactionInput) -> LedgerResult<Transaction> {
        self.post_at(input, Local::now().naive_local())
    }

    /// Post a transaction with an explicit recorded-at timestamp
    pub fn post_at(
        &mut self,
        input: TransactionInput,
        recorded_at: NaiveDateTime,
    ) -> LedgerResult<Transaction> {
        let description = input.description.trim();
        let category = input.category.trim();

        if description.is_empty() || category.is_empty() {
            return Err(LedgerError::Validation(
                "Description and category are required".into(),
            ));
        }

        if input.income.is_negative() || input.expense.is_negative() {
            return Err(LedgerError::Validation(
                "Income and expense amounts cannot be negative".into(),
            ));
        }

        let amount = input.income.max(input.expense);
        let required = LedgerService::new(self.books).required_authorizers(amount, category);

        let authorized_by = match input.authorized_by {
            Some(authorizer) if authorizer.satisfies(required) => authorizer,
            other => {
                tracing::warn!(
                    category,
                    %amount,
                    authorizer = ?other,
                    "transaction rejected: insufficient authorization"
                );
                return Err(LedgerError::Authorization {
                    required: required.to_vec(),
                });
            }
        };

        let transaction = Transaction {
            id: TransactionId::new(),
            date: input.date,
            description: description.to_string(),
            category: category.to_string(),
            income: input.income,
            expense: input.expense,
            authorized_by,
            receipt_number: input.receipt_number.trim().to_string(),
            notes: input.notes,
            recorded_at: Some(recorded_at),
        };

        self.credit(BudgetSection::Income, category, transaction.income);
        self.credit(BudgetSection::Expenses, category, transaction.expense);
        self.books.push_transaction(transaction.clone());

        tracing::info!(
            id = %transaction.id,
            category,
            net = %transaction.net(),
            "transaction posted"
        );

        Ok(transaction)
    }

    fn credit(&mut self, section: BudgetSection, category: &str, amount: Money) {
        if !amount.is_positive() {
            return;
        }

        let credited = self.books.budget_mut().record_actual(section, category, amount);
        if credited != category {
            tracing::debug!(
                category,
                %section,
                fallback = %credited,
                "category not in budget section, credited catch-all"
            );
        }
    }
}
