//! Ledger calculations
//!
//! Balance, emergency reserve and available funds are recomputed from the
//! transaction list on every call. Nothing is cached.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{AuthorizationLevel, Authorizer, Books, Money, Transaction};

/// Share of cumulative income held back as the emergency reserve
pub const EMERGENCY_RESERVE_PERCENT: i64 = 15;

/// Snapshot of the committee's funds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FundsSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    pub emergency_reserve: Money,
    pub available_funds: Money,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Exact category name
    pub category: Option<String>,
    /// Posting date range start (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Posting date range end (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Approver
    pub authorized_by: Option<Authorizer>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Only transactions dated on or after `start`
    pub fn from(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Only transactions dated on or before `end`
    pub fn to(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn authorized_by(mut self, authorizer: Authorizer) -> Self {
        self.authorized_by = Some(authorizer);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.category.as_deref().map_or(true, |c| txn.category == c)
            && self.start_date.map_or(true, |d| txn.date >= d)
            && self.end_date.map_or(true, |d| txn.date <= d)
            && self.authorized_by.map_or(true, |a| txn.authorized_by == a)
    }
}

/// Read-only calculations over the books
pub struct LedgerService<'a> {
    books: &'a Books,
}

impl<'a> LedgerService<'a> {
    pub fn new(books: &'a Books) -> Self {
        Self { books }
    }

    /// Sum of all transaction income
    pub fn total_income(&self) -> Money {
        self.books.transactions().iter().map(|t| t.income).sum()
    }

    /// Sum of all transaction expenses
    pub fn total_expenses(&self) -> Money {
        self.books.transactions().iter().map(|t| t.expense).sum()
    }

    /// Income minus expenses over every transaction
    pub fn balance(&self) -> Money {
        self.total_income() - self.total_expenses()
    }

    /// 15% of cumulative income, independent of spending
    pub fn emergency_reserve(&self) -> Money {
        self.total_income().percentage(EMERGENCY_RESERVE_PERCENT)
    }

    /// Balance less the emergency reserve
    pub fn available_funds(&self) -> Money {
        self.balance() - self.emergency_reserve()
    }

    pub fn summary(&self) -> FundsSummary {
        let total_income = self.total_income();
        let total_expenses = self.total_expenses();
        let balance = total_income - total_expenses;
        let emergency_reserve = total_income.percentage(EMERGENCY_RESERVE_PERCENT);
        FundsSummary {
            total_income,
            total_expenses,
            balance,
            emergency_reserve,
            available_funds: balance - emergency_reserve,
        }
    }

    /// Tier of the authorization matrix for an amount in a category
    pub fn authorization_level(&self, amount: Money, category: &str) -> AuthorizationLevel {
        AuthorizationLevel::classify(amount, self.books.budget().is_budgeted(category))
    }

    /// Authorizers that may approve `amount` in `category`
    ///
    /// A category in neither budget section needs a committee vote whatever
    /// the amount.
    pub fn required_authorizers(&self, amount: Money, category: &str) -> &'static [Authorizer] {
        self.authorization_level(amount, category).required()
    }

    /// Transactions matching a filter, newest first
    ///
    /// The limit keeps the most recent matches.
    pub fn transactions(&self, filter: &TransactionFilter) -> Vec<&'a Transaction> {
        let mut matching = newest_first(
            self.books
                .transactions()
                .iter()
                .filter(|t| filter.matches(t)),
        );
        if let Some(limit) = filter.limit {
            matching.truncate(limit);
        }
        matching
    }

    /// Most recently recorded transactions first
    ///
    /// Transactions without a timestamp sort last.
    pub fn recent_transactions(&self, limit: usize) -> Vec<&'a Transaction> {
        let mut transactions = newest_first(self.books.transactions().iter());
        transactions.truncate(limit);
        transactions
    }

    /// Transactions recorded in a calendar month
    ///
    /// Transactions without a usable timestamp are skipped.
    pub fn transactions_recorded_in(&self, month: u32, year: i32) -> Vec<&'a Transaction> {
        self.books
            .transactions()
            .iter()
            .filter(|t| {
                t.recorded_at
                    .map_or(false, |ts| ts.month() == month && ts.year() == year)
            })
            .collect()
    }
}

/// Order by recorded-at timestamp, latest first; later postings win ties
fn newest_first<'a, I>(transactions: I) -> Vec<&'a Transaction>
where
    I: DoubleEndedIterator<Item = &'a Transaction>,
{
    let mut ordered: Vec<_> = transactions.rev().collect();
    ordered.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionInput;
    use crate::services::TransactionService;
    use chrono::NaiveDateTime;

    fn at(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn books_with(entries: &[(i64, i64)]) -> Books {
        let mut books = Books::new();
        let mut service = TransactionService::new(&mut books);
        for (i, (income, expense)) in entries.iter().enumerate() {
            let mut input = TransactionInput::income(
                date(),
                format!("entry {}", i),
                "Fundraising Events",
                Money::from_cents(*income),
            )
            .authorized_by(Authorizer::CommitteeVote);
            input.expense = Money::from_cents(*expense);
            service.post_at(input, at("2024-03-01T12:00:00")).unwrap();
        }
        books
    }

    #[test]
    fn test_empty_books() {
        let books = Books::new();
        let ledger = LedgerService::new(&books);
        assert!(ledger.balance().is_zero());
        assert!(ledger.emergency_reserve().is_zero());
        assert!(ledger.available_funds().is_zero());
    }

    #[test]
    fn test_balance_is_income_minus_expenses() {
        let entries = [(100_00, 0), (0, 30_25), (55_50, 0), (0, 200_00), (12_34, 1_00)];
        let books = books_with(&entries);
        let ledger = LedgerService::new(&books);

        let income: i64 = entries.iter().map(|e| e.0).sum();
        let expenses: i64 = entries.iter().map(|e| e.1).sum();
        assert_eq!(ledger.balance(), Money::from_cents(income - expenses));
        assert!(ledger.balance().is_negative());
    }

    #[test]
    fn test_reserve_is_fifteen_percent_of_income() {
        let books = books_with(&[(1000_00, 0), (0, 900_00)]);
        let ledger = LedgerService::new(&books);
        assert_eq!(ledger.emergency_reserve(), Money::from_units(150));
        assert_eq!(ledger.balance(), Money::from_units(100));
        assert_eq!(ledger.available_funds(), Money::from_units(-50));

        let summary = ledger.summary();
        assert_eq!(summary.emergency_reserve, ledger.emergency_reserve());
        assert_eq!(summary.available_funds, ledger.available_funds());
    }

    #[test]
    fn test_required_authorizers() {
        let books = Books::new();
        let ledger = LedgerService::new(&books);

        assert_eq!(
            ledger.required_authorizers(Money::from_units(100), "Yearbook"),
            &[Authorizer::Chair]
        );
        assert_eq!(
            ledger.required_authorizers(Money::from_cents(100_01), "Yearbook"),
            &[Authorizer::Chair, Authorizer::SchoolAdmin]
        );
        assert_eq!(
            ledger.required_authorizers(Money::from_units(5), "Snacks"),
            &[Authorizer::CommitteeVote]
        );
        assert_eq!(
            ledger.required_authorizers(Money::from_units(5000), "Snacks"),
            &[Authorizer::CommitteeVote]
        );
    }

    #[test]
    fn test_recent_transactions_sorted_by_timestamp() {
        let mut books = Books::new();
        let mut service = TransactionService::new(&mut books);
        for (desc, ts) in [
            ("first", "2024-03-01T09:00:00"),
            ("third", "2024-03-03T09:00:00"),
            ("second", "2024-03-02T09:00:00"),
        ] {
            let input = TransactionInput::income(date(), desc, "Sponsorships", Money::from_units(1))
                .authorized_by(Authorizer::Chair);
            service.post_at(input, at(ts)).unwrap();
        }

        let ledger = LedgerService::new(&books);
        let recent: Vec<_> = ledger
            .recent_transactions(2)
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(recent, vec!["third", "second"]);
    }

    #[test]
    fn test_filter_by_category_and_limit() {
        let books = books_with(&[(1_00, 0), (2_00, 0), (3_00, 0)]);
        let ledger = LedgerService::new(&books);

        let filter = TransactionFilter::new().category("Fundraising Events").limit(2);
        assert_eq!(ledger.transactions(&filter).len(), 2);

        let filter = TransactionFilter::new().category("Yearbook");
        assert!(ledger.transactions(&filter).is_empty());

        let filter = TransactionFilter::new().authorized_by(Authorizer::CommitteeVote);
        assert_eq!(ledger.transactions(&filter).len(), 3);
    }

    #[test]
    fn test_limit_keeps_newest_transactions() {
        let mut books = Books::new();
        let mut service = TransactionService::new(&mut books);
        for day in 1..=25 {
            let input = TransactionInput::income(
                NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
                format!("day {}", day),
                "Sponsorships",
                Money::from_units(1),
            )
            .authorized_by(Authorizer::Chair);
            service
                .post_at(input, at(&format!("2024-03-{:02}T10:00:00", day)))
                .unwrap();
        }

        let ledger = LedgerService::new(&books);
        let listed: Vec<_> = ledger
            .transactions(&TransactionFilter::new().limit(20))
            .iter()
            .map(|t| t.description.clone())
            .collect();
        assert_eq!(listed.len(), 20);
        assert_eq!(listed[0], "day 25");
        assert_eq!(listed[19], "day 6");
    }

    #[test]
    fn test_same_timestamp_keeps_latest_posting_first() {
        let books = books_with(&[(1_00, 0), (2_00, 0), (3_00, 0)]);
        let ledger = LedgerService::new(&books);
        let listed = ledger.transactions(&TransactionFilter::new().limit(1));
        assert_eq!(listed[0].description, "entry 2");
    }

    #[test]
    fn test_date_bounds() {
        let mut books = Books::new();
        let mut service = TransactionService::new(&mut books);
        for day in [1, 10, 20] {
            let input = TransactionInput::income(
                NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
                format!("day {}", day),
                "Sponsorships",
                Money::from_units(1),
            )
            .authorized_by(Authorizer::Chair);
            service.post_at(input, at("2024-03-21T10:00:00")).unwrap();
        }

        let ledger = LedgerService::new(&books);
        let march = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
        assert_eq!(ledger.transactions(&TransactionFilter::new().from(march(10))).len(), 2);
        assert_eq!(ledger.transactions(&TransactionFilter::new().to(march(10))).len(), 2);
        assert_eq!(
            ledger
                .transactions(&TransactionFilter::new().from(march(2)).to(march(19)))
                .len(),
            1
        );
    }
}
