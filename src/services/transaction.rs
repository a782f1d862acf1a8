//! Transaction service
//!
//! Gates manual incomes and expenses before they reach the ledger. Amounts are
//! first rounded half-up to cents. Rules, in order: the amount must be
//! strictly positive and at most [`Money::max_booking`], incomes are always
//! accepted, and an expense is accepted only while
//! `balance + overdraft - amount >= 0`. Balance and overdraft are read fresh
//! on every call.

use tracing::{debug, warn};

use crate::config::settings::load_overdraft;
use crate::error::{LedgerError, LedgerResult, Rejection};
use crate::models::{Money, TransactionKind};
use crate::storage::Storage;

/// Service for manual bookings
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Check a proposed booking and return the signed, cent-rounded amount to store
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Rejected` when a rule refuses the booking, or a
    /// storage error if the balance or overdraft cannot be read.
    pub fn validate(&self, kind: TransactionKind, amount: Money) -> LedgerResult<Money> {
        let amount = amount.rounded();
        if amount.is_zero() || !amount.is_within_booking_limit() {
            return Err(Rejection::ZeroOrInvalidAmount.into());
        }
        if amount.is_negative() {
            return Err(Rejection::NegativeAmount.into());
        }

        if kind == TransactionKind::Expense {
            let balance = self.storage.ledger().balance()?;
            let overdraft = load_overdraft(self.storage)?;
            let headroom = balance
                .checked_add(overdraft)
                .and_then(|limit| limit.checked_sub(amount))
                .ok_or_else(|| LedgerError::Storage("Ledger balance is out of range".to_string()))?;
            if headroom.is_negative() {
                return Err(Rejection::TooExpensive.into());
            }
        }

        Ok(kind.signed(amount))
    }

    /// Validate and store a booking, returning the new balance
    pub fn book(
        &self,
        kind: TransactionKind,
        description: &str,
        amount: Money,
    ) -> LedgerResult<Money> {
        let signed = self.validate(kind, amount).inspect_err(|e| {
            if e.is_validation() {
                warn!(?kind, amount = %amount, reason = %e, "Rejected booking");
            }
        })?;

        let ledger = self.storage.ledger();
        ledger.insert_entry(description, signed, false)?;
        debug!(?kind, amount = %signed, "Booked transaction");

        ledger.balance()
    }

    /// Like [`book`](Self::book), for an amount typed by the user
    ///
    /// Text that does not parse counts as a zero amount.
    pub fn book_input(
        &self,
        kind: TransactionKind,
        description: &str,
        amount: &str,
    ) -> LedgerResult<Money> {
        self.book(kind, description, Money::parse(amount).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::config::settings::ConfigKey;
    use crate::storage::initialize_storage;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_database_file(temp_dir.path().join("test.db"));
        let storage = Storage::open(&paths).unwrap();
        initialize_storage(&storage).unwrap();
        (temp_dir, storage)
    }

    fn money(s: &str) -> Money {
        Money::parse(s).unwrap()
    }

    fn rejection(result: LedgerResult<Money>) -> Option<Rejection> {
        result.err().and_then(|e| e.rejection())
    }

    #[test]
    fn test_overdraft_walkthrough() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let result = service.book(TransactionKind::Expense, "tv", money("250"));
        assert_eq!(rejection(result), Some(Rejection::TooExpensive));
        assert!(storage.ledger().balance().unwrap().is_zero());

        let balance = service
            .book(TransactionKind::Expense, "bike", money("200"))
            .unwrap();
        assert_eq!(balance, money("-200"));

        let balance = service
            .book(TransactionKind::Income, "birthday", money("50"))
            .unwrap();
        assert_eq!(balance, money("-150"));
    }

    #[test]
    fn test_expense_exactly_at_limit_is_accepted() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        service
            .book(TransactionKind::Income, "", money("10.01"))
            .unwrap();

        let balance = service
            .book(TransactionKind::Expense, "", money("210.01"))
            .unwrap();
        assert_eq!(balance, money("-200"));

        let result = service.book(TransactionKind::Expense, "", money("0.01"));
        assert_eq!(rejection(result), Some(Rejection::TooExpensive));
        assert_eq!(storage.ledger().balance().unwrap(), money("-200"));
    }

    #[test]
    fn test_zero_amount_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        for kind in [TransactionKind::Income, TransactionKind::Expense] {
            let result = service.book(kind, "nothing", Money::zero());
            assert_eq!(rejection(result), Some(Rejection::ZeroOrInvalidAmount));
        }
        assert_eq!(storage.ledger().count().unwrap(), 0);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let result = service.book(TransactionKind::Income, "oops", money("-5"));
        assert_eq!(rejection(result), Some(Rejection::NegativeAmount));

        let result = service.book(TransactionKind::Expense, "oops", money("-5"));
        assert_eq!(rejection(result), Some(Rejection::NegativeAmount));

        assert_eq!(storage.ledger().count().unwrap(), 0);
    }

    #[test]
    fn test_unparsable_input_counts_as_zero() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let result = service.book_input(TransactionKind::Income, "", "twelve");
        assert_eq!(rejection(result), Some(Rejection::ZeroOrInvalidAmount));

        let balance = service
            .book_input(TransactionKind::Income, "", " 12.50 ")
            .unwrap();
        assert_eq!(balance, money("12.5"));
    }

    #[test]
    fn test_income_ignores_overdraft() {
        let (_temp_dir, storage) = create_test_storage();
        storage.configuration().set(ConfigKey::Overdraft, "0").unwrap();
        let service = TransactionService::new(&storage);

        let balance = service
            .book(TransactionKind::Income, "lottery", money("1000000"))
            .unwrap();
        assert_eq!(balance, money("1000000"));
    }

    #[test]
    fn test_uses_configured_overdraft() {
        let (_temp_dir, storage) = create_test_storage();
        let config = storage.configuration();
        config.set(ConfigKey::IncomeAmount, "5000").unwrap();
        config.set(ConfigKey::Overdraft, "20").unwrap();
        let service = TransactionService::new(&storage);

        let result = service.book(TransactionKind::Expense, "", money("20.01"));
        assert_eq!(rejection(result), Some(Rejection::TooExpensive));

        assert!(service
            .book(TransactionKind::Expense, "", money("20"))
            .is_ok());
    }

    #[test]
    fn test_validate_returns_signed_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        assert_eq!(
            service.validate(TransactionKind::Expense, money("12")).unwrap(),
            money("-12")
        );
        assert_eq!(
            service.validate(TransactionKind::Income, money("12")).unwrap(),
            money("12")
        );
        assert_eq!(storage.ledger().count().unwrap(), 0);
    }

    #[test]
    fn test_broken_overdraft_is_fatal_not_rejection() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .configuration()
            .set(ConfigKey::Overdraft, "plenty")
            .unwrap();
        let service = TransactionService::new(&storage);

        let err = service
            .book(TransactionKind::Expense, "", money("1"))
            .unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn test_amount_is_rounded_to_cents_before_booking() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service
            .book(TransactionKind::Income, "", money("1234567890123.4567"))
            .unwrap();
        let entry = storage.ledger().recent_transactions(1).unwrap().remove(0);
        assert_eq!(entry.amount, money("1234567890123.46"));

        let result = service.book(TransactionKind::Income, "", money("0.004"));
        assert_eq!(rejection(result), Some(Rejection::ZeroOrInvalidAmount));
    }

    #[test]
    fn test_largest_booking_is_accepted() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let balance = service
            .book_input(TransactionKind::Income, "jackpot", "9999999999999.99")
            .unwrap();
        assert_eq!(balance, Money::max_booking());
    }

    #[test]
    fn test_amount_beyond_limit_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        for input in [
            "10000000000000",
            "50000000000000000000000000000",
            "79228162514264337593543950335",
        ] {
            let result = service.book_input(TransactionKind::Income, "", input);
            assert_eq!(rejection(result), Some(Rejection::ZeroOrInvalidAmount));
        }
        assert_eq!(storage.ledger().count().unwrap(), 0);
        assert!(storage.ledger().balance().unwrap().is_zero());
    }

    #[test]
    fn test_repeated_maximal_incomes_keep_ledger_readable() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        for _ in 0..20 {
            service
                .book(TransactionKind::Income, "", Money::max_booking())
                .unwrap();
        }

        let balance = storage.ledger().balance().unwrap();
        assert_eq!(balance, money("199999999999999.80"));
        assert!(service
            .book(TransactionKind::Expense, "", Money::max_booking())
            .is_ok());
    }
}
