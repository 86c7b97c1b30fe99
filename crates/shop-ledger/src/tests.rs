//! Unit tests for the stock ledger.

use crate::StockLedger;
use shop_core::BrandId;

#[test]
fn starts_empty() {
    let ledger = StockLedger::new(3);
    assert_eq!(ledger.len(), 3);
    for (_, level) in ledger.iter() {
        assert_eq!(level, 0);
    }
}

#[test]
fn set_and_read_level() {
    let mut ledger = StockLedger::new(2);
    ledger.set_level(BrandId(1), 4_000);
    assert_eq!(ledger.level(BrandId(1)), 4_000);
    assert_eq!(ledger.level(BrandId(0)), 0);
}

#[test]
fn debit_floors_at_zero_and_reports_applied() {
    let mut ledger = StockLedger::new(1);
    ledger.set_level(BrandId(0), 10);
    assert_eq!(ledger.debit(BrandId(0), 7), 7);
    assert_eq!(ledger.level(BrandId(0)), 3);
    // Over-debit: only 3 remain, so only 3 apply.
    assert_eq!(ledger.debit(BrandId(0), 100), 3);
    assert_eq!(ledger.level(BrandId(0)), 0);
    assert_eq!(ledger.debit(BrandId(0), 1), 0);
}

#[test]
fn credit_adds_stock() {
    let mut ledger = StockLedger::new(1);
    ledger.set_level(BrandId(0), 2_500);
    ledger.credit(BrandId(0), 500);
    assert_eq!(ledger.level(BrandId(0)), 3_000);
}

#[test]
fn credit_saturates() {
    let mut ledger = StockLedger::new(1);
    ledger.set_level(BrandId(0), u32::MAX - 1);
    ledger.credit(BrandId(0), 10);
    assert_eq!(ledger.level(BrandId(0)), u32::MAX);
}

#[test]
fn out_of_range_brand_is_inert() {
    let mut ledger = StockLedger::new(1);
    assert_eq!(ledger.level(BrandId(5)), 0);
    assert_eq!(ledger.debit(BrandId(5), 10), 0);
    ledger.credit(BrandId(5), 10); // no panic, no effect
    assert!(!ledger.in_stock(BrandId(5)));
}

#[test]
fn in_stock_reflects_level() {
    let mut ledger = StockLedger::new(1);
    assert!(!ledger.in_stock(BrandId(0)));
    ledger.set_level(BrandId(0), 1);
    assert!(ledger.in_stock(BrandId(0)));
}
