use super::*;
use crate::store::models::TransactionType;
use rstest::{fixture, rstest};
use rust_decimal_macros::dec;

#[fixture]
fn store() -> RecordStore {
    RecordStore::new()
}

#[fixture]
fn populated_store() -> RecordStore {
    let mut store = RecordStore::new();
    for (name, deposit) in [("Alice", dec!(100)), ("Bob", dec!(0)), ("Carol", dec!(12.5))] {
        let customer_id = store.create_customer(name).id;
        store.create_account(customer_id, deposit).unwrap();
    }
    store
}

#[rstest]
fn test_customer_ids_are_dense_and_start_at_one(mut store: RecordStore) {
    for expected in 1..=5u32 {
        let customer = store.create_customer(&format!("Customer {}", expected));
        assert_eq!(customer.id, expected);
    }
    assert_eq!(store.customers().len(), 5);
}

#[rstest]
fn test_account_ids_follow_their_own_sequence(mut store: RecordStore) {
    // Two customers without accounts shift the customer sequence only
    store.create_customer("Nobody");
    store.create_customer("Nobody Else");
    let owner = store.create_customer("Alice").id;
    assert_eq!(owner, 3);

    let account = store.create_account(owner, dec!(10)).unwrap();
    assert_eq!(account.id, 1);
    assert_eq!(account.customer_id, 3);
}

#[rstest]
fn test_create_account_keeps_initial_deposit(mut store: RecordStore) {
    let owner = store.create_customer("Alice").id;
    let account = store.create_account(owner, dec!(100)).unwrap();

    assert_eq!(account.balance(), dec!(100));
    assert_eq!(account.transactions().len(), 1);
    assert_eq!(
        account.transactions()[0].transaction_type,
        TransactionType::OpeningDeposit
    );
    assert_eq!(account.transactions()[0].balance_after, dec!(100));
}

#[rstest]
fn test_create_account_allows_zero_deposit(mut store: RecordStore) {
    let owner = store.create_customer("Bob").id;
    let account = store.create_account(owner, Decimal::ZERO).unwrap();
    assert_eq!(account.balance(), Decimal::ZERO);
}

#[rstest]
fn test_create_account_rejects_negative_deposit(mut store: RecordStore) {
    let owner = store.create_customer("Bob").id;
    let result = store.create_account(owner, dec!(-0.01));

    assert_eq!(result.unwrap_err(), StoreError::NegativeInitialDeposit);
    assert!(!store.has_accounts());
}

#[rstest]
fn test_create_account_requires_existing_customer(mut store: RecordStore) {
    let result = store.create_account(7, dec!(1));

    assert_eq!(result.unwrap_err(), StoreError::CustomerNotFound(7));
    assert!(store.accounts().is_empty());
}

#[rstest]
#[case(1, "Alice")]
#[case(2, "Bob")]
#[case(3, "Carol")]
fn test_find_account_by_id(populated_store: RecordStore, #[case] id: u32, #[case] owner: &str) {
    let (account, customer) = populated_store.account_with_owner(id).unwrap();
    assert_eq!(account.id, id);
    assert_eq!(customer.name, owner);
}

#[rstest]
#[case(0)]
#[case(4)]
#[case(u32::MAX)]
fn test_find_missing_account(populated_store: RecordStore, #[case] id: u32) {
    assert!(populated_store.find_account_by_id(id).is_none());
    assert!(populated_store.account_with_owner(id).is_none());
}

#[rstest]
fn test_empty_store_has_no_accounts(store: RecordStore) {
    assert!(!store.has_accounts());
    assert!(store.find_account_by_id(1).is_none());
}
