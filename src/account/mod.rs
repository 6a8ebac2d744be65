// Account operations module
// Balance changes on a single account: deposits, withdrawals, balance reads
// and the two-decimal rendering used everywhere an amount is shown.

mod transactions;

pub use transactions::{
    deposit,
    describe_account,
    format_amount,
    get_balance,
    process_transaction,
    withdraw,
    TransactionError,
    DISPLAY_PRECISION,
};
