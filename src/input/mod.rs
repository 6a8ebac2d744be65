// Console input
// `validation` holds the pure parse-and-validate rules; `reader` owns the
// interactive retry loops built on top of them.

pub mod reader;
pub mod validation;

pub use reader::Console;
pub use validation::{AmountRule, InputError};
