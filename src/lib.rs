//! Simple banking application: in-memory customers and accounts managed
//! through a numbered console menu.

pub mod account;
pub mod cli;
pub mod config;
pub mod input;
pub mod store;
