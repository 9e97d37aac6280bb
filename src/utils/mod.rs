//! Utility functions shared by the parsers.

mod selector;

pub use selector::{first_match, parse_selector_chain, parse_selector_unsafe};
