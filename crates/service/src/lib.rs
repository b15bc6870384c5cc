//! Service layer: the record-store operations on top of `models`.
//! - One module per collection with create/list/get/update/delete.
//! - `fixtures` seeds deterministic sample rows.
//! - Not-found is never an error: `get_*` yields `None`, update and delete
//!   succeed whether or not a row matched.

pub mod errors;
pub mod users;
pub mod products;
pub mod orders;
pub mod fixtures;
#[cfg(test)]
pub mod test_support;
