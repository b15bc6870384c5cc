//! SeaORM entities for the shop tables plus the connection helper.
//!
//! Each entity module pairs the stored `Model` with a `New*` payload: every
//! column except `id`, used for both creation and full replacement.

pub mod db;
pub mod user;
pub mod product;
pub mod order;
