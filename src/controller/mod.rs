//! HTTP request handlers.
//!
//! Controllers validate request input, resolve the customer identity, call
//! into the service or repository layer, and serialize DTO responses. No
//! business rules live here.

pub mod cart;
pub mod item;
pub mod order;
pub mod vendor;
