//! Domain models, operation parameters, and API DTOs.
//!
//! Entity models stay inside the repository layer; controllers serialize the
//! DTO types defined here. Parameter structs carry validated operation input
//! from the service layer into repositories.

pub mod api;
pub mod cart;
pub mod item;
pub mod order;
pub mod vendor;
