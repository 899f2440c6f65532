//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for
//! each domain in the application. Repositories are generic over SeaORM's
//! `ConnectionTrait` so the same methods run against the shared connection pool
//! or inside an open transaction (the checkout orchestrator relies on this).

pub mod cart;
pub mod item;
pub mod order;
pub mod vendor;
