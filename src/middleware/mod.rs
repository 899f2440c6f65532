//! Request/response processing shared across controllers.

pub mod identity;
