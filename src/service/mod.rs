//! Business logic orchestration between controllers and the data layer.

pub mod cart;
pub mod checkout;
pub mod order;

#[cfg(test)]
mod test;
