use crate::{
    error::AppError,
    service::{cart::CartService, checkout::CheckoutService},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod checkout;
