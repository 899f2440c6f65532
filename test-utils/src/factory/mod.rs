//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with
//! sensible defaults, reducing boilerplate in tests. Factories automatically
//! handle dependencies and foreign key relationships.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let vendor = factory::vendor::create_vendor(&db).await?;
//!
//!     // Create a customer, a vendor, and two priced items in one call
//!     let (user, vendor, items) =
//!         factory::helpers::create_catalog(&db, &["10.00", "5.00"]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let item = factory::item::ItemFactory::new(&db, vendor.id)
//!     .name("Margherita")
//!     .price(dec!(12.50))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create customer entities
//! - `vendor` - Create vendor entities
//! - `item` - Create catalog item entities
//! - `cart` - Create cart and cart line entities
//! - `order` - Create order entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod cart;
pub mod helpers;
pub mod item;
pub mod order;
pub mod user;
pub mod vendor;

// Re-export commonly used factory functions for concise usage
pub use cart::create_cart;
pub use item::{create_item, create_item_with_price};
pub use order::create_order;
pub use user::create_user;
pub use vendor::create_vendor;
