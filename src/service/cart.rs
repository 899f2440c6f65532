use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::{cart::CartRepository, item::ItemRepository},
    error::AppError,
    model::cart::CartDto,
};

/// Largest quantity accepted for a single cart line. Keeps aggregate sums
/// far away from `i32` range even across many lines.
pub const MAX_LINE_QUANTITY: i32 = 1_000_000;

pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the customer's cart with its lines.
    ///
    /// # Returns
    /// - `Ok(CartDto)`: Cart aggregate plus lines
    /// - `Err(AppError::NotFound)`: The customer has no cart yet
    pub async fn get_cart(&self, customer_id: Uuid) -> Result<CartDto, AppError> {
        let repo = CartRepository::new(self.db);

        let cart = repo
            .get(customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cart not found".to_string()))?;
        let lines = repo.get_lines(cart.id).await?;

        Ok(CartDto::from_entity(cart, lines))
    }

    /// Adds an item to the cart or overwrites an existing line's quantity.
    ///
    /// Resolves the item's vendor from the catalog, lazily creates the cart on
    /// first use, and resets it if it was bound to a different vendor. The
    /// single zero-quantity policy applies here: quantity 0 deletes the line,
    /// negative quantities are rejected before any persistence. A removal
    /// targets the cart exactly as it is; it never creates a cart and never
    /// triggers the vendor-switch reset. The aggregate recalculation runs
    /// before this returns; no line mutation is complete without it.
    ///
    /// # Arguments
    /// - `customer_id`: Owning customer (cart id)
    /// - `item_id`: Catalog item to add
    /// - `quantity`: New line quantity (overwrite, not additive)
    ///
    /// # Returns
    /// - `Ok(CartDto)`: The updated cart with lines
    /// - `Err(AppError::BadRequest)`: Negative or oversized quantity
    /// - `Err(AppError::NotFound)`: Item does not exist, or a removal was
    ///   requested for a customer with no cart
    pub async fn upsert_line(
        &self,
        customer_id: Uuid,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<CartDto, AppError> {
        if quantity < 0 {
            return Err(AppError::BadRequest(
                "Quantity must be a positive integer".to_string(),
            ));
        }
        if quantity > MAX_LINE_QUANTITY {
            return Err(AppError::BadRequest(format!(
                "Quantity cannot exceed {}",
                MAX_LINE_QUANTITY
            )));
        }

        let items = ItemRepository::new(self.db);
        let item = items
            .get_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item does not exist".to_string()))?;

        let carts = CartRepository::new(self.db);

        if quantity == 0 {
            let cart = carts
                .get(customer_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Cart not found".to_string()))?;

            carts.remove_line(cart.id, item_id).await?;
            carts.recalculate(cart.id).await?;

            return self.get_cart(customer_id).await;
        }

        let cart = carts.get_or_create(customer_id, item.vendor_id).await?;

        carts.upsert_line(cart.id, item_id, quantity).await?;
        carts.recalculate(cart.id).await?;

        self.get_cart(customer_id).await
    }

    /// Empties the cart: clears all lines, zeroes the totals, and unbinds the
    /// vendor. The cart row itself is kept.
    ///
    /// # Returns
    /// - `Ok(())`: Cart emptied
    /// - `Err(AppError::NotFound)`: The customer has no cart
    pub async fn empty_cart(&self, customer_id: Uuid) -> Result<(), AppError> {
        let repo = CartRepository::new(self.db);

        let cart = repo
            .get(customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cart not found".to_string()))?;

        repo.reset(cart.id, None).await?;

        Ok(())
    }
}
