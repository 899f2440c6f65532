use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    data::{
        cart::{CartRepository, PricedLine},
        order::{CreateOrderParams, OrderRepository},
    },
    error::AppError,
    model::order::OrderDto,
};

/// Orchestrates the atomic conversion of a priced cart into a durable order.
pub struct CheckoutService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CheckoutService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Converts the customer's cart into an order.
    ///
    /// The empty-cart check happens before any transaction is opened. Inside a
    /// single transaction the cart lines are read joined with catalog prices
    /// exactly once; the totals recomputed from that read become the order's
    /// `total_order_cost` and the per-line frozen prices, so the stated total
    /// and the sum of line prices cannot diverge even if the catalog changed
    /// since the last cart recalculation.
    ///
    /// Steps, all inside the transaction:
    /// 1. consistent read of lines with catalog prices, totals recomputed;
    /// 2. order inserted with status `preparing`;
    /// 3. one order line per cart line with the frozen price;
    /// 4. cart lines cleared;
    /// 5. cart aggregates reset, guarded by an optimistic `updated_at` check
    ///    against the cart row read before the transaction started.
    ///
    /// Any step failing rolls back the whole transaction: no order, no partial
    /// order lines, no cart mutation survive a failure. A failed version
    /// check in step 5 means a concurrent add-to-cart raced this checkout;
    /// the caller gets a conflict and may resubmit. There are no automatic
    /// retries.
    ///
    /// # Returns
    /// - `Ok(OrderDto)`: The created order with its lines
    /// - `Err(AppError::NotFound)`: The customer has no cart
    /// - `Err(AppError::Conflict)`: Empty cart, or checkout lost a race
    /// - `Err(AppError::DbErr)`: Storage failure; nothing was committed
    pub async fn checkout(&self, customer_id: Uuid) -> Result<OrderDto, AppError> {
        let cart = CartRepository::new(self.db)
            .get(customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cart does not exist".to_string()))?;

        if cart.quantity == 0 {
            return Err(AppError::Conflict("Cart is empty".to_string()));
        }

        let vendor_id = cart
            .vendor_id
            .ok_or_else(|| AppError::Conflict("Cart has no vendor bound".to_string()))?;

        // Dropping the transaction on any early return rolls it back.
        let txn = self.db.begin().await?;

        let carts = CartRepository::new(&txn);

        let lines = carts.priced_lines(cart.id).await?;
        if lines.is_empty() {
            // Aggregate says non-empty but no lines exist; refuse to create
            // an empty order.
            return Err(AppError::Conflict("Cart is empty".to_string()));
        }

        let (total_order_cost, _) = PricedLine::totals(&lines);

        let order = OrderRepository::new(&txn)
            .create_with_lines(
                CreateOrderParams {
                    customer_id,
                    vendor_id,
                    total_order_cost,
                },
                &lines,
            )
            .await?;

        carts.clear_lines(cart.id).await?;

        if !carts.reset_checked(cart.id, cart.updated_at).await? {
            return Err(AppError::Conflict(
                "Cart was modified during checkout".to_string(),
            ));
        }

        txn.commit().await?;

        tracing::info!(order_id = %order.id, customer_id = %customer_id, "checkout completed");

        OrderRepository::new(self.db)
            .get_with_lines(order.id)
            .await?
            .map(|(order, lines)| OrderDto::from_entity(order, lines))
            .ok_or_else(|| {
                AppError::InternalError(format!("Order {} missing after checkout", order.id))
            })
    }
}
