use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::order::OrderRepository,
    error::AppError,
    model::order::{parse_order_status, OrderDto},
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a customer's orders with their lines, newest first.
    pub async fn list_for_customer(&self, customer_id: Uuid) -> Result<Vec<OrderDto>, AppError> {
        let repo = OrderRepository::new(self.db);

        let orders = repo.list_by_customer(customer_id).await?;

        let mut dtos = Vec::with_capacity(orders.len());
        for order in orders {
            let (order, lines) = repo
                .get_with_lines(order.id)
                .await?
                .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;
            dtos.push(OrderDto::from_entity(order, lines));
        }

        Ok(dtos)
    }

    /// Gets one order with its lines.
    pub async fn get(&self, order_id: Uuid) -> Result<OrderDto, AppError> {
        OrderRepository::new(self.db)
            .get_with_lines(order_id)
            .await?
            .map(|(order, lines)| OrderDto::from_entity(order, lines))
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))
    }

    /// Applies a staff status transition.
    ///
    /// Orders are immutable after checkout except for this field, and only
    /// the transitions allowed by `OrderStatus::can_transition_to` are
    /// accepted.
    ///
    /// # Returns
    /// - `Ok(OrderDto)`: The order with the new status
    /// - `Err(AppError::BadRequest)`: Unknown status string
    /// - `Err(AppError::NotFound)`: Order does not exist
    /// - `Err(AppError::Conflict)`: Illegal transition, or the status moved
    ///   concurrently between read and write
    pub async fn update_status(&self, order_id: Uuid, status: &str) -> Result<OrderDto, AppError> {
        let next = parse_order_status(status)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown order status '{}'", status)))?;

        let repo = OrderRepository::new(self.db);

        let order = repo
            .get_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        if !order.status.can_transition_to(next) {
            return Err(AppError::Conflict(format!(
                "Order cannot move from '{}' to '{}'",
                sea_orm::ActiveEnum::to_value(&order.status),
                status
            )));
        }

        if !repo.update_status(order_id, order.status, next).await? {
            return Err(AppError::Conflict(
                "Order status changed concurrently".to_string(),
            ));
        }

        self.get(order_id).await
    }
}
