use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QuerySelect, RelationTrait,
};
use uuid::Uuid;

/// A cart line joined with its current catalog price.
///
/// Produced by a single joined read so every line in one recalculation or
/// checkout sees the same catalog snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLine {
    pub item_id: Uuid,
    pub quantity: i32,
    pub price: Decimal,
}

impl PricedLine {
    /// Sums `quantity * price` and total quantity over a set of lines.
    ///
    /// Price arithmetic is `Decimal`; repeated recalculation cannot drift.
    /// The quantity sum saturates instead of wrapping so hostile inputs can
    /// never panic the aggregate rewrite.
    pub fn totals(lines: &[PricedLine]) -> (Decimal, i32) {
        let total_price = lines
            .iter()
            .map(|line| Decimal::from(line.quantity) * line.price)
            .sum();
        let quantity = lines
            .iter()
            .fold(0i32, |acc, line| acc.saturating_add(line.quantity));
        (total_price, quantity)
    }
}

/// Repository owning cart and cart-line lifecycle, one active cart per
/// customer. The cart's primary key is the customer's user id.
pub struct CartRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CartRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Gets the customer's cart.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The cart
    /// - `Ok(None)`: The customer has never added anything to a cart
    /// - `Err(DbErr)`: Database error
    pub async fn get(&self, customer_id: Uuid) -> Result<Option<entity::cart::Model>, DbErr> {
        entity::prelude::Cart::find_by_id(customer_id)
            .one(self.conn)
            .await
    }

    /// Fetches the customer's cart, creating or re-binding it as needed.
    ///
    /// - No cart exists: creates an empty cart bound to `vendor_id`.
    /// - Cart bound to a different vendor: the cart is **reset**, all lines
    ///   cleared, totals zeroed, vendor switched. Destructive and
    ///   non-recoverable; a cart holds items from exactly one vendor, so there
    ///   is no merge step. Idempotent when the vendor already matches.
    ///
    /// # Returns
    /// - `Ok(Model)`: A cart bound to `vendor_id`
    /// - `Err(DbErr)`: Database error
    pub async fn get_or_create(
        &self,
        customer_id: Uuid,
        vendor_id: Uuid,
    ) -> Result<entity::cart::Model, DbErr> {
        match self.get(customer_id).await? {
            None => self.create(customer_id, vendor_id).await,
            Some(cart) if cart.vendor_id != Some(vendor_id) => {
                self.reset(cart.id, Some(vendor_id)).await
            }
            Some(cart) => Ok(cart),
        }
    }

    async fn create(
        &self,
        customer_id: Uuid,
        vendor_id: Uuid,
    ) -> Result<entity::cart::Model, DbErr> {
        let now = Utc::now();
        entity::cart::ActiveModel {
            id: ActiveValue::Set(customer_id),
            total_price: ActiveValue::Set(Decimal::ZERO),
            quantity: ActiveValue::Set(0),
            vendor_id: ActiveValue::Set(Some(vendor_id)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.conn)
        .await
    }

    /// Clears all lines, zeroes the totals, and binds `vendor_id` (or unbinds
    /// with `None`). Used by vendor switch, explicit empty, and checkout.
    ///
    /// # Returns
    /// - `Ok(Model)`: The reset cart as re-read from the database
    /// - `Err(DbErr)`: Database error
    pub async fn reset(
        &self,
        cart_id: Uuid,
        vendor_id: Option<Uuid>,
    ) -> Result<entity::cart::Model, DbErr> {
        self.clear_lines(cart_id).await?;

        entity::prelude::Cart::update_many()
            .col_expr(entity::cart::Column::TotalPrice, Expr::value(Decimal::ZERO))
            .col_expr(entity::cart::Column::Quantity, Expr::value(0))
            .col_expr(entity::cart::Column::VendorId, Expr::value(vendor_id))
            .col_expr(entity::cart::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::cart::Column::Id.eq(cart_id))
            .exec(self.conn)
            .await?;

        self.get(cart_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Cart {} not found", cart_id)))
    }

    /// Zeroes the cart aggregates and unbinds the vendor, guarded by an
    /// optimistic version check on `updated_at`.
    ///
    /// The checkout transaction reads the cart once at its start and passes
    /// that row's `updated_at` here; if a concurrent line mutation bumped the
    /// timestamp in the meantime, no row matches and the caller must abort.
    ///
    /// # Returns
    /// - `Ok(true)`: The cart was reset
    /// - `Ok(false)`: Version check failed; a concurrent mutation won
    /// - `Err(DbErr)`: Database error
    pub async fn reset_checked(
        &self,
        cart_id: Uuid,
        seen_updated_at: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Cart::update_many()
            .col_expr(entity::cart::Column::TotalPrice, Expr::value(Decimal::ZERO))
            .col_expr(entity::cart::Column::Quantity, Expr::value(0))
            .col_expr(
                entity::cart::Column::VendorId,
                Expr::value(Option::<Uuid>::None),
            )
            .col_expr(entity::cart::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::cart::Column::Id.eq(cart_id))
            .filter(entity::cart::Column::UpdatedAt.eq(seen_updated_at))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Inserts a line or overwrites the quantity of an existing one.
    ///
    /// The write is an overwrite, not additive: upserting quantities 3 then 5
    /// leaves a single line with quantity 5. Quantity must already be
    /// validated as strictly positive; zero-quantity requests are routed to
    /// [`remove_line`](Self::remove_line) by the service layer.
    pub async fn upsert_line(
        &self,
        cart_id: Uuid,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<(), DbErr> {
        entity::prelude::CartItem::insert(entity::cart_item::ActiveModel {
            cart_id: ActiveValue::Set(cart_id),
            item_id: ActiveValue::Set(item_id),
            quantity: ActiveValue::Set(quantity),
        })
        .on_conflict(
            OnConflict::columns([
                entity::cart_item::Column::CartId,
                entity::cart_item::Column::ItemId,
            ])
            .update_column(entity::cart_item::Column::Quantity)
            .to_owned(),
        )
        .exec(self.conn)
        .await?;

        Ok(())
    }

    /// Deletes a single line. A no-op if the line does not exist.
    pub async fn remove_line(&self, cart_id: Uuid, item_id: Uuid) -> Result<(), DbErr> {
        entity::prelude::CartItem::delete_by_id((cart_id, item_id))
            .exec(self.conn)
            .await?;
        Ok(())
    }

    /// Gets all lines for a cart.
    pub async fn get_lines(&self, cart_id: Uuid) -> Result<Vec<entity::cart_item::Model>, DbErr> {
        entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .all(self.conn)
            .await
    }

    /// Deletes all lines for a cart. Used by vendor-switch reset, explicit
    /// empty, and checkout.
    pub async fn clear_lines(&self, cart_id: Uuid) -> Result<(), DbErr> {
        entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .exec(self.conn)
            .await?;
        Ok(())
    }

    /// Reads the cart's lines joined with current catalog prices in a single
    /// query.
    ///
    /// This is the only read path the pricing engine and checkout use, so one
    /// recalculation never mixes prices from different catalog states.
    pub async fn priced_lines(&self, cart_id: Uuid) -> Result<Vec<PricedLine>, DbErr> {
        let rows: Vec<(Uuid, i32, Decimal)> = entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .join(JoinType::InnerJoin, entity::cart_item::Relation::Item.def())
            .select_only()
            .column(entity::cart_item::Column::ItemId)
            .column(entity::cart_item::Column::Quantity)
            .column(entity::item::Column::Price)
            .into_tuple()
            .all(self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(item_id, quantity, price)| PricedLine {
                item_id,
                quantity,
                price,
            })
            .collect())
    }

    /// Recomputes the cart aggregates from its current lines and catalog
    /// prices and writes them into the cart row.
    ///
    /// Must run after every line mutation; a line mutation is not complete
    /// until this has committed.
    ///
    /// # Returns
    /// - `Ok((total_price, quantity))`: The totals written to the cart row
    /// - `Err(DbErr)`: Database error
    pub async fn recalculate(&self, cart_id: Uuid) -> Result<(Decimal, i32), DbErr> {
        let lines = self.priced_lines(cart_id).await?;
        let (total_price, quantity) = PricedLine::totals(&lines);

        entity::prelude::Cart::update_many()
            .col_expr(entity::cart::Column::TotalPrice, Expr::value(total_price))
            .col_expr(entity::cart::Column::Quantity, Expr::value(quantity))
            .col_expr(entity::cart::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::cart::Column::Id.eq(cart_id))
            .exec(self.conn)
            .await?;

        Ok((total_price, quantity))
    }
}
