pub mod cart;
pub mod cart_item;
pub mod item;
pub mod order;
pub mod order_item;
pub mod user;
pub mod vendor;

pub mod prelude {
    pub use super::cart::Entity as Cart;
    pub use super::cart_item::Entity as CartItem;
    pub use super::item::Entity as Item;
    pub use super::order::Entity as Order;
    pub use super::order_item::Entity as OrderItem;
    pub use super::user::Entity as User;
    pub use super::vendor::Entity as Vendor;
}
