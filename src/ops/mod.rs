pub mod filter;
pub mod reconcile;
pub mod store;

pub use filter::{ItemFilter, filter_items};
pub use reconcile::reconcile;
pub use store::{ItemError, ItemStore};
