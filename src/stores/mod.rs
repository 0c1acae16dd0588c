pub mod load_state;
pub mod resource_store;
pub mod auth_store;

pub use load_state::{Fence, LoadState, Lifecycle, Ticket};
pub use resource_store::ResourceStore;
pub use auth_store::AuthStore;
