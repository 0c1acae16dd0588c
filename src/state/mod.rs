// ============================================================================
// STATE MODULE - Rc<RefCell> stores with subscriber notification
// ============================================================================

pub mod reactivity;
pub mod session_context;
pub mod resource_state;
pub mod activities_state;
pub mod auth_state;
pub mod app_state;

pub use reactivity::*;
pub use session_context::*;
pub use resource_state::*;
pub use activities_state::*;
pub use auth_state::*;
pub use app_state::*;
