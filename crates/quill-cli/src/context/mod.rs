mod app_context;
mod identity;

pub use app_context::AppContext;
pub use identity::resolve_identity;
