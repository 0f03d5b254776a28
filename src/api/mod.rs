pub mod handlers;
pub mod json;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
