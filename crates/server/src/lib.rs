pub mod errors;
pub mod extract;
pub mod resources;
pub mod routes;
pub mod startup;
pub mod state;
pub mod transaction;

pub use startup::{build_app, run_with_config};
pub use state::AppState;
