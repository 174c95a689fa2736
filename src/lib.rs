//! SupaCell: superhero powers REST API library.

pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use error::AppError;
pub use migration::{ensure_database_exists, ensure_tables};
pub use model::{Hero, HeroPower, NewHeroPower, Power, PowerChanges, Strength};
pub use routes::{api_routes, app_router};
pub use state::AppState;
pub use store::{PgStore, Store};
