pub mod envelope;
pub mod errors;
pub mod gate;
pub mod router;
pub mod timing;
pub mod types;
pub mod validation;
pub mod handlers {
    pub mod common;
    pub mod products;
    pub mod root;
    pub mod users;
}

pub use errors::ApiError;
pub use router::{create_router, ApiDoc};
pub use types::{ApiResponse, AppState};
