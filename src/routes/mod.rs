// Route exports
pub mod errors;
pub mod info;
pub mod intent;

use actix_web::web;

pub use errors::{ApiError, json_config};
pub use intent::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(info::configure_root).service(
        web::scope("/api/v1")
            .configure(info::configure)
            .configure(intent::configure),
    );
}
