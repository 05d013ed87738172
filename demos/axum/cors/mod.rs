use std::sync::Arc;

use cors_gate::{Cors, CorsOptions, ValidationError, equals_ignore_case};

pub type SharedCors = Arc<Cors>;

const TRUSTED_ORIGINS: [&str; 2] = ["http://api.example.com", "http://localhost:3000"];

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let options = CorsOptions::new()
        .validator(|ctx| {
            let origin = ctx.origin()?;
            TRUSTED_ORIGINS
                .iter()
                .any(|trusted| equals_ignore_case(trusted, origin))
                .then(|| origin.to_string())
        })
        .methods(["GET", "POST", "OPTIONS"])
        .allowed_headers(["Content-Type", "X-Requested-With", "X-Example-Trace"])
        .exposed_headers(["X-Example-Trace"])
        .credentials(true)
        .max_age(600);

    let cors = Arc::new(Cors::new(options)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the Axum CORS example!",
    })
}

pub mod middleware;
