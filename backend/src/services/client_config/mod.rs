//! # Client Configuration Service
//!
//! Exposes the `ClientConfig` built at start-up so the embedded frontend
//! can learn which student API to talk to without being rebuilt.
//!
//! ## Registered Routes
//!
//! *   **`GET /api/config`**: returns the `ClientConfig` as JSON.

use actix_web::web::{get, scope, Data};
use actix_web::{HttpResponse, Responder, Scope};
use common::config::ClientConfig;

const API_PATH: &str = "/api";

/// Configures and returns the Actix `Scope` for the configuration route.
///
/// Expects the `ClientConfig` to be registered as `web::Data`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/config", get().to(process))
}

async fn process(config: Data<ClientConfig>) -> impl Responder {
    HttpResponse::Ok().json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use common::config::LoadingMode;

    #[actix_web::test]
    async fn serves_registered_config() {
        let config = ClientConfig {
            items_per_page: 10,
            loading_mode: LoadingMode::FirstResponse,
            ..ClientConfig::with_api_base("http://localhost:3000/api")
        };
        let app = test::init_service(
            App::new()
                .app_data(Data::new(config.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let served: ClientConfig = test::call_and_read_body_json(&app, req).await;
        assert_eq!(served, config);
    }

    #[actix_web::test]
    async fn other_methods_are_not_routed() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(ClientConfig::default()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/config").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
