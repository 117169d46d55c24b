use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        // Country routes
        .route("/api/countries", get(handlers::list_countries))
        .route("/api/countries/{id}", get(handlers::get_country))
        .route("/api/admin/countries", post(handlers::create_country))
        .route(
            "/api/admin/countries/{id}",
            put(handlers::update_country).delete(handlers::delete_country),
        )
        // State routes
        .route("/api/states", get(handlers::list_states))
        .route("/api/states/{id}", get(handlers::get_state))
        .route("/api/admin/states", post(handlers::create_state))
        .route(
            "/api/admin/states/{id}",
            put(handlers::update_state).delete(handlers::delete_state),
        )
        // City routes
        .route("/api/cities", get(handlers::list_cities))
        .route("/api/cities/{id}", get(handlers::get_city))
        .route("/api/admin/cities", post(handlers::create_city))
        .route(
            "/api/admin/cities/{id}",
            put(handlers::update_city).delete(handlers::delete_city),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::regions::models::{City, Country, State};
    use crate::shared::memory::MemoryRepository;
    use crate::shared::test_helpers::{with_admin_auth, with_user_auth};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn service() -> Arc<RegionService> {
        Arc::new(RegionService::new(
            Arc::new(MemoryRepository::<Country>::new()),
            Arc::new(MemoryRepository::<State>::new()),
            Arc::new(MemoryRepository::<City>::new()),
        ))
    }

    fn admin_server() -> TestServer {
        TestServer::new(with_admin_auth(routes(service()))).unwrap()
    }

    async fn create_germany(server: &TestServer) -> String {
        let response = server
            .post("/api/admin/countries")
            .json(&json!({"name": "Germany", "code": "DE"}))
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json::<Value>()["data"]["id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_country_round_trip() {
        let server = admin_server();
        let id = create_germany(&server).await;

        let response = server.get(&format!("/api/countries/{}", id)).await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Germany");
        assert_eq!(body["data"]["code"], "DE");
    }

    #[tokio::test]
    async fn test_numeric_country_name_rejected() {
        let server = admin_server();
        let response = server
            .post("/api/admin/countries")
            .json(&json!({"name": "123", "code": "DE"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["message"],
            "Please enter a valid inputs"
        );
    }

    #[tokio::test]
    async fn test_extra_field_rejected() {
        let server = admin_server();
        let response = server
            .post("/api/admin/countries")
            .json(&json!({"name": "Germany", "code": "DE", "capital": "Berlin"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["message"],
            "Only valid fields are allowed"
        );
    }

    #[tokio::test]
    async fn test_duplicate_country_conflicts() {
        let server = admin_server();
        create_germany(&server).await;

        let response = server
            .post("/api/admin/countries")
            .json(&json!({"name": "Germany", "code": "GE"}))
            .await;
        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(
            response.json::<Value>()["message"],
            "Germany country is already present"
        );
    }

    #[tokio::test]
    async fn test_create_state_under_country() {
        let server = admin_server();
        let country_id = create_germany(&server).await;

        let response = server
            .post("/api/admin/states")
            .json(&json!({"name": "Bavaria", "countryId": country_id}))
            .await;
        response.assert_status(StatusCode::CREATED);
        let body = response.json::<Value>();
        assert_eq!(body["data"]["name"], "Bavaria");
        assert_eq!(body["data"]["country"]["name"], "Germany");
    }

    #[tokio::test]
    async fn test_update_missing_country_is_not_found() {
        let server = admin_server();
        let missing = uuid::Uuid::now_v7().simple().to_string();

        let response = server
            .put(&format!("/api/admin/countries/{}", missing))
            .json(&json!({"name": "France", "code": "FR"}))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let list = server.get("/api/countries").await.json::<Value>();
        assert_eq!(list["data"], json!([]));
    }

    #[tokio::test]
    async fn test_delete_twice_succeeds() {
        let server = admin_server();
        let id = create_germany(&server).await;
        let path = format!("/api/admin/countries/{}", id);

        server.delete(&path).await.assert_status_ok();
        server.delete(&path).await.assert_status_ok();
        server
            .get(&format!("/api/countries/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_empty_city_list_is_success() {
        let server = admin_server();
        let response = server.get("/api/cities").await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["data"], json!([]));
        assert_eq!(body["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn test_plain_user_cannot_mutate() {
        let server = TestServer::new(with_user_auth(routes(service()))).unwrap();

        server.get("/api/countries").await.assert_status_ok();
        server
            .post("/api/admin/countries")
            .json(&json!({"name": "Germany", "code": "DE"}))
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unauthenticated_read_rejected() {
        let server = TestServer::new(routes(service())).unwrap();
        server
            .get("/api/countries")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}
