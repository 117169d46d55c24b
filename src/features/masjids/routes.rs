use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::features::masjids::handlers;
use crate::features::masjids::services::{MasjidService, NamaazService};
use crate::shared::constants::MAX_CHART_FILE_SIZE;

/// Create routes for the masjids feature
pub fn routes(masjid_service: Arc<MasjidService>, namaaz_service: Arc<NamaazService>) -> Router {
    let masjids = Router::new()
        .route("/api/masjids", get(handlers::list_masjids))
        .route("/api/masjids/{id}", get(handlers::get_masjid))
        .route("/api/admin/masjids", post(handlers::create_masjid))
        .route(
            "/api/admin/masjids/{id}",
            put(handlers::update_masjid).delete(handlers::delete_masjid),
        )
        .route(
            "/api/admin/masjids/{id}/timing-chart",
            // Oversized files must reach the size check, so leave room past the limit
            post(handlers::upload_timing_chart)
                .layer(DefaultBodyLimit::max(MAX_CHART_FILE_SIZE * 2 + 1024 * 1024)),
        )
        .with_state(masjid_service);

    let namaaz = Router::new()
        .route("/api/namaaz", get(handlers::list_namaaz))
        .route("/api/namaaz/{id}", get(handlers::get_namaaz))
        .route("/api/admin/namaaz", post(handlers::create_namaaz))
        .route(
            "/api/admin/namaaz/{id}",
            put(handlers::update_namaaz).delete(handlers::delete_namaaz),
        )
        .route("/api/masjid-namaaz-timings", get(handlers::list_timings))
        .route("/api/masjid-namaaz-timings/{id}", get(handlers::get_timing))
        .route(
            "/api/admin/masjid-namaaz-timings",
            post(handlers::create_timing),
        )
        .route(
            "/api/admin/masjid-namaaz-timings/{id}",
            put(handlers::update_timing).delete(handlers::delete_timing),
        )
        .with_state(namaaz_service);

    masjids.merge(namaaz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::masjids::models::{Masjid, MasjidNamaazTiming, Namaaz};
    use crate::features::regions::models::{City, CityInput};
    use crate::modules::storage::MemoryChartStorage;
    use crate::shared::memory::MemoryRepository;
    use crate::shared::repository::Repository;
    use crate::shared::test_helpers::with_admin_auth;
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use uuid::Uuid;

    struct Fixture {
        server: TestServer,
        cities: Arc<MemoryRepository<City>>,
    }

    fn fixture() -> Fixture {
        let masjids = Arc::new(MemoryRepository::<Masjid>::new());
        let cities = Arc::new(MemoryRepository::<City>::new());
        let masjid_service = Arc::new(MasjidService::new(
            masjids.clone(),
            cities.clone(),
            Arc::new(MemoryChartStorage::new()),
        ));
        let namaaz_service = Arc::new(NamaazService::new(
            Arc::new(MemoryRepository::<Namaaz>::new()),
            Arc::new(MemoryRepository::<MasjidNamaazTiming>::new()),
            masjids,
        ));
        let server =
            TestServer::new(with_admin_auth(routes(masjid_service, namaaz_service))).unwrap();
        Fixture { server, cities }
    }

    async fn create_masjid(f: &Fixture) -> String {
        let city = f
            .cities
            .insert(CityInput {
                name: "Munich".to_string(),
                state_id: Uuid::now_v7(),
            })
            .await
            .unwrap();

        let response = f
            .server
            .post("/api/admin/masjids")
            .json(&json!({"name": "Jamia", "cityId": city.id.simple().to_string()}))
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json::<Value>()["data"]["id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    fn chart(name: &str, mime: &str, size: usize) -> MultipartForm {
        MultipartForm::new().add_part(
            "file",
            Part::bytes(vec![0u8; size]).file_name(name).mime_type(mime),
        )
    }

    #[tokio::test]
    async fn test_masjid_round_trip() {
        let f = fixture();
        let id = create_masjid(&f).await;

        let response = f.server.get(&format!("/api/masjids/{}", id)).await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["data"]["name"], "Jamia");
        assert_eq!(body["data"]["city"]["name"], "Munich");
    }

    #[tokio::test]
    async fn test_upload_timing_chart() {
        let f = fixture();
        let id = create_masjid(&f).await;

        let response = f
            .server
            .post(&format!("/api/admin/masjids/{}/timing-chart", id))
            .multipart(chart("chart.png", "image/png", 2048))
            .await;
        response.assert_status_ok();
        let url = response.json::<Value>()["data"]["timingChartUrl"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(url.ends_with(".png"));
    }

    #[tokio::test]
    async fn test_upload_rejects_gif() {
        let f = fixture();
        let id = create_masjid(&f).await;

        let response = f
            .server
            .post(&format!("/api/admin/masjids/{}/timing-chart", id))
            .multipart(chart("chart.gif", "image/gif", 10))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["message"], "Invalid file type");
    }

    #[tokio::test]
    async fn test_upload_rejects_large_png() {
        let f = fixture();
        let id = create_masjid(&f).await;

        let response = f
            .server
            .post(&format!("/api/admin/masjids/{}/timing-chart", id))
            .multipart(chart("chart.png", "image/png", 3 * 1024 * 1024))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["message"],
            "File size exceeds the limit"
        );
    }

    #[tokio::test]
    async fn test_upload_rejects_bad_masjid_id() {
        let f = fixture();
        let response = f
            .server
            .post("/api/admin/masjids/not-an-id/timing-chart")
            .multipart(chart("chart.png", "image/png", 10))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["message"], "Invalid Masjid ID");
    }

    #[tokio::test]
    async fn test_namaaz_missing_name_with_extra_key() {
        let f = fixture();
        let response = f
            .server
            .post("/api/admin/namaaz")
            .json(&json!({"title": "Fajr"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["message"],
            "Please enter a valid inputs!"
        );
    }

    #[tokio::test]
    async fn test_empty_timings_list() {
        let f = fixture();
        let response = f.server.get("/api/masjid-namaaz-timings").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["data"], json!([]));
    }
}
