use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::masjids::{dtos as masjids_dtos, handlers as masjids_handlers};
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ApiResponse, Meta, RecordId};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::signup,
        auth_handlers::login,
        auth_handlers::get_me,
        auth_handlers::update_password,
        // Users (admin)
        users_handlers::assign_masjid,
        // Countries
        regions_handlers::list_countries,
        regions_handlers::get_country,
        regions_handlers::create_country,
        regions_handlers::update_country,
        regions_handlers::delete_country,
        // States
        regions_handlers::list_states,
        regions_handlers::get_state,
        regions_handlers::create_state,
        regions_handlers::update_state,
        regions_handlers::delete_state,
        // Cities
        regions_handlers::list_cities,
        regions_handlers::get_city,
        regions_handlers::create_city,
        regions_handlers::update_city,
        regions_handlers::delete_city,
        // Masjids
        masjids_handlers::list_masjids,
        masjids_handlers::get_masjid,
        masjids_handlers::create_masjid,
        masjids_handlers::update_masjid,
        masjids_handlers::delete_masjid,
        masjids_handlers::upload_timing_chart,
        // Namaaz
        masjids_handlers::list_namaaz,
        masjids_handlers::get_namaaz,
        masjids_handlers::create_namaaz,
        masjids_handlers::update_namaaz,
        masjids_handlers::delete_namaaz,
        // Masjid namaaz timings
        masjids_handlers::list_timings,
        masjids_handlers::get_timing,
        masjids_handlers::create_timing,
        masjids_handlers::update_timing,
        masjids_handlers::delete_timing,
    ),
    components(
        schemas(
            Meta,
            RecordId,
            // Auth
            auth_dtos::SignupPayload,
            auth_dtos::LoginPayload,
            auth_dtos::UpdatePasswordPayload,
            auth_dtos::AuthResponseDto,
            ApiResponse<auth_dtos::AuthResponseDto>,
            // Users
            users_dtos::UserResponseDto,
            users_dtos::AssignMasjidPayload,
            ApiResponse<users_dtos::UserResponseDto>,
            // Regions
            regions_dtos::CountryPayload,
            regions_dtos::StatePayload,
            regions_dtos::CityPayload,
            regions_dtos::CountryResponseDto,
            regions_dtos::StateResponseDto,
            regions_dtos::CityResponseDto,
            ApiResponse<regions_dtos::CountryResponseDto>,
            ApiResponse<Vec<regions_dtos::CountryResponseDto>>,
            ApiResponse<regions_dtos::StateResponseDto>,
            ApiResponse<Vec<regions_dtos::StateResponseDto>>,
            ApiResponse<regions_dtos::CityResponseDto>,
            ApiResponse<Vec<regions_dtos::CityResponseDto>>,
            // Masjids
            masjids_dtos::MasjidPayload,
            masjids_dtos::NamaazPayload,
            masjids_dtos::TimingPayload,
            masjids_dtos::UploadTimingChartDto,
            masjids_dtos::MasjidCityDto,
            masjids_dtos::MasjidResponseDto,
            masjids_dtos::MasjidSummaryDto,
            masjids_dtos::NamaazResponseDto,
            masjids_dtos::TimingResponseDto,
            ApiResponse<masjids_dtos::MasjidResponseDto>,
            ApiResponse<Vec<masjids_dtos::MasjidResponseDto>>,
            ApiResponse<masjids_dtos::NamaazResponseDto>,
            ApiResponse<Vec<masjids_dtos::NamaazResponseDto>>,
            ApiResponse<masjids_dtos::TimingResponseDto>,
            ApiResponse<Vec<masjids_dtos::TimingResponseDto>>,
        )
    ),
    tags(
        (name = "auth", description = "Sign-up, login and password management"),
        (name = "users", description = "User administration (admin only)"),
        (name = "regions", description = "Countries, states and cities"),
        (name = "masjids", description = "Masjids and their timing charts"),
        (name = "namaaz", description = "Namaaz and per-masjid namaaz timings"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Masjid Directory API",
        version = "0.1.0",
        description = "API documentation for the masjid directory",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_entity() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/countries",
            "/api/admin/states/{id}",
            "/api/cities/{id}",
            "/api/admin/masjids/{id}/timing-chart",
            "/api/namaaz",
            "/api/admin/masjid-namaaz-timings",
            "/api/auth/signup",
            "/api/admin/users/{id}/masjids",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
        assert!(doc
            .components
            .as_ref()
            .is_some_and(|c| c.security_schemes.contains_key("bearer_auth")));
    }
}
