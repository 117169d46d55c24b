// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Default role for every signed-up account
pub const ROLE_USER: &str = "user";

/// Can manage the geography, masjids and prayer timings
pub const ROLE_ADMIN: &str = "admin";

/// Everything an admin can do
pub const ROLE_SUPER_ADMIN: &str = "superAdmin";

// =============================================================================
// UPLOAD LIMITS
// =============================================================================

/// Maximum size of a timing chart image (2 MiB)
pub const MAX_CHART_FILE_SIZE: usize = 2 * 1024 * 1024;

/// Accepted timing chart file extensions (lowercase)
pub const ALLOWED_CHART_EXTENSIONS: &[&str] = &["png", "jpeg", "jpg"];

/// Accepted timing chart MIME types
pub const ALLOWED_CHART_MIME_TYPES: &[&str] = &["image/png", "image/jpeg", "image/jpg"];
