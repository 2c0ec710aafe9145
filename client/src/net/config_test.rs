use super::*;

#[test]
fn default_points_at_hosted_backend() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.base_url(), DEFAULT_API_BASE_URL);
    assert_eq!(
        cfg.register_url(),
        "https://dar-race-express-server-k3852yzqg.vercel.app/api/register"
    );
}

#[test]
fn new_trims_whitespace_and_trailing_slashes() {
    let cfg = ApiConfig::new("  http://localhost:4000//  ");
    assert_eq!(cfg.base_url(), "http://localhost:4000");
    assert_eq!(cfg.registrations_url(), "http://localhost:4000/api/registrations");
}

#[test]
fn empty_base_yields_same_origin_paths() {
    let cfg = ApiConfig::new("");
    assert_eq!(cfg.register_url(), "/api/register");
    assert_eq!(cfg.registrations_url(), "/api/registrations");
}

#[test]
fn from_document_falls_back_to_default_off_browser() {
    assert_eq!(ApiConfig::from_document(), ApiConfig::default());
}
