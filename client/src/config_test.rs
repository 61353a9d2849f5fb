use super::*;

#[test]
fn new_trims_trailing_slashes() {
    assert_eq!(ApiConfig::new("https://api.example.com/").base_url, "https://api.example.com");
    assert_eq!(ApiConfig::new("https://api.example.com/v1//").base_url, "https://api.example.com/v1");
}

#[test]
fn blank_base_url_falls_back_to_default() {
    assert_eq!(ApiConfig::new("   ").base_url, DEFAULT_API_BASE_URL);
    assert_eq!(ApiConfig::default().base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn url_joins_base_and_path() {
    let config = ApiConfig::new("https://api.example.com");
    assert_eq!(config.url("/tenant/tenants"), "https://api.example.com/tenant/tenants");
}
