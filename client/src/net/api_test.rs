use super::*;
use crate::net::credentials::StaticCredentials;

#[test]
fn property_endpoints_format_expected_paths() {
    assert_eq!(properties_endpoint(), "/property/properties");
    assert_eq!(property_endpoint("p-42"), "/property/properties/p-42");
}

#[test]
fn tenant_and_testimonial_endpoints_format_expected_paths() {
    assert_eq!(tenants_endpoint(), "/tenant/tenants");
    assert_eq!(pending_testimonials_endpoint(), "/api/testimony/pending");
    assert_eq!(approve_testimonial_endpoint("t-3"), "/api/testimonials/t-3/approve");
}

#[test]
fn http_api_resolves_urls_against_config() {
    let api = HttpApi::new(ApiConfig::new("https://rentals.example.com/"), Arc::new(StaticCredentials(None)));
    assert_eq!(api.config().base_url, "https://rentals.example.com");
    assert_eq!(api.url(&property_endpoint("9")), "https://rentals.example.com/property/properties/9");
}

#[test]
fn http_api_is_unavailable_outside_browser() {
    let api = HttpApi::new(ApiConfig::default(), Arc::new(StaticCredentials(Some("tok".to_owned()))));
    let result = futures::executor::block_on(api.list_tenants());
    assert_eq!(result, Err(ApiError::Unavailable));
    let result = futures::executor::block_on(api.approve_testimonial("t-1"));
    assert_eq!(result, Err(ApiError::Unavailable));
}
