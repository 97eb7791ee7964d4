mod common;

use actix_web::{test, App};
use serde_json::json;
use alpn_responder::api::api::api_service_routes;
use alpn_responder::config::enums::hostname_source::HostnameSource;

#[actix_web::test]
async fn test_api_challenge_register_url_path() {
    let registry = common::create_test_registry();
    let service_data = common::create_test_api_service_data(registry.clone(), HostnameSource::url_path);
    let app = test::init_service(App::new().configure(api_service_routes(service_data))).await;

    let (cert_base64, key_base64, cert_der) = common::generate_challenge_upload("foo.example");
    let req = test::TestRequest::post()
        .uri("/tls-alpn-01/foo.example")
        .set_json(json!({"Cert": cert_base64, "Key": key_base64}))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, "foo.example".as_bytes());
    let entry = registry.get("foo.example").expect("registration should arm the hostname");
    assert_eq!(entry.certified.cert[0].as_ref(), cert_der.as_slice());
}

#[actix_web::test]
async fn test_api_challenge_register_host_header() {
    let registry = common::create_test_registry();
    let service_data = common::create_test_api_service_data(registry.clone(), HostnameSource::host_header);
    let app = test::init_service(App::new().configure(api_service_routes(service_data))).await;

    let (cert_base64, key_base64, _) = common::generate_challenge_upload("bar.example");
    let req = test::TestRequest::post()
        .uri("/tls-alpn-01")
        .insert_header(("Host", "bar.example:8080"))
        .set_json(json!({"Cert": cert_base64, "Key": key_base64}))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, "bar.example".as_bytes());
    assert!(registry.get("bar.example").is_some());
}

#[actix_web::test]
async fn test_api_challenge_register_host_header_ignores_path() {
    let registry = common::create_test_registry();
    let service_data = common::create_test_api_service_data(registry.clone(), HostnameSource::host_header);
    let app = test::init_service(App::new().configure(api_service_routes(service_data))).await;

    let (cert_base64, key_base64, _) = common::generate_challenge_upload("real.example");
    let req = test::TestRequest::post()
        .uri("/tls-alpn-01/decoy.example")
        .insert_header(("Host", "real.example"))
        .set_json(json!({"Cert": cert_base64, "Key": key_base64}))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, "real.example".as_bytes());
    assert!(registry.get("real.example").is_some());
    assert!(registry.get("decoy.example").is_none());
}

#[actix_web::test]
async fn test_api_challenge_register_malformed_payload_is_noop() {
    let registry = common::create_test_registry();
    let service_data = common::create_test_api_service_data(registry.clone(), HostnameSource::url_path);
    let app = test::init_service(App::new().configure(api_service_routes(service_data))).await;

    let req = test::TestRequest::post()
        .uri("/tls-alpn-01/broken.example")
        .set_json(json!({"Cert": "%%%not base64%%%", "Key": "AAAA"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).starts_with("rejected:"));
    assert!(registry.get("broken.example").is_none());
    assert!(registry.is_empty());
}

#[actix_web::test]
async fn test_api_challenge_register_garbage_der_is_noop() {
    use base64::prelude::*;

    let registry = common::create_test_registry();
    let service_data = common::create_test_api_service_data(registry.clone(), HostnameSource::url_path);
    let app = test::init_service(App::new().configure(api_service_routes(service_data))).await;

    // Valid base64, but the bytes are not a certificate.
    let req = test::TestRequest::post()
        .uri("/tls-alpn-01/broken.example")
        .set_json(json!({
            "Cert": BASE64_STANDARD.encode(b"not a certificate"),
            "Key": BASE64_STANDARD.encode(b"not a key"),
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert!(registry.is_empty());
}

#[actix_web::test]
async fn test_api_challenge_register_replaces_existing_entry() {
    let registry = common::create_test_registry();
    let service_data = common::create_test_api_service_data(registry.clone(), HostnameSource::url_path);
    let app = test::init_service(App::new().configure(api_service_routes(service_data))).await;

    let (first_cert, first_key, first_der) = common::generate_challenge_upload("rotate.example");
    let req = test::TestRequest::post()
        .uri("/tls-alpn-01/rotate.example")
        .set_json(json!({"Cert": first_cert, "Key": first_key}))
        .to_request();
    test::call_and_read_body(&app, req).await;

    let (second_cert, second_key, second_der) = common::generate_challenge_upload("rotate.example");
    let req = test::TestRequest::post()
        .uri("/tls-alpn-01/rotate.example")
        .set_json(json!({"Cert": second_cert, "Key": second_key}))
        .to_request();
    test::call_and_read_body(&app, req).await;

    assert_eq!(registry.len(), 1);
    let entry = registry.get("rotate.example").unwrap();
    assert_eq!(entry.certified.cert[0].as_ref(), second_der.as_slice());
    assert_ne!(entry.certified.cert[0].as_ref(), first_der.as_slice());
}

#[actix_web::test]
async fn test_api_challenge_register_missing_hostname() {
    let registry = common::create_test_registry();
    let service_data = common::create_test_api_service_data(registry.clone(), HostnameSource::url_path);
    let app = test::init_service(App::new().configure(api_service_routes(service_data))).await;

    let (cert_base64, key_base64, _) = common::generate_challenge_upload("foo.example");
    let req = test::TestRequest::post()
        .uri("/tls-alpn-01")
        .set_json(json!({"Cert": cert_base64, "Key": key_base64}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    assert!(registry.is_empty());
}

#[actix_web::test]
async fn test_api_challenge_register_invalid_json_body() {
    let registry = common::create_test_registry();
    let service_data = common::create_test_api_service_data(registry.clone(), HostnameSource::url_path);
    let app = test::init_service(App::new().configure(api_service_routes(service_data))).await;

    let req = test::TestRequest::post()
        .uri("/tls-alpn-01/foo.example")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("this is not json")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, "json parse error".as_bytes());
    assert!(registry.is_empty());
}

#[actix_web::test]
async fn test_api_unknown_route_not_found() {
    let registry = common::create_test_registry();
    let service_data = common::create_test_api_service_data(registry, HostnameSource::url_path);
    let app = test::init_service(App::new().configure(api_service_routes(service_data))).await;

    let req = test::TestRequest::get().uri("/does-not-exist").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);
}
