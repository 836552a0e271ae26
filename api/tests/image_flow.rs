//! Image upload over the full HTTP stack.

mod common;

use actix_web::http::header;
use actix_web::test;

use common::register;
use mercato_api::app::create_app;

const BOUNDARY: &str = "----mercato-test-boundary";

fn multipart_body(filename: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{filename}\"\r\nContent-Type: image/jpeg\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

#[actix_web::test]
async fn test_jpg_upload_returns_public_url() {
    let (state, _, _) = common::test_state();
    let app = test::init_service(create_app(state)).await;
    let token = register(&app, "Seller One", "seller1").await;

    let req = test::TestRequest::post()
        .uri("/v1/image")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .insert_header((header::CONTENT_TYPE, content_type()))
        .set_payload(multipart_body("lamp.jpg", b"fake image bytes"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "File uploaded successfully");
    assert_eq!(body["data"]["imageUrl"], "https://images.test/lamp.jpg");
}

#[actix_web::test]
async fn test_non_jpeg_extension_is_rejected() {
    let (state, _, _) = common::test_state();
    let app = test::init_service(create_app(state)).await;
    let token = register(&app, "Seller One", "seller1").await;

    let req = test::TestRequest::post()
        .uri("/v1/image")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .insert_header((header::CONTENT_TYPE, content_type()))
        .set_payload(multipart_body("lamp.png", b"fake image bytes"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "file format must be JPG or JPEG");
}

#[actix_web::test]
async fn test_upload_requires_authentication() {
    let (state, _, _) = common::test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/v1/image")
        .insert_header((header::CONTENT_TYPE, content_type()))
        .set_payload(multipart_body("lamp.jpg", b"fake image bytes"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);
}
