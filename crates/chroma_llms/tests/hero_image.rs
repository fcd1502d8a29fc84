//! Hero image generation against a mocked images endpoint.

mod common;

use chroma_core::{Palette, PaletteDraft};
use chroma_llms::{Error, HeroImageClient, ImageConfig, PNG_DATA_URI_PREFIX};
use common::{palette_json, API_KEY};
use mockito::Matcher;
use serde_json::json;
use tokio_util::sync::CancellationToken;

const PATH: &str = "/images/generations";

fn sample_palette() -> Palette {
    let draft: PaletteDraft = serde_json::from_value(palette_json()).unwrap();
    Palette::from_draft(draft).unwrap()
}

fn client_for(server: &mockito::Server) -> HeroImageClient {
    HeroImageClient::new(
        ImageConfig::new(API_KEY)
            .with_base_url(server.url())
            .with_model("image-test"),
    )
    .unwrap()
}

#[tokio::test]
async fn test_success_returns_png_data_uri() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({"model": "image-test", "n": 1, "response_format": "b64_json"})),
            Matcher::Regex("Harbor Blue \\(#1d4ed8\\)".to_string()),
            Matcher::Regex("Nordic harbor at first light".to_string()),
        ]))
        .with_status(200)
        .with_body(json!({"created": 1, "data": [{"b64_json": "iVBORw0KGgo="}]}).to_string())
        .create_async()
        .await;

    let palette = sample_palette();
    let uri = client_for(&server)
        .generate(palette.colors(), palette.concept(), None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(uri.starts_with(PNG_DATA_URI_PREFIX));
    assert_eq!(uri, "data:image/png;base64,iVBORw0KGgo=");
}

#[tokio::test]
async fn test_attach_sets_hero_image() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(json!({"data": [{"b64_json": "AAAA"}]}).to_string())
        .create_async()
        .await;

    let mut palette = sample_palette();
    let colors_before = palette.colors().to_vec();
    client_for(&server).attach(&mut palette, None).await.unwrap();

    assert_eq!(palette.hero_image(), Some("data:image/png;base64,AAAA"));
    assert_eq!(palette.colors(), colors_before.as_slice());
}

#[tokio::test]
async fn test_error_status_is_image_generation_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .with_status(400)
        .with_body("content policy violation")
        .create_async()
        .await;

    let mut palette = sample_palette();
    let result = client_for(&server).attach(&mut palette, None).await;

    mock.assert_async().await;
    match result {
        Err(Error::ImageGeneration { status, message }) => {
            assert_eq!(status, 400);
            assert!(message.contains("content policy"));
        }
        other => panic!("expected ImageGeneration, got {other:?}"),
    }
    assert!(palette.hero_image().is_none());
}

#[tokio::test]
async fn test_missing_payload_is_no_image_data() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(json!({"data": [{"url": "https://cdn.example/img.png"}]}).to_string())
        .create_async()
        .await;

    let palette = sample_palette();
    let result = client_for(&server)
        .generate(palette.colors(), palette.concept(), None)
        .await;
    assert!(matches!(result, Err(Error::NoImageData)), "{result:?}");
}

#[tokio::test]
async fn test_empty_data_is_no_image_data() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"{"data": []}"#)
        .create_async()
        .await;

    let palette = sample_palette();
    let result = client_for(&server)
        .generate(palette.colors(), palette.concept(), None)
        .await;
    assert!(matches!(result, Err(Error::NoImageData)));
}

#[tokio::test]
async fn test_cancelled_before_request() {
    let server = mockito::Server::new_async().await;
    let token = CancellationToken::new();
    token.cancel();

    let palette = sample_palette();
    let result = client_for(&server)
        .generate(palette.colors(), palette.concept(), Some(token))
        .await;
    assert!(matches!(result, Err(Error::Cancelled)));
}
