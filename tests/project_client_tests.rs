//! Integration tests for the project-scoped client and resource operations.
//!
//! These tests exercise the full pipeline from the typed resource API down
//! to the wire: path construction, command bodies, and the mapping of
//! platform error responses to domain errors.

use commercetools_api::resources::category::{Category, CategoryDraft, CategoryUpdateAction};
use commercetools_api::resources::customer::{Customer, CustomerDraft};
use commercetools_api::resources::{LocalizedString, Resource, ResourceError};
use commercetools_api::{ApiUrl, ClientId, ClientSecret, Config, ProjectClient, ProjectKey};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(api_uri: &str) -> ProjectClient {
    let config = Config::builder()
        .project_key(ProjectKey::new("test-project").unwrap())
        .client_id(ClientId::new("test-id").unwrap())
        .client_secret(ClientSecret::new("test-secret").unwrap())
        .api_url(ApiUrl::new(api_uri).unwrap())
        .build()
        .unwrap();
    ProjectClient::new(&config, "test-token")
}

fn category_json(version: u64) -> serde_json::Value {
    serde_json::json!({
        "id": "cat-1",
        "version": version,
        "createdAt": "2024-01-01T00:00:00.000Z",
        "lastModifiedAt": "2024-01-02T00:00:00.000Z",
        "name": {"en": "Shoes"},
        "slug": {"en": "shoes"}
    })
}

// ============================================================================
// Fetch and Query Tests
// ============================================================================

#[tokio::test]
async fn test_by_id_prefixes_project_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test-project/categories/cat-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(category_json(2)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let category = Category::by_id(&client, "cat-1").await.unwrap();

    assert_eq!(category.id, "cat-1");
    assert_eq!(category.name.get("en"), Some("Shoes"));
}

#[tokio::test]
async fn test_by_key_uses_key_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test-project/categories/key=shoes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(category_json(2)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let category = Category::by_key(&client, "shoes").await.unwrap();
    assert_eq!(category.id, "cat-1");
}

#[tokio::test]
async fn test_query_sends_predicate_and_parses_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test-project/categories"))
        .and(query_param("where", r#"slug(en = "shoes")"#))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "offset": 0,
            "limit": 20,
            "count": 1,
            "total": 1,
            "results": [category_json(2)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let query = commercetools_api::queries::ResourceQuery::new()
        .with_predicate(Category::query_model().slug().locale("en").eq("shoes"))
        .with_limit(20);

    let page = Category::query(&client, &query).await.unwrap();
    assert!(page.is_first());
    assert!(page.is_last());
    assert_eq!(page.head().unwrap().id, "cat-1");
}

#[tokio::test]
async fn test_query_without_total_parses_single_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test-project/categories"))
        .and(query_param("withTotal", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "offset": 0,
            "limit": 20,
            "count": 2,
            "results": [category_json(2), category_json(2)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let query = commercetools_api::queries::ResourceQuery::new().with_total(false);

    let page = Category::query(&client, &query).await.unwrap();
    assert_eq!(page.total, None);
    assert_eq!(page.count, 2);
    assert!(page.is_first());
    assert!(page.is_last());
}

// ============================================================================
// Create, Update, Delete Tests
// ============================================================================

#[tokio::test]
async fn test_create_posts_draft() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/test-project/categories"))
        .and(body_partial_json(serde_json::json!({
            "name": {"en": "Shoes"},
            "slug": {"en": "shoes"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(category_json(1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let draft = CategoryDraft::new(
        LocalizedString::of("en", "Shoes"),
        LocalizedString::of("en", "shoes"),
    );

    let category = Category::create(&client, &draft).await.unwrap();
    assert_eq!(category.version, 1);
}

#[tokio::test]
async fn test_update_posts_command_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/test-project/categories/cat-1"))
        .and(body_partial_json(serde_json::json!({
            "version": 2,
            "actions": [{"action": "changeName", "name": {"en": "Boots"}}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(category_json(3)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let updated = Category::update(
        &client,
        "cat-1",
        2,
        vec![CategoryUpdateAction::ChangeName {
            name: LocalizedString::of("en", "Boots"),
        }],
    )
    .await
    .unwrap();

    assert_eq!(updated.version, 3);
}

#[tokio::test]
async fn test_delete_sends_version_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/test-project/categories/cat-1"))
        .and(query_param("version", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(category_json(3)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let deleted = Category::delete(&client, "cat-1", 3).await.unwrap();
    assert_eq!(deleted.id, "cat-1");
}

// ============================================================================
// Error Mapping Tests
// ============================================================================

#[tokio::test]
async fn test_missing_resource_maps_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test-project/categories/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "statusCode": 404,
            "message": "The Resource with ID 'missing' was not found."
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = Category::by_id(&client, "missing").await;

    assert!(matches!(result, Err(ResourceError::NotFound { .. })));
}

#[tokio::test]
async fn test_stale_version_maps_to_concurrent_modification() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/test-project/categories/cat-1"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "statusCode": 409,
            "message": "Object cat-1 has a different version than expected. Expected: 2 - Actual: 5.",
            "errors": [{
                "code": "ConcurrentModification",
                "message": "Object cat-1 has a different version than expected.",
                "currentVersion": 5
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = Category::update(
        &client,
        "cat-1",
        2,
        vec![CategoryUpdateAction::ChangeOrderHint {
            order_hint: "0.9".to_string(),
        }],
    )
    .await;

    match result {
        Err(ResourceError::ConcurrentModification {
            current_version, ..
        }) => assert_eq!(current_version, Some(5)),
        other => panic!("Expected ConcurrentModification, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_draft_maps_to_bad_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/test-project/categories"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "statusCode": 400,
            "message": "A duplicate value '\"shoes\"' exists for field 'slug.en'.",
            "errors": [{
                "code": "DuplicateField",
                "message": "A duplicate value '\"shoes\"' exists for field 'slug.en'."
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let draft = CategoryDraft::new(
        LocalizedString::of("en", "Shoes"),
        LocalizedString::of("en", "shoes"),
    );
    let result = Category::create(&client, &draft).await;

    match result {
        Err(ResourceError::BadRequest { body }) => {
            assert_eq!(body.errors[0].code, "DuplicateField");
        }
        other => panic!("Expected BadRequest, got {other:?}"),
    }
}

// ============================================================================
// Customer Sign-up Tests
// ============================================================================

#[tokio::test]
async fn test_customer_sign_up_returns_sign_in_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/test-project/customers"))
        .and(body_partial_json(serde_json::json!({
            "email": "jo@example.com"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "customer": {
                "id": "cust-1",
                "version": 1,
                "createdAt": "2024-02-01T08:00:00.000Z",
                "lastModifiedAt": "2024-02-01T08:00:00.000Z",
                "email": "jo@example.com",
                "isEmailVerified": false,
                "addresses": []
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let draft = CustomerDraft::new("jo@example.com", "hunter2");

    let result = Customer::sign_up(&client, &draft).await.unwrap();
    assert_eq!(result.customer.email, "jo@example.com");
    assert!(result.cart.is_none());
}
