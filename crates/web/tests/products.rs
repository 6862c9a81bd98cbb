//! Integration tests for the product CRUD pages.

mod common;

use common::{client, location, spawn_app};
use reqwest::{Client, Response, StatusCode};
use shoplite_core::ProductId;
use shoplite_web::db::ProductRepository;

/// Test helper: submit the create form.
async fn create_product(base: &str, client: &Client, title: &str, price: &str) -> Response {
    client
        .post(format!("{base}/product_create/"))
        .form(&[
            ("title", title),
            ("description", "A test product"),
            ("price", price),
        ])
        .send()
        .await
        .expect("Failed to submit create form")
}

/// Test helper: id of the only product in the database.
async fn sole_product_id(pool: &sqlx::SqlitePool) -> ProductId {
    let products = ProductRepository::new(pool)
        .list()
        .await
        .expect("Failed to list products");
    assert_eq!(products.len(), 1);
    products.first().expect("one product").id
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_form_renders() {
    let (base, _pool) = spawn_app().await;
    let client = client();

    let resp = client
        .get(format!("{base}/product_create/"))
        .send()
        .await
        .expect("Failed to fetch create form");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("name=\"title\""));
    assert!(body.contains("name=\"price\""));
}

#[tokio::test]
async fn test_created_product_appears_in_list() {
    let (base, _pool) = spawn_app().await;
    let client = client();

    let resp = create_product(&base, &client, "Laptop", "999.99").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/product_list/");

    let resp = client
        .get(format!("{base}/product_list/"))
        .send()
        .await
        .expect("Failed to fetch list");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Laptop"));
    assert!(body.contains("$999.99"));
}

#[tokio::test]
async fn test_non_numeric_price_is_rejected_and_nothing_persists() {
    let (base, pool) = spawn_app().await;
    let client = client();

    let resp = create_product(&base, &client, "Laptop", "cheap").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Enter a number."));
    // The submitted values are kept so the user can correct them.
    assert!(body.contains("value=\"Laptop\""));

    let products = ProductRepository::new(&pool)
        .list()
        .await
        .expect("Failed to list products");
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_blank_fields_are_rejected() {
    let (base, pool) = spawn_app().await;
    let client = client();

    let resp = client
        .post(format!("{base}/product_create/"))
        .form(&[("title", ""), ("description", ""), ("price", "")])
        .send()
        .await
        .expect("Failed to submit create form");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("This field is required."));

    let products = ProductRepository::new(&pool)
        .list()
        .await
        .expect("Failed to list products");
    assert!(products.is_empty());
}

// ============================================================================
// Detail
// ============================================================================

#[tokio::test]
async fn test_detail_shows_the_product() {
    let (base, pool) = spawn_app().await;
    let client = client();

    create_product(&base, &client, "Laptop", "999.99").await;
    let id = sole_product_id(&pool).await;

    let resp = client
        .get(format!("{base}/product_detail/{id}"))
        .send()
        .await
        .expect("Failed to fetch detail");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Laptop"));
    assert!(body.contains("A test product"));
    assert!(body.contains("$999.99"));
}

#[tokio::test]
async fn test_detail_of_missing_product_is_404() {
    let (base, _pool) = spawn_app().await;
    let client = client();

    let resp = client
        .get(format!("{base}/product_detail/42"))
        .send()
        .await
        .expect("Failed to fetch detail");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_changes_details_but_never_price() {
    let (base, pool) = spawn_app().await;
    let client = client();

    create_product(&base, &client, "Laptop", "999.99").await;
    let id = sole_product_id(&pool).await;

    let resp = client
        .post(format!("{base}/product_update/{id}"))
        .form(&[
            ("title", "Gaming laptop"),
            ("description", "Now with RGB"),
            // An extra price field must be ignored by the update path.
            ("price", "1.00"),
        ])
        .send()
        .await
        .expect("Failed to submit update form");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), format!("/product_detail/{id}"));

    let updated = ProductRepository::new(&pool)
        .get(id)
        .await
        .expect("Failed to fetch product")
        .expect("Product should exist");
    assert_eq!(updated.title, "Gaming laptop");
    assert_eq!(updated.description, "Now with RGB");
    assert_eq!(updated.price.to_string(), "999.99");
}

#[tokio::test]
async fn test_update_form_is_prefilled() {
    let (base, pool) = spawn_app().await;
    let client = client();

    create_product(&base, &client, "Laptop", "999.99").await;
    let id = sole_product_id(&pool).await;

    let resp = client
        .get(format!("{base}/product_update/{id}"))
        .send()
        .await
        .expect("Failed to fetch update form");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("value=\"Laptop\""));
    assert!(body.contains("A test product"));
    // The form has no price input.
    assert!(!body.contains("name=\"price\""));
}

#[tokio::test]
async fn test_update_of_missing_product_is_404() {
    let (base, _pool) = spawn_app().await;
    let client = client();

    let resp = client
        .get(format!("{base}/product_update/42"))
        .send()
        .await
        .expect("Failed to fetch update form");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .post(format!("{base}/product_update/42"))
        .form(&[("title", "Ghost"), ("description", "Nothing here")])
        .send()
        .await
        .expect("Failed to submit update form");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_blank_title_rerenders_with_error() {
    let (base, pool) = spawn_app().await;
    let client = client();

    create_product(&base, &client, "Laptop", "999.99").await;
    let id = sole_product_id(&pool).await;

    let resp = client
        .post(format!("{base}/product_update/{id}"))
        .form(&[("title", ""), ("description", "Still a laptop")])
        .send()
        .await
        .expect("Failed to submit update form");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("This field is required."));

    let unchanged = ProductRepository::new(&pool)
        .get(id)
        .await
        .expect("Failed to fetch product")
        .expect("Product should exist");
    assert_eq!(unchanged.title, "Laptop");
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_asks_for_confirmation_then_deletes() {
    let (base, pool) = spawn_app().await;
    let client = client();

    create_product(&base, &client, "Laptop", "999.99").await;
    let id = sole_product_id(&pool).await;

    // Phase one: GET renders a confirmation page and deletes nothing.
    let resp = client
        .get(format!("{base}/product_delete/{id}"))
        .send()
        .await
        .expect("Failed to fetch confirmation page");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Are you sure you want to delete"));
    assert!(body.contains("Laptop"));

    let repo = ProductRepository::new(&pool);
    assert!(repo.get(id).await.expect("Failed to fetch").is_some());

    // Phase two: POST deletes and redirects to the list with a notice.
    let resp = client
        .post(format!("{base}/product_delete/{id}"))
        .send()
        .await
        .expect("Failed to submit delete");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/product_list/?success=deleted");

    let resp = client
        .get(format!("{base}/product_list/?success=deleted"))
        .send()
        .await
        .expect("Failed to fetch list");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("The object was deleted successfully."));
    assert!(!body.contains("product_detail"));

    assert!(repo.get(id).await.expect("Failed to fetch").is_none());
    let resp = client
        .get(format!("{base}/product_detail/{id}"))
        .send()
        .await
        .expect("Failed to fetch detail");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_of_missing_product_is_404() {
    let (base, _pool) = spawn_app().await;
    let client = client();

    let resp = client
        .post(format!("{base}/product_delete/42"))
        .send()
        .await
        .expect("Failed to submit delete");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Class-based aliases
// ============================================================================

#[tokio::test]
async fn test_class_aliases_serve_the_same_pages() {
    let (base, pool) = spawn_app().await;
    let client = client();

    let resp = client
        .post(format!("{base}/class_product_create/"))
        .form(&[
            ("title", "Keyboard"),
            ("description", "Clicky"),
            ("price", "49.50"),
        ])
        .send()
        .await
        .expect("Failed to submit create form");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let id = sole_product_id(&pool).await;

    for path in [
        "/class_product_list/".to_string(),
        format!("/class_product_detail/{id}"),
        format!("/class_product_update/{id}"),
        format!("/class_product_delete/{id}"),
    ] {
        let resp = client
            .get(format!("{base}{path}"))
            .send()
            .await
            .expect("Failed to fetch alias route");
        assert_eq!(resp.status(), StatusCode::OK, "GET {path}");
        assert!(
            resp.text()
                .await
                .expect("Failed to read body")
                .contains("Keyboard"),
            "{path} should show the product"
        );
    }
}
