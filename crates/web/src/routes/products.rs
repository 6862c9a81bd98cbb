//! Product CRUD pages.
//!
//! Validation failures re-render the submitted form with per-field errors;
//! successful writes redirect, so a refresh never repeats the mutation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use shoplite_core::{Price, PriceError, ProductId};
use tracing::instrument;

use crate::db::ProductRepository;
use crate::db::products::NewProduct;
use crate::error::{AppError, Result};
use crate::filters;
use crate::models::Product;
use crate::state::AppState;

use super::REQUIRED_FIELD;

/// Validation message for a price that does not parse as a number.
const INVALID_NUMBER: &str = "Enter a number.";
/// Notice shown on the list page after a delete.
const DELETED_NOTICE: &str = "The object was deleted successfully.";

// ============================================================================
// Templates
// ============================================================================

#[derive(Template, WebTemplate)]
#[template(path = "products/list.html")]
struct ProductListTemplate {
    products: Vec<Product>,
    notice: Option<&'static str>,
}

#[derive(Template, WebTemplate)]
#[template(path = "products/detail.html")]
struct ProductDetailTemplate {
    product: Product,
}

#[derive(Template, WebTemplate)]
#[template(path = "products/form.html")]
struct ProductFormTemplate {
    form: ProductForm,
    errors: ProductFormErrors,
}

#[derive(Template, WebTemplate)]
#[template(path = "products/update_form.html")]
struct ProductUpdateTemplate {
    product: Product,
    form: ProductUpdateForm,
    errors: ProductUpdateErrors,
}

#[derive(Template, WebTemplate)]
#[template(path = "products/confirm_delete.html")]
struct ProductDeleteTemplate {
    product: Product,
}

// ============================================================================
// Forms
// ============================================================================

/// Raw create-form submission.
#[derive(Debug, Default, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
}

/// Per-field validation errors for the create form.
#[derive(Debug, Default)]
pub struct ProductFormErrors {
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
    pub price: Option<&'static str>,
}

impl ProductFormErrors {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.price.is_none()
    }
}

impl ProductForm {
    /// Validate the submission, yielding the fields to persist.
    fn validate(&self) -> std::result::Result<NewProduct, ProductFormErrors> {
        let mut errors = ProductFormErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.title = Some(REQUIRED_FIELD);
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.description = Some(REQUIRED_FIELD);
        }

        let price = match Price::parse(&self.price) {
            Ok(price) => Some(price),
            Err(PriceError::Empty) => {
                errors.price = Some(REQUIRED_FIELD);
                None
            }
            Err(PriceError::Invalid) => {
                errors.price = Some(INVALID_NUMBER);
                None
            }
        };

        match price {
            Some(price) if errors.is_empty() => Ok(NewProduct {
                title: title.to_string(),
                description: description.to_string(),
                price,
            }),
            _ => Err(errors),
        }
    }
}

/// Raw update-form submission.
///
/// There is no price field: the price is fixed at creation.
#[derive(Debug, Default, Deserialize)]
pub struct ProductUpdateForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Per-field validation errors for the update form.
#[derive(Debug, Default)]
pub struct ProductUpdateErrors {
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl ProductUpdateForm {
    /// Validate the submission, yielding trimmed title and description.
    fn validate(&self) -> std::result::Result<(String, String), ProductUpdateErrors> {
        let mut errors = ProductUpdateErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.title = Some(REQUIRED_FIELD);
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.description = Some(REQUIRED_FIELD);
        }

        if errors.title.is_none() && errors.description.is_none() {
            Ok((title.to_string(), description.to_string()))
        } else {
            Err(errors)
        }
    }
}

/// Query parameters carrying a one-shot notice code across a redirect.
#[derive(Debug, Default, Deserialize)]
pub struct MessageQuery {
    pub success: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /product_list/
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
) -> Result<Response> {
    let products = ProductRepository::new(state.pool()).list().await?;

    let notice = match query.success.as_deref() {
        Some("deleted") => Some(DELETED_NOTICE),
        _ => None,
    };

    Ok(ProductListTemplate { products, notice }.into_response())
}

/// GET /product_detail/{id}
#[instrument(skip(state))]
pub async fn detail(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response> {
    let product = get_product_or_404(&state, id).await?;
    Ok(ProductDetailTemplate { product }.into_response())
}

/// GET /product_create/
pub async fn create_form() -> Response {
    ProductFormTemplate {
        form: ProductForm::default(),
        errors: ProductFormErrors::default(),
    }
    .into_response()
}

/// POST /product_create/
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    match form.validate() {
        Ok(new) => {
            let product = ProductRepository::new(state.pool()).create(new).await?;
            tracing::info!(product_id = %product.id, "created product");
            Ok(Redirect::to("/product_list/").into_response())
        }
        Err(errors) => Ok(ProductFormTemplate { form, errors }.into_response()),
    }
}

/// GET /product_update/{id}
#[instrument(skip(state))]
pub async fn update_form(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response> {
    let product = get_product_or_404(&state, id).await?;

    let form = ProductUpdateForm {
        title: product.title.clone(),
        description: product.description.clone(),
    };

    Ok(ProductUpdateTemplate {
        product,
        form,
        errors: ProductUpdateErrors::default(),
    }
    .into_response())
}

/// POST /product_update/{id}
#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ProductUpdateForm>,
) -> Result<Response> {
    let product = get_product_or_404(&state, id).await?;

    match form.validate() {
        Ok((title, description)) => {
            ProductRepository::new(state.pool())
                .update_details(product.id, &title, &description)
                .await?;
            tracing::info!(product_id = %product.id, "updated product");
            Ok(Redirect::to(&format!("/product_detail/{id}")).into_response())
        }
        Err(errors) => Ok(ProductUpdateTemplate {
            product,
            form,
            errors,
        }
        .into_response()),
    }
}

/// GET /product_delete/{id}
#[instrument(skip(state))]
pub async fn confirm_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response> {
    let product = get_product_or_404(&state, id).await?;
    Ok(ProductDeleteTemplate { product }.into_response())
}

/// POST /product_delete/{id}
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response> {
    ProductRepository::new(state.pool())
        .delete(ProductId::new(id))
        .await?;
    tracing::info!(product_id = id, "deleted product");

    Ok(Redirect::to("/product_list/?success=deleted").into_response())
}

/// Fetch a product or fail with a 404.
async fn get_product_or_404(state: &AppState, id: i64) -> Result<Product> {
    ProductRepository::new(state.pool())
        .get(ProductId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, description: &str, price: &str) -> ProductForm {
        ProductForm {
            title: title.to_string(),
            description: description.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn valid_form_yields_trimmed_fields() {
        let new = form("  Laptop  ", " A laptop ", "999.99")
            .validate()
            .expect("valid");
        assert_eq!(new.title, "Laptop");
        assert_eq!(new.description, "A laptop");
        assert_eq!(new.price, Price::parse("999.99").expect("valid price"));
    }

    #[test]
    fn blank_fields_are_required() {
        let errors = form("", "   ", "").validate().expect_err("invalid");
        assert_eq!(errors.title, Some(REQUIRED_FIELD));
        assert_eq!(errors.description, Some(REQUIRED_FIELD));
        assert_eq!(errors.price, Some(REQUIRED_FIELD));
    }

    #[test]
    fn non_numeric_price_is_an_error() {
        let errors = form("Laptop", "A laptop", "cheap")
            .validate()
            .expect_err("invalid");
        assert_eq!(errors.title, None);
        assert_eq!(errors.price, Some(INVALID_NUMBER));
    }

    #[test]
    fn update_form_requires_both_fields() {
        let errors = ProductUpdateForm {
            title: String::new(),
            description: "still here".to_string(),
        }
        .validate()
        .expect_err("invalid");
        assert_eq!(errors.title, Some(REQUIRED_FIELD));
        assert_eq!(errors.description, None);
    }
}
