//! # HAL Sample
//!
//! A small catalog API (users, products, orders) rendered as HAL documents.
//!
//! ## Core Components
//!
//! - **model**: Pure data structures ([`User`](hal_sample::model::User), [`Product`](hal_sample::model::Product), [`Order`](hal_sample::model::Order)).
//! - **views**: [`Resource`](hal_framework::Resource) implementations over the models.
//! - **registry**: The resource types, declared and validated once at startup.
//! - **lifecycle**: [`CatalogApi`](hal_sample::lifecycle::CatalogApi), the service answering requests.
//!
//! ## Quick Start
//!
//! The application entry point is in [`main`], which demonstrates:
//! 1.  Setting up the [`CatalogApi`](hal_sample::lifecycle::CatalogApi).
//! 2.  Creating users and products.
//! 3.  Placing an order and printing its document and a paginated list.

use hal_framework::tracing::setup_tracing;
use hal_framework::HAL_MEDIA_TYPE;
use hal_sample::error::ApiError;
use hal_sample::lifecycle::CatalogApi;
use hal_sample::model::{OrderCreate, ProductCreate, UserCreate};
use hal_sample::urls::Urls;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting sample catalog API");
    let api = CatalogApi::new(Urls::new("http://localhost:8000/api"))?;

    let span = tracing::info_span!("seed");
    let (alice, widget) = async {
        let alice = api
            .create_user(UserCreate {
                name: "Alice".to_string(),
                email: Some("alice@example.com".to_string()),
            })
            .await;
        api.create_user(UserCreate {
            name: "Bob".to_string(),
            email: None,
        })
        .await;
        let widget = api
            .create_product(ProductCreate {
                name: "Widget".to_string(),
                price: 25.5,
                quantity: 100,
                image: Some("widget.png".to_string()),
            })
            .await;
        (alice, widget)
    }
    .instrument(span)
    .await;

    let order_id = api
        .create_order(OrderCreate {
            user_id: alice,
            product_id: widget,
            quantity: 2,
        })
        .await?;
    api.mark_paid(order_id).await?;
    info!(order_id = %order_id, "Order placed");

    let span = tracing::info_span!("render", media_type = HAL_MEDIA_TYPE);
    async {
        let order = api.get_order(order_id).await?;
        println!("{}", order.to_json_pretty()?);

        let users = api.list_users(1, "http://localhost:8000/api/users").await?;
        println!("{}", users.to_json_pretty()?);
        Ok::<_, ApiError>(())
    }
    .instrument(span)
    .await?;

    info!("Sample completed successfully");
    Ok(())
}
