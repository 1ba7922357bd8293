use crate::error::ApiError;
use crate::model::{
    Order, OrderCreate, OrderId, OrderStatus, Product, ProductCreate, ProductId, User, UserCreate,
    UserId,
};
use crate::registry::Registry;
use crate::urls::Urls;
use crate::views::{OrderView, ProductView, UserView};
use hal_framework::{
    wrap_with, CursorPagination, Document, HalConfig, LimitOffsetPagination, PageNumberPagination,
    Renderer,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

/// Read-only state shared by every request and every rendering task.
struct Shared {
    registry: Registry,
    renderer: Renderer,
    urls: Urls,
}

#[derive(Default)]
struct Store {
    users: BTreeMap<UserId, User>,
    products: BTreeMap<ProductId, Product>,
    orders: BTreeMap<OrderId, Order>,
}

/// An order together with the records its document draws on.
struct OrderRecord {
    order: Order,
    customer: Option<User>,
    product: Option<Product>,
}

/// The sample catalog API: an in-memory store of users, products and orders,
/// served as HAL documents.
///
/// Cloning is cheap; clones share the same store and registry.
///
/// # Example
///
/// ```rust
/// use hal_sample::lifecycle::CatalogApi;
/// use hal_sample::model::UserCreate;
/// use hal_sample::urls::Urls;
///
/// #[tokio::main]
/// async fn main() -> Result<(), hal_sample::error::ApiError> {
///     let api = CatalogApi::new(Urls::new("http://api.test"))?;
///     let id = api
///         .create_user(UserCreate { name: "Alice".into(), email: None })
///         .await;
///
///     let document = api.get_user(id).await?;
///     assert_eq!(document.self_href(), Some("http://api.test/users/1"));
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CatalogApi {
    shared: Arc<Shared>,
    store: Arc<RwLock<Store>>,
}

impl CatalogApi {
    /// Registers every resource type with the default configuration.
    pub fn new(urls: Urls) -> Result<Self, ApiError> {
        Self::with_config(urls, HalConfig::default())
    }

    pub fn with_config(urls: Urls, config: HalConfig) -> Result<Self, ApiError> {
        let registry = Registry::new()?;
        info!(base = urls.base(), max_depth = config.max_depth, "Catalog API ready");
        Ok(Self {
            shared: Arc::new(Shared {
                registry,
                renderer: Renderer::new(config),
                urls,
            }),
            store: Arc::new(RwLock::new(Store::default())),
        })
    }

    pub fn config(&self) -> &HalConfig {
        self.shared.renderer.config()
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> UserId {
        let mut store = self.store.write().await;
        let id = UserId(store.users.len() as u32 + 1);
        store.users.insert(id, User::new(id, params));
        debug!(%id, "User created");
        id
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> ProductId {
        let mut store = self.store.write().await;
        let id = ProductId(store.products.len() as u32 + 1);
        store.products.insert(id, Product::new(id, params));
        debug!(%id, "Product created");
        id
    }

    /// Places an order. The user and the product must exist.
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, ApiError> {
        let mut store = self.store.write().await;
        if !store.users.contains_key(&params.user_id) {
            return Err(ApiError::NotFound {
                kind: "User",
                id: params.user_id.0,
            });
        }
        let unit_price = store
            .products
            .get(&params.product_id)
            .map(|product| product.price)
            .ok_or(ApiError::NotFound {
                kind: "Product",
                id: params.product_id.0,
            })?;

        let id = OrderId(store.orders.len() as u32 + 1);
        store.orders.insert(id, Order::new(id, params, unit_price));
        debug!(%id, "Order created");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn mark_paid(&self, id: OrderId) -> Result<(), ApiError> {
        let mut store = self.store.write().await;
        let order = store.orders.get_mut(&id).ok_or(ApiError::NotFound {
            kind: "Order",
            id: id.0,
        })?;
        order.status = OrderStatus::Paid;
        Ok(())
    }

    pub async fn get_user(&self, id: UserId) -> Result<Document, ApiError> {
        let record = {
            let store = self.store.read().await;
            let user = store.users.get(&id).cloned().ok_or(ApiError::NotFound {
                kind: "User",
                id: id.0,
            })?;
            (user, orders_of(&store, id))
        };
        Ok(render_user(&self.shared, record))
    }

    pub async fn get_product(&self, id: ProductId) -> Result<Document, ApiError> {
        let store = self.store.read().await;
        let product = store.products.get(&id).ok_or(ApiError::NotFound {
            kind: "Product",
            id: id.0,
        })?;
        Ok(render_product(&self.shared, product.clone()))
    }

    pub async fn get_order(&self, id: OrderId) -> Result<Document, ApiError> {
        let record = {
            let store = self.store.read().await;
            let order = store.orders.get(&id).ok_or(ApiError::NotFound {
                kind: "Order",
                id: id.0,
            })?;
            order_record(&store, order)
        };
        Ok(render_order(&self.shared, record))
    }

    /// `GET /users?page=n`
    #[instrument(skip(self))]
    pub async fn list_users(&self, page: u64, request_url: &str) -> Result<Document, ApiError> {
        let paginator = PageNumberPagination::from_config(&self.config().pagination);
        let (records, info) = {
            let store = self.store.read().await;
            let users: Vec<&User> = store.users.values().collect();
            let window = paginator.paginate(&users, page, request_url)?;
            let records: Vec<(User, Vec<OrderId>)> = window
                .items
                .iter()
                .map(|user| ((*user).clone(), orders_of(&store, user.id)))
                .collect();
            (records, window.info)
        };

        let items = self.render_all(records, render_user).await?;
        Ok(wrap_with(self.config(), items, request_url, Some(&info)))
    }

    /// `GET /orders?limit=n&offset=m`
    #[instrument(skip(self))]
    pub async fn list_orders(
        &self,
        limit: Option<u64>,
        offset: u64,
        request_url: &str,
    ) -> Result<Document, ApiError> {
        let paginator = LimitOffsetPagination::from_config(&self.config().pagination);
        let (records, info) = {
            let store = self.store.read().await;
            let orders: Vec<&Order> = store.orders.values().collect();
            let window = paginator.paginate(&orders, limit, offset, request_url)?;
            let records: Vec<OrderRecord> = window
                .items
                .iter()
                .map(|order| order_record(&store, order))
                .collect();
            (records, window.info)
        };

        let items = self.render_all(records, render_order).await?;
        Ok(wrap_with(self.config(), items, request_url, Some(&info)))
    }

    /// `GET /products?cursor=c`
    ///
    /// The cursor is the id of the first product of the requested window.
    #[instrument(skip(self))]
    pub async fn list_products(&self, cursor: Option<&str>) -> Result<Document, ApiError> {
        let page_size = self
            .config()
            .pagination
            .page_size
            .min(self.config().pagination.max_page_size)
            .max(1) as usize;
        let start_id = match cursor {
            Some(cursor) => cursor
                .parse::<u32>()
                .map_err(|_| ApiError::InvalidCursor(cursor.to_string()))?,
            None => 0,
        };

        let (window, next, previous) = {
            let store = self.store.read().await;
            let products: Vec<&Product> = store.products.values().collect();
            let start = products.partition_point(|product| product.id.0 < start_id);
            let end = (start + page_size).min(products.len());
            let next = products.get(end).map(|product| product.id.0.to_string());
            let previous = (start > 0)
                .then(|| products[start.saturating_sub(page_size)].id.0.to_string());
            let window: Vec<Product> = products[start..end]
                .iter()
                .map(|product| (*product).clone())
                .collect();
            (window, next, previous)
        };

        let base_url = self.shared.urls.products();
        let info = CursorPagination::from_config(&self.config().pagination).paginate(
            &base_url,
            next.as_deref(),
            previous.as_deref(),
        );
        let items = self.render_all(window, render_product).await?;
        Ok(wrap_with(self.config(), items, &base_url, Some(&info)))
    }

    /// Renders every record on its own blocking task, keeping their order.
    async fn render_all<T>(
        &self,
        records: Vec<T>,
        render: fn(&Shared, T) -> Document,
    ) -> Result<Vec<Document>, ApiError>
    where
        T: Send + 'static,
    {
        let handles: Vec<_> = records
            .into_iter()
            .map(|record| {
                let shared = Arc::clone(&self.shared);
                tokio::task::spawn_blocking(move || render(&shared, record))
            })
            .collect();

        let mut documents = Vec::with_capacity(handles.len());
        for handle in handles {
            documents.push(handle.await?);
        }
        debug!(items = documents.len(), "Rendered collection items");
        Ok(documents)
    }
}

fn orders_of(store: &Store, user_id: UserId) -> Vec<OrderId> {
    store
        .orders
        .values()
        .filter(|order| order.user_id == user_id)
        .map(|order| order.id)
        .collect()
}

fn order_record(store: &Store, order: &Order) -> OrderRecord {
    OrderRecord {
        order: order.clone(),
        customer: store.users.get(&order.user_id).cloned(),
        product: store.products.get(&order.product_id).cloned(),
    }
}

fn render_user(shared: &Shared, (user, orders): (User, Vec<OrderId>)) -> Document {
    shared.renderer.render(&UserView {
        ty: &shared.registry.user,
        urls: &shared.urls,
        user: &user,
        orders,
    })
}

fn render_product(shared: &Shared, product: Product) -> Document {
    shared.renderer.render(&ProductView {
        ty: &shared.registry.product,
        urls: &shared.urls,
        product: &product,
    })
}

fn render_order(shared: &Shared, record: OrderRecord) -> Document {
    let product = record.product.as_ref().map(|product| ProductView {
        ty: &shared.registry.product,
        urls: &shared.urls,
        product,
    });
    shared.renderer.render(&OrderView {
        ty: &shared.registry.order,
        urls: &shared.urls,
        order: &record.order,
        customer: record.customer.as_ref(),
        product,
    })
}
