use crate::model::{Order, User};
use crate::urls::Urls;
use crate::views::ProductView;
use hal_framework::{LinkObject, RawValue, Resource, ResourceType};

pub struct OrderView<'a> {
    pub ty: &'a ResourceType,
    pub urls: &'a Urls,
    pub order: &'a Order,
    /// Source of the `customer` link title.
    pub customer: Option<&'a User>,
    /// Embedded under `product`.
    pub product: Option<ProductView<'a>>,
}

impl Resource for OrderView<'_> {
    fn resource_type(&self) -> &ResourceType {
        self.ty
    }

    fn resolve(&self, field: &str) -> RawValue<'_> {
        match field {
            "self" => self.urls.order(self.order.id).into(),
            "customer" => self.urls.user(self.order.user_id).into(),
            "customer_name" => self.customer.map(|user| user.name.as_str()).into(),
            "invoice" => self
                .order
                .has_invoice()
                .then(|| LinkObject::new(self.urls.invoice(self.order.id)).with_type("application/pdf"))
                .into(),
            "product" => match &self.product {
                Some(product) => RawValue::Nested(product),
                None => RawValue::Null,
            },
            "quantity" => self.order.quantity.into(),
            "total" => self.order.total.into(),
            "status" => serde_json::to_value(self.order.status).ok().into(),
            _ => RawValue::Null,
        }
    }
}
