use crate::model::{OrderId, User};
use crate::urls::Urls;
use hal_framework::{RawValue, Resource, ResourceType};

pub struct UserView<'a> {
    pub ty: &'a ResourceType,
    pub urls: &'a Urls,
    pub user: &'a User,
    /// Orders placed by the user, linked under `orders`.
    pub orders: Vec<OrderId>,
}

impl Resource for UserView<'_> {
    fn resource_type(&self) -> &ResourceType {
        self.ty
    }

    fn resolve(&self, field: &str) -> RawValue<'_> {
        match field {
            "self" => self.urls.user(self.user.id).into(),
            "name" => self.user.name.as_str().into(),
            "email" => self.user.email.as_deref().into(),
            "orders" => RawValue::list(self.orders.iter().map(|id| self.urls.order(*id))),
            _ => RawValue::Null,
        }
    }
}
