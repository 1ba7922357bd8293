use crate::model::Product;
use crate::urls::Urls;
use hal_framework::{LinkObject, RawValue, Resource, ResourceType};

pub struct ProductView<'a> {
    pub ty: &'a ResourceType,
    pub urls: &'a Urls,
    pub product: &'a Product,
}

impl ProductView<'_> {
    fn image_link(&self, file_name: &str) -> LinkObject {
        let link = LinkObject::new(self.urls.product_image(file_name));
        match image_media_type(file_name) {
            Some(media_type) => link.with_type(media_type),
            None => link,
        }
    }
}

fn image_media_type(file_name: &str) -> Option<&'static str> {
    let (_, extension) = file_name.rsplit_once('.')?;
    match extension.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

impl Resource for ProductView<'_> {
    fn resource_type(&self) -> &ResourceType {
        self.ty
    }

    fn resolve(&self, field: &str) -> RawValue<'_> {
        match field {
            "self" => self.urls.product(self.product.id).into(),
            "image" => self
                .product
                .image
                .as_deref()
                .map(|file_name| self.image_link(file_name))
                .into(),
            "name" => self.product.name.as_str().into(),
            "price" => self.product.price.into(),
            "availability" => serde_json::to_value(self.product.availability()).ok().into(),
            _ => RawValue::Null,
        }
    }
}
