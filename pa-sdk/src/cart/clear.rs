use crate::client::{Client, Operation};
use crate::constants::CartResponseGroup;
use crate::error::Error;
use crate::types_rs::CartClearResponse;
use bon::Builder;
use serde::Serialize;

/// 清空购物车，CartId和HMAC仍然有效
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CartClear<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) client: &'a Client,
    #[builder(default)]
    response_group: Vec<CartResponseGroup>,
    cart_id: &'a str,
    #[serde(rename = "HMAC")]
    hmac: &'a str,
}

impl Operation for CartClear<'_> {
    type Response = CartClearResponse;
    const NAME: &'static str = "CartClear";
}

impl Client {
    pub fn cart_clear(&self) -> CartClearBuilder<'_> {
        CartClear::builder(self)
    }
}

impl CartClear<'_> {
    pub async fn send(&self) -> Result<CartClearResponse, Error> {
        self.client.request(self).await
    }
}
