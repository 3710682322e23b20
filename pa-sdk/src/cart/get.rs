use crate::client::{Client, Operation};
use crate::constants::CartResponseGroup;
use crate::error::Error;
use crate::types_rs::CartGetResponse;
use bon::Builder;
use serde::Serialize;

/// 获取购物车内容
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CartGet<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) client: &'a Client,
    #[builder(default)]
    response_group: Vec<CartResponseGroup>,
    cart_id: &'a str,
    #[serde(rename = "HMAC")]
    hmac: &'a str,
    /// 购物车中任一商品的CartItemId
    cart_item_id: Option<&'a str>,
}

impl Operation for CartGet<'_> {
    type Response = CartGetResponse;
    const NAME: &'static str = "CartGet";
}

impl Client {
    pub fn cart_get(&self) -> CartGetBuilder<'_> {
        CartGet::builder(self)
    }
}

impl CartGet<'_> {
    pub async fn send(&self) -> Result<CartGetResponse, Error> {
        self.client.request(self).await
    }
}
