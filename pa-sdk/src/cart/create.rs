use super::{CartItemsExt, CartRequestItem};
use crate::client::{Client, Operation};
use crate::constants::CartResponseGroup;
use crate::error::Error;
use crate::types_rs::CartCreateResponse;
use bon::Builder;
use serde::Serialize;

/// 创建购物车，同时添加商品
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CartCreate<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) client: &'a Client,
    // 通过CartItemsExt添加
    #[builder(field)]
    pub(crate) item: Vec<CartRequestItem>,
    #[builder(default)]
    response_group: Vec<CartResponseGroup>,
}

impl<S: cart_create_builder::State> CartItemsExt for CartCreateBuilder<'_, S> {
    fn items_mut(&mut self) -> &mut Vec<CartRequestItem> {
        &mut self.item
    }
}

impl Operation for CartCreate<'_> {
    type Response = CartCreateResponse;
    const NAME: &'static str = "CartCreate";
}

impl Client {
    pub fn cart_create(&self) -> CartCreateBuilder<'_> {
        CartCreate::builder(self)
    }
}

impl CartCreate<'_> {
    pub async fn send(&self) -> Result<CartCreateResponse, Error> {
        self.client.request(self).await
    }
}
