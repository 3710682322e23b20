use super::{CartItemsExt, CartRequestItem};
use crate::client::{Client, Operation};
use crate::constants::CartResponseGroup;
use crate::error::Error;
use crate::types_rs::CartAddResponse;
use bon::Builder;
use serde::Serialize;

/// 向已有的购物车添加商品，已在购物车中的商品返回`AWS.ECommerceService.ItemAlreadyInCart`
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CartAdd<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) client: &'a Client,
    #[builder(field)]
    pub(crate) item: Vec<CartRequestItem>,
    #[builder(default)]
    response_group: Vec<CartResponseGroup>,
    cart_id: &'a str,
    #[serde(rename = "HMAC")]
    hmac: &'a str,
}

impl<S: cart_add_builder::State> CartItemsExt for CartAddBuilder<'_, S> {
    fn items_mut(&mut self) -> &mut Vec<CartRequestItem> {
        &mut self.item
    }
}

impl Operation for CartAdd<'_> {
    type Response = CartAddResponse;
    const NAME: &'static str = "CartAdd";
}

impl Client {
    pub fn cart_add(&self) -> CartAddBuilder<'_> {
        CartAdd::builder(self)
    }
}

impl CartAdd<'_> {
    pub async fn send(&self) -> Result<CartAddResponse, Error> {
        self.client.request(self).await
    }
}
