use super::{CartModifyItemsExt, CartModifyRequestItem};
use crate::client::{Client, Operation};
use crate::constants::CartResponseGroup;
use crate::error::Error;
use crate::types_rs::CartModifyResponse;
use bon::Builder;
use serde::Serialize;

/// 修改购物车中商品的数量，或者在购物车和SavedForLaterItems之间移动
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CartModify<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) client: &'a Client,
    #[builder(field)]
    pub(crate) item: Vec<CartModifyRequestItem>,
    #[builder(default)]
    response_group: Vec<CartResponseGroup>,
    cart_id: &'a str,
    #[serde(rename = "HMAC")]
    hmac: &'a str,
}

impl<S: cart_modify_builder::State> CartModifyItemsExt for CartModifyBuilder<'_, S> {
    fn items_mut(&mut self) -> &mut Vec<CartModifyRequestItem> {
        &mut self.item
    }
}

impl Operation for CartModify<'_> {
    type Response = CartModifyResponse;
    const NAME: &'static str = "CartModify";
}

impl Client {
    pub fn cart_modify(&self) -> CartModifyBuilder<'_> {
        CartModify::builder(self)
    }
}

impl CartModify<'_> {
    pub async fn send(&self) -> Result<CartModifyResponse, Error> {
        self.client.request(self).await
    }
}
