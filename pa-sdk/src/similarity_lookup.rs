//! [SimilarityLookup](https://docs.aws.amazon.com/AWSECommerceService/latest/DG/SimilarityLookup.html)
//!
//! 查找和指定商品类似的商品，没有结果时返回`AWS.ECommerceService.NoSimilarities`

use crate::client::{Client, Operation};
use crate::constants::{Condition, ItemResponseGroup, SimilarityType};
use crate::error::Error;
use crate::item_lookup::comma_joined;
use crate::types_rs::SimilarityLookupResponse;
use bon::Builder;
use serde::Serialize;

#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimilarityLookup<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) client: &'a Client,
    #[builder(default)]
    response_group: Vec<ItemResponseGroup>,
    /// ASIN，最多10个
    #[serde(serialize_with = "comma_joined")]
    item_id: Vec<&'a str>,
    similarity_type: Option<SimilarityType>,
    condition: Option<Condition>,
    merchant_id: Option<&'a str>,
}

impl Operation for SimilarityLookup<'_> {
    type Response = SimilarityLookupResponse;
    const NAME: &'static str = "SimilarityLookup";
}

impl Client {
    pub fn similarity_lookup(&self) -> SimilarityLookupBuilder<'_> {
        SimilarityLookup::builder(self)
    }
}

impl SimilarityLookup<'_> {
    pub async fn send(&self) -> Result<SimilarityLookupResponse, Error> {
        self.client.request(self).await
    }
}
