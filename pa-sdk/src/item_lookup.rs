//! [ItemLookup](https://docs.aws.amazon.com/AWSECommerceService/latest/DG/ItemLookup.html)

use crate::client::{Client, Operation};
use crate::constants::{Condition, IdType, ItemResponseGroup, RelationshipType, SearchIndex};
use crate::error::Error;
use crate::types_rs::ItemLookupResponse;
use bon::Builder;
use serde::{Serialize, Serializer};

#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemLookup<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) client: &'a Client,
    #[builder(default)]
    response_group: Vec<ItemResponseGroup>,
    /// 最多10个，请求中使用逗号拼接
    #[serde(serialize_with = "comma_joined")]
    item_id: Vec<&'a str>,
    /// 默认为`ASIN`，不是`ASIN`时需要指定`search_index`
    id_type: Option<IdType>,
    search_index: Option<SearchIndex>,
    condition: Option<Condition>,
    include_reviews_summary: Option<bool>,
    merchant_id: Option<&'a str>,
    related_item_page: Option<u32>,
    relationship_type: Option<RelationshipType>,
    truncate_reviews_at: Option<u32>,
    variation_page: Option<u32>,
}

// ItemId是一个参数而不是`ItemId.1`、`ItemId.2`…
pub(crate) fn comma_joined<S>(ids: &[&str], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if ids.is_empty() {
        return serializer.serialize_none();
    }
    serializer.serialize_str(&ids.join(","))
}

impl Operation for ItemLookup<'_> {
    type Response = ItemLookupResponse;
    const NAME: &'static str = "ItemLookup";
}

impl Client {
    pub fn item_lookup(&self) -> ItemLookupBuilder<'_> {
        ItemLookup::builder(self)
    }
}

impl ItemLookup<'_> {
    pub async fn send(&self) -> Result<ItemLookupResponse, Error> {
        self.client.request(self).await
    }
}
