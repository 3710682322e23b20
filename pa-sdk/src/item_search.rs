//! [ItemSearch](https://docs.aws.amazon.com/AWSECommerceService/latest/DG/ItemSearch.html)
//!
//! 按关键字等条件搜索商品，每页最多10个结果，`item_page`范围1~10

use crate::client::{Client, Operation};
use crate::constants::{Condition, ItemResponseGroup, RelationshipType, SearchIndex};
use crate::error::Error;
use crate::types_rs::ItemSearchResponse;
use bon::Builder;
use serde::Serialize;

#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemSearch<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) client: &'a Client,
    /// 为空时API默认为`Small`
    #[builder(default)]
    response_group: Vec<ItemResponseGroup>,
    keywords: Option<&'a str>,
    /// 除了`All`以外，至少需要指定一个其它的搜索条件
    search_index: Option<SearchIndex>,
    actor: Option<&'a str>,
    artist: Option<&'a str>,
    author: Option<&'a str>,
    /// 只能为`Available`
    availability: Option<&'a str>,
    brand: Option<&'a str>,
    browse_node: Option<&'a str>,
    composer: Option<&'a str>,
    condition: Option<Condition>,
    conductor: Option<&'a str>,
    director: Option<&'a str>,
    include_reviews_summary: Option<bool>,
    item_page: Option<u32>,
    manufacturer: Option<&'a str>,
    /// 最小货币单位，如`3241`表示$32.41
    maximum_price: Option<u64>,
    merchant_id: Option<&'a str>,
    minimum_price: Option<u64>,
    min_percentage_off: Option<u32>,
    orchestra: Option<&'a str>,
    power: Option<&'a str>,
    publisher: Option<&'a str>,
    related_item_page: Option<u32>,
    relationship_type: Option<RelationshipType>,
    /// 可选值和SearchIndex、地域有关，如`salesrank`、`-price`
    sort: Option<&'a str>,
    title: Option<&'a str>,
    truncate_reviews_at: Option<u32>,
    variation_page: Option<u32>,
}

impl Operation for ItemSearch<'_> {
    type Response = ItemSearchResponse;
    const NAME: &'static str = "ItemSearch";
}

impl Client {
    pub fn item_search(&self) -> ItemSearchBuilder<'_> {
        ItemSearch::builder(self)
    }
}

impl ItemSearch<'_> {
    pub async fn send(&self) -> Result<ItemSearchResponse, Error> {
        self.client.request(self).await
    }
}
