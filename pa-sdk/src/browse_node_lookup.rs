//! [BrowseNodeLookup](https://docs.aws.amazon.com/AWSECommerceService/latest/DG/BrowseNodeLookup.html)
//!
//! 返回分类节点的名称、父节点和子节点，以及节点下的热销、新品等

use crate::client::{Client, Operation};
use crate::constants::BrowseNodeResponseGroup;
use crate::error::Error;
use crate::types_rs::BrowseNodeLookupResponse;
use bon::Builder;
use serde::Serialize;

#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BrowseNodeLookup<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) client: &'a Client,
    #[builder(default)]
    response_group: Vec<BrowseNodeResponseGroup>,
    browse_node_id: &'a str,
}

impl Operation for BrowseNodeLookup<'_> {
    type Response = BrowseNodeLookupResponse;
    const NAME: &'static str = "BrowseNodeLookup";
}

impl Client {
    pub fn browse_node_lookup(&self) -> BrowseNodeLookupBuilder<'_> {
        BrowseNodeLookup::builder(self)
    }
}

impl BrowseNodeLookup<'_> {
    pub async fn send(&self) -> Result<BrowseNodeLookupResponse, Error> {
        self.client.request(self).await
    }
}
