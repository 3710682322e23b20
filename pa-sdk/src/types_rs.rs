//! 响应的xml结构
//!
//! 所有结构都带有`#[serde(default)]`，xml中没有的节点取默认值。

use crate::client::OperationResponse;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

// 布尔值在不同节点中有`True`/`true`/`1`几种写法
fn de_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.trim() {
        "True" | "true" | "1" => Ok(true),
        "False" | "false" | "0" | "" => Ok(false),
        other => Err(D::Error::custom(format!("invalid bool value: {other}"))),
    }
}

// region:    --- Request
/// 每个响应中都会返回的请求信息，`errors`不为空表示请求失败
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "PascalCase", default)]
pub struct Request {
    #[serde(deserialize_with = "de_bool")]
    pub is_valid: bool,
    pub errors: Option<Errors>,
}

impl Request {
    /// 第一个Code不为空的错误
    pub fn first_error(&self) -> Option<&ErrorItem> {
        self.errors
            .as_ref()?
            .error
            .iter()
            .find(|e| !e.code.is_empty())
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "PascalCase", default)]
pub struct Errors {
    #[serde(rename = "Error")]
    pub error: Vec<ErrorItem>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct ErrorItem {
    pub code: String,
    pub message: String,
}
// endregion: --- Request

// region:    --- Items
/// ItemSearch、ItemLookup、SimilarityLookup的响应，根元素分别为`<Operation>Response`
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct ItemsResponse {
    pub items: Items,
}

impl OperationResponse for ItemsResponse {
    fn request(&self) -> Option<&Request> {
        Some(&self.items.request)
    }
}

pub type ItemSearchResponse = ItemsResponse;
pub type ItemLookupResponse = ItemsResponse;
pub type SimilarityLookupResponse = ItemsResponse;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Items {
    pub request: Request,
    pub total_results: u32,
    pub total_pages: u32,
    #[serde(rename = "MoreSearchResultsUrl")]
    pub more_search_results_url: String,
    pub item: Vec<Item>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Item {
    #[serde(rename = "ASIN")]
    pub asin: String,
    #[serde(rename = "ParentASIN")]
    pub parent_asin: Option<String>,
    #[serde(rename = "DetailPageURL")]
    pub detail_page_url: String,
    pub sales_rank: Option<u64>,
    pub item_links: ItemLinks,
    pub small_image: Option<Image>,
    pub medium_image: Option<Image>,
    pub large_image: Option<Image>,
    pub image_sets: ImageSets,
    pub item_attributes: ItemAttributes,
    pub offer_summary: Option<OfferSummary>,
    pub offers: Option<Offers>,
    pub customer_reviews: Option<CustomerReviews>,
    pub similar_products: SimilarProducts,
    pub browse_nodes: BrowseNodes,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct ItemLinks {
    pub item_link: Vec<ItemLink>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct ItemLink {
    pub description: String,
    #[serde(rename = "URL")]
    pub url: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Image {
    #[serde(rename = "URL")]
    pub url: String,
    pub height: Size,
    pub width: Size,
}

/// `<Height Units="pixels">75</Height>`
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Size {
    #[serde(rename = "$text")]
    pub value: f64,
    #[serde(rename = "@Units")]
    pub units: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImageSets {
    pub image_set: Vec<ImageSet>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImageSet {
    #[serde(rename = "@Category")]
    pub category: String,
    pub swatch_image: Option<Image>,
    pub small_image: Option<Image>,
    pub thumbnail_image: Option<Image>,
    pub tiny_image: Option<Image>,
    pub medium_image: Option<Image>,
    pub large_image: Option<Image>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct ItemAttributes {
    pub author: Vec<String>,
    pub binding: String,
    pub creator: Vec<Creator>,
    #[serde(rename = "EAN")]
    pub ean: String,
    #[serde(rename = "EANList")]
    pub ean_list: EanList,
    #[serde(deserialize_with = "de_bool")]
    pub is_adult_product: bool,
    #[serde(rename = "ISBN")]
    pub isbn: String,
    pub label: String,
    pub languages: Languages,
    pub list_price: Option<Price>,
    pub manufacturer: String,
    pub number_of_pages: Option<u32>,
    pub package_dimensions: PackageDimensions,
    pub product_group: String,
    pub product_type_name: String,
    pub publication_date: Option<PublicationDate>,
    pub publisher: String,
    pub studio: String,
    pub title: String,
}

/// `<Creator Role="翻訳">山田 太郎</Creator>`
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Creator {
    #[serde(rename = "@Role")]
    pub role: String,
    #[serde(rename = "$text")]
    pub name: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct EanList {
    #[serde(rename = "EANListElement")]
    pub element: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Languages {
    pub language: Vec<Language>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Language {
    pub name: String,
    #[serde(rename = "Type")]
    pub type_: String,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Price {
    /// 最小货币单位，如JPY为1日元、USD为1美分
    pub amount: String,
    pub currency_code: String,
    pub formatted_price: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct PackageDimensions {
    pub height: Option<Size>,
    pub length: Option<Size>,
    pub weight: Option<Size>,
    pub width: Option<Size>,
}

const DATE_DASH: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DATE_SLASH: &[BorrowedFormatItem<'static>] = format_description!("[year]/[month]/[day]");

/// 出版日期，可能只有年月，此时日为1
///
/// 支持的格式：`2006-01-02`、`2006-01`、`2006/01/02`、`2006/01`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicationDate(pub Date);

impl PublicationDate {
    pub fn parse(s: &str) -> Result<Self, String> {
        let candidates = [
            (s.to_owned(), DATE_DASH),
            (format!("{s}-01"), DATE_DASH),
            (s.to_owned(), DATE_SLASH),
            (format!("{s}/01"), DATE_SLASH),
        ];
        candidates
            .iter()
            .find_map(|(v, f)| Date::parse(v, f).ok())
            .map(PublicationDate)
            .ok_or_else(|| format!("Invalid date {s}"))
    }
}

impl<'de> Deserialize<'de> for PublicationDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PublicationDate::parse(s.trim()).map_err(D::Error::custom)
    }
}
// endregion: --- Items

// region:    --- Offers
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct OfferSummary {
    pub lowest_new_price: Option<Price>,
    pub lowest_used_price: Option<Price>,
    pub total_new: u32,
    pub total_used: u32,
    pub total_collectible: u32,
    pub total_refurbished: u32,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Offers {
    pub total_offers: u32,
    pub total_offer_pages: u32,
    #[serde(rename = "MoreOffersUrl")]
    pub more_offers_url: String,
    pub offer: Vec<Offer>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Offer {
    pub merchant: Merchant,
    pub offer_attributes: OfferAttributes,
    pub offer_listing: OfferListing,
    pub loyalty_points: Option<LoyaltyPoints>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Merchant {
    pub name: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct OfferAttributes {
    pub condition: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct OfferListing {
    /// CartCreate/CartAdd中使用
    pub offer_listing_id: String,
    pub price: Option<Price>,
    pub availability: String,
    pub availability_attributes: AvailabilityAttributes,
    #[serde(deserialize_with = "de_bool")]
    pub is_eligible_for_super_saver_shipping: bool,
    #[serde(deserialize_with = "de_bool")]
    pub is_eligible_for_prime: bool,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct AvailabilityAttributes {
    pub availability_type: String,
    pub minimum_hours: u32,
    pub maximum_hours: u32,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct LoyaltyPoints {
    pub points: u32,
    pub typical_redemption_value: Option<Price>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomerReviews {
    #[serde(rename = "IFrameURL")]
    pub iframe_url: String,
    #[serde(deserialize_with = "de_bool")]
    pub has_reviews: bool,
}
// endregion: --- Offers

// region:    --- related products
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct AsinTitle {
    #[serde(rename = "ASIN")]
    pub asin: String,
    pub title: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct SimilarProducts {
    #[serde(rename = "SimilarProduct")]
    pub similar_product: Vec<AsinTitle>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct TopSellers {
    #[serde(rename = "TopSeller")]
    pub top_seller: Vec<AsinTitle>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct NewReleases {
    #[serde(rename = "NewRelease")]
    pub new_release: Vec<AsinTitle>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct SimilarViewedProducts {
    #[serde(rename = "SimilarViewedProduct")]
    pub similar_viewed_product: Vec<AsinTitle>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct TopItemSet {
    #[serde(rename = "Type")]
    pub type_: String,
    pub top_item: Vec<TopItem>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct TopItem {
    #[serde(rename = "ASIN")]
    pub asin: String,
    pub title: String,
    #[serde(rename = "DetailPageURL")]
    pub detail_page_url: String,
    pub product_group: String,
    pub author: Vec<String>,
}
// endregion: --- related products

// region:    --- BrowseNodes
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct BrowseNodeLookupResponse {
    pub browse_nodes: BrowseNodes,
}

impl OperationResponse for BrowseNodeLookupResponse {
    fn request(&self) -> Option<&Request> {
        self.browse_nodes.request.as_ref()
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct BrowseNodes {
    /// 只在BrowseNodeLookup的响应中有
    pub request: Option<Request>,
    pub browse_node: Vec<BrowseNode>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct BrowseNode {
    pub browse_node_id: String,
    pub name: String,
    #[serde(deserialize_with = "de_bool")]
    pub is_category_root: bool,
    pub ancestors: BrowseNodes,
    pub children: BrowseNodes,
    pub top_sellers: TopSellers,
    pub top_item_set: Vec<TopItemSet>,
}
// endregion: --- BrowseNodes

// region:    --- Cart
/// 所有Cart操作的响应，根元素为`<Operation>Response`
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct CartResponse {
    pub cart: Cart,
}

impl OperationResponse for CartResponse {
    fn request(&self) -> Option<&Request> {
        Some(&self.cart.request)
    }
}

pub type CartCreateResponse = CartResponse;
pub type CartAddResponse = CartResponse;
pub type CartGetResponse = CartResponse;
pub type CartModifyResponse = CartResponse;
pub type CartClearResponse = CartResponse;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Cart {
    pub request: Request,
    pub cart_id: String,
    #[serde(rename = "HMAC")]
    pub hmac: String,
    #[serde(rename = "URLEncodedHMAC")]
    pub url_encoded_hmac: String,
    #[serde(rename = "PurchaseURL")]
    pub purchase_url: String,
    #[serde(rename = "MobileCartURL")]
    pub mobile_cart_url: String,
    pub sub_total: Option<Price>,
    pub cart_items: CartItems,
    pub saved_for_later_items: SavedForLaterItems,
    pub similar_products: SimilarProducts,
    pub new_releases: NewReleases,
    pub similar_viewed_products: SimilarViewedProducts,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct CartItems {
    pub sub_total: Option<Price>,
    pub cart_item: Vec<CartItem>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct SavedForLaterItems {
    pub sub_total: Option<Price>,
    pub saved_for_later_item: Vec<CartItem>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "PascalCase", default)]
pub struct CartItem {
    pub cart_item_id: String,
    #[serde(rename = "ASIN")]
    pub asin: String,
    pub seller_nickname: String,
    pub quantity: u32,
    pub title: String,
    pub product_group: String,
    pub price: Option<Price>,
    pub item_total: Option<Price>,
}
// endregion: --- Cart
