//! 请求参数中使用的枚举值和API错误码

use serde::Serialize;

pub const SERVICE: &str = "AWSECommerceService";
pub const VERSION: &str = "2013-08-01";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchIndex {
    All,
    Apparel,
    Appliances,
    ArtsAndCrafts,
    Automotive,
    Baby,
    Beauty,
    Blended,
    Books,
    Classical,
    Collectibles,
    CreditCards,
    #[serde(rename = "DVD")]
    Dvd,
    Electronics,
    Fashion,
    FashionBaby,
    FashionBoys,
    FashionGirls,
    FashionMen,
    FashionWomen,
    ForeignBooks,
    Garden,
    GiftCards,
    Grocery,
    HealthPersonalCare,
    Hobbies,
    Home,
    HomeGarden,
    HomeImprovement,
    Industrial,
    Jewelry,
    KindleStore,
    Kitchen,
    LawnAndGarden,
    Lighting,
    Luggage,
    Magazines,
    MobileApps,
    Movies,
    #[serde(rename = "MP3Downloads")]
    Mp3Downloads,
    Music,
    MusicalInstruments,
    OfficeProducts,
    Pantry,
    #[serde(rename = "PCHardware")]
    PcHardware,
    PetSupplies,
    Photo,
    Shoes,
    Software,
    SportingGoods,
    Tools,
    Toys,
    UnboxVideo,
    #[serde(rename = "VHS")]
    Vhs,
    Video,
    VideoDownload,
    VideoGames,
    Watches,
    Wine,
    Wireless,
}

/// 商品状态，不指定时API默认为`New`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Condition {
    New,
    Used,
    Collectible,
    Refurbished,
    All,
}

/// ItemLookup中ItemId的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IdType {
    Asin,
    Sku,
    Upc,
    Ean,
    Isbn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelationshipType {
    AuthorityTitle,
    DigitalMusicArranger,
    DigitalMusicComposer,
    DigitalMusicConductor,
    DigitalMusicEnsemble,
    DigitalMusicLyricist,
    DigitalMusicPerformer,
    DigitalMusicPrimaryArtist,
    DigitalMusicProducer,
    DigitalMusicRemixer,
    DigitalMusicSongWriter,
    Episode,
    NewerVersion,
    Season,
    Tracks,
}

/// SimilarityLookup多个ItemId时结果的合并方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimilarityType {
    /// 交集，默认
    Intersection,
    /// 随机组合
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CartModifyAction {
    MoveToCart,
    SaveForLater,
}

/// ItemSearch、ItemLookup、SimilarityLookup的ResponseGroup
///
/// 每个操作支持的取值不完全相同，不支持的值API会返回`AWS.InvalidResponseGroup`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemResponseGroup {
    Accessories,
    AlternateVersions,
    BrowseNodes,
    EditorialReview,
    Images,
    ItemAttributes,
    ItemIds,
    Large,
    ListmaniaLists,
    Medium,
    MerchantItemAttributes,
    OfferFull,
    OfferListings,
    Offers,
    OfferSummary,
    PromotionalTag,
    PromotionDetails,
    PromotionSummary,
    RelatedItems,
    Reviews,
    SalesRank,
    SearchBins,
    SearchInside,
    ShippingCharges,
    Similarities,
    Small,
    Subjects,
    Tracks,
    VariationImages,
    VariationMatrix,
    VariationMinimum,
    VariationOffers,
    Variations,
    VariationSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BrowseNodeResponseGroup {
    BrowseNodeInfo,
    NewReleases,
    MostGifted,
    TopSellers,
    MostWishedFor,
}

/// 所有Cart操作共用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CartResponseGroup {
    Cart,
    CartSimilarities,
    CartNewReleases,
    CartTopSellers,
}

/// API错误码
///
/// [错误码列表](http://docs.aws.amazon.com/AWSECommerceService/latest/DG/ErrorMessages.html)
pub mod error_code {
    pub const EXACT_PARAMETER_REQUIREMENT: &str = "AWS.ExactParameterRequirement";
    pub const EXCEEDED_MAXIMUM_PARAMETER_VALUES: &str = "AWS.ExceededMaximumParameterValues";
    pub const INSUFFICIENT_PARAMETER_VALUES: &str = "AWS.InsufficientParameterValues";
    pub const INTERNAL_ERROR: &str = "AWS.InternalError";
    pub const INVALID_ACCOUNT: &str = "AWS.InvalidAccount";
    pub const INVALID_ASSOCIATE: &str = "AWS.InvalidAssociate";
    /// 例如SearchIndex不在可选值中
    pub const INVALID_ENUMERATED_PARAMETER: &str = "AWS.InvalidEnumeratedParameter";
    pub const INVALID_ISO8601_TIME: &str = "AWS.InvalidISO8601Time";
    pub const INVALID_OPERATION_FOR_MARKETPLACE: &str = "AWS.InvalidOperationForMarketplace";
    pub const INVALID_OPERATION_PARAMETER: &str = "AWS.InvalidOperationParameter";
    /// 例如CartAdd同时指定了ASIN和OfferListingId
    pub const INVALID_PARAMETER_COMBINATION: &str = "AWS.InvalidParameterCombination";
    pub const INVALID_PARAMETER_VALUE: &str = "AWS.InvalidParameterValue";
    pub const INVALID_RESPONSE_GROUP: &str = "AWS.InvalidResponseGroup";
    pub const INVALID_SERVICE_PARAMETER: &str = "AWS.InvalidServiceParameter";
    pub const INVALID_SUBSCRIPTION_ID: &str = "AWS.InvalidSubscriptionId";
    pub const MAXIMUM_PARAMETER_REQUIREMENT: &str = "AWS.MaximumParameterRequirement";
    pub const MINIMUM_PARAMETER_REQUIREMENT: &str = "AWS.MinimumParameterRequirement";
    pub const MISSING_OPERATION_PARAMETER: &str = "AWS.MissingOperationParameter";
    pub const MISSING_PARAMETER_COMBINATION: &str = "AWS.MissingParameterCombination";
    pub const MISSING_PARAMETERS: &str = "AWS.MissingParameters";
    pub const MISSING_PARAMETER_VALUE_COMBINATION: &str = "AWS.MissingParameterValueCombination";
    pub const MISSING_SERVICE_PARAMETER: &str = "AWS.MissingServiceParameter";
    /// 例如ItemPage超出1~10
    pub const PARAMETER_OUT_OF_RANGE: &str = "AWS.ParameterOutOfRange";
    pub const PARAMETER_REPEATED_IN_REQUEST: &str = "AWS.ParameterRepeatedInRequest";
    pub const RESTRICTED_PARAMETER_VALUE_COMBINATION: &str =
        "AWS.RestrictedParameterValueCombination";
    pub const EXCEEDED_MAXIMUM_CART_ITEMS: &str = "AWS.ECommerceService.ExceededMaximumCartItems";
    pub const INVALID_CART_ID: &str = "AWS.ECommerceService.InvalidCartId";
    pub const INVALID_HMAC: &str = "AWS.ECommerceService.InvalidHMAC";
    pub const INVALID_QUANTITY: &str = "AWS.ECommerceService.InvalidQuantity";
    pub const ITEM_ALREADY_IN_CART: &str = "AWS.ECommerceService.ItemAlreadyInCart";
    pub const ITEM_NOT_ACCESSIBLE: &str = "AWS.ECommerceService.ItemNotAccessible";
    pub const ITEM_NOT_ELIGIBLE_FOR_CART: &str = "AWS.ECommerceService.ItemNotEligibleForCart";
    pub const NO_EXACT_MATCHES: &str = "AWS.ECommerceService.NoExactMatches";
    pub const NO_SIMILARITIES: &str = "AWS.ECommerceService.NoSimilarities";
    pub const REQUEST_THROTTLED: &str = "RequestThrottled";
    /// 时间戳和服务器时间相差超过15分钟
    pub const REQUEST_EXPIRED: &str = "RequestExpired";
}
