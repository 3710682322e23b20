use pa_sdk::cart::{CartItemsExt, CartModifyItemsExt};
use pa_sdk::clock::FixedClock;
use pa_sdk::constants::{ItemResponseGroup, SearchIndex, SimilarityType, error_code};
use pa_sdk::credentials::Credentials;
use pa_sdk::error_response::ErrorEnvelopeKind;
use pa_sdk::{Client, Error};
use serde::Deserialize;
use std::sync::Arc;
use time::macros::{date, datetime};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn mock_client(endpoint: String) -> Client {
    let creds = Credentials::new("AK", "SK", "ngsio-22", "JP").unwrap();
    Client::builder()
        .credentials(creds)
        .endpoint(endpoint)
        .clock(Arc::new(FixedClock(datetime!(2016-11-16 12:34:00 UTC))))
        .build()
        .unwrap()
}

async fn mock_server() -> (MockServer, Client) {
    init_log();
    let server = MockServer::start().await;
    let client = mock_client(format!("{}/onca/xml", server.uri()));
    (server, client)
}

#[tokio::test]
async fn item_search_test() {
    let (server, client) = mock_server().await;
    Mock::given(method("GET"))
        .and(path("/onca/xml"))
        .and(query_param("Operation", "ItemSearch"))
        .and(query_param("Keywords", "Go 言語"))
        .and(query_param("SearchIndex", "Books"))
        .and(query_param("ResponseGroup", "Large,OfferFull"))
        .and(query_param("AWSAccessKeyId", "AK"))
        .and(query_param("AssociateTag", "ngsio-22"))
        .and(query_param("Timestamp", "2016-11-16T12:34:00Z"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(include_str!("fixtures/ItemSearchResponse.xml")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let res = client
        .item_search()
        .keywords("Go 言語")
        .search_index(SearchIndex::Books)
        .response_group(vec![ItemResponseGroup::Large, ItemResponseGroup::OfferFull])
        .build()
        .send()
        .await
        .unwrap();

    let items = &res.items;
    assert!(items.request.is_valid);
    assert_eq!(items.total_results, 190);
    assert_eq!(items.total_pages, 19);
    assert_eq!(items.item.len(), 2);

    let first = &items.item[0];
    assert_eq!(first.asin, "4621300253");
    assert_eq!(
        first.item_attributes.title,
        "プログラミング言語Go (ADDISON-WESLEY PROFESSIONAL COMPUTING SERIES)"
    );
    assert_eq!(
        first.item_attributes.author,
        ["Alan A.A. Donovan", "Brian W. Kernighan"]
    );
    assert_eq!(first.sales_rank, Some(2360));
    assert_eq!(first.item_links.item_link.len(), 2);
    assert_eq!(first.image_sets.image_set[0].category, "primary");
    assert_eq!(first.large_image.as_ref().unwrap().height.value, 500.0);
    assert_eq!(
        first.item_attributes.publication_date.unwrap().0,
        date!(2016 - 06 - 20)
    );

    let offer = &first.offers.as_ref().unwrap().offer[0];
    assert_eq!(offer.merchant.name, "Amazon.co.jp");
    assert!(offer.offer_listing.is_eligible_for_prime);
    assert_eq!(offer.loyalty_points.as_ref().unwrap().points, 120);
    assert_eq!(first.offer_summary.as_ref().unwrap().total_used, 11);
    assert!(first.customer_reviews.as_ref().unwrap().has_reviews);
    assert_eq!(first.similar_products.similar_product[0].asin, "4774166200");
    assert_eq!(
        first.browse_nodes.browse_node[0].ancestors.browse_node[0].browse_node_id,
        "466298"
    );

    // 只有年月的出版日期
    let second = &items.item[1];
    assert_eq!(
        second.item_attributes.publication_date.unwrap().0,
        date!(2016 - 09 - 01)
    );
    assert!(second.offers.is_none());
}

#[tokio::test]
async fn item_lookup_embedded_errors_test() {
    let (server, client) = mock_server().await;
    Mock::given(method("GET"))
        .and(path("/onca/xml"))
        .and(query_param("Operation", "ItemLookup"))
        .and(query_param("ItemId", "B000000000"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(include_str!("fixtures/ItemLookupResponseWithErrors.xml")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .item_lookup()
        .item_id(vec!["B000000000"])
        .build()
        .send()
        .await
        .unwrap_err();

    let api_err = err.as_api_error().unwrap();
    assert_eq!(api_err.code(), error_code::INVALID_PARAMETER_VALUE);
    assert!(api_err.message().starts_with("B000000000 is not a valid value"));
    assert!(api_err.request_id().is_none());
    assert!(api_err.envelope().is_none());
}

#[tokio::test]
async fn cart_add_error_response_test() {
    let (server, client) = mock_server().await;
    Mock::given(method("GET"))
        .and(path("/onca/xml"))
        .and(query_param("Operation", "CartAdd"))
        .and(query_param("CartId", "376-1234567-8901234"))
        .and(query_param("HMAC", "abc/def+ghi="))
        .and(query_param("Item.1.ASIN", "4621300253"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(include_str!("fixtures/CartAddErrorResponse.xml")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .cart_add()
        .cart_id("376-1234567-8901234")
        .hmac("abc/def+ghi=")
        .add_asin("4621300253", 1)
        .build()
        .send()
        .await
        .unwrap_err();

    let api_err = err.as_api_error().unwrap();
    assert_eq!(api_err.code(), error_code::REQUEST_EXPIRED);
    assert_eq!(
        api_err.request_id(),
        Some("c2fd7101-14f1-4c46-954b-d2bf492dd2eb")
    );
    assert_eq!(api_err.envelope(), Some(ErrorEnvelopeKind::CartAdd));
    assert_eq!(
        err.to_string(),
        "Error RequestExpired: Request has expired. Timestamp date is 2016-11-16T12:34:00Z. \
         (c2fd7101-14f1-4c46-954b-d2bf492dd2eb)"
    );
}

#[tokio::test]
async fn request_api_failed_test() {
    let (server, client) = mock_server().await;
    Mock::given(method("GET"))
        .and(path("/onca/xml"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .cart_get()
        .cart_id("376-1234567-8901234")
        .hmac("abc/def+ghi=")
        .build()
        .send()
        .await
        .unwrap_err();

    match err {
        Error::RequestAPIFailed { status, text } => {
            assert!(status.starts_with("503"));
            assert_eq!(text, "Service Unavailable");
        }
        e => panic!("unexpected error: {e}"),
    }
}

#[tokio::test]
async fn unexpected_root_test() {
    let (server, client) = mock_server().await;
    Mock::given(method("GET"))
        .and(path("/onca/xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(include_str!("fixtures/CartCreateResponse.xml")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .cart_clear()
        .cart_id("376-1234567-8901234")
        .hmac("abc/def+ghi=")
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
    assert_eq!(
        err.to_string(),
        "expected element type <CartClearResponse> but have <CartCreateResponse>"
    );
}

#[tokio::test]
async fn transport_error_test() {
    init_log();
    let client = mock_client("http://127.0.0.1:1/onca/xml".to_owned());
    let err = client
        .item_search()
        .keywords("golang")
        .search_index(SearchIndex::Books)
        .build()
        .send()
        .await
        .unwrap_err();

    match &err {
        Error::Reqwest { url, .. } => {
            assert!(url.starts_with("http://127.0.0.1:1/onca/xml?"));
            assert!(url.contains("Operation=ItemSearch"));
        }
        e => panic!("unexpected error: {e}"),
    }
    assert!(err.to_string().starts_with("GET http://127.0.0.1:1/onca/xml?"));
}

#[tokio::test]
async fn browse_node_lookup_test() {
    let (server, client) = mock_server().await;
    let body = r#"<?xml version="1.0" ?>
<BrowseNodeLookupResponse xmlns="http://webservices.amazon.com/AWSECommerceService/2013-08-01">
  <BrowseNodes>
    <Request>
      <IsValid>True</IsValid>
      <BrowseNodeLookupRequest><BrowseNodeId>492352</BrowseNodeId></BrowseNodeLookupRequest>
    </Request>
    <BrowseNode>
      <BrowseNodeId>492352</BrowseNodeId>
      <Name>プログラミング</Name>
      <Children>
        <BrowseNode><BrowseNodeId>492354</BrowseNodeId><Name>C・C++</Name></BrowseNode>
      </Children>
      <Ancestors>
        <BrowseNode>
          <BrowseNodeId>466298</BrowseNodeId>
          <Name>コンピュータ・IT</Name>
          <Ancestors>
            <BrowseNode><BrowseNodeId>465392</BrowseNodeId><Name>ジャンル別</Name><IsCategoryRoot>1</IsCategoryRoot></BrowseNode>
          </Ancestors>
        </BrowseNode>
      </Ancestors>
    </BrowseNode>
  </BrowseNodes>
</BrowseNodeLookupResponse>"#;
    Mock::given(method("GET"))
        .and(path("/onca/xml"))
        .and(query_param("Operation", "BrowseNodeLookup"))
        .and(query_param("BrowseNodeId", "492352"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let res = client
        .browse_node_lookup()
        .browse_node_id("492352")
        .build()
        .send()
        .await
        .unwrap();

    let node = &res.browse_nodes.browse_node[0];
    assert_eq!(node.name, "プログラミング");
    assert_eq!(node.children.browse_node[0].browse_node_id, "492354");
    let parent = &node.ancestors.browse_node[0];
    assert_eq!(parent.browse_node_id, "466298");
    assert!(parent.ancestors.browse_node[0].is_category_root);
}

#[tokio::test]
async fn cart_create_test() {
    let (server, client) = mock_server().await;
    Mock::given(method("GET"))
        .and(path("/onca/xml"))
        .and(query_param("Operation", "CartCreate"))
        .and(query_param("Item.1.ASIN", "4621300253"))
        .and(query_param("Item.1.Quantity", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(include_str!("fixtures/CartCreateResponse.xml")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let res = client
        .cart_create()
        .add_asin("4621300253", 2)
        .build()
        .send()
        .await
        .unwrap();

    let cart = &res.cart;
    assert_eq!(cart.cart_id, "376-1234567-8901234");
    assert_eq!(cart.hmac, "abc/def+ghi=");
    assert_eq!(cart.url_encoded_hmac, "abc%2Fdef%2Bghi%3D");
    assert_eq!(cart.sub_total.as_ref().unwrap().amount, "7992");
    let item = &cart.cart_items.cart_item[0];
    assert_eq!(item.cart_item_id, "C2OVE3ADEFA3KL");
    assert_eq!(item.quantity, 2);
    assert!(cart.saved_for_later_items.saved_for_later_item.is_empty());
}

#[tokio::test]
async fn similarity_lookup_test() {
    let (server, client) = mock_server().await;
    let body = r#"<?xml version="1.0" ?>
<SimilarityLookupResponse xmlns="http://webservices.amazon.com/AWSECommerceService/2013-08-01">
  <OperationRequest><RequestId>5e6f7a8b-9c0d-4e1f-a2b3-c4d5e6f7a8b9</RequestId></OperationRequest>
  <Items>
    <Request>
      <IsValid>True</IsValid>
      <SimilarityLookupRequest><ItemId>4621300253</ItemId><ItemId>4774166200</ItemId></SimilarityLookupRequest>
    </Request>
    <Item>
      <ASIN>4873117526</ASIN>
      <DetailPageURL>https://www.amazon.co.jp/dp/4873117526?SubscriptionId=AK&amp;tag=ngsio-22</DetailPageURL>
      <ItemAttributes>
        <Author>Katherine Cox-Buday</Author>
        <ProductGroup>Book</ProductGroup>
        <PublicationDate>2018/10/26</PublicationDate>
        <Title>Go言語による並行処理</Title>
      </ItemAttributes>
    </Item>
    <Item>
      <ASIN>4797369442</ASIN>
      <ItemAttributes><ProductGroup>Book</ProductGroup><Title>改訂2版 基礎からわかる Go言語</Title></ItemAttributes>
    </Item>
  </Items>
</SimilarityLookupResponse>"#;
    Mock::given(method("GET"))
        .and(path("/onca/xml"))
        .and(query_param("Operation", "SimilarityLookup"))
        .and(query_param("ItemId", "4621300253,4774166200"))
        .and(query_param("SimilarityType", "Random"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let res = client
        .similarity_lookup()
        .item_id(vec!["4621300253", "4774166200"])
        .similarity_type(SimilarityType::Random)
        .build()
        .send()
        .await
        .unwrap();

    let items = &res.items;
    assert!(items.request.is_valid);
    assert_eq!(items.item.len(), 2);
    assert_eq!(items.item[0].asin, "4873117526");
    assert_eq!(items.item[0].item_attributes.title, "Go言語による並行処理");
    assert_eq!(
        items.item[0].item_attributes.publication_date.unwrap().0,
        date!(2018 - 10 - 26)
    );
    assert_eq!(items.item[1].asin, "4797369442");
    assert!(items.item[1].item_attributes.publication_date.is_none());
}

#[tokio::test]
async fn cart_modify_test() {
    let (server, client) = mock_server().await;
    let body = r#"<?xml version="1.0" ?>
<CartModifyResponse xmlns="http://webservices.amazon.com/AWSECommerceService/2013-08-01">
  <OperationRequest><RequestId>9a8b7c6d-5e4f-4a3b-2c1d-0e9f8a7b6c5d</RequestId></OperationRequest>
  <Cart>
    <Request><IsValid>True</IsValid></Request>
    <CartId>376-1234567-8901234</CartId>
    <HMAC>abc/def+ghi=</HMAC>
    <URLEncodedHMAC>abc%2Fdef%2Bghi%3D</URLEncodedHMAC>
    <PurchaseURL>https://www.amazon.co.jp/gp/cart/aws-merge.html?cart-id=376-1234567-8901234</PurchaseURL>
    <CartItems>
      <SubTotal><Amount>3996</Amount><CurrencyCode>JPY</CurrencyCode><FormattedPrice>￥ 3,996</FormattedPrice></SubTotal>
      <CartItem>
        <CartItemId>C2OVE3ADEFA3KL</CartItemId>
        <ASIN>4621300253</ASIN>
        <Quantity>1</Quantity>
        <Title>プログラミング言語Go</Title>
      </CartItem>
    </CartItems>
    <SavedForLaterItems>
      <SavedForLaterItem>
        <CartItemId>C3ABCDEFGHIJKL</CartItemId>
        <ASIN>4774166200</ASIN>
        <Quantity>1</Quantity>
        <Title>みんなのGo言語</Title>
      </SavedForLaterItem>
    </SavedForLaterItems>
  </Cart>
</CartModifyResponse>"#;
    Mock::given(method("GET"))
        .and(path("/onca/xml"))
        .and(query_param("Operation", "CartModify"))
        .and(query_param("CartId", "376-1234567-8901234"))
        .and(query_param("HMAC", "abc/def+ghi="))
        .and(query_param("Item.1.CartItemId", "C2OVE3ADEFA3KL"))
        .and(query_param("Item.1.Quantity", "1"))
        .and(query_param("Item.2.CartItemId", "C3ABCDEFGHIJKL"))
        .and(query_param("Item.2.Action", "SaveForLater"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let res = client
        .cart_modify()
        .cart_id("376-1234567-8901234")
        .hmac("abc/def+ghi=")
        .modify_quantity("C2OVE3ADEFA3KL", 1)
        .save_for_later("C3ABCDEFGHIJKL")
        .build()
        .send()
        .await
        .unwrap();

    let cart = &res.cart;
    assert_eq!(cart.cart_id, "376-1234567-8901234");
    assert_eq!(cart.cart_items.sub_total.as_ref().unwrap().amount, "3996");
    assert_eq!(cart.cart_items.cart_item.len(), 1);
    assert_eq!(cart.cart_items.cart_item[0].quantity, 1);
    let saved = &cart.saved_for_later_items.saved_for_later_item;
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].cart_item_id, "C3ABCDEFGHIJKL");
    assert_eq!(saved[0].asin, "4774166200");
}

// region: --- live tests
// 需要tests/pa/config.toml，格式见下面的PaConfig

#[derive(Deserialize, Debug)]
pub struct PaConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub associate_tag: String,
    pub region: String,
}

impl PaConfig {
    pub fn get_conf() -> Self {
        let file_str = std::fs::read_to_string("tests/pa/config.toml").unwrap();
        toml::from_str(&file_str).unwrap()
    }
}

fn get_live_client() -> Client {
    let conf = PaConfig::get_conf();
    let creds = Credentials::new(
        conf.access_key_id,
        conf.secret_access_key,
        conf.associate_tag,
        &conf.region,
    )
    .unwrap();
    Client::builder().credentials(creds).build().unwrap()
}

#[tokio::test]
#[ignore]
async fn live_item_search_test() {
    init_log();
    let client = get_live_client();
    let res = client
        .item_search()
        .keywords("golang")
        .search_index(SearchIndex::Books)
        .response_group(vec![ItemResponseGroup::Medium])
        .build()
        .send()
        .await;
    match res {
        Ok(s) => println!("res:\n{:#?}", s.items),
        Err(e) => println!("{}", e),
    }
}

#[tokio::test]
#[ignore]
async fn live_cart_test() {
    init_log();
    let client = get_live_client();
    let res = client
        .cart_create()
        .add_asin("4621300253", 1)
        .build()
        .send()
        .await
        .unwrap();
    let cart = res.cart;
    println!("cart: {} {}", cart.cart_id, cart.hmac);

    let res = client
        .cart_modify()
        .cart_id(&cart.cart_id)
        .hmac(&cart.hmac)
        .modify_quantity(&cart.cart_items.cart_item[0].cart_item_id, 0)
        .build()
        .send()
        .await;
    match res {
        Ok(s) => println!("res:\n{:#?}", s.cart),
        Err(e) => println!("{}", e),
    }

    let res = client
        .cart_clear()
        .cart_id(&cart.cart_id)
        .hmac(&cart.hmac)
        .build()
        .send()
        .await;
    match res {
        Ok(_) => println!("success!"),
        Err(e) => println!("{}", e),
    }
}
// endregion: --- live tests
