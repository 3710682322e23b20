//! [购物车操作](https://docs.aws.amazon.com/AWSECommerceService/latest/DG/CartOperations.html)
//!
//! CartCreate返回的`CartId`和`HMAC`需要保存，CartAdd、CartGet、CartModify、CartClear都需要这两个参数。
//!
//! # Example
//! ```no_run
//! use pa_sdk::Client;
//! use pa_sdk::cart::CartItemsExt;
//!
//! # async fn run() -> Result<(), pa_sdk::Error> {
//! let client = Client::from_env()?;
//! let res = client
//!     .cart_create()
//!     .add_asin("4621300253", 1)
//!     .build()
//!     .send()
//!     .await?;
//! println!("{} {}", res.cart.cart_id, res.cart.hmac);
//! # Ok(())
//! # }
//! ```

mod add;
mod clear;
mod create;
mod get;
mod modify;

pub use add::*;
pub use clear::*;
pub use create::*;
pub use get::*;
pub use modify::*;

use crate::constants::CartModifyAction;
use serde::Serialize;

fn is_zero(n: &u32) -> bool {
    *n == 0
}

/// CartCreate、CartAdd中的一个商品，ASIN和OfferListingId只能指定一个
///
/// 空字符串和数量0不会出现在请求参数中
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CartRequestItem {
    #[serde(rename = "ASIN", skip_serializing_if = "String::is_empty")]
    pub asin: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub offer_listing_id: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub quantity: u32,
}

/// CartModify中的一个商品
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CartModifyRequestItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cart_item_id: String,
    /// 可以为0，表示从购物车删除
    pub quantity: Option<u32>,
    pub action: Option<CartModifyAction>,
}

/// 向CartCreate、CartAdd的builder中添加商品，序列化为`Item.1.ASIN`、`Item.1.Quantity`…
pub trait CartItemsExt: Sized {
    fn items_mut(&mut self) -> &mut Vec<CartRequestItem>;

    fn item(mut self, item: CartRequestItem) -> Self {
        self.items_mut().push(item);
        self
    }

    fn add_asin(self, asin: impl Into<String>, quantity: u32) -> Self {
        self.item(CartRequestItem {
            asin: asin.into(),
            quantity,
            ..Default::default()
        })
    }

    fn add_offer_listing_id(self, offer_listing_id: impl Into<String>, quantity: u32) -> Self {
        self.item(CartRequestItem {
            offer_listing_id: offer_listing_id.into(),
            quantity,
            ..Default::default()
        })
    }
}

/// 向CartModify的builder中添加修改项
pub trait CartModifyItemsExt: Sized {
    fn items_mut(&mut self) -> &mut Vec<CartModifyRequestItem>;

    fn item(mut self, item: CartModifyRequestItem) -> Self {
        self.items_mut().push(item);
        self
    }

    /// 修改数量，0为删除
    fn modify_quantity(self, cart_item_id: impl Into<String>, quantity: u32) -> Self {
        self.item(CartModifyRequestItem {
            cart_item_id: cart_item_id.into(),
            quantity: Some(quantity),
            action: None,
        })
    }

    /// 从SavedForLaterItems移回购物车
    fn move_to_cart(self, cart_item_id: impl Into<String>) -> Self {
        self.item(CartModifyRequestItem {
            cart_item_id: cart_item_id.into(),
            quantity: None,
            action: Some(CartModifyAction::MoveToCart),
        })
    }

    fn save_for_later(self, cart_item_id: impl Into<String>) -> Self {
        self.item(CartModifyRequestItem {
            cart_item_id: cart_item_id.into(),
            quantity: None,
            action: Some(CartModifyAction::SaveForLater),
        })
    }
}
