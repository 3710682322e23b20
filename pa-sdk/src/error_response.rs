//! 错误响应的识别
//!
//! 请求失败时API返回`<Operation>ErrorResponse`，结构都相同：
//! ```xml
//! <ItemSearchErrorResponse>
//!   <Error><Code>...</Code><Message>...</Message></Error>
//!   <RequestId>...</RequestId>
//! </ItemSearchErrorResponse>
//! ```
//! 响应无法按预期类型解析时，按[ErrorEnvelopeKind::ALL]的顺序逐个尝试，Code不为空的第一个即为结果。

use crate::error::ApiError;
use log::debug;
use pa_sdk_common::helper::root_element_name;
use serde::Deserialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorEnvelopeKind {
    ItemSearch,
    BrowseNodeLookup,
    ItemLookup,
    SimilarityLookup,
    CartAdd,
    CartClear,
    CartCreate,
    CartGet,
    CartModify,
}

impl ErrorEnvelopeKind {
    /// 尝试的顺序
    pub const ALL: [ErrorEnvelopeKind; 9] = [
        ErrorEnvelopeKind::ItemSearch,
        ErrorEnvelopeKind::BrowseNodeLookup,
        ErrorEnvelopeKind::ItemLookup,
        ErrorEnvelopeKind::SimilarityLookup,
        ErrorEnvelopeKind::CartAdd,
        ErrorEnvelopeKind::CartClear,
        ErrorEnvelopeKind::CartCreate,
        ErrorEnvelopeKind::CartGet,
        ErrorEnvelopeKind::CartModify,
    ];

    pub fn operation(&self) -> &'static str {
        match self {
            ErrorEnvelopeKind::ItemSearch => "ItemSearch",
            ErrorEnvelopeKind::BrowseNodeLookup => "BrowseNodeLookup",
            ErrorEnvelopeKind::ItemLookup => "ItemLookup",
            ErrorEnvelopeKind::SimilarityLookup => "SimilarityLookup",
            ErrorEnvelopeKind::CartAdd => "CartAdd",
            ErrorEnvelopeKind::CartClear => "CartClear",
            ErrorEnvelopeKind::CartCreate => "CartCreate",
            ErrorEnvelopeKind::CartGet => "CartGet",
            ErrorEnvelopeKind::CartModify => "CartModify",
        }
    }

    /// 根元素名称，如`ItemSearchErrorResponse`
    pub fn root_tag(&self) -> String {
        format!("{}ErrorResponse", self.operation())
    }

    /// 按这个类型解析，根元素不匹配、无法解析或者Code为空时返回`None`
    pub fn parse(&self, body: &str) -> Option<ApiError> {
        if root_element_name(body)? != self.root_tag() {
            return None;
        }
        let envelope = quick_xml::de::from_str::<ErrorEnvelope>(body).ok()?;
        if envelope.error.code.is_empty() {
            return None;
        }
        Some(ApiError {
            code: envelope.error.code,
            message: envelope.error.message,
            request_id: Some(envelope.request_id).filter(|id| !id.is_empty()),
            envelope: Some(*self),
        })
    }
}

impl Display for ErrorEnvelopeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.operation())
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
struct ErrorEnvelope {
    #[serde(default)]
    error: EnvelopeError,
    #[serde(default)]
    request_id: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
struct EnvelopeError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// 按固定顺序尝试所有错误响应类型，都不匹配时返回`None`
pub fn classify(body: &str) -> Option<ApiError> {
    let res = ErrorEnvelopeKind::ALL
        .iter()
        .find_map(|kind| kind.parse(body));
    if let Some(e) = &res {
        debug!("matched {:?} error response: {e}", e.envelope);
    }
    res
}
