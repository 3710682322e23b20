use crate::credentials::CredentialsError;
use crate::error_response::ErrorEnvelopeKind;
use std::fmt::{Display, Formatter};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
    #[error("invalid endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(reqwest::Method),
    #[error("sign request failed: {0}")]
    Sign(#[from] pa_sdk_common::Error),
    #[error("GET {url}: {source}")]
    Reqwest {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{0}")]
    Decode(String),
    #[error(transparent)]
    Xml(#[from] quick_xml::DeError),
    #[error("response status is not success: {status}, text: {text}")]
    RequestAPIFailed { status: String, text: String },
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    /// API返回的错误（错误响应或者响应中的`Errors`）
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// API返回的错误
///
/// 来源有两种：
/// - `<Operation>ErrorResponse`错误响应，带有RequestId
/// - 正常响应中`Request/Errors`下的第一个`Error`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub(crate) code: String,
    pub(crate) message: String,
    pub(crate) request_id: Option<String>,
    pub(crate) envelope: Option<ErrorEnvelopeKind>,
}

impl ApiError {
    /// 错误码，可以和[crate::constants::error_code]中的常量比较
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// 匹配到的错误响应类型，响应中内嵌的错误为`None`
    pub fn envelope(&self) -> Option<ErrorEnvelopeKind> {
        self.envelope
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {}: {}", self.code, self.message)?;
        if let Some(id) = &self.request_id {
            write!(f, " ({id})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
