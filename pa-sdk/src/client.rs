use crate::clock::{Clock, SystemClock};
use crate::constants::{SERVICE, VERSION};
use crate::credentials::Credentials;
use crate::error::{ApiError, Error};
use crate::error_response;
use crate::types_rs::Request;
use bon::bon;
use log::debug;
use pa_sdk_common::helper::root_element_name;
use pa_sdk_common::query_sign::{SignParams, get_signed_url};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

/// 一个API操作，序列化后的字段即为请求参数
pub trait Operation: Serialize {
    type Response: OperationResponse;

    /// `Operation`参数的值，如`ItemSearch`
    const NAME: &'static str;

    /// 目前只支持GET
    fn http_method(&self) -> Method {
        Method::GET
    }

    /// 响应的根元素名称
    fn response_root(&self) -> String {
        format!("{}Response", Self::NAME)
    }
}

pub trait OperationResponse: DeserializeOwned {
    /// 响应中的`Request`节点，其中的`Errors`不为空时请求视为失败
    fn request(&self) -> Option<&Request>;
}

pub struct Client {
    credentials: Credentials,
    endpoint: Url,
    http_client: reqwest::Client,
    clock: Arc<dyn Clock>,
}

#[bon]
impl Client {
    #[builder]
    pub fn new(
        credentials: Credentials,
        /// `false`时使用http
        #[builder(default = true)]
        secure: bool,
        /// 完整的endpoint，如`http://127.0.0.1:8080/onca/xml`，设置后不再使用region对应的地址
        #[builder(into)]
        endpoint: Option<String>,
        /// 生成Timestamp的时间来源，默认为系统时间
        clock: Option<Arc<dyn Clock>>,
        http_client: Option<reqwest::Client>,
    ) -> Result<Self, Error> {
        let region = credentials.region();
        let endpoint = endpoint.unwrap_or_else(|| {
            if secure {
                region.https_endpoint()
            } else {
                region.http_endpoint()
            }
        });
        let invalid = |reason: String| Error::InvalidEndpoint {
            endpoint: endpoint.clone(),
            reason,
        };
        let url = Url::parse(&endpoint).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }
        if url.host_str().is_none() {
            return Err(invalid("missing host".to_owned()));
        }

        Ok(Self {
            credentials,
            endpoint: url,
            http_client: http_client.unwrap_or_default(),
            clock: clock.unwrap_or_else(|| Arc::new(SystemClock)),
        })
    }

    /// 从环境变量读取凭证，其它使用默认值，见[Credentials::from_env]
    pub fn from_env() -> Result<Self, Error> {
        Client::builder()
            .credentials(Credentials::from_env()?)
            .build()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    // host[:port]，非默认端口时端口也参与签名
    fn authority(&self) -> String {
        let host = self.endpoint.host_str().unwrap_or_default();
        match self.endpoint.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_owned(),
        }
    }

    /// 生成签名后的完整请求url，Timestamp取自client的clock
    pub fn signed_url<O: Operation>(&self, op: &O) -> Result<String, Error> {
        let method = op.http_method();
        let timestamp = self.clock.now();
        let host = self.authority();
        let sign_params = SignParams {
            req_method: method.as_str(),
            scheme: self.endpoint.scheme(),
            host: &host,
            path: self.endpoint.path(),
            service: SERVICE,
            version: VERSION,
            operation: O::NAME,
            access_key_id: self.credentials.access_key_id(),
            associate_tag: self.credentials.associate_tag(),
            timestamp: &timestamp,
            query_map: op,
        };
        Ok(get_signed_url(
            self.credentials.secret_access_key(),
            sign_params,
        )?)
    }

    /// 发送请求并解析响应，每次调用只发送一次请求
    pub async fn request<O: Operation>(&self, op: &O) -> Result<O::Response, Error> {
        let method = op.http_method();
        if method != Method::GET {
            return Err(Error::UnsupportedMethod(method));
        }

        let url = self.signed_url(op)?;
        debug!("{} request url: {}", O::NAME, redact_access_key(&url));

        let resp = match self.http_client.get(&url).send().await {
            Ok(resp) => resp,
            Err(source) => return Err(Error::Reqwest { url, source }),
        };
        let status = resp.status();
        let text = match resp.text().await {
            Ok(text) => text,
            Err(source) => return Err(Error::Reqwest { url, source }),
        };

        decode_response(status, &text, &op.response_root())
    }
}

// 日志中不输出AWSAccessKeyId的值
fn redact_access_key(url: &str) -> String {
    const KEY: &str = "AWSAccessKeyId=";
    let Some(start) = url.find(KEY) else {
        return url.to_owned();
    };
    let value_start = start + KEY.len();
    let value_end = url[value_start..]
        .find('&')
        .map_or(url.len(), |i| value_start + i);
    format!("{}<redacted>{}", &url[..value_start], &url[value_end..])
}

/// 解析顺序：
/// 1. 按预期类型解析，成功时检查`Request/Errors`
/// 2. 失败时尝试所有错误响应类型
/// 3. 都不匹配时，非2xx返回`RequestAPIFailed`，否则返回第1步的错误
pub(crate) fn decode_response<R: OperationResponse>(
    status: StatusCode,
    body: &str,
    expected_root: &str,
) -> Result<R, Error> {
    match decode_xml::<R>(body, expected_root) {
        Ok(res) => {
            if let Some(e) = res.request().and_then(Request::first_error) {
                debug!("{expected_root} contains errors: {} {}", e.code, e.message);
                return Err(ApiError {
                    code: e.code.clone(),
                    message: e.message.clone(),
                    request_id: None,
                    envelope: None,
                }
                .into());
            }
            Ok(res)
        }
        Err(decode_err) => {
            if let Some(e) = error_response::classify(body) {
                return Err(e.into());
            }
            if !status.is_success() {
                return Err(Error::RequestAPIFailed {
                    status: status.to_string(),
                    text: body.to_owned(),
                });
            }
            Err(decode_err)
        }
    }
}

fn decode_xml<R: DeserializeOwned>(body: &str, expected_root: &str) -> Result<R, Error> {
    let root = root_element_name(body)
        .ok_or_else(|| Error::Decode("response is not a xml document".to_owned()))?;
    if root != expected_root {
        return Err(Error::Decode(format!(
            "expected element type <{expected_root}> but have <{root}>"
        )));
    }
    Ok(quick_xml::de::from_str(body)?)
}
