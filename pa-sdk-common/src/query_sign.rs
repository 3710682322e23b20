//! 请求参数规范化和签名
//!
//! 签名流程：
//! 1. 把请求参数（任何序列化为map的类型）展开为`BTreeMap<String, String>`
//! 2. 加入公共参数`Service`、`AWSAccessKeyId`、`Version`、`Operation`、`AssociateTag`、`Timestamp`
//! 3. 按key的字节序排序，key和value都进行percent encode（空格为`%20`），用`&`拼接
//! 4. 对`<METHOD>\n<host>\n<path>\n<query>`计算HMAC-SHA256，base64后作为`Signature`加入query

use super::error::Error;
use super::helper::{format_timestamp, sign_hmac_sha256};
use log::debug;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// 这个key的数组使用逗号拼接为一个值，其它数组展开为`key.1`、`key.2`…
pub const RESPONSE_GROUP: &str = "ResponseGroup";

/// 除了`A-Z a-z 0-9 - _ . ~`以外的字节都需要编码
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, &QUERY_ENCODE_SET).to_string()
}

pub struct SignParams<'a, T: Serialize> {
    pub req_method: &'a str,
    // "https" | "http"
    pub scheme: &'a str,
    // host[:port]，也会参与签名
    pub host: &'a str,
    pub path: &'a str,

    // 公共参数
    pub service: &'a str,
    pub version: &'a str,
    pub operation: &'a str,
    pub access_key_id: &'a str,
    // 为空的时候不加入query
    pub associate_tag: &'a str,
    pub timestamp: &'a OffsetDateTime,

    // 这个字段只要是序列化为Value后是Object即可
    pub query_map: T,
}

/// 签名入口，返回签名后的完整url
pub fn get_signed_url<T: Serialize>(
    secret_access_key: &str,
    sign_params: SignParams<'_, T>,
) -> Result<String, Error> {
    let mut query_map = to_query_map(&sign_params.query_map)?;

    // 公共参数在请求参数之后加入，同名的时候以公共参数为准
    query_map.insert("Service".to_owned(), sign_params.service.to_owned());
    query_map.insert(
        "AWSAccessKeyId".to_owned(),
        sign_params.access_key_id.to_owned(),
    );
    query_map.insert("Version".to_owned(), sign_params.version.to_owned());
    query_map.insert("Operation".to_owned(), sign_params.operation.to_owned());
    if !sign_params.associate_tag.is_empty() {
        query_map.insert(
            "AssociateTag".to_owned(),
            sign_params.associate_tag.to_owned(),
        );
    }
    query_map.insert(
        "Timestamp".to_owned(),
        format_timestamp(sign_params.timestamp),
    );

    let can_query_str = canonical_query_string(&query_map);
    let str_to_sign = format!(
        "{}\n{}\n{}\n{}",
        sign_params.req_method.to_uppercase(),
        sign_params.host,
        sign_params.path,
        can_query_str
    );
    debug!("string to sign:\n{str_to_sign}");
    let signature = sign_hmac_sha256(secret_access_key, &str_to_sign)?;

    // Signature本身不参与签名，计算完成后再加入，最终的query仍然是排序的
    query_map.insert("Signature".to_owned(), signature);

    Ok(format!(
        "{}://{}{}?{}",
        sign_params.scheme,
        sign_params.host,
        sign_params.path,
        canonical_query_string(&query_map)
    ))
}

/// CanonicalQueryString: 已排序的`k=v`用`&`拼接，k和v都percent encode
pub fn canonical_query_string(query_map: &BTreeMap<String, String>) -> String {
    query_map
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// 按照签名要求把请求参数序列化为BTreeMap<String, String>
///
/// 传入的query需要是一个to_value后为Value::Object的类型，`Value::Null`视为没有参数
pub fn to_query_map(query: impl Serialize) -> Result<BTreeMap<String, String>, Error> {
    let v = serde_json::to_value(query)?;
    match v {
        Value::Null => Ok(BTreeMap::new()),
        Value::Object(_) => Ok(flatten_root(&v)),
        other => Err(Error::Common(format!(
            "query params must serialize to a map, got: {other}"
        ))),
    }
}

fn flatten_root(v: &Value) -> BTreeMap<String, String> {
    let mut res = BTreeMap::new();

    if let Value::Object(map) = v {
        for (k, val) in map {
            if k == RESPONSE_GROUP {
                if let Value::Array(arr) = val {
                    join_response_group(arr, &mut res);
                    continue;
                }
            }
            flatten_with_prefix(k, val, &mut res);
        }
    }

    res
}

// ResponseGroup=Large,OfferFull
// 数组里不是字符串或数字的元素会被忽略，数组为空则不加入这个参数
fn join_response_group(arr: &[Value], out: &mut BTreeMap<String, String>) {
    let groups = arr
        .iter()
        .filter_map(|g| match g {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect::<Vec<_>>();
    if !groups.is_empty() {
        out.insert(RESPONSE_GROUP.to_owned(), groups.join(","));
    }
}

fn flatten_with_prefix(prefix: &str, v: &Value, out: &mut BTreeMap<String, String>) {
    match v {
        // 没有值的参数不加入query
        Value::Null => {}
        Value::Bool(b) => {
            let s = if *b { "True" } else { "False" };
            out.insert(prefix.to_owned(), s.to_owned());
        }
        Value::Number(n) => {
            out.insert(prefix.to_owned(), n.to_string());
        }
        Value::String(s) => {
            out.insert(prefix.to_owned(), s.clone());
        }
        Value::Array(arr) => {
            for (i, item) in arr.iter().enumerate() {
                // 下标从 1 开始："Item.1"、"Item.2"…
                let new_prefix = format!("{prefix}.{}", i + 1);
                flatten_with_prefix(&new_prefix, item, out);
            }
        }
        Value::Object(map) => {
            for (k, val) in map {
                let new_prefix = format!("{prefix}.{k}");
                flatten_with_prefix(&new_prefix, val, out);
            }
        }
    }
}
