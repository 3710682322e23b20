//! 访问凭证
//!
//! 四个值都是必须的：AccessKeyID、SecretAccessKey、AssociateTag、Region。
//! 可以直接传入，也可以从环境变量读取：
//!
//! | 环境变量 | 字段 |
//! |---|---|
//! | `AWS_ACCESS_KEY_ID` | access_key_id |
//! | `AWS_SECRET_ACCESS_KEY` | secret_access_key |
//! | `AWS_ASSOCIATE_TAG` | associate_tag |
//! | `AWS_PRODUCT_REGION` | region，如`JP` |
//!
//! # Example
//! ```no_run
//! use pa_sdk::credentials::Credentials;
//!
//! let creds = Credentials::new("AK", "SK", "ngsio-22", "JP").unwrap();
//! assert_eq!(creds.region().host(), "webservices.amazon.co.jp");
//!
//! let creds = Credentials::from_env().unwrap();
//! println!("{creds:?}");
//! ```

use crate::region::Region;
use std::fmt::{Debug, Formatter};

pub const ENV_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const ENV_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const ENV_ASSOCIATE_TAG: &str = "AWS_ASSOCIATE_TAG";
pub const ENV_PRODUCT_REGION: &str = "AWS_PRODUCT_REGION";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("AccessKeyID is not specified")]
    MissingAccessKeyId,
    #[error("SecretAccessKey is not specified")]
    MissingSecretAccessKey,
    #[error("AssociateTag is not specified")]
    MissingAssociateTag,
    #[error("Region is not specified")]
    MissingRegion,
    #[error("Invalid Region {0}")]
    InvalidRegion(String),
}

/// 创建后不可修改
#[derive(Clone)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: String,
    associate_tag: String,
    region: Region,
}

impl Credentials {
    /// 按AccessKeyID、SecretAccessKey、AssociateTag、Region的顺序检查，返回第一个错误
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        associate_tag: impl Into<String>,
        region: &str,
    ) -> Result<Self, CredentialsError> {
        let access_key_id = access_key_id.into();
        let secret_access_key = secret_access_key.into();
        let associate_tag = associate_tag.into();

        if access_key_id.is_empty() {
            return Err(CredentialsError::MissingAccessKeyId);
        }
        if secret_access_key.is_empty() {
            return Err(CredentialsError::MissingSecretAccessKey);
        }
        if associate_tag.is_empty() {
            return Err(CredentialsError::MissingAssociateTag);
        }
        if region.is_empty() {
            return Err(CredentialsError::MissingRegion);
        }
        let region = region
            .parse::<Region>()
            .map_err(|e| CredentialsError::InvalidRegion(e.0))?;

        Ok(Self {
            access_key_id,
            secret_access_key,
            associate_tag,
            region,
        })
    }

    /// 从环境变量读取，未设置的变量视为空字符串
    pub fn from_env() -> Result<Self, CredentialsError> {
        let var = |key: &str| std::env::var(key).unwrap_or_default();
        Self::new(
            var(ENV_ACCESS_KEY_ID),
            var(ENV_SECRET_ACCESS_KEY),
            var(ENV_ASSOCIATE_TAG),
            &var(ENV_PRODUCT_REGION),
        )
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    pub fn associate_tag(&self) -> &str {
        &self.associate_tag
    }

    pub fn region(&self) -> Region {
        self.region
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &redact(&self.access_key_id))
            .field("secret_access_key", &redact(&self.secret_access_key))
            .field("associate_tag", &self.associate_tag)
            .field("region", &self.region)
            .finish()
    }
}

fn redact(v: &str) -> &str {
    if v.is_empty() { "<empty>" } else { "<redacted>" }
}
