//! 地域和对应的API endpoint

use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Brazil,
    Canada,
    China,
    Germany,
    Spain,
    France,
    India,
    Italy,
    Japan,
    Mexico,
    UK,
    US,
}

/// 请求路径，所有地域相同
pub const API_PATH: &str = "/onca/xml";

impl Region {
    pub const ALL: [Region; 12] = [
        Region::Brazil,
        Region::Canada,
        Region::China,
        Region::Germany,
        Region::Spain,
        Region::France,
        Region::India,
        Region::Italy,
        Region::Japan,
        Region::Mexico,
        Region::UK,
        Region::US,
    ];

    /// 地域代码，如`JP`
    pub fn code(&self) -> &'static str {
        match self {
            Region::Brazil => "BR",
            Region::Canada => "CA",
            Region::China => "CN",
            Region::Germany => "DE",
            Region::Spain => "ES",
            Region::France => "FR",
            Region::India => "IN",
            Region::Italy => "IT",
            Region::Japan => "JP",
            Region::Mexico => "MX",
            Region::UK => "UK",
            Region::US => "US",
        }
    }

    pub fn host(&self) -> &'static str {
        match self {
            Region::Brazil => "webservices.amazon.com.br",
            Region::Canada => "webservices.amazon.ca",
            Region::China => "webservices.amazon.cn",
            Region::Germany => "webservices.amazon.de",
            Region::Spain => "webservices.amazon.es",
            Region::France => "webservices.amazon.fr",
            Region::India => "webservices.amazon.in",
            Region::Italy => "webservices.amazon.it",
            Region::Japan => "webservices.amazon.co.jp",
            Region::Mexico => "webservices.amazon.com.mx",
            Region::UK => "webservices.amazon.co.uk",
            Region::US => "webservices.amazon.com",
        }
    }

    pub fn https_endpoint(&self) -> String {
        format!("https://{}{}", self.host(), API_PATH)
    }

    pub fn http_endpoint(&self) -> String {
        format!("http://{}{}", self.host(), API_PATH)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// 无法识别的地域代码
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.code() == s)
            .ok_or_else(|| UnknownRegion(s.to_owned()))
    }
}
