use crate::Error;
use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use quick_xml::Reader;
use quick_xml::events::Event;
use sha2::Sha256;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

/// 输出格式: YYYY-MM-DDThh:mm:ssZ，先转换到UTC，不带小数秒
///
/// eg: 2016-11-16T12:34:00Z
pub fn format_timestamp(date_time: &OffsetDateTime) -> String {
    date_time
        .to_offset(UtcOffset::UTC)
        .format(TIMESTAMP_FORMAT)
        // 格式描述中只有数字字段，不会格式化失败
        .unwrap_or_default()
}

/// HMAC-SHA256，结果为标准base64（带`=`填充）
pub fn sign_hmac_sha256(secret: &str, str_to_sign: &str) -> Result<String, Error> {
    type HmacSha256 = Hmac<Sha256>;
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())?;
    mac.update(str_to_sign.as_bytes());
    let res = mac.finalize().into_bytes();
    Ok(general_purpose::STANDARD.encode(res))
}

/// 返回xml文档根元素的名称（不含namespace前缀），文档为空或者无法解析时返回`None`
pub fn root_element_name(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Some(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) | Err(_) => return None,
            // xml声明、注释、空白等
            Ok(_) => {}
        }
    }
}
