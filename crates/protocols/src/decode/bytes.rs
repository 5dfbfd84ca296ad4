//! `vector<u8>` fields holding UTF-8 coin type strings.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

/// Decodes a byte-vector field into a string.
///
/// Accepted shapes:
/// - `"0x..."` hex string, decoded to bytes then UTF-8
/// - any other string, used as is
/// - an array of byte values
/// - `{ "bytes": "<base64>" }`
///
/// Returns `None` for anything else, for invalid encodings and for empty results.
pub fn decode_bytes_field(field: &Value) -> Option<String> {
    let decoded = match field {
        Value::String(s) => match s.strip_prefix("0x") {
            Some(hex_digits) => utf8_lossy(hex::decode(hex_digits).ok()?),
            None => s.clone(),
        },
        Value::Array(items) => {
            let bytes = items
                .iter()
                .map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
                .collect::<Option<Vec<u8>>>()?;
            utf8_lossy(bytes)
        }
        Value::Object(map) => {
            let encoded = map.get("bytes")?.as_str()?;
            utf8_lossy(STANDARD.decode(encoded).ok()?)
        }
        _ => return None,
    };

    (!decoded.is_empty()).then_some(decoded)
}

fn utf8_lossy(bytes: Vec<u8>) -> String {
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COIN: &str = "0x2::iota::IOTA";

    #[test]
    fn test_decode_hex_string() {
        let field = json!(format!("0x{}", hex::encode(COIN)));
        assert_eq!(decode_bytes_field(&field).as_deref(), Some(COIN));
    }

    #[test]
    fn test_decode_plain_string() {
        assert_eq!(decode_bytes_field(&json!("abc::m::T")).as_deref(), Some("abc::m::T"));
    }

    #[test]
    fn test_decode_byte_array() {
        let bytes: Vec<u8> = COIN.bytes().collect();
        assert_eq!(decode_bytes_field(&json!(bytes)).as_deref(), Some(COIN));
    }

    #[test]
    fn test_decode_base64_object() {
        let field = json!({ "bytes": STANDARD.encode(COIN) });
        assert_eq!(decode_bytes_field(&field).as_deref(), Some(COIN));
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert_eq!(decode_bytes_field(&json!(null)), None);
        assert_eq!(decode_bytes_field(&json!("")), None);
        assert_eq!(decode_bytes_field(&json!("0xzz")), None);
        assert_eq!(decode_bytes_field(&json!([1, 300])), None);
        assert_eq!(decode_bytes_field(&json!([])), None);
        assert_eq!(decode_bytes_field(&json!({ "bytes": 5 })), None);
        assert_eq!(decode_bytes_field(&json!(12)), None);
    }
}
