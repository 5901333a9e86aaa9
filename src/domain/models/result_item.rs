#[cfg(test)]
#[path = "result_item_test.rs"]
mod tests;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::de::Deserializer;
use serde::ser::SerializeMap;
use serde::ser::Serializer;
use serde::Deserialize;
use serde::Serialize;

use super::FramePath;

/// One entry of a search result set. The backend returns either a bare base64
/// image payload or a `{frame: path}` reference; the two are disambiguated
/// once, at the ingestion boundary, instead of being re-detected at render
/// time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultItem {
    Inline(String),
    Reference(FramePath),
}

// Wire shape of a result item, as the backends produce and consume it.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawResultItem {
    Reference { frame: String },
    Payload(String),
}

/// The payload counts as inline image data only if it survives a
/// decode/re-encode round trip.
fn is_base64_payload(payload: &str) -> bool {
    return match BASE64.decode(payload) {
        Ok(bytes) => BASE64.encode(bytes) == payload,
        Err(_) => false,
    };
}

impl ResultItem {
    pub fn from_payload(payload: &str) -> ResultItem {
        if is_base64_payload(payload) {
            return ResultItem::Inline(payload.to_string());
        }

        return ResultItem::Reference(FramePath::new(payload));
    }

    pub fn frame(&self) -> Option<&FramePath> {
        return match self {
            ResultItem::Inline(_) => None,
            ResultItem::Reference(frame) => Some(frame),
        };
    }

    pub fn data_uri(&self) -> Option<String> {
        return match self {
            ResultItem::Inline(payload) => Some(format!("data:image/jpeg;base64,{payload}")),
            ResultItem::Reference(_) => None,
        };
    }

    /// Where a renderer should load the item from: inline payloads become
    /// data URIs, references resolve against the backend's frame endpoint
    /// with the path passed through unaltered.
    pub fn render_src(&self, host: &str) -> String {
        return match self {
            ResultItem::Inline(payload) => format!("data:image/jpeg;base64,{payload}"),
            ResultItem::Reference(frame) => frame_url(host, frame),
        };
    }
}

pub fn frame_url(host: &str, frame: &FramePath) -> String {
    return format!(
        "{host}/frame/{frame}",
        host = host.trim_end_matches('/'),
        frame = frame.as_str()
    );
}

impl<'de> Deserialize<'de> for ResultItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<ResultItem, D::Error> {
        return match RawResultItem::deserialize(deserializer)? {
            RawResultItem::Reference { frame } => Ok(ResultItem::Reference(FramePath::new(frame))),
            RawResultItem::Payload(payload) => Ok(ResultItem::from_payload(&payload)),
        };
    }
}

impl Serialize for ResultItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        return match self {
            ResultItem::Inline(payload) => serializer.serialize_str(payload),
            ResultItem::Reference(frame) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("frame", frame.as_str())?;
                map.end()
            }
        };
    }
}
