#[cfg(test)]
#[path = "frame_test.rs"]
mod tests;

use std::fmt;

use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Identifier of a single extracted still, shaped as
/// `<collection>/<video>/<index>.jpg`. The raw path is what the retrieval
/// backend hands out and must round-trip unaltered through `frame/{path}`
/// URLs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FramePath {
    raw: String,
}

impl FramePath {
    pub fn new(raw: impl Into<String>) -> FramePath {
        return FramePath { raw: raw.into() };
    }

    pub fn as_str(&self) -> &str {
        return &self.raw;
    }

    /// The video source id, the second path segment.
    pub fn source(&self) -> Option<&str> {
        return self.raw.split('/').nth(1);
    }

    /// The numeric frame index, the stem of the third path segment.
    pub fn index(&self) -> Option<u64> {
        return self
            .raw
            .split('/')
            .nth(2)?
            .split('.')
            .next()?
            .parse::<u64>()
            .ok();
    }
}

impl fmt::Display for FramePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.raw);
    }
}

/// Optional video playback context resolved for a selected frame. Every field
/// besides the frame itself may be missing, as the lookups backing them fail
/// silently.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameContext {
    pub frame: FramePath,
    pub timestamp: Option<f64>,
    pub embed_url: Option<String>,
}

impl FrameContext {
    pub fn new(frame: FramePath) -> FrameContext {
        return FrameContext {
            frame,
            timestamp: None,
            embed_url: None,
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub watch_url: String,
}

impl VideoMetadata {
    /// Derives an embeddable player link from the `v=` query parameter of
    /// `watch_url`, starting playback at `start_seconds`.
    pub fn embed_url(&self, start_seconds: u64) -> Option<String> {
        let video_id = self.watch_url.split("v=").nth(1)?.split('&').next()?;
        if video_id.is_empty() {
            return None;
        }

        return Some(format!(
            "https://www.youtube.com/embed/{video_id}?autoplay=1&start={start_seconds}"
        ));
    }
}
