#[cfg(test)]
#[path = "instruction_test.rs"]
mod tests;

use serde_derive::Deserialize;

pub const PROGRESS_DONE: f64 = 100.0;

/// Media produced by the processing backend for one instruction. A JSON array
/// means one edited image per element; any other shape is a single rendered
/// video.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Media {
    Images(Vec<String>),
    Video(String),
}

impl Media {
    pub fn sources(&self) -> Vec<&str> {
        return match self {
            Media::Images(images) => images
                .iter()
                .map(|src| {
                    return src.as_str();
                })
                .collect(),
            Media::Video(src) => vec![src.as_str()],
        };
    }
}

#[derive(Debug, Deserialize)]
pub struct ProcessResponse {
    pub result: ProcessResult,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProcessResult {
    Images(Vec<String>),
    Video(String),
}

impl From<ProcessResult> for Media {
    fn from(result: ProcessResult) -> Media {
        return match result {
            ProcessResult::Images(images) => Media::Images(
                images
                    .iter()
                    .map(|payload| {
                        return format!("data:image/jpeg;base64,{payload}");
                    })
                    .collect(),
            ),
            ProcessResult::Video(payload) => Media::Video(format!("data:video/mp4;base64,{payload}")),
        };
    }
}

/// One submitted edit instruction and its asynchronous lifecycle record. The
/// id is the message's append position in the conversation log and never
/// changes; completions must look messages up by it, not by display position.
#[derive(Clone, Debug)]
pub struct InstructionMessage {
    pub id: usize,
    pub text: String,
    pub media: Option<Media>,
    pub is_loading: bool,
    pub progress: f64,
}

impl InstructionMessage {
    pub fn new(id: usize, text: &str) -> InstructionMessage {
        return InstructionMessage {
            id,
            text: text.to_string(),
            media: None,
            is_loading: true,
            progress: 0.0,
        };
    }

    pub fn complete(&mut self, media: Media) {
        self.media = Some(media);
        self.is_loading = false;
        self.progress = PROGRESS_DONE;
    }

    pub fn fail(&mut self) {
        self.is_loading = false;
        self.progress = 0.0;
    }

    /// Applies one cosmetic progress tick. Ticks landing after the message
    /// reached a terminal state are ignored, so progress never regresses and
    /// failed messages stay at zero.
    pub fn advance(&mut self, increment: f64) {
        if !self.is_loading {
            return;
        }

        self.progress = (self.progress + increment).min(PROGRESS_DONE);
    }

    pub fn failed(&self) -> bool {
        return !self.is_loading && self.media.is_none();
    }
}
