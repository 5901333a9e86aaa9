#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::mapframe;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::FrameContext;
use crate::domain::models::FramePath;
use crate::domain::models::Media;
use crate::domain::models::ProcessingBox;
use crate::domain::models::ResultItem;
use crate::domain::models::RetrievalBox;
use crate::domain::models::SearchRequest;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /topk (/k) [NUMBER] - Sets how many results each search requests (1-100).
- /help (/h) - Toggles this help overlay.
- /quit /exit (/q) - Exit Frameseek.

HOTKEYS:
- Tab - Cycle focus between the query form, the gallery, and the instruction input.
- Alt+1 / Alt+2 / Alt+3 - Toggle the semantic / OCR / ASR query fragments.
- Enter - Submit the focused form: run the search, select the result, or send the instruction.
- Up/Down - Move between query fragments, or through the gallery.
- CTRL+Up / CTRL+Down - Raise or lower topk.
- s - In the gallery, search for frames similar to the highlighted result.
- CTRL+O - Open the latest edited image in the media modal.
- Esc - Close any open overlay.
- CTRL+C - Exit.
        "#;

    return text.trim().to_string();
}

/// Drains the action channel and fans every request out to its own task, so
/// searches and instructions in flight never block one another. Responses
/// come back as events; ordering is whatever the network produces.
pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        retrieval: RetrievalBox,
        processing: ProcessingBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        loop {
            let action = rx.recv().await;
            if action.is_none() {
                return Ok(());
            }

            match action.unwrap() {
                Action::SearchRequest(request) => {
                    let retrieval = retrieval.clone();
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        run_search(retrieval, request, tx).await;
                    });
                }
                Action::SimilarSearchRequest { frame, topk } => {
                    let retrieval = retrieval.clone();
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        run_similar_search(retrieval, frame, topk, tx).await;
                    });
                }
                Action::ProcessRequest {
                    id,
                    instruction,
                    images,
                } => {
                    let processing = processing.clone();
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        run_process(processing, id, instruction, images, tx).await;
                    });
                }
                Action::FrameContextRequest { frame } => {
                    let retrieval = retrieval.clone();
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        resolve_frame_context(retrieval, frame, tx).await;
                    });
                }
            }
        }
    }
}

// A failed search leaves the session's result set untouched: no event goes
// out, the error lands in the operator log only.
async fn run_search(
    retrieval: RetrievalBox,
    request: SearchRequest,
    tx: mpsc::UnboundedSender<Event>,
) {
    match retrieval.search(&request).await {
        Ok(items) => {
            let _ = tx.send(Event::SearchResults(items));
        }
        Err(err) => {
            tracing::error!(error = ?err, "search request failed");
        }
    }
}

async fn run_similar_search(
    retrieval: RetrievalBox,
    frame: FramePath,
    topk: usize,
    tx: mpsc::UnboundedSender<Event>,
) {
    match retrieval.search_similar(&frame, topk).await {
        Ok(items) => {
            let _ = tx.send(Event::SearchResults(items));
        }
        Err(err) => {
            tracing::error!(error = ?err, frame = %frame, "similar search failed");
        }
    }
}

async fn run_process(
    processing: ProcessingBox,
    id: usize,
    instruction: String,
    images: Vec<ResultItem>,
    tx: mpsc::UnboundedSender<Event>,
) {
    match processing.process(&instruction, &images).await {
        Ok(result) => {
            let _ = tx.send(Event::InstructionCompleted {
                id,
                media: Media::from(result),
            });
        }
        Err(err) => {
            tracing::error!(error = ?err, id, "process request failed");
            let _ = tx.send(Event::InstructionFailed { id });
        }
    }
}

// Both lookups degrade silently; whatever resolved still goes back so the
// detail view can show as much as it has.
async fn resolve_frame_context(
    retrieval: RetrievalBox,
    frame: FramePath,
    tx: mpsc::UnboundedSender<Event>,
) {
    let mut context = FrameContext::new(frame.clone());

    let source = match frame.source() {
        Some(source) => source.to_string(),
        None => {
            let _ = tx.send(Event::FrameContextResolved(context));
            return;
        }
    };

    match retrieval.mapframe(&source).await {
        Ok(csv) => {
            if let Some(index) = frame.index() {
                context.timestamp = mapframe::timestamp_for_frame(&mapframe::parse(&csv), index);
            }
        }
        Err(err) => {
            tracing::warn!(error = ?err, source, "mapframe lookup failed");
        }
    }

    match retrieval.video_metadata(&source).await {
        Ok(metadata) => {
            let start = context.timestamp.unwrap_or(0.0).floor() as u64;
            context.embed_url = metadata.embed_url(start);
        }
        Err(err) => {
            tracing::warn!(error = ?err, source, "video metadata lookup failed");
        }
    }

    let _ = tx.send(Event::FrameContextResolved(context));
}
