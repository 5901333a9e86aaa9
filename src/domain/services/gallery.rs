#[cfg(test)]
#[path = "gallery_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::FrameContext;
use crate::domain::models::FramePath;
use crate::domain::models::ResultItem;

/// Cursor-driven selection over the shared result set, plus the detail view
/// for a selected frame reference and its (optional) video context.
#[derive(Default)]
pub struct Gallery {
    pub position: usize,
    pub selected: Option<FramePath>,
    pub context: Option<FrameContext>,
    pub detail_open: bool,
}

impl Gallery {
    pub fn move_up(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.position + 1 < len {
            self.position += 1;
        }
    }

    /// Keeps the cursor inside the result set after it was replaced.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.position = 0;
        } else if self.position >= len {
            self.position = len - 1;
        }
    }

    /// Opens the detail view for a frame reference and kicks off the video
    /// context lookup. The lookup degrades silently; the detail view opens
    /// regardless of whether context ever arrives.
    pub fn select(&mut self, item: &ResultItem, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let frame = match item.frame() {
            Some(frame) => frame.clone(),
            None => return Ok(()),
        };

        self.detail_open = true;
        self.context = None;
        self.selected = Some(frame.clone());
        tx.send(Action::FrameContextRequest { frame })?;

        return Ok(());
    }

    /// Similarity search is seeded from the item's path reference; inline
    /// payloads carry no path and are skipped.
    pub fn request_similar(
        &self,
        item: &ResultItem,
        topk: usize,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        let frame = match item.frame() {
            Some(frame) => frame.clone(),
            None => {
                tracing::debug!("similar search skipped for an inline result");
                return Ok(false);
            }
        };

        tx.send(Action::SimilarSearchRequest { frame, topk })?;
        return Ok(true);
    }

    /// Stale context for a frame the user has navigated away from is dropped.
    pub fn handle_context(&mut self, context: FrameContext) {
        if self.selected.as_ref() == Some(&context.frame) {
            self.context = Some(context);
        }
    }

    pub fn close_detail(&mut self) {
        self.detail_open = false;
    }
}
