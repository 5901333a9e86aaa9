#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::progress;
use super::ConversationLog;
use super::Gallery;
use super::MediaModal;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Media;
use crate::domain::models::QueryForm;
use crate::domain::models::QueryType;
use crate::domain::models::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Query,
    Gallery,
    Instruction,
}

/// All client-side state, owned by the UI task. Backend tasks never touch it
/// directly; their results come back as events handled here, so every
/// mutation is a plain non-interleaved state replacement.
pub struct AppState {
    pub session: SessionState,
    pub query_form: QueryForm,
    pub conversation: ConversationLog,
    pub gallery: Gallery,
    pub modal: MediaModal,
    pub focus: Focus,
    pub show_warning: bool,
    pub show_help: bool,
    pub conversation_scroll: u16,
}

impl AppState {
    pub fn new(result_limit: usize) -> AppState {
        return AppState {
            session: SessionState::new(result_limit),
            query_form: QueryForm::default(),
            conversation: ConversationLog::default(),
            gallery: Gallery::default(),
            modal: MediaModal::default(),
            focus: Focus::Query,
            show_warning: false,
            show_help: false,
            conversation_scroll: 0,
        };
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Query => Focus::Gallery,
            Focus::Gallery => Focus::Instruction,
            Focus::Instruction => Focus::Query,
        };
    }

    /// Mirrors the semantic fragment into the session's active query. Called
    /// after every edit so other components always see the current text.
    pub fn sync_active_query(&mut self) {
        self.session.active_query = self
            .query_form
            .semantic_value()
            .unwrap_or_default()
            .to_string();
    }

    pub fn toggle_query_type(&mut self, qtype: QueryType) {
        let active = self.query_form.toggle(qtype);
        if qtype == QueryType::Semantic && !active {
            self.session.active_query.clear();
        }
        self.sync_active_query();
    }

    /// Dispatches the composed search, or does nothing at all when every
    /// fragment is empty. Returns whether a request went out.
    pub fn submit_search(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        self.sync_active_query();

        let request = match self.query_form.compose(self.session.result_limit) {
            Some(request) => request,
            None => return Ok(false),
        };

        tx.send(Action::SearchRequest(request))?;
        return Ok(true);
    }

    /// Appends an instruction message and dispatches the edit request carrying
    /// the current result set. Rejected with a visible warning when there are
    /// no results to edit; nothing is appended or dispatched in that case.
    pub fn send_instruction(
        &mut self,
        text: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<Option<usize>> {
        if !self.session.has_results() {
            self.show_warning = true;
            return Ok(None);
        }

        self.show_warning = false;
        let id = self.conversation.append(text);
        tx.send(Action::ProcessRequest {
            id,
            instruction: text.to_string(),
            images: self.session.results().to_vec(),
        })?;

        return Ok(Some(id));
    }

    /// Opens the detail view for the result under the gallery cursor: the
    /// media modal for inline payloads, the frame detail (plus context
    /// lookup) for references.
    pub fn select_current(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let item = match self.session.results().get(self.gallery.position) {
            Some(item) => item.clone(),
            None => return Ok(()),
        };

        if let Some(uri) = item.data_uri() {
            self.modal.open(&uri);
            return Ok(());
        }

        return self.gallery.select(&item, tx);
    }

    pub fn request_similar_current(&self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let item = match self.session.results().get(self.gallery.position) {
            Some(item) => item,
            None => return Ok(()),
        };

        self.gallery
            .request_similar(item, self.session.result_limit, tx)?;
        return Ok(());
    }

    /// Opens the most recently produced edited image in the media modal. The
    /// modal's data-shape check keeps videos out on its own.
    pub fn open_latest_media(&mut self) {
        let src = self
            .conversation
            .display_order()
            .find_map(|message| {
                return message.media.as_ref();
            })
            .and_then(|media| {
                return media.sources().first().map(|src| {
                    return src.to_string();
                });
            });

        if let Some(src) = src {
            self.modal.open(&src);
        }
    }

    pub fn close_overlays(&mut self) {
        self.modal.close();
        self.gallery.close_detail();
        self.show_help = false;
    }

    /// Applies a backend-originated event. Instruction events target their
    /// message by id, so completions landing out of order still update the
    /// message they belong to.
    pub fn handle_backend_event(&mut self, event: Event) {
        match event {
            Event::SearchResults(items) => {
                self.session.replace_results(items);
                self.gallery.clamp(self.session.results().len());
            }
            Event::InstructionProgress { id } => {
                if let Some(message) = self.conversation.get_mut(id) {
                    message.advance(progress::tick_increment());
                }
            }
            Event::InstructionCompleted { id, media } => {
                self.complete_instruction(id, media);
            }
            Event::InstructionFailed { id } => {
                if let Some(message) = self.conversation.get_mut(id) {
                    message.fail();
                }
            }
            Event::FrameContextResolved(context) => {
                self.gallery.handle_context(context);
            }
            _ => (),
        }
    }

    fn complete_instruction(&mut self, id: usize, media: Media) {
        if let Some(message) = self.conversation.get_mut(id) {
            message.complete(media);
        } else {
            tracing::warn!(id, "completion for an unknown instruction message");
        }
    }
}
