use tui_textarea::Input;

use super::FrameContext;
use super::Media;
use super::ResultItem;

pub enum Event {
    SearchResults(Vec<ResultItem>),
    InstructionCompleted { id: usize, media: Media },
    InstructionFailed { id: usize },
    InstructionProgress { id: usize },
    FrameContextResolved(FrameContext),
    KeyboardCharInput(Input),
    KeyboardEnter(),
    KeyboardTab(),
    KeyboardEsc(),
    KeyboardCTRLC(),
    KeyboardPaste(String),
    UIResize(),
    UIScrollUp(),
    UIScrollDown(),
    UITick(),
}
