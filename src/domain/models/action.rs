use super::FramePath;
use super::ResultItem;
use super::SearchRequest;

pub enum Action {
    SearchRequest(SearchRequest),
    SimilarSearchRequest {
        frame: FramePath,
        topk: usize,
    },
    ProcessRequest {
        id: usize,
        instruction: String,
        images: Vec<ResultItem>,
    },
    FrameContextRequest {
        frame: FramePath,
    },
}
