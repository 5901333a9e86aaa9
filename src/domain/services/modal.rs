#[cfg(test)]
#[path = "modal_test.rs"]
mod tests;

/// Full-size display overlay. Only inline image data can be shown; paths and
/// videos are rejected by the data-shape check, so `open` reports whether the
/// modal actually opened.
#[derive(Default)]
pub struct MediaModal {
    src: Option<String>,
}

impl MediaModal {
    pub fn open(&mut self, src: &str) -> bool {
        if !src.starts_with("data:image") {
            return false;
        }

        self.src = Some(src.to_string());
        return true;
    }

    pub fn close(&mut self) {
        self.src = None;
    }

    pub fn is_open(&self) -> bool {
        return self.src.is_some();
    }

    pub fn src(&self) -> Option<&str> {
        return self.src.as_deref();
    }
}
