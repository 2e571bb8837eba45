/// One-shot comment box: compose, submit, then optionally start over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentBox {
    text: String,
    submitted: bool,
}

impl CommentBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Ignored once submitted.
    pub fn update(&mut self, text: impl Into<String>) {
        if !self.submitted {
            self.text = text.into();
        }
    }

    /// Returns whether the comment was accepted; blank text is not.
    pub fn submit(&mut self) -> bool {
        if !self.text.trim().is_empty() {
            self.submitted = true;
        }
        self.submitted
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.submitted = false;
    }
}
