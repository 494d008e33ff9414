// Document: the unit of ingestion.
//
// A document is just an id and its already-extracted raw text. Fetching and
// PDF/HTML extraction happen upstream; publication dates live in a separate
// caller-supplied map keyed by id (see analytics::trends).

use serde::{Deserialize, Serialize};

/// One ingested document. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Stable identity, such as a filename or URL-derived key.
    pub id: String,
    /// Raw extracted text, untokenized.
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
