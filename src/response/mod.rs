//! Response decoding - raw envelopes in, result sets out.
//!
//! Every gateway call answers with an [`Envelope`]: the HTTP status as the
//! store reports it and the body text. [`ResultSet::from_envelope`] turns it
//! into records:
//!
//! ```ignore
//! let envelope = Envelope::ok(r#"{"result":[{"@rid":"#12:2","@class":"Person","name":"A"}]}"#);
//! let results = ResultSet::from_envelope(envelope)?;
//! assert_eq!(results[0].id(), Some("#12:2"));
//! ```

mod parser;
mod result_set;

pub use parser::{CLASS_FIELD, META_PREFIX, RID_FIELD};
pub use result_set::{ResultSet, REPR_OUTPUT_SIZE, TRUNCATION_MARKER};

/// Status the store uses for rejected credentials.
pub const UNAUTHORIZED_STATUS: &str = "401";

/// A raw response: status code (as text) and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub status: String,
    pub body: String,
}

impl Envelope {
    pub fn new(status: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            body: body.into(),
        }
    }

    /// A `200` envelope.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new("200", body)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == UNAUTHORIZED_STATUS
    }
}
