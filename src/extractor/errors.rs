use std::fmt::{Display, Formatter};

use crate::registry::entry::LayoutError;

/// Something that went wrong with a single line.
/// These never stop an extraction; the line is just left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    /// 1-based line number
    pub line: usize,
    pub content: String,
    pub kind: LineErrorKind
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineErrorKind {
    /// The payload of a data line couldn't be found where its layout says it should be
    MalformedLineLayout(LayoutError)
}

impl Display for LineDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            LineErrorKind::MalformedLineLayout(error) =>
                write!(f, "Malformed line {} in emoji-test.txt ({}): {}", self.line, error, self.content)
        }
    }
}

impl std::error::Error for LineDiagnostic {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            LineErrorKind::MalformedLineLayout(error) => Some(error)
        }
    }
}
