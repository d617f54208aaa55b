use bimdiff_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using BimDiffError
pub type Result<T> = std::result::Result<T, BimDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (CLI, report
/// generators, UI backends) can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Selection
    /// Selection has the wrong number of snapshot ids
    SelectionSize,
    /// The same snapshot id appears more than once in a selection
    DuplicateSelection,
    /// A selected snapshot id does not belong to any lineage
    NotFound,

    // Input
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::SelectionSize => "ERR_SELECTION_SIZE",
            ExErrorKind::DuplicateSelection => "ERR_DUPLICATE_SELECTION",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) plus optional context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    candidates: Option<Vec<String>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            candidates: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (snapshot id, element key, config path)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the offending ids (used for selection errors)
    pub fn with_candidates(mut self, ids: Vec<String>) -> Self {
        self.candidates = Some(ids);
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn candidates(&self) -> Option<&[String]> {
        self.candidates.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by the comparison core
///
/// Comparison and classification never fail; only snapshot selection and
/// configuration loading produce errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BimDiffError {
    // ===== Selection Errors =====
    /// Wrong number of snapshot ids for the requested resolution
    #[error("Selection of {actual} snapshot(s) is invalid for {op}: expected {min}..={max}")]
    SelectionSize {
        op: &'static str,
        actual: usize,
        min: usize,
        max: usize,
    },

    /// A selected id is not part of any lineage
    #[error("Snapshot not found in any lineage: {snapshot_id}")]
    UnknownSnapshot { snapshot_id: i64 },

    /// A selected id was given more than once
    #[error("Snapshot selected more than once: {snapshot_id}")]
    DuplicateSelection { snapshot_id: i64 },

    // ===== Config Errors =====
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<BimDiffError> for ExError {
    fn from(err: BimDiffError) -> Self {
        let message = err.to_string();
        match err {
            BimDiffError::SelectionSize { op, .. } => ExError::new(ExErrorKind::SelectionSize)
                .with_op(op)
                .with_message(message),

            BimDiffError::UnknownSnapshot { snapshot_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(snapshot_id.to_string())
                .with_message(message),

            BimDiffError::DuplicateSelection { snapshot_id } => {
                ExError::new(ExErrorKind::DuplicateSelection)
                    .with_entity_id(snapshot_id.to_string())
                    .with_candidates(vec![snapshot_id.to_string()])
                    .with_message(message)
            }

            BimDiffError::InvalidConfig { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }

            BimDiffError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for BimDiffError {
    fn from(err: serde_json::Error) -> Self {
        BimDiffError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for BimDiffError {
    fn from(err: toml::de::Error) -> Self {
        BimDiffError::InvalidConfig {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_size_maps_to_stable_code() {
        let err = BimDiffError::SelectionSize {
            op: "resolve_pair",
            actual: 3,
            min: 2,
            max: 2,
        };
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::SelectionSize);
        assert_eq!(ex.code(), "ERR_SELECTION_SIZE");
        assert_eq!(ex.op(), Some("resolve_pair"));
        assert!(ex.message().contains("3 snapshot(s)"));
    }

    #[test]
    fn test_duplicate_selection_carries_candidate() {
        let ex: ExError = BimDiffError::DuplicateSelection { snapshot_id: 7 }.into();
        assert_eq!(ex.candidates(), Some(&["7".to_string()][..]));
        assert_eq!(ex.entity_id(), Some("7"));
    }

    #[test]
    fn test_display_includes_code_and_op() {
        let ex = ExError::new(ExErrorKind::Io)
            .with_op("load_config")
            .with_message("file missing");
        let rendered = ex.to_string();
        assert!(rendered.starts_with("[ERR_IO]"));
        assert!(rendered.contains("load_config"));
        assert!(rendered.contains("file missing"));
    }

    #[test]
    fn test_request_id_none_by_default() {
        let ex = ExError::new(ExErrorKind::Serialization);
        assert!(ex.request_id().is_none());
        assert!(ex.trace_id().is_none());
        assert!(ex.candidates().is_none());
    }
}
