use camp_core_types::RequestId;
use thiserror::Error;

/// Result type alias using CampError
pub type Result<T> = std::result::Result<T, CampError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (the CRUD layer, the
/// CLI, tests) can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidName,
    InvalidAge,
    InvalidTime,

    // Lookup
    NotFound,

    // Referential integrity (foreign keys, check constraints)
    ConstraintViolation,

    // Integration/IO
    /// The database file could not be opened, read or written
    Io,
    Serialization,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidName => "ERR_INVALID_NAME",
            ExErrorKind::InvalidAge => "ERR_INVALID_AGE",
            ExErrorKind::InvalidTime => "ERR_INVALID_TIME",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }

    /// True for deterministic input rejections (caller must fix the write)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidName
                | ExErrorKind::InvalidAge
                | ExErrorKind::InvalidTime
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) plus optional context describing which
/// operation, entity and field the failure belongs to.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<&'static str>,
    entity_id: Option<i64>,
    field: Option<&'static str>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            entity_id: None,
            field: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity type context (`"activity"`, `"camper"`, `"signup"`)
    pub fn with_entity(mut self, entity: &'static str) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: i64) -> Self {
        self.entity_id = Some(id);
        self
    }

    /// Add the offending field name
    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
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

    pub fn entity(&self) -> Option<&'static str> {
        self.entity
    }

    pub fn entity_id(&self) -> Option<i64> {
        self.entity_id
    }

    pub fn field(&self) -> Option<&'static str> {
        self.field
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
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
        match (self.entity, self.entity_id) {
            (Some(entity), Some(id)) => write!(f, " ({} {})", entity, id)?,
            (None, Some(id)) => write!(f, " (id: {})", id)?,
            _ => {}
        }
        if let Some(field) = self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for record operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CampError {
    // ===== Validation Errors =====
    /// Camper name is empty or absent
    #[error("Name is required for camper")]
    InvalidName,

    /// Camper age outside [8, 18]
    #[error("Camper age must be between 8 and 18 (got {age})")]
    InvalidAge { age: i64 },

    /// Signup time outside the open interval (0, 23)
    #[error("Signup time must be within operating hours (got {time})")]
    InvalidTime { time: i64 },

    // ===== Lookup Errors =====
    #[error("Activity not found: {activity_id}")]
    ActivityNotFound { activity_id: i64 },

    #[error("Camper not found: {camper_id}")]
    CamperNotFound { camper_id: i64 },

    #[error("Signup not found: {signup_id}")]
    SignupNotFound { signup_id: i64 },

    // ===== Integrity Errors =====
    /// A signup references a camper or activity that does not exist
    #[error("Referential integrity violation: {reason}")]
    ReferentialIntegrity { reason: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl CampError {
    /// The field a validation error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CampError::InvalidName => Some("name"),
            CampError::InvalidAge { .. } => Some("age"),
            CampError::InvalidTime { .. } => Some("time"),
            _ => None,
        }
    }

    /// True if the write was rejected by a field validator
    pub fn is_validation(&self) -> bool {
        self.field().is_some()
    }
}

impl From<CampError> for ExError {
    fn from(err: CampError) -> Self {
        let message = err.to_string();
        match err {
            CampError::InvalidName => ExError::new(ExErrorKind::InvalidName)
                .with_entity("camper")
                .with_field("name")
                .with_message(message),

            CampError::InvalidAge { .. } => ExError::new(ExErrorKind::InvalidAge)
                .with_entity("camper")
                .with_field("age")
                .with_message(message),

            CampError::InvalidTime { .. } => ExError::new(ExErrorKind::InvalidTime)
                .with_entity("signup")
                .with_field("time")
                .with_message(message),

            CampError::ActivityNotFound { activity_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity("activity")
                .with_entity_id(activity_id)
                .with_message("Activity not found"),

            CampError::CamperNotFound { camper_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity("camper")
                .with_entity_id(camper_id)
                .with_message("Camper not found"),

            CampError::SignupNotFound { signup_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity("signup")
                .with_entity_id(signup_id)
                .with_message("Signup not found"),

            CampError::ReferentialIntegrity { reason } => {
                ExError::new(ExErrorKind::ConstraintViolation).with_message(reason)
            }

            CampError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for CampError {
    fn from(err: serde_json::Error) -> Self {
        CampError::Serialization {
            message: err.to_string(),
        }
    }
}
