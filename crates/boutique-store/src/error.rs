//! # API Error Type
//!
//! Unified error type for store commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Boutique                           │
//! │                                                                     │
//! │  Rendering layer             Store backend                          │
//! │  ───────────────             ─────────────                          │
//! │                                                                     │
//! │  add_product(...)                                                   │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                             │  │
//! │  │  Result<Dto, ApiError>                                        │  │
//! │  │         │                                                     │  │
//! │  │         ▼                                                     │  │
//! │  │  Parse Error? ──── ValidationError ──────────┐                │  │
//! │  │         │                                    ▼                │  │
//! │  │  Rule Violation? ─ CoreError ─────────────► ApiError ────────►│  │
//! │  │         │                                                     │  │
//! │  │  Success ────────────────────────────────────────────────────►│  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │                                                                     │
//! │  ◄─────────────────────────────────────────────────────────────────  │
//! │                                                                     │
//! │  The caller surfaces e.message to the user and leaves its own view  │
//! │  of the prior state unchanged; e.code drives programmatic handling. │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use boutique_core::{CoreError, ValidationError};

/// API error returned from store commands.
///
/// ## Serialization
/// This is what the rendering layer receives when a command fails:
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Insufficient stock for P1: available 2, requested 5"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
///
/// ## Usage in the Rendering Layer
/// ```typescript
/// try {
///   await commands.recordSale({ productId, quantity });
/// } catch (e) {
///   switch (e.code) {
///     case 'INSUFFICIENT_STOCK':
///       showNotification(e.message);
///       break;
///     case 'VALIDATION_ERROR':
///       highlightForm(e.message);
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced record does not exist
    NotFound,

    /// Create used a colliding or empty identifier
    DuplicateId,

    /// Sale exceeds available stock
    InsufficientStock,

    /// Input parsing or validation failed
    ValidationError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DuplicateId(id) => ApiError::new(
                ErrorCode::DuplicateId,
                format!("Duplicate or empty id: '{}'", id),
            ),
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::SupplierNotFound(id) => ApiError::not_found("Supplier", &id),
            err @ CoreError::InsufficientStock { .. } => {
                ApiError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts bare validation errors (boundary parse failures) to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}
