//! Typed failures for the review workflow
//!
//! Every core operation returns one of these; nothing is logged-and-swallowed
//! below the HTTP boundary. The `ResponseError` impl is the single place the
//! taxonomy maps to status codes and JSON bodies.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use derive_more::Display;
use sea_orm::DbErr;
use uuid::Uuid;

#[derive(Debug, Display)]
pub enum ModerationError {
    /// Malformed input; names the violated rule.
    #[display(fmt = "invalid {}: {}", field, message)]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The content record already has a queue entry, in any status.
    #[display(fmt = "content {} is already in the moderation queue", content_id)]
    DuplicateSubmission { content_id: Uuid },

    /// Unknown entry id, or the referenced content record is gone.
    #[display(fmt = "record not found")]
    NotFound,

    /// The entry left `pending` before this decision could land.
    #[display(fmt = "entry has already been reviewed")]
    AlreadyReviewed,

    /// The entry write and the content write did not land together.
    /// Reserved for backends without multi-statement transactions; the
    /// bundled Postgres store rolls both writes back instead.
    #[display(fmt = "decision was only partially applied; reconciliation required")]
    PartialApplication,

    /// Transient storage failure. Callers may retry with backoff; the core
    /// never retries mutations itself.
    #[display(fmt = "storage backend unavailable")]
    Store(DbErr),
}

impl ModerationError {
    /// Stable machine-readable code for API consumers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::DuplicateSubmission { .. } => "duplicate_submission",
            Self::NotFound => "not_found",
            Self::AlreadyReviewed => "already_reviewed",
            Self::PartialApplication => "partial_application",
            Self::Store(_) => "store_unavailable",
        }
    }
}

impl From<DbErr> for ModerationError {
    fn from(err: DbErr) -> Self {
        Self::Store(err)
    }
}

impl ResponseError for ModerationError {
    fn status_code(&self) -> StatusCode {
        match self {
            // DuplicateSubmission is a 400, not a 409: the submission itself
            // is invalid, there is no newer state for the caller to fetch.
            Self::Validation { .. } | Self::DuplicateSubmission { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyReviewed => StatusCode::CONFLICT,
            Self::PartialApplication => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Store(err) = self {
            // Surface a generic body; keep the storage detail in the log.
            log::error!("Moderation storage failure: {}", err);
        }
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.code(),
            "message": self.to_string(),
        }))
    }
}
