use axum::body::{Body, to_bytes};
use marquee_core::InvalidRuntimeFormat;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::errors::AppError;

/// Hard ceiling on request body size.
pub const MAX_BODY_BYTES: usize = 1_048_576;

/// Decode exactly one JSON value from `body` into `T`.
///
/// Rejects empty bodies, bodies over [`MAX_BODY_BYTES`], unknown fields
/// (via `deny_unknown_fields` on the destination type), and any trailing
/// content after the first value. Each failure maps to a distinct
/// human-readable 400 message.
pub async fn read_json<T: DeserializeOwned>(body: Body) -> Result<T, AppError> {
    let bytes = to_bytes(body, MAX_BODY_BYTES).await.map_err(|_| {
        AppError::BadRequest(format!(
            "body must not be larger than {} bytes",
            MAX_BODY_BYTES
        ))
    })?;

    if bytes.is_empty() {
        return Err(AppError::BadRequest("body must not be empty".to_string()));
    }

    let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
    let value = T::deserialize(&mut deserializer).map_err(classify)?;

    if deserializer.end().is_err() {
        return Err(AppError::BadRequest(
            "body must only contain a single JSON value".to_string(),
        ));
    }

    Ok(value)
}

fn classify(err: serde_json::Error) -> AppError {
    let message = match err.classify() {
        Category::Syntax => {
            format!("body contains badly formed JSON (at character {})", err.column())
        }
        // Truncated mid-value; the empty-body case was handled before decoding.
        Category::Eof => "body contains badly formed JSON".to_string(),
        Category::Data => {
            // serde_json reports unknown fields through the same category as
            // type mismatches; its own message already names the field and
            // the accepted set, so it is surfaced as-is.
            let detail = err.to_string();
            let runtime_condition = InvalidRuntimeFormat.to_string();
            if detail.starts_with("unknown field") {
                detail
            } else if detail.starts_with(&runtime_condition) {
                // The runtime codec's single opaque condition, minus the
                // position suffix serde_json appends.
                runtime_condition
            } else {
                format!(
                    "body contains incorrect JSON type (at line {} column {})",
                    err.line(),
                    err.column()
                )
            }
        }
        Category::Io => "body could not be read".to_string(),
    };

    AppError::BadRequest(message)
}
