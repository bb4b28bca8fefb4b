use axum::extract::FromRequest;

use crate::server::error::AppError;

/// `Json` extractor whose rejections surface as `AppError::BadRequest`.
///
/// Bodies with the wrong field types or broken syntax answer 400 with an `ErrorDto` body
/// instead of axum's plain-text 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
