use axum::extract::{FromRequest, FromRequestParts};
use crate::error::AppError;

/// JSON body extractor that turns any rejection (malformed body, missing or
/// mistyped field, wrong content type) into a 400 `AppError` before the
/// handler runs.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path extractor; an id segment that does not parse is reported as a
/// missing record (404) with the usual JSON error body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
