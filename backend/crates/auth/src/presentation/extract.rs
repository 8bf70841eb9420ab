//! Request extractors

use axum::extract::FromRequest;
use kernel::error::app_error::AppError;

/// JSON body whose rejections render as problem JSON with code `BAD_REQUEST`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
