//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{extract::FromRequest, Json};

use crate::shared::error::AppError;

/// JSON body extractor whose rejections render as `AppError::BadRequest`
/// (400 with the standard error body) instead of axum's plain-text 4xx.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
