//! Request extractors
//!
//! Wrappers over axum's `Path` and `Query` whose rejections render as the
//! JSON `ErrorResponse` body instead of axum's plain-text default.

use axum::extract::FromRequestParts;

use crate::error::ApiError;

/// Path parameters, rejected as [`ApiError::BadRequest`]
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Query string, rejected as [`ApiError::BadRequest`]
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
