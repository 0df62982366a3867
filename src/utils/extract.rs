use axum::extract::FromRequest;

use crate::error::Error;

/// `Json` with rejections routed through the crate's error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);
