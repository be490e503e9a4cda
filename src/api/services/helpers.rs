//! Response helpers shared by the route handlers

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

use crate::errors::QuicklinkError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub error: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 错误对应的 HTTP 状态码
pub fn http_status(err: &QuicklinkError) -> StatusCode {
    match err {
        QuicklinkError::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// 从 QuicklinkError 构建 JSON 错误响应
pub fn error_response(err: &QuicklinkError) -> HttpResponse {
    let body = match err {
        QuicklinkError::Validation(validation) => ErrorBody {
            code: err.code(),
            error: err.error_type(),
            violations: validation.messages(),
            message: None,
        },
        _ => ErrorBody {
            code: err.code(),
            error: err.error_type(),
            violations: Vec::new(),
            message: Some(err.message()),
        },
    };

    HttpResponse::build(http_status(err))
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(body)
}
