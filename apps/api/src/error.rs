//! # API エラー定義
//!
//! API 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! 読み取り系の「見つからない」も含め、すべての失敗は明示的な
//! ステータスコード + RFC 9457 Problem Details ボディで返す。
//! 200 ステータスに `error` フィールドを混ぜる方式は採用しない。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use crewwise_domain::DomainError;
use crewwise_infra::InfraError;
use crewwise_shared::ErrorResponse;
use thiserror::Error;

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// リソースが見つからない
   #[error("not found: {0}")]
   NotFound(String),

   /// 不正なリクエスト（バリデーション・ビジネスルール違反）
   #[error("bad request: {0}")]
   BadRequest(String),

   /// データベースエラー
   #[error("database error: {0}")]
   Database(#[from] InfraError),

   /// 内部エラー
   #[error("internal error: {0}")]
   Internal(String),
}

impl From<DomainError> for ApiError {
   fn from(error: DomainError) -> Self {
      match error {
         DomainError::Validation(msg) => ApiError::BadRequest(msg),
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, body) = match &self {
         ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg.clone())),
         ApiError::BadRequest(msg) => {
            (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg.clone()))
         }
         ApiError::Database(e) => {
            tracing::error!("データベースエラー: {}", e);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error("An internal error occurred"),
            )
         }
         ApiError::Internal(msg) => {
            tracing::error!("内部エラー: {}", msg);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error("An internal error occurred"),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}
