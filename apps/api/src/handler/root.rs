//! # ルートハンドラ
//!
//! `GET /` で挨拶ペイロードを返す。疎通確認用。

use axum::Json;
use crewwise_shared::MessageResponse;

/// ルートエンドポイント
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello World"))
}
