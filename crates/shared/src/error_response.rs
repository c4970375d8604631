//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は api 側の責務（shared に axum 依存を入れない）
//! - よく使うエラー種別は便利コンストラクタで提供し、URI のハードコードを排除
//! - 読み取り系の「見つからない」も 404 + この型で返す。
//!   200 ステータスに `error` フィールドを混ぜる方式は採用しない

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://crewwise.example.com/errors";

/// エラーレスポンス（RFC 9457 Problem Details）
///
/// すべての失敗レスポンスで統一された形式。
/// `type` フィールドは URI で問題の種類を識別し、`detail` に
/// 人間可読な理由を格納する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   ///
   /// サービス固有のエラー種別を作成する場合に使用する。
   /// `error_type_suffix` はベース URI に付加される（例: `"not-found"`）。
   pub fn new(
      error_type_suffix: &str,
      title: impl Into<String>,
      status: u16,
      detail: impl Into<String>,
   ) -> Self {
      Self {
         error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
         title: title.into(),
         status,
         detail: detail.into(),
      }
   }

   /// 400 Bad Request
   pub fn bad_request(detail: impl Into<String>) -> Self {
      Self::new("bad-request", "Bad Request", 400, detail)
   }

   /// 404 Not Found
   pub fn not_found(detail: impl Into<String>) -> Self {
      Self::new("not-found", "Not Found", 404, detail)
   }

   /// 500 Internal Server Error
   pub fn internal_error(detail: impl Into<String>) -> Self {
      Self::new("internal-error", "Internal Server Error", 500, detail)
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_not_foundはステータス404と型uriを設定する() {
      let response = ErrorResponse::not_found("Employee not found");

      assert_eq!(response.status, 404);
      assert_eq!(response.title, "Not Found");
      assert_eq!(
         response.error_type,
         "https://crewwise.example.com/errors/not-found"
      );
      assert_eq!(response.detail, "Employee not found");
   }

   #[test]
   fn test_serializeでtypeフィールド名に変換される() {
      let response = ErrorResponse::bad_request("Invalid manager");
      let json = serde_json::to_value(&response).unwrap();

      assert_eq!(
         json,
         serde_json::json!({
            "type": "https://crewwise.example.com/errors/bad-request",
            "title": "Bad Request",
            "status": 400,
            "detail": "Invalid manager",
         })
      );
   }

   #[test]
   fn test_deserializeでjsonからオブジェクトに変換する() {
      let json = r#"{"type":"https://crewwise.example.com/errors/not-found","title":"Not Found","status":404,"detail":"x"}"#;
      let response: ErrorResponse = serde_json::from_str(json).unwrap();

      assert_eq!(response, ErrorResponse::not_found("x"));
   }
}
