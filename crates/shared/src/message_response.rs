//! # メッセージレスポンス
//!
//! 更新・削除・昇進など、レコード本体を返さない成功レスポンスの
//! 統一形式 `{ "message": "..." }` を提供する。

use serde::{Deserialize, Serialize};

/// 成功メッセージレスポンス
///
/// レコードを返す必要のない操作（更新・削除・昇進）の成功時に使用する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
   pub message: String,
}

impl MessageResponse {
   /// 新しい `MessageResponse` を作成する
   pub fn new(message: impl Into<String>) -> Self {
      Self {
         message: message.into(),
      }
   }
}
