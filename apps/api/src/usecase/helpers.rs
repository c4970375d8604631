//! ユースケース層の共通ヘルパー
//!
//! リポジトリ呼び出し結果の変換など、複数のユースケースで
//! 繰り返されるパターンを共通化する。

use crewwise_infra::InfraError;

use crate::error::ApiError;

/// リポジトリの `Result<Option<T>, InfraError>` を `Result<T, ApiError>` に変換する
///
/// `find_by_id` 等の `Option` を返すリポジトリメソッドの結果を、
/// `ApiError::NotFound` または `ApiError::Database` に変換する。
///
/// ```ignore
/// let employee = self.employee_repository.find_by_id(id).await
///     .or_not_found("Employee")?;
/// ```
pub(crate) trait FindResultExt<T> {
    /// `None` の場合は `ApiError::NotFound`（`"{entity_name} not found"`）を返す
    fn or_not_found(self, entity_name: &str) -> Result<T, ApiError>;
}

impl<T> FindResultExt<T> for Result<Option<T>, InfraError> {
    fn or_not_found(self, entity_name: &str) -> Result<T, ApiError> {
        self.map_err(ApiError::Database)?
            .ok_or_else(|| ApiError::NotFound(format!("{entity_name} not found")))
    }
}

#[cfg(test)]
mod tests {
    use crewwise_infra::InfraError;

    use super::*;

    #[test]
    fn test_or_not_found_ok_some_は値を返す() {
        let result: Result<Option<i32>, InfraError> = Ok(Some(42));

        let value = result.or_not_found("Employee").unwrap();

        assert_eq!(value, 42);
    }

    #[test]
    fn test_or_not_found_ok_none_はnotfoundエラーを返す() {
        let result: Result<Option<i32>, InfraError> = Ok(None);

        let err = result.or_not_found("Employee").unwrap_err();

        match err {
            ApiError::NotFound(msg) => {
                assert_eq!(msg, "Employee not found");
            }
            other => panic!("NotFound を期待したが {:?} を受信", other),
        }
    }

    #[test]
    fn test_or_not_found_errはdatabaseエラーを返す() {
        let result: Result<Option<i32>, InfraError> = Err(InfraError::unexpected("接続失敗"));

        let err = result.or_not_found("Department").unwrap_err();

        assert!(matches!(err, ApiError::Database(_)));
    }
}
