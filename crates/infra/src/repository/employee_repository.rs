//! # EmployeeRepository
//!
//! 従業員情報の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID はデータベース採番**: INSERT の `RETURNING` で `SERIAL` 値を受け取る
//! - **位置パラメータ**: すべてのクエリは `$n` でバインド
//! - **行数による成否判定**: 更新・削除はちょうど 1 行に影響した場合のみ成功

use async_trait::async_trait;
use chrono::NaiveDate;
use crewwise_domain::employee::{
   ContactNumber,
   Email,
   Employee,
   EmployeeId,
   EmployeeName,
   NewEmployee,
};
use sqlx::PgPool;

use crate::error::InfraError;

/// 従業員リポジトリトレイト
///
/// 従業員情報の永続化操作を定義する。
/// インフラ層で具体的な実装を提供し、ハンドラ・ユースケース層から利用する。
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
   /// 従業員を登録し、採番された ID を含むエンティティを返す
   ///
   /// メールアドレスの重複は検査しない（既知の仕様）。
   async fn insert(&self, employee: &NewEmployee) -> Result<Employee, InfraError>;

   /// ID で従業員を検索
   async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError>;

   /// 全従業員を取得（ページネーションなし）
   async fn find_all(&self) -> Result<Vec<Employee>, InfraError>;

   /// 従業員を全置換で更新する
   ///
   /// `role` 列は昇進操作のみが書き込むため、ここでは変更しない。
   /// ちょうど 1 行が一致した場合に `true` を返す。
   async fn update(&self, id: EmployeeId, employee: &NewEmployee) -> Result<bool, InfraError>;

   /// 従業員を削除する
   ///
   /// ちょうど 1 行が削除された場合に `true` を返す。
   async fn delete(&self, id: EmployeeId) -> Result<bool, InfraError>;

   /// ロールを設定する（昇進操作）
   ///
   /// ちょうど 1 行が更新された場合に `true` を返す。
   async fn set_role(&self, id: EmployeeId, role: &str) -> Result<bool, InfraError>;
}

/// employee テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
   employee_id:         i32,
   name:                String,
   email:               String,
   contact_number:      String,
   date_of_joining:     NaiveDate,
   years_of_experience: i32,
   role:                Option<String>,
}

impl EmployeeRow {
   /// 行をドメインエンティティに復元する
   ///
   /// データベース上の値が値オブジェクトの不変条件を満たさない場合は
   /// `InfraError::Unexpected` を返す。
   fn into_domain(self) -> Result<Employee, InfraError> {
      Ok(Employee::from_db(
         EmployeeId::from_i32(self.employee_id),
         EmployeeName::new(self.name).map_err(|e| InfraError::unexpected(e.to_string()))?,
         Email::new(self.email).map_err(|e| InfraError::unexpected(e.to_string()))?,
         ContactNumber::new(self.contact_number)
            .map_err(|e| InfraError::unexpected(e.to_string()))?,
         self.date_of_joining,
         self.years_of_experience,
         self.role,
      ))
   }
}

/// PostgreSQL 実装の EmployeeRepository
#[derive(Debug, Clone)]
pub struct PostgresEmployeeRepository {
   pool: PgPool,
}

impl PostgresEmployeeRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
   async fn insert(&self, employee: &NewEmployee) -> Result<Employee, InfraError> {
      let row = sqlx::query_as::<_, EmployeeRow>(
         r#"
            INSERT INTO employee (name, email, contact_number, date_of_joining, years_of_experience)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING employee_id, name, email, contact_number, date_of_joining,
                      years_of_experience, role
            "#,
      )
      .bind(employee.name.as_str())
      .bind(employee.email.as_str())
      .bind(employee.contact_number.as_str())
      .bind(employee.date_of_joining)
      .bind(employee.years_of_experience)
      .fetch_one(&self.pool)
      .await?;

      row.into_domain()
   }

   async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError> {
      let row = sqlx::query_as::<_, EmployeeRow>(
         r#"
            SELECT employee_id, name, email, contact_number, date_of_joining,
                   years_of_experience, role
            FROM employee
            WHERE employee_id = $1
            "#,
      )
      .bind(id.as_i32())
      .fetch_optional(&self.pool)
      .await?;

      row.map(EmployeeRow::into_domain).transpose()
   }

   async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
      let rows = sqlx::query_as::<_, EmployeeRow>(
         r#"
            SELECT employee_id, name, email, contact_number, date_of_joining,
                   years_of_experience, role
            FROM employee
            ORDER BY employee_id
            "#,
      )
      .fetch_all(&self.pool)
      .await?;

      rows.into_iter().map(EmployeeRow::into_domain).collect()
   }

   async fn update(&self, id: EmployeeId, employee: &NewEmployee) -> Result<bool, InfraError> {
      let result = sqlx::query(
         r#"
            UPDATE employee
            SET name = $2, email = $3, contact_number = $4, date_of_joining = $5,
                years_of_experience = $6
            WHERE employee_id = $1
            "#,
      )
      .bind(id.as_i32())
      .bind(employee.name.as_str())
      .bind(employee.email.as_str())
      .bind(employee.contact_number.as_str())
      .bind(employee.date_of_joining)
      .bind(employee.years_of_experience)
      .execute(&self.pool)
      .await?;

      Ok(result.rows_affected() == 1)
   }

   async fn delete(&self, id: EmployeeId) -> Result<bool, InfraError> {
      let result = sqlx::query("DELETE FROM employee WHERE employee_id = $1")
         .bind(id.as_i32())
         .execute(&self.pool)
         .await?;

      Ok(result.rows_affected() == 1)
   }

   async fn set_role(&self, id: EmployeeId, role: &str) -> Result<bool, InfraError> {
      let result = sqlx::query("UPDATE employee SET role = $2 WHERE employee_id = $1")
         .bind(id.as_i32())
         .bind(role)
         .execute(&self.pool)
         .await?;

      Ok(result.rows_affected() == 1)
   }
}
