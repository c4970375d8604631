//! # AssignmentRepository
//!
//! 従業員の部署配属ペアの永続化を担当するリポジトリ。
//!
//! ## 既知の競合
//!
//! 「一人一部署」の制約はストレージ層の一意制約ではなく、ユースケース層の
//! 事前チェック（[`AssignmentRepository::find_by_employee`]）で強制される。
//! チェックと INSERT はトランザクションで包まれないため、同一従業員への
//! 並行リクエストは両方ともチェックを通過し、重複行を生み得る。
//! 一意制約の追加は利用側との合意のうえで行う（DESIGN.md 参照）。

use async_trait::async_trait;
use crewwise_domain::{
   assignment::DepartmentAssignment,
   department::DepartmentId,
   employee::EmployeeId,
};
use sqlx::PgPool;

use crate::error::InfraError;

/// 配属リポジトリトレイト
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
   /// 配属ペアを登録する
   async fn insert(
      &self,
      employee_id: EmployeeId,
      department_id: DepartmentId,
   ) -> Result<DepartmentAssignment, InfraError>;

   /// 従業員の既存配属を検索（配属前の事前チェックに使用）
   async fn find_by_employee(
      &self,
      employee_id: EmployeeId,
   ) -> Result<Option<DepartmentAssignment>, InfraError>;
}

/// employee_department_assignment テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct AssignmentRow {
   employee_id:   i32,
   department_id: i32,
}

impl AssignmentRow {
   fn into_domain(self) -> DepartmentAssignment {
      DepartmentAssignment::new(
         EmployeeId::from_i32(self.employee_id),
         DepartmentId::from_i32(self.department_id),
      )
   }
}

/// PostgreSQL 実装の AssignmentRepository
#[derive(Debug, Clone)]
pub struct PostgresAssignmentRepository {
   pool: PgPool,
}

impl PostgresAssignmentRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl AssignmentRepository for PostgresAssignmentRepository {
   async fn insert(
      &self,
      employee_id: EmployeeId,
      department_id: DepartmentId,
   ) -> Result<DepartmentAssignment, InfraError> {
      let row = sqlx::query_as::<_, AssignmentRow>(
         r#"
            INSERT INTO employee_department_assignment (employee_id, department_id)
            VALUES ($1, $2)
            RETURNING employee_id, department_id
            "#,
      )
      .bind(employee_id.as_i32())
      .bind(department_id.as_i32())
      .fetch_one(&self.pool)
      .await?;

      Ok(row.into_domain())
   }

   async fn find_by_employee(
      &self,
      employee_id: EmployeeId,
   ) -> Result<Option<DepartmentAssignment>, InfraError> {
      let row = sqlx::query_as::<_, AssignmentRow>(
         r#"
            SELECT employee_id, department_id
            FROM employee_department_assignment
            WHERE employee_id = $1
            "#,
      )
      .bind(employee_id.as_i32())
      .fetch_optional(&self.pool)
      .await?;

      Ok(row.map(AssignmentRow::into_domain))
   }
}
