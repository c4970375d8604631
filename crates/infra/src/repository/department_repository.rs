//! # DepartmentRepository
//!
//! 部署情報の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **マネージャ付き読み取り**: 取得系は employee と INNER JOIN し、
//!   マネージャの氏名・メール・連絡先を付加した読み取りモデルを返す
//! - **検証はユースケース層**: マネージャの実在と勤続年数の検証は
//!   このリポジトリでは行わない

use async_trait::async_trait;
use crewwise_domain::{
   department::{Department, DepartmentId, DepartmentWithManager, NewDepartment},
   employee::{ContactNumber, Email, EmployeeId, EmployeeName},
};
use sqlx::PgPool;

use crate::error::InfraError;

/// 部署リポジトリトレイト
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
   /// 部署を登録し、採番された ID を含むエンティティを返す
   async fn insert(&self, department: &NewDepartment) -> Result<Department, InfraError>;

   /// ID で部署を検索（JOIN なし）
   async fn find_by_id(&self, id: DepartmentId) -> Result<Option<Department>, InfraError>;

   /// ID で部署をマネージャ情報付きで検索
   ///
   /// INNER JOIN のため、マネージャが削除済みの部署は見つからない。
   async fn find_by_id_with_manager(
      &self,
      id: DepartmentId,
   ) -> Result<Option<DepartmentWithManager>, InfraError>;

   /// 全部署をマネージャ情報付きで取得（ページネーションなし）
   async fn find_all_with_manager(&self) -> Result<Vec<DepartmentWithManager>, InfraError>;

   /// 部署を全置換で更新する
   ///
   /// ちょうど 1 行が一致した場合に `true` を返す。
   async fn update(&self, id: DepartmentId, department: &NewDepartment)
   -> Result<bool, InfraError>;

   /// 部署を削除する
   ///
   /// 配属済みの従業員には波及しない（カスケードなし）。
   /// ちょうど 1 行が削除された場合に `true` を返す。
   async fn delete(&self, id: DepartmentId) -> Result<bool, InfraError>;
}

/// department テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct DepartmentRow {
   department_id: i32,
   name:          String,
   location:      String,
   manager_id:    i32,
}

impl DepartmentRow {
   fn into_domain(self) -> Department {
      Department::from_db(
         DepartmentId::from_i32(self.department_id),
         self.name,
         self.location,
         EmployeeId::from_i32(self.manager_id),
      )
   }
}

/// department と employee の JOIN 結果の行
#[derive(Debug, sqlx::FromRow)]
struct DepartmentWithManagerRow {
   department_id:          i32,
   name:                   String,
   location:               String,
   manager_name:           String,
   manager_email:          String,
   manager_contact_number: String,
}

impl DepartmentWithManagerRow {
   fn into_domain(self) -> Result<DepartmentWithManager, InfraError> {
      Ok(DepartmentWithManager {
         id: DepartmentId::from_i32(self.department_id),
         name: self.name,
         location: self.location,
         manager_name: EmployeeName::new(self.manager_name)
            .map_err(|e| InfraError::unexpected(e.to_string()))?,
         manager_email: Email::new(self.manager_email)
            .map_err(|e| InfraError::unexpected(e.to_string()))?,
         manager_contact_number: ContactNumber::new(self.manager_contact_number)
            .map_err(|e| InfraError::unexpected(e.to_string()))?,
      })
   }
}

/// PostgreSQL 実装の DepartmentRepository
#[derive(Debug, Clone)]
pub struct PostgresDepartmentRepository {
   pool: PgPool,
}

impl PostgresDepartmentRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl DepartmentRepository for PostgresDepartmentRepository {
   async fn insert(&self, department: &NewDepartment) -> Result<Department, InfraError> {
      let row = sqlx::query_as::<_, DepartmentRow>(
         r#"
            INSERT INTO department (name, location, manager_id)
            VALUES ($1, $2, $3)
            RETURNING department_id, name, location, manager_id
            "#,
      )
      .bind(&department.name)
      .bind(&department.location)
      .bind(department.manager_id.as_i32())
      .fetch_one(&self.pool)
      .await?;

      Ok(row.into_domain())
   }

   async fn find_by_id(&self, id: DepartmentId) -> Result<Option<Department>, InfraError> {
      let row = sqlx::query_as::<_, DepartmentRow>(
         r#"
            SELECT department_id, name, location, manager_id
            FROM department
            WHERE department_id = $1
            "#,
      )
      .bind(id.as_i32())
      .fetch_optional(&self.pool)
      .await?;

      Ok(row.map(DepartmentRow::into_domain))
   }

   async fn find_by_id_with_manager(
      &self,
      id: DepartmentId,
   ) -> Result<Option<DepartmentWithManager>, InfraError> {
      let row = sqlx::query_as::<_, DepartmentWithManagerRow>(
         r#"
            SELECT d.department_id, d.name, d.location,
                   e.name AS manager_name,
                   e.email AS manager_email,
                   e.contact_number AS manager_contact_number
            FROM department d
            INNER JOIN employee e ON d.manager_id = e.employee_id
            WHERE d.department_id = $1
            "#,
      )
      .bind(id.as_i32())
      .fetch_optional(&self.pool)
      .await?;

      row.map(DepartmentWithManagerRow::into_domain).transpose()
   }

   async fn find_all_with_manager(&self) -> Result<Vec<DepartmentWithManager>, InfraError> {
      let rows = sqlx::query_as::<_, DepartmentWithManagerRow>(
         r#"
            SELECT d.department_id, d.name, d.location,
                   e.name AS manager_name,
                   e.email AS manager_email,
                   e.contact_number AS manager_contact_number
            FROM department d
            INNER JOIN employee e ON d.manager_id = e.employee_id
            ORDER BY d.department_id
            "#,
      )
      .fetch_all(&self.pool)
      .await?;

      rows.into_iter()
         .map(DepartmentWithManagerRow::into_domain)
         .collect()
   }

   async fn update(
      &self,
      id: DepartmentId,
      department: &NewDepartment,
   ) -> Result<bool, InfraError> {
      let result = sqlx::query(
         r#"
            UPDATE department
            SET name = $2, location = $3, manager_id = $4
            WHERE department_id = $1
            "#,
      )
      .bind(id.as_i32())
      .bind(&department.name)
      .bind(&department.location)
      .bind(department.manager_id.as_i32())
      .execute(&self.pool)
      .await?;

      Ok(result.rows_affected() == 1)
   }

   async fn delete(&self, id: DepartmentId) -> Result<bool, InfraError> {
      let result = sqlx::query("DELETE FROM department WHERE department_id = $1")
         .bind(id.as_i32())
         .execute(&self.pool)
         .await?;

      Ok(result.rows_affected() == 1)
   }
}
