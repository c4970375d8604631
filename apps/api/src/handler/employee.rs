//! # 従業員ハンドラ
//!
//! 従業員の CRUD と昇進 API を提供する。
//!
//! ## エンドポイント
//!
//! - `POST /employees` - 従業員登録
//! - `GET /employees` - 従業員一覧
//! - `GET /employees/{employee_id}` - 従業員詳細
//! - `PUT /employees/{employee_id}` - 従業員更新（全置換）
//! - `DELETE /employees/{employee_id}` - 従業員削除
//! - `PUT /employees/{employee_id}/promote` - マネージャへの昇進

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   response::IntoResponse,
};
use chrono::NaiveDate;
use crewwise_domain::{
   DomainError,
   employee::{ContactNumber, Email, Employee, EmployeeId, EmployeeName, NewEmployee},
};
use crewwise_infra::repository::EmployeeRepository;
use crewwise_shared::MessageResponse;
use serde::{Deserialize, Serialize};

use crate::{
   error::ApiError,
   usecase::{EmployeeUseCaseImpl, helpers::FindResultExt},
};

/// 従業員 API の共有状態
pub struct EmployeeState {
   pub employee_repository: Arc<dyn EmployeeRepository>,
   pub usecase:             EmployeeUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 従業員の登録・更新リクエスト
///
/// `role` は受け付けない。昇進エンドポイントのみが設定できる。
#[derive(Debug, Deserialize)]
pub struct EmployeeRequest {
   pub name:                String,
   pub email:               String,
   pub contact_number:      String,
   pub date_of_joining:     NaiveDate,
   pub years_of_experience: i32,
}

impl TryFrom<EmployeeRequest> for NewEmployee {
   type Error = DomainError;

   fn try_from(req: EmployeeRequest) -> Result<Self, Self::Error> {
      Ok(NewEmployee {
         name:                EmployeeName::new(req.name)?,
         email:               Email::new(req.email)?,
         contact_number:      ContactNumber::new(req.contact_number)?,
         date_of_joining:     req.date_of_joining,
         years_of_experience: req.years_of_experience,
      })
   }
}

/// 従業員 DTO
#[derive(Debug, Serialize)]
pub struct EmployeeDto {
   pub employee_id:         i32,
   pub name:                String,
   pub email:               String,
   pub contact_number:      String,
   pub date_of_joining:     NaiveDate,
   pub years_of_experience: i32,
   pub role:                Option<String>,
}

impl From<Employee> for EmployeeDto {
   fn from(employee: Employee) -> Self {
      Self {
         employee_id:         employee.id().as_i32(),
         name:                employee.name().as_str().to_string(),
         email:               employee.email().as_str().to_string(),
         contact_number:      employee.contact_number().as_str().to_string(),
         date_of_joining:     employee.date_of_joining(),
         years_of_experience: employee.years_of_experience(),
         role:                employee.role().map(|r| r.to_string()),
      }
   }
}

// --- ハンドラ ---

/// POST /employees
///
/// 従業員を登録する。
///
/// ## レスポンス
///
/// - `200 OK`: 採番された ID を含む登録済みレコード
/// - `400 Bad Request`: フィールド値の検証失敗
pub async fn create_employee(
   State(state): State<Arc<EmployeeState>>,
   Json(req): Json<EmployeeRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let new_employee = NewEmployee::try_from(req)?;

   let employee = state.employee_repository.insert(&new_employee).await?;

   Ok(Json(EmployeeDto::from(employee)))
}

/// GET /employees/{employee_id}
///
/// 従業員詳細を取得する。
///
/// ## レスポンス
///
/// - `200 OK`: 従業員レコード
/// - `404 Not Found`: 従業員が見つからない
pub async fn get_employee(
   State(state): State<Arc<EmployeeState>>,
   Path(employee_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
   let employee = state
      .employee_repository
      .find_by_id(EmployeeId::from_i32(employee_id))
      .await
      .or_not_found("Employee")?;

   Ok(Json(EmployeeDto::from(employee)))
}

/// GET /employees
///
/// 全従業員をページネーションなしで取得する。
pub async fn list_employees(
   State(state): State<Arc<EmployeeState>>,
) -> Result<impl IntoResponse, ApiError> {
   let employees = state.employee_repository.find_all().await?;

   let items: Vec<EmployeeDto> = employees.into_iter().map(EmployeeDto::from).collect();

   Ok(Json(items))
}

/// PUT /employees/{employee_id}
///
/// 従業員を全置換で更新する。`role` 列は変更しない。
///
/// ## レスポンス
///
/// - `200 OK`: 成功メッセージ
/// - `400 Bad Request`: フィールド値の検証失敗
/// - `404 Not Found`: ちょうど 1 行が一致しなかった
pub async fn update_employee(
   State(state): State<Arc<EmployeeState>>,
   Path(employee_id): Path<i32>,
   Json(req): Json<EmployeeRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let new_employee = NewEmployee::try_from(req)?;

   let updated = state
      .employee_repository
      .update(EmployeeId::from_i32(employee_id), &new_employee)
      .await?;
   if !updated {
      return Err(ApiError::NotFound("Employee not found".to_string()));
   }

   Ok(Json(MessageResponse::new("Employee updated successfully")))
}

/// DELETE /employees/{employee_id}
///
/// 従業員を削除する。削除は恒久的（論理削除なし）。
///
/// ## レスポンス
///
/// - `200 OK`: 成功メッセージ
/// - `404 Not Found`: ちょうど 1 行が削除されなかった
pub async fn delete_employee(
   State(state): State<Arc<EmployeeState>>,
   Path(employee_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
   let deleted = state
      .employee_repository
      .delete(EmployeeId::from_i32(employee_id))
      .await?;
   if !deleted {
      return Err(ApiError::NotFound("Employee not found".to_string()));
   }

   Ok(Json(MessageResponse::new("Employee deleted successfully")))
}

/// PUT /employees/{employee_id}/promote
///
/// 従業員をマネージャに昇進させる。
///
/// ## レスポンス
///
/// - `200 OK`: 成功メッセージ
/// - `400 Bad Request`: 勤続 5 年未満
/// - `404 Not Found`: 従業員が見つからない
pub async fn promote_employee(
   State(state): State<Arc<EmployeeState>>,
   Path(employee_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
   state
      .usecase
      .promote(EmployeeId::from_i32(employee_id))
      .await?;

   Ok(Json(MessageResponse::new("Employee promoted successfully")))
}
