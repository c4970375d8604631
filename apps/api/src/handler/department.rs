//! # 部署ハンドラ
//!
//! 部署の CRUD とマネージャ候補一覧 API を提供する。
//!
//! ## エンドポイント
//!
//! - `POST /departments` - 部署作成（マネージャ検証あり）
//! - `GET /departments` - 部署一覧（マネージャ情報付き）
//! - `GET /departments/{department_id}` - 部署詳細（マネージャ情報付き）
//! - `PUT /departments/{department_id}` - 部署更新（マネージャ変更時は再検証）
//! - `DELETE /departments/{department_id}` - 部署削除
//! - `GET /managers` - マネージャ候補（勤続 5 年以上）の氏名一覧

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   response::IntoResponse,
};
use crewwise_domain::{
   department::{Department, DepartmentId, DepartmentWithManager},
   employee::EmployeeId,
};
use crewwise_infra::repository::DepartmentRepository;
use crewwise_shared::MessageResponse;
use serde::{Deserialize, Serialize};

use crate::{
   error::ApiError,
   usecase::{
      CreateDepartmentInput,
      DepartmentUseCaseImpl,
      UpdateDepartmentInput,
      helpers::FindResultExt,
   },
};

/// 部署 API の共有状態
pub struct DepartmentState {
   pub department_repository: Arc<dyn DepartmentRepository>,
   pub usecase:               DepartmentUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 部署の作成・更新リクエスト
#[derive(Debug, Deserialize)]
pub struct DepartmentRequest {
   pub name:       String,
   pub location:   String,
   pub manager_id: i32,
}

/// 部署 DTO（作成時のレスポンス）
#[derive(Debug, Serialize)]
pub struct DepartmentDto {
   pub department_id: i32,
   pub name:          String,
   pub location:      String,
   pub manager_id:    i32,
}

impl From<Department> for DepartmentDto {
   fn from(department: Department) -> Self {
      Self {
         department_id: department.id().as_i32(),
         name:          department.name().to_string(),
         location:      department.location().to_string(),
         manager_id:    department.manager_id().as_i32(),
      }
   }
}

/// マネージャ情報付き部署 DTO（取得系のレスポンス）
#[derive(Debug, Serialize)]
pub struct DepartmentWithManagerDto {
   pub department_id:          i32,
   pub name:                   String,
   pub location:               String,
   pub manager_name:           String,
   pub manager_email:          String,
   pub manager_contact_number: String,
}

impl From<DepartmentWithManager> for DepartmentWithManagerDto {
   fn from(department: DepartmentWithManager) -> Self {
      Self {
         department_id:          department.id.as_i32(),
         name:                   department.name,
         location:               department.location,
         manager_name:           department.manager_name.into_string(),
         manager_email:          department.manager_email.into_string(),
         manager_contact_number: department.manager_contact_number.into_string(),
      }
   }
}

// --- ハンドラ ---

/// POST /departments
///
/// 部署を作成する。
///
/// ## レスポンス
///
/// - `200 OK`: 採番された ID を含む作成済みレコード
/// - `400 Bad Request`: マネージャが存在しない、または勤続 5 年未満
pub async fn create_department(
   State(state): State<Arc<DepartmentState>>,
   Json(req): Json<DepartmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let department = state
      .usecase
      .create_department(CreateDepartmentInput {
         name:       req.name,
         location:   req.location,
         manager_id: EmployeeId::from_i32(req.manager_id),
      })
      .await?;

   Ok(Json(DepartmentDto::from(department)))
}

/// GET /departments/{department_id}
///
/// 部署詳細をマネージャ情報付きで取得する。
///
/// ## レスポンス
///
/// - `200 OK`: マネージャの氏名・メール・連絡先を含むレコード
/// - `404 Not Found`: 部署が見つからない
pub async fn get_department(
   State(state): State<Arc<DepartmentState>>,
   Path(department_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
   let department = state
      .department_repository
      .find_by_id_with_manager(DepartmentId::from_i32(department_id))
      .await
      .or_not_found("Department")?;

   Ok(Json(DepartmentWithManagerDto::from(department)))
}

/// GET /departments
///
/// 全部署をマネージャ情報付きで取得する。
pub async fn list_departments(
   State(state): State<Arc<DepartmentState>>,
) -> Result<impl IntoResponse, ApiError> {
   let departments = state.department_repository.find_all_with_manager().await?;

   let items: Vec<DepartmentWithManagerDto> = departments
      .into_iter()
      .map(DepartmentWithManagerDto::from)
      .collect();

   Ok(Json(items))
}

/// PUT /departments/{department_id}
///
/// 部署を全置換で更新する。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のレコード（マネージャ情報付き）
/// - `400 Bad Request`: 新しいマネージャが不正
/// - `404 Not Found`: 部署が見つからない
pub async fn update_department(
   State(state): State<Arc<DepartmentState>>,
   Path(department_id): Path<i32>,
   Json(req): Json<DepartmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let department = state
      .usecase
      .update_department(UpdateDepartmentInput {
         department_id: DepartmentId::from_i32(department_id),
         name:          req.name,
         location:      req.location,
         manager_id:    EmployeeId::from_i32(req.manager_id),
      })
      .await?;

   Ok(Json(DepartmentWithManagerDto::from(department)))
}

/// DELETE /departments/{department_id}
///
/// 部署を削除する。配属済みの従業員には波及しない。
///
/// ## レスポンス
///
/// - `200 OK`: 成功メッセージ
/// - `404 Not Found`: ちょうど 1 行が削除されなかった
pub async fn delete_department(
   State(state): State<Arc<DepartmentState>>,
   Path(department_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
   let deleted = state
      .department_repository
      .delete(DepartmentId::from_i32(department_id))
      .await?;
   if !deleted {
      return Err(ApiError::NotFound("Department not found".to_string()));
   }

   Ok(Json(MessageResponse::new("Department deleted successfully")))
}

/// GET /managers
///
/// マネージャ候補（勤続 5 年以上の従業員）の氏名一覧を返す。
/// 呼び出しのたびに全従業員を走査して計算し直す導出ビュー。
pub async fn list_eligible_managers(
   State(state): State<Arc<DepartmentState>>,
) -> Result<impl IntoResponse, ApiError> {
   let managers = state.usecase.eligible_managers().await?;

   Ok(Json(managers))
}
