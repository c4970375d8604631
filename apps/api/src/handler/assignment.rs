//! # 配属ハンドラ
//!
//! 従業員の部署配属 API を提供する。
//!
//! ## エンドポイント
//!
//! - `PUT /employees/{employee_id}/assign_department/{department_id}` - 配属

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   response::IntoResponse,
};
use crewwise_domain::{
   assignment::DepartmentAssignment,
   department::DepartmentId,
   employee::EmployeeId,
};
use serde::Serialize;

use crate::{error::ApiError, usecase::AssignmentUseCaseImpl};

/// 配属 API の共有状態
pub struct AssignmentState {
   pub usecase: AssignmentUseCaseImpl,
}

/// 配属ペア DTO
#[derive(Debug, Serialize)]
pub struct AssignmentDto {
   pub employee_id:   i32,
   pub department_id: i32,
}

impl From<DepartmentAssignment> for AssignmentDto {
   fn from(assignment: DepartmentAssignment) -> Self {
      Self {
         employee_id:   assignment.employee_id().as_i32(),
         department_id: assignment.department_id().as_i32(),
      }
   }
}

/// PUT /employees/{employee_id}/assign_department/{department_id}
///
/// 従業員を部署に配属する。
///
/// ## レスポンス
///
/// - `200 OK`: 配属ペア
/// - `400 Bad Request`: すでに配属済み
/// - `404 Not Found`: 従業員または部署が見つからない
pub async fn assign_department(
   State(state): State<Arc<AssignmentState>>,
   Path((employee_id, department_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, ApiError> {
   let assignment = state
      .usecase
      .assign(
         EmployeeId::from_i32(employee_id),
         DepartmentId::from_i32(department_id),
      )
      .await?;

   Ok(Json(AssignmentDto::from(assignment)))
}
