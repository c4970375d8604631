//! 従業員配属ユースケース
//!
//! 「一人一部署」の制約は、このユースケースの事前チェックでのみ
//! 強制される。チェックと INSERT はトランザクションで包まれないため、
//! 同一従業員への並行リクエストは重複配属を生み得る（既知の競合）。

use std::sync::Arc;

use crewwise_domain::{
   assignment::DepartmentAssignment,
   department::DepartmentId,
   employee::EmployeeId,
};
use crewwise_infra::repository::{
   AssignmentRepository,
   DepartmentRepository,
   EmployeeRepository,
};

use crate::{error::ApiError, usecase::helpers::FindResultExt};

/// 従業員配属ユースケース
pub struct AssignmentUseCaseImpl {
   employee_repository:   Arc<dyn EmployeeRepository>,
   department_repository: Arc<dyn DepartmentRepository>,
   assignment_repository: Arc<dyn AssignmentRepository>,
}

impl AssignmentUseCaseImpl {
   pub fn new(
      employee_repository: Arc<dyn EmployeeRepository>,
      department_repository: Arc<dyn DepartmentRepository>,
      assignment_repository: Arc<dyn AssignmentRepository>,
   ) -> Self {
      Self {
         employee_repository,
         department_repository,
         assignment_repository,
      }
   }

   /// 従業員を部署に配属する
   ///
   /// 1. 従業員の存在を確認（404）
   /// 2. 部署の存在を確認（404）
   /// 3. 既存配属がないことを確認（400）
   /// 4. 配属ペアを INSERT して返す
   pub async fn assign(
      &self,
      employee_id: EmployeeId,
      department_id: DepartmentId,
   ) -> Result<DepartmentAssignment, ApiError> {
      self.employee_repository
         .find_by_id(employee_id)
         .await
         .or_not_found("Employee")?;

      self.department_repository
         .find_by_id(department_id)
         .await
         .or_not_found("Department")?;

      let existing = self
         .assignment_repository
         .find_by_employee(employee_id)
         .await?;
      if existing.is_some() {
         return Err(ApiError::BadRequest(
            "Employee is already assigned to a department".to_string(),
         ));
      }

      let assignment = self
         .assignment_repository
         .insert(employee_id, department_id)
         .await?;

      Ok(assignment)
   }
}
