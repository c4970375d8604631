//! 従業員昇進ユースケース

use std::sync::Arc;

use crewwise_domain::{
   clock::Clock,
   employee::{EmployeeId, MANAGER_ROLE},
};
use crewwise_infra::repository::EmployeeRepository;

use crate::{error::ApiError, usecase::helpers::FindResultExt};

/// 従業員昇進ユースケース
pub struct EmployeeUseCaseImpl {
   employee_repository: Arc<dyn EmployeeRepository>,
   clock:               Arc<dyn Clock>,
}

impl EmployeeUseCaseImpl {
   pub fn new(employee_repository: Arc<dyn EmployeeRepository>, clock: Arc<dyn Clock>) -> Self {
      Self {
         employee_repository,
         clock,
      }
   }

   /// 従業員をマネージャに昇進させる
   ///
   /// 1. 従業員の存在を確認（404）
   /// 2. 勤続年数 5 年以上を確認（400）
   /// 3. role に `"manager"` を設定。ちょうど 1 行更新された場合のみ成功
   pub async fn promote(&self, employee_id: EmployeeId) -> Result<(), ApiError> {
      let employee = self
         .employee_repository
         .find_by_id(employee_id)
         .await
         .or_not_found("Employee")?;

      if !employee.is_manager_eligible(self.clock.today()) {
         return Err(ApiError::BadRequest(
            "Employee does not meet experience criteria for promotion".to_string(),
         ));
      }

      // 存在確認と更新の間に削除された場合は 404
      let updated = self
         .employee_repository
         .set_role(employee_id, MANAGER_ROLE)
         .await?;
      if !updated {
         return Err(ApiError::NotFound("Employee not found".to_string()));
      }

      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use chrono::NaiveDate;
   use crewwise_domain::{
      clock::FixedClock,
      employee::{ContactNumber, Email, Employee, EmployeeName},
   };
   use crewwise_infra::mock::MockEmployeeRepository;

   use super::*;

   fn date(y: i32, m: u32, d: u32) -> NaiveDate {
      NaiveDate::from_ymd_opt(y, m, d).unwrap()
   }

   fn seed_employee(repo: &MockEmployeeRepository, id: i32, date_of_joining: NaiveDate) {
      repo.add_employee(Employee::from_db(
         EmployeeId::from_i32(id),
         EmployeeName::new("Rahul Mehta").unwrap(),
         Email::new("rahul@example.com").unwrap(),
         ContactNumber::new("090-1111-2222").unwrap(),
         date_of_joining,
         2,
         None,
      ));
   }

   fn build_sut(repo: &MockEmployeeRepository, today: NaiveDate) -> EmployeeUseCaseImpl {
      EmployeeUseCaseImpl::new(Arc::new(repo.clone()), Arc::new(FixedClock::new(today)))
   }

   #[tokio::test]
   async fn test_promote_勤続5年以上はマネージャになる() {
      // Arrange
      let repo = MockEmployeeRepository::new();
      let today = date(2024, 6, 15);
      seed_employee(&repo, 1, date(2019, 6, 1));
      let sut = build_sut(&repo, today);

      // Act
      let result = sut.promote(EmployeeId::from_i32(1)).await;

      // Assert
      result.unwrap();
      let employee = repo.find_by_id(EmployeeId::from_i32(1)).await.unwrap().unwrap();
      assert_eq!(employee.role(), Some("manager"));
   }

   #[tokio::test]
   async fn test_promote_勤続5年未満は400でroleは変わらない() {
      // Arrange
      let repo = MockEmployeeRepository::new();
      let today = date(2024, 6, 15);
      seed_employee(&repo, 1, date(2021, 1, 1));
      let sut = build_sut(&repo, today);

      // Act
      let err = sut.promote(EmployeeId::from_i32(1)).await.unwrap_err();

      // Assert
      assert!(matches!(
         err,
         ApiError::BadRequest(msg)
            if msg == "Employee does not meet experience criteria for promotion"
      ));
      let employee = repo.find_by_id(EmployeeId::from_i32(1)).await.unwrap().unwrap();
      assert_eq!(employee.role(), None);
   }

   #[tokio::test]
   async fn test_promote_存在しない従業員は404() {
      // Arrange
      let repo = MockEmployeeRepository::new();
      let sut = build_sut(&repo, date(2024, 6, 15));

      // Act
      let err = sut.promote(EmployeeId::from_i32(99)).await.unwrap_err();

      // Assert
      assert!(matches!(err, ApiError::NotFound(msg) if msg == "Employee not found"));
   }
}
