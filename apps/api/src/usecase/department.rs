//! 部署管理ユースケース
//!
//! 部署の作成・更新時のマネージャ検証と、マネージャ候補一覧の導出を
//! 実装する。検証の順序は「実在 → 勤続年数」で固定。

use std::sync::Arc;

use crewwise_domain::{
   clock::Clock,
   department::{Department, DepartmentId, DepartmentWithManager, NewDepartment},
   employee::EmployeeId,
};
use crewwise_infra::repository::{DepartmentRepository, EmployeeRepository};

use crate::{error::ApiError, usecase::helpers::FindResultExt};

/// 部署作成の入力
pub struct CreateDepartmentInput {
   pub name:       String,
   pub location:   String,
   pub manager_id: EmployeeId,
}

/// 部署更新の入力
pub struct UpdateDepartmentInput {
   pub department_id: DepartmentId,
   pub name:          String,
   pub location:      String,
   pub manager_id:    EmployeeId,
}

/// 部署管理ユースケース
pub struct DepartmentUseCaseImpl {
   department_repository: Arc<dyn DepartmentRepository>,
   employee_repository:   Arc<dyn EmployeeRepository>,
   clock:                 Arc<dyn Clock>,
}

impl DepartmentUseCaseImpl {
   pub fn new(
      department_repository: Arc<dyn DepartmentRepository>,
      employee_repository: Arc<dyn EmployeeRepository>,
      clock: Arc<dyn Clock>,
   ) -> Self {
      Self {
         department_repository,
         employee_repository,
         clock,
      }
   }

   /// 部署を作成する
   ///
   /// 1. マネージャの実在を確認（400）
   /// 2. マネージャの勤続年数 5 年以上を確認（400）
   /// 3. 両方のチェックを通過した場合のみ INSERT
   pub async fn create_department(
      &self,
      input: CreateDepartmentInput,
   ) -> Result<Department, ApiError> {
      let manager = self.employee_repository.find_by_id(input.manager_id).await?;
      let Some(manager) = manager else {
         return Err(ApiError::BadRequest(
            "Invalid manager for the department. Manager not found.".to_string(),
         ));
      };

      if !manager.is_manager_eligible(self.clock.today()) {
         return Err(ApiError::BadRequest(
            "Manager does not meet experience criteria for the department. Manager must have at \
             least 5 years of experience."
               .to_string(),
         ));
      }

      let department = self
         .department_repository
         .insert(&NewDepartment {
            name:       input.name,
            location:   input.location,
            manager_id: input.manager_id,
         })
         .await?;

      Ok(department)
   }

   /// 部署を更新する
   ///
   /// 1. 部署の存在を確認（404）
   /// 2. `manager_id` が現在の値から変わる場合のみ、新マネージャの実在と
   ///    勤続年数を再検証（400）
   /// 3. ちょうど 1 行が一致した場合のみ更新し、マネージャ情報付きで再取得
   pub async fn update_department(
      &self,
      input: UpdateDepartmentInput,
   ) -> Result<DepartmentWithManager, ApiError> {
      let existing = self
         .department_repository
         .find_by_id(input.department_id)
         .await
         .or_not_found("Department")?;

      if input.manager_id != existing.manager_id() {
         let new_manager = self.employee_repository.find_by_id(input.manager_id).await?;
         let Some(new_manager) = new_manager else {
            return Err(ApiError::BadRequest(
               "Invalid manager. Manager not found.".to_string(),
            ));
         };

         if !new_manager.is_manager_eligible(self.clock.today()) {
            return Err(ApiError::BadRequest(
               "Invalid manager. Manager does not meet experience criteria.".to_string(),
            ));
         }
      }

      let updated = self
         .department_repository
         .update(
            input.department_id,
            &NewDepartment {
               name:       input.name,
               location:   input.location,
               manager_id: input.manager_id,
            },
         )
         .await?;
      if !updated {
         return Err(ApiError::NotFound("Department not found".to_string()));
      }

      // 更新後の部署をマネージャ情報付きで取得して返す
      self.department_repository
         .find_by_id_with_manager(input.department_id)
         .await
         .or_not_found("Department")
   }

   /// マネージャ候補（勤続 5 年以上の従業員）の氏名一覧を返す
   ///
   /// 永続化されない導出ビュー。呼び出しのたびに全従業員を走査して
   /// 計算し直す。
   pub async fn eligible_managers(&self) -> Result<Vec<String>, ApiError> {
      let today = self.clock.today();
      let employees = self.employee_repository.find_all().await?;

      Ok(employees
         .iter()
         .filter(|e| e.is_manager_eligible(today))
         .map(|e| e.name().as_str().to_string())
         .collect())
   }
}

#[cfg(test)]
mod tests {
   use chrono::NaiveDate;
   use crewwise_domain::{
      clock::FixedClock,
      employee::{ContactNumber, Email, Employee, EmployeeName},
   };
   use crewwise_infra::{
      mock::{MockDepartmentRepository, MockEmployeeRepository},
      repository::DepartmentRepository,
   };
   use pretty_assertions::assert_eq;

   use super::*;

   fn date(y: i32, m: u32, d: u32) -> NaiveDate {
      NaiveDate::from_ymd_opt(y, m, d).unwrap()
   }

   fn seed_employee(
      repo: &MockEmployeeRepository,
      id: i32,
      name: &str,
      date_of_joining: NaiveDate,
   ) {
      repo.add_employee(Employee::from_db(
         EmployeeId::from_i32(id),
         EmployeeName::new(name).unwrap(),
         Email::new(format!("{}@example.com", id)).unwrap(),
         ContactNumber::new("080-0000-0000").unwrap(),
         date_of_joining,
         1,
         None,
      ));
   }

   fn build_sut(
      employees: &MockEmployeeRepository,
      departments: &MockDepartmentRepository,
      today: NaiveDate,
   ) -> DepartmentUseCaseImpl {
      DepartmentUseCaseImpl::new(
         Arc::new(departments.clone()),
         Arc::new(employees.clone()),
         Arc::new(FixedClock::new(today)),
      )
   }

   #[tokio::test]
   async fn test_create_department_適格なマネージャで作成できる() {
      // Arrange
      let employees = MockEmployeeRepository::new();
      let departments = MockDepartmentRepository::new(employees.clone());
      let today = date(2024, 6, 15);
      seed_employee(&employees, 1, "Sofia Ahmed", date(2018, 4, 1));
      let sut = build_sut(&employees, &departments, today);

      // Act
      let department = sut
         .create_department(CreateDepartmentInput {
            name:       "Engineering".to_string(),
            location:   "Karachi".to_string(),
            manager_id: EmployeeId::from_i32(1),
         })
         .await
         .unwrap();

      // Assert
      assert_eq!(department.name(), "Engineering");
      assert_eq!(department.manager_id(), EmployeeId::from_i32(1));
   }

   #[tokio::test]
   async fn test_create_department_存在しないマネージャは400() {
      // Arrange
      let employees = MockEmployeeRepository::new();
      let departments = MockDepartmentRepository::new(employees.clone());
      let sut = build_sut(&employees, &departments, date(2024, 6, 15));

      // Act
      let err = sut
         .create_department(CreateDepartmentInput {
            name:       "Engineering".to_string(),
            location:   "Karachi".to_string(),
            manager_id: EmployeeId::from_i32(42),
         })
         .await
         .unwrap_err();

      // Assert
      assert!(matches!(
         err,
         ApiError::BadRequest(msg)
            if msg == "Invalid manager for the department. Manager not found."
      ));
   }

   #[tokio::test]
   async fn test_create_department_勤続5年未満のマネージャは400() {
      // Arrange
      let employees = MockEmployeeRepository::new();
      let departments = MockDepartmentRepository::new(employees.clone());
      let today = date(2024, 6, 15);
      seed_employee(&employees, 1, "Imran Ali", date(2021, 1, 1));
      let sut = build_sut(&employees, &departments, today);

      // Act
      let err = sut
         .create_department(CreateDepartmentInput {
            name:       "Sales".to_string(),
            location:   "Lahore".to_string(),
            manager_id: EmployeeId::from_i32(1),
         })
         .await
         .unwrap_err();

      // Assert
      assert!(matches!(err, ApiError::BadRequest(msg) if msg.contains("experience criteria")));
   }

   #[tokio::test]
   async fn test_create_department_勤続ちょうど5年は成功する() {
      // Arrange: 1825 日前 = floor(1825/365) = 5 年
      let employees = MockEmployeeRepository::new();
      let departments = MockDepartmentRepository::new(employees.clone());
      let today = date(2024, 6, 15);
      seed_employee(&employees, 1, "Nadia Hussain", date(2019, 6, 17));
      let sut = build_sut(&employees, &departments, today);

      // Act
      let result = sut
         .create_department(CreateDepartmentInput {
            name:       "Finance".to_string(),
            location:   "Islamabad".to_string(),
            manager_id: EmployeeId::from_i32(1),
         })
         .await;

      // Assert
      assert!(result.is_ok());
   }

   #[tokio::test]
   async fn test_update_department_存在しない部署は404() {
      // Arrange
      let employees = MockEmployeeRepository::new();
      let departments = MockDepartmentRepository::new(employees.clone());
      let sut = build_sut(&employees, &departments, date(2024, 6, 15));

      // Act
      let err = sut
         .update_department(UpdateDepartmentInput {
            department_id: DepartmentId::from_i32(9),
            name:          "Engineering".to_string(),
            location:      "Karachi".to_string(),
            manager_id:    EmployeeId::from_i32(1),
         })
         .await
         .unwrap_err();

      // Assert
      assert!(matches!(err, ApiError::NotFound(msg) if msg == "Department not found"));
   }

   #[tokio::test]
   async fn test_update_department_マネージャ変更時のみ再検証する() {
      // Arrange: 現マネージャは勤続 5 年未満だが、変更しない限り検証されない
      let employees = MockEmployeeRepository::new();
      let departments = MockDepartmentRepository::new(employees.clone());
      let today = date(2024, 6, 15);
      seed_employee(&employees, 1, "Imran Ali", date(2023, 1, 1));
      let department = departments
         .insert(&NewDepartment {
            name:       "Sales".to_string(),
            location:   "Lahore".to_string(),
            manager_id: EmployeeId::from_i32(1),
         })
         .await
         .unwrap();
      let sut = build_sut(&employees, &departments, today);

      // Act: manager_id を据え置いたまま所在地のみ変更
      let updated = sut
         .update_department(UpdateDepartmentInput {
            department_id: department.id(),
            name:          "Sales".to_string(),
            location:      "Multan".to_string(),
            manager_id:    EmployeeId::from_i32(1),
         })
         .await
         .unwrap();

      // Assert
      assert_eq!(updated.location, "Multan");
   }

   #[tokio::test]
   async fn test_update_department_新マネージャが不適格なら400() {
      // Arrange
      let employees = MockEmployeeRepository::new();
      let departments = MockDepartmentRepository::new(employees.clone());
      let today = date(2024, 6, 15);
      seed_employee(&employees, 1, "Sofia Ahmed", date(2018, 4, 1));
      seed_employee(&employees, 2, "Junior Dev", date(2023, 4, 1));
      let department = departments
         .insert(&NewDepartment {
            name:       "Engineering".to_string(),
            location:   "Karachi".to_string(),
            manager_id: EmployeeId::from_i32(1),
         })
         .await
         .unwrap();
      let sut = build_sut(&employees, &departments, today);

      // Act
      let err = sut
         .update_department(UpdateDepartmentInput {
            department_id: department.id(),
            name:          "Engineering".to_string(),
            location:      "Karachi".to_string(),
            manager_id:    EmployeeId::from_i32(2),
         })
         .await
         .unwrap_err();

      // Assert
      assert!(matches!(
         err,
         ApiError::BadRequest(msg)
            if msg == "Invalid manager. Manager does not meet experience criteria."
      ));
   }

   #[tokio::test]
   async fn test_eligible_managers_は勤続5年以上の氏名のみ返す() {
      // Arrange
      let employees = MockEmployeeRepository::new();
      let departments = MockDepartmentRepository::new(employees.clone());
      let today = date(2024, 6, 15);
      seed_employee(&employees, 1, "Sofia Ahmed", date(2018, 4, 1));
      seed_employee(&employees, 2, "Junior Dev", date(2023, 4, 1));
      seed_employee(&employees, 3, "Rahul Mehta", date(2015, 9, 1));
      let sut = build_sut(&employees, &departments, today);

      // Act
      let managers = sut.eligible_managers().await.unwrap();

      // Assert
      assert_eq!(managers, vec!["Sofia Ahmed".to_string(), "Rahul Mehta".to_string()]);
   }
}
