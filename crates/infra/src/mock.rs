//! # テスト用モックリポジトリ
//!
//! ユースケーステストやルーターテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! crewwise-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! ID はデータベースの `SERIAL` を模して 1 から順に採番する。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use crewwise_domain::{
   assignment::DepartmentAssignment,
   department::{Department, DepartmentId, DepartmentWithManager, NewDepartment},
   employee::{Employee, EmployeeId, NewEmployee},
};

use crate::{
   error::InfraError,
   repository::{AssignmentRepository, DepartmentRepository, EmployeeRepository},
};

// ===== MockEmployeeRepository =====

#[derive(Clone)]
pub struct MockEmployeeRepository {
   employees: Arc<Mutex<Vec<Employee>>>,
   next_id:   Arc<Mutex<i32>>,
}

impl Default for MockEmployeeRepository {
   fn default() -> Self {
      Self::new()
   }
}

impl MockEmployeeRepository {
   pub fn new() -> Self {
      Self {
         employees: Arc::new(Mutex::new(Vec::new())),
         next_id:   Arc::new(Mutex::new(1)),
      }
   }

   /// 採番済みのエンティティを直接シードする
   pub fn add_employee(&self, employee: Employee) {
      let mut next_id = self.next_id.lock().unwrap();
      *next_id = (*next_id).max(employee.id().as_i32() + 1);
      self.employees.lock().unwrap().push(employee);
   }
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepository {
   async fn insert(&self, employee: &NewEmployee) -> Result<Employee, InfraError> {
      let id = {
         let mut next_id = self.next_id.lock().unwrap();
         let id = *next_id;
         *next_id += 1;
         id
      };

      let created = Employee::from_db(
         EmployeeId::from_i32(id),
         employee.name.clone(),
         employee.email.clone(),
         employee.contact_number.clone(),
         employee.date_of_joining,
         employee.years_of_experience,
         None,
      );
      self.employees.lock().unwrap().push(created.clone());

      Ok(created)
   }

   async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError> {
      Ok(self
         .employees
         .lock()
         .unwrap()
         .iter()
         .find(|e| e.id() == id)
         .cloned())
   }

   async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
      Ok(self.employees.lock().unwrap().clone())
   }

   async fn update(&self, id: EmployeeId, employee: &NewEmployee) -> Result<bool, InfraError> {
      let mut employees = self.employees.lock().unwrap();
      let Some(existing) = employees.iter_mut().find(|e| e.id() == id) else {
         return Ok(false);
      };

      // UPDATE 文と同様、role 列は変更しない
      *existing = Employee::from_db(
         id,
         employee.name.clone(),
         employee.email.clone(),
         employee.contact_number.clone(),
         employee.date_of_joining,
         employee.years_of_experience,
         existing.role().map(|r| r.to_string()),
      );

      Ok(true)
   }

   async fn delete(&self, id: EmployeeId) -> Result<bool, InfraError> {
      let mut employees = self.employees.lock().unwrap();
      let before = employees.len();
      employees.retain(|e| e.id() != id);

      Ok(employees.len() < before)
   }

   async fn set_role(&self, id: EmployeeId, role: &str) -> Result<bool, InfraError> {
      let mut employees = self.employees.lock().unwrap();
      let Some(existing) = employees.iter_mut().find(|e| e.id() == id) else {
         return Ok(false);
      };

      *existing = Employee::from_db(
         existing.id(),
         existing.name().clone(),
         existing.email().clone(),
         existing.contact_number().clone(),
         existing.date_of_joining(),
         existing.years_of_experience(),
         Some(role.to_string()),
      );

      Ok(true)
   }
}

// ===== MockDepartmentRepository =====

/// インメモリの部署リポジトリ
///
/// マネージャ付き読み取りは INNER JOIN の意味論を再現するため、
/// 共有された [`MockEmployeeRepository`] を参照する。マネージャが
/// 見つからない部署は結果から除外される。
#[derive(Clone)]
pub struct MockDepartmentRepository {
   departments: Arc<Mutex<Vec<Department>>>,
   next_id:     Arc<Mutex<i32>>,
   employees:   MockEmployeeRepository,
}

impl MockDepartmentRepository {
   pub fn new(employees: MockEmployeeRepository) -> Self {
      Self {
         departments: Arc::new(Mutex::new(Vec::new())),
         next_id: Arc::new(Mutex::new(1)),
         employees,
      }
   }

   fn join_manager(&self, department: &Department) -> Option<DepartmentWithManager> {
      let employees = self.employees.employees.lock().unwrap();
      let manager = employees.iter().find(|e| e.id() == department.manager_id())?;

      Some(DepartmentWithManager {
         id: department.id(),
         name: department.name().to_string(),
         location: department.location().to_string(),
         manager_name: manager.name().clone(),
         manager_email: manager.email().clone(),
         manager_contact_number: manager.contact_number().clone(),
      })
   }
}

#[async_trait]
impl DepartmentRepository for MockDepartmentRepository {
   async fn insert(&self, department: &NewDepartment) -> Result<Department, InfraError> {
      let id = {
         let mut next_id = self.next_id.lock().unwrap();
         let id = *next_id;
         *next_id += 1;
         id
      };

      let created = Department::from_db(
         DepartmentId::from_i32(id),
         department.name.clone(),
         department.location.clone(),
         department.manager_id,
      );
      self.departments.lock().unwrap().push(created.clone());

      Ok(created)
   }

   async fn find_by_id(&self, id: DepartmentId) -> Result<Option<Department>, InfraError> {
      Ok(self
         .departments
         .lock()
         .unwrap()
         .iter()
         .find(|d| d.id() == id)
         .cloned())
   }

   async fn find_by_id_with_manager(
      &self,
      id: DepartmentId,
   ) -> Result<Option<DepartmentWithManager>, InfraError> {
      let department = {
         let departments = self.departments.lock().unwrap();
         departments.iter().find(|d| d.id() == id).cloned()
      };

      Ok(department.and_then(|d| self.join_manager(&d)))
   }

   async fn find_all_with_manager(&self) -> Result<Vec<DepartmentWithManager>, InfraError> {
      let departments = self.departments.lock().unwrap().clone();

      Ok(departments
         .iter()
         .filter_map(|d| self.join_manager(d))
         .collect())
   }

   async fn update(
      &self,
      id: DepartmentId,
      department: &NewDepartment,
   ) -> Result<bool, InfraError> {
      let mut departments = self.departments.lock().unwrap();
      let Some(existing) = departments.iter_mut().find(|d| d.id() == id) else {
         return Ok(false);
      };

      *existing = Department::from_db(
         id,
         department.name.clone(),
         department.location.clone(),
         department.manager_id,
      );

      Ok(true)
   }

   async fn delete(&self, id: DepartmentId) -> Result<bool, InfraError> {
      let mut departments = self.departments.lock().unwrap();
      let before = departments.len();
      departments.retain(|d| d.id() != id);

      Ok(departments.len() < before)
   }
}

// ===== MockAssignmentRepository =====

#[derive(Clone, Default)]
pub struct MockAssignmentRepository {
   assignments: Arc<Mutex<Vec<DepartmentAssignment>>>,
}

impl MockAssignmentRepository {
   pub fn new() -> Self {
      Self {
         assignments: Arc::new(Mutex::new(Vec::new())),
      }
   }
}

#[async_trait]
impl AssignmentRepository for MockAssignmentRepository {
   async fn insert(
      &self,
      employee_id: EmployeeId,
      department_id: DepartmentId,
   ) -> Result<DepartmentAssignment, InfraError> {
      let assignment = DepartmentAssignment::new(employee_id, department_id);
      self.assignments.lock().unwrap().push(assignment);

      Ok(assignment)
   }

   async fn find_by_employee(
      &self,
      employee_id: EmployeeId,
   ) -> Result<Option<DepartmentAssignment>, InfraError> {
      Ok(self
         .assignments
         .lock()
         .unwrap()
         .iter()
         .find(|a| a.employee_id() == employee_id)
         .copied())
   }
}
