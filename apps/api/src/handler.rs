//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - 単純な CRUD はリポジトリを直接呼び、複数ステップの検証を伴う操作は
//!   ユースケースに委譲する

pub mod assignment;
pub mod department;
pub mod employee;
pub mod health;
pub mod root;

pub use assignment::{AssignmentState, assign_department};
pub use department::{
   DepartmentState,
   create_department,
   delete_department,
   get_department,
   list_departments,
   list_eligible_managers,
   update_department,
};
pub use employee::{
   EmployeeState,
   create_employee,
   delete_employee,
   get_employee,
   list_employees,
   promote_employee,
   update_employee,
};
pub use health::health_check;
pub use root::root;
