//! # リポジトリ実装
//!
//! リポジトリトレイトと、その PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイトにのみ依存
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計
//! - **位置パラメータ**: すべてのクエリは `$n` でバインドし、
//!   文字列連結による SQL 組み立てを行わない

pub mod assignment_repository;
pub mod department_repository;
pub mod employee_repository;

pub use assignment_repository::{AssignmentRepository, PostgresAssignmentRepository};
pub use department_repository::{DepartmentRepository, PostgresDepartmentRepository};
pub use employee_repository::{EmployeeRepository, PostgresEmployeeRepository};
