//! # ユースケース層
//!
//! CrewWise API のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリと Clock を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: 複数ステップの検証を伴う操作はここに集約し、
//!   単純な CRUD はハンドラがリポジトリを直接呼ぶ
//! - **勤続年数の一元化**: マネージャ適格性の判定はすべて
//!   `crewwise_domain::tenure` に委譲する

pub(crate) mod helpers;

pub mod assignment;
pub mod department;
pub mod employee;

pub use assignment::AssignmentUseCaseImpl;
pub use department::{CreateDepartmentInput, DepartmentUseCaseImpl, UpdateDepartmentInput};
pub use employee::EmployeeUseCaseImpl;
