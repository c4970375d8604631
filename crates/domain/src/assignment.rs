//! # 従業員の部署配属
//!
//! 従業員と部署の対応付けを表現する。
//!
//! ## 不変条件
//!
//! 一人の従業員は同時に一つの部署にのみ配属される。この制約は
//! ストレージ層の一意制約ではなく、配属ユースケースの事前チェックで
//! 強制される。同一従業員への並行した配属リクエストは両方とも
//! チェックを通過し得る（既知の競合、DESIGN.md 参照）。
//! 部署側の人数に制限はない。

use serde::{Deserialize, Serialize};

use crate::{department::DepartmentId, employee::EmployeeId};

/// 従業員と部署の配属ペア
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentAssignment {
    employee_id: EmployeeId,
    department_id: DepartmentId,
}

impl DepartmentAssignment {
    /// 配属ペアを作成する
    pub fn new(employee_id: EmployeeId, department_id: DepartmentId) -> Self {
        Self {
            employee_id,
            department_id,
        }
    }

    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    pub fn department_id(&self) -> DepartmentId {
        self.department_id
    }
}
