//! # 部署
//!
//! 部署エンティティと、マネージャ情報を付加した読み取りモデルを定義する。
//!
//! ## 不変条件
//!
//! `manager_id` は実在する従業員を参照し、その従業員の勤続年数は
//! 参照の設定・変更時点で 5 年以上でなければならない。この検証は
//! ユースケース層が [`crate::tenure`] を用いて行う。部署の削除は
//! 従業員に波及しない（カスケードなし）。

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::employee::{ContactNumber, Email, EmployeeId, EmployeeName};

/// 部署 ID（一意識別子）
///
/// データベースの `SERIAL` 列が採番した値をラップする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct DepartmentId(i32);

impl DepartmentId {
    /// 既存の整数値から部署 ID を作成する
    pub fn from_i32(value: i32) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

/// 部署の登録・更新ペイロード
///
/// ID はデータベースが採番するため含まない。更新（全置換）にも
/// 同じ型を使用する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    pub name: String,
    pub location: String,
    pub manager_id: EmployeeId,
}

/// 部署エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    id: DepartmentId,
    name: String,
    location: String,
    manager_id: EmployeeId,
}

impl Department {
    /// 既存のデータから部署を復元する（データベースから取得時）
    pub fn from_db(
        id: DepartmentId,
        name: String,
        location: String,
        manager_id: EmployeeId,
    ) -> Self {
        Self {
            id,
            name,
            location,
            manager_id,
        }
    }

    pub fn id(&self) -> DepartmentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn manager_id(&self) -> EmployeeId {
        self.manager_id
    }
}

/// マネージャ情報付きの部署（読み取りモデル）
///
/// `department` と `employee` を `manager_id` で INNER JOIN した結果。
/// 取得系エンドポイントのレスポンスを組み立てるためだけに存在し、
/// 永続化はされない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentWithManager {
    pub id: DepartmentId,
    pub name: String,
    pub location: String,
    pub manager_name: EmployeeName,
    pub manager_email: Email,
    pub manager_contact_number: ContactNumber,
}
