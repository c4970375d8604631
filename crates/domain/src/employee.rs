//! # 従業員
//!
//! 従業員エンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 備考 |
//! |---|------------|------|
//! | [`Employee`] | 従業員 | 採用情報と自己申告の経験年数を保持 |
//! | [`EmployeeId`] | 従業員 ID | データベースの `SERIAL` が採番する |
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: EmployeeId は i32 をラップし、型安全性を確保
//! - **不変性**: エンティティフィールドは不変、復元は `from_db` 経由
//! - **バリデーション**: 値オブジェクトの生成時に検証ロジックを実行
//!
//! メールアドレスの一意性は検証しない。重複を拒否する場合は
//! 利用側との合意が必要（DESIGN.md 参照）。

use chrono::NaiveDate;
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{DomainError, tenure};

/// 昇進時に設定されるロール名
pub const MANAGER_ROLE: &str = "manager";

/// 従業員 ID（一意識別子）
///
/// データベースの `SERIAL` 列が採番した値をラップする。
/// アプリケーション側では生成せず、INSERT の `RETURNING` で受け取る。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct EmployeeId(i32);

impl EmployeeId {
    /// 既存の整数値から従業員 ID を作成する
    pub fn from_i32(value: i32) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

/// 従業員名（値オブジェクト）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeName(String);

impl EmployeeName {
    /// 従業員名を作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - 最大 100 文字
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(DomainError::Validation("name must not be empty".to_string()));
        }

        if value.chars().count() > 100 {
            return Err(DomainError::Validation(
                "name must be at most 100 characters".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for EmployeeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// メールアドレス（値オブジェクト）
///
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
/// 一意性はここでは検証しない（重複メールは許容される）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - `local@domain` の形式（両側とも非空）
    /// - 最大 255 文字
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation("email must not be empty".to_string()));
        }

        let Some((local, domain)) = value.split_once('@') else {
            return Err(DomainError::Validation("email has an invalid format".to_string()));
        };

        if local.is_empty() || domain.is_empty() {
            return Err(DomainError::Validation("email has an invalid format".to_string()));
        }

        if value.len() > 255 {
            return Err(DomainError::Validation(
                "email must be at most 255 characters".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 連絡先電話番号（値オブジェクト）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactNumber(String);

impl ContactNumber {
    /// 連絡先電話番号を作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - 最大 20 文字
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "contact number must not be empty".to_string(),
            ));
        }

        if value.chars().count() > 20 {
            return Err(DomainError::Validation(
                "contact number must be at most 20 characters".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ContactNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 従業員の登録・更新ペイロード
///
/// ID はデータベースが採番するため含まない。更新（全置換）にも
/// 同じ型を使用する。`role` は登録時には設定されず、昇進操作でのみ
/// `"manager"` が書き込まれる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: EmployeeName,
    pub email: Email,
    pub contact_number: ContactNumber,
    pub date_of_joining: NaiveDate,
    /// 自己申告の経験年数。勤続年数（[`tenure`]）とは独立した値
    pub years_of_experience: i32,
}

/// 従業員エンティティ
///
/// # 不変条件
///
/// - `id` はデータベースが採番した値のみ（アプリケーション側で生成しない）
/// - `role` は未設定か、昇進操作が書き込んだ値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: EmployeeId,
    name: EmployeeName,
    email: Email,
    contact_number: ContactNumber,
    date_of_joining: NaiveDate,
    years_of_experience: i32,
    role: Option<String>,
}

impl Employee {
    /// 既存のデータから従業員を復元する（データベースから取得時）
    pub fn from_db(
        id: EmployeeId,
        name: EmployeeName,
        email: Email,
        contact_number: ContactNumber,
        date_of_joining: NaiveDate,
        years_of_experience: i32,
        role: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            contact_number,
            date_of_joining,
            years_of_experience,
            role,
        }
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &EmployeeName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn contact_number(&self) -> &ContactNumber {
        &self.contact_number
    }

    pub fn date_of_joining(&self) -> NaiveDate {
        self.date_of_joining
    }

    pub fn years_of_experience(&self) -> i32 {
        self.years_of_experience
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// 勤続年数を計算する
    ///
    /// 自己申告の `years_of_experience` ではなく、入社日からの経過に
    /// 基づく値。マネージャ適格性の判定はこちらを使用する。
    pub fn years_of_service(&self, today: NaiveDate) -> i64 {
        tenure::years_of_service(self.date_of_joining, today)
    }

    /// マネージャ適格性（勤続 5 年以上）を判定する
    pub fn is_manager_eligible(&self, today: NaiveDate) -> bool {
        tenure::meets_manager_criteria(self.date_of_joining, today)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_employee(date_of_joining: NaiveDate) -> Employee {
        Employee::from_db(
            EmployeeId::from_i32(1),
            EmployeeName::new("Aisha Khan").unwrap(),
            Email::new("aisha@example.com").unwrap(),
            ContactNumber::new("080-1234-5678").unwrap(),
            date_of_joining,
            3,
            None,
        )
    }

    // === 値オブジェクト ===

    #[test]
    fn test_emailは正しい形式を受け入れる() {
        let email = Email::new("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_emailはアットマークなしを拒否する() {
        let result = Email::new("not-an-email");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_emailはローカル部が空の形式を拒否する() {
        let result = Email::new("@example.com");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_emailは空文字列を拒否する() {
        let result = Email::new("");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_従業員名は空白のみを拒否する() {
        let result = EmployeeName::new("   ");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_従業員名は100文字を超えると拒否する() {
        let result = EmployeeName::new("あ".repeat(101));
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_連絡先は空文字列を拒否する() {
        let result = ContactNumber::new("");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    // === エンティティ ===

    #[test]
    fn test_from_dbは全フィールドを復元する() {
        let employee = sample_employee(date(2020, 1, 1));

        assert_eq!(employee.id().as_i32(), 1);
        assert_eq!(employee.name().as_str(), "Aisha Khan");
        assert_eq!(employee.email().as_str(), "aisha@example.com");
        assert_eq!(employee.date_of_joining(), date(2020, 1, 1));
        assert_eq!(employee.years_of_experience(), 3);
        assert_eq!(employee.role(), None);
    }

    #[test]
    fn test_勤続年数は入社日基準で計算される() {
        // 2019-06-16 から 2024-06-15 は 1826 日 → floor(1826/365) = 5
        let employee = sample_employee(date(2019, 6, 16));
        let today = date(2024, 6, 15);

        assert_eq!(employee.years_of_service(today), 5);
        assert!(employee.is_manager_eligible(today));
    }

    #[test]
    fn test_自己申告の経験年数は適格性に影響しない() {
        // years_of_experience = 3 だが入社日は 10 年前 → 適格
        let employee = sample_employee(date(2014, 1, 1));
        assert!(employee.is_manager_eligible(date(2024, 6, 15)));
    }
}
