//! # 勤続年数計算
//!
//! 入社日から今日までの勤続年数を「経過日数を 365 で割った商（床関数）」
//! として計算する。うるう年は意図的に無視する近似であり、
//! 部署作成・部署更新・昇進・マネージャ候補一覧の 4 箇所すべてが
//! この同一の関数を使用する。
//!
//! ## 判定基準
//!
//! マネージャ適格性と昇進の閾値は勤続 [`MANAGER_MIN_YEARS`] 年以上。
//! 例: 入社からちょうど 1826 日（5×365+1）経過 → floor(1826/365) = 5 →
//! 適格。

use chrono::NaiveDate;

/// マネージャ適格と昇進に必要な最低勤続年数
pub const MANAGER_MIN_YEARS: i64 = 5;

/// 勤続年数を計算する
///
/// `floor((today - date_of_joining).days / 365)` を返す。
/// `div_euclid` により、入社日が未来の場合も床関数の意味論を保つ
/// （例: -200 日 → -1 年）。
pub fn years_of_service(date_of_joining: NaiveDate, today: NaiveDate) -> i64 {
   (today - date_of_joining).num_days().div_euclid(365)
}

/// マネージャ適格性（勤続 5 年以上）を判定する
pub fn meets_manager_criteria(date_of_joining: NaiveDate, today: NaiveDate) -> bool {
   years_of_service(date_of_joining, today) >= MANAGER_MIN_YEARS
}

#[cfg(test)]
mod tests {
   use chrono::Days;
   use rstest::rstest;

   use super::*;

   fn date(y: i32, m: u32, d: u32) -> NaiveDate {
      NaiveDate::from_ymd_opt(y, m, d).unwrap()
   }

   #[rstest]
   #[case::入社当日(0, 0)]
   #[case::丸1年未満(364, 0)]
   #[case::丸1年(365, 1)]
   #[case::閾値未満(1824, 4)]
   #[case::ちょうど5x365(1825, 5)]
   #[case::端数1日を切り捨てる1826日(1826, 5)]
   #[case::うるう年を無視した6年(2190, 6)]
   fn test_経過日数から勤続年数を床関数で計算する(
      #[case] days_ago: u64,
      #[case] expected_years: i64,
   ) {
      let today = date(2024, 6, 15);
      let date_of_joining = today.checked_sub_days(Days::new(days_ago)).unwrap();

      assert_eq!(years_of_service(date_of_joining, today), expected_years);
   }

   #[test]
   fn test_入社日が未来の場合は負の年数になる() {
      let today = date(2024, 6, 15);
      let date_of_joining = today.checked_add_days(Days::new(200)).unwrap();

      // Python の floor 除算（-200 // 365 = -1）と同じ意味論
      assert_eq!(years_of_service(date_of_joining, today), -1);
      assert!(!meets_manager_criteria(date_of_joining, today));
   }

   #[rstest]
   #[case::閾値未満は不適格(1824, false)]
   #[case::ちょうど5年は適格(1825, true)]
   #[case::閾値超過は適格(3000, true)]
   fn test_マネージャ適格性は勤続5年以上(#[case] days_ago: u64, #[case] eligible: bool) {
      let today = date(2024, 6, 15);
      let date_of_joining = today.checked_sub_days(Days::new(days_ago)).unwrap();

      assert_eq!(meets_manager_criteria(date_of_joining, today), eligible);
   }
}
