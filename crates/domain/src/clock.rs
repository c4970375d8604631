//! # Clock（日付プロバイダ）
//!
//! ユースケース層での `Utc::now()` 直接呼び出しを置き換え、
//! テストで固定日付を注入可能にするための抽象化。
//!
//! 勤続年数の判定はすべて「今日の日付」を基準にするため、
//! このトレイトは時刻ではなくカレンダー日付を返す。

use chrono::{NaiveDate, Utc};

/// 今日の日付を提供するトレイト
pub trait Clock: Send + Sync {
   fn today(&self) -> NaiveDate;
}

/// 実際のシステム日付を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
   fn today(&self) -> NaiveDate {
      Utc::now().date_naive()
   }
}

/// 固定日付を返すテスト用実装
pub struct FixedClock {
   today: NaiveDate,
}

impl FixedClock {
   pub fn new(today: NaiveDate) -> Self {
      Self { today }
   }
}

impl Clock for FixedClock {
   fn today(&self) -> NaiveDate {
      self.today
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_system_clock_は今日の日付を返す() {
      let clock = SystemClock;
      let before = Utc::now().date_naive();
      let result = clock.today();
      let after = Utc::now().date_naive();

      // 日付境界をまたいだ場合でも before <= result <= after は成立する
      assert!(result >= before);
      assert!(result <= after);
   }

   #[test]
   fn test_fixed_clock_はコンストラクタで渡した日付を返す() {
      let fixed_date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
      let clock = FixedClock::new(fixed_date);

      assert_eq!(clock.today(), fixed_date);
   }

   #[test]
   fn test_fixed_clock_は複数回呼んでも同じ日付を返す() {
      let fixed_date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
      let clock = FixedClock::new(fixed_date);

      let first = clock.today();
      let second = clock.today();

      assert_eq!(first, fixed_date);
      assert_eq!(second, fixed_date);
   }
}
