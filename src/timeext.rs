use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Interval rounding and range clamping on UTC timestamps.
pub trait DateTimeExt: Sized {
    /// Floors the timestamp to a whole multiple of `interval`.
    /// Non-positive intervals return the input unchanged.
    fn round_down(self, interval: Duration) -> Self;

    /// Ceils the timestamp to a whole multiple of `interval`; a timestamp
    /// already on the boundary stays put. Non-positive intervals return
    /// the input unchanged.
    fn round_up(self, interval: Duration) -> Self;

    /// Clamps into the inclusive range `begin..=end`.
    fn fit_in_range(self, begin: Self, end: Self) -> Self;
}

impl DateTimeExt for DateTime<Utc> {
    fn round_down(self, interval: Duration) -> Self {
        let step = interval.num_seconds();
        if step <= 0 {
            return self;
        }

        let ts = self.timestamp();
        DateTime::from_timestamp(ts - ts.rem_euclid(step), 0).unwrap_or(self)
    }

    fn round_up(self, interval: Duration) -> Self {
        let step = interval.num_seconds();
        if step <= 0 {
            return self;
        }

        // Sub-second precision pushes the timestamp past its second.
        let carry = i64::from(self.timestamp_subsec_nanos() > 0);
        let ts = self.timestamp() + carry;
        let rem = ts.rem_euclid(step);
        let rounded = if rem == 0 { ts } else { ts + (step - rem) };
        DateTime::from_timestamp(rounded, 0).unwrap_or(self)
    }

    fn fit_in_range(self, begin: Self, end: Self) -> Self {
        if begin > self {
            begin
        } else if end < self {
            end
        } else {
            self
        }
    }
}

/// Calendar-month helpers.
pub trait DateExt: Sized {
    /// First day of the date's month.
    fn beginning_of_month(self) -> Self;

    /// Last day of the date's month.
    fn end_of_month(self) -> Self;

    /// Number of days in the date's month.
    fn days_in_month(self) -> u32;

    /// 1-based week index of the day within its month.
    fn weeks_of_month(self) -> u32;

    /// Whole calendar months elapsed since `base`; negative when the date
    /// precedes it.
    fn elapsed_months(self, base: Self) -> i32;
}

impl DateExt for NaiveDate {
    fn beginning_of_month(self) -> Self {
        self.with_day(1).unwrap_or(self)
    }

    fn end_of_month(self) -> Self {
        let next_month = if self.month() == 12 {
            NaiveDate::from_ymd_opt(self.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year(), self.month() + 1, 1)
        };

        next_month.and_then(|first| first.pred_opt()).unwrap_or(self)
    }

    fn days_in_month(self) -> u32 {
        self.end_of_month().day()
    }

    fn weeks_of_month(self) -> u32 {
        1 + (self.day() - 1) / 7
    }

    fn elapsed_months(self, base: Self) -> i32 {
        (self.year() - base.year()) * 12 + self.month() as i32 - base.month() as i32
    }
}
