use chrono::{Datelike, Months, NaiveDate};

/// First day of the month containing `date`.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Month-aligned date axis that contains every bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AxisRange {
    /// Widen `[min_date, max_date]` out to whole months.
    pub fn covering(min_date: NaiveDate, max_date: NaiveDate) -> Self {
        Self {
            start: first_day_of_month(min_date),
            end: last_day_of_month(max_date),
        }
    }

    /// Month starts in `[start, end)`, one per calendar month on the axis.
    pub fn month_gridlines(&self) -> Vec<NaiveDate> {
        let mut lines = Vec::new();
        let mut current = self.start;
        while current < self.end {
            lines.push(current);
            current = match current.checked_add_months(Months::new(1)) {
                Some(next) => next,
                None => break,
            };
        }
        lines
    }

    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_bounds() {
        assert_eq!(first_day_of_month(date(2024, 2, 17)), date(2024, 2, 1));
        assert_eq!(last_day_of_month(date(2024, 2, 17)), date(2024, 2, 29));
        assert_eq!(last_day_of_month(date(2023, 2, 1)), date(2023, 2, 28));
        assert_eq!(last_day_of_month(date(2024, 12, 31)), date(2024, 12, 31));
    }

    #[test]
    fn axis_covers_whole_months() {
        let axis = AxisRange::covering(date(2024, 1, 15), date(2024, 3, 3));
        assert_eq!(axis.start, date(2024, 1, 1));
        assert_eq!(axis.end, date(2024, 3, 31));
        assert_eq!(axis.total_days(), 91);
    }

    #[test]
    fn one_gridline_per_month() {
        let axis = AxisRange::covering(date(2024, 1, 15), date(2024, 3, 3));
        assert_eq!(
            axis.month_gridlines(),
            vec![date(2024, 1, 1), date(2024, 2, 1), date(2024, 3, 1)]
        );
    }

    #[test]
    fn gridlines_cross_year_boundary() {
        let axis = AxisRange::covering(date(2023, 11, 30), date(2024, 2, 1));
        assert_eq!(
            axis.month_gridlines(),
            vec![
                date(2023, 11, 1),
                date(2023, 12, 1),
                date(2024, 1, 1),
                date(2024, 2, 1)
            ]
        );
    }

    #[test]
    fn single_month_axis_has_one_gridline() {
        let axis = AxisRange::covering(date(2024, 6, 10), date(2024, 6, 12));
        assert_eq!(axis.month_gridlines(), vec![date(2024, 6, 1)]);
    }
}
