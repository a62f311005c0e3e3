use chrono::NaiveDate;

const MIN_PIXELS_PER_DAY: f32 = 1.0;
const MAX_PIXELS_PER_DAY: f32 = 60.0;
pub const DEFAULT_PIXELS_PER_DAY: f32 = 6.0;

/// Horizontal mapping between dates and pixels for the chart preview.
#[derive(Debug, Clone)]
pub struct TimelineViewport {
    /// Date at x = 0 (the chart's axis start).
    pub start: NaiveDate,
    /// Date at the right edge (the chart's axis end).
    pub end: NaiveDate,
    /// Pixels per day (controls zoom level).
    pub pixels_per_day: f32,
}

impl TimelineViewport {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            pixels_per_day: DEFAULT_PIXELS_PER_DAY,
        }
    }

    /// Keep the zoom level but move to a new axis range.
    pub fn set_range(&mut self, start: NaiveDate, end: NaiveDate) {
        self.start = start;
        self.end = end;
    }

    /// Convert a date to an x-pixel offset from the viewport start.
    pub fn date_to_x(&self, date: NaiveDate) -> f32 {
        let days = (date - self.start).num_days() as f32;
        days * self.pixels_per_day
    }

    /// Total width in pixels, including the whole last day.
    pub fn total_width(&self) -> f32 {
        self.date_to_x(self.end) + self.pixels_per_day
    }

    pub fn zoom_in(&mut self) {
        self.pixels_per_day = (self.pixels_per_day * 1.2).min(MAX_PIXELS_PER_DAY);
    }

    pub fn zoom_out(&mut self) {
        self.pixels_per_day = (self.pixels_per_day / 1.2).max(MIN_PIXELS_PER_DAY);
    }

    /// Pick a zoom level so the whole range fits in `width` pixels.
    pub fn fit_width(&mut self, width: f32) {
        let days = ((self.end - self.start).num_days() + 1).max(1) as f32;
        self.pixels_per_day = (width / days).clamp(MIN_PIXELS_PER_DAY, MAX_PIXELS_PER_DAY);
    }
}
