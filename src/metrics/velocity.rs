use crate::model::{Trend, Velocity};

/// Number of weekly buckets in the velocity window.
pub const WEEKS: usize = 8;
pub const WINDOW_DAYS: i64 = WEEKS as i64 * 7;
/// Half-window sums must differ by more than this before the trend moves.
pub const TREND_MARGIN: u32 = 2;

const LEVELS: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];
const SECONDS_PER_WEEK: i64 = 7 * 24 * 60 * 60;

/// Count unix commit timestamps into weekly buckets ending at `now`, oldest first.
///
/// A timestamp on a boundary falls into the later week; anything older than the
/// window or newer than `now` is ignored.
pub fn bucket_commits(timestamps: &[i64], now: i64) -> [u32; WEEKS] {
    let start = now - WINDOW_DAYS * 24 * 60 * 60;
    let mut weeks = [0u32; WEEKS];
    for &ts in timestamps {
        if ts < start || ts > now {
            continue;
        }
        let idx = (((ts - start) / SECONDS_PER_WEEK) as usize).min(WEEKS - 1);
        weeks[idx] += 1;
    }
    weeks
}

pub fn classify_trend(weeks: &[u32; WEEKS]) -> Trend {
    let (first, second) = weeks.split_at(WEEKS / 2);
    let first_half: u32 = first.iter().sum();
    let second_half: u32 = second.iter().sum();

    if second_half > first_half + TREND_MARGIN {
        Trend::Rising
    } else if first_half > second_half + TREND_MARGIN {
        Trend::Falling
    } else {
        Trend::Flat
    }
}

/// One glyph per week, scaled against the busiest week.
pub fn sparkline(weeks: &[u32]) -> String {
    let max = weeks.iter().copied().max().unwrap_or(0);
    weeks
        .iter()
        .map(|&count| {
            if max == 0 {
                return LEVELS[0];
            }
            let idx = (count as f64 / max as f64 * (LEVELS.len() - 1) as f64).round() as usize;
            LEVELS[idx.min(LEVELS.len() - 1)]
        })
        .collect()
}

impl Velocity {
    pub fn from_weeks(weeks: [u32; WEEKS]) -> Self {
        let total: u32 = weeks.iter().sum();
        Self {
            weeks,
            per_week: total as f64 / WEEKS as f64,
            sparkline: sparkline(&weeks),
            trend: classify_trend(&weeks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DAY: i64 = 24 * 60 * 60;

    #[test]
    fn buckets_oldest_first() {
        let now = 100 * DAY;
        let stamps = [
            now,
            now - DAY,
            now - 8 * DAY,
            now - 55 * DAY,
            // before the window, then in the future
            now - 57 * DAY,
            now + DAY,
        ];
        assert_eq!(bucket_commits(&stamps, now), [1, 0, 0, 0, 0, 0, 1, 2]);
    }

    #[test]
    fn boundary_goes_to_later_week() {
        let now = 100 * DAY;
        let start = now - WINDOW_DAYS * DAY;
        let buckets = bucket_commits(&[start, start + 7 * DAY], now);
        assert_eq!(buckets[0], 1);
        assert_eq!(buckets[1], 1);
    }

    #[test]
    fn trend_needs_more_than_margin() {
        assert_eq!(classify_trend(&[0, 0, 0, 0, 1, 1, 0, 0]), Trend::Flat);
        assert_eq!(classify_trend(&[0, 0, 0, 0, 1, 1, 1, 0]), Trend::Rising);
        assert_eq!(classify_trend(&[1, 1, 1, 0, 0, 0, 0, 0]), Trend::Falling);
        assert_eq!(classify_trend(&[5, 5, 5, 5, 5, 5, 5, 5]), Trend::Flat);
    }

    #[test]
    fn raising_recent_weeks_never_turns_trend_falling() {
        let base = [1, 1, 0, 1, 0, 1, 1, 0];
        let before = classify_trend(&base);
        for idx in 4..WEEKS {
            for bump in 1..10 {
                let mut weeks = base;
                weeks[idx] += bump;
                let after = classify_trend(&weeks);
                if before != Trend::Falling {
                    assert_ne!(after, Trend::Falling);
                }
                if before == Trend::Rising {
                    assert_eq!(after, Trend::Rising);
                }
            }
        }
    }

    #[test]
    fn sparkline_scales_to_max() {
        assert_eq!(sparkline(&[0, 7, 14]), "▁▅█");
        assert_eq!(sparkline(&[0; WEEKS]), "▁▁▁▁▁▁▁▁");
    }

    #[test]
    fn from_weeks_computes_mean() {
        let v = Velocity::from_weeks([1, 2, 3, 4, 5, 6, 7, 12]);
        assert_eq!(v.per_week, 5.0);
        assert_eq!(v.trend, Trend::Rising);
        assert_eq!(v.sparkline.chars().count(), WEEKS);
    }
}
