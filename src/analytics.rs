use crate::calendar::date_key;
use crate::models::{
    AnalyticsReport, AppData, DayPoint, TempBand, TrendLabel, WeatherBucket,
};
use chrono::{Duration, Local, NaiveDate};
use std::collections::BTreeMap;

const SERIES_DAYS: usize = 14;
const STREAK_HORIZON: i64 = 30;
const TREND_THRESHOLD: f64 = 0.5;

pub fn build_report(data: &AppData) -> AnalyticsReport {
    build_report_at(Local::now().date_naive(), data)
}

/// Everything here is a pure function of the entry map and `today`; nothing
/// is cached between calls.
pub fn build_report_at(today: NaiveDate, data: &AppData) -> AnalyticsReport {
    let entry_count = data.entries.len();

    let total: u64 = data
        .entries
        .values()
        .map(|entry| u64::from(entry.mood.value()))
        .sum();
    let average_mood = if entry_count == 0 {
        0.0
    } else {
        total as f64 / entry_count as f64
    };

    let mut mood_distribution: BTreeMap<String, usize> = BTreeMap::new();
    for entry in data.entries.values() {
        *mood_distribution
            .entry(entry.mood.as_str().to_string())
            .or_insert(0) += 1;
    }

    let fourteen_day_series = day_series(today, data);
    let weekly_average = window_average(&fourteen_day_series[7..]);
    let previous_average = window_average(&fourteen_day_series[..7]);
    let trend = weekly_average - previous_average;
    let trend_label = classify_trend(trend);

    let positive_days = data
        .entries
        .values()
        .filter(|entry| entry.mood.value() >= 4)
        .count();
    let positive_ratio = if entry_count == 0 {
        0.0
    } else {
        positive_days as f64 / entry_count as f64
    };

    AnalyticsReport {
        entry_count,
        average_mood,
        mood_distribution,
        fourteen_day_series,
        weekly_average,
        previous_average,
        trend,
        trend_label,
        positive_days,
        positive_ratio,
        current_streak: current_streak(today, data),
        weather_buckets: weather_buckets(data),
    }
}

/// One point per day for the 14 days ending at `today` inclusive, oldest
/// first. Days without an entry carry `value: None` so chart consumers can
/// skip gaps.
fn day_series(today: NaiveDate, data: &AppData) -> Vec<DayPoint> {
    let mut series = Vec::with_capacity(SERIES_DAYS);
    for offset in (0..SERIES_DAYS as i64).rev() {
        let date = today - Duration::days(offset);
        let value = data
            .find_entry(&date_key(date))
            .map(|entry| entry.mood.value());
        series.push(DayPoint {
            date: date_key(date),
            value,
        });
    }
    series
}

/// Mean of the recorded days in a window; 0.0 when no day has an entry, so
/// downstream arithmetic stays total.
fn window_average(points: &[DayPoint]) -> f64 {
    let values: Vec<u8> = points.iter().filter_map(|point| point.value).collect();
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&value| f64::from(value)).sum::<f64>() / values.len() as f64
}

fn classify_trend(trend: f64) -> TrendLabel {
    if trend > TREND_THRESHOLD {
        TrendLabel::Improving
    } else if trend < -TREND_THRESHOLD {
        TrendLabel::Declining
    } else {
        TrendLabel::Flat
    }
}

/// Consecutive recorded days walking backward from `today`, stopping at the
/// first gap. The scan is bounded: a streak longer than 30 days reports 30.
fn current_streak(today: NaiveDate, data: &AppData) -> u32 {
    let mut streak = 0;
    for offset in 0..STREAK_HORIZON {
        let date = today - Duration::days(offset);
        if data.find_entry(&date_key(date)).is_none() {
            break;
        }
        streak += 1;
    }
    streak
}

fn band_for(temp: f64) -> TempBand {
    if temp < 15.0 {
        TempBand::Cold
    } else if temp < 25.0 {
        TempBand::Mild
    } else {
        TempBand::Warm
    }
}

/// Per-band mean mood over entries that carry a weather snapshot. Bands with
/// no samples are omitted entirely.
fn weather_buckets(data: &AppData) -> Vec<WeatherBucket> {
    let mut sums = [(0u64, 0usize); 3];
    for entry in data.entries.values() {
        if let Some(weather) = &entry.weather {
            let slot = &mut sums[band_for(weather.temp) as usize];
            slot.0 += u64::from(entry.mood.value());
            slot.1 += 1;
        }
    }

    [TempBand::Cold, TempBand::Mild, TempBand::Warm]
        .into_iter()
        .filter_map(|band| {
            let (total, count) = sums[band as usize];
            if count == 0 {
                return None;
            }
            Some(WeatherBucket {
                band,
                average_mood: total as f64 / count as f64,
                sample_count: count,
            })
        })
        .collect()
}
