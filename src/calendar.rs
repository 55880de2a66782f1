use crate::models::{AppData, CalendarCell, CalendarResponse};
use chrono::{Datelike, Duration, NaiveDate};

/// Cells for the Monday..Sunday week containing `reference`. Always exactly
/// 7 cells; days without an entry carry `entry: None`.
pub fn week_view(reference: NaiveDate, data: &AppData) -> CalendarResponse {
    let monday = week_start(reference);
    let cells = (0..7)
        .map(|offset| {
            let date = monday + Duration::days(offset);
            CalendarCell {
                entry: data.find_entry(&date_key(date)).cloned(),
                date: Some(date_key(date)),
            }
        })
        .collect();
    CalendarResponse { cells }
}

/// Cells for the calendar month containing `reference`: leading empty cells
/// to align day 1 on its Monday-indexed weekday, then one cell per day. No
/// trailing padding after the last day.
pub fn month_view(reference: NaiveDate, data: &AppData) -> CalendarResponse {
    let first = reference.with_day(1).unwrap_or(reference);
    let padding = first.weekday().num_days_from_monday() as usize;

    let mut cells = Vec::with_capacity(padding + 31);
    for _ in 0..padding {
        cells.push(CalendarCell {
            date: None,
            entry: None,
        });
    }

    let mut day = first;
    while day.month() == first.month() {
        cells.push(CalendarCell {
            entry: data.find_entry(&date_key(day)).cloned(),
            date: Some(date_key(day)),
        });
        day = day + Duration::days(1);
    }

    CalendarResponse { cells }
}

pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryRecord, Mood};

    fn data_with(dates: &[&str]) -> AppData {
        let mut data = AppData::default();
        for date in dates {
            data.upsert_entry(
                date.to_string(),
                EntryRecord {
                    mood: Mood::Good,
                    note: None,
                    weather: None,
                    tags: None,
                },
            );
        }
        data
    }

    #[test]
    fn week_view_has_seven_cells_starting_monday() {
        // 2024-03-14 is a Thursday; its week starts Monday 2024-03-11.
        let reference = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let view = week_view(reference, &AppData::default());
        assert_eq!(view.cells.len(), 7);
        assert_eq!(view.cells[0].date.as_deref(), Some("2024-03-11"));
        assert_eq!(view.cells[6].date.as_deref(), Some("2024-03-17"));
    }

    #[test]
    fn week_view_binds_entries_by_date() {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let data = data_with(&["2024-03-12"]);
        let view = week_view(reference, &data);
        assert!(view.cells[1].entry.is_some());
        assert!(view.cells[0].entry.is_none());
    }

    #[test]
    fn month_view_pads_to_first_weekday() {
        // September 2024 starts on a Sunday: 6 leading blanks, 30 days.
        let reference = NaiveDate::from_ymd_opt(2024, 9, 15).unwrap();
        let view = month_view(reference, &AppData::default());
        assert_eq!(view.cells.len(), 6 + 30);
        assert!(view.cells[..6].iter().all(|cell| cell.date.is_none()));
        assert_eq!(view.cells[6].date.as_deref(), Some("2024-09-01"));
        assert_eq!(view.cells.last().unwrap().date.as_deref(), Some("2024-09-30"));
    }

    #[test]
    fn month_starting_monday_has_no_padding() {
        // July 2024 starts on a Monday.
        let reference = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        let view = month_view(reference, &AppData::default());
        assert_eq!(view.cells.len(), 31);
        assert_eq!(view.cells[0].date.as_deref(), Some("2024-07-01"));
    }

    #[test]
    fn month_view_resolves_entries() {
        let reference = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let data = data_with(&["2024-09-01", "2024-09-30"]);
        let view = month_view(reference, &data);
        assert!(view.cells[6].entry.is_some());
        assert!(view.cells.last().unwrap().entry.is_some());
        assert!(view.cells[7].entry.is_none());
    }
}
