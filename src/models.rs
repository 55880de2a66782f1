use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Five-level mood scale. Ordering matters: `value` maps the variants onto
/// 1..=5 and every average in the analytics module is computed over that
/// numeric scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Terrible,
    Bad,
    Okay,
    Good,
    Amazing,
}

impl Mood {
    pub fn value(self) -> u8 {
        match self {
            Mood::Terrible => 1,
            Mood::Bad => 2,
            Mood::Okay => 3,
            Mood::Good => 4,
            Mood::Amazing => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Terrible => "terrible",
            Mood::Bad => "bad",
            Mood::Okay => "okay",
            Mood::Good => "good",
            Mood::Amazing => "amazing",
        }
    }
}

/// Weather captured at the moment an entry is saved. It is a snapshot:
/// once attached to an entry it is never refreshed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temp: f64,
    pub condition: String,
    pub icon: String,
}

/// One day's journal record. The date is not stored here; it is the key of
/// the `entries` map in [`AppData`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRecord {
    pub mood: Mood,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub weather: Option<WeatherSnapshot>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Sticky note on the work board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
}

pub const BOARD_WIDTH: f64 = 960.0;
pub const BOARD_HEIGHT: f64 = 540.0;
pub const CARD_WIDTH: f64 = 256.0;
pub const CARD_HEIGHT: f64 = 150.0;

/// Clamp a card position so the whole card stays inside the board rectangle.
pub fn clamp_position(x: f64, y: f64) -> (f64, f64) {
    (
        x.clamp(0.0, BOARD_WIDTH - CARD_WIDTH),
        y.clamp(0.0, BOARD_HEIGHT - CARD_HEIGHT),
    )
}

/// Activity labels an entry may be tagged with. Anything outside this list
/// is rejected at the API boundary.
pub const ACTIVITY_TAGS: [&str; 16] = [
    "work",
    "sport",
    "family",
    "friends",
    "rest",
    "leisure",
    "studies",
    "outing",
    "nature",
    "reading",
    "music",
    "cooking",
    "meditation",
    "travel",
    "shopping",
    "cinema",
];

pub fn is_known_tag(tag: &str) -> bool {
    ACTIVITY_TAGS.contains(&tag)
}

/// Whole persisted application state: mood entries keyed by ISO `YYYY-MM-DD`
/// date, plus the work board. Keying by date is what guarantees at most one
/// entry per day.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub entries: BTreeMap<String, EntryRecord>,
    #[serde(default)]
    pub work_items: Vec<WorkItem>,
}

impl AppData {
    /// Insert or fully replace the record for `date`. Replacement is
    /// whole-record: fields omitted by the caller become unset, they are not
    /// merged from the previous record.
    pub fn upsert_entry(&mut self, date: String, record: EntryRecord) {
        self.entries.insert(date, record);
    }

    pub fn find_entry(&self, date: &str) -> Option<&EntryRecord> {
        self.entries.get(date)
    }

    pub fn next_work_item_id(&self) -> u64 {
        self.work_items.iter().map(|item| item.id).max().unwrap_or(0) + 1
    }
}

#[derive(Debug, Deserialize)]
pub struct UpsertEntryRequest {
    pub mood: Mood,
    pub note: Option<String>,
    pub weather: Option<WeatherSnapshot>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayResponse {
    pub date: String,
    pub entry: Option<EntryRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CreateWorkItemRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateWorkItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// One cell of a calendar grid. `date` is `None` for the leading padding
/// cells of the month view.
#[derive(Debug, Serialize)]
pub struct CalendarCell {
    pub date: Option<String>,
    pub entry: Option<EntryRecord>,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub cells: Vec<CalendarCell>,
}

#[derive(Debug, Serialize)]
pub struct DayPoint {
    pub date: String,
    pub value: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendLabel {
    Improving,
    Declining,
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TempBand {
    Cold,
    Mild,
    Warm,
}

#[derive(Debug, Serialize)]
pub struct WeatherBucket {
    pub band: TempBand,
    pub average_mood: f64,
    pub sample_count: usize,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsReport {
    pub entry_count: usize,
    pub average_mood: f64,
    pub mood_distribution: BTreeMap<String, usize>,
    pub fourteen_day_series: Vec<DayPoint>,
    pub weekly_average: f64,
    pub previous_average: f64,
    pub trend: f64,
    pub trend_label: TrendLabel,
    pub positive_days: usize,
    pub positive_ratio: f64,
    pub current_streak: u32,
    pub weather_buckets: Vec<WeatherBucket>,
}

/// Payload returned by the weather proxy. When the upstream is unavailable
/// or unconfigured this still carries usable values, with `demo` set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
    pub description: String,
    pub icon: String,
    pub wind_speed: f64,
    pub visibility: f64,
    pub name: String,
    #[serde(default)]
    pub demo: bool,
}
