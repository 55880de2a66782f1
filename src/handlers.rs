use crate::analytics::build_report;
use crate::calendar::{month_view, week_view};
use crate::errors::AppError;
use crate::models::{
    clamp_position, is_known_tag, AnalyticsReport, CalendarResponse,
    CreateWorkItemRequest, DayResponse, EntryRecord, UpdateWorkItemRequest,
    UpsertEntryRequest, WeatherReport, WorkItem, CARD_WIDTH,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use crate::weather::Location;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;
use std::collections::BTreeMap;

pub async fn index() -> Html<String> {
    Html(render_index(&today_string()))
}

pub async fn get_entries(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, EntryRecord>> {
    let data = state.data.lock().await;
    Json(data.entries.clone())
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_date(&date)?;
    let key = date.to_string();
    let data = state.data.lock().await;
    Ok(Json(DayResponse {
        entry: data.find_entry(&key).cloned(),
        date: key,
    }))
}

/// Save one day's mood. The record is replaced wholesale: fields omitted in
/// the request become unset even if an earlier save carried them.
pub async fn put_entry(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(payload): Json<UpsertEntryRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_date(&date)?;
    if date > Local::now().date_naive() {
        return Err(AppError::bad_request("cannot record a mood for a future date"));
    }
    if let Some(tags) = &payload.tags {
        if let Some(unknown) = tags.iter().find(|tag| !is_known_tag(tag.as_str())) {
            return Err(AppError::bad_request(format!("unknown activity tag '{unknown}'")));
        }
    }

    let key = date.to_string();
    let record = EntryRecord {
        mood: payload.mood,
        note: payload.note.filter(|note| !note.trim().is_empty()),
        weather: payload.weather,
        tags: payload.tags.filter(|tags| !tags.is_empty()),
    };

    let mut data = state.data.lock().await;
    data.upsert_entry(key.clone(), record.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(DayResponse {
        date: key,
        entry: Some(record),
    }))
}

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    pub date: Option<String>,
}

pub async fn calendar_week(
    State(state): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let reference = match query.date {
        Some(date) => parse_date(&date)?,
        None => Local::now().date_naive(),
    };
    let data = state.data.lock().await;
    Ok(Json(week_view(reference, &data)))
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

pub async fn calendar_month(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let today = Local::now().date_naive();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());
    let reference = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::bad_request("invalid year/month"))?;

    let data = state.data.lock().await;
    Ok(Json(month_view(reference, &data)))
}

pub async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsReport> {
    let data = state.data.lock().await;
    Json(build_report(&data))
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub city: Option<String>,
}

/// Weather proxy. Upstream failures never surface here: the client falls
/// back to the demo payload, so this only rejects requests that name no
/// location at all.
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherReport>, AppError> {
    let location = match (query.city, query.lat, query.lon) {
        (Some(city), _, _) => Location::City(city),
        (None, Some(lat), Some(lon)) => Location::Coordinates { lat, lon },
        _ => {
            return Err(AppError::bad_request(
                "latitude/longitude or city name required",
            ))
        }
    };

    Ok(Json(state.weather.lookup(location).await))
}

pub async fn list_work_items(State(state): State<AppState>) -> Json<Vec<WorkItem>> {
    let data = state.data.lock().await;
    Json(data.work_items.clone())
}

pub async fn create_work_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateWorkItemRequest>,
) -> Result<(StatusCode, Json<WorkItem>), AppError> {
    let title = payload.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }

    let mut data = state.data.lock().await;
    let id = data.next_work_item_id();
    // Cascade new cards instead of stacking them at the origin.
    let (x, y) = clamp_position(
        (data.work_items.len() as f64 * 32.0) % (CARD_WIDTH + 48.0),
        (data.work_items.len() as f64 * 24.0) % 200.0,
    );
    let item = WorkItem {
        id,
        title,
        description: payload.description,
        color: payload.color.unwrap_or_else(|| "rose".to_string()),
        x,
        y,
    };
    data.work_items.push(item.clone());
    persist_data(&state.data_path, &data).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_work_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<UpdateWorkItemRequest>,
) -> Result<Json<WorkItem>, AppError> {
    let mut data = state.data.lock().await;
    let updated = {
        let item = data
            .work_items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::not_found(format!("no work item with id {id}")))?;

        if let Some(title) = payload.title {
            item.title = title;
        }
        if let Some(description) = payload.description {
            item.description = description;
        }
        if let Some(color) = payload.color {
            item.color = color;
        }
        let (x, y) = clamp_position(payload.x.unwrap_or(item.x), payload.y.unwrap_or(item.y));
        item.x = x;
        item.y = y;
        item.clone()
    };
    persist_data(&state.data_path, &data).await?;

    Ok(Json(updated))
}

pub async fn delete_work_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    let before = data.work_items.len();
    data.work_items.retain(|item| item.id != id);
    if data.work_items.len() == before {
        return Err(AppError::not_found(format!("no work item with id {id}")));
    }
    persist_data(&state.data_path, &data).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request(format!("invalid date '{raw}', expected YYYY-MM-DD")))
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
