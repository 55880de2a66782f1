use crate::models::WeatherReport;
use serde::Deserialize;
use std::{env, time::Duration};
use tracing::warn;

const UPSTREAM_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

/// Where a lookup should point: coordinates from the browser's geolocation,
/// or a city name typed by the user.
#[derive(Debug, Clone)]
pub enum Location {
    Coordinates { lat: f64, lon: f64 },
    City(String),
}

impl Location {
    fn city_name(&self) -> Option<&str> {
        match self {
            Location::City(name) => Some(name),
            Location::Coordinates { .. } => None,
        }
    }
}

/// Client for the OpenWeatherMap upstream. A lookup never fails: with no
/// API key, or on any upstream error, it yields the fixed demo payload with
/// `demo: true` so callers always get a usable report.
#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl WeatherClient {
    pub fn from_env() -> Self {
        let api_key = env::var("OPENWEATHER_API_KEY")
            .ok()
            .filter(|key| !key.is_empty() && key != "demo");
        Self {
            http: reqwest::Client::builder()
                .timeout(UPSTREAM_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key,
        }
    }

    pub async fn lookup(&self, location: Location) -> WeatherReport {
        let Some(key) = &self.api_key else {
            return demo_report(location.city_name());
        };

        match self.fetch(key, &location).await {
            Ok(report) => report,
            Err(err) => {
                warn!("weather lookup failed, serving demo data: {err}");
                demo_report(location.city_name())
            }
        }
    }

    async fn fetch(&self, key: &str, location: &Location) -> Result<WeatherReport, reqwest::Error> {
        let mut request = self
            .http
            .get(UPSTREAM_URL)
            .query(&[("appid", key), ("units", "metric")]);
        request = match location {
            Location::City(name) => request.query(&[("q", name.as_str())]),
            Location::Coordinates { lat, lon } => {
                request.query(&[("lat", lat), ("lon", lon)])
            }
        };

        let upstream: UpstreamResponse = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let condition = upstream.weather.into_iter().next();
        Ok(WeatherReport {
            temp: upstream.main.temp.round(),
            feels_like: upstream.main.feels_like.round(),
            humidity: upstream.main.humidity,
            description: condition
                .as_ref()
                .map(|c| c.description.clone())
                .unwrap_or_default(),
            icon: condition
                .map(|c| c.icon)
                .unwrap_or_else(|| "01d".to_string()),
            wind_speed: upstream.wind.speed,
            visibility: upstream.visibility as f64 / 1000.0,
            name: upstream.name,
            demo: false,
        })
    }
}

/// Fixed placeholder served when the live source is unavailable or
/// unconfigured.
pub fn demo_report(city: Option<&str>) -> WeatherReport {
    WeatherReport {
        temp: 22.0,
        feels_like: 24.0,
        humidity: 65,
        description: "partly cloudy".to_string(),
        icon: "02d".to_string(),
        wind_speed: 3.5,
        visibility: 10.0,
        name: city.unwrap_or("Paris").to_string(),
        demo: true,
    }
}

#[derive(Debug, Deserialize)]
struct UpstreamResponse {
    main: UpstreamMain,
    weather: Vec<UpstreamCondition>,
    wind: UpstreamWind,
    #[serde(default)]
    visibility: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct UpstreamMain {
    temp: f64,
    feels_like: f64,
    humidity: u32,
}

#[derive(Debug, Deserialize)]
struct UpstreamCondition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct UpstreamWind {
    speed: f64,
}
