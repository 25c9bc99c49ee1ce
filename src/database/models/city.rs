use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct City {
    pub id: i32,
    pub state_abbrev: String,
    pub name: String,
    pub climate: String,
}

/// Body of POST /city and PUT /city/:id
#[derive(Debug, Clone, Deserialize)]
pub struct CityInput {
    pub state_abbrev: String,
    pub name: String,
    pub climate: String,
}

/// Row of GET /city: city joined with its state's name
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CityListing {
    pub id: i32,
    pub state: String,
    pub city: String,
}

/// Average temperature of one city; `avg` is null when it has no readings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CityAverage {
    pub name: String,
    pub avg: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClimateAverage {
    pub climate: String,
    pub name: String,
    pub avg: Option<f64>,
}
