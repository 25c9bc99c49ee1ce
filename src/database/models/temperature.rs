use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Temperature {
    pub id: i32,
    pub city_id: i32,
    pub temperature: f64,
    pub date: NaiveDate,
}

/// Body of POST /temp and PUT /temperature/:id
#[derive(Debug, Clone, Deserialize)]
pub struct TemperatureInput {
    pub city_id: i32,
    pub temperature: f64,
    pub date: NaiveDate,
}
