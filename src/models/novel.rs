use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use utoipa::ToSchema;

use super::chapter::ChapterId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Status {
    Reading,
    Completed,
    Waiting,
    Dropped,
    Hiatus,
    Invalid,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Reading => "Reading",
            Status::Completed => "Completed",
            Status::Waiting => "Waiting",
            Status::Dropped => "Dropped",
            Status::Hiatus => "Hiatus",
            Status::Invalid => "Invalid",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NovelEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub country: String,
    pub title: String,
    pub chapter: ChapterId,
    /// 0 means unrated.
    pub rating: u32,
    pub status: Status,
    pub tags: Vec<String>,
    pub notes: String,
    pub date_modified: DateTime<Utc>,
}

/// Which novels the backend list routes should return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum NovelSubset {
    #[default]
    #[serde(alias = "all")]
    All,
    #[serde(alias = "not_sus")]
    NotSus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NovelStats {
    pub novel_count: u32,
    pub chapter_count: u32,
    pub average_rating: f32,
    pub volumes_completed: u32,
    pub novels_not_started: u32,
    // index + 1 is the rating
    #[schema(value_type = Vec<u32>)]
    pub rating_dist: [u32; 10],
    pub status_dist: HashMap<String, u32>,
    pub chapter_dist: HashMap<String, u32>,
    pub country_dist: HashMap<String, u32>,
}
