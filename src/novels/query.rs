use serde::Deserialize;
use std::cmp::Ordering;
use utoipa::ToSchema;

use crate::models::NovelEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FilterColumn {
    Title,
    Country,
    Tags,
    Rating,
    Status,
    Notes,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Chapter,
    Title,
    Rating,
    DateModified,
    Country,
    Status,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovelFilter {
    pub column: FilterColumn,
    pub text: String,
}

impl NovelFilter {
    pub fn new(column: FilterColumn, text: impl Into<String>) -> Self {
        Self {
            column,
            text: text.into(),
        }
    }

    /// Tags match when every comma-separated term names one of the novel's tags.
    /// Rating and status compare exactly; other columns match on a substring.
    pub fn matches(&self, novel: &NovelEntry) -> bool {
        let needle = self.text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
        match self.column {
            FilterColumn::Title => contains(novel.title.as_str()),
            FilterColumn::Country => contains(novel.country.as_str()),
            FilterColumn::Tags => needle
                .split(',')
                .map(str::trim)
                .filter(|term| !term.is_empty())
                .all(|term| novel.tags.iter().any(|t| t.to_lowercase() == term)),
            FilterColumn::Rating => rating_text(novel.rating) == needle,
            FilterColumn::Status => novel.status.to_string().eq_ignore_ascii_case(&needle),
            FilterColumn::Notes => contains(novel.notes.as_str()),
        }
    }
}

pub(crate) fn rating_text(rating: u32) -> String {
    if rating == 0 {
        String::new()
    } else {
        rating.to_string()
    }
}

fn compare_by(key: SortKey, a: &NovelEntry, b: &NovelEntry) -> Ordering {
    match key {
        SortKey::Chapter => a.chapter.cmp(&b.chapter),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Rating => a.rating.cmp(&b.rating),
        SortKey::DateModified => a.date_modified.cmp(&b.date_modified),
        SortKey::Country => a.country.cmp(&b.country),
        SortKey::Status => a.status.to_string().cmp(&b.status.to_string()),
    }
}

/// Filters then stable-sorts a novel list.
pub fn apply(
    novels: Vec<NovelEntry>,
    filter: Option<&NovelFilter>,
    key: SortKey,
    order: SortOrder,
) -> Vec<NovelEntry> {
    let mut novels: Vec<NovelEntry> = match filter {
        Some(f) => novels.into_iter().filter(|n| f.matches(n)).collect(),
        None => novels,
    };

    novels.sort_by(|a, b| {
        let ordering = compare_by(key, a, b);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    novels
}
