use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use utoipa::ToSchema;

static NOVEL_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[vV]\s*(\d+)\s*[cC]\s*(\d+)\s*[pP]\s*(\d+)$").expect("static regex")
});

/// Reading position of a novel entry.
///
/// The variant order is part of the public contract: `Invalid` sorts first,
/// then every `Novel` position, then every `Web` chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum ChapterId {
    Web(u32),
    Novel { volume: u32, chapter: u32, part: u32 },
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterParseError {
    UnknownShape(String),
    InvalidNumber { field: &'static str, value: String },
    MalformedText(String),
}

impl fmt::Display for ChapterParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChapterParseError::UnknownShape(raw) => write!(f, "unrecognized chapter shape: {}", raw),
            ChapterParseError::InvalidNumber { field, value } => {
                write!(f, "chapter field '{}' is not a valid number: {}", field, value)
            }
            ChapterParseError::MalformedText(raw) => write!(f, "malformed chapter text: '{}'", raw),
        }
    }
}

impl std::error::Error for ChapterParseError {}

impl ChapterId {
    /// Builds a chapter from untyped JSON as sent by the backend or a client.
    ///
    /// Accepts the externally tagged wire form (`{"Web": 3}`,
    /// `{"Novel": {...}}`, `"Invalid"`), a bare `{volume, chapter, part}`
    /// object, a plain number, or display text.
    pub fn parse(raw: &Value) -> Result<Self, ChapterParseError> {
        match raw {
            Value::Null => Ok(ChapterId::Invalid),
            Value::String(s) if s == "Invalid" => Ok(ChapterId::Invalid),
            Value::String(s) => s.parse(),
            Value::Number(_) => Ok(ChapterId::Web(as_u32("Web", raw)?)),
            Value::Object(map) => {
                if let Some(web) = map.get("Web") {
                    return Ok(ChapterId::Web(as_u32("Web", web)?));
                }
                match map.get("Novel") {
                    Some(Value::Object(inner)) => novel_from_map(inner),
                    Some(other) => Err(ChapterParseError::UnknownShape(other.to_string())),
                    None if map.contains_key("volume") => novel_from_map(map),
                    None => Err(ChapterParseError::UnknownShape(raw.to_string())),
                }
            }
            _ => Err(ChapterParseError::UnknownShape(raw.to_string())),
        }
    }

    pub fn compare(&self, other: &ChapterId) -> Ordering {
        match (self, other) {
            (ChapterId::Invalid, ChapterId::Invalid) => Ordering::Equal,
            (ChapterId::Invalid, _) => Ordering::Less,
            (_, ChapterId::Invalid) => Ordering::Greater,
            (ChapterId::Web(a), ChapterId::Web(b)) => a.cmp(b),
            (ChapterId::Novel { .. }, ChapterId::Web(_)) => Ordering::Less,
            (ChapterId::Web(_), ChapterId::Novel { .. }) => Ordering::Greater,
            (
                ChapterId::Novel { volume: v1, chapter: c1, part: p1 },
                ChapterId::Novel { volume: v2, chapter: c2, part: p2 },
            ) => (v1, c1, p1).cmp(&(v2, c2, p2)),
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, ChapterId::Invalid)
    }
}

fn as_u32(field: &'static str, value: &Value) -> Result<u32, ChapterParseError> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| ChapterParseError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

fn novel_from_map(map: &Map<String, Value>) -> Result<ChapterId, ChapterParseError> {
    let field = |name: &'static str| {
        map.get(name)
            .ok_or_else(|| ChapterParseError::InvalidNumber { field: name, value: "missing".to_string() })
            .and_then(|v| as_u32(name, v))
    };

    Ok(ChapterId::Novel {
        volume: field("volume")?,
        chapter: field("chapter")?,
        part: field("part")?,
    })
}

impl Ord for ChapterId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for ChapterId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChapterId::Web(n) => write!(f, "{}", n),
            ChapterId::Novel { volume, chapter, part } => write!(f, "V{} C{} P{}", volume, chapter, part),
            ChapterId::Invalid => Ok(()),
        }
    }
}

impl FromStr for ChapterId {
    type Err = ChapterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(ChapterId::Invalid);
        }

        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return trimmed
                .parse::<u32>()
                .map(ChapterId::Web)
                .map_err(|_| ChapterParseError::InvalidNumber { field: "Web", value: trimmed.to_string() });
        }

        let caps = NOVEL_TEXT
            .captures(trimmed)
            .ok_or_else(|| ChapterParseError::MalformedText(s.to_string()))?;

        let number = |idx: usize, field: &'static str| {
            caps[idx]
                .parse::<u32>()
                .map_err(|_| ChapterParseError::InvalidNumber { field, value: caps[idx].to_string() })
        };

        Ok(ChapterId::Novel {
            volume: number(1, "volume")?,
            chapter: number(2, "chapter")?,
            part: number(3, "part")?,
        })
    }
}

impl<'de> Deserialize<'de> for ChapterId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        ChapterId::parse(&raw).map_err(serde::de::Error::custom)
    }
}
