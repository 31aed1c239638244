use crate::models::NovelEntry;
use crate::novels::query::rating_text;

pub const CSV_COLUMNS: [&str; 8] = [
    "country",
    "title",
    "chapter",
    "rating",
    "status",
    "tags",
    "notes",
    "date_modified",
];

fn row(novel: &NovelEntry) -> [String; 8] {
    [
        novel.country.clone(),
        novel.title.clone(),
        novel.chapter.to_string(),
        rating_text(novel.rating),
        novel.status.to_string(),
        novel.tags.join(","),
        novel.notes.clone(),
        novel.date_modified.to_rfc3339(),
    ]
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn line<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| quote(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders novels as CSV: every field quoted, CRLF between rows, header first.
pub fn to_csv(novels: &[NovelEntry]) -> String {
    std::iter::once(line(&CSV_COLUMNS))
        .chain(novels.iter().map(|n| line(&row(n))))
        .collect::<Vec<_>>()
        .join("\r\n")
}
