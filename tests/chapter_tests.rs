use novel_portal::models::ChapterId;
use std::cmp::Ordering;

fn novel(volume: u32, chapter: u32, part: u32) -> ChapterId {
    ChapterId::Novel { volume, chapter, part }
}

fn samples() -> Vec<ChapterId> {
    vec![
        ChapterId::Invalid,
        ChapterId::Web(0),
        ChapterId::Web(1),
        ChapterId::Web(500),
        novel(0, 0, 0),
        novel(1, 5, 0),
        novel(1, 5, 1),
        novel(2, 0, 0),
        novel(99, 99, 99),
    ]
}

#[test]
fn test_novel_order_is_lexicographic() {
    assert_eq!(novel(1, 5, 0).compare(&novel(1, 5, 1)), Ordering::Less);
    assert_eq!(novel(1, 5, 1).compare(&novel(2, 0, 0)), Ordering::Less);
    assert_eq!(novel(3, 1, 0).compare(&novel(2, 9, 9)), Ordering::Greater);
    assert_eq!(novel(4, 4, 4).compare(&novel(4, 4, 4)), Ordering::Equal);
}

#[test]
fn test_web_order_is_numeric() {
    assert_eq!(ChapterId::Web(9).compare(&ChapterId::Web(10)), Ordering::Less);
    assert_eq!(ChapterId::Web(100).compare(&ChapterId::Web(20)), Ordering::Greater);
    assert_eq!(ChapterId::Web(7).compare(&ChapterId::Web(7)), Ordering::Equal);
}

#[test]
fn test_novel_always_before_web() {
    assert_eq!(novel(99, 99, 99).compare(&ChapterId::Web(1)), Ordering::Less);
    assert_eq!(ChapterId::Web(0).compare(&novel(0, 0, 0)), Ordering::Greater);
    assert!(novel(u32::MAX, u32::MAX, u32::MAX) < ChapterId::Web(0));
}

#[test]
fn test_invalid_sorts_first() {
    assert_eq!(ChapterId::Invalid.compare(&ChapterId::Invalid), Ordering::Equal);
    for other in samples().into_iter().filter(ChapterId::is_valid) {
        assert_eq!(ChapterId::Invalid.compare(&other), Ordering::Less);
        assert_eq!(other.compare(&ChapterId::Invalid), Ordering::Greater);
    }
}

#[test]
fn test_compare_is_antisymmetric() {
    let all = samples();
    for a in &all {
        for b in &all {
            assert_eq!(a.compare(b), b.compare(a).reverse(), "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn test_sorting_a_mixed_list() {
    let mut chapters = vec![
        ChapterId::Web(3),
        novel(2, 1, 0),
        ChapterId::Invalid,
        ChapterId::Web(1),
        novel(1, 9, 2),
    ];
    chapters.sort();

    assert_eq!(
        chapters,
        vec![
            ChapterId::Invalid,
            novel(1, 9, 2),
            novel(2, 1, 0),
            ChapterId::Web(1),
            ChapterId::Web(3),
        ]
    );
}

#[test]
fn test_display_round_trip() {
    for chapter in samples().into_iter().filter(ChapterId::is_valid) {
        let text = chapter.to_string();
        assert_eq!(text.parse::<ChapterId>().unwrap(), chapter, "round trip of '{}'", text);
    }
}

#[test]
fn test_invalid_formats_as_empty() {
    assert_eq!(ChapterId::Invalid.to_string(), "");
    assert_eq!("".parse::<ChapterId>().unwrap(), ChapterId::Invalid);
}

#[test]
fn test_text_parse_accepts_compact_form() {
    assert_eq!("v3c98p2".parse::<ChapterId>().unwrap(), novel(3, 98, 2));
    assert_eq!("V3C98P2".parse::<ChapterId>().unwrap(), novel(3, 98, 2));
    assert_eq!(" 42 ".parse::<ChapterId>().unwrap(), ChapterId::Web(42));
}

#[test]
fn test_text_parse_rejects_garbage() {
    assert!("chapter twelve".parse::<ChapterId>().is_err());
    assert!("V1 C2".parse::<ChapterId>().is_err());
    assert!("99999999999".parse::<ChapterId>().is_err());
}

#[test]
fn test_deserialize_entry_field() {
    let chapters: Vec<ChapterId> =
        serde_json::from_str(r#"[{"Web": 4}, "Invalid", {"Novel": {"volume": 1, "chapter": 0, "part": 2}}]"#).unwrap();
    assert_eq!(chapters, vec![ChapterId::Web(4), ChapterId::Invalid, novel(1, 0, 2)]);

    let bad: Result<ChapterId, _> = serde_json::from_str(r#"{"Web": "NaN"}"#);
    assert!(bad.is_err());
}
