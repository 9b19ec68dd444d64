use super::*;
use chrono::{Duration, TimeZone};
use holy_word_core::{VerseRecord, constants::START_DATE};
use std::io::Write;
use tempfile::NamedTempFile;

fn record(count: u64) -> VerseRecord {
    VerseRecord {
        sequence_number: count,
        english_text: format!("English {count}"),
        english_reference: format!("Ref {count}"),
        telugu_text_part1: format!("తెలుగు {count}"),
        telugu_text_part2: "భాగం".to_owned(),
        telugu_reference: format!("సూచిక {count}"),
        background_image_description: format!("image {count}"),
    }
}

fn three_verses() -> VerseService {
    VerseService::preloaded(VerseStore::from_records(vec![record(1), record(2), record(3)]))
}

fn start() -> DateTime<Utc> {
    Utc.from_utc_datetime(&START_DATE.and_hms_opt(9, 30, 0).unwrap())
}

#[test]
fn test_daily_verse_on_start_date() {
    let daily = three_verses().daily_verse(start()).unwrap();
    assert_eq!(daily.verse.id, 1);
    assert_eq!(daily.day_number, 1);
    assert_eq!(daily.total_verses, 3);
}

#[test]
fn test_daily_verse_wraps_after_three_days() {
    let daily = three_verses().daily_verse(start() + Duration::days(3)).unwrap();
    assert_eq!(daily.verse.id, 1);
    assert_eq!(daily.day_number, 4);
}

#[test]
fn test_daily_verse_second_day() {
    let daily = three_verses().daily_verse(start() + Duration::days(1)).unwrap();
    assert_eq!(daily.verse.id, 2);
    assert_eq!(daily.verse.telugu, "తెలుగు 2 భాగం");
}

#[test]
fn test_daily_verse_empty_dataset() {
    let service = VerseService::preloaded(VerseStore::from_records(Vec::new()));
    let err = service.daily_verse(start()).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_list_verses_empty_dataset() {
    let service = VerseService::preloaded(VerseStore::from_records(Vec::new()));
    let list = service.list_verses().unwrap();
    assert_eq!(list.total_verses, 0);
    assert!(list.verses.is_empty());
    assert_eq!(list.usage, ApiUsage::default());
}

#[test]
fn test_list_verses_keeps_order() {
    let service =
        VerseService::preloaded(VerseStore::from_records(vec![record(9), record(4), record(6)]));
    let list = service.list_verses().unwrap();
    let ids: Vec<u64> = list.verses.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![9, 4, 6]);
    assert_eq!(list.total_verses, 3);
}

#[test]
fn test_startup_failure_is_reported_per_request() {
    let dir = tempfile::tempdir().unwrap();
    let service = VerseService::load_at_startup(dir.path().join("missing.json"));
    assert!(matches!(service.source(), VerseSource::Unavailable(_)));
    assert!(matches!(service.list_verses(), Err(ServiceError::DatasetUnavailable(_))));
    assert!(matches!(service.daily_verse(start()), Err(ServiceError::DatasetUnavailable(_))));
    assert_eq!(service.verses_loaded(), 0);
}

#[test]
fn test_on_demand_reads_file_each_call() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"[{"Count": 5, "English verse": "five"}]"#).unwrap();
    let service = VerseService::on_demand(file.path());
    assert_eq!(service.list_verses().unwrap().total_verses, 1);

    std::fs::write(file.path(), br#"[{"Count": 5}, {"Count": 6}]"#).unwrap();
    assert_eq!(service.list_verses().unwrap().total_verses, 2);
}

#[test]
fn test_health_snapshot() {
    let now = Utc.with_ymd_and_hms(2025, 10, 20, 8, 30, 0).unwrap();
    let health = three_verses().health(now);
    assert_eq!(health.status, "OK");
    assert_eq!(health.timestamp, "2025-10-20T08:30:00.000Z");
    assert_eq!(health.verses_loaded, 3);
}

#[test]
fn test_daily_verse_serializes_flat() {
    let daily = three_verses().daily_verse(start()).unwrap();
    let value = serde_json::to_value(&daily).unwrap();
    assert_eq!(value["id"], 1);
    assert_eq!(value["dayNumber"], 1);
    assert_eq!(value["totalVerses"], 3);
    assert_eq!(value["backgroundImage"], "image 1");
    assert!(value.get("verse").is_none());
}
