use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use holy_word_core::{Clock, SystemClock, VerseStore};
use holy_word_service::VerseService;
use std::path::Path;

fn load_service(dataset: &Path) -> Result<VerseService> {
    let store = VerseStore::load(dataset)
        .with_context(|| format!("failed to load verses from {}", dataset.display()))?;
    Ok(VerseService::preloaded(store))
}

pub(crate) fn run_today(dataset: &Path, date: Option<NaiveDate>) -> Result<()> {
    let service = load_service(dataset)?;
    let now = match date {
        Some(day) => day.and_time(NaiveTime::MIN).and_utc(),
        None => SystemClock.now(),
    };
    let daily = service.daily_verse(now)?;
    println!("{}", serde_json::to_string_pretty(&daily)?);
    Ok(())
}

pub(crate) fn run_list(dataset: &Path) -> Result<()> {
    let service = load_service(dataset)?;
    let list = service.list_verses()?;
    println!("{}", serde_json::to_string_pretty(&list)?);
    Ok(())
}
