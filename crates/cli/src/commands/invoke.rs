use anyhow::Result;
use holy_word_core::SystemClock;
use holy_word_functions::{Endpoint, invoke};
use std::path::Path;

pub(crate) fn run(endpoint: Endpoint, dataset: &Path) -> Result<()> {
    let response = invoke(endpoint, dataset, &SystemClock);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
