//! Workload loader: parses a tabular (CSV) or JSON workload description into
//! a validated process list. Spec §4.1.
//!
//! Grounded on the original `parse_csv_to_processes`/`load_json_processes`
//! functions: the same header aliases, the same defaulting rules, and the
//! same `.csv`-vs-everything-else dispatch on the input path's extension.

use std::collections::HashSet;
use std::path::Path;

use csv::StringRecord;
use serde::Deserialize;

use crate::error::{Result, SchedulerError};
use crate::process::Process;

/// Load a workload from `path`, dispatching on its extension: `.csv` is
/// parsed as tabular input, anything else as the JSON array form.
pub fn load(path: &Path) -> Result<Vec<Process>> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        load_csv(path)
    } else {
        load_json(path)
    }
}

/// Locate a header equal to `name`, case-sensitively then case-insensitively.
fn locate(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .or_else(|| headers.iter().position(|h| h.eq_ignore_ascii_case(name)))
}

/// Find a header matching `canonical` case-sensitively, then
/// case-insensitively, warning when only the latter matched.
fn find_column(headers: &StringRecord, canonical: &str) -> Option<usize> {
    if let Some(idx) = headers.iter().position(|h| h == canonical) {
        return Some(idx);
    }
    let idx = locate(headers, canonical)?;
    log::warn!("column `{canonical}` matched case-insensitively as `{}`", &headers[idx]);
    Some(idx)
}

/// Find a header matching any of `aliases` (case-insensitively), trying each
/// in order, warning that `canonical` fell back to an alias match.
fn find_any(headers: &StringRecord, canonical: &str, aliases: &[&str]) -> Option<usize> {
    let idx = aliases.iter().find_map(|name| locate(headers, name))?;
    log::warn!("column `{canonical}` matched via alias as `{}`", &headers[idx]);
    Some(idx)
}

fn cell(record: &StringRecord, idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| record.get(i)).filter(|s| !s.is_empty())
}

fn parse_int(value: &str, field: &str, row: usize) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| SchedulerError::InvalidWorkload(format!("row {row}: `{field}` is not an integer: {value:?}")))
}

fn load_csv(path: &Path) -> Result<Vec<Process>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let pid_col = find_column(&headers, "PID");
    let arrival_col =
        find_column(&headers, "ArrivalTime").or_else(|| find_any(&headers, "ArrivalTime", &["Arrival", "arrival", "arr"]));
    let burst_col = find_column(&headers, "BurstTime").or_else(|| find_any(&headers, "BurstTime", &["Burst", "burst", "cpu"]));
    let priority_col = find_column(&headers, "Priority");
    let queue_col = find_column(&headers, "QueueLevel");

    let mut processes = Vec::new();
    let mut seen_pids = HashSet::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = idx + 1;

        let pid = cell(&record, pid_col).map(str::to_string).unwrap_or_else(|| format!("P{row}"));

        let arrival = match cell(&record, arrival_col) {
            Some(v) => parse_int(v, "ArrivalTime", row)?,
            None => 0,
        };

        let burst = match cell(&record, burst_col) {
            Some(v) => parse_int(v, "BurstTime", row)?,
            None => return Err(SchedulerError::InvalidWorkload(format!("row {row}: missing BurstTime"))),
        };
        if burst <= 0 {
            return Err(SchedulerError::InvalidWorkload(format!("row {row}: BurstTime must be positive, got {burst}")));
        }

        let priority = match cell(&record, priority_col) {
            Some(v) => parse_int(v, "Priority", row)?,
            None => 0,
        };

        let queue_level = match cell(&record, queue_col) {
            Some(v) => parse_int(v, "QueueLevel", row)?,
            None => 0,
        };
        if queue_level < 0 {
            return Err(SchedulerError::InvalidWorkload(format!("row {row}: QueueLevel must be non-negative, got {queue_level}")));
        }
        if arrival < 0 {
            return Err(SchedulerError::InvalidWorkload(format!("row {row}: ArrivalTime must be non-negative, got {arrival}")));
        }

        if !seen_pids.insert(pid.clone()) {
            return Err(SchedulerError::InvalidWorkload(format!("duplicate PID: {pid}")));
        }
        if pid_col.is_none() {
            log::warn!("row {row}: PID column missing, synthesized pid {pid}");
        }

        processes.push(Process::new(pid, arrival as u64, burst as u64, priority, queue_level as u32));
    }

    Ok(processes)
}

#[derive(Deserialize)]
struct JsonRow {
    pid: Option<String>,
    #[serde(default)]
    arrival: i64,
    #[serde(alias = "cpu_burst")]
    burst: Option<i64>,
    #[serde(default)]
    priority: i64,
    #[serde(default)]
    queue_level: i64,
}

fn load_json(path: &Path) -> Result<Vec<Process>> {
    let text = std::fs::read_to_string(path)?;
    let rows: Vec<JsonRow> = serde_json::from_str(&text)
        .map_err(|e| SchedulerError::InvalidWorkload(format!("malformed JSON workload: {e}")))?;

    let mut processes = Vec::new();
    let mut seen_pids = HashSet::new();

    for (idx, row) in rows.into_iter().enumerate() {
        let row_num = idx + 1;
        let pid = row.pid.unwrap_or_else(|| format!("P{row_num}"));

        let burst = row
            .burst
            .ok_or_else(|| SchedulerError::InvalidWorkload(format!("row {row_num}: missing burst")))?;
        if burst <= 0 {
            return Err(SchedulerError::InvalidWorkload(format!("row {row_num}: burst must be positive, got {burst}")));
        }
        if row.arrival < 0 {
            return Err(SchedulerError::InvalidWorkload(format!("row {row_num}: arrival must be non-negative, got {}", row.arrival)));
        }
        if row.queue_level < 0 {
            return Err(SchedulerError::InvalidWorkload(format!("row {row_num}: queue_level must be non-negative, got {}", row.queue_level)));
        }

        if !seen_pids.insert(pid.clone()) {
            return Err(SchedulerError::InvalidWorkload(format!("duplicate pid: {pid}")));
        }

        processes.push(Process::new(pid, row.arrival as u64, burst as u64, row.priority, row.queue_level as u32));
    }

    Ok(processes)
}
