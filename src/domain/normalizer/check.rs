//! Total link count extraction for connection checks.
//!
//! The `stats` action reports the count either at the top level or nested in
//! a `stats` object; the `db-stats` fallback nests it under `db-stats`.
//! A response is only usable when the HTTP status is 2xx and the body is JSON.

use serde_json::Value;

use super::fields::as_count;
use crate::domain::entities::RawApiResponse;

type CountShape = fn(&Value) -> Option<u64>;

const STATS_SHAPES: [CountShape; 2] = [top_level_total, nested_stats_total];
const DB_STATS_SHAPES: [CountShape; 1] = [db_stats_total];

/// Reads the total from a `stats` reply.
pub fn stats_total(raw: &RawApiResponse) -> Option<u64> {
    probe(raw, &STATS_SHAPES)
}

/// Reads the total from a `db-stats` reply.
pub fn db_stats_fallback_total(raw: &RawApiResponse) -> Option<u64> {
    probe(raw, &DB_STATS_SHAPES)
}

fn probe(raw: &RawApiResponse, shapes: &[CountShape]) -> Option<u64> {
    if !raw.is_success() {
        return None;
    }
    let json = raw.json.as_ref()?;
    shapes.iter().find_map(|shape| shape(json))
}

fn top_level_total(json: &Value) -> Option<u64> {
    json.get("total_links").and_then(as_count)
}

fn nested_stats_total(json: &Value) -> Option<u64> {
    json.pointer("/stats/total_links").and_then(as_count)
}

fn db_stats_total(json: &Value) -> Option<u64> {
    json.pointer("/db-stats/total_links").and_then(as_count)
}
