//! Recursive placeholder resolution over arbitrary template JSON.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::Value;

use super::ParamMap;
use crate::util::ids::short_token;

lazy_static! {
    static ref TIMESTAMP_PLUS_RE: Regex = Regex::new(r"\$\{timestamp_plus_(\d+)s\}").unwrap();
    static ref UNIQUE_ID_RE: Regex = Regex::new(r"\$\{uniqueId\}").unwrap();
}

/// Wire timestamp format: RFC 3339 UTC, seconds precision, `Z` suffix.
pub fn format_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Produces a resolved deep copy of `template`. Named `${key}` tokens are
/// substituted first from `params`; keys absent from the map are left as
/// literal text. The special tokens `${timestamp}`, `${timestamp_plus_Ns}`
/// and `${uniqueId}` resolve afterwards, independent of `params`, against the
/// single `base_time` so all relative offsets in one call stay consistent.
///
/// Object keys are never substituted, only values. Non-string leaves are
/// returned unchanged. The input is never mutated.
pub fn resolve(template: &Value, params: &ParamMap, base_time: DateTime<Utc>) -> Value {
    match template {
        Value::String(s) => Value::String(resolve_str(s, params, base_time)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| resolve(item, params, base_time))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), resolve(v, params, base_time)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn resolve_str(s: &str, params: &ParamMap, base_time: DateTime<Utc>) -> String {
    let mut out = s.to_string();

    for (key, value) in params {
        let Some(text) = scalar_text(value) else {
            continue;
        };
        let token = format!("${{{key}}}");
        if out.contains(&token) {
            out = out.replace(&token, &text);
        }
    }

    if out.contains("${timestamp}") {
        out = out.replace("${timestamp}", &format_timestamp(base_time));
    }
    if out.contains("${timestamp_plus_") {
        out = TIMESTAMP_PLUS_RE
            .replace_all(&out, |caps: &Captures<'_>| {
                let seconds: i64 = caps[1].parse().unwrap_or(0);
                format_timestamp(base_time + Duration::seconds(seconds))
            })
            .into_owned();
    }
    if out.contains("${uniqueId}") {
        // A fresh token per occurrence, not one per call.
        out = UNIQUE_ID_RE
            .replace_all(&out, |_: &Captures<'_>| short_token())
            .into_owned();
    }

    out
}

/// String form of a scalar parameter value. Null and structured values do not
/// substitute, which leaves their placeholders literal.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
