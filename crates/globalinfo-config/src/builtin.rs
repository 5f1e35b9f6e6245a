//! Volatile sources available to namespace definitions

use crate::error::BuiltinError;
use chrono::format::{Item, StrftimeItems};
use globalinfo_core::{from_fn, try_from_fn, Source};
use serde_json::Value;
use std::cell::Cell;
use std::env::VarError;
use std::fmt::Write;

/// Reads `var` from the process environment on every access
pub fn env_var(var: String, default: Option<Value>) -> impl Source<Value> + 'static {
    try_from_fn(move || match std::env::var(&var) {
        Ok(value) => Ok(Value::String(value)),
        Err(VarError::NotPresent) => default
            .clone()
            .ok_or_else(|| BuiltinError::MissingEnv(var.clone())),
        Err(VarError::NotUnicode(_)) => Err(BuiltinError::NotUnicode(var.clone())),
    })
}

/// Current local time, RFC 3339 unless a strftime `format` is given
pub fn now(format: Option<String>) -> impl Source<Value> + 'static {
    try_from_fn(move || -> Result<Value, BuiltinError> {
        let now = chrono::Local::now();
        match &format {
            None => Ok(Value::String(now.to_rfc3339())),
            Some(fmt) => {
                let mut out = String::new();
                write!(out, "{}", now.format(fmt))
                    .map_err(|_| BuiltinError::Format(fmt.clone()))?;
                Ok(Value::String(out))
            }
        }
    })
}

/// Yields `start`, then `start + step`, and so on
pub fn counter(start: i64, step: i64) -> impl Source<Value> + 'static {
    let next = Cell::new(start);
    from_fn(move || {
        let current = next.get();
        next.set(current.wrapping_add(step));
        Value::from(current)
    })
}

pub(crate) fn is_valid_time_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
