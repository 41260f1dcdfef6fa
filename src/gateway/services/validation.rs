//! Field-level checks shared by the dish and order services.
//!
//! Request bodies arrive loosely typed: a price may be a string, a quantity
//! may be missing. These helpers classify raw values so every violated rule
//! can be reported together instead of failing at deserialization.

use serde_json::Value;

/// Accumulates rule violations for one request
#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    /// Push `message` when `failed` holds
    pub fn check(&mut self, failed: bool, message: impl Into<String>) {
        if failed {
            self.push(message);
        }
    }

    /// `Ok(())` if nothing was recorded, else every message joined by spaces
    pub fn into_result(self) -> Result<(), String> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0.join(" "))
        }
    }
}

/// Present, non-empty JSON string, borrowed.
///
/// Numbers, booleans, lists and objects are not text.
pub fn text(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

/// Body id that is present and differs from the route id.
///
/// An absent, null or empty body id counts as absent. Non-string ids are
/// compared by their JSON text, so `6` is reported as `6`.
pub fn mismatched_id(body_id: Option<&Value>, route_id: &str) -> Option<String> {
    if !is_present(body_id) {
        return None;
    }
    let id = match body_id? {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    (id != route_id).then_some(id)
}

/// JSON truthiness: missing, null, false, 0 and "" are all "not present"
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// A JSON number that is a whole value greater than zero.
///
/// Integral floats such as `5.0` qualify; strings never do, even `"5"`.
pub fn positive_integer(value: Option<&Value>) -> Option<u64> {
    let Some(Value::Number(n)) = value else {
        return None;
    };
    if let Some(u) = n.as_u64() {
        return (u > 0).then_some(u);
    }
    let f = n.as_f64()?;
    (f.fract() == 0.0 && f > 0.0 && f <= u64::MAX as f64).then_some(f as u64)
}
