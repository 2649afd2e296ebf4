//! Field-level change summaries for audit entries

use serde_json::Value;

/// Longest string value shown verbatim in a summary
const MAX_SHOWN_CHARS: usize = 40;

/// Summarize top-level field changes between two JSON objects
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        return (before != after)
            .then(|| format!("{} -> {}", format_value(before), format_value(after)));
    };

    let mut changes = Vec::new();

    for (key, before_val) in before_obj {
        match after_obj.get(key) {
            Some(after_val) if after_val != before_val => changes.push(format!(
                "{}: {} -> {}",
                key,
                format_value(before_val),
                format_value(after_val)
            )),
            Some(_) => {}
            None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
        }
    }

    for (key, after_val) in after_obj {
        if !before_obj.contains_key(key) {
            changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
        }
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > MAX_SHOWN_CHARS => {
            let head: String = s.chars().take(MAX_SHOWN_CHARS - 3).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_changed_field() {
        let before = json!({"name": "Vacation", "current_amount": 60000});
        let after = json!({"name": "Vacation", "current_amount": 100000});
        assert_eq!(
            generate_diff(&before, &after).unwrap(),
            "current_amount: 60000 -> 100000"
        );
    }

    #[test]
    fn test_no_change() {
        let value = json!({"is_active": true});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_added_and_removed() {
        let before = json!({"icon": "FiHome"});
        let after = json!({"budget_id": "x"});
        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("icon: \"FiHome\" -> (removed)"));
        assert!(diff.contains("budget_id: (added) -> \"x\""));
    }

    #[test]
    fn test_arrays_are_summarized() {
        let before = json!({"transactions": []});
        let after = json!({"transactions": [{"amount": 1}]});
        assert_eq!(
            generate_diff(&before, &after).unwrap(),
            "transactions: [0 items] -> [1 items]"
        );
    }

    #[test]
    fn test_long_multibyte_string_is_truncated_safely() {
        let long = "€".repeat(60);
        let diff = generate_diff(&json!({"d": long}), &json!({"d": "x"})).unwrap();
        assert!(diff.contains("..."));
    }
}
