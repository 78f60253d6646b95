// Helper functions for safe logging and lenient parameter decoding

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// let masked = safe_email_log("user@example.com");
/// // Returns: "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ if email.is_empty() => String::new(),
        _ => "***@***.***".to_string(),
    }
}

/// Masks every `email` member of a JSON object tree in place
pub fn mask_email_fields(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, member) in map.iter_mut() {
                if key == "email" {
                    if let Value::String(email) = member {
                        *email = safe_email_log(email);
                    }
                } else {
                    mask_email_fields(member);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(mask_email_fields),
        _ => {}
    }
}

/// Reads any JSON scalar as text. `null` becomes the empty string,
/// numbers and booleans keep their literal spelling.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_as_text(&Value::deserialize(deserializer)?))
}

/// Reads an integer out of a number or numeric text. Anything else is 0.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => leading_integer(&s),
        Value::Bool(b) => i64::from(b),
        _ => 0,
    })
}

pub fn value_as_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Integer prefix of a string (`" 7 years"` is 7), 0 when there is none
fn leading_integer(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end]
        .parse::<i64>()
        .map(|n| sign * n)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_string")]
        text: String,
        #[serde(default, deserialize_with = "lenient_i64")]
        number: i64,
    }

    fn probe(value: Value) -> Probe {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_safe_email_log() {
        assert_eq!(safe_email_log("user@example.com"), "u***@example.com");
        assert_eq!(safe_email_log("not-an-email"), "***@***.***");
        assert_eq!(safe_email_log(""), "");
    }

    #[test]
    fn test_mask_email_fields_nested() {
        let mut body = json!({
            "email": "jane@example.com",
            "profile": {"email": "bob@example.org", "bio": "hi"},
        });
        mask_email_fields(&mut body);
        assert_eq!(body["email"], "j***@example.com");
        assert_eq!(body["profile"]["email"], "b***@example.org");
        assert_eq!(body["profile"]["bio"], "hi");
    }

    #[test]
    fn test_lenient_string_coerces_scalars() {
        assert_eq!(probe(json!({"text": 42})).text, "42");
        assert_eq!(probe(json!({"text": true})).text, "true");
        assert_eq!(probe(json!({"text": null})).text, "");
        assert_eq!(probe(json!({})).text, "");
    }

    #[test]
    fn test_lenient_i64_never_rejects() {
        assert_eq!(probe(json!({"number": "5"})).number, 5);
        assert_eq!(probe(json!({"number": " 7 years"})).number, 7);
        assert_eq!(probe(json!({"number": "-3"})).number, -3);
        assert_eq!(probe(json!({"number": "seven"})).number, 0);
        assert_eq!(probe(json!({"number": 4.9})).number, 4);
        assert_eq!(probe(json!({"number": ""})).number, 0);
        assert_eq!(probe(json!({})).number, 0);
    }
}
