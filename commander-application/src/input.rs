//! 输入映射
//!
//! 把松散的键值输入（如请求体）映射为命令：字段优先按原名取值，
//! 否则接受 camelCase 形式的键；缺失的必填字段报 `UnmappableInput`。
//!
use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// 将输入映射为命令 `C`
///
/// 具有 serde 默认值的字段在缺失时使用默认值。
pub fn map_input_to_command<C>(input: &Map<String, Value>) -> Result<C, AppError>
where
    C: DeserializeOwned,
{
    let normalized = normalize_keys(input);

    serde_json::from_value::<C>(Value::Object(normalized)).map_err(|err| {
        let message = err.to_string();
        match missing_field(&message) {
            Some(field) => AppError::UnmappableInput {
                field: field.to_string(),
            },
            None => AppError::InvalidInput(message),
        }
    })
}

// 原键保留；若其 snake_case 形式不存在，则补充一份
fn normalize_keys(input: &Map<String, Value>) -> Map<String, Value> {
    let mut out = input.clone();
    for (key, value) in input {
        let snake = to_snake_case(key);
        if snake != *key && !out.contains_key(&snake) {
            out.insert(snake, value.clone());
        }
    }
    out
}

// serde 对缺失字段的固定描述："missing field `name`"
fn missing_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}

/// camelCase / PascalCase → snake_case
///
/// 连续大写视为缩写，在缩写与下一个单词之间断开：`HTTPPingCommand` → `http_ping_command`。
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '-' || ch == ' ' {
            out.push('_');
            continue;
        }
        if !ch.is_uppercase() {
            out.push(ch);
            continue;
        }

        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();
        let boundary = match prev {
            Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
            Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
            _ => false,
        };
        if boundary && !out.ends_with('_') {
            out.push('_');
        }
        out.extend(ch.to_lowercase());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct RegisterUserCommand {
        username: String,
        email_address: String,
        #[serde(default)]
        newsletter: bool,
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test input must be an object"),
        }
    }

    #[test]
    fn maps_exact_and_camel_case_keys() {
        let input = object(json!({
            "username": "jeffrey",
            "emailAddress": "jeffrey@example.com",
        }));

        let cmd: RegisterUserCommand = map_input_to_command(&input).unwrap();
        assert_eq!(
            cmd,
            RegisterUserCommand {
                username: "jeffrey".into(),
                email_address: "jeffrey@example.com".into(),
                newsletter: false,
            }
        );
    }

    #[test]
    fn exact_key_wins_over_camel_case() {
        let input = object(json!({
            "username": "a",
            "email_address": "exact@example.com",
            "emailAddress": "camel@example.com",
            "newsletter": true,
        }));

        let cmd: RegisterUserCommand = map_input_to_command(&input).unwrap();
        assert_eq!(cmd.email_address, "exact@example.com");
        assert!(cmd.newsletter);
    }

    #[test]
    fn missing_required_field_is_unmappable() {
        let input = object(json!({ "username": "a" }));

        let err = map_input_to_command::<RegisterUserCommand>(&input).unwrap_err();
        assert!(
            matches!(err, AppError::UnmappableInput { ref field } if field == "email_address"),
            "{err:?}"
        );
        assert_eq!(
            err.to_string(),
            "unable to map input to command: email_address"
        );
    }

    #[test]
    fn wrong_shape_is_invalid_input() {
        let input = object(json!({ "username": 1, "email_address": "x" }));

        let err = map_input_to_command::<RegisterUserCommand>(&input).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)), "{err:?}");
    }

    #[test]
    fn snake_case_conversion() {
        assert_eq!(to_snake_case("emailAddress"), "email_address");
        assert_eq!(to_snake_case("UserId"), "user_id");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("line2Address"), "line2_address");
    }

    #[test]
    fn snake_case_keeps_acronyms_together() {
        assert_eq!(to_snake_case("HTTPPingCommand"), "http_ping_command");
        assert_eq!(to_snake_case("PingHTTP"), "ping_http");
        assert_eq!(to_snake_case("Order2Ship"), "order2_ship");
    }
}
