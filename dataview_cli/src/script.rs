use dataview_lib::value::Value;

/// One `--execute` line
#[derive(Debug)]
pub enum Command {
    /// transfer the buffer away
    Detach,
    Call { method: String, args: Vec<Value> },
}

/// returns None for blank lines
pub fn parse_line(line: &str) -> Option<Command> {
    let mut tokens = line.split_whitespace();
    let method = tokens.next()?;
    if method == "detach" {
        return Some(Command::Detach);
    }
    Some(Command::Call {
        method: method.to_string(),
        args: tokens.map(parse_token).collect(),
    })
}

/// keywords become their values, everything else is left to the view's own coercion
pub fn parse_token(token: &str) -> Value {
    match token {
        "undefined" => Value::Undefined,
        "null" => Value::Null,
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        _ => Value::String(token.to_string()),
    }
}

pub fn display_value(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Number(n) => display_number(*n),
        Value::String(s) => format!("{:?}", s),
        Value::Object => "[object Object]".to_string(),
        Value::Buffer(_) => "[object ArrayBuffer]".to_string(),
        Value::View(_) => "[object DataView]".to_string(),
    }
}

fn display_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let infinity = if n > 0.0 { "Infinity" } else { "-Infinity" };
        infinity.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::script::{parse_line, parse_token, display_value, Command};
    use dataview_lib::value::Value;

    #[test]
    fn call_with_arguments() {
        match parse_line("  setUint32 0 0x01020304 true ") {
            Some(Command::Call { method, args }) => {
                assert_eq!(method, "setUint32");
                assert_eq!(args.len(), 3);
                assert!(matches!(&args[1], Value::String(s) if s == "0x01020304"));
                assert!(matches!(args[2], Value::Boolean(true)));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn detach_and_blank() {
        assert!(matches!(parse_line("detach"), Some(Command::Detach)));
        assert!(parse_line("   ").is_none());
    }

    #[test]
    fn keywords() {
        assert!(parse_token("undefined").is_undefined());
        assert!(matches!(parse_token("null"), Value::Null));
        assert!(matches!(parse_token("False"), Value::String(_)));
    }

    #[test]
    fn numbers_print_like_the_host() {
        assert_eq!(display_value(&Value::Number(4.0)), "4");
        assert_eq!(display_value(&Value::Number(-0.0)), "0");
        assert_eq!(display_value(&Value::Number(1.5)), "1.5");
        assert_eq!(display_value(&Value::Number(f64::NAN)), "NaN");
        assert_eq!(display_value(&Value::Number(f64::NEG_INFINITY)), "-Infinity");
        assert_eq!(display_value(&Value::Undefined), "undefined");
    }
}
