//! `notely token` -- mint an API key from the command line.

use notely_infra::crypto::token::generate_token;

/// Generate a key and print it, as plain text or `{"api_key": "..."}`.
pub fn print_token(json: bool) -> anyhow::Result<()> {
    let api_key = generate_token()?;
    println!("{}", render(&api_key, json)?);
    Ok(())
}

fn render(api_key: &str, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(&serde_json::json!({ "api_key": api_key }))?)
    } else {
        Ok(api_key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        assert_eq!(render("abc123", false).unwrap(), "abc123");
    }

    #[test]
    fn test_render_json() {
        let out = render("abc123", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["api_key"], "abc123");
    }
}
