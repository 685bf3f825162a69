/// Parse a boolean form value; blank or absent falls back to `default`.
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        Some(v) => {
            let t = v.trim().to_lowercase();
            if t.is_empty() {
                default
            } else {
                matches!(t.as_str(), "1" | "true" | "yes" | "on")
            }
        }
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn parses_truthy_and_falsy() {
        assert!(parse_flag(Some("true"), false));
        assert!(parse_flag(Some(" On "), false));
        assert!(!parse_flag(Some("false"), true));
        assert!(!parse_flag(Some("0"), true));
        assert!(parse_flag(Some(""), true));
        assert!(!parse_flag(None, false));
    }
}
