use serde::Serialize;

/// Dashboard tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Overview,
    Users,
    Storage,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Overview, Section::Users, Section::Storage];

    /// Unknown names fall back to the overview tab.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "users" => Section::Users,
            "storage" => Section::Storage,
            _ => Section::Overview,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Users => "users",
            Section::Storage => "storage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Users => "Users",
            Section::Storage => "Storage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Section;

    #[test]
    fn parse_is_lenient() {
        assert_eq!(Section::parse("Users"), Section::Users);
        assert_eq!(Section::parse(" storage "), Section::Storage);
        assert_eq!(Section::parse("billing"), Section::Overview);
        assert_eq!(Section::parse(""), Section::Overview);
    }
}
