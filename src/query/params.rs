//! Ordered query string model
//!
//! Values are kept exactly as written: no percent-decoding, no reordering.

/// A request path with its ordered query parameters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryString {
    /// Path component, always starting with `/`
    pub path: String,
    /// Parameters in original order; `None` for bare flags like `pretty`
    pub params: Vec<(String, Option<String>)>,
}

impl QueryString {
    /// Parse `path?name=value&flag` into a query string
    pub fn parse(raw: &str) -> Self {
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, query),
            None => (raw, ""),
        };

        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((name, value)) => (name.to_string(), Some(value.to_string())),
                None => (pair.to_string(), None),
            })
            .collect();

        Self {
            path: normalize_path(path),
            params,
        }
    }

    /// First value of a parameter, if present with a value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Whether the parameter appears at all (with or without a value)
    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|(key, _)| key == name)
    }

    /// Keep only parameters whose name is in `allowed`, preserving order
    #[must_use]
    pub fn retain_only(mut self, allowed: &[&str]) -> Self {
        self.params.retain(|(key, _)| allowed.contains(&key.as_str()));
        self
    }

    /// Path segments, skipping empty ones
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }
}

impl std::fmt::Display for QueryString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)?;
        for (i, (name, value)) in self.params.iter().enumerate() {
            f.write_str(if i == 0 { "?" } else { "&" })?;
            f.write_str(name)?;
            if let Some(value) = value {
                write!(f, "={value}")?;
            }
        }
        Ok(())
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
