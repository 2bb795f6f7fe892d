#[derive(Debug, Clone)]
pub struct RawToken {
    token: String,
}

impl RawToken {
    pub fn new(raw_token: impl Into<String>) -> Self {
        RawToken {
            token: raw_token.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Whether the token is empty or whitespace only.
    ///
    /// Blank tokens are never decoded, they represent an anonymous session.
    pub fn is_blank(&self) -> bool {
        self.token.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_blank() {
        assert!(RawToken::new("").is_blank());
    }

    #[test]
    fn whitespace_is_blank() {
        assert!(RawToken::new(" \t\n ").is_blank());
    }

    #[test]
    fn token_is_not_blank() {
        assert!(!RawToken::new("a.b.c").is_blank());
    }
}
