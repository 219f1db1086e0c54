//! Ordering guard for page requests.
//!
//! Every request takes a token when it is issued. When the response arrives
//! it may only touch page state if its token is still the latest one, so a
//! slow earlier response cannot overwrite a newer result.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Make every outstanding token stale
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_token_is_current() {
        let mut seq = RequestSequencer::default();
        let a = seq.issue();
        assert!(seq.is_current(a));
        let b = seq.issue();
        assert!(!seq.is_current(a));
        assert!(seq.is_current(b));
    }

    #[test]
    fn test_invalidate() {
        let mut seq = RequestSequencer::default();
        let a = seq.issue();
        seq.invalidate();
        assert!(!seq.is_current(a));
    }
}
