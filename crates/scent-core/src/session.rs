//! Session configuration and the private-mode gate.
//!
//! Private mode only decides whether composition details are rendered. It is
//! a local display toggle, not access control: private fields stay
//! searchable either way.

/// Per-session settings passed explicitly into search and rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub private_mode: bool,
}

pub const DEFAULT_PRIVATE_CODE: &str = "DE-2026";

/// Unlocks private mode when given the configured code.
#[derive(Debug, Clone)]
pub struct PrivateGate {
    code: String,
}

impl Default for PrivateGate {
    fn default() -> Self {
        Self::new(DEFAULT_PRIVATE_CODE)
    }
}

impl PrivateGate {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Turn private mode on if `attempt` matches the code exactly. Returns
    /// whether the session is now private; a wrong code leaves it unchanged.
    pub fn unlock(&self, session: &mut SessionConfig, attempt: &str) -> bool {
        if attempt.trim() == self.code {
            session.private_mode = true;
            tracing::debug!("session: private mode on");
        }
        session.private_mode
    }

    pub fn lock(&self, session: &mut SessionConfig) {
        session.private_mode = false;
        tracing::debug!("session: private mode off");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_mode_defaults_off() {
        assert!(!SessionConfig::default().private_mode);
    }

    #[test]
    fn correct_code_unlocks() {
        let gate = PrivateGate::default();
        let mut session = SessionConfig::default();
        assert!(!gate.unlock(&mut session, "de-2026"));
        assert!(gate.unlock(&mut session, " DE-2026 "));
        gate.lock(&mut session);
        assert!(!session.private_mode);
    }

    #[test]
    fn wrong_code_keeps_unlocked_session_unlocked() {
        let gate = PrivateGate::new("secret");
        let mut session = SessionConfig { private_mode: true };
        assert!(gate.unlock(&mut session, "nope"));
    }
}
