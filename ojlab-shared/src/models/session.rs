//! Identity state of the browser tab and the decisions derived from it.

use super::User;

/// Who is signed in, as last reported by the backend.
///
/// `user` is always replaced wholesale; nothing patches a field of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for Session {
    /// The state at application start: identity unknown, fetch pending.
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl Session {
    /// Session resolved to `user`, or to anonymous when `None`.
    #[must_use]
    pub fn resolved(user: Option<User>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    /// Resolved anonymous session.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::resolved(None)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the current identity may use the admin console.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    /// Id of the signed-in user.
    #[must_use]
    pub fn user_id(&self) -> Option<u64> {
        self.user.as_ref().map(|user| user.id)
    }
}

/// Outcome of gating a screen behind the admin capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Identity not known yet; show a neutral indicator.
    Pending,
    /// Leave for the public root, replacing the history entry.
    RedirectHome,
    /// Render the guarded screen.
    Allow,
}

/// Decide whether `session` may see an admin screen.
///
/// Evaluated on every session change; the result is never cached.
#[must_use]
pub fn guard_admin(session: &Session) -> GuardDecision {
    if session.loading {
        GuardDecision::Pending
    } else if session.is_admin() {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectHome
    }
}
