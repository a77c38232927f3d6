use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use derive_more::{Display, Error};

use super::session::{Identity, Session, SessionToken};

/// A token that no live session is registered under. Carries the offending
/// token for the log; the outward response never includes registry state.
#[derive(Debug, Display, Error)]
#[display(fmt = "no session for token `{}`", token)]
pub struct SessionNotFound {
    pub token: String,
}

/// Process-wide token -> session map. Shared by every worker; lookups take
/// the read side of the lock, insertion the write side, and the lock is never
/// held across I/O. Sessions are insertion-only and never expire.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionToken, Arc<Session>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Whether a live session exists for this token. Any string is a valid
    /// input; absent just means false.
    pub fn has(&self, token: &str) -> bool {
        self.sessions.read().unwrap().contains_key(token)
    }

    /// Resolves a token to the identity bound at session creation.
    pub fn resolve(&self, token: &str) -> Result<Arc<Identity>, SessionNotFound> {
        let sessions = self.sessions.read().unwrap();

        match sessions.get(token) {
            Some(session) => Ok(Arc::clone(session.identity())),
            None => Err(SessionNotFound {
                token: token.to_owned(),
            }),
        }
    }

    /// Registers a session under its token. Tokens are unique by generation,
    /// so a colliding insert simply takes the slot (last write wins).
    pub fn insert(&self, session: Session) {
        self.sessions
            .write()
            .unwrap()
            .insert(session.token().to_owned(), Arc::new(session));
    }

    /// Mints a session for the identity and registers it in one step,
    /// returning the token to hand back to the client.
    pub fn start_session(&self, identity: Identity) -> SessionToken {
        let session = Session::new(identity);
        let token = session.token().to_owned();
        self.insert(session);

        token
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::Role;

    #[test]
    fn resolve_returns_the_bound_identity() {
        let registry = SessionRegistry::new();
        registry.insert(Session::with_token(
            "T1",
            Identity {
                user_id: 7,
                role: Role::Leader,
            },
        ));

        assert!(registry.has("T1"));
        let identity = registry.resolve("T1").unwrap();
        assert_eq!(identity.user_id, 7);
        assert_eq!(identity.role, Role::Leader);
    }

    #[test]
    fn colliding_tokens_take_the_slot() {
        let registry = SessionRegistry::new();
        registry.insert(Session::with_token(
            "T1",
            Identity {
                user_id: 1,
                role: Role::Member,
            },
        ));
        registry.insert(Session::with_token(
            "T1",
            Identity {
                user_id: 2,
                role: Role::Admin,
            },
        ));

        let identity = registry.resolve("T1").unwrap();
        assert_eq!(identity.user_id, 2);
        assert_eq!(identity.role, Role::Admin);
    }

    #[test]
    fn start_session_registers_what_it_mints() {
        let registry = SessionRegistry::new();
        let token = registry.start_session(Identity {
            user_id: 3,
            role: Role::Member,
        });

        assert!(registry.has(&token));
        assert_eq!(registry.resolve(&token).unwrap().user_id, 3);
    }
}
