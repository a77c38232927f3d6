use std::str::FromStr;
use std::sync::Arc;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub type SessionToken = String;

/// The three principal kinds that may hold a session. Anything else is not a
/// role, and refuses to parse; there is no way to end up with a session that
/// is bound to nothing.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[display(fmt = "member")]
    Member,
    #[display(fmt = "leader")]
    Leader,
    #[display(fmt = "admin")]
    Admin,
}

#[derive(Debug, Display, Error)]
#[display(fmt = "unknown role tag `{}`", tag)]
pub struct UnknownRole {
    pub tag: String,
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member" => Ok(Role::Member),
            "leader" => Ok(Role::Leader),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole {
                tag: other.to_owned(),
            }),
        }
    }
}

/// The authenticated principal a session is bound to. Downstream handlers
/// treat this as an opaque handle; it carries no database connection and no
/// credential material.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Identity {
    #[schema(example = 7)]
    pub user_id: i32,
    pub role: Role,
}

/// A live binding between an opaque token and an authenticated principal.
/// Immutable once minted: the token and identity are fixed at creation and
/// the session lives until the process exits.
#[derive(Debug, Clone)]
pub struct Session {
    token: SessionToken,
    identity: Arc<Identity>,
}

impl Session {
    /// Mints a session for an already-authenticated identity with a fresh
    /// random token (canonical v4 UUID, collisions are negligible).
    pub fn new(identity: Identity) -> Self {
        Self::with_token(Uuid::new_v4().to_string(), identity)
    }

    /// Binds an identity under a caller-chosen token.
    pub fn with_token(token: impl Into<SessionToken>, identity: Identity) -> Self {
        Self {
            token: token.into(),
            identity: Arc::new(identity),
        }
    }

    /// Selects the role by tag and mints a session for it. An unrecognized
    /// tag fails construction instead of producing an identity-less session.
    pub fn from_tag(tag: &str, user_id: i32) -> Result<Self, UnknownRole> {
        Ok(Self::new(Identity {
            user_id,
            role: tag.parse()?,
        }))
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn identity(&self) -> &Arc<Identity> {
        &self.identity
    }
}
