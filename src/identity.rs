//! Identity views for anything that can originate or be named in a protocol line.

use std::fmt;
use std::sync::Arc;

/// Read-only projection of a protocol participant.
///
/// `id` is the line prefix (`nick!user@host` or a server name), `public_id` is the
/// externally disclosable form and `nick` is the current display name.
pub trait Identity {
    fn id(&self) -> String;
    fn public_id(&self) -> String;
    fn nick(&self) -> String;
}

/// Owned snapshot of an [`Identity`], taken when a reply is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityView {
    pub id: String,
    pub public_id: String,
    pub nick: String,
}

impl IdentityView {
    pub fn new(
        id: impl Into<String>,
        public_id: impl Into<String>,
        nick: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            public_id: public_id.into(),
            nick: nick.into(),
        }
    }

    pub fn of<I: Identity + ?Sized>(entity: &I) -> Self {
        Self {
            id: entity.id(),
            public_id: entity.public_id(),
            nick: entity.nick(),
        }
    }
}

impl Identity for IdentityView {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn public_id(&self) -> String {
        self.public_id.clone()
    }

    fn nick(&self) -> String {
        self.nick.clone()
    }
}

impl fmt::Display for IdentityView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl<T: Identity + ?Sized> Identity for &T {
    fn id(&self) -> String {
        (**self).id()
    }

    fn public_id(&self) -> String {
        (**self).public_id()
    }

    fn nick(&self) -> String {
        (**self).nick()
    }
}

impl<T: Identity + ?Sized> Identity for Arc<T> {
    fn id(&self) -> String {
        (**self).id()
    }

    fn public_id(&self) -> String {
        (**self).public_id()
    }

    fn nick(&self) -> String {
        (**self).nick()
    }
}
