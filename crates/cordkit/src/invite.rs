//! OAuth2 bot invite links.
//!
//! The permission integer is embedded as its exact decimal form, which is the
//! same string [`crate::serialize`] produces.

use crate::{PermissionSet, Snowflake};
use core::fmt;
use core::str::FromStr;

/// Base URL of Discord's OAuth2 authorization page.
pub const AUTHORIZE_URL: &str = "https://discord.com/api/oauth2/authorize";

/// OAuth2 scopes offered when building a bot invite.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    #[cfg_attr(feature = "serde", serde(rename = "bot"))]
    Bot,
    #[cfg_attr(feature = "serde", serde(rename = "applications.commands"))]
    ApplicationsCommands,
    #[cfg_attr(feature = "serde", serde(rename = "identify"))]
    Identify,
    #[cfg_attr(feature = "serde", serde(rename = "guilds"))]
    Guilds,
    #[cfg_attr(feature = "serde", serde(rename = "guilds.join"))]
    GuildsJoin,
    #[cfg_attr(feature = "serde", serde(rename = "gdm.join"))]
    GdmJoin,
    #[cfg_attr(feature = "serde", serde(rename = "messages.read"))]
    MessagesRead,
    #[cfg_attr(feature = "serde", serde(rename = "rpc"))]
    Rpc,
}

impl Scope {
    /// Every supported scope, in picker order.
    pub const ALL: [Self; 8] = [
        Self::Bot,
        Self::ApplicationsCommands,
        Self::Identify,
        Self::Guilds,
        Self::GuildsJoin,
        Self::GdmJoin,
        Self::MessagesRead,
        Self::Rpc,
    ];

    /// The scope as written in the `scope` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bot => "bot",
            Self::ApplicationsCommands => "applications.commands",
            Self::Identify => "identify",
            Self::Guilds => "guilds",
            Self::GuildsJoin => "guilds.join",
            Self::GdmJoin => "gdm.join",
            Self::MessagesRead => "messages.read",
            Self::Rpc => "rpc",
        }
    }
}

/// Error returned for a scope string outside [`Scope::ALL`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown oauth2 scope: {0:?}")]
pub struct ParseScopeError(pub String);

impl FromStr for Scope {
    type Err = ParseScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| ParseScopeError(s.to_string()))
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bot invite link.
///
/// Scopes keep insertion order and never repeat.
///
/// ```
/// use cordkit::{InviteLink, PermissionSet, Snowflake};
///
/// let link = InviteLink::new(Snowflake::from_raw(104245678901234567))
///     .with_permissions(PermissionSet::from_bits(8));
/// assert_eq!(
///     link.to_string(),
///     "https://discord.com/api/oauth2/authorize?client_id=104245678901234567&permissions=8&scope=bot%20applications.commands"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InviteLink {
    client_id: Snowflake,
    permissions: PermissionSet,
    scopes: Vec<Scope>,
}

impl InviteLink {
    /// Scopes selected when nothing else is requested.
    pub const DEFAULT_SCOPES: [Scope; 2] = [Scope::Bot, Scope::ApplicationsCommands];

    /// A link for `client_id` with no permissions and the default scopes.
    pub fn new(client_id: Snowflake) -> Self {
        Self {
            client_id,
            permissions: PermissionSet::new(),
            scopes: Self::DEFAULT_SCOPES.to_vec(),
        }
    }

    /// Sets the permission integer requested for the bot's role.
    #[must_use]
    pub fn with_permissions(mut self, permissions: PermissionSet) -> Self {
        self.permissions = permissions;
        self
    }

    /// Replaces the scope list, dropping repeats.
    #[must_use]
    pub fn with_scopes(mut self, scopes: impl IntoIterator<Item = Scope>) -> Self {
        self.scopes.clear();
        for scope in scopes {
            if !self.scopes.contains(&scope) {
                self.scopes.push(scope);
            }
        }
        self
    }

    /// Adds `scope` at the end, or removes it if already present.
    pub fn toggle_scope(&mut self, scope: Scope) {
        if let Some(pos) = self.scopes.iter().position(|s| *s == scope) {
            self.scopes.remove(pos);
        } else {
            self.scopes.push(scope);
        }
    }

    /// Application the link authorizes.
    pub const fn client_id(&self) -> Snowflake {
        self.client_id
    }

    /// Requested permissions; empty unless set.
    pub const fn permissions(&self) -> PermissionSet {
        self.permissions
    }

    /// Selected scopes in insertion order, without repeats.
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// The full authorize URL, scopes joined by `%20`.
    pub fn url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InviteLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{AUTHORIZE_URL}?client_id={}&permissions={}&scope=",
            self.client_id, self.permissions
        )?;
        for (i, scope) in self.scopes.iter().enumerate() {
            if i > 0 {
                f.write_str("%20")?;
            }
            f.write_str(scope.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PERMISSIONS, lookup};

    fn client() -> Snowflake {
        Snowflake::from_raw(104_245_678_901_234_567)
    }

    #[test]
    fn default_link_has_no_permissions() {
        assert_eq!(
            InviteLink::new(client()).url(),
            "https://discord.com/api/oauth2/authorize?client_id=104245678901234567&permissions=0&scope=bot%20applications.commands"
        );
    }

    #[test]
    fn embeds_serialized_permissions() {
        let mut permissions = PermissionSet::new();
        permissions.toggle(lookup(PERMISSIONS, "Send Polls").unwrap());
        permissions.toggle(lookup(PERMISSIONS, "Use External Apps").unwrap());
        let link = InviteLink::new(client()).with_permissions(permissions);
        assert!(link.url().contains("&permissions=1688849860263936&"));
    }

    #[test]
    fn scopes_dedupe_and_keep_order() {
        let link = InviteLink::new(client()).with_scopes([
            Scope::Identify,
            Scope::Bot,
            Scope::Identify,
        ]);
        assert_eq!(link.scopes(), [Scope::Identify, Scope::Bot]);
        assert!(link.url().ends_with("&scope=identify%20bot"));
    }

    #[test]
    fn toggle_scope_adds_and_removes() {
        let mut link = InviteLink::new(client());
        link.toggle_scope(Scope::Bot);
        assert_eq!(link.scopes(), [Scope::ApplicationsCommands]);
        link.toggle_scope(Scope::Rpc);
        link.toggle_scope(Scope::Bot);
        assert_eq!(
            link.scopes(),
            [Scope::ApplicationsCommands, Scope::Rpc, Scope::Bot]
        );
    }

    #[test]
    fn empty_scope_list_renders_empty_parameter() {
        let link = InviteLink::new(client()).with_scopes(core::iter::empty());
        assert!(link.url().ends_with("&scope="));
    }

    #[test]
    fn scope_parses_wire_names() {
        for scope in Scope::ALL {
            assert_eq!(scope.as_str().parse::<Scope>(), Ok(scope));
        }
        assert_eq!(
            "admin".parse::<Scope>(),
            Err(ParseScopeError("admin".into()))
        );
    }
}
