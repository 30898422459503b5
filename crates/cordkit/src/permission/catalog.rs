use crate::{Error, Result};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A named permission flag.
///
/// `value` is normally a single bit, but nothing in this crate relies on
/// that: composite values are toggled and queried by their full bit pattern.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Permission {
    pub name: &'static str,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde::as_decimal_u64"))]
    pub value: u64,
    pub description: &'static str,
}

impl Permission {
    /// A catalog entry for the flag `value`. Custom catalogs passed to
    /// [`lookup`] and [`search`] are built from these.
    pub const fn new(name: &'static str, value: u64, description: &'static str) -> Self {
        Self {
            name,
            value,
            description,
        }
    }

    /// Whether `query` occurs in the name or description, ignoring case.
    ///
    /// `query` must already be lowercase.
    fn matches_lowercase(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query) || self.description.to_lowercase().contains(query)
    }
}

/// Discord's guild permission flags, in bit order.
pub static PERMISSIONS: &[Permission] = &[
    Permission::new(
        "Create Instant Invite",
        1 << 0,
        "Allows creation of instant invites",
    ),
    Permission::new("Kick Members", 1 << 1, "Allows kicking members"),
    Permission::new("Ban Members", 1 << 2, "Allows banning members"),
    Permission::new(
        "Administrator",
        1 << 3,
        "Allows all permissions and bypasses channel permission overwrites",
    ),
    Permission::new(
        "Manage Channels",
        1 << 4,
        "Allows management and editing of channels",
    ),
    Permission::new(
        "Manage Guild",
        1 << 5,
        "Allows management and editing of the server",
    ),
    Permission::new(
        "Add Reactions",
        1 << 6,
        "Allows for adding new reactions to messages",
    ),
    Permission::new(
        "View Audit Log",
        1 << 7,
        "Allows for viewing of audit logs",
    ),
    Permission::new(
        "Priority Speaker",
        1 << 8,
        "Allows for using priority speaker in a voice channel",
    ),
    Permission::new("Stream", 1 << 9, "Allows the user to go live"),
    Permission::new(
        "View Channel",
        1 << 10,
        "Allows guild members to view a channel and read its messages",
    ),
    Permission::new(
        "Send Messages",
        1 << 11,
        "Allows for sending messages in a channel and creating forum posts",
    ),
    Permission::new(
        "Send TTS Messages",
        1 << 12,
        "Allows for sending of text-to-speech messages",
    ),
    Permission::new(
        "Manage Messages",
        1 << 13,
        "Allows for deletion of other users' messages and pinning",
    ),
    Permission::new(
        "Embed Links",
        1 << 14,
        "Links sent by users with this permission will be auto-embedded",
    ),
    Permission::new("Attach Files", 1 << 15, "Allows for uploading images and files"),
    Permission::new(
        "Read Message History",
        1 << 16,
        "Allows for reading of message history",
    ),
    Permission::new(
        "Mention Everyone",
        1 << 17,
        "Allows for using the @everyone and @here tags",
    ),
    Permission::new(
        "Use External Emojis",
        1 << 18,
        "Allows the usage of custom emojis from other servers",
    ),
    Permission::new(
        "View Guild Insights",
        1 << 19,
        "Allows for viewing server insights",
    ),
    Permission::new("Connect", 1 << 20, "Allows for joining of a voice channel"),
    Permission::new("Speak", 1 << 21, "Allows for speaking in a voice channel"),
    Permission::new(
        "Mute Members",
        1 << 22,
        "Allows for muting members in a voice channel",
    ),
    Permission::new(
        "Deafen Members",
        1 << 23,
        "Allows for deafening of members in a voice channel",
    ),
    Permission::new(
        "Move Members",
        1 << 24,
        "Allows for moving of members between voice channels",
    ),
    Permission::new(
        "Use VAD",
        1 << 25,
        "Allows for using voice-activity-detection in a voice channel",
    ),
    Permission::new(
        "Change Nickname",
        1 << 26,
        "Allows for modification of own nickname",
    ),
    Permission::new(
        "Manage Nicknames",
        1 << 27,
        "Allows for modification of other users' nicknames",
    ),
    Permission::new("Manage Roles", 1 << 28, "Allows management and editing of roles"),
    Permission::new(
        "Manage Webhooks",
        1 << 29,
        "Allows management and editing of webhooks",
    ),
    Permission::new(
        "Manage Guild Expressions",
        1 << 30,
        "Allows for editing and deleting emojis, stickers, and soundboard sounds",
    ),
    Permission::new(
        "Use Application Commands",
        1 << 31,
        "Allows members to use slash commands and context menu commands",
    ),
    Permission::new(
        "Request to Speak",
        1 << 32,
        "Allows for requesting to speak in stage channels",
    ),
    Permission::new(
        "Manage Events",
        1 << 33,
        "Allows for editing and deleting scheduled events",
    ),
    Permission::new(
        "Manage Threads",
        1 << 34,
        "Allows for deleting and archiving threads, and viewing all private threads",
    ),
    Permission::new(
        "Create Public Threads",
        1 << 35,
        "Allows for creating public and announcement threads",
    ),
    Permission::new(
        "Create Private Threads",
        1 << 36,
        "Allows for creating private threads",
    ),
    Permission::new(
        "Use External Stickers",
        1 << 37,
        "Allows the usage of custom stickers from other servers",
    ),
    Permission::new(
        "Send Messages in Threads",
        1 << 38,
        "Allows for sending messages in threads",
    ),
    Permission::new(
        "Use Embedded Activities",
        1 << 39,
        "Allows for using Activities in a voice channel",
    ),
    Permission::new(
        "Moderate Members",
        1 << 40,
        "Allows for timing out users to prevent them from chatting or speaking",
    ),
    Permission::new(
        "View Creator Monetization Analytics",
        1 << 41,
        "Allows for viewing role subscription insights",
    ),
    Permission::new(
        "Use Soundboard",
        1 << 42,
        "Allows for using the soundboard in a voice channel",
    ),
    Permission::new(
        "Create Guild Expressions",
        1 << 43,
        "Allows for creating emojis, stickers, and soundboard sounds",
    ),
    Permission::new(
        "Create Events",
        1 << 44,
        "Allows for creating scheduled events",
    ),
    Permission::new(
        "Use External Sounds",
        1 << 45,
        "Allows the usage of custom soundboard sounds from other servers",
    ),
    Permission::new(
        "Send Voice Messages",
        1 << 46,
        "Allows sending voice messages",
    ),
    Permission::new("Send Polls", 1 << 49, "Allows sending polls"),
    Permission::new(
        "Use External Apps",
        1 << 50,
        "Allows user-installed apps to send public responses",
    ),
];

/// Case-insensitive substring search over `catalog`.
///
/// An entry matches when `query` occurs in its name or its description.
/// Matches keep catalog order, and an empty query returns every entry.
///
/// # Example
///
/// ```
/// use cordkit::{PERMISSIONS, search};
///
/// let hits = search(PERMISSIONS, "THREAD");
/// assert_eq!(hits[0].name, "Manage Threads");
/// assert!(search(PERMISSIONS, "xyz-no-match").is_empty());
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(catalog)))]
pub fn search<'a>(catalog: &'a [Permission], query: &str) -> Vec<&'a Permission> {
    if query.is_empty() {
        return catalog.iter().collect();
    }
    let query = query.to_lowercase();
    catalog
        .iter()
        .filter(|permission| permission.matches_lowercase(&query))
        .collect()
}

/// Finds the entry whose name equals `name`, ignoring case, spaces,
/// underscores and dashes, so `"MANAGE_ROLES"`, `"manage-roles"` and
/// `"Manage Roles"` all resolve to the same flag.
///
/// # Errors
///
/// [`Error::UnknownPermission`] if no entry matches.
pub fn lookup<'a>(catalog: &'a [Permission], name: &str) -> Result<&'a Permission> {
    let wanted = normalize(name);
    catalog
        .iter()
        .find(|permission| normalize(permission.name) == wanted)
        .ok_or_else(|| Error::UnknownPermission {
            name: name.to_string(),
        })
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}
