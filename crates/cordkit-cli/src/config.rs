use anyhow::bail;
use clap::{Args, Parser, Subcommand, ValueEnum};
use cordkit::{
    AssetKind, ChannelFont, Color, DISCORD_EPOCH_MILLIS, PermissionSet, Scope, Snowflake,
    SystemClock, TextStyle, TimeSource, TimestampStyle,
};
use std::path::PathBuf;

/// Command-line arguments for the `cordkit` binary.
///
/// Global options can also be set through environment variables (or a `.env`
/// file in the working directory).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "cordkit",
    version,
    about = "Discord utilities: decode Snowflakes, calculate permissions, build links and messages"
)]
pub struct CliArgs {
    /// Output format.
    ///
    /// `json` prints one machine-readable document per invocation.
    ///
    /// Environment variable: `CORDKIT_OUTPUT`
    #[arg(long, global = true, env = "CORDKIT_OUTPUT", value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Current time in milliseconds since the UNIX epoch, used for ID ages
    /// and the default timestamp. Defaults to the system clock.
    ///
    /// Environment variable: `CORDKIT_NOW_MS`
    #[arg(long, global = true, env = "CORDKIT_NOW_MS")]
    pub now_ms: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes
    /// precedence when set.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Decode Snowflake IDs into creation time and internal fields
    #[command(alias = "lookup")]
    Decode(DecodeArgs),

    /// Toggle permission flags and print the resulting integer
    #[command(alias = "permissions")]
    Perms(PermsArgs),

    /// Build a bot invite link
    Invite(InviteArgs),

    /// Build a CDN URL for an avatar, icon or banner
    Cdn(CdnArgs),

    /// Format Discord timestamp markdown
    #[command(alias = "ts")]
    Timestamp(TimestampArgs),

    /// Build, import or edit a message embed and print its JSON payload
    Embed(EmbedArgs),

    /// Convert a hex color to the decimal Discord expects, or list the palette
    Color(ColorArgs),

    /// Restyle text (mocking, small caps, snake_case, ...)
    Text(TextArgs),

    /// Format a decorated channel name
    Channel(ChannelArgs),

    /// Wrap text in Discord markdown
    #[command(alias = "md")]
    Markdown(MarkdownArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DecodeArgs {
    /// One or more decimal Snowflake IDs
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Also print the bit layout table
    #[arg(long)]
    pub layout: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PermsArgs {
    /// Permission to toggle, by catalog name (case, spaces, `_` and `-` are
    /// ignored). Repeat to toggle several; order matters only for repeats.
    #[arg(short, long = "flag", value_name = "NAME")]
    pub flags: Vec<String>,

    /// Starting permission integer
    #[arg(long, default_value = "0")]
    pub base: PermissionSet,

    /// List catalog entries whose name or description contains this text
    /// instead of computing a value. An empty string lists everything.
    #[arg(short, long, conflicts_with_all = ["flags", "base", "strict"])]
    pub search: Option<String>,

    /// Fail if the result has bits that no catalog entry names, instead of
    /// listing them as unrecognized.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InviteArgs {
    /// Application (client) ID
    pub client_id: Snowflake,

    /// Permission integer to request.
    ///
    /// Defaults to 0 (no permissions). The web invite tool preselects 8
    /// (Administrator); pass `--permissions 8` to match it.
    #[arg(short, long, default_value = "0")]
    pub permissions: PermissionSet,

    /// OAuth2 scope; repeat for several. Defaults to `bot` and
    /// `applications.commands`.
    #[arg(long = "scope", value_name = "SCOPE")]
    pub scopes: Vec<Scope>,
}

#[derive(Args, Debug, Clone)]
pub struct CdnArgs {
    /// Asset kind: avatar, icon or banner
    pub kind: AssetKind,

    /// Owner ID (user for avatars, guild for icons)
    pub id: Snowflake,

    /// Asset hash. Without one, avatars fall back to the default avatar.
    #[arg(long)]
    pub hash: Option<String>,

    /// Read the hash from a user or guild JSON object instead (`-` for
    /// stdin). The member named after KIND is used.
    #[arg(long, value_name = "PATH", conflicts_with = "hash")]
    pub from_json: Option<PathBuf>,

    /// Image size in pixels (power of two, 16 to 4096)
    #[arg(long, default_value_t = 1024)]
    pub size: u32,
}

#[derive(Args, Debug, Clone)]
pub struct TimestampArgs {
    /// UNIX timestamp in seconds
    #[arg(long, conflicts_with = "id")]
    pub unix: Option<u64>,

    /// Use the creation time of this Snowflake
    #[arg(long)]
    pub id: Option<Snowflake>,

    /// Style code (t, T, d, D, f, F, R). Prints every style when omitted.
    #[arg(long)]
    pub style: Option<TimestampStyle>,
}

#[derive(Args, Debug, Clone)]
pub struct EmbedArgs {
    /// Start from an embed or `{"embeds": [...]}` file (`-` for stdin)
    #[arg(long, value_name = "PATH", conflicts_with = "example")]
    pub import: Option<PathBuf>,

    /// Start from a filled-in example embed
    #[arg(long)]
    pub example: bool,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// URL the title links to
    #[arg(long)]
    pub url: Option<String>,

    /// Sidebar color as #RRGGBB
    #[arg(long)]
    pub color: Option<Color>,

    /// Append a field; repeat for several (at most 25 per embed)
    #[arg(long = "field", value_name = "NAME=VALUE")]
    pub fields: Vec<String>,

    /// Show the fields added by this invocation side by side
    #[arg(long)]
    pub inline: bool,

    /// Stamp the embed with the current time
    #[arg(long)]
    pub timestamp: bool,

    #[arg(long)]
    pub author: Option<String>,

    #[arg(long)]
    pub footer: Option<String>,

    /// Large image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Thumbnail URL
    #[arg(long)]
    pub thumbnail: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ColorArgs {
    /// Hex color (`#5865F2` or `5865F2`). Lists the brand palette when
    /// omitted.
    pub hex: Option<Color>,
}

#[derive(Args, Debug, Clone)]
pub struct TextArgs {
    pub text: String,

    /// Style to apply. Prints every style when omitted.
    #[arg(long)]
    pub style: Option<TextStyle>,
}

#[derive(Args, Debug, Clone)]
pub struct ChannelArgs {
    /// Channel name to sanitize and decorate
    #[arg(required_unless_present = "list_prefixes")]
    pub name: Option<String>,

    /// Emoji prefix, e.g. `💬︱`. Prefixes are listed with `--list-prefixes`.
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Lettering: default, small-caps, monospace or compact
    #[arg(long, default_value_t = ChannelFont::Default)]
    pub font: ChannelFont,

    /// Print the common prefixes instead of a name
    #[arg(long, conflicts_with_all = ["prefix", "font"])]
    pub list_prefixes: bool,
}

#[derive(Args, Debug, Clone)]
pub struct MarkdownArgs {
    /// Content to wrap
    pub text: String,

    /// Format label, e.g. bold, spoiler, code-block. Repeat to emit one
    /// line per format; every format is shown when omitted.
    #[arg(short, long = "format", value_name = "FORMAT")]
    pub formats: Vec<String>,
}

/// Settings shared by every subcommand, resolved from [`CliArgs`].
#[derive(Debug, Clone, Copy)]
pub struct CliConfig {
    pub output: OutputFormat,
    pub now_millis: u64,
}

impl TryFrom<&CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: &CliArgs) -> Result<Self, Self::Error> {
        let now_millis = match args.now_ms {
            Some(now) => now,
            None => SystemClock.current_millis(),
        };

        if now_millis < DISCORD_EPOCH_MILLIS {
            bail!(
                "current time ({}) is before the Discord epoch ({})",
                now_millis,
                DISCORD_EPOCH_MILLIS
            );
        }

        Ok(Self {
            output: args.output,
            now_millis,
        })
    }
}
