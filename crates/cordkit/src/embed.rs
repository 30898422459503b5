//! Rich message embeds and their `{"embeds": [...]}` JSON form.
//!
//! [`Embed`] serializes in the shape Discord's message and webhook endpoints
//! take. [`Embed::from_json_str`] goes the other way and is lenient: it
//! accepts a bare embed or a full payload, keeps the first embed, and drops
//! members it cannot use instead of failing.

use crate::{Color, Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Most fields a single embed may carry.
pub const MAX_EMBED_FIELDS: usize = 25;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmbedAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// An image or thumbnail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmbedMedia {
    pub url: String,
}

/// A message embed.
///
/// `color` serializes as a decimal integer. `timestamp` is an ISO 8601 string
/// and is passed through untouched.
///
/// ```
/// use cordkit::{Color, Embed, EmbedField};
///
/// let mut embed = Embed::default();
/// embed.title = Some("Patch notes".into());
/// embed.add_field(EmbedField::new("Version", "1.2", true)).unwrap();
///
/// let json = embed.to_json().unwrap();
/// assert_eq!(Embed::from_json_str(&json).unwrap(), embed);
/// assert_eq!(embed.color, Color::BLURPLE);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

impl Default for Embed {
    /// An empty blurple embed.
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            url: None,
            color: Color::BLURPLE,
            timestamp: None,
            author: None,
            footer: None,
            image: None,
            thumbnail: None,
            fields: Vec::new(),
        }
    }
}

/// Body accepted by Discord's message and webhook endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmbedPayload<'a> {
    pub embeds: [&'a Embed; 1],
}

impl Embed {
    /// A filled-in starting point showing most embed parts.
    pub fn example() -> Self {
        Self {
            title: Some("Welcome to Microtools!".into()),
            description: Some(
                "This is an example embed. You can customize title, description, color, media and footer."
                    .into(),
            ),
            author: Some(EmbedAuthor {
                name: "Embed Master".into(),
                url: None,
                icon_url: None,
            }),
            footer: Some(EmbedFooter {
                text: "Crafted with passion for Discord users".into(),
                icon_url: None,
            }),
            fields: vec![
                EmbedField::new(
                    "Field Name",
                    "This is a value. You can add up to 25 fields.",
                    true,
                ),
                EmbedField::new("Inline Field", "I am right next to it!", true),
            ],
            ..Self::default()
        }
    }

    /// Appends `field`.
    ///
    /// # Errors
    ///
    /// [`Error::TooManyFields`] once [`MAX_EMBED_FIELDS`] are present; the
    /// embed is left as it was.
    pub fn add_field(&mut self, field: EmbedField) -> Result<()> {
        if self.fields.len() >= MAX_EMBED_FIELDS {
            return Err(Error::TooManyFields {
                max: MAX_EMBED_FIELDS,
            });
        }
        self.fields.push(field);
        Ok(())
    }

    /// Removes and returns the field at `index`, if there is one.
    pub fn remove_field(&mut self, index: usize) -> Option<EmbedField> {
        (index < self.fields.len()).then(|| self.fields.remove(index))
    }

    /// Wraps this embed as `{"embeds": [embed]}`.
    pub fn to_payload(&self) -> EmbedPayload<'_> {
        EmbedPayload { embeds: [self] }
    }

    /// Pretty-printed payload JSON.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidJson`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_payload()).map_err(|e| Error::InvalidJson {
            reason: e.to_string(),
        })
    }

    /// Parses JSON text and hands it to [`Embed::from_json_value`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidJson`] for malformed text, otherwise as
    /// [`Embed::from_json_value`].
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(input), fields(len = input.len())))]
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input).map_err(|e| Error::InvalidJson {
            reason: e.to_string(),
        })?;
        Self::from_json_value(&value)
    }

    /// Reads an embed from a bare embed object or from a payload whose
    /// non-empty `embeds` array starts with one.
    ///
    /// Members of the wrong type fall back to their defaults, a missing or
    /// unreadable `color` becomes [`Color::BLURPLE`], non-object entries in
    /// `fields` are skipped and only the first [`MAX_EMBED_FIELDS`] are kept.
    /// A field's `inline` follows JavaScript truthiness.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidEmbed`] if neither shape holds an object.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let source = value.as_object().ok_or(Error::InvalidEmbed)?;
        let candidate = match source.get("embeds").and_then(Value::as_array) {
            Some(embeds) if !embeds.is_empty() => {
                embeds[0].as_object().ok_or(Error::InvalidEmbed)?
            }
            _ => source,
        };

        let author = candidate
            .get("author")
            .and_then(Value::as_object)
            .and_then(|author| {
                Some(EmbedAuthor {
                    name: non_empty(author, "name")?,
                    url: non_empty(author, "url"),
                    icon_url: non_empty(author, "icon_url"),
                })
            });
        let footer = candidate
            .get("footer")
            .and_then(Value::as_object)
            .and_then(|footer| {
                Some(EmbedFooter {
                    text: non_empty(footer, "text")?,
                    icon_url: non_empty(footer, "icon_url"),
                })
            });
        let fields = candidate
            .get("fields")
            .and_then(Value::as_array)
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(Value::as_object)
                    .take(MAX_EMBED_FIELDS)
                    .map(|field| EmbedField {
                        name: string_or_empty(field, "name"),
                        value: string_or_empty(field, "value"),
                        inline: field.get("inline").is_some_and(truthy),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            title: non_empty(candidate, "title"),
            description: non_empty(candidate, "description"),
            url: non_empty(candidate, "url"),
            color: candidate
                .get("color")
                .and_then(|color| serde_json::from_value(color.clone()).ok())
                .unwrap_or(Color::BLURPLE),
            timestamp: non_empty(candidate, "timestamp"),
            author,
            footer,
            image: media(candidate, "image"),
            thumbnail: media(candidate, "thumbnail"),
            fields,
        })
    }
}

fn non_empty(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn string_or_empty(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn media(object: &Map<String, Value>, key: &str) -> Option<EmbedMedia> {
    let url = non_empty(object.get(key)?.as_object()?, "url")?;
    Some(EmbedMedia { url })
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exports_payload_with_decimal_color() {
        let mut embed = Embed::default();
        embed.title = Some("Hi".into());
        embed.color = Color::from_rgb(0xED_4245);
        embed.fields.push(EmbedField::new("a", "b", false));
        assert_eq!(
            serde_json::to_value(embed.to_payload()).unwrap(),
            json!({
                "embeds": [{
                    "title": "Hi",
                    "color": 15_548_997,
                    "fields": [{ "name": "a", "value": "b", "inline": false }]
                }]
            })
        );
    }

    #[test]
    fn field_limit_is_enforced() {
        let mut embed = Embed::default();
        for i in 0..MAX_EMBED_FIELDS {
            embed.add_field(EmbedField::new(i.to_string(), "v", false)).unwrap();
        }
        assert_eq!(
            embed.add_field(EmbedField::new("extra", "v", false)),
            Err(Error::TooManyFields { max: 25 })
        );
        assert_eq!(embed.fields.len(), MAX_EMBED_FIELDS);
        assert_eq!(embed.remove_field(0).map(|f| f.name), Some("0".into()));
        assert_eq!(embed.remove_field(99), None);
    }

    #[test]
    fn imports_bare_embed_and_payload() {
        let bare = json!({ "title": "T", "color": "#57F287" });
        let payload = json!({ "embeds": [bare.clone(), { "title": "second" }] });
        let from_bare = Embed::from_json_value(&bare).unwrap();
        assert_eq!(from_bare.title.as_deref(), Some("T"));
        assert_eq!(from_bare.color.to_decimal(), 0x57_F287);
        assert_eq!(Embed::from_json_value(&payload).unwrap(), from_bare);
    }

    #[test]
    fn empty_embeds_array_reads_the_object_itself() {
        let embed = Embed::from_json_value(&json!({ "embeds": [], "title": "x" })).unwrap();
        assert_eq!(embed.title.as_deref(), Some("x"));
    }

    #[test]
    fn rejects_non_objects() {
        for value in [json!(null), json!(3), json!("embed"), json!([])] {
            assert_eq!(Embed::from_json_value(&value), Err(Error::InvalidEmbed));
        }
        assert_eq!(
            Embed::from_json_value(&json!({ "embeds": [5] })),
            Err(Error::InvalidEmbed)
        );
        assert!(matches!(
            Embed::from_json_str("{ nope"),
            Err(Error::InvalidJson { .. })
        ));
    }

    #[test]
    fn bad_members_fall_back() {
        let embed = Embed::from_json_value(&json!({
            "title": 5,
            "color": "purple",
            "author": { "icon_url": "https://a/b.png" },
            "footer": "text",
            "image": { "url": 1 },
            "thumbnail": { "url": "https://t" },
        }))
        .unwrap();
        assert_eq!(
            embed,
            Embed {
                thumbnail: Some(EmbedMedia {
                    url: "https://t".into()
                }),
                ..Embed::default()
            }
        );
        let numeric = Embed::from_json_value(&json!({ "color": 15_548_997 })).unwrap();
        assert_eq!(numeric.color.to_hex(), "#ED4245");
    }

    #[test]
    fn fields_are_filtered_and_capped() {
        let mut fields = vec![json!("skip me"), json!(null)];
        fields.extend((0..30).map(|i| json!({ "name": i.to_string(), "value": 7, "inline": i % 3 })));
        let embed = Embed::from_json_value(&json!({ "fields": fields })).unwrap();
        assert_eq!(embed.fields.len(), MAX_EMBED_FIELDS);
        assert_eq!(embed.fields[0], EmbedField::new("0", "", false));
        assert_eq!(embed.fields[1], EmbedField::new("1", "", true));
        assert_eq!(embed.fields[24].name, "24");
    }

    #[test]
    fn inline_uses_javascript_truthiness() {
        for (value, expected) in [
            (json!(true), true),
            (json!(false), false),
            (json!(0), false),
            (json!(0.0), false),
            (json!(2), true),
            (json!(""), false),
            (json!("no"), true),
            (json!(null), false),
            (json!([]), true),
            (json!({}), true),
        ] {
            assert_eq!(truthy(&value), expected, "{value}");
        }
    }

    #[test]
    fn example_round_trips() {
        let example = Embed::example();
        assert_eq!(example.fields.len(), 2);
        let json = example.to_json().unwrap();
        assert!(json.contains("\"color\": 5793266"));
        assert_eq!(Embed::from_json_str(&json).unwrap(), example);
    }
}
