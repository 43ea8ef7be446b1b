//! Support for the Application Resource Bundle (ARB) JSON format.
//!
//! ARB is the source of truth for every conversion: codecs read the source
//! (and optional target) bundle through [`Bundle`] and write reconstructed
//! bundles back with it.

use std::{
    collections::HashMap,
    io::{BufRead, Write},
};

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value, json};

use crate::{error::Error, traits::Parser};

/// Bundle-level locale key, e.g. `"@@locale": "en_US"`.
pub const LOCALE_KEY: &str = "@@locale";

/// Bundle-level modification timestamp key.
pub const LAST_MODIFIED_KEY: &str = "@@last_modified";

const DEFAULT_MESSAGE_TYPE: &str = "text";

lazy_static! {
    /// `{name} property: value`, the textual form of one placeholder property.
    static ref PLACEHOLDER_NOTE_REGEX: Regex = Regex::new(r"^\{([\w-]+)\} (.*): (.*)$").unwrap();
}

/// An ARB document: bundle metadata plus messages in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    /// Value of `@@locale`, underscore separated (`en_US`).
    pub locale: Option<String>,
    /// Value of `@@last_modified`.
    pub last_modified: Option<String>,
    pub messages: Vec<Message>,
}

/// One translatable key, its string and its `@key` metadata record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub key: String,
    pub value: String,
    pub meta: MessageMeta,
}

/// The `@key` record of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageMeta {
    pub description: String,
    /// The ARB `type` field.
    pub kind: String,
    pub placeholders: Placeholders,
}

/// Named placeholders of a message, each with ordered `property: value` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders(Vec<Placeholder>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    pub properties: Vec<(String, String)>,
}

impl Bundle {
    /// Creates an empty bundle for the given hyphenated language tag.
    pub fn for_language(language: &str, last_modified: String) -> Self {
        Bundle {
            locale: Some(locale_from_language(language)),
            last_modified: Some(last_modified),
            messages: Vec::new(),
        }
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>, meta: MessageMeta) {
        self.messages.push(Message {
            key: key.into(),
            value: value.into(),
            meta,
        });
    }

    /// Message strings indexed by key, for looking up a target by source key.
    pub fn values_by_key(&self) -> HashMap<&str, &str> {
        self.messages
            .iter()
            .map(|m| (m.key.as_str(), m.value.as_str()))
            .collect()
    }

    fn from_map(root: &Map<String, Value>) -> Self {
        let mut bundle = Bundle::default();

        for (key, value) in root {
            match key.as_str() {
                LOCALE_KEY => bundle.locale = value.as_str().map(str::to_owned),
                LAST_MODIFIED_KEY => bundle.last_modified = value.as_str().map(str::to_owned),
                _ if key.starts_with('@') => {}
                _ => {
                    let Some(text) = value.as_str() else {
                        tracing::warn!(key = %key, "skipping message with a non-string value");
                        continue;
                    };
                    let meta = match root.get(&format!("@{key}")) {
                        Some(meta) => MessageMeta::from_value(meta),
                        None => {
                            tracing::warn!(key = %key, "message has no metadata record");
                            MessageMeta::default()
                        }
                    };
                    bundle.push(key.clone(), text, meta);
                }
            }
        }

        bundle
    }

    fn to_map(&self) -> Map<String, Value> {
        let mut root = Map::new();
        if let Some(locale) = &self.locale {
            root.insert(LOCALE_KEY.to_string(), Value::String(locale.clone()));
        }
        if let Some(last_modified) = &self.last_modified {
            root.insert(
                LAST_MODIFIED_KEY.to_string(),
                Value::String(last_modified.clone()),
            );
        }
        for message in &self.messages {
            root.insert(message.key.clone(), Value::String(message.value.clone()));
            root.insert(format!("@{}", message.key), message.meta.to_value());
        }
        root
    }
}

impl Parser for Bundle {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let root: Map<String, Value> = serde_json::from_reader(reader)?;
        Ok(Bundle::from_map(&root))
    }

    /// Writes the bundle pretty-printed with two-space indentation.
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(writer, &self.to_map())?;
        Ok(())
    }
}

impl Default for MessageMeta {
    fn default() -> Self {
        MessageMeta {
            description: String::new(),
            kind: DEFAULT_MESSAGE_TYPE.to_string(),
            placeholders: Placeholders::default(),
        }
    }
}

impl MessageMeta {
    pub fn new(description: impl Into<String>, placeholders: Placeholders) -> Self {
        MessageMeta {
            description: description.into(),
            kind: DEFAULT_MESSAGE_TYPE.to_string(),
            placeholders,
        }
    }

    fn from_value(value: &Value) -> Self {
        let mut meta = MessageMeta::default();
        if let Some(description) = value.get("description").and_then(Value::as_str) {
            meta.description = description.to_string();
        }
        if let Some(kind) = value.get("type").and_then(Value::as_str) {
            meta.kind = kind.to_string();
        }
        if let Some(placeholders) = value.get("placeholders").and_then(Value::as_object) {
            for (name, properties) in placeholders {
                meta.placeholders.declare(name);
                let Some(properties) = properties.as_object() else {
                    continue;
                };
                for (property, value) in properties {
                    let value = match value {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    meta.placeholders.insert(name, property, value);
                }
            }
        }
        meta
    }

    fn to_value(&self) -> Value {
        json!({
            "description": self.description,
            "type": self.kind,
            "placeholders": self.placeholders.to_value(),
        })
    }
}

impl Placeholders {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placeholder> {
        self.0.iter()
    }

    /// Ensures a placeholder with this name exists, keeping first-seen order.
    fn declare(&mut self, name: &str) -> &mut Placeholder {
        let index = match self.0.iter().position(|p| p.name == name) {
            Some(index) => index,
            None => {
                self.0.push(Placeholder {
                    name: name.to_string(),
                    properties: Vec::new(),
                });
                self.0.len() - 1
            }
        };
        &mut self.0[index]
    }

    /// Sets one property of a placeholder, replacing an earlier value.
    pub fn insert(&mut self, name: &str, property: &str, value: impl Into<String>) {
        let value = value.into();
        let placeholder = self.declare(name);
        match placeholder.properties.iter_mut().find(|(p, _)| p == property) {
            Some((_, existing)) => *existing = value,
            None => placeholder.properties.push((property.to_string(), value)),
        }
    }

    /// Every property rendered as a `{name} property: value` note, in order.
    pub fn notes(&self) -> Vec<String> {
        self.0
            .iter()
            .flat_map(|placeholder| {
                placeholder.properties.iter().map(move |(property, value)| {
                    format!("{{{}}} {}: {}", placeholder.name, property, value)
                })
            })
            .collect()
    }

    /// Records a `{name} property: value` note. Returns `false` (and records
    /// nothing) when the text does not have that shape.
    pub fn record_note(&mut self, note: &str) -> bool {
        match PLACEHOLDER_NOTE_REGEX.captures(note) {
            Some(caps) => {
                self.insert(&caps[1], &caps[2], &caps[3]);
                true
            }
            None => false,
        }
    }

    fn to_value(&self) -> Value {
        let placeholders = self
            .0
            .iter()
            .map(|placeholder| {
                let properties = placeholder
                    .properties
                    .iter()
                    .map(|(property, value)| (property.clone(), Value::String(value.clone())))
                    .collect::<Map<_, _>>();
                (placeholder.name.clone(), Value::Object(properties))
            })
            .collect::<Map<_, _>>();
        Value::Object(placeholders)
    }
}

/// `en-US` → `en_US`. Only the first hyphen is replaced.
pub fn locale_from_language(language: &str) -> String {
    language.replacen('-', "_", 1)
}
