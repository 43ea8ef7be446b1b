//! Support for gettext `.po` catalogs.
//!
//! A catalog converted from ARB starts with a synthetic header block whose
//! translator comments carry the provenance label and both locales. Every
//! message follows as its own block keyed by `msgctxt`, with the description
//! and placeholder notes as extracted (`#.`) comments.

use std::io::{BufRead, Write};

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::{
    arb::{Bundle, MessageMeta, Placeholders},
    clock::{Clock, iso_timestamp},
    error::Error,
    traits::{Interchange, Parser},
    types::{ConvertOptions, DEFAULT_SOURCE_LANGUAGE, ParseOptions, non_empty_owned},
    util::zero_pad,
};

/// Line width the writer wraps comments and strings to.
pub const MAX_LINE_WIDTH: usize = 80;

const HEADER_TITLE: &str = "Translation converted from ARB";
const ORIGINAL_COMMENT: &str = "original: ";
const SOURCE_LANGUAGE_COMMENT: &str = "srcLang: ";
const TARGET_LANGUAGE_COMMENT: &str = "trgLang: ";

/// A parsed `.po` file: the header block plus message blocks in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub header: Option<PoHeader>,
    pub entries: Vec<PoEntry>,
}

/// The block with an empty `msgid` (and no or empty `msgctxt`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoHeader {
    /// Translator comments, without the leading `# `.
    pub comments: Vec<String>,
    /// Header fields, one per quoted `msgstr` continuation line.
    pub fields: Vec<String>,
}

/// One message block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoEntry {
    /// `# …` lines.
    pub translator_comments: Vec<String>,
    /// `#. …` lines.
    pub extracted_comments: Vec<String>,
    /// `#: …` lines, split on commas.
    pub references: Vec<String>,
    /// `#, …` lines, split on commas.
    pub flags: Vec<String>,
    pub msgctxt: Option<String>,
    pub msgid: String,
    pub msgstr: String,
}

/// Field a `""` opener starts collecting continuation lines for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Msgctxt,
    Msgid,
    Msgstr,
}

#[derive(Debug, Default)]
struct Block {
    entry: PoEntry,
    /// Continuation lines of `msgstr`, kept apart for header fields.
    msgstr_lines: Vec<String>,
    has_content: bool,
}

impl Block {
    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Msgctxt => self.entry.msgctxt.get_or_insert_with(String::new),
            Field::Msgid => &mut self.entry.msgid,
            Field::Msgstr => &mut self.entry.msgstr,
        }
    }

    /// Handles `msgctxt`/`msgid`/`msgstr`. Returns the field to continue when
    /// the value is the `""` opener.
    fn open(&mut self, field: Field, text: &str) -> Option<Field> {
        if text == "\"\"" {
            self.field_mut(field);
            Some(field)
        } else {
            *self.field_mut(field) = unquote(text).to_string();
            None
        }
    }

    fn continue_field(&mut self, field: Field, line: &str) {
        let text = unquote(line);
        self.field_mut(field).push_str(text);
        if field == Field::Msgstr {
            self.msgstr_lines.push(text.to_string());
        }
    }

    fn is_header(&self) -> bool {
        self.entry.msgctxt.as_deref().unwrap_or_default().is_empty() && self.entry.msgid.is_empty()
    }
}

/// Splits the text into blank-line separated blocks.
fn read_blocks(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut block = Block::default();
    let mut scope: Option<Field> = None;

    for line in content.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.trim().is_empty() {
            if block.has_content {
                blocks.push(std::mem::take(&mut block));
            }
            scope = None;
            continue;
        }
        block.has_content = true;

        if let Some(field) = scope {
            if line.starts_with('"') {
                block.continue_field(field, line);
            } else {
                scope = None;
            }
        }

        let (prefix, text) = line.split_once(' ').unwrap_or(("", line));
        match prefix {
            "#" => block.entry.translator_comments.push(text.to_string()),
            "#." => block.entry.extracted_comments.push(text.to_string()),
            "#:" => block.entry.references.extend(split_list(text)),
            "#," => block.entry.flags.extend(split_list(text)),
            "msgctxt" => scope = block.open(Field::Msgctxt, text),
            "msgid" => scope = block.open(Field::Msgid, text),
            "msgstr" => scope = block.open(Field::Msgstr, text),
            _ => {}
        }
    }

    if block.has_content {
        blocks.push(block);
    }
    blocks
}

/// Drops the first and last character, the surrounding quotes of a PO string.
fn unquote(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

fn split_list(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(',').map(|part| part.trim().to_string())
}

fn unescape(value: &str) -> String {
    value.replace("\\n", "\n")
}

impl Catalog {
    fn from_blocks(blocks: Vec<Block>) -> Self {
        let mut catalog = Catalog::default();
        for block in blocks {
            if block.is_header() {
                let header = catalog.header.get_or_insert_with(PoHeader::default);
                header.comments.extend(block.entry.translator_comments);
                header.fields.extend(block.msgstr_lines);
            } else {
                catalog.entries.push(block.entry);
            }
        }
        catalog
    }
}

impl Parser for Catalog {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let content = reader.lines().collect::<Result<Vec<_>, _>>()?.join("\n");
        Ok(Catalog::from_blocks(read_blocks(&content)))
    }

    /// Writes blocks separated by blank lines; the output ends with a newline.
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut blocks = Vec::with_capacity(self.entries.len() + 1);
        if let Some(header) = &self.header {
            blocks.push(header.lines().join("\n"));
        }
        blocks.extend(self.entries.iter().map(|entry| entry.lines().join("\n")));

        writer.write_all(blocks.join("\n\n").as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl PoHeader {
    /// The header written for a conversion from ARB.
    fn for_conversion(options: &ConvertOptions, now: &DateTime<FixedOffset>) -> Self {
        let comment = |label: &str, value: &Option<String>| {
            format!("{label}{}", value.as_deref().unwrap_or_default())
        };
        PoHeader {
            comments: vec![
                HEADER_TITLE.to_string(),
                comment(ORIGINAL_COMMENT, &options.original),
                comment(SOURCE_LANGUAGE_COMMENT, &options.source_language),
                comment(TARGET_LANGUAGE_COMMENT, &options.target_language),
            ],
            fields: vec![
                format!("PO-Revision-Date: {}", format_revision_date(now)),
                "MIME-Version: 1.0".to_string(),
                "Content-Type: text/plain; charset=UTF-8".to_string(),
                "Content-Transfer-Encoding: 8bit".to_string(),
            ],
        }
    }

    /// Value of the last `label value` comment, if any.
    fn comment_value(&self, label: &str) -> Option<&str> {
        self.comments
            .iter()
            .rev()
            .find_map(|comment| comment.strip_prefix(label))
    }

    fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.comments.iter().map(|c| format!("# {c}")).collect();
        lines.push("msgid \"\"".to_string());
        lines.push("msgstr \"\"".to_string());
        lines.extend(self.fields.iter().map(|field| format!("\"{field}\"")));
        lines
    }
}

impl PoEntry {
    fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .translator_comments
            .iter()
            .map(|c| format!("# {c}"))
            .collect();
        lines.extend(
            self.extracted_comments
                .iter()
                .map(|c| gettext_comment("#.", c)),
        );
        if !self.references.is_empty() {
            lines.push(format!("#: {}", self.references.join(", ")));
        }
        if !self.flags.is_empty() {
            lines.push(format!("#, {}", self.flags.join(", ")));
        }
        if let Some(msgctxt) = &self.msgctxt {
            lines.push(gettext_string("msgctxt", msgctxt));
        }
        lines.push(gettext_string("msgid", &self.msgid));
        lines.push(gettext_string("msgstr", &self.msgstr));
        lines
    }
}

/// Writes `value` as comment lines of at most [`MAX_LINE_WIDTH`] characters,
/// splitting at plain character positions.
pub fn gettext_comment(prefix: &str, value: &str) -> String {
    let width = MAX_LINE_WIDTH
        .saturating_sub(prefix.chars().count() + 1)
        .max(1);
    let chars: Vec<char> = value.chars().collect();

    let mut lines = Vec::new();
    let mut rest = chars.as_slice();
    while rest.len() > width {
        let (chunk, tail) = rest.split_at(width);
        lines.push(format!("{prefix} {}", chunk.iter().collect::<String>()));
        rest = tail;
    }
    lines.push(format!("{prefix} {}", rest.iter().collect::<String>()));
    lines.join("\n")
}

/// Writes a `msgctxt`/`msgid`/`msgstr` field, switching to the `""` plus
/// continuation lines form when the value does not fit on one line.
///
/// Continuation lines carry 78 characters. Cutting stops once the remainder
/// would fit next to the prefix, and the remainder is always written, so it
/// may be a bare `""`.
pub fn gettext_string(prefix: &str, value: &str) -> String {
    let value = value.replace('\n', "\\n");
    let chars: Vec<char> = value.chars().collect();
    let prefix_len = prefix.chars().count();

    if chars.len() + prefix_len + 3 <= MAX_LINE_WIDTH {
        return format!("{prefix} \"{value}\"");
    }

    let chunk_width = MAX_LINE_WIDTH - 2;
    let fits = MAX_LINE_WIDTH.saturating_sub(prefix_len + 2);
    let quoted = |chars: &[char]| format!("\"{}\"", chars.iter().collect::<String>());

    let mut lines = vec![format!("{prefix} \"\"")];
    let mut rest = chars.as_slice();
    while rest.len() > fits {
        let (chunk, tail) = rest.split_at(chunk_width.min(rest.len()));
        lines.push(quoted(chunk));
        rest = tail;
    }
    lines.push(quoted(rest));
    lines.join("\n")
}

/// `YYYY-MM-DD HH:MM+ZZZZ` in the instant's own offset, e.g. `2008-07-22 18:13+0200`.
pub fn format_revision_date(instant: &DateTime<FixedOffset>) -> String {
    format!(
        "{}-{}-{} {}:{}{}",
        instant.year(),
        zero_pad(instant.month(), 2),
        zero_pad(instant.day(), 2),
        zero_pad(instant.hour(), 2),
        zero_pad(instant.minute(), 2),
        format_timezone_offset(instant.offset().local_minus_utc()),
    )
}

/// `+HHMM`/`-HHMM` for an offset in seconds east of UTC. UTC itself is `+0000`.
pub fn format_timezone_offset(seconds_east: i32) -> String {
    let sign = if seconds_east >= 0 { '+' } else { '-' };
    let minutes = seconds_east.unsigned_abs() / 60;
    format!(
        "{sign}{}{}",
        zero_pad(minutes / 60, 2),
        zero_pad(minutes % 60, 2)
    )
}

/// Converts between ARB bundles and gettext catalogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GettextCodec;

impl Interchange for GettextCodec {
    fn convert(&self, options: &ConvertOptions, clock: &dyn Clock) -> Result<ParseOptions, Error> {
        let source = Bundle::from_str(&options.source)?;
        let target = options.target_text().map(Bundle::from_str).transpose()?;
        let targets = target
            .as_ref()
            .map(Bundle::values_by_key)
            .unwrap_or_default();

        let entries = source
            .messages
            .iter()
            .map(|message| {
                let mut extracted_comments = Vec::new();
                if !message.meta.description.is_empty() {
                    extracted_comments.push(message.meta.description.clone());
                }
                extracted_comments.extend(message.meta.placeholders.notes());

                PoEntry {
                    extracted_comments,
                    msgctxt: Some(message.key.clone()),
                    msgid: message.value.clone(),
                    msgstr: targets
                        .get(message.key.as_str())
                        .copied()
                        .unwrap_or_default()
                        .to_string(),
                    ..Default::default()
                }
            })
            .collect();

        let catalog = Catalog {
            header: Some(PoHeader::for_conversion(options, &clock.now())),
            entries,
        };
        tracing::debug!(entries = catalog.entries.len(), "writing gettext catalog");
        Ok(ParseOptions::new(catalog.to_text()?))
    }

    fn parse(&self, options: &ParseOptions, clock: &dyn Clock) -> Result<ConvertOptions, Error> {
        let catalog = Catalog::from_str(&options.content)?;
        let header = catalog.header.unwrap_or_default();
        let original = header.comment_value(ORIGINAL_COMMENT).unwrap_or_default();
        let source_language = header
            .comment_value(SOURCE_LANGUAGE_COMMENT)
            .unwrap_or(DEFAULT_SOURCE_LANGUAGE);
        let target_language = header
            .comment_value(TARGET_LANGUAGE_COMMENT)
            .unwrap_or_default();

        let last_modified = iso_timestamp(clock);
        let mut source = Bundle::for_language(source_language, last_modified.clone());
        let mut target = (!target_language.is_empty())
            .then(|| Bundle::for_language(target_language, last_modified));

        for entry in &catalog.entries {
            let key = unescape(entry.msgctxt.as_deref().unwrap_or_default());
            let mut description = String::new();
            let mut placeholders = Placeholders::default();
            for comment in &entry.extracted_comments {
                if !placeholders.record_note(comment) {
                    description.push_str(comment);
                }
            }
            let meta = MessageMeta::new(description, placeholders);

            if let Some(target) = target.as_mut() {
                target.push(key.clone(), unescape(&entry.msgstr), meta.clone());
            }
            source.push(key, unescape(&entry.msgid), meta);
        }
        tracing::debug!(
            entries = catalog.entries.len(),
            with_target = target.is_some(),
            "read gettext catalog"
        );

        Ok(ConvertOptions {
            source: source.to_text()?,
            target: target.map(|bundle| bundle.to_text()).transpose()?,
            original: non_empty_owned(original.to_string()),
            source_language: non_empty_owned(source_language.to_string()),
            target_language: non_empty_owned(target_language.to_string()),
        })
    }
}
