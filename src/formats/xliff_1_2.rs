//! Support for XLIFF 1.2 documents.
//!
//! Each ARB message becomes a `<trans-unit>` inside `xliff/file/body`. The
//! description travels as a developer note and placeholder properties as
//! informational `paramnotes` contexts.

use crate::{
    arb::{Bundle, Message, MessageMeta, Placeholders},
    clock::{Clock, iso_timestamp},
    error::Error,
    formats::XSI_NAMESPACE,
    traits::{Interchange, Parser},
    types::{ConvertOptions, ParseOptions, non_empty, non_empty_owned},
    xml::{Document, Node, Selector, make_element, make_text},
};

pub const NAMESPACE: &str = "urn:oasis:names:tc:xliff:document:1.2";

const SCHEMA_LOCATION: &str = "urn:oasis:names:tc:xliff:document:1.2 http://docs.oasis-open.org/xliff/v1.2/os/xliff-core-1.2-strict.xsd";

/// Converts between ARB bundles and XLIFF 1.2.
#[derive(Debug, Clone, Copy, Default)]
pub struct Xliff12Codec;

fn trans_unit(message: &Message, target: Option<&str>) -> Node {
    let mut children = vec![make_element("source", &[], vec![make_text(&message.value)])];

    if let Some(target) = non_empty(target) {
        children.push(make_element("target", &[], vec![make_text(target)]));
    }

    if !message.meta.description.is_empty() {
        children.push(make_element(
            "note",
            &[("from", Some("developer"))],
            vec![make_text(&message.meta.description)],
        ));
    }

    if !message.meta.placeholders.is_empty() {
        let contexts = message
            .meta
            .placeholders
            .notes()
            .into_iter()
            .map(|note| {
                make_element(
                    "context",
                    &[("context-type", Some("paramnotes"))],
                    vec![make_text(note)],
                )
            })
            .collect();
        children.push(make_element(
            "context-group",
            &[("purpose", Some("informational"))],
            contexts,
        ));
    }

    make_element("trans-unit", &[("id", Some(message.key.as_str()))], children)
}

impl Interchange for Xliff12Codec {
    fn convert(&self, options: &ConvertOptions, clock: &dyn Clock) -> Result<ParseOptions, Error> {
        let source = Bundle::from_str(&options.source)?;
        let target = options.target_text().map(Bundle::from_str).transpose()?;
        let targets = target
            .as_ref()
            .map(Bundle::values_by_key)
            .unwrap_or_default();

        let units: Vec<Node> = source
            .messages
            .iter()
            .map(|message| trans_unit(message, targets.get(message.key.as_str()).copied()))
            .collect();
        tracing::debug!(units = units.len(), "writing XLIFF 1.2 document");

        let date = iso_timestamp(clock);
        let file = make_element(
            "file",
            &[
                ("original", non_empty(options.original.as_deref())),
                ("datatype", Some("plaintext")),
                ("xml:space", Some("preserve")),
                ("source-language", non_empty(options.source_language.as_deref())),
                ("target-language", non_empty(options.target_language.as_deref())),
                ("date", Some(date.as_str())),
            ],
            vec![make_element("body", &[], units)],
        );
        let root = make_element(
            "xliff",
            &[
                ("xmlns:xsi", Some(XSI_NAMESPACE)),
                ("xsi:schemaLocation", Some(SCHEMA_LOCATION)),
                ("xmlns", Some(NAMESPACE)),
                ("version", Some("1.2")),
            ],
            vec![file],
        );

        Ok(ParseOptions::new(Document::new(root).to_text()?))
    }

    /// Reads `xliff/file/body/trans-unit`. A target bundle is produced only
    /// when the file declares a `target-language`.
    fn parse(&self, options: &ParseOptions, clock: &dyn Clock) -> Result<ConvertOptions, Error> {
        let document = Document::from_str(&options.content)?;
        let file = document.query().query("xliff").query("file");
        let original = file.attr("original").unwrap_or_default();
        let source_language = file.attr("source-language").unwrap_or_default();
        let target_language = file.attr("target-language").unwrap_or_default();

        let last_modified = iso_timestamp(clock);
        let mut source = Bundle::for_language(source_language, last_modified.clone());
        let mut target = Bundle::for_language(target_language, last_modified);

        file.query("body")
            .query_all("trans-unit")
            .for_each(|unit| {
                let key = unit.attr("id").unwrap_or_default();
                let description = unit
                    .query(Selector::with_attr("note", "from", "developer"))
                    .inner_text();

                let mut placeholders = Placeholders::default();
                unit.query_all(Selector::with_attr("context-group", "purpose", "informational"))
                    .query_all(Selector::with_attr("context", "context-type", "paramnotes"))
                    .for_each(|context| {
                        placeholders.record_note(&context.inner_text());
                    });

                let meta = MessageMeta::new(description, placeholders);
                source.push(key, unit.query("source").inner_text(), meta.clone());
                target.push(key, unit.query("target").inner_text(), meta);
            });
        tracing::debug!(
            units = source.messages.len(),
            target_language,
            "read XLIFF 1.2 document"
        );

        let target = if target_language.is_empty() {
            None
        } else {
            Some(target.to_text()?)
        };

        Ok(ConvertOptions {
            source: source.to_text()?,
            target,
            original: non_empty_owned(original.to_string()),
            source_language: non_empty_owned(source_language.to_string()),
            target_language: non_empty_owned(target_language.to_string()),
        })
    }
}
