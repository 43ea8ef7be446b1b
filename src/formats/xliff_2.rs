//! Support for XLIFF 2.0/2.1 documents.
//!
//! Messages are `<unit>` elements directly under `<file id="arb">`. Notes come
//! before the segment: one `description` note and one `placeholder` note per
//! placeholder property.

use crate::{
    arb::{Bundle, Message, MessageMeta, Placeholders},
    clock::{Clock, iso_timestamp},
    error::Error,
    formats::XSI_NAMESPACE,
    traits::{Interchange, Parser},
    types::{ConvertOptions, ParseOptions, non_empty, non_empty_owned},
    xml::{Document, Node, Selector, make_element, make_text},
};

pub const NAMESPACE: &str = "urn:oasis:names:tc:xliff:document:2.0";

const SCHEMA_LOCATION: &str = "urn:oasis:names:tc:xliff:document:2.0 http://docs.oasis-open.org/xliff/xliff-core/v2.1/cos02/schemas/xliff_core_2.0.xsd";

const FILE_ID: &str = "arb";

/// Converts between ARB bundles and XLIFF 2.x.
#[derive(Debug, Clone, Copy, Default)]
pub struct Xliff2Codec;

fn unit(message: &Message, target: Option<&str>) -> Node {
    let mut notes = Vec::new();
    if !message.meta.description.is_empty() {
        notes.push(make_element(
            "note",
            &[("category", Some("description"))],
            vec![make_text(&message.meta.description)],
        ));
    }
    notes.extend(message.meta.placeholders.notes().into_iter().map(|note| {
        make_element(
            "note",
            &[("category", Some("placeholder"))],
            vec![make_text(note)],
        )
    }));

    let mut segment = vec![make_element("source", &[], vec![make_text(&message.value)])];
    if let Some(target) = non_empty(target) {
        segment.push(make_element("target", &[], vec![make_text(target)]));
    }

    let mut children = Vec::with_capacity(2);
    if !notes.is_empty() {
        children.push(make_element("notes", &[], notes));
    }
    children.push(make_element("segment", &[], segment));

    make_element("unit", &[("id", Some(message.key.as_str()))], children)
}

impl Interchange for Xliff2Codec {
    fn convert(&self, options: &ConvertOptions, _clock: &dyn Clock) -> Result<ParseOptions, Error> {
        let source = Bundle::from_str(&options.source)?;
        let target = options.target_text().map(Bundle::from_str).transpose()?;
        let targets = target
            .as_ref()
            .map(Bundle::values_by_key)
            .unwrap_or_default();

        let units: Vec<Node> = source
            .messages
            .iter()
            .map(|message| unit(message, targets.get(message.key.as_str()).copied()))
            .collect();
        tracing::debug!(units = units.len(), "writing XLIFF 2 document");

        let file = make_element(
            "file",
            &[
                ("id", Some(FILE_ID)),
                ("original", non_empty(options.original.as_deref())),
                ("xml:space", Some("preserve")),
            ],
            units,
        );
        let root = make_element(
            "xliff",
            &[
                ("xmlns:xsi", Some(XSI_NAMESPACE)),
                ("xsi:schemaLocation", Some(SCHEMA_LOCATION)),
                ("xmlns", Some(NAMESPACE)),
                ("version", Some("2.0")),
                ("srcLang", non_empty(options.source_language.as_deref())),
                ("trgLang", non_empty(options.target_language.as_deref())),
            ],
            vec![file],
        );

        Ok(ParseOptions::new(Document::new(root).to_text()?))
    }

    fn parse(&self, options: &ParseOptions, clock: &dyn Clock) -> Result<ConvertOptions, Error> {
        let document = Document::from_str(&options.content)?;
        let xliff = document.query().query("xliff");
        let source_language = xliff.attr("srcLang").unwrap_or_default();
        let target_language = xliff.attr("trgLang");
        let file = xliff.query("file");
        let original = file.attr("original").unwrap_or_default();

        let last_modified = iso_timestamp(clock);
        let mut source = Bundle::for_language(source_language, last_modified.clone());
        let mut target =
            target_language.map(|language| Bundle::for_language(language, last_modified));

        file.query_all("unit").for_each(|unit| {
            let key = unit.attr("id").unwrap_or_default();
            let segments = unit.query_all("segment");
            let notes = unit.query("notes");
            let description = notes
                .query(Selector::with_attr("note", "category", "description"))
                .inner_text();

            let mut placeholders = Placeholders::default();
            notes
                .query_all(Selector::with_attr("note", "category", "placeholder"))
                .for_each(|note| {
                    placeholders.record_note(&note.inner_text());
                });

            let meta = MessageMeta::new(description, placeholders);
            if let Some(target) = target.as_mut() {
                target.push(key, segments.query("target").inner_text(), meta.clone());
            }
            source.push(key, segments.query("source").inner_text(), meta);
        });
        tracing::debug!(
            units = source.messages.len(),
            with_target = target.is_some(),
            "read XLIFF 2 document"
        );

        Ok(ConvertOptions {
            source: source.to_text()?,
            target: target.map(|bundle| bundle.to_text()).transpose()?,
            original: non_empty_owned(original.to_string()),
            source_language: non_empty_owned(source_language.to_string()),
            target_language: target_language.and_then(|l| non_empty_owned(l.to_string())),
        })
    }
}
