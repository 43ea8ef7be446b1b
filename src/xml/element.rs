//! XML node tree with a quick-xml backed reader and a writer that produces the
//! two-space indented layout XLIFF consumers expect.

use std::io::{BufRead, Write};

use quick_xml::{
    Reader, Writer,
    escape::{escape, partial_escape},
    events::{BytesEnd, BytesStart, BytesText, Event, attributes::Attribute},
};

use crate::{error::Error, traits::Parser, xml::query::Query};

const INDENT: &str = "  ";

/// A child of an element: either a nested element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Qualified name as written, e.g. `trans-unit` or `xml:space`.
    pub name: String,
    /// Attributes in document order, values unescaped.
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// A parsed or constructed XML document.
///
/// The document node is an unnamed element whose children are the top-level
/// nodes, so `document.query().query("xliff")` reaches the root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Elements that keep an explicit closing tag even when they have no
    /// children.
    fn preserves_space(&self) -> bool {
        self.attr("xml:space") == Some("preserve")
    }

    fn has_element_children(&self) -> bool {
        self.children
            .iter()
            .any(|child| matches!(child, Node::Element(_)))
    }

    /// Whitespace between child elements is layout, not content.
    fn drop_layout_whitespace(&mut self) {
        if self.has_element_children() {
            self.children.retain(|child| match child {
                Node::Text(text) => !text.trim().is_empty(),
                Node::Element(_) => true,
            });
        }
    }
}

impl Document {
    /// A document with a single root element.
    pub fn new(root: Node) -> Self {
        Document {
            root: Element {
                children: vec![root],
                ..Default::default()
            },
        }
    }

    /// The document node, wrapped for navigation.
    pub fn query(&self) -> Query<'_> {
        Query::from(&self.root)
    }
}

/// Builds an element node. Attributes whose value is `None` are left out.
pub fn make_element(name: &str, attributes: &[(&str, Option<&str>)], children: Vec<Node>) -> Node {
    Node::Element(Element {
        name: name.to_string(),
        attributes: attributes
            .iter()
            .filter_map(|(key, value)| value.map(|v| (key.to_string(), v.to_string())))
            .collect(),
        children,
    })
}

pub fn make_text(text: impl Into<String>) -> Node {
    Node::Text(text.into())
}

/// Escapes `&`, `<`, `>`, `"` and `'` for use inside an attribute value.
pub fn escape_value(value: &str) -> String {
    escape(value).into_owned()
}

/// Escapes `&`, `<` and `>` for use as element text.
pub fn escape_text(text: &str) -> String {
    partial_escape(text).into_owned()
}

impl Parser for Document {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.config_mut().trim_text(false);

        let mut buf = Vec::new();
        // Open elements, outermost first; index 0 is the document node.
        let mut stack = vec![Element::default()];

        loop {
            match xml_reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => stack.push(read_start(e)?),
                Event::Empty(ref e) => {
                    let element = read_start(e)?;
                    append(&mut stack, Node::Element(element));
                }
                Event::End(_) => {
                    let mut element = match stack.pop() {
                        Some(element) if !stack.is_empty() => element,
                        _ => return Err(Error::invalid_document("unexpected closing tag")),
                    };
                    element.drop_layout_whitespace();
                    append(&mut stack, Node::Element(element));
                }
                Event::Text(e) => {
                    let text = e.unescape()?;
                    append(&mut stack, Node::Text(text.into_owned()));
                }
                Event::CData(e) => {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    append(&mut stack, Node::Text(text));
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        let mut root = stack.swap_remove(0);
        if let Some(open) = stack.last() {
            return Err(Error::invalid_document(format!(
                "unclosed element `{}`",
                open.name
            )));
        }
        root.drop_layout_whitespace();
        Ok(Document { root })
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut xml_writer = Writer::new(&mut writer);
        write_nodes(&mut xml_writer, &self.root.children, 0, true)
    }
}

fn read_start(e: &BytesStart<'_>) -> Result<Element, Error> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| Error::invalid_document(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }
    Ok(Element {
        name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
        attributes,
        children: Vec::new(),
    })
}

fn append(stack: &mut [Element], node: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

fn write_nodes<W: Write>(
    xml_writer: &mut Writer<W>,
    nodes: &[Node],
    depth: usize,
    first_line: bool,
) -> Result<(), Error> {
    for (index, node) in nodes.iter().enumerate() {
        match node {
            Node::Element(element) => {
                let mut indent = if first_line && index == 0 {
                    String::new()
                } else {
                    String::from("\n")
                };
                indent.push_str(&INDENT.repeat(depth));
                xml_writer.write_event(Event::Text(BytesText::from_escaped(indent)))?;
                write_element(xml_writer, element, depth)?;
            }
            Node::Text(text) => {
                xml_writer.write_event(Event::Text(BytesText::from_escaped(escape_text(text))))?;
            }
        }
    }
    Ok(())
}

fn write_element<W: Write>(
    xml_writer: &mut Writer<W>,
    element: &Element,
    depth: usize,
) -> Result<(), Error> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        let escaped = escape_value(value);
        start.push_attribute(Attribute::from((key.as_bytes(), escaped.as_bytes())));
    }

    if element.children.is_empty() && !element.preserves_space() {
        xml_writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    xml_writer.write_event(Event::Start(start))?;
    write_nodes(xml_writer, &element.children, depth + 1, false)?;
    if element.has_element_children() {
        let closing_indent = format!("\n{}", INDENT.repeat(depth));
        xml_writer.write_event(Event::Text(BytesText::from_escaped(closing_indent)))?;
    }
    xml_writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}
