//! Total navigation over the XML node tree.
//!
//! Every step returns another [`Query`], falling back to [`Query::Empty`] when
//! nothing matches, so lookups such as
//! `unit.query("notes").query_all(Selector::matching(..)).inner_text()` never
//! fail on a missing element.

use super::element::{Element, Node};

/// A wrapped position in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query<'a> {
    Element(&'a Element),
    Text(&'a str),
    /// Result of `query_all`/`map`; its own children are the concatenated
    /// children of its members.
    Collection(Vec<Query<'a>>),
    Empty,
}

/// How `query`/`query_all` pick children.
pub enum Selector<'p> {
    /// Elements with this name.
    Name(&'p str),
    /// The child at this position, whatever its kind.
    Index(usize),
    Filter(Box<dyn Fn(&Query<'_>) -> bool + 'p>),
}

impl<'p> Selector<'p> {
    pub fn matching(filter: impl Fn(&Query<'_>) -> bool + 'p) -> Self {
        Selector::Filter(Box::new(filter))
    }

    /// Elements named `name` whose attribute `key` equals `value`.
    pub fn with_attr(name: &'p str, key: &'p str, value: &'p str) -> Self {
        Selector::matching(move |q| q.name() == Some(name) && q.attr(key) == Some(value))
    }

    fn matches(&self, candidate: &Query<'_>) -> bool {
        match self {
            Selector::Name(name) => candidate.name() == Some(*name),
            Selector::Index(_) => false,
            Selector::Filter(filter) => filter(candidate),
        }
    }
}

impl<'p> From<&'p str> for Selector<'p> {
    fn from(name: &'p str) -> Self {
        Selector::Name(name)
    }
}

impl From<usize> for Selector<'_> {
    fn from(index: usize) -> Self {
        Selector::Index(index)
    }
}

impl<'a> From<&'a Element> for Query<'a> {
    fn from(element: &'a Element) -> Self {
        Query::Element(element)
    }
}

impl<'a> From<&'a Node> for Query<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Element(element) => Query::Element(element),
            Node::Text(text) => Query::Text(text),
        }
    }
}

impl<'a> From<Option<&'a Node>> for Query<'a> {
    fn from(node: Option<&'a Node>) -> Self {
        node.map_or(Query::Empty, Query::from)
    }
}

impl<'a> Query<'a> {
    /// Children searched by `query`, `query_all` and `inner_text`.
    pub fn inner_elements(&self) -> Vec<Query<'a>> {
        match self {
            Query::Element(element) => element.children.iter().map(Query::from).collect(),
            Query::Collection(members) => members.iter().flat_map(Query::inner_elements).collect(),
            Query::Text(_) | Query::Empty => Vec::new(),
        }
    }

    /// Concatenated text children; empty when there are none.
    pub fn inner_text(&self) -> String {
        self.inner_elements()
            .into_iter()
            .filter_map(|child| match child {
                Query::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    /// First matching child, or [`Query::Empty`].
    pub fn query<'p>(&self, selector: impl Into<Selector<'p>>) -> Query<'a> {
        let selector = selector.into();
        let mut children = self.inner_elements().into_iter();
        let found = match &selector {
            Selector::Index(index) => children.nth(*index),
            _ => children.find(|child| selector.matches(child)),
        };
        found.unwrap_or(Query::Empty)
    }

    /// Every matching child as a collection.
    pub fn query_all<'p>(&self, selector: impl Into<Selector<'p>>) -> Query<'a> {
        let selector = selector.into();
        match &selector {
            Selector::Index(index) => Query::Collection(vec![self.query(*index)]),
            _ => Query::Collection(
                self.inner_elements()
                    .into_iter()
                    .filter(|child| selector.matches(child))
                    .collect(),
            ),
        }
    }

    /// Visits the members of a collection, or the children of an element.
    pub fn for_each(&self, mut visit: impl FnMut(Query<'a>)) {
        for item in self.items() {
            visit(item);
        }
    }

    /// Like [`Query::for_each`], collecting the results into a collection.
    pub fn map(&self, transform: impl FnMut(Query<'a>) -> Query<'a>) -> Query<'a> {
        Query::Collection(self.items().into_iter().map(transform).collect())
    }

    pub fn name(&self) -> Option<&'a str> {
        match self {
            Query::Element(element) => Some(element.name.as_str()),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        match self {
            Query::Element(element) => element.attr(name),
            _ => None,
        }
    }

    /// `true` for the empty node and for collections without members.
    pub fn is_empty(&self) -> bool {
        match self {
            Query::Empty => true,
            Query::Collection(members) => members.is_empty(),
            Query::Element(_) | Query::Text(_) => false,
        }
    }

    fn items(&self) -> Vec<Query<'a>> {
        match self {
            Query::Collection(members) => members.clone(),
            Query::Element(element) => element.children.iter().map(Query::from).collect(),
            Query::Text(_) | Query::Empty => Vec::new(),
        }
    }
}
