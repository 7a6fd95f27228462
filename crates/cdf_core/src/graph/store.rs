//! Namespace-aware view over an `oxrdf` graph.
//!
//! Callers address nodes, predicates and classes by their path relative to
//! the vocabulary namespace (`match/3788741`, `team_id`, `Player`); the
//! full IRIs only exist inside the store.

use super::term::{coerce, Value};
use crate::config::DEFAULT_NAMESPACE;
use oxrdf::vocab::rdf;
use oxrdf::{LiteralRef, NamedNode, NamedNodeRef, SubjectRef, TermRef, Triple, TripleRef};
use std::collections::BTreeSet;
use std::fmt::Write;

#[derive(Debug, Clone)]
pub struct Graph {
    namespace: String,
    triples: oxrdf::Graph,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl Graph {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            triples: oxrdf::Graph::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The underlying RDF graph.
    pub fn as_rdf(&self) -> &oxrdf::Graph {
        &self.triples
    }

    /// Full IRI of a namespace-relative path. Characters an IRI can't carry
    /// are percent-escaped.
    pub fn iri(&self, path: &str) -> NamedNode {
        let full = format!("{}{}", self.namespace, path);
        NamedNode::new(full).unwrap_or_else(|_| {
            NamedNode::new_unchecked(format!("{}{}", self.namespace, escape(path)))
        })
    }

    /// Path of an IRI inside the namespace.
    pub fn local<'a>(&self, iri: &'a str) -> Option<&'a str> {
        iri.strip_prefix(self.namespace.as_str())
    }

    pub fn add_type(&mut self, node: &str, class: &str) {
        let triple = Triple::new(self.iri(node), rdf::TYPE, self.iri(class));
        self.triples.insert(&triple);
    }

    pub fn add_link(&mut self, node: &str, predicate: &str, target: &str) {
        let triple = Triple::new(self.iri(node), self.iri(predicate), self.iri(target));
        self.triples.insert(&triple);
    }

    /// Attach a scalar. Returns `false` when the value coerced to nothing.
    pub fn add_value(
        &mut self,
        node: &str,
        predicate: &str,
        value: impl Into<Value>,
        datatype: Option<NamedNodeRef<'static>>,
    ) -> bool {
        match coerce(value.into(), datatype) {
            Some(lit) => {
                let triple = Triple::new(self.iri(node), self.iri(predicate), lit);
                self.triples.insert(&triple);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TripleRef<'_>> {
        self.triples.iter()
    }

    /// Distinct in-namespace subjects, as paths.
    pub fn subjects(&self) -> BTreeSet<&str> {
        self.triples
            .iter()
            .filter_map(|t| match t.subject {
                SubjectRef::NamedNode(node) => self.local(node.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn contains_node(&self, node: &str) -> bool {
        let subject = self.iri(node);
        let mut triples = self.triples.triples_for_subject(&subject);
        triples.next().is_some()
    }

    /// Classes of `node`, as paths, sorted.
    pub fn types_of(&self, node: &str) -> Vec<&str> {
        let subject = self.iri(node);
        let mut types: Vec<&str> = self
            .triples
            .objects_for_subject_predicate(&subject, rdf::TYPE)
            .filter_map(|object| self.node_path(object))
            .collect();
        types.sort_unstable();
        types
    }

    pub fn has_type(&self, node: &str, class: &str) -> bool {
        self.types_of(node).contains(&class)
    }

    /// Link target of `node --predicate-->`, as a path.
    pub fn link(&self, node: &str, predicate: &str) -> Option<&str> {
        let subject = self.iri(node);
        let predicate = self.iri(predicate);
        self.triples
            .object_for_subject_predicate(&subject, &predicate)
            .and_then(|object| self.node_path(object))
    }

    /// Literal of `node --predicate-->`.
    pub fn literal(&self, node: &str, predicate: &str) -> Option<LiteralRef<'_>> {
        let subject = self.iri(node);
        let predicate = self.iri(predicate);
        match self.triples.object_for_subject_predicate(&subject, &predicate)? {
            TermRef::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    fn node_path<'a>(&self, term: TermRef<'a>) -> Option<&'a str> {
        match term {
            TermRef::NamedNode(node) => self.local(node.as_str()),
            _ => None,
        }
    }
}

/// Percent-escape bytes outside the unreserved set, keeping `/` separators.
fn escape(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for b in path.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b'~' | b'/' | b':') {
            out.push(b as char);
        } else {
            let _ = write!(out, "%{:02x}", b);
        }
    }
    out
}
