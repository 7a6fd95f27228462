//! JSON-LD export.
//!
//! Flat context (`@vocab` plus one prefix, both bound to the vocabulary
//! namespace), one `@graph` entry per subject. Node `@id`s are compact IRIs
//! (`core:match/3788741`); `@base` is avoided because the namespace ends in
//! `#`. Output is sorted: nodes by id, then properties, then values, whatever
//! order the store iterates in.

use super::store::Graph;
use super::term::XSD_NAMESPACE;
use crate::config::GraphConfig;
use crate::error::GraphError;
use oxrdf::vocab::rdf;
use oxrdf::{NamedNodeRef, SubjectRef, TermRef};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

pub fn context(config: &GraphConfig) -> Value {
    let mut ctx = Map::new();
    ctx.insert("@vocab".into(), Value::String(config.namespace.clone()));
    ctx.insert(config.prefix.clone(), Value::String(config.namespace.clone()));
    ctx.insert("xsd".into(), Value::String(XSD_NAMESPACE.to_string()));
    Value::Object(ctx)
}

pub fn to_jsonld(graph: &Graph, config: &GraphConfig) -> Value {
    let node_id = |iri: NamedNodeRef<'_>| match graph.local(iri.as_str()) {
        Some(path) => format!("{}:{}", config.prefix, path),
        None => iri.as_str().to_string(),
    };
    let term = |iri: NamedNodeRef<'_>| {
        graph.local(iri.as_str()).unwrap_or(iri.as_str()).to_string()
    };
    let datatype = |iri: NamedNodeRef<'_>| match iri.as_str().strip_prefix(XSD_NAMESPACE) {
        Some(name) => format!("xsd:{}", name),
        None => iri.as_str().to_string(),
    };

    let mut subjects: BTreeMap<String, BTreeMap<String, Vec<Value>>> = BTreeMap::new();
    for triple in graph.iter() {
        let SubjectRef::NamedNode(subject) = triple.subject else { continue };
        let (key, value) = if triple.predicate == rdf::TYPE {
            let TermRef::NamedNode(class) = triple.object else { continue };
            ("@type".to_string(), Value::String(term(class)))
        } else {
            let value = match triple.object {
                TermRef::NamedNode(target) => json!({ "@id": node_id(target) }),
                TermRef::Literal(lit) => json!({
                    "@value": lit.value(),
                    "@type": datatype(lit.datatype()),
                }),
                _ => continue,
            };
            (term(triple.predicate), value)
        };
        subjects
            .entry(node_id(subject))
            .or_default()
            .entry(key)
            .or_default()
            .push(value);
    }

    let nodes: Vec<Value> = subjects
        .into_iter()
        .map(|(id, properties)| {
            let mut node = Map::new();
            node.insert("@id".into(), Value::String(id));
            for (key, mut values) in properties {
                values.sort_by_cached_key(|v| v.to_string());
                for value in values {
                    push_value(&mut node, key.clone(), value);
                }
            }
            Value::Object(node)
        })
        .collect();

    json!({
        "@context": context(config),
        "@graph": nodes,
    })
}

pub fn to_jsonld_string(graph: &Graph, config: &GraphConfig) -> Result<String, GraphError> {
    Ok(serde_json::to_string_pretty(&to_jsonld(graph, config))?)
}

/// Single values stay scalar; a second value turns the entry into an array.
fn push_value(node: &mut Map<String, Value>, key: String, value: Value) {
    match node.get_mut(&key) {
        None => {
            node.insert(key, value);
        }
        Some(Value::Array(values)) => values.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::vocab::xsd;
    use insta::assert_json_snapshot;

    fn sample() -> Graph {
        let mut g = Graph::default();
        g.add_type("match/1", "Match");
        g.add_value("match/1", "id", "1", None);
        g.add_link("match/1", "teams_home", "team/10");
        g.add_type("team/10", "Team");
        g.add_link("team/10", "players", "player/7");
        g.add_link("team/10", "players", "player/8");
        g.add_type("event/e1", "Event");
        g.add_type("event/e1", "Shot");
        g.add_value("event/e1", "x", 108.0, Some(xsd::FLOAT));
        g
    }

    #[test]
    fn test_jsonld_document_shape() {
        let doc = to_jsonld(&sample(), &GraphConfig::default());
        assert_json_snapshot!(doc, @r###"
        {
          "@context": {
            "@vocab": "https://w3id.org/football-cdf/core#",
            "core": "https://w3id.org/football-cdf/core#",
            "xsd": "http://www.w3.org/2001/XMLSchema#"
          },
          "@graph": [
            {
              "@id": "core:event/e1",
              "@type": [
                "Event",
                "Shot"
              ],
              "x": {
                "@type": "xsd:float",
                "@value": "108.0"
              }
            },
            {
              "@id": "core:match/1",
              "@type": "Match",
              "id": {
                "@type": "xsd:string",
                "@value": "1"
              },
              "teams_home": {
                "@id": "core:team/10"
              }
            },
            {
              "@id": "core:team/10",
              "@type": "Team",
              "players": [
                {
                  "@id": "core:player/7"
                },
                {
                  "@id": "core:player/8"
                }
              ]
            }
          ]
        }
        "###);
    }

    #[test]
    fn test_custom_prefix_and_string_output() {
        let config = GraphConfig {
            prefix: "fb".into(),
            ..GraphConfig::default()
        };
        let text = to_jsonld_string(&sample(), &config).unwrap();
        assert!(text.contains("\"fb:match/1\""));
        assert!(text.contains("\"fb\": \"https://w3id.org/football-cdf/core#\""));
        assert_eq!(text, to_jsonld_string(&sample(), &config).unwrap());
    }

    #[test]
    fn test_empty_graph() {
        let doc = to_jsonld(&Graph::default(), &GraphConfig::default());
        assert_eq!(doc["@graph"], json!([]));
    }
}
