//! Viewer input: a flat list of strings where each entry names either a node
//! (`node0`) or an edge between two nodes (`node1 to node0`).

use std::collections::HashMap;

use tracing::{debug, info};

use super::error::{EdgeNameError, ModelError};

pub const NODE_PREFIX: &str = "node";
pub const EDGE_CONJUNCTION: &str = " to ";

pub fn node_name(index: usize) -> String {
    format!("{NODE_PREFIX}{index}")
}

pub fn edge_name(source: &str, destination: &str) -> String {
    format!("{source}{EDGE_CONJUNCTION}{destination}")
}

pub fn is_edge(element: &str) -> bool {
    element.contains(EDGE_CONJUNCTION)
}

/// Source node of an edge name; `None` for a lone node name.
pub fn source(element: &str) -> Option<&str> {
    element
        .split_once(EDGE_CONJUNCTION)
        .map(|(source, _)| source)
}

/// Destination node of an edge name, or the element itself for a lone node name.
pub fn destination(element: &str) -> &str {
    element
        .split_once(EDGE_CONJUNCTION)
        .map_or(element, |(_, destination)| destination)
}

pub fn parse_edge(element: &str) -> Result<(&str, &str), EdgeNameError> {
    let (source, destination) = element
        .split_once(EDGE_CONJUNCTION)
        .ok_or_else(|| EdgeNameError::MissingConjunction(element.to_owned()))?;
    if source.trim().is_empty() || destination.trim().is_empty() {
        return Err(EdgeNameError::EmptyEndpoint(element.to_owned()));
    }
    Ok((source, destination))
}

/// Nodes and edges recovered from a [`ContentList`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedGraph {
    pub nodes: Vec<String>,
    pub edges: Vec<ResolvedEdge>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedEdge {
    pub from: usize,
    pub to: usize,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentList {
    elements: Vec<String>,
}

impl ContentList {
    /// Accepts user supplied elements, rejecting malformed edge names.
    pub fn from_elements(elements: Vec<String>) -> Result<Self, ModelError> {
        for (index, element) in elements.iter().enumerate() {
            if element.trim().is_empty() {
                return Err(ModelError::Element {
                    index,
                    error: EdgeNameError::EmptyEndpoint(element.clone()),
                });
            }
            if is_edge(element) {
                parse_edge(element).map_err(|error| ModelError::Element { index, error })?;
            }
        }
        Ok(Self { elements })
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends the next element of the chain and returns it.
    pub fn add_node(&mut self) -> &str {
        let next = self.elements.len();
        let element = match next.checked_sub(1) {
            None => node_name(next),
            Some(previous) => edge_name(&node_name(next), &node_name(previous)),
        };
        info!(%element, "appended element");
        self.elements.push(element);
        &self.elements[next]
    }

    pub fn resolve(&self) -> ResolvedGraph {
        let mut resolved = ResolvedGraph::default();
        let mut index_by_name = HashMap::new();

        for element in &self.elements {
            let from = source(element)
                .map(|name| intern(name, &mut index_by_name, &mut resolved.nodes));
            let to = intern(destination(element), &mut index_by_name, &mut resolved.nodes);

            if let Some(from) = from {
                resolved.edges.push(ResolvedEdge {
                    from,
                    to,
                    label: element.clone(),
                });
            }
        }

        debug!(
            nodes = resolved.nodes.len(),
            edges = resolved.edges.len(),
            "resolved content"
        );
        resolved
    }
}

fn intern<'a>(
    name: &'a str,
    index_by_name: &mut HashMap<&'a str, usize>,
    nodes: &mut Vec<String>,
) -> usize {
    *index_by_name.entry(name).or_insert_with(|| {
        nodes.push(name.to_owned());
        nodes.len() - 1
    })
}

#[cfg(test)]
mod tests {
    use super::{ContentList, EdgeNameError, destination, edge_name, is_edge, parse_edge, source};
    use crate::model::error::ModelError;

    #[test]
    fn edge_name_splits_back_into_endpoints() {
        let name = edge_name("node3", "node2");
        assert_eq!(name, "node3 to node2");
        assert!(is_edge(&name));
        assert_eq!(source(&name), Some("node3"));
        assert_eq!(destination(&name), "node2");
    }

    #[test]
    fn lone_node_name_has_no_source() {
        assert!(!is_edge("node0"));
        assert_eq!(source("node0"), None);
        assert_eq!(destination("node0"), "node0");
    }

    #[test]
    fn split_happens_at_first_conjunction() {
        assert_eq!(source("a to b to c"), Some("a"));
        assert_eq!(destination("a to b to c"), "b to c");
    }

    #[test]
    fn strict_parse_rejects_empty_endpoints() {
        assert_eq!(parse_edge("node1 to node0"), Ok(("node1", "node0")));
        assert_eq!(
            parse_edge(" to node0"),
            Err(EdgeNameError::EmptyEndpoint(" to node0".into()))
        );
        assert_eq!(
            parse_edge("node1"),
            Err(EdgeNameError::MissingConjunction("node1".into()))
        );
    }

    #[test]
    fn add_node_grows_a_chain() {
        let mut content = ContentList::default();
        assert_eq!(content.add_node(), "node0");
        assert_eq!(content.add_node(), "node1 to node0");
        assert_eq!(content.add_node(), "node2 to node1");
        assert_eq!(content.len(), 3);
    }

    #[test]
    fn resolve_interns_nodes_in_first_seen_order() {
        let mut content = ContentList::default();
        for _ in 0..4 {
            content.add_node();
        }
        let resolved = content.resolve();
        assert_eq!(resolved.nodes, vec!["node0", "node1", "node2", "node3"]);
        let pairs = resolved
            .edges
            .iter()
            .map(|edge| (edge.from, edge.to))
            .collect::<Vec<_>>();
        assert_eq!(pairs, vec![(1, 0), (2, 1), (3, 2)]);
        assert_eq!(resolved.edges[0].label, "node1 to node0");
    }

    #[test]
    fn resolve_of_empty_content_is_empty() {
        let resolved = ContentList::default().resolve();
        assert!(resolved.nodes.is_empty());
        assert!(resolved.edges.is_empty());
    }

    #[test]
    fn from_elements_reports_offending_index() {
        let error = ContentList::from_elements(vec!["node0".into(), "node1 to ".into()])
            .unwrap_err();
        assert_eq!(
            error,
            ModelError::Element {
                index: 1,
                error: EdgeNameError::EmptyEndpoint("node1 to ".into()),
            }
        );
    }
}
