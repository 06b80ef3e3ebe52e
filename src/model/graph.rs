use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::ModelError;
use super::pick::pick_index;

const SECOND_CONNECTION_PROBABILITY: f64 = 0.5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    #[serde(default)]
    pub highlighted: bool,
}

impl Node {
    /// Index whose generated name this is, if the name follows the `node N` pattern.
    fn generated_index(name: &str) -> Option<usize> {
        let index = name.strip_prefix("node ")?.parse::<usize>().ok()?;
        (format!("node {index}") == name).then_some(index)
    }

    fn named(index: usize) -> Self {
        Self {
            name: format!("node {index}"),
            highlighted: false,
        }
    }
}

/// Outcome of [`DemoGraph::add_node`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddedNode {
    pub index: usize,
    pub targets: Vec<usize>,
}

/// A growing graph of named nodes where every edge runs from a newer node to an older one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoGraph {
    nodes: Vec<Node>,
    edges: Vec<(usize, usize)>,
}

impl DemoGraph {
    pub fn with_root() -> Self {
        Self {
            nodes: vec![Node::named(0)],
            edges: Vec::new(),
        }
    }

    /// Builds a graph from stored parts. Names must be unique, and a `node N` name may only
    /// sit at index N so that later additions never reuse it. Edges must run from a newer
    /// node to an older one, at most once per pair.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<(usize, usize)>) -> Result<Self, ModelError> {
        let mut names = BTreeSet::new();
        for (index, node) in nodes.iter().enumerate() {
            if !names.insert(node.name.as_str()) {
                return Err(ModelError::DuplicateName(node.name.clone()));
            }
            if let Some(reserved_for) = Node::generated_index(&node.name)
                && reserved_for != index
            {
                return Err(ModelError::ReservedName {
                    index,
                    name: node.name.clone(),
                    reserved_for,
                });
            }
        }

        let node_count = nodes.len();
        let mut seen = BTreeSet::new();
        for &(from, to) in &edges {
            if from >= node_count || to >= node_count {
                return Err(ModelError::EdgeOutOfRange {
                    from,
                    to,
                    node_count,
                });
            }
            if from == to {
                return Err(ModelError::SelfLoop(from));
            }
            if from < to {
                return Err(ModelError::EdgeToNewerNode { from, to });
            }
            if !seen.insert((from, to)) {
                return Err(ModelError::DuplicateEdge { from, to });
            }
        }

        Ok(Self { nodes, edges })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Appends a node and connects it to up to two distinct existing nodes.
    pub fn add_node<R: Rng + ?Sized>(&mut self, rng: &mut R) -> AddedNode {
        let existing = self.nodes.len();
        let taken = (0..existing).collect::<Vec<_>>();
        let index = pick_index(rng, existing, &taken).unwrap_or(existing);
        self.nodes.push(Node::named(index));

        let mut targets = Vec::with_capacity(2);
        if let Some(last_existing) = existing.checked_sub(1) {
            if let Some(first) = pick_index(rng, last_existing, &[index]) {
                targets.push(first);
            }

            if !targets.is_empty() && rng.random_bool(SECOND_CONNECTION_PROBABILITY) {
                let mut avoid = vec![index];
                avoid.extend_from_slice(&targets);
                match pick_index(rng, last_existing, &avoid) {
                    Some(second) => targets.push(second),
                    None => debug!(index, "no candidate left for a second connection"),
                }
            }
        }

        for &target in &targets {
            self.edges.push((index, target));
        }

        info!(
            node = %self.nodes[index].name,
            ?targets,
            "added node"
        );
        AddedNode { index, targets }
    }

    /// Flips the highlight flag of every listed node once.
    pub fn toggle_highlight(&mut self, indices: impl IntoIterator<Item = usize>) -> usize {
        let unique = indices.into_iter().collect::<BTreeSet<_>>();
        let mut toggled = 0;
        for index in unique {
            if let Some(node) = self.nodes.get_mut(index) {
                node.highlighted = !node.highlighted;
                toggled += 1;
            }
        }
        toggled
    }

    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        let mut neighbors = self
            .edges
            .iter()
            .filter_map(|&(from, to)| {
                if from == index {
                    Some(to)
                } else if to == index {
                    Some(from)
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{DemoGraph, Node};
    use crate::model::error::ModelError;

    #[test]
    fn root_graph_has_single_unconnected_node() {
        let graph = DemoGraph::with_root();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.nodes()[0].name, "node 0");
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn new_node_takes_next_index_and_name() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut graph = DemoGraph::with_root();
        for expected in 1..20 {
            let added = graph.add_node(&mut rng);
            assert_eq!(added.index, expected);
            assert_eq!(graph.nodes()[expected].name, format!("node {expected}"));
        }
    }

    #[test]
    fn first_node_of_empty_graph_has_no_connections() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut graph = DemoGraph::default();
        let added = graph.add_node(&mut rng);
        assert_eq!(added.index, 0);
        assert!(added.targets.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn second_node_connects_only_to_root() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut graph = DemoGraph::with_root();
            let added = graph.add_node(&mut rng);
            assert_eq!(added.targets, vec![0]);
        }
    }

    #[test]
    fn targets_are_distinct_existing_nodes() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut graph = DemoGraph::with_root();
        let mut saw_two = false;
        let mut saw_one = false;
        for _ in 0..200 {
            let before = graph.node_count();
            let added = graph.add_node(&mut rng);
            assert!(!added.targets.is_empty());
            assert!(added.targets.len() <= 2);
            for &target in &added.targets {
                assert!(target < before);
                assert_ne!(target, added.index);
            }
            if let [first, second] = added.targets[..] {
                assert_ne!(first, second);
                saw_two = true;
            } else {
                saw_one = true;
            }
        }
        assert!(saw_one && saw_two);
    }

    #[test]
    fn toggle_twice_restores_state_and_ignores_unknown() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut graph = DemoGraph::with_root();
        graph.add_node(&mut rng);

        assert_eq!(graph.toggle_highlight([1, 1, 9]), 1);
        assert!(graph.nodes()[1].highlighted);
        assert!(!graph.nodes()[0].highlighted);

        graph.toggle_highlight([1]);
        assert!(!graph.nodes()[1].highlighted);
    }

    #[test]
    fn neighbors_cover_both_directions() {
        let nodes = (0..3)
            .map(|index| Node {
                name: format!("node {index}"),
                highlighted: false,
            })
            .collect();
        let graph = DemoGraph::from_parts(nodes, vec![(1, 0), (2, 0), (2, 1)]).unwrap();
        assert_eq!(graph.neighbors(0), vec![1, 2]);
        assert_eq!(graph.neighbors(2), vec![0, 1]);
    }

    #[test]
    fn from_parts_rejects_bad_edges() {
        let nodes = vec![
            Node {
                name: "a".into(),
                highlighted: false,
            },
            Node {
                name: "b".into(),
                highlighted: false,
            },
        ];
        assert_eq!(
            DemoGraph::from_parts(nodes.clone(), vec![(0, 2)]),
            Err(ModelError::EdgeOutOfRange {
                from: 0,
                to: 2,
                node_count: 2
            })
        );
        assert_eq!(
            DemoGraph::from_parts(nodes.clone(), vec![(1, 1)]),
            Err(ModelError::SelfLoop(1))
        );
        assert_eq!(
            DemoGraph::from_parts(nodes.clone(), vec![(1, 0), (1, 0)]),
            Err(ModelError::DuplicateEdge { from: 1, to: 0 })
        );
        assert_eq!(
            DemoGraph::from_parts(nodes, vec![(0, 1), (1, 0)]),
            Err(ModelError::EdgeToNewerNode { from: 0, to: 1 })
        );
    }

    fn plain(name: &str) -> Node {
        Node {
            name: name.into(),
            highlighted: false,
        }
    }

    #[test]
    fn from_parts_rejects_repeated_names() {
        assert_eq!(
            DemoGraph::from_parts(vec![plain("a"), plain("b"), plain("a")], Vec::new()),
            Err(ModelError::DuplicateName("a".into()))
        );
    }

    #[test]
    fn from_parts_keeps_generated_names_free_for_later_nodes() {
        assert_eq!(
            DemoGraph::from_parts(vec![plain("node 2"), plain("b")], Vec::new()),
            Err(ModelError::ReservedName {
                index: 0,
                name: "node 2".into(),
                reserved_for: 2,
            })
        );

        let mut rng = StdRng::seed_from_u64(1);
        let mut graph =
            DemoGraph::from_parts(vec![plain("node 0"), plain("b"), plain("node 02")], Vec::new())
                .unwrap();
        graph.add_node(&mut rng);
        let names = graph.nodes().iter().map(|node| node.name.as_str()).collect::<BTreeSet<_>>();
        assert_eq!(names.len(), graph.node_count());
        assert!(names.contains("node 3"));
    }
}
