use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use tracing::info;

use super::content::ContentList;
use super::graph::{DemoGraph, Node};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: usize,
    pub to: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl From<&DemoGraph> for GraphSnapshot {
    fn from(graph: &DemoGraph) -> Self {
        Self {
            nodes: graph.nodes().to_vec(),
            edges: graph
                .edges()
                .iter()
                .map(|&(from, to)| EdgeRecord { from, to })
                .collect(),
        }
    }
}

impl GraphSnapshot {
    pub fn into_graph(self) -> Result<DemoGraph> {
        let edges = self.edges.into_iter().map(|edge| (edge.from, edge.to)).collect();
        DemoGraph::from_parts(self.nodes, edges).context("snapshot describes an invalid graph")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSnapshot {
    pub elements: Vec<String>,
}

impl From<&ContentList> for ContentSnapshot {
    fn from(content: &ContentList) -> Self {
        Self {
            elements: content.elements().to_vec(),
        }
    }
}

impl ContentSnapshot {
    pub fn into_content(self) -> Result<ContentList> {
        ContentList::from_elements(self.elements).context("snapshot holds an invalid element")
    }
}

pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("snapshot {} is not valid JSON", path.display()))?;
    info!(path = %path.display(), "loaded snapshot");
    Ok(snapshot)
}

pub fn save<T: Serialize>(path: &Path, snapshot: &T) -> Result<()> {
    let raw = serde_json::to_string_pretty(snapshot).context("failed to encode snapshot")?;
    fs::write(path, raw).with_context(|| format!("failed to write snapshot {}", path.display()))?;
    info!(path = %path.display(), "saved snapshot");
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    use super::{ContentSnapshot, GraphSnapshot, load, save};
    use crate::model::content::ContentList;
    use crate::model::graph::DemoGraph;

    #[test]
    fn graph_survives_a_save_and_load() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut graph = DemoGraph::with_root();
        for _ in 0..6 {
            graph.add_node(&mut rng);
        }
        graph.toggle_highlight([2, 4]);

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.json");
        save(&path, &GraphSnapshot::from(&graph)).unwrap();
        let restored = load::<GraphSnapshot>(&path).unwrap().into_graph().unwrap();

        assert_eq!(restored, graph);
    }

    #[test]
    fn highlight_flag_defaults_to_off() {
        let raw = r#"{"nodes":[{"name":"a"},{"name":"b"}],"edges":[{"from":1,"to":0}]}"#;
        let snapshot: GraphSnapshot = serde_json::from_str(raw).unwrap();
        let graph = snapshot.into_graph().unwrap();
        assert!(graph.nodes().iter().all(|node| !node.highlighted));
        assert_eq!(graph.edges(), &[(1, 0)]);
    }

    #[test]
    fn invalid_graph_snapshot_is_rejected() {
        let snapshot: GraphSnapshot =
            serde_json::from_str(r#"{"nodes":[{"name":"a"}],"edges":[{"from":0,"to":0}]}"#)
                .unwrap();
        assert!(snapshot.into_graph().is_err());
    }

    #[test]
    fn snapshot_with_a_name_later_nodes_would_take_is_rejected() {
        let raw = r#"{"nodes":[{"name":"node 2"},{"name":"b"}]}"#;
        let snapshot: GraphSnapshot = serde_json::from_str(raw).unwrap();
        let error = snapshot.into_graph().unwrap_err();
        assert!(format!("{error:#}").contains("reserved for node 2"));
    }

    #[test]
    fn content_snapshot_checks_elements() {
        let good = ContentSnapshot {
            elements: vec!["node0".into(), "node1 to node0".into()],
        };
        let content = good.into_content().unwrap();
        assert_eq!(content.len(), 2);

        let bad = ContentSnapshot {
            elements: vec!["node0".into(), "   ".into()],
        };
        assert!(bad.into_content().is_err());

        let round = ContentSnapshot::from(&ContentList::default());
        assert!(round.elements.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");
        let error = load::<GraphSnapshot>(&path).unwrap_err();
        assert!(error.to_string().contains("failed to read snapshot"));
    }
}
