use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdgeNameError {
    #[error("`{0}` is not an edge name (expected `<source> to <destination>`)")]
    MissingConjunction(String),
    #[error("edge name `{0}` has an empty endpoint")]
    EmptyEndpoint(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("edge {from} -> {to} points outside the {node_count} known nodes")]
    EdgeOutOfRange {
        from: usize,
        to: usize,
        node_count: usize,
    },
    #[error("edge on node {0} connects the node to itself")]
    SelfLoop(usize),
    #[error("duplicate edge {from} -> {to}")]
    DuplicateEdge { from: usize, to: usize },
    #[error("edge {from} -> {to} runs from an older node to a newer one")]
    EdgeToNewerNode { from: usize, to: usize },
    #[error("node name `{0}` is used more than once")]
    DuplicateName(String),
    #[error("node {index} is named `{name}`, which is reserved for node {reserved_for}")]
    ReservedName {
        index: usize,
        name: String,
        reserved_for: usize,
    },
    #[error("element {index}: {error}")]
    Element { index: usize, error: EdgeNameError },
}
