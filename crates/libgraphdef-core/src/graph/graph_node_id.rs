/// Identity of a [`GraphNode`](crate::graph::GraphNode).
///
/// Assigned from 1 upward at the moment a node is accepted.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(transparent)]
pub struct GraphNodeId(u32);

impl GraphNodeId {
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// Identity of a [`Parameter`](crate::graph::Parameter).
///
/// Counted separately from graph nodes, from 1 upward.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(transparent)]
pub struct ParamId(u32);

impl ParamId {
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}
