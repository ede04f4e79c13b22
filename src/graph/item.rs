use crate::graph::Graph;
use crate::types::NodeId;

/// A single node or edge of a graph.
///
/// Construction takes a sequence of these, containment queries inspect
/// one, and iteration yields them back: isolated nodes as
/// [`Item::Node`](enum.Item.html), everything else as edge triples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item<V> {
    /// A bare node.
    Node(NodeId),
    /// An `(origin, destination, value)` edge.
    Edge(NodeId, NodeId, V),
}

impl<V> Item<V> {
    pub fn node<N: Into<NodeId>>(node: N) -> Self {
        Item::Node(node.into())
    }

    pub fn edge<O, D>(origin: O, destination: D, value: V) -> Self
    where
        O: Into<NodeId>,
        D: Into<NodeId>,
    {
        Item::Edge(origin.into(), destination.into(), value)
    }
}

/// The right-hand side of a union.
///
/// `From` conversions let call sites pass a node name, an edge triple,
/// or a graph directly to [`Graph::union`](struct.Graph.html#method.union)
/// and [`Graph::merge`](struct.Graph.html#method.merge).
#[derive(Debug)]
pub enum Operand<V> {
    /// A bare node, added if absent.
    Node(NodeId),
    /// An edge, written over any existing value for its pair.
    Edge(NodeId, NodeId, V),
    /// A whole graph; the receiver wins on node and edge conflicts.
    Graph(Graph<V>),
}

impl<V> From<&str> for Operand<V> {
    fn from(node: &str) -> Self {
        Operand::Node(node.to_owned())
    }
}

impl<V> From<String> for Operand<V> {
    fn from(node: String) -> Self {
        Operand::Node(node)
    }
}

impl<V, O, D> From<(O, D, V)> for Operand<V>
where
    O: Into<NodeId>,
    D: Into<NodeId>,
{
    fn from((origin, destination, value): (O, D, V)) -> Self {
        Operand::Edge(origin.into(), destination.into(), value)
    }
}

impl<V> From<Graph<V>> for Operand<V> {
    fn from(graph: Graph<V>) -> Self {
        Operand::Graph(graph)
    }
}

impl<V: Clone> From<&Graph<V>> for Operand<V> {
    fn from(graph: &Graph<V>) -> Self {
        Operand::Graph(graph.clone())
    }
}
