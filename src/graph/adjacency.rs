use crate::graph::error::{GraphError, Result};
use crate::graph::item::{Item, Operand};
use crate::graph::iter::Items;
use crate::types::{NodeId, ValuePredicate};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// A directed, edge-labeled graph.
///
/// The graph's only state is an adjacency map from origin node to a map
/// of destination node to edge value, plus the value predicate supplied
/// at construction. Every node that appears anywhere is a key of the
/// outer map, with an empty inner map when it has no outgoing edges.
/// Each ordered `(origin, destination)` pair holds at most one value;
/// writing to an existing pair overwrites. Derived facts (counts,
/// degrees, predecessors) are always recomputed from the map.
pub struct Graph<V> {
    predicate: ValuePredicate<V>,
    edges: BTreeMap<NodeId, BTreeMap<NodeId, V>>,
}

impl<V> Graph<V> {
    /// Create a new empty graph with the given value predicate.
    pub fn new(predicate: ValuePredicate<V>) -> Self {
        Self {
            predicate,
            edges: BTreeMap::new(),
        }
    }

    /// Create a graph from a left-to-right sequence of nodes and edges.
    ///
    /// A bare node that is already present and an edge whose
    /// `(origin, destination)` pair is already present are both
    /// construction errors, as is an edge value the predicate rejects.
    pub fn from_items<I>(predicate: ValuePredicate<V>, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = Item<V>>,
    {
        let mut graph = Self::new(predicate);
        for item in items {
            match item {
                Item::Node(node) => {
                    if graph.contains_node(&node) {
                        return Err(GraphError::DuplicateNode {
                            op: "from_items",
                            node,
                        });
                    }
                    graph.edges.insert(node, BTreeMap::new());
                }
                Item::Edge(origin, destination, value) => {
                    if graph.contains_edge(&origin, &destination) {
                        return Err(GraphError::DuplicateEdge {
                            op: "from_items",
                            origin,
                            destination,
                        });
                    }
                    graph.checked_insert("from_items", origin, destination, value)?;
                }
            }
        }
        Ok(graph)
    }

    pub fn predicate(&self) -> &ValuePredicate<V> {
        &self.predicate
    }

    /// Insert a node with no edges. A no-op if the node is present.
    pub fn add_node<N: Into<NodeId>>(&mut self, node: N) {
        self.edges.entry(node.into()).or_insert_with(BTreeMap::new);
    }

    /// Insert an edge, creating both endpoints if absent and writing
    /// over any existing value for the pair.
    pub fn insert_edge<O, D>(&mut self, origin: O, destination: D, value: V) -> Result<()>
    where
        O: Into<NodeId>,
        D: Into<NodeId>,
    {
        self.checked_insert("insert_edge", origin.into(), destination.into(), value)
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// The number of edges in the graph (not the number of nodes).
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum()
    }

    pub fn out_degree(&self, node: &str) -> Result<usize> {
        self.edges
            .get(node)
            .map(BTreeMap::len)
            .ok_or_else(|| GraphError::UnknownNode {
                op: "out_degree",
                node: node.to_owned(),
            })
    }

    pub fn in_degree(&self, node: &str) -> Result<usize> {
        if !self.contains_node(node) {
            return Err(GraphError::UnknownNode {
                op: "in_degree",
                node: node.to_owned(),
            });
        }
        Ok(self
            .edges
            .values()
            .filter(|destinations| destinations.contains_key(node))
            .count())
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.edges.contains_key(node)
    }

    pub fn contains_edge(&self, origin: &str, destination: &str) -> bool {
        self.edges
            .get(origin)
            .map_or(false, |destinations| destinations.contains_key(destination))
    }

    /// The value stored for the `(origin, destination)` edge.
    pub fn edge_value(&self, origin: &str, destination: &str) -> Result<&V> {
        self.edges
            .get(origin)
            .and_then(|destinations| destinations.get(destination))
            .ok_or_else(|| GraphError::UnknownEdge {
                op: "edge_value",
                origin: origin.to_owned(),
                destination: destination.to_owned(),
            })
    }

    /// Remove a node together with every edge from or into it.
    /// A no-op if the node is absent.
    pub fn remove_node(&mut self, node: &str) {
        if self.edges.remove(node).is_none() {
            return;
        }
        for destinations in self.edges.values_mut() {
            destinations.remove(node);
        }
    }

    /// Remove one edge. A no-op if the edge is absent.
    pub fn remove_edge(&mut self, origin: &str, destination: &str) {
        if let Some(destinations) = self.edges.get_mut(origin) {
            destinations.remove(destination);
        }
    }

    /// Remove all nodes and edges; the predicate is retained.
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    /// Merge the operand into this graph in place.
    ///
    /// A node operand is added if absent; an edge operand is written
    /// over any existing value for its pair; for a graph operand this
    /// graph wins on node and edge conflicts. Values entering through
    /// the operand must satisfy this graph's predicate, and a rejected
    /// value leaves the graph untouched.
    pub fn merge<R: Into<Operand<V>>>(&mut self, rhs: R) -> Result<()> {
        match rhs.into() {
            Operand::Node(node) => {
                self.add_node(node);
                Ok(())
            }
            Operand::Edge(origin, destination, value) => {
                self.checked_insert("merge", origin, destination, value)
            }
            Operand::Graph(graph) => {
                for (origin, destinations) in &graph.edges {
                    for (destination, value) in destinations {
                        if !self.contains_edge(origin, destination)
                            && !(self.predicate.f())(value)
                        {
                            return Err(GraphError::RejectedValue {
                                op: "merge",
                                origin: origin.clone(),
                                destination: destination.clone(),
                            });
                        }
                    }
                }
                for (origin, destinations) in graph.edges {
                    self.edges
                        .entry(origin.clone())
                        .or_insert_with(BTreeMap::new);
                    for (destination, value) in destinations {
                        if !self.contains_edge(&origin, &destination) {
                            self.insert_unchecked(origin.clone(), destination, value);
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

impl<V: PartialEq> Graph<V> {
    /// Whether the graph contains the item: a bare node, or an edge
    /// whose stored value equals the item's value.
    pub fn contains(&self, item: &Item<V>) -> bool {
        match item {
            Item::Node(node) => self.contains_node(node),
            Item::Edge(origin, destination, value) => self
                .edges
                .get(origin)
                .and_then(|destinations| destinations.get(destination))
                .map_or(false, |stored| stored == value),
        }
    }
}

impl<V: Clone> Graph<V> {
    /// The destination-to-value map of a node's outgoing edges.
    ///
    /// Returns a snapshot; mutating it does not touch the graph.
    pub fn successors(&self, node: &str) -> Result<BTreeMap<NodeId, V>> {
        self.edges
            .get(node)
            .cloned()
            .ok_or_else(|| GraphError::UnknownNode {
                op: "successors",
                node: node.to_owned(),
            })
    }

    /// The origin-to-value map of a node's incoming edges.
    ///
    /// Returns a snapshot; mutating it does not touch the graph.
    pub fn predecessors(&self, destination: &str) -> Result<BTreeMap<NodeId, V>> {
        if !self.contains_node(destination) {
            return Err(GraphError::UnknownNode {
                op: "predecessors",
                node: destination.to_owned(),
            });
        }
        Ok(self
            .edges
            .iter()
            .filter_map(|(origin, destinations)| {
                destinations
                    .get(destination)
                    .map(|value| (origin.clone(), value.clone()))
            })
            .collect())
    }

    /// A new graph with the same predicate and node set and every edge
    /// flipped.
    pub fn reverse(&self) -> Self {
        let mut graph = Self::new(self.predicate.clone());
        for origin in self.edges.keys() {
            graph.add_node(origin.clone());
        }
        for (origin, destinations) in &self.edges {
            for (destination, value) in destinations {
                graph.insert_unchecked(destination.clone(), origin.clone(), value.clone());
            }
        }
        graph
    }

    /// The induced subgraph restricted to the allowed nodes.
    ///
    /// Allowed names absent from this graph are not present in the
    /// result.
    pub fn natural_subgraph<I>(&self, allowed: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
    {
        let allowed: BTreeSet<NodeId> = allowed.into_iter().map(Into::into).collect();
        let edges = self
            .edges
            .iter()
            .filter(|(origin, _)| allowed.contains(origin.as_str()))
            .map(|(origin, destinations)| {
                (
                    origin.clone(),
                    destinations
                        .iter()
                        .filter(|(destination, _)| allowed.contains(destination.as_str()))
                        .map(|(destination, value)| (destination.clone(), value.clone()))
                        .collect(),
                )
            })
            .collect();
        Self {
            predicate: self.predicate.clone(),
            edges,
        }
    }

    /// An iterator over the isolated nodes and edges of the graph, by
    /// ascending origin and then ascending destination.
    ///
    /// Each call takes an independent snapshot, so traversals restart
    /// from the beginning and are unaffected by later mutation.
    pub fn iter(&self) -> Items<V> {
        Items::new(self)
    }

    /// The union of this graph and the operand, as a new graph.
    ///
    /// Union is commutative up to conflict resolution: on node and edge
    /// conflicts with a graph operand, the left-hand graph wins.
    pub fn union<R: Into<Operand<V>>>(&self, rhs: R) -> Result<Self> {
        let mut graph = self.clone();
        graph.merge(rhs)?;
        Ok(graph)
    }
}

// pub(crate) methods.
impl<V> Graph<V> {
    pub(crate) fn adjacency(&self) -> &BTreeMap<NodeId, BTreeMap<NodeId, V>> {
        &self.edges
    }

    pub(crate) fn checked_insert(
        &mut self,
        op: &'static str,
        origin: NodeId,
        destination: NodeId,
        value: V,
    ) -> Result<()> {
        if !(self.predicate.f())(&value) {
            return Err(GraphError::RejectedValue {
                op,
                origin,
                destination,
            });
        }
        self.insert_unchecked(origin, destination, value);
        Ok(())
    }
}

// private methods.
impl<V> Graph<V> {
    fn insert_unchecked(&mut self, origin: NodeId, destination: NodeId, value: V) {
        self.edges
            .entry(destination.clone())
            .or_insert_with(BTreeMap::new);
        self.edges
            .entry(origin)
            .or_insert_with(BTreeMap::new)
            .insert(destination, value);
    }

    fn covered_by(&self, other: &Self) -> bool
    where
        V: PartialEq,
    {
        self.edges.iter().all(|(origin, destinations)| {
            other.edges.get(origin).map_or(false, |others| {
                destinations
                    .iter()
                    .all(|(destination, value)| others.get(destination) == Some(value))
            })
        })
    }
}

impl<V: Clone> Clone for Graph<V> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            edges: self.edges.clone(),
        }
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for Graph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("predicate", &self.predicate)
            .field("edges", &self.edges)
            .finish()
    }
}

impl<V: PartialEq> PartialEq for Graph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges
    }
}

impl<V: Eq> Eq for Graph<V> {}

/// Subset ordering: `g1 <= g2` when every node of `g1` is a node of
/// `g2` and every edge of `g1` is stored with an equal value in `g2`.
/// Graphs where neither covers the other are incomparable.
impl<V: PartialEq> PartialOrd for Graph<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.covered_by(other), other.covered_by(self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

impl<'a, V: Clone> IntoIterator for &'a Graph<V> {
    type Item = Item<V>;
    type IntoIter = Items<V>;

    fn into_iter(self) -> Items<V> {
        self.iter()
    }
}

impl<'a, V: Clone, R: Into<Operand<V>>> std::ops::Add<R> for &'a Graph<V> {
    type Output = Result<Graph<V>>;

    fn add(self, rhs: R) -> Self::Output {
        self.union(rhs)
    }
}
