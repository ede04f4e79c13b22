use crate::graph::adjacency::Graph;
use crate::graph::item::Item;

/// An iterator over the isolated nodes and edges of a graph.
///
/// Nodes with neither outgoing nor incoming edges appear as
/// [`Item::Node`](enum.Item.html); every other node contributes its
/// outgoing edges as [`Item::Edge`](enum.Item.html) triples. Items come
/// out by ascending origin, and by ascending destination within one
/// origin.
pub struct Items<V> {
    items: Vec<Item<V>>,
    offset: usize,
}

impl<V: Clone> Items<V> {
    pub(crate) fn new(graph: &Graph<V>) -> Self {
        let edges = graph.adjacency();
        let mut items = Vec::new();
        for (origin, destinations) in edges {
            if destinations.is_empty()
                && !edges
                    .values()
                    .any(|inner| inner.contains_key(origin.as_str()))
            {
                items.push(Item::Node(origin.clone()));
            } else {
                for (destination, value) in destinations {
                    items.push(Item::Edge(
                        origin.clone(),
                        destination.clone(),
                        value.clone(),
                    ));
                }
            }
        }
        Self { items, offset: 0 }
    }
}

impl<V: Clone> Iterator for Items<V> {
    type Item = Item<V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset == self.items.len() {
            None
        } else {
            let res = self.items[self.offset].clone();
            self.offset += 1;
            Some(res)
        }
    }
}
