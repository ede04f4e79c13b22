use crate::graph::adjacency::Graph;
use itertools::Itertools;
use std::fmt;

/// Renders the graph one origin per line, origins and destinations
/// ascending, each destination with its value in parentheses.
impl<V: fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nGraph:\n  {}",
            self.adjacency()
                .iter()
                .map(|(origin, destinations)| format!(
                    "{}:{}",
                    origin,
                    destinations
                        .iter()
                        .map(|(destination, value)| format!(" {}({})", destination, value))
                        .join(",")
                ))
                .join("\n  ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Item;
    use crate::types::ValuePredicate;

    #[test]
    fn test_display() {
        let g = Graph::from_items(
            ValuePredicate::new(Box::new(|&v: &i64| v > 0)),
            vec![
                Item::edge("a", "b", 1),
                Item::edge("a", "c", 3),
                Item::edge("b", "a", 2),
                Item::node("e"),
            ],
        )
        .unwrap();
        assert_eq!(
            g.to_string(),
            "\nGraph:\n  a: b(1), c(3)\n  b: a(2)\n  c:\n  e:"
        );
    }

    #[test]
    fn test_display_empty() {
        let g: Graph<i64> = Graph::new(ValuePredicate::new(Box::new(|_| true)));
        assert_eq!(g.to_string(), "\nGraph:\n  ");
    }
}
