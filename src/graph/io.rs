//! Text serialization.
//!
//! A graph is written one line per node, sorted by node identifier:
//! the origin, then for each destination (sorted as well) the separator,
//! the destination, the separator, and the value text. A node with no
//! outgoing edges produces a line holding only its identifier.

use crate::graph::adjacency::Graph;
use crate::graph::error::{GraphError, Result};
use itertools::Itertools;
use log::debug;
use std::fmt::Display;
use std::io::{BufRead, BufReader, Read, Write};
use std::str::FromStr;

impl<V> Graph<V> {
    /// Write the graph into `writer` in the line-oriented text format.
    ///
    /// Takes the writer by value; it is dropped (and so released) when
    /// the call returns, successfully or not. The separator must not
    /// occur inside node identifiers or value text, or a later load
    /// will split the lines differently.
    pub fn dump<W, F>(&self, mut writer: W, sep: &str, edge_to_str: F) -> std::io::Result<()>
    where
        W: Write,
        F: Fn(&V) -> String,
    {
        debug!(
            "dumping {} nodes and {} edges...",
            self.node_count(),
            self.edge_count()
        );
        for (origin, destinations) in self.adjacency() {
            writeln!(
                writer,
                "{}{}",
                origin,
                destinations
                    .iter()
                    .map(|(destination, value)| format!(
                        "{}{}{}{}",
                        sep,
                        destination,
                        sep,
                        edge_to_str(value)
                    ))
                    .join("")
            )?;
        }
        Ok(())
    }

    /// [`dump`](#method.dump) with the `:` separator and `Display`
    /// formatting.
    pub fn dump_default<W: Write>(&self, writer: W) -> std::io::Result<()>
    where
        V: Display,
    {
        self.dump(writer, ":", |value| value.to_string())
    }

    /// Replace this graph's contents with the graph read from `reader`.
    ///
    /// Each line is split on `sep`: the first token is the origin node
    /// (inserted even when it stands alone), and the remaining tokens
    /// are consumed as destination/value pairs; a dangling token after
    /// the last complete pair is ignored. Values go through
    /// `edge_from_str` and must satisfy the predicate. The reader is
    /// taken by value and released when the call returns. On any error
    /// the graph is left unchanged.
    pub fn load<R, F>(&mut self, reader: R, sep: &str, edge_from_str: F) -> Result<()>
    where
        R: Read,
        F: Fn(&str) -> Result<V>,
    {
        let mut staged = Graph::new(self.predicate().clone());
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let line = line.trim_end();
            let mut tokens = line.split(sep);
            let origin = tokens.next().unwrap_or_default().to_owned();
            staged.add_node(origin.clone());
            for (destination, raw) in tokens.tuples() {
                staged.checked_insert(
                    "load",
                    origin.clone(),
                    destination.to_owned(),
                    edge_from_str(raw)?,
                )?;
            }
        }
        debug!(
            "loaded {} nodes and {} edges",
            staged.node_count(),
            staged.edge_count()
        );
        *self = staged;
        Ok(())
    }

    /// [`load`](#method.load) with the `:` separator and `FromStr`
    /// parsing.
    pub fn load_default<R: Read>(&mut self, reader: R) -> Result<()>
    where
        V: FromStr,
    {
        self.load(reader, ":", |raw| {
            raw.parse()
                .map_err(|_| GraphError::UnparsableValue(raw.to_owned()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Item;
    use crate::types::ValuePredicate;
    use std::fs::File;
    use std::io::Seek;

    fn positive() -> ValuePredicate<i64> {
        ValuePredicate::new(Box::new(|&v| v > 0))
    }

    fn create_sample() -> Graph<i64> {
        Graph::from_items(
            positive(),
            vec![
                Item::edge("a", "b", 1),
                Item::edge("a", "c", 3),
                Item::edge("b", "a", 2),
                Item::edge("d", "b", 2),
                Item::edge("d", "c", 1),
                Item::node("e"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_dump() {
        let g = create_sample();
        let mut buffer = Vec::new();
        g.dump_default(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "a:b:1:c:3\nb:a:2\nc\nd:b:2:c:1\ne\n"
        );
    }

    #[test]
    fn test_dump_custom_separator_and_formatter() {
        let g = Graph::from_items(positive(), vec![Item::edge("a", "b", 1)]).unwrap();
        let mut buffer = Vec::new();
        g.dump(&mut buffer, ";", |v| format!("{:03}", v)).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "a;b;001\nb\n");
    }

    #[test]
    fn test_load() {
        let mut g: Graph<i64> = Graph::new(positive());
        g.load_default("a:b:1:c:3\nb:a:2\nc\nd:b:2:c:1\ne\n".as_bytes())
            .unwrap();
        assert_eq!(g, create_sample());
    }

    #[test]
    fn test_load_replaces_contents() {
        let mut g = create_sample();
        g.load_default("x:y:9\n".as_bytes()).unwrap();
        assert_eq!(g.node_count(), 2);
        assert!(!g.contains_node("a"));
        assert!(g.contains(&Item::edge("x", "y", 9)));
    }

    #[test]
    fn test_load_ignores_dangling_token() {
        let mut g: Graph<i64> = Graph::new(positive());
        g.load_default("a:b:1:c\n".as_bytes()).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert!(g.contains(&Item::edge("a", "b", 1)));
        assert!(!g.contains_node("c"));
    }

    #[test]
    fn test_load_unparsable_value() {
        let mut g = create_sample();
        let result = g.load_default("a:b:one\n".as_bytes());
        assert!(matches!(result, Err(GraphError::UnparsableValue(_))));
        // A failed load leaves the graph unchanged.
        assert_eq!(g, create_sample());
    }

    #[test]
    fn test_load_rejected_value() {
        let mut g = create_sample();
        let result = g.load_default("a:b:-1\n".as_bytes());
        assert!(matches!(
            result,
            Err(GraphError::RejectedValue { op: "load", .. })
        ));
        assert_eq!(g, create_sample());
    }

    #[test]
    fn test_round_trip() {
        let g = create_sample();
        let mut file = tempfile::tempfile().unwrap();
        g.dump_default(&mut file).unwrap();
        file.rewind().unwrap();
        let mut loaded: Graph<i64> = Graph::new(positive());
        loaded.load_default(file).unwrap();
        assert_eq!(loaded, g);
    }

    #[test]
    fn test_round_trip_named_file() {
        let g = create_sample();
        let path = tempfile::NamedTempFile::new().unwrap().into_temp_path();
        g.dump(File::create(&path).unwrap(), "|", |v| v.to_string())
            .unwrap();
        let mut loaded: Graph<i64> = Graph::new(positive());
        loaded
            .load(File::open(&path).unwrap(), "|", |raw| {
                raw.parse()
                    .map_err(|_| GraphError::UnparsableValue(raw.to_owned()))
            })
            .unwrap();
        assert_eq!(loaded, g);
    }
}
