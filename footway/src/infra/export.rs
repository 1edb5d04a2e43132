use std::{
    collections::HashMap,
    fmt::Display,
    hash::Hash,
    io::{self, Cursor, Write},
};

use crate::graph::WeightedGraph;

pub trait Export<G> {
    fn export<O: Write>(&self, graph: &G, out: &mut O) -> io::Result<()>;
}

/// Exporter to the [Graphviz DOT] language.
///
/// Vertices are named `v0`, `v1`, ... in the order they are encountered and
/// labeled by the vertex label function. Edges are labeled by the edge label
/// function applied to their weights.
///
/// [Graphviz DOT]: https://graphviz.org/doc/info/lang.html
pub struct Dot<V, W> {
    name: String,
    get_vertex_label: Box<dyn Fn(&V) -> String>,
    get_edge_label: Box<dyn Fn(&W) -> String>,
}

impl<V, W> Dot<V, W> {
    pub fn new<FV, FW>(name: Option<String>, get_vertex_label: FV, get_edge_label: FW) -> Self
    where
        FV: Fn(&V) -> String + 'static,
        FW: Fn(&W) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_vertex_label: Box::new(get_vertex_label),
            get_edge_label: Box::new(get_edge_label),
        }
    }

    pub fn to_string(&self, graph: &WeightedGraph<V, W>) -> String
    where
        V: Eq + Hash,
    {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }
}

impl<V: Display, W: Display> Dot<V, W> {
    pub fn with_display(name: Option<String>) -> Self {
        Self::new(name, |v| format!("{v}"), |w| format!("{w}"))
    }
}

impl<V, W> Export<WeightedGraph<V, W>> for Dot<V, W>
where
    V: Eq + Hash,
{
    fn export<O: Write>(&self, graph: &WeightedGraph<V, W>, out: &mut O) -> io::Result<()> {
        let mut indexer = Indexer::new();

        out.write_all(b"digraph ")?;
        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;

        for vertex in graph.vertices() {
            writeln!(
                out,
                "    v{} [label={:?}];",
                indexer.get(vertex),
                (self.get_vertex_label)(vertex)
            )?;
        }

        for (from, to, weight) in graph.edges() {
            writeln!(
                out,
                "    v{} -> v{} [label={:?}];",
                indexer.get(from),
                indexer.get(to),
                (self.get_edge_label)(weight)
            )?;
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}

#[derive(Debug)]
struct Indexer<'a, V>(HashMap<&'a V, usize>);

impl<'a, V: Eq + Hash> Indexer<'a, V> {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn get(&mut self, id: &'a V) -> usize {
        let new_idx = self.0.len();
        *self.0.entry(id).or_insert(new_idx)
    }
}
