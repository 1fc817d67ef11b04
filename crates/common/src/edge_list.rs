use std::fs::File;
use std::io::BufRead;
use std::num::ParseIntError;
use std::path::Path;

use linear_arrangement::{Edge, Node, UndirectedGraph};
use thiserror::Error;

/// Failures reading an edge-list file.
#[derive(Error, Debug)]
pub enum ReadEdgeListError {
    /// A line did not hold exactly two tokens.
    #[error("invalid line (got {0})")]
    InvalidLine(String),
    /// A token was not an unsigned integer.
    #[error("parse int error")]
    ParseInt(#[from] ParseIntError),
    /// Reading the file failed.
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Read a `u v` per-line edge list into an undirected graph.
///
/// Vertices are 0-based; the vertex count is one past the largest endpoint.
pub fn read_edge_list<P>(path: P) -> Result<UndirectedGraph, ReadEdgeListError>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;

    let mut n = 0;
    let mut edges: Vec<Edge> = vec![];
    for line in std::io::BufReader::new(file).lines() {
        let line = line?;
        let mut tokens = line.split_ascii_whitespace();
        let Some(a) = tokens.next() else {
            return Err(ReadEdgeListError::InvalidLine(line));
        };
        let Some(b) = tokens.next() else {
            return Err(ReadEdgeListError::InvalidLine(line));
        };
        if tokens.next().is_some() {
            return Err(ReadEdgeListError::InvalidLine(line));
        }

        let u: usize = a.parse()?;
        let v: usize = b.parse()?;
        edges.push((Node::new(u), Node::new(v)));
        n = n.max(u + 1).max(v + 1);
    }

    let mut graph = UndirectedGraph::new(n);
    graph.add_edges(&edges, false, true);
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::{read_edge_list, ReadEdgeListError};
    use linear_arrangement::{GraphCore, Node};
    use std::io::Write;

    fn write_temp(content: &str) -> std::path::PathBuf {
        use std::sync::atomic::{AtomicU32, Ordering};
        static COUNTER: AtomicU32 = AtomicU32::new(0);

        let mut path = std::env::temp_dir();
        let unique = COUNTER.fetch_add(1, Ordering::Relaxed);
        path.push(format!("edge-list-test-{}-{unique}", std::process::id()));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_a_small_graph() {
        let path = write_temp("0 1\n1 2\n3 1\n");
        let g = read_edge_list(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_edges(), 3);
        assert!(g.has_edge(Node::new(1), Node::new(3)));
    }

    #[test]
    fn rejects_bad_lines() {
        let path = write_temp("0 1 2\n");
        let err = read_edge_list(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ReadEdgeListError::InvalidLine(_)));
    }
}
