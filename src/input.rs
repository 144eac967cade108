use crate::{Graph, GraphError, Result};
use hashbrown::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Reads a graph from a file.
///
/// One edge per line, in format "origin destination weight", fields
/// separated by whitespace. Vertices are plain strings.
///
/// - blank lines and lines starting with `#` are skipped,
/// - lines with fewer than three fields are skipped,
/// - extra fields after the weight are ignored.
///
/// <div class="warning">
///
/// > Directedness is detected, not declared: the graph is undirected only if
/// > every edge is paired with its reverse somewhere in the file. An
/// > undirected edge therefore has to be listed in both directions.
///
/// </div>
///
/// Example input:
/// ```text
/// # undirected triangle
/// A B 1
/// B A 1
/// B C 2.5
/// C B 2.5
/// A C 4
/// C A 4
/// ```
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Graph<String>> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<Graph<String>> {
    from_reader(input.as_bytes())
}

/// This is equivalent to [`from_file`], but reads from any buffered reader.
pub fn from_reader<R: BufRead>(reader: R) -> Result<Graph<String>> {
    let mut edges = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<_> = line.split_whitespace().collect();
        if parts.len() < 3 {
            continue;
        }
        let weight: f64 = parts[2].parse().map_err(|_| GraphError::Parse {
            line: i + 1,
            reason: format!("weight '{}' is not a number", parts[2]),
        })?;
        edges.push((parts[0].to_string(), parts[1].to_string(), weight));
    }

    let directed = !pairs_up(&edges);
    debug!(edges = edges.len(), directed, "graph loaded");
    Ok(Graph::from_edges(directed, edges))
}

/// Every edge cancels against an earlier unmatched reverse edge, or waits
/// for one. Undirected if nothing is left waiting.
fn pairs_up(edges: &[(String, String, f64)]) -> bool {
    let mut unmatched: HashSet<(&str, &str)> = HashSet::new();
    for (u, v, _) in edges {
        if !unmatched.remove(&(v.as_str(), u.as_str())) {
            unmatched.insert((u.as_str(), v.as_str()));
        }
    }
    unmatched.is_empty()
}
