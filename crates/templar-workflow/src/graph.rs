use std::collections::{HashMap, HashSet};

/// Traversal structure derived from a workflow's nodes and edges.
#[derive(Debug, Clone)]
pub struct Graph {
  /// node_id -> downstream node_ids.
  adjacency: HashMap<String, Vec<String>>,
  /// node_id -> upstream node_ids.
  reverse_adjacency: HashMap<String, Vec<String>>,
  /// Nodes with no incoming edges, in sorted order.
  entry_points: Vec<String>,
  /// Nodes with more than one incoming edge.
  join_points: HashSet<String>,
}

impl Graph {
  /// Build a graph from node ids and `(from, to)` edge pairs.
  ///
  /// Edge endpoints are assumed valid; [`crate::Workflow::from_parsed`]
  /// rejects diagrams where they are not.
  pub fn new<'a, N>(node_ids: N, edges: &[(String, String)]) -> Self
  where
    N: IntoIterator<Item = &'a String>,
  {
    let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
    let mut reverse_adjacency: HashMap<String, Vec<String>> = HashMap::new();

    for node_id in node_ids {
      adjacency.entry(node_id.clone()).or_default();
      reverse_adjacency.entry(node_id.clone()).or_default();
    }

    for (from, to) in edges {
      adjacency.entry(from.clone()).or_default().push(to.clone());
      reverse_adjacency
        .entry(to.clone())
        .or_default()
        .push(from.clone());
    }

    let mut entry_points: Vec<String> = reverse_adjacency
      .iter()
      .filter(|(_, incoming)| incoming.is_empty())
      .map(|(id, _)| id.clone())
      .collect();
    entry_points.sort();

    let join_points: HashSet<String> = reverse_adjacency
      .iter()
      .filter(|(_, incoming)| incoming.len() > 1)
      .map(|(id, _)| id.clone())
      .collect();

    Self {
      adjacency,
      reverse_adjacency,
      entry_points,
      join_points,
    }
  }

  /// Nodes with no incoming edges.
  pub fn entry_points(&self) -> &[String] {
    &self.entry_points
  }

  /// Downstream nodes for a given node.
  pub fn downstream(&self, node_id: &str) -> &[String] {
    self
      .adjacency
      .get(node_id)
      .map(|v| v.as_slice())
      .unwrap_or(&[])
  }

  /// Upstream nodes for a given node.
  pub fn upstream(&self, node_id: &str) -> &[String] {
    self
      .reverse_adjacency
      .get(node_id)
      .map(|v| v.as_slice())
      .unwrap_or(&[])
  }

  /// Whether a node has multiple incoming edges.
  pub fn is_join_point(&self, node_id: &str) -> bool {
    self.join_points.contains(node_id)
  }

  pub fn join_points(&self) -> &HashSet<String> {
    &self.join_points
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
  }

  fn edge(from: &str, to: &str) -> (String, String) {
    (from.to_string(), to.to_string())
  }

  #[test]
  fn test_entry_and_join_points() {
    let nodes = ids(&["a", "b", "c", "d"]);
    let edges = vec![edge("a", "c"), edge("b", "c"), edge("c", "d")];
    let graph = Graph::new(nodes.iter(), &edges);

    assert_eq!(graph.entry_points(), &["a".to_string(), "b".to_string()]);
    assert!(graph.is_join_point("c"));
    assert!(!graph.is_join_point("d"));
    assert_eq!(graph.join_points().len(), 1);
  }

  #[test]
  fn test_adjacency_both_directions() {
    let nodes = ids(&["a", "b"]);
    let edges = vec![edge("a", "b")];
    let graph = Graph::new(nodes.iter(), &edges);

    assert_eq!(graph.downstream("a"), &["b".to_string()]);
    assert_eq!(graph.upstream("b"), &["a".to_string()]);
    assert!(graph.downstream("b").is_empty());
    assert!(graph.downstream("missing").is_empty());
  }

  #[test]
  fn test_isolated_nodes_are_entry_points() {
    let nodes = ids(&["solo"]);
    let graph = Graph::new(nodes.iter(), &[]);
    assert_eq!(graph.entry_points(), &["solo".to_string()]);
  }
}
