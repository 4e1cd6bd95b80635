//! Degree and betweenness centrality, and average path length.
//!
//! Betweenness is Brandes' algorithm over the directed, unweighted graph.
//! Shortest paths never leave a weakly-connected component, so the raw scores
//! computed once for the whole graph are also the raw scores of every
//! component; only the normalisation differs.

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use petgraph::Direction;

use super::transmission_graph::TransmissionGraph;

/// `degree / (n - 1)` for a component of `n` nodes.
pub fn normalized_degree(degree: usize, n: usize) -> f64 {
    if n < 2 {
        0.0
    } else {
        degree as f64 / (n as f64 - 1.0)
    }
}

/// Scale factor turning raw directed betweenness into `[0, 1]` for `n` nodes.
pub fn betweenness_scale(n: usize) -> f64 {
    if n < 3 {
        0.0
    } else {
        1.0 / ((n as f64 - 1.0) * (n as f64 - 2.0))
    }
}

/// Raw (unnormalised) betweenness for every node, indexed by `NodeIndex::index()`.
pub fn raw_betweenness(graph: &TransmissionGraph) -> Vec<f64> {
    let n = graph.node_count();
    let mut centrality = vec![0.0; n];

    let mut stack: Vec<usize> = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0_f64; n];
    let mut dist = vec![-1_i64; n];
    let mut delta = vec![0.0_f64; n];
    let mut queue = VecDeque::with_capacity(n);

    for s in 0..n {
        stack.clear();
        for p in predecessors.iter_mut() {
            p.clear();
        }
        sigma.iter_mut().for_each(|v| *v = 0.0);
        dist.iter_mut().for_each(|v| *v = -1);
        delta.iter_mut().for_each(|v| *v = 0.0);

        sigma[s] = 1.0;
        dist[s] = 0;
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            for w in graph
                .graph
                .neighbors_directed(NodeIndex::new(v), Direction::Outgoing)
            {
                let w = w.index();
                if dist[w] < 0 {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }
                if dist[w] == dist[v] + 1 {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
            }
        }

        while let Some(w) = stack.pop() {
            for &v in &predecessors[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != s {
                centrality[w] += delta[w];
            }
        }
    }

    centrality
}

/// Normalised betweenness of each member within its component.
pub fn component_betweenness(raw: &[f64], members: &[NodeIndex]) -> Vec<f64> {
    let scale = betweenness_scale(members.len());
    members.iter().map(|idx| raw[idx.index()] * scale).collect()
}

/// Mean shortest-path length over all ordered pairs of `members`, ignoring
/// edge direction.
///
/// `None` for fewer than two members or when some pair is unreachable.
pub fn average_path_length(graph: &TransmissionGraph, members: &[NodeIndex]) -> Option<f64> {
    let n = members.len();
    if n < 2 {
        return None;
    }
    let total_nodes = graph.node_count();
    let mut in_members = vec![false; total_nodes];
    for idx in members {
        in_members[idx.index()] = true;
    }

    let mut total: u64 = 0;
    let mut dist = vec![u64::MAX; total_nodes];
    let mut queue = VecDeque::new();
    for &source in members {
        dist.iter_mut().for_each(|d| *d = u64::MAX);
        dist[source.index()] = 0;
        queue.push_back(source);
        let mut reached = 1usize;
        while let Some(v) = queue.pop_front() {
            for w in graph.graph.neighbors_undirected(v) {
                let wi = w.index();
                if in_members[wi] && dist[wi] == u64::MAX {
                    dist[wi] = dist[v.index()] + 1;
                    total += dist[wi];
                    reached += 1;
                    queue.push_back(w);
                }
            }
        }
        if reached < n {
            return None;
        }
    }
    Some(total as f64 / (n as f64 * (n as f64 - 1.0)))
}
