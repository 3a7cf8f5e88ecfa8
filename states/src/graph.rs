use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    fmt::{Debug, Formatter},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    #[error("Cycle detected in dependency graph, from {:?}", .0)]
    CycleDetected(DepRoute<T>),
    #[error("Duplicate edge detected in dependency graph, from {:?} to {:?}", .0.route[0], .0.route[1])]
    DuplicateEdge(DepRoute<T>),
}

/// A path through the graph, first item is the start node.
pub struct DepRoute<T> {
    route: Vec<T>,
}

impl<T> DepRoute<T> {
    pub fn nodes(&self) -> &[T] {
        &self.route
    }
}

impl<T> Debug for DepRoute<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Some((last, init)) = self.route.split_last() else {
            return write!(f, "[]");
        };
        for item in init {
            write!(f, "{item:?} -> ")?;
        }
        write!(f, "{last:?}")
    }
}

/// Directed dependency graph. An edge `from -> to` means `to` depends on `from`.
#[derive(Debug)]
pub struct Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    edges: Vec<(Node, Node)>,

    // transitive dependents, invalidated whenever an edge is added
    dependents_cache: BTreeMap<Node, BTreeSet<Node>>,
}

impl<Node> Default for Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Node> Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            dependents_cache: BTreeMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            dependents_cache: BTreeMap::new(),
        }
    }

    pub fn route_to(&mut self, from: Node, to: Node) {
        self.edges.push((from, to));
        self.dependents_cache.clear();
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn in_degrees(&self) -> BTreeMap<Node, usize> {
        let mut degrees = BTreeMap::<Node, usize>::new();

        for (from, to) in &self.edges {
            degrees.entry(*from).or_insert(0);
            *degrees.entry(*to).or_insert(0) += 1;
        }

        degrees
    }

    /// Kahn's algorithm. Returns every node that appears on an edge, dependencies first.
    pub fn topology_sort(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        let mut degrees = self.in_degrees();
        let mut order = Vec::with_capacity(degrees.len());

        while !degrees.is_empty() {
            let Some(node) = degrees
                .iter()
                .find(|(_, degree)| **degree == 0)
                .map(|(node, _)| *node)
            else {
                let remaining: Vec<Node> = degrees.keys().copied().collect();
                let route = self.find_cycle(&remaining).unwrap_or_default();
                return Err(TopologyError::CycleDetected(DepRoute { route }));
            };

            degrees.remove(&node);
            order.push(node);

            for next in self.direct_dependents(node)? {
                if let Some(degree) = degrees.get_mut(&next) {
                    *degree -= 1;
                }
            }
        }

        Ok(order)
    }

    fn find_cycle(&self, nodes: &[Node]) -> Option<Vec<Node>> {
        let mut visited = BTreeSet::new();
        let mut on_path = BTreeSet::new();
        let mut path = Vec::new();
        let mut stack: Vec<(Node, std::vec::IntoIter<Node>)> = Vec::new();

        let neighbours = |node: Node| {
            self.direct_dependents(node)
                .unwrap_or_default()
                .into_iter()
                .filter(|n| nodes.contains(n))
                .collect::<Vec<_>>()
                .into_iter()
        };

        for &start in nodes {
            if visited.contains(&start) {
                continue;
            }

            stack.push((start, neighbours(start)));
            visited.insert(start);
            on_path.insert(start);
            path.push(start);

            while let Some((current, next)) = stack.last_mut() {
                if let Some(neighbour) = next.next() {
                    if on_path.contains(&neighbour) {
                        let pos = path.iter().position(|&x| x == neighbour)?;
                        let mut cycle = path[pos..].to_vec();
                        cycle.push(neighbour);
                        return Some(cycle);
                    }
                    if visited.insert(neighbour) {
                        on_path.insert(neighbour);
                        path.push(neighbour);
                        stack.push((neighbour, neighbours(neighbour)));
                    }
                } else {
                    let done = *current;
                    stack.pop();
                    on_path.remove(&done);
                    path.pop();
                }
            }
        }
        None
    }

    /// Every node that depends on `node`, directly or transitively.
    pub fn dependents(&mut self, node: Node) -> impl Iterator<Item = &Node> {
        if !self.dependents_cache.contains_key(&node) {
            let collected = self.collect_dependents(node);
            self.dependents_cache.insert(node, collected);
        }
        self.dependents_cache
            .get(&node)
            .into_iter()
            .flat_map(|set| set.iter())
    }

    fn direct_dependents(&self, node: Node) -> Result<BTreeSet<Node>, TopologyError<Node>> {
        let mut collected = BTreeSet::new();

        for (from, to) in &self.edges {
            if *from == node && !collected.insert(*to) {
                return Err(TopologyError::DuplicateEdge(DepRoute {
                    route: vec![node, *to],
                }));
            }
        }

        Ok(collected)
    }

    fn collect_dependents(&self, node: Node) -> BTreeSet<Node> {
        let mut collected = BTreeSet::new();
        let mut queue = VecDeque::from([node]);

        while let Some(current) = queue.pop_front() {
            for (from, to) in &self.edges {
                // the collected check also keeps a cyclic graph from looping forever
                if *from == current && collected.insert(*to) {
                    queue.push_back(*to);
                }
            }
        }

        collected
    }
}
