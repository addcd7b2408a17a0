use crate::{common::ChangeMinMax, data_structures::IndexSet};
use std::{cmp::Reverse, collections::BinaryHeap, collections::VecDeque};

/// 辺番号付きの無向グラフ
#[derive(Debug, Clone)]
pub struct Graph {
    adj: Vec<Vec<(usize, usize)>>,
    edge_count: usize,
}

#[allow(dead_code)]
impl Graph {
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![vec![]; n],
            edge_count: 0,
        }
    }

    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::new(n);

        for &(u, v) in edges {
            graph.add_edge(u, v);
        }

        graph
    }

    /// 追加した辺の番号を返す
    pub fn add_edge(&mut self, u: usize, v: usize) -> usize {
        let id = self.edge_count;
        self.adj[u].push((v, id));
        self.adj[v].push((u, id));
        self.edge_count += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.adj.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj[v].iter().map(|&(u, _)| u)
    }

    /// (隣接頂点, 辺番号)
    pub fn edges(&self, v: usize) -> &[(usize, usize)] {
        &self.adj[v]
    }

    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WeightedEdge {
    pub to: usize,
    pub weight: i64,
    pub id: usize,
}

#[derive(Debug, Clone)]
pub struct WeightedGraph {
    adj: Vec<Vec<WeightedEdge>>,
    edge_count: usize,
}

/// Dijkstra法の結果
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    #[allow(dead_code)]
    pub dist: Vec<i64>,
    /// 最短路木における親方向の辺番号
    pub parent_edge: Vec<Option<usize>>,
    /// 距離が確定した順の頂点列
    pub order: Vec<usize>,
}

impl ShortestPaths {
    pub const UNREACHABLE: i64 = i64::MAX;
}

#[allow(dead_code)]
impl WeightedGraph {
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![vec![]; n],
            edge_count: 0,
        }
    }

    pub fn add_edge(&mut self, u: usize, v: usize, weight: i64) -> usize {
        let id = self.edge_count;
        self.adj[u].push(WeightedEdge { to: v, weight, id });
        self.adj[v].push(WeightedEdge { to: u, weight, id });
        self.edge_count += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.adj.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    pub fn edges(&self, v: usize) -> &[WeightedEdge] {
        &self.adj[v]
    }

    pub fn dijkstra(&self, start: usize) -> ShortestPaths {
        let n = self.len();
        let mut dist = vec![ShortestPaths::UNREACHABLE; n];
        let mut parent_edge = vec![None; n];
        let mut order = Vec::with_capacity(n);
        let mut done = vec![false; n];
        let mut queue = BinaryHeap::new();

        dist[start] = 0;
        queue.push(Reverse((0, start)));

        while let Some(Reverse((d, v))) = queue.pop() {
            if done[v] {
                continue;
            }

            done[v] = true;
            order.push(v);

            for e in self.adj[v].iter() {
                let next = d + e.weight;

                if dist[e.to].change_min(next) {
                    parent_edge[e.to] = Some(e.id);
                    queue.push(Reverse((next, e.to)));
                }
            }
        }

        ShortestPaths {
            dist,
            parent_edge,
            order,
        }
    }
}

/// 根付き木。頂点はBFS順に並ぶ
#[derive(Debug, Clone)]
pub struct RootedTree {
    pub root: usize,
    pub order: Vec<usize>,
    pub parent: Vec<Option<usize>>,
    pub depth: Vec<usize>,
}

#[allow(dead_code)]
impl RootedTree {
    pub fn new(graph: &Graph, root: usize) -> Self {
        let n = graph.len();
        let mut order = Vec::with_capacity(n);
        let mut parent = vec![None; n];
        let mut depth = vec![0; n];
        let mut visited = vec![false; n];
        let mut queue = VecDeque::new();

        visited[root] = true;
        queue.push_back(root);

        while let Some(v) = queue.pop_front() {
            order.push(v);

            for u in graph.neighbors(v) {
                if visited[u] {
                    continue;
                }

                visited[u] = true;
                parent[u] = Some(v);
                depth[u] = depth[v] + 1;
                queue.push_back(u);
            }
        }

        Self {
            root,
            order,
            parent,
            depth,
        }
    }

    /// 親配列から作る。`parents[v]` は根なら `None`
    pub fn from_parents(parents: &[Option<usize>]) -> Self {
        let n = parents.len();
        let mut graph = Graph::new(n);
        let mut root = 0;

        for (v, p) in parents.iter().enumerate() {
            match p {
                Some(p) => {
                    graph.add_edge(*p, v);
                }
                None => root = v,
            }
        }

        Self::new(&graph, root)
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn subtree_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![1; self.len()];

        for &v in self.order.iter().rev() {
            if let Some(p) = self.parent[v] {
                sizes[p] += sizes[v];
            }
        }

        sizes
    }

    pub fn children(&self) -> Vec<Vec<usize>> {
        let mut children = vec![vec![]; self.len()];

        for &v in self.order.iter() {
            if let Some(p) = self.parent[v] {
                children[p].push(v);
            }
        }

        children
    }
}

/// 全方位木DP
///
/// 部分木の値を `put_edge` で親側へ持ち上げ、`merge` で畳み込み、
/// `put_vertex` で頂点を付け加える
pub trait Rerooting {
    type Value: Clone;

    fn identity(&self) -> Self::Value;
    fn merge(&self, x: &Self::Value, y: &Self::Value) -> Self::Value;
    fn put_edge(&self, x: &Self::Value) -> Self::Value;
    fn put_vertex(&self, x: &Self::Value, v: usize) -> Self::Value;
}

/// 各頂点を根としたときの値を返す
pub fn reroot<R: Rerooting>(graph: &Graph, rerooting: &R) -> Vec<R::Value> {
    let n = graph.len();

    if n == 0 {
        return vec![];
    }

    let tree = RootedTree::new(graph, 0);

    // 下向き: 頂点 v を根とする部分木の値
    let mut sub = vec![rerooting.identity(); n];

    for &v in tree.order.iter().rev() {
        let mut acc = rerooting.identity();

        for u in graph.neighbors(v) {
            if Some(u) != tree.parent[v] {
                acc = rerooting.merge(&acc, &rerooting.put_edge(&sub[u]));
            }
        }

        sub[v] = rerooting.put_vertex(&acc, v);
    }

    // 上向き: 頂点 v の親を根とし、v 側を除いた部分木の値
    let mut up = vec![rerooting.identity(); n];
    let mut result = vec![rerooting.identity(); n];

    for &v in tree.order.iter() {
        let neighbors = graph.neighbors(v).collect::<Vec<_>>();
        let values = neighbors
            .iter()
            .map(|&u| {
                if Some(u) == tree.parent[v] {
                    rerooting.put_edge(&up[v])
                } else {
                    rerooting.put_edge(&sub[u])
                }
            })
            .collect::<Vec<_>>();

        let mut suffix = vec![rerooting.identity(); values.len() + 1];

        for i in (0..values.len()).rev() {
            suffix[i] = rerooting.merge(&values[i], &suffix[i + 1]);
        }

        result[v] = rerooting.put_vertex(&suffix[0], v);

        let mut prefix = rerooting.identity();

        for (i, &u) in neighbors.iter().enumerate() {
            if Some(u) != tree.parent[v] {
                let rest = rerooting.merge(&prefix, &suffix[i + 1]);
                up[u] = rerooting.put_vertex(&rest, v);
            }

            prefix = rerooting.merge(&prefix, &values[i]);
        }
    }

    result
}

/// 橋の判定 (lowlink)。`result[edge_id]` が橋ならtrue
pub fn bridges(graph: &Graph) -> Vec<bool> {
    let n = graph.len();
    let mut is_bridge = vec![false; graph.edge_count()];
    let mut ord = vec![usize::MAX; n];
    let mut low = vec![0; n];
    let mut time = 0;

    for root in 0..n {
        if ord[root] != usize::MAX {
            continue;
        }

        ord[root] = time;
        low[root] = time;
        time += 1;

        // (頂点, 親方向の辺番号, 次に見る隣接リストの位置)
        let mut stack: Vec<(usize, Option<usize>, usize)> = vec![(root, None, 0)];

        while let Some(top) = stack.last_mut() {
            let (v, parent_edge, cursor) = *top;
            top.2 += 1;

            if let Some(&(u, id)) = graph.edges(v).get(cursor) {
                if Some(id) == parent_edge {
                    continue;
                }

                if ord[u] == usize::MAX {
                    ord[u] = time;
                    low[u] = time;
                    time += 1;
                    stack.push((u, Some(id), 0));
                } else {
                    low[v] = low[v].min(ord[u]);
                }
            } else {
                stack.pop();

                if let (Some(id), Some(&(p, _, _))) = (parent_edge, stack.last()) {
                    low[p] = low[p].min(low[v]);

                    if low[v] > ord[p] {
                        is_bridge[id] = true;
                    }
                }
            }
        }
    }

    is_bridge
}

pub fn bfs_distances(graph: &Graph, start: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; graph.len()];
    let mut queue = VecDeque::new();
    dist[start] = Some(0);
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        let d = dist[v].unwrap_or(0);

        for u in graph.neighbors(v) {
            if dist[u].is_none() {
                dist[u] = Some(d + 1);
                queue.push_back(u);
            }
        }
    }

    dist
}

/// 補グラフの連結成分を O(n + m) で求める
pub fn complement_components(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let graph = Graph::from_edges(n, edges);
    let mut unvisited = IndexSet::full(n);
    let mut is_adjacent = vec![false; n];
    let mut components = vec![];

    while let Some(start) = unvisited.pop() {
        let mut component = vec![start];
        let mut queue = VecDeque::from([start]);

        while let Some(v) = queue.pop_front() {
            for u in graph.neighbors(v) {
                is_adjacent[u] = true;
            }

            // v と元のグラフで隣接していない未訪問頂点はすべて補グラフで隣接
            let next = unvisited
                .iter()
                .copied()
                .filter(|&u| !is_adjacent[u])
                .collect::<Vec<_>>();

            for u in graph.neighbors(v) {
                is_adjacent[u] = false;
            }

            for u in next {
                unvisited.remove(u);
                component.push(u);
                queue.push_back(u);
            }
        }

        components.push(component);
    }

    components
}

#[cfg(test)]
mod test {
    use super::{
        bfs_distances, bridges, complement_components, reroot, Graph, Rerooting, RootedTree,
        WeightedGraph,
    };
    use crate::data_structures::UnionFind;
    use itertools::Itertools;
    use rand::Rng;
    use rand_core::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn random_tree(n: usize, rng: &mut Pcg64Mcg) -> Graph {
        let mut graph = Graph::new(n);

        for v in 1..n {
            let p = rng.gen_range(0..v);
            graph.add_edge(p, v);
        }

        graph
    }

    #[test]
    fn dijkstra() {
        let mut graph = WeightedGraph::new(4);
        graph.add_edge(0, 1, 5);
        graph.add_edge(0, 2, 1);
        graph.add_edge(2, 1, 1);
        graph.add_edge(1, 3, 10);

        let paths = graph.dijkstra(0);
        assert_eq!(vec![0, 2, 1, 12], paths.dist);
        assert_eq!(vec![None, Some(2), Some(1), Some(3)], paths.parent_edge);
        assert_eq!(vec![0, 2, 1, 3], paths.order);
    }

    #[test]
    fn rooted_tree() {
        let graph = Graph::from_edges(5, &[(0, 1), (0, 2), (1, 3), (1, 4)]);
        let tree = RootedTree::new(&graph, 0);
        assert_eq!(vec![0, 1, 2, 3, 4], tree.order);
        assert_eq!(vec![5, 3, 1, 1, 1], tree.subtree_sizes());
        assert_eq!(vec![0, 1, 1, 2, 2], tree.depth);
        assert_eq!(vec![vec![1, 2], vec![3, 4], vec![], vec![], vec![]], tree.children());

        let tree = RootedTree::from_parents(&[Some(2), Some(2), None]);
        assert_eq!(2, tree.root);
        assert_eq!(vec![1, 1, 3], tree.subtree_sizes());
    }

    /// 根からの距離の総和
    struct DistanceSum;

    impl Rerooting for DistanceSum {
        type Value = (u64, u64);

        fn identity(&self) -> Self::Value {
            (0, 0)
        }

        fn merge(&self, x: &Self::Value, y: &Self::Value) -> Self::Value {
            (x.0 + y.0, x.1 + y.1)
        }

        fn put_edge(&self, x: &Self::Value) -> Self::Value {
            (x.0, x.1 + x.0)
        }

        fn put_vertex(&self, x: &Self::Value, _v: usize) -> Self::Value {
            (x.0 + 1, x.1)
        }
    }

    #[test]
    fn reroot_matches_bfs() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);

        for n in 1..30 {
            let graph = random_tree(n, &mut rng);
            let results = reroot(&graph, &DistanceSum);

            for v in 0..n {
                let expected = bfs_distances(&graph, v)
                    .into_iter()
                    .map(|d| d.unwrap() as u64)
                    .sum::<u64>();
                assert_eq!((n as u64, expected), results[v]);
            }
        }
    }

    #[test]
    fn bridges_of_graph() {
        // 0-1-2 の三角形 + 2-3, 3-4
        let graph = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)]);
        assert_eq!(vec![false, false, false, true, true], bridges(&graph));

        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let tree = random_tree(20, &mut rng);
        assert!(bridges(&tree).into_iter().all(|b| b));
    }

    #[test]
    fn complement() {
        let edges = [(0, 1), (2, 3), (2, 1), (3, 1), (1, 4)];
        let sizes = complement_components(5, &edges)
            .into_iter()
            .map(|c| c.len())
            .sorted()
            .collect_vec();
        assert_eq!(vec![1, 4], sizes);

        assert_eq!(1, complement_components(3, &[]).len());
        assert_eq!(3, complement_components(3, &[(0, 1), (1, 2), (0, 2)]).len());
    }

    #[test]
    fn components_match_union_find() {
        let mut rng = Pcg64Mcg::seed_from_u64(5);

        for _ in 0..20 {
            let n = rng.gen_range(1..=15);
            let m = rng.gen_range(0..=n);
            let edges = (0..m)
                .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
                .collect_vec();

            let graph = Graph::from_edges(n, &edges);
            let mut uf = UnionFind::new(n);

            for &(u, v) in edges.iter() {
                uf.unite(u, v);
            }

            let mut seen = vec![false; n];
            let mut components = 0;

            for v in 0..n {
                if seen[v] {
                    continue;
                }

                components += 1;

                for (u, d) in bfs_distances(&graph, v).into_iter().enumerate() {
                    if d.is_some() {
                        seen[u] = true;
                        assert!(uf.same(u, v));
                    }
                }
            }

            assert_eq!(components, uf.group_count());
        }
    }
}
