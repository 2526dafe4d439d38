use std::time::Instant;

use glam::Vec2;
use log::trace;

use crate::graph::NavGraph;
use crate::types::{GraphError, PathfinderConfig, SearchStats};

/// A* shortest-path search over a [`NavGraph`], throttled to one full
/// recomputation per think interval.
///
/// The graph is built once per map via [`generate_graph`](Self::generate_graph);
/// start and target are set per request, and [`update`](Self::update) is
/// polled every frame. Between recomputations the previous path stays
/// readable (stale-path tolerance, not a correctness guarantee).
///
/// Search scratch (G/H scores, back-links) lives on the graph's nodes, so
/// every pathfinder owns its graph exclusively; see the crate docs for the
/// sharing rules.
pub struct Pathfinder {
    pub(crate) cfg: PathfinderConfig,
    pub(crate) graph: NavGraph,
    pub(crate) start: Option<usize>,
    pub(crate) target: Option<usize>,
    // Open frontier kept as an insertion-ordered vector; pop scans for the
    // lowest G+H so equal scores break toward the earliest-inserted node.
    open: Vec<usize>,
    open_flag: Vec<bool>,
    closed: Vec<bool>,
    pub(crate) path: Vec<Vec2>,
    pub(crate) curr_time: f32,
    pub(crate) stats: SearchStats,
}

impl Pathfinder {
    pub fn new(cfg: PathfinderConfig) -> Self {
        Self {
            cfg,
            graph: NavGraph::default(),
            start: None,
            target: None,
            open: Vec::new(),
            open_flag: Vec::new(),
            closed: Vec::new(),
            path: Vec::new(),
            curr_time: 0.0,
            stats: SearchStats::default(),
        }
    }

    /// Rebuild the navigation graph from a walkability bitmap.
    ///
    /// Fully replaces the previous graph: start/target node ids and any
    /// in-flight path are invalidated and cleared.
    pub fn generate_graph(
        &mut self,
        tiles: &[Vec<bool>],
        resolution_mult: f32,
    ) -> Result<(), GraphError> {
        self.graph = NavGraph::generate(tiles, resolution_mult)?;
        self.start = None;
        self.target = None;
        self.path.clear();
        Ok(())
    }

    pub fn graph(&self) -> &NavGraph {
        &self.graph
    }

    /// Set the search start to the node at grid coordinates. Silent no-op
    /// when out of bounds.
    pub fn set_start_node(&mut self, x: i32, y: i32) {
        if let Some(id) = self.graph.node_id(x, y) {
            self.start = Some(id);
        }
    }

    /// Set the search target to the node at grid coordinates. Silent no-op
    /// when out of bounds.
    pub fn set_end_node(&mut self, x: i32, y: i32) {
        if let Some(id) = self.graph.node_id(x, y) {
            self.target = Some(id);
        }
    }

    /// Accumulate `dt`; once the think interval elapses, reset the timer
    /// and run one full search, whether or not start/target changed.
    pub fn update(&mut self, dt: f32) {
        self.curr_time += dt;
        if self.curr_time > self.cfg.think_interval {
            self.curr_time = 0.0;
            self.find_path();
        }
    }

    /// Overwrite the think timer, e.g. to stagger recomputations across
    /// many agents.
    pub fn set_timer(&mut self, t: f32) {
        self.curr_time = t;
    }

    /// The cached waypoint sequence in world coordinates, head = next step.
    /// Empty when no search has succeeded yet or the target is unreachable.
    pub fn path(&self) -> &[Vec2] {
        &self.path
    }

    /// Summed segment lengths of the cached path.
    pub fn total_cost(&self) -> f32 {
        self.path
            .windows(2)
            .map(|w| crate::geometry::distance(w[0], w[1]))
            .sum()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Full A* over the graph. Clears the cached path when either endpoint
    /// is unset or the open frontier empties without reaching the target.
    pub(crate) fn find_path(&mut self) {
        let (Some(start), Some(target)) = (self.start, self.target) else {
            self.path.clear();
            return;
        };
        let timer = self.cfg.enable_timing.then(Instant::now);
        self.stats.searches += 1;
        self.stats.expanded = 0;

        let n = self.graph.len();
        for node in &mut self.graph.nodes {
            node.start_distance = f32::INFINITY;
            node.end_distance = f32::INFINITY;
            node.came_from = None;
        }
        self.open.clear();
        self.open_flag.clear();
        self.open_flag.resize(n, false);
        self.closed.clear();
        self.closed.resize(n, false);

        self.graph.nodes[start].start_distance = 0.0;
        self.graph.nodes[start].end_distance = self.calc_h_value(start, target);
        self.open.push(start);
        self.open_flag[start] = true;

        while let Some(current) = self.queue_pop() {
            if current == target {
                self.reconstruct_path(start, target);
                self.finish_search(timer);
                trace!("path found: {} waypoints", self.path.len());
                return;
            }
            self.closed[current] = true;
            self.stats.expanded += 1;

            let current_g = self.graph.nodes[current].start_distance;
            let (cx, cy) = (self.graph.nodes[current].x, self.graph.nodes[current].y);
            for i in 0..self.graph.nodes[current].neighbours.len() {
                let nid = self.graph.nodes[current].neighbours[i];
                let node = &self.graph.nodes[nid];
                if self.closed[nid] || !node.walkable || !node.in_range {
                    continue;
                }
                let step =
                    Vec2::new((node.x - cx) as f32, (node.y - cy) as f32).length();
                let tentative = current_g + step;
                if tentative < node.start_distance {
                    let h = self.calc_h_value(nid, target);
                    let node = &mut self.graph.nodes[nid];
                    node.start_distance = tentative;
                    node.end_distance = h;
                    node.came_from = Some(current);
                    if !self.open_flag[nid] {
                        self.open.push(nid);
                        self.open_flag[nid] = true;
                    }
                }
            }
        }

        // Frontier exhausted: target unreachable, a normal outcome.
        self.path.clear();
        self.finish_search(timer);
        trace!("no path to target");
    }

    /// Straight-line distance to the target in grid units. Admissible and
    /// consistent on an 8-connected uniform grid, so the search is optimal.
    fn calc_h_value(&self, id: usize, target: usize) -> f32 {
        let a = self.graph.node(id);
        let b = self.graph.node(target);
        Vec2::new((b.x - a.x) as f32, (b.y - a.y) as f32).length()
    }

    /// Pop the open node with the lowest G+H. Strictly-lower comparison on
    /// an order-preserving vector keeps ties with the earliest insertion.
    fn queue_pop(&mut self) -> Option<usize> {
        if self.open.is_empty() {
            return None;
        }
        let f = |id: usize| {
            let node = self.graph.node(id);
            node.start_distance + node.end_distance
        };
        let mut best = 0;
        let mut best_f = f(self.open[0]);
        for (i, &id) in self.open.iter().enumerate().skip(1) {
            let fi = f(id);
            if fi < best_f {
                best_f = fi;
                best = i;
            }
        }
        let id = self.open.remove(best);
        self.open_flag[id] = false;
        Some(id)
    }

    /// Walk the back-links from target to start, reverse, and convert grid
    /// coordinates to world-space centers. The start node is the first
    /// waypoint.
    fn reconstruct_path(&mut self, start: usize, target: usize) {
        let mut ids = vec![target];
        let mut current = target;
        while current != start {
            let Some(prev) = self.graph.node(current).came_from else {
                self.path.clear();
                return;
            };
            current = prev;
            ids.push(current);
        }
        ids.reverse();
        self.path = ids.into_iter().map(|id| self.graph.world_pos(id)).collect();
    }

    fn finish_search(&mut self, timer: Option<Instant>) {
        if let Some(t) = timer {
            self.stats.last_search_ms = t.elapsed().as_secs_f64() * 1000.0;
        }
    }
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::new(PathfinderConfig::default())
    }
}
