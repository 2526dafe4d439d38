use glam::{IVec2, Vec2};
use log::trace;

use crate::geometry::distance;
use crate::graph::NavGraph;
use crate::pathfinder::Pathfinder;
use crate::types::{GraphError, PathfinderConfig, SearchStats};

/// Pursuit-tuned pathfinder for continuously re-targeted agents.
///
/// Wraps a [`Pathfinder`] with two extra gates on recomputation: the target
/// must be within `aggro_range` of the agent, and a step counter lets
/// callers stagger eligible think ticks across many concurrent agents. Both
/// trade path freshness for CPU cost; the cached path stays readable in
/// between.
pub struct EnemyPathfinder {
    inner: Pathfinder,
    aggro_range: f32,
    /// Agent grid cell as of the last search.
    position: IVec2,
    current_step: u32,
    was_in_range: bool,
}

impl EnemyPathfinder {
    pub fn new(cfg: PathfinderConfig) -> Self {
        Self {
            inner: Pathfinder::new(cfg),
            aggro_range: f32::INFINITY,
            position: IVec2::ZERO,
            current_step: 0,
            was_in_range: false,
        }
    }

    /// Radius within which the target is worth pathing toward. Defaults to
    /// infinity (always aggro).
    pub fn set_aggro_range(&mut self, d: f32) {
        self.aggro_range = d;
    }

    pub fn aggro_range(&self) -> f32 {
        self.aggro_range
    }

    /// Rebuild the graph from a walkability bitmap at grid resolution 1.
    pub fn set_map(&mut self, tiles: &[Vec<bool>]) -> Result<(), GraphError> {
        self.inner.generate_graph(tiles, 1.0)
    }

    pub fn generate_graph(
        &mut self,
        tiles: &[Vec<bool>],
        resolution_mult: f32,
    ) -> Result<(), GraphError> {
        self.inner.generate_graph(tiles, resolution_mult)
    }

    /// Defer this agent's next eligible recomputation by one think tick.
    /// Calling it `n` times skips the next `n` eligible ticks.
    pub fn increase_step(&mut self) {
        self.current_step += 1;
    }

    /// Agent grid cell recorded at the last search.
    pub fn grid_position(&self) -> IVec2 {
        self.position
    }

    pub fn set_timer(&mut self, t: f32) {
        self.inner.set_timer(t);
    }

    pub fn graph(&self) -> &NavGraph {
        self.inner.graph()
    }

    pub fn path(&self) -> &[Vec2] {
        self.inner.path()
    }

    pub fn total_cost(&self) -> f32 {
        self.inner.total_cost()
    }

    pub fn stats(&self) -> SearchStats {
        self.inner.stats()
    }

    /// Per-frame tick with current agent and target world positions.
    ///
    /// Outside aggro range no search is ever issued, even when the think
    /// interval has elapsed; on the leave edge the cached path is dropped.
    /// On the enter edge a search runs immediately, bypassing both the
    /// timer and the step counter. Otherwise the base think-interval logic
    /// applies, with the step counter consuming eligible ticks first.
    pub fn update(&mut self, dt: f32, enemy_pos: Vec2, player_pos: Vec2) {
        if distance(enemy_pos, player_pos) > self.aggro_range {
            if self.was_in_range {
                self.inner.path.clear();
                trace!("target left aggro range, dropping path");
            }
            self.was_in_range = false;
            return;
        }
        let entered = !self.was_in_range;
        self.was_in_range = true;

        self.inner.curr_time += dt;
        if self.inner.curr_time <= self.inner.cfg.think_interval && !entered {
            return;
        }
        self.inner.curr_time = 0.0;

        if !entered && self.current_step > 0 {
            self.current_step -= 1;
            return;
        }

        let Some(start) = self.inner.graph.node_at_world(enemy_pos) else {
            return;
        };
        let Some(target) = self.inner.graph.node_at_world(player_pos) else {
            return;
        };
        let node = self.inner.graph.node(start);
        self.position = IVec2::new(node.x, node.y);
        self.inner.start = Some(start);
        self.inner.target = Some(target);
        self.update_ranges(enemy_pos);
        self.inner.find_path();
    }

    /// Mark each node's `in_range` flag by distance from the agent. The
    /// base search only admits in-range nodes, which bounds worst-case
    /// search cost for distant agents.
    fn update_ranges(&mut self, enemy_pos: Vec2) {
        let vd = self.inner.graph.vertex_distance();
        for node in &mut self.inner.graph.nodes {
            let center = Vec2::new(node.x as f32, node.y as f32) * vd;
            node.in_range = distance(center, enemy_pos) <= self.aggro_range;
        }
    }
}

impl Default for EnemyPathfinder {
    fn default() -> Self {
        Self::new(PathfinderConfig::default())
    }
}
