use glam::Vec2;
use log::debug;

use crate::types::GraphError;

/// One grid cell of the navigation graph.
///
/// `start_distance`/`end_distance`/`came_from` are per-search scratch (the
/// G score, H score and back-link of A*) and are reset before every search.
/// `neighbours` holds arena indices of adjacent walkable nodes; the wiring
/// is fixed when the graph is generated and is not retracted if `walkable`
/// is toggled afterwards — rebuild the graph wholesale on map changes.
#[derive(Clone, Debug)]
pub struct Node {
    pub x: i32,
    pub y: i32,
    pub walkable: bool,
    /// Range gate for pursuit agents; `true` means admissible. Defaults to
    /// `true` so plain pathfinders search the whole graph.
    pub in_range: bool,
    /// G score: accumulated cost from the start node.
    pub start_distance: f32,
    /// H score: heuristic estimate to the target node.
    pub end_distance: f32,
    pub came_from: Option<usize>,
    pub neighbours: Vec<usize>,
}

/// Grid of navigation nodes built from a walkability bitmap.
///
/// Nodes live in a flat arena and reference each other by index, so a
/// rebuild invalidates every outstanding node id at once instead of leaving
/// dangling links.
#[derive(Clone, Debug, Default)]
pub struct NavGraph {
    pub(crate) nodes: Vec<Node>,
    width: usize,
    height: usize,
    vertex_distance: f32,
}

impl NavGraph {
    /// Build a graph from `tiles` (`tiles[y][x]`, `true` = walkable) at the
    /// given resolution multiplier. Multipliers below 1 downsample, merging
    /// multiple source cells per node; a merged node is walkable only if
    /// every covered cell is.
    pub fn generate(tiles: &[Vec<bool>], resolution_mult: f32) -> Result<Self, GraphError> {
        if !resolution_mult.is_finite() || resolution_mult <= 0.0 {
            return Err(GraphError::InvalidResolution(resolution_mult));
        }
        let src_h = tiles.len();
        let src_w = tiles.first().map_or(0, Vec::len);
        if src_w == 0 {
            return Err(GraphError::EmptyGrid);
        }
        for (row, cells) in tiles.iter().enumerate() {
            if cells.len() != src_w {
                return Err(GraphError::RaggedGrid {
                    row,
                    got: cells.len(),
                    expected: src_w,
                });
            }
        }

        let width = (src_w as f32 * resolution_mult) as usize;
        let height = (src_h as f32 * resolution_mult) as usize;
        if width == 0 || height == 0 {
            return Err(GraphError::DegenerateResolution {
                mult: resolution_mult,
                width: src_w,
                height: src_h,
            });
        }

        let mut nodes = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                nodes.push(Node {
                    x: x as i32,
                    y: y as i32,
                    walkable: covered_cells_walkable(tiles, x, y, resolution_mult, src_w, src_h),
                    in_range: true,
                    start_distance: f32::INFINITY,
                    end_distance: f32::INFINITY,
                    came_from: None,
                    neighbours: Vec::new(),
                });
            }
        }

        // 8-connected wiring between walkable cells.
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let id = (y as usize) * width + x as usize;
                if !nodes[id].walkable {
                    continue;
                }
                let mut neighbours = Vec::new();
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let (nx, ny) = (x + dx, y + dy);
                        if nx < 0 || ny < 0 || nx >= width as i32 || ny >= height as i32 {
                            continue;
                        }
                        let nid = (ny as usize) * width + nx as usize;
                        if nodes[nid].walkable {
                            neighbours.push(nid);
                        }
                    }
                }
                nodes[id].neighbours = neighbours;
            }
        }

        debug!(
            "navigation graph generated: {width}x{height} nodes from {src_w}x{src_h} bitmap (mult {resolution_mult})"
        );
        Ok(Self {
            nodes,
            width,
            height,
            vertex_distance: 1.0 / resolution_mult,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// World-space distance between adjacent node centers (the inverse of
    /// the resolution multiplier).
    pub fn vertex_distance(&self) -> f32 {
        self.vertex_distance
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: usize) -> &Node {
        &self.nodes[id]
    }

    /// Arena index of the node at grid coordinates, if in bounds.
    pub fn node_id(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// World-space center of a node.
    pub fn world_pos(&self, id: usize) -> Vec2 {
        let node = &self.nodes[id];
        Vec2::new(node.x as f32, node.y as f32) * self.vertex_distance
    }

    /// Nearest node to a world position, if it maps inside the grid.
    pub fn node_at_world(&self, pos: Vec2) -> Option<usize> {
        let grid = (pos / self.vertex_distance).round();
        self.node_id(grid.x as i32, grid.y as i32)
    }
}

fn covered_cells_walkable(
    tiles: &[Vec<bool>],
    x: usize,
    y: usize,
    mult: f32,
    src_w: usize,
    src_h: usize,
) -> bool {
    let x0 = (x as f32 / mult) as usize;
    let y0 = (y as f32 / mult) as usize;
    let x1 = (((x + 1) as f32 / mult).ceil() as usize).clamp(x0 + 1, src_w);
    let y1 = (((y + 1) as f32 / mult).ceil() as usize).clamp(y0 + 1, src_h);

    (y0..y1).all(|sy| (x0..x1).all(|sx| tiles[sy][sx]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(w: usize, h: usize) -> Vec<Vec<bool>> {
        vec![vec![true; w]; h]
    }

    #[test]
    fn test_generate_dims_and_centers() {
        let g = NavGraph::generate(&open_grid(4, 3), 1.0).unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.len(), 12);
        let id = g.node_id(2, 1).unwrap();
        assert_eq!(g.world_pos(id), Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_generate_marks_walkable_from_bitmap() {
        let mut tiles = open_grid(3, 3);
        tiles[1][1] = false;
        let g = NavGraph::generate(&tiles, 1.0).unwrap();
        assert!(!g.node(g.node_id(1, 1).unwrap()).walkable);
        assert!(g.node(g.node_id(0, 1).unwrap()).walkable);
    }

    #[test]
    fn test_neighbour_wiring_eight_connected() {
        let g = NavGraph::generate(&open_grid(3, 3), 1.0).unwrap();
        // Corner has 3 neighbours, edge 5, center 8
        assert_eq!(g.node(g.node_id(0, 0).unwrap()).neighbours.len(), 3);
        assert_eq!(g.node(g.node_id(1, 0).unwrap()).neighbours.len(), 5);
        assert_eq!(g.node(g.node_id(1, 1).unwrap()).neighbours.len(), 8);
    }

    #[test]
    fn test_blocked_cells_are_not_wired() {
        let mut tiles = open_grid(3, 3);
        tiles[1][1] = false;
        let g = NavGraph::generate(&tiles, 1.0).unwrap();
        let center = g.node_id(1, 1).unwrap();
        // Blocked node gets no edges and nobody links to it
        assert!(g.node(center).neighbours.is_empty());
        for id in 0..g.len() {
            assert!(!g.node(id).neighbours.contains(&center));
        }
    }

    #[test]
    fn test_downsample_merges_conservatively() {
        // 4x4 source, mult 0.5 -> 2x2 nodes of 2x2 source cells each.
        // One blocked source cell poisons its whole node.
        let mut tiles = open_grid(4, 4);
        tiles[0][1] = false;
        let g = NavGraph::generate(&tiles, 0.5).unwrap();
        assert_eq!(g.width(), 2);
        assert_eq!(g.height(), 2);
        assert!(!g.node(g.node_id(0, 0).unwrap()).walkable);
        assert!(g.node(g.node_id(1, 0).unwrap()).walkable);
        // Node centers sit vertex_distance apart
        assert!((g.vertex_distance() - 2.0).abs() < 1e-5);
        assert_eq!(g.world_pos(g.node_id(1, 1).unwrap()), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_node_at_world_rounds_and_bounds() {
        let g = NavGraph::generate(&open_grid(3, 3), 1.0).unwrap();
        assert_eq!(g.node_at_world(Vec2::new(1.4, 0.6)), g.node_id(1, 1));
        assert!(g.node_at_world(Vec2::new(-2.0, 0.0)).is_none());
        assert!(g.node_at_world(Vec2::new(0.0, 7.0)).is_none());
    }

    #[test]
    fn test_generate_rejects_bad_input() {
        assert!(matches!(
            NavGraph::generate(&[], 1.0),
            Err(GraphError::EmptyGrid)
        ));
        assert!(matches!(
            NavGraph::generate(&[vec![]], 1.0),
            Err(GraphError::EmptyGrid)
        ));
        let ragged = vec![vec![true, true], vec![true]];
        assert!(matches!(
            NavGraph::generate(&ragged, 1.0),
            Err(GraphError::RaggedGrid { row: 1, .. })
        ));
        assert!(matches!(
            NavGraph::generate(&open_grid(2, 2), 0.0),
            Err(GraphError::InvalidResolution(_))
        ));
        assert!(matches!(
            NavGraph::generate(&open_grid(2, 2), -1.0),
            Err(GraphError::InvalidResolution(_))
        ));
        assert!(matches!(
            NavGraph::generate(&open_grid(2, 2), 0.1),
            Err(GraphError::DegenerateResolution { .. })
        ));
    }
}
