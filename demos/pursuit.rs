use glam::Vec2;
use shunt::*;

// Run with RUST_LOG=debug to watch graph builds and search outcomes.
fn main() {
    env_logger::init();

    // 12x8 map with a wall through the middle and a single doorway
    let mut tiles = vec![vec![true; 12]; 8];
    for y in 0..8 {
        if y != 5 {
            tiles[y][6] = false;
        }
    }

    let mut chaser = EnemyPathfinder::new(PathfinderConfig {
        think_interval: 0.25,
        enable_timing: true,
    });
    chaser.set_map(&tiles).unwrap();
    chaser.set_aggro_range(20.0);

    let enemy = Vec2::new(1.0, 1.0);
    let mut player = Vec2::new(10.0, 1.0);

    // Simulate a few think intervals while the player drifts downward
    for tick in 0..4 {
        chaser.update(0.3, enemy, player);
        let path = chaser.path();
        print!("tick {tick}: player=({:.0},{:.0}) {} waypoints", player.x, player.y, path.len());
        if let Some(next) = path.get(1) {
            print!(", next step ({:.0},{:.0})", next.x, next.y);
        }
        println!(", cost {:.2}", chaser.total_cost());
        player.y += 2.0;
    }

    let stats = chaser.stats();
    println!(
        "{} searches, last expanded {} nodes in {:.3} ms",
        stats.searches, stats.expanded, stats.last_search_ms
    );
}
