use glam::Vec2;
use shunt::*;

fn main() {
    // A player sprite dropped onto a wall, resolved with push = 0 so only
    // the player gets moved.
    let mut wall = RectShape::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 1.0));
    let mut player = Sprite::new(Vec2::new(0.5, -0.8), TextureRect::new(1, 1));

    println!(
        "before: wall=({:.2},{:.2}) player=({:.2},{:.2}) colliding={}",
        wall.position().x,
        wall.position().y,
        player.position().x,
        player.position().y,
        overlaps(&wall, &player)
    );

    if let Some(dir) = resolve(&mut player, &mut wall, 0.0) {
        println!(
            "resolved: player=({:.2},{:.2}) direction=({:.0},{:.0})",
            player.position().x,
            player.position().y,
            dir.x,
            dir.y
        );
    }
    println!("colliding after resolve: {}", overlaps(&wall, &player));

    // Detection-only circle queries against the same wall
    let sensor = CollisionCircle::new(Vec2::new(2.5, 0.0), 1.0);
    println!("sensor overlaps wall: {}", sensor.overlaps_body(&wall));
    let other = CollisionCircle::new(Vec2::new(3.5, 0.0), 0.4);
    println!("sensor overlaps other circle: {}", sensor.overlaps_circle(&other));
}
