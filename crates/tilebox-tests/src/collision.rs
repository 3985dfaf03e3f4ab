//! Integration tests for collision between renderables.
//!
//! Exercises tilebox-core boxes through the tilebox-render layer.

use tilebox_core::{HitboxAxis, PositionHandle, Rect, Vec2};
use tilebox_render::{RecordingCanvas, Renderable, RenderableConfig};

// ── Helpers ────────────────────────────────────────────────────

fn tile(x: f32, y: f32) -> Renderable {
    Renderable::new(PositionHandle::new(x, y), 16.0, 16.0)
}

/// Push `mover` out of every tile it overlaps, in order.
fn resolve(mover: &mut Renderable, tiles: &[Renderable]) -> Vec<Vec2> {
    let mut responses = Vec::new();
    for tile in tiles {
        let p = mover.collide_vs_aabb(tile);
        if p != Vec2::ZERO {
            mover.bounds_mut().translate_by(p);
            responses.push(p);
        }
    }
    responses
}

// ── Resolution ─────────────────────────────────────────────────

#[test]
fn falling_box_lands_on_floor() {
    let floor: Vec<Renderable> = (0..4).map(|i| tile(i as f32 * 16.0, 64.0)).collect();
    let pos = PositionHandle::new(20.0, 40.0);
    let mut player = Renderable::new(pos.clone(), 16.0, 16.0);

    for _ in 0..10 {
        pos.translate(Vec2::new(0.0, 4.0));
        resolve(&mut player, &floor);
    }

    assert_eq!(player.bottom(), 64.0);
    assert!(floor.iter().all(|t| !player.overlaps(t)));
}

#[test]
fn equal_penetration_resolves_vertically() {
    let wall = tile(16.0, 16.0);
    let mut mover = tile(8.0, 8.0);
    let responses = resolve(&mut mover, std::slice::from_ref(&wall));
    assert_eq!(responses, vec![Vec2::new(0.0, -8.0)]);
    assert_eq!(mover.bounds().pos(), Vec2::new(8.0, 0.0));
}

#[test]
fn side_hit_pushes_horizontally() {
    let wall = tile(32.0, 0.0);
    let mut mover = tile(20.0, 2.0);
    let responses = resolve(&mut mover, std::slice::from_ref(&wall));
    assert_eq!(responses, vec![Vec2::new(-4.0, 0.0)]);
    assert_eq!(mover.right(), 32.0);
}

#[test]
fn moving_shared_position_moves_renderable() {
    let pos = PositionHandle::new(0.0, 0.0);
    let player = Renderable::new(pos.clone(), 10.0, 10.0);
    let wall = tile(30.0, 0.0);
    assert!(!player.overlaps(&wall));

    pos.set(25.0, 0.0);
    assert!(player.overlaps(&wall));
}

#[test]
fn cloned_renderable_does_not_follow_owner() {
    let pos = PositionHandle::new(0.0, 0.0);
    let player = Renderable::new(pos.clone(), 10.0, 10.0);
    let ghost = player.clone();

    pos.set(100.0, 0.0);
    assert_eq!(player.left(), 100.0);
    assert_eq!(ghost.left(), 0.0);
}

// ── Hit boxes from presets ─────────────────────────────────────

#[test]
fn preset_hitbox_narrows_collision() {
    let json = r#"{
        "width": 32,
        "height": 32,
        "hitbox": { "x": { "offset": 8, "extent": 16 } }
    }"#;
    let config = RenderableConfig::from_json_str(json).unwrap();
    let player = Renderable::from_config(PositionHandle::new(0.0, 0.0), &config).unwrap();

    // Touches the visual frame only.
    let wall = tile(26.0, 0.0);
    assert!(!player.overlaps(&wall));

    let closer = tile(20.0, 0.0);
    assert!(player.overlaps(&closer));
    assert_eq!(player.collide_vs_aabb(&closer), Vec2::new(-4.0, 0.0));
}

#[test]
fn flipped_sprite_mirrors_hitbox() {
    let mut player = Renderable::new(PositionHandle::new(0.0, 0.0), 32.0, 32.0);
    player
        .bounds_mut()
        .adjust_hitbox(Some(HitboxAxis::new(2.0, 20.0)), None);
    assert_eq!((player.left(), player.right()), (2.0, 22.0));

    player.bounds_mut().flip_horizontal(32.0);
    assert_eq!((player.left(), player.right()), (10.0, 30.0));
}

// ── Union & debug draw ─────────────────────────────────────────

#[test]
fn union_of_tiles_covers_room() {
    let tiles: Vec<Rect> = (0..3)
        .flat_map(|x| (0..2).map(move |y| Rect::from_xywh(x as f32 * 16.0, y as f32 * 16.0, 16.0, 16.0)))
        .collect();

    let mut room = tiles[0].clone();
    for t in &tiles[1..] {
        room.union(t);
    }

    assert_eq!((room.width(), room.height()), (48.0, 32.0));
    assert!(tiles.iter().all(|t| t.within(&room)));
    assert!(tiles.iter().all(|t| room.contains(t)));
    // The first tile's position was not aliased.
    assert_eq!(tiles[0].width(), 16.0);
}

#[test]
fn debug_draw_records_hitbox_outline() {
    let mut player = Renderable::new(PositionHandle::new(10.0, 10.0), 32.0, 32.0);
    player
        .bounds_mut()
        .adjust_hitbox(Some(HitboxAxis::new(4.0, 24.0)), Some(HitboxAxis::new(0.0, 30.0)));

    let mut canvas = RecordingCanvas::new();
    player.draw(&mut canvas, None);

    let cmd = &canvas.commands()[0];
    assert_eq!((cmd.x, cmd.y, cmd.width, cmd.height), (14.0, 10.0, 24.0, 30.0));
    assert_eq!(cmd.color, "red");
}
