//! Tilebox demo - headless collision loop
//!
//! Drops a player box onto a floor, resolves the contact with
//! `collide_vs_aabb` each tick and logs the debug outlines.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tilebox_core::{PositionHandle, Vec2};
use tilebox_render::{Renderable, RenderableConfig, TracingCanvas};
use tracing::info;
use tracing_subscriber::EnvFilter;

const TICKS: u32 = 12;
const GRAVITY: f32 = 4.0;

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(true)
        .init();

    info!("Tilebox demo starting...");

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => RenderableConfig::from_path(&path)
            .with_context(|| format!("loading preset {}", path.display()))?,
        None => RenderableConfig::default(),
    };

    let player_pos = PositionHandle::new(0.0, 0.0);
    let mut player = Renderable::from_config(player_pos.clone(), &config)?;

    let floor_config = RenderableConfig {
        width: 256.0,
        height: 16.0,
        debug_color: "gray".into(),
        ..Default::default()
    };
    let floor = Renderable::from_config(PositionHandle::new(-64.0, 40.0), &floor_config)?;

    let mut canvas = TracingCanvas::new();
    for tick in 0..TICKS {
        player_pos.translate(Vec2::new(1.0, GRAVITY));

        let response = player.collide_vs_aabb(&floor);
        if response != Vec2::ZERO {
            player.bounds_mut().translate_by(response);
            info!(tick, x = response.x, y = response.y, "Resolved contact");
        }
        player.update();

        player.draw(&mut canvas, None);
        floor.draw(&mut canvas, None);
    }

    player.scale(2.0, None);
    player.rotate(std::f32::consts::FRAC_PI_4);
    let transform = player.matrix();
    info!(
        position = %player_pos.get(),
        strokes = canvas.strokes(),
        "Demo finished"
    );
    println!("final transform: {:?}", transform.to_array());

    Ok(())
}
