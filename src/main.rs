use anyhow::Result;
use image::{Rgba, RgbaImage};
use log::info;

mod engine;
mod game;

use engine::assets::SheetLoader;
use engine::sprite::{FrameSequencer, SpriteSheet};
use game::actors::{Actor, ActorBody, ActorRoster, Critter};
use game::world::{GridProjection, RectLevel};

const TICKS: u32 = 60;
const SURFACE_WIDTH: u32 = 640;
const SURFACE_HEIGHT: u32 = 480;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting tilebound demo...");

    // Use the shipped hero sheet when present, otherwise a procedural one
    let loader = SheetLoader::new("assets");
    let sheet = if loader.exists("hero.png") {
        loader.load_sheet("hero.png", 32, 32)?
    } else {
        info!("No asset directory, using a procedural sheet");
        SpriteSheet::new(procedural_sheet(), 32, 32)
    };

    let level = RectLevel::new(18.0, 13.0);
    let proj = GridProjection::default();

    let mut roster = ActorRoster::new();

    let hero_anim = FrameSequencer::new(sheet.clone(), 0, 4).with_slowdown(2);
    let mut hero = ActorBody::new(5.0, 5.0, hero_anim);
    hero.impulse(1.5, 0.75);
    roster.push(hero);

    let mut critter = Critter::new(12.0, 8.0, FrameSequencer::new(sheet.clone(), 1, 4));
    critter.body_mut().impulse(-0.8, 0.2);
    roster.push(critter);

    info!("Spawned {} actors, running {} ticks", roster.len(), TICKS);

    // Tick-driven loop: update and draw each actor exactly once per frame
    let mut surface = RgbaImage::new(SURFACE_WIDTH, SURFACE_HEIGHT);
    for _ in 0..TICKS {
        roster.update_all(&level);

        surface
            .pixels_mut()
            .for_each(|px| *px = Rgba([24, 24, 32, 255]));
        roster.draw_all(&mut surface, &proj);
    }

    surface.save("frame.png")?;
    info!("Wrote frame.png");

    Ok(())
}

/// 4x2-frame checker sheet so the demo runs without asset files
fn procedural_sheet() -> RgbaImage {
    let mut img = RgbaImage::new(128, 64);
    for y in 0..64 {
        for x in 0..128 {
            let column = (x / 32) as u8;
            let row = (y / 32) as u8;
            let checker = if (x / 4 + y / 4) % 2 == 0 { 200 } else { 120 };
            img.put_pixel(x, y, Rgba([checker, 60 + column * 40, 80 + row * 80, 255]));
        }
    }
    img
}
