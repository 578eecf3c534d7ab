// What you SEE:
// • A red particle heart beating in the middle of the window, surrounded by a loose halo.
// • A faint grid and a twinkling starfield behind it, scanlines over everything.
// • A HUD line with the frame being played and the measured FPS. ESC quits.

mod config;
mod draw;
mod error;
mod fx;
mod geometry;
mod heart;
mod types;

use clap::Parser;
use config::{Args, BACKGROUND, CANVAS_HEIGHT, CANVAS_WIDTH, GRID_COLOR, GRID_SPACING, HEART_COLOR, HUD_COLOR, SCANLINE_EVERY};
use draw::{apply_scanlines, clear, draw_grid, draw_text_5x7, fill_square, Drawer};
use error::Error;
use fx::Starfield;
use heart::HeartField;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use types::FrameBuffer;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    info!("heart-pulse starting: {} frames per beat, seed {:?}", args.frames, args.seed);

    /* --- Precompute the whole animation ---
       Everything random is decided here, before the first frame is shown.
       Visual: nothing yet; the window opens once every frame is ready. */
    let field = match args.seed {
        Some(seed) => HeartField::with_rng(args.frames, &mut StdRng::seed_from_u64(seed)),
        None => HeartField::new(args.frames),
    };
    let mut star_rng = args.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let stars = Starfield::new(&mut star_rng, args.stars, CANVAS_WIDTH, CANVAS_HEIGHT);
    info!("starfield: {} stars", stars.len());

    /* --- Window + reusable canvas --- */
    let mut drawer = Drawer::new("Heart Pulse", CANVAS_WIDTH, CANVAS_HEIGHT, args.fps)?;
    let mut screen = FrameBuffer::new(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);

    /* --- HUD / FPS --- */
    let started = Instant::now();
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");
    let mut tick: i64 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Backdrop: solid color, grid, stars twinkling on wall-clock time. */
        clear(&mut screen, BACKGROUND);
        draw_grid(&mut screen, GRID_SPACING, GRID_COLOR);
        stars.render(&mut screen, now.duration_since(started).as_secs_f32());

        /* 2) The heart: one cached frame per tick, each point a small square. */
        let frame = field.frame(tick);
        for p in frame.points() {
            fill_square(&mut screen, p.x as i32, p.y as i32, p.size, HEART_COLOR);
        }

        /* 3) Scanlines over everything, then the HUD on top so it stays crisp. */
        apply_scanlines(&mut screen, SCANLINE_EVERY);
        let n = field.frame_count() as i64;
        let hud = format!(
            "HEART | FRAME {}/{} | HALO {}/{} | {}",
            tick.rem_euclid(n),
            n,
            frame.halo_len(),
            frame.pulse().halo_count,
            hud_fps_text
        );
        draw_text_5x7(&mut screen, 8, 8, &hud, HUD_COLOR);

        /* 4) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;
        tick += 1;

        /* 5) FPS counter (logged + shown in the HUD once per second) */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            debug!("FPS: {:.1}", fps);
            hud_fps_text = format!("FPS: {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!("window closed after {} ticks", tick);
    Ok(())
}
