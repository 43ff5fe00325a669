use std::{
    ops::{Add, Mul},
    time::Instant,
};

use distance_field::{Grid, Result, SeparableTransform};
use log::info;
use minifb::*;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vek::Vec2;

const ZOOM_LG: usize = 1;
const W: usize = 512;
const H: usize = 512;
const SEED: u64 = 0;
const SITES: usize = 48;
const OCTAVES: usize = 6;
/// Peak of the noise cost field, in squared cells.
const COST_SCALE: f64 = 2048.0;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Mode {
    Mask,
    Cost,
}

fn random_mask(rng: &mut impl Rng, dim: Vec2<i32>) -> Result<Grid<bool>> {
    let mut mask = Grid::new(dim, false)?;
    for _ in 0..SITES {
        let pos = Vec2::new(rng.gen_range(0..dim.x), rng.gen_range(0..dim.y));
        mask.set(pos, true);
    }
    Ok(mask)
}

fn noise_costs(seed: u32, dim: Vec2<i32>) -> Result<Grid<f64>> {
    let noise: Fbm<Perlin> = Fbm::new(seed)
        .set_octaves(OCTAVES)
        .set_persistence(0.5)
        .set_frequency(1.0 / 128.0)
        .set_lacunarity(2.0);
    Grid::populate_from(dim, |pos| {
        noise
            .get(pos.map(|e| e as f64).into_array())
            .clamp(-1.0, 1.0)
            .mul(0.5)
            .add(0.5)
            .mul(COST_SCALE)
    })
}

fn main() {
    env_logger::init();

    let dim = Vec2::new((W >> ZOOM_LG) as i32, (H >> ZOOM_LG) as i32);
    let mut buf = vec![0; W * H];
    let mut win = match Window::new("Distance Field", W, H, WindowOptions::default()) {
        Ok(win) => win,
        Err(err) => {
            log::error!("could not open window: {err}");
            return;
        }
    };
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let transform = SeparableTransform::new().parallel(true);

    let mut mode = Mode::Mask;
    let mut dirty = true;

    while win.is_open() {
        if dirty {
            let before = Instant::now();
            let field = match mode {
                Mode::Mask => random_mask(&mut rng, dim).map(|mask| transform.run_indicator(&mask)),
                Mode::Cost => noise_costs(rng.gen(), dim).map(|costs| transform.run(&costs)),
            };
            let field = match field {
                Ok(field) => field,
                Err(err) => {
                    log::error!("could not seed {mode:?} field: {err}");
                    break;
                }
            };
            info!(
                "{:?} transform of {:?} took {} seconds",
                mode,
                dim,
                before.elapsed().as_secs_f32()
            );
            draw(&field, &mut buf);
            dirty = false;
        }

        if let Err(err) = win.update_with_buffer(&buf, W, H) {
            log::error!("could not present frame: {err}");
            break;
        }
        if win.is_key_pressed(Key::Q, KeyRepeat::No) || win.is_key_down(Key::Escape) {
            break;
        }
        if win.is_key_pressed(Key::Space, KeyRepeat::No) {
            dirty = true;
        }
        if win.is_key_pressed(Key::M, KeyRepeat::No) {
            mode = match mode {
                Mode::Mask => Mode::Cost,
                Mode::Cost => Mode::Mask,
            };
            dirty = true;
        }
    }
}

/// Shows the distance (not its square) normalized to the largest value.
fn draw(field: &Grid<f64>, buf: &mut [u32]) {
    let max = field
        .raw()
        .iter()
        .filter(|v| v.is_finite())
        .fold(0.0f64, |a, b| a.max(b.sqrt()));
    for (pos, d) in field.iter() {
        let shade = if max > 0.0 { d.sqrt() / max } else { 0.0 };
        let shade = (shade.clamp(0.0, 1.0) * 255.0) as u8;
        let color = if *d == 0.0 {
            (200, 60, 50)
        } else {
            (shade, shade, shade)
        };
        set(pos, buf, color);
    }
}

fn set(pos: Vec2<i32>, buf: &mut [u32], color: (u8, u8, u8)) {
    let pos = pos * (1 << ZOOM_LG);
    for zx in 0..(1 << ZOOM_LG) as i32 {
        for zy in 0..(1 << ZOOM_LG) as i32 {
            let pos = pos + Vec2::new(zx, zy);
            let idx = (H - pos.y as usize - 1) * W + pos.x as usize;
            if idx < W * H {
                buf[idx] = u32::from_le_bytes([color.2, color.1, color.0, 0]);
            }
        }
    }
}
