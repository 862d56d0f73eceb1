//! Confetti overlay drawn over the whole frame.

use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};
use ratatui::prelude::*;

use crate::quiz::Celebration;

const PARTICLES: usize = 180;
const SEED: u64 = 0x00c0_ffee;
/// Time for a speed-1 particle to fall one row.
const STEP: Duration = Duration::from_millis(90);
const GLYPHS: [char; 5] = ['*', '+', '•', 'o', 'x'];
const PALETTE: [Color; 8] = [
    Color::Rgb(255, 0, 0),
    Color::Rgb(0, 255, 0),
    Color::Rgb(0, 0, 255),
    Color::Rgb(255, 255, 0),
    Color::Rgb(255, 0, 255),
    Color::Rgb(0, 255, 255),
    Color::Rgb(255, 165, 0),
    Color::Rgb(128, 0, 128),
];

#[derive(Debug, Clone, Copy, PartialEq)]
struct Particle {
    x: u16,
    y: u16,
    glyph: char,
    color: Color,
}

pub fn render(frame: &mut Frame, area: Rect, celebration: &Celebration) {
    let Some(elapsed) = celebration.elapsed() else {
        return;
    };

    let buffer = frame.buffer_mut();
    for particle in particles(area, elapsed, celebration.opacity()) {
        let Some(cell) = buffer.cell_mut((particle.x, particle.y)) else {
            continue;
        };
        // Leave text readable; confetti only lands on empty cells.
        if cell.symbol() == " " {
            cell.set_char(particle.glyph).set_fg(particle.color);
        }
    }
}

fn particles(area: Rect, elapsed: Duration, opacity: f32) -> Vec<Particle> {
    if area.width == 0 || area.height == 0 || opacity <= 0.0 {
        return Vec::new();
    }

    let visible = (PARTICLES as f32 * opacity).round() as usize;
    let tick = (elapsed.as_millis() / STEP.as_millis()) as u64;
    let dim = opacity < 0.35;
    let mut rng = StdRng::seed_from_u64(SEED);

    (0..PARTICLES)
        .map(|_| {
            let x = rng.random_range(0..area.width);
            let start = rng.random_range(0..area.height) as u64;
            let speed = rng.random_range(1..=3u64);
            let glyph = GLYPHS[rng.random_range(0..GLYPHS.len())];
            let color = PALETTE[rng.random_range(0..PALETTE.len())];

            let fallen = (start + tick * speed) % area.height as u64;
            Particle {
                x: area.x + x,
                y: area.y + fallen as u16,
                glyph,
                color: if dim { Color::DarkGray } else { color },
            }
        })
        .take(visible)
        .collect()
}
