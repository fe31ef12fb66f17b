//! Shared night-sky backdrop.
//!
//! Stars, drifting clouds, and rising embers are all derived from the
//! deterministic hash plus the wall clock, so the layer needs no
//! per-frame state of its own.

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::hash01;

const STAR_COUNT: u32 = 48;
const CLOUD_COUNT: u32 = 6;
const EMBER_COUNT: u32 = 24;

pub fn draw_background(assets: &Assets, time: f32) {
    draw_texture_ex(
        &assets.sky,
        0.0,
        0.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(SCREEN_WIDTH, SCREEN_HEIGHT)),
            ..Default::default()
        },
    );

    for i in 0..STAR_COUNT {
        let x = hash01(i.wrapping_mul(11)) * SCREEN_WIDTH;
        let y = hash01(i.wrapping_mul(17).wrapping_add(3)) * SCREEN_HEIGHT * 0.6;
        let twinkle = 0.5 + 0.5 * (time * (1.0 + hash01(i)) + i as f32).sin();
        draw_circle(x, y, 1.5, Color::new(1.0, 1.0, 0.9, 0.5 * twinkle));
    }

    for i in 0..CLOUD_COUNT {
        let speed = if i % 2 == 0 { 8.0 } else { 14.0 };
        let w = 140.0 + hash01(i.wrapping_mul(23)) * 80.0;
        let x = (hash01(i.wrapping_mul(29)) * SCREEN_WIDTH + time * speed) % (SCREEN_WIDTH + w) - w;
        let y = 40.0 + hash01(i.wrapping_mul(37)) * 160.0;
        let alpha = if i % 2 == 0 { 0.10 } else { 0.16 };
        let tint = Color::new(0.8, 0.8, 0.9, alpha);
        draw_circle(x, y, w * 0.25, tint);
        draw_circle(x + w * 0.3, y + 6.0, w * 0.2, tint);
        draw_circle(x + w * 0.55, y - 4.0, w * 0.22, tint);
    }

    for i in 0..EMBER_COUNT {
        let lifetime = 2.0 + hash01(i.wrapping_mul(41)) * 2.5;
        let t = ((time + hash01(i.wrapping_mul(43)) * lifetime) % lifetime) / lifetime;
        let sway = (time * 2.0 + i as f32).sin() * 14.0;
        let x = SCREEN_WIDTH / 2.0 + (hash01(i.wrapping_mul(47)) - 0.5) * 90.0 + sway;
        let y = SCREEN_HEIGHT - 90.0 - t * 260.0;
        let fade = (1.0 - t) * 0.8;
        draw_circle(
            x,
            y,
            1.8,
            Color::new(1.0, 0.55 + 0.3 * hash01(i), 0.2, fade),
        );
    }
}
