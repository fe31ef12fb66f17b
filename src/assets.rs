//! Procedurally generated textures.
//!
//! All sprites are drawn pixel-by-pixel into `Image`s at startup, so
//! the binary ships no art files. Speckle and flicker use the crate's
//! deterministic hash, which keeps the sprites identical run to run.

use macroquad::prelude::*;

use crate::consts::MARSHMALLOW_SIZE;
use crate::hash01;
use crate::sim::Doneness;

pub struct Assets {
    /// One sprite per doneness stage, indexed raw through burnt.
    marshmallow: [Texture2D; 4],
    pub bonfire: Texture2D,
    pub platform: Texture2D,
    pub sky: Texture2D,
}

impl Assets {
    /// Builds every texture. Must run after the game window exists.
    pub fn generate() -> Self {
        Self {
            marshmallow: [
                marshmallow_sprite(Doneness::Raw),
                marshmallow_sprite(Doneness::Toasted),
                marshmallow_sprite(Doneness::Roasted),
                marshmallow_sprite(Doneness::Burnt),
            ],
            bonfire: bonfire_sprite(),
            platform: platform_sprite(),
            sky: sky_sprite(),
        }
    }

    pub fn marshmallow(&self, doneness: Doneness) -> &Texture2D {
        let index = match doneness {
            Doneness::Raw => 0,
            Doneness::Toasted => 1,
            Doneness::Roasted => 2,
            Doneness::Burnt => 3,
        };
        &self.marshmallow[index]
    }
}

fn body_color(doneness: Doneness) -> (u8, u8, u8) {
    match doneness {
        Doneness::Raw => (245, 240, 232),
        Doneness::Toasted => (222, 184, 120),
        Doneness::Roasted => (165, 110, 49),
        Doneness::Burnt => (48, 40, 36),
    }
}

/// A rounded marshmallow with a simple face. The body is a
/// superellipse so the corners read softer than a plain circle.
fn marshmallow_sprite(doneness: Doneness) -> Texture2D {
    let size = MARSHMALLOW_SIZE as u16;
    let mut image = Image::gen_image_color(size, size, Color::from_rgba(0, 0, 0, 0));
    let (r, g, b) = body_color(doneness);
    let face = if doneness == Doneness::Burnt {
        (200u8, 60u8, 40u8)
    } else {
        (40u8, 30u8, 25u8)
    };

    for y in 0..size as u32 {
        for x in 0..size as u32 {
            let dx = (x as f32 - 32.0) / 26.0;
            let dy = (y as f32 - 32.0) / 28.0;
            if dx.powi(4) + dy.powi(4) > 1.0 {
                continue;
            }

            let shade = 1.0 - 0.18 * (y as f32 / MARSHMALLOW_SIZE);
            let speckle = if hash01(x.wrapping_mul(73).wrapping_add(y.wrapping_mul(151))) > 0.93 {
                0.95
            } else {
                1.0
            };
            let scale = shade * speckle;
            let mut color = Color::from_rgba(
                (r as f32 * scale) as u8,
                (g as f32 * scale) as u8,
                (b as f32 * scale) as u8,
                255,
            );

            let eye_left = (x as i32 - 22).pow(2) + (y as i32 - 26).pow(2) <= 5;
            let eye_right = (x as i32 - 42).pow(2) + (y as i32 - 26).pow(2) <= 5;
            let mouth = (40..=41).contains(&y) && (25..40).contains(&x);
            if eye_left || eye_right || mouth {
                color = Color::from_rgba(face.0, face.1, face.2, 255);
            }

            image.set_pixel(x, y, color);
        }
    }

    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Nearest);
    texture
}

/// Stacked logs with three layered flame tongues above them.
fn bonfire_sprite() -> Texture2D {
    let mut image = Image::gen_image_color(128, 128, Color::from_rgba(0, 0, 0, 0));

    for y in 104..121u32 {
        for x in 20..108u32 {
            let grain = 0.85 + hash01(x.wrapping_mul(31).wrapping_add(y)) * 0.15;
            image.set_pixel(
                x,
                y,
                Color::from_rgba(
                    (92.0 * grain) as u8,
                    (58.0 * grain) as u8,
                    (32.0 * grain) as u8,
                    255,
                ),
            );
        }
    }

    // Widest, dimmest layer first so brighter tongues overdraw it.
    let layers: [(f32, f32, Color); 3] = [
        (26.0, 1.0, Color::from_rgba(214, 64, 24, 230)),
        (18.0, 0.72, Color::from_rgba(255, 138, 36, 240)),
        (11.0, 0.45, Color::from_rgba(255, 214, 92, 255)),
    ];
    for (base_width, height, color) in layers {
        for y in 0..104u32 {
            let rise = (104 - y) as f32 / 88.0;
            if rise > height {
                continue;
            }
            let half_width = base_width * (1.0 - rise / height);
            let flicker = (hash01(y.wrapping_mul(97)) - 0.5) * 4.0;
            let w = (half_width + flicker).max(0.0) as u32;
            for x in (64 - w.min(64))..(64 + w).min(127) {
                image.set_pixel(x, y, color);
            }
        }
    }

    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Nearest);
    texture
}

/// A wooden strip the marshmallows rest on.
fn platform_sprite() -> Texture2D {
    let mut image = Image::gen_image_color(128, 32, Color::from_rgba(0, 0, 0, 0));

    for y in 0..32u32 {
        for x in 0..128u32 {
            let mut grain = 0.9 + hash01(x.wrapping_mul(13).wrapping_add(y.wrapping_mul(7))) * 0.12;
            if x % 32 == 0 || y == 0 || y == 31 {
                grain *= 0.7;
            }
            image.set_pixel(
                x,
                y,
                Color::from_rgba(
                    (118.0 * grain) as u8,
                    (78.0 * grain) as u8,
                    (44.0 * grain) as u8,
                    255,
                ),
            );
        }
    }

    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Nearest);
    texture
}

/// Night-sky gradient, stretched to fill the window.
fn sky_sprite() -> Texture2D {
    let mut image = Image::gen_image_color(64, 256, BLACK);

    for y in 0..256u32 {
        let t = y as f32 / 255.0;
        let r = 12.0 + (48.0 - 12.0) * t;
        let g = 10.0 + (26.0 - 10.0) * t;
        let b = 32.0 + (38.0 - 32.0) * t;
        for x in 0..64u32 {
            image.set_pixel(x, y, Color::from_rgba(r as u8, g as u8, b as u8, 255));
        }
    }

    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Linear);
    texture
}
