//! Minimal raster helpers for writing demo frames to PNG.
use std::path::Path;

use glam::DVec2;
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber honoring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// RGB canvas with pixel-space drawing primitives. Out-of-bounds pixels are ignored.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: [u8; 3]) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(background)),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Alpha-blend `color` onto the pixel at `(x, y)`.
    pub fn blend(&mut self, x: i64, y: i64, color: [u8; 3], alpha: f64) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        let a = alpha.clamp(0.0, 1.0);
        let px = self.image.get_pixel_mut(x as u32, y as u32);
        for (dst, src) in px.0.iter_mut().zip(color) {
            *dst = (*dst as f64 * (1.0 - a) + src as f64 * a).round() as u8;
        }
    }

    pub fn fill_circle(&mut self, center: DVec2, radius: f64, color: [u8; 3], alpha: f64) {
        let r = radius.max(0.5);
        let (x0, x1) = ((center.x - r).floor() as i64, (center.x + r).ceil() as i64);
        let (y0, y1) = ((center.y - r).floor() as i64, (center.y + r).ceil() as i64);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = DVec2::new(x as f64 + 0.5, y as f64 + 0.5) - center;
                if d.length_squared() <= r * r {
                    self.blend(x, y, color, alpha);
                }
            }
        }
    }

    pub fn stroke_circle(&mut self, center: DVec2, radius: f64, color: [u8; 3], alpha: f64) {
        let steps = (radius * 8.0).ceil().max(16.0) as usize;
        for i in 0..steps {
            let theta = i as f64 / steps as f64 * std::f64::consts::TAU;
            let p = center + DVec2::new(theta.cos(), theta.sin()) * radius;
            self.blend(p.x as i64, p.y as i64, color, alpha);
        }
    }

    pub fn line(&mut self, from: DVec2, to: DVec2, color: [u8; 3], alpha: f64) {
        let steps = (to - from).length().ceil().max(1.0) as usize;
        for i in 0..=steps {
            let p = from.lerp(to, i as f64 / steps as f64);
            self.blend(p.x.floor() as i64, p.y.floor() as i64, color, alpha);
        }
    }

    pub fn fill_rect(&mut self, min: DVec2, max: DVec2, color: [u8; 3], alpha: f64) {
        for y in min.y.floor() as i64..max.y.ceil() as i64 {
            for x in min.x.floor() as i64..max.x.ceil() as i64 {
                self.blend(x, y, color, alpha);
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.image.save(path)?;
        info!("Wrote {}.", path.display());
        Ok(())
    }
}
