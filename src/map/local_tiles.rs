use egui::ColorImage;
use egui::Context;
use walkers::sources::Attribution;
use walkers::Texture;
use walkers::TileId;
use walkers::Tiles;

/// Flat single-color tiles for running without network access.
///
/// Selected through the `OFFLINE_TILES` environment variable. Markers and
/// selection work exactly as they do over HTTP tiles; only the base imagery
/// is missing.
pub struct LocalTiles {
    egui_ctx: Context,
}

impl LocalTiles {
    pub fn new(egui_ctx: Context) -> Self {
        Self { egui_ctx }
    }
}

impl Tiles for LocalTiles {
    fn at(&mut self, _tile_id: TileId) -> Option<Texture> {
        let image = ColorImage::new([256, 256], egui::Color32::from_gray(230));

        Some(Texture::from_color_image(image, &self.egui_ctx))
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: "Offline preview tiles",
            url: "https://www.openstreetmap.org/copyright",
            logo_light: None,
            logo_dark: None,
        }
    }

    fn tile_size(&self) -> u32 {
        256
    }
}
