use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;

use egui::{Align2, Color32, Painter, Response, RichText, Window};
use walkers::{
    extras::{Place, Places, Style},
    HttpOptions, HttpTiles, Map, MapMemory, Plugin, Position, Projector, Tiles,
};

use crate::errors::error_types::ErrorTypes;

use super::engine::{EngineBuilder, MapEngine, MarkerSpec};
use super::local_tiles::LocalTiles;
use super::provider::TileProvider;

/// Height of the map area inside the doctors page.
const MAP_HEIGHT: f32 = 420.0;

/// Clicks within this many screen pixels of a marker count as activating it.
const MARKER_HIT_RADIUS: f32 = 30.0;

/// Returns the HTTP options for the tile fetcher, preparing the on-disk tile
/// cache. Preparing the cache is the part of engine construction that can
/// actually fail.
fn http_options() -> Result<HttpOptions, ErrorTypes> {
    let cache = if std::env::var("NO_HTTP_CACHE").is_ok() {
        None
    } else {
        let dir = PathBuf::from(".cache");
        fs::create_dir_all(&dir).map_err(|e| {
            ErrorTypes::new(201, format!("Error preparing tile cache {:?}: {}", dir, e))
        })?;
        Some(dir)
    };
    Ok(HttpOptions {
        cache,
        ..Default::default()
    })
}

/// Builds the table of available tile providers.
///
/// # Arguments
/// * `egui_ctx` - The Egui context.
///
/// # Returns
/// `HashMap<TileProvider, Box<dyn Tiles + Send>>` - A map of available tile providers.
fn providers(
    egui_ctx: egui::Context,
) -> Result<HashMap<TileProvider, Box<dyn Tiles + Send>>, ErrorTypes> {
    let mut providers: HashMap<TileProvider, Box<dyn Tiles + Send>> = HashMap::default();

    if std::env::var("OFFLINE_TILES").is_ok() {
        providers.insert(
            TileProvider::OfflinePreview,
            Box::new(LocalTiles::new(egui_ctx)),
        );
        return Ok(providers);
    }

    providers.insert(
        TileProvider::OpenStreetMap,
        Box::new(HttpTiles::with_options(
            walkers::sources::OpenStreetMap,
            http_options()?,
            egui_ctx.to_owned(),
        )),
    );

    let mapbox_access_token = std::option_env!("MAPBOX_ACCESS_TOKEN");

    if let Some(token) = mapbox_access_token {
        providers.insert(
            TileProvider::MapboxStreets,
            Box::new(HttpTiles::with_options(
                walkers::sources::Mapbox {
                    style: walkers::sources::MapboxStyle::Streets,
                    access_token: token.to_string(),
                    high_resolution: false,
                },
                http_options()?,
                egui_ctx.to_owned(),
            )),
        );
        providers.insert(
            TileProvider::MapboxSatellite,
            Box::new(HttpTiles::with_options(
                walkers::sources::Mapbox {
                    style: walkers::sources::MapboxStyle::Satellite,
                    access_token: token.to_string(),
                    high_resolution: true,
                },
                http_options()?,
                egui_ctx.to_owned(),
            )),
        );
    }

    Ok(providers)
}

/// The walkers-backed map engine: tile providers, camera memory, and the
/// live marker set with its click bindings.
///
/// Tile fetching failures only degrade the imagery; markers and activations
/// never depend on tile availability.
pub struct TileMapEngine {
    providers: HashMap<TileProvider, Box<dyn Tiles + Send>>,
    selected_provider: TileProvider,
    map_memory: MapMemory,
    home: Position,
    markers: BTreeMap<i32, MarkerSpec>,
    activations: Vec<i32>,
    released: bool,
}

impl TileMapEngine {
    /// Returns a builder that constructs the engine on a worker thread.
    ///
    /// The context comes from the live surface, so a builder can only exist
    /// once there is a surface to bind to.
    pub fn builder(egui_ctx: egui::Context, home: Position) -> EngineBuilder {
        Box::new(move || {
            let providers = providers(egui_ctx)?;
            let selected_provider = if providers.contains_key(&TileProvider::OfflinePreview) {
                TileProvider::OfflinePreview
            } else {
                TileProvider::OpenStreetMap
            };
            Ok(Box::new(TileMapEngine {
                providers,
                selected_provider,
                map_memory: MapMemory::default(),
                home,
                markers: BTreeMap::new(),
                activations: Vec::new(),
                released: false,
            }) as Box<dyn MapEngine>)
        })
    }
}

impl MapEngine for TileMapEngine {
    fn add_marker(&mut self, spec: MarkerSpec) {
        if self.released {
            log::debug!("add_marker on a released engine");
            return;
        }
        self.markers.insert(spec.id, spec);
    }

    fn remove_marker(&mut self, id: i32) {
        self.markers.remove(&id);
    }

    fn marker_ids(&self) -> Vec<i32> {
        self.markers.keys().copied().collect()
    }

    fn take_activations(&mut self) -> Vec<i32> {
        std::mem::take(&mut self.activations)
    }

    fn show(&mut self, ui: &mut egui::Ui) {
        if self.released {
            return;
        }
        let tiles = match self.providers.get_mut(&self.selected_provider) {
            Some(tiles) => tiles.as_mut(),
            None => {
                eprintln!("Selected tile provider not found");
                return;
            }
        };

        let hits = MarkerHits {
            markers: self
                .markers
                .values()
                .map(|marker| (marker.id, marker.position))
                .collect(),
            hits: &mut self.activations,
        };

        let map = Map::new(Some(tiles), &mut self.map_memory, self.home)
            .with_plugin(doctor_places(&self.markers))
            .with_plugin(hits);

        ui.add_sized([ui.available_width(), MAP_HEIGHT], map);

        map_controls(ui, &mut self.map_memory);
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.providers.clear();
        self.markers.clear();
        self.activations.clear();
        self.released = true;
    }

    fn is_released(&self) -> bool {
        self.released
    }
}

impl Drop for TileMapEngine {
    fn drop(&mut self) {
        self.release();
    }
}

/// Builds the drawing plugin for the current marker set.
fn doctor_places(markers: &BTreeMap<i32, MarkerSpec>) -> impl Plugin {
    let mut places: Vec<Place> = Vec::new();

    for marker in markers.values() {
        places.push(Place {
            position: marker.position,
            label: marker.label.clone(),
            symbol: '🏥',
            style: Style::default(),
        });
    }

    Places::new(places)
}

/// Click hit-testing: pushes the id of the first marker within
/// `MARKER_HIT_RADIUS` of a primary click into the activation queue.
struct MarkerHits<'a> {
    markers: Vec<(i32, Position)>,
    hits: &'a mut Vec<i32>,
}

impl Plugin for MarkerHits<'_> {
    fn run(&mut self, response: &Response, _painter: Painter, projector: &Projector) {
        if !response.changed() && response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                for (id, position) in &self.markers {
                    let marker_screen_pos = projector.project(*position).to_pos2();
                    if marker_screen_pos.distance(pointer_pos) < MARKER_HIT_RADIUS {
                        self.hits.push(*id);
                        break;
                    }
                }
            }
        }
    }
}

/// Zoom buttons, plus a recenter window when the camera has been dragged
/// away from the home position.
fn map_controls(ui: &egui::Ui, map_memory: &mut MapMemory) {
    Window::new("Map controls")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_BOTTOM, [10., -10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("➕").heading()).clicked() {
                    let _ = map_memory.zoom_in();
                }

                if ui.button(RichText::new("➖").heading()).clicked() {
                    let _ = map_memory.zoom_out();
                }
            });
        });

    if let Some(position) = map_memory.detached() {
        Window::new("Center")
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(Align2::RIGHT_BOTTOM, [-10., -10.])
            .show(ui.ctx(), |ui| {
                ui.label(
                    RichText::new(format!("{:.04} {:.04}", position.lon(), position.lat()))
                        .color(Color32::GRAY),
                );
                if ui.button("back to the doctors").clicked() {
                    map_memory.follow_my_position();
                }
            });
    }
}
