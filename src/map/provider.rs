#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Enum representing the available tile providers.
///
/// `OpenStreetMap` is always available. The Mapbox providers exist only when
/// `MAPBOX_ACCESS_TOKEN` is set at build time, and `OfflinePreview` only when
/// `OFFLINE_TILES` is set, so the selected provider must be looked up rather
/// than assumed.
pub enum TileProvider {
    OpenStreetMap,
    MapboxStreets,
    MapboxSatellite,
    OfflinePreview,
}
