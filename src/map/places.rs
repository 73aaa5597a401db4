use walkers::Position;

/// Returns the position the map opens on: central Nagpur, where the seeded
/// doctors practice.
///
/// # Returns
///
/// A `Position` struct representing the geographical coordinates of the city center.
pub fn nagpur_center() -> Position {
    Position::from_lon_lat(79.0882, 21.1458)
}
