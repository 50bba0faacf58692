//! Spawn planner. Places the threat just beyond a random map edge.

use intercept_core::constants::SPAWN_MARGIN_KM;
use intercept_core::enums::{MapEdge, YAxis};
use intercept_core::types::{MapBounds, Position};

use crate::random::UniformSource;

/// Edge draw order. The index drawn from the random source maps into this.
pub const EDGES: [MapEdge; 4] = [MapEdge::Top, MapEdge::Bottom, MapEdge::Left, MapEdge::Right];

/// Where and how a spawned actor starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPlacement {
    pub position: Position,
    /// Radians, pointing at the opposing actor.
    pub heading: f64,
    pub edge: MapEdge,
}

/// Pick an edge, a point along it, push it `SPAWN_MARGIN_KM` off the map,
/// and face `toward`.
///
/// Draws exactly two values: the edge index, then the coordinate along it.
pub fn plan_spawn(
    map: &MapBounds,
    toward: &Position,
    y_axis: YAxis,
    rng: &mut impl UniformSource,
) -> SpawnPlacement {
    let edge = EDGES[rng.index(EDGES.len())];
    let position = edge_position(map, edge, y_axis, rng);

    SpawnPlacement {
        position,
        heading: position.bearing_to(toward),
        edge,
    }
}

fn edge_position(
    map: &MapBounds,
    edge: MapEdge,
    y_axis: YAxis,
    rng: &mut impl UniformSource,
) -> Position {
    let below = -SPAWN_MARGIN_KM;
    let above = map.height_km + SPAWN_MARGIN_KM;

    match edge {
        MapEdge::Top | MapEdge::Bottom => {
            let x = rng.uniform(0.0, map.width_km);
            // "Top" is the low-y edge on screen, the high-y edge in Cartesian space.
            let y = match (edge, y_axis) {
                (MapEdge::Top, YAxis::Down) | (MapEdge::Bottom, YAxis::Up) => below,
                _ => above,
            };
            Position::new(x, y)
        }
        MapEdge::Left => Position::new(-SPAWN_MARGIN_KM, rng.uniform(0.0, map.height_km)),
        MapEdge::Right => Position::new(
            map.width_km + SPAWN_MARGIN_KM,
            rng.uniform(0.0, map.height_km),
        ),
    }
}
