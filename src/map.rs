//! Map presentation binding.
//!
//! Projects the current reading onto an external map widget: the first sync
//! creates the map and its marker, every later sync relocates the existing
//! marker in place. No logic of its own beyond that idempotence.

use crate::position::Coordinate;

/// Zoom level for the capture screen.
pub const DEFAULT_ZOOM: u8 = 15;
/// Single-finger pan and zoom.
pub const GESTURE_HANDLING: &str = "greedy";

/// Widget configuration consumed at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    /// Provider style identifier, if the shell supplies one.
    pub style_id: Option<String>,
    pub zoom: u8,
    /// Default widget chrome stays off on the capture screen.
    pub default_ui: bool,
    pub gesture_handling: &'static str,
}

impl MapOptions {
    pub fn for_style(style_id: Option<String>) -> Self {
        Self {
            style_id,
            zoom: DEFAULT_ZOOM,
            default_ui: false,
            gesture_handling: GESTURE_HANDLING,
        }
    }
}

/// Contract of the external map widget.
pub trait MapSurface {
    type Map;
    type Marker;

    fn create_map(&mut self, center: Coordinate, options: &MapOptions) -> Self::Map;
    fn create_marker(&mut self, map: &Self::Map, position: Coordinate) -> Self::Marker;
    fn move_marker(&mut self, marker: &mut Self::Marker, position: Coordinate);
}

/// Idempotent projection of the current reading onto a map surface.
pub struct MapBinding<S: MapSurface> {
    surface: S,
    options: MapOptions,
    map: Option<S::Map>,
    marker: Option<S::Marker>,
}

impl<S: MapSurface> MapBinding<S> {
    pub fn new(surface: S, options: MapOptions) -> Self {
        Self {
            surface,
            options,
            map: None,
            marker: None,
        }
    }

    /// Reflect the reading on the widget. Safe to call on every state change.
    pub fn sync(&mut self, position: Coordinate) {
        match (&self.map, &mut self.marker) {
            (Some(_), Some(marker)) => self.surface.move_marker(marker, position),
            _ => {
                let map = self.surface.create_map(position, &self.options);
                let marker = self.surface.create_marker(&map, position);
                self.map = Some(map);
                self.marker = Some(marker);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSurface {
        maps_created: u32,
        markers_created: u32,
        moves: Vec<Coordinate>,
        last_options: Option<MapOptions>,
    }

    impl MapSurface for CountingSurface {
        type Map = u32;
        type Marker = u32;

        fn create_map(&mut self, _center: Coordinate, options: &MapOptions) -> u32 {
            self.maps_created += 1;
            self.last_options = Some(options.clone());
            self.maps_created
        }

        fn create_marker(&mut self, _map: &u32, _position: Coordinate) -> u32 {
            self.markers_created += 1;
            self.markers_created
        }

        fn move_marker(&mut self, _marker: &mut u32, position: Coordinate) {
            self.moves.push(position);
        }
    }

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_first_sync_creates_map_and_marker() {
        let mut binding = MapBinding::new(CountingSurface::default(), MapOptions::for_style(None));

        binding.sync(coord(59.3293, 18.0686));

        assert_eq!(binding.surface.maps_created, 1);
        assert_eq!(binding.surface.markers_created, 1);
        assert!(binding.surface.moves.is_empty());
    }

    #[test]
    fn test_later_syncs_only_move_the_marker() {
        let mut binding = MapBinding::new(CountingSurface::default(), MapOptions::for_style(None));

        binding.sync(coord(59.3293, 18.0686));
        binding.sync(coord(59.3294, 18.0690));
        binding.sync(coord(59.3300, 18.0700));

        assert_eq!(binding.surface.maps_created, 1);
        assert_eq!(binding.surface.markers_created, 1);
        assert_eq!(
            binding.surface.moves,
            vec![coord(59.3294, 18.0690), coord(59.3300, 18.0700)]
        );
    }

    #[test]
    fn test_capture_screen_options() {
        let mut binding = MapBinding::new(
            CountingSurface::default(),
            MapOptions::for_style(Some("muure-dark".into())),
        );

        binding.sync(coord(0.0, 0.0));

        let options = binding.surface.last_options.clone().unwrap();
        assert_eq!(options.zoom, DEFAULT_ZOOM);
        assert_eq!(options.style_id.as_deref(), Some("muure-dark"));
        assert!(!options.default_ui);
        assert_eq!(options.gesture_handling, "greedy");
    }
}
