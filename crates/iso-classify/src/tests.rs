//! Unit tests for iso-classify.

#[cfg(test)]
mod helpers {
    use iso_core::GeoPoint;

    use crate::{ClassifyError, ClassifyResult, LandMask};

    /// Closed square ring, counter-clockwise, corners inclusive.
    pub fn square(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(min_lat, min_lon),
            GeoPoint::new(min_lat, max_lon),
            GeoPoint::new(max_lat, max_lon),
            GeoPoint::new(max_lat, min_lon),
            GeoPoint::new(min_lat, min_lon),
        ]
    }

    /// Mask that classifies by longitude threshold: west of `water_west_of`
    /// is water, the rest is land.
    pub struct ThresholdMask {
        pub water_west_of: f64,
    }

    impl LandMask for ThresholdMask {
        fn is_land(&self, coord: GeoPoint) -> ClassifyResult<bool> {
            Ok(coord.lon >= self.water_west_of)
        }
    }

    /// Mask whose lookups always fail, as if the dataset were unavailable.
    pub struct UnavailableMask;

    impl LandMask for UnavailableMask {
        fn is_land(&self, _coord: GeoPoint) -> ClassifyResult<bool> {
            Err(ClassifyError::Dataset("dataset offline".into()))
        }
    }
}

#[cfg(test)]
mod containment {
    use iso_core::{BoundingBox, GeoPoint};

    use super::helpers::square;
    use crate::{ClassifyError, LandMask, PolygonLandMask};

    #[test]
    fn point_inside_ring_is_land() {
        let mask = PolygonLandMask::from_rings(vec![square(52.0, 4.0, 53.0, 5.0)], None);
        assert!(mask.is_land(GeoPoint::new(52.5, 4.5)).unwrap());
    }

    #[test]
    fn point_outside_all_rings_is_water() {
        let mask = PolygonLandMask::from_rings(vec![square(52.0, 4.0, 53.0, 5.0)], None);
        assert!(!mask.is_land(GeoPoint::new(51.0, 4.5)).unwrap());
        assert!(!mask.is_land(GeoPoint::new(52.5, 6.0)).unwrap());
    }

    #[test]
    fn hole_ring_counts_as_water() {
        // Land square with a lake in the middle: even-odd over both rings.
        let mask = PolygonLandMask::from_rings(
            vec![
                square(52.0, 4.0, 53.0, 5.0),
                square(52.4, 4.4, 52.6, 4.6), // hole
            ],
            None,
        );
        assert!(mask.is_land(GeoPoint::new(52.1, 4.1)).unwrap());
        assert!(!mask.is_land(GeoPoint::new(52.5, 4.5)).unwrap(), "lake is water");
    }

    #[test]
    fn degenerate_rings_are_dropped() {
        let mask = PolygonLandMask::from_rings(
            vec![vec![GeoPoint::new(52.0, 4.0), GeoPoint::new(52.1, 4.1)]],
            None,
        );
        assert_eq!(mask.ring_count(), 0);
    }

    #[test]
    fn clip_discards_rings_outside_region() {
        let region = BoundingBox {
            min_lat: 50.0,
            max_lat: 54.0,
            min_lon: 3.0,
            max_lon: 6.0,
        };
        let mask = PolygonLandMask::from_rings(
            vec![
                square(52.0, 4.0, 53.0, 5.0),   // inside region
                square(10.0, 10.0, 11.0, 11.0), // far away
            ],
            Some(region),
        );
        assert_eq!(mask.ring_count(), 1);
        assert!(mask.is_land(GeoPoint::new(52.5, 4.5)).unwrap());
    }

    #[test]
    fn lookup_outside_coverage_is_an_error_not_a_guess() {
        let region = BoundingBox {
            min_lat: 50.0,
            max_lat: 54.0,
            min_lon: 3.0,
            max_lon: 6.0,
        };
        let mask = PolygonLandMask::from_rings(vec![square(52.0, 4.0, 53.0, 5.0)], Some(region));
        let err = mask.is_land(GeoPoint::new(40.0, 4.5)).unwrap_err();
        assert!(matches!(err, ClassifyError::OutOfCoverage(_)));
    }
}

#[cfg(test)]
mod classification {
    use iso_core::{GeoPoint, TravelTime};

    use super::helpers::{ThresholdMask, UnavailableMask};
    use crate::{classify, ClassifyError};

    const LAND: GeoPoint = GeoPoint { lat: 52.0, lon: 5.0 };
    const OCEAN: GeoPoint = GeoPoint { lat: 52.0, lon: 3.0 };

    fn mask() -> ThresholdMask {
        ThresholdMask { water_west_of: 4.0 }
    }

    #[test]
    fn water_overrides_any_finite_duration() {
        // The router returned a plausible 1800 s for an open-ocean point;
        // the mask wins.
        let out = classify(&[OCEAN], &[Some(1800.0)], &mask()).unwrap();
        assert_eq!(out, vec![TravelTime::Unreachable]);
    }

    #[test]
    fn land_durations_pass_through() {
        let out = classify(&[LAND, LAND], &[Some(0.0), Some(2700.5)], &mask()).unwrap();
        assert_eq!(
            out,
            vec![TravelTime::Reachable(0.0), TravelTime::Reachable(2700.5)]
        );
    }

    #[test]
    fn unrouted_land_point_is_unreachable() {
        let out = classify(&[LAND], &[None], &mask()).unwrap();
        assert_eq!(out, vec![TravelTime::Unreachable]);
    }

    #[test]
    fn no_other_negative_value_survives() {
        // Whatever the service sent, the corrected sequence only contains
        // non-negative durations or the unreachable marker.
        let out = classify(&[LAND, OCEAN, LAND], &[Some(-3.0), Some(60.0), Some(42.0)], &mask())
            .unwrap();
        for t in out {
            let secs = t.as_secs();
            assert!(secs >= 0.0 || secs == TravelTime::SENTINEL_SECS, "got {secs}");
        }
    }

    #[test]
    fn misaligned_inputs_rejected() {
        let err = classify(&[LAND], &[], &mask()).unwrap_err();
        assert!(matches!(err, ClassifyError::LengthMismatch { expected: 1, got: 0 }));
    }

    #[test]
    fn mask_failure_aborts_the_pass() {
        let err = classify(&[LAND], &[Some(1.0)], &UnavailableMask).unwrap_err();
        assert!(matches!(err, ClassifyError::Dataset(_)));
    }
}

#[cfg(test)]
mod geojson {
    use std::io::Write;

    use iso_core::GeoPoint;

    use crate::{ClassifyError, LandMask, PolygonLandMask};

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_polygon_and_multipolygon_features() {
        let file = write_temp(
            r#"{
              "type": "FeatureCollection",
              "features": [
                {
                  "type": "Feature",
                  "properties": {},
                  "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[4.0,52.0],[5.0,52.0],[5.0,53.0],[4.0,53.0],[4.0,52.0]]]
                  }
                },
                {
                  "type": "Feature",
                  "properties": {},
                  "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [[[[6.0,52.0],[7.0,52.0],[7.0,53.0],[6.0,53.0],[6.0,52.0]]]]
                  }
                }
              ]
            }"#,
        );

        let mask = PolygonLandMask::from_geojson_path(file.path(), None).unwrap();
        assert_eq!(mask.ring_count(), 2);
        assert!(mask.is_land(GeoPoint::new(52.5, 4.5)).unwrap());
        assert!(mask.is_land(GeoPoint::new(52.5, 6.5)).unwrap());
        assert!(!mask.is_land(GeoPoint::new(52.5, 5.5)).unwrap());
    }

    #[test]
    fn altitude_positions_are_accepted() {
        let file = write_temp(
            r#"{
              "type": "FeatureCollection",
              "features": [{
                "type": "Feature",
                "properties": {},
                "geometry": {
                  "type": "Polygon",
                  "coordinates": [[[4.0,52.0,0.0],[5.0,52.0,0.0],[5.0,53.0,0.0],[4.0,52.0,0.0]]]
                }
              }]
            }"#,
        );
        let mask = PolygonLandMask::from_geojson_path(file.path(), None).unwrap();
        assert_eq!(mask.ring_count(), 1);
    }

    #[test]
    fn malformed_json_is_a_dataset_error() {
        let file = write_temp("{ not geojson");
        let err = PolygonLandMask::from_geojson_path(file.path(), None).unwrap_err();
        assert!(matches!(err, ClassifyError::Dataset(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = PolygonLandMask::from_geojson_path(
            std::path::Path::new("/nonexistent/land.geojson"),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ClassifyError::Io(_)));
    }
}
