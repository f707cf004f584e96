//! End-to-end pipeline tests against deterministic fakes.

#[cfg(test)]
mod helpers {
    use iso_classify::{ClassifyError, ClassifyResult, LandMask};
    use iso_core::GeoPoint;
    use iso_fetch::{FetchError, FetchResult, TravelTimeSource};

    pub const DEST: GeoPoint = GeoPoint { lat: 52.30977, lon: 4.76298 };

    /// Deterministic routing fake: duration grows with the point's distance
    /// from the destination in degree space.  Returns a finite value for
    /// every point — including ones the mask will veto.
    pub struct SyntheticRouting;

    impl TravelTimeSource for SyntheticRouting {
        fn table(
            &self,
            origins: &[GeoPoint],
            destination: GeoPoint,
        ) -> FetchResult<Vec<Option<f64>>> {
            Ok(origins
                .iter()
                .map(|o| {
                    let dlat = o.lat - destination.lat;
                    let dlon = o.lon - destination.lon;
                    Some((dlat.abs() + dlon.abs()) * 100_000.0)
                })
                .collect())
        }
    }

    /// Routing fake that fails every call.
    pub struct OfflineRouting;

    impl TravelTimeSource for OfflineRouting {
        fn table(&self, _: &[GeoPoint], _: GeoPoint) -> FetchResult<Vec<Option<f64>>> {
            Err(FetchError::Service {
                code: "NoTable".into(),
                message: "server offline".into(),
            })
        }
    }

    /// Everything west of the given longitude is sea.
    pub struct CoastlineMask {
        pub sea_west_of: f64,
    }

    impl LandMask for CoastlineMask {
        fn is_land(&self, coord: GeoPoint) -> ClassifyResult<bool> {
            Ok(coord.lon >= self.sea_west_of)
        }
    }

    pub struct BrokenMask;

    impl LandMask for BrokenMask {
        fn is_land(&self, _coord: GeoPoint) -> ClassifyResult<bool> {
            Err(ClassifyError::Dataset("dataset offline".into()))
        }
    }
}

#[cfg(test)]
mod run {
    use iso_core::{FieldSample, GridSpec, TravelTime};
    use iso_fetch::BatchedFetcher;

    use super::helpers::{BrokenMask, CoastlineMask, OfflineRouting, SyntheticRouting, DEST};
    use crate::{PipelineError, Session};

    fn all_land() -> CoastlineMask {
        CoastlineMask { sea_west_of: f64::NEG_INFINITY }
    }

    #[test]
    fn field_covers_every_grid_point_in_order() {
        let routing = SyntheticRouting;
        let mask = all_land();
        let session = Session::new(DEST, &routing, &mask);
        assert_eq!(session.destination(), DEST);

        let spec = GridSpec::new(30.0, 30.0, 10.0);
        let field = session.run(&spec).unwrap();

        assert_eq!(field.len(), spec.point_count());

        let grid = spec.generate(DEST).unwrap();
        for (sample, point) in field.samples().iter().zip(grid.points()) {
            assert_eq!(sample.coord, point.coord);
        }
    }

    #[test]
    fn rerun_with_unchanged_inputs_is_identical() {
        let routing = SyntheticRouting;
        let mask = CoastlineMask { sea_west_of: 4.5 };
        let session = Session::new(DEST, &routing, &mask);
        let spec = GridSpec::new(20.0, 20.0, 5.0);

        let a = session.run(&spec).unwrap();
        let b = session.run(&spec).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sea_points_are_unreachable_despite_finite_durations() {
        let routing = SyntheticRouting; // finite duration for every point
        let mask = CoastlineMask { sea_west_of: DEST.lon };
        let session = Session::new(DEST, &routing, &mask);

        let field = session.run(&GridSpec::new(20.0, 20.0, 10.0)).unwrap();

        let (sea, land): (Vec<&FieldSample>, Vec<&FieldSample>) = field
            .samples()
            .iter()
            .partition(|s| s.coord.lon < DEST.lon);
        assert!(!sea.is_empty() && !land.is_empty());
        assert!(sea.iter().all(|s| s.travel_time == TravelTime::Unreachable));
        assert!(land.iter().all(|s| s.travel_time.is_reachable()));
    }

    #[test]
    fn every_value_is_nonnegative_or_the_sentinel() {
        let routing = SyntheticRouting;
        let mask = CoastlineMask { sea_west_of: 4.6 };
        let session = Session::new(DEST, &routing, &mask);

        let field = session.run(&GridSpec::new(30.0, 30.0, 5.0)).unwrap();
        for sample in field.samples() {
            let secs = sample.travel_time.as_secs();
            assert!(
                secs >= 0.0 || secs == TravelTime::SENTINEL_SECS,
                "unexpected value {secs}"
            );
        }
    }

    #[test]
    fn a_new_spec_means_a_new_field() {
        let routing = SyntheticRouting;
        let mask = all_land();
        // Small batch cap: results are identical however the fetch is
        // partitioned.
        let session =
            Session::new(DEST, &routing, &mask).with_fetcher(BatchedFetcher::new(7));

        let coarse = session.run(&GridSpec::new(30.0, 30.0, 10.0)).unwrap();
        let fine = session.run(&GridSpec::new(30.0, 30.0, 5.0)).unwrap();
        assert_eq!(coarse.len(), 49);
        assert_eq!(fine.len(), 169);
    }

    #[test]
    fn invalid_spec_is_a_grid_error() {
        let routing = SyntheticRouting;
        let mask = all_land();
        let session = Session::new(DEST, &routing, &mask);

        let err = session.run(&GridSpec::new(30.0, 30.0, -1.0)).unwrap_err();
        assert!(matches!(err, PipelineError::Grid(_)));
    }

    #[test]
    fn routing_outage_is_a_fetch_error() {
        let routing = OfflineRouting;
        let mask = all_land();
        let session = Session::new(DEST, &routing, &mask);

        let err = session.run(&GridSpec::new(20.0, 20.0, 10.0)).unwrap_err();
        assert!(matches!(err, PipelineError::Fetch(_)));
    }

    #[test]
    fn mask_outage_is_a_classify_error() {
        let routing = SyntheticRouting;
        let session = Session::new(DEST, &routing, &BrokenMask);

        let err = session.run(&GridSpec::new(20.0, 20.0, 10.0)).unwrap_err();
        assert!(matches!(err, PipelineError::Classify(_)));
    }
}
