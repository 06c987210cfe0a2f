//! End-to-end rise/transit/set scenarios across latitudes and seasons.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use star_visibility::time::sidereal_day;
use star_visibility::{transform, visibility, EquatorialCoordinates, ObjectTiming, Observer};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn day_bounds(d: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = d.and_hms_opt(0, 0, 0).unwrap().and_utc();
    (start, start + Duration::hours(24))
}

const LONDON: (f64, f64) = (51.5074, -0.1278);
const SYDNEY: (f64, f64) = (-33.8688, 151.2093);

fn star(ra: f64, dec: f64) -> EquatorialCoordinates {
    EquatorialCoordinates::new(ra, dec).unwrap()
}

fn observer((lat, lon): (f64, f64)) -> Observer {
    Observer::new(lat, lon).unwrap()
}

#[test]
fn vega_is_barely_circumpolar_from_london() {
    // Vega's declination (38.78°) just exceeds London's circumpolar limit
    // of 90° - 51.51° = 38.49°
    let vega = star(18.615, 38.784);
    let timing = visibility::object_timing(vega, observer(LONDON), date(2024, 8, 1)).unwrap();

    let ObjectTiming::AlwaysVisible {
        transit,
        max_altitude,
        min_altitude,
    } = timing
    else {
        panic!("Vega should be circumpolar from London, got {timing:?}");
    };

    assert!((max_altitude - 77.28).abs() < 0.01);
    assert!(min_altitude > 0.0 && min_altitude < 1.0);

    // Transit altitude agrees with the instantaneous transform
    let at_transit = transform::horizontal_position(vega, observer(LONDON), &transit).unwrap();
    assert!((at_transit.altitude() - max_altitude).abs() < 1e-5);
    // Vega's declination is below London's latitude, so it culminates south
    // of the zenith, on the meridian
    assert!((at_transit.azimuth() - 180.0).abs() < 0.1);
}

#[test]
fn sirius_events_stay_inside_the_queried_day() {
    let sirius = star(6.752, -16.716);
    let london = observer(LONDON);

    for d in [
        date(2024, 1, 15),
        date(2024, 2, 29),
        date(2024, 6, 21),
        date(2024, 12, 31),
        date(2025, 1, 1),
    ] {
        let timing = visibility::object_timing(sirius, london, d).unwrap();
        let ObjectTiming::RisesAndSets {
            rise, transit, set, ..
        } = timing
        else {
            panic!("Sirius should rise and set from London on {d}");
        };

        let (day_start, day_end) = day_bounds(d);
        for event in [rise, transit, set] {
            assert!(
                event >= day_start && event < day_end,
                "{event} outside UTC day {d}"
            );
        }
    }
}

#[test]
fn transit_drifts_one_sidereal_day_between_dates() {
    // Away from the midnight wrap the first transit of consecutive days is
    // separated by exactly one sidereal day (within rounding)
    let vega = star(18.615, 38.784);
    let london = observer(LONDON);

    let mut previous: Option<DateTime<Utc>> = None;
    for day in 1..=5 {
        let timing = visibility::object_timing(vega, london, date(2024, 8, day)).unwrap();
        let transit = *timing.transit().unwrap();
        if let Some(prev) = previous {
            let drift = transit - prev;
            let error = (drift - sidereal_day()).num_milliseconds().abs();
            assert!(error <= 5, "drift {drift} deviates from a sidereal day");
        }
        previous = Some(transit);
    }
}

#[test]
fn southern_sky_mirrors_northern_classification() {
    let alpha_cen = star(14.66, -60.84);
    let polaris = star(2.530, 89.264);
    let sydney = observer(SYDNEY);
    let london = observer(LONDON);
    let d = date(2024, 3, 20);

    // Alpha Centauri: circumpolar from Sydney (|dec| > 90 - |lat|), never
    // visible from London
    assert!(visibility::object_timing(alpha_cen, sydney, d)
        .unwrap()
        .is_always_visible());
    assert!(visibility::object_timing(alpha_cen, london, d)
        .unwrap()
        .is_never_visible());

    // Polaris: the reverse
    assert!(visibility::object_timing(polaris, london, d)
        .unwrap()
        .is_always_visible());
    assert!(visibility::object_timing(polaris, sydney, d)
        .unwrap()
        .is_never_visible());
}

#[test]
fn north_pole_sees_one_celestial_hemisphere() {
    let pole = observer((90.0, 0.0));
    let d = date(2024, 6, 1);

    let northern = visibility::object_timing(star(5.5, 45.0), pole, d).unwrap();
    assert!(northern.is_always_visible());
    assert!((northern.max_altitude() - 45.0).abs() < 1e-9);

    let southern = visibility::object_timing(star(5.5, -45.0), pole, d).unwrap();
    assert!(southern.is_never_visible());
    assert!((southern.max_altitude() + 45.0).abs() < 1e-9);

    // On the celestial equator the altitude is identically zero; the
    // classification must come out finite and sane rather than NaN
    let skimming = visibility::object_timing(star(5.5, 0.0), pole, d).unwrap();
    assert!(skimming.max_altitude().is_finite());
    assert!(skimming.max_altitude().abs() < 1e-9);
}

#[test]
fn equatorial_observer_sees_every_star_rise() {
    // From the equator no object is circumpolar and none is permanently
    // hidden; everything rises and sets
    let quito = observer((0.0, -78.5));
    let d = date(2024, 9, 1);

    for dec in [-89.0, -45.0, 0.0, 45.0, 89.0] {
        let timing = visibility::object_timing(star(12.0, dec), quito, d).unwrap();
        assert!(
            timing.rises_and_sets(),
            "dec {dec} should rise and set from the equator"
        );
        // Transit altitude is the colatitude formula
        assert!((timing.max_altitude() - (90.0 - dec.abs())).abs() < 1e-9);
    }
}

#[test]
fn predicates_agree_with_timing_engine_across_grid() {
    let d = date(2024, 3, 20);
    let latitudes = [-80.0, -45.0, -10.0, 0.0, 10.0, 45.0, 80.0];
    let declinations = [-85.0, -40.0, -5.0, 0.0, 5.0, 40.0, 85.0];

    for lat in latitudes {
        let obs = observer((lat, 0.0));
        for dec in declinations {
            let object = star(6.0, dec);
            let timing = visibility::object_timing(object, obs, d).unwrap();

            assert_eq!(
                timing.is_always_visible(),
                visibility::is_circumpolar(object, obs),
                "circumpolar mismatch at lat {lat}, dec {dec}"
            );
            assert_eq!(
                timing.is_never_visible(),
                visibility::never_rises(object, obs),
                "never-rises mismatch at lat {lat}, dec {dec}"
            );
        }
    }
}

#[test]
fn rise_and_set_cross_the_horizon() {
    let rigel = star(5.242, -8.202);
    let sydney = observer(SYDNEY);
    let timing = visibility::object_timing(rigel, sydney, date(2024, 11, 10)).unwrap();

    let ObjectTiming::RisesAndSets { rise, set, .. } = timing else {
        panic!("Rigel should rise and set from Sydney");
    };

    for event in [rise, set] {
        let position = transform::horizontal_position(rigel, sydney, &event).unwrap();
        assert!(
            position.altitude().abs() < 1e-3,
            "horizon crossing at altitude {}",
            position.altitude()
        );
    }

    // Shortly after rise the star is climbing, shortly before set it is
    // descending
    let after_rise =
        transform::horizontal_position(rigel, sydney, &(rise + Duration::minutes(10))).unwrap();
    assert!(after_rise.altitude() > 0.0);
    let before_set =
        transform::horizontal_position(rigel, sydney, &(set - Duration::minutes(10))).unwrap();
    assert!(before_set.altitude() > 0.0);
    let after_set =
        transform::horizontal_position(rigel, sydney, &(set + Duration::minutes(10))).unwrap();
    assert!(after_set.altitude() < 0.0);
}
