use crate::error::GeoPointIndexError;
use crate::point::CartPoint3D;

#[test]
fn lat_lon_to_cartesian() {
    let cases = [
        (-90.0, -180.0, 0.0, 0.0, -1.0),
        (-90.0, 180.0, 0.0, 0.0, -1.0),
        (90.0, -180.0, 0.0, 0.0, 1.0),
        (90.0, 180.0, 0.0, 0.0, 1.0),
        (0.0, 0.0, 1.0, 0.0, 0.0),
        (-90.0, 0.0, 0.0, 0.0, -1.0),
        (90.0, 0.0, 0.0, 0.0, 1.0),
        (0.0, 180.0, -1.0, 0.0, 0.0),
        (0.0, -180.0, -1.0, 0.0, 0.0),
        (0.0, 90.0, 0.0, 1.0, 0.0),
        (0.0, -90.0, 0.0, -1.0, 0.0),
        (30.0, 60.0, 0.433012701892, 0.75, 0.5),
    ];

    for (lat, lon, x, y, z) in cases {
        let point = CartPoint3D::from_lat_lon(lat, lon).unwrap();
        assert!(
            (point.x - x).abs() < 1e-12,
            "x for ({lat}, {lon}): expected {x}, got {}",
            point.x
        );
        assert!(
            (point.y - y).abs() < 1e-12,
            "y for ({lat}, {lon}): expected {y}, got {}",
            point.y
        );
        assert!(
            (point.z - z).abs() < 1e-12,
            "z for ({lat}, {lon}): expected {z}, got {}",
            point.z
        );
    }
}

#[test]
fn great_circle_distance() {
    let cases = [
        // London Heathrow to New York JFK
        (51.4706, -0.461941, 40.639447, -73.779317, 5_539_696.120653),
        // A short hop across the 180° antimeridian
        (-16.690599, -179.876999, -16.4667, 179.339996, 87_081.41472344),
        // A point is at distance zero from itself
        (30.0, -140.0, 30.0, -140.0, 0.0),
    ];

    for (lat1, lon1, lat2, lon2, expected) in cases {
        let start = CartPoint3D::from_lat_lon(lat1, lon1).unwrap();
        let end = CartPoint3D::from_lat_lon(lat2, lon2).unwrap();

        let actual = start.distance_meters(&end);
        assert!(
            (actual - expected).abs() < 1e-6,
            "distance ({lat1}, {lon1}) -> ({lat2}, {lon2}): expected {expected}, got {actual}"
        );
    }
}

#[test]
fn distance_is_symmetric() {
    let pairs = [
        ((51.4706, -0.461941), (40.639447, -73.779317)),
        ((-16.690599, -179.876999), (-16.4667, 179.339996)),
        ((89.9, 12.0), (-89.9, -170.0)),
    ];

    for ((lat1, lon1), (lat2, lon2)) in pairs {
        let a = CartPoint3D::from_lat_lon(lat1, lon1).unwrap();
        let b = CartPoint3D::from_lat_lon(lat2, lon2).unwrap();

        assert_eq!(a.distance_meters(&b), b.distance_meters(&a));
    }
}

#[test]
fn distance_to_self_is_zero() {
    let point = CartPoint3D::from_lat_lon(51.4706, -0.461941).unwrap();

    assert_eq!(point.distance_meters(&point), 0.0);
}

#[test]
fn invalid_lat_lon_is_rejected() {
    let cases = [
        (-90.1, 0.0),
        (90.1, 0.0),
        (0.0, -180.1),
        (0.0, 180.1),
        (f64::NAN, 0.0),
        (0.0, f64::NAN),
    ];

    for (lat, lon) in cases {
        let result = CartPoint3D::from_lat_lon(lat, lon);
        assert!(
            matches!(
                result,
                Err(GeoPointIndexError::InvalidCoordinate { .. })
            ),
            "expected ({lat}, {lon}) to be rejected, got {result:?}"
        );
    }
}

#[test]
fn ordinate_by_dimension() {
    let point = CartPoint3D::new(0.25, -0.5, 0.75);

    assert_eq!(point.ordinate(0).unwrap(), 0.25);
    assert_eq!(point.ordinate(1).unwrap(), -0.5);
    assert_eq!(point.ordinate(2).unwrap(), 0.75);
}

#[test]
fn ordinate_rejects_out_of_range_dimension() {
    let point = CartPoint3D::new(0.25, -0.5, 0.75);

    assert!(matches!(
        point.ordinate(3),
        Err(GeoPointIndexError::InvalidDimension(3))
    ));
}
