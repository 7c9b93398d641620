// Integration tests for the decode -> to_2d -> reproject chain:
//   idempotence, vertex-count preservation, determinism and target CRS.

use impactmap_geom::{decode, reproject, to_2d, Crs, Geometry, Reprojector};

const SAMPLES: &[&str] = &[
    "POINT(530000 180000)",
    "POINT Z(530000 180000 4)",
    "LINESTRING Z(530000 180000 10, 530100 180100 12)",
    "LINESTRING(530000 180000 10, 530100 180100 12)",
    "LINESTRING(530200 180200, 530300 180300, 530350 180420)",
    "MULTILINESTRING Z((530000 180000 1, 530010 180010 2), (530020 180020 3, 530030 180030 4, 530040 180040 5))",
    "MULTILINESTRING((530000 180000, 530010 180010), (530020 180020, 530030 180030))",
    "POLYGON((530000 180000, 530100 180000, 530100 180100, 530000 180000))",
    "MULTIPOLYGON(((530000 180000, 530100 180000, 530100 180100, 530000 180000)))",
];

fn samples() -> Vec<Geometry> {
    SAMPLES.iter().map(|text| decode(text).unwrap()).collect()
}

fn line_lengths(geom: &Geometry) -> Vec<usize> {
    match geom {
        Geometry::LineString(line) => vec![line.len()],
        Geometry::MultiLineString(lines) => lines.iter().map(Vec::len).collect(),
        _ => Vec::new(),
    }
}

#[test]
fn to_2d_is_idempotent() {
    for geom in samples() {
        let once = to_2d(&geom);
        assert_eq!(to_2d(&once), once, "{}", geom.kind());
    }
}

#[test]
fn to_2d_removes_every_z() {
    for geom in samples() {
        assert!(!geom.to_2d().has_z(), "{}", geom.kind());
    }
}

#[test]
fn to_2d_preserves_line_vertex_counts_and_order() {
    for geom in samples() {
        let flat = geom.to_2d();
        assert_eq!(line_lengths(&flat), line_lengths(&geom));
        for (before, after) in geom.vertices().zip(flat.vertices()) {
            assert_eq!((before.x, before.y), (after.x, after.y));
        }
    }
}

#[test]
fn reprojection_is_deterministic_and_targets_wgs84() {
    let reprojector = Reprojector::national_grid_to_wgs84().unwrap();
    for geom in samples().iter().map(Geometry::to_2d) {
        let first = reprojector.reproject(&geom).unwrap();
        let second = reprojector.reproject(&geom).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.crs(), Crs::WGS84);
        assert_eq!(first.geometry().num_vertices(), geom.num_vertices());
        assert_eq!(first.geometry().kind(), geom.kind());
    }
}

#[test]
fn reprojected_london_segment_is_in_london() {
    let geom = decode("LINESTRING Z(530000 180000 10, 530100 180100 12)").unwrap().to_2d();
    let shape = reproject(&geom, Crs::BRITISH_NATIONAL_GRID, Crs::WGS84).unwrap();
    for v in shape.geometry().vertices() {
        assert!((-0.13..-0.12).contains(&v.x), "lon {}", v.x);
        assert!((51.50..51.51).contains(&v.y), "lat {}", v.y);
        assert!(v.z.is_none());
    }
}

#[test]
fn web_mercator_target_is_metric() {
    let geom = decode("POINT(530000 180000)").unwrap();
    let shape = reproject(&geom, Crs::BRITISH_NATIONAL_GRID, Crs::WEB_MERCATOR).unwrap();
    let Geometry::Point(Some(v)) = shape.geometry() else { panic!("expected point") };
    // Roughly -0.128 degrees and 51.504 degrees in spherical mercator metres.
    assert!((-15_000.0..-13_000.0).contains(&v.x), "x {}", v.x);
    assert!((6_704_000.0..6_714_000.0).contains(&v.y), "y {}", v.y);
}

#[test]
fn untagged_3d_line_matches_tagged_form() {
    let tagged = decode("LINESTRING Z(530000 180000 10, 530100 180100 12)").unwrap();
    let untagged = decode("LINESTRING(530000 180000 10, 530100 180100 12)").unwrap();
    assert!(untagged.has_z());
    assert_eq!(untagged, tagged);
    assert_eq!(
        reproject(&untagged.to_2d(), Crs::BRITISH_NATIONAL_GRID, Crs::WGS84).unwrap(),
        reproject(&tagged.to_2d(), Crs::BRITISH_NATIONAL_GRID, Crs::WGS84).unwrap(),
    );
}
