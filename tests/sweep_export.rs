//! Sweep and CSV export integration tests

use approx::assert_relative_eq;
use tempfile::tempdir;
use txline::prelude::*;

fn reference_runner(material: MaterialProperties) -> SweepRunner<TwoWireLineModel> {
    SweepRunner::new(
        TwoWireLineModel::new(TwoWireGeometry::awg14_reference()),
        material,
        60.0,
    )
}

#[test]
fn reference_sweep_matches_single_evaluation() {
    let material = MaterialProperties::copper_in_air();
    let table = reference_runner(material)
        .run(&SweepConfig::default().range)
        .unwrap();
    let reference = TwoWireLineModel::new(TwoWireGeometry::awg14_reference())
        .compute(&material, &OperatingPoint::new(60.0, 2500.0))
        .unwrap();

    assert_eq!(table.len(), 50);
    let row = table.rows.iter().find(|r| r.length_m == 2500.0).unwrap();
    assert_eq!(row.params, reference);
    for (i, row) in table.rows.iter().enumerate() {
        assert_relative_eq!(row.length_m, 100.0 * (i + 1) as f64);
        let k = row.length_m / 2500.0;
        assert_relative_eq!(row.params.r, k * reference.r, max_relative = 1.0e-12);
        assert_relative_eq!(row.params.l, k * reference.l, max_relative = 1.0e-12);
        assert_relative_eq!(row.params.c, k * reference.c, max_relative = 1.0e-12);
    }
}

#[test]
fn csv_file_round_trips_through_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("two_wire.csv");
    let material = MaterialProperties::copper_in_air().with_insulator_conductivity(1.0e-12);
    let table = reference_runner(material)
        .run(&LengthRange::default())
        .unwrap();

    write_csv_file(&path, &table).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Length (m), R (Ohm), L (H), C (F), G (S)"));
    let parsed: Vec<Vec<f64>> = lines
        .map(|line| line.split(',').map(|f| f.parse().unwrap()).collect())
        .collect();
    assert_eq!(parsed.len(), table.len());
    for (fields, row) in parsed.iter().zip(&table.rows) {
        let p = row.params;
        assert_eq!(fields, &vec![row.length_m, p.r, p.l, p.c, p.g.unwrap()]);
    }
}

#[test]
fn export_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.csv");
    let table = reference_runner(MaterialProperties::default())
        .run(&LengthRange::new(1.0, 2.0, 1.0))
        .unwrap();
    let err: SweepError = write_csv_file(&path, &table).unwrap_err().into();
    assert!(matches!(err, SweepError::Io(_)));
}

#[test]
fn coaxial_sweep_is_linear_too() {
    let runner = SweepRunner::new(
        CoaxialLineModel::new(CoaxialGeometry::new(0.000_813, 0.02)),
        MaterialProperties::copper_in_air(),
        1.0e3,
    );
    let table = runner.run(&LengthRange::new(10.0, 40.0, 10.0)).unwrap();
    assert_eq!(table.len(), 4);
    let first = table.rows[0].params;
    let last = table.rows[3].params;
    assert_relative_eq!(last.l, 4.0 * first.l, max_relative = 1.0e-12);
    assert_relative_eq!(last.r, 4.0 * first.r, max_relative = 1.0e-12);
}
