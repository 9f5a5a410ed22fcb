use txline::prelude::*;

fn main() -> Result<(), TxLineError> {
    // 14 AWG copper pair in air, 2 cm apart, at mains frequency.
    let model = TwoWireLineModel::new(TwoWireGeometry::awg14_reference());
    let material = MaterialProperties::copper_in_air();

    let params = model.compute(&material, &OperatingPoint::new(60.0, 2500.0))?;
    println!("R: {:.6e}", params.r);
    println!("L: {:.6e}", params.l);
    println!("C: {:.6e}", params.c);

    if let Some(line) = TransmissionLine::from_parameters(&params, 2500.0) {
        let zc = line.characteristic_impedance(angular_frequency(60.0));
        println!("Zc(60 Hz): {:.3} {:+.3}j Ohm", zc.re, zc.im);
    }

    let config = SweepConfig::default();
    let table = SweepRunner::new(model, material, config.frequency_hz).run(&config.range)?;
    print!("{}", render_console(&table));
    Ok(())
}
