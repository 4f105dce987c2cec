use rescav::prelude::*;

fn main() {
    let grid_x = 100;
    let grid_y = 50;

    // 100mm x 50mm cavity at 1mm resolution
    let mut simulation = Simulation::new(SimulationDescriptor {
        grid_x,
        grid_y,
        spatial_step: 1e-3, // [m]
        e_r: 1.0,
        mu_r: 1.0,
        light_speed: 3e8, // [m/s]
        mode: Mode::TM,
    })
    .unwrap();

    // 10 GHz drive in the middle of the cavity, probed off-center
    simulation
        .set_sources(vec![Source::Sinusoidal {
            x: 50,
            y: 25,
            freq: 10e9, // [Hz]
            amp: 1.0,
        }])
        .unwrap();
    simulation.set_probe(75, 25).unwrap();

    println!(
        "\n-- General Simulation Info --\n\
        grid size:    {} x {}\n\
        Δx:           {:<9.2e} m\n\
        Δt:           {:<9.2e} s\n",
        grid_x,
        grid_y,
        simulation.parameters().delta_x,
        simulation.time_step(),
    );

    simulation.run(RunDescriptor {
        n_steps: 700,
        verbose: true,
    });

    let samples = simulation.probe_values();
    let peak = samples.iter().fold(0.0f64, |acc, &v| acc.max(v.abs()));
    println!(
        "\ncaptured {} probe samples, peak |Ez| at the probe: {:.4e} V/m",
        samples.len(),
        peak,
    );
}
