use skyburst::compositor::FrameCompositor;
use skyburst::rng::RandomSource;
use skyburst::simulator::Simulator;

/// Show length: 500 frames, one simulation tick per frame.
const FRAMES: u64 = 500;

fn main() {
    println!("=== Fireworks Show Demo (seed 42, {} frames) ===\n", FRAMES);

    let mut sim = Simulator::seeded(42);
    let mut render_rng = RandomSource::seeded(42);
    let compositor = FrameCompositor::new(sim.config(), &mut render_rng);

    let mut peak_rockets = 0;
    let mut peak_explosions = 0;
    let mut peak_particles = 0;
    let mut total_launches = 0;
    let mut previous_rockets = 0;

    for tick in 0..FRAMES {
        sim.advance(tick);
        let frame = compositor.collect(&sim, tick, &mut render_rng);

        if sim.rockets().len() > previous_rockets {
            total_launches += sim.rockets().len() - previous_rockets;
        }
        previous_rockets = sim.rockets().len();

        peak_rockets = peak_rockets.max(sim.rockets().len());
        peak_explosions = peak_explosions.max(sim.explosions().len());
        peak_particles = peak_particles.max(frame.particle_pos.len());

        if tick % 50 == 0 {
            println!(
                "tick {:3}: {} rockets, {} explosions, {} particles, {} trail points",
                tick,
                sim.rockets().len(),
                sim.explosions().len(),
                frame.particle_pos.len(),
                frame.trail_pos.len(),
            );
        }
    }

    println!("\n=== Totals ===");
    println!("Launches observed: >= {}", total_launches);
    println!("Peak rockets:      {}", peak_rockets);
    println!("Peak explosions:   {}", peak_explosions);
    println!("Peak particles:    {}", peak_particles);
}
