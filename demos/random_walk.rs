// Demonstration: drive the navigation environment with random actions.
//
// Run from the repo root:
//   cargo run --example random_walk -- --episodes 5 --seed 42

use ndarray::Array3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use voxnav::{
    Action, CyclicVolumeProvider, EnvConfig, GridPos, Mode, NavEnv, ScreenDims, Volume,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let episodes: usize = arg_value(&args, "--episodes")
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    // Synthetic sample: a radial intensity falloff around the target landmark.
    let extent = 64usize;
    let target = GridPos::new(40, 28, 32);
    let data = Array3::from_shape_fn((extent, extent, extent), |(x, y, z)| {
        let pos = GridPos::new(x as i64, y as i64, z as i64);
        (-pos.distance_to(&target) / extent as f64).exp() as f32
    });
    let volume = Volume::new(data, target, voxnav::generate_id());

    let config = EnvConfig {
        screen_dims: ScreenDims::new(15, 15, 15),
        max_num_frames: 200,
        mode: Mode::Eval,
        ..EnvConfig::default()
    };
    let provider = CyclicVolumeProvider::new(vec![volume]);
    let mut env = match NavEnv::new(config, Box::new(provider), seed) {
        Ok(env) => env,
        Err(e) => {
            eprintln!("failed to build environment: {e}");
            std::process::exit(2);
        }
    };

    println!("actions: {:?}", env.get_action_meanings());

    let mut rng = StdRng::seed_from_u64(seed);
    for episode in 0..episodes {
        if let Err(e) = env.reset() {
            eprintln!("reset failed: {e}");
            std::process::exit(2);
        }
        println!(
            "episode {episode}: start {} target {}",
            env.start_location(),
            target
        );

        let mut steps = 0u32;
        loop {
            let action = Action::all()[rng.gen_range(0..Action::COUNT)];
            match env.step(action) {
                Ok(result) => {
                    steps += 1;
                    if result.terminal {
                        println!(
                            "episode {episode}: {steps} steps, score {:.2}, distance error {:.2}",
                            result.diagnostics.score, result.diagnostics.distance_error
                        );
                        break;
                    }
                }
                Err(e) => {
                    eprintln!("step failed: {e}");
                    std::process::exit(2);
                }
            }
        }
    }

    println!("{}", env.stats());
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
