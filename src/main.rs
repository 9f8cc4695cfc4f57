use noise_player::{
    cli::{self, Command},
    constants::SAMPLE_RATE,
    engine::spawn_interrupt_watcher,
    export::save_wav,
    interrupt::CtrlC,
    player::{self, PlayArgs},
    sink::{list_devices, CpalSink},
    DeviceError, Error,
};
use rand::{rngs::StdRng, SeedableRng};
use std::{
    path::Path,
    process,
    time::{SystemTime, UNIX_EPOCH},
};

fn main() {
    let command = match cli::parse_command(std::env::args().skip(1)) {
        Some(Ok(command)) => command,
        Some(Err(err)) => {
            eprintln!("{}", err);
            process::exit(1);
        }
        None => {
            println!("{}", cli::USAGE);
            process::exit(1);
        }
    };

    let result = match command {
        Command::Play(args) => play(&args),
        Command::Render { play, output } => render(&play, &output),
        Command::List => list(),
        Command::Help => {
            println!("{}", cli::HELP);
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        process::exit(1);
    }
}

/// Seeds the random source once per process from the wall clock.
fn seeded_rng() -> StdRng {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0);
    StdRng::seed_from_u64(nanos)
}

fn play(args: &PlayArgs) -> Result<(), Error> {
    // An interrupt ends the process at once, even mid-write
    let watcher = spawn_interrupt_watcher(CtrlC::install()?, || process::exit(0));

    let mut sink = CpalSink::new();
    player::play(args, &mut sink, &mut seeded_rng())?;

    // The duration has elapsed; stay silent until interrupted
    watcher.join().ok();
    Ok(())
}

fn render(args: &PlayArgs, output: &Path) -> Result<(), Error> {
    let samples = player::render(args, &mut seeded_rng())?;
    save_wav(output, &samples, SAMPLE_RATE).map_err(DeviceError::from)?;
    println!("Saved {} samples to {}", samples.len(), output.display());
    Ok(())
}

fn list() -> Result<(), Error> {
    for (id, device) in list_devices()?.iter().enumerate() {
        println!("ID: {}, {}", id, device);
    }
    Ok(())
}
