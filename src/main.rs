use cosmic_ascent::scenery::starfield::should_check;
use cosmic_ascent::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const DEFAULT_CONFIG_PATH: &str = "assets/ascent.toml";
const FRAME_RATE: f64 = 60.0;
const MAX_FLIGHT_TIME: f64 = 600.0; // s
const SCREEN_HEIGHT: f64 = 800.0; // px

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

fn announce(event: &SimEvent, layers: &LayerTable) {
    match event {
        SimEvent::CountdownStarted => println!("Countdown started"),
        SimEvent::CountdownTick { remaining } => println!("T-{}", remaining),
        SimEvent::Launched => println!("Launch!"),
        SimEvent::Liftoff => println!("Liftoff"),
        SimEvent::LayerChanged { to, .. } => println!("Entering {}", layers[*to].name),
        SimEvent::Won => println!("Cosmic milestone reached: edge of the observable universe"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::load_or_default(DEFAULT_CONFIG_PATH),
    };

    let mut clock = SimulationClock::new(config);
    let mut rng = StdRng::from_entropy();
    let mut throttle = Throttle::new();
    let mut backdrop = Backdrop::default();
    let mut telemetry = Telemetry::new();
    let mut stars = StarField::for_layer(
        clock.current_layer(),
        SCREEN_HEIGHT * SKY_SCROLL_HEIGHT_FACTOR,
        &mut rng,
    );
    let mut fade_started: Option<f64> = None;

    for event in clock.start() {
        announce(&event, clock.layer_table());
    }

    let frame_time = 1.0 / FRAME_RATE;
    let mut frame: u64 = 0;
    loop {
        let timestamp = frame as f64 * frame_time;
        // Light-speed mode comes from the clock's config.
        let result = clock.tick(timestamp, throttle.control_input(false));

        for event in &result.events {
            match event {
                SimEvent::Launched => {
                    throttle.enable();
                    throttle.set_level(1.0);
                }
                SimEvent::LayerChanged { from, to, decision } => {
                    let layers = clock.layer_table();
                    stars.change_layer(&layers[*from], &layers[*to], &mut rng);
                    fade_started = match decision {
                        TransitionDecision::SmoothStart => Some(timestamp),
                        _ => None,
                    };
                }
                SimEvent::Won => throttle.lock(),
                _ => {}
            }
            announce(event, clock.layer_table());
        }

        // Stand-in for the renderer's cross-fade finishing.
        if let Some(started) = fade_started {
            if timestamp - started >= SKY_FADE_DURATION {
                clock.complete_transition();
                fade_started = None;
            }
        }

        let snapshot = result.snapshot;
        if matches!(snapshot.run_state, RunState::Launched | RunState::Won) {
            let view = backdrop.update(
                snapshot.velocity_y,
                snapshot.position_y,
                SCREEN_HEIGHT,
                clock.config(),
            );
            if should_check(frame) {
                stars.wrap(view.star_translate_percent, SCREEN_HEIGHT, &mut rng);
            }
            if frame % FRAME_RATE as u64 == 0 || snapshot.won {
                telemetry.collect_data(&snapshot, clock.layer_table());
            }
        }

        if snapshot.won || snapshot.time_elapsed >= MAX_FLIGHT_TIME {
            let readout = Readout::from_snapshot(&snapshot, clock.layer_table());
            println!(
                "Final: {} | {} | {} | {}",
                readout.time, readout.distance, readout.velocity, readout.layer_name
            );
            break;
        }
        frame += 1;
    }

    print!("{}", telemetry.summary(clock.layer_table()));

    Ok(())
}
