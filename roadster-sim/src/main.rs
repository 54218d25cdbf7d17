use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::anyhow;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use roadster_core::entity_location::EntityLocation;
use roadster_core::player::choices::{Car, CarSelection};
use roadster_core::vehicle_event::LogSink;
use roadster_core::GLOBAL_CONFIG;
use roadster_sim::cars::spawn_selected_car;
use roadster_sim::drive_script::{DriveScript, ScriptPlayer};

fn init_logging() -> anyhow::Result<()> {
    let log_level = match GLOBAL_CONFIG.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let roster = Car::ALL;
    let selection = CarSelection::load(Path::new(&GLOBAL_CONFIG.save_file), &roster)?;
    let (car, mut vehicle) = spawn_selected_car(&selection, &roster, EntityLocation::default())
        .ok_or_else(|| anyhow!("no car with id {} to drive", selection.selected_car_id))?;
    info!(car = car.name(), "spawned selected car");

    let mut events = LogSink::new(car.name());
    if GLOBAL_CONFIG.auto_start_engine {
        vehicle.request_engine_toggle();
    }

    let script = DriveScript::demo_lap(GLOBAL_CONFIG.auto_start_engine);
    let mut player = ScriptPlayer::new(&script);

    let tick_duration = Duration::from_millis(GLOBAL_CONFIG.tick_ms);
    let fixed_dt = tick_duration.as_secs_f64().min(GLOBAL_CONFIG.max_frame_dt);
    let mut dt = fixed_dt;
    let mut next_report_at = 0.0;

    while !player.is_finished() {
        let start_time = Instant::now();

        if let Some(label) = player.feed(dt, vehicle.intents_mut()) {
            info!(segment = label, at = player.elapsed() - dt, "next segment");
        }
        let report = vehicle.tick_with(dt, &mut events);

        if player.elapsed() >= next_report_at {
            let position = report.entity_location.position;
            info!(
                "t={:.2}s position=({:.2}, {:.2}) heading={:.1} speed={:.1} km/h",
                player.elapsed(),
                position.x,
                position.y,
                report.entity_location.heading,
                report.speed
            );
            next_report_at += 1.0;
        }

        if GLOBAL_CONFIG.realtime_playback {
            // wait out the rest of the tick, then feed the real frame time back in
            if let Some(remaining) = tick_duration.checked_sub(start_time.elapsed()) {
                thread::sleep(remaining);
            }
            dt = start_time
                .elapsed()
                .as_secs_f64()
                .min(GLOBAL_CONFIG.max_frame_dt);
        }
    }

    let final_location = vehicle.entity_location();
    info!(
        x = final_location.position.x,
        z = final_location.position.y,
        heading = final_location.heading,
        engine_running = vehicle.engine_running(),
        "drive finished"
    );

    Ok(())
}
