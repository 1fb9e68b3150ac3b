use anyhow::Result;
use tracing_subscriber::EnvFilter;

use gesture_pilot::io::{PilotConfig, RecordedSession, load_config};
use gesture_pilot::system::{GesturePipeline, GestureSystem};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let session_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/session.csv".to_string());
    let config = match std::env::args().nth(2) {
        Some(path) => load_config(path)?,
        None => PilotConfig::default(),
    };

    println!("Loading recorded session from: {}", session_path);
    let session = RecordedSession::load(&session_path)?;
    println!(
        "Loaded {} frames, {} hand detections",
        session.len(),
        session.num_detections()
    );

    let mut system = GestureSystem::new(config);
    let pipeline = GesturePipeline::spawn(session.into_source());

    let mut processed = 0usize;
    let mut rejected = 0usize;
    while let Some(set) = pipeline.recv() {
        let report = system.process_frame(&set.hands);
        rejected += report.rejected;

        if processed % 100 == 0 {
            let red = system.simulator().drone(0);
            let blue = system.simulator().drone(1);
            println!(
                "Frame {} (src {}): red={:?} at [{:.2}, {:.2}, {:.2}], blue={:?} at [{:.2}, {:.2}, {:.2}]",
                processed,
                set.frame_index,
                report.commands[0],
                red.position.x,
                red.position.y,
                red.position.z,
                report.commands[1],
                blue.position.x,
                blue.position.y,
                blue.position.z,
            );
        }
        processed += 1;
    }

    println!(
        "Done! Processed {} frames ({} rejected detections, {} dropped frames)",
        processed,
        rejected,
        pipeline.dropped_frames()
    );

    Ok(())
}
