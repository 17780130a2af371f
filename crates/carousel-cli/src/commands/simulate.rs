use std::time::Duration;

use anyhow::Result;
use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::info;

use carousel_core::progress::slide_width_percent;
use carousel_core::{
    AppConfig, Carousel, CarouselEvent, CarouselRuntime, CarouselSnapshot, SlideDescriptor,
    VirtualTrack,
};

use crate::SimulateArgs;

/// Width of the simulated viewport, in abstract pixels
const CLIENT_WIDTH: f64 = 1200.0;

#[derive(Debug, Serialize)]
struct TimedEvent {
    at_ms: u64,
    #[serde(flatten)]
    event: CarouselEvent,
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    duration_ms: u64,
    events: Vec<TimedEvent>,
    snapshot: CarouselSnapshot,
}

pub async fn run(config: AppConfig, args: SimulateArgs) -> Result<()> {
    let report = simulate(&config, &args).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn simulate(config: &AppConfig, args: &SimulateArgs) -> Result<SimulationReport> {
    let mut options = config.carousel.clone();
    options.auto_play = true;
    if let Some(speed) = args.speed {
        options.autoplay_speed_ms = speed;
    }

    let slide_width = CLIENT_WIDTH * slide_width_percent(options.slides_to_show) / 100.0;
    let track = VirtualTrack::new(CLIENT_WIDTH, slide_width);
    // Start the carousel clock on tokio's clock, which the runtime reads
    let mut carousel = Carousel::new_at(options, track, Instant::now().into_std())?
        .with_frame_interval(config.scroll.frame_interval());
    for _ in 0..args.slides {
        let slide = SlideDescriptor::new();
        carousel.register(slide);
    }

    info!(
        slides = args.slides,
        duration_ms = args.duration_ms,
        "Starting headless simulation"
    );

    // The command sender stays alive so only the shutdown signal ends the run
    let (_command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let runtime = CarouselRuntime::new().with_event_sender(event_tx);
    let duration = Duration::from_millis(args.duration_ms);
    let started = Instant::now();

    let drive = async move { runtime.run(carousel, command_rx, shutdown_rx).await };
    let stop = async move {
        tokio::time::sleep(duration).await;
        let _ = shutdown_tx.send(true);
    };
    // Ends once the runtime, and with it the event sender, is gone
    let collect = async move {
        let mut events = Vec::new();
        while let Some(event) = event_rx.recv().await {
            events.push(TimedEvent {
                at_ms: started.elapsed().as_millis() as u64,
                event,
            });
        }
        events
    };

    let (carousel, (), events) = tokio::join!(drive, stop, collect);

    Ok(SimulationReport {
        duration_ms: args.duration_ms,
        events,
        snapshot: carousel.snapshot(),
    })
}
