use std::{path::PathBuf, sync::mpsc, thread, time::Duration};

use clap::Parser;
use egui::Vec2;
use log::error;
use voltlog::{
    AppConfig, AppContext, LoggerError, gps,
    logfile::{LogWriter, log_file_name},
    telemetry::{collect_telemetry, producer::SyntheticTelemetryProducer},
    ui::DataLoggerApp,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory for the daily log file, defaults to the working directory
    #[arg(short, long)]
    log_dir: Option<PathBuf>,

    /// Interval between simulated records, in milliseconds
    #[arg(short, long)]
    interval_ms: Option<u64>,
}

fn run(args: Args) -> Result<(), LoggerError> {
    let mut app_config = AppConfig::from_local_file().unwrap_or_default();
    if let Some(log_dir) = args.log_dir {
        app_config.log_dir = Some(log_dir);
    }
    if let Some(interval_ms) = args.interval_ms {
        app_config.producer_interval_ms = interval_ms;
    }

    let log_dir = app_config
        .log_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let log_path = log_dir.join(log_file_name(chrono::Local::now().date_naive()));
    let writer = LogWriter::create(log_path)?;

    let ctx = AppContext::new();
    let (record_tx, record_rx) = mpsc::channel();
    let interval = Duration::from_millis(app_config.producer_interval_ms);

    let collector_ctx = ctx.clone();
    let collector_handle = thread::spawn(move || {
        let producer = SyntheticTelemetryProducer::default();
        if let Err(e) = collect_telemetry(producer, writer, record_tx, &collector_ctx, interval) {
            error!("Telemetry collector failed: {}", e);
        }
    });

    let gps_ctx = ctx.clone();
    let gps_handle = thread::spawn(move || gps::track_path(&gps_ctx, interval));

    let ctrlc_ctx = ctx.clone();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        ctrlc_ctx.request_shutdown();
        std::process::exit(0);
    })
    .expect("Could not set Ctrl-C handler");

    let window_position = app_config.window_position.clone();
    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_inner_size(Vec2::new(1350., 800.))
        .with_position(window_position);

    let app_ctx = ctx.clone();
    eframe::run_native(
        "Serial Data Logger",
        native_options,
        Box::new(|cc| Ok(Box::new(DataLoggerApp::new(record_rx, app_config, app_ctx, cc)))),
    )
    .expect("could not start app");

    // the UI is gone; stop and join both background loops
    ctx.request_shutdown();
    let _ = collector_handle.join();
    let _ = gps_handle.join();
    Ok(())
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let args = Args::parse();
    run(args).expect("Error while running the data logger");
}
