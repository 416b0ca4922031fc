//! Policy-driven blackjack seat agent.
//!
//! Observes a live event stream from an external table engine, tracks the
//! minimal per-session state needed to index a precomputed action-value
//! table, and streams each decision back to a connected client.
//!
//! ## Modules
//!
//! - [`policy`]: Action-value table, greedy decision engine, artifact stores
//! - [`gameroom`]: Events, seat/hand tracking, dispatch, decision emission
//! - [`hosting`]: Session supervisor and the HTTP/WebSocket surface
//! - [`dealer`]: WebSocket client for the external table engine
//! - [`config`]: Command line and environment configuration
pub mod gameroom;
pub mod policy;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod dealer;
#[cfg(feature = "server")]
pub mod hosting;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index at the table.
pub type Seat = usize;
/// Bet amounts in table currency units.
pub type Chips = u32;
/// Expected values stored in the policy table.
pub type Utility = f32;
/// Hand totals and dealer upcards as reported by the engine.
pub type Score = i32;
/// Engine-assigned identifier of a single game (one hand cycle).
pub type GameId = String;
/// Identifier of a supervised session.
pub type SessionId = uuid::Uuid;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Seats at a table, numbered `0..N_SEATS`.
pub const N_SEATS: usize = 6;
/// Width of the action axis in the policy table (hit, stand, double).
pub const N_ACTIONS: usize = 3;
/// Player totals that force a split whenever the engine allows one.
/// Matches on score, not on the pair itself.
pub const SPLIT_TOTALS: [Score; 7] = [4, 6, 8, 12, 14, 16, 18];

// ============================================================================
// QUEUE SIZES
// ============================================================================
/// Raw engine messages buffered per session before intake applies backpressure.
pub const FEED_BUFFER: usize = 256;
/// Outbound client messages buffered per session before new ones are dropped.
pub const EMIT_BUFFER: usize = 64;
/// Engine commands buffered per session before the writer applies backpressure.
pub const COMMAND_BUFFER: usize = 64;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        println!();
        log::warn!("interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
