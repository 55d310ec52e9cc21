//! Simulated study session over the sample catalog
//!
//! Drives every activity kind end to end against a file-backed store and
//! reports XP as it lands. Running it a second time against the same data
//! directory shows completions and XP staying put (no double awards).

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use rand::Rng;

use studypath::chat::CompanionChat;
use studypath::content::{sample, ActivityKind};
use studypath::core::error::{Result, StudyError};
use studypath::player::TickTimer;
use studypath::storage::FileStore;
use studypath::workspace::ChapterWorkspace;

#[derive(Parser)]
#[command(name = "study_sim", about = "Run a simulated learner through the sample pack")]
struct Args {
    /// Directory for persisted snapshots
    #[arg(long, default_value = ".studypath")]
    data_dir: PathBuf,

    /// Milliseconds per video tick (sped up for the demo)
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,

    /// Reset stored progress before running
    #[arg(long)]
    reset: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let backend = FileStore::open(&args.data_dir)?;

    let catalog = sample::catalog();
    let chapter = catalog
        .chapter(&sample::chapter_id())
        .cloned()
        .ok_or_else(|| StudyError::ContentNotFound(sample::chapter_id().to_string()))?;
    let mut workspace = ChapterWorkspace::open(backend, chapter);

    if args.reset {
        let forfeited = workspace.reset_progress();
        tracing::info!("Reset stored progress ({} XP forfeited)", forfeited);
    }

    let items = workspace
        .chapter()
        .learning_pack
        .as_ref()
        .map(|pack| pack.items.clone())
        .unwrap_or_default();

    for item in items {
        let mut session = workspace
            .open_activity(&item.id)
            .expect("item comes from the pack");
        if session.is_completed() {
            tracing::info!("{} ({}) already completed", item.title, item.kind.label());
            continue;
        }
        tracing::info!("Starting {} ({})", item.title, item.kind.label());

        let outcome = match &item.kind {
            ActivityKind::Watch { duration_seconds } => {
                session.start();
                let mut timer = TickTimer::start(Duration::from_millis(args.tick_ms));
                let outcome = loop {
                    thread::sleep(Duration::from_millis(args.tick_ms));
                    let ticks = timer.poll();
                    let mut done = None;
                    for _ in 0..ticks {
                        if let Some(o) =
                            session.tick(workspace.progress_mut().expect("pack progress"))
                        {
                            done = Some(o);
                            break;
                        }
                    }
                    tracing::debug!(
                        "Playback at {:.0}% of {}s",
                        session.progress_fraction() * 100.0,
                        duration_seconds
                    );
                    if let Some(o) = done {
                        break o;
                    }
                };
                timer.cancel();
                Some(outcome)
            }
            ActivityKind::Explore { interactions } => {
                let mut outcome = None;
                for element in interactions {
                    // A repeat activation is a no-op; do one to show it
                    if let Some(o) = session
                        .activate(element, workspace.progress_mut().expect("pack progress"))
                    {
                        outcome = Some(o);
                    }
                    session.activate(element, workspace.progress_mut().expect("pack progress"));
                    tracing::info!("Activated {} ({}/3)", element, session.activated_count());
                }
                outcome
            }
            ActivityKind::Practice { questions } => {
                let mut rng = rand::thread_rng();
                for question in questions {
                    let pick = rng.gen_range(0..question.options.len());
                    session.select_answer(&question.id, pick);
                }
                session.submit(workspace.progress_mut().expect("pack progress"))
            }
            ActivityKind::Curiosity { .. } => {
                session.mark_read(workspace.progress_mut().expect("pack progress"))
            }
        };

        match outcome {
            Some(outcome) if workspace.record_completion(outcome) => {
                tracing::info!("+{} XP for {}", outcome.xp_awarded, item.title);
            }
            Some(_) => tracing::info!("{} completed (no new XP)", item.title),
            None => tracing::warn!("{} did not reach completion", item.title),
        }
    }

    let stats = workspace.stats();
    tracing::info!(
        "Pack complete: {} | total XP: {} | gems: {}",
        workspace.is_pack_complete(),
        workspace.total_xp(),
        stats.gems
    );

    // A quick companion exchange to round off the session
    let mut chat = CompanionChat::new();
    chat.set_context("Force is a push or pull that changes an object's state of motion.");
    if let Some(exchange) = chat.ask("Why does a rolling ball stop?") {
        tracing::info!("Companion says: {}", exchange.answer);
    }

    Ok(())
}
