//! Progress report over a stored data directory
//!
//! Prints completion state for the sample pack plus the Curiosity Centre
//! shelves, the browse topics, and related news headlines.

use std::path::PathBuf;

use clap::Parser;

use studypath::content::{sample, CuriosityCategory};
use studypath::core::error::{Result, StudyError};
use studypath::storage::FileStore;
use studypath::workspace::ChapterWorkspace;

#[derive(Parser)]
#[command(name = "pack_report", about = "Report stored progress for the sample pack")]
struct Args {
    /// Directory holding persisted snapshots
    #[arg(long, default_value = ".studypath")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();
    let backend = FileStore::open(&args.data_dir)?;

    let catalog = sample::catalog();
    let chapter = catalog
        .chapter(&sample::chapter_id())
        .cloned()
        .ok_or_else(|| StudyError::ContentNotFound(sample::chapter_id().to_string()))?;
    let workspace = ChapterWorkspace::open(backend, chapter);

    println!("{}", workspace.chapter().title);
    println!();

    if let Some(pack) = &workspace.chapter().learning_pack {
        println!("Learning pack: {}", pack.pack_title);
        for item in &pack.items {
            let done = workspace
                .progress()
                .map(|p| p.is_completed(&item.id))
                .unwrap_or(false);
            let tick = if done { "x" } else { " " };
            println!(
                "  [{}] {:<40} {:>9} {:>3} XP",
                tick,
                item.title,
                item.kind.label(),
                item.xp_reward
            );
        }
        let stats = workspace.stats();
        println!(
            "  {}/{} completed | {} XP | {} gems",
            workspace.progress().map(|p| p.completed_count()).unwrap_or(0),
            pack.len(),
            workspace.total_xp(),
            stats.gems
        );
    }

    println!();
    println!("Sections:");
    for section in &workspace.chapter().subsections {
        println!("  {:<40} {:?}", section.full_title, section.status);
    }

    let library = sample::curiosity_library();
    println!();
    println!("Curiosity Centre:");
    for (label, category) in [
        ("Core", CuriosityCategory::Core),
        ("Go deeper", CuriosityCategory::GoDeeper),
    ] {
        println!("  {}:", label);
        for item in library.items_in_category(&sample::chapter_id(), category) {
            println!("    {:<40} {}", item.title, item.duration_label);
        }
    }

    println!();
    println!("Explore more:");
    for topic in library.topics() {
        println!("  {:<24} {} items", topic.title, topic.content_count);
    }

    println!();
    println!("Related news:");
    for article in library.news() {
        println!("  {} ({}, {})", article.title, article.source, article.date);
    }

    Ok(())
}
