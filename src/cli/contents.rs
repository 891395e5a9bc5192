//! Lecture content listing and reordering commands.

use std::sync::Arc;

use clap::{Subcommand, ValueEnum};

use studyhall_client::reorder::MoveDirection;
use studyhall_client::{ApiClient, ListController, ReorderCoordinator};
use studyhall_core::ApiError;
use studyhall_models::{ContentFilter, ContentId, LectureContent, LectureId};

use super::PageArgs;

#[derive(Subcommand)]
pub enum ContentCommand {
    /// List the contents of a lecture, in position order
    List {
        /// Lecture whose contents to show
        #[arg(short = 'l', long)]
        lecture: LectureId,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Swap a content row with its neighbour
    Swap {
        /// Lecture whose contents to reorder
        #[arg(short = 'l', long)]
        lecture: LectureId,

        /// The content row to move
        #[arg(long)]
        id: ContentId,

        /// Direction to move the row
        #[arg(short = 'd', long, value_enum)]
        direction: Direction,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Direction {
    Up,
    Down,
}

impl From<Direction> for MoveDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => MoveDirection::Up,
            Direction::Down => MoveDirection::Down,
        }
    }
}

pub async fn run(client: Arc<ApiClient>, command: ContentCommand) -> Result<(), ApiError> {
    match command {
        ContentCommand::List { lecture, page } => {
            let list = ListController::<LectureContent>::new(client, page.page_size);
            list.set_filters(ContentFilter::for_lecture(lecture)).await?;
            if page.page > 1 {
                list.set_page(page.page).await?;
            }

            let snapshot = list.snapshot();
            println!(
                "📄 Contents of lecture {} (page {}/{}, {} total)",
                lecture,
                snapshot.page,
                snapshot.total_pages.max(1),
                snapshot.total
            );
            for content in &snapshot.items {
                println!(
                    "   {:>3}. {}  [{:>8}]  {}",
                    content.position,
                    content.id,
                    content.payload.content_type(),
                    content.title
                );
            }
            Ok(())
        }
        ContentCommand::Swap {
            lecture,
            id,
            direction,
        } => {
            // Load the lecture's ordering first; the coordinator swaps
            // within the loaded page.
            let list = ListController::<LectureContent>::new(client.clone(), 100);
            list.set_filters(ContentFilter::for_lecture(lecture)).await?;

            let coordinator = ReorderCoordinator::new(client, list.clone());
            let moved = coordinator.shift(id, direction.into()).await?;

            if !moved {
                println!("Content {id} is already at the edge; nothing to do.");
                return Ok(());
            }

            println!("✅ Moved content {id}");
            for content in &list.snapshot().items {
                println!("   {:>3}. {}  {}", content.position, content.id, content.title);
            }
            Ok(())
        }
    }
}
