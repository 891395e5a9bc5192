//! Quiz generation with a live progress display.

use std::io::Write as _;
use std::sync::Arc;

use clap::Subcommand;

use studyhall_client::{ApiClient, QuizGenerator};
use studyhall_config::GenerationEstimates;
use studyhall_core::ApiError;
use studyhall_core::progress::ProgressState;
use studyhall_models::generation::GenerateQuestionsRequest;
use studyhall_models::{ContentId, QuestionType};

#[derive(Subcommand)]
pub enum QuizCommand {
    /// Generate quiz questions from a lecture content
    Generate {
        /// The lecture content to generate questions from
        #[arg(short = 's', long)]
        source: ContentId,

        /// Number of questions to generate (1-50)
        #[arg(short = 'n', long, default_value = "10")]
        count: u32,

        /// Question type (multiple_choice, true_false, short_answer)
        #[arg(short = 't', long, default_value = "multiple_choice")]
        question_type: QuestionType,
    },
}

pub async fn run(client: Arc<ApiClient>, command: QuizCommand) -> Result<(), ApiError> {
    match command {
        QuizCommand::Generate {
            source,
            count,
            question_type,
        } => generate(client, source, count, question_type).await,
    }
}

async fn generate(
    client: Arc<ApiClient>,
    source: ContentId,
    count: u32,
    question_type: QuestionType,
) -> Result<(), ApiError> {
    let generator = QuizGenerator::new(client, GenerationEstimates::from_env());
    let task = generator.start(GenerateQuestionsRequest {
        source_id: source,
        question_count: count,
        question_type,
    })?;

    println!("🧠 Generating {count} {question_type} questions from {source}...");

    let mut progress = task.subscribe();
    let renderer = tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            let state = progress.borrow().clone();
            render_progress(&state);
        }
    });

    let result = task.wait().await;
    let _ = renderer.await;
    println!();

    let response = result?;
    println!("✅ Generated {} questions", response.questions.len());
    for (i, question) in response.questions.iter().enumerate() {
        println!("\n{}. {}", i + 1, question.question);
        for (j, option) in question.options.iter().enumerate() {
            let marker = if j as u32 == question.correct_answer {
                "✓"
            } else {
                " "
            };
            println!("   {marker} {option}");
        }
    }
    Ok(())
}

fn render_progress(state: &ProgressState) {
    print!(
        "\r   [{:>3}%] {} (question {}/{}, ~{}s left)        ",
        state.progress,
        state.current_step,
        state.current_unit,
        state.total_units,
        state.estimated_remaining.as_secs()
    );
    let _ = std::io::stdout().flush();
}
