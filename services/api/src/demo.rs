use chrono::Local;
use clap::Args;
use placement_engine::assessment::{
    AnswerSubmission, AssessmentItem, PlacementLevel, PlacementResult, PlacementService,
    PlacementServiceError, QuizSample, QuizSampler,
};
use placement_engine::config::AppConfig;
use placement_engine::error::AppError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;

use crate::infra::load_bank;

#[derive(Args, Debug, Default)]
pub(crate) struct QuizArgs {
    /// Number of questions (defaults to PLACEMENT_QUIZ_LENGTH)
    #[arg(long)]
    pub(crate) count: Option<usize>,
    /// Seed the sampler for a reproducible quiz
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the answer key next to each item
    #[arg(long)]
    pub(crate) reveal: bool,
    /// Question bank CSV to use instead of the configured bank
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct BankCheckArgs {
    /// Question bank CSV to validate (defaults to the configured bank)
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Highest CEFR tier the simulated learner answers correctly
    #[arg(long, default_value = "B1")]
    pub(crate) level: PlacementLevel,
    /// Number of questions (defaults to PLACEMENT_QUIZ_LENGTH)
    #[arg(long)]
    pub(crate) count: Option<usize>,
    /// Seed the sampler for a reproducible run
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Question bank CSV to use instead of the configured bank
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) fn run_quiz_preview(args: QuizArgs) -> Result<(), AppError> {
    let service = build_service(args.csv)?;
    let sample = draw_quiz(&service, args.count, args.seed)?;

    println!(
        "Placement quiz ({} of {} requested questions)",
        sample.len(),
        sample.requested()
    );
    for (position, item) in sample.items().iter().enumerate() {
        println!(
            "\n{}. [{} {}] {}",
            position + 1,
            item.difficulty,
            item.skill.label(),
            item.text
        );
        for (index, option) in item.options.iter().enumerate() {
            let marker = if args.reveal && item.is_correct_choice(index) {
                " *"
            } else {
                ""
            };
            println!("   {}) {}{}", index, option, marker);
        }
    }

    Ok(())
}

pub(crate) fn run_bank_check(args: BankCheckArgs) -> Result<(), AppError> {
    let service = build_service(args.csv)?;
    let bank = service.bank();

    println!("Question bank: {} items", bank.len());
    for (tier, count) in bank.tier_counts() {
        println!("- {}: {} item(s)", tier, count);
    }

    let missing = bank.missing_tiers();
    if missing.is_empty() {
        println!("\nEvery tier is covered.");
    } else {
        let labels: Vec<&str> = missing.iter().map(|tier| tier.label()).collect();
        println!(
            "\nWarning: no items for {}; quizzes will be under-filled.",
            labels.join(", ")
        );
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = build_service(args.csv)?;
    let sample = draw_quiz(&service, args.count, args.seed)?;
    let result = simulate_attempt(&service, &sample, args.level)?;

    println!("Placement assessment demo ({})", Local::now().format("%Y-%m-%d %H:%M"));
    println!(
        "Simulated learner answers everything up to {} correctly",
        args.level
    );
    println!("Quiz: {} question(s)", sample.len());

    println!("\nResult: {}", result.summary());
    println!("\nPer-tier breakdown");
    for tally in &result.breakdown {
        println!(
            "- {}: {}/{} correct",
            tally.difficulty, tally.correct, tally.total
        );
    }

    Ok(())
}

fn build_service(csv: Option<PathBuf>) -> Result<PlacementService, AppError> {
    let config = AppConfig::load()?;
    let path = csv.or(config.assessment.bank_csv);
    let bank = load_bank(path.as_deref())?;
    Ok(PlacementService::new(
        Arc::new(bank),
        config.assessment.quiz_length,
    ))
}

fn draw_quiz(
    service: &PlacementService,
    count: Option<usize>,
    seed: Option<u64>,
) -> Result<QuizSample, AppError> {
    match seed {
        Some(seed) => {
            let requested = count.unwrap_or(service.quiz_length());
            let mut rng = StdRng::seed_from_u64(seed);
            QuizSampler::new(service.bank())
                .sample_with(requested, &mut rng)
                .map_err(|err| AppError::from(PlacementServiceError::from(err)))
        }
        None => Ok(service.start_quiz(count)?),
    }
}

// Items above the learner's level get a wrong pick. A single-option item has
// no wrong option, so the pick falls outside the list and grades incorrect.
fn simulated_choice(item: &AssessmentItem, level: PlacementLevel) -> usize {
    if PlacementLevel::from(item.difficulty) <= level {
        item.correct_option_index
    } else if item.options.len() > 1 {
        (item.correct_option_index + 1) % item.options.len()
    } else {
        item.options.len()
    }
}

fn simulate_attempt(
    service: &PlacementService,
    sample: &QuizSample,
    level: PlacementLevel,
) -> Result<PlacementResult, AppError> {
    let submissions: Vec<AnswerSubmission> = sample
        .items()
        .iter()
        .map(|item| AnswerSubmission {
            question_id: item.id.clone(),
            selected_option_index: simulated_choice(item, level),
        })
        .collect();

    Ok(service.submit(&submissions)?)
}
