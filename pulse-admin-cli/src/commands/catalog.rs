use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;

use super::list::spinner;
use super::Context;
use crate::models::{Challenge, Exercise, NewChallenge, NewExercise};
use crate::pages;
use crate::view::{decode_row, ListItem, ListSource, LoadState, RemoteList, ViewError};

#[derive(Args, Debug)]
pub struct NewExerciseArgs {
    /// Exercise title
    #[arg(long)]
    pub title: String,

    /// Difficulty label
    #[arg(long)]
    pub difficulty: Option<String>,

    /// Exercise type
    #[arg(long = "type")]
    pub exercise_type: Option<String>,

    /// Number of pods used
    #[arg(long)]
    pub pod_count: Option<i32>,
}

impl From<NewExerciseArgs> for NewExercise {
    fn from(args: NewExerciseArgs) -> Self {
        Self {
            title: args.title,
            difficulty: args.difficulty,
            exercise_type: args.exercise_type,
            pod_count: args.pod_count,
        }
    }
}

#[derive(Args, Debug)]
pub struct NewChallengeArgs {
    /// Challenge name
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: Option<String>,

    /// Points awarded on completion
    #[arg(long)]
    pub points: Option<i64>,

    /// Exercise the challenge is built on
    #[arg(long)]
    pub exercice_id: Option<i64>,

    /// Challenge type
    #[arg(long = "type")]
    pub challenge_type: Option<String>,

    /// Start (RFC 3339, e.g. 2024-06-01T08:00:00Z)
    #[arg(long)]
    pub start_at: Option<DateTime<Utc>>,

    /// End (RFC 3339)
    #[arg(long)]
    pub end_at: Option<DateTime<Utc>>,
}

impl From<NewChallengeArgs> for NewChallenge {
    fn from(args: NewChallengeArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            points: args.points,
            exercice_id: args.exercice_id,
            challenge_type: args.challenge_type,
            start_at: args.start_at,
            end_at: args.end_at,
        }
    }
}

/// POST to the page's create endpoint, then reload the page for the summary
/// line. The reload is best-effort and never undoes a successful create.
async fn create_on_page<T, P>(ctx: &Context, source: ListSource, payload: &P) -> Result<(T, Option<usize>)>
where
    T: ListItem,
    P: serde::Serialize,
{
    let client = ctx.client()?;
    let endpoint = source.create_endpoint.clone().ok_or(ViewError::CreateUnavailable)?;

    let pb = spinner();
    let created = client
        .post_json(&endpoint, payload)
        .await
        .map_err(ViewError::from)
        .and_then(|row| decode_row::<T>(&row, T::FIELD));
    pb.finish_and_clear();

    let item = match created {
        Ok(item) => item,
        Err(err) => {
            let message = err.user_message("Échec de l'ajout");
            eprintln!("{} {}", "Erreur :".red().bold(), message);
            return Err(anyhow!(err));
        }
    };

    let mut list = RemoteList::<T>::new(source);
    list.fetch(&client).await;
    let total = match list.state() {
        LoadState::Ready(items) => Some(items.len()),
        _ => None,
    };

    Ok((item, total))
}

fn print_total(total: Option<usize>, label: &str) {
    if let Some(total) = total {
        println!("  {} {}", total, label);
    }
}

pub async fn add_exercise(ctx: &Context, args: NewExerciseArgs) -> Result<()> {
    let payload = NewExercise::from(args);
    let (exercise, total) = create_on_page::<Exercise, _>(ctx, pages::exercises(), &payload).await?;

    println!("{} Exercice ajouté : {} (#{})", "✓".green(), exercise.title, exercise.id);
    print_total(total, "exercices au catalogue");
    Ok(())
}

pub async fn add_challenge(ctx: &Context, args: NewChallengeArgs) -> Result<()> {
    let payload = NewChallenge::from(args);
    let (challenge, total) = create_on_page::<Challenge, _>(ctx, pages::challenges(), &payload).await?;

    println!("{} Défi ajouté : {} (#{})", "✓".green(), challenge.name, challenge.id);
    print_total(total, "défis au total");
    Ok(())
}
