use anyhow::{anyhow, Result};
use colored::Colorize;
use dialoguer::Confirm;

use super::list::spinner;
use super::Context;
use crate::api::ApiClient;
use crate::models::Comment;
use crate::pages;
use crate::ui::format_datetime;
use crate::view::{DetailState, DetailView};

async fn load_comment(client: &ApiClient, id: i64) -> Result<DetailView<Comment>> {
    let pb = spinner();
    let mut view = pages::comment(id);
    view.fetch(client).await;
    pb.finish_and_clear();

    match view.state() {
        DetailState::Loaded(Some(_)) => Ok(view),
        DetailState::Failed(message) => {
            eprintln!("{} {}", "Erreur :".red().bold(), message);
            Err(anyhow!(message.clone()))
        }
        _ => {
            println!("Commentaire non trouvé");
            Err(anyhow!("Comment {} not found", id))
        }
    }
}

fn print_comment(comment: &Comment, ctx: &Context) {
    println!("{} {}", "Commentaire".bold(), comment.id);
    println!();
    println!("  Contenu:        {}", comment.content);
    println!(
        "  Créé le:        {}",
        format_datetime(comment.created_at.as_ref(), &ctx.config.ui)
    );
    println!("  Utilisateur ID: {}", comment.user_id.as_deref().unwrap_or("-"));
}

pub async fn show_comment(ctx: &Context, id: i64) -> Result<()> {
    let client = ctx.client()?;
    let view = load_comment(&client, id).await?;

    if let Some(comment) = view.item() {
        print_comment(comment, ctx);
    }
    Ok(())
}

pub async fn delete_comment(ctx: &Context, id: i64, force: bool) -> Result<()> {
    let client = ctx.client()?;
    let mut view = load_comment(&client, id).await?;

    if let Some(comment) = view.item() {
        print_comment(comment, ctx);
        println!();
    }

    if !force {
        let confirmed = Confirm::new()
            .with_prompt("Supprimer ce commentaire et ses signalements ?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Annulé");
            return Ok(());
        }
    }

    let path = pages::comment_path(id);
    finish(
        view.submit_delete(|| client.delete(&path), pages::COMMENT_DELETE_FAILED)
            .await,
        &view,
        "Commentaire supprimé",
    )
}

pub async fn keep_comment(ctx: &Context, id: i64) -> Result<()> {
    let client = ctx.client()?;
    let mut view = load_comment(&client, id).await?;

    let path = pages::comment_reports_path(id);
    finish(
        view.submit_delete(|| client.delete(&path), pages::REPORT_DELETE_FAILED)
            .await,
        &view,
        "Commentaire conservé, signalements retirés",
    )
}

fn finish(result: Result<(), crate::view::ViewError>, view: &DetailView<Comment>, success: &str) -> Result<()> {
    match result {
        Ok(()) => {
            println!("{} {}", "✓".green(), success);
            Ok(())
        }
        Err(err) => {
            let message = view.error().unwrap_or(pages::COMMENT_DELETE_FAILED);
            eprintln!("{} {}", "Erreur :".red().bold(), message);
            Err(anyhow!(err))
        }
    }
}
