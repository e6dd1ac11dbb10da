use anyhow::{anyhow, Result};
use colored::Colorize;

use super::list::{list_page, load_list, print_table, spinner};
use super::Context;
use crate::models::{Challenge, Training, User};
use crate::pages;
use crate::ui::NO_PHOTO;
use crate::view::DetailState;

pub async fn list_users(ctx: &Context, search: Option<String>) -> Result<()> {
    list_page::<User>(ctx, "Utilisateurs", pages::users(), search).await
}

pub async fn show_user(ctx: &Context, id: i64) -> Result<()> {
    let client = ctx.client()?;

    let pb = spinner();
    let mut view = pages::user(id);
    view.fetch(&client).await;
    pb.finish_and_clear();

    let user = match view.state() {
        DetailState::Loaded(Some(user)) => user.clone(),
        DetailState::Loaded(None) => {
            println!("Utilisateur non trouvé");
            return Err(anyhow!("User {} not found", id));
        }
        DetailState::Failed(message) => {
            eprintln!("{} {}", "Erreur :".red().bold(), message);
            return Err(anyhow!(message.clone()));
        }
        DetailState::Idle | DetailState::Loading => return Ok(()),
    };

    println!("{}", user.display_name().bold());
    println!();
    println!("  Nom d'utilisateur: {}", user.username);
    println!("  Email:             {}", user.email.as_deref().unwrap_or("-"));
    println!("  Pièces:            {}", user.coins);
    println!(
        "  Photo:             {}",
        user.profile_photo.as_deref().unwrap_or(NO_PHOTO)
    );

    let Some(uid) = user.uid else {
        println!();
        println!("{}", "Pas d'UID, entraînements et défis indisponibles".dimmed());
        return Ok(());
    };
    println!("  UID:               {}", uid);
    println!();

    let ui = &ctx.config.ui;

    let trainings = load_list::<Training>(&client, pages::user_trainings(&uid)).await?;
    print_table("Entraînements", &trainings.visible(), ui);
    println!();

    let created = load_list::<Challenge>(&client, pages::user_created_challenges(&uid)).await?;
    print_table("Défis créés", &created.visible(), ui);
    println!();

    let joined = load_list::<Challenge>(&client, pages::user_joined_challenges(&uid)).await?;
    print_table("Défis rejoints", &joined.visible(), ui);

    Ok(())
}
