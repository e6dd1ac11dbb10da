use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::list::spinner;
use super::Context;
use crate::pages;
use crate::view::CountView;

#[derive(Args)]
pub struct StatsCommand {}

impl StatsCommand {
    pub async fn execute(self, ctx: &Context) -> Result<()> {
        let client = ctx.client()?;

        let pb = spinner();
        let mut users = CountView::new(pages::USERS_COUNT);
        let mut trainings = CountView::new(pages::TRAININGS_COUNT);
        tokio::join!(users.fetch(&client), trainings.fetch(&client));
        pb.finish_and_clear();

        println!("{}", "Tableau de bord".bold());
        println!();
        for (label, view) in [("Utilisateurs", &users), ("Entraînements", &trainings)] {
            let value = view
                .count()
                .map(|n| n.to_string().green().bold().to_string())
                .unwrap_or_else(|| "-".dimmed().to_string());
            println!("  {:<14} {}", label, value);
        }

        Ok(())
    }
}
