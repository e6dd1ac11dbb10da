use anyhow::{anyhow, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::Context;
use crate::api::ApiClient;
use crate::config::UiConfig;
use crate::models::{Challenge, Exercise, Report, Training};
use crate::pages;
use crate::ui::TableRow;
use crate::view::{ListItem, ListSource, LoadState, RemoteList, LOADING};

pub(crate) fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(LOADING);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Load one list with a spinner; a failed load is printed and returned as an error
pub(crate) async fn load_list<T: ListItem>(client: &ApiClient, source: ListSource) -> Result<RemoteList<T>> {
    let pb = spinner();
    let mut list = RemoteList::new(source);
    list.fetch(client).await;
    pb.finish_and_clear();

    if let LoadState::Failed(message) = list.state() {
        eprintln!("{} {}", "Erreur :".red().bold(), message);
        return Err(anyhow!(message.clone()));
    }

    Ok(list)
}

/// Lay out rows as aligned text columns
pub fn render_table<T: TableRow>(rows: &[&T], ui: &UiConfig) -> String {
    let headers = T::headers();
    let cells: Vec<Vec<String>> = rows.iter().map(|row| row.cells(ui)).collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            cells
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |values: Vec<String>| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(value, width)| format!("{:<width$}", value, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(headers.iter().map(|h| h.to_string()).collect()));
    out.push('\n');
    for row in cells {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

pub fn print_table<T: TableRow>(title: &str, rows: &[&T], ui: &UiConfig) {
    println!("{} ({})", title.bold(), rows.len());
    println!();

    if rows.is_empty() {
        println!("{}", "Aucun résultat".dimmed());
        return;
    }

    let table = render_table(rows, ui);
    let mut lines = table.lines();
    if let Some(header) = lines.next() {
        println!("{}", header.yellow().bold());
    }
    for line in lines {
        println!("{}", line);
    }
}

pub(crate) async fn list_page<T: ListItem + TableRow>(
    ctx: &Context,
    title: &str,
    source: ListSource,
    search: Option<String>,
) -> Result<()> {
    let client = ctx.client()?;
    let mut list: RemoteList<T> = load_list(&client, source).await?;

    if let Some(term) = search {
        list.set_filter_term(term);
    }

    print_table(title, &list.visible(), &ctx.config.ui);
    Ok(())
}

pub async fn list_trainings(ctx: &Context) -> Result<()> {
    list_page::<Training>(ctx, "Entraînements", pages::trainings(), None).await
}

pub async fn list_exercises(ctx: &Context, search: Option<String>) -> Result<()> {
    list_page::<Exercise>(ctx, "Exercices", pages::exercises(), search).await
}

pub async fn list_challenges(ctx: &Context, search: Option<String>) -> Result<()> {
    list_page::<Challenge>(ctx, "Défis", pages::challenges(), search).await
}

pub async fn list_reports(ctx: &Context, search: Option<String>) -> Result<()> {
    list_page::<Report>(ctx, "Signalements", pages::reports(), search).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_aligns_columns() {
        let rows = [
            Exercise {
                id: 1,
                title: "Plank".into(),
                difficulty: Some("easy".into()),
                exercise_type: None,
                pod_count: None,
            },
            Exercise {
                id: 12,
                title: "Bulgarian split squat".into(),
                difficulty: None,
                exercise_type: Some("legs".into()),
                pod_count: Some(4),
            },
        ];
        let refs: Vec<&Exercise> = rows.iter().collect();

        let table = render_table(&refs, &UiConfig::default());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID  Titre"));
        assert_eq!(lines[1].find("easy"), lines[0].find("Difficulté"));
    }
}
