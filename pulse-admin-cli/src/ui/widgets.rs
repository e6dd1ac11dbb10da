use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, StatefulWidget, Table, TableState, Tabs, Widget, Wrap},
};

use super::app::{AddForm, App, Page, StatusMessage, Tab, UserDetailPage};
use super::rows::{format_datetime, TableRow, NO_PHOTO};
use crate::config::UiConfig;
use crate::models::Comment;
use crate::view::{CountView, DetailState, ListItem, LoadState, RemoteList, LOADING};

fn panel(title: &str, is_selected: bool) -> Block<'static> {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(border_style)
}

fn error_line(message: &str) -> Paragraph<'static> {
    Paragraph::new(format!("Erreur : {}", message)).style(Style::default().fg(Color::Red))
}

fn loading_line() -> Paragraph<'static> {
    Paragraph::new(LOADING).style(Style::default().fg(Color::Gray))
}

/// Render the page tabs
pub fn render_tabs(area: Rect, buf: &mut Buffer, current: Tab) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(idx, tab)| Line::from(format!("{} {}", idx + 1, tab.title())))
        .collect();
    let selected = Tab::ALL.iter().position(|t| *t == current).unwrap_or(0);

    Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Pulse Admin "))
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .render(area, buf);
}

/// Render whichever page is mounted
pub fn render_page(area: Rect, buf: &mut Buffer, app: &App) {
    let ui = &app.ui;
    let selected = app.selected_index;

    match &app.page {
        Page::Dashboard { users, trainings } => render_counts(area, buf, users, trainings),
        Page::Users(list) => render_list(area, buf, "Utilisateurs", list, Some(selected), ui),
        Page::Trainings(list) => render_list(area, buf, "Entraînements", list, Some(selected), ui),
        Page::Exercises(list) => render_list(area, buf, "Exercices", list, Some(selected), ui),
        Page::Challenges(list) => render_list(area, buf, "Défis", list, Some(selected), ui),
        Page::Reports(list) => render_list(area, buf, "Signalements", list, Some(selected), ui),
        Page::Comment(view) => render_comment(area, buf, view.state(), view.error(), ui),
        Page::UserDetail(detail) => render_user_detail(area, buf, detail, ui),
    }
}

fn render_counts(area: Rect, buf: &mut Buffer, users: &CountView, trainings: &CountView) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (column, title, view) in [
        (columns[0], "Utilisateurs", users),
        (columns[1], "Entraînements", trainings),
    ] {
        let block = panel(title, false);
        let inner = block.inner(column);
        block.render(column, buf);

        let value = match (view.count(), view.is_loading()) {
            (Some(count), _) => Span::styled(
                count.to_string(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            (None, true) => Span::styled(LOADING, Style::default().fg(Color::Gray)),
            (None, false) => Span::styled("-", Style::default().fg(Color::DarkGray)),
        };
        Paragraph::new(Line::from(vec![Span::raw("Total : "), value])).render(inner, buf);
    }
}

/// Render a remote list as a table, or its loading / failure line
pub fn render_list<T: ListItem + TableRow>(
    area: Rect,
    buf: &mut Buffer,
    title: &str,
    list: &RemoteList<T>,
    selected: Option<usize>,
    ui: &UiConfig,
) {
    let title = if list.filter_term().is_empty() {
        title.to_string()
    } else {
        format!("{} (recherche : {})", title, list.filter_term())
    };
    let block = panel(&title, selected.is_some());

    match list.state() {
        LoadState::Idle | LoadState::Loading => {
            let inner = block.inner(area);
            block.render(area, buf);
            loading_line().render(inner, buf);
        }
        LoadState::Failed(message) => {
            let inner = block.inner(area);
            block.render(area, buf);
            error_line(message).render(inner, buf);
        }
        LoadState::Ready(_) => {
            let header = Row::new(T::headers().iter().copied())
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let rows: Vec<Row> = list.visible().into_iter().map(|item| Row::new(item.cells(ui))).collect();
            let widths = vec![Constraint::Fill(1); T::headers().len()];

            let table = Table::new(rows, widths)
                .header(header)
                .block(block)
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

            let mut state = TableState::default().with_selected(selected);
            StatefulWidget::render(table, area, buf, &mut state);
        }
    }
}

fn render_comment(
    area: Rect,
    buf: &mut Buffer,
    state: &DetailState<Comment>,
    error: Option<&str>,
    ui: &UiConfig,
) {
    let block = panel("Détails du commentaire", true);
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = match state {
        DetailState::Idle | DetailState::Loading => vec![Line::from(LOADING)],
        DetailState::Failed(message) => vec![Line::from(Span::styled(
            format!("Erreur : {}", message),
            Style::default().fg(Color::Red),
        ))],
        DetailState::Loaded(None) => vec![Line::from(Span::styled(
            "Commentaire non trouvé",
            Style::default().fg(Color::Gray),
        ))],
        DetailState::Loaded(Some(comment)) => vec![
            field_line("ID", comment.id.to_string()),
            field_line("Contenu", comment.content.clone()),
            field_line("Créé le", format_datetime(comment.created_at.as_ref(), ui)),
            field_line("Utilisateur ID", comment.user_id.clone().unwrap_or_default()),
            Line::from(""),
            Line::from(vec![
                Span::styled("[k] Laisser", Style::default().fg(Color::Blue)),
                Span::raw("   "),
                Span::styled("[d] Supprimer", Style::default().fg(Color::Red)),
            ]),
        ],
    };

    if let Some(error) = error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Erreur : {}", error),
            Style::default().fg(Color::Red),
        )));
    }

    Paragraph::new(lines).wrap(Wrap { trim: false }).render(inner, buf);
}

fn field_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} : ", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
    ])
}

fn render_user_detail(area: Rect, buf: &mut Buffer, detail: &UserDetailPage, ui: &UiConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let block = panel("Profil", true);
    let inner = block.inner(chunks[0]);
    block.render(chunks[0], buf);

    let profile = match detail.user.state() {
        DetailState::Idle | DetailState::Loading => vec![Line::from(LOADING)],
        DetailState::Failed(message) => vec![Line::from(format!("Erreur : {}", message))],
        DetailState::Loaded(None) => vec![Line::from("Utilisateur non trouvé")],
        DetailState::Loaded(Some(user)) => vec![
            field_line("Nom", user.display_name()),
            field_line("Nom d'utilisateur", user.username.clone()),
            field_line("Email", user.email.clone().unwrap_or_default()),
            field_line("Pièces", user.coins.to_string()),
            field_line(
                "Photo",
                user.profile_photo.clone().unwrap_or_else(|| NO_PHOTO.to_string()),
            ),
            field_line("UID", user.uid.map(|u| u.to_string()).unwrap_or_default()),
        ],
    };
    Paragraph::new(profile).render(inner, buf);

    match &detail.trainings {
        Some(list) => render_list(chunks[1], buf, "Entraînements", list, None, ui),
        None => panel("Entraînements", false).render(chunks[1], buf),
    }
    match &detail.created {
        Some(list) => render_list(chunks[2], buf, "Défis créés", list, None, ui),
        None => panel("Défis créés", false).render(chunks[2], buf),
    }
    match &detail.joined {
        Some(list) => render_list(chunks[3], buf, "Défis rejoints", list, None, ui),
        None => panel("Défis rejoints", false).render(chunks[3], buf),
    }
}

/// Render the add-record form as a popup
pub fn render_form(area: Rect, buf: &mut Buffer, form: &AddForm) {
    Clear.render(area, buf);
    let block = panel("Ajouter", true).style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines: Vec<Line> = form
        .fields
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let style = if idx == form.focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(format!("{:>16} : ", field.label), Style::default().fg(Color::Gray)),
                Span::styled(field.value.clone(), style),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab: champ suivant  Enter: envoyer  Esc: annuler",
        Style::default().fg(Color::DarkGray),
    )));

    Paragraph::new(lines).render(inner, buf);
}

/// Render help overlay
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    Clear.render(area, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Aide ")
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    block.render(area, buf);

    let section = |title: &'static str| Line::from(Span::styled(title, Style::default().fg(Color::Cyan)));

    let help_text = vec![
        section("Navigation :"),
        Line::from("  1-6 / Tab   - Changer de page"),
        Line::from("  ↑/k ↓/j     - Sélection"),
        Line::from("  Enter       - Ouvrir le détail"),
        Line::from("  Esc         - Retour"),
        Line::from("  r           - Recharger la page"),
        Line::from(""),
        section("Actions :"),
        Line::from("  /           - Rechercher"),
        Line::from("  a           - Ajouter (exercices, défis)"),
        Line::from("  k           - Laisser le commentaire"),
        Line::from("  d           - Supprimer le commentaire"),
        Line::from(""),
        Line::from("  ?           - Afficher cette aide"),
        Line::from("  q           - Quitter"),
    ];

    Paragraph::new(help_text).render(inner, buf);
}

/// Render status bar at bottom
pub fn render_status_bar(area: Rect, buf: &mut Buffer, status: Option<&StatusMessage>, busy: bool, searching: bool) {
    let mut spans = Vec::new();

    if busy {
        spans.push(Span::styled(
            " ⏳ Envoi... ",
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        ));
    }
    if searching {
        spans.push(Span::styled(
            " 🔍 Recherche (Enter pour valider) ",
            Style::default().fg(Color::Cyan).bg(Color::DarkGray),
        ));
    }
    if let Some(status) = status {
        let color = if status.is_error { Color::Red } else { Color::Green };
        spans.push(Span::styled(
            format!(" {} ", status.text),
            Style::default().fg(color).bg(Color::DarkGray),
        ));
    }
    spans.push(Span::styled(
        " ? pour l'aide ",
        Style::default().fg(Color::Gray).bg(Color::DarkGray),
    ));

    Paragraph::new(Line::from(spans)).render(area, buf);
}
