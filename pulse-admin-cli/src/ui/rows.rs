use chrono::{DateTime, NaiveDate, Utc};
use std::fmt::{Display, Write};

use crate::config::UiConfig;
use crate::models::{Challenge, Exercise, Report, Training, User};

pub const NO_PHOTO: &str = "Pas de photo";
const EMPTY: &str = "-";

/// Column layout of an entity table, shared by the dashboard and the
/// one-shot commands
pub trait TableRow {
    fn headers() -> &'static [&'static str];

    fn cells(&self, ui: &UiConfig) -> Vec<String>;
}

pub fn format_datetime(value: Option<&DateTime<Utc>>, ui: &UiConfig) -> String {
    value
        .map(|dt| render(dt.format(&ui.datetime_format)))
        .unwrap_or_else(|| EMPTY.to_string())
}

pub fn format_date(value: Option<&DateTime<Utc>>, ui: &UiConfig) -> String {
    value
        .map(|dt| render(dt.format(&ui.date_format)))
        .unwrap_or_else(|| EMPTY.to_string())
}

fn format_day(value: Option<&NaiveDate>, ui: &UiConfig) -> String {
    value
        .map(|d| render(d.format(&ui.date_format)))
        .unwrap_or_else(|| EMPTY.to_string())
}

// chrono reports a bad pattern as fmt::Error at render time
fn render(formatted: impl Display) -> String {
    let mut out = String::new();
    match write!(out, "{}", formatted) {
        Ok(()) => out,
        Err(_) => EMPTY.to_string(),
    }
}

fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| EMPTY.to_string())
}

fn number<N: ToString>(value: Option<N>) -> String {
    value.map(|n| n.to_string()).unwrap_or_else(|| EMPTY.to_string())
}

fn photo(value: Option<&String>) -> String {
    match value {
        Some(url) if !url.is_empty() => url.clone(),
        _ => NO_PHOTO.to_string(),
    }
}

impl TableRow for User {
    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "Nom",
            "Prénom",
            "Photo de Profil",
            "Date de Création",
            "Nom d'utilisateur",
            "Email",
            "Date de Naissance",
            "Pièces",
        ]
    }

    fn cells(&self, ui: &UiConfig) -> Vec<String> {
        vec![
            self.id.to_string(),
            text(self.last_name.as_ref()),
            text(self.first_name.as_ref()),
            photo(self.profile_photo.as_ref()),
            format_date(self.created_at.as_ref(), ui),
            self.username.clone(),
            text(self.email.as_ref()),
            format_day(self.birth_date.as_ref(), ui),
            self.coins.to_string(),
        ]
    }
}

impl TableRow for Training {
    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "Titre",
            "Description",
            "Date début",
            "Date fin",
            "Date création",
            "Status",
            "Auteur",
            "Photo",
        ]
    }

    fn cells(&self, ui: &UiConfig) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            text(self.description.as_ref()),
            format_datetime(self.start_at.as_ref(), ui),
            format_datetime(self.end_at.as_ref(), ui),
            format_date(self.creation_at.as_ref(), ui),
            text(self.status.as_ref()),
            text(self.author_id.as_ref()),
            photo(self.photos.as_ref()),
        ]
    }
}

impl TableRow for Exercise {
    fn headers() -> &'static [&'static str] {
        &["ID", "Titre", "Difficulté", "Type", "Pods"]
    }

    fn cells(&self, _ui: &UiConfig) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            text(self.difficulty.as_ref()),
            text(self.exercise_type.as_ref()),
            number(self.pod_count),
        ]
    }
}

impl TableRow for Challenge {
    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "Nom",
            "Points",
            "Exercice",
            "Date début",
            "Date fin",
            "Type",
            "Gagnants",
            "Participants",
            "Photo",
        ]
    }

    fn cells(&self, ui: &UiConfig) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            number(self.points),
            number(self.exercice_id),
            format_date(self.start_at.as_ref(), ui),
            format_date(self.end_at.as_ref(), ui),
            text(self.challenge_type.as_ref()),
            self.achiever_count().to_string(),
            self.participant_count().to_string(),
            photo(self.photo.as_ref()),
        ]
    }
}

impl TableRow for Report {
    fn headers() -> &'static [&'static str] {
        &["ID", "Commentaire", "Date de Création", "Utilisateur", "Raison"]
    }

    fn cells(&self, ui: &UiConfig) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.comment_id.to_string(),
            format_datetime(self.created_at.as_ref(), ui),
            text(self.user_id.as_ref()),
            self.reason.clone(),
        ]
    }
}
