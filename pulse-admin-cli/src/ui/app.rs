use crossterm::event::KeyCode;
use serde_json::Value;

use crate::api::{ApiClient, ApiError};
use crate::config::UiConfig;
use crate::models::{Challenge, Comment, Exercise, NewChallenge, NewExercise, Report, Training, User};
use crate::pages;
use crate::view::{CountView, DetailView, LoadState, RemoteList, TaskPoll, ViewTask};

/// Top-level pages reachable with the number keys and Tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Users,
    Trainings,
    Exercises,
    Challenges,
    Reports,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Users,
        Tab::Trainings,
        Tab::Exercises,
        Tab::Challenges,
        Tab::Reports,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Dashboard => "Tableau de bord",
            Tab::Users => "Utilisateurs",
            Tab::Trainings => "Entraînements",
            Tab::Exercises => "Exercices",
            Tab::Challenges => "Défis",
            Tab::Reports => "Signalements",
        }
    }

    fn next(self) -> Tab {
        let idx = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tab::ALL[(idx + 1) % Tab::ALL.len()]
    }
}

pub struct UserDetailPage {
    pub user: DetailView<User>,
    pub trainings: Option<RemoteList<Training>>,
    pub created: Option<RemoteList<Challenge>>,
    pub joined: Option<RemoteList<Challenge>>,
}

/// The mounted page. Replacing it drops the previous page's views, which
/// aborts their in-flight loads.
pub enum Page {
    Dashboard {
        users: CountView,
        trainings: CountView,
    },
    Users(RemoteList<User>),
    Trainings(RemoteList<Training>),
    Exercises(RemoteList<Exercise>),
    Challenges(RemoteList<Challenge>),
    Reports(RemoteList<Report>),
    Comment(DetailView<Comment>),
    UserDetail(Box<UserDetailPage>),
}

impl Page {
    /// Tab highlighted while this page is shown
    pub fn tab(&self) -> Tab {
        match self {
            Page::Dashboard { .. } => Tab::Dashboard,
            Page::Users(_) | Page::UserDetail(_) => Tab::Users,
            Page::Trainings(_) => Tab::Trainings,
            Page::Exercises(_) => Tab::Exercises,
            Page::Challenges(_) => Tab::Challenges,
            Page::Reports(_) | Page::Comment(_) => Tab::Reports,
        }
    }

    fn has_search(&self) -> bool {
        matches!(
            self,
            Page::Users(_) | Page::Exercises(_) | Page::Challenges(_) | Page::Reports(_)
        )
    }

    fn row_count(&self) -> usize {
        match self {
            Page::Users(list) => list.visible().len(),
            Page::Trainings(list) => list.visible().len(),
            Page::Exercises(list) => list.visible().len(),
            Page::Challenges(list) => list.visible().len(),
            Page::Reports(list) => list.visible().len(),
            _ => 0,
        }
    }

    fn set_filter_term(&mut self, term: String) {
        match self {
            Page::Users(list) => list.set_filter_term(term),
            Page::Exercises(list) => list.set_filter_term(term),
            Page::Challenges(list) => list.set_filter_term(term),
            Page::Reports(list) => list.set_filter_term(term),
            _ => {}
        }
    }

    pub fn filter_term(&self) -> &str {
        match self {
            Page::Users(list) => list.filter_term(),
            Page::Exercises(list) => list.filter_term(),
            Page::Challenges(list) => list.filter_term(),
            Page::Reports(list) => list.filter_term(),
            _ => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Exercise,
    Challenge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
}

/// Add-record form on the catalog pages
#[derive(Debug, Clone, PartialEq)]
pub struct AddForm {
    pub kind: FormKind,
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl AddForm {
    fn new(kind: FormKind) -> Self {
        let labels: &[&'static str] = match kind {
            FormKind::Exercise => &["Titre", "Difficulté", "Type", "Nombre de pods"],
            FormKind::Challenge => &["Nom", "Description", "Points", "Exercice ID", "Type"],
        };

        Self {
            kind,
            fields: labels
                .iter()
                .copied()
                .map(|label| FormField {
                    label,
                    value: String::new(),
                })
                .collect(),
            focused: 0,
        }
    }

    fn value(&self, idx: usize) -> Option<String> {
        self.fields
            .get(idx)
            .map(|f| f.value.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parsed<N: std::str::FromStr>(&self, idx: usize) -> Result<Option<N>, String> {
        match self.value(idx) {
            None => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| format!("{} invalide : {}", self.fields[idx].label, raw)),
        }
    }

    /// Build the POST body; the first field is mandatory
    pub fn payload(&self) -> Result<Value, String> {
        let required = self
            .value(0)
            .ok_or_else(|| format!("{} est obligatoire", self.fields[0].label))?;

        let body = match self.kind {
            FormKind::Exercise => serde_json::to_value(NewExercise {
                title: required,
                difficulty: self.value(1),
                exercise_type: self.value(2),
                pod_count: self.parsed(3)?,
            }),
            FormKind::Challenge => serde_json::to_value(NewChallenge {
                name: required,
                description: self.value(1),
                points: self.parsed(2)?,
                exercice_id: self.parsed(3)?,
                challenge_type: self.value(4),
                start_at: None,
                end_at: None,
            }),
        };

        body.map_err(|e| e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Search,
    Form(AddForm),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

enum Target {
    Comment(i64),
    User(i64),
}

enum Mutation {
    Create(ViewTask<Result<Value, ApiError>>),
    DeleteComment(ViewTask<Result<Value, ApiError>>),
    KeepComment(ViewTask<Result<Value, ApiError>>),
}

/// Application state for the TUI dashboard
pub struct App {
    /// Should the application quit?
    pub should_quit: bool,
    /// Show help overlay
    pub show_help: bool,
    pub page: Page,
    /// Selected row on list pages
    pub selected_index: usize,
    pub input_mode: InputMode,
    pub status: Option<StatusMessage>,
    pub ui: UiConfig,
    client: ApiClient,
    mutation: Option<Mutation>,
}

impl App {
    pub fn new(client: ApiClient, ui: UiConfig) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            page: mount_tab(Tab::Dashboard, &client),
            selected_index: 0,
            input_mode: InputMode::Normal,
            status: None,
            ui,
            client,
            mutation: None,
        }
    }

    /// Whether a create or delete request is in flight
    pub fn is_busy(&self) -> bool {
        self.mutation.is_some()
    }

    /// Replace the current page with a freshly mounted one
    pub fn open_tab(&mut self, tab: Tab) {
        let page = mount_tab(tab, &self.client);
        self.show(page);
    }

    pub fn open_comment(&mut self, comment_id: i64) {
        let mut view = pages::comment(comment_id);
        view.mount(&self.client);
        self.show(Page::Comment(view));
    }

    pub fn open_user(&mut self, user_id: i64) {
        let mut user = pages::user(user_id);
        user.mount(&self.client);
        self.show(Page::UserDetail(Box::new(UserDetailPage {
            user,
            trainings: None,
            created: None,
            joined: None,
        })));
    }

    fn show(&mut self, page: Page) {
        self.page = page;
        self.selected_index = 0;
        self.input_mode = InputMode::Normal;
        self.mutation = None;
    }

    /// Apply finished background requests
    pub fn tick(&mut self) {
        match &mut self.page {
            Page::Dashboard { users, trainings } => {
                users.poll();
                trainings.poll();
            }
            Page::Users(list) => {
                list.poll();
            }
            Page::Trainings(list) => {
                list.poll();
            }
            Page::Exercises(list) => {
                list.poll();
            }
            Page::Challenges(list) => {
                list.poll();
            }
            Page::Reports(list) => {
                list.poll();
            }
            Page::Comment(view) => {
                view.poll();
            }
            Page::UserDetail(detail) => {
                if detail.user.poll() {
                    let uid = detail.user.item().and_then(|user| user.uid);
                    if let Some(uid) = uid {
                        detail.trainings = Some(mounted(RemoteList::new(pages::user_trainings(&uid)), &self.client));
                        detail.created =
                            Some(mounted(RemoteList::new(pages::user_created_challenges(&uid)), &self.client));
                        detail.joined =
                            Some(mounted(RemoteList::new(pages::user_joined_challenges(&uid)), &self.client));
                    }
                }
                if let Some(list) = detail.trainings.as_mut() {
                    list.poll();
                }
                for list in [detail.created.as_mut(), detail.joined.as_mut()].into_iter().flatten() {
                    list.poll();
                }
            }
        }

        self.poll_mutation();
        self.clamp_selection();
    }

    fn poll_mutation(&mut self) {
        let Some(mutation) = self.mutation.as_mut() else {
            return;
        };

        let task = match mutation {
            Mutation::Create(task) | Mutation::DeleteComment(task) | Mutation::KeepComment(task) => task,
        };
        let response = match task.try_take() {
            TaskPoll::Pending => return,
            TaskPoll::Ready(response) => response,
            TaskPoll::Lost => Err(ApiError::Unknown("requête interrompue".to_string())),
        };

        let Some(mutation) = self.mutation.take() else {
            return;
        };
        match mutation {
            Mutation::Create(_) => self.finish_create(response),
            Mutation::DeleteComment(_) => {
                self.finish_comment_action(response, pages::COMMENT_DELETE_FAILED, "Commentaire supprimé")
            }
            Mutation::KeepComment(_) => {
                self.finish_comment_action(response, pages::REPORT_DELETE_FAILED, "Commentaire conservé")
            }
        }
    }

    fn finish_create(&mut self, response: Result<Value, ApiError>) {
        let result = match &mut self.page {
            Page::Exercises(list) => list.apply_created(response).map(|e| e.title),
            Page::Challenges(list) => list.apply_created(response).map(|c| c.name),
            _ => return,
        };

        match result {
            Ok(label) => self.set_status(format!("Ajouté : {}", label), false),
            Err(err) => self.set_status(format!("Erreur : {}", err.user_message("Échec de l'ajout")), true),
        }
    }

    fn finish_comment_action(&mut self, response: Result<Value, ApiError>, failure: &str, success: &str) {
        let Page::Comment(view) = &mut self.page else {
            return;
        };

        match view.apply_delete(response, failure) {
            Ok(()) => self.set_status(success.to_string(), false),
            Err(_) => self.set_status(format!("Erreur : {}", failure), true),
        }
    }

    fn set_status(&mut self, text: String, is_error: bool) {
        self.status = Some(StatusMessage { text, is_error });
    }

    fn clamp_selection(&mut self) {
        let rows = self.page.row_count();
        if rows == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= rows {
            self.selected_index = rows - 1;
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) {
        // Help overlay takes precedence
        if self.show_help {
            if matches!(key, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        match self.input_mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Form(_) => self.handle_form_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,

            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                self.open_tab(Tab::ALL[idx]);
            }
            KeyCode::Tab => {
                let tab = self.page.tab().next();
                self.open_tab(tab);
            }

            KeyCode::Esc => {
                let parent = match self.page {
                    Page::Comment(_) => Some(Tab::Reports),
                    Page::UserDetail(_) => Some(Tab::Users),
                    _ => None,
                };
                match parent {
                    Some(tab) => self.open_tab(tab),
                    None => self.status = None,
                }
            }

            KeyCode::Up | KeyCode::Char('k') if !matches!(self.page, Page::Comment(_)) => {
                self.selected_index = self.selected_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_index + 1 < self.page.row_count() {
                    self.selected_index += 1;
                }
            }

            KeyCode::Char('/') if self.page.has_search() => self.input_mode = InputMode::Search,

            KeyCode::Char('a') | KeyCode::Char('A') => match &self.page {
                Page::Exercises(list) if matches!(list.state(), LoadState::Ready(_)) => {
                    self.input_mode = InputMode::Form(AddForm::new(FormKind::Exercise));
                }
                Page::Challenges(list) if matches!(list.state(), LoadState::Ready(_)) => {
                    self.input_mode = InputMode::Form(AddForm::new(FormKind::Challenge));
                }
                _ => {}
            },

            KeyCode::Enter => self.open_selected(),

            KeyCode::Char('d') | KeyCode::Char('D') => self.comment_action(true),
            KeyCode::Char('k') | KeyCode::Char('K') => self.comment_action(false),

            _ => {}
        }
    }

    /// Remount the current page, fetching it again
    fn open_selected(&mut self) {
        let idx = self.selected_index;
        let target = match &self.page {
            Page::Reports(list) => list.visible().get(idx).map(|r| Target::Comment(r.comment_id)),
            Page::Users(list) => list.visible().get(idx).map(|u| Target::User(u.id)),
            _ => None,
        };
        self.open_target(target);
    }

    fn open_target(&mut self, target: Option<Target>) {
        match target {
            Some(Target::Comment(id)) => self.open_comment(id),
            Some(Target::User(id)) => self.open_user(id),
            None => {}
        }
    }

    fn comment_action(&mut self, delete: bool) {
        if self.mutation.is_some() {
            return;
        }
        let Page::Comment(view) = &self.page else {
            return;
        };
        let Some(comment) = view.item() else {
            return;
        };

        let client = self.client.clone();
        if delete {
            let path = pages::comment_path(comment.id);
            self.mutation = Some(Mutation::DeleteComment(ViewTask::spawn(async move {
                client.delete(&path).await
            })));
        } else {
            let path = pages::comment_reports_path(comment.id);
            self.mutation = Some(Mutation::KeepComment(ViewTask::spawn(async move {
                client.delete(&path).await
            })));
        }
    }

    fn handle_search_key(&mut self, key: KeyCode) {
        let mut term = self.page.filter_term().to_string();
        match key {
            KeyCode::Esc | KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                return;
            }
            KeyCode::Backspace => {
                term.pop();
            }
            KeyCode::Char(c) => term.push(c),
            _ => return,
        }
        self.page.set_filter_term(term);
        self.selected_index = 0;
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        let InputMode::Form(form) = &mut self.input_mode else {
            return;
        };

        match key {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Tab | KeyCode::Down => form.focused = (form.focused + 1) % form.fields.len(),
            KeyCode::BackTab | KeyCode::Up => {
                form.focused = (form.focused + form.fields.len() - 1) % form.fields.len();
            }
            KeyCode::Backspace => {
                form.fields[form.focused].value.pop();
            }
            KeyCode::Char(c) => form.fields[form.focused].value.push(c),
            KeyCode::Enter => {
                let payload = form.payload();
                let endpoint = match form.kind {
                    FormKind::Exercise => pages::exercises().create_endpoint,
                    FormKind::Challenge => pages::challenges().create_endpoint,
                };
                self.submit_form(payload, endpoint);
            }
            _ => {}
        }
    }

    fn submit_form(&mut self, payload: Result<Value, String>, endpoint: Option<String>) {
        if self.mutation.is_some() {
            return;
        }
        let payload = match payload {
            Ok(payload) => payload,
            Err(message) => {
                self.set_status(format!("Erreur : {}", message), true);
                return;
            }
        };
        let Some(endpoint) = endpoint else {
            return;
        };

        let client = self.client.clone();
        self.mutation = Some(Mutation::Create(ViewTask::spawn(async move {
            client.post_json(&endpoint, &payload).await
        })));
        self.input_mode = InputMode::Normal;
    }
}

fn mount_tab(tab: Tab, client: &ApiClient) -> Page {
    match tab {
        Tab::Dashboard => {
            let mut users = CountView::new(pages::USERS_COUNT);
            let mut trainings = CountView::new(pages::TRAININGS_COUNT);
            users.mount(client);
            trainings.mount(client);
            Page::Dashboard { users, trainings }
        }
        Tab::Users => Page::Users(mounted(RemoteList::new(pages::users()), client)),
        Tab::Trainings => Page::Trainings(mounted(RemoteList::new(pages::trainings()), client)),
        Tab::Exercises => Page::Exercises(mounted(RemoteList::new(pages::exercises()), client)),
        Tab::Challenges => Page::Challenges(mounted(RemoteList::new(pages::challenges()), client)),
        Tab::Reports => Page::Reports(mounted(RemoteList::new(pages::reports()), client)),
    }
}

fn mounted<T: crate::view::ListItem>(mut list: RemoteList<T>, client: &ApiClient) -> RemoteList<T> {
    list.mount(client);
    list
}
