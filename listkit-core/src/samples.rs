//! Sample datasets with ready-made pipelines
//!
//! Each dataset carries the search fields, filter and sort rules that suit
//! it. The CLI runs these; they also serve as fixtures in tests.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::empty::EmptyStateConfig;
use crate::error::ListkitError;
use crate::options::{options, FilterFn, SortFn};
use crate::panel::{PanelSide, PanelSpec};
use crate::pipeline::{ListPipeline, SearchField};
use crate::selection::{Selection, SelectionMode};

/// A row the CLI can print
pub trait SampleRow: Serialize {
    /// Stable identity, used as the pipeline's key extractor
    fn id(&self) -> String;

    /// One-line human-readable summary
    fn summary(&self) -> String;
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_time(NaiveTime::from_hms_opt(h, min, 0).unwrap_or(NaiveTime::MIN))
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// === Fruits ===

pub const FRUITS: [&str; 7] = [
    "Apple",
    "Banana",
    "Cherry",
    "Date",
    "Elderberry",
    "Fig",
    "Grape",
];

impl SampleRow for &'static str {
    fn id(&self) -> String {
        self.to_string()
    }

    fn summary(&self) -> String {
        self.to_string()
    }
}

pub fn fruit_pipeline() -> ListPipeline<&'static str> {
    ListPipeline::builder(FRUITS.to_vec())
        .search(
            "Search fruits...",
            vec![SearchField::new(|f: &&'static str| f.to_string())],
        )
        .key(|f: &&'static str| f.to_string())
        .build()
}

// === Tasks ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub tags: Vec<String>,
}

impl SampleRow for Task {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn summary(&self) -> String {
        format!(
            "{} [{}] due {} #{}",
            self.title,
            self.status.as_str(),
            self.due_date.format("%b %d, %Y"),
            self.tags.join(" #")
        )
    }
}

pub fn tasks() -> Vec<Task> {
    let task = |id: &str, title: &str, status, priority, due, t: &[&str]| Task {
        id: id.to_string(),
        title: title.to_string(),
        status,
        priority,
        due_date: due,
        tags: tags(t),
    };

    vec![
        task("1", "Complete project documentation", TaskStatus::InProgress, Priority::High, date(2024, 12, 20), &["documentation", "urgent"]),
        task("2", "Review pull requests", TaskStatus::Pending, Priority::Medium, date(2024, 12, 18), &["code-review"]),
        task("3", "Update dependencies", TaskStatus::Completed, Priority::Low, date(2024, 12, 15), &["maintenance"]),
        task("4", "Implement new feature", TaskStatus::InProgress, Priority::High, date(2024, 12, 22), &["feature", "frontend"]),
        task("5", "Fix reported bugs", TaskStatus::Pending, Priority::High, date(2024, 12, 19), &["bug-fix", "urgent"]),
    ]
}

pub fn task_pipeline(items: Vec<Task>) -> ListPipeline<Task> {
    ListPipeline::builder(items)
        .search(
            "Search tasks...",
            vec![
                SearchField::new(|t: &Task| t.title.clone()),
                SearchField::new(|t: &Task| t.tags.join(" ")),
            ],
        )
        .filter(
            options(&[
                ("all", "All Tasks"),
                ("pending", "Pending"),
                ("in-progress", "In Progress"),
                ("completed", "Completed"),
            ]),
            FilterFn::by_predicate(|t: &Task, status: &str| t.status.as_str() == status),
        )
        .key(|t: &Task| t.id.clone())
        .empty_state(
            EmptyStateConfig::new("No tasks yet")
                .no_results_message("No items match your filter")
                .no_results_description("Try selecting a different filter option"),
        )
        .build()
}

// === Users ===

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub last_active: NaiveDateTime,
}

impl SampleRow for User {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn summary(&self) -> String {
        format!(
            "{} <{}> {} / {} (last active {})",
            self.name,
            self.email,
            self.role,
            self.department,
            self.last_active.format("%b %d, %H:%M")
        )
    }
}

pub fn users() -> Vec<User> {
    let user = |id: &str, name: &str, email: &str, role: &str, dept: &str, last| User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        department: dept.to_string(),
        last_active: last,
    };

    vec![
        user("1", "John Doe", "john.doe@example.com", "Developer", "Engineering", datetime(2024, 12, 17, 10, 30)),
        user("2", "Jane Smith", "jane.smith@example.com", "Designer", "Design", datetime(2024, 12, 17, 9, 15)),
        user("3", "Mike Johnson", "mike.j@example.com", "Manager", "Product", datetime(2024, 12, 16, 18, 45)),
        user("4", "Sarah Williams", "sarah.w@example.com", "Developer", "Engineering", datetime(2024, 12, 17, 11, 0)),
        user("5", "Tom Brown", "tom.brown@example.com", "QA Engineer", "Quality", datetime(2024, 12, 17, 8, 30)),
    ]
}

pub fn user_pipeline(items: Vec<User>) -> ListPipeline<User> {
    ListPipeline::builder(items)
        .search(
            "Search users...",
            vec![
                SearchField::new(|u: &User| u.name.clone()),
                SearchField::new(|u: &User| u.email.clone()),
                SearchField::new(|u: &User| u.role.clone()),
            ],
        )
        .filter(
            options(&[
                ("all", "All Departments"),
                ("Engineering", "Engineering"),
                ("Design", "Design"),
                ("Product", "Product"),
                ("Quality", "Quality"),
            ]),
            FilterFn::by_predicate(|u: &User, dept: &str| u.department == dept),
        )
        .key(|u: &User| u.id.clone())
        .build()
}

// === Files ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    pub size: Option<u64>,
    pub modified: NaiveDate,
    pub icon: String,
}

impl SampleRow for FileEntry {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn summary(&self) -> String {
        let size = self.size.map(format_file_size).unwrap_or_default();
        format!(
            "{}{} {} {}",
            self.name,
            if self.kind == FileKind::Folder { "/" } else { "" },
            size,
            self.modified.format("%b %d, %Y")
        )
    }
}

/// Human-readable size with one decimal, e.g. `2.0 MB`
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    if bytes == 0 {
        return String::new();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

pub fn files() -> Vec<FileEntry> {
    let file = |id: &str, name: &str, kind, size, modified, icon: &str| FileEntry {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        size,
        modified,
        icon: icon.to_string(),
    };

    vec![
        file("1", "Project Report.pdf", FileKind::File, Some(2_048_000), date(2024, 12, 15), "pdf"),
        file("2", "Documents", FileKind::Folder, None, date(2024, 12, 16), "folder"),
        file("3", "Screenshot.png", FileKind::File, Some(512_000), date(2024, 12, 17), "image"),
        file("4", "Archive", FileKind::Folder, None, date(2024, 12, 10), "archive"),
        file("5", "Presentation.pptx", FileKind::File, Some(4_096_000), date(2024, 12, 14), "file"),
    ]
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

pub fn file_pipeline(items: Vec<FileEntry>) -> ListPipeline<FileEntry> {
    ListPipeline::builder(items)
        .search(
            "Search files...",
            vec![SearchField::new(|f: &FileEntry| f.name.clone())],
        )
        .sort(
            options(&[("name", "Name"), ("modified", "Modified"), ("size", "Size")]),
            SortFn::by_comparators()
                .key("name", |a: &FileEntry, b: &FileEntry| compare_names(&a.name, &b.name))
                .key("modified", |a: &FileEntry, b: &FileEntry| b.modified.cmp(&a.modified))
                .key("size", |a: &FileEntry, b: &FileEntry| {
                    b.size.unwrap_or(0).cmp(&a.size.unwrap_or(0))
                })
                .build(),
        )
        .key(|f: &FileEntry| f.id.clone())
        .build()
}

// === Conversations ===

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub participants: Vec<String>,
    pub last_message: String,
    pub last_message_time: NaiveDateTime,
    pub unread: u32,
}

impl SampleRow for Conversation {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn summary(&self) -> String {
        let unread = if self.unread > 0 {
            format!(" ({} unread)", self.unread)
        } else {
            String::new()
        };
        format!(
            "{}{} {} - {}: {}",
            self.title,
            unread,
            self.last_message_time.format("%H:%M"),
            self.participants.join(", "),
            self.last_message
        )
    }
}

pub fn conversations() -> Vec<Conversation> {
    let conv = |id: &str, title: &str, people: &[&str], last: &str, at, unread| Conversation {
        id: id.to_string(),
        title: title.to_string(),
        participants: tags(people),
        last_message: last.to_string(),
        last_message_time: at,
        unread,
    };

    vec![
        conv("1", "Project Updates", &["John Doe", "Jane Smith"], "The new designs look great!", datetime(2024, 12, 17, 10, 30), 2),
        conv("2", "Team Standup", &["Mike Johnson", "Sarah Williams", "Tom Brown"], "Meeting at 10 AM tomorrow", datetime(2024, 12, 17, 9, 15), 0),
        conv("3", "Bug Reports", &["Tom Brown"], "Found an issue with the login page", datetime(2024, 12, 16, 18, 45), 5),
        conv("4", "Design Review", &["Jane Smith", "Mike Johnson"], "Please review the updated mockups", datetime(2024, 12, 16, 15, 30), 1),
    ]
}

pub fn conversation_pipeline(items: Vec<Conversation>) -> ListPipeline<Conversation> {
    ListPipeline::builder(items)
        .search(
            "Search conversations...",
            vec![
                SearchField::new(|c: &Conversation| c.title.clone()),
                SearchField::new(|c: &Conversation| c.participants.join(" ")),
                SearchField::new(|c: &Conversation| c.last_message.clone()),
            ],
        )
        .key(|c: &Conversation| c.id.clone())
        .build()
}

// === Documents ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Document,
    Report,
    Analysis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Draft,
    Review,
    Published,
}

impl DocumentStatus {
    /// Display order: published first, drafts last
    pub fn rank(&self) -> u8 {
        match self {
            DocumentStatus::Published => 0,
            DocumentStatus::Review => 1,
            DocumentStatus::Draft => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::Review => "review",
            DocumentStatus::Published => "published",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub author: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub status: DocumentStatus,
    pub rating: Option<u8>,
}

impl SampleRow for Document {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn summary(&self) -> String {
        let rating = self
            .rating
            .map(|r| format!(" {}/5", r))
            .unwrap_or_default();
        format!(
            "{} by {} [{}] {}{} #{}",
            self.title,
            self.author,
            self.status.as_str(),
            self.date,
            rating,
            self.tags.join(" #")
        )
    }
}

pub fn documents() -> Vec<Document> {
    let doc = |id: &str, title: &str, kind, author: &str, when, t: &[&str], status, rating| Document {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        author: author.to_string(),
        date: when,
        tags: tags(t),
        status,
        rating,
    };

    vec![
        doc("1", "Q4 2024 Financial Report", DocumentKind::Report, "John Doe", date(2024, 12, 15), &["finance", "quarterly"], DocumentStatus::Published, Some(5)),
        doc("2", "Technical Architecture Document", DocumentKind::Document, "Jane Smith", date(2024, 12, 10), &["technical", "architecture"], DocumentStatus::Review, Some(4)),
        doc("3", "Market Analysis Report", DocumentKind::Analysis, "Mike Johnson", date(2024, 12, 8), &["market", "competition"], DocumentStatus::Published, Some(5)),
        doc("4", "User Research Findings", DocumentKind::Report, "Sarah Williams", date(2024, 12, 5), &["research", "UX"], DocumentStatus::Draft, None),
        doc("5", "Security Audit Report", DocumentKind::Report, "Tom Brown", date(2024, 12, 1), &["security", "audit"], DocumentStatus::Published, Some(4)),
    ]
}

pub fn document_pipeline(items: Vec<Document>) -> ListPipeline<Document> {
    ListPipeline::builder(items)
        .search(
            "Search documents...",
            vec![
                SearchField::new(|d: &Document| d.title.clone()),
                SearchField::new(|d: &Document| d.author.clone()),
                SearchField::new(|d: &Document| d.tags.join(" ")),
            ],
        )
        .sort(
            options(&[("date", "Date"), ("title", "Title"), ("status", "Status")]),
            SortFn::by_comparators()
                .key("date", |a: &Document, b: &Document| b.date.cmp(&a.date))
                .key("title", |a: &Document, b: &Document| compare_names(&a.title, &b.title))
                .key("status", |a: &Document, b: &Document| a.status.rank().cmp(&b.status.rank()))
                .build(),
        )
        .key(|d: &Document| d.id.clone())
        .empty_state(
            EmptyStateConfig::new("No documents found")
                .description("No documents available")
                .no_results_description("Try adjusting your search terms"),
        )
        .build()
}

// === Dataset selection ===

/// Named sample dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Fruits,
    Tasks,
    Users,
    Files,
    Conversations,
    Documents,
}

impl Dataset {
    pub const ALL: [Dataset; 6] = [
        Dataset::Fruits,
        Dataset::Tasks,
        Dataset::Users,
        Dataset::Files,
        Dataset::Conversations,
        Dataset::Documents,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Fruits => "fruits",
            Dataset::Tasks => "tasks",
            Dataset::Users => "users",
            Dataset::Files => "files",
            Dataset::Conversations => "conversations",
            Dataset::Documents => "documents",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Dataset::name).collect()
    }

    /// Tasks allow picking several rows; every other list picks one
    pub fn selection_mode(&self) -> SelectionMode {
        match self {
            Dataset::Tasks => SelectionMode::Multi,
            _ => SelectionMode::Single,
        }
    }

    pub fn selection(&self) -> Selection {
        Selection::new(self.selection_mode())
    }

    /// Singular noun for one row, used in selection counts
    pub fn noun(&self) -> &'static str {
        match self {
            Dataset::Fruits => "fruit",
            Dataset::Tasks => "task",
            Dataset::Users => "user",
            Dataset::Files => "file",
            Dataset::Conversations => "conversation",
            Dataset::Documents => "document",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = ListkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| ListkitError::unknown_dataset(s, &Self::names()))
    }
}

// === Panel presets ===

/// Panel layouts used alongside the sample lists, keyed by storage key
pub fn panel_presets() -> Vec<PanelSpec> {
    let preset = |key: &str, default, min, max, side| PanelSpec {
        default_width: default,
        min_width: min,
        max_width: max,
        side,
        storage_key: Some(key.to_string()),
    };

    vec![
        preset("document-list-width", 350, 280, 500, PanelSide::Left),
        preset("basic-panel", 300, 200, 400, PanelSide::Left),
        preset("nav-panel", 250, 180, 350, PanelSide::Left),
        preset("file-explorer", 280, 220, 400, PanelSide::Left),
        preset("interactive-panel", 350, 250, 500, PanelSide::Left),
        preset("chat-sidebar", 300, 250, 400, PanelSide::Left),
        preset("multi-left", 200, 150, 300, PanelSide::Left),
        preset("multi-right", 250, 200, 350, PanelSide::Left),
    ]
}

/// Look up a preset by storage key
pub fn panel_preset(key: &str) -> Option<PanelSpec> {
    panel_presets()
        .into_iter()
        .find(|p| p.storage_key.as_deref() == Some(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<T: SampleRow>(items: Vec<&T>) -> Vec<String> {
        items.iter().map(|i| i.id()).collect()
    }

    #[test]
    fn test_fruit_search() {
        let mut pipeline = fruit_pipeline();
        pipeline.set_search_term("an");
        assert_eq!(pipeline.compute_display_list(), vec![&"Banana"]);
        assert_eq!(pipeline.search_placeholder(), Some("Search fruits..."));
    }

    #[test]
    fn test_task_status_filter_keeps_order() {
        let mut pipeline = task_pipeline(tasks());
        pipeline.set_active_filter("in-progress");
        assert_eq!(ids(pipeline.compute_display_list()), vec!["1", "4"]);

        pipeline.set_active_filter("completed");
        assert_eq!(ids(pipeline.compute_display_list()), vec!["3"]);
    }

    #[test]
    fn test_task_search_on_tags() {
        let mut pipeline = task_pipeline(tasks());
        pipeline.set_search_term("URGENT");
        assert_eq!(ids(pipeline.compute_display_list()), vec!["1", "5"]);

        pipeline.set_active_filter("pending");
        assert_eq!(ids(pipeline.compute_display_list()), vec!["5"]);
    }

    #[test]
    fn test_task_filter_empty_state() {
        let mut pipeline = task_pipeline(tasks());
        pipeline.set_active_filter("completed");
        pipeline.set_search_term("bug");

        let empty = pipeline.empty_state().unwrap();
        assert_eq!(empty.message, "No items match your filter");
    }

    #[test]
    fn test_user_department_filter() {
        let mut pipeline = user_pipeline(users());
        pipeline.set_active_filter("Engineering");
        assert_eq!(ids(pipeline.compute_display_list()), vec!["1", "4"]);

        pipeline.set_search_term("sarah.w@");
        assert_eq!(ids(pipeline.compute_display_list()), vec!["4"]);
    }

    #[test]
    fn test_file_sorts() {
        let mut pipeline = file_pipeline(files());

        pipeline.set_active_sort("name");
        assert_eq!(ids(pipeline.compute_display_list()), vec!["4", "2", "5", "1", "3"]);

        pipeline.set_active_sort("modified");
        assert_eq!(ids(pipeline.compute_display_list()), vec!["3", "2", "1", "5", "4"]);

        // Folders have no size and keep their relative order at the end
        pipeline.set_active_sort("size");
        assert_eq!(ids(pipeline.compute_display_list()), vec!["5", "1", "3", "2", "4"]);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(2_048_000), "2.0 MB");
        assert_eq!(format_file_size(512_000), "500.0 KB");
        assert_eq!(format_file_size(10), "10.0 B");
        assert_eq!(format_file_size(0), "");
    }

    #[test]
    fn test_conversation_search_participants() {
        let mut pipeline = conversation_pipeline(conversations());
        pipeline.set_search_term("tom brown");
        assert_eq!(ids(pipeline.compute_display_list()), vec!["2", "3"]);
    }

    #[test]
    fn test_document_sorts() {
        let mut pipeline = document_pipeline(documents());

        pipeline.set_active_sort("date");
        assert_eq!(ids(pipeline.compute_display_list()), vec!["1", "2", "3", "4", "5"]);

        pipeline.set_active_sort("title");
        assert_eq!(ids(pipeline.compute_display_list()), vec!["3", "1", "5", "2", "4"]);

        pipeline.set_active_sort("status");
        assert_eq!(ids(pipeline.compute_display_list()), vec!["1", "3", "5", "2", "4"]);
    }

    #[test]
    fn test_document_date_ties_keep_input_order() {
        let mut docs = documents();
        docs[3].date = docs[1].date;
        let mut pipeline = document_pipeline(docs);
        pipeline.set_active_sort("date");

        assert_eq!(ids(pipeline.compute_display_list()), vec!["1", "2", "4", "3", "5"]);
    }

    #[test]
    fn test_document_empty_descriptions() {
        let mut pipeline = document_pipeline(documents());
        pipeline.set_search_term("nothing matches this");
        assert_eq!(
            pipeline.empty_state().unwrap().description.as_deref(),
            Some("Try adjusting your search terms")
        );

        let empty = document_pipeline(vec![]);
        assert_eq!(
            empty.empty_state().unwrap().description.as_deref(),
            Some("No documents available")
        );
    }

    #[test]
    fn test_dataset_from_str() {
        assert_eq!("Tasks".parse::<Dataset>().unwrap(), Dataset::Tasks);
        assert!(matches!(
            "widgets".parse::<Dataset>(),
            Err(ListkitError::UnknownDataset { .. })
        ));
    }

    #[test]
    fn test_dataset_selection_modes() {
        assert_eq!(Dataset::Tasks.selection().mode(), SelectionMode::Multi);
        for dataset in Dataset::ALL.iter().filter(|d| **d != Dataset::Tasks) {
            assert_eq!(dataset.selection_mode(), SelectionMode::Single);
        }

        let mut selection = Dataset::Tasks.selection();
        selection.select("1");
        selection.select("5");
        assert_eq!(
            selection.label(Dataset::Tasks.noun()).as_deref(),
            Some("2 tasks selected")
        );
    }

    #[test]
    fn test_panel_presets_are_valid() {
        for preset in panel_presets() {
            preset.validate().unwrap();
        }
        assert!(panel_presets().iter().all(|p| p.side == PanelSide::Left));
        assert!(panel_preset("missing").is_none());
    }
}
