//! Interactive TUI for browsing and organizing the catalog
//!
//! Every mutation routes through the [`ViewCoordinator`]; the event loop
//! awaits each action before reading the next key, so a second action on
//! an item cannot start until the first outcome has been applied.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

use crate::catalog::{search, MediaKind};
use crate::remote::{GatewayResult, RemoteCatalog, VaultClient};
use crate::view::{ViewCoordinator, ViewSelection};

/// One row of the sidebar
#[derive(Debug, Clone, PartialEq)]
enum SidebarEntry {
    Home,
    Bookmarks,
    Kind(MediaKind),
    List(String),
}

impl SidebarEntry {
    fn label(&self) -> String {
        match self {
            SidebarEntry::Home => "Home".to_string(),
            SidebarEntry::Bookmarks => "Bookmarks".to_string(),
            SidebarEntry::Kind(kind) => kind.label().to_string(),
            SidebarEntry::List(name) => name.clone(),
        }
    }
}

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq)]
enum Focus {
    Sidebar,
    Items,
}

/// Modal input states layered over normal browsing
#[derive(Debug, Clone, PartialEq)]
enum Mode {
    Normal,
    /// Typing into the search filter
    Search,
    /// Typing a new list name
    NewList(String),
    /// Choosing a list for an item; holds the item name and the
    /// highlighted registry index
    AddToList { item: String, selected: usize },
    /// Waiting for y/n on a permanent item delete
    ConfirmDeleteItem(String),
    /// Waiting for y/n on a list delete
    ConfirmDeleteList(String),
}

struct BrowserState {
    focus: Focus,
    mode: Mode,
    sidebar_state: ListState,
    item_state: ListState,
    search_query: String,
    /// Display row -> index into the coordinator's item set
    filtered_indices: Vec<usize>,
    status_message: String,
    status_message_time: Option<std::time::Instant>,
}

impl BrowserState {
    fn new() -> Self {
        let mut sidebar_state = ListState::default();
        sidebar_state.select(Some(0));

        Self {
            focus: Focus::Sidebar,
            mode: Mode::Normal,
            sidebar_state,
            item_state: ListState::default(),
            search_query: String::new(),
            filtered_indices: Vec::new(),
            status_message: String::new(),
            status_message_time: None,
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_message_time = Some(std::time::Instant::now());
    }

    fn check_status_timeout(&mut self) {
        if let Some(time) = self.status_message_time {
            if time.elapsed().as_secs() >= 4 {
                self.status_message.clear();
                self.status_message_time = None;
            }
        }
    }

    /// Recompute the filtered rows and clamp the selection
    fn apply_filter<C: RemoteCatalog>(&mut self, coordinator: &ViewCoordinator<C>) {
        self.filtered_indices = search::filter_indices(coordinator.items(), &self.search_query);
        let selected = self.item_state.selected().unwrap_or(0);
        if self.filtered_indices.is_empty() {
            self.item_state.select(None);
        } else {
            self.item_state
                .select(Some(selected.min(self.filtered_indices.len() - 1)));
        }
    }

    fn clear_filter<C: RemoteCatalog>(&mut self, coordinator: &ViewCoordinator<C>) {
        self.search_query.clear();
        self.mode = Mode::Normal;
        self.apply_filter(coordinator);
    }

    /// Item index (into the coordinator's set) under the cursor
    fn selected_item_index(&self) -> Option<usize> {
        let row = self.item_state.selected()?;
        self.filtered_indices.get(row).copied()
    }

    fn move_selection(state: &mut ListState, len: usize, delta: isize) {
        if len == 0 {
            state.select(None);
            return;
        }
        let current = state.selected().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len as isize) as usize;
        state.select(Some(next));
    }
}

fn sidebar_entries(coordinator: &ViewCoordinator<VaultClient>) -> Vec<SidebarEntry> {
    let mut entries = vec![SidebarEntry::Home, SidebarEntry::Bookmarks];
    entries.extend(MediaKind::ALL.into_iter().map(SidebarEntry::Kind));
    entries.extend(
        coordinator
            .lists()
            .iter()
            .cloned()
            .map(SidebarEntry::List),
    );
    entries
}

/// Run the interactive browser
pub async fn run_browser(coordinator: ViewCoordinator<VaultClient>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = BrowserState::new();
    let mut coordinator = coordinator;

    let result = run_browser_loop(&mut terminal, &mut state, &mut coordinator).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

async fn run_browser_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut BrowserState,
    coordinator: &mut ViewCoordinator<VaultClient>,
) -> Result<()> {
    loop {
        state.check_status_timeout();

        terminal.draw(|f| draw_ui(f, state, coordinator))?;

        if !event::poll(std::time::Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Modal states swallow all input first
        match state.mode.clone() {
            Mode::Search => {
                match key.code {
                    KeyCode::Esc => state.clear_filter(coordinator),
                    KeyCode::Enter => state.mode = Mode::Normal,
                    KeyCode::Backspace => {
                        state.search_query.pop();
                        state.apply_filter(coordinator);
                    }
                    KeyCode::Char(c) => {
                        state.search_query.push(c);
                        state.apply_filter(coordinator);
                    }
                    _ => {}
                }
                continue;
            }
            Mode::NewList(mut input) => {
                match key.code {
                    KeyCode::Esc => state.mode = Mode::Normal,
                    KeyCode::Enter => {
                        state.mode = Mode::Normal;
                        match coordinator.create_list(&input).await {
                            Ok(()) => state.set_status(format!("Created list \"{}\"", input)),
                            Err(err) => state.set_status(err.to_string()),
                        }
                    }
                    KeyCode::Backspace => {
                        input.pop();
                        state.mode = Mode::NewList(input);
                    }
                    KeyCode::Char(c) => {
                        input.push(c);
                        state.mode = Mode::NewList(input);
                    }
                    _ => {}
                }
                continue;
            }
            Mode::AddToList { item, selected } => {
                let list_count = coordinator.lists().len();
                match key.code {
                    KeyCode::Esc => state.mode = Mode::Normal,
                    KeyCode::Up | KeyCode::Char('k') if list_count > 0 => {
                        state.mode = Mode::AddToList {
                            item,
                            selected: selected.checked_sub(1).unwrap_or(list_count - 1),
                        };
                    }
                    KeyCode::Down | KeyCode::Char('j') if list_count > 0 => {
                        state.mode = Mode::AddToList {
                            item,
                            selected: (selected + 1) % list_count,
                        };
                    }
                    KeyCode::Enter => {
                        state.mode = Mode::Normal;
                        if let Some(list) = coordinator.lists().get(selected).cloned() {
                            add_item_to_list(state, coordinator, &list, &item).await;
                        }
                    }
                    _ => {}
                }
                continue;
            }
            Mode::ConfirmDeleteItem(name) => {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') => {
                        state.mode = Mode::Normal;
                        match coordinator.delete_item(&name).await {
                            Ok(()) => {
                                state.set_status(format!("Deleted \"{}\"", name));
                                state.apply_filter(coordinator);
                            }
                            Err(err) => state.set_status(err.to_string()),
                        }
                    }
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                        state.mode = Mode::Normal;
                    }
                    _ => {}
                }
                continue;
            }
            Mode::ConfirmDeleteList(name) => {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') => {
                        state.mode = Mode::Normal;
                        match coordinator.delete_list(&name).await {
                            Ok(()) => {
                                state.set_status(format!("Deleted list \"{}\"", name));
                                state.apply_filter(coordinator);
                                state.sidebar_state.select(Some(0));
                            }
                            Err(err) => state.set_status(err.to_string()),
                        }
                    }
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                        state.mode = Mode::Normal;
                    }
                    _ => {}
                }
                continue;
            }
            Mode::Normal => {}
        }

        // The viewer only understands "back" and quit
        if coordinator.viewing().is_some() {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                    coordinator.back();
                }
                _ => {}
            }
            continue;
        }

        match key.code {
            KeyCode::Char('q') => return Ok(()),
            KeyCode::Tab => {
                state.focus = match state.focus {
                    Focus::Sidebar => Focus::Items,
                    Focus::Items => Focus::Sidebar,
                };
            }
            KeyCode::Esc => {
                if !state.search_query.is_empty() {
                    state.clear_filter(coordinator);
                } else {
                    state.focus = Focus::Sidebar;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => match state.focus {
                Focus::Sidebar => {
                    let len = sidebar_entries(coordinator).len();
                    BrowserState::move_selection(&mut state.sidebar_state, len, -1);
                }
                Focus::Items => {
                    let len = state.filtered_indices.len();
                    BrowserState::move_selection(&mut state.item_state, len, -1);
                }
            },
            KeyCode::Down | KeyCode::Char('j') => match state.focus {
                Focus::Sidebar => {
                    let len = sidebar_entries(coordinator).len();
                    BrowserState::move_selection(&mut state.sidebar_state, len, 1);
                }
                Focus::Items => {
                    let len = state.filtered_indices.len();
                    BrowserState::move_selection(&mut state.item_state, len, 1);
                }
            },
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => match state.focus {
                Focus::Sidebar => {
                    let entries = sidebar_entries(coordinator);
                    let Some(entry) = entries.get(state.sidebar_state.selected().unwrap_or(0))
                    else {
                        continue;
                    };
                    let outcome = activate_entry(coordinator, entry).await;
                    match outcome {
                        Ok(()) => {
                            // Search does not persist across view switches.
                            state.search_query.clear();
                            state.apply_filter(coordinator);
                            state.item_state.select(if coordinator.items().is_empty() {
                                None
                            } else {
                                Some(0)
                            });
                            state.focus = Focus::Items;
                        }
                        Err(err) => state.set_status(err.to_string()),
                    }
                }
                Focus::Items => {
                    if let Some(index) = state.selected_item_index() {
                        coordinator.open_item(index);
                    }
                }
            },
            KeyCode::Char('/') if state.focus == Focus::Items => {
                state.mode = Mode::Search;
                state.search_query.clear();
                state.apply_filter(coordinator);
            }
            KeyCode::Char('b') if state.focus == Focus::Items => {
                if let Some(index) = state.selected_item_index() {
                    let name = coordinator.items()[index].name.clone();
                    match coordinator.bookmark_item(&name).await {
                        Ok(()) => state.set_status(format!("Bookmarked \"{}\"", name)),
                        Err(err) => state.set_status(err.to_string()),
                    }
                }
            }
            KeyCode::Char('a') if state.focus == Focus::Items => {
                if coordinator.lists().is_empty() {
                    state.set_status("No lists yet; press 'n' to create one");
                } else if let Some(index) = state.selected_item_index() {
                    state.mode = Mode::AddToList {
                        item: coordinator.items()[index].name.clone(),
                        selected: 0,
                    };
                }
            }
            KeyCode::Char('d') if state.focus == Focus::Items => {
                let Some(index) = state.selected_item_index() else {
                    continue;
                };
                let item = coordinator.items()[index].clone();
                match coordinator.view().clone() {
                    // Deleting a file is permanent and needs confirmation;
                    // removing from a collection does not.
                    ViewSelection::BrowseKind(_) => {
                        state.mode = Mode::ConfirmDeleteItem(item.name);
                    }
                    ViewSelection::Bookmarks => {
                        match coordinator.remove_bookmark(item.kind, &item.name).await {
                            Ok(()) => {
                                state.set_status(format!("Removed bookmark \"{}\"", item.name));
                                state.apply_filter(coordinator);
                            }
                            Err(err) => state.set_status(err.to_string()),
                        }
                    }
                    ViewSelection::BrowseList(_) => {
                        match coordinator.remove_from_list(&item.name).await {
                            Ok(()) => {
                                state.set_status(format!("Removed \"{}\"", item.name));
                                state.apply_filter(coordinator);
                            }
                            Err(err) => state.set_status(err.to_string()),
                        }
                    }
                    _ => {}
                }
            }
            KeyCode::Char('n') => {
                state.mode = Mode::NewList(String::new());
            }
            KeyCode::Char('D') if state.focus == Focus::Sidebar => {
                let entries = sidebar_entries(coordinator);
                if let Some(SidebarEntry::List(name)) =
                    entries.get(state.sidebar_state.selected().unwrap_or(0))
                {
                    state.mode = Mode::ConfirmDeleteList(name.clone());
                }
            }
            KeyCode::Char('r') => {
                match coordinator.refresh().await {
                    Ok(()) => state.apply_filter(coordinator),
                    Err(err) => state.set_status(err.to_string()),
                }
            }
            _ => {}
        }
    }
}

async fn activate_entry(
    coordinator: &mut ViewCoordinator<VaultClient>,
    entry: &SidebarEntry,
) -> GatewayResult<()> {
    match entry {
        SidebarEntry::Home => coordinator.go_home().await,
        SidebarEntry::Bookmarks => coordinator.go_bookmarks().await,
        SidebarEntry::Kind(kind) => coordinator.browse_kind(*kind).await,
        SidebarEntry::List(name) => coordinator.browse_list(name).await,
    }
}

/// Confirm an add-to-list and bring the visible rows up to date
///
/// The coordinator patches its item set when the target list is the one
/// being browsed, so the filter has to be recomputed here too.
async fn add_item_to_list<C: RemoteCatalog>(
    state: &mut BrowserState,
    coordinator: &mut ViewCoordinator<C>,
    list: &str,
    item: &str,
) {
    match coordinator.add_to_list(list, item).await {
        Ok(()) => {
            state.set_status(format!("Added \"{}\" to \"{}\"", item, list));
            state.apply_filter(coordinator);
        }
        Err(err) => state.set_status(err.to_string()),
    }
}

fn draw_ui(f: &mut Frame, state: &mut BrowserState, coordinator: &ViewCoordinator<VaultClient>) {
    if let Some(item) = coordinator.viewing() {
        draw_viewer(f, item, coordinator);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(f.area());

    draw_sidebar(f, chunks[0], state, coordinator);
    draw_main(f, chunks[1], state, coordinator);

    match &state.mode {
        Mode::AddToList { item, selected } => {
            draw_add_to_list_modal(f, item, *selected, coordinator)
        }
        Mode::NewList(input) => draw_input_modal(f, "New list name", input),
        Mode::ConfirmDeleteItem(name) => {
            draw_confirm_modal(f, &format!("Delete \"{}\" permanently? (y/n)", name))
        }
        Mode::ConfirmDeleteList(name) => {
            draw_confirm_modal(f, &format!("Delete list \"{}\"? (y/n)", name))
        }
        _ => {}
    }
}

fn draw_sidebar(
    f: &mut Frame,
    area: Rect,
    state: &mut BrowserState,
    coordinator: &ViewCoordinator<VaultClient>,
) {
    let active_title = coordinator.view().title();
    let items: Vec<ListItem> = sidebar_entries(coordinator)
        .iter()
        .map(|entry| {
            let label = entry.label();
            let style = if label == active_title {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(label, style))
        })
        .collect();

    let border_style = if state.focus == Focus::Sidebar {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title("MediaVault")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut state.sidebar_state);
}

fn draw_main(
    f: &mut Frame,
    area: Rect,
    state: &mut BrowserState,
    coordinator: &ViewCoordinator<VaultClient>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(3),    // Item list
            Constraint::Length(2), // Status + key hints
        ])
        .split(area);

    // Search bar
    let search_text = if state.mode == Mode::Search {
        format!("/{}_", state.search_query)
    } else if state.search_query.is_empty() {
        "Press / to search".to_string()
    } else {
        format!("/{}", state.search_query)
    };
    let search = Paragraph::new(search_text).block(
        Block::default()
            .title(coordinator.view().title())
            .borders(Borders::ALL),
    );
    f.render_widget(search, chunks[0]);

    // Item list
    let rows: Vec<ListItem> = state
        .filtered_indices
        .iter()
        .filter_map(|&i| coordinator.items().get(i))
        .map(|item| {
            let line = Line::from(vec![
                Span::styled(
                    format!("[{}] ", item.kind),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(item.name.clone()),
            ]);
            ListItem::new(line)
        })
        .collect();

    let border_style = if state.focus == Focus::Items {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let count_title = format!(
        "{} item(s){}",
        state.filtered_indices.len(),
        if state.search_query.is_empty() {
            String::new()
        } else {
            format!(" (of {})", coordinator.items().len())
        }
    );
    let list = List::new(rows)
        .block(
            Block::default()
                .title(count_title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, chunks[1], &mut state.item_state);

    // Status + hints
    let status = if state.status_message.is_empty() {
        hint_line(coordinator.view())
    } else {
        state.status_message.clone()
    };
    let footer = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, chunks[2]);
}

fn hint_line(view: &ViewSelection) -> String {
    let base = "Tab switch pane | Enter open | / search | n new list | r refresh | q quit";
    match view {
        ViewSelection::BrowseKind(_) => {
            format!("{} | b bookmark | a add to list | d delete", base)
        }
        ViewSelection::Bookmarks => format!("{} | d remove bookmark", base),
        ViewSelection::BrowseList(_) => format!("{} | d remove from list", base),
        _ => base.to_string(),
    }
}

fn draw_viewer(f: &mut Frame, item: &crate::catalog::MediaItem, coordinator: &ViewCoordinator<VaultClient>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(2)])
        .split(f.area());

    let header = Paragraph::new(item.name.clone())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, chunks[0]);

    // Playback itself belongs to an external player; hand it the locator.
    let client = coordinator.client();
    let lines = vec![
        Line::from(format!("Kind:      {}", item.kind.label())),
        Line::from(format!("Stream:    {}", client.media_url(item.kind, &item.name))),
        Line::from(format!(
            "Thumbnail: {}",
            client.thumbnail_url(item.kind, &item.name)
        )),
    ];
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Details").borders(Borders::ALL));
    f.render_widget(body, chunks[1]);

    let footer = Paragraph::new("Esc back | q quit").style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, chunks[2]);
}

fn draw_add_to_list_modal(
    f: &mut Frame,
    item: &str,
    selected: usize,
    coordinator: &ViewCoordinator<VaultClient>,
) {
    let area = centered_rect(40, 40, f.area());
    f.render_widget(Clear, area);

    let rows: Vec<ListItem> = coordinator
        .lists()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let style = if i == selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(name.clone(), style))
        })
        .collect();

    let list = List::new(rows).block(
        Block::default()
            .title(format!("Add \"{}\" to:", item))
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn draw_input_modal(f: &mut Frame, title: &str, input: &str) {
    let area = centered_rect(40, 12, f.area());
    f.render_widget(Clear, area);

    let body = Paragraph::new(format!("{}_", input))
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(body, area);
}

fn draw_confirm_modal(f: &mut Frame, message: &str) {
    let area = centered_rect(50, 12, f.area());
    f.render_widget(Clear, area);

    let body = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Red))
        .block(Block::default().title("Confirm").borders(Borders::ALL));
    f.render_widget(body, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::fake::FakeCatalog;

    #[tokio::test]
    async fn test_add_to_active_list_updates_visible_rows() {
        let mut coordinator = ViewCoordinator::new(FakeCatalog::default());
        coordinator.create_list("Mix").await.unwrap();
        coordinator.browse_list("Mix").await.unwrap();

        let mut state = BrowserState::new();
        state.apply_filter(&coordinator);
        assert!(state.filtered_indices.is_empty());

        add_item_to_list(&mut state, &mut coordinator, "Mix", "a.mp3").await;

        assert_eq!(state.filtered_indices, vec![0]);
        assert_eq!(state.item_state.selected(), Some(0));
        assert!(state.status_message.contains("Added"));
    }

    #[tokio::test]
    async fn test_add_to_other_list_leaves_rows_alone() {
        let fake = FakeCatalog::with_files(MediaKind::Music, &["a.mp3"]);
        let mut coordinator = ViewCoordinator::new(fake);
        coordinator.create_list("Mix").await.unwrap();
        coordinator.browse_kind(MediaKind::Music).await.unwrap();

        let mut state = BrowserState::new();
        state.apply_filter(&coordinator);

        add_item_to_list(&mut state, &mut coordinator, "Mix", "a.mp3").await;

        assert_eq!(state.filtered_indices.len(), 1);
    }
}
