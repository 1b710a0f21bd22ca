use anyhow::Result;
use christoffel_cutlery::{Course, ItemCandidate, ItemId, MenuCatalog, MenuConfig, MenuItem};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;
use tracing::debug;

// ============================================================================
// SCREENS
// ============================================================================

/// Where the user is. Exactly one screen is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Menu,
    AddItem,
    /// Waiting for y/n before removing this item
    ConfirmRemove(ItemId),
    Filter,
}

impl Screen {
    pub fn title(&self) -> &str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::Menu | Screen::ConfirmRemove(_) => "Menu",
            Screen::AddItem => "Add Item",
            Screen::Filter => "Filter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Course,
    Price,
    Ingredients,
    Image,
}

impl FormField {
    const ORDER: [FormField; 6] = [
        FormField::Name,
        FormField::Description,
        FormField::Course,
        FormField::Price,
        FormField::Ingredients,
        FormField::Image,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(&self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn label(&self) -> &str {
        match self {
            FormField::Name => "Item Name",
            FormField::Description => "Description",
            FormField::Course => "Course",
            FormField::Price => "Price",
            FormField::Ingredients => "Ingredients (comma separated)",
            FormField::Image => "Image URL",
        }
    }
}

/// Add-item form: the raw candidate plus which field has focus
#[derive(Debug, Clone)]
pub struct AddItemForm {
    pub candidate: ItemCandidate,
    pub focus: FormField,
}

impl Default for AddItemForm {
    fn default() -> Self {
        AddItemForm {
            candidate: ItemCandidate::default(),
            focus: FormField::Name,
        }
    }
}

impl AddItemForm {
    fn text_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.candidate.name),
            FormField::Description => Some(&mut self.candidate.description),
            FormField::Course => None,
            FormField::Price => Some(&mut self.candidate.price),
            FormField::Ingredients => Some(&mut self.candidate.ingredients),
            FormField::Image => Some(&mut self.candidate.image),
        }
    }

    fn value(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.candidate.name.clone(),
            FormField::Description => self.candidate.description.clone(),
            FormField::Course => format!("◀ {} ▶", self.candidate.category),
            FormField::Price => self.candidate.price.clone(),
            FormField::Ingredients => self.candidate.ingredients.clone(),
            FormField::Image => self.candidate.image.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub catalog: MenuCatalog,
    pub config: MenuConfig,
    pub screen: Screen,
    pub menu_state: TableState,
    pub filter_state: TableState,
    pub filter_course: Course,
    pub form: AddItemForm,
    pub show_detail: bool,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: MenuCatalog, config: MenuConfig) -> Self {
        let mut menu_state = TableState::default();
        if !catalog.is_empty() {
            menu_state.select(Some(0));
        }

        Self {
            catalog,
            config,
            screen: Screen::Welcome,
            menu_state,
            filter_state: TableState::default(),
            filter_course: Course::Starter,
            form: AddItemForm::default(),
            show_detail: false,
            status: None,
            should_quit: false,
        }
    }

    fn info(&mut self, text: String) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Info,
            text,
        });
    }

    fn error(&mut self, text: String) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Error,
            text,
        });
    }

    pub fn enter_menu(&mut self) {
        self.screen = Screen::Menu;
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.menu_state
            .selected()
            .and_then(|i| self.catalog.list_items().get(i))
    }

    pub fn next(&mut self) {
        let len = self.catalog.len();
        step_selection(&mut self.menu_state, len, true);
    }

    pub fn previous(&mut self) {
        let len = self.catalog.len();
        step_selection(&mut self.menu_state, len, false);
    }

    pub fn first(&mut self) {
        if !self.catalog.is_empty() {
            self.menu_state.select(Some(0));
        }
    }

    pub fn last(&mut self) {
        if !self.catalog.is_empty() {
            self.menu_state.select(Some(self.catalog.len() - 1));
        }
    }

    // ------------------------------------------------------------------------
    // Add item
    // ------------------------------------------------------------------------

    pub fn open_add_form(&mut self) {
        self.form = AddItemForm::default();
        self.status = None;
        self.screen = Screen::AddItem;
    }

    pub fn cancel_form(&mut self) {
        self.status = None;
        self.screen = Screen::Menu;
    }

    pub fn form_input(&mut self, c: char) {
        if let Some(field) = self.form.text_field_mut() {
            field.push(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(field) = self.form.text_field_mut() {
            field.pop();
        }
    }

    pub fn form_next_field(&mut self) {
        self.form.focus = self.form.focus.next();
    }

    pub fn form_previous_field(&mut self) {
        self.form.focus = self.form.focus.previous();
    }

    pub fn form_cycle_course(&mut self, forward: bool) {
        let course = &mut self.form.candidate.category;
        *course = if forward { course.next() } else { course.previous() };
    }

    /// Hand the form to the catalog. On failure the form keeps its contents
    /// so the user can correct them.
    pub fn submit_form(&mut self) {
        let candidate = self.form.candidate.clone();

        match self.catalog.add_item(candidate) {
            Ok(item) => {
                let text = format!("Added {}", item.name);
                let index = self.catalog.len() - 1;
                self.menu_state.select(Some(index));
                self.info(text);
                self.form = AddItemForm::default();
                self.screen = Screen::Menu;
            }
            Err(e) => {
                self.error(format!("{}: {}", e.title(), e));
            }
        }
    }

    // ------------------------------------------------------------------------
    // Remove item
    // ------------------------------------------------------------------------

    pub fn request_remove(&mut self) {
        if let Some(id) = self.selected_item().map(|item| item.id) {
            self.screen = Screen::ConfirmRemove(id);
        }
    }

    pub fn confirm_remove(&mut self) {
        if let Screen::ConfirmRemove(id) = self.screen {
            if let Some(removed) = self.catalog.remove_item(id) {
                self.info(format!("Removed {}", removed.name));
            }

            let len = self.catalog.len();
            let selected = match (self.menu_state.selected(), len) {
                (_, 0) => None,
                (Some(i), len) => Some(i.min(len - 1)),
                (None, _) => Some(0),
            };
            self.menu_state.select(selected);
        }
        self.screen = Screen::Menu;
    }

    pub fn cancel_remove(&mut self) {
        self.screen = Screen::Menu;
    }

    // ------------------------------------------------------------------------
    // Filter
    // ------------------------------------------------------------------------

    pub fn open_filter(&mut self) {
        self.screen = Screen::Filter;
        self.reset_filter_selection();
    }

    pub fn select_filter_course(&mut self, course: Course) {
        self.filter_course = course;
        self.reset_filter_selection();
    }

    pub fn filtered_items(&self) -> Vec<&MenuItem> {
        self.catalog.filter_by_category(self.filter_course).collect()
    }

    fn reset_filter_selection(&mut self) {
        let has_items = self
            .catalog
            .filter_by_category(self.filter_course)
            .next()
            .is_some();
        self.filter_state.select(if has_items { Some(0) } else { None });
    }

    pub fn filter_heading(&self) -> String {
        format!(
            "{}S ({})",
            self.filter_course,
            self.catalog.count_by_category(self.filter_course)
        )
    }

    // ------------------------------------------------------------------------
    // Key dispatch
    // ------------------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Welcome => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.enter_menu(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Screen::Menu => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => self.toggle_detail(),
                KeyCode::Char('a') => self.open_add_form(),
                KeyCode::Char('d') | KeyCode::Delete => self.request_remove(),
                KeyCode::Char('f') => self.open_filter(),
                KeyCode::Down | KeyCode::Char('j') => self.next(),
                KeyCode::Up | KeyCode::Char('k') => self.previous(),
                KeyCode::Home => self.first(),
                KeyCode::End => self.last(),
                _ => {}
            },
            Screen::AddItem => match key.code {
                KeyCode::Esc => self.cancel_form(),
                KeyCode::Enter => self.submit_form(),
                KeyCode::Tab | KeyCode::Down => self.form_next_field(),
                KeyCode::BackTab | KeyCode::Up => self.form_previous_field(),
                KeyCode::Left if self.form.focus == FormField::Course => {
                    self.form_cycle_course(false)
                }
                KeyCode::Right if self.form.focus == FormField::Course => {
                    self.form_cycle_course(true)
                }
                KeyCode::Backspace => self.form_backspace(),
                KeyCode::Char(c) => self.form_input(c),
                _ => {}
            },
            Screen::ConfirmRemove(_) => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.confirm_remove(),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.cancel_remove(),
                _ => {}
            },
            Screen::Filter => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Char('b') => self.enter_menu(),
                KeyCode::Left | KeyCode::Char('h') => {
                    self.select_filter_course(self.filter_course.previous())
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.select_filter_course(self.filter_course.next())
                }
                KeyCode::Char('1') => self.select_filter_course(Course::Starter),
                KeyCode::Char('2') => self.select_filter_course(Course::Main),
                KeyCode::Char('3') => self.select_filter_course(Course::Dessert),
                KeyCode::Down | KeyCode::Char('j') => {
                    let len = self.catalog.count_by_category(self.filter_course);
                    step_selection(&mut self.filter_state, len, true);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    let len = self.catalog.count_by_category(self.filter_course);
                    step_selection(&mut self.filter_state, len, false);
                }
                _ => {}
            },
        }
    }
}

/// Move a table selection one row, wrapping at either end
fn step_selection(state: &mut TableState, len: usize, forward: bool) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) if forward => {
            if i >= len - 1 {
                0
            } else {
                i + 1
            }
        }
        Some(i) => {
            if i == 0 {
                len - 1
            } else {
                i - 1
            }
        }
        None => 0,
    };
    state.select(Some(i));
}

// ============================================================================
// TERMINAL LOOP
// ============================================================================

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!(screen = app.screen.title(), code = ?key.code, "key");
            app.handle_key(key);
        }
    }
    Ok(())
}

// ============================================================================
// RENDERING
// ============================================================================

fn ui(f: &mut Frame, app: &mut App) {
    let area = f.size();

    if app.screen == Screen::Welcome {
        render_welcome(f, area, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with course stats
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_header(f, chunks[0], app);

    match app.screen {
        Screen::Welcome => {}
        Screen::Menu | Screen::ConfirmRemove(_) => {
            if app.show_detail {
                let content_chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Percentage(60), // Item list
                        Constraint::Percentage(40), // Detail panel
                    ])
                    .split(chunks[1]);

                render_menu_table(f, content_chunks[0], app);
                render_detail_panel(f, content_chunks[1], app);
            } else {
                render_menu_table(f, chunks[1], app);
            }
        }
        Screen::AddItem => render_form(f, chunks[1], app),
        Screen::Filter => render_filter(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);

    if let Screen::ConfirmRemove(id) = app.screen {
        render_confirm_remove(f, area, app, id);
    }
}

fn render_welcome(f: &mut Frame, area: Rect, app: &App) {
    let gold = Style::default().fg(Color::Yellow);

    let mut content = vec![Line::from(""); (area.height / 3) as usize];
    content.push(Line::from(Span::styled(
        format!("Welcome to {}", app.config.restaurant_name),
        gold.add_modifier(Modifier::BOLD),
    )));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "Experience the best Cuisine.",
        Style::default().fg(Color::LightYellow),
    )));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", gold.add_modifier(Modifier::BOLD)),
        Span::raw(" to see the menu, "),
        Span::styled("q", Style::default().fg(Color::Red)),
        Span::raw(" to quit"),
    ]));

    let welcome = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(gold));

    f.render_widget(welcome, area);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            app.config.restaurant_name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(app.screen.title().to_string(), Style::default().fg(Color::White)),
    ];

    for summary in app.catalog.category_summary() {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            format!("{} ", summary.course),
            Style::default().fg(course_color(summary.course)),
        ));
        spans.push(Span::raw(format!(
            "avg {}{} ({} items)",
            app.config.currency, summary.average_price, summary.count
        )));
    }

    let header = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(header, area);
}

fn item_rows<'a>(items: impl Iterator<Item = &'a MenuItem>, currency: &str) -> Vec<Row<'static>> {
    items
        .map(|item| {
            let color = course_color(item.category);
            Row::new(vec![
                Cell::from(truncate(&item.name, 30)),
                Cell::from(item.category.as_str()).style(Style::default().fg(color)),
                Cell::from(item.display_price(currency)),
                Cell::from(item.intensity.as_str())
                    .style(Style::default().fg(intensity_color(item))),
            ])
            .height(1)
        })
        .collect()
}

fn item_table<'a>(rows: Vec<Row<'a>>, title: String) -> Table<'a> {
    let header_cells = ["Dish", "Course", "Price", "Intensity"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    Table::new(
        rows,
        [
            Constraint::Length(32),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(title),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ")
}

fn render_menu_table(f: &mut Frame, area: Rect, app: &mut App) {
    if app.catalog.is_empty() {
        render_empty(f, area, " Menu ", "The menu is empty", "Press a to add a dish");
        return;
    }

    let rows = item_rows(app.catalog.list_items().iter(), &app.config.currency);
    let table = item_table(rows, format!(" Menu ({} dishes) ", app.catalog.len()));

    f.render_stateful_widget(table, area, &mut app.menu_state);
}

fn render_filter(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let mut tabs = vec![];
    for (i, course) in Course::ALL.iter().enumerate() {
        if i > 0 {
            tabs.push(Span::raw(" │ "));
        }
        let style = if *course == app.filter_course {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tabs.push(Span::styled(format!("{} {}", i + 1, course), style));
    }

    let selector = Paragraph::new(Line::from(tabs)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Course "),
    );
    f.render_widget(selector, chunks[0]);

    let title = format!(" {} ", app.filter_heading());
    let rows = item_rows(
        app.catalog.filter_by_category(app.filter_course),
        &app.config.currency,
    );

    if rows.is_empty() {
        render_empty(f, chunks[1], &title, "No items found", "Add some menu items first");
        return;
    }

    let table = item_table(rows, title);
    f.render_stateful_widget(table, chunks[1], &mut app.filter_state);
}

fn render_empty(f: &mut Frame, area: Rect, title: &str, headline: &str, hint: &str) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            hint.to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let empty = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(title.to_string()),
    );
    f.render_widget(empty, area);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let label_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut content = vec![Line::from("")];

    for field in FormField::ORDER {
        let focused = field == app.form.focus;
        let marker = if focused { "→ " } else { "  " };
        let mut value = app.form.value(field);
        if focused && field != FormField::Course {
            value.push('▏');
        }

        let value_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        content.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Green)),
            Span::styled(format!("{}: ", field.label()), label_style),
            Span::styled(value, value_style),
        ]));
        content.push(Line::from(""));
    }

    let preview = app.form.candidate.ingredients.trim();
    if !preview.is_empty() {
        let parsed = christoffel_cutlery::parse_ingredients(preview);
        content.push(Line::from(Span::styled(
            format!("  {} ingredient(s): {}", parsed.len(), parsed.join(" · ")),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let form = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Add a New Dish "),
    );

    f.render_widget(form, area);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Dish Details ");

    let item = match app.selected_item() {
        Some(item) => item,
        None => {
            f.render_widget(Paragraph::new("No dish selected").block(block), area);
            return;
        }
    };

    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Name: ", label),
            Span::raw(item.name.clone()),
        ]),
        Line::from(vec![
            Span::styled("  Course: ", label),
            Span::styled(
                item.category.as_str(),
                Style::default().fg(course_color(item.category)),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Price: ", label),
            Span::raw(item.display_price(&app.config.currency)),
        ]),
        Line::from(vec![
            Span::styled("  Intensity: ", label),
            Span::styled(item.intensity.as_str(), Style::default().fg(intensity_color(item))),
        ]),
        Line::from(vec![
            Span::styled("  Added: ", label),
            Span::raw(item.created_at.format("%Y-%m-%d %H:%M").to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  DESCRIPTION",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(
            format!("  {}", item.description),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  INGREDIENTS",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
    ];

    for ingredient in &item.ingredients {
        content.push(Line::from(format!("  • {}", ingredient)));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("  Image: ", label),
        Span::raw(item.image.clone()),
    ]));

    let detail_panel = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(block);

    f.render_widget(detail_panel, area);
}

fn render_confirm_remove(f: &mut Frame, area: Rect, app: &App, id: ItemId) {
    let name = app
        .catalog
        .find_by_id(id)
        .map(|item| item.name.clone())
        .unwrap_or_default();

    let popup = centered_rect(50, 7, area);
    let content = vec![
        Line::from(""),
        Line::from(format!("Remove \"{}\" from the menu?", name)),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(" Yes   "),
            Span::styled("n", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(" Cancel"),
        ]),
    ];

    let dialog = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Remove item "),
    );

    f.render_widget(Clear, popup);
    f.render_widget(dialog, popup);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![];

    if let Some(status) = &app.status {
        let color = match status.kind {
            StatusKind::Info => Color::Green,
            StatusKind::Error => Color::Red,
        };
        status_spans.push(Span::styled(
            format!(" {} ", status.text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        status_spans.push(Span::raw("|"));
    }

    let keys: &[(&str, &str)] = match app.screen {
        Screen::Welcome => &[("Enter", "Menu")],
        Screen::Menu => &[
            ("↑/↓", "Nav"),
            ("Enter", "Details"),
            ("a", "Add"),
            ("d", "Remove"),
            ("f", "Filter"),
        ],
        Screen::ConfirmRemove(_) => &[("y", "Remove"), ("n", "Cancel")],
        Screen::AddItem => &[
            ("Tab", "Next field"),
            ("←/→", "Course"),
            ("Enter", "Save"),
            ("Esc", "Back"),
        ],
        Screen::Filter => &[("1-3 ←/→", "Course"), ("↑/↓", "Nav"), ("Esc", "Back")],
    };

    for (key, action) in keys {
        status_spans.push(Span::raw(" "));
        status_spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(format!(" {} |", action)));
    }

    if app.screen != Screen::AddItem {
        status_spans.push(Span::raw(" "));
        status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
        status_spans.push(Span::raw(" Quit"));
    }

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn course_color(course: Course) -> Color {
    match course {
        Course::Starter => Color::Green,
        Course::Main => Color::Cyan,
        Course::Dessert => Color::Magenta,
    }
}

fn intensity_color(item: &MenuItem) -> Color {
    match item.intensity {
        christoffel_cutlery::Intensity::Mild => Color::Green,
        christoffel_cutlery::Intensity::Balanced => Color::Yellow,
        christoffel_cutlery::Intensity::Strong => Color::Red,
    }
}

/// Fixed-height box centered in `area`, `percent_x` wide
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height: height.min(area.height),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

// ============================================================================
// TESTS
// ============================================================================
