// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! A ratatui + crossterm shell around [`Navigator`]: catalog menu, pattern header, the animated
//! scene with its caption and progress, and a tabbed detail panel.

use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::model::{Catalog, ColorToken, Pattern, PatternId};
use crate::navigation::Navigator;
use crate::render::{render_scene, AnnotatedScene};
use crate::sequencer::{Clock, StepSequencer, SystemClock};

mod theme;

pub use theme::{ThemeError, TuiTheme, PALETTE_ENV, PALETTE_ENV_FALLBACK};

const IDLE_POLL: Duration = Duration::from_millis(250);
const TOAST_TTL: Duration = Duration::from_secs(2);
const FOOTER_BRAND: &str = "🅿 🆁 🅾 🆃 🅴 🆄 🆂 ";
const SIDEBAR_MAX_WIDTH: u16 = 30;
const HEADER_HEIGHT: u16 = 4;

/// Runs the interactive terminal UI until the user quits.
pub fn run(navigator: Navigator, theme: TuiTheme) -> io::Result<()> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(navigator, theme);
    tracing::info!(
        pattern_id = %app.nav.active_pattern().id(),
        "tui started"
    );

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(app.poll_timeout())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
        app.nav.poll();
    }

    tracing::info!("tui stopped");
    Ok(())
}

fn draw<C: Clock + Clone>(frame: &mut Frame<'_>, app: &mut App<C>) {
    let area = frame.area();
    frame.render_widget(Block::default().style(app.theme.base_style()), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    let content_area = if app.nav.session().menu_open() {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(sidebar_width(main_area)),
                Constraint::Min(0),
            ])
            .split(main_area);
        draw_menu(frame, app, panes[0]);
        panes[1]
    } else {
        main_area
    };

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(8),
            Constraint::Percentage(35),
        ])
        .split(content_area);
    draw_header(frame, app, sections[0]);
    draw_visual(frame, app, sections[1]);
    draw_detail(frame, app, sections[2]);

    let toast_snapshot = app
        .toast
        .as_ref()
        .map(|toast| (toast.message.clone(), toast.expires_at));
    let toast_suffix = match toast_snapshot {
        Some((message, expires_at)) if expires_at > Instant::now() => format!(" | {message}"),
        Some(_) => {
            app.toast = None;
            String::new()
        }
        None => String::new(),
    };

    let brand = Paragraph::new(footer_brand_line(&app.theme)).alignment(Alignment::Right);
    if app.search_mode != SearchMode::Inactive {
        let status = Paragraph::new(search_footer_line(app, &toast_suffix));
        frame.render_widget(status, status_area);
        frame.render_widget(brand, status_area);
        if app.search_mode == SearchMode::Editing {
            let cursor_x = status_area
                .x
                .saturating_add(1)
                .saturating_add(app.search_query.chars().count() as u16)
                .min(status_area.x.saturating_add(status_area.width.saturating_sub(1)));
            frame.set_cursor_position((cursor_x, status_area.y));
        }
        return;
    }

    let compact = footer_uses_compact_mode(area);
    let status = Paragraph::new(footer_help_line(app, &toast_suffix, compact));
    frame.render_widget(status, status_area);
    frame.render_widget(brand, status_area);

    if app.show_help {
        render_help(frame, app, main_area);
    }
}

fn draw_menu<C: Clock + Clone>(frame: &mut Frame<'_>, app: &mut App<C>, area: Rect) {
    let active = app.nav.session().active_pattern_id().clone();
    let (items, selected) = menu_items(app.nav.catalog(), &active, &app.theme);
    app.menu_state.select(selected);

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Patterns", Some("m")))
                .border_style(app.theme.panel_border_style(true)),
        )
        .style(app.theme.base_style())
        .highlight_style(app.theme.selection_style());
    frame.render_stateful_widget(list, area, &mut app.menu_state);
}

fn draw_header<C: Clock + Clone>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let pattern = app.nav.active_pattern();
    let catalog = app.nav.catalog();
    let index = catalog.position_of(pattern.id().as_str()).map(|idx| idx + 1);
    let counter = pattern_counter_label(index, catalog.pattern_count());

    let lines = header_lines(pattern, app.nav.category_color(), &app.theme);
    let header = Paragraph::new(lines)
        .style(app.theme.base_style())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Pattern", Some(counter.as_str())))
                .border_style(app.theme.panel_border_style(false)),
        );
    frame.render_widget(header, area);
}

fn draw_visual<C: Clock + Clone>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let scene = app.nav.scene();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(view_title("Visual", Some(scene.title())))
        .border_style(app.theme.panel_border_style(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let body = match render_scene(&scene) {
        Ok(annotated) => {
            let (width, height) = text_extent(&annotated.text);
            let left_pad = (rows[0].width as usize).saturating_sub(width) / 2;
            let top_pad = (rows[0].height as usize).saturating_sub(height) / 2;
            pad_text(scene_text(&annotated, &app.theme), left_pad, top_pad)
        }
        Err(err) => {
            tracing::warn!(scene = scene.title(), error = %err, "scene failed to paint");
            Text::from(Line::from(Span::styled(
                format!("Cannot draw scene: {err}"),
                app.theme.error_style(),
            )))
        }
    };
    frame.render_widget(Paragraph::new(body).style(app.theme.base_style()), rows[0]);

    let sequencer = app.nav.sequencer();
    let caption_style = if sequencer.current_position() == 0 {
        app.theme.muted_style()
    } else {
        app.theme.header_style()
    };
    let caption = Paragraph::new(Line::from(Span::styled(
        sequencer.current_caption().to_owned(),
        caption_style,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(caption, rows[1]);

    let progress = Paragraph::new(progress_line(sequencer, &app.theme)).alignment(Alignment::Center);
    frame.render_widget(progress, rows[2]);
}

fn draw_detail<C: Clock + Clone>(frame: &mut Frame<'_>, app: &mut App<C>, area: Rect) {
    let pattern = app.nav.active_pattern();
    let tips = app.nav.usage_tips();
    let lines = detail_lines(pattern, &tips, app.detail_tab, &app.theme);
    app.detail_scroll = app
        .detail_scroll
        .min(lines.len().saturating_sub(1).min(u16::MAX as usize) as u16);

    let detail = Paragraph::new(lines)
        .style(app.theme.base_style())
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(detail_title(app.detail_tab, &app.theme))
                .border_style(app.theme.panel_border_style(false)),
        );
    frame.render_widget(detail, area);
}

// Extracted panel/header/footer/help rendering helpers.
include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    Inactive,
    Editing,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchKind {
    Regular,
    Fuzzy,
}

#[derive(Debug, Clone)]
struct SearchCandidate {
    pattern_id: PatternId,
    haystack: String,
}

struct App<C: Clock + Clone = SystemClock> {
    nav: Navigator<C>,
    theme: TuiTheme,
    detail_tab: DetailTab,
    detail_scroll: u16,
    menu_state: ListState,
    show_help: bool,
    help_scroll: u16,
    help_viewport_height: u16,
    toast: Option<Toast>,
    search_mode: SearchMode,
    search_kind: SearchKind,
    search_query: String,
    search_candidates: Vec<SearchCandidate>,
    search_results: Vec<PatternId>,
    search_result_index: usize,
    should_quit: bool,
}

impl<C: Clock + Clone> App<C> {
    fn new(nav: Navigator<C>, theme: TuiTheme) -> Self {
        let theme = theme.with_dark(nav.session().dark_mode());
        Self {
            nav,
            theme,
            detail_tab: DetailTab::Context,
            detail_scroll: 0,
            menu_state: ListState::default(),
            show_help: false,
            help_scroll: 0,
            help_viewport_height: 0,
            toast: None,
            search_mode: SearchMode::Inactive,
            search_kind: SearchKind::Regular,
            search_query: String::new(),
            search_candidates: Vec::new(),
            search_results: Vec::new(),
            search_result_index: 0,
            should_quit: false,
        }
    }

    /// Input wait: the idle poll, shortened so an autoplay tick is never late.
    fn poll_timeout(&self) -> Duration {
        match self.nav.sequencer().time_until_tick() {
            Some(due) => due.min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    /// Applies one key press. Returns `true` when the app should quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                KeyCode::Down | KeyCode::Char('j') => self.help_scroll_by(1),
                KeyCode::Up | KeyCode::Char('k') => self.help_scroll_by(-1),
                KeyCode::PageDown => self.help_scroll_page(1),
                KeyCode::PageUp => self.help_scroll_page(-1),
                KeyCode::Home => self.help_scroll = 0,
                KeyCode::End => self.help_scroll = u16::MAX,
                _ => {}
            }
            return false;
        }

        match self.search_mode {
            SearchMode::Editing => {
                self.handle_search_edit_key(code);
                return false;
            }
            SearchMode::Results => {
                if matches!(code, KeyCode::Esc) {
                    self.clear_search();
                    return false;
                }
            }
            SearchMode::Inactive => {}
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => self.toggle_help(),
            KeyCode::Char(' ') => self.nav.sequencer_mut().toggle_play(),
            KeyCode::Right | KeyCode::Char('l') => self.nav.sequencer_mut().seek_next(),
            KeyCode::Left | KeyCode::Char('h') => self.nav.sequencer_mut().seek_prev(),
            KeyCode::Char('r') => self.nav.sequencer_mut().reset(),
            KeyCode::Char('s') => self.toggle_speed(),
            KeyCode::Down | KeyCode::Char('j') => {
                let rebound = self.nav.next_pattern();
                self.after_selection(rebound);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let rebound = self.nav.prev_pattern();
                self.after_selection(rebound);
            }
            KeyCode::Char(']') => {
                let rebound = self.nav.next_category();
                self.after_selection(rebound);
            }
            KeyCode::Char('[') => {
                let rebound = self.nav.prev_category();
                self.after_selection(rebound);
            }
            KeyCode::Tab => self.set_detail_tab(self.detail_tab.cycle()),
            KeyCode::BackTab => self.set_detail_tab(self.detail_tab.cycle_back()),
            KeyCode::PageDown => self.detail_scroll = self.detail_scroll.saturating_add(5),
            KeyCode::PageUp => self.detail_scroll = self.detail_scroll.saturating_sub(5),
            KeyCode::Char('m') => self.nav.toggle_menu(),
            KeyCode::Esc if self.nav.session().menu_open() => self.nav.toggle_menu(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('/') => self.enter_search_mode(SearchKind::Regular),
            KeyCode::Char('\\') => self.enter_search_mode(SearchKind::Fuzzy),
            KeyCode::Char('n') => self.search_next(),
            KeyCode::Char('N') => self.search_prev(),
            KeyCode::Char('y') => self.yank_code_snippet(),
            _ => {}
        }

        false
    }

    fn after_selection(&mut self, rebound: bool) {
        if rebound {
            self.detail_scroll = 0;
        }
    }

    fn set_detail_tab(&mut self, tab: DetailTab) {
        self.detail_tab = tab;
        self.detail_scroll = 0;
    }

    fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            if self.search_mode != SearchMode::Inactive {
                self.clear_search();
            }
            self.help_scroll = 0;
        }
    }

    fn toggle_speed(&mut self) {
        self.nav.sequencer_mut().toggle_speed();
        let multiplier = self.nav.sequencer().speed().multiplier();
        self.set_toast(format!("Speed {multiplier}x"));
    }

    fn toggle_theme(&mut self) {
        self.nav.toggle_dark_mode();
        let dark = self.nav.session().dark_mode();
        self.theme.set_dark(dark);
        self.set_toast(if dark { "Dark mode" } else { "Light mode" });
    }

    fn help_scroll_by(&mut self, delta: i32) {
        if delta < 0 {
            self.help_scroll = self.help_scroll.saturating_sub((-delta) as u16);
        } else {
            self.help_scroll = self.help_scroll.saturating_add(delta as u16);
        }
    }

    fn help_scroll_page(&mut self, direction: i32) {
        let page = self.help_viewport_height.max(1).saturating_sub(1) as i32;
        let step = page.max(1);
        self.help_scroll_by(direction.signum() * step);
    }

    fn enter_search_mode(&mut self, kind: SearchKind) {
        self.search_mode = SearchMode::Editing;
        self.search_kind = kind;
        self.search_query.clear();
        self.search_result_index = 0;
        self.search_results.clear();
        self.search_candidates = search_candidates_from_catalog(self.nav.catalog());
    }

    fn handle_search_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.clear_search(),
            KeyCode::Enter => self.commit_search(),
            KeyCode::Backspace => {
                self.search_query.pop();
                self.update_search_results();
            }
            KeyCode::Char(ch) => {
                self.search_query.push(ch);
                self.update_search_results();
            }
            _ => {}
        }
    }

    fn commit_search(&mut self) {
        if self.search_results.len() > 1 {
            self.search_mode = SearchMode::Results;
        } else {
            self.search_mode = SearchMode::Inactive;
        }
    }

    fn clear_search(&mut self) {
        self.search_mode = SearchMode::Inactive;
        self.search_query.clear();
        self.search_candidates.clear();
        self.search_results.clear();
        self.search_result_index = 0;
    }

    fn update_search_results(&mut self) {
        self.search_results =
            ranked_search_results(&self.search_candidates, &self.search_query, self.search_kind);
        self.search_result_index = 0;
        self.jump_to_current_search_result();
    }

    fn search_prefix(&self) -> char {
        match self.search_kind {
            SearchKind::Regular => '/',
            SearchKind::Fuzzy => '\\',
        }
    }

    fn jump_to_current_search_result(&mut self) {
        let Some(pattern_id) = self.search_results.get(self.search_result_index).cloned() else {
            return;
        };
        let rebound = self.nav.select_pattern(pattern_id.as_str());
        self.after_selection(rebound);
    }

    fn search_next(&mut self) {
        let len = self.search_results.len();
        if len <= 1 {
            return;
        }

        self.search_result_index = (self.search_result_index + 1) % len;
        self.jump_to_current_search_result();
    }

    fn search_prev(&mut self) {
        let len = self.search_results.len();
        if len <= 1 {
            return;
        }

        self.search_result_index = match self.search_result_index {
            0 => len - 1,
            n => n - 1,
        };
        self.jump_to_current_search_result();
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn yank_code_snippet(&mut self) {
        let code = self.nav.active_pattern().code_snippet();
        if code.trim().is_empty() {
            self.set_toast("No code snippet");
            return;
        }

        match copy_to_clipboard(code) {
            Ok(backend) => self.set_toast(format!("Yanked code snippet ({backend})")),
            Err(err) => self.set_toast(format!("Clipboard error: {err}")),
        }
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

fn copy_to_clipboard(text: &str) -> Result<&'static str, String> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text))).map_err(|err| err.to_string())?;
    Ok("osc52")
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

/// Styles each cell of the painted scene by the emphasis of the element that owns it.
fn scene_text(annotated: &AnnotatedScene, theme: &TuiTheme) -> Text<'static> {
    let base = theme.base_style();
    let lines = annotated
        .text
        .split('\n')
        .enumerate()
        .map(|(line_idx, line)| {
            let chars = line.chars().collect::<Vec<_>>();
            let mut styles = vec![base; chars.len()];
            for span in annotated.spans_on(line_idx) {
                let style = theme.emphasis_style(span.emphasis);
                for x in span.x0..=span.x1 {
                    if let Some(slot) = styles.get_mut(x) {
                        *slot = style;
                    }
                }
            }
            styled_runs(&chars, &styles)
        })
        .collect::<Vec<_>>();
    Text::from(lines)
}

fn styled_runs(chars: &[char], styles: &[Style]) -> Line<'static> {
    let mut spans = Vec::new();
    let mut start = 0;
    for idx in 1..=chars.len() {
        if idx == chars.len() || styles[idx] != styles[start] {
            spans.push(Span::styled(
                chars[start..idx].iter().collect::<String>(),
                styles[start],
            ));
            start = idx;
        }
    }
    Line::from(spans)
}

fn text_extent(text: &str) -> (usize, usize) {
    if text.is_empty() {
        return (0, 0);
    }
    let width = text
        .split('\n')
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    (width, text.split('\n').count())
}

fn search_candidates_from_catalog(catalog: &Catalog) -> Vec<SearchCandidate> {
    let mut candidates = catalog
        .patterns()
        .map(|pattern| SearchCandidate {
            pattern_id: pattern.id().clone(),
            haystack: pattern.search_haystack().to_lowercase(),
        })
        .collect::<Vec<_>>();
    candidates.sort_by(|a, b| a.haystack.cmp(&b.haystack));
    candidates
}

fn ranked_search_results(
    candidates: &[SearchCandidate],
    query: &str,
    kind: SearchKind,
) -> Vec<PatternId> {
    let needle = query.trim();
    if needle.is_empty() {
        return Vec::new();
    }

    let needle = needle.to_lowercase();
    let mut matches = candidates
        .iter()
        .filter_map(|candidate| {
            let score = match kind {
                SearchKind::Regular => regular_score(&needle, &candidate.haystack),
                SearchKind::Fuzzy => fuzzy_score(&needle, &candidate.haystack),
            }?;
            Some((score, candidate))
        })
        .collect::<Vec<_>>();

    matches.sort_by(|(score_a, a), (score_b, b)| {
        score_b
            .cmp(score_a)
            .then_with(|| a.haystack.cmp(&b.haystack))
    });
    matches
        .into_iter()
        .map(|(_, candidate)| candidate.pattern_id.clone())
        .collect()
}

fn regular_score(needle: &str, haystack: &str) -> Option<i64> {
    let needle = needle.trim();
    if needle.is_empty() {
        return None;
    }

    let first = haystack.find(needle)?;
    let starts = first == 0;
    let start_boundary = if starts {
        true
    } else {
        haystack[..first]
            .chars()
            .last()
            .is_some_and(is_boundary_char)
    };
    let occurrences = haystack.match_indices(needle).count() as i64;

    let mut score = 200_000i64.saturating_sub((first as i64) * 1000);
    score += occurrences * 200;
    score -= haystack.chars().count() as i64;
    if starts {
        score += 50_000;
    }
    if start_boundary {
        score += 20_000;
    }
    if haystack == needle {
        score += 100_000;
    }

    Some(score)
}

fn fuzzy_score(needle: &str, haystack: &str) -> Option<i64> {
    let needle = needle.trim();
    if needle.is_empty() {
        return None;
    }

    let subseq = subsequence_stats(needle, haystack)?;
    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
    let ratio_score = (ratio * 1000.0).round() as i64;

    let mut score = ratio_score;
    score -= subseq.span as i64;
    score -= (subseq.first as i64) / 4;
    score += (subseq.consecutive as i64) * 40;
    if subseq.start_boundary {
        score += 150;
    }
    if haystack.contains(needle) {
        score += 2000;
    } else {
        score += 500;
    }

    Some(score)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SubsequenceStats {
    first: usize,
    span: usize,
    consecutive: usize,
    start_boundary: bool,
}

fn subsequence_stats(needle: &str, haystack: &str) -> Option<SubsequenceStats> {
    let mut needle_iter = needle.chars().peekable();
    let mut first: Option<usize> = None;
    let mut last: usize = 0;
    let mut prev_match: Option<usize> = None;
    let mut consecutive: usize = 0;
    let mut start_boundary = false;
    let mut prev_hay: Option<char> = None;

    for (idx, ch) in haystack.chars().enumerate() {
        let Some(&want) = needle_iter.peek() else {
            break;
        };

        if ch == want {
            needle_iter.next();

            if first.is_none() {
                first = Some(idx);
                start_boundary = prev_hay.map_or(true, is_boundary_char);
            }

            if prev_match.is_some_and(|prev| idx == prev + 1) {
                consecutive += 1;
            }
            prev_match = Some(idx);
            last = idx;
        }

        prev_hay = Some(ch);
    }

    if needle_iter.peek().is_some() {
        return None;
    }

    let first = first?;
    Some(SubsequenceStats {
        first,
        span: last.saturating_sub(first).saturating_add(1),
        consecutive,
        start_boundary,
    })
}

fn is_boundary_char(ch: char) -> bool {
    matches!(ch, '-' | '_' | ' ')
}
