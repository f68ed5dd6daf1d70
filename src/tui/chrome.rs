// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Layout, title, footer, help, and style helpers used by TUI rendering.
fn sidebar_width(area: Rect) -> u16 {
    (area.width / 3).clamp(16, SIDEBAR_MAX_WIDTH)
}

fn footer_uses_compact_mode(area: Rect) -> bool {
    area.width < 90
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Context,
    Examples,
    Code,
}

impl DetailTab {
    const ALL: [DetailTab; 3] = [Self::Context, Self::Examples, Self::Code];

    fn cycle(self) -> Self {
        match self {
            Self::Context => Self::Examples,
            Self::Examples => Self::Code,
            Self::Code => Self::Context,
        }
    }

    fn cycle_back(self) -> Self {
        match self {
            Self::Context => Self::Code,
            Self::Examples => Self::Context,
            Self::Code => Self::Examples,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Context => "Context",
            Self::Examples => "Examples",
            Self::Code => "Code",
        }
    }
}

fn view_title(label: &str, tail: Option<&str>) -> String {
    let mut title = format!("─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

fn pattern_counter_label(index: Option<usize>, total: usize) -> String {
    if total == 0 {
        return "[0/0]".to_owned();
    }

    let width = total.to_string().len();
    let index = index.unwrap_or(0).min(total);
    format!("[{index:0width$}/{total}]")
}

fn pad_text(mut text: Text<'static>, left_pad: usize, top_pad: usize) -> Text<'static> {
    if left_pad == 0 && top_pad == 0 {
        return text;
    }

    if left_pad > 0 {
        let pad = " ".repeat(left_pad);
        for line in &mut text.lines {
            line.spans.insert(0, Span::raw(pad.clone()));
        }
    }

    if top_pad > 0 {
        let blank = Line::from(String::new());
        let mut lines = Vec::with_capacity(top_pad + text.lines.len());
        for _ in 0..top_pad {
            lines.push(blank.clone());
        }
        lines.extend(text.lines);
        text.lines = lines;
    }

    text
}

fn header_lines(pattern: &Pattern, color: ColorToken, theme: &TuiTheme) -> Vec<Line<'static>> {
    let badge = format!(" {} ", pattern.category().label().to_uppercase());
    vec![
        Line::from(vec![
            Span::styled(badge, theme.badge_style(color)),
            Span::raw(" "),
            Span::styled(pattern.name().to_owned(), theme.header_style()),
        ]),
        Line::from(Span::styled(
            pattern.description().to_owned(),
            theme.muted_style(),
        )),
    ]
}

/// `▶ ●●○○ 2/4 · 1x`: play state, one dot per step, position and speed.
fn progress_line<C: Clock>(sequencer: &StepSequencer<C>, theme: &TuiTheme) -> Line<'static> {
    let position = sequencer.current_position();
    let max = sequencer.max_position();
    let (state, state_style) = if sequencer.is_playing() {
        ("▶ ", theme.key_style())
    } else {
        ("⏸ ", theme.muted_style())
    };

    let done = "●".repeat(position.min(max));
    let todo = "○".repeat(max.saturating_sub(position));
    Line::from(vec![
        Span::styled(state, state_style),
        Span::styled(done, theme.key_style()),
        Span::styled(todo, theme.muted_style()),
        Span::styled(format!(" {position}/{max}"), theme.base_style()),
        Span::styled(" · ", theme.muted_style()),
        Span::styled(
            format!("{}x", sequencer.speed().multiplier()),
            theme.key_style(),
        ),
    ])
}

fn detail_title(active: DetailTab, theme: &TuiTheme) -> Line<'static> {
    let mut spans = vec![Span::raw("─ ")];
    for (idx, tab) in DetailTab::ALL.into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" │ ", theme.muted_style()));
        }
        let style = if tab == active {
            theme.key_style()
        } else {
            theme.muted_style()
        };
        spans.push(Span::styled(tab.label(), style));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

fn detail_lines(
    pattern: &Pattern,
    tips: &[&str],
    tab: DetailTab,
    theme: &TuiTheme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::<Line<'static>>::new();
    match tab {
        DetailTab::Context => {
            if pattern.academic_context().trim().is_empty() {
                lines.push(Line::from(Span::styled(
                    "No background for this pattern.",
                    theme.muted_style(),
                )));
            } else {
                lines.extend(pattern.academic_context().lines().map(owned_line));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("When to use", theme.header_style())));
            lines.extend(tips.iter().map(|tip| Line::from(format!("• {tip}"))));
        }
        DetailTab::Examples => {
            if pattern.real_world_examples().is_empty() {
                lines.push(Line::from(Span::styled(
                    "No real-world examples.",
                    theme.muted_style(),
                )));
            }
            for (idx, example) in pattern.real_world_examples().iter().enumerate() {
                if idx > 0 {
                    lines.push(Line::default());
                }
                lines.push(Line::from(Span::styled(
                    example.title().to_owned(),
                    theme.header_style(),
                )));
                lines.extend(example.explanation().lines().map(owned_line));
            }
        }
        DetailTab::Code => {
            if pattern.code_snippet().trim().is_empty() {
                lines.push(Line::from(Span::styled(
                    "No code snippet.",
                    theme.muted_style(),
                )));
            } else {
                lines.extend(pattern.code_snippet().lines().map(owned_line));
            }
            if let Some(output) = pattern.output_snippet() {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled("Output", theme.header_style())));
                lines.extend(
                    output
                        .lines()
                        .map(|line| Line::from(Span::styled(line.to_owned(), theme.muted_style()))),
                );
            }
        }
    }
    lines
}

fn owned_line(line: &str) -> Line<'static> {
    Line::from(line.to_owned())
}

/// Menu rows (a header per category, then its patterns) and the row of the active pattern.
fn menu_items(
    catalog: &Catalog,
    active: &PatternId,
    theme: &TuiTheme,
) -> (Vec<ListItem<'static>>, Option<usize>) {
    let mut items = Vec::new();
    let mut selected = None;
    for category in catalog.categories() {
        let header_style = theme
            .base_style()
            .fg(theme.category_color(category.color()))
            .add_modifier(Modifier::BOLD);
        items.push(ListItem::new(Line::from(Span::styled(
            category.kind().label().to_uppercase(),
            header_style,
        ))));
        for pattern in category.patterns() {
            if pattern.id() == active {
                selected = Some(items.len());
            }
            items.push(ListItem::new(Line::from(format!("  {}", pattern.name()))));
        }
    }
    (items, selected)
}

fn footer_help_line<C: Clock + Clone>(
    app: &App<C>,
    toast_suffix: &str,
    compact: bool,
) -> Line<'static> {
    let theme = &app.theme;
    let mut spans = Vec::<Span<'static>>::new();
    let play = if app.nav.sequencer().is_playing() {
        "PAUSE"
    } else {
        "PLAY"
    };

    push_footer_entry(&mut spans, play, "Space", theme);
    push_footer_entry(&mut spans, "STEP", "←/→", theme);
    if !compact {
        push_footer_entry(&mut spans, "PATTERN", "j/k", theme);
        push_footer_entry(&mut spans, "CATEGORY", "[]", theme);
        push_footer_entry(&mut spans, "TAB", "⇥", theme);
        let menu = if app.nav.session().menu_open() {
            "m◼"
        } else {
            "m◻"
        };
        push_footer_entry(&mut spans, "MENU", menu, theme);
        push_footer_entry(&mut spans, "SEARCH", "/", theme);
    }
    push_footer_entry(&mut spans, "HELP", "?", theme);
    push_footer_entry(&mut spans, "QUIT", "q", theme);

    push_toast(&mut spans, toast_suffix, theme);
    Line::from(spans)
}

fn search_footer_line<C: Clock + Clone>(app: &App<C>, toast_suffix: &str) -> Line<'static> {
    let theme = &app.theme;
    let query = app.search_query.as_str();
    let (idx, total) = match app.search_results.len() {
        0 => (0usize, 0usize),
        n => (app.search_result_index.saturating_add(1), n),
    };

    let count = if query.is_empty() {
        None
    } else if total == 0 {
        Some("0".to_owned())
    } else {
        Some(format!("{idx}/{total}"))
    };

    let mut spans = vec![
        Span::styled(app.search_prefix().to_string(), theme.key_style()),
        Span::styled(query.to_owned(), theme.base_style()),
        Span::raw("   "),
    ];
    if let Some(count) = count {
        spans.push(Span::styled(
            count,
            theme.base_style().fg(theme.tone_color(crate::scene::Tone::Success)),
        ));
    }

    if app.search_mode == SearchMode::Results {
        push_footer_entry(&mut spans, "Next", "n/N", theme);
    }
    push_footer_entry(&mut spans, "Accept", "Enter", theme);
    push_footer_entry(&mut spans, "Close", "Esc", theme);

    push_toast(&mut spans, toast_suffix, theme);
    Line::from(spans)
}

fn push_toast(spans: &mut Vec<Span<'static>>, toast_suffix: &str, theme: &TuiTheme) {
    let toast_message = toast_suffix
        .strip_prefix(" | ")
        .unwrap_or(toast_suffix)
        .trim();
    if toast_message.is_empty() {
        return;
    }
    spans.push(Span::styled(" | ", theme.muted_style()));
    spans.push(Span::styled("Toast:".to_owned(), theme.muted_style()));
    spans.push(Span::styled(toast_message.to_owned(), theme.base_style()));
}

fn footer_brand_line(theme: &TuiTheme) -> Line<'static> {
    Line::from(vec![Span::styled(
        FOOTER_BRAND.to_owned(),
        theme.header_style(),
    )])
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>width$}", width = key_width), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

const HELP_ENTRIES: &[(&str, &[(&str, &str)])] = &[
    (
        "Playback",
        &[
            ("Space", "Play / pause autoplay"),
            ("→/l, ←/h", "Next / previous step (previous also pauses)"),
            ("r", "Reset to the start"),
            ("s", "Toggle speed 1x / 2x"),
        ],
    ),
    (
        "Navigation",
        &[
            ("j/k, ↓/↑", "Next / previous pattern"),
            ("]/[", "Next / previous category"),
            ("m", "Toggle the pattern menu"),
            ("/", "Search patterns"),
            ("\\", "Fuzzy search patterns"),
            ("n/N", "Next / previous search result"),
        ],
    ),
    (
        "Details",
        &[
            ("Tab/Shift-Tab", "Next / previous detail tab"),
            ("PgDn/PgUp", "Scroll details"),
            ("y", "Copy the code snippet (OSC 52)"),
        ],
    ),
    (
        "Global",
        &[
            ("t", "Toggle dark / light theme"),
            ("?", "Help (toggle)"),
            ("q", "Quit"),
        ],
    ),
];

fn help_lines(theme: &TuiTheme) -> Vec<Line<'static>> {
    let key_style = theme.key_style();
    let header_style = theme.header_style();
    let key_col_width = HELP_ENTRIES
        .iter()
        .flat_map(|(_, entries)| entries.iter())
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::<Line<'static>>::new();
    for (idx, (section, entries)) in HELP_ENTRIES.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            format!("--- {section} ---"),
            header_style,
        )));
        for (key, desc) in entries.iter() {
            lines.push(help_kv(key, desc, key_col_width, key_style));
        }
    }
    lines
}

fn render_help<C: Clock + Clone>(frame: &mut Frame<'_>, app: &mut App<C>, main_area: Rect) {
    let area = centered_rect(70, 80, main_area);
    frame.render_widget(Clear, area);

    let lines = help_lines(&app.theme);
    let border = app.theme.panel_border_style(true);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("─ Help ─")
        .border_style(border)
        .title_style(border.add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    app.help_viewport_height = inner.height;
    let max_scroll = lines
        .len()
        .saturating_sub(inner.height.max(1) as usize)
        .min(u16::MAX as usize) as u16;
    app.help_scroll = app.help_scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .style(app.theme.base_style())
        .wrap(Wrap { trim: false })
        .scroll((app.help_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str, theme: &TuiTheme) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ", theme.muted_style()));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        theme.muted_style(),
    ));
    spans.push(Span::styled(value.to_owned(), theme.key_style()));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}
