// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;
use std::collections::HashMap;

use thiserror::Error;

use crate::scene::{Connector, ConnectorStyle, ElementId, Emphasis, Node, Note, Scene};

use super::text::{canvas_to_string_trimmed, centered_offset, text_len, truncate_with_ellipsis};
use super::{
    box_char_from_edges, BoxEdges, Canvas, CanvasError, ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT,
    ARROW_UP,
};

const BOX_HEIGHT: usize = 3;
const MIN_BOX_INNER_WIDTH: usize = 3;
const MIN_LABEL_SLOT: usize = 3;
const LABEL_GAP: usize = 2;
const DASH_HORIZONTAL: char = '┄';
const DASH_VERTICAL: char = '┆';

type Cell = (usize, usize);

/// Cells painted for one element on one line, `x0..=x1` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmphasisSpan {
    pub element: ElementId,
    pub line: usize,
    pub x0: usize,
    pub x1: usize,
    pub emphasis: Emphasis,
}

/// Painted text plus the spans that carry each visible element's emphasis.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnotatedScene {
    pub text: String,
    pub spans: Vec<EmphasisSpan>,
}

impl AnnotatedScene {
    /// Spans on `line`, in paint order.
    pub fn spans_on(&self, line: usize) -> impl Iterator<Item = &EmphasisSpan> + '_ {
        self.spans.iter().filter(move |span| span.line == line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneRenderError {
    #[error("canvas error: {0}")]
    Canvas(#[from] CanvasError),
    #[error("connector {connector} references missing node {id}")]
    MissingNode { connector: String, id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxGeometry {
    x0: usize,
    x1: usize,
    y0: usize,
    y1: usize,
    inner_width: usize,
    emphasis: Emphasis,
}

impl BoxGeometry {
    fn of(node: &Node) -> Self {
        let (inner_width, total_width) = box_widths(&node.label);
        Self {
            x0: node.x,
            x1: node.x + total_width - 1,
            y0: node.y,
            y1: node.y + BOX_HEIGHT - 1,
            inner_width,
            emphasis: node.emphasis,
        }
    }

    fn cx(&self) -> usize {
        self.x0 + (self.x1 - self.x0 + 1) / 2
    }

    fn cy(&self) -> usize {
        self.y0 + 1
    }
}

/// A routed connector: `cells[0]` sits on the source border, the last cell holds the head.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Route {
    cells: Vec<Cell>,
    head: char,
}

/// Paints `scene` and returns its text with emphasis spans.
///
/// Nodes are painted first, then connectors, then connector labels, then notes. Hidden elements
/// are skipped, as are connectors touching a hidden node. The canvas is sized from every element
/// (hidden ones included) so boxes do not shift as elements appear.
pub fn render_scene(scene: &Scene) -> Result<AnnotatedScene, SceneRenderError> {
    let boxes = scene
        .nodes()
        .map(|node| (node.id, BoxGeometry::of(node)))
        .collect::<HashMap<_, _>>();

    let mut endpoints = Vec::new();
    for connector in scene.connectors() {
        let from = lookup(&boxes, connector, connector.from)?;
        let to = lookup(&boxes, connector, connector.to)?;
        endpoints.push((connector, from, to));
    }

    let (width, height) = extent(scene, &boxes);
    if width == 0 || height == 0 {
        return Ok(AnnotatedScene::default());
    }

    let mut canvas = Canvas::new(width, height)?;
    let mut spans = Vec::new();

    for node in scene.nodes().filter(|node| node.emphasis.is_visible()) {
        let geometry = BoxGeometry::of(node);
        paint_node(&mut canvas, node, geometry)?;
        for line in geometry.y0..=geometry.y1 {
            spans.push(span(node.id, line, geometry.x0, geometry.x1, node.emphasis));
        }
    }

    let mut routed = Vec::new();
    for (connector, from, to) in endpoints {
        if !connector.emphasis.is_visible()
            || !from.emphasis.is_visible()
            || !to.emphasis.is_visible()
        {
            continue;
        }

        let Some(route) = route(from, to) else {
            tracing::debug!(connector = connector.id, "boxes overlap; connector skipped");
            continue;
        };

        paint_route(&mut canvas, &route, connector.style)?;
        for (line, x0, x1) in row_runs(&route.cells[1..]) {
            spans.push(span(connector.id, line, x0, x1, connector.emphasis));
        }
        routed.push((connector, route));
    }

    for (connector, route) in &routed {
        let Some(label) = connector.label.as_deref() else {
            continue;
        };
        match place_label(&mut canvas, label, &route.cells)? {
            Some((line, x0, x1)) => {
                spans.push(span(connector.id, line, x0, x1, connector.emphasis));
            }
            None => tracing::debug!(connector = connector.id, label, "no room for label"),
        }
    }

    for note in scene.notes().filter(|note| note.emphasis.is_visible()) {
        paint_note(&mut canvas, note, &mut spans)?;
    }

    let text = canvas_to_string_trimmed(&canvas);
    clamp_spans_to_text(&mut spans, &text);
    Ok(AnnotatedScene { text, spans })
}

/// Text-only rendering of `scene`.
pub fn render_scene_plain(scene: &Scene) -> Result<String, SceneRenderError> {
    render_scene(scene).map(|annotated| annotated.text)
}

fn span(element: ElementId, line: usize, x0: usize, x1: usize, emphasis: Emphasis) -> EmphasisSpan {
    EmphasisSpan {
        element,
        line,
        x0,
        x1,
        emphasis,
    }
}

fn lookup(
    boxes: &HashMap<ElementId, BoxGeometry>,
    connector: &Connector,
    id: ElementId,
) -> Result<BoxGeometry, SceneRenderError> {
    boxes
        .get(id)
        .copied()
        .ok_or_else(|| SceneRenderError::MissingNode {
            connector: connector.id.to_owned(),
            id: id.to_owned(),
        })
}

fn extent(scene: &Scene, boxes: &HashMap<ElementId, BoxGeometry>) -> (usize, usize) {
    let mut width = 0usize;
    let mut height = 0usize;

    for geometry in boxes.values() {
        width = width.max(geometry.x1 + 1);
        height = height.max(geometry.y1 + 1);
    }

    for note in scene.notes() {
        for (offset, line) in note.text.split('\n').enumerate() {
            width = width.max(note.x + text_len(line));
            height = height.max(note.y + offset + 1);
        }
    }

    // Vertical connectors put their label beside the line; leave room on the right.
    let widest_label = scene
        .connectors()
        .filter_map(|connector| connector.label.as_deref())
        .map(text_len)
        .max();
    if let Some(label_len) = widest_label {
        width += label_len + LABEL_GAP;
    }

    (width, height)
}

fn paint_node(canvas: &mut Canvas, node: &Node, geometry: BoxGeometry) -> Result<(), CanvasError> {
    canvas.draw_box(geometry.x0, geometry.y0, geometry.x1, geometry.y1)?;
    let clipped = truncate_with_ellipsis(&node.label, geometry.inner_width);
    let label_x = geometry.x0 + 1 + centered_offset(geometry.inner_width, text_len(&clipped));
    canvas.write_str(label_x, geometry.cy(), &clipped)
}

fn paint_note(
    canvas: &mut Canvas,
    note: &Note,
    spans: &mut Vec<EmphasisSpan>,
) -> Result<(), CanvasError> {
    for (offset, line) in note.text.split('\n').enumerate() {
        let len = text_len(line);
        if len == 0 {
            continue;
        }
        let y = note.y + offset;
        canvas.write_str(note.x, y, line)?;
        spans.push(span(note.id, y, note.x, note.x + len - 1, note.emphasis));
    }
    Ok(())
}

/// Routes between two boxes: vertical placement wins over horizontal, elbows turn halfway.
fn route(from: BoxGeometry, to: BoxGeometry) -> Option<Route> {
    if to.y0 >= from.y1 + 2 {
        let (sx, ex) = (from.cx(), to.cx());
        let mid = (from.y1 + 1 + to.y0 - 1) / 2;
        return Some(Route {
            cells: trace((sx, from.y1), &[(sx, mid), (ex, mid), (ex, to.y0 - 1)]),
            head: ARROW_DOWN,
        });
    }

    if from.y0 >= to.y1 + 2 {
        let (sx, ex) = (from.cx(), to.cx());
        let mid = (from.y0 - 1 + to.y1 + 1) / 2;
        return Some(Route {
            cells: trace((sx, from.y0), &[(sx, mid), (ex, mid), (ex, to.y1 + 1)]),
            head: ARROW_UP,
        });
    }

    if to.x0 >= from.x1 + 2 {
        let (sy, ey) = (from.cy(), to.cy());
        let mid = (from.x1 + 1 + to.x0 - 1) / 2;
        return Some(Route {
            cells: trace((from.x1, sy), &[(mid, sy), (mid, ey), (to.x0 - 1, ey)]),
            head: ARROW_RIGHT,
        });
    }

    if from.x0 >= to.x1 + 2 {
        let (sy, ey) = (from.cy(), to.cy());
        let mid = (from.x0 - 1 + to.x1 + 1) / 2;
        return Some(Route {
            cells: trace((from.x0, sy), &[(mid, sy), (mid, ey), (to.x1 + 1, ey)]),
            head: ARROW_LEFT,
        });
    }

    None
}

/// Every cell on the axis-aligned polyline `start -> through[0] -> through[1] -> ...`.
fn trace(start: Cell, through: &[Cell]) -> Vec<Cell> {
    let mut cells = vec![start];
    let (mut x, mut y) = start;
    for &(tx, ty) in through {
        while (x, y) != (tx, ty) {
            match (x.cmp(&tx), y.cmp(&ty)) {
                (Ordering::Less, _) => x += 1,
                (Ordering::Greater, _) => x -= 1,
                (_, Ordering::Less) => y += 1,
                _ => y -= 1,
            }
            cells.push((x, y));
        }
    }
    cells
}

fn toward(here: Cell, other: Cell) -> BoxEdges {
    match (other.0.cmp(&here.0), other.1.cmp(&here.1)) {
        (Ordering::Less, _) => BoxEdges::LEFT,
        (Ordering::Greater, _) => BoxEdges::RIGHT,
        (_, Ordering::Less) => BoxEdges::UP,
        (_, Ordering::Greater) => BoxEdges::DOWN,
        _ => BoxEdges::NONE,
    }
}

/// Edges of `cells[index]` toward its neighbours on the path.
fn cell_edges(cells: &[Cell], index: usize) -> BoxEdges {
    let here = cells[index];
    let mut edges = BoxEdges::NONE;
    if let Some(&prev) = index.checked_sub(1).and_then(|i| cells.get(i)) {
        edges = edges.union(toward(here, prev));
    }
    if let Some(&next) = cells.get(index + 1) {
        edges = edges.union(toward(here, next));
    }
    edges
}

fn paint_route(
    canvas: &mut Canvas,
    route: &Route,
    style: ConnectorStyle,
) -> Result<(), CanvasError> {
    for (index, &(x, y)) in route.cells.iter().enumerate() {
        let edges = cell_edges(&route.cells, index);
        match style {
            ConnectorStyle::Solid => canvas.add_edges(x, y, edges)?,
            // Dashed lines leave the source border untouched.
            ConnectorStyle::Dashed if index == 0 => {}
            ConnectorStyle::Dashed if edges.is_horizontal() => {
                canvas.set(x, y, DASH_HORIZONTAL)?
            }
            ConnectorStyle::Dashed if edges.is_vertical() => canvas.set(x, y, DASH_VERTICAL)?,
            ConnectorStyle::Dashed => canvas.set(x, y, box_char_from_edges(edges))?,
        }
    }

    if let Some(&(x, y)) = route.cells.last() {
        canvas.set(x, y, route.head)?;
    }
    Ok(())
}

/// Groups consecutive cells sharing a row into `(line, x0, x1)` runs.
fn row_runs(cells: &[Cell]) -> Vec<(usize, usize, usize)> {
    let mut runs: Vec<(usize, usize, usize)> = Vec::new();
    for &(x, y) in cells {
        match runs.last_mut() {
            Some((line, x0, x1)) if *line == y && (x + 1 == *x0 || *x1 + 1 == x) => {
                *x0 = (*x0).min(x);
                *x1 = (*x1).max(x);
            }
            _ => runs.push((y, x, x)),
        }
    }
    runs
}

/// Longest run of path cells (excluding the border cell) whose edges satisfy `keep`.
fn longest_run(cells: &[Cell], keep: impl Fn(BoxEdges) -> bool) -> Option<&[Cell]> {
    let mut best: Option<&[Cell]> = None;
    let mut start = None;

    for index in 1..=cells.len() {
        let kept = index < cells.len() && keep(cell_edges(cells, index));
        match (kept, start) {
            (true, None) => start = Some(index),
            (false, Some(from)) => {
                let run = &cells[from..index];
                if best.map_or(true, |best| run.len() > best.len()) {
                    best = Some(run);
                }
                start = None;
            }
            _ => {}
        }
    }

    best
}

fn fits(canvas: &Canvas, x: usize, y: usize, len: usize) -> bool {
    (x..x + len).all(|cx| canvas.is_blank(cx, y))
}

/// Writes `label` next to the route and returns the cells it took.
///
/// Prefers the row above the longest horizontal run, then the row below. Routes without a
/// horizontal run get the label beside the middle of their vertical run.
fn place_label(
    canvas: &mut Canvas,
    label: &str,
    cells: &[Cell],
) -> Result<Option<(usize, usize, usize)>, CanvasError> {
    if label.is_empty() {
        return Ok(None);
    }
    let min_slot = text_len(label).min(MIN_LABEL_SLOT);

    let horizontal = longest_run(cells, BoxEdges::is_horizontal).filter(|run| run.len() >= min_slot);
    if let Some(run) = horizontal {
        let y = run[0].1;
        let x0 = run.iter().map(|&(x, _)| x).min().unwrap_or(0);
        let clipped = truncate_with_ellipsis(label, run.len());
        let len = text_len(&clipped);
        let lx = x0 + centered_offset(run.len(), len);

        let rows = [y.checked_sub(1), Some(y + 1)];
        for row in rows.into_iter().flatten() {
            if fits(canvas, lx, row, len) {
                canvas.write_str(lx, row, &clipped)?;
                return Ok(Some((row, lx, lx + len - 1)));
            }
        }
        return Ok(None);
    }

    let Some(run) = longest_run(cells, BoxEdges::is_vertical) else {
        return Ok(None);
    };
    let (x, y) = run[run.len() / 2];
    let lx = x + LABEL_GAP;
    let room = canvas.width().saturating_sub(lx);
    if room < min_slot {
        return Ok(None);
    }

    let clipped = truncate_with_ellipsis(label, room);
    let len = text_len(&clipped);
    if !fits(canvas, lx, y, len) {
        return Ok(None);
    }
    canvas.write_str(lx, y, &clipped)?;
    Ok(Some((y, lx, lx + len - 1)))
}

pub(crate) fn clamp_spans_to_text(spans: &mut Vec<EmphasisSpan>, text: &str) {
    let line_lens = text.split('\n').map(text_len).collect::<Vec<_>>();

    spans.retain_mut(|span| {
        let len = match line_lens.get(span.line) {
            Some(&len) if len > 0 => len,
            _ => return false,
        };
        if span.x0 >= len {
            return false;
        }
        span.x1 = span.x1.min(len - 1);
        span.x0 <= span.x1
    });
}

fn box_widths(label: &str) -> (usize, usize) {
    let mut inner_width = (text_len(label) + 2).max(MIN_BOX_INNER_WIDTH);
    let mut total_width = inner_width + 2;

    // Odd widths give every box a single centre column for vertical connectors.
    if total_width % 2 == 0 {
        total_width += 1;
        inner_width += 1;
    }

    (inner_width, total_width)
}

#[cfg(test)]
mod tests;
