// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::super::test_utils::collect_spanned_text;
use super::{
    clamp_spans_to_text, render_scene, render_scene_plain, EmphasisSpan, SceneRenderError,
};
use crate::scene::{Connector, Emphasis, Scene, Tone};

fn pair(to: (usize, usize)) -> Scene {
    Scene::new("pair")
        .node("a", "A", (0, 0), Emphasis::Normal)
        .node("b", "B", to, Emphasis::Normal)
}

#[test]
fn snapshot_two_boxes_one_labelled_connector() {
    let scene = pair((10, 0)).connect(Connector::new("ab", "a", "b").with_label("go"));
    let rendered = render_scene_plain(&scene).expect("render");
    assert_eq!(rendered, "┌───┐ go  ┌───┐\n│ A ├────▶│ B │\n└───┘     └───┘");
}

#[test]
fn snapshot_vertical_connector_joins_source_border() {
    let scene = pair((0, 5)).connect(Connector::new("ab", "a", "b"));
    let rendered = render_scene_plain(&scene).expect("render");
    assert_eq!(rendered, "┌───┐\n│ A │\n└─┬─┘\n  │\n  ▼\n┌───┐\n│ B │\n└───┘");
}

#[test]
fn snapshot_dashed_connector_leaves_border_plain() {
    let scene = pair((0, 5)).connect(Connector::new("ab", "a", "b").dashed());
    let rendered = render_scene_plain(&scene).expect("render");
    assert_eq!(rendered, "┌───┐\n│ A │\n└───┘\n  ┆\n  ▼\n┌───┐\n│ B │\n└───┘");
}

#[test]
fn snapshot_upward_connector() {
    let scene = Scene::new("up")
        .node("a", "A", (0, 5), Emphasis::Normal)
        .node("b", "B", (0, 0), Emphasis::Normal)
        .connect(Connector::new("ab", "a", "b"));
    let rendered = render_scene_plain(&scene).expect("render");
    assert_eq!(rendered, "┌───┐\n│ B │\n└───┘\n  ▲\n  │\n┌─┴─┐\n│ A │\n└───┘");
}

#[test]
fn elbow_connector_turns_halfway_with_row_spans() {
    let scene = pair((10, 6)).connect(
        Connector::new("ab", "a", "b").with_emphasis(Emphasis::Highlight(Tone::Accent)),
    );
    let annotated = render_scene(&scene).expect("render");

    let lines = annotated.text.split('\n').collect::<Vec<_>>();
    assert_eq!(lines[2], "└─┬─┘");
    assert_eq!(lines[3], "  │");
    assert_eq!(lines[4], "  └─────────┐");
    assert_eq!(lines[5], "            ▼");
    assert_eq!(lines[6], "          ┌───┐");

    let connector = annotated
        .spans
        .iter()
        .filter(|span| span.element == "ab")
        .map(|span| (span.line, span.x0, span.x1))
        .collect::<Vec<_>>();
    assert_eq!(connector, vec![(3, 2, 2), (4, 2, 12), (5, 12, 12)]);
    assert!(annotated
        .spans
        .iter()
        .filter(|span| span.element == "ab")
        .all(|span| span.emphasis == Emphasis::Highlight(Tone::Accent)));
}

#[test]
fn vertical_route_puts_label_beside_the_line() {
    let scene = pair((0, 6)).connect(Connector::new("ab", "a", "b").with_label("call()"));
    let annotated = render_scene(&scene).expect("render");
    let lines = annotated.text.split('\n').collect::<Vec<_>>();
    assert_eq!(lines[4], "  │ call()");

    let label = annotated
        .spans
        .iter()
        .copied()
        .filter(|span| span.element == "ab" && span.x0 > 2)
        .collect::<Vec<_>>();
    assert_eq!(collect_spanned_text(&annotated.text, &label), "call()\n");
}

#[test]
fn horizontal_label_is_truncated_to_the_gap() {
    let scene = pair((10, 0)).connect(Connector::new("ab", "a", "b").with_label("request()"));
    let annotated = render_scene(&scene).expect("render");
    let first = annotated.text.split('\n').next().unwrap_or_default();
    assert_eq!(first, "┌───┐requ…┌───┐");
}

#[test]
fn hidden_elements_are_not_painted_but_keep_layout_stable() {
    let hidden = Scene::new("hidden")
        .node("a", "A", (0, 0), Emphasis::Normal)
        .node("b", "B", (10, 0), Emphasis::Hidden)
        .connect(Connector::new("ab", "a", "b"))
        .note("n", "later", (0, 4), Emphasis::Hidden);
    let annotated = render_scene(&hidden).expect("render");
    assert_eq!(annotated.text, "┌───┐\n│ A │\n└───┘");
    assert!(annotated.spans.iter().all(|span| span.element == "a"));

    let shown = Scene::new("shown")
        .node("a", "A", (0, 0), Emphasis::Normal)
        .node("b", "B", (10, 0), Emphasis::Normal);
    let shown = render_scene_plain(&shown).expect("render");
    assert_eq!(shown, "┌───┐     ┌───┐\n│ A │     │ B │\n└───┘     └───┘");
}

#[test]
fn hidden_connector_is_skipped_even_between_visible_nodes() {
    let scene = pair((10, 0))
        .connect(Connector::new("ab", "a", "b").with_emphasis(Emphasis::Hidden));
    let rendered = render_scene_plain(&scene).expect("render");
    assert!(!rendered.contains('▶'));
    assert!(!rendered.contains('├'));
}

#[test]
fn missing_node_is_an_error() {
    let scene = pair((10, 0)).connect(Connector::new("az", "a", "zz"));
    assert_eq!(
        render_scene(&scene).unwrap_err(),
        SceneRenderError::MissingNode {
            connector: "az".to_owned(),
            id: "zz".to_owned()
        }
    );
}

#[test]
fn overlapping_boxes_skip_the_connector() {
    let scene = pair((2, 1)).connect(Connector::new("ab", "a", "b"));
    let annotated = render_scene(&scene).expect("render");
    assert!(annotated.spans.iter().all(|span| span.element != "ab"));
}

#[test]
fn notes_span_each_line_and_carry_emphasis() {
    let scene = Scene::new("notes").note(
        "n",
        "first\n\nthird",
        (2, 1),
        Emphasis::Highlight(Tone::Warning),
    );
    let annotated = render_scene(&scene).expect("render");
    assert_eq!(annotated.text, "\n  first\n\n  third");
    assert_eq!(annotated.spans_on(1).count(), 1);
    assert_eq!(annotated.spans_on(2).count(), 0);
    assert_eq!(
        collect_spanned_text(&annotated.text, &annotated.spans),
        "first\nthird\n"
    );
}

#[test]
fn node_spans_cover_the_box_rows() {
    let scene = Scene::new("one").node("hi", "Hi", (1, 0), Emphasis::Muted);
    let annotated = render_scene(&scene).expect("render");
    assert_eq!(
        collect_spanned_text(&annotated.text, &annotated.spans),
        "┌─────┐\n│ Hi  │\n└─────┘\n"
    );
    assert!(annotated.spans.iter().all(|span| span.emphasis == Emphasis::Muted));
}

#[test]
fn empty_scene_renders_empty_text() {
    let annotated = render_scene(&Scene::new("empty")).expect("render");
    assert!(annotated.text.is_empty());
    assert!(annotated.spans.is_empty());
}

#[test]
fn clamp_drops_spans_outside_trimmed_text() {
    let span = |line, x0, x1| EmphasisSpan {
        element: "x",
        line,
        x0,
        x1,
        emphasis: Emphasis::Normal,
    };
    let mut spans = vec![span(0, 0, 9), span(0, 5, 6), span(1, 0, 0), span(3, 0, 1)];
    clamp_spans_to_text(&mut spans, "abc\n");
    assert_eq!(spans, vec![span(0, 0, 2)]);
}
