// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::registry::SceneRenderer;
use super::{focus, only_at, Connector, Emphasis, Scene, Tone};

pub(super) fn renderers() -> Vec<Box<dyn SceneRenderer>> {
    vec![
        Box::new(IteratorScene),
        Box::new(Memento),
        Box::new(State),
        Box::new(Strategy),
        Box::new(Observer),
    ]
}

/// Cursor walks a three-element list, one `next()` per step.
pub(super) struct IteratorScene;

const ITEMS: [(&str, &str, usize); 3] = [
    ("item-1", "1", 0),
    ("item-2", "2", 10),
    ("item-3", "3", 20),
];

impl SceneRenderer for IteratorScene {
    fn tag(&self) -> &'static str {
        "iterator"
    }

    fn render(&self, p: usize) -> Scene {
        let (code, code_emphasis) = match p {
            0 => ("let mut iter = list.iter();", Emphasis::Muted),
            1 => ("iter points at the start", Emphasis::Highlight(Tone::Accent)),
            2 => ("iter.next() -> Some(1)", Emphasis::Highlight(Tone::Accent)),
            3 => ("iter.next() -> Some(2)", Emphasis::Highlight(Tone::Accent)),
            _ => ("iter.next() -> None", Emphasis::Highlight(Tone::Warning)),
        };

        let mut scene = Scene::new("Iterator").note("code", code, (0, 0), code_emphasis);

        for (idx, (id, label, x)) in ITEMS.into_iter().enumerate() {
            let returned_at = idx + 2;
            let emphasis = if p >= 4 {
                Emphasis::Muted
            } else if p == returned_at {
                Emphasis::Highlight(Tone::Accent)
            } else {
                Emphasis::Normal
            };
            scene = scene.node(id, label, (x, 4), emphasis);
        }

        let cursor_x = match p {
            1..=3 => ITEMS[p - 1].2,
            _ => 0,
        };
        let cursor = if (1..=3).contains(&p) {
            Emphasis::Highlight(Tone::Warning)
        } else {
            Emphasis::Hidden
        };

        let iterator = match p {
            1 => Emphasis::Highlight(Tone::Accent),
            4 => Emphasis::Highlight(Tone::Warning),
            _ => Emphasis::Normal,
        };

        scene
            .note("cursor", "^ cursor", (cursor_x, 8), cursor)
            .node("iterator", "Iterator", (34, 4), iterator)
            .note("done", "collection exhausted", (34, 8), only_at(p, 4, Tone::Warning))
    }
}

/// Snapshot to a safe, mutate, then restore from the snapshot.
pub(super) struct Memento;

impl SceneRenderer for Memento {
    fn tag(&self) -> &'static str {
        "memento"
    }

    fn render(&self, p: usize) -> Scene {
        let (editor_label, editor) = match p {
            1 => ("Editor: A", Emphasis::Highlight(Tone::Accent)),
            3 => ("Editor: B", Emphasis::Highlight(Tone::Danger)),
            4 => ("Editor: A", Emphasis::Highlight(Tone::Success)),
            _ => ("Editor: A", Emphasis::Normal),
        };
        let save = match p {
            0 | 1 => Emphasis::Hidden,
            2 => Emphasis::Highlight(Tone::Accent),
            _ => Emphasis::Muted,
        };
        let snapshot = match p {
            0 | 1 => Emphasis::Hidden,
            2 => Emphasis::Highlight(Tone::Accent),
            4 => Emphasis::Highlight(Tone::Success),
            _ => Emphasis::Normal,
        };

        Scene::new("Memento")
            .node("editor", editor_label, (0, 0), editor)
            .node("caretaker", "Caretaker (safe)", (34, 0), focus(p, 2, Tone::Accent))
            .node("snapshot", "Memento [A]", (38, 6), snapshot)
            .connect(
                Connector::new("save", "editor", "caretaker")
                    .with_label("save()")
                    .with_emphasis(save),
            )
            .connect(
                Connector::new("restore", "snapshot", "editor")
                    .with_label("restore()")
                    .with_emphasis(only_at(p, 4, Tone::Success)),
            )
    }
}

/// The context delegates to whichever state object is current.
pub(super) struct State;

impl SceneRenderer for State {
    fn tag(&self) -> &'static str {
        "state"
    }

    fn render(&self, p: usize) -> Scene {
        let locked = match p {
            0 => Emphasis::Normal,
            1 | 2 => Emphasis::Highlight(Tone::Danger),
            _ => Emphasis::Muted,
        };
        let unlocked = match p {
            0..=2 => Emphasis::Muted,
            3 | 4 => Emphasis::Highlight(Tone::Success),
            _ => Emphasis::Normal,
        };
        let to_locked = match p {
            2 => Emphasis::Highlight(Tone::Danger),
            p if p < 3 => Emphasis::Normal,
            _ => Emphasis::Hidden,
        };
        let to_unlocked = match p {
            p if p < 3 => Emphasis::Hidden,
            4 => Emphasis::Highlight(Tone::Success),
            _ => Emphasis::Normal,
        };

        Scene::new("State")
            .node("context", "Player", (0, 3), focus(p, 1, Tone::Accent))
            .node("locked", "Locked", (24, 0), locked)
            .node("unlocked", "Unlocked", (24, 6), unlocked)
            .connect(Connector::new("to-locked", "context", "locked").with_emphasis(to_locked))
            .connect(
                Connector::new("to-unlocked", "context", "unlocked").with_emphasis(to_unlocked),
            )
            .connect(
                Connector::new("transition", "locked", "unlocked")
                    .dashed()
                    .with_emphasis(only_at(p, 3, Tone::Warning)),
            )
            .note("denied", "click: action denied", (38, 1), only_at(p, 2, Tone::Danger))
            .note("executed", "click: action executed", (40, 7), only_at(p, 4, Tone::Success))
    }
}

pub(super) struct Strategy;

impl SceneRenderer for Strategy {
    fn tag(&self) -> &'static str {
        "strategy"
    }

    fn render(&self, p: usize) -> Scene {
        let fast = match p {
            1 => Emphasis::Highlight(Tone::Accent),
            p if p < 3 => Emphasis::Normal,
            _ => Emphasis::Muted,
        };
        let detailed = match p {
            p if p < 3 => Emphasis::Muted,
            3 => Emphasis::Highlight(Tone::Accent),
            _ => Emphasis::Normal,
        };
        let use_fast = match p {
            2 => Emphasis::Highlight(Tone::Success),
            p if p < 3 => Emphasis::Normal,
            _ => Emphasis::Hidden,
        };
        let use_detailed = match p {
            p if p < 3 => Emphasis::Hidden,
            4 => Emphasis::Highlight(Tone::Success),
            _ => Emphasis::Normal,
        };
        let context = if p == 1 || p == 3 {
            Emphasis::Highlight(Tone::Accent)
        } else {
            Emphasis::Normal
        };

        Scene::new("Strategy")
            .node("context", "Context", (0, 3), context)
            .node("fast", "Strategy A (fast)", (24, 0), fast)
            .node("detailed", "Strategy B (detailed)", (24, 6), detailed)
            .connect(Connector::new("use-fast", "context", "fast").with_emphasis(use_fast))
            .connect(
                Connector::new("use-detailed", "context", "detailed").with_emphasis(use_detailed),
            )
            .note("run-fast", "data -> quick path", (48, 1), only_at(p, 2, Tone::Success))
            .note("run-detailed", "data -> detailed path", (52, 7), only_at(p, 4, Tone::Success))
    }
}

/// One subject broadcasting to three observers.
pub(super) struct Observer;

const OBSERVERS: [(&str, &str, &str, usize); 3] = [
    ("observer-1", "notify-1", "Observer 1", 0),
    ("observer-2", "notify-2", "Observer 2", 18),
    ("observer-3", "notify-3", "Observer 3", 36),
];

impl SceneRenderer for Observer {
    fn tag(&self) -> &'static str {
        "observer"
    }

    fn render(&self, p: usize) -> Scene {
        let subject = match p {
            1 => Emphasis::Highlight(Tone::Accent),
            2 | 3 => Emphasis::Highlight(Tone::Warning),
            _ => Emphasis::Normal,
        };
        let subscribers = if p == 1 {
            Emphasis::Highlight(Tone::Accent)
        } else {
            Emphasis::Muted
        };
        let notify = match p {
            p if p < 3 => Emphasis::Hidden,
            3 => Emphasis::Highlight(Tone::Accent),
            _ => Emphasis::Muted,
        };

        let mut scene = Scene::new("Observer")
            .node("subject", "Subject", (18, 0), subject)
            .note("subscribers", "subscribers: 3", (32, 0), subscribers)
            .note("event", "event!", (32, 2), only_at(p, 2, Tone::Warning));

        for (id, connector_id, label, x) in OBSERVERS {
            scene = scene
                .node(id, label, (x, 7), focus(p, 4, Tone::Success))
                .connect(
                    Connector::new(connector_id, "subject", id)
                        .dashed()
                        .with_emphasis(notify),
                );
        }
        scene
    }
}
