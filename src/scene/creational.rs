// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::registry::SceneRenderer;
use super::{focus, only_at, reveal_focus, window, Connector, Emphasis, Scene, Tone};

pub(super) fn renderers() -> Vec<Box<dyn SceneRenderer>> {
    vec![
        Box::new(Singleton),
        Box::new(Factory),
        Box::new(Builder),
        Box::new(Prototype),
    ]
}

/// Three clients asking for the one instance; it only appears once the first client asks.
pub(super) struct Singleton;

impl SceneRenderer for Singleton {
    fn tag(&self) -> &'static str {
        "singleton"
    }

    fn render(&self, p: usize) -> Scene {
        Scene::new("Singleton")
            .node("client-a", "Client A", (0, 0), focus(p, 2, Tone::Accent))
            .node("client-b", "Client B", (0, 4), focus(p, 3, Tone::Accent))
            .node("client-c", "Client C", (0, 8), focus(p, 4, Tone::Accent))
            .node("instance", "Unique Instance", (24, 4), reveal_focus(p, 2, Tone::Success))
            .note(
                "empty",
                "(no instance in memory)",
                (24, 1),
                match p {
                    0 => Emphasis::Muted,
                    1 => Emphasis::Highlight(Tone::Warning),
                    _ => Emphasis::Hidden,
                },
            )
            .connect(
                Connector::new("get-a", "client-a", "instance")
                    .with_label("instance()")
                    .with_emphasis(reveal_focus(p, 2, Tone::Accent)),
            )
            .connect(
                Connector::new("get-b", "client-b", "instance")
                    .with_label("instance()")
                    .with_emphasis(reveal_focus(p, 3, Tone::Accent)),
            )
            .connect(
                Connector::new("get-c", "client-c", "instance")
                    .with_label("instance()")
                    .with_emphasis(reveal_focus(p, 4, Tone::Accent)),
            )
            .note(
                "blocked",
                "already exists: creation blocked",
                (24, 9),
                only_at(p, 3, Tone::Danger),
            )
            .note("same", "same reference for everyone", (24, 9), only_at(p, 4, Tone::Success))
    }
}

pub(super) struct Factory;

impl SceneRenderer for Factory {
    fn tag(&self) -> &'static str {
        "factory"
    }

    fn render(&self, p: usize) -> Scene {
        let client = match p {
            1 => Emphasis::Highlight(Tone::Accent),
            4 => Emphasis::Highlight(Tone::Success),
            _ => Emphasis::Normal,
        };
        let ship = if p >= 2 {
            Emphasis::Muted
        } else {
            Emphasis::Hidden
        };

        Scene::new("Factory Method")
            .node("client", "Client", (0, 0), client)
            .node("factory", "Factory", (22, 0), focus(p, 2, Tone::Warning))
            .node("truck", "Truck", (44, 0), reveal_focus(p, 3, Tone::Success))
            .node("ship", "Ship", (44, 5), ship)
            .connect(
                Connector::new("request", "client", "factory")
                    .with_label("create()")
                    .with_emphasis(reveal_focus(p, 1, Tone::Accent)),
            )
            .connect(
                Connector::new("build", "factory", "truck")
                    .with_label("new()")
                    .with_emphasis(reveal_focus(p, 3, Tone::Accent)),
            )
            .note(
                "decide",
                "decides: road -> Truck",
                (18, 5),
                only_at(p, 2, Tone::Warning),
            )
            .note(
                "use",
                "client uses Box<dyn Transport>",
                (0, 4),
                only_at(p, 4, Tone::Success),
            )
    }
}

/// Parts stack up one step at a time; the product appears on `build()`.
pub(super) struct Builder;

impl SceneRenderer for Builder {
    fn tag(&self) -> &'static str {
        "builder"
    }

    fn render(&self, p: usize) -> Scene {
        Scene::new("Builder")
            .note("idle", "(nothing built yet)", (0, 0), window(p, 0..=0, Emphasis::Muted))
            .node("builder", "Builder", (0, 4), reveal_focus(p, 1, Tone::Accent))
            .node("base", "Base frame", (20, 0), reveal_focus(p, 2, Tone::Accent))
            .node("module", "GPS module", (20, 4), reveal_focus(p, 3, Tone::Accent))
            .node("details", "Details", (20, 8), reveal_focus(p, 4, Tone::Accent))
            .node("product", "Car", (46, 4), reveal_focus(p, 5, Tone::Success))
            .connect(
                Connector::new("add-base", "builder", "base")
                    .with_emphasis(reveal_focus(p, 2, Tone::Accent)),
            )
            .connect(
                Connector::new("add-module", "builder", "module")
                    .with_emphasis(reveal_focus(p, 3, Tone::Accent)),
            )
            .connect(
                Connector::new("add-details", "builder", "details")
                    .with_emphasis(reveal_focus(p, 4, Tone::Accent)),
            )
            .connect(
                Connector::new("build", "module", "product")
                    .with_label("build()")
                    .with_emphasis(reveal_focus(p, 5, Tone::Success)),
            )
    }
}

pub(super) struct Prototype;

impl SceneRenderer for Prototype {
    fn tag(&self) -> &'static str {
        "prototype"
    }

    fn render(&self, p: usize) -> Scene {
        let clone = match p {
            0..=2 => Emphasis::Hidden,
            3 => Emphasis::Highlight(Tone::Warning),
            4 => Emphasis::Highlight(Tone::Success),
            _ => Emphasis::Normal,
        };

        Scene::new("Prototype")
            .node("original", "Original (DNA)", (0, 0), focus(p, 1, Tone::Accent))
            .node("client", "Client", (0, 6), focus(p, 2, Tone::Accent))
            .node("clone", "Clone", (30, 0), clone)
            .connect(
                Connector::new("ask", "client", "original")
                    .with_emphasis(reveal_focus(p, 2, Tone::Accent)),
            )
            .connect(
                Connector::new("copy", "original", "clone")
                    .with_label("clone()")
                    .dashed()
                    .with_emphasis(reveal_focus(p, 3, Tone::Warning)),
            )
            .note(
                "independent",
                "r2.x = 99 leaves r1 untouched",
                (24, 5),
                only_at(p, 4, Tone::Success),
            )
    }
}
