// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::registry::SceneRenderer;
use super::{focus, only_at, reveal_focus, Connector, ConnectorStyle, Emphasis, Scene, Tone};

pub(super) fn renderers() -> Vec<Box<dyn SceneRenderer>> {
    vec![
        Box::new(Adapter),
        Box::new(Facade),
        Box::new(Proxy),
        Box::new(Bridge),
    ]
}

/// Muted until `at`, highlighted at `at`, normal once active.
fn activated(p: usize, at: usize) -> Emphasis {
    match p {
        p if p < at => Emphasis::Muted,
        p if p == at => Emphasis::Highlight(Tone::Success),
        _ => Emphasis::Normal,
    }
}

fn label_at(p: usize, at: usize) -> Emphasis {
    if p == at {
        Emphasis::Highlight(Tone::Accent)
    } else {
        Emphasis::Muted
    }
}

pub(super) struct Adapter;

impl SceneRenderer for Adapter {
    fn tag(&self) -> &'static str {
        "adapter"
    }

    fn render(&self, p: usize) -> Scene {
        Scene::new("Adapter")
            .node("client", "Client", (0, 1), focus(p, 1, Tone::Accent))
            .node("adapter", "Adapter", (22, 1), focus(p, 2, Tone::Warning))
            .node("legacy", "Legacy System", (44, 1), focus(p, 4, Tone::Success))
            .connect(
                Connector::new("square", "client", "adapter")
                    .with_label("square()")
                    .with_emphasis(reveal_focus(p, 1, Tone::Accent)),
            )
            .connect(
                Connector::new("round", "adapter", "legacy")
                    .with_label("round()")
                    .with_emphasis(reveal_focus(p, 3, Tone::Accent)),
            )
            .note(
                "translate",
                "translating [] -> ()",
                (18, 5),
                only_at(p, 2, Tone::Warning),
            )
            .note("understood", "request understood", (44, 5), only_at(p, 4, Tone::Success))
    }
}

/// One call fans out to three subsystems, one per step.
pub(super) struct Facade;

impl SceneRenderer for Facade {
    fn tag(&self) -> &'static str {
        "facade"
    }

    fn render(&self, p: usize) -> Scene {
        let client = match p {
            1 => Emphasis::Highlight(Tone::Accent),
            5 => Emphasis::Highlight(Tone::Success),
            _ => Emphasis::Normal,
        };

        Scene::new("Facade")
            .node("client", "Client", (0, 0), client)
            .node("facade", "Facade", (22, 0), focus(p, 1, Tone::Accent))
            .node("cpu", "CPU", (8, 7), activated(p, 2))
            .node("memory", "Memory", (22, 7), activated(p, 3))
            .node("disk", "Disk", (38, 7), activated(p, 4))
            .connect(
                Connector::new("start", "client", "facade")
                    .with_label("start()")
                    .with_emphasis(reveal_focus(p, 1, Tone::Accent)),
            )
            .connect(
                Connector::new("to-cpu", "facade", "cpu")
                    .with_emphasis(reveal_focus(p, 2, Tone::Accent)),
            )
            .connect(
                Connector::new("to-memory", "facade", "memory")
                    .with_emphasis(reveal_focus(p, 3, Tone::Accent)),
            )
            .connect(
                Connector::new("to-disk", "facade", "disk")
                    .with_emphasis(reveal_focus(p, 4, Tone::Accent)),
            )
            .note("started", "Computer started", (0, 11), only_at(p, 5, Tone::Success))
    }
}

pub(super) struct Proxy;

impl SceneRenderer for Proxy {
    fn tag(&self) -> &'static str {
        "proxy"
    }

    fn render(&self, p: usize) -> Scene {
        let proxy = match p {
            1 => Emphasis::Highlight(Tone::Accent),
            2 => Emphasis::Highlight(Tone::Warning),
            3 => Emphasis::Highlight(Tone::Success),
            _ => Emphasis::Normal,
        };

        Scene::new("Proxy")
            .node("client", "Client", (0, 1), focus(p, 1, Tone::Accent))
            .node("proxy", "Proxy", (20, 1), proxy)
            .node("real", "Real Subject", (40, 1), focus(p, 4, Tone::Success))
            .connect(
                Connector::new("request", "client", "proxy")
                    .with_label("request")
                    .with_emphasis(reveal_focus(p, 1, Tone::Accent)),
            )
            .connect(
                Connector::new("forward", "proxy", "real")
                    .with_label("forward")
                    .with_emphasis(reveal_focus(p, 3, Tone::Success)),
            )
            .note(
                "checking",
                "checking permissions...",
                (14, 5),
                only_at(p, 2, Tone::Warning),
            )
            .note("granted", "access granted", (14, 5), only_at(p, 3, Tone::Success))
            .note(
                "response",
                "response returns through the proxy",
                (14, 5),
                only_at(p, 4, Tone::Success),
            )
    }
}

/// A remote (abstraction) bridged first to a TV, then swapped over to a radio.
pub(super) struct Bridge;

impl SceneRenderer for Bridge {
    fn tag(&self) -> &'static str {
        "bridge"
    }

    fn render(&self, p: usize) -> Scene {
        let tv_plugged = (2..=3).contains(&p);
        let radio_plugged = p >= 4;

        let tv_link = match p {
            2 => Emphasis::Highlight(Tone::Accent),
            3 => Emphasis::Highlight(Tone::Success),
            _ => Emphasis::Muted,
        };
        let radio_link = match p {
            4 => Emphasis::Highlight(Tone::Accent),
            p if p > 4 => Emphasis::Normal,
            _ => Emphasis::Muted,
        };
        let tv = match p {
            3 => Emphasis::Highlight(Tone::Success),
            p if p >= 4 => Emphasis::Muted,
            _ => Emphasis::Normal,
        };

        Scene::new("Bridge")
            .node("remote", "Remote (Abstraction)", (0, 0), focus(p, 1, Tone::Accent))
            .node("tv", "TV", (34, 0), tv)
            .node("radio", "Radio", (34, 6), focus(p, 4, Tone::Success))
            .connect(
                Connector::new("tv-link", "remote", "tv")
                    .with_style(plugged(tv_plugged))
                    .with_emphasis(tv_link),
            )
            .connect(
                Connector::new("radio-link", "remote", "radio")
                    .with_style(plugged(radio_plugged))
                    .with_emphasis(radio_link),
            )
            .note("abstraction", "abstraction", (0, 4), label_at(p, 1))
            .note("implementation", "implementation", (46, 4), label_at(p, 1))
    }
}

fn plugged(connected: bool) -> ConnectorStyle {
    if connected {
        ConnectorStyle::Solid
    } else {
        ConnectorStyle::Dashed
    }
}
