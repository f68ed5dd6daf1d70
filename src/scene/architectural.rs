// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::registry::SceneRenderer;
use super::{focus, only_at, reveal_focus, Connector, Emphasis, Scene, Tone};

pub(super) fn renderers() -> Vec<Box<dyn SceneRenderer>> {
    vec![
        Box::new(ServiceOriented),
        Box::new(DataCentric),
        Box::new(Layered),
        Box::new(ModelViewController),
        Box::new(ClientServer),
    ]
}

fn at_any(p: usize, steps: &[usize], tone: Tone) -> Emphasis {
    if steps.contains(&p) {
        Emphasis::Highlight(tone)
    } else {
        Emphasis::Normal
    }
}

pub(super) struct ServiceOriented;

impl SceneRenderer for ServiceOriented {
    fn tag(&self) -> &'static str {
        "soa"
    }

    fn render(&self, p: usize) -> Scene {
        let service_a = match p {
            1 => Emphasis::Highlight(Tone::Accent),
            4 => Emphasis::Highlight(Tone::Success),
            _ => Emphasis::Normal,
        };
        let service_b = match p {
            3 => Emphasis::Highlight(Tone::Accent),
            4 => Emphasis::Highlight(Tone::Success),
            _ => Emphasis::Normal,
        };

        Scene::new("Service-Oriented Architecture")
            .node("service-a", "Service A (Order)", (0, 0), service_a)
            .node("bus", "Service Bus", (28, 0), focus(p, 2, Tone::Warning))
            .node("service-b", "Service B (Payment)", (50, 0), service_b)
            .connect(
                Connector::new("request", "service-a", "bus")
                    .with_label("request")
                    .with_emphasis(reveal_focus(p, 2, Tone::Accent)),
            )
            .connect(
                Connector::new("route", "bus", "service-b")
                    .with_label("route")
                    .with_emphasis(reveal_focus(p, 3, Tone::Accent)),
            )
            .note(
                "response",
                "<- response: { id: 123 }",
                (28, 4),
                only_at(p, 4, Tone::Success),
            )
    }
}

/// Every client talks to the shared store, never to each other.
pub(super) struct DataCentric;

impl SceneRenderer for DataCentric {
    fn tag(&self) -> &'static str {
        "data-centric"
    }

    fn render(&self, p: usize) -> Scene {
        let db = match p {
            1 => Emphasis::Highlight(Tone::Accent),
            2 | 4 => Emphasis::Highlight(Tone::Success),
            _ => Emphasis::Normal,
        };

        Scene::new("Data-Centric")
            .node("db", "Shared DB", (20, 5), db)
            .node("client-a", "Client A", (0, 0), focus(p, 2, Tone::Accent))
            .node("client-b", "Client B", (4, 11), focus(p, 3, Tone::Accent))
            .node("client-c", "Client C", (40, 0), focus(p, 4, Tone::Accent))
            .connect(
                Connector::new("write", "client-a", "db")
                    .with_label("write()")
                    .with_emphasis(reveal_focus(p, 2, Tone::Accent)),
            )
            .connect(
                Connector::new("read", "db", "client-b")
                    .with_label("read()")
                    .with_emphasis(reveal_focus(p, 3, Tone::Accent)),
            )
            .connect(
                Connector::new("update", "client-c", "db")
                    .with_label("update()")
                    .with_emphasis(reveal_focus(p, 4, Tone::Accent)),
            )
    }
}

pub(super) struct Layered;

impl SceneRenderer for Layered {
    fn tag(&self) -> &'static str {
        "layered"
    }

    fn render(&self, p: usize) -> Scene {
        let layer = |at: usize| at_any(p, &[at], Tone::Accent);
        let (presentation, business, data) = if p == 4 {
            let back = Emphasis::Highlight(Tone::Success);
            (back, back, back)
        } else {
            (layer(1), layer(2), layer(3))
        };

        Scene::new("Layered (N-Tier)")
            .node("user", "User", (30, 0), focus(p, 4, Tone::Success))
            .node("presentation", "Presentation", (1, 0), presentation)
            .node("business", "Business Logic", (0, 5), business)
            .node("data", "Data Access", (2, 10), data)
            .connect(
                Connector::new("request", "user", "presentation")
                    .with_label("request")
                    .with_emphasis(reveal_focus(p, 1, Tone::Accent)),
            )
            .connect(
                Connector::new("to-business", "presentation", "business")
                    .with_emphasis(reveal_focus(p, 2, Tone::Accent)),
            )
            .connect(
                Connector::new("to-data", "business", "data")
                    .with_emphasis(reveal_focus(p, 3, Tone::Accent)),
            )
            .note(
                "response",
                "response climbs back up ^",
                (22, 6),
                only_at(p, 4, Tone::Success),
            )
    }
}

pub(super) struct ModelViewController;

impl SceneRenderer for ModelViewController {
    fn tag(&self) -> &'static str {
        "mvc"
    }

    fn render(&self, p: usize) -> Scene {
        let user = match p {
            1 => Emphasis::Highlight(Tone::Accent),
            4 => Emphasis::Highlight(Tone::Success),
            _ => Emphasis::Normal,
        };

        Scene::new("MVC")
            .node("user", "User", (0, 0), user)
            .node("controller", "Controller", (20, 0), at_any(p, &[1, 2], Tone::Accent))
            .node("model", "Model", (23, 7), at_any(p, &[2, 3], Tone::Accent))
            .node("view", "View", (0, 7), focus(p, 4, Tone::Success))
            .connect(
                Connector::new("input", "user", "controller")
                    .with_label("input")
                    .with_emphasis(reveal_focus(p, 1, Tone::Accent)),
            )
            .connect(
                Connector::new("update", "controller", "model")
                    .with_label("update()")
                    .with_emphasis(reveal_focus(p, 2, Tone::Accent)),
            )
            .connect(
                Connector::new("notify", "model", "view")
                    .with_label("notify()")
                    .with_emphasis(reveal_focus(p, 3, Tone::Accent)),
            )
            .connect(
                Connector::new("render", "view", "user")
                    .with_label("render")
                    .with_emphasis(reveal_focus(p, 4, Tone::Success)),
            )
    }
}

pub(super) struct ClientServer;

impl SceneRenderer for ClientServer {
    fn tag(&self) -> &'static str {
        "client-server"
    }

    fn render(&self, p: usize) -> Scene {
        let client = match p {
            1 => Emphasis::Highlight(Tone::Accent),
            4 => Emphasis::Highlight(Tone::Success),
            _ => Emphasis::Normal,
        };

        Scene::new("Client-Server")
            .node("client", "Client", (0, 1), client)
            .node("network", "Network", (22, 1), focus(p, 2, Tone::Warning))
            .node("server", "Server", (44, 1), focus(p, 3, Tone::Warning))
            .connect(
                Connector::new("send", "client", "network")
                    .with_label("GET /hello")
                    .with_emphasis(reveal_focus(p, 1, Tone::Accent)),
            )
            .connect(
                Connector::new("deliver", "network", "server")
                    .with_label("packet")
                    .with_emphasis(reveal_focus(p, 2, Tone::Accent)),
            )
            .note("processing", "processing...", (44, 5), only_at(p, 3, Tone::Warning))
            .note(
                "response",
                "<- 200 OK { message: Hello Client }",
                (8, 5),
                only_at(p, 4, Tone::Success),
            )
    }
}
