// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Declarative scenes and the per-pattern renderers that produce them.
//!
//! A [`Scene`] is a pure description: labelled boxes, connectors between boxes and free notes,
//! each carrying an [`Emphasis`]. Renderers are pure functions of the sequencer position; the
//! painter in [`crate::render`] turns a scene into text.

use std::ops::RangeInclusive;

mod architectural;
mod behavioral;
mod creational;
pub mod registry;
mod structural;

pub use registry::{PlaceholderScene, RendererRegistry, SceneRenderer, PLACEHOLDER_TAG};

pub type ElementId = &'static str;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Accent,
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Emphasis {
    #[default]
    Normal,
    Muted,
    Highlight(Tone),
    Hidden,
}

impl Emphasis {
    pub fn is_visible(self) -> bool {
        self != Self::Hidden
    }

    pub fn is_highlighted(self) -> bool {
        matches!(self, Self::Highlight(_))
    }
}

/// Hidden before `from`, normal afterwards.
pub fn reveal(position: usize, from: usize) -> Emphasis {
    if position < from {
        Emphasis::Hidden
    } else {
        Emphasis::Normal
    }
}

/// Hidden before `from`, highlighted at `from`, normal afterwards.
pub fn reveal_focus(position: usize, from: usize, tone: Tone) -> Emphasis {
    match position {
        p if p < from => Emphasis::Hidden,
        p if p == from => Emphasis::Highlight(tone),
        _ => Emphasis::Normal,
    }
}

/// Highlighted at `at`, normal otherwise.
pub fn focus(position: usize, at: usize, tone: Tone) -> Emphasis {
    if position == at {
        Emphasis::Highlight(tone)
    } else {
        Emphasis::Normal
    }
}

/// Visible (highlighted) only at `at`.
pub fn only_at(position: usize, at: usize, tone: Tone) -> Emphasis {
    if position == at {
        Emphasis::Highlight(tone)
    } else {
        Emphasis::Hidden
    }
}

/// `inside` while `position` is within `range`, hidden otherwise.
pub fn window(position: usize, range: RangeInclusive<usize>, inside: Emphasis) -> Emphasis {
    if range.contains(&position) {
        inside
    } else {
        Emphasis::Hidden
    }
}

/// A labelled box. `(x, y)` is the top-left cell; width follows the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: ElementId,
    pub label: String,
    pub x: usize,
    pub y: usize,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectorStyle {
    #[default]
    Solid,
    Dashed,
}

/// An arrow from one node to another, routed by the painter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connector {
    pub id: ElementId,
    pub from: ElementId,
    pub to: ElementId,
    pub label: Option<String>,
    pub style: ConnectorStyle,
    pub emphasis: Emphasis,
}

impl Connector {
    pub fn new(id: ElementId, from: ElementId, to: ElementId) -> Self {
        Self {
            id,
            from,
            to,
            label: None,
            style: ConnectorStyle::Solid,
            emphasis: Emphasis::Normal,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn dashed(mut self) -> Self {
        self.style = ConnectorStyle::Dashed;
        self
    }

    pub fn with_style(mut self, style: ConnectorStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }
}

/// Free text anchored at `(x, y)`. Newlines continue on the following rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: ElementId,
    pub text: String,
    pub x: usize,
    pub y: usize,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Node(Node),
    Connector(Connector),
    Note(Note),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Self::Node(node) => node.id,
            Self::Connector(connector) => connector.id,
            Self::Note(note) => note.id,
        }
    }

    pub fn emphasis(&self) -> Emphasis {
        match self {
            Self::Node(node) => node.emphasis,
            Self::Connector(connector) => connector.emphasis,
            Self::Note(note) => note.emphasis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    title: String,
    elements: Vec<Element>,
}

impl Scene {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            elements: Vec::new(),
        }
    }

    pub fn node(
        mut self,
        id: ElementId,
        label: impl Into<String>,
        (x, y): (usize, usize),
        emphasis: Emphasis,
    ) -> Self {
        self.elements.push(Element::Node(Node {
            id,
            label: label.into(),
            x,
            y,
            emphasis,
        }));
        self
    }

    pub fn connect(mut self, connector: Connector) -> Self {
        self.elements.push(Element::Connector(connector));
        self
    }

    pub fn note(
        mut self,
        id: ElementId,
        text: impl Into<String>,
        (x, y): (usize, usize),
        emphasis: Emphasis,
    ) -> Self {
        self.elements.push(Element::Note(Note {
            id,
            text: text.into(),
            x,
            y,
            emphasis,
        }));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == id)
    }

    pub fn emphasis_of(&self, id: &str) -> Option<Emphasis> {
        self.element(id).map(Element::emphasis)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.elements.iter().filter_map(|element| match element {
            Element::Node(node) => Some(node),
            _ => None,
        })
    }

    pub fn connectors(&self) -> impl Iterator<Item = &Connector> + '_ {
        self.elements.iter().filter_map(|element| match element {
            Element::Connector(connector) => Some(connector),
            _ => None,
        })
    }

    pub fn notes(&self) -> impl Iterator<Item = &Note> + '_ {
        self.elements.iter().filter_map(|element| match element {
            Element::Note(note) => Some(note),
            _ => None,
        })
    }

    /// Ids of elements currently highlighted, in scene order.
    pub fn highlighted(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|element| element.emphasis().is_highlighted())
            .map(Element::id)
            .collect()
    }
}
