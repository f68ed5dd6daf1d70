// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus: an interactive, terminal-first viewer for software design patterns.
//!
//! A [`navigation::Navigator`] owns the active selection and a [`sequencer::StepSequencer`]
//! that steps through the pattern's animation. Each step is a declarative [`scene::Scene`],
//! painted to Unicode text by [`render`] and shown by the [`tui`].

pub mod logging;
pub mod model;
pub mod navigation;
pub mod render;
pub mod scene;
pub mod sequencer;
pub mod tui;
pub mod ui;
