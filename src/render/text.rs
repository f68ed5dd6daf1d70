// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Canvas;

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    if text_len(text) <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Left offset that centres `len` cells inside `slot` cells.
pub(crate) fn centered_offset(slot: usize, len: usize) -> usize {
    slot.saturating_sub(len) / 2
}

/// Canvas text without trailing spaces or trailing blank lines.
pub(crate) fn canvas_to_string_trimmed(canvas: &Canvas) -> String {
    let rendered = canvas.to_string();
    let mut lines = rendered
        .split('\n')
        .map(|line| line.trim_end_matches(' '))
        .collect::<Vec<_>>();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}
