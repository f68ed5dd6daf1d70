// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::EmphasisSpan;

/// The characters each span covers, one span per line.
pub(super) fn collect_spanned_text(text: &str, spans: &[EmphasisSpan]) -> String {
    let lines = text.split('\n').collect::<Vec<_>>();
    let mut out = String::new();

    for span in spans {
        let line = lines.get(span.line).expect("line in bounds");
        let slice = line
            .chars()
            .skip(span.x0)
            .take((span.x1 - span.x0) + 1)
            .collect::<String>();
        out.push_str(&slice);
        out.push('\n');
    }

    out
}
