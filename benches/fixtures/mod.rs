// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

pub mod grid {
    use proteus::scene::{Connector, Emphasis, Scene, Tone};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GridParams {
        pub cols: usize,
        pub rows: usize,
        pub label_len: usize,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        MediumDense,
        LargeLongLabels,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::MediumDense => "medium_dense",
                Self::LargeLongLabels => "large_long_labels",
            }
        }

        pub const fn params(self) -> GridParams {
            match self {
                Self::Small => GridParams {
                    cols: 2,
                    rows: 2,
                    label_len: 6,
                },
                Self::MediumDense => GridParams {
                    cols: 5,
                    rows: 4,
                    label_len: 8,
                },
                Self::LargeLongLabels => GridParams {
                    cols: 8,
                    rows: 8,
                    label_len: 24,
                },
            }
        }
    }

    // Scene ids are `&'static str`; fixtures are built once per bench run.
    fn leak(value: String) -> &'static str {
        Box::leak(value.into_boxed_str())
    }

    fn node_id(col: usize, row: usize) -> &'static str {
        leak(format!("n{row:02}_{col:02}"))
    }

    /// A `cols x rows` grid of boxes, each linked to its right and lower neighbour.
    pub fn fixture(case: Case) -> Scene {
        let GridParams {
            cols,
            rows,
            label_len,
        } = case.params();
        let pitch_x = label_len + 12;
        let pitch_y = 6;

        let ids = (0..rows)
            .map(|row| (0..cols).map(|col| node_id(col, row)).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let mut scene = Scene::new(case.id());
        for (row, row_ids) in ids.iter().enumerate() {
            for (col, &id) in row_ids.iter().enumerate() {
                let label = format!("{id}{}", "x".repeat(label_len.saturating_sub(id.len())));
                let emphasis = if (row + col) % 3 == 0 {
                    Emphasis::Highlight(Tone::Accent)
                } else {
                    Emphasis::Normal
                };
                scene = scene.node(id, label, (col * pitch_x, row * pitch_y), emphasis);
            }
        }

        for (row, row_ids) in ids.iter().enumerate() {
            for (col, &id) in row_ids.iter().enumerate() {
                if let Some(&right) = row_ids.get(col + 1) {
                    scene = scene.connect(
                        Connector::new(leak(format!("{id}-r")), id, right).with_label("call()"),
                    );
                }
                if let Some(down) = ids.get(row + 1).map(|next| next[col]) {
                    scene = scene.connect(Connector::new(leak(format!("{id}-d")), id, down).dashed());
                }
            }
        }
        scene
    }
}
