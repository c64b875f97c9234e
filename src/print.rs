//! Tabulation of choice probabilities for console output.

use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::engine::Probabilities;

/// One row per observation, one column per alternative, followed by the row total.
pub fn tabulate(probs: &Probabilities) -> Table {
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default().with(MinWidth(11)).with(HAlign::Centred),
            )];
            for _ in 0..probs.alternatives() {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(10)).with(HAlign::Right),
                ));
            }
            cols.push(Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(10))
                    .with(HAlign::Right),
            ));
            cols
        })
        .with_row({
            let mut header_cells = vec!["Observation".into()];
            for label in probs.labels() {
                header_cells.push(label.clone().into());
            }
            header_cells.push("Total".into());
            Row::new(
                Styles::default().with(Header(true)).with(Separator(true)),
                header_cells,
            )
        });

    let totals = probs.totals();
    for (observation, total) in totals.into_iter().enumerate() {
        let mut row_cells = vec![format!("{}", observation + 1).into()];
        for prob in probs.observation(observation) {
            row_cells.push(format!("{prob:.6}").into());
        }
        row_cells.push(format!("{total:.6}").into());
        table.push_row(Row::new(Styles::default(), row_cells));
    }

    table
}
