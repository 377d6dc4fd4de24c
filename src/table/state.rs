use std::cmp::Ordering;

use strum_macros::EnumIter;

use crate::config::DF;
use crate::domain::AssetRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum SortColumn {
    Id,
    Name,
    Price,
    Change24h,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Owns the session snapshot and derives the displayed view from it.
///
/// The view is a list of indices into the snapshot, recomputed from scratch on
/// every sort/filter transition. Deriving (instead of mutating the previous
/// view in place) is what makes filter and sort compose in either order.
#[derive(Default)]
pub struct TableState {
    snapshot: Vec<AssetRecord>,
    view: Vec<usize>,
    filter: String,
    // None = snapshot acquisition order. Direction can't exist without a column.
    sort: Option<(SortColumn, SortDirection)>,
}

impl TableState {
    pub fn new(snapshot: Vec<AssetRecord>) -> Self {
        let mut table = Self {
            snapshot,
            ..Default::default()
        };
        table.rebuild();
        table
    }

    /// Case-insensitive substring match against `name`. Empty pattern matches
    /// everything. Never touches the sort state: an active sort stays applied
    /// over the filtered subsequence.
    pub fn apply_filter(&mut self, pattern: &str) {
        self.filter = pattern.to_string();
        self.rebuild();
        if DF.log_table_events {
            log::info!("filter {:?} -> {} rows", self.filter, self.view.len());
        }
    }

    /// Three-way cycle keyed on whether `column` is already active:
    /// fresh column -> ascending, ascending -> descending, descending -> off
    /// (back to acquisition order under the current filter).
    pub fn apply_sort(&mut self, column: SortColumn) {
        self.sort = match self.sort {
            Some((current, direction)) if current == column => match direction {
                SortDirection::Ascending => Some((column, direction.toggle())),
                SortDirection::Descending => None,
            },
            _ => Some((column, SortDirection::Ascending)),
        };
        self.rebuild();
        if DF.log_table_events {
            log::info!("sort state is now {:?}", self.sort);
        }
    }

    pub fn sort_state(&self) -> Option<(SortColumn, SortDirection)> {
        self.sort
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Record behind the given view row.
    pub fn row(&self, row: usize) -> &AssetRecord {
        &self.snapshot[self.view[row]]
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    fn rebuild(&mut self) {
        let needle = self.filter.to_lowercase();
        self.view = self
            .snapshot
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                needle.is_empty() || record.name.to_lowercase().contains(&needle)
            })
            .map(|(i, _)| i)
            .collect();

        let Some((column, direction)) = self.sort else {
            return;
        };

        let snapshot = &self.snapshot;
        // Stable sort: equal keys keep acquisition order in both directions
        // (we reverse the comparator, never the slice).
        let order = |ordering: Ordering| match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        };

        match column {
            SortColumn::Id => self
                .view
                .sort_by(|&a, &b| order(snapshot[a].id.cmp(&snapshot[b].id))),
            SortColumn::Name => {
                // Lowercase each name once per rebuild, not once per comparison.
                let keys: Vec<String> = snapshot
                    .iter()
                    .map(|record| record.name.to_lowercase())
                    .collect();
                self.view.sort_by(|&a, &b| order(keys[a].cmp(&keys[b])));
            }
            SortColumn::Price => self
                .view
                .sort_by(|&a, &b| order(snapshot[a].price.total_cmp(&snapshot[b].price))),
            SortColumn::Change24h => self.view.sort_by(|&a, &b| {
                order(
                    snapshot[a]
                        .percent_change_24h
                        .total_cmp(&snapshot[b].percent_change_24h),
                )
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, name: &str, price: f64, change: f64) -> AssetRecord {
        AssetRecord {
            id,
            name: name.to_string(),
            symbol: name[..name.len().min(3)].to_uppercase(),
            price,
            percent_change_24h: change,
        }
    }

    fn sample() -> Vec<AssetRecord> {
        vec![
            record(1, "Bitcoin", 98000.0, -2.3),
            record(2, "Ethereum", 3400.0, 1.1),
            record(3, "Solana", 150.0, 5.6),
            record(4, "bitTorrent", 0.0000012, -0.4),
        ]
    }

    fn visible_ids(table: &TableState) -> Vec<u64> {
        (0..table.len()).map(|i| table.row(i).id).collect()
    }

    #[test]
    fn filter_is_case_insensitive_and_order_preserving() {
        let mut table = TableState::new(sample());
        table.apply_filter("BIT");
        assert_eq!(visible_ids(&table), vec![1, 4]);
    }

    #[test]
    fn empty_pattern_restores_the_full_view() {
        let mut table = TableState::new(sample());
        table.apply_filter("sol");
        table.apply_filter("");
        assert_eq!(visible_ids(&table), vec![1, 2, 3, 4]);
    }

    #[test]
    fn filter_preserves_an_active_sort() {
        let mut table = TableState::new(sample());
        table.apply_sort(SortColumn::Price); // ascending
        table.apply_filter("bit");
        // bitTorrent (0.0000012) before Bitcoin (98000) under ascending price
        assert_eq!(visible_ids(&table), vec![4, 1]);
        assert_eq!(
            table.sort_state(),
            Some((SortColumn::Price, SortDirection::Ascending))
        );
    }

    #[test]
    fn three_clicks_return_to_acquisition_order() {
        let mut table = TableState::new(sample());
        table.apply_sort(SortColumn::Change24h);
        table.apply_sort(SortColumn::Change24h);
        table.apply_sort(SortColumn::Change24h);
        assert_eq!(table.sort_state(), None);
        assert_eq!(visible_ids(&table), vec![1, 2, 3, 4]);
    }

    #[test]
    fn third_click_respects_the_current_filter() {
        let mut table = TableState::new(sample());
        table.apply_filter("bit");
        table.apply_sort(SortColumn::Price);
        table.apply_sort(SortColumn::Price);
        table.apply_sort(SortColumn::Price);
        assert_eq!(table.sort_state(), None);
        // Acquisition order intersected with the filter, not the last sort order
        assert_eq!(visible_ids(&table), vec![1, 4]);
    }

    #[test]
    fn switching_column_resets_direction_to_ascending() {
        let mut table = TableState::new(sample());
        table.apply_sort(SortColumn::Price);
        table.apply_sort(SortColumn::Price); // price descending
        table.apply_sort(SortColumn::Name);
        assert_eq!(
            table.sort_state(),
            Some((SortColumn::Name, SortDirection::Ascending))
        );
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut table = TableState::new(sample());
        table.apply_sort(SortColumn::Name);
        // Lowercased compare: bitcoin < bittorrent < ethereum < solana
        assert_eq!(visible_ids(&table), vec![1, 4, 2, 3]);
    }

    #[test]
    fn name_sort_is_stable_and_caseless_in_both_directions() {
        let mut table = TableState::new(vec![
            record(1, "apple", 1.0, 0.0),
            record(2, "Apple", 2.0, 0.0),
            record(3, "banana", 3.0, 0.0),
        ]);
        // "apple" and "Apple" compare equal lowercased; acquisition order wins.
        table.apply_sort(SortColumn::Name);
        assert_eq!(visible_ids(&table), vec![1, 2, 3]);
        table.apply_sort(SortColumn::Name);
        assert_eq!(visible_ids(&table), vec![3, 1, 2]);
    }

    #[test]
    fn numeric_columns_sort_numerically() {
        // Ids whose decimal strings would sort the other way: "10" < "9" as text.
        let mut table = TableState::new(vec![
            record(9, "Nine", 2.0, 0.0),
            record(10, "Ten", 10.0, 0.0),
        ]);
        table.apply_sort(SortColumn::Id);
        assert_eq!(visible_ids(&table), vec![9, 10]);
        table.apply_sort(SortColumn::Id);
        assert_eq!(visible_ids(&table), vec![10, 9]);
    }

    #[test]
    fn ties_keep_acquisition_order() {
        let mut table = TableState::new(vec![
            record(1, "Aaa", 5.0, 0.0),
            record(2, "Bbb", 5.0, 0.0),
            record(3, "Ccc", 1.0, 0.0),
        ]);
        table.apply_sort(SortColumn::Price);
        assert_eq!(visible_ids(&table), vec![3, 1, 2]);
        table.apply_sort(SortColumn::Price); // descending: ties still 1 before 2
        assert_eq!(visible_ids(&table), vec![1, 2, 3]);
    }

    #[test]
    fn sort_and_filter_commute_as_sets() {
        let mut a = TableState::new(sample());
        a.apply_filter("bit");
        a.apply_sort(SortColumn::Price);

        let mut b = TableState::new(sample());
        b.apply_sort(SortColumn::Price);
        b.apply_filter("bit");

        assert_eq!(visible_ids(&a), visible_ids(&b));
    }

    #[test]
    fn price_cycle_then_filter_keeps_descending() {
        let mut table = TableState::new(vec![
            record(1, "Alpha", 10.0, -2.5),
            record(2, "beta", 5.0, 3.1),
        ]);

        table.apply_sort(SortColumn::Price);
        assert_eq!(visible_ids(&table), vec![2, 1]); // beta(5), Alpha(10)

        table.apply_sort(SortColumn::Price);
        assert_eq!(visible_ids(&table), vec![1, 2]); // Alpha(10), beta(5)

        table.apply_filter("al");
        assert_eq!(visible_ids(&table), vec![1]); // case-insensitive, sort kept
        assert_eq!(
            table.sort_state(),
            Some((SortColumn::Price, SortDirection::Descending))
        );
    }

    #[test]
    fn empty_snapshot_never_errors() {
        let mut table = TableState::new(Vec::new());
        table.apply_sort(SortColumn::Name);
        table.apply_filter("anything");
        table.apply_sort(SortColumn::Price);
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
