//! Quote selections and the total they derive.

use std::collections::{BTreeMap, BTreeSet};

use super::catalog::{GroupMode, SelectionGroup};

#[derive(Clone, PartialEq, Debug)]
enum Choice {
    Single(&'static str),
    Multi(BTreeSet<&'static str>),
}

/// Which options a visitor has picked, keyed by group id.
///
/// Starts with every single-select group on its free default and every
/// multi-select group empty. Scoped to one page visit; nothing here is
/// persisted, and a reload resets it.
#[derive(Clone, PartialEq, Debug)]
pub struct SelectionState {
    choices: BTreeMap<&'static str, Choice>,
}

impl SelectionState {
    pub fn new(groups: &'static [SelectionGroup]) -> Self {
        let choices = groups
            .iter()
            .map(|group| {
                let choice = match group.mode {
                    GroupMode::Single => {
                        // Catalog validation guarantees a leading free option.
                        Choice::Single(group.options.first().map(|o| o.id).unwrap_or_default())
                    }
                    GroupMode::Multi => Choice::Multi(BTreeSet::new()),
                };
                (group.id, choice)
            })
            .collect();
        Self { choices }
    }

    /// Replaces a single-select group's choice unconditionally.
    pub fn select_single(&mut self, group_id: &str, option_id: &'static str) {
        match self.choices.get_mut(group_id) {
            Some(Choice::Single(current)) => *current = option_id,
            _ => debug_assert!(false, "select_single on unknown or multi group {group_id:?}"),
        }
    }

    /// Adds `option_id` to a multi-select group, or removes it when already
    /// present. Two toggles in a row cancel out.
    pub fn toggle_multi(&mut self, group_id: &str, option_id: &'static str) {
        match self.choices.get_mut(group_id) {
            Some(Choice::Multi(selected)) => {
                if !selected.remove(option_id) {
                    selected.insert(option_id);
                }
            }
            _ => debug_assert!(false, "toggle_multi on unknown or single group {group_id:?}"),
        }
    }

    /// The selected option id of a single-select group.
    pub fn selected_single(&self, group_id: &str) -> Option<&'static str> {
        match self.choices.get(group_id) {
            Some(Choice::Single(id)) => Some(id),
            _ => None,
        }
    }

    /// The selected id set of a multi-select group.
    pub fn selected_multi(&self, group_id: &str) -> Option<&BTreeSet<&'static str>> {
        match self.choices.get(group_id) {
            Some(Choice::Multi(selected)) => Some(selected),
            _ => None,
        }
    }

    pub fn is_selected(&self, group_id: &str, option_id: &str) -> bool {
        match self.choices.get(group_id) {
            Some(Choice::Single(id)) => *id == option_id,
            Some(Choice::Multi(selected)) => selected.contains(option_id),
            None => false,
        }
    }
}

/// Reference-currency total for the current selections. Pure: identical
/// inputs always produce the identical total.
///
/// Selected options accumulate into a capped subtotal, except cap-exempt
/// options which are added on top in full after the `cap` clamp. A selection
/// id with no catalog counterpart is a programming error: release builds
/// skip it (fail soft, with a warning) and debug builds assert.
pub fn compute_total(
    base_price_usd: u32,
    selections: &SelectionState,
    groups: &[SelectionGroup],
    cap: Option<u32>,
) -> u32 {
    let mut capped = base_price_usd;
    let mut exempt = 0;

    for group in groups {
        match group.mode {
            GroupMode::Single => {
                let Some(selected) = selections.selected_single(group.id) else {
                    log::warn!("no selection recorded for group {:?}", group.id);
                    debug_assert!(false, "no selection recorded for group {:?}", group.id);
                    continue;
                };
                match group.options.iter().find(|option| option.id == selected) {
                    Some(option) if option.cap_exempt => exempt += option.base_price_usd,
                    Some(option) => capped += option.base_price_usd,
                    None => {
                        log::warn!("selection {selected:?} missing from group {:?}", group.id);
                        debug_assert!(
                            false,
                            "selection {selected:?} missing from group {:?}",
                            group.id
                        );
                    }
                }
            }
            GroupMode::Multi => {
                for option in group.options {
                    if selections.is_selected(group.id, option.id) {
                        if option.cap_exempt {
                            exempt += option.base_price_usd;
                        } else {
                            capped += option.base_price_usd;
                        }
                    }
                }
                #[cfg(debug_assertions)]
                if let Some(selected) = selections.selected_multi(group.id) {
                    for id in selected {
                        debug_assert!(
                            group.options.iter().any(|option| option.id == *id),
                            "selection {id:?} missing from group {:?}",
                            group.id
                        );
                    }
                }
            }
        }
    }

    if let Some(cap) = cap {
        capped = capped.min(cap);
    }
    capped + exempt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::catalog::{BASE_PRICE_USD, QUOTE_GROUPS, QUOTE_PRICE_CAP_USD};
    use crate::pricing::currency::{format_amount, Currency, CURRENCIES};
    use crate::pricing::rounding::plan_price;

    fn defaults() -> SelectionState {
        SelectionState::new(&QUOTE_GROUPS)
    }

    fn total(selections: &SelectionState) -> u32 {
        compute_total(
            BASE_PRICE_USD,
            selections,
            &QUOTE_GROUPS,
            Some(QUOTE_PRICE_CAP_USD),
        )
    }

    #[test]
    fn defaults_cost_the_base_price() {
        assert_eq!(total(&defaults()), 299);
    }

    #[test]
    fn toggling_an_extra_moves_the_total_both_ways() {
        let mut selections = defaults();
        selections.toggle_multi("extras", "x1");
        assert_eq!(total(&selections), 399);
        selections.toggle_multi("extras", "x1");
        assert_eq!(total(&selections), 299);
    }

    #[test]
    fn toggling_twice_restores_the_state() {
        let start = defaults();
        let mut selections = start.clone();
        selections.toggle_multi("extras", "x2");
        assert_ne!(selections, start);
        selections.toggle_multi("extras", "x2");
        assert_eq!(selections, start);
    }

    #[test]
    fn radio_selection_replaces_instead_of_accumulating() {
        let mut selections = defaults();
        selections.select_single("pages", "p2");
        assert_eq!(total(&selections), 599);
        selections.select_single("pages", "p3");
        assert_eq!(total(&selections), 899);
        selections.select_single("pages", "p1");
        assert_eq!(total(&selections), 299);
    }

    #[test]
    fn cap_clamps_only_the_capped_portion() {
        let mut selections = defaults();
        selections.select_single("pages", "p3");
        selections.select_single("booking", "b3");
        selections.select_single("payments", "pay3");
        selections.toggle_multi("quoting", "q1");
        // Capped categories sum past the ceiling on their own.
        assert_eq!(total(&selections), 1_200);
        // Branding rides on top in full.
        selections.toggle_multi("extras", "x3");
        assert_eq!(total(&selections), 1_350);
    }

    #[test]
    fn totals_are_deterministic() {
        let mut selections = defaults();
        selections.select_single("booking", "b2");
        selections.toggle_multi("extras", "x1");
        let first = total(&selections);
        let second = total(&selections.clone());
        assert_eq!(first, second);
        assert_eq!(first, 549);
    }

    #[test]
    fn display_currency_never_touches_selections() {
        let mut selections = defaults();
        selections.toggle_multi("extras", "x1");
        let before = selections.clone();
        let reference_total = total(&selections);

        // Rendering prices in every currency is a read-only affair.
        for currency in CURRENCIES {
            let _ = format_amount(currency, reference_total);
            let _ = plan_price(currency, reference_total);
        }
        assert_eq!(selections, before);
        assert_eq!(total(&selections), reference_total);
        assert_eq!(format_amount(Currency::Usd, reference_total), "$399");
    }

    #[test]
    #[should_panic(expected = "missing from group")]
    fn unknown_option_ids_fail_loud_in_debug() {
        let mut selections = defaults();
        selections.toggle_multi("extras", "zz9");
        let _ = total(&selections);
    }
}
