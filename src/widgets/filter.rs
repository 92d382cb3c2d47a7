pub const SHOW_ALL: &str = "all";
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::None => "none",
        }
    }
}

pub fn matches(filter: &str, category: &str) -> bool {
    filter == SHOW_ALL || filter == category
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemPlan {
    pub display: Display,
    pub fade_in: bool,
}

pub fn plan_item(filter: &str, category: &str) -> ItemPlan {
    if matches(filter, category) {
        ItemPlan {
            display: Display::Block,
            fade_in: true,
        }
    } else {
        ItemPlan {
            display: Display::None,
            fade_in: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FilterBar {
    values: Vec<String>,
    active: Option<usize>,
}

impl FilterBar {
    // Without a marked button the `all` button, or else the first, is active.
    pub fn new(values: Vec<String>, initially_active: Option<usize>) -> Self {
        let active = initially_active
            .filter(|index| *index < values.len())
            .or_else(|| values.iter().position(|value| value == SHOW_ALL))
            .or_else(|| (!values.is_empty()).then_some(0));
        Self { values, active }
    }

    // Reselecting the active button still yields its value so the transition reruns.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        if index >= self.values.len() {
            return None;
        }
        self.active = Some(index);
        Some(self.values[index].as_str())
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> FilterBar {
        FilterBar::new(
            vec!["all".to_string(), "web".to_string(), "branding".to_string()],
            Some(0),
        )
    }

    #[test]
    fn all_matches_every_category() {
        assert!(matches("all", "web"));
        assert!(matches("all", ""));
        assert!(matches("web", "web"));
        assert!(!matches("web", "branding"));
        assert!(!matches("Web", "web"));
    }

    fn active_buttons(bar: &FilterBar, count: usize) -> Vec<usize> {
        (0..count).filter(|index| bar.is_active(*index)).collect()
    }

    #[test]
    fn selection_moves_the_single_active_marker() {
        let mut bar = bar();
        assert_eq!(bar.select(2), Some("branding"));
        assert_eq!(active_buttons(&bar, 3), vec![2]);
    }

    #[test]
    fn reselecting_active_button_still_yields_its_value() {
        let mut bar = bar();
        assert_eq!(bar.select(0), Some("all"));
        assert_eq!(bar.select(0), Some("all"));
        assert_eq!(active_buttons(&bar, 3), vec![0]);
    }

    #[test]
    fn out_of_range_selection_keeps_current_marker() {
        let mut bar = bar();
        assert_eq!(bar.select(7), None);
        assert_eq!(active_buttons(&bar, 3), vec![0]);
    }

    #[test]
    fn unmarked_bar_defaults_to_the_all_button() {
        let values = vec!["web".to_string(), "all".to_string(), "print".to_string()];
        let bar = FilterBar::new(values, None);
        assert_eq!(active_buttons(&bar, 3), vec![1]);
    }

    #[test]
    fn unmarked_bar_without_all_defaults_to_first_button() {
        let values = vec!["web".to_string(), "print".to_string()];
        let bar = FilterBar::new(values, None);
        assert_eq!(active_buttons(&bar, 2), vec![0]);
    }

    #[test]
    fn stale_initial_index_falls_back_to_a_default() {
        let bar = FilterBar::new(vec!["web".to_string(), "all".to_string()], Some(3));
        assert_eq!(active_buttons(&bar, 2), vec![1]);
    }

    #[test]
    fn selected_category_items_are_shown_and_others_hidden() {
        let items = ["web", "branding", "web", "print"];
        let plans: Vec<ItemPlan> = items.iter().map(|category| plan_item("web", category)).collect();

        for (category, plan) in items.iter().zip(&plans) {
            if *category == "web" {
                assert_eq!(plan.display, Display::Block);
                assert!(plan.fade_in);
            } else {
                assert_eq!(plan.display, Display::None);
                assert!(!plan.fade_in);
            }
        }
        assert_eq!(Display::None.as_str(), "none");
    }
}
