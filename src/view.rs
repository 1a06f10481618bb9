// View state with pure reducer transitions. Typing and filtering are
// deliberately separate: the visible list only changes on an explicit
// submit (or when the text is cleared), never on every keystroke.
use crate::model::StoreTab;

#[derive(Debug, Clone)]
pub enum ViewAction {
    /// Live text edit in the search box.
    Type(String),
    /// Explicit search action (button / affirmative key).
    Submit,
    SwitchTab(StoreTab),
    ToggleOffersOnly,
    ShowMore,
}

#[derive(Debug, Clone)]
pub struct ViewState {
    pub active_tab: StoreTab,
    pub search_text: String,
    pub committed_filter: String,
    pub offers_only: bool,
    pub visible_count: usize,
    page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            active_tab: StoreTab::Units,
            search_text: String::new(),
            committed_filter: String::new(),
            offers_only: false,
            visible_count: page_size,
            page_size,
        }
    }

    /// Applies one user action. `filtered_len` is the size of the currently
    /// filtered list and only caps `ShowMore`.
    pub fn apply(&mut self, action: ViewAction, filtered_len: usize) {
        match action {
            ViewAction::Type(text) => {
                self.search_text = text;
                if self.search_text.is_empty() {
                    self.committed_filter.clear();
                    self.visible_count = self.page_size;
                }
            }
            ViewAction::Submit => {
                self.committed_filter = self.search_text.clone();
                self.visible_count = self.page_size;
            }
            ViewAction::SwitchTab(tab) => {
                self.active_tab = tab;
                self.search_text.clear();
                self.committed_filter.clear();
                self.visible_count = self.page_size;
            }
            ViewAction::ToggleOffersOnly => {
                self.offers_only = !self.offers_only;
                self.visible_count = self.page_size;
            }
            ViewAction::ShowMore => {
                self.visible_count = (self.visible_count + self.page_size)
                    .min(filtered_len)
                    .max(self.page_size);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ViewState {
        ViewState::new(20)
    }

    #[test]
    fn typing_does_not_commit_the_filter() {
        let mut view = state();
        view.apply(ViewAction::Type("mario".to_string()), 100);
        assert_eq!(view.search_text, "mario");
        assert_eq!(view.committed_filter, "");
    }

    #[test]
    fn submit_commits_and_resets_pagination() {
        let mut view = state();
        view.apply(ViewAction::Type("mario".to_string()), 100);
        view.apply(ViewAction::ShowMore, 100);
        assert_eq!(view.visible_count, 40);

        view.apply(ViewAction::Submit, 100);
        assert_eq!(view.committed_filter, "mario");
        assert_eq!(view.visible_count, 20);
    }

    #[test]
    fn clearing_the_text_clears_the_committed_filter_too() {
        let mut view = state();
        view.apply(ViewAction::Type("mario".to_string()), 100);
        view.apply(ViewAction::Submit, 100);
        view.apply(ViewAction::ShowMore, 100);

        view.apply(ViewAction::Type(String::new()), 100);
        assert_eq!(view.committed_filter, "");
        assert_eq!(view.visible_count, 20);
    }

    #[test]
    fn switching_tabs_resets_search_and_pagination() {
        let mut view = state();
        view.apply(ViewAction::Type("mario".to_string()), 100);
        view.apply(ViewAction::Submit, 100);
        view.apply(ViewAction::ShowMore, 100);

        view.apply(ViewAction::SwitchTab(StoreTab::Packs), 100);
        assert_eq!(view.active_tab, StoreTab::Packs);
        assert_eq!(view.search_text, "");
        assert_eq!(view.committed_filter, "");
        assert_eq!(view.visible_count, 20);
    }

    #[test]
    fn toggling_offers_resets_pagination() {
        let mut view = state();
        view.apply(ViewAction::ShowMore, 100);
        assert_eq!(view.visible_count, 40);

        view.apply(ViewAction::ToggleOffersOnly, 100);
        assert!(view.offers_only);
        assert_eq!(view.visible_count, 20);
    }

    #[test]
    fn show_more_never_exceeds_the_filtered_set() {
        let mut view = state();
        view.apply(ViewAction::ShowMore, 25);
        assert_eq!(view.visible_count, 25);

        view.apply(ViewAction::ShowMore, 25);
        assert_eq!(view.visible_count, 25);

        // a small filtered set never shrinks the page below one page
        view.apply(ViewAction::ShowMore, 3);
        assert_eq!(view.visible_count, 20);
    }
}
