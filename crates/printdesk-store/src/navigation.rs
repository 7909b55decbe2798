use printdesk_core::{NavigationState, Page};

/// Which administrative pages are currently shown. Pages open independently;
/// several may be visible at once.
#[derive(Debug, Clone, Default)]
pub struct NavigationStore {
    state: NavigationState,
}

impl NavigationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: NavigationState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn is_open(&self, page: Page) -> bool {
        self.state.flag(page)
    }

    pub fn open(&mut self, page: Page) {
        *self.state.flag_mut(page) = true;
        tracing::debug!(?page, "page opened");
    }

    pub fn close(&mut self, page: Page) {
        *self.state.flag_mut(page) = false;
        tracing::debug!(?page, "page closed");
    }

    /// Closes every sidebar page. Advanced user management has no sidebar
    /// entry and keeps its visibility.
    pub fn close_all_pages(&mut self) {
        for page in Page::ALL {
            *self.state.flag_mut(page) = false;
        }
    }

    pub fn advanced_user_management_visible(&self) -> bool {
        self.state.show_advanced_user_management
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_and_close_are_idempotent() {
        let mut store = NavigationStore::new();
        store.open(Page::DeviceManagement);
        let once = store.state();
        store.open(Page::DeviceManagement);
        assert_eq!(store.state(), once);
        assert!(store.is_open(Page::DeviceManagement));

        store.close(Page::DeviceManagement);
        store.close(Page::DeviceManagement);
        assert_eq!(store.state(), NavigationState::default());
    }

    #[test]
    fn pages_are_independent() {
        let mut store = NavigationStore::new();
        store.open(Page::UserManagement);
        store.open(Page::ReportGeneration);
        store.close(Page::UserManagement);

        assert!(!store.is_open(Page::UserManagement));
        assert!(store.is_open(Page::ReportGeneration));
    }

    #[test]
    fn close_all_keeps_advanced_user_management() {
        let mut store = NavigationStore::from_state(NavigationState::all_open());
        store.close_all_pages();

        assert!(Page::ALL.iter().all(|page| !store.is_open(*page)));
        assert!(store.advanced_user_management_visible());
        assert_eq!(
            store.state(),
            NavigationState {
                show_advanced_user_management: true,
                ..NavigationState::default()
            }
        );
    }
}
