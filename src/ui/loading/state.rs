//! Presentation state for an async fetch.

use crate::ui::mvi::UiState;

/// The three fields a view needs to present a fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingView<T> {
    /// A fetch is in flight.
    pub is_loading: bool,
    /// User-facing failure message. Empty means no error.
    pub error_text: String,
    /// Last successfully fetched value. Survives later failures.
    pub data: Option<T>,
}

impl<T> Default for LoadingView<T> {
    fn default() -> Self {
        Self {
            is_loading: false,
            error_text: String::new(),
            data: None,
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for LoadingView<T> {}

/// Logical state derived from the three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase<'a, T> {
    Idle,
    Loading,
    Error(&'a str),
    Loaded(&'a T),
}

impl<T> LoadingView<T> {
    pub fn phase(&self) -> LoadingPhase<'_, T> {
        if self.is_loading {
            LoadingPhase::Loading
        } else if !self.error_text.is_empty() {
            LoadingPhase::Error(&self.error_text)
        } else if let Some(data) = &self.data {
            LoadingPhase::Loaded(data)
        } else {
            LoadingPhase::Idle
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error_text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let view: LoadingView<String> = LoadingView::default();
        assert_eq!(view.phase(), LoadingPhase::Idle);
        assert!(!view.has_error());
    }

    #[test]
    fn loading_wins_over_stale_data() {
        let view = LoadingView {
            is_loading: true,
            error_text: String::new(),
            data: Some(1),
        };
        assert_eq!(view.phase(), LoadingPhase::Loading);
    }

    #[test]
    fn error_wins_over_stale_data() {
        let view = LoadingView {
            is_loading: false,
            error_text: "nope".to_string(),
            data: Some(1),
        };
        assert_eq!(view.phase(), LoadingPhase::Error("nope"));
    }

    #[test]
    fn data_without_error_is_loaded() {
        let view = LoadingView {
            is_loading: false,
            error_text: String::new(),
            data: Some(7),
        };
        assert_eq!(view.phase(), LoadingPhase::Loaded(&7));
    }
}
