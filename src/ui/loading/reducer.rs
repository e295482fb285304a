//! Transitions for [`LoadingView`].

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::LoadingIntent;
use super::state::LoadingView;

pub struct LoadingReducer<T>(PhantomData<fn() -> T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for LoadingReducer<T> {
    type State = LoadingView<T>;
    type Intent = LoadingIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Error text is cleared when a retry starts, not when it ends.
            LoadingIntent::Start => LoadingView {
                is_loading: true,
                error_text: String::new(),
                data: state.data,
            },

            LoadingIntent::Succeeded(data) => LoadingView {
                is_loading: false,
                error_text: String::new(),
                data: Some(data),
            },

            LoadingIntent::Failed { message } => LoadingView {
                is_loading: false,
                error_text: message,
                data: state.data,
            },

            LoadingIntent::Settled => LoadingView {
                is_loading: false,
                ..state
            },
        }
    }
}
