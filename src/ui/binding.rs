//! Two-way binding between a form model and a custom input control.
//!
//! A control that implements [`ValueAccessor`] can be bound to any model
//! value: the model pushes values in with `write_value`, and the control
//! reports user edits back through the registered change callback.

/// Callback invoked with the control's new value after a user edit.
pub type ChangeFn<V> = Box<dyn Fn(V) + Send + Sync>;

/// Callback invoked when the control loses focus.
pub type TouchedFn = Box<dyn Fn() + Send + Sync>;

/// Adapter interface for two-way binding.
pub trait ValueAccessor<V> {
    /// Display a value coming from the model. Must not call the change
    /// callback.
    fn write_value(&mut self, value: V);

    /// Register the callback for user-originated changes.
    fn register_on_change(&mut self, callback: ChangeFn<V>);

    /// Register the callback for blur/touch events.
    fn register_on_touched(&mut self, callback: TouchedFn);

    fn set_disabled(&mut self, disabled: bool);
}

/// Labelled checkbox bound to a `bool`.
pub struct Checkbox {
    label: String,
    checked: bool,
    disabled: bool,
    on_change: Option<ChangeFn<bool>>,
    on_touched: Option<TouchedFn>,
}

impl Checkbox {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            checked: false,
            disabled: false,
            on_change: None,
            on_touched: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// User clicked the box. Ignored while disabled.
    ///
    /// Returns whether the value changed.
    pub fn toggle(&mut self) -> bool {
        if self.disabled {
            tracing::debug!(label = %self.label, "Toggle ignored, checkbox disabled");
            return false;
        }
        self.checked = !self.checked;
        if let Some(on_change) = &self.on_change {
            on_change(self.checked);
        }
        true
    }

    /// User moved focus away from the box.
    pub fn blur(&self) {
        if let Some(on_touched) = &self.on_touched {
            on_touched();
        }
    }

    /// One-line rendering, e.g. `[x] Check the box! (disabled)`.
    pub fn render(&self) -> String {
        let mark = if self.checked { "x" } else { " " };
        let suffix = if self.disabled { " (disabled)" } else { "" };
        format!("[{}] {}{}", mark, self.label, suffix)
    }
}

impl ValueAccessor<bool> for Checkbox {
    fn write_value(&mut self, value: bool) {
        self.checked = value;
    }

    fn register_on_change(&mut self, callback: ChangeFn<bool>) {
        self.on_change = Some(callback);
    }

    fn register_on_touched(&mut self, callback: TouchedFn) {
        self.on_touched = Some(callback);
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}
