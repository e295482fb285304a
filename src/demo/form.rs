//! Two checkboxes bound to one form model; the second disables the first.

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use crate::ui::binding::{Checkbox, ValueAccessor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No checkbox number {0}; use 1 or 2")]
pub struct NoSuchCheckbox(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormModel {
    pub is_checked: bool,
    pub is_disabled: bool,
}

pub struct CheckboxForm {
    model: Arc<Mutex<FormModel>>,
    primary: Checkbox,
    disabler: Checkbox,
}

impl CheckboxForm {
    pub fn new() -> Self {
        let model = Arc::new(Mutex::new(FormModel {
            is_checked: true,
            is_disabled: true,
        }));

        let mut primary = Checkbox::new("Check the box!");
        let sink = Arc::clone(&model);
        primary.register_on_change(Box::new(move |value| sink.lock().is_checked = value));

        let mut disabler = Checkbox::new("Disable the other checkbox");
        let sink = Arc::clone(&model);
        disabler.register_on_change(Box::new(move |value| sink.lock().is_disabled = value));

        let mut form = Self {
            model,
            primary,
            disabler,
        };
        form.sync_from_model();
        form
    }

    pub fn model(&self) -> FormModel {
        *self.model.lock()
    }

    /// Simulate a click on checkbox 1 or 2. Returns whether the value changed.
    pub fn toggle(&mut self, index: usize) -> Result<bool, NoSuchCheckbox> {
        let changed = match index {
            1 => self.primary.toggle(),
            2 => self.disabler.toggle(),
            other => return Err(NoSuchCheckbox(other)),
        };
        self.sync_from_model();
        Ok(changed)
    }

    /// Push model values into the controls.
    fn sync_from_model(&mut self) {
        let model = *self.model.lock();
        self.primary.write_value(model.is_checked);
        self.primary.set_disabled(model.is_disabled);
        self.disabler.write_value(model.is_disabled);
    }

    pub fn render(&self) -> String {
        let model = self.model();
        format!(
            "1 {}\nThe checkbox is {} and is {}.\n---\n2 {}",
            self.primary.render(),
            if model.is_checked { "checked" } else { "unchecked" },
            if model.is_disabled { "disabled" } else { "enabled" },
            self.disabler.render(),
        )
    }
}

impl Default for CheckboxForm {
    fn default() -> Self {
        Self::new()
    }
}
