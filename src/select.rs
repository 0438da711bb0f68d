use crate::consts::PLACEHOLDER_INDEX;
use crate::types::SelectOption;

/// A dropdown control: an ordered list of options plus at most one selected index.
///
/// Hosts implement this over whatever widget they render; [`SelectControl`] is
/// the in-memory implementation.
pub trait Select {
    fn options(&self) -> &[SelectOption];

    /// Appends an option. Never changes the selection.
    fn push_option(&mut self, option: SelectOption);

    /// Drops every option at or after `len`.
    ///
    /// If the selected option is removed, the selection falls back to index 0,
    /// or to nothing when the list becomes empty.
    fn truncate(&mut self, len: usize);

    fn selected_index(&self) -> Option<usize>;

    /// Selects `index`; out-of-range indices clear the selection.
    fn select_index(&mut self, index: Option<usize>);

    fn len(&self) -> usize {
        self.options().len()
    }

    fn is_empty(&self) -> bool {
        self.options().is_empty()
    }

    /// Value of the selected option. `None` if nothing or the placeholder is selected.
    fn selected_value(&self) -> Option<i32> {
        self.selected_index()
            .and_then(|index| self.options().get(index))
            .and_then(|option| option.value)
    }

    /// Selects the first option carrying `value`. Returns `false` and clears
    /// the selection when no option matches.
    fn set_value(&mut self, value: i32) -> bool {
        let index = self
            .options()
            .iter()
            .position(|option| option.value == Some(value));
        self.select_index(index);
        index.is_some()
    }

    /// Number of non-placeholder options
    fn data_len(&self) -> usize {
        self.options()
            .iter()
            .filter(|option| !option.is_placeholder())
            .count()
    }

    /// Values of the non-placeholder options, in list order
    fn data_values(&self) -> Vec<i32> {
        self.options()
            .iter()
            .filter_map(|option| option.value)
            .collect()
    }
}

/// In-memory dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectControl {
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

impl SelectControl {
    /// An empty control with no placeholder.
    pub const fn new() -> Self {
        Self {
            options: Vec::new(),
            selected: None,
        }
    }

    /// A control whose only option is a selected placeholder.
    pub fn with_placeholder(label: impl Into<String>) -> Self {
        Self {
            options: vec![SelectOption::placeholder(label)],
            selected: Some(PLACEHOLDER_INDEX),
        }
    }
}

impl Select for SelectControl {
    fn options(&self) -> &[SelectOption] {
        &self.options
    }

    fn push_option(&mut self, option: SelectOption) {
        self.options.push(option);
    }

    fn truncate(&mut self, len: usize) {
        self.options.truncate(len);
        if self.selected.is_some_and(|index| index >= len) {
            self.selected = if self.options.is_empty() {
                None
            } else {
                Some(PLACEHOLDER_INDEX)
            };
        }
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select_index(&mut self, index: Option<usize>) {
        self.selected = index.filter(|i| *i < self.options.len());
    }
}
