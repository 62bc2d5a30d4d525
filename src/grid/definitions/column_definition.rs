// src/grid/definitions/column_definition.rs
use serde::{Deserialize, Serialize};

use super::column_kind::ColumnKind;

/// One selectable entry of a dropdown column. The stored form value is
/// `value`; `label` is only ever shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    /// Option whose label and underlying value are the same string.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        ChoiceOption {
            label: value.clone(),
            value,
        }
    }

    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        ChoiceOption {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Caller-supplied schema for one table column. Immutable once handed to the
/// grid; the renderer dispatches on `kind` per cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Accessor key into each row's payload and into the form state.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub kind: ColumnKind,
    #[serde(default)]
    pub required: bool,
    /// Initial column width in points. None lets the table size it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Choices for `Dropdown` columns; ignored elsewhere.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Obscure typed text (password style) with a local reveal toggle.
    #[serde(default)]
    pub masked: bool,
    /// Overrides the default blur-time "field is required" message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Glyph shown by `IconButton` columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Label shown by `Button` columns; falls back to the column title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_label: Option<String>,
}

impl ColumnDefinition {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: ColumnKind) -> Self {
        ColumnDefinition {
            id: id.into(),
            title: title.into(),
            kind,
            required: false,
            width: None,
            options: Vec::new(),
            tooltip: None,
            placeholder: None,
            masked: false,
            error_message: None,
            icon: None,
            button_label: None,
        }
    }

    pub fn text(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(id, title, ColumnKind::TextInput)
    }

    pub fn dropdown(
        id: impl Into<String>,
        title: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Self {
        let mut col = Self::new(id, title, ColumnKind::Dropdown);
        col.options = options;
        col
    }

    pub fn checkbox(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(id, title, ColumnKind::Checkbox)
    }

    pub fn button(
        id: impl Into<String>,
        title: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        let mut col = Self::new(id, title, ColumnKind::Button);
        col.button_label = Some(label.into());
        col
    }

    pub fn icon_button(
        id: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        let mut col = Self::new(id, title, ColumnKind::IconButton);
        col.icon = Some(icon.into());
        col
    }

    pub fn plain(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(id, title, ColumnKind::Plain)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }
}
