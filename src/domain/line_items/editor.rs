use crate::domain::order::LineItem;

use super::errors::LineItemError;

// ============================================================================
// Line Item Editor - product list plus the modal sub-form that edits it
// ============================================================================
//
// States:
// - Closed: overlay hidden, no buffer
// - Creating: overlay open, confirm appends
// - Editing: overlay open, confirm replaces the item at `index`
//
// ============================================================================

/// Working copy of a line item while the overlay is open.
/// Units are kept as typed so the input can hold partial text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingBuffer {
    pub label: String,
    pub units: String,
}

impl EditingBuffer {
    /// Empty label, one unit
    pub fn fresh() -> Self {
        Self {
            label: String::new(),
            units: "1".to_string(),
        }
    }

    fn from_item(item: &LineItem) -> Self {
        Self {
            label: item.label.clone(),
            units: item.units.to_string(),
        }
    }

    fn to_item(&self) -> Result<LineItem, LineItemError> {
        match self.units.trim().parse::<u32>() {
            Ok(units) if units >= 1 => Ok(LineItem::new(self.label.clone(), units)),
            _ => Err(LineItemError::InvalidUnits(self.units.clone())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    Creating(EditingBuffer),
    Editing { index: usize, buffer: EditingBuffer },
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditorState::Closed)
    }

    pub fn buffer(&self) -> Option<&EditingBuffer> {
        match self {
            EditorState::Closed => None,
            EditorState::Creating(buffer) => Some(buffer),
            EditorState::Editing { buffer, .. } => Some(buffer),
        }
    }

    fn buffer_mut(&mut self) -> Option<&mut EditingBuffer> {
        match self {
            EditorState::Closed => None,
            EditorState::Creating(buffer) => Some(buffer),
            EditorState::Editing { buffer, .. } => Some(buffer),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LineItemEditor {
    items: Vec<LineItem>,
    state: EditorState,
}

impl LineItemEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// "Add product": open with an empty buffer
    pub fn open_create(&mut self) {
        tracing::debug!("Opening product editor for a new item");
        self.state = EditorState::Creating(EditingBuffer::fresh());
    }

    /// "Edit": open seeded from the item at `index`
    pub fn open_edit(&mut self, index: usize) -> Result<(), LineItemError> {
        let item = self.items.get(index).ok_or(LineItemError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })?;

        tracing::debug!(index, "Opening product editor on existing item");
        self.state = EditorState::Editing {
            index,
            buffer: EditingBuffer::from_item(item),
        };
        Ok(())
    }

    /// "Delete": remove immediately, whatever the overlay is doing
    pub fn delete(&mut self, index: usize) -> Result<LineItem, LineItemError> {
        if index >= self.items.len() {
            return Err(LineItemError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let removed = self.items.remove(index);

        // Keep an open edit session pointing at the same logical item
        if let EditorState::Editing { index: editing, buffer } = &mut self.state {
            if *editing == index {
                let buffer = std::mem::replace(buffer, EditingBuffer::fresh());
                self.state = EditorState::Creating(buffer);
            } else if *editing > index {
                *editing -= 1;
            }
        }

        tracing::debug!(index, remaining = self.items.len(), "Deleted line item");
        Ok(removed)
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> Result<(), LineItemError> {
        let buffer = self.state.buffer_mut().ok_or(LineItemError::EditorClosed)?;
        buffer.label = label.into();
        Ok(())
    }

    pub fn set_units(&mut self, units: impl Into<String>) -> Result<(), LineItemError> {
        let buffer = self.state.buffer_mut().ok_or(LineItemError::EditorClosed)?;
        buffer.units = units.into();
        Ok(())
    }

    /// "Confirm": write the buffer back and close. Returns the index written.
    /// On invalid units the overlay stays open with its buffer intact.
    pub fn confirm(&mut self) -> Result<usize, LineItemError> {
        let written = match &self.state {
            EditorState::Closed => return Err(LineItemError::EditorClosed),
            EditorState::Creating(buffer) => {
                let item = buffer.to_item()?;
                self.items.push(item);
                self.items.len() - 1
            }
            EditorState::Editing { index, buffer } => {
                let item = buffer.to_item()?;
                let index = *index;
                let len = self.items.len();
                let slot = self
                    .items
                    .get_mut(index)
                    .ok_or(LineItemError::IndexOutOfRange { index, len })?;
                *slot = item;
                index
            }
        };

        tracing::debug!(index = written, "Confirmed line item");
        self.state = EditorState::Closed;
        Ok(written)
    }

    /// "Cancel": drop the buffer, list untouched
    pub fn cancel(&mut self) {
        self.state = EditorState::Closed;
    }

    /// Drop all items and close the overlay
    pub fn reset(&mut self) {
        self.items.clear();
        self.state = EditorState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with(items: &[(&str, u32)]) -> LineItemEditor {
        let mut editor = LineItemEditor::new();
        for (label, units) in items {
            editor.open_create();
            editor.set_label(*label).unwrap();
            editor.set_units(units.to_string()).unwrap();
            editor.confirm().unwrap();
        }
        editor
    }

    #[test]
    fn test_open_create_uses_fresh_buffer() {
        let mut editor = LineItemEditor::new();
        editor.open_create();

        assert_eq!(
            editor.state(),
            &EditorState::Creating(EditingBuffer {
                label: String::new(),
                units: "1".to_string(),
            })
        );
    }

    #[test]
    fn test_create_appends_one_entry_preserving_order() {
        let mut editor = editor_with(&[("Caja", 3), ("Sobre", 1)]);

        editor.open_create();
        editor.set_label("Bolsa").unwrap();
        editor.set_units("5").unwrap();
        let index = editor.confirm().unwrap();

        assert_eq!(index, 2);
        assert_eq!(
            editor.items(),
            &[
                LineItem::new("Caja", 3),
                LineItem::new("Sobre", 1),
                LineItem::new("Bolsa", 5),
            ]
        );
        assert!(!editor.is_open());
    }

    #[test]
    fn test_edit_replaces_only_that_index() {
        let mut editor = editor_with(&[("Caja", 3), ("Sobre", 1), ("Bolsa", 2)]);

        editor.open_edit(1).unwrap();
        assert_eq!(editor.state().buffer().unwrap().label, "Sobre");
        editor.set_label("Sobre grande").unwrap();
        editor.set_units("4").unwrap();
        assert_eq!(editor.confirm().unwrap(), 1);

        assert_eq!(
            editor.items(),
            &[
                LineItem::new("Caja", 3),
                LineItem::new("Sobre grande", 4),
                LineItem::new("Bolsa", 2),
            ]
        );
    }

    #[test]
    fn test_cancel_after_edit_leaves_list_unchanged() {
        let mut editor = editor_with(&[("Caja", 3), ("Sobre", 1)]);
        let before = editor.items().to_vec();

        editor.open_edit(0).unwrap();
        editor.set_label("Otra cosa").unwrap();
        editor.set_units("9").unwrap();
        editor.cancel();

        assert_eq!(editor.items(), before.as_slice());
        assert_eq!(editor.state(), &EditorState::Closed);
    }

    #[test]
    fn test_delete_shifts_following_entries() {
        let mut editor = editor_with(&[("a", 1), ("b", 2), ("c", 3)]);

        let removed = editor.delete(0).unwrap();

        assert_eq!(removed, LineItem::new("a", 1));
        assert_eq!(editor.items(), &[LineItem::new("b", 2), LineItem::new("c", 3)]);
    }

    #[test]
    fn test_delete_works_while_overlay_open() {
        let mut editor = editor_with(&[("a", 1), ("b", 2)]);
        editor.open_create();

        editor.delete(1).unwrap();

        assert_eq!(editor.items(), &[LineItem::new("a", 1)]);
        assert!(editor.is_open());
    }

    #[test]
    fn test_delete_before_edited_item_keeps_target() {
        let mut editor = editor_with(&[("a", 1), ("b", 2), ("c", 3)]);
        editor.open_edit(2).unwrap();

        editor.delete(0).unwrap();
        editor.set_units("7").unwrap();
        editor.confirm().unwrap();

        assert_eq!(editor.items(), &[LineItem::new("b", 2), LineItem::new("c", 7)]);
    }

    #[test]
    fn test_delete_of_edited_item_turns_session_into_create() {
        let mut editor = editor_with(&[("a", 1), ("b", 2)]);
        editor.open_edit(0).unwrap();

        editor.delete(0).unwrap();
        assert!(matches!(editor.state(), EditorState::Creating(b) if b.label == "a"));

        editor.confirm().unwrap();
        assert_eq!(editor.items(), &[LineItem::new("b", 2), LineItem::new("a", 1)]);
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let editor = editor_with(&[("Caja", 3), ("Caja", 3)]);
        assert_eq!(editor.items().len(), 2);
    }

    #[test]
    fn test_empty_label_is_accepted() {
        let mut editor = LineItemEditor::new();
        editor.open_create();
        editor.confirm().unwrap();

        assert_eq!(editor.items(), &[LineItem::new("", 1)]);
    }

    #[test]
    fn test_invalid_units_keep_overlay_open() {
        let mut editor = LineItemEditor::new();
        editor.open_create();
        editor.set_label("Caja").unwrap();

        for bad in ["", "abc", "0", "-2", "1.5"] {
            editor.set_units(bad).unwrap();
            assert_eq!(
                editor.confirm(),
                Err(LineItemError::InvalidUnits(bad.to_string()))
            );
        }

        assert!(editor.is_open());
        assert!(editor.items().is_empty());
    }

    #[test]
    fn test_out_of_range_index() {
        let mut editor = editor_with(&[("a", 1)]);

        assert_eq!(
            editor.open_edit(3),
            Err(LineItemError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(
            editor.delete(1),
            Err(LineItemError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_buffer_edits_require_open_overlay() {
        let mut editor = LineItemEditor::new();

        assert_eq!(editor.set_label("x"), Err(LineItemError::EditorClosed));
        assert_eq!(editor.set_units("2"), Err(LineItemError::EditorClosed));
        assert_eq!(editor.confirm(), Err(LineItemError::EditorClosed));
    }
}
