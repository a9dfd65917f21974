#![forbid(unsafe_code)]

//! Edit validation: accept, trim, or roll back.
//!
//! The native field is the live editable buffer, so by the time the widget
//! sees an edit the platform has already applied it. Validation therefore
//! works backwards: given the last accepted text and the field's proposed
//! new value, either accept the proposal (possibly after trimming trailing
//! whitespace from offending lines), or instruct the caller to restore the
//! field to the last valid state.
//!
//! # Invariants
//!
//! - An edit is atomic: the full proposal is accepted (as-is or trimmed) or
//!   the full proposal is rejected. Never partially applied.
//! - The line-count constraint is resolved before per-line length; a
//!   line-count rejection rejects the edit without re-checking lengths.
//! - Only trailing whitespace is ever removed. Accepted text always
//!   satisfies the active constraints.
//! - Selection offsets are Unicode scalar values, matching the platform
//!   selection API.

use imdom_core::{PlatformField, Selection};

/// Text-shape limits for one edit box. Zero means unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constraints {
    /// Maximum number of lines; `0` = single-line semantics, no line limit.
    pub max_lines: u32,
    /// Maximum length of any one line, in scalar values; `0` = unlimited.
    pub max_len: u32,
}

impl Constraints {
    /// Whether any limit is configured (and listeners are worth installing).
    #[must_use]
    pub const fn any_active(&self) -> bool {
        self.max_lines > 0 || self.max_len > 0
    }
}

/// Result of validating one proposed edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Proposal equals the current text; refresh the stored selection from
    /// the field, touch nothing else.
    Unchanged,
    /// Proposal accepted, possibly trimmed. `text` becomes the new current
    /// text; `selection` is the remapped range to write back if the text
    /// was modified.
    Accept {
        /// The accepted (possibly trimmed) text.
        text: String,
        /// Selection remapped across any removed characters.
        selection: Selection,
    },
    /// Trimming cannot reach compliance; restore the field to the current
    /// text and the last valid selection.
    Reject,
}

/// Last accepted state of an edit box: the authoritative text plus the
/// selection to restore on rollback.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ValidState {
    pub text: String,
    pub last_valid: Selection,
}

fn char_count(s: &str) -> usize {
    s.chars().count()
}

fn line_count(s: &str) -> usize {
    s.split('\n').count()
}

/// Validate `proposed` against `current` under `constraints`.
///
/// `selection` is the field's selection after the platform applied the edit;
/// the returned selection tracks it across trimming (characters removed
/// before the selection shift it left; characters removed under the caret
/// clamp it to the new line end).
#[must_use]
pub fn validate_edit(
    current: &str,
    proposed: &str,
    selection: Selection,
    constraints: &Constraints,
) -> EditOutcome {
    if proposed == current {
        return EditOutcome::Unchanged;
    }

    let mut text = proposed.to_owned();
    let mut sel = selection;
    let max_lines = constraints.max_lines as usize;
    let max_len = constraints.max_len as usize;

    // Line-count limit first. Resolved wholly before length is considered;
    // an unresolvable violation rejects the edit as a unit.
    if max_lines > 0 && line_count(&text) > max_lines {
        if line_count(text.trim_end()) > max_lines {
            return EditOutcome::Reject;
        }
        while line_count(&text) > max_lines {
            match text.chars().next_back() {
                Some(ch) if ch.is_whitespace() => {
                    text.pop();
                }
                // Unreachable: the trim_end precheck guarantees enough
                // trailing whitespace to reach the limit.
                _ => return EditOutcome::Reject,
            }
        }
        sel = sel.clamp(char_count(&text));
    }

    // Per-line length limit, offending lines processed in order. Each trim
    // adjusts the running text, so later line-end offsets already account
    // for earlier removals.
    if max_len > 0 {
        let mut lines: Vec<String> = if max_lines > 0 {
            text.split('\n').map(str::to_owned).collect()
        } else {
            vec![text.clone()]
        };
        for ii in 0..lines.len() {
            if char_count(&lines[ii]) <= max_len {
                continue;
            }
            let trimmed = lines[ii].trim_end().to_owned();
            if char_count(&trimmed) > max_len {
                return EditOutcome::Reject;
            }
            let line_end = |lines: &[String], ii: usize| -> usize {
                lines[..=ii].iter().map(|l| char_count(l)).sum::<usize>() + ii
            };
            let old_line_end = line_end(&lines, ii);
            lines[ii] = trimmed;
            let new_line_end = line_end(&lines, ii);
            let shift = old_line_end - new_line_end;
            if sel.start > old_line_end {
                sel.start -= shift;
            } else if sel.start > new_line_end {
                sel.start = new_line_end;
            }
            if sel.end >= old_line_end {
                sel.end -= shift;
            } else if sel.end > new_line_end {
                sel.end = new_line_end;
            }
        }
        text = lines.join("\n");
    }

    sel = sel.clamp(char_count(&text));
    EditOutcome::Accept {
        text,
        selection: sel,
    }
}

/// Reconcile a bound field against `state`: the single validation entry
/// point, used both from the per-tick sync and from the keystroke listener.
pub(crate) fn sync_field(
    state: &mut ValidState,
    constraints: &Constraints,
    field: &mut dyn PlatformField,
) {
    let proposed = field.value();
    let field_sel = field.selection();
    match validate_edit(&state.text, &proposed, field_sel, constraints) {
        EditOutcome::Unchanged => {
            state.last_valid = field_sel;
        }
        EditOutcome::Accept { text, selection } => {
            if text != proposed {
                field.set_value(&text);
                field.set_selection(selection);
            }
            state.text = text;
            state.last_valid = field.selection();
        }
        EditOutcome::Reject => {
            field.set_value(&state.text);
            field.set_selection(state.last_valid);
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
