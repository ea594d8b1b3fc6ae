use serde::{Deserialize, Serialize};

/// Visibility and navigation state of the assistant panel.
///
/// All transitions are total, synchronous functions; there are no failure
/// modes. The snapshot is serializable so a shell can push it over IPC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelState {
  pub is_open: bool,
  pub referrer_path: Option<String>,
}

impl PanelState {
  /// A closed panel with no referrer.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn open(&mut self) {
    self.is_open = true;
  }

  pub fn close(&mut self) {
    self.is_open = false;
  }

  /// Flip open/closed, leaving the referrer untouched.
  pub fn toggle(&mut self) {
    self.is_open = !self.is_open;
  }

  /// Record which page referred the user into the panel, independent of
  /// whether it is open.
  pub fn set_referrer(&mut self, path: impl Into<String>) {
    self.referrer_path = Some(path.into());
  }

  pub fn clear_referrer(&mut self) {
    self.referrer_path = None;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_starts_closed_with_no_referrer() {
    let state = PanelState::new();
    assert!(!state.is_open);
    assert_eq!(state.referrer_path, None);
  }

  #[test]
  fn test_double_toggle_returns_to_closed() {
    let mut state = PanelState::new();
    state.set_referrer("/templates");
    state.toggle();
    assert!(state.is_open);
    state.toggle();
    assert!(!state.is_open);
    assert_eq!(state.referrer_path.as_deref(), Some("/templates"));
  }

  #[test]
  fn test_open_and_close_leave_referrer_alone() {
    let mut state = PanelState::new();
    state.set_referrer("/a");
    state.open();
    assert!(state.is_open);
    state.close();
    assert!(!state.is_open);
    assert_eq!(state.referrer_path.as_deref(), Some("/a"));
  }

  #[test]
  fn test_clear_referrer() {
    let mut state = PanelState::new();
    state.set_referrer("/a");
    state.clear_referrer();
    assert_eq!(state.referrer_path, None);
  }

  #[test]
  fn test_referrer_independent_of_visibility() {
    let mut state = PanelState::new();
    state.set_referrer("/b");
    assert!(!state.is_open);
  }
}
