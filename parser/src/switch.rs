//! Deferred transfer syntax switches.
//!
//! The file meta group is always explicit VR little endian.
//! A transfer syntax which changes the encoding only takes effect
//! at the first element outside group 0002,
//! so the switch is requested when the UID is read
//! and applied one element later.

use dcmstream_core::Tag;
use dcmstream_encoding::TransferSyntaxAction;

/// State of the encoding switch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxSwitch {
    /// No switch requested.
    #[default]
    Normal,
    /// Switch to big endian at the next non-meta element.
    SwitchPendingEndian,
    /// Switch to implicit VR at the next non-meta element.
    SwitchPendingVR,
}

/// A switch which has just been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    ToBigEndian,
    ToImplicitVr,
}

impl SyntaxSwitch {
    /// Record the effect of a transfer syntax.
    /// Actions which do not change the encoding leave the state as is.
    pub fn request(&mut self, action: TransferSyntaxAction) {
        match action {
            TransferSyntaxAction::SwitchToBigEndian => *self = SyntaxSwitch::SwitchPendingEndian,
            TransferSyntaxAction::SwitchToImplicitVr => *self = SyntaxSwitch::SwitchPendingVR,
            _ => {}
        }
    }

    /// Observe the group of the element just read.
    ///
    /// Returns the switch to apply if one was pending
    /// and the element is outside the file meta group.
    /// The state returns to `Normal` once a switch is applied.
    ///
    /// ```
    /// # use dcmstream_parser::switch::{Applied, SyntaxSwitch};
    /// let mut switch = SyntaxSwitch::SwitchPendingVR;
    /// assert_eq!(switch.on_element(0x0002), None);
    /// assert_eq!(switch.on_element(0x0008), Some(Applied::ToImplicitVr));
    /// assert_eq!(switch, SyntaxSwitch::Normal);
    /// ```
    pub fn on_element(&mut self, group: u16) -> Option<Applied> {
        if group == Tag::META_GROUP {
            return None;
        }
        let applied = match *self {
            SyntaxSwitch::Normal => return None,
            SyntaxSwitch::SwitchPendingEndian => Applied::ToBigEndian,
            SyntaxSwitch::SwitchPendingVR => Applied::ToImplicitVr,
        };
        *self = SyntaxSwitch::Normal;
        Some(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmstream_core::CompressionScheme;

    #[test]
    fn switch_waits_for_the_meta_group_to_end() {
        let mut switch = SyntaxSwitch::default();
        switch.request(TransferSyntaxAction::SwitchToBigEndian);
        assert_eq!(switch, SyntaxSwitch::SwitchPendingEndian);
        assert_eq!(switch.on_element(0x0002), None);
        assert_eq!(switch.on_element(0x0002), None);
        assert_eq!(switch, SyntaxSwitch::SwitchPendingEndian);
        assert_eq!(switch.on_element(0x0800), Some(Applied::ToBigEndian));
        assert_eq!(switch, SyntaxSwitch::Normal);
        assert_eq!(switch.on_element(0x0010), None);
    }

    #[test]
    fn non_switching_actions_are_ignored() {
        let mut switch = SyntaxSwitch::default();
        switch.request(TransferSyntaxAction::Native);
        switch.request(TransferSyntaxAction::Compressed(CompressionScheme::Rle));
        switch.request(TransferSyntaxAction::Unsupported);
        assert_eq!(switch, SyntaxSwitch::Normal);
        assert_eq!(switch.on_element(0x0008), None);
    }
}
