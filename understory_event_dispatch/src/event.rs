// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical event records: kinds, kind sets, and timestamps.
//!
//! Both delivery paths (the runtime subscription path and the legacy inline
//! handler path) produce a [`CanonicalEvent`] before anything is routed.
//!
//! ## Minimal example
//!
//! ```
//! use understory_event_dispatch::event::{EventKind, EventKinds};
//!
//! let kind: EventKind = "keyup".parse().unwrap();
//! assert_eq!(kind, EventKind::KeyUp);
//!
//! let kinds = EventKinds::parse_list("click  change\tkeyup").unwrap();
//! assert!(kinds.contains_kind(EventKind::Change));
//! assert!(!kinds.contains_kind(EventKind::FocusIn));
//! ```

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseEventKindError;

/// Key code reported by host runtimes for the Enter/Return key.
pub const ENTER_KEY_CODE: u32 = 13;

/// The kinds of interaction event the dispatcher routes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Primary activation (tap or click).
    Click,
    /// The element's value was changed by the user.
    Change,
    /// A key was released while the element had focus.
    KeyUp,
    /// The element gained focus.
    FocusIn,
    /// The element lost focus.
    FocusOut,
    /// The device orientation changed. Device-scoped, not view-scoped.
    OrientationChange,
}

impl EventKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Click,
        Self::Change,
        Self::KeyUp,
        Self::FocusIn,
        Self::FocusOut,
        Self::OrientationChange,
    ];

    /// The host runtime's name for this kind, e.g. `"focusin"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Change => "change",
            Self::KeyUp => "keyup",
            Self::FocusIn => "focusin",
            Self::FocusOut => "focusout",
            Self::OrientationChange => "orientationchange",
        }
    }

    /// Returns `true` for kinds that are addressed to a single view.
    ///
    /// Only [`EventKind::OrientationChange`] is device-scoped.
    pub const fn is_view_scoped(self) -> bool {
        !matches!(self, Self::OrientationChange)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = ParseEventKindError;

    /// Parse a kind name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseEventKindError::Empty);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEventKindError::Unknown(s.to_string()))
    }
}

bitflags::bitflags! {
    /// A set of event kinds, as bound for one view by a subscription.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventKinds: u8 {
        /// [`EventKind::Click`].
        const CLICK              = 0b0000_0001;
        /// [`EventKind::Change`].
        const CHANGE             = 0b0000_0010;
        /// [`EventKind::KeyUp`].
        const KEY_UP             = 0b0000_0100;
        /// [`EventKind::FocusIn`].
        const FOCUS_IN           = 0b0000_1000;
        /// [`EventKind::FocusOut`].
        const FOCUS_OUT          = 0b0001_0000;
        /// [`EventKind::OrientationChange`].
        const ORIENTATION_CHANGE = 0b0010_0000;
    }
}

impl EventKinds {
    /// Parse a whitespace-separated list of kind names, e.g. `"click keyup"`.
    ///
    /// An empty or blank list yields an empty set. Duplicate names are fine.
    pub fn parse_list(list: &str) -> Result<Self, ParseEventKindError> {
        let mut kinds = Self::empty();
        for name in list.split_ascii_whitespace() {
            kinds |= Self::from(name.parse::<EventKind>()?);
        }
        Ok(kinds)
    }

    /// Returns `true` if `kind` is in the set.
    pub fn contains_kind(self, kind: EventKind) -> bool {
        self.contains(kind.into())
    }

    /// Iterate the kinds in the set, in [`EventKind::ALL`] order.
    pub fn kinds(self) -> impl Iterator<Item = EventKind> {
        EventKind::ALL
            .into_iter()
            .filter(move |kind| self.contains_kind(*kind))
    }
}

impl From<EventKind> for EventKinds {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Click => Self::CLICK,
            EventKind::Change => Self::CHANGE,
            EventKind::KeyUp => Self::KEY_UP,
            EventKind::FocusIn => Self::FOCUS_IN,
            EventKind::FocusOut => Self::FOCUS_OUT,
            EventKind::OrientationChange => Self::ORIENTATION_CHANGE,
        }
    }
}

/// A point in time with millisecond resolution.
///
/// The origin is defined by the [`Clock`](crate::clock::Clock) that produced it;
/// only differences between timestamps from the same clock are meaningful.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Construct a timestamp from milliseconds since the clock's origin.
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the clock's origin.
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Absolute distance to `other`, in milliseconds.
    pub const fn millis_between(self, other: Self) -> u64 {
        self.0.abs_diff(other.0)
    }
}

/// A normalized event, produced per delivery and discarded after dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalEvent<K> {
    /// What happened.
    pub kind: EventKind,
    /// The originating view. `None` for device-scoped events, or when the
    /// runtime reported no target.
    pub view_id: Option<K>,
    /// The key code, meaningful only for [`EventKind::KeyUp`].
    pub key_code: Option<u32>,
    /// When the event was normalized.
    pub timestamp: Timestamp,
}

impl<K> CanonicalEvent<K> {
    /// Build an event addressed to `view_id`.
    pub fn new(kind: EventKind, view_id: K, timestamp: Timestamp) -> Self {
        Self {
            kind,
            view_id: Some(view_id),
            key_code: None,
            timestamp,
        }
    }

    /// Build a device-scoped orientation change event.
    pub fn orientation_change(timestamp: Timestamp) -> Self {
        Self {
            kind: EventKind::OrientationChange,
            view_id: None,
            key_code: None,
            timestamp,
        }
    }

    /// Attach a key code.
    #[must_use]
    pub fn with_key_code(mut self, key_code: u32) -> Self {
        self.key_code = Some(key_code);
        self
    }

    /// Returns `true` if this is a key event for the Enter key.
    pub fn is_enter(&self) -> bool {
        self.key_code == Some(ENTER_KEY_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;

    #[test]
    fn kind_names_round_trip_through_from_str() {
        for kind in EventKind::ALL {
            assert_eq!(kind.as_str().parse::<EventKind>(), Ok(kind));
        }
    }

    #[test]
    fn kind_parsing_ignores_ascii_case() {
        assert_eq!(
            "orientationChange".parse::<EventKind>(),
            Ok(EventKind::OrientationChange)
        );
        assert_eq!("KeyUp".parse::<EventKind>(), Ok(EventKind::KeyUp));
    }

    #[test]
    fn unknown_and_empty_kind_names_are_errors() {
        assert_eq!(
            "dblclick".parse::<EventKind>(),
            Err(ParseEventKindError::Unknown(String::from("dblclick")))
        );
        assert_eq!("".parse::<EventKind>(), Err(ParseEventKindError::Empty));
    }

    #[test]
    fn only_orientation_change_is_device_scoped() {
        let device: Vec<_> = EventKind::ALL
            .into_iter()
            .filter(|k| !k.is_view_scoped())
            .collect();
        assert_eq!(device, [EventKind::OrientationChange]);
    }

    #[test]
    fn parse_list_splits_on_any_whitespace() {
        let kinds = EventKinds::parse_list(" click\nfocusin  focusout ").unwrap();
        assert_eq!(
            kinds,
            EventKinds::CLICK | EventKinds::FOCUS_IN | EventKinds::FOCUS_OUT
        );
        assert_eq!(
            kinds.kinds().collect::<Vec<_>>(),
            [EventKind::Click, EventKind::FocusIn, EventKind::FocusOut]
        );
    }

    #[test]
    fn parse_list_of_blank_string_is_empty() {
        assert_eq!(EventKinds::parse_list("   "), Ok(EventKinds::empty()));
    }

    #[test]
    fn parse_list_rejects_the_first_unknown_name() {
        assert_eq!(
            EventKinds::parse_list("click tap swipe"),
            Err(ParseEventKindError::Unknown(String::from("tap")))
        );
    }

    #[test]
    fn millis_between_is_symmetric() {
        let a = Timestamp::from_millis(1_000);
        let b = Timestamp::from_millis(1_150);
        assert_eq!(a.millis_between(b), 150);
        assert_eq!(b.millis_between(a), 150);
    }

    #[test]
    fn enter_detection_uses_key_code() {
        let key_up = CanonicalEvent::new(EventKind::KeyUp, 1_u32, Timestamp::from_millis(0));
        assert!(key_up.clone().with_key_code(ENTER_KEY_CODE).is_enter());
        assert!(!key_up.clone().with_key_code(65).is_enter());
        assert!(!key_up.is_enter());
    }
}
