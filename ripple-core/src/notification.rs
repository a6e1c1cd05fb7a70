// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RippleError;

/// A single signal delivered to an observer.
///
/// Useful wherever signals have to be stored or compared after the fact,
/// for instance when recording what an observable emitted.
#[derive(Debug, Clone)]
pub enum Notification<T> {
    /// A value
    Next(T),
    /// A terminal error
    Error(RippleError),
    /// Terminal completion
    Complete,
}

impl<T: PartialEq> PartialEq for Notification<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Notification::Next(a), Notification::Next(b)) => a == b,
            (Notification::Complete, Notification::Complete) => true,
            _ => false, // Errors are never equal
        }
    }
}

impl<T> Notification<T> {
    /// Returns `true` if this is a `Next`.
    pub const fn is_next(&self) -> bool {
        matches!(self, Notification::Next(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, Notification::Error(_))
    }

    /// Returns `true` for `Error` and `Complete`.
    pub const fn is_terminal(&self) -> bool {
        !self.is_next()
    }

    /// Converts from `Notification<T>` to `Option<T>`, discarding terminal signals.
    pub fn value(self) -> Option<T> {
        match self {
            Notification::Next(v) => Some(v),
            _ => None,
        }
    }

    /// Converts from `Notification<T>` to `Option<RippleError>`.
    pub fn err(self) -> Option<RippleError> {
        match self {
            Notification::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Maps a `Notification<T>` to `Notification<U>` by applying a function to the contained value.
    pub fn map<U, F>(self, f: F) -> Notification<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Notification::Next(v) => Notification::Next(f(v)),
            Notification::Error(e) => Notification::Error(e),
            Notification::Complete => Notification::Complete,
        }
    }
}

impl<T> From<T> for Notification<T> {
    fn from(value: T) -> Self {
        Notification::Next(value)
    }
}
