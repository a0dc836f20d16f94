//! Core traits
//!
//! Two seams: classification categories share a small presentation
//! interface, and reading sources (live device, synthetic generator) plug
//! into the monitor through `ReadingSource`.

use alloc::boxed::Box;
use core::fmt::Display;

use crate::reading::DeviceReading;

/// A discrete classification band with a dashboard badge
pub trait Category: Copy {
    /// Short label, e.g. "Comfortable"
    fn label(&self) -> &'static str;

    /// Badge shown next to the label
    fn icon(&self) -> &'static str;
}

/// Anything that can produce a fresh device reading
///
/// Implementations must bound their own latency (network sources carry a
/// timeout) and report failures through `Err` rather than panicking; the
/// monitor turns the error into a non-fatal banner.
pub trait ReadingSource {
    /// Failure description, rendered into the connection banner
    type Error: Display;

    /// Fetch one reading
    fn fetch(&mut self) -> Result<DeviceReading, Self::Error>;

    /// Human-readable name of the source
    fn describe(&self) -> &str;
}

impl<S: ReadingSource + ?Sized> ReadingSource for Box<S> {
    type Error = S::Error;

    fn fetch(&mut self) -> Result<DeviceReading, Self::Error> {
        (**self).fetch()
    }

    fn describe(&self) -> &str {
        (**self).describe()
    }
}
