//! Host-surface abstraction.
//!
//! The engine never touches a real document tree or window system; it
//! talks to a [`Surface`] the host provides. Attachment state is the
//! single source of truth for effect visibility.

use toasty_common::error::{ToastyError, ToastyResult};
use toasty_effect_model::value::StyleValue;
use toasty_tween_engine::registry::SurfaceId;

/// A visual surface the effect image lives on.
pub trait Surface {
    /// Stable identifier, used to key active-tween ownership.
    fn id(&self) -> SurfaceId;

    /// Attach the surface to its host. Attaching an attached surface
    /// is an error.
    fn attach(&mut self) -> ToastyResult<()>;

    /// Detach the surface from its host. Detaching a detached surface
    /// is an error.
    fn detach(&mut self) -> ToastyResult<()>;

    /// Whether the surface is currently attached to its host.
    fn is_attached(&self) -> bool;

    /// Write a style property. Styling works whether or not the
    /// surface is attached (positioning happens before attach).
    fn set_style(&mut self, property: &str, value: &StyleValue) -> ToastyResult<()>;
}

/// In-memory surface that records every interaction — the test double
/// for hosts, and a reference for implementing the trait.
#[derive(Debug)]
pub struct RecordingSurface {
    id: SurfaceId,
    attached: bool,
    writes: Vec<(String, StyleValue)>,
    attach_count: u32,
    detach_count: u32,
}

impl RecordingSurface {
    pub fn new(id: SurfaceId) -> Self {
        Self {
            id,
            attached: false,
            writes: Vec::new(),
            attach_count: 0,
            detach_count: 0,
        }
    }

    /// All style writes, in order.
    pub fn writes(&self) -> &[(String, StyleValue)] {
        &self.writes
    }

    /// The most recent style write, if any.
    pub fn last_write(&self) -> Option<&(String, StyleValue)> {
        self.writes.last()
    }

    pub fn attach_count(&self) -> u32 {
        self.attach_count
    }

    pub fn detach_count(&self) -> u32 {
        self.detach_count
    }

    /// Simulate the host ripping the surface out from underneath the
    /// effect (external detach, not counted as an engine detach).
    pub fn force_detach(&mut self) {
        self.attached = false;
    }
}

impl Surface for RecordingSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn attach(&mut self) -> ToastyResult<()> {
        if self.attached {
            return Err(ToastyError::surface("surface is already attached"));
        }
        self.attached = true;
        self.attach_count += 1;
        Ok(())
    }

    fn detach(&mut self) -> ToastyResult<()> {
        if !self.attached {
            return Err(ToastyError::surface("surface is not attached"));
        }
        self.attached = false;
        self.detach_count += 1;
        Ok(())
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn set_style(&mut self, property: &str, value: &StyleValue) -> ToastyResult<()> {
        self.writes.push((property.to_string(), value.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_detach_lifecycle() {
        let mut surface = RecordingSurface::new(1);
        assert!(!surface.is_attached());
        surface.attach().unwrap();
        assert!(surface.is_attached());
        assert!(surface.attach().is_err());
        surface.detach().unwrap();
        assert!(surface.detach().is_err());
    }

    #[test]
    fn test_writes_recorded_in_order() {
        let mut surface = RecordingSurface::new(1);
        surface.set_style("right", &StyleValue::px(-150.0)).unwrap();
        surface.set_style("right", &StyleValue::px(0.0)).unwrap();
        assert_eq!(surface.writes().len(), 2);
        assert_eq!(surface.last_write().unwrap().1, StyleValue::px(0.0));
    }

    #[test]
    fn test_force_detach_is_not_counted() {
        let mut surface = RecordingSurface::new(1);
        surface.attach().unwrap();
        surface.force_detach();
        assert!(!surface.is_attached());
        assert_eq!(surface.detach_count(), 0);
    }
}
