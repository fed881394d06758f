//! Ownership registry for actively tweened properties.

use std::collections::HashSet;

use toasty_common::error::{ToastyError, ToastyResult};

/// Identifier of a host surface.
pub type SurfaceId = u64;

/// Tracks which `(surface, property)` pairs are owned by a running
/// tween. Starting a second tween on an owned pair is a reported
/// error, not undefined behavior.
#[derive(Debug, Default)]
pub struct ActiveTweens {
    claims: HashSet<(SurfaceId, String)>,
}

impl ActiveTweens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim exclusive ownership of a property on a surface.
    pub fn claim(&mut self, surface_id: SurfaceId, property: &str) -> ToastyResult<()> {
        if !self.claims.insert((surface_id, property.to_string())) {
            tracing::warn!(surface_id, property, "rejected tween on busy property");
            return Err(ToastyError::property_busy(surface_id, property));
        }
        Ok(())
    }

    /// Release a claim. Returns true if it was held.
    pub fn release(&mut self, surface_id: SurfaceId, property: &str) -> bool {
        self.claims.remove(&(surface_id, property.to_string()))
    }

    /// Whether a property is currently owned.
    pub fn is_claimed(&self, surface_id: SurfaceId, property: &str) -> bool {
        self.claims.contains(&(surface_id, property.to_string()))
    }

    /// Number of active claims.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}
