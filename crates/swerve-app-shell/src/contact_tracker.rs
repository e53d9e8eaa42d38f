//! Single-contact tracking for a registered container.
//!
//! The router follows exactly one contact at a time. This tracker remembers
//! which contact owns the active gesture so adapters can route its moves and
//! ignore any other finger that lands while it is down.

use swerve_foundation::ContactId;

/// Result of a contact trying to begin a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactClaim {
    /// No gesture was active; the contact now owns it.
    Claimed,
    /// The same contact went down again without an up; the stale gesture
    /// should be reset and the contact keeps ownership.
    Reclaimed,
    /// Another contact owns the active gesture; ignore this one.
    Busy(ContactId),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ContactTracker {
    active: Option<ContactId>,
}

impl ContactTracker {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn active(&self) -> Option<ContactId> {
        self.active
    }

    pub fn is_active(&self, contact: ContactId) -> bool {
        self.active == Some(contact)
    }

    pub fn claim(&mut self, contact: ContactId) -> ContactClaim {
        match self.active {
            None => {
                self.active = Some(contact);
                ContactClaim::Claimed
            }
            Some(active) if active == contact => ContactClaim::Reclaimed,
            Some(active) => ContactClaim::Busy(active),
        }
    }

    /// Hands ownership to `contact` unconditionally.
    ///
    /// Used when the host reports the previous owner is gone even though its
    /// end event never arrived.
    pub fn replace(&mut self, contact: ContactId) -> Option<ContactId> {
        self.active.replace(contact)
    }

    /// Releases `contact` if it owns the gesture. Returns whether it did.
    pub fn release(&mut self, contact: ContactId) -> bool {
        if self.is_active(contact) {
            self.active = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}
