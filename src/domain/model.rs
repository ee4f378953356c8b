use crate::utils::error::{ReservationError, Result};

/// A single event with a fixed number of seats.
///
/// `reserved` never leaves `0..=capacity`; a rejected request leaves the
/// counts untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    capacity: u64,
    reserved: u64,
}

/// Seat counts at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventStatus {
    pub capacity: u64,
    pub reserved: u64,
    pub available: u64,
}

impl EventStatus {
    pub fn has_reservations(&self) -> bool {
        self.reserved > 0
    }
}

impl Event {
    pub fn new(capacity: u64) -> Result<Self> {
        Self::with_reserved(capacity, 0)
    }

    pub fn with_reserved(capacity: u64, reserved: u64) -> Result<Self> {
        if capacity == 0 {
            return Err(ReservationError::InvalidCapacity { value: 0 });
        }
        if reserved > capacity {
            return Err(ReservationError::ReservedOverCapacity { capacity, reserved });
        }
        Ok(Self { capacity, reserved })
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn reserved(&self) -> u64 {
        self.reserved
    }

    pub fn available(&self) -> u64 {
        self.capacity - self.reserved
    }

    pub fn status(&self) -> EventStatus {
        EventStatus {
            capacity: self.capacity,
            reserved: self.reserved,
            available: self.available(),
        }
    }

    pub fn ensure_can_reserve(&self) -> Result<()> {
        if self.available() == 0 {
            return Err(ReservationError::SoldOut);
        }
        Ok(())
    }

    pub fn ensure_can_cancel(&self) -> Result<()> {
        if self.reserved == 0 {
            return Err(ReservationError::NothingToCancel);
        }
        Ok(())
    }

    pub fn reserve(&mut self, seats: u64) -> Result<EventStatus> {
        self.ensure_can_reserve()?;
        if seats == 0 {
            return Err(ReservationError::NotPositive { value: 0 });
        }
        let available = self.available();
        if seats > available {
            return Err(ReservationError::ExceedsAvailable {
                requested: seats,
                available,
            });
        }

        self.reserved += seats;
        tracing::debug!(
            requested = seats,
            reserved = self.reserved,
            available = self.available(),
            "seats reserved"
        );
        Ok(self.status())
    }

    pub fn cancel(&mut self, seats: u64) -> Result<EventStatus> {
        self.ensure_can_cancel()?;
        if seats == 0 {
            return Err(ReservationError::NotPositive { value: 0 });
        }
        if seats > self.reserved {
            return Err(ReservationError::ExceedsReserved {
                requested: seats,
                reserved: self.reserved,
            });
        }

        self.reserved -= seats;
        tracing::debug!(
            requested = seats,
            reserved = self.reserved,
            available = self.available(),
            "reservation cancelled"
        );
        Ok(self.status())
    }
}
