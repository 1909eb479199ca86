//! Calendar domain models.
//!
//! Provides the data types exchanged between the host calendar and the
//! layout engine: minute-of-day intervals, events, blackout blocks,
//! resources, and the frames produced by layout.
//!
//! # Domain Mappings
//!
//! | u-calendar | Clinic | Gym | Salon |
//! |------------|--------|-----|-------|
//! | Resource | Therapist | Trainer | Stylist |
//! | Event | Appointment | Session | Booking |
//! | DisabledBlock | Lunch / Admin | Class Setup | Break |

mod disabled;
mod event;
mod frame;
mod interval;
mod resource;

pub use disabled::{DisabledBlock, DisabledInterval};
pub use event::{Event, EventMeta};
pub use frame::{ColumnSlot, Frame};
pub use interval::{overlaps, Interval, ItemId, Minutes, TimeSpan, Timed, MINUTES_IN_DAY};
pub use resource::{Resource, ResourceId};
