pub mod dispatcher;
pub mod plan;
pub mod ramp;
pub mod service;

pub use crate::domain::model::{RampEvent, SetVolumeCall, TargetRef, TargetSnapshot};
pub use crate::domain::ports::{Clock, EventSink, StateRead, TargetResolver, VolumeApply};
pub use crate::utils::error::Result;
