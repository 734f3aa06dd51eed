pub mod event;
pub mod foot;
pub mod frame;
pub mod run;

pub use event::{clamp_index, time_at, ContactEvent, HeelPoint, Region, Span};
pub use foot::{parity_split, Foot, FootPair, FootSide};
pub use frame::{Frame, Recording};
pub use run::Run;
