// Entity Models
//
// Each menu entity has:
// - Stable identity (UUID) that NEVER changes
// - Values fixed at creation (no update in place)

pub mod menu_item;

pub use menu_item::{Course, Intensity, IntensityScale, ItemId, MenuItem, ParseCourseError};
