mod enums;
mod structs;

pub use enums::{EnumParseError, FitnessGoal, GymKind, Role};
pub use structs::{Gym, GymAvailability, Membership, User, UserProfile};
