//! Joint trajectories of the two agents and their text encoding

pub mod codec;
pub mod joint;

pub use codec::{encode_path, parse_path};
pub use joint::{CollisionLabel, JointStep, LabeledTrajectory, Trajectory};
