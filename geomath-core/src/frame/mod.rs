//! Local East-Up-North tangent frames

mod tangent;

pub use tangent::{ecef_to_enu, enu_to_ecef, flip_handedness, LocalTangentFrame};
