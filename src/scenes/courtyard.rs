use super::common::block;
use crate::obstacle::ObstacleSpec;

/// Walls and pillars around an open center where the agent spawns.
pub fn create_courtyard_layout() -> Vec<ObstacleSpec> {
    vec![
        // North wall with a gap on the east side
        block(-3.0, -9.0, 10.0, 2.0, 1.0, "#ef4444"),
        block(6.5, -9.0, 3.0, 2.0, 1.0, "#ef4444"),
        // West wall
        block(-9.0, 0.0, 1.0, 1.5, 12.0, "#3b82f6"),
        // Pillars
        block(5.0, 4.0, 2.0, 3.0, 2.0, "#f59e0b"),
        block(-4.0, 6.0, 1.5, 2.5, 1.5, "#10b981"),
        block(0.0, -5.0, 2.0, 1.0, 2.0, "#a855f7"),
    ]
}
