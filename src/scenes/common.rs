use crate::obstacle::ObstacleSpec;

/// Block of the given footprint and height resting on the ground at `(x, z)`.
pub fn block(x: f32, z: f32, width: f32, height: f32, depth: f32, color: &str) -> ObstacleSpec {
    ObstacleSpec::new([x, height * 0.5, z], [width, height, depth], color)
}
