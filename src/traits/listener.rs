use glam::Vec3;

/// Observer of agent position changes.
///
/// Called synchronously from the movement update, once per frame in which
/// the resolved position actually changed.
pub trait MoveListener {
    fn on_move(&mut self, position: Vec3);
}

impl<F: FnMut(Vec3)> MoveListener for F {
    fn on_move(&mut self, position: Vec3) {
        self(position)
    }
}
