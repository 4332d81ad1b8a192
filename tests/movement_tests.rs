use glam::{Vec2, Vec3};
use orbit_walker::config::AgentConfig;
use orbit_walker::math::AABB;
use orbit_walker::movement::{Intent, MotionState, MovementController, TrackedPosition};
use orbit_walker::obstacle::{ObstacleRegistry, ObstacleSpec};
use orbit_walker::scenes::Layout;

const DT: f32 = 1.0 / 60.0;

fn noop(_: Vec3) {}

#[cfg(test)]
mod blocked_goal_tests {
    use super::*;

    #[test]
    fn test_agent_halts_in_front_of_block() {
        let registry = ObstacleRegistry::from_specs(&[ObstacleSpec::new(
            [0.0, 0.5, -5.0],
            [2.0, 1.0, 2.0],
            "#ef4444",
        )]);
        let block = registry.obstacles()[0].bounds;
        let mut controller = MovementController::new(AgentConfig::default());
        let mut tracked = TrackedPosition::default();

        controller.set_intent(Intent::Goal(Vec3::new(0.0, 0.5, -10.0)));

        for frame in 0..600 {
            controller.update(DT, &registry, &mut tracked, &mut noop);
            let p = controller.position();
            assert!(
                !block.overlaps_xz(&AABB::new(p, Vec3::splat(0.5))),
                "Agent overlaps block at frame {}: {:?}",
                frame,
                p
            );
        }

        let p = controller.position();
        assert_eq!(p.x, 0.0, "Agent should not drift sideways");
        assert!(p.z > -3.5, "Front face must stay short of z = -4, got center {}", p.z);
        assert!(p.z < -3.3, "Agent should end up against the block, got center {}", p.z);
        assert_eq!(controller.state(), MotionState::Seeking, "Blocked agent keeps seeking");
    }

    #[test]
    fn test_blocked_agent_stops_notifying() {
        let registry = ObstacleRegistry::from_specs(&[ObstacleSpec::new(
            [0.0, 0.5, -5.0],
            [2.0, 1.0, 2.0],
            "#ef4444",
        )]);
        let mut controller = MovementController::new(AgentConfig::default());
        let mut tracked = TrackedPosition::default();
        controller.set_intent(Intent::Goal(Vec3::new(0.0, 0.5, -10.0)));

        for _ in 0..120 {
            controller.update(DT, &registry, &mut tracked, &mut noop);
        }

        let mut calls = 0;
        for _ in 0..60 {
            controller.update(DT, &registry, &mut tracked, &mut |_: Vec3| calls += 1);
        }
        assert_eq!(calls, 0, "No movement means no notifications");
    }
}

#[cfg(test)]
mod convergence_tests {
    use super::*;

    #[test]
    fn test_reaches_goal_exactly() {
        let registry = ObstacleRegistry::default().with_ground(25.0);
        let mut controller = MovementController::new(AgentConfig::default());
        let mut tracked = TrackedPosition::default();
        let goal = Vec3::new(7.0, 0.5, -4.0);

        controller.set_intent(Intent::Goal(goal));

        // ~8.06 units at 0.1 per frame
        let mut frames = 0;
        while controller.state() == MotionState::Seeking && frames < 100 {
            controller.update(DT, &registry, &mut tracked, &mut noop);
            frames += 1;
        }

        assert!(frames < 100, "Agent did not converge");
        assert_eq!(controller.position(), goal, "Agent should land exactly on the goal");
        assert_eq!(tracked.get(), Some(goal));
    }

    #[test]
    fn test_notifications_match_moving_frames() {
        let registry = ObstacleRegistry::default();
        let mut controller = MovementController::new(AgentConfig::default());
        let mut tracked = TrackedPosition::default();
        let mut seen = Vec::new();

        controller.set_intent(Intent::Goal(Vec3::new(-3.0, 0.0, 2.0)));

        let mut moving_frames = 0;
        for _ in 0..120 {
            if controller.update(DT, &registry, &mut tracked, &mut |p: Vec3| seen.push(p)) {
                moving_frames += 1;
            }
        }

        assert_eq!(seen.len(), moving_frames, "Exactly one notification per moving frame");
        assert_eq!(seen.last().copied(), Some(Vec3::new(-3.0, 0.5, 2.0)));
        assert!(seen.windows(2).all(|w| w[0] != w[1]), "Each notification is a new position");
    }
}

#[cfg(test)]
mod sliding_tests {
    use super::*;

    #[test]
    fn test_diagonal_into_wall_moves_one_axis() {
        // Wall face at x = 0.55, agent starts 0.05 away
        let registry = ObstacleRegistry::from_specs(&[ObstacleSpec::new(
            [1.55, 0.5, 0.0],
            [2.0, 1.0, 40.0],
            "#3b82f6",
        )]);
        let mut controller = MovementController::new(AgentConfig::default());
        let mut tracked = TrackedPosition::default();

        controller.set_intent(Intent::Direction(Vec2::new(1.0, 1.0)));

        for _ in 0..30 {
            let before = controller.position();
            assert!(controller.update(DT, &registry, &mut tracked, &mut noop));
            let after = controller.position();

            assert_eq!(after.x, before.x, "X is blocked by the wall");
            assert!(after.z > before.z, "Z slides along the wall");
            assert!(!registry.collides(after.x, after.z, 0.5));
        }
    }

    #[test]
    fn test_corner_blocks_both_axes() {
        let registry = ObstacleRegistry::from_specs(&[
            ObstacleSpec::new([1.55, 0.5, 0.0], [2.0, 1.0, 2.0], "#3b82f6"),
            ObstacleSpec::new([0.0, 0.5, 1.55], [2.0, 1.0, 2.0], "#3b82f6"),
        ]);
        let mut controller = MovementController::new(AgentConfig::default());
        let mut tracked = TrackedPosition::default();

        controller.set_intent(Intent::Direction(Vec2::new(1.0, 1.0)));

        assert!(!controller.update(DT, &registry, &mut tracked, &mut noop));
        assert_eq!(controller.position(), Vec3::new(0.0, 0.5, 0.0));
    }
}

#[cfg(test)]
mod invariant_tests {
    use super::*;

    #[test]
    fn test_never_enters_obstacles_or_leaves_ground() {
        let registry =
            ObstacleRegistry::from_specs(&Layout::Courtyard.obstacles()).with_ground(25.0);
        let mut controller = MovementController::new(AgentConfig::default());
        let mut tracked = TrackedPosition::default();

        for frame in 0..3000 {
            // Sweep the heading slowly so the agent tries every wall
            if frame % 90 == 0 {
                let angle = frame as f32 * 0.37;
                controller.set_intent(Intent::direction(Vec2::new(angle.cos(), angle.sin())));
            }
            controller.update(DT, &registry, &mut tracked, &mut noop);

            let p = controller.position();
            assert!(
                !registry.collides(p.x, p.z, 0.5),
                "Agent in contact at frame {}: {:?}",
                frame,
                p
            );
            assert_eq!(p.y, 0.5, "Agent height must stay pinned");
        }
    }

    #[test]
    fn test_direction_speed_is_independent_of_diagonal() {
        let registry = ObstacleRegistry::default();
        let mut straight = MovementController::new(AgentConfig::default());
        let mut diagonal = MovementController::new(AgentConfig::default());
        let mut tracked = TrackedPosition::default();

        straight.set_intent(Intent::direction(Vec2::new(0.0, -1.0)));
        diagonal.set_intent(Intent::direction(Vec2::new(1.0, -1.0)));
        straight.update(0.5, &registry, &mut tracked, &mut noop);
        diagonal.update(0.5, &registry, &mut tracked, &mut noop);

        let d_straight = straight.position().length_squared() - 0.25;
        let d_diagonal = diagonal.position().length_squared() - 0.25;
        assert!((d_straight - d_diagonal).abs() < 1e-4, "Diagonal movement should not be faster");
    }
}
