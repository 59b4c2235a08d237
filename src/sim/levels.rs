//! Level catalog
//!
//! Levels 1-5 are hand-authored tables. Levels 6-20 come from a parametric
//! generator driven by a difficulty scalar. Everything is a pure function of
//! the level number, so the catalog is identical on every build.

use glam::Vec3;

use super::state::{Level, Obstacle, Platform};
use crate::consts::LEVEL_COUNT;

/// Every level starts here
pub const START_POSITION: Vec3 = Vec3::new(-8.0, -1.5, 0.0);
/// Every level ends here
pub const END_POSITION: Vec3 = Vec3::new(8.0, 2.0, 0.0);

pub const PLATFORM_HEIGHT: f32 = 0.2;
pub const PLATFORM_DEPTH: f32 = 0.5;
pub const OBSTACLE_SIZE: Vec3 = Vec3::splat(0.3);

/// Generation stops once the cursor passes this x
const GENERATOR_X_LIMIT: f32 = 6.0;
const MAX_GENERATED_OBSTACLES: u32 = 8;

/// Gravity for a 1-based level number. Grows stronger with each level.
pub fn gravity_for_level(level_num: u32) -> f32 {
    -15.0 - level_num as f32 * 0.5
}

/// Generator difficulty in [0, 1]: 0 at level 5, 1 at level 20
pub fn difficulty_for_level(level_num: u32) -> f32 {
    ((level_num as f32 - 5.0) / 15.0).clamp(0.0, 1.0)
}

/// Travel of a hand-authored moving platform
#[derive(Debug, Clone, Copy)]
struct Motion {
    direction: Vec3,
    speed: f32,
    range: f32,
}

/// One row of a hand-authored platform table
#[derive(Debug, Clone, Copy)]
struct PlatformDef {
    x: f32,
    y: f32,
    width: f32,
    motion: Option<Motion>,
}

const fn fixed(x: f32, y: f32, width: f32) -> PlatformDef {
    PlatformDef { x, y, width, motion: None }
}

const fn moving(x: f32, y: f32, width: f32, direction: Vec3, speed: f32, range: f32) -> PlatformDef {
    PlatformDef {
        x,
        y,
        width,
        motion: Some(Motion { direction, speed, range }),
    }
}

/// A hand-authored level: platform rows plus spike positions
struct LevelDef {
    platforms: &'static [PlatformDef],
    spikes: &'static [[f32; 2]],
}

/// Level 1: straight staircase
const LEVEL_1: LevelDef = LevelDef {
    platforms: &[
        fixed(-8.0, -2.0, 2.0),
        fixed(-4.0, -1.0, 2.0),
        fixed(0.0, 0.0, 2.0),
        fixed(4.0, 1.0, 2.0),
        fixed(8.0, 2.0, 2.0),
    ],
    spikes: &[],
};

/// Level 2: narrower platforms, small gaps
const LEVEL_2: LevelDef = LevelDef {
    platforms: &[
        fixed(-8.0, -2.0, 1.5),
        fixed(-5.0, -1.0, 1.5),
        fixed(-2.0, 0.0, 1.5),
        fixed(1.0, 1.0, 1.5),
        fixed(4.0, 1.5, 1.5),
        fixed(7.0, 2.0, 2.0),
    ],
    spikes: &[],
};

/// Level 3: first spikes
const LEVEL_3: LevelDef = LevelDef {
    platforms: &[
        fixed(-8.0, -2.0, 1.5),
        fixed(-5.0, -1.0, 2.0),
        fixed(-1.0, 0.0, 2.0),
        fixed(3.0, 1.0, 2.0),
        fixed(7.0, 2.0, 2.0),
    ],
    spikes: &[[-4.0, -0.8], [0.0, 0.2]],
};

/// Level 4: first moving platforms
const LEVEL_4: LevelDef = LevelDef {
    platforms: &[
        fixed(-8.0, -2.0, 1.5),
        moving(-5.0, -1.0, 1.5, Vec3::Y, 1.0, 2.0),
        fixed(-1.0, 1.0, 1.5),
        moving(2.0, 0.5, 1.5, Vec3::X, 1.5, 2.5),
        fixed(7.0, 2.0, 2.0),
    ],
    spikes: &[[0.0, 1.2]],
};

/// Level 5: short platforms, up-and-down jumps
const LEVEL_5: LevelDef = LevelDef {
    platforms: &[
        fixed(-8.0, -2.0, 1.0),
        fixed(-6.0, -0.5, 1.0),
        fixed(-3.5, 0.5, 1.0),
        fixed(-1.0, -0.5, 1.0),
        fixed(1.5, 1.0, 1.0),
        fixed(4.0, 0.0, 1.0),
        fixed(7.0, 2.0, 1.5),
    ],
    spikes: &[[-2.5, 0.7], [2.5, 1.2]],
};

const AUTHORED_LEVELS: [LevelDef; 5] = [LEVEL_1, LEVEL_2, LEVEL_3, LEVEL_4, LEVEL_5];

fn platform_size(width: f32) -> Vec3 {
    Vec3::new(width, PLATFORM_HEIGHT, PLATFORM_DEPTH)
}

impl PlatformDef {
    fn build(&self) -> Platform {
        let position = Vec3::new(self.x, self.y, 0.0);
        let size = platform_size(self.width);
        match self.motion {
            Some(m) => Platform::moving(position, size, m.direction, m.speed, m.range),
            None => Platform::fixed(position, size),
        }
    }
}

impl LevelDef {
    fn build(&self, level: &mut Level) {
        level.platforms = self.platforms.iter().map(PlatformDef::build).collect();
        level.obstacles = self
            .spikes
            .iter()
            .map(|&[x, y]| Obstacle::spike(Vec3::new(x, y, 0.0), OBSTACLE_SIZE))
            .collect();
    }
}

/// Build the full catalog, in order
pub fn build_levels() -> Vec<Level> {
    let levels: Vec<Level> = (1..=LEVEL_COUNT as u32).map(build_level).collect();
    log::info!(
        "Built {} levels ({} moving platforms, {} obstacles)",
        levels.len(),
        levels
            .iter()
            .flat_map(|l| &l.platforms)
            .filter(|p| p.is_moving)
            .count(),
        levels.iter().map(|l| l.obstacles.len()).sum::<usize>(),
    );
    levels
}

/// Build a single level from its 1-based number
pub fn build_level(level_num: u32) -> Level {
    let mut level = Level {
        platforms: Vec::new(),
        obstacles: Vec::new(),
        start_position: START_POSITION,
        end_position: END_POSITION,
        gravity: gravity_for_level(level_num),
        level_number: level_num,
    };

    match AUTHORED_LEVELS.get(level_num.wrapping_sub(1) as usize) {
        Some(def) => def.build(&mut level),
        None => generate_level(level_num, &mut level),
    }

    log::trace!(
        "Level {}: {} platforms, {} obstacles, gravity {}",
        level_num,
        level.platforms.len(),
        level.obstacles.len(),
        level.gravity
    );
    level
}

/// Parametric layout for levels past the hand-authored set
fn generate_level(level_num: u32, level: &mut Level) {
    let difficulty = difficulty_for_level(level_num);
    let num_platforms = 5 + level_num / 3;
    let num_obstacles = (level_num / 2).min(MAX_GENERATED_OBSTACLES);

    // Narrower platforms and wider gaps as difficulty rises
    let width = 1.5 - difficulty * 0.5;
    let gap = 2.0 + difficulty * 2.0;

    let mut x = -8.0;
    let mut y = -2.0;

    for i in 0..num_platforms {
        let position = Vec3::new(x, y, 0.0);
        let platform = if level_num > 8 && i % 3 == 1 {
            // Horizontal on even slots, vertical on odd
            let direction = if i % 2 == 0 { Vec3::X } else { Vec3::Y };
            let speed = 1.0 + difficulty * 1.5;
            let range = 1.5 + difficulty * 1.0;
            Platform::moving(position, platform_size(width), direction, speed, range)
        } else {
            Platform::fixed(position, platform_size(width))
        };
        level.platforms.push(platform);

        x += gap + width;
        y += (i as f32 * 0.5).sin() * 1.5 * difficulty;

        if x > GENERATOR_X_LIMIT {
            break;
        }
    }

    // Goal platform under the end position
    level.platforms.push(Platform::fixed(
        Vec3::new(END_POSITION.x, END_POSITION.y, 0.0),
        platform_size(2.0),
    ));

    for i in 0..num_obstacles {
        // Height from a double-precision sine, narrowed once
        let y = (-1.0 + (i as f64).sin() * 2.0) as f32;
        let position = Vec3::new(-6.0 + i as f32 * 2.0, y, 0.0);
        let obstacle = if level_num > 12 && i % 2 == 0 {
            Obstacle::sliding_spike(position, OBSTACLE_SIZE, 2.0 + difficulty * 2.0)
        } else {
            Obstacle::spike(position, OBSTACLE_SIZE)
        };
        level.obstacles.push(obstacle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_numbering() {
        let levels = build_levels();
        assert_eq!(levels.len(), LEVEL_COUNT);
        for (i, level) in levels.iter().enumerate() {
            assert_eq!(level.level_number, i as u32 + 1);
            assert_eq!(level.start_position, START_POSITION);
            assert_eq!(level.end_position, END_POSITION);
        }
    }

    #[test]
    fn test_gravity_formula() {
        for level in build_levels() {
            let expected = -15.0 - 0.5 * level.level_number as f32;
            assert_eq!(level.gravity, expected);
        }
        assert_eq!(gravity_for_level(1), -15.5);
        assert_eq!(gravity_for_level(20), -25.0);
    }

    #[test]
    fn test_catalog_is_deterministic() {
        assert_eq!(build_levels(), build_levels());
    }

    #[test]
    fn test_difficulty_range() {
        assert_eq!(difficulty_for_level(5), 0.0);
        assert_eq!(difficulty_for_level(20), 1.0);
        assert_eq!(difficulty_for_level(1), 0.0);
        assert!((difficulty_for_level(11) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_level_one_layout() {
        let level = build_level(1);
        let xs: Vec<f32> = level.platforms.iter().map(|p| p.position.x).collect();
        assert_eq!(xs, vec![-8.0, -4.0, 0.0, 4.0, 8.0]);
        assert!(level.platforms.iter().all(|p| p.size == Vec3::new(2.0, 0.2, 0.5)));
        assert!(level.obstacles.is_empty());
    }

    #[test]
    fn test_spikes_start_at_level_three() {
        assert!(build_level(1).obstacles.is_empty());
        assert!(build_level(2).obstacles.is_empty());
        let level = build_level(3);
        assert_eq!(level.obstacles.len(), 2);
        assert!(level.obstacles.iter().all(|o| o.is_spike && !o.is_moving));
        assert_eq!(level.obstacles[0].size, OBSTACLE_SIZE);
    }

    #[test]
    fn test_moving_platforms_start_at_level_four() {
        for n in 1..=3 {
            assert!(build_level(n).platforms.iter().all(|p| !p.is_moving));
        }
        let level = build_level(4);
        let moving: Vec<&Platform> = level.platforms.iter().filter(|p| p.is_moving).collect();
        assert_eq!(moving.len(), 2);

        assert_eq!(moving[0].move_direction, Vec3::Y);
        assert_eq!(moving[0].move_speed, 1.0);
        assert_eq!(moving[0].move_range, 2.0);
        assert_eq!(moving[0].original_pos, Vec3::new(-5.0, -1.0, 0.0));

        assert_eq!(moving[1].move_direction, Vec3::X);
        assert_eq!(moving[1].move_speed, 1.5);
        assert_eq!(moving[1].move_range, 2.5);
        assert_eq!(moving[1].original_pos, Vec3::new(2.0, 0.5, 0.0));
    }

    #[test]
    fn test_static_platforms_have_no_motion() {
        for level in build_levels() {
            for p in level.platforms.iter().filter(|p| !p.is_moving) {
                assert_eq!(p.move_direction, Vec3::ZERO);
                assert_eq!(p.move_speed, 0.0);
                assert_eq!(p.move_range, 0.0);
            }
        }
    }

    #[test]
    fn test_generated_platform_bounds() {
        for n in 6..=LEVEL_COUNT as u32 {
            let level = build_level(n);
            let max_count = (5 + n / 3 + 1) as usize;
            assert!(
                level.platforms.len() <= max_count,
                "level {} has {} platforms",
                n,
                level.platforms.len()
            );

            let (terminal, generated) = level.platforms.split_last().unwrap();
            assert_eq!(terminal.position, Vec3::new(8.0, 2.0, 0.0));
            assert_eq!(terminal.size.x, 2.0);
            assert!(!terminal.is_moving);

            assert_eq!(generated[0].position, Vec3::new(-8.0, -2.0, 0.0));
            for p in generated {
                assert!(p.position.x <= GENERATOR_X_LIMIT, "level {} x={}", n, p.position.x);
            }
        }
    }

    #[test]
    fn test_generator_stops_at_right_edge() {
        // Level 20: width 1.0, gap 4.0, so x goes -8, -3, 2 and stops at 7
        let level = build_level(20);
        assert_eq!(level.platforms.len(), 4);
        assert!(level.platforms.len() < (5 + 20 / 3 + 1) as usize);
    }

    #[test]
    fn test_generated_moving_platforms() {
        // Moving platforms only past level 8, on every third slot
        for n in 6..=8 {
            assert!(build_level(n).platforms.iter().all(|p| !p.is_moving));
        }

        let level = build_level(9);
        let difficulty = difficulty_for_level(9);
        let p = &level.platforms[1];
        assert!(p.is_moving);
        assert_eq!(p.move_direction, Vec3::Y);
        assert_eq!(p.move_speed, 1.0 + difficulty * 1.5);
        assert_eq!(p.move_range, 1.5 + difficulty * 1.0);
        assert_eq!(p.original_pos, p.position);
        assert!(!level.platforms[0].is_moving);
        assert!(!level.platforms[2].is_moving);
    }

    #[test]
    fn test_generated_obstacles() {
        for n in 6..=LEVEL_COUNT as u32 {
            let level = build_level(n);
            assert_eq!(level.obstacles.len() as u32, (n / 2).min(8));
            for (i, o) in level.obstacles.iter().enumerate() {
                assert_eq!(o.position.x, -6.0 + i as f32 * 2.0);
                assert_eq!(o.position.y, (-1.0 + (i as f64).sin() * 2.0) as f32);
                assert!(o.is_spike);
                let should_move = n > 12 && i % 2 == 0;
                assert_eq!(o.is_moving, should_move, "level {} obstacle {}", n, i);
                if should_move {
                    assert_eq!(o.move_direction, Vec3::X);
                    assert_eq!(o.move_speed, 2.0 + difficulty_for_level(n) * 2.0);
                }
            }
        }
    }

    #[test]
    fn test_obstacle_heights_follow_sine() {
        let level = build_level(6);
        let ys: Vec<f32> = level.obstacles.iter().map(|o| o.position.y).collect();
        assert_eq!(ys[0], -1.0);
        assert!((ys[1] - 0.682_941_97).abs() < 1e-6);
        assert!((ys[2] - 0.818_594_85).abs() < 1e-6);
    }
}
