//! Validation for level layouts.

use std::collections::HashSet;

use super::data::LevelDef;
use crate::core::FINAL_LEVEL;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub level: u32,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Level {} has an invalid '{}': {}",
            self.level, self.field, self.message
        )
    }
}

/// Helper macro for recording a failed check
macro_rules! check {
    ($errors:expr, $cond:expr, $level:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                level: $level,
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

fn inside(level: &LevelDef, x: f32, y: f32) -> bool {
    (0.0..=level.width).contains(&x) && (0.0..=level.height).contains(&y)
}

/// Validate one level layout.
pub fn validate_level(level: &LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let n = level.number;

    check!(
        errors,
        (1..=FINAL_LEVEL).contains(&n),
        n,
        "number",
        "must be between 1 and {}",
        FINAL_LEVEL
    );
    check!(
        errors,
        level.width > 0.0 && level.height > 0.0,
        n,
        "size",
        "{}x{} is empty",
        level.width,
        level.height
    );
    check!(
        errors,
        inside(level, level.spawn.x, level.spawn.y),
        n,
        "spawn",
        "({}, {}) is outside the level",
        level.spawn.x,
        level.spawn.y
    );
    check!(
        errors,
        level.kill_y < level.ground_height,
        n,
        "kill_y",
        "{} is not below the ground at {}",
        level.kill_y,
        level.ground_height
    );
    // A level completes once every part is collected, so it needs at least one.
    check!(errors, !level.parts.is_empty(), n, "parts", "no robot parts placed");

    for (i, platform) in level.platforms.iter().enumerate() {
        check!(
            errors,
            platform.width > 0.0 && platform.height > 0.0,
            n,
            "platforms",
            "platform {} has no area",
            i
        );
    }
    for part in &level.parts {
        check!(
            errors,
            inside(level, part.x, part.y),
            n,
            "parts",
            "part at ({}, {}) is outside the level",
            part.x,
            part.y
        );
    }
    for enemy in &level.enemies {
        check!(
            errors,
            inside(level, enemy.x, enemy.y),
            n,
            "enemies",
            "enemy at ({}, {}) is outside the level",
            enemy.x,
            enemy.y
        );
    }
    for power_up in &level.power_ups {
        check!(
            errors,
            inside(level, power_up.x, power_up.y),
            n,
            "power_ups",
            "{:?} at ({}, {}) is outside the level",
            power_up.kind,
            power_up.x,
            power_up.y
        );
    }
    errors
}

/// Validate every level and check each number appears once.
/// Returns a list of validation errors, empty if all levels are valid.
pub fn validate_levels(levels: &[LevelDef]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for level in levels {
        check!(
            errors,
            seen.insert(level.number),
            level.number,
            "number",
            "defined more than once"
        );
        errors.extend(validate_level(level));
    }
    errors
}
