//! Level domain: unit tests for completion, bounds and the completion delay.

use super::*;
use crate::collectible::{PartType, Rarity};
use crate::content::LevelDef;
use crate::core::{Progress, ProgressSink};

#[test]
fn test_active_level_from_def() {
    let def = LevelDef::fallback(2);
    let level = ActiveLevel::from_def(&def);
    assert_eq!(level.number, 2);
    assert_eq!(level.parts_total, 5);
    assert_eq!(level.spawn, def.spawn.to_vec2());
}

#[test]
fn test_level_completes_when_every_part_is_collected() {
    let level = ActiveLevel::from_def(&LevelDef::fallback(1));
    let mut progress = Progress::default();
    progress.start_level();

    for i in 0..5 {
        assert!(!level.is_complete(progress.parts_this_level), "after {} parts", i);
        progress.add_inventory_item(PartType::ALL[i], Rarity::Common);
    }
    assert!(level.is_complete(progress.parts_this_level));
}

#[test]
fn test_level_without_parts_never_completes() {
    let mut def = LevelDef::fallback(1);
    def.parts.clear();
    let level = ActiveLevel::from_def(&def);
    assert!(!level.is_complete(0));
    assert!(!level.is_complete(3));
}

#[test]
fn test_out_of_bounds_below_kill_line() {
    let level = ActiveLevel::from_def(&LevelDef::fallback(1));
    assert!(!level.is_out_of_bounds(0.0));
    assert!(!level.is_out_of_bounds(-100.0));
    assert!(level.is_out_of_bounds(-100.5));
}

#[test]
fn test_completion_delay() {
    let mut timer = LevelCompleteTimer::default();
    assert!(!timer.tick(1.0));

    timer.start();
    assert!(!timer.tick(1.5));
    assert!(timer.tick(LEVEL_COMPLETE_DELAY - 1.5));
    assert!(!timer.tick(1.0));
}
