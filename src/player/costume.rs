//! Player domain: dragon costumes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostumeId {
    #[default]
    Default,
    Fire,
    Ice,
    Lightning,
    Shadow,
    Legendary,
}

impl CostumeId {
    pub const ALL: [CostumeId; 6] = [
        CostumeId::Default,
        CostumeId::Fire,
        CostumeId::Ice,
        CostumeId::Lightning,
        CostumeId::Shadow,
        CostumeId::Legendary,
    ];

    pub fn name(self) -> &'static str {
        self.variant().name
    }

    /// Unlock rule against the current progress.
    pub fn unlocked_by(self, level: u32, total_parts: usize, every_part_type: bool) -> bool {
        match self {
            CostumeId::Default => true,
            CostumeId::Fire => level >= 2,
            CostumeId::Ice => total_parts >= 5,
            CostumeId::Lightning => level >= 3,
            CostumeId::Shadow => level >= 4,
            CostumeId::Legendary => every_part_type,
        }
    }

    pub fn variant(self) -> CostumeVariant {
        match self {
            CostumeId::Default => CostumeVariant {
                name: "Default Gi",
                primary: Color::srgb_u8(0x4a, 0x9e, 0xff),
                belt: Color::srgb_u8(0x8b, 0x45, 0x13),
                effect: Color::srgb_u8(0x87, 0xce, 0xeb),
                wings: None,
                size_scale: 1.0,
            },
            CostumeId::Fire => CostumeVariant {
                name: "Fire Dragon",
                primary: Color::srgb_u8(0xff, 0x45, 0x00),
                belt: Color::srgb_u8(0xff, 0x00, 0x00),
                effect: Color::srgb_u8(0xff, 0x8c, 0x00),
                wings: Some(Color::srgb_u8(0xff, 0x63, 0x47)),
                size_scale: 1.0,
            },
            CostumeId::Ice => CostumeVariant {
                name: "Ice Dragon",
                primary: Color::srgb_u8(0x87, 0xce, 0xeb),
                belt: Color::srgb_u8(0x46, 0x82, 0xb4),
                effect: Color::srgb_u8(0xad, 0xd8, 0xe6),
                wings: Some(Color::srgb_u8(0xb0, 0xe0, 0xe6)),
                size_scale: 1.0,
            },
            CostumeId::Lightning => CostumeVariant {
                name: "Lightning Dragon",
                primary: Color::srgb_u8(0xff, 0xd7, 0x00),
                belt: Color::srgb_u8(0x8b, 0x00, 0x8b),
                effect: Color::srgb_u8(0xff, 0xff, 0x00),
                wings: Some(Color::srgb_u8(0xff, 0xd7, 0x00)),
                size_scale: 1.0,
            },
            CostumeId::Shadow => CostumeVariant {
                name: "Shadow Dragon",
                primary: Color::srgb_u8(0x4b, 0x00, 0x82),
                belt: Color::srgb_u8(0x00, 0x00, 0x00),
                effect: Color::srgb_u8(0x94, 0x00, 0xd3),
                wings: Some(Color::srgb_u8(0x2f, 0x1b, 0x3c)),
                size_scale: 1.0,
            },
            CostumeId::Legendary => CostumeVariant {
                name: "Legendary Mode",
                primary: Color::srgb_u8(0xff, 0xd7, 0x00),
                belt: Color::srgb_u8(0x8b, 0x45, 0x13),
                effect: Color::WHITE,
                wings: Some(Color::srgb_u8(0xff, 0x00, 0xff)),
                size_scale: 2.5,
            },
        }
    }
}

/// How a costume looks and how big it makes the player. Every costume goes
/// through the same spawn path; only these values differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostumeVariant {
    pub name: &'static str,
    pub primary: Color,
    pub belt: Color,
    pub effect: Color,
    pub wings: Option<Color>,
    /// Scales both the sprite and the hit box.
    pub size_scale: f32,
}

impl CostumeVariant {
    pub fn has_wings(&self) -> bool {
        self.wings.is_some()
    }
}
