//! Professions and the spawn loadout table
//!
//! The place kind an NPC spawns in decides its profession, starting
//! weapon and purse through one static lookup table. Item and currency
//! catalogs live with external collaborators; the core only records the
//! kinds and coin counts they consume.

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::dice::{Dice, D2, D20, D4};
use crate::world::{PlaceKind, Setting};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profession {
    Innkeeper,
    Builder,
    Trader,
    Blacksmith,
    Farmer,
    Fisher,
    Hunter,
    Lumberjack,
    Miner,
    Bandit,
    Mage,
    Samurai,
    Daimyo,
    Cryptkeeper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponKind {
    Kunai,
    Otsuchi,
    Tonfa,
    Chigiriki,
    Kama,
    Jutte,
    Yumi,
    Ono,
    Kusari,
    Bo,
    Tanto,
    Katana,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArmorKind {
    Cloth,
}

/// Coin purse in the four denominations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purse {
    pub platinum: i32,
    pub gold: i32,
    pub silver: i32,
    pub copper: i32,
}

impl Purse {
    pub fn new(platinum: i32, gold: i32, silver: i32, copper: i32) -> Self {
        Self {
            platinum,
            gold,
            silver,
            copper,
        }
    }
}

/// One denomination's starting amount: nothing, a flat count, or a roll
#[derive(Debug, Clone, Copy)]
enum CoinRoll {
    Zero,
    Coins(i32),
    Roll(Dice),
}

impl CoinRoll {
    fn resolve(self, rng: &mut ChaCha8Rng) -> i32 {
        match self {
            CoinRoll::Zero => 0,
            CoinRoll::Coins(n) => n,
            CoinRoll::Roll(dice) => dice.roll(rng),
        }
    }
}

/// Static spawn descriptor for one profession
#[derive(Debug, Clone, Copy)]
pub struct Loadout {
    pub profession: Profession,
    pub weapon: WeaponKind,
    pub armor: ArmorKind,
    purse: [CoinRoll; 4], // platinum, gold, silver, copper
}

impl Loadout {
    pub fn roll_purse(&self, rng: &mut ChaCha8Rng) -> Purse {
        Purse::new(
            self.purse[0].resolve(rng),
            self.purse[1].resolve(rng),
            self.purse[2].resolve(rng),
            self.purse[3].resolve(rng),
        )
    }
}

use CoinRoll::{Coins, Roll, Zero};

const fn worker(profession: Profession, weapon: WeaponKind, purse: [CoinRoll; 4]) -> Loadout {
    Loadout {
        profession,
        weapon,
        armor: ArmorKind::Cloth,
        purse,
    }
}

static INNKEEPER: Loadout = worker(
    Profession::Innkeeper,
    WeaponKind::Kunai,
    [Zero, Coins(1), Zero, Zero],
);
static BUILDER: Loadout = worker(
    Profession::Builder,
    WeaponKind::Otsuchi,
    [Zero, Coins(1), Zero, Zero],
);
static TRADER: Loadout = worker(
    Profession::Trader,
    WeaponKind::Tonfa,
    [Coins(1), Zero, Zero, Zero],
);
static BLACKSMITH: Loadout = worker(
    Profession::Blacksmith,
    WeaponKind::Chigiriki,
    [Zero, Coins(1), Zero, Zero],
);
static FARMER: Loadout = worker(
    Profession::Farmer,
    WeaponKind::Kama,
    [Zero, Zero, Coins(1), Zero],
);
static FISHER: Loadout = worker(
    Profession::Fisher,
    WeaponKind::Jutte,
    [Zero, Zero, Coins(1), Zero],
);
static HUNTER: Loadout = worker(
    Profession::Hunter,
    WeaponKind::Yumi,
    [Zero, Zero, Coins(1), Zero],
);
static LUMBERJACK: Loadout = worker(
    Profession::Lumberjack,
    WeaponKind::Ono,
    [Zero, Zero, Coins(1), Zero],
);
static MINER: Loadout = worker(
    Profession::Miner,
    WeaponKind::Kusari,
    [Zero, Zero, Coins(1), Zero],
);
static BANDIT: Loadout = worker(
    Profession::Bandit,
    WeaponKind::Tanto,
    [Zero, Zero, Roll(D4), Roll(D20)],
);
static MAGE: Loadout = worker(
    Profession::Mage,
    WeaponKind::Bo,
    [Zero, Roll(D4), Roll(D20), Roll(D20)],
);
static SAMURAI: Loadout = worker(
    Profession::Samurai,
    WeaponKind::Katana,
    [Zero, Zero, Roll(D4), Roll(D20)],
);
static DAIMYO: Loadout = worker(
    Profession::Daimyo,
    WeaponKind::Katana,
    [Roll(D4), Roll(D20), Roll(D20), Roll(D20)],
);
static CRYPTKEEPER: Loadout = worker(
    Profession::Cryptkeeper,
    WeaponKind::Chigiriki,
    [Zero, Zero, Roll(D2), Roll(D20)],
);

/// Loadout for an NPC spawning at a place of the given kind, inside an
/// area of the given setting. None for kinds that never host a spawn.
///
/// Lodgings split innkeeper/builder 50/50; caves hide a mage on a
/// natural 20, dungeon rooms on 17+.
pub fn spawn_loadout(
    kind: PlaceKind,
    setting: Setting,
    rng: &mut ChaCha8Rng,
) -> Option<&'static Loadout> {
    match kind {
        PlaceKind::Lodging => Some(if D2.roll(rng) == 1 {
            &INNKEEPER
        } else {
            &BUILDER
        }),
        PlaceKind::Trader => Some(&TRADER),
        PlaceKind::Blacksmith => Some(&BLACKSMITH),
        PlaceKind::Farm => Some(&FARMER),
        PlaceKind::Fishery => Some(&FISHER),
        PlaceKind::Reserve => Some(&HUNTER),
        PlaceKind::Woodland => Some(&LUMBERJACK),
        PlaceKind::Mine => Some(&MINER),
        PlaceKind::Cave => Some(if D20.roll(rng) == 20 { &MAGE } else { &BANDIT }),
        PlaceKind::Indoors => match setting {
            Setting::Castle => Some(&SAMURAI),
            Setting::Dungeon => Some(if D20.roll(rng) > 16 { &MAGE } else { &BANDIT }),
            _ => None,
        },
        PlaceKind::ThroneRoom => Some(&DAIMYO),
        PlaceKind::Graveyard => Some(&CRYPTKEEPER),
        PlaceKind::Outdoors => None,
    }
}
