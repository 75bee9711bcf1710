//! Generation observability counters
//!
//! Bounded-retry placement that gives up is intended density variance,
//! not an error; the counters make it visible and testable.

use crate::world::Setting;

#[derive(Debug, Default, Clone)]
pub struct GenStats {
    /// Settlement placements abandoned after the retry budget ran out.
    pub abandoned_placements: u32,
    pub castles: u32,
    pub towns: u32,
    pub villages: u32,
    pub hamlets: u32,
    pub dungeons: u32,
}

impl GenStats {
    pub(crate) fn record_settlement(&mut self, setting: Setting) {
        match setting {
            Setting::Castle => self.castles += 1,
            Setting::Town => self.towns += 1,
            Setting::Village => self.villages += 1,
            Setting::Hamlet => self.hamlets += 1,
            Setting::Dungeon => self.dungeons += 1,
            Setting::Wilds | Setting::Safezone => {}
        }
    }

    pub fn communities(&self) -> u32 {
        self.towns + self.villages + self.hamlets
    }

    pub fn log_summary(&self) {
        tracing::info!(
            castles = self.castles,
            towns = self.towns,
            villages = self.villages,
            hamlets = self.hamlets,
            dungeons = self.dungeons,
            abandoned = self.abandoned_placements,
            "settlement layout complete"
        );
    }
}
