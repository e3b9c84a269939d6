use rand::Rng;

use crate::domain::{
    recommendation::entities::RecommendedMenu,
    roulette::entities::{DAILY_MENU_KIND, RouletteEntry, SpinOutcome},
};

const FULL_TURNS: f64 = 5.0;

#[derive(Debug, Clone, Default)]
pub struct RouletteWheel {
    entries: Vec<RouletteEntry>,
}

impl RouletteWheel {
    pub fn new(entries: Vec<RouletteEntry>) -> Self {
        Self { entries }
    }

    pub fn from_recommendations(menus: &[RecommendedMenu]) -> Self {
        Self::new(menus.iter().map(RouletteEntry::from).collect())
    }

    /// Appends the daily recommendations, tagged as daily menus.
    pub fn with_daily(mut self, daily: &[RecommendedMenu]) -> Self {
        self.entries.extend(daily.iter().map(|menu| RouletteEntry {
            menu_name: menu
                .display_name
                .clone()
                .filter(|_| menu.menu_name.is_empty())
                .unwrap_or_else(|| menu.menu_name.clone()),
            kind: DAILY_MENU_KIND.to_string(),
            restaurant_name: menu.restaurant_name.clone(),
        }));
        self
    }

    pub fn entries(&self) -> &[RouletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn slice_degrees(&self) -> f64 {
        360.0 / self.entries.len() as f64
    }

    /// Picks an entry uniformly and computes where the wheel stops so the
    /// pointer lands in the middle of the chosen slice.
    pub fn spin<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        current_rotation: f64,
    ) -> Option<SpinOutcome> {
        if self.entries.is_empty() {
            return None;
        }

        let index = rng.gen_range(0..self.entries.len());
        Some(self.land_on(index, current_rotation))
    }

    fn land_on(&self, index: usize, current_rotation: f64) -> SpinOutcome {
        let slice = self.slice_degrees();
        let target = 360.0 * FULL_TURNS + (360.0 - (index as f64 * slice + slice / 2.0));

        SpinOutcome {
            index,
            entry: self.entries[index].clone(),
            rotation: current_rotation + target,
        }
    }
}
