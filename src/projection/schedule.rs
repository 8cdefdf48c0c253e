use crate::models::Intervention;

/// Interventions resolved into the order they take effect.
///
/// Entries are stably sorted by period. When several share a period only the
/// first one in input order is kept; the rest are recorded as shadowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterventionSchedule {
    entries: Vec<Intervention>,
    shadowed: Vec<Intervention>,
}

impl InterventionSchedule {
    pub fn new(interventions: &[Intervention]) -> Self {
        let mut sorted = interventions.to_vec();
        // sort_by_key is stable, so ties keep their input order
        sorted.sort_by_key(|iv| iv.period);

        let mut entries: Vec<Intervention> = Vec::with_capacity(sorted.len());
        let mut shadowed = Vec::new();
        for iv in sorted {
            match entries.last() {
                Some(prev) if prev.period == iv.period => shadowed.push(iv),
                _ => entries.push(iv),
            }
        }

        Self { entries, shadowed }
    }

    /// Survival fraction that takes effect at the end of `period`, if any.
    pub fn survival_at(&self, period: u32) -> Option<f64> {
        self.entries
            .binary_search_by_key(&period, |iv| iv.period)
            .ok()
            .map(|i| self.entries[i].survival_fraction)
    }

    /// Effective interventions, one per period, ascending.
    pub fn entries(&self) -> &[Intervention] {
        &self.entries
    }

    /// Interventions ignored because an earlier one targets the same period.
    pub fn duplicates(&self) -> &[Intervention] {
        &self.shadowed
    }

    /// Effective interventions that a projection of `periods` never reaches.
    pub fn unreached(&self, periods: u32) -> Vec<Intervention> {
        self.entries
            .iter()
            .filter(|iv| iv.period == 0 || iv.period > periods)
            .copied()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
