use anyhow::{
    Error,
    Result,
};
use poketeam_data::{
    DataStore,
    Nature,
    Stat,
    StatTable,
};

/// IVs assumed when none are given: every stat at 31.
pub fn default_ivs() -> StatTable {
    StatTable::uniform(31)
}

/// EVs assumed when none are given: every stat at 0.
pub fn default_evs() -> StatTable {
    StatTable::default()
}

/// The multiplier a nature applies to a stat: 1.1, 1.0, or 0.9.
pub fn nature_modifier(nature: Nature, stat: Stat) -> f64 {
    nature.modifier(stat).multiplier()
}

/// The part of the stat formula shared by HP and all other stats.
///
/// Every division rounds toward negative infinity, so out-of-range input flows through the
/// formula unchanged instead of being clamped.
fn scaled_stat(base: i32, iv: i32, ev: i32, level: i32) -> i64 {
    let value = base as i64 * 2 + iv as i64 + (ev as i64).div_euclid(4);
    value.saturating_mul(level as i64).div_euclid(100)
}

fn saturate(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Computes the HP stat.
///
/// Natures never modify HP, so no nature is taken.
pub fn compute_hp(base: i32, iv: i32, ev: i32, level: i32) -> i32 {
    saturate(scaled_stat(base, iv, ev, level) + level as i64 + 10)
}

/// Computes a non-HP stat.
///
/// HP must go through [`compute_hp`], which uses a different formula.
pub fn compute_stat(base: i32, iv: i32, ev: i32, level: i32, nature: Nature, stat: Stat) -> i32 {
    let value = scaled_stat(base, iv, ev, level) + 5;
    saturate(nature.modifier(stat).apply(value))
}

/// Computes all six stats.
pub fn compute_all_stats(
    base_stats: &StatTable,
    ivs: &StatTable,
    evs: &StatTable,
    nature: Nature,
    level: i32,
) -> StatTable {
    base_stats
        .entries()
        .map(|(stat, base)| {
            let value = if stat.is_hp() {
                compute_hp(base, ivs.get(stat), evs.get(stat), level)
            } else {
                compute_stat(base, ivs.get(stat), evs.get(stat), level, nature, stat)
            };
            (stat, value)
        })
        .collect()
}

/// Calculates the stats of a species by looking up its base stats.
///
/// Missing IVs default to [`default_ivs`] and missing EVs to [`default_evs`].
pub fn calculate_stats(
    data: &dyn DataStore,
    species_id: u32,
    level: i32,
    nature: Nature,
    ivs: Option<&StatTable>,
    evs: Option<&StatTable>,
) -> Result<StatTable> {
    let species = data
        .get_species(species_id)?
        .ok_or_else(|| Error::msg(format!("species {species_id} not found")))?;
    Ok(compute_all_stats(
        &species.base_stats,
        ivs.unwrap_or(&default_ivs()),
        evs.unwrap_or(&default_evs()),
        nature,
        level,
    ))
}
