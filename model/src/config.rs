use crate::base_types::{Grams, KiloMeter, Minutes, Mode};

/// All tunables of the planner in one place. Historically these constants were
/// duplicated across modules with diverging values; they are single-sourced
/// here and can be overridden per instance via the json input.
pub struct Config {
    pub speeds: ConfigSpeeds,
    pub emissions: ConfigEmissions,
    pub penalties: ConfigPenalties,
    pub walking: ConfigWalking,
}

/// Average commercial speeds in km/h, used to derive travel times for edges
/// without a scheduled duration.
pub struct ConfigSpeeds {
    pub walk: f64,
    pub bus: f64,
    pub metro: f64,
}

/// CO2 emissions in grams per km per passenger. Walking and hub links emit
/// nothing.
pub struct ConfigEmissions {
    pub bus: Grams,
    pub metro: Grams,
}

pub struct ConfigPenalties {
    /// minutes added whenever consecutive edges differ in mode
    pub mode_change: Minutes,
    /// minutes added whenever consecutive edges carry different route ids
    pub line_change: Minutes,
    /// factor applied to the excess of a violated rider constraint
    pub violation_multiplier: f64,
}

pub struct ConfigWalking {
    /// catchment radius for connecting a query endpoint to nearby stops
    pub max_walk_distance: KiloMeter,
}

// methods
impl Config {
    pub fn speed(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Walk | Mode::Link => self.speeds.walk,
            Mode::Bus => self.speeds.bus,
            Mode::Metro => self.speeds.metro,
        }
    }

    pub fn emission_g_per_km(&self, mode: Mode) -> Grams {
        match mode {
            Mode::Walk | Mode::Link => 0.0,
            Mode::Bus => self.emissions.bus,
            Mode::Metro => self.emissions.metro,
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            speeds: ConfigSpeeds {
                walk: 4.5,
                bus: 18.0,
                metro: 30.0,
            },
            emissions: ConfigEmissions {
                bus: 109.9,
                metro: 40.0,
            },
            penalties: ConfigPenalties {
                mode_change: 5.0,
                line_change: 2.0,
                violation_multiplier: 100.0,
            },
            walking: ConfigWalking {
                max_walk_distance: 0.8,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walking_and_links_are_emission_free() {
        let config = Config::default();

        assert_eq!(config.emission_g_per_km(Mode::Walk), 0.0);
        assert_eq!(config.emission_g_per_km(Mode::Link), 0.0);
        assert!(config.emission_g_per_km(Mode::Bus) > 0.0);
        assert!(config.emission_g_per_km(Mode::Metro) > 0.0);
    }

    #[test]
    fn links_move_at_walking_speed() {
        let config = Config::default();

        assert_eq!(config.speed(Mode::Link), config.speeds.walk);
        assert!(config.speed(Mode::Metro) > config.speed(Mode::Bus));
    }
}
