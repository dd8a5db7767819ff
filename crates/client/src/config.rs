//! Simulation settings loaded from the environment.
use std::env;

use anyhow::{Context, Result, bail};
use siege_core::{ActionCommand, Coordinate};
use siege_runtime::{Resources, RuntimeConfig};

/// Match-level settings for one offline simulation.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub runtime: RuntimeConfig,
    pub turns: u32,
    pub starting: Resources,
    pub income: Resources,
    /// Raw commands replayed before the first turn.
    pub opening: Vec<ActionCommand>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            turns: 10,
            starting: Resources::new(40.0, 5.0),
            income: Resources::new(5.0, 5.0),
            opening: Vec::new(),
        }
    }
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// On top of the `SIEGE_*` session variables read by
    /// [`RuntimeConfig::from_env`]:
    /// - `SIEGE_TURNS` - Turns to simulate (default: 10)
    /// - `SIEGE_OPENING` - Opening commands, e.g. `FF:13:5,DF:14:5`
    ///
    /// # Errors
    ///
    /// Fails if `SIEGE_OPENING` is set but malformed.
    pub fn from_env() -> Result<Self> {
        let mut config = Self {
            runtime: RuntimeConfig::from_env(),
            ..Self::default()
        };

        if let Some(turns) = env::var("SIEGE_TURNS").ok().and_then(|raw| parse_turns(&raw)) {
            config.turns = turns;
        }
        if let Ok(raw) = env::var("SIEGE_OPENING") {
            config.opening = parse_opening(&raw).context("SIEGE_OPENING")?;
        }

        Ok(config)
    }
}

/// Parses a turn count, warning and falling back to the default when invalid.
fn parse_turns(raw: &str) -> Option<u32> {
    match raw.trim().parse() {
        Ok(turns) => Some(turns),
        Err(err) => {
            tracing::warn!("Ignoring invalid SIEGE_TURNS={:?}: {}", raw, err);
            None
        }
    }
}

/// Parses `CODE:x:y` entries separated by commas.
///
/// Unknown codes are kept as-is; they are reported when replayed.
pub fn parse_opening(raw: &str) -> Result<Vec<ActionCommand>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let parts: Vec<&str> = entry.split(':').map(str::trim).collect();
            let [code, x, y] = parts.as_slice() else {
                bail!("expected CODE:x:y, got '{}'", entry);
            };
            let x = x.parse().with_context(|| format!("bad x in '{}'", entry))?;
            let y = y.parse().with_context(|| format!("bad y in '{}'", entry))?;
            Ok(ActionCommand::new(*code, Coordinate::new(x, y)))
        })
        .collect()
}
